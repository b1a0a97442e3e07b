use cn_core::{KeyedHash, NoiseError};

use crate::grid::Lattice;
use crate::worley::WorleyNoise;

/// Weight of the first octave. Each following octave gets half the previous weight.
const FIRST_WEIGHT: f64 = 0.5;

/// Lattices and weights of successive octaves.
///
/// Each step doubles frequency and repeat together, so `repeat` stays equal to
/// `frequency * tile_cells` at every octave.
#[derive(Clone, Debug)]
pub struct Octaves {
    next: Option<Lattice>,
    weight: f64,
    remaining: u32,
}

impl Octaves {
    /// Octave schedule for `levels` octaves starting at `base`.
    ///
    /// Fails up front if the schedule is empty or would overflow the lattice,
    /// so callers never see a partial sum.
    pub fn new(base: Lattice, levels: u32) -> Result<Self, NoiseError> {
        if levels == 0 {
            return Err(NoiseError::InvalidLevels(levels));
        }
        let mut last = base;
        for _ in 1..levels {
            last = last
                .doubled()
                .ok_or(NoiseError::OctaveOverflow { levels })?;
        }
        Ok(Self {
            next: Some(base),
            weight: FIRST_WEIGHT,
            remaining: levels,
        })
    }

    /// Largest octave count that fits above `base`.
    pub fn max_levels(base: Lattice) -> u32 {
        let mut levels = 1;
        let mut lattice = base;
        while let Some(next) = lattice.doubled() {
            lattice = next;
            levels += 1;
        }
        levels
    }
}

impl Iterator for Octaves {
    type Item = (Lattice, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let lattice = self.next?;
        let weight = self.weight;
        self.remaining -= 1;
        self.next = lattice.doubled();
        self.weight *= 0.5;
        Some((lattice, weight))
    }
}

impl<H: KeyedHash> WorleyNoise<H> {
    /// Fractal sum of 2D cellular noise over `levels` octaves.
    ///
    /// Octave weights are 0.5, 0.25, 0.125, ... and are not normalized, so the
    /// result is roughly `(1 - 0.5^levels)` times a single-octave value.
    pub fn fractal_2d(&self, point: [f64; 2], levels: u32) -> Result<f64, NoiseError> {
        let mut sum = 0.0;
        for (lattice, weight) in Octaves::new(self.lattice(), levels)? {
            sum += self.distance_2d_at(point, lattice) * weight;
        }
        Ok(sum)
    }

    /// Fractal sum of 3D cellular noise over `levels` octaves.
    pub fn fractal_3d(&self, point: [f64; 3], levels: u32) -> Result<f64, NoiseError> {
        let mut sum = 0.0;
        for (lattice, weight) in Octaves::new(self.lattice(), levels)? {
            sum += self.distance_3d_at(point, lattice) * weight;
        }
        Ok(sum)
    }
}

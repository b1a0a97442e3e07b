use bevy::log::warn;
use std::sync::atomic::{AtomicBool, Ordering};

use cn_core::{KeyedHash, NoiseError, NoiseStrategy, XxHash32};

use crate::fractal::Octaves;
use crate::worley::WorleyNoise;

/// Cellular noise behind the [`NoiseStrategy`] seam.
///
/// Output range: [0.0, ~1.0], distance to the nearest feature point.
/// One effective level returns the raw distance. More levels return the
/// fractal sum, with `detail_level` adding octaves on top of `levels`.
pub struct CellularStrategy<H: KeyedHash = XxHash32> {
    noise: WorleyNoise<H>,
    levels: u32,
    max_levels: u32,
    /// Set on the first clamped request so the warning is logged once.
    clamped: AtomicBool,
}

impl<H: KeyedHash> CellularStrategy<H> {
    pub fn new(noise: WorleyNoise<H>, levels: u32) -> Result<Self, NoiseError> {
        let max_levels = Octaves::max_levels(noise.lattice());
        if levels == 0 {
            return Err(NoiseError::InvalidLevels(levels));
        }
        if levels > max_levels {
            return Err(NoiseError::OctaveOverflow { levels });
        }
        Ok(Self {
            noise,
            levels,
            max_levels,
            clamped: AtomicBool::new(false),
        })
    }

    pub fn noise(&self) -> &WorleyNoise<H> {
        &self.noise
    }

    pub fn levels(&self) -> u32 {
        self.levels
    }

    /// Whether any request has been clamped to the deepest valid octave.
    pub fn has_clamped(&self) -> bool {
        self.clamped.load(Ordering::Relaxed)
    }

    /// Sample a 3D point with the same level policy as [`NoiseStrategy::generate`].
    pub fn generate_3d(&self, point: [f64; 3], detail_level: u32) -> f64 {
        let levels = self.effective_levels(detail_level);
        if levels == 1 {
            return self.noise.distance_3d(point);
        }
        self.noise.fractal_3d(point, levels).unwrap_or(0.0)
    }

    fn effective_levels(&self, detail_level: u32) -> u32 {
        let requested = self.levels.saturating_add(detail_level);
        if requested > self.max_levels {
            if !self.clamped.swap(true, Ordering::Relaxed) {
                warn!(
                    "Cellular strategy clamped {} octaves to {}",
                    requested, self.max_levels
                );
            }
            return self.max_levels;
        }
        requested
    }
}

impl<H: KeyedHash> NoiseStrategy for CellularStrategy<H> {
    fn generate(&self, x: f64, y: f64, detail_level: u32) -> f64 {
        let levels = self.effective_levels(detail_level);
        if levels == 1 {
            return self.noise.distance_2d([x, y]);
        }
        // Levels are clamped to the valid range above, so this cannot fail.
        self.noise.fractal_2d([x, y], levels).unwrap_or(0.0)
    }

    fn name(&self) -> &'static str {
        "Cellular"
    }
}

use bevy::log::debug;
use bevy::prelude::Resource;
use cn_core::{NoiseConfig, NoiseError, NoiseStrategy};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::fractal::Octaves;
use crate::grid::Lattice;
use crate::progress::FieldProgress;
use crate::strategy::CellularStrategy;
use crate::worley::WorleyNoise;

/// Dimensionality of a sampled field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Dimensions {
    #[default]
    Two,
    /// A 2D slice through 3D noise at `FieldSettings::z_slice`.
    Three,
}

/// Parameters for sampling a square noise field over one unit of input space.
#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSettings {
    pub dimensions: Dimensions,
    /// Samples per side.
    pub resolution: u32,
    pub frequency: u32,
    pub tile_cells: u32,
    pub seed: u32,
    /// Octave count. One level samples the raw distance.
    pub levels: u32,
    /// Z coordinate of the slice when sampling 3D noise.
    pub z_slice: f64,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::Two,
            resolution: 64,
            frequency: 10,
            tile_cells: 1,
            seed: 0,
            levels: 1,
            z_slice: 0.0,
        }
    }
}

impl FieldSettings {
    /// Check every parameter and return the engine configuration they describe.
    pub fn validate(&self) -> Result<NoiseConfig, NoiseError> {
        if self.resolution == 0 {
            return Err(NoiseError::ZeroResolution);
        }
        let config = NoiseConfig::new(self.frequency, self.tile_cells, self.seed)?;
        Octaves::new(Lattice::from_config(&config), self.levels)?;
        Ok(config)
    }
}

/// Summary statistics of a sampled field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// A square grid of noise samples stored row-major.
#[derive(Resource, Clone, Debug, Default)]
pub struct NoiseField {
    pub resolution: usize,
    pub dimensions: Dimensions,
    pub values: Vec<f64>,
}

impl NoiseField {
    /// Sample the field described by `settings`, one rayon task per row.
    ///
    /// Sample `(ix, iy)` is taken at `(ix / resolution, iy / resolution)`, so
    /// with `tile_cells = 1` the field covers exactly one tile.
    pub fn generate(
        settings: &FieldSettings,
        progress: Option<&FieldProgress>,
    ) -> Result<Self, NoiseError> {
        let config = settings.validate()?;
        let noise = WorleyNoise::from_config(config);
        let strategy = CellularStrategy::new(noise, settings.levels)?;
        let resolution = settings.resolution as usize;
        let scale = 1.0 / f64::from(settings.resolution);

        let rows: Vec<Vec<f64>> = (0..resolution)
            .into_par_iter()
            .map(|iy| {
                let y = scale * iy as f64;
                let row: Vec<f64> = (0..resolution)
                    .map(|ix| {
                        let x = scale * ix as f64;
                        match settings.dimensions {
                            Dimensions::Two => strategy.generate(x, y, 0),
                            Dimensions::Three => {
                                strategy.generate_3d([x, y, settings.z_slice], 0)
                            }
                        }
                    })
                    .collect();
                if let Some(progress) = progress {
                    progress.increment(1);
                }
                row
            })
            .collect();

        debug!(
            "Sampled {}x{} {:?} field ({} levels)",
            resolution, resolution, settings.dimensions, settings.levels
        );

        Ok(Self {
            resolution,
            dimensions: settings.dimensions,
            values: rows.concat(),
        })
    }

    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.values[y * self.resolution + x]
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Min, max and mean of all samples, or `None` for an empty field.
    pub fn stats(&self) -> Option<FieldStats> {
        if self.values.is_empty() {
            return None;
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for &v in &self.values {
            min = min.min(v);
            max = max.max(v);
            sum += v;
        }
        Some(FieldStats {
            min,
            max,
            mean: sum / self.values.len() as f64,
        })
    }
}

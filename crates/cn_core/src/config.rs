use serde::{Deserialize, Serialize};

use crate::NoiseError;

/// Immutable parameters of a cellular noise instance.
///
/// Built only through [`NoiseConfig::new`], so a value of this type always has
/// a non-zero repeat period that fits the cell id range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawNoiseConfig")]
pub struct NoiseConfig {
    frequency: u32,
    tile_cells: u32,
    seed: u32,
}

/// Unvalidated form used for deserialization.
#[derive(Deserialize)]
struct RawNoiseConfig {
    frequency: u32,
    tile_cells: u32,
    #[serde(default)]
    seed: u32,
}

impl TryFrom<RawNoiseConfig> for NoiseConfig {
    type Error = NoiseError;

    fn try_from(raw: RawNoiseConfig) -> Result<Self, Self::Error> {
        Self::new(raw.frequency, raw.tile_cells, raw.seed)
    }
}

impl NoiseConfig {
    /// Create a validated configuration.
    ///
    /// # Arguments
    /// * `frequency` - Grid cells per unit of input space (>= 1)
    /// * `tile_cells` - Tiling period in cells (>= 1)
    /// * `seed` - Decorrelates instances sharing the same hash
    pub fn new(frequency: u32, tile_cells: u32, seed: u32) -> Result<Self, NoiseError> {
        if frequency == 0 {
            return Err(NoiseError::ZeroFrequency);
        }
        if tile_cells == 0 {
            return Err(NoiseError::ZeroTileCells);
        }
        match frequency.checked_mul(tile_cells) {
            Some(repeat) if repeat <= i32::MAX as u32 => {}
            _ => {
                return Err(NoiseError::RepeatOverflow {
                    frequency,
                    tile_cells,
                })
            }
        }
        Ok(Self {
            frequency,
            tile_cells,
            seed,
        })
    }

    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    pub fn tile_cells(&self) -> u32 {
        self.tile_cells
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Number of cells after which the pattern repeats.
    pub fn repeat(&self) -> u32 {
        self.frequency * self.tile_cells
    }

    /// Length of one tile in input space.
    ///
    /// The grid wraps every `repeat` cells and there are `frequency` cells per
    /// unit, so the pattern repeats every `tile_cells` units.
    pub fn tile_size(&self) -> f64 {
        f64::from(self.tile_cells)
    }

    /// Same grid with a different seed.
    pub fn with_seed(self, seed: u32) -> Self {
        Self { seed, ..self }
    }
}

/// Error type for noise configuration and evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseError {
    /// Frequency must be at least one cell per unit.
    ZeroFrequency,
    /// Tile period must be at least one cell.
    ZeroTileCells,
    /// `frequency * tile_cells` does not fit the cell id range.
    RepeatOverflow { frequency: u32, tile_cells: u32 },
    /// Fractal evaluation needs at least one octave.
    InvalidLevels(u32),
    /// Doubling the lattice for this many octaves overflows the cell id range.
    OctaveOverflow { levels: u32 },
    /// A sampled field needs at least one sample per side.
    ZeroResolution,
}

impl std::fmt::Display for NoiseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroFrequency => write!(f, "frequency must be at least 1"),
            Self::ZeroTileCells => write!(f, "tile cells must be at least 1"),
            Self::RepeatOverflow {
                frequency,
                tile_cells,
            } => write!(
                f,
                "repeat period {} x {} overflows the cell id range",
                frequency, tile_cells
            ),
            Self::InvalidLevels(levels) => {
                write!(f, "fractal levels must be at least 1, got {}", levels)
            }
            Self::OctaveOverflow { levels } => {
                write!(f, "{} octaves overflow the cell id range", levels)
            }
            Self::ZeroResolution => write!(f, "field resolution must be at least 1"),
        }
    }
}

impl std::error::Error for NoiseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            NoiseError::InvalidLevels(0).to_string(),
            "fractal levels must be at least 1, got 0"
        );
        let msg = NoiseError::RepeatOverflow {
            frequency: 70_000,
            tile_cells: 70_000,
        }
        .to_string();
        assert!(msg.contains("70000 x 70000"), "unexpected message: {}", msg);
    }
}

use cn_core::{hash01, CellCoord2, CellCoord3, KeyedHash, NoiseConfig};

/// Axis selectors added to the seed so each axis draws its own hash stream.
const AXIS_X: u32 = 0;
const AXIS_Y: u32 = 1;
const AXIS_Z: u32 = 2;

/// Largest cell index a floored coordinate is clamped to. Keeps neighbour
/// offsets from overflowing and stays exactly representable as `f64`.
const MAX_CELL: i64 = 1 << 53;

/// Floor a cell-space coordinate into the usable cell range.
#[inline]
fn floor_cell(v: f64) -> i64 {
    (v.floor() as i64).clamp(-MAX_CELL, MAX_CELL)
}

/// The grid of one octave: cells per unit and the wraparound period in cells.
///
/// Passed by value into the neighbour search so that octaves never touch the
/// engine's own configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lattice {
    frequency: u32,
    repeat: u32,
}

impl Lattice {
    /// Base lattice of a configuration.
    pub fn from_config(config: &NoiseConfig) -> Self {
        Self {
            frequency: config.frequency(),
            repeat: config.repeat(),
        }
    }

    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    pub fn repeat(&self) -> u32 {
        self.repeat
    }

    /// Lattice of the next octave, or `None` if it leaves the cell id range.
    pub fn doubled(&self) -> Option<Self> {
        let frequency = self.frequency.checked_mul(2)?;
        let repeat = self.repeat.checked_mul(2)?;
        if repeat > i32::MAX as u32 {
            return None;
        }
        Some(Self { frequency, repeat })
    }

    /// Wrap a cell coordinate into `[0, repeat)`.
    #[inline]
    pub fn wrap(&self, i: i64) -> i64 {
        i.rem_euclid(i64::from(self.repeat))
    }

    /// Linear id of a wrapped 2D cell, truncated to the hash key width.
    ///
    /// Arithmetic wraps, so only the low 32 bits of the true id matter.
    #[inline]
    pub fn cell_id_2d(&self, cell: CellCoord2) -> u32 {
        let repeat = i64::from(self.repeat);
        self.wrap(cell.y)
            .wrapping_mul(repeat)
            .wrapping_add(self.wrap(cell.x)) as u32
    }

    /// Linear id of a wrapped 3D cell, truncated to the hash key width.
    #[inline]
    pub fn cell_id_3d(&self, cell: CellCoord3) -> u32 {
        let repeat = i64::from(self.repeat);
        self.wrap(cell.z)
            .wrapping_mul(repeat)
            .wrapping_add(self.wrap(cell.y))
            .wrapping_mul(repeat)
            .wrapping_add(self.wrap(cell.x)) as u32
    }

    /// Scale a point into cell space and find the cell containing it.
    #[inline]
    pub fn cell_of_2d(&self, point: [f64; 2]) -> (CellCoord2, [f64; 2]) {
        let f = f64::from(self.frequency);
        let scaled = [point[0] * f, point[1] * f];
        let cell = CellCoord2::new(floor_cell(scaled[0]), floor_cell(scaled[1]));
        (cell, scaled)
    }

    #[inline]
    pub fn cell_of_3d(&self, point: [f64; 3]) -> (CellCoord3, [f64; 3]) {
        let f = f64::from(self.frequency);
        let scaled = [point[0] * f, point[1] * f, point[2] * f];
        let cell = CellCoord3::new(
            floor_cell(scaled[0]),
            floor_cell(scaled[1]),
            floor_cell(scaled[2]),
        );
        (cell, scaled)
    }

    /// Feature point of a 2D cell, in cell space.
    ///
    /// The hash is taken from the wrapped id but added to the unwrapped cell, so
    /// neighbouring tile copies place identical points one period apart.
    #[inline]
    pub fn feature_point_2d<H: KeyedHash + ?Sized>(
        &self,
        hash: &H,
        seed: u32,
        cell: CellCoord2,
    ) -> [f64; 2] {
        let id = self.cell_id_2d(cell);
        [
            cell.x as f64 + hash01(hash, id, seed.wrapping_add(AXIS_X)),
            cell.y as f64 + hash01(hash, id, seed.wrapping_add(AXIS_Y)),
        ]
    }

    /// Feature point of a 3D cell, in cell space.
    #[inline]
    pub fn feature_point_3d<H: KeyedHash + ?Sized>(
        &self,
        hash: &H,
        seed: u32,
        cell: CellCoord3,
    ) -> [f64; 3] {
        let id = self.cell_id_3d(cell);
        [
            cell.x as f64 + hash01(hash, id, seed.wrapping_add(AXIS_X)),
            cell.y as f64 + hash01(hash, id, seed.wrapping_add(AXIS_Y)),
            cell.z as f64 + hash01(hash, id, seed.wrapping_add(AXIS_Z)),
        ]
    }
}

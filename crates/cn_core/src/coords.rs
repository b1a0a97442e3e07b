/// Integer cell position on a 2D noise lattice.
///
/// Coordinates are unwrapped: a cell one tile to the right of `(0, 0)` is
/// `(repeat, 0)`, not `(0, 0)`. Wrapping only happens when a cell id is built.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Debug, Default)]
pub struct CellCoord2 {
    pub x: i64,
    pub y: i64,
}

impl CellCoord2 {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Cell shifted by the given offset.
    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Integer cell position on a 3D noise lattice.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Debug, Default)]
pub struct CellCoord3 {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl CellCoord3 {
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    pub const fn offset(self, dx: i64, dy: i64, dz: i64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_moves_each_axis() {
        let cell = CellCoord3::new(-1, 0, 5).offset(1, -1, 2);
        assert_eq!(cell, CellCoord3::new(0, -1, 7));
        assert_eq!(CellCoord2::new(3, 4).offset(-3, -5), CellCoord2::new(0, -1));
    }
}

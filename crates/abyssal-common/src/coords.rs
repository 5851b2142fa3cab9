//! Coordinate types for the cell grid and the terrain super-cell grid.

use serde::{Deserialize, Serialize};

/// Coordinate of a spawn cell on the fixed-size world grid.
///
/// Cells tile the horizontal (XZ) plane; the vertical axis is not
/// partitioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellCoord {
    /// X coordinate in cell units
    pub x: i32,
    /// Z coordinate in cell units
    pub z: i32,
}

impl CellCoord {
    /// Creates a new cell coordinate.
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Converts a world position into the coordinate of the containing
    /// cell, using floor division so negative positions land in the
    /// correct cell.
    #[must_use]
    pub fn from_world(x: f64, z: f64, cell_size: f64) -> Self {
        Self {
            x: (x / cell_size).floor() as i32,
            z: (z / cell_size).floor() as i32,
        }
    }

    /// Returns the world-space position of this cell's minimum corner.
    #[must_use]
    pub fn to_world(self, cell_size: f64) -> (f64, f64) {
        (f64::from(self.x) * cell_size, f64::from(self.z) * cell_size)
    }

    /// Chebyshev (chessboard) distance to another cell.
    ///
    /// A view radius of `r` under this metric is a square
    /// `(2r+1) x (2r+1)` neighborhood.
    #[must_use]
    pub fn chebyshev_distance(self, other: Self) -> u32 {
        let dx = (self.x - other.x).unsigned_abs();
        let dz = (self.z - other.z).unsigned_abs();
        dx.max(dz)
    }

    /// Iterates over every cell within `radius` of this one under the
    /// Chebyshev metric, including this cell itself.
    pub fn neighborhood(self, radius: u32) -> impl Iterator<Item = Self> {
        let r = radius as i32;
        (-r..=r).flat_map(move |dx| (-r..=r).map(move |dz| Self::new(self.x + dx, self.z + dz)))
    }
}

/// Snaps a world coordinate down onto a grid of the given spacing.
///
/// Used to reposition the terrain patch whenever the submarine crosses
/// into a new super-cell: `snap_to_grid(130.0, 125.0) == 125.0`,
/// `snap_to_grid(-1.0, 125.0) == -125.0`.
#[must_use]
pub fn snap_to_grid(value: f64, grid: f64) -> f64 {
    (value / grid).floor() * grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_world_positive() {
        assert_eq!(CellCoord::from_world(0.0, 0.0, 100.0), CellCoord::new(0, 0));
        assert_eq!(
            CellCoord::from_world(99.9, 100.0, 100.0),
            CellCoord::new(0, 1)
        );
        assert_eq!(
            CellCoord::from_world(250.0, 310.0, 100.0),
            CellCoord::new(2, 3)
        );
    }

    #[test]
    fn test_from_world_negative_floors() {
        // -0.1 is inside cell -1, not cell 0
        assert_eq!(
            CellCoord::from_world(-0.1, -100.0, 100.0),
            CellCoord::new(-1, -1)
        );
        assert_eq!(
            CellCoord::from_world(-100.1, 0.0, 100.0),
            CellCoord::new(-2, 0)
        );
    }

    #[test]
    fn test_to_world_round_trip() {
        let cell = CellCoord::new(-3, 7);
        let (wx, wz) = cell.to_world(100.0);
        assert_eq!(CellCoord::from_world(wx, wz, 100.0), cell);
    }

    #[test]
    fn test_chebyshev_distance() {
        let a = CellCoord::new(2, 2);
        assert_eq!(a.chebyshev_distance(CellCoord::new(2, 2)), 0);
        assert_eq!(a.chebyshev_distance(CellCoord::new(3, 2)), 1);
        assert_eq!(a.chebyshev_distance(CellCoord::new(1, 3)), 1);
        assert_eq!(a.chebyshev_distance(CellCoord::new(-1, 4)), 3);
    }

    #[test]
    fn test_neighborhood_radius_one() {
        let cells: Vec<_> = CellCoord::new(2, 2).neighborhood(1).collect();
        assert_eq!(cells.len(), 9);
        for x in 1..=3 {
            for z in 1..=3 {
                assert!(cells.contains(&CellCoord::new(x, z)));
            }
        }
    }

    #[test]
    fn test_neighborhood_radius_zero() {
        let cells: Vec<_> = CellCoord::new(-5, 9).neighborhood(0).collect();
        assert_eq!(cells, vec![CellCoord::new(-5, 9)]);
    }

    #[test]
    fn test_snap_to_grid() {
        assert_eq!(snap_to_grid(0.0, 125.0), 0.0);
        assert_eq!(snap_to_grid(130.0, 125.0), 125.0);
        assert_eq!(snap_to_grid(124.9, 125.0), 0.0);
        assert_eq!(snap_to_grid(-1.0, 125.0), -125.0);
    }

    proptest::proptest! {
        #[test]
        fn prop_world_position_maps_into_owning_cell(
            x in -10_000.0..10_000.0_f64,
            z in -10_000.0..10_000.0_f64,
        ) {
            let cell = CellCoord::from_world(x, z, 100.0);
            let (min_x, min_z) = cell.to_world(100.0);
            proptest::prop_assert!(min_x <= x && x < min_x + 100.0);
            proptest::prop_assert!(min_z <= z && z < min_z + 100.0);
        }

        #[test]
        fn prop_chebyshev_is_symmetric(
            ax in -1000..1000_i32, az in -1000..1000_i32,
            bx in -1000..1000_i32, bz in -1000..1000_i32,
        ) {
            let a = CellCoord::new(ax, az);
            let b = CellCoord::new(bx, bz);
            proptest::prop_assert_eq!(a.chebyshev_distance(b), b.chebyshev_distance(a));
        }
    }
}

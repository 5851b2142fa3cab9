//! Coarse terrain patch for cheap approximate height lookup.
//!
//! A single fixed-resolution grid of precomputed heights backs the
//! rendered seafloor mesh and the submarine's float-height queries. The
//! grid is sampled once at construction and only ever *repositioned* as
//! the submarine moves between 125-unit super-cells; the stored heights
//! are never rewritten. Lookups are an intentionally cheap approximation
//! of the analytic height formula and must never fail: indices are
//! clamped onto the grid and missing neighbors default to height 0.

use abyssal_common::coords::snap_to_grid;
use tracing::debug;

use crate::noise_field::NoiseField;

/// Nodes per side of the patch grid.
pub const PATCH_NODES: usize = 6;

/// World-space extent of the patch along each axis.
pub const PATCH_SPAN: f64 = 125.0;

/// Spacing between adjacent grid nodes.
const SEGMENT: f64 = PATCH_SPAN / (PATCH_NODES as f64 - 1.0);

/// Half of the patch span; the patch is centered on its origin.
const HALF_SPAN: f64 = PATCH_SPAN / 2.0;

/// A 6x6 grid of precomputed seafloor heights covering a 125x125-unit
/// square centered on a movable origin.
#[derive(Debug, Clone)]
pub struct TerrainPatch {
    /// Precomputed node heights, row-major by Z then X. Written only
    /// during construction.
    heights: [f64; PATCH_NODES * PATCH_NODES],
    /// World-space center of the patch, snapped to the super-cell grid.
    origin_x: f64,
    origin_z: f64,
}

impl TerrainPatch {
    /// Generates the patch from the given noise field.
    ///
    /// Node heights are sampled in patch-local coordinates, so the
    /// rendered seafloor keeps the same silhouette wherever the patch
    /// is repositioned.
    #[must_use]
    pub fn generate(field: &NoiseField) -> Self {
        let mut heights = [0.0; PATCH_NODES * PATCH_NODES];
        for row in 0..PATCH_NODES {
            for col in 0..PATCH_NODES {
                let local_x = col as f64 * SEGMENT - HALF_SPAN;
                let local_z = row as f64 * SEGMENT - HALF_SPAN;
                heights[row * PATCH_NODES + col] =
                    field.sample2(local_x / 25.0, local_z / 25.0) * 5.0;
            }
        }
        Self {
            heights,
            origin_x: 0.0,
            origin_z: 0.0,
        }
    }

    /// Returns the current patch origin (center).
    #[must_use]
    pub const fn origin(&self) -> (f64, f64) {
        (self.origin_x, self.origin_z)
    }

    /// Returns the stored height at a grid node, or 0 if the indices
    /// fall outside the grid.
    #[must_use]
    pub fn node_height(&self, col: usize, row: usize) -> f64 {
        if col >= PATCH_NODES || row >= PATCH_NODES {
            return 0.0;
        }
        self.heights
            .get(row * PATCH_NODES + col)
            .copied()
            .unwrap_or(0.0)
    }

    /// Repositions the patch so it covers the super-cell containing
    /// `(x, z)`. Heights are left untouched.
    pub fn update_position(&mut self, x: f64, z: f64) {
        let new_x = snap_to_grid(x, PATCH_SPAN);
        let new_z = snap_to_grid(z, PATCH_SPAN);
        if (new_x - self.origin_x).abs() > f64::EPSILON
            || (new_z - self.origin_z).abs() > f64::EPSILON
        {
            debug!(
                from = ?(self.origin_x, self.origin_z),
                to = ?(new_x, new_z),
                "terrain patch repositioned"
            );
            self.origin_x = new_x;
            self.origin_z = new_z;
        }
    }

    /// Approximate height at a world position via bilinear interpolation
    /// of the four surrounding grid nodes.
    ///
    /// Queries outside the patch footprint are clamped to the nearest
    /// grid node, so this never fails and never indexes out of bounds.
    /// At an exact grid node the stored height is returned unchanged.
    #[must_use]
    pub fn get_height(&self, x: f64, z: f64) -> f64 {
        let max_index = PATCH_NODES as f64 - 1.0;
        // Patch-local node coordinates in [0, 5], clamped for
        // out-of-footprint queries.
        let tx = ((x - self.origin_x + HALF_SPAN) / SEGMENT).clamp(0.0, max_index);
        let tz = ((z - self.origin_z + HALF_SPAN) / SEGMENT).clamp(0.0, max_index);

        let col = (tx.floor() as usize).min(PATCH_NODES - 1);
        let row = (tz.floor() as usize).min(PATCH_NODES - 1);
        let fx = tx - col as f64;
        let fz = tz - row as f64;

        let h00 = self.node_height(col, row);
        if fx == 0.0 && fz == 0.0 {
            return h00;
        }

        let h10 = self.node_height(col + 1, row);
        let h01 = self.node_height(col, row + 1);
        let h11 = self.node_height(col + 1, row + 1);

        let low = h00 + fx * (h10 - h00);
        let high = h01 + fx * (h11 - h01);
        low + fz * (high - low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn patch() -> TerrainPatch {
        TerrainPatch::generate(&NoiseField::with_seed(12345))
    }

    #[test]
    fn test_exact_node_lookup() {
        let patch = patch();
        for row in 0..PATCH_NODES {
            for col in 0..PATCH_NODES {
                let x = col as f64 * SEGMENT - HALF_SPAN;
                let z = row as f64 * SEGMENT - HALF_SPAN;
                assert_eq!(
                    patch.get_height(x, z),
                    patch.node_height(col, row),
                    "node ({col}, {row})"
                );
            }
        }
    }

    #[test]
    fn test_interpolated_between_nodes() {
        let patch = patch();
        // Midpoint of the first segment along X on the first row.
        let h0 = patch.node_height(0, 0);
        let h1 = patch.node_height(1, 0);
        let mid = patch.get_height(-HALF_SPAN + SEGMENT / 2.0, -HALF_SPAN);
        assert!((mid - (h0 + h1) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_far_outside_clamps_to_edge() {
        let patch = patch();
        assert_eq!(
            patch.get_height(1e6, 1e6),
            patch.node_height(PATCH_NODES - 1, PATCH_NODES - 1)
        );
        assert_eq!(patch.get_height(-1e6, -1e6), patch.node_height(0, 0));
    }

    #[test]
    fn test_reposition_keeps_heights() {
        let mut patch = patch();
        let before: Vec<f64> = (0..PATCH_NODES)
            .flat_map(|r| (0..PATCH_NODES).map(move |c| (c, r)))
            .map(|(c, r)| patch.node_height(c, r))
            .collect();

        patch.update_position(433.0, -217.0);
        assert_eq!(patch.origin(), (375.0, -250.0));

        let after: Vec<f64> = (0..PATCH_NODES)
            .flat_map(|r| (0..PATCH_NODES).map(move |c| (c, r)))
            .map(|(c, r)| patch.node_height(c, r))
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_lookup_follows_origin() {
        let mut patch = patch();
        let center = patch.get_height(0.0, 0.0);
        patch.update_position(500.0, 500.0);
        // Same patch-local position relative to the new origin.
        assert_eq!(patch.get_height(500.0, 500.0), center);
    }

    proptest! {
        #[test]
        fn prop_lookup_never_panics_and_is_finite(
            x in -1e7f64..1e7,
            z in -1e7f64..1e7,
            ox in -1e5f64..1e5,
            oz in -1e5f64..1e5,
        ) {
            let mut patch = patch();
            patch.update_position(ox, oz);
            let h = patch.get_height(x, z);
            prop_assert!(h.is_finite());
            // Patch noise layer is scaled by 5, so heights stay small.
            prop_assert!(h.abs() <= 5.0 + 1e-9);
        }
    }
}

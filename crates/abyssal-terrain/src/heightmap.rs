//! Analytic seafloor height field.
//!
//! The terrain's entire identity lives in one formula: a weighted sum of
//! simplex octaves with a one-sided trench term, a domain warp, a
//! slope-triggered sharpening pass, an amplitude-modulated fractal
//! layer, and a final nonlinear remap that exaggerates peaks and
//! trenches. The constants below must not be retuned casually; changing
//! any of them reshapes every world generated from every seed.

use crate::noise_field::NoiseField;
use crate::patch::TerrainPatch;

/// Base elevation of the seafloor before any noise contribution.
const SEA_FLOOR: f64 = -50.0;

/// Density above which peaks are exaggerated.
const PEAK_CUTOFF: f64 = 10.0;

/// Density below which trenches are exaggerated.
const TRENCH_CUTOFF: f64 = -20.0;

/// Slope magnitude above which the sharpening octave kicks in.
const RIDGE_SLOPE: f64 = 0.7;

/// Seafloor height field plus the coarse rendered patch.
///
/// `height` is the analytic formula: pure, total, and deterministic for
/// a fixed seed. `get_height` goes through the 6x6 [`TerrainPatch`]
/// instead; it is the cheap approximation used for float-height and
/// collision queries.
#[derive(Debug, Clone)]
pub struct HeightMap {
    field: NoiseField,
    patch: TerrainPatch,
}

impl HeightMap {
    /// Creates a height map (and its terrain patch) from a seed.
    #[must_use]
    pub fn with_seed(seed: u32) -> Self {
        let field = NoiseField::with_seed(seed);
        let patch = TerrainPatch::generate(&field);
        Self { field, patch }
    }

    /// Returns the noise field backing this height map.
    #[must_use]
    pub const fn field(&self) -> &NoiseField {
        &self.field
    }

    /// Returns the coarse terrain patch.
    #[must_use]
    pub const fn patch(&self) -> &TerrainPatch {
        &self.patch
    }

    /// Analytic seafloor height at `(x, z)` at the given time.
    ///
    /// Time drifts the fine-detail and trench octaves very slowly; the
    /// large-scale relief is static.
    #[must_use]
    pub fn height(&self, x: f64, z: f64, time: f64) -> f64 {
        let n = &self.field;

        // Slow-drifting fine detail.
        let base = n.sample2(x / 100.0 + time * 0.01, z / 100.0 + time * 0.01) * 10.0;
        // Large-scale relief.
        let hills = n.sample2(x / 300.0, z / 300.0) * 30.0;
        // One-sided depression term: only carves downward.
        let trench = (n.sample2(x / 50.0 + time * 0.005, z / 50.0) * 50.0).min(0.0);

        // Domain warp to break up axis-aligned artifacts.
        let warp_x = n.sample2(x / 200.0, z / 200.0) * 20.0;
        let warp_z = n.sample2(x / 200.0 + 100.0, z / 200.0) * 20.0;
        let warped = n.sample2((x + warp_x) / 150.0, (z + warp_z) / 150.0) * 15.0;

        // Sharpen local relief near noise-defined ridge regions.
        let slope = n.sample2(x / 100.0, z / 100.0).abs();
        let feedback = if slope > RIDGE_SLOPE {
            n.sample2(x / 20.0, z / 20.0) * 20.0
        } else {
            0.0
        };

        // Fine fractal detail, amplitude-modulated by the hills octave.
        let fractal = n.sample2(x / 25.0, z / 25.0) * (hills * 0.2);

        let density = base + hills + trench + warped + feedback + fractal;

        // Exaggerate peaks and trenches beyond the fixed cutoffs.
        let threshold = if density > PEAK_CUTOFF {
            density * 1.5
        } else if density < TRENCH_CUTOFF {
            density * 2.0
        } else {
            density
        };

        SEA_FLOOR + threshold
    }

    /// Approximate height from the terrain patch. Never fails; see
    /// [`TerrainPatch::get_height`].
    #[must_use]
    pub fn get_height(&self, x: f64, z: f64) -> f64 {
        self.patch.get_height(x, z)
    }

    /// Repositions the terrain patch to the super-cell containing the
    /// given position.
    pub fn update_position(&mut self, x: f64, z: f64) {
        self.patch.update_position(x, z);
    }
}

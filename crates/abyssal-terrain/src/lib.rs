//! # Abyssal Terrain
//!
//! Procedural seafloor generation for Abyssal.
//!
//! This crate provides:
//! - A seeded coherent-noise primitive ([`NoiseField`])
//! - The analytic seafloor height formula ([`HeightMap`])
//! - The coarse repositionable terrain patch ([`TerrainPatch`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod heightmap;
pub mod noise_field;
pub mod patch;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::heightmap::*;
    pub use crate::noise_field::*;
    pub use crate::patch::*;
}

pub use prelude::*;

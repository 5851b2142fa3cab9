//! # Abyssal Common
//!
//! Common types shared across the Abyssal subsystems:
//! - Coordinate types (cell grid, super-cell snapping)
//! - Entity ID type
//! - Common error types
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod coords;
pub mod error;
pub mod ids;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::coords::*;
    pub use crate::error::*;
    pub use crate::ids::*;
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_coord_conversion() {
        let cell = CellCoord::from_world(250.0, -30.0, 100.0);
        assert_eq!(cell, CellCoord::new(2, -1));
    }

    #[test]
    fn test_entity_id_generation() {
        let id1 = EntityId::new();
        let id2 = EntityId::new();
        assert_ne!(id1, id2);
    }
}

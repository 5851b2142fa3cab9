//! # Abyssal World
//!
//! Streaming world population for Abyssal.
//!
//! This crate handles:
//! - The entity model and the mesh-factory / scene collaborator seams
//! - Entity description strings (generation + parsing)
//! - The spatial cell index (active-set tracking)
//! - Per-cell procedural population and eviction

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod description;
pub mod entity;
pub mod index;
pub mod populator;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::description::*;
    pub use crate::entity::*;
    pub use crate::index::*;
    pub use crate::populator::*;
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;
    use abyssal_common::CellCoord;
    use abyssal_terrain::HeightMap;

    struct NullFactory(u64);

    impl MeshFactory for NullFactory {
        fn build(&mut self, _params: &MeshParams) -> MeshHandle {
            self.0 += 1;
            MeshHandle(self.0)
        }
    }

    struct CountingScene(usize);

    impl Scene for CountingScene {
        fn add(&mut self, _entity: &Entity) {
            self.0 += 1;
        }

        fn remove(&mut self, _entity: &Entity) {
            self.0 -= 1;
        }
    }

    /// Index and populator driven together, the way the engine drives
    /// them each frame.
    #[test]
    fn test_index_and_populator_stream_together() {
        let heights = HeightMap::with_seed(12345);
        let mut index = SpatialCellIndex::new(100.0, 1);
        let mut pop = WorldPopulator::new(12345, 100.0);
        let mut factory = NullFactory(0);
        let mut scene = CountingScene(0);

        // Drive the submarine east across several cells.
        for step in 0..30 {
            let x = f64::from(step) * 40.0;
            let delta = index.recompute(x, 50.0);
            for cell in delta.activated {
                pop.generate(cell, &heights, 0.0, &mut factory, &mut scene);
            }
            for cell in delta.evicted {
                pop.evict(cell, &mut scene);
            }
            // Everything tracked stays inside the active set.
            assert_eq!(pop.generated_cell_count(), index.active_count());
            assert_eq!(scene.0, pop.total_entity_count());
        }

        // Returning to the start re-activates and repopulates.
        let delta = index.recompute(0.0, 50.0);
        assert!(!delta.activated.is_empty());
        for cell in delta.activated {
            pop.generate(cell, &heights, 0.0, &mut factory, &mut scene);
        }
        for cell in delta.evicted {
            pop.evict(cell, &mut scene);
        }
        assert!(pop.is_generated(CellCoord::new(0, 0)));
    }
}

//! Entity model and the external collaborator seams.
//!
//! Mesh construction and rendering are not this crate's business: the
//! populator hands parameter structs to a [`MeshFactory`] and pushes the
//! resulting entities into a [`Scene`]. Both traits are implemented by
//! the rendering host (or by test doubles).

use abyssal_common::EntityId;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Number of fish in a spawned school.
pub const FISH_PER_SCHOOL: u32 = 5;

/// Kind of a spawned world entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// A single coral formation
    Coral,
    /// A school of fish (one mesh group containing several fish)
    FishSchool,
    /// A seaweed instance
    Seaweed,
    /// A rock instance
    Rock,
}

/// Shape of a coral formation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoralShape {
    /// Recursive branching structure
    Branching,
    /// Simple rounded dome
    Rounded,
}

/// Parameters for building a coral mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoralParams {
    /// RGB color as 0xRRGGBB
    pub color: u32,
    /// Overall shape
    pub shape: CoralShape,
}

/// Parameters for building a single fish mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FishParams {
    /// Body size multiplier
    pub size: f64,
    /// Swim speed multiplier
    pub speed: f64,
    /// RGB color as 0xRRGGBB
    pub color: u32,
}

/// Parameters for building a fish-school mesh group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FishSchoolParams {
    /// Parameters shared by every fish in the school
    pub fish: FishParams,
    /// Number of fish in the school
    pub count: u32,
}

/// Parameters for building instanced seaweed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeaweedParams {
    /// Number of instances in the mesh
    pub count: u32,
}

/// Parameters for building an instanced rock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RockParams {
    /// Uniform scale applied to the instance
    pub scale: f64,
}

/// Parameters for building the submarine hull.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubmarineParams {
    /// Hull size multiplier
    pub size: f64,
    /// RGB color as 0xRRGGBB
    pub color: u32,
}

/// Parameter struct handed to the mesh factory, one variant per
/// buildable mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MeshParams {
    /// Coral formation
    Coral(CoralParams),
    /// Fish school group
    FishSchool(FishSchoolParams),
    /// Instanced seaweed
    Seaweed(SeaweedParams),
    /// Instanced rock
    Rock(RockParams),
    /// Submarine hull
    Submarine(SubmarineParams),
}

/// Opaque handle to a mesh owned by the rendering host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeshHandle(pub u64);

/// External factory that turns parameter structs into renderable
/// meshes. Pure: no shared state with the world core.
pub trait MeshFactory {
    /// Builds a mesh for the given parameters.
    fn build(&mut self, params: &MeshParams) -> MeshHandle;
}

/// External scene graph the world core adds entities to and removes
/// them from.
pub trait Scene {
    /// Adds an entity to the scene.
    fn add(&mut self, entity: &Entity);
    /// Removes an entity from the scene.
    fn remove(&mut self, entity: &Entity);
}

/// A spawned world entity.
///
/// Ownership is exclusive to the cell that spawned it until eviction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier
    pub id: EntityId,
    /// Kind of entity
    pub kind: EntityKind,
    /// World-space position
    pub position: DVec3,
    /// Mesh handle from the factory
    pub mesh: MeshHandle,
}

impl Entity {
    /// Creates a new entity with a fresh ID.
    #[must_use]
    pub fn new(kind: EntityKind, position: DVec3, mesh: MeshHandle) -> Self {
        Self {
            id: EntityId::new(),
            kind,
            position,
            mesh,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_ids_are_fresh() {
        let a = Entity::new(EntityKind::Coral, DVec3::ZERO, MeshHandle(1));
        let b = Entity::new(EntityKind::Rock, DVec3::ZERO, MeshHandle(1));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_school_param_count() {
        let params = FishSchoolParams {
            fish: FishParams {
                size: 0.5,
                speed: 2.0,
                color: 0x0077_ff,
            },
            count: FISH_PER_SCHOOL,
        };
        assert_eq!(params.count, 5);
    }
}

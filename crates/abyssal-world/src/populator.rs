//! Procedural per-cell entity population.
//!
//! Each newly activated cell gets one representative point uniformly
//! inside its footprint and an independent Bernoulli trial per entity
//! kind. The RNG is seeded from the world seed and the cell key, so a
//! cell that is evicted and later re-entered regenerates with the same
//! draws: the world is reproducible from its seed alone.

use abyssal_common::{CellCoord, WorldError, WorldResult};
use abyssal_terrain::HeightMap;
use ahash::AHashMap;
use glam::DVec3;
use tracing::debug;

use crate::description::{coral_description, fish_description, parse_description};
use crate::entity::{Entity, EntityKind, MeshFactory, MeshParams, RockParams, Scene, SeaweedParams};

/// Vertical offset above the seafloor for coral.
const CORAL_OFFSET: f64 = 10.0;
/// Vertical offset above the seafloor for fish schools.
const SCHOOL_OFFSET: f64 = 10.0;
/// Vertical offset above the seafloor for seaweed.
const SEAWEED_OFFSET: f64 = 8.0;
/// Base vertical offset above the seafloor for rocks; half the rock's
/// scale is added on top so the instance sits on its equator.
const ROCK_OFFSET: f64 = 5.0;
/// Uniform scale for spawned rock instances.
const ROCK_SCALE: f64 = 1.0;

/// Per-kind spawn probabilities for one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnProbabilities {
    /// Chance of one coral formation
    pub coral: f64,
    /// Chance of one fish school
    pub fish_school: f64,
    /// Chance of one seaweed instance
    pub seaweed: f64,
    /// Chance of one rock instance
    pub rock: f64,
}

impl Default for SpawnProbabilities {
    fn default() -> Self {
        Self {
            coral: 0.5,
            fish_school: 0.3,
            seaweed: 0.4,
            rock: 0.3,
        }
    }
}

/// Contents of one generated cell.
///
/// The generated flag and the owned entities are a single record by
/// construction: a cell key is present in the populator's table exactly
/// when the cell has been generated, and the record owns every entity
/// spawned for it.
#[derive(Debug, Clone, Default)]
pub struct Cell {
    entities: Vec<Entity>,
}

impl Cell {
    /// The entities this cell owns.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Number of entities in this cell.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }
}

/// Populates activated cells with entities and tears them down on
/// eviction.
#[derive(Debug)]
pub struct WorldPopulator {
    /// World seed all per-cell seeds derive from
    seed: u64,
    /// Cell edge length in world units
    cell_size: f64,
    /// Spawn probabilities per kind
    probabilities: SpawnProbabilities,
    /// Generated cells and the entities they own
    cells: AHashMap<CellCoord, Cell>,
}

impl WorldPopulator {
    /// Creates a populator with default spawn probabilities.
    #[must_use]
    pub fn new(seed: u64, cell_size: f64) -> Self {
        Self::with_probabilities(seed, cell_size, SpawnProbabilities::default())
    }

    /// Creates a populator with explicit spawn probabilities.
    #[must_use]
    pub fn with_probabilities(
        seed: u64,
        cell_size: f64,
        probabilities: SpawnProbabilities,
    ) -> Self {
        Self {
            seed,
            cell_size,
            probabilities,
            cells: AHashMap::new(),
        }
    }

    /// Returns the world seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Entities owned by a generated cell, if any.
    #[must_use]
    pub fn cell_entities(&self, cell: CellCoord) -> Option<&[Entity]> {
        self.cells.get(&cell).map(Cell::entities)
    }

    /// The record of a tracked cell, or an error naming the cell.
    pub fn require_cell(&self, cell: CellCoord) -> WorldResult<&Cell> {
        self.cells.get(&cell).ok_or(WorldError::CellNotActive {
            x: cell.x,
            z: cell.z,
        })
    }

    /// Whether a cell has been generated and is still tracked.
    #[must_use]
    pub fn is_generated(&self, cell: CellCoord) -> bool {
        self.cells.contains_key(&cell)
    }

    /// Number of generated cells currently tracked.
    #[must_use]
    pub fn generated_cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Total entities across all tracked cells.
    #[must_use]
    pub fn total_entity_count(&self) -> usize {
        self.cells.values().map(Cell::entity_count).sum()
    }

    /// Populates a newly activated cell.
    ///
    /// Idempotent: generating a cell that is already tracked is a no-op
    /// and returns 0. Returns the number of entities spawned.
    pub fn generate(
        &mut self,
        cell: CellCoord,
        heights: &HeightMap,
        time: f64,
        factory: &mut dyn MeshFactory,
        scene: &mut dyn Scene,
    ) -> usize {
        if self.cells.contains_key(&cell) {
            return 0;
        }

        let mut rng = fastrand::Rng::with_seed(self.cell_seed(cell));

        // One representative point uniformly inside the cell footprint.
        let (corner_x, corner_z) = cell.to_world(self.cell_size);
        let x = corner_x + rng.f64() * self.cell_size;
        let z = corner_z + rng.f64() * self.cell_size;
        let floor = heights.height(x, z, time);

        let mut record = Cell::default();

        if rng.f64() < self.probabilities.coral {
            let desc = coral_description(&mut rng);
            if let Some(params) = parse_description(&desc) {
                let mesh = factory.build(&params);
                let entity = Entity::new(
                    EntityKind::Coral,
                    DVec3::new(x, floor + CORAL_OFFSET, z),
                    mesh,
                );
                scene.add(&entity);
                debug!(cell = ?(cell.x, cell.z), %desc, pos = ?entity.position, "spawned coral");
                record.entities.push(entity);
            }
        }

        if rng.f64() < self.probabilities.fish_school {
            let desc = fish_description(&mut rng);
            if let Some(params) = parse_description(&desc) {
                let mesh = factory.build(&params);
                let entity = Entity::new(
                    EntityKind::FishSchool,
                    DVec3::new(x, floor + SCHOOL_OFFSET, z),
                    mesh,
                );
                scene.add(&entity);
                debug!(cell = ?(cell.x, cell.z), %desc, pos = ?entity.position, "spawned fish school");
                record.entities.push(entity);
            }
        }

        if rng.f64() < self.probabilities.seaweed {
            let params = MeshParams::Seaweed(SeaweedParams { count: 1 });
            let mesh = factory.build(&params);
            let entity = Entity::new(
                EntityKind::Seaweed,
                DVec3::new(x, floor + SEAWEED_OFFSET, z),
                mesh,
            );
            scene.add(&entity);
            debug!(cell = ?(cell.x, cell.z), pos = ?entity.position, "spawned seaweed");
            record.entities.push(entity);
        }

        if rng.f64() < self.probabilities.rock {
            let params = MeshParams::Rock(RockParams { scale: ROCK_SCALE });
            let mesh = factory.build(&params);
            let entity = Entity::new(
                EntityKind::Rock,
                DVec3::new(x, floor + ROCK_OFFSET + ROCK_SCALE / 2.0, z),
                mesh,
            );
            scene.add(&entity);
            debug!(cell = ?(cell.x, cell.z), pos = ?entity.position, "spawned rock");
            record.entities.push(entity);
        }

        let spawned = record.entity_count();
        // Empty cells are tracked too; the generated flag is the table
        // entry itself.
        self.cells.insert(cell, record);
        spawned
    }

    /// Evicts a cell, removing every entity it owns from the scene.
    ///
    /// Returns the number of entities removed. Evicting an untracked
    /// cell is a no-op. The key is deleted, not blacklisted: a later
    /// `generate` for the same cell will repopulate it.
    pub fn evict(&mut self, cell: CellCoord, scene: &mut dyn Scene) -> usize {
        let Some(record) = self.cells.remove(&cell) else {
            return 0;
        };
        let count = record.entity_count();
        for entity in record.entities {
            scene.remove(&entity);
        }
        if count > 0 {
            debug!(cell = ?(cell.x, cell.z), removed = count, "evicted cell");
        }
        count
    }

    /// Deterministic per-cell RNG seed derived from the world seed and
    /// the cell key.
    fn cell_seed(&self, cell: CellCoord) -> u64 {
        let x = cell.x as u64;
        let z = cell.z as u64;
        self.seed
            .wrapping_mul(0x0005_DEEC_E66D)
            .wrapping_add(x.wrapping_mul(0x0123_4567))
            .wrapping_add(z.wrapping_mul(0x0765_4321))
    }
}

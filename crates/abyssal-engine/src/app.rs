//! Application lifecycle: the per-frame simulation loop.
//!
//! One tick performs, in fixed order: input sampling, submarine pose
//! update (with seafloor and bounds clamps and the terrain patch move),
//! active-set recompute, cell generation and eviction, then the draw
//! hand-off. Everything runs on the single frame tick; nothing suspends
//! mid-frame.

use anyhow::Result;
use tracing::{debug, info, warn};

use abyssal_terrain::HeightMap;
use abyssal_world::{parse_description, MeshFactory, SpatialCellIndex, WorldPopulator};

use crate::config::EngineConfig;
use crate::input::{InputSource, ScriptedInput};
use crate::scene::{HandleFactory, HeadlessScene};
use crate::submarine::Submarine;

/// Milliseconds of simulated time per tick (nominal 60 Hz).
const TICK_MILLIS: f64 = 1000.0 / 60.0;

/// The assembled simulation.
pub struct App {
    config: EngineConfig,
    heights: HeightMap,
    index: SpatialCellIndex,
    populator: WorldPopulator,
    submarine: Submarine,
    input: Box<dyn InputSource>,
    factory: HandleFactory,
    scene: HeadlessScene,
    /// Ticks simulated so far
    frame: u64,
}

impl App {
    /// Assembles the simulation from a validated config and an input
    /// source.
    #[must_use]
    pub fn new(config: EngineConfig, input: Box<dyn InputSource>) -> Self {
        let seed = config.resolve_seed();
        info!(seed, "world seed resolved");

        let heights = HeightMap::with_seed(seed as u32);
        let index = SpatialCellIndex::new(config.cell_size, config.view_radius);
        let populator = WorldPopulator::with_probabilities(
            seed,
            config.cell_size,
            config.spawn_probabilities(),
        );
        let submarine = Submarine::at_spawn(&heights, &config);

        let mut factory = HandleFactory::default();
        // The hull mesh is requested through the same factory seam the
        // world uses for creatures.
        if let Some(hull) = parse_description("small yellow submarine") {
            let handle = factory.build(&hull);
            debug!(?handle, "submarine hull mesh built");
        }

        Self {
            config,
            heights,
            index,
            populator,
            submarine,
            input,
            factory,
            scene: HeadlessScene::default(),
            frame: 0,
        }
    }

    /// Current simulated time passed to terrain queries.
    #[must_use]
    fn terrain_time(&self) -> f64 {
        self.frame as f64 * TICK_MILLIS * self.config.time_scale
    }

    /// Runs one frame.
    pub fn tick(&mut self) {
        let input = self.input.sample();

        self.submarine
            .update(input, &mut self.heights, &self.config);

        let delta = self
            .index
            .recompute(self.submarine.position.x, self.submarine.position.z);

        let time = self.terrain_time();
        for cell in delta.activated {
            self.populator
                .generate(cell, &self.heights, time, &mut self.factory, &mut self.scene);
        }
        for cell in delta.evicted {
            self.populator.evict(cell, &mut self.scene);
        }

        self.frame += 1;
    }

    /// Runs the configured number of frames.
    pub fn run(&mut self) {
        let frames = self.config.frames;
        for _ in 0..frames {
            self.tick();
        }

        let here = abyssal_common::CellCoord::from_world(
            self.submarine.position.x,
            self.submarine.position.z,
            self.config.cell_size,
        );
        let entities_here = match self.populator.require_cell(here) {
            Ok(cell) => cell.entity_count(),
            Err(e) => {
                warn!("submarine cell missing from bookkeeping: {e}");
                0
            },
        };

        info!(
            frames,
            position = ?self.submarine.position,
            active_cells = self.index.active_count(),
            visible_entities = self.scene.visible(),
            entities_here,
            total_spawned = self.scene.total_added(),
            "run complete"
        );
    }

    /// The submarine's current pose.
    #[must_use]
    pub const fn submarine(&self) -> &Submarine {
        &self.submarine
    }

    /// The populator's bookkeeping, for inspection.
    #[must_use]
    pub const fn populator(&self) -> &WorldPopulator {
        &self.populator
    }

    /// The cell index, for inspection.
    #[must_use]
    pub const fn index(&self) -> &SpatialCellIndex {
        &self.index
    }

    /// The headless scene tallies.
    #[must_use]
    pub const fn scene(&self) -> &HeadlessScene {
        &self.scene
    }
}

/// Loads config, assembles the app with the patrol script, and runs it.
pub fn run() -> Result<()> {
    let mut config = EngineConfig::load_from(crate::config::CONFIG_FILE);
    config.validate();

    let mut app = App::new(config, Box::new(ScriptedInput::patrol()));
    app.run();
    Ok(())
}

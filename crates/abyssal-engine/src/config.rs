//! Engine configuration.
//!
//! Configurable parameters for the world grid, spawning, and the
//! submarine controller. Configuration can be loaded from and saved to
//! a TOML file; a missing or malformed file falls back to defaults with
//! a warning rather than aborting.

use abyssal_world::SpawnProbabilities;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::{info, warn};

/// Configuration file name.
pub const CONFIG_FILE: &str = "abyssal.toml";

/// Engine configuration parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === World Settings ===
    /// World seed (None = derive from the clock)
    pub world_seed: Option<u64>,
    /// Spawn cell edge length in world units
    pub cell_size: f64,
    /// View radius in cells (Chebyshev)
    pub view_radius: u32,

    // === Spawning ===
    /// Chance of one coral per cell
    pub coral_chance: f64,
    /// Chance of one fish school per cell
    pub fish_school_chance: f64,
    /// Chance of one seaweed instance per cell
    pub seaweed_chance: f64,
    /// Chance of one rock instance per cell
    pub rock_chance: f64,

    // === Submarine ===
    /// Forward/backward speed per tick
    pub speed: f64,
    /// Yaw change per tick while turning
    pub turn_speed: f64,
    /// Rise/sink speed per tick
    pub vertical_speed: f64,
    /// Minimum clearance kept above the seafloor
    pub hover_clearance: f64,
    /// Horizontal world half-extent; X and Z are clamped to ±this
    pub world_bound: f64,

    // === Headless Run ===
    /// Number of frames the headless binary simulates
    pub frames: u64,
    /// Scale applied to elapsed milliseconds before terrain queries
    pub time_scale: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let spawn = SpawnProbabilities::default();
        Self {
            // World
            world_seed: None,
            cell_size: 100.0,
            view_radius: 1,

            // Spawning
            coral_chance: spawn.coral,
            fish_school_chance: spawn.fish_school,
            seaweed_chance: spawn.seaweed,
            rock_chance: spawn.rock,

            // Submarine
            speed: 0.2,
            turn_speed: 0.02,
            vertical_speed: 0.2,
            hover_clearance: 20.0,
            world_bound: 1000.0,

            // Headless run
            frames: 600,
            time_scale: 0.0001,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a specific path.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            info!("Config file not found, using defaults");
            return Self::default();
        }

        match fs::File::open(path) {
            Ok(mut file) => {
                let mut contents = String::new();
                if let Err(e) = file.read_to_string(&mut contents) {
                    warn!("Failed to read config file: {e}");
                    return Self::default();
                }

                match toml::from_str(&contents) {
                    Ok(config) => {
                        info!("Loaded config from {}", path.display());
                        config
                    },
                    Err(e) => {
                        warn!("Failed to parse config file: {e}");
                        Self::default()
                    },
                }
            },
            Err(e) => {
                warn!("Failed to open config file: {e}");
                Self::default()
            },
        }
    }

    /// Save configuration to a specific path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let mut file = fs::File::create(path)?;
        file.write_all(contents.as_bytes())?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate and clamp configuration values to sensible ranges.
    pub fn validate(&mut self) {
        self.cell_size = self.cell_size.clamp(10.0, 1000.0);
        self.view_radius = self.view_radius.clamp(1, 8);

        self.coral_chance = self.coral_chance.clamp(0.0, 1.0);
        self.fish_school_chance = self.fish_school_chance.clamp(0.0, 1.0);
        self.seaweed_chance = self.seaweed_chance.clamp(0.0, 1.0);
        self.rock_chance = self.rock_chance.clamp(0.0, 1.0);

        self.speed = self.speed.clamp(0.01, 10.0);
        self.turn_speed = self.turn_speed.clamp(0.001, 1.0);
        self.vertical_speed = self.vertical_speed.clamp(0.01, 10.0);
        self.hover_clearance = self.hover_clearance.clamp(0.0, 100.0);
        self.world_bound = self.world_bound.clamp(100.0, 100_000.0);

        self.frames = self.frames.clamp(1, 1_000_000);
        self.time_scale = self.time_scale.clamp(0.0, 1.0);
    }

    /// Spawn probabilities as the world-crate struct.
    #[must_use]
    pub const fn spawn_probabilities(&self) -> SpawnProbabilities {
        SpawnProbabilities {
            coral: self.coral_chance,
            fish_school: self.fish_school_chance,
            seaweed: self.seaweed_chance,
            rock: self.rock_chance,
        }
    }

    /// The configured seed, or one derived from the clock.
    #[must_use]
    pub fn resolve_seed(&self) -> u64 {
        self.world_seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        })
    }
}

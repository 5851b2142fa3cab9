//! Submarine pose and per-tick movement.

use abyssal_terrain::HeightMap;
use glam::DVec3;

use crate::config::EngineConfig;
use crate::input::InputState;

/// Submarine pose: world position plus heading (yaw around +Y).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Submarine {
    /// World-space position
    pub position: DVec3,
    /// Heading in radians; 0 faces +Z, positive turns left
    pub yaw: f64,
}

impl Submarine {
    /// Creates a submarine at the given position facing +Z.
    #[must_use]
    pub const fn new(position: DVec3) -> Self {
        Self { position, yaw: 0.0 }
    }

    /// Spawns the submarine hovering over the seafloor at the origin.
    #[must_use]
    pub fn at_spawn(heights: &HeightMap, config: &EngineConfig) -> Self {
        let floor = heights.height(0.0, 0.0, 0.0);
        Self::new(DVec3::new(0.0, floor + config.hover_clearance, 0.0))
    }

    /// Unit vector along the current heading.
    #[must_use]
    pub fn forward(&self) -> DVec3 {
        DVec3::new(self.yaw.sin(), 0.0, self.yaw.cos())
    }

    /// Applies one tick of input.
    ///
    /// Movement order matches the frame contract: translate and turn,
    /// then clamp to the seafloor (approximate patch lookup plus hover
    /// clearance) and the world bounds, then drag the terrain patch
    /// along so later lookups stay near the submarine.
    pub fn update(
        &mut self,
        input: InputState,
        heights: &mut HeightMap,
        config: &EngineConfig,
    ) {
        if input.turn_left {
            self.yaw += config.turn_speed;
        }
        if input.turn_right {
            self.yaw -= config.turn_speed;
        }

        if input.forward {
            self.position += self.forward() * config.speed;
        }
        if input.backward {
            self.position -= self.forward() * config.speed;
        }
        if input.rise {
            self.position.y += config.vertical_speed;
        }
        if input.sink {
            self.position.y -= config.vertical_speed;
        }

        // Never below the seafloor: best-effort patch lookup, never
        // fails even far outside the patch.
        let floor = heights.get_height(self.position.x, self.position.z);
        self.position.y = self.position.y.max(floor + config.hover_clearance);

        // Horizontal world bounds; the vertical axis is unbounded.
        self.position.x = self.position.x.clamp(-config.world_bound, config.world_bound);
        self.position.z = self.position.z.clamp(-config.world_bound, config.world_bound);

        heights.update_position(self.position.x, self.position.z);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Submarine, HeightMap, EngineConfig) {
        let config = EngineConfig::default();
        let heights = HeightMap::with_seed(12345);
        let sub = Submarine::at_spawn(&heights, &config);
        (sub, heights, config)
    }

    #[test]
    fn test_forward_moves_along_heading() {
        let (mut sub, mut heights, config) = setup();
        let start = sub.position;
        let input = InputState {
            forward: true,
            ..InputState::RELEASED
        };

        sub.update(input, &mut heights, &config);

        // Facing +Z initially.
        assert!((sub.position.z - start.z - config.speed).abs() < 1e-9);
        assert!((sub.position.x - start.x).abs() < 1e-9);
    }

    #[test]
    fn test_turning_changes_heading() {
        let (mut sub, mut heights, config) = setup();
        let input = InputState {
            turn_left: true,
            ..InputState::RELEASED
        };

        sub.update(input, &mut heights, &config);
        assert!((sub.yaw - config.turn_speed).abs() < 1e-12);

        // Forward now has a +X component.
        assert!(sub.forward().x > 0.0);
    }

    #[test]
    fn test_sink_clamped_to_seafloor() {
        let (mut sub, mut heights, config) = setup();
        let input = InputState {
            sink: true,
            ..InputState::RELEASED
        };

        // Sink far longer than the water column is deep.
        for _ in 0..10_000 {
            sub.update(input, &mut heights, &config);
        }

        let floor = heights.get_height(sub.position.x, sub.position.z);
        assert!(sub.position.y >= floor + config.hover_clearance - 1e-9);
    }

    #[test]
    fn test_rise_is_unbounded() {
        let (mut sub, mut heights, config) = setup();
        let start_y = sub.position.y;
        let input = InputState {
            rise: true,
            ..InputState::RELEASED
        };

        for _ in 0..100 {
            sub.update(input, &mut heights, &config);
        }

        assert!((sub.position.y - start_y - 100.0 * config.vertical_speed).abs() < 1e-9);
    }

    #[test]
    fn test_world_bounds_clamp_xz() {
        let (mut sub, mut heights, config) = setup();
        let input = InputState {
            forward: true,
            ..InputState::RELEASED
        };

        // Cruise straight ahead far past the boundary.
        for _ in 0..20_000 {
            sub.update(input, &mut heights, &config);
        }

        assert!(sub.position.z <= config.world_bound + 1e-9);
        assert!(sub.position.x.abs() <= config.world_bound + 1e-9);
    }

    #[test]
    fn test_patch_follows_submarine() {
        let (mut sub, mut heights, config) = setup();
        let input = InputState {
            forward: true,
            ..InputState::RELEASED
        };

        // Cross into the next 125-unit super-cell.
        for _ in 0..700 {
            sub.update(input, &mut heights, &config);
        }

        assert!(sub.position.z > 125.0);
        assert_eq!(heights.patch().origin(), (0.0, 125.0));
    }
}

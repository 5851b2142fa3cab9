//! Headless stand-ins for the rendering collaborators.
//!
//! The world core talks to a mesh factory and a scene graph through
//! traits; in the headless binary those are a handle counter and an
//! entity tally.

use abyssal_world::{Entity, MeshFactory, MeshHandle, MeshParams, Scene};
use tracing::trace;

/// Mesh factory that hands out sequential opaque handles.
#[derive(Debug, Default)]
pub struct HandleFactory {
    next: u64,
}

impl MeshFactory for HandleFactory {
    fn build(&mut self, params: &MeshParams) -> MeshHandle {
        self.next += 1;
        trace!(handle = self.next, ?params, "built mesh");
        MeshHandle(self.next)
    }
}

/// Scene that only counts what is currently visible.
#[derive(Debug, Default)]
pub struct HeadlessScene {
    visible: usize,
    total_added: usize,
}

impl HeadlessScene {
    /// Entities currently in the scene.
    #[must_use]
    pub const fn visible(&self) -> usize {
        self.visible
    }

    /// Entities ever added over the run.
    #[must_use]
    pub const fn total_added(&self) -> usize {
        self.total_added
    }
}

impl Scene for HeadlessScene {
    fn add(&mut self, entity: &Entity) {
        self.visible += 1;
        self.total_added += 1;
        trace!(id = entity.id.raw(), kind = ?entity.kind, "scene add");
    }

    fn remove(&mut self, entity: &Entity) {
        self.visible = self.visible.saturating_sub(1);
        trace!(id = entity.id.raw(), kind = ?entity.kind, "scene remove");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abyssal_world::{EntityKind, RockParams};
    use glam::DVec3;

    #[test]
    fn test_factory_handles_are_sequential() {
        let mut factory = HandleFactory::default();
        let params = MeshParams::Rock(RockParams { scale: 1.0 });
        assert_eq!(factory.build(&params), MeshHandle(1));
        assert_eq!(factory.build(&params), MeshHandle(2));
    }

    #[test]
    fn test_scene_counts_balance() {
        let mut scene = HeadlessScene::default();
        let entity = Entity::new(EntityKind::Rock, DVec3::ZERO, MeshHandle(1));

        scene.add(&entity);
        scene.add(&entity);
        scene.remove(&entity);

        assert_eq!(scene.visible(), 1);
        assert_eq!(scene.total_added(), 2);
    }
}

//! Click → ray cast → CritterClicked
//!
//! Render nodes не хранят ссылку на critter: связь node → critter живёт
//! в PickRegistry, который заполняет сборка фигур.

use bevy::picking::mesh_picking::ray_cast::{MeshRayCast, MeshRayCastSettings};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use critter_simulation::CritterClicked;
use std::collections::HashMap;

use crate::camera::OrbitCamera;

pub struct ClickDispatchPlugin;

impl Plugin for ClickDispatchPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PickRegistry>()
            .add_systems(Update, dispatch_clicks);
    }
}

/// Registry: render node (mesh entity) → critter entity
#[derive(Resource, Debug, Default)]
pub struct PickRegistry {
    node_to_critter: HashMap<Entity, Entity>,
}

impl PickRegistry {
    pub fn register(&mut self, node: Entity, critter: Entity) {
        self.node_to_critter.insert(node, critter);
    }

    pub fn critter_for(&self, node: Entity) -> Option<Entity> {
        self.node_to_critter.get(&node).copied()
    }

    pub fn clear(&mut self) {
        self.node_to_critter.clear();
    }
}

/// Левый click: луч из камеры через курсор, ближайший hit → critter
///
/// Если ближайший hit не critter (камень, дерево, земля): click никуда не идёт.
fn dispatch_clicks(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<OrbitCamera>>,
    mut ray_cast: MeshRayCast,
    registry: Res<PickRegistry>,
    mut clicks: EventWriter<CritterClicked>,
) {
    if !mouse_buttons.just_pressed(MouseButton::Left) {
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor) else {
        return;
    };

    let hits = ray_cast.cast_ray(ray, &MeshRayCastSettings::default());
    let Some((node, _)) = hits.first() else {
        return;
    };

    if let Some(critter) = registry.critter_for(*node) {
        clicks.write(CritterClicked { entity: critter });
    }
}

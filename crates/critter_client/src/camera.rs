use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (orbit_camera_controls, update_camera_transform).chain());
    }
}

/// Orbit камера вокруг центра арены (она же SpatialListener для звуков)
#[derive(Component)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub distance: f32,
    pub yaw: f32,   // Horizontal rotation (radians)
    pub pitch: f32, // Vertical rotation (radians)
    pub sensitivity: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            focus: Vec3::ZERO,
            distance: 16.0,
            yaw: std::f32::consts::FRAC_PI_4,   // 45°
            pitch: 0.6,                          // ~35°, арена видна целиком
            sensitivity: 0.005,
            zoom_speed: 1.0,
            min_distance: 4.0,
            max_distance: 40.0,
        }
    }
}

impl OrbitCamera {
    /// Позиция камеры из сферических координат
    pub fn eye(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();

        self.focus + Vec3::new(x, y, z)
    }
}

/// Правая кнопка: orbit, колесо: zoom. Левая занята click'ами по critter'ам.
fn orbit_camera_controls(
    mut query: Query<&mut OrbitCamera>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut mouse_wheel: EventReader<MouseWheel>,
) {
    let Ok(mut camera) = query.single_mut() else {
        return;
    };

    if mouse_buttons.pressed(MouseButton::Right) {
        for motion in mouse_motion.read() {
            camera.yaw -= motion.delta.x * camera.sensitivity;
            camera.pitch += motion.delta.y * camera.sensitivity;

            // Не уходим под землю и не переворачиваемся через зенит
            camera.pitch = camera.pitch.clamp(0.1, std::f32::consts::FRAC_PI_2 - 0.1);
        }
    } else {
        // Consume motion events even when not orbiting
        mouse_motion.clear();
    }

    for wheel in mouse_wheel.read() {
        camera.distance -= wheel.y * camera.zoom_speed;
        camera.distance = camera.distance.clamp(camera.min_distance, camera.max_distance);
    }
}

fn update_camera_transform(
    mut query: Query<(&OrbitCamera, &mut Transform), Changed<OrbitCamera>>,
) {
    for (camera, mut transform) in query.iter_mut() {
        *transform = Transform::from_translation(camera.eye()).looking_at(camera.focus, Vec3::Y);
    }
}

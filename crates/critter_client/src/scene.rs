//! Сцена: земля, свет, камера, obstacles и critter'ы
//!
//! R → снести всё SceneMember и собрать заново (obstacles + picks тоже сбрасываются).

use bevy::audio::SpatialListener;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use critter_simulation::{spawn_critter, DeterministicRng, ObstacleRegistry};

use crate::audio::SoundBank;
use crate::camera::OrbitCamera;
use crate::config::ClientConfig;
use crate::figures::{FigureBuilder, Species};
use crate::picking::PickRegistry;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneLayout>()
            .add_systems(Startup, (setup_environment, build_scene).chain())
            .add_systems(Update, rebuild_scene_on_key);
    }
}

/// Marker: entity пересоздаётся при rebuild
#[derive(Component)]
pub struct SceneMember;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Rock,
    Tree,
}

#[derive(Debug, Clone, Copy)]
pub struct ObstaclePlacement {
    pub kind: ObstacleKind,
    pub position: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct CritterPlacement {
    pub species: Species,
    pub position: Vec2,
}

/// Что стоит на арене (позиции на земле, x/z)
#[derive(Resource, Debug, Clone)]
pub struct SceneLayout {
    pub obstacles: Vec<ObstaclePlacement>,
    pub critters: Vec<CritterPlacement>,
}

impl Default for SceneLayout {
    fn default() -> Self {
        let obstacle = |kind, x, z, radius| ObstaclePlacement {
            kind,
            position: Vec2::new(x, z),
            radius,
        };
        let critter = |species, x, z| CritterPlacement {
            species,
            position: Vec2::new(x, z),
        };

        Self {
            obstacles: vec![
                obstacle(ObstacleKind::Rock, 3.0, 2.0, 0.8),
                obstacle(ObstacleKind::Tree, -3.0, -1.0, 0.6),
                obstacle(ObstacleKind::Rock, -1.0, 4.0, 0.5),
                obstacle(ObstacleKind::Tree, 2.5, -4.0, 0.7),
            ],
            critters: vec![
                critter(Species::Pig, 0.0, 0.0),
                critter(Species::Sheep, -4.0, 3.0),
                critter(Species::Cow, 4.5, -1.0),
            ],
        }
    }
}

/// Всё что нужно для сборки сцены
#[derive(SystemParam)]
pub struct SceneBuilder<'w, 's> {
    commands: Commands<'w, 's>,
    meshes: ResMut<'w, Assets<Mesh>>,
    materials: ResMut<'w, Assets<StandardMaterial>>,
    picks: ResMut<'w, PickRegistry>,
    obstacles: ResMut<'w, ObstacleRegistry>,
    rng: ResMut<'w, DeterministicRng>,
    layout: Res<'w, SceneLayout>,
    config: Res<'w, ClientConfig>,
    sounds: Res<'w, SoundBank>,
}

impl SceneBuilder<'_, '_> {
    pub fn populate(&mut self) {
        for placement in self.layout.obstacles.iter() {
            self.obstacles.add_obstacle(placement.position, placement.radius);
            spawn_obstacle_visual(&mut self.commands, &mut self.meshes, &mut self.materials, placement);
        }

        for placement in self.layout.critters.iter() {
            let position = Vec3::new(
                placement.position.x,
                placement.species.resting_height(),
                placement.position.y,
            );
            let voice = self.sounds.voice(self.config.0.reaction.duration);

            let critter = spawn_critter(
                &mut self.commands,
                position,
                self.config.0.clone(),
                voice,
                &mut self.rng.rng,
            );
            self.commands
                .entity(critter)
                .insert((Visibility::default(), SceneMember));

            FigureBuilder {
                commands: &mut self.commands,
                meshes: &mut self.meshes,
                materials: &mut self.materials,
                picks: &mut self.picks,
                critter,
            }
            .build(placement.species);
        }

        critter_simulation::log(&format!(
            "Scene built: {} obstacles, {} critters",
            self.layout.obstacles.len(),
            self.layout.critters.len()
        ));
    }

    /// Снести текущую сцену (despawn рекурсивный, дети уходят вместе с root'ом)
    pub fn clear(&mut self, members: impl IntoIterator<Item = Entity>) {
        for entity in members {
            self.commands.entity(entity).despawn();
        }
        self.obstacles.clear();
        self.picks.clear();
    }
}

fn spawn_obstacle_visual(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    placement: &ObstaclePlacement,
) {
    let ground = Vec3::new(placement.position.x, 0.0, placement.position.y);
    let radius = placement.radius;

    match placement.kind {
        ObstacleKind::Rock => {
            commands.spawn((
                Mesh3d(meshes.add(Sphere::new(radius))),
                MeshMaterial3d(materials.add(Color::srgb(0.5, 0.5, 0.52))),
                Transform::from_translation(ground + Vec3::Y * radius * 0.3)
                    .with_scale(Vec3::new(1.0, 0.6, 1.0)),
                SceneMember,
            ));
        }
        ObstacleKind::Tree => {
            let trunk_height = 1.2;
            let crown_height = radius * 3.0;

            commands
                .spawn((
                    Mesh3d(meshes.add(Cylinder::new(radius * 0.35, trunk_height))),
                    MeshMaterial3d(materials.add(Color::srgb(0.45, 0.3, 0.18))),
                    Transform::from_translation(ground + Vec3::Y * trunk_height * 0.5),
                    SceneMember,
                ))
                .with_children(|trunk| {
                    trunk.spawn((
                        Mesh3d(meshes.add(Cone::new(radius * 1.4, crown_height))),
                        MeshMaterial3d(materials.add(Color::srgb(0.2, 0.5, 0.22))),
                        Transform::from_xyz(0.0, (trunk_height + crown_height) * 0.5, 0.0),
                    ));
                });
        }
    }
}

/// Земля, свет, камера (она же слушатель для spatial audio)
fn setup_environment(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<ClientConfig>,
) {
    // Ground plane: арена + запас по краям
    let half_size = config.0.wander.boundary_radius + 4.0;
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::new(Vec3::Y, Vec2::splat(half_size)))),
        MeshMaterial3d(materials.add(Color::srgb(0.45, 0.7, 0.35))),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));

    // Directional light (sun)
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 10.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Ambient light
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
        affects_lightmapped_meshes: false,
    });

    let orbit = OrbitCamera::default();
    let eye = orbit.eye();
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(eye).looking_at(orbit.focus, Vec3::Y),
        orbit,
        SpatialListener::new(0.3),
    ));
}

fn build_scene(mut builder: SceneBuilder) {
    builder.populate();
}

fn rebuild_scene_on_key(
    keys: Res<ButtonInput<KeyCode>>,
    members: Query<Entity, With<SceneMember>>,
    mut builder: SceneBuilder,
) {
    if !keys.just_pressed(KeyCode::KeyR) {
        return;
    }

    critter_simulation::log_info("Rebuilding scene");
    builder.clear(members.iter());
    builder.populate();
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use critter_simulation::{Critter, CritterVoice};

    fn scene_app() -> App {
        let mut app = App::new();
        app.init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .init_resource::<PickRegistry>()
            .init_resource::<ObstacleRegistry>()
            .init_resource::<SceneLayout>()
            .init_resource::<ClientConfig>()
            .insert_resource(SoundBank::default())
            .insert_resource(DeterministicRng::new(7));
        app
    }

    /// (resting y, есть ли voice) для каждого critter root'а сцены
    fn critter_roots(app: &mut App) -> Vec<(f32, bool)> {
        let world = app.world_mut();
        let mut query = world
            .query_filtered::<(&Transform, Option<&CritterVoice>), (With<Critter>, With<SceneMember>)>();
        query
            .iter(world)
            .map(|(transform, voice)| (transform.translation.y, voice.is_some()))
            .collect()
    }

    #[test]
    fn test_scene_populates_silent_critters_and_obstacles() {
        let mut app = scene_app();
        app.world_mut().run_system_once(build_scene).expect("scene built");

        let layout = SceneLayout::default();
        assert_eq!(
            app.world().resource::<ObstacleRegistry>().len(),
            layout.obstacles.len()
        );

        let roots = critter_roots(&mut app);
        assert_eq!(roots.len(), layout.critters.len());
        // Без звука в SoundBank critter'ы спавнятся без CritterVoice
        assert!(roots.iter().all(|(_, voiced)| !voiced));
        for placement in layout.critters.iter() {
            let height = placement.species.resting_height();
            assert!(roots.iter().any(|(y, _)| *y == height), "{:?}", placement.species);
        }
    }

    #[test]
    fn test_rebuild_replaces_scene_instead_of_duplicating() {
        let mut app = scene_app();
        app.world_mut().run_system_once(build_scene).expect("scene built");

        app.world_mut()
            .run_system_once(
                |members: Query<Entity, With<SceneMember>>, mut builder: SceneBuilder| {
                    builder.clear(members.iter());
                    builder.populate();
                },
            )
            .expect("scene rebuilt");

        let layout = SceneLayout::default();
        assert_eq!(critter_roots(&mut app).len(), layout.critters.len());
        assert_eq!(
            app.world().resource::<ObstacleRegistry>().len(),
            layout.obstacles.len()
        );
    }

    #[test]
    fn test_default_layout_starts_critters_clear_of_obstacles() {
        let layout = SceneLayout::default();
        let mut registry = ObstacleRegistry::new();
        for obstacle in layout.obstacles.iter() {
            registry.add_obstacle(obstacle.position, obstacle.radius);
        }

        for critter in layout.critters.iter() {
            assert!(
                !registry.collides(critter.position, critter_simulation::DESTINATION_BUFFER),
                "{:?} starts inside an obstacle",
                critter.species
            );
        }
    }

    #[test]
    fn test_default_layout_fits_arena() {
        let layout = SceneLayout::default();
        let boundary = critter_simulation::WanderConfig::default().boundary_radius;

        for critter in layout.critters.iter() {
            assert!(critter.position.length() <= boundary);
        }
    }
}

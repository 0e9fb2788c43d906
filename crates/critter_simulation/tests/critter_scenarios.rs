//! Интеграционные сценарии: critter'ы внутри headless App

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use critter_simulation::{
    create_headless_app, critter_bundle, Critter, CritterClicked, CritterConfig, CritterPose,
    CritterVoice, ObstacleRegistry, SimulationPlugin, SoundCueRequested, STEP_BUFFER,
};

const RESTING: f32 = 0.5;

fn setup(seed: u64) -> App {
    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin { seed });
    // Первый update только запускает часы
    app.update();
    app
}

fn spawn(app: &mut App, position: Vec3, voice: Option<CritterVoice>) -> Entity {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut entity = app
        .world_mut()
        .spawn(critter_bundle(position, CritterConfig::default(), &mut rng));
    if let Some(voice) = voice {
        entity.insert(voice);
    }
    entity.id()
}

fn click(app: &mut App, entity: Entity) {
    app.world_mut().send_event(CritterClicked { entity });
}

fn drain_cues(app: &mut App) -> Vec<SoundCueRequested> {
    app.world_mut()
        .resource_mut::<Events<SoundCueRequested>>()
        .drain()
        .collect()
}

fn critter(app: &App, entity: Entity) -> &Critter {
    app.world().get::<Critter>(entity).expect("critter exists")
}

fn transform(app: &App, entity: Entity) -> Transform {
    *app.world().get::<Transform>(entity).expect("transform exists")
}

#[test]
fn test_spawned_critter_has_required_components() {
    let mut app = setup(1);
    let entity = spawn(&mut app, Vec3::new(1.0, RESTING, 1.0), None);

    assert!(app.world().get::<CritterPose>(entity).is_some());
    assert!(app.world().get::<CritterConfig>(entity).is_some());
    assert!(critter(&app, entity).wander.is_idle);
}

#[test]
fn test_click_starts_reaction_and_requests_sound() {
    let mut app = setup(2);
    let entity = spawn(&mut app, Vec3::new(0.0, RESTING, 3.0), Some(CritterVoice::default()));

    click(&mut app, entity);
    app.update();

    assert!(critter(&app, entity).is_reacting());
    let cues = drain_cues(&mut app);
    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].entity, entity);

    // Второй click во время звука: реакция заново, звук не дублируется
    click(&mut app, entity);
    app.update();
    assert!(critter(&app, entity).is_reacting());
    assert!(drain_cues(&mut app).is_empty());
}

#[test]
fn test_silent_critter_reacts_without_sound() {
    let mut app = setup(3);
    let entity = spawn(&mut app, Vec3::new(0.0, RESTING, 3.0), None);

    click(&mut app, entity);
    app.update();

    assert!(critter(&app, entity).is_reacting());
    assert!(drain_cues(&mut app).is_empty());
}

#[test]
fn test_reaction_completes_and_restores_rest_pose() {
    let mut app = setup(4);
    let entity = spawn(&mut app, Vec3::new(-2.0, RESTING, 2.0), None);

    click(&mut app, entity);
    app.update();
    assert!(critter(&app, entity).is_reacting());

    // 3 секунды при 60Hz + запас
    for _ in 0..185 {
        app.update();
    }

    assert!(!critter(&app, entity).is_reacting());
    let transform = transform(&app, entity);
    assert_eq!(transform.translation.y, RESTING);
    assert_eq!(transform.scale, Vec3::ONE);
    let pose = app.world().get::<CritterPose>(entity).copied().expect("pose exists");
    assert_eq!(pose.mouth, CritterConfig::default().mouth.closed);
}

#[test]
fn test_click_on_unknown_entity_is_ignored() {
    let mut app = setup(5);
    let ghost = app.world_mut().spawn_empty().id();

    click(&mut app, ghost);
    app.update();

    assert!(drain_cues(&mut app).is_empty());
}

#[test]
fn test_critters_never_step_into_obstacles() {
    let mut app = setup(6);
    {
        let mut obstacles = app.world_mut().resource_mut::<ObstacleRegistry>();
        obstacles.add_obstacle(Vec2::ZERO, 1.0);
        obstacles.add_obstacle(Vec2::new(3.5, -2.0), 1.2);
        obstacles.add_obstacle(Vec2::new(-4.0, 3.0), 0.8);
    }
    let obstacles = app.world().resource::<ObstacleRegistry>().clone();

    let critters: Vec<Entity> = [
        Vec3::new(5.0, RESTING, 5.0),
        Vec3::new(-6.0, RESTING, -1.0),
        Vec3::new(0.0, RESTING, -6.0),
    ]
    .into_iter()
    .map(|position| spawn(&mut app, position, None))
    .collect();

    // 40 секунд
    for _ in 0..2400 {
        app.update();

        for &entity in &critters {
            let translation = transform(&app, entity).translation;
            let ground = Vec2::new(translation.x, translation.z);
            for obstacle in obstacles.iter() {
                assert!(
                    ground.distance(obstacle.position) >= obstacle.radius + STEP_BUFFER - 1e-4,
                    "critter {:?} at {:?} inside obstacle {:?}",
                    entity,
                    ground,
                    obstacle
                );
            }
        }
    }
}

#[test]
fn test_critters_wander_inside_boundary() {
    let mut app = setup(7);
    let entity = spawn(&mut app, Vec3::new(1.0, RESTING, -1.0), None);
    let boundary = CritterConfig::default().wander.boundary_radius;
    let mut walked = false;

    for _ in 0..3000 {
        app.update();
        let translation = transform(&app, entity).translation;
        assert!(Vec2::new(translation.x, translation.z).length() <= boundary + 1e-3);
        assert_eq!(translation.y, RESTING);
        walked |= critter(&app, entity).wander.is_walking();
    }

    assert!(walked, "critter never left idle in 50 seconds");
}

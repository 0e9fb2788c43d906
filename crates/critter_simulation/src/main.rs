//! Headless симуляция Critters
//!
//! Запускает Bevy App без рендера: несколько critter'ов бродят вокруг obstacles,
//! периодически получают click. Полезно для проверки поведения по логам.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use critter_simulation::{
    create_headless_app, critter_bundle, log_info, Critter, CritterClicked, CritterConfig, CritterVoice,
    ObstacleRegistry, SimulationPlugin, WanderState,
};

const SEED: u64 = 42;
const TICKS: u32 = 1800; // 30 секунд при 60Hz
const CLICK_EVERY: u32 = 600;

fn main() {
    let mut app = create_headless_app(SEED);
    app.add_plugins(SimulationPlugin { seed: SEED });

    log_info(&format!("Starting Critters headless simulation (seed: {})", SEED));

    {
        let mut obstacles = app.world_mut().resource_mut::<ObstacleRegistry>();
        obstacles.add_obstacle(Vec2::new(2.5, 1.0), 1.0);
        obstacles.add_obstacle(Vec2::new(-3.0, -2.0), 1.4);
        obstacles.add_obstacle(Vec3::new(0.0, 0.0, 4.5), 0.8);
    }

    let mut spawn_rng = ChaCha8Rng::seed_from_u64(SEED.wrapping_add(1));
    let spawn_points = [
        Vec3::new(-1.5, 0.5, 0.0),
        Vec3::new(1.0, 0.6, -2.5),
        Vec3::new(4.0, 0.4, 3.0),
    ];

    let critters: Vec<Entity> = spawn_points
        .iter()
        .enumerate()
        .map(|(index, position)| {
            let bundle = critter_bundle(*position, CritterConfig::default(), &mut spawn_rng);
            let mut entity = app.world_mut().spawn(bundle);
            // Последний critter без звука: click только анимирует
            if index + 1 < spawn_points.len() {
                entity.insert(CritterVoice::default());
            }
            entity.id()
        })
        .collect();

    for tick in 1..=TICKS {
        if tick % CLICK_EVERY == 0 {
            let target = critters[(tick / CLICK_EVERY) as usize % critters.len()];
            app.world_mut().send_event(CritterClicked { entity: target });
        }

        app.update();

        if tick % 60 == 0 {
            let world = app.world_mut();
            let mut query = world.query::<(Entity, &Transform, &Critter)>();
            for (entity, transform, critter) in query.iter(world) {
                log_info(&format!(
                    "t={:>3}s {:?} pos=({:.2}, {:.2}, {:.2}) {}",
                    tick / 60,
                    entity,
                    transform.translation.x,
                    transform.translation.y,
                    transform.translation.z,
                    describe(&critter.wander, critter.is_reacting()),
                ));
            }
        }
    }

    log_info("Simulation complete!");
}

fn describe(wander: &WanderState, reacting: bool) -> &'static str {
    if reacting {
        "reacting"
    } else if wander.is_idle {
        "idle"
    } else {
        "walking"
    }
}

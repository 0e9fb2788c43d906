//! Тесты детерминизма
//!
//! Проверяем что симуляция с одинаковым seed даёт идентичные результаты

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use critter_simulation::{
    create_headless_app, critter_bundle, world_snapshot, CritterClicked, CritterConfig,
    ObstacleRegistry, SimulationPlugin,
};

#[test]
fn test_determinism_same_seed() {
    const SEED: u64 = 12345;
    const CRITTER_COUNT: usize = 12;
    const TICK_COUNT: usize = 1200;

    let snapshot1 = run_simulation(SEED, CRITTER_COUNT, TICK_COUNT);
    let snapshot2 = run_simulation(SEED, CRITTER_COUNT, TICK_COUNT);

    assert_eq!(
        snapshot1, snapshot2,
        "Симуляция с одинаковым seed ({}) дала разные результаты!",
        SEED
    );
}

#[test]
fn test_determinism_multiple_runs() {
    const SEED: u64 = 42;
    const CRITTER_COUNT: usize = 6;
    const TICK_COUNT: usize = 600;

    let snapshots: Vec<_> = (0..4)
        .map(|_| run_simulation(SEED, CRITTER_COUNT, TICK_COUNT))
        .collect();

    for (i, snapshot) in snapshots.iter().enumerate().skip(1) {
        assert_eq!(
            snapshots[0], *snapshot,
            "Прогон {} дал результат отличный от прогона 0",
            i
        );
    }
}

#[test]
fn test_different_seeds_diverge() {
    let snapshot1 = run_simulation(1, 4, 900);
    let snapshot2 = run_simulation(2, 4, 900);

    assert_ne!(snapshot1, snapshot2);
}

/// Запускает симуляцию и возвращает snapshot Transform'ов
fn run_simulation(seed: u64, critter_count: usize, tick_count: usize) -> Vec<u8> {
    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin { seed });

    {
        let mut obstacles = app.world_mut().resource_mut::<ObstacleRegistry>();
        obstacles.add_obstacle(Vec2::new(2.0, 2.0), 1.0);
        obstacles.add_obstacle(Vec2::new(-3.0, 1.0), 1.5);
    }

    let mut spawn_rng = ChaCha8Rng::seed_from_u64(seed);
    let critters: Vec<Entity> = (0..critter_count)
        .map(|i| {
            let angle = i as f32 * 0.9;
            let position = Vec3::new(angle.cos() * 6.0, 0.5, angle.sin() * 6.0);
            app.world_mut()
                .spawn(critter_bundle(position, CritterConfig::default(), &mut spawn_rng))
                .id()
        })
        .collect();

    for tick in 0..tick_count {
        if tick % 150 == 0 {
            let target = critters[tick / 150 % critters.len()];
            app.world_mut().send_event(CritterClicked { entity: target });
        }
        app.update();
    }

    world_snapshot::<Transform>(app.world_mut())
}

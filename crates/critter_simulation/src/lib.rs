//! Critters Simulation Core
//!
//! ECS-симуляция на Bevy 0.16: животные бродят по арене, обходят obstacles,
//! а по click'у подпрыгивают, открывают рот и издают звук.
//!
//! HYBRID ARCHITECTURE:
//! - ECS = behavior layer (wander FSM, click reaction, procedural pose)
//! - Client = визуал (меши, камера, hit testing, audio)

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

// Публичные модули
pub mod animation;
pub mod critter;
pub mod logger;
pub mod obstacles;
pub mod wander;

// Re-export базовых типов для удобства
pub use animation::{compute_leg_angles, reaction_pose, tail_sway, LegAngles, MouthExtents, ReactionConfig};
pub use critter::{
    critter_bundle, spawn_critter, ConfigError, Critter, CritterClicked, CritterConfig, CritterPlugin,
    CritterPose, CritterTransition, CritterVoice, ReactionState, SoundCueRequested, TickContext,
};
pub use logger::*;
pub use obstacles::{Obstacle, ObstacleRegistry, DESTINATION_BUFFER, STEP_BUFFER};
pub use wander::{pick_destination, Locomotion, WanderConfig, WanderState};

/// Частота simulation tick'а
pub const SIMULATION_HZ: f64 = 60.0;

/// Главный plugin симуляции (fixed timestep + RNG + critters)
pub struct SimulationPlugin {
    /// Seed для DeterministicRng (если ресурс ещё не вставлен)
    pub seed: u64,
}

impl Default for SimulationPlugin {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // create_headless_app уже мог вставить RNG со своим seed: не перетираем
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(self.seed));
        }

        app
            // Fixed timestep 60Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(SIMULATION_HZ))
            .add_plugins(CritterPlugin);
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время ручное: каждый app.update() = ровно один fixed tick (1/60 сек),
/// независимо от wall clock. Первый update только запускает часы (delta = 0).
/// Плагины симуляции добавляет вызывающий.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(SIMULATION_HZ))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            1.0 / SIMULATION_HZ,
        )));

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}

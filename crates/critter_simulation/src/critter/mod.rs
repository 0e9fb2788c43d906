//! Critter (composition root): wander + reaction + procedural pose
//!
//! Архитектура:
//! - Critter component хранит аккумуляторы (reaction progress, gait phase, idle timer)
//! - CritterPose: read surface для renderer'а (рот, ноги, хвост)
//! - Transform root'а (позиция, yaw, scale) меняется на месте каждый tick
//!
//! Порядок в FixedUpdate (chain):
//! 1. handle_critter_clicks: CritterClicked → restart реакции, SoundCueRequested
//! 2. tick_critter_voices: таймеры звуковых cue
//! 3. update_critters: wander/reaction/sway

use bevy::prelude::*;

pub mod components;
pub mod config;
pub mod events;
pub mod spawn;
pub mod systems;


pub use components::*;
pub use config::{ConfigError, CritterConfig};
pub use events::{CritterClicked, SoundCueRequested};
pub use spawn::{critter_bundle, spawn_critter};
pub use systems::{handle_critter_clicks, tick_critter_voices, update_critters};

use crate::obstacles::ObstacleRegistry;

/// Critter Plugin
///
/// Регистрирует события, ObstacleRegistry и critter системы в FixedUpdate.
/// DeterministicRng должен быть вставлен заранее (SimulationPlugin / create_headless_app).
pub struct CritterPlugin;

impl Plugin for CritterPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ObstacleRegistry>()
            .add_event::<CritterClicked>()
            .add_event::<SoundCueRequested>()
            .register_type::<Critter>()
            .register_type::<CritterPose>()
            .register_type::<CritterConfig>()
            .register_type::<CritterVoice>()
            .add_systems(
                FixedUpdate,
                (handle_critter_clicks, tick_critter_voices, update_critters)
                    .chain(), // Последовательное выполнение для детерминизма
            );
    }
}

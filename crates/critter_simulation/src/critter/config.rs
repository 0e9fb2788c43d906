//! Critter config: wander + reaction + mouth, загрузка из JSON.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::animation::{MouthExtents, ReactionConfig};
use crate::wander::WanderConfig;

/// Ошибки конфига (единственная fallible поверхность core)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse critter config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid critter config: `{field}` {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Параметры critter'а
///
/// Default = поведение по умолчанию; в JSON можно переопределить любое подмножество полей.
#[derive(Component, Debug, Clone, Default, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[serde(default)]
pub struct CritterConfig {
    pub wander: WanderConfig,
    pub reaction: ReactionConfig,
    pub mouth: MouthExtents,
}

fn require(condition: bool, field: &'static str, reason: &'static str) -> Result<(), ConfigError> {
    if condition {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason })
    }
}

impl CritterConfig {
    /// Парсинг + валидация
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let wander = &self.wander;
        require(
            wander.boundary_radius.is_finite() && wander.boundary_radius > 0.0,
            "wander.boundary_radius",
            "must be positive",
        )?;
        require(wander.arrival_threshold > 0.0, "wander.arrival_threshold", "must be positive")?;
        require(wander.step_buffer >= 0.0, "wander.step_buffer", "must not be negative")?;
        require(
            wander.destination_buffer >= 0.0,
            "wander.destination_buffer",
            "must not be negative",
        )?;
        require(
            wander.max_destination_attempts >= 1,
            "wander.max_destination_attempts",
            "must be at least 1",
        )?;
        require(
            wander.idle_duration_min >= 0.0,
            "wander.idle_duration_min",
            "must not be negative",
        )?;
        require(
            wander.idle_duration_max >= wander.idle_duration_min,
            "wander.idle_duration_max",
            "must be >= idle_duration_min",
        )?;
        require(wander.turn_gain >= 0.0, "wander.turn_gain", "must not be negative")?;
        require(wander.gait_frequency >= 0.0, "wander.gait_frequency", "must not be negative")?;
        require(
            wander.walk_speed.is_finite() && wander.walk_speed > 0.0,
            "wander.walk_speed",
            "must be positive",
        )?;

        let reaction = &self.reaction;
        require(
            reaction.duration.is_finite() && reaction.duration > 0.0,
            "reaction.duration",
            "must be positive",
        )?;
        require(
            (0.0..=1.0).contains(&reaction.fade),
            "reaction.fade",
            "must be within [0, 1]",
        )?;
        require(
            reaction.bounce_height >= 0.0,
            "reaction.bounce_height",
            "must not be negative",
        )?;

        Ok(())
    }
}

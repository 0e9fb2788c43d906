//! Click reaction pose: затухающие прыжки + squash/stretch + открытый рот.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Параметры click-реакции
#[derive(Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactionConfig {
    /// Длительность реакции (секунды), совпадает с длиной звука
    pub duration: f32,
    /// Сколько прыжков за duration
    pub bounce_count: u32,
    /// Высота прыжка при fade = 1 (units)
    pub bounce_height: f32,
    /// Насколько амплитуда падает к концу (1 - progress * fade)
    pub fade: f32,
    /// Добавка к scale на пике прыжка (x, y, z); z отрицательный → сжатие по глубине
    pub stretch: Vec3,
}

impl Default for ReactionConfig {
    fn default() -> Self {
        Self {
            duration: 3.0,
            bounce_count: 3,
            bounce_height: 0.3,
            fade: 0.7,
            stretch: Vec3::new(0.08, 0.1, -0.04),
        }
    }
}

/// Крайние положения челюсти (радианы, ось X)
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct MouthExtents {
    pub closed: f32,
    pub open: f32,
}

impl Default for MouthExtents {
    fn default() -> Self {
        Self {
            closed: 0.0,
            open: 0.6,
        }
    }
}

impl MouthExtents {
    /// Линейная интерполяция closed → open
    pub fn lerp(&self, factor: f32) -> f32 {
        self.closed + (self.open - self.closed) * factor
    }
}

/// Pose offsets для одного кадра реакции
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReactionPose {
    /// Добавка к resting height
    pub vertical_offset: f32,
    pub scale: Vec3,
    /// 0 = рот закрыт, 1 = открыт полностью
    pub mouth_factor: f32,
}

impl ReactionPose {
    pub const REST: Self = Self {
        vertical_offset: 0.0,
        scale: Vec3::ONE,
        mouth_factor: 0.0,
    };
}

/// Pose для progress ∈ [0, 1)
///
/// bounce = |sin(progress · π · bounce_count)|, fade = 1 - progress · fade.
/// Последний прыжок всё ещё ~30% амплитуды: reset делает ReactionState, не эта функция.
pub fn reaction_pose(progress: f32, config: &ReactionConfig) -> ReactionPose {
    let bounce = (progress * std::f32::consts::PI * config.bounce_count as f32)
        .sin()
        .abs();
    let fade_out = 1.0 - progress * config.fade;
    let amount = bounce * fade_out;

    ReactionPose {
        vertical_offset: amount * config.bounce_height,
        scale: Vec3::ONE + config.stretch * amount,
        mouth_factor: amount,
    }
}

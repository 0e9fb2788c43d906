//! Leg gait: diagonal-pair походка.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Максимальный угол размаха ноги (радианы)
pub const LEG_SWING_AMPLITUDE: f32 = 0.3;

/// Углы поворота ног вокруг бедра (радианы, ось X)
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect, Serialize, Deserialize)]
pub struct LegAngles {
    pub front_left: f32,
    pub front_right: f32,
    pub back_left: f32,
    pub back_right: f32,
}

impl LegAngles {
    /// Нейтральная поза (все ноги вертикально)
    pub const NEUTRAL: Self = Self {
        front_left: 0.0,
        front_right: 0.0,
        back_left: 0.0,
        back_right: 0.0,
    };

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

/// Углы ног для фазы походки
///
/// front_left + back_right идут в фазе (+swing), front_right + back_left в противофазе.
/// phase = 0 → все нули (используется для idle/reaction).
pub fn compute_leg_angles(phase: f32) -> LegAngles {
    let swing = phase.sin() * LEG_SWING_AMPLITUDE;

    LegAngles {
        front_left: swing,
        front_right: -swing,
        back_left: -swing,
        back_right: swing,
    }
}

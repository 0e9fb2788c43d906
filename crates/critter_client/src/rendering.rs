//! Pose sync: CritterPose → transforms анимируемых под-частей
//!
//! Root transform critter'а пишет симуляция напрямую, здесь только
//! pivot'ы челюсти, ног и хвоста.

use bevy::prelude::*;
use critter_simulation::{CritterPose, LegAngles};

pub struct PoseSyncPlugin;

impl Plugin for PoseSyncPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, apply_critter_poses);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegSlot {
    FrontLeft,
    FrontRight,
    BackLeft,
    BackRight,
}

impl LegSlot {
    pub const ALL: [LegSlot; 4] = [
        LegSlot::FrontLeft,
        LegSlot::FrontRight,
        LegSlot::BackLeft,
        LegSlot::BackRight,
    ];

    pub fn angle(self, legs: &LegAngles) -> f32 {
        match self {
            LegSlot::FrontLeft => legs.front_left,
            LegSlot::FrontRight => legs.front_right,
            LegSlot::BackLeft => legs.back_left,
            LegSlot::BackRight => legs.back_right,
        }
    }

    pub fn is_front(self) -> bool {
        matches!(self, LegSlot::FrontLeft | LegSlot::FrontRight)
    }

    pub fn is_left(self) -> bool {
        matches!(self, LegSlot::FrontLeft | LegSlot::BackLeft)
    }
}

/// Какую часть pose двигает pivot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CritterPart {
    Mouth,
    Leg(LegSlot),
    Tail,
}

/// Pivot под-части: владелец + поза покоя (pose добавляется поверх rest)
#[derive(Component, Debug, Clone, Copy)]
pub struct PosedPart {
    pub critter: Entity,
    pub part: CritterPart,
    pub rest: Transform,
}

impl PosedPart {
    /// Локальное вращение pivot'а для текущей pose
    pub fn rotation(&self, pose: &CritterPose) -> Quat {
        let swing = match self.part {
            // Челюсть смотрит вдоль +Z, +X поворот опускает её вниз
            CritterPart::Mouth => Quat::from_rotation_x(pose.mouth),
            CritterPart::Leg(slot) => Quat::from_rotation_x(slot.angle(&pose.legs)),
            CritterPart::Tail => Quat::from_rotation_y(pose.tail),
        };

        self.rest.rotation * swing
    }
}

fn apply_critter_poses(
    poses: Query<&CritterPose>,
    mut parts: Query<(&PosedPart, &mut Transform)>,
) {
    for (part, mut transform) in parts.iter_mut() {
        let Ok(pose) = poses.get(part.critter) else {
            continue;
        };

        let rotation = part.rotation(pose);
        if transform.rotation != rotation {
            transform.rotation = rotation;
        }
    }
}

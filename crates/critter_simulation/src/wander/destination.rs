//! Destination selection (rejection sampling вокруг origin).

use bevy::prelude::*;
use rand::Rng;
use crate::obstacles::ObstacleRegistry;
use super::WanderConfig;

/// Результат выбора destination
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DestinationPick {
    pub point: Vec2,
    /// Сколько кандидатов перебрали
    pub attempts: u32,
    /// false → лимит исчерпан, point = последний кандидат (может задевать obstacle)
    pub clear: bool,
}

/// Случайная точка в диске boundary_radius вокруг origin
///
/// angle ∈ [0, 2π), distance ∈ [0, R]: равномерно по радиусу, НЕ по площади:
/// точки гуще у центра. Кандидаты ближе destination_buffer к obstacle отбрасываются.
pub fn pick_destination<R: Rng + ?Sized>(
    rng: &mut R,
    obstacles: &ObstacleRegistry,
    config: &WanderConfig,
) -> DestinationPick {
    let mut candidate = Vec2::ZERO;
    let mut attempts = 0;

    while attempts < config.max_destination_attempts {
        attempts += 1;

        let angle = rng.gen::<f32>() * std::f32::consts::TAU;
        let distance = rng.gen_range(0.0..=config.boundary_radius);
        candidate = Vec2::new(angle.cos() * distance, angle.sin() * distance);

        if !obstacles.collides(candidate, config.destination_buffer) {
            return DestinationPick {
                point: candidate,
                attempts,
                clear: true,
            };
        }
    }

    crate::log_warning(&format!(
        "Wander: no clear destination after {} attempts, accepting ({:.2}, {:.2})",
        attempts, candidate.x, candidate.y
    ));

    DestinationPick {
        point: candidate,
        attempts,
        clear: false,
    }
}

/// Случайная idle пауза из [idle_duration_min, idle_duration_max]
pub fn pick_idle_duration<R: Rng + ?Sized>(rng: &mut R, config: &WanderConfig) -> f32 {
    if config.idle_duration_max <= config.idle_duration_min {
        return config.idle_duration_min;
    }
    rng.gen_range(config.idle_duration_min..=config.idle_duration_max)
}

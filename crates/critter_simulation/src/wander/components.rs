//! Wander state + config.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use crate::obstacles::{DESTINATION_BUFFER, STEP_BUFFER};

/// Состояние wander FSM
///
/// Инвариант: idle_duration перевыбирается при каждом новом destination
/// и при каждом прибытии.
#[derive(Debug, Clone, PartialEq, Reflect)]
pub struct WanderState {
    /// Текущая цель на ground plane (x, z)
    pub destination: Vec2,
    /// true → Idle (стоим, считаем паузу), false → Walking
    pub is_idle: bool,
    /// Сколько уже стоим (секунды)
    pub idle_elapsed: f32,
    /// Сколько стоять до следующей прогулки (секунды)
    pub idle_duration: f32,
}

impl WanderState {
    /// Idle на месте, пауза idle_duration
    pub fn idle_at(position: Vec2, idle_duration: f32) -> Self {
        Self {
            destination: position,
            is_idle: true,
            idle_elapsed: 0.0,
            idle_duration,
        }
    }

    pub fn is_walking(&self) -> bool {
        !self.is_idle
    }
}

/// Locomotion параметры critter'а, которые меняет wander
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct Locomotion {
    /// Yaw (радианы), 0 → смотрим вдоль +Z
    pub heading: f32,
    /// Скорость ходьбы (units/sec), константа на critter
    pub speed: f32,
    /// Аккумулятор фазы походки
    pub gait_phase: f32,
}

impl Locomotion {
    pub fn new(speed: f32) -> Self {
        Self {
            heading: 0.0,
            speed,
            gait_phase: 0.0,
        }
    }
}

/// Параметры wander поведения
#[derive(Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct WanderConfig {
    /// Радиус диска вокруг origin, из которого берутся destinations
    pub boundary_radius: f32,
    /// Дистанция "дошли" (units)
    pub arrival_threshold: f32,
    /// Buffer для проверки следующего шага
    pub step_buffer: f32,
    /// Buffer для проверки destination кандидата
    pub destination_buffer: f32,
    /// Лимит rejection sampling; после него принимаем последний кандидат
    pub max_destination_attempts: u32,
    /// Диапазон idle паузы (секунды)
    pub idle_duration_min: f32,
    pub idle_duration_max: f32,
    /// Proportional gain поворота (×delta)
    pub turn_gain: f32,
    /// Скорость набора фазы походки (радиан/сек)
    pub gait_frequency: f32,
    /// Скорость ходьбы по умолчанию (units/sec)
    pub walk_speed: f32,
}

impl Default for WanderConfig {
    fn default() -> Self {
        Self {
            boundary_radius: 8.0,
            arrival_threshold: 0.2,
            step_buffer: STEP_BUFFER,
            destination_buffer: DESTINATION_BUFFER,
            max_destination_attempts: 10,
            idle_duration_min: 1.0,
            idle_duration_max: 4.0,
            turn_gain: 3.0,
            gait_frequency: 8.0,
            walk_speed: 1.5,
        }
    }
}

//! Wander FSM tick: idle countdown, steering, obstacle redirect.

use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::{PI, TAU};
use crate::obstacles::ObstacleRegistry;
use super::destination::{pick_destination, pick_idle_duration, DestinationPick};
use super::{Locomotion, WanderConfig, WanderState};

/// Что произошло за один wander tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WanderStep {
    /// Idle, пауза ещё идёт
    Resting,
    /// Idle → Walking, выбран новый destination (в этот tick не двигаемся)
    StartedWalking(DestinationPick),
    /// Сделали шаг к destination
    Walked,
    /// Дошли до destination → Idle
    Arrived,
    /// Следующий шаг упирался в obstacle: новый destination, шаг пропущен
    Redirected(DestinationPick),
}

/// Кратчайший угол от `from` к `to`, в [-π, π)
pub fn shortest_angle(from: f32, to: f32) -> f32 {
    (to - from + PI).rem_euclid(TAU) - PI
}

impl WanderState {
    /// Новый destination + новая idle пауза
    pub fn retarget<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        obstacles: &ObstacleRegistry,
        config: &WanderConfig,
    ) -> DestinationPick {
        let pick = pick_destination(rng, obstacles, config);
        self.destination = pick.point;
        self.idle_duration = pick_idle_duration(rng, config);
        pick
    }

    /// Один tick wander FSM
    ///
    /// `position`: текущая позиция на ground plane (x, z), меняется только в Walked.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        body: &mut Locomotion,
        position: &mut Vec2,
        delta: f32,
        obstacles: &ObstacleRegistry,
        config: &WanderConfig,
        rng: &mut R,
    ) -> WanderStep {
        if self.is_idle {
            self.idle_elapsed += delta;

            if self.idle_elapsed < self.idle_duration {
                return WanderStep::Resting;
            }

            // Пауза закончилась → Idle → Walking
            self.is_idle = false;
            self.idle_elapsed = 0.0;
            let pick = self.retarget(rng, obstacles, config);
            return WanderStep::StartedWalking(pick);
        }

        let offset = self.destination - *position;
        let distance = offset.length();

        if distance < config.arrival_threshold {
            // Walking → Idle
            self.is_idle = true;
            self.idle_elapsed = 0.0;
            self.idle_duration = pick_idle_duration(rng, config);
            return WanderStep::Arrived;
        }

        let direction = offset / distance;
        let proposed = *position + direction * body.speed * delta;

        if obstacles.collides(proposed, config.step_buffer) {
            // Бросаем цель целиком, частичного шага нет
            let pick = self.retarget(rng, obstacles, config);
            return WanderStep::Redirected(pick);
        }

        // atan2(dx, dz): heading 0 смотрит вдоль +Z
        let desired = direction.x.atan2(direction.y);
        let turn = shortest_angle(body.heading, desired) * delta * config.turn_gain;
        body.heading = shortest_angle(0.0, body.heading + turn);

        *position = proposed;
        body.gait_phase += delta * config.gait_frequency;

        WanderStep::Walked
    }
}

//! Critter components (state, pose, voice).

use bevy::prelude::*;
use rand::Rng;
use crate::animation::{compute_leg_angles, reaction_pose, tail_sway, LegAngles, ReactionConfig, ReactionPose};
use crate::obstacles::{planar, ObstacleRegistry};
use crate::wander::{Locomotion, WanderState, WanderStep};
use super::CritterConfig;

/// Состояние click-реакции
///
/// Инвариант: progress ∈ [0, 1). Как только progress дошёл бы до 1,
/// reset в том же tick'е (reacting = false, progress = 0).
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect)]
pub struct ReactionState {
    pub reacting: bool,
    pub progress: f32,
}

/// Результат одного tick'а реакции
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReactionTick {
    /// Реакции нет
    Inactive,
    /// Реакция идёт, pose для этого кадра
    Active(ReactionPose),
    /// Реакция закончилась в этом tick'е, state уже сброшен
    Finished,
}

impl ReactionState {
    /// Запуск (или перезапуск с нуля, если уже реагируем)
    pub fn start(&mut self) {
        self.reacting = true;
        self.progress = 0.0;
    }

    pub fn advance(&mut self, delta: f32, config: &ReactionConfig) -> ReactionTick {
        if !self.reacting {
            return ReactionTick::Inactive;
        }

        let progress = self.progress + delta / config.duration;

        if progress >= 1.0 {
            // Overshoot (большой delta) тоже сюда: clamp к 1 = reset
            self.reacting = false;
            self.progress = 0.0;
            return ReactionTick::Finished;
        }

        self.progress = progress;
        ReactionTick::Active(reaction_pose(progress, config))
    }
}

/// Звуковая способность critter'а (optional component)
///
/// Нет компонента → critter молчит, click только анимирует.
/// "Играет ли звук" считаем сами по длине cue: audio backend'у не доверяем.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct CritterVoice {
    /// Длина звукового cue (секунды)
    pub cue_length: f32,
    remaining: f32,
}

impl Default for CritterVoice {
    fn default() -> Self {
        Self::new(3.0)
    }
}

impl CritterVoice {
    pub fn new(cue_length: f32) -> Self {
        Self {
            cue_length,
            remaining: 0.0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.remaining > 0.0
    }

    /// Запустить cue если он ещё не играет. true → нужно проиграть звук.
    pub fn try_play(&mut self) -> bool {
        if self.is_playing() {
            return false;
        }
        self.remaining = self.cue_length;
        true
    }

    pub fn tick(&mut self, delta: f32) {
        self.remaining = (self.remaining - delta).max(0.0);
    }
}

/// Pose под-частей для renderer'а (пересчитывается каждый tick)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct CritterPose {
    /// Угол челюсти (радианы)
    pub mouth: f32,
    pub legs: LegAngles,
    /// Угол хвоста (радианы, yaw относительно тела)
    pub tail: f32,
}

/// Что изменилось за tick (для логов)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CritterTransition {
    StartedWalking { destination: Vec2, clear: bool },
    Arrived,
    Redirected { destination: Vec2, clear: bool },
    ReactionFinished,
}

/// Всё что нужно critter'у на один tick
pub struct TickContext<'a, R: Rng + ?Sized> {
    /// Шаг симуляции (секунды), >= 0
    pub delta: f32,
    /// Время с начала симуляции (секунды): для ambient sway
    pub elapsed: f32,
    pub obstacles: &'a ObstacleRegistry,
    pub config: &'a CritterConfig,
    pub rng: &'a mut R,
}

/// Critter (животное на сцене)
///
/// Позиция/yaw/scale живут в Transform, pose под-частей: в CritterPose.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
#[require(Transform, CritterPose, CritterConfig)]
pub struct Critter {
    /// Высота root'а в покое (y без анимации)
    pub resting_height: f32,
    pub locomotion: Locomotion,
    pub reaction: ReactionState,
    pub wander: WanderState,
}

impl Critter {
    /// Critter стоит в `position`, idle пауза `idle_duration`
    pub fn new(position: Vec3, speed: f32, idle_duration: f32) -> Self {
        Self {
            resting_height: position.y,
            locomotion: Locomotion::new(speed),
            reaction: ReactionState::default(),
            wander: WanderState::idle_at(planar(position), idle_duration),
        }
    }

    pub fn is_reacting(&self) -> bool {
        self.reaction.reacting
    }

    /// Click: (пере)запуск реакции + звук если есть voice и он не играет
    ///
    /// Возвращает true если нужно проиграть звуковой cue.
    pub fn on_click(&mut self, voice: Option<&mut CritterVoice>) -> bool {
        self.reaction.start();
        voice.is_some_and(|voice| voice.try_play())
    }

    /// Один tick: reaction (приоритет) или wander, плюс ambient sway
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        ctx: &mut TickContext<'_, R>,
        transform: &mut Transform,
        pose: &mut CritterPose,
    ) -> Option<CritterTransition> {
        pose.tail = tail_sway(ctx.elapsed);

        let reacted = match self.reaction.advance(ctx.delta, &ctx.config.reaction) {
            ReactionTick::Active(reaction) => Some((reaction, None)),
            // Конец цикла: ровно rest pose, без приближений
            ReactionTick::Finished => Some((ReactionPose::REST, Some(CritterTransition::ReactionFinished))),
            ReactionTick::Inactive => None,
        };

        if let Some((reaction, transition)) = reacted {
            // Wander полностью приостановлен: x/z и yaw не трогаем
            transform.translation.y = self.resting_height + reaction.vertical_offset;
            transform.scale = reaction.scale;
            pose.mouth = ctx.config.mouth.lerp(reaction.mouth_factor);
            pose.legs = compute_leg_angles(0.0);
            return transition;
        }

        let mut position = planar(transform.translation);
        let step = self.wander.tick(
            &mut self.locomotion,
            &mut position,
            ctx.delta,
            ctx.obstacles,
            &ctx.config.wander,
            &mut *ctx.rng,
        );

        transform.translation.x = position.x;
        transform.translation.z = position.y;
        transform.rotation = Quat::from_rotation_y(self.locomotion.heading);
        pose.mouth = ctx.config.mouth.closed;
        pose.legs = if self.wander.is_idle {
            compute_leg_angles(0.0)
        } else {
            compute_leg_angles(self.locomotion.gait_phase)
        };

        match step {
            WanderStep::Resting | WanderStep::Walked => None,
            WanderStep::StartedWalking(pick) => Some(CritterTransition::StartedWalking {
                destination: pick.point,
                clear: pick.clear,
            }),
            WanderStep::Arrived => Some(CritterTransition::Arrived),
            WanderStep::Redirected(pick) => Some(CritterTransition::Redirected {
                destination: pick.point,
                clear: pick.clear,
            }),
        }
    }
}

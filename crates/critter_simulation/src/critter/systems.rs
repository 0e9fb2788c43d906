//! Critter systems (FixedUpdate).

use bevy::prelude::*;
use crate::obstacles::ObstacleRegistry;
use crate::DeterministicRng;
use super::{
    Critter, CritterClicked, CritterConfig, CritterPose, CritterTransition, CritterVoice,
    SoundCueRequested, TickContext,
};

/// Система: CritterClicked → restart реакции + SoundCueRequested
pub fn handle_critter_clicks(
    mut clicks: EventReader<CritterClicked>,
    mut critters: Query<(&mut Critter, &Transform, Option<&mut CritterVoice>)>,
    mut cues: EventWriter<SoundCueRequested>,
) {
    for click in clicks.read() {
        let Ok((mut critter, transform, voice)) = critters.get_mut(click.entity) else {
            crate::log_warning(&format!("Click on unknown critter {:?}, ignored", click.entity));
            continue;
        };

        let restarted = critter.is_reacting();
        let play_sound = critter.on_click(voice.map(Mut::into_inner));

        crate::log_info(&format!(
            "Critter {:?} clicked ({}{})",
            click.entity,
            if restarted { "reaction restarted" } else { "reaction started" },
            if play_sound { ", sound cue" } else { "" }
        ));

        if play_sound {
            cues.write(SoundCueRequested {
                entity: click.entity,
                position: transform.translation,
            });
        }
    }
}

/// Система: таймеры звуковых cue
pub fn tick_critter_voices(time: Res<Time<Fixed>>, mut voices: Query<&mut CritterVoice>) {
    let delta = time.delta_secs();

    for mut voice in voices.iter_mut() {
        // Не трогаем молчащие voice (иначе Changed<CritterVoice> каждый tick)
        if voice.is_playing() {
            voice.tick(delta);
        }
    }
}

/// Система: wander / reaction / sway для всех critter'ов
pub fn update_critters(
    time: Res<Time<Fixed>>,
    obstacles: Res<ObstacleRegistry>,
    mut rng: ResMut<DeterministicRng>,
    mut critters: Query<(Entity, &mut Critter, &CritterConfig, &mut Transform, &mut CritterPose)>,
) {
    let delta = time.delta_secs();
    let elapsed = time.elapsed_secs();

    for (entity, mut critter, config, mut transform, mut pose) in critters.iter_mut() {
        let mut ctx = TickContext {
            delta,
            elapsed,
            obstacles: &*obstacles,
            config,
            rng: &mut rng.rng,
        };

        let Some(transition) = critter.update(&mut ctx, &mut *transform, &mut *pose) else {
            continue;
        };

        match transition {
            CritterTransition::StartedWalking { destination, clear } => {
                crate::log(&format!(
                    "Critter {:?}: Idle → Walking to ({:.2}, {:.2}){}",
                    entity,
                    destination.x,
                    destination.y,
                    if clear { "" } else { " [fallback]" }
                ));
            }
            CritterTransition::Arrived => {
                crate::log(&format!(
                    "Critter {:?}: Walking → Idle for {:.2}s",
                    entity, critter.wander.idle_duration
                ));
            }
            CritterTransition::Redirected { destination, clear } => {
                crate::log(&format!(
                    "Critter {:?}: obstacle ahead, redirect to ({:.2}, {:.2}){}",
                    entity,
                    destination.x,
                    destination.y,
                    if clear { "" } else { " [fallback]" }
                ));
            }
            CritterTransition::ReactionFinished => {
                crate::log(&format!("Critter {:?}: reaction finished, pose reset", entity));
            }
        }
    }
}

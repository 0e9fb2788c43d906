//! Spawn helpers.

use bevy::prelude::*;
use rand::Rng;
use crate::wander::pick_idle_duration;
use super::{Critter, CritterConfig, CritterVoice};

/// Компоненты нового critter'а (стоит в `position`, случайная idle пауза)
pub fn critter_bundle<R: Rng + ?Sized>(
    position: Vec3,
    config: CritterConfig,
    rng: &mut R,
) -> (Critter, CritterConfig, Transform) {
    let idle_duration = pick_idle_duration(rng, &config.wander);
    let critter = Critter::new(position, config.wander.walk_speed, idle_duration);

    (critter, config, Transform::from_translation(position))
}

/// Spawn critter'а через Commands
///
/// voice = None → critter молчит (нет звукового ассета).
pub fn spawn_critter<R: Rng + ?Sized>(
    commands: &mut Commands,
    position: Vec3,
    config: CritterConfig,
    voice: Option<CritterVoice>,
    rng: &mut R,
) -> Entity {
    let mut entity = commands.spawn(critter_bundle(position, config, rng));

    if let Some(voice) = voice {
        entity.insert(voice);
    }

    let id = entity.id();
    crate::log(&format!("Critter {:?} spawned at {:?}", id, position));
    id
}

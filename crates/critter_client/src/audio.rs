//! Positional audio для click-реакций
//!
//! Нет файла звука → SoundBank пустой, critter'ы спавнятся без CritterVoice (молчат).

use bevy::prelude::*;
use critter_simulation::{CritterVoice, SoundCueRequested};

use crate::config::asset_root;

pub const SQUEAK_PATH: &str = "sounds/squeak.ogg";

pub struct CritterAudioPlugin;

impl Plugin for CritterAudioPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SoundBank>()
            .add_systems(Update, play_sound_cues);
    }
}

/// Загруженные звуки (None → ассета нет на диске)
#[derive(Resource, Debug, Default)]
pub struct SoundBank {
    pub squeak: Option<Handle<AudioSource>>,
}

impl FromWorld for SoundBank {
    fn from_world(world: &mut World) -> Self {
        let on_disk = asset_root().join(SQUEAK_PATH);

        if !on_disk.exists() {
            critter_simulation::log_warning(&format!(
                "Sound {} not found, critters will be silent",
                on_disk.display()
            ));
            return Self::default();
        }

        let server = world.resource::<AssetServer>();
        Self {
            squeak: Some(server.load(SQUEAK_PATH)),
        }
    }
}

impl SoundBank {
    /// Voice для нового critter'а (если есть звук)
    pub fn voice(&self, cue_length: f32) -> Option<CritterVoice> {
        self.squeak.as_ref().map(|_| CritterVoice::new(cue_length))
    }
}

/// SoundCueRequested → spatial AudioPlayer в позиции critter'а (despawn после проигрывания)
fn play_sound_cues(
    mut commands: Commands,
    mut cues: EventReader<SoundCueRequested>,
    bank: Res<SoundBank>,
) {
    let Some(squeak) = bank.squeak.as_ref() else {
        cues.clear();
        return;
    };

    for cue in cues.read() {
        commands.spawn((
            AudioPlayer::new(squeak.clone()),
            PlaybackSettings::DESPAWN.with_spatial(true),
            Transform::from_translation(cue.position),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bank_spawns_silent_critters() {
        assert!(SoundBank::default().voice(3.0).is_none());
    }

    #[test]
    fn test_loaded_bank_gives_voice_with_cue_length() {
        let bank = SoundBank {
            squeak: Some(Handle::default()),
        };

        let voice = bank.voice(3.0).expect("voice with loaded squeak");
        assert_eq!(voice.cue_length, 3.0);
        assert!(!voice.is_playing());
    }
}

//! Critter events (driver ↔ core)

use bevy::prelude::*;

/// Click по critter'у (driver уже разрешил hit test → entity)
#[derive(Event, Debug, Clone, Copy)]
pub struct CritterClicked {
    pub entity: Entity,
}

/// Core просит driver проиграть positional звуковой cue
#[derive(Event, Debug, Clone, Copy)]
pub struct SoundCueRequested {
    pub entity: Entity,
    /// Позиция critter'а в момент click'а
    pub position: Vec3,
}

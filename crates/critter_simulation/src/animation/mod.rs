//! Procedural animation: чистые функции времени → pose параметры
//!
//! - gait: walk phase → углы ног (diagonal pairs)
//! - reaction: прогресс click-реакции → bounce, squash/stretch, рот
//! - sway: абсолютное время → угол хвоста
//!
//! Никакого состояния: аккумуляторы (progress, gait phase) живут в Critter.

pub mod gait;
pub mod reaction;
pub mod sway;


pub use gait::{compute_leg_angles, LegAngles, LEG_SWING_AMPLITUDE};
pub use reaction::{reaction_pose, MouthExtents, ReactionConfig, ReactionPose};
pub use sway::{tail_sway, TAIL_SWAY_AMPLITUDE, TAIL_SWAY_RATE_PER_MS};

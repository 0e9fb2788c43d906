//! Wander: autonomous idle/walk поведение
//!
//! Idle → Walking → (Redirect)* → Idle → ...
//!
//! - destination: случайная точка в диске вокруг origin (не вокруг critter'а)
//! - steering: proportional поворот к цели + шаг вдоль направления
//! - obstacle на пути → бросаем цель, берём новую, шаг пропускаем
//!
//! Полностью приостанавливается пока critter реагирует на click.

pub mod components;
pub mod destination;
pub mod steering;


pub use components::*;
pub use destination::{pick_destination, pick_idle_duration, DestinationPick};
pub use steering::{shortest_angle, WanderStep};

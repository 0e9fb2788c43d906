//! Obstacle registry: круглые зоны исключения на ground plane
//!
//! Используется wander логикой:
//! - STEP_BUFFER для проверки следующего шага при ходьбе
//! - DESTINATION_BUFFER для проверки кандидата в destination
//!
//! Obstacles неизменяемы после регистрации, удаления нет.
//! Запрос: линейный скан (obstacles единицы штук, spatial index не нужен).

use bevy::prelude::*;


/// Буфер для проверки шага во время ходьбы (units)
pub const STEP_BUFFER: f32 = 0.5;

/// Буфер для проверки destination кандидата (units)
///
/// Больше STEP_BUFFER: destination у самого края obstacle недостижим без касания.
pub const DESTINATION_BUFFER: f32 = 0.8;

/// Проекция 3D точки на ground plane (x, z)
pub fn planar(point: Vec3) -> Vec2 {
    Vec2::new(point.x, point.z)
}

/// Точка на ground plane (x, z). Принимает Vec2 как есть, у Vec3 отбрасывает y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundPoint(pub Vec2);

impl From<Vec2> for GroundPoint {
    fn from(point: Vec2) -> Self {
        Self(point)
    }
}

impl From<Vec3> for GroundPoint {
    fn from(point: Vec3) -> Self {
        Self(planar(point))
    }
}

/// Круглая зона исключения
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct Obstacle {
    /// Центр на ground plane (x, z)
    pub position: Vec2,
    pub radius: f32,
}

impl Obstacle {
    pub fn new(position: impl Into<GroundPoint>, radius: f32) -> Self {
        Self {
            position: position.into().0,
            radius,
        }
    }

    /// true если candidate ближе чем radius + buffer к центру
    pub fn contains(&self, candidate: Vec2, buffer: f32) -> bool {
        candidate.distance(self.position) < self.radius + buffer
    }
}

/// Список obstacles сцены (read-only во время FixedUpdate)
///
/// Не дедуплицируется: два одинаковых obstacle: просто две записи.
#[derive(Resource, Debug, Clone, Default, Reflect)]
#[reflect(Resource)]
pub struct ObstacleRegistry {
    obstacles: Vec<Obstacle>,
}

impl ObstacleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_obstacle(&mut self, position: impl Into<GroundPoint>, radius: f32) {
        let obstacle = Obstacle::new(position, radius);
        crate::log(&format!(
            "Obstacle registered at ({:.2}, {:.2}) radius {:.2}",
            obstacle.position.x, obstacle.position.y, obstacle.radius
        ));
        self.obstacles.push(obstacle);
    }

    /// Пересекает ли candidate хоть один obstacle с учётом buffer
    pub fn collides(&self, candidate: Vec2, buffer: f32) -> bool {
        self.obstacles
            .iter()
            .any(|obstacle| obstacle.contains(candidate, buffer))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Очистка при пересборке сцены (вне FixedUpdate окна)
    pub fn clear(&mut self) {
        self.obstacles.clear();
    }
}

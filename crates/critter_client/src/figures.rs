//! Процедурные фигуры животных из примитивов
//!
//! Root entity = Critter (симуляция двигает его transform). Тело центрировано
//! на root'е, ноги свисают до земли, поэтому resting_height = leg + body/2.
//! Голова смотрит вдоль +Z (heading 0 = +Z в симуляции).

use bevy::prelude::*;

use crate::picking::PickRegistry;
use crate::rendering::{CritterPart, LegSlot, PosedPart};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Species {
    Pig,
    Sheep,
    Cow,
}

/// Размеры фигуры (метры)
#[derive(Debug, Clone, Copy)]
pub struct Proportions {
    /// Ширина (x), высота (y), длина (z) туловища
    pub body: Vec3,
    pub head: f32,
    pub leg_length: f32,
    pub leg_thickness: f32,
    pub tail_length: f32,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Pig, Species::Sheep, Species::Cow];

    pub fn proportions(self) -> Proportions {
        match self {
            Species::Pig => Proportions {
                body: Vec3::new(0.7, 0.6, 1.0),
                head: 0.5,
                leg_length: 0.3,
                leg_thickness: 0.15,
                tail_length: 0.25,
            },
            Species::Sheep => Proportions {
                body: Vec3::new(0.8, 0.7, 1.0),
                head: 0.4,
                leg_length: 0.4,
                leg_thickness: 0.12,
                tail_length: 0.2,
            },
            Species::Cow => Proportions {
                body: Vec3::new(0.9, 0.8, 1.4),
                head: 0.55,
                leg_length: 0.55,
                leg_thickness: 0.18,
                tail_length: 0.5,
            },
        }
    }

    pub fn body_color(self) -> Color {
        match self {
            Species::Pig => Color::srgb(0.96, 0.7, 0.72),
            Species::Sheep => Color::srgb(0.95, 0.95, 0.92),
            Species::Cow => Color::srgb(0.95, 0.95, 0.95),
        }
    }

    /// Морда/пятна/копыта
    pub fn accent_color(self) -> Color {
        match self {
            Species::Pig => Color::srgb(0.9, 0.55, 0.6),
            Species::Sheep => Color::srgb(0.2, 0.2, 0.22),
            Species::Cow => Color::srgb(0.12, 0.12, 0.12),
        }
    }

    /// Высота root'а над землёй в покое
    pub fn resting_height(self) -> f32 {
        let proportions = self.proportions();
        proportions.leg_length + proportions.body.y * 0.5
    }
}

/// Собирает фигуру одного critter'а
///
/// Каждый mesh регистрируется в PickRegistry → click по любой части попадает в critter.
pub struct FigureBuilder<'a, 'w, 's> {
    pub commands: &'a mut Commands<'w, 's>,
    pub meshes: &'a mut Assets<Mesh>,
    pub materials: &'a mut Assets<StandardMaterial>,
    pub picks: &'a mut PickRegistry,
    pub critter: Entity,
}

impl FigureBuilder<'_, '_, '_> {
    pub fn material(&mut self, color: Color) -> Handle<StandardMaterial> {
        self.materials.add(StandardMaterial {
            base_color: color,
            perceptual_roughness: 0.9,
            ..default()
        })
    }

    /// Видимый (и кликабельный) кусок фигуры
    pub fn mesh_part(
        &mut self,
        parent: Entity,
        mesh: impl Into<Mesh>,
        material: &Handle<StandardMaterial>,
        transform: Transform,
    ) -> Entity {
        let node = self
            .commands
            .spawn((
                Mesh3d(self.meshes.add(mesh)),
                MeshMaterial3d(material.clone()),
                transform,
                ChildOf(parent),
            ))
            .id();

        self.picks.register(node, self.critter);
        node
    }

    /// Невидимый шарнир: его вращает pose sync
    pub fn pivot(&mut self, parent: Entity, part: CritterPart, rest: Transform) -> Entity {
        self.commands
            .spawn((
                rest,
                Visibility::default(),
                ChildOf(parent),
                PosedPart {
                    critter: self.critter,
                    part,
                    rest,
                },
            ))
            .id()
    }

    pub fn build(mut self, species: Species) {
        let p = species.proportions();
        let root = self.critter;
        let skin = self.material(species.body_color());
        let accent = self.material(species.accent_color());
        let dark = self.material(Color::srgb(0.05, 0.05, 0.05));

        self.mesh_part(root, Cuboid::from_size(p.body), &skin, Transform::IDENTITY);

        // Голова
        let head_center = Vec3::new(0.0, p.body.y * 0.35, p.body.z * 0.5 + p.head * 0.35);
        let head_material = if species == Species::Sheep { accent.clone() } else { skin.clone() };
        let head = self.mesh_part(
            root,
            Cuboid::from_length(p.head),
            &head_material,
            Transform::from_translation(head_center),
        );

        // Челюсть: шарнир у задней нижней кромки головы
        let jaw = self.pivot(
            head,
            CritterPart::Mouth,
            Transform::from_xyz(0.0, -p.head * 0.5, -p.head * 0.35),
        );
        self.mesh_part(
            jaw,
            Cuboid::new(p.head * 0.8, p.head * 0.15, p.head * 0.8),
            &accent,
            Transform::from_xyz(0.0, -p.head * 0.075, p.head * 0.4),
        );

        // Глаза
        for side in [-1.0, 1.0] {
            self.mesh_part(
                head,
                Sphere::new(p.head * 0.08),
                &dark,
                Transform::from_xyz(side * p.head * 0.25, p.head * 0.15, p.head * 0.5),
            );
        }

        // Ноги: шарнир у низа туловища, mesh свисает вниз
        for slot in LegSlot::ALL {
            let x = p.body.x * 0.5 - p.leg_thickness;
            let z = p.body.z * 0.5 - p.leg_thickness;
            let hip = Vec3::new(
                if slot.is_left() { -x } else { x },
                -p.body.y * 0.5,
                if slot.is_front() { z } else { -z },
            );

            let leg = self.pivot(root, CritterPart::Leg(slot), Transform::from_translation(hip));
            let leg_material = if species == Species::Pig { skin.clone() } else { accent.clone() };
            self.mesh_part(
                leg,
                Cuboid::new(p.leg_thickness, p.leg_length, p.leg_thickness),
                &leg_material,
                Transform::from_xyz(0.0, -p.leg_length * 0.5, 0.0),
            );
        }

        // Хвост: опущен назад-вниз, sway вокруг локального Y
        let tail = self.pivot(
            root,
            CritterPart::Tail,
            Transform::from_xyz(0.0, p.body.y * 0.2, -p.body.z * 0.5)
                .with_rotation(Quat::from_rotation_x(-0.5)),
        );
        let tail_material = if species == Species::Cow { accent.clone() } else { skin.clone() };
        self.mesh_part(
            tail,
            Cuboid::new(0.06, 0.06, p.tail_length),
            &tail_material,
            Transform::from_xyz(0.0, 0.0, -p.tail_length * 0.5),
        );

        self.decorate(species, &p, head, &skin, &accent);
    }

    fn decorate(
        &mut self,
        species: Species,
        p: &Proportions,
        head: Entity,
        skin: &Handle<StandardMaterial>,
        accent: &Handle<StandardMaterial>,
    ) {
        let root = self.critter;

        match species {
            Species::Pig => {
                self.mesh_part(
                    head,
                    Cylinder::new(p.head * 0.25, 0.1),
                    accent,
                    Transform::from_xyz(0.0, -p.head * 0.1, p.head * 0.5 + 0.05)
                        .with_rotation(Quat::from_rotation_x(std::f32::consts::FRAC_PI_2)),
                );
                for side in [-1.0, 1.0] {
                    self.mesh_part(
                        head,
                        Cuboid::new(p.head * 0.25, p.head * 0.25, 0.04),
                        accent,
                        Transform::from_xyz(side * p.head * 0.3, p.head * 0.55, 0.0)
                            .with_rotation(Quat::from_rotation_z(side * 0.4)),
                    );
                }
            }
            Species::Sheep => {
                // Шерсть: шары поверх туловища
                for x in [-0.2, 0.2] {
                    for z in [-0.3, 0.0, 0.3] {
                        self.mesh_part(
                            root,
                            Sphere::new(0.28),
                            skin,
                            Transform::from_xyz(x, p.body.y * 0.45, z),
                        );
                    }
                }
                for side in [-1.0, 1.0] {
                    self.mesh_part(
                        head,
                        Cuboid::new(p.head * 0.4, 0.06, p.head * 0.2),
                        accent,
                        Transform::from_xyz(side * p.head * 0.6, p.head * 0.25, -p.head * 0.1),
                    );
                }
            }
            Species::Cow => {
                let horn = self.material(Color::srgb(0.9, 0.85, 0.7));
                for side in [-1.0, 1.0] {
                    self.mesh_part(
                        head,
                        Cone::new(0.06, 0.25),
                        &horn,
                        Transform::from_xyz(side * p.head * 0.35, p.head * 0.6, -p.head * 0.1),
                    );
                }

                // Пятна на боках
                for (side, z) in [(-1.0, 0.3), (1.0, -0.2), (-1.0, -0.4)] {
                    self.mesh_part(
                        root,
                        Cuboid::new(0.02, p.body.y * 0.4, p.body.z * 0.25),
                        accent,
                        Transform::from_xyz(side * (p.body.x * 0.5 + 0.01), 0.1, z),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feet_touch_ground_at_rest() {
        for species in Species::ALL {
            let p = species.proportions();
            let hip_y = species.resting_height() - p.body.y * 0.5;

            assert!((hip_y - p.leg_length).abs() < 1e-6, "{:?}", species);
        }
    }

    #[test]
    fn test_cow_is_tallest() {
        assert!(Species::Cow.resting_height() > Species::Sheep.resting_height());
        assert!(Species::Sheep.resting_height() > Species::Pig.resting_height());
    }
}

use bevy::prelude::*;

pub struct OverlayPlugin;

impl Plugin for OverlayPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_controls_hint);
    }
}

/// Подсказка по управлению (левый верхний угол)
fn spawn_controls_hint(mut commands: Commands) {
    commands.spawn((
        Text::new("LMB: poke a critter | RMB drag: orbit | Wheel: zoom | R: rebuild scene"),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(0.1, 0.1, 0.15)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
    ));
}

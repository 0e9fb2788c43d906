use bevy::prelude::*;
use critter_simulation::SimulationPlugin;

mod audio;
mod camera;
mod config;
mod figures;
mod logging;
mod overlay;
mod picking;
mod rendering;
mod scene;

use audio::CritterAudioPlugin;
use camera::CameraPlugin;
use config::{load_critter_config, ClientConfig, CONFIG_PATH};
use overlay::OverlayPlugin;
use picking::ClickDispatchPlugin;
use rendering::PoseSyncPlugin;
use scene::ScenePlugin;

fn main() {
    critter_simulation::set_logger(Box::new(logging::BevyLogPrinter));
    let critter_config = load_critter_config(CONFIG_PATH);

    App::new()
        // Bevy defaults (rendering, input, time, audio, etc.)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Critters".to_string(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.62, 0.8, 0.95)))
        .insert_resource(ClientConfig(critter_config))
        // Simulation (headless ECS logic)
        .add_plugins(SimulationPlugin::default())
        // Scene: ground, obstacles, procedural critters (R → rebuild)
        .add_plugins(ScenePlugin)
        // Pose sync (CritterPose → jaw/legs/tail transforms)
        .add_plugins(PoseSyncPlugin)
        // Click → ray cast → CritterClicked
        .add_plugins(ClickDispatchPlugin)
        // SoundCueRequested → positional audio
        .add_plugins(CritterAudioPlugin)
        // Camera controls
        .add_plugins(CameraPlugin)
        .add_plugins(OverlayPlugin)
        .run();
}

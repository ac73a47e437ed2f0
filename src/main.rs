use avian2d::prelude::*;
use bevy::prelude::*;

use platform_motion::core::CorePlugin;
use platform_motion::movement::{MovementDemoPlugin, MovementPlugin};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Platform Motion".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .insert_resource(Gravity(Vec2::ZERO))
        .add_plugins((CorePlugin, MovementPlugin, MovementDemoPlugin))
        .run();
}

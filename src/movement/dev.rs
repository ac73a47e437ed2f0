//! Movement domain: demo room and player spawn for trying the controller.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, Player, Wall};

const PLAYER_SIZE: Vec2 = Vec2::new(1.0, 2.0);

pub(crate) fn spawn_player(mut commands: Commands) {
    commands.spawn((
        Player,
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, 2.0, 0.0),
        // Moved by the controller, not the solver.
        RigidBody::Kinematic,
        Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
        CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
    ));
}

fn spawn_block<M: Component>(
    commands: &mut Commands,
    marker: M,
    layer: GameLayer,
    color: Color,
    center: Vec2,
    size: Vec2,
    friction: f32,
) {
    commands.spawn((
        marker,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(center.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        Friction::new(friction),
        CollisionLayers::new(layer, [GameLayer::Player]),
    ));
}

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let ice_color = Color::srgb(0.6, 0.8, 0.9);

    // Floor
    spawn_block(
        &mut commands,
        Ground,
        GameLayer::Ground,
        ground_color,
        Vec2::new(0.0, -5.0),
        Vec2::new(34.0, 1.0),
        0.0,
    );

    // Side walls: grippy on the left, slick on the right
    spawn_block(
        &mut commands,
        Wall,
        GameLayer::Wall,
        wall_color,
        Vec2::new(-17.5, 2.0),
        Vec2::new(1.0, 15.0),
        20.0,
    );
    spawn_block(
        &mut commands,
        Wall,
        GameLayer::Wall,
        ice_color,
        Vec2::new(17.5, 2.0),
        Vec2::new(1.0, 15.0),
        5.0,
    );

    // Ceiling
    spawn_block(
        &mut commands,
        Ground,
        GameLayer::Ground,
        ground_color,
        Vec2::new(0.0, 10.0),
        Vec2::new(34.0, 1.0),
        0.0,
    );

    // Platforms
    spawn_block(
        &mut commands,
        Ground,
        GameLayer::Ground,
        platform_color,
        Vec2::new(-10.0, -1.0),
        Vec2::new(6.0, 0.5),
        0.0,
    );
    spawn_block(
        &mut commands,
        Ground,
        GameLayer::Ground,
        ice_color,
        Vec2::new(10.0, 1.5),
        Vec2::new(6.0, 0.5),
        0.0,
    );
    spawn_block(
        &mut commands,
        Ground,
        GameLayer::Ground,
        platform_color,
        Vec2::new(0.0, 4.5),
        Vec2::new(5.0, 0.5),
        0.3,
    );

    // Pillar for wall jumping practice
    spawn_block(
        &mut commands,
        Wall,
        GameLayer::Wall,
        wall_color,
        Vec2::new(-4.0, -1.5),
        Vec2::new(1.0, 6.0),
        10.0,
    );
}

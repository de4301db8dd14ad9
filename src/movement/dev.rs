//! Movement domain: demo player and test room for manual play.
//!
//! World units are metres, matching the default tuning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, MovementState, Player};

/// Player body size in metres. Half height matches the default ground check offset.
const PLAYER_SIZE: Vec2 = Vec2::new(0.5, 1.0);

#[derive(Component, Debug)]
pub struct Ground;

#[derive(Component, Debug)]
pub struct Wall;

/// Everything a controlled character needs, at `position`.
pub fn player_bundle(position: Vec2) -> impl Bundle {
    (
        // Identity & Movement
        (Player, MovementState::default()),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_translation(position.extend(0.0)),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // The controller owns gravity
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    )
}

pub fn spawn_player(mut commands: Commands) {
    commands.spawn(player_bundle(Vec2::new(0.0, 1.0)));
    info!("Spawned player");
}

pub fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    let mut solid = |marker_is_ground: bool, center: Vec2, size: Vec2, color: Color| {
        let mut entity = commands.spawn((
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
        ));
        if marker_is_ground {
            entity.insert((Ground, ground_layers));
        } else {
            entity.insert((Wall, wall_layers));
        }
    };

    // Floor, top surface at y = 0
    solid(true, Vec2::new(0.0, -0.5), Vec2::new(20.0, 1.0), ground_color);

    // Side walls
    solid(false, Vec2::new(-10.5, 5.0), Vec2::new(1.0, 12.0), wall_color);
    solid(false, Vec2::new(10.5, 5.0), Vec2::new(1.0, 12.0), wall_color);

    // Platforms
    solid(true, Vec2::new(-5.0, 2.5), Vec2::new(3.0, 0.4), platform_color);
    solid(true, Vec2::new(5.0, 4.0), Vec2::new(3.0, 0.4), platform_color);

    // Pillar for wall-jump practice
    solid(false, Vec2::new(-2.0, 2.0), Vec2::new(0.6, 4.0), wall_color);
}

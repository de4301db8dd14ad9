use avian2d::prelude::*;
use bevy::prelude::*;

use platformer_controller::movement::PlatformerPlugin;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Platformer Controller".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins(PlatformerPlugin)
    .add_systems(Startup, spawn_camera);

    #[cfg(feature = "dev-tools")]
    {
        use platformer_controller::movement::{spawn_player, spawn_test_room};
        app.add_systems(Startup, (spawn_test_room, spawn_player));
    }

    app.run();
}

fn spawn_camera(mut commands: Commands) {
    // World units are metres; show roughly 26 x 15 of them
    commands.spawn((
        Camera2d,
        Projection::from(OrthographicProjection {
            scale: 1.0 / 48.0,
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(0.0, 5.0, 0.0),
    ));
}

use bevy::prelude::*;

use super::{ROOM_DEPTH, ROOM_HEIGHT, ROOM_WIDTH, WALL_THICKNESS};

/// Marker for static room geometry.
#[derive(Component)]
pub struct RoomPiece;

/// Builds the walled room the player walks around in.
pub fn setup_world(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let floor_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.4, 0.35, 0.3),
        ..default()
    });
    let wall_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.8, 0.75, 0.7),
        ..default()
    });
    let ceiling_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.9, 0.9, 0.9),
        ..default()
    });

    let plane = meshes.add(Plane3d::default().mesh().size(ROOM_WIDTH, ROOM_DEPTH));

    commands.spawn((
        RoomPiece,
        Mesh3d(plane.clone()),
        MeshMaterial3d(floor_material),
        Transform::IDENTITY,
    ));

    commands.spawn((
        RoomPiece,
        Mesh3d(plane),
        MeshMaterial3d(ceiling_material),
        Transform::from_xyz(0.0, ROOM_HEIGHT, 0.0)
            .with_rotation(Quat::from_rotation_x(std::f32::consts::PI)),
    ));

    // (size, center) for back, front, left, right
    let half_height = ROOM_HEIGHT / 2.0;
    let walls = [
        (
            Vec3::new(ROOM_WIDTH, ROOM_HEIGHT, WALL_THICKNESS),
            Vec3::new(0.0, half_height, -ROOM_DEPTH / 2.0),
        ),
        (
            Vec3::new(ROOM_WIDTH, ROOM_HEIGHT, WALL_THICKNESS),
            Vec3::new(0.0, half_height, ROOM_DEPTH / 2.0),
        ),
        (
            Vec3::new(WALL_THICKNESS, ROOM_HEIGHT, ROOM_DEPTH),
            Vec3::new(-ROOM_WIDTH / 2.0, half_height, 0.0),
        ),
        (
            Vec3::new(WALL_THICKNESS, ROOM_HEIGHT, ROOM_DEPTH),
            Vec3::new(ROOM_WIDTH / 2.0, half_height, 0.0),
        ),
    ];
    for (size, center) in walls {
        commands.spawn((
            RoomPiece,
            Mesh3d(meshes.add(Cuboid::from_size(size))),
            MeshMaterial3d(wall_material.clone()),
            Transform::from_translation(center),
        ));
    }

    commands.spawn((
        RoomPiece,
        PointLight {
            shadows_enabled: false,
            intensity: 2_000_000.0,
            range: 20.0,
            ..default()
        },
        Transform::from_xyz(0.0, ROOM_HEIGHT - 0.5, 0.0),
    ));
}

pub fn cleanup_world(mut commands: Commands, query: Query<Entity, With<RoomPiece>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

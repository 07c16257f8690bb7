use bevy::prelude::*;

use super::components::{Head, Player, PlayerRig, PlayerTuning};
use super::controller::FirstPersonController;
use crate::input::ActionAsset;
use crate::persistence::GameRecord;
use crate::physics::{KinematicBody, BODY_HALF_HEIGHT};
use crate::tween::TweenEngine;
use crate::world::{ROOM_HALF_DEPTH, ROOM_HALF_WIDTH};

/// Where the player appears, feet on the floor.
pub const SPAWN_POINT: Vec3 = Vec3::new(0.0, 0.0, 4.0);

pub fn spawn_player(
    mut commands: Commands,
    record: Option<Res<GameRecord>>,
    mut exit: EventWriter<AppExit>,
) {
    let tuning = record
        .map(|r| PlayerTuning::from_player_data(&r.0.player_data))
        .unwrap_or_default();

    let body = KinematicBody::new(
        SPAWN_POINT + Vec3::Y * BODY_HALF_HEIGHT,
        0.0,
        Vec2::new(ROOM_HALF_WIDTH, ROOM_HALF_DEPTH),
    );
    let position = body.position();

    let mut controller = match FirstPersonController::new(
        ActionAsset::first_person(),
        body,
        TweenEngine::new(),
        tuning,
    ) {
        Ok(c) => c,
        Err(e) => {
            error!("Player controller misconfigured: {}", e);
            exit.send(AppExit::error());
            return;
        }
    };
    controller.start();

    let facing = controller.facing();
    let view_height = controller.view_height();

    commands
        .spawn((
            Player,
            PlayerRig(controller),
            Transform::from_translation(position).with_rotation(facing),
            Visibility::default(),
        ))
        .with_children(|parent| {
            parent.spawn((
                Head,
                Camera3d::default(),
                Transform::from_xyz(0.0, view_height, 0.0),
            ));
        });

    info!(
        "Player spawned at {:?} (speed {}, jump force {})",
        position, tuning.base_speed, tuning.jump_force
    );
}

pub fn tick_player(
    time: Res<Time>,
    mut query: Query<(&mut PlayerRig, &mut Transform), With<Player>>,
) {
    let now = time.elapsed_secs();
    let dt = time.delta_secs();

    for (mut rig, mut transform) in query.iter_mut() {
        rig.0.tick(now, dt);

        transform.translation = rig.0.body().position();
        transform.rotation = rig.0.facing();
    }
}

pub fn stop_player(mut query: Query<&mut PlayerRig>) {
    for mut rig in query.iter_mut() {
        rig.0.stop();
    }
}

pub fn despawn_player(mut commands: Commands, query: Query<Entity, With<Player>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

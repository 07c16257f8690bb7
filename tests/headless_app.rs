//! Runs the game plugins in a windowless app.

use std::time::Duration;

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use bevy::window::{CursorGrabMode, PrimaryWindow};
use stride::camera::CameraPlugin;
use stride::game_state::AppState;
use stride::input::PlayerInputPlugin;
use stride::persistence::{GameData, GameRecord, PersistencePlugin, RecordStore};
use stride::player::{Head, PlayerPlugin, PlayerRig, STANDING_VIEW_HEIGHT};

const FRAME: Duration = Duration::from_millis(50);

fn headless_app(name: &str) -> (App, std::path::PathBuf) {
    let path = std::env::temp_dir()
        .join(format!("stride-app-{}-{}", std::process::id(), name))
        .join("save.json");
    let _ = std::fs::remove_file(&path);

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
        // Device resources normally provided by the input plugin
        .init_resource::<ButtonInput<KeyCode>>()
        .add_event::<MouseMotion>()
        .init_state::<AppState>()
        .add_plugins((
            PersistencePlugin { path: path.clone() },
            PlayerInputPlugin,
            PlayerPlugin,
            CameraPlugin,
        ));
    (app, path)
}

fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
        app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();
    }
}

fn yaw(app: &mut App) -> f32 {
    let mut rigs = app.world_mut().query::<&PlayerRig>();
    rigs.single(app.world()).0.motion().yaw
}

fn set_grab_mode(app: &mut App, mode: CursorGrabMode) {
    let mut windows = app
        .world_mut()
        .query_filtered::<&mut Window, With<PrimaryWindow>>();
    windows.single_mut(app.world_mut()).cursor_options.grab_mode = mode;
}

fn head_height(app: &mut App) -> f32 {
    let mut heads = app.world_mut().query_filtered::<&Transform, With<Head>>();
    heads.single(app.world()).translation.y
}

#[test]
fn test_boot_loads_record_and_spawns_player() {
    let (mut app, path) = headless_app("boot");
    run_frames(&mut app, 3);

    assert_eq!(
        *app.world().resource::<State<AppState>>().get(),
        AppState::InGame
    );
    assert!(app.world().get_resource::<GameRecord>().is_some());
    assert!(path.exists());

    let mut rigs = app.world_mut().query::<&PlayerRig>();
    let rig = rigs.single(app.world());
    assert!(rig.0.is_running());
    assert_eq!(rig.0.tuning().base_speed, 7.0);

    assert!((head_height(&mut app) - STANDING_VIEW_HEIGHT).abs() < 1e-4);
}

#[test]
fn test_crouch_key_lowers_head() {
    let (mut app, _path) = headless_app("crouch");
    run_frames(&mut app, 3);

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::ControlLeft);
    run_frames(&mut app, 5);

    let mut rigs = app.world_mut().query::<&PlayerRig>();
    assert!(rigs.single(app.world()).0.crouch().is_crouching());
    assert!(head_height(&mut app).abs() < 1e-4);

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .release(KeyCode::ControlLeft);
    run_frames(&mut app, 5);

    let mut rigs = app.world_mut().query::<&PlayerRig>();
    assert!(!rigs.single(app.world()).0.crouch().is_crouching());
    assert!((head_height(&mut app) - STANDING_VIEW_HEIGHT).abs() < 1e-4);
}

#[test]
fn test_walking_moves_player() {
    let (mut app, _path) = headless_app("walk");
    run_frames(&mut app, 3);

    let mut players = app.world_mut().query_filtered::<&Transform, With<PlayerRig>>();
    let start = players.single(app.world()).translation;

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::KeyW);
    run_frames(&mut app, 4);

    let mut players = app.world_mut().query_filtered::<&Transform, With<PlayerRig>>();
    let end = players.single(app.world()).translation;
    assert!(end.z < start.z, "forward is -Z at spawn: {start} -> {end}");
    assert!((end.y - start.y).abs() < 1e-4);
}

#[test]
fn test_mouse_motion_turns_player_while_grabbed() {
    let (mut app, _path) = headless_app("look");
    app.world_mut().spawn((Window::default(), PrimaryWindow));
    run_frames(&mut app, 3);
    set_grab_mode(&mut app, CursorGrabMode::Confined);

    app.world_mut().send_event(MouseMotion {
        delta: Vec2::new(100.0, 0.0),
    });
    run_frames(&mut app, 1);
    assert!((yaw(&mut app) - 10.0).abs() < 1e-4);

    // No motion: rotation is released, yaw holds
    run_frames(&mut app, 2);
    assert!((yaw(&mut app) - 10.0).abs() < 1e-4);
    let mut rigs = app.world_mut().query::<&PlayerRig>();
    assert_eq!(rigs.single(app.world()).0.input().rotation, Vec2::ZERO);

    set_grab_mode(&mut app, CursorGrabMode::None);
    app.world_mut().send_event(MouseMotion {
        delta: Vec2::new(100.0, 0.0),
    });
    run_frames(&mut app, 2);
    assert!((yaw(&mut app) - 10.0).abs() < 1e-4);
}

#[test]
fn test_corrupt_save_falls_back_to_defaults() {
    let (mut app, path) = headless_app("corrupt");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "{ not json").unwrap();
    run_frames(&mut app, 3);

    assert_eq!(
        *app.world().resource::<State<AppState>>().get(),
        AppState::InGame
    );
    assert_eq!(app.world().resource::<GameRecord>().0, GameData::default());

    let mut rigs = app.world_mut().query::<&PlayerRig>();
    assert!(rigs.single(app.world()).0.is_running());
}

#[test]
fn test_exit_writes_current_record() {
    let (mut app, path) = headless_app("exit");
    run_frames(&mut app, 3);

    app.world_mut()
        .resource_mut::<GameRecord>()
        .0
        .player_data
        .speed = 11.0;
    app.world_mut().send_event(AppExit::Success);
    app.update();

    let saved = RecordStore::new(path).load().unwrap();
    assert_eq!(saved.player_data.speed, 11.0);
    assert_eq!(saved.player_data.health, 100);
}

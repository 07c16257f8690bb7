use bevy::{prelude::*, window::CursorGrabMode};

use crate::player::{Head, PlayerRig};

pub fn grab_cursor(mut windows: Query<&mut Window>) {
    let Ok(mut window) = windows.get_single_mut() else {
        return;
    };
    window.cursor_options.grab_mode = CursorGrabMode::Confined;
    window.cursor_options.visible = false;
}

pub fn release_cursor(mut windows: Query<&mut Window>) {
    let Ok(mut window) = windows.get_single_mut() else {
        return;
    };
    window.cursor_options.grab_mode = CursorGrabMode::None;
    window.cursor_options.visible = true;
}

pub fn toggle_cursor_grab(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut windows: Query<&mut Window>,
) {
    if !keyboard_input.just_pressed(KeyCode::Escape) {
        return;
    }
    let Ok(mut window) = windows.get_single_mut() else {
        return;
    };
    match window.cursor_options.grab_mode {
        CursorGrabMode::None => {
            window.cursor_options.grab_mode = CursorGrabMode::Confined;
            window.cursor_options.visible = false;
        }
        _ => {
            window.cursor_options.grab_mode = CursorGrabMode::None;
            window.cursor_options.visible = true;
        }
    }
}

/// Keeps a confined cursor in the middle so mouse motion never runs out.
pub fn center_cursor(mut windows: Query<&mut Window>) {
    let Ok(mut window) = windows.get_single_mut() else {
        return;
    };

    // Only center cursor when it's grabbed and window is focused
    if window.cursor_options.grab_mode != CursorGrabMode::None && window.focused {
        let center = Vec2::new(window.width() / 2.0, window.height() / 2.0);
        window.set_cursor_position(Some(center));
    }
}

/// Moves each head camera to its controller's animated view height.
pub fn sync_head_height(
    players: Query<(&PlayerRig, &Children)>,
    mut heads: Query<&mut Transform, With<Head>>,
) {
    for (rig, children) in players.iter() {
        let height = rig.0.view_height();
        for &child in children.iter() {
            if let Ok(mut transform) = heads.get_mut(child) {
                transform.translation.y = height;
            }
        }
    }
}

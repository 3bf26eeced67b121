//! Input handling: mode and restart keys, and the click-to-claim path.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use rand::Rng;

use crate::board3d::picking::{ray_hits_cube, screen_ray};
use crate::board3d::rules::Mark;
use crate::board3d::types::{
    slot_position, BoardAssets, GameMode, GamePhase, GridCube, MainCamera, MatchState,
};

use super::setup::spawn_board;

/// Mode-select keys: R starts random mode, T turn-based.
pub fn handle_mode_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut match_state: ResMut<MatchState>,
) {
    if match_state.phase != GamePhase::ModeSelect {
        return;
    }
    if keyboard.just_pressed(KeyCode::KeyR) {
        match_state.start(GameMode::Random);
        info!("mode selected: random");
    } else if keyboard.just_pressed(KeyCode::KeyT) {
        match_state.start(GameMode::TurnBased);
        info!("mode selected: turn-based");
    }
}

/// Space restarts a finished game: fresh board, same mode.
pub fn handle_restart_key(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut match_state: ResMut<MatchState>,
    cubes: Query<Entity, With<GridCube>>,
    assets: Res<BoardAssets>,
) {
    if match_state.phase != GamePhase::GameOver || !keyboard.just_pressed(KeyCode::Space) {
        return;
    }
    for entity in cubes.iter() {
        commands.entity(entity).despawn();
    }
    spawn_board(&mut commands, &assets);
    match_state.restart();
    info!("board reset, staying in {:?} mode", match_state.mode);
}

/// Resolves a left click into a cube claim via the pick ray.
///
/// Clicks are dropped during mode select and game over, and while any cube
/// is still mid-flip. Cubes are scanned in slot order and the first hit
/// wins.
pub fn handle_clicks(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&GlobalTransform, &Projection), With<MainCamera>>,
    mut cubes: Query<&mut GridCube>,
    mut match_state: ResMut<MatchState>,
) {
    if match_state.phase != GamePhase::Playing || !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    if cubes.iter().any(|cube| cube.rotating()) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera_transform, projection)) = camera_query.single() else {
        return;
    };
    let Projection::Perspective(perspective) = projection else {
        return;
    };

    let viewport = Vec2::new(window.width(), window.height());
    let view = camera_transform.to_matrix().inverse();
    let proj = Mat4::perspective_rh(
        perspective.fov,
        viewport.x / viewport.y,
        perspective.near,
        perspective.far,
    );
    let Some(ray) = screen_ray(cursor, viewport, view, proj) else {
        return;
    };

    let mut cubes: Vec<Mut<GridCube>> = cubes.iter_mut().collect();
    cubes.sort_by_key(|cube| cube.slot);

    for cube in cubes.iter_mut() {
        if !ray_hits_cube(&ray, slot_position(cube.slot)) {
            continue;
        }
        let mark = match match_state.mode {
            GameMode::Random => {
                if rand::thread_rng().gen_bool(0.5) {
                    Mark::X
                } else {
                    Mark::O
                }
            }
            GameMode::TurnBased => match_state.turn,
        };
        if cube.claim(mark) {
            info!("slot {} claimed by {}", cube.slot, mark.label());
            match_state.advance_turn();
        }
        break;
    }
}

//! End-of-game evaluation.

use bevy::prelude::*;

use crate::board3d::rules::{self, Board};
use crate::board3d::types::{GamePhase, GridCube, MatchState};

/// Scans the board for a winner or a draw.
///
/// Runs only while playing, and only once every flip has settled, so a
/// claim is never judged mid-reveal.
pub fn evaluate_board(mut match_state: ResMut<MatchState>, cubes: Query<&GridCube>) {
    if match_state.phase != GamePhase::Playing {
        return;
    }
    if cubes.is_empty() || cubes.iter().any(|cube| cube.rotating()) {
        return;
    }

    let mut board: Board = [None; 9];
    for cube in cubes.iter() {
        board[cube.slot] = cube.owner;
    }

    if let Some(mark) = rules::winner(&board) {
        info!("{} wins", mark.label());
        match_state.finish(Some(mark));
    } else if rules::is_full(&board) {
        info!("draw");
        match_state.finish(None);
    }
}

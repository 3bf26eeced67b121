//! The status overlay.

use bevy::prelude::*;

use crate::board3d::types::{GameMode, GamePhase, MatchState, StatusText};

/// Status string for the current state: mode prompt, turn, or outcome.
pub fn status_line(state: &MatchState) -> String {
    match state.phase {
        GamePhase::ModeSelect => String::from("Press R for Random Mode\nPress T for Turn-based"),
        GamePhase::GameOver => match state.winner {
            Some(mark) => format!("{} wins! Press Space to restart.", mark.label()),
            None => String::from("It's a Draw! Press Space to restart."),
        },
        GamePhase::Playing => match state.mode {
            GameMode::Random => String::from("X/O's turn. (random mode)"),
            GameMode::TurnBased => format!("{}'s Turn", state.turn.label()),
        },
    }
}

/// Rewrites the overlay whenever the match state changes.
pub fn update_status_text(
    match_state: Res<MatchState>,
    mut text_query: Query<&mut Text, With<StatusText>>,
) {
    if !match_state.is_changed() {
        return;
    }
    for mut text in text_query.iter_mut() {
        text.0 = status_line(&match_state);
    }
}

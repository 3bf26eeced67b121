//! Match-level state: phase, mode, whose turn it is, and the outcome.

use bevy::prelude::*;

use crate::board3d::rules::Mark;

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Waiting for a mode key; no claims accepted.
    #[default]
    ModeSelect,
    Playing,
    /// A win or draw was detected; only the restart key is accepted.
    GameOver,
}

/// How marks are assigned to claimed cubes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Every claim gets a uniformly random mark, ignoring the turn.
    Random,
    /// Claims get the current turn's mark, alternating X, O, X, ...
    TurnBased,
}

/// The whole match state in one resource.
///
/// Mode select runs once; restart returns straight to `Playing` with the
/// previously selected mode.
#[derive(Resource, Debug)]
pub struct MatchState {
    pub phase: GamePhase,
    pub mode: GameMode,
    pub turn: Mark,
    /// `None` until a win; stays `None` on a draw.
    pub winner: Option<Mark>,
}

impl Default for MatchState {
    fn default() -> Self {
        Self {
            phase: GamePhase::ModeSelect,
            mode: GameMode::TurnBased,
            turn: Mark::X,
            winner: None,
        }
    }
}

impl MatchState {
    /// Leaves mode select for a fresh game in `mode`.
    pub fn start(&mut self, mode: GameMode) {
        self.mode = mode;
        self.phase = GamePhase::Playing;
    }

    /// Records the outcome and stops accepting claims.
    pub fn finish(&mut self, winner: Option<Mark>) {
        self.winner = winner;
        self.phase = GamePhase::GameOver;
    }

    /// Back to a fresh game; keeps the selected mode, resets the turn to X.
    pub fn restart(&mut self) {
        self.phase = GamePhase::Playing;
        self.turn = Mark::X;
        self.winner = None;
    }

    /// Flips the turn after a successful claim. Random mode has no turn
    /// order to advance.
    pub fn advance_turn(&mut self) {
        if self.mode == GameMode::TurnBased {
            self.turn = self.turn.opponent();
        }
    }
}

/// Shared handles the board is spawned from, kept so a restart can rebuild
/// all nine cubes without re-creating the mesh or atlas material.
#[derive(Resource)]
pub struct BoardAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

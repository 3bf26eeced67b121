//! Tests for the board rules and the match flow.

use cratetactoe::board3d::{
    is_full, winner, Board, GameMode, GamePhase, GridCube, Mark, MatchState,
};

/// Claims `slot` the way the click system does: claim first, then advance
/// the shared turn only on success.
fn claim(cubes: &mut [GridCube], state: &mut MatchState, slot: usize) -> bool {
    let mark = state.turn;
    let claimed = cubes[slot].claim(mark);
    if claimed {
        state.advance_turn();
    }
    claimed
}

fn owners(cubes: &[GridCube]) -> Board {
    let mut board: Board = [None; 9];
    for cube in cubes {
        board[cube.slot] = cube.owner;
    }
    board
}

fn fresh_board() -> Vec<GridCube> {
    (0..9).map(GridCube::new).collect()
}

#[test]
fn test_turn_based_game_ends_with_a_row_win() {
    let mut cubes = fresh_board();
    let mut state = MatchState::default();
    state.start(GameMode::TurnBased);

    // X takes the top row, O scatters below it.
    for slot in [0, 3, 1, 4, 2] {
        assert!(claim(&mut cubes, &mut state, slot));
    }

    let board = owners(&cubes);
    assert_eq!(winner(&board), Some(Mark::X));
    assert!(!is_full(&board));

    state.finish(winner(&board));
    assert_eq!(state.phase, GamePhase::GameOver);
    assert_eq!(state.winner, Some(Mark::X));
}

#[test]
fn test_full_game_without_line_is_a_draw() {
    let mut cubes = fresh_board();
    let mut state = MatchState::default();
    state.start(GameMode::TurnBased);

    // A legal alternating sequence that fills the board with no line.
    for slot in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        assert!(claim(&mut cubes, &mut state, slot));
    }

    let board = owners(&cubes);
    assert_eq!(winner(&board), None);
    assert!(is_full(&board));
}

#[test]
fn test_failed_claim_does_not_advance_the_turn() {
    let mut cubes = fresh_board();
    let mut state = MatchState::default();
    state.start(GameMode::TurnBased);

    assert!(claim(&mut cubes, &mut state, 4));
    assert_eq!(state.turn, Mark::O);

    // O clicks the same cube: rejected, still O's turn.
    assert!(!claim(&mut cubes, &mut state, 4));
    assert_eq!(state.turn, Mark::O);
    assert_eq!(cubes[4].owner, Some(Mark::X));
}

#[test]
fn test_turns_alternate_strictly_on_success() {
    let mut cubes = fresh_board();
    let mut state = MatchState::default();
    state.start(GameMode::TurnBased);

    let mut expected = Mark::X;
    for slot in [0, 1, 2, 4, 3] {
        assert_eq!(state.turn, expected);
        assert!(claim(&mut cubes, &mut state, slot));
        expected = expected.opponent();
    }
}

#[test]
fn test_restart_yields_a_completely_fresh_game() {
    let mut cubes = fresh_board();
    let mut state = MatchState::default();
    state.start(GameMode::TurnBased);

    for slot in [0, 3, 1, 4, 2] {
        claim(&mut cubes, &mut state, slot);
    }
    state.finish(winner(&owners(&cubes)));
    assert_eq!(state.phase, GamePhase::GameOver);

    // Restart replaces the cube set and clears the outcome.
    let cubes = fresh_board();
    state.restart();

    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.mode, GameMode::TurnBased);
    assert_eq!(state.turn, Mark::X);
    assert_eq!(state.winner, None);
    for cube in &cubes {
        assert_eq!(cube.owner, None);
        assert_eq!(cube.current_rotation, 0.0);
        assert_eq!(cube.target_rotation, 0.0);
        assert!(!cube.rotating());
    }
}

#[test]
fn test_owner_never_changes_once_set() {
    let mut cube = GridCube::new(3);
    assert!(cube.claim(Mark::O));
    for _ in 0..3 {
        assert!(!cube.claim(Mark::X));
        assert_eq!(cube.owner, Some(Mark::O));
    }
}

#[test]
fn test_claim_starts_the_reveal_and_settles() {
    let mut cube = GridCube::new(0);
    assert!(cube.claim(Mark::O));
    assert!(cube.rotating());

    // Worst case is the 180-degree O flip at 180 deg/s: one second.
    let mut elapsed = 0.0;
    while cube.rotating() && elapsed < 2.0 {
        cube.advance(1.0 / 60.0);
        elapsed += 1.0 / 60.0;
    }
    assert!(!cube.rotating());
    assert!(elapsed <= 1.05, "flip took {elapsed}s");
}

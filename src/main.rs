//! Crate Tac Toe entry point.
//!
//! The default invocation opens the 3D game; `--cli` plays the same rules in
//! the terminal. `--mode` pre-selects random or turn-based play so the
//! in-game mode prompt is skipped.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy::winit::WinitWindows;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

use cratetactoe::board3d::{
    animate_cubes, evaluate_board, handle_clicks, handle_mode_keys, handle_restart_key,
    icon_rgba, is_full, setup, update_status_text, winner, Board, GameMode, Mark, MatchState,
};

/// Crate Tac Toe - 3D tic-tac-toe on a grid of wooden crates
#[derive(Parser)]
#[command(name = "cratetactoe")]
#[command(author, version, about = "3D tic-tac-toe on a grid of wooden crates")]
struct Cli {
    /// Play in the terminal instead of opening the 3D window
    #[arg(long)]
    cli: bool,

    /// Pre-select the game mode and skip the in-game prompt
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Every claim gets a random mark
    Random,
    /// Strict X/O alternation
    Turns,
}

impl ModeArg {
    fn to_game_mode(self) -> GameMode {
        match self {
            ModeArg::Random => GameMode::Random,
            ModeArg::Turns => GameMode::TurnBased,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.cli {
        run_terminal_mode(cli.mode);
    } else {
        run_3d_mode(cli.mode);
    }
}

// ============================================================================
// 3D Mode
// ============================================================================

fn run_3d_mode(mode: Option<ModeArg>) {
    let mut match_state = MatchState::default();
    if let Some(mode) = mode {
        match_state.start(mode.to_game_mode());
    }

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Crate Tac Toe".to_string(),
                        resolution: (800u32, 600u32).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(bevy::log::LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "info,wgpu=error".to_string(),
                    ..default()
                }),
        )
        .insert_resource(match_state)
        .add_systems(Startup, (setup, set_window_icon))
        .add_systems(
            Update,
            (
                handle_mode_keys,
                handle_restart_key,
                handle_clicks,
                animate_cubes,
                evaluate_board,
                update_status_text,
            )
                .chain(),
        )
        .run();
}

/// Builds the window icon from the X-crate tile. Purely cosmetic, so any
/// failure is skipped.
fn set_window_icon(
    windows: Option<NonSend<WinitWindows>>,
    primary_query: Query<Entity, With<PrimaryWindow>>,
) {
    let Some(windows) = windows else {
        return;
    };
    let Ok(primary_entity) = primary_query.single() else {
        return;
    };
    let Some(primary) = windows.get_window(primary_entity) else {
        return;
    };

    let rgba = icon_rgba(32);
    let (width, height) = rgba.dimensions();
    if let Ok(icon) = winit::window::Icon::from_rgba(rgba.into_raw(), width, height) {
        primary.set_window_icon(Some(icon));
    }
}

// ============================================================================
// Terminal Mode
// ============================================================================

type StdinLines = io::Lines<io::StdinLock<'static>>;

fn run_terminal_mode(mode: Option<ModeArg>) {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mode = match mode {
        Some(mode) => mode.to_game_mode(),
        None => prompt_mode(&mut lines),
    };
    let mut rng = rand::thread_rng();

    loop {
        play_terminal_game(mode, &mut lines, &mut rng);
        print!("Play again? [y/N] ");
        flush_stdout();
        match next_line(&mut lines) {
            Some(answer) if answer.trim().eq_ignore_ascii_case("y") => (),
            _ => break,
        }
    }
}

fn next_line(lines: &mut StdinLines) -> Option<String> {
    match lines.next() {
        Some(Ok(line)) => Some(line),
        Some(Err(err)) => {
            eprintln!("failed to read input: {err}");
            std::process::exit(1);
        }
        None => None,
    }
}

fn flush_stdout() {
    let _ = io::stdout().flush();
}

fn prompt_mode(lines: &mut StdinLines) -> GameMode {
    loop {
        print!("Mode - [r]andom or [t]urn-based? ");
        flush_stdout();
        let Some(line) = next_line(lines) else {
            // EOF before a choice: fall back to strict alternation.
            return GameMode::TurnBased;
        };
        match line.trim().to_lowercase().as_str() {
            "r" | "random" => return GameMode::Random,
            "t" | "turns" | "turn-based" => return GameMode::TurnBased,
            _ => println!("Please answer r or t."),
        }
    }
}

fn play_terminal_game(mode: GameMode, lines: &mut StdinLines, rng: &mut impl Rng) {
    let mut board: Board = [None; 9];
    let mut turn = Mark::X;

    loop {
        print_board(&board);
        match mode {
            GameMode::TurnBased => print!("{}'s move [1-9]: ", turn.label()),
            GameMode::Random => print!("Pick a square [1-9]: "),
        }
        flush_stdout();

        let Some(line) = next_line(lines) else {
            println!();
            return;
        };
        let Some(slot) = parse_slot(&line) else {
            println!("{}", "Enter a number from 1 to 9.".yellow());
            continue;
        };
        if board[slot].is_some() {
            println!("{}", "That square is taken.".yellow());
            continue;
        }

        let mark = match mode {
            GameMode::Random => {
                if rng.gen_bool(0.5) {
                    Mark::X
                } else {
                    Mark::O
                }
            }
            GameMode::TurnBased => turn,
        };
        board[slot] = Some(mark);

        if let Some(winner_mark) = winner(&board) {
            print_board(&board);
            println!(
                "{}",
                format!("{} wins!", winner_mark.label()).green().bold()
            );
            return;
        }
        if is_full(&board) {
            print_board(&board);
            println!("{}", "It's a draw.".cyan().bold());
            return;
        }
        if mode == GameMode::TurnBased {
            turn = turn.opponent();
        }
    }
}

/// Parses a 1-9 square number into a 0-based board slot.
fn parse_slot(input: &str) -> Option<usize> {
    match input.trim().parse::<usize>() {
        Ok(n @ 1..=9) => Some(n - 1),
        _ => None,
    }
}

fn print_board(board: &Board) {
    println!();
    for row in 0..3 {
        let mut cells = Vec::new();
        for col in 0..3 {
            let slot = row * 3 + col;
            let cell = match board[slot] {
                Some(Mark::X) => "X".red().bold().to_string(),
                Some(Mark::O) => "O".blue().bold().to_string(),
                None => (slot + 1).to_string().dimmed().to_string(),
            };
            cells.push(cell);
        }
        println!(" {} | {} | {}", cells[0], cells[1], cells[2]);
        if row < 2 {
            println!("---+---+---");
        }
    }
    println!();
}

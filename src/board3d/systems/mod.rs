//! Bevy systems for the 3D board.
//!
//! - `setup`: scene initialization (camera, light, board, status overlay)
//! - `input`: mode/restart keys and the click-to-claim path
//! - `animation`: the reveal-flip rotation
//! - `board`: win/draw evaluation once every flip has settled
//! - `ui`: the status overlay text

mod animation;
mod board;
mod input;
mod setup;
mod ui;

pub use animation::animate_cubes;
pub use board::evaluate_board;
pub use input::{handle_clicks, handle_mode_keys, handle_restart_key};
pub use setup::{setup, spawn_board, CAMERA_DISTANCE, CAMERA_FAR, CAMERA_FOV, CAMERA_NEAR};
pub use ui::{status_line, update_status_text};

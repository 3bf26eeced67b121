//! Type definitions for the 3D board.
//!
//! - `cube` - the crate cube component, its animation and claim logic
//! - `game` - match-level state and shared board assets
//! - `ui` - marker components for the camera and overlay text

pub mod cube;
pub mod game;
pub mod ui;

pub use cube::*;
pub use game::*;
pub use ui::*;

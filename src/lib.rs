//! Crate Tac Toe - 3D tic-tac-toe on a grid of wooden crates.
//!
//! The library exposes the `board3d` module: pure game rules, the pick-ray
//! math, the crate mesh/texture builders, and the Bevy types and systems the
//! binary wires into an app.

pub mod board3d;

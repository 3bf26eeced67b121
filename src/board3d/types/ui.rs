//! Marker components for the camera and the overlay UI.

use bevy::prelude::*;

/// The fixed perspective camera the pick ray is built from.
#[derive(Component)]
pub struct MainCamera;

/// The status line in the top-left corner.
#[derive(Component)]
pub struct StatusText;

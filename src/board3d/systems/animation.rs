//! Per-frame reveal-flip animation.

use bevy::prelude::*;

use crate::board3d::types::GridCube;

/// Advances every mid-flip cube and writes its yaw to the transform.
pub fn animate_cubes(time: Res<Time>, mut cubes: Query<(&mut GridCube, &mut Transform)>) {
    let dt = time.delta_secs();
    for (mut cube, mut transform) in cubes.iter_mut() {
        if !cube.rotating() {
            continue;
        }
        cube.advance(dt);
        transform.rotation = Quat::from_rotation_y(cube.current_rotation.to_radians());
    }
}

//! The crate cube entity: grid slot, owner mark, and the turn-flip animation.

use bevy::prelude::*;

use crate::board3d::rules::Mark;

/// Angular speed of the reveal flip, degrees per second.
pub const ROTATION_SPEED: f32 = 180.0;

/// Half the cube's edge length in world units; also the pick AABB extent.
pub const CUBE_HALF_EXTENT: f32 = 1.0;

/// Center-to-center distance between neighboring grid slots.
pub const GRID_SPACING: f32 = 2.5;

const X_TURN_DEGREES: f32 = 90.0;
const O_TURN_DEGREES: f32 = 180.0;

/// One cube of the 3x3 board.
///
/// Identity (slot, mesh, atlas) is fixed at spawn; only the owner and the
/// rotation pair change, and a restart replaces the whole entity set.
#[derive(Component, Debug)]
pub struct GridCube {
    /// Row-major board index, 0..9.
    pub slot: usize,
    /// Yaw applied to the entity this frame, degrees in [0, 360).
    pub current_rotation: f32,
    /// Yaw the reveal animation is heading for, degrees in [0, 360).
    pub target_rotation: f32,
    /// Set at most once; cleared only by respawning a fresh board.
    pub owner: Option<Mark>,
}

impl GridCube {
    pub fn new(slot: usize) -> Self {
        Self {
            slot,
            current_rotation: 0.0,
            target_rotation: 0.0,
            owner: None,
        }
    }

    /// True while the reveal flip is still in motion.
    pub fn rotating(&self) -> bool {
        self.current_rotation != self.target_rotation
    }

    /// Advances the flip by `dt` seconds along the shortest arc, snapping
    /// exactly onto the target once within one step of it. Constant angular
    /// velocity, no overshoot.
    pub fn advance(&mut self, dt: f32) {
        if !self.rotating() {
            return;
        }
        let mut diff = (self.target_rotation - self.current_rotation).rem_euclid(360.0);
        if diff > 180.0 {
            diff -= 360.0;
        }
        let step = ROTATION_SPEED * dt;
        if diff.abs() <= step {
            self.current_rotation = self.target_rotation;
        } else {
            self.current_rotation =
                (self.current_rotation + step.copysign(diff)).rem_euclid(360.0);
        }
    }

    /// Claims the cube for `mark`.
    ///
    /// Fails without any state change if the cube is already owned. A
    /// successful claim retargets the yaw by -90 degrees for X or -180 for
    /// O, so the flip brings the matching atlas face to the front.
    pub fn claim(&mut self, mark: Mark) -> bool {
        if self.owner.is_some() {
            return false;
        }
        self.owner = Some(mark);
        let turn = match mark {
            Mark::X => X_TURN_DEGREES,
            Mark::O => O_TURN_DEGREES,
        };
        self.target_rotation = (self.target_rotation - turn).rem_euclid(360.0);
        true
    }
}

/// World position of a board slot: a spacing-2.5 grid in the XY plane,
/// centered on the origin, row 0 on top.
pub fn slot_position(slot: usize) -> Vec3 {
    let row = (slot / 3) as f32;
    let col = (slot % 3) as f32;
    Vec3::new((col - 1.0) * GRID_SPACING, (1.0 - row) * GRID_SPACING, 0.0)
}

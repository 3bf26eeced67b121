//! Tests for the pick ray against the fixed game camera.

use bevy::math::{Mat4, Vec2, Vec3, Vec4};

use cratetactoe::board3d::{
    ray_hits_cube, screen_ray, slot_position, CAMERA_DISTANCE, CAMERA_FAR, CAMERA_FOV,
    CAMERA_NEAR,
};

const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

fn game_matrices() -> (Mat4, Mat4) {
    let view = Mat4::look_at_rh(
        Vec3::new(0.0, 0.0, CAMERA_DISTANCE),
        Vec3::ZERO,
        Vec3::Y,
    );
    let proj = Mat4::perspective_rh(
        CAMERA_FOV,
        VIEWPORT.x / VIEWPORT.y,
        CAMERA_NEAR,
        CAMERA_FAR,
    );
    (view, proj)
}

/// Projects a world point back to window pixels, the inverse of what the
/// ray caster does.
fn world_to_screen(point: Vec3, view: Mat4, proj: Mat4) -> Vec2 {
    let clip = proj * view * Vec4::new(point.x, point.y, point.z, 1.0);
    let ndc = Vec2::new(clip.x / clip.w, clip.y / clip.w);
    Vec2::new(
        (ndc.x + 1.0) / 2.0 * VIEWPORT.x,
        (1.0 - ndc.y) / 2.0 * VIEWPORT.y,
    )
}

#[test]
fn test_center_cursor_looks_down_negative_z() {
    let (view, proj) = game_matrices();
    let ray = screen_ray(VIEWPORT / 2.0, VIEWPORT, view, proj).unwrap();

    assert!(ray.dir.z < -0.99);
    assert!(ray.dir.x.abs() < 1e-4);
    assert!(ray.dir.y.abs() < 1e-4);
    // Origin sits on the near plane in front of the camera.
    assert!((ray.origin.z - (CAMERA_DISTANCE - CAMERA_NEAR)).abs() < 1e-2);
}

#[test]
fn test_center_cursor_hits_only_the_center_cube() {
    let (view, proj) = game_matrices();
    let ray = screen_ray(VIEWPORT / 2.0, VIEWPORT, view, proj).unwrap();

    assert!(ray_hits_cube(&ray, slot_position(4)));
    for slot in [0, 1, 2, 3, 5, 6, 7, 8] {
        assert!(
            !ray_hits_cube(&ray, slot_position(slot)),
            "unexpected hit on slot {slot}"
        );
    }
}

#[test]
fn test_cursor_above_center_points_upward() {
    let (view, proj) = game_matrices();
    let cursor = Vec2::new(VIEWPORT.x / 2.0, 0.0);
    let ray = screen_ray(cursor, VIEWPORT, view, proj).unwrap();

    // Screen Y grows downward, so the top of the window unprojects to an
    // upward-pointing ray.
    assert!(ray.dir.y > 0.0);
}

#[test]
fn test_projected_slot_centers_pick_their_own_cube() {
    let (view, proj) = game_matrices();

    for slot in 0..9 {
        let cursor = world_to_screen(slot_position(slot), view, proj);
        let ray = screen_ray(cursor, VIEWPORT, view, proj).unwrap();

        // First hit in slot-order scan must be the cube under the cursor.
        let first_hit = (0..9).find(|&s| ray_hits_cube(&ray, slot_position(s)));
        assert_eq!(first_hit, Some(slot));
    }
}

#[test]
fn test_top_row_projects_to_the_upper_half_of_the_window() {
    let (view, proj) = game_matrices();
    let screen = world_to_screen(slot_position(1), view, proj);
    assert!(screen.y < VIEWPORT.y / 2.0);
}

#[test]
fn test_degenerate_projection_yields_no_ray() {
    let (view, _) = game_matrices();
    assert!(screen_ray(VIEWPORT / 2.0, VIEWPORT, view, Mat4::ZERO).is_none());
}

#[test]
fn test_zero_viewport_yields_no_ray() {
    let (view, proj) = game_matrices();
    assert!(screen_ray(Vec2::ZERO, Vec2::ZERO, view, proj).is_none());
}

//! Screen-to-world ray-casting for cube picking.
//!
//! A click is unprojected at the near (depth 0.0) and far (depth 1.0) clip
//! planes; the two world points define the pick ray. Cubes are tested with
//! the standard slab method against their axis-aligned bounds, in slot order.

use bevy::prelude::*;

use crate::board3d::types::CUBE_HALF_EXTENT;

/// A world-space ray with a normalized direction.
#[derive(Debug, Clone, Copy)]
pub struct PickRay {
    pub origin: Vec3,
    pub dir: Vec3,
}

/// Unprojects a cursor position into a world-space ray.
///
/// `cursor` is in window pixels with Y growing downward; the NDC conversion
/// flips it so the ray agrees with the Y-up world. `view` is the camera's
/// world-to-view matrix and `proj` a finite perspective projection mapping
/// the near plane to depth 0.0 and the far plane to 1.0.
///
/// Returns `None` only when the unprojected segment degenerates - a broken
/// projection is a programming error, not a user-facing condition, and the
/// caller simply drops the click.
pub fn screen_ray(cursor: Vec2, viewport: Vec2, view: Mat4, proj: Mat4) -> Option<PickRay> {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return None;
    }
    let world_from_clip = (proj * view).inverse();
    let ndc = Vec2::new(
        cursor.x / viewport.x * 2.0 - 1.0,
        1.0 - cursor.y / viewport.y * 2.0,
    );
    let near = world_from_clip.project_point3(ndc.extend(0.0));
    let far = world_from_clip.project_point3(ndc.extend(1.0));
    let dir = far - near;
    let len = dir.length();
    if !len.is_finite() || len < 1e-6 {
        return None;
    }
    Some(PickRay {
        origin: near,
        dir: dir / len,
    })
}

/// Slab test against the cube centered at `center` (half-extent 1 per axis).
///
/// Axis-parallel rays divide to IEEE infinities, which the min/max folds
/// resolve without special cases. No nearest-hit sorting happens at this
/// level; callers scan cubes in a fixed order and the grid layout keeps the
/// boxes disjoint.
pub fn ray_hits_cube(ray: &PickRay, center: Vec3) -> bool {
    let min_bound = center - Vec3::splat(CUBE_HALF_EXTENT);
    let max_bound = center + Vec3::splat(CUBE_HALF_EXTENT);
    let to_min = (min_bound - ray.origin) / ray.dir;
    let to_max = (max_bound - ray.origin) / ray.dir;
    let t_near = to_min.min(to_max).max_element();
    let t_far = to_min.max(to_max).min_element();
    t_far >= 0.0 && t_near <= t_far
}

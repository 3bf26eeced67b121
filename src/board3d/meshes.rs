//! The crate cube mesh.
//!
//! A hand-built cuboid whose faces sample different tiles of the texture
//! atlas: the X tile sits on +X and the O tile on -Z, the two faces the
//! -90 and -180 degree yaw flips bring to the front. Every other face shows
//! the blank crate.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;

use crate::board3d::textures::{ATLAS_TILES, TILE_BLANK, TILE_O, TILE_X};
use crate::board3d::types::CUBE_HALF_EXTENT;

const H: f32 = CUBE_HALF_EXTENT;

type Quad = [[f32; 3]; 4];

/// Corners run bottom-left, bottom-right, top-right, top-left as seen from
/// outside the cube, which keeps the winding counter-clockwise.
const FACES: [(Quad, [f32; 3], u32); 6] = [
    // +X: revealed by the X flip
    (
        [[H, -H, H], [H, -H, -H], [H, H, -H], [H, H, H]],
        [1.0, 0.0, 0.0],
        TILE_X,
    ),
    // -Z: revealed by the O flip
    (
        [[H, -H, -H], [-H, -H, -H], [-H, H, -H], [H, H, -H]],
        [0.0, 0.0, -1.0],
        TILE_O,
    ),
    // +Z: faces the camera at spawn
    (
        [[-H, -H, H], [H, -H, H], [H, H, H], [-H, H, H]],
        [0.0, 0.0, 1.0],
        TILE_BLANK,
    ),
    (
        [[-H, -H, -H], [-H, -H, H], [-H, H, H], [-H, H, -H]],
        [-1.0, 0.0, 0.0],
        TILE_BLANK,
    ),
    (
        [[-H, H, H], [H, H, H], [H, H, -H], [-H, H, -H]],
        [0.0, 1.0, 0.0],
        TILE_BLANK,
    ),
    (
        [[-H, -H, -H], [H, -H, -H], [H, -H, H], [-H, -H, H]],
        [0.0, -1.0, 0.0],
        TILE_BLANK,
    ),
];

/// Builds the 24-vertex crate mesh with per-face atlas UVs.
pub fn build_crate_mesh() -> Mesh {
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(24);
    let mut normals: Vec<[f32; 3]> = Vec::with_capacity(24);
    let mut uvs: Vec<[f32; 2]> = Vec::with_capacity(24);
    let mut indices: Vec<u32> = Vec::with_capacity(36);

    for (corners, normal, tile) in FACES {
        let base = positions.len() as u32;
        let u0 = tile as f32 / ATLAS_TILES as f32;
        let u1 = (tile + 1) as f32 / ATLAS_TILES as f32;
        positions.extend_from_slice(&corners);
        normals.extend_from_slice(&[normal; 4]);
        uvs.extend_from_slice(&[[u0, 1.0], [u1, 1.0], [u1, 0.0], [u0, 0.0]]);
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
    .with_inserted_indices(Indices::U32(indices))
}

//! Scene setup: camera, light, the crate board, and the status overlay.

use bevy::prelude::*;

use crate::board3d::meshes::build_crate_mesh;
use crate::board3d::textures::atlas_image;
use crate::board3d::types::{
    slot_position, BoardAssets, GridCube, MainCamera, MatchState, StatusText,
};

use super::ui::status_line;

/// Distance from the grid origin to the camera along +Z.
pub const CAMERA_DISTANCE: f32 = 15.0;
pub const CAMERA_FOV: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

/// Main setup system: camera, light, atlas material, the nine cubes, and
/// the status text.
pub fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    match_state: Res<MatchState>,
) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Transform::from_xyz(0.0, 0.0, CAMERA_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 9_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
        ..default()
    });

    let atlas = images.add(atlas_image());
    let material = materials.add(StandardMaterial {
        base_color_texture: Some(atlas),
        perceptual_roughness: 0.9,
        metallic: 0.0,
        ..default()
    });
    let mesh = meshes.add(build_crate_mesh());

    let assets = BoardAssets { mesh, material };
    spawn_board(&mut commands, &assets);
    commands.insert_resource(assets);

    commands.spawn((
        Text::new(status_line(&match_state)),
        TextFont {
            font_size: 30.0,
            ..default()
        },
        TextColor(Color::srgb(0.9, 0.15, 0.15)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(20.0),
            left: Val::Px(20.0),
            ..default()
        },
        StatusText,
    ));
}

/// Spawns the nine crate cubes in slot order; also used by restart.
pub fn spawn_board(commands: &mut Commands, assets: &BoardAssets) {
    for slot in 0..9 {
        commands.spawn((
            Mesh3d(assets.mesh.clone()),
            MeshMaterial3d(assets.material.clone()),
            Transform::from_translation(slot_position(slot)),
            GridCube::new(slot),
        ));
    }
}

//! Procedural crate textures.
//!
//! Nothing is loaded from disk: the three face tiles (blank crate, X crate,
//! O crate) are drawn into one horizontal atlas at startup, and the window
//! icon reuses the X tile drawing.

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use image::{Rgba, RgbaImage};

/// Edge length of one atlas tile in pixels.
pub const TILE_SIZE: u32 = 128;
/// Tiles laid out left to right: blank, X, O.
pub const ATLAS_TILES: u32 = 3;
pub const TILE_BLANK: u32 = 0;
pub const TILE_X: u32 = 1;
pub const TILE_O: u32 = 2;

const WOOD: [u8; 4] = [164, 116, 62, 255];
const WOOD_SEAM: [u8; 4] = [126, 85, 42, 255];
const FRAME: [u8; 4] = [92, 60, 28, 255];
const X_COLOR: [u8; 4] = [178, 34, 34, 255];
const O_COLOR: [u8; 4] = [30, 64, 150, 255];

/// Draws the full 3-tile atlas.
pub fn atlas_rgba() -> RgbaImage {
    let mut img = RgbaImage::new(TILE_SIZE * ATLAS_TILES, TILE_SIZE);
    for tile in 0..ATLAS_TILES {
        draw_crate_tile(&mut img, tile * TILE_SIZE, TILE_SIZE);
    }
    draw_x(&mut img, TILE_X * TILE_SIZE, TILE_SIZE);
    draw_o(&mut img, TILE_O * TILE_SIZE, TILE_SIZE);
    img
}

/// Wraps the atlas pixels into a GPU texture asset.
pub fn atlas_image() -> Image {
    let img = atlas_rgba();
    let (width, height) = img.dimensions();
    Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        img.into_raw(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    )
}

/// A small X-crate image for the window icon.
pub fn icon_rgba(size: u32) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);
    draw_crate_tile(&mut img, 0, size);
    draw_x(&mut img, 0, size);
    img
}

/// Wooden crate look: framed border, plank seams, faint vertical grain.
fn draw_crate_tile(img: &mut RgbaImage, x0: u32, size: u32) {
    let frame = (size / 12).max(2);
    let plank = (size / 4).max(4);
    for y in 0..size {
        for x in 0..size {
            let on_frame = x < frame || x >= size - frame || y < frame || y >= size - frame;
            let pixel = if on_frame {
                FRAME
            } else if y % plank < 2 {
                WOOD_SEAM
            } else {
                let grain = ((x / 3) % 7) as i16 - 3;
                shade(WOOD, grain * 4)
            };
            img.put_pixel(x0 + x, y, Rgba(pixel));
        }
    }
}

/// Two diagonal strokes inside the tile's frame.
fn draw_x(img: &mut RgbaImage, x0: u32, size: u32) {
    let s = size as i32;
    let margin = s / 5;
    let half = (s / 14).max(1);
    for y in margin..s - margin {
        for x in margin..s - margin {
            let d1 = (x - y).abs();
            let d2 = (x + y - (s - 1)).abs();
            if d1 <= half || d2 <= half {
                img.put_pixel(x0 + x as u32, y as u32, Rgba(X_COLOR));
            }
        }
    }
}

/// A centered ring.
fn draw_o(img: &mut RgbaImage, x0: u32, size: u32) {
    let center = (size as f32 - 1.0) / 2.0;
    let outer = size as f32 * 0.32;
    let inner = outer - size as f32 * 0.09;
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 - center;
            let dy = y as f32 - center;
            let radius = (dx * dx + dy * dy).sqrt();
            if radius <= outer && radius >= inner {
                img.put_pixel(x0 + x, y, Rgba(O_COLOR));
            }
        }
    }
}

fn shade(color: [u8; 4], delta: i16) -> [u8; 4] {
    let apply = |channel: u8| (channel as i16 + delta).clamp(0, 255) as u8;
    [apply(color[0]), apply(color[1]), apply(color[2]), color[3]]
}

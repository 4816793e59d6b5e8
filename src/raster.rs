//! Software rasterization onto `image::RgbaImage`.
//!
//! Used for headless runs and snapshots. Shapes are blended source-over with
//! straight alpha; coverage is binary (a pixel is inside when its center is).

use crate::canvas::{Canvas, DrawList};
use crate::color::Rgba8;
use crate::error::SnapshotError;
use glam::Vec2;
use image::{Rgba, RgbaImage};
use std::path::Path;

impl Canvas for RgbaImage {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba8) {
        if radius <= 0.0 || color.a == 0 {
            return;
        }

        let extent = Vec2::splat(radius);
        let Some((x0, y0, x1, y1)) = pixel_bounds(self, center - extent, center + extent) else {
            return;
        };

        let r2 = radius * radius;
        for y in y0..y1 {
            for x in x0..x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if p.distance_squared(center) <= r2 {
                    blend(self.get_pixel_mut(x, y), color);
                }
            }
        }
    }

    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Rgba8) {
        if color.a == 0 {
            return;
        }

        let Some((x0, y0, x1, y1)) = pixel_bounds(self, min, min + size) else {
            return;
        };

        for y in y0..y1 {
            for x in x0..x1 {
                blend(self.get_pixel_mut(x, y), color);
            }
        }
    }
}

/// Pixel index range `[x0, x1) × [y0, y1)` whose centers can fall inside
/// `min..max`, clipped to the image. `None` when nothing is visible.
fn pixel_bounds(image: &RgbaImage, min: Vec2, max: Vec2) -> Option<(u32, u32, u32, u32)> {
    let (w, h) = (image.width() as f32, image.height() as f32);
    let x0 = (min.x - 0.5).ceil().clamp(0.0, w);
    let y0 = (min.y - 0.5).ceil().clamp(0.0, h);
    let x1 = ((max.x - 0.5).floor() + 1.0).clamp(0.0, w);
    let y1 = ((max.y - 0.5).floor() + 1.0).clamp(0.0, h);

    if x0 >= x1 || y0 >= y1 {
        return None;
    }
    Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
}

/// Source-over blend of `src` onto `dst`.
fn blend(dst: &mut Rgba<u8>, src: Rgba8) {
    if src.a == 255 {
        *dst = Rgba(src.to_array());
        return;
    }

    let sa = src.a as f32 / 255.0;
    let da = dst.0[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        *dst = Rgba([0, 0, 0, 0]);
        return;
    }

    let mix = |s: u8, d: u8| -> u8 {
        let c = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
        c.round().clamp(0.0, 255.0) as u8
    };

    *dst = Rgba([
        mix(src.r, dst.0[0]),
        mix(src.g, dst.0[1]),
        mix(src.b, dst.0[2]),
        (out_a * 255.0).round() as u8,
    ]);
}

/// Render a draw list into a fresh image filled with `background`.
pub fn rasterize(list: &DrawList, width: u32, height: u32, background: Rgba8) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(width, height, Rgba(background.to_array()));
    list.replay(&mut image);
    image
}

/// Write an image to disk as PNG.
pub fn save_png(image: &RgbaImage, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    image.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

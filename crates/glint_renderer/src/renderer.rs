//! Frame rendering: primary rays, tone mapping, parallel pixel loop.

use std::time::Instant;

use glint_core::{Camera, Scene};
use glint_math::{Ray, Vec3};
use rayon::prelude::*;

use crate::framebuffer::Framebuffer;
use crate::tracer::cast_ray;

/// Primary ray for pixel (i, j) of a width x height target.
///
/// This fixes the viewing convention for the whole renderer: the
/// camera looks down -z, pixel centers are sampled at half-pixel
/// offsets, and the horizontal axis is stretched by the aspect ratio.
pub fn primary_ray(camera: &Camera, i: u32, j: u32, width: u32, height: u32) -> Ray {
    let half_extent = (camera.fov / 2.0).tan();
    let aspect = width as f32 / height as f32;

    let x = (2.0 * (i as f32 + 0.5) / width as f32 - 1.0) * half_extent * aspect;
    let y = -(2.0 * (j as f32 + 0.5) / height as f32 - 1.0) * half_extent;

    Ray::new(camera.position, Vec3::new(x, y, -1.0).normalize())
}

/// Scale an over-bright color back into displayable range.
///
/// When the brightest channel exceeds 1 every channel is divided by
/// it, so the hue survives instead of shifting towards white the way
/// per-channel clipping would.
pub fn tone_map(color: Vec3) -> Vec3 {
    let max = color.max_element();
    if max > 1.0 {
        color * (1.0 / max)
    } else {
        color
    }
}

/// Convert a tone-mapped color to 8-bit RGBA, alpha always 255.
pub fn color_to_rgba(color: Vec3) -> [u8; 4] {
    let r = (255.0 * color.x.clamp(0.0, 1.0)) as u8;
    let g = (255.0 * color.y.clamp(0.0, 1.0)) as u8;
    let b = (255.0 * color.z.clamp(0.0, 1.0)) as u8;
    [r, g, b, 255]
}

/// Render one frame of the scene into a fresh framebuffer.
///
/// Rows are traced on rayon workers; each worker writes its own
/// disjoint row slice, so the only synchronization is the final join.
/// The scene is read-only throughout.
pub fn render(scene: &Scene, width: u32, height: u32) -> Framebuffer {
    let start = Instant::now();
    let mut frame = Framebuffer::new(width, height);
    let row_bytes = (width as usize) * 4;

    frame
        .data
        .par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(j, row)| {
            for i in 0..width {
                let ray = primary_ray(&scene.camera, i, j as u32, width, height);
                let color = cast_ray(scene, &ray, 0);
                let rgba = color_to_rgba(tone_map(color));
                let offset = (i as usize) * 4;
                row[offset..offset + 4].copy_from_slice(&rgba);
            }
        });

    log::info!(
        "rendered {}x{} frame in {:.1?}",
        width,
        height,
        start.elapsed()
    );

    frame
}

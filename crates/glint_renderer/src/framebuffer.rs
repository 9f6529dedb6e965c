//! RGBA output buffer.

use std::path::Path;

/// A row-major RGBA8 pixel buffer.
///
/// `data` holds `width * height * 4` bytes, four per pixel in
/// `[R, G, B, A]` order. Alpha is always 255; nothing in the renderer
/// is transparent.
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Framebuffer {
    /// Create a buffer of opaque black pixels.
    pub fn new(width: u32, height: u32) -> Self {
        let mut data = vec![0u8; (width as usize) * (height as usize) * 4];
        for pixel in data.chunks_exact_mut(4) {
            pixel[3] = 255;
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// The RGBA bytes of the pixel at (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let offset = ((y * self.width + x) as usize) * 4;
        [
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
            self.data[offset + 3],
        ]
    }

    /// Write the buffer as a PNG file.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> image::ImageResult<()> {
        image::save_buffer(
            path,
            &self.data,
            self.width,
            self.height,
            image::ColorType::Rgba8,
        )
    }
}

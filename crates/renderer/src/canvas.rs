//! A plain RGBA pixel buffer.

use crate::gradient::Color;

/// Row-major RGBA image, 4 bytes per pixel, origin at the top-left.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbaImage {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl RgbaImage {
    /// Create an image filled with `background`.
    pub fn new(width: usize, height: usize, background: Color) -> Self {
        let pixels = background.to_rgba().repeat(width * height);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 4;
        let p = &self.pixels[i..i + 4];
        Some(Color::new(p[0], p[1], p[2], p[3]))
    }

    pub fn put_pixel(&mut self, x: usize, y: usize, color: Color) {
        if x < self.width && y < self.height {
            let i = (y * self.width + x) * 4;
            self.pixels[i..i + 4].copy_from_slice(&color.to_rgba());
        }
    }

    /// Fill the rectangle `[x0, x0 + w) x [y0, y0 + h)`, clipped to the image.
    ///
    /// The origin may be negative so markers centred near an edge are cut
    /// rather than shifted.
    pub fn fill_rect(&mut self, x0: i64, y0: i64, w: u32, h: u32, color: Color) {
        let x_start = x0.max(0) as usize;
        let y_start = y0.max(0) as usize;
        let x_end = x0.saturating_add(w as i64).clamp(0, self.width as i64) as usize;
        let y_end = y0.saturating_add(h as i64).clamp(0, self.height as i64) as usize;
        if x_start >= x_end || y_start >= y_end {
            return;
        }

        let rgba = color.to_rgba();
        for y in y_start..y_end {
            let row = y * self.width * 4;
            for px in self.pixels[row + x_start * 4..row + x_end * 4].chunks_exact_mut(4) {
                px.copy_from_slice(&rgba);
            }
        }
    }

    /// Number of pixels that are not `color`.
    pub fn count_not(&self, color: Color) -> usize {
        let rgba = color.to_rgba();
        self.pixels
            .chunks_exact(4)
            .filter(|px| *px != rgba.as_slice())
            .count()
    }
}

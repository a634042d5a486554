//! In-memory pixel store backing the canvas.
//!
//! A tightly packed, row-major RGBA8 buffer. This is the "device" the
//! drawing layer writes into: pixel writes outside the buffer are silently
//! discarded, mirroring how a windowing backend drops draws past the
//! drawable edge, and reads outside the buffer return `None`.

use crate::color::Color;
use crate::error::{Error, Result};

/// Row-major RGBA8 pixel buffer.
///
/// Each pixel is 4 bytes: `[R, G, B, A]`. Rows are tightly packed with no
/// stride padding, so the whole buffer is `width * height * 4` bytes.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels in row-major order.
    pixels: Vec<u8>,
}

impl Framebuffer {
    /// Create a new framebuffer with the given dimensions, initially
    /// transparent black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use lienzo::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(800, 600).unwrap();
    /// assert_eq!(fb.width(), 800);
    /// assert_eq!(fb.height(), 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let size = (width as usize) * (height as usize) * 4;

        Ok(Self {
            width,
            height,
            pixels: vec![0; size],
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get the raw pixel data as a slice.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Get the raw pixel data as a mutable slice.
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Get a row of pixels as a slice.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize) * 4;
        let end = start + (self.width as usize) * 4;
        Some(&self.pixels[start..end])
    }

    /// Get a row of pixels as a mutable slice.
    pub fn row_mut(&mut self, y: u32) -> Option<&mut [u8]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize) * 4;
        let end = start + (self.width as usize) * 4;
        Some(&mut self.pixels[start..end])
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Color) {
        let [r, g, b, a] = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk[0] = r;
            chunk[1] = g;
            chunk[2] = b;
            chunk[3] = a;
        }
    }

    /// Fill a rectangular region with a solid color.
    ///
    /// Coordinates are clamped to framebuffer bounds.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Color) {
        let x1 = x.min(self.width);
        let y1 = y.min(self.height);
        let x2 = x.saturating_add(w).min(self.width);
        let y2 = y.saturating_add(h).min(self.height);

        if x1 >= x2 || y1 >= y2 {
            return;
        }

        let [r, g, b, a] = color.to_array();
        let rect_width = (x2 - x1) as usize;

        for row_y in y1..y2 {
            let row_start = ((row_y as usize) * (self.width as usize) + (x1 as usize)) * 4;
            let row = &mut self.pixels[row_start..row_start + rect_width * 4];

            for chunk in row.chunks_exact_mut(4) {
                chunk[0] = r;
                chunk[1] = g;
                chunk[2] = b;
                chunk[3] = a;
            }
        }
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        Some(Color::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        let [r, g, b, a] = color.to_array();
        self.pixels[idx] = r;
        self.pixels[idx + 1] = g;
        self.pixels[idx + 2] = b;
        self.pixels[idx + 3] = a;
    }

    /// Calculate the byte index for a pixel coordinate.
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_framebuffer() {
        let fb = Framebuffer::new(100, 50).unwrap();
        assert_eq!(fb.width(), 100);
        assert_eq!(fb.height(), 50);
        assert_eq!(fb.pixel_count(), 5000);
        assert_eq!(fb.pixels().len(), 5000 * 4);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Framebuffer::new(0, 100).is_err());
        assert!(Framebuffer::new(100, 0).is_err());
        assert!(Framebuffer::new(0, 0).is_err());
    }

    #[test]
    fn test_clear() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Color::RED);

        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(fb.get_pixel(x, y), Some(Color::RED));
            }
        }
    }

    #[test]
    fn test_fill_rect() {
        let mut fb = Framebuffer::new(100, 100).unwrap();
        fb.clear(Color::WHITE);
        fb.fill_rect(10, 10, 20, 20, Color::RED);

        assert_eq!(fb.get_pixel(15, 15), Some(Color::RED));
        assert_eq!(fb.get_pixel(29, 29), Some(Color::RED));
        assert_eq!(fb.get_pixel(30, 30), Some(Color::WHITE));
        assert_eq!(fb.get_pixel(5, 5), Some(Color::WHITE));
    }

    #[test]
    fn test_fill_rect_clamps_to_bounds() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.fill_rect(5, 5, 100, 100, Color::BLUE);
        assert_eq!(fb.get_pixel(9, 9), Some(Color::BLUE));
        assert_eq!(fb.get_pixel(4, 4), Some(Color::default()));

        // Fully out of bounds is a no-op, not a panic.
        fb.fill_rect(50, 50, 10, 10, Color::RED);
    }

    #[test]
    fn test_set_get_pixel() {
        let mut fb = Framebuffer::new(10, 10).unwrap();

        fb.set_pixel(5, 5, Color::BLUE);
        assert_eq!(fb.get_pixel(5, 5), Some(Color::BLUE));

        // Out of bounds
        assert_eq!(fb.get_pixel(100, 100), None);
        fb.set_pixel(100, 100, Color::RED); // discarded
    }

    #[test]
    fn test_row_access() {
        let mut fb = Framebuffer::new(10, 5).unwrap();
        fb.clear(Color::BLACK);

        if let Some(row) = fb.row_mut(2) {
            for chunk in row.chunks_exact_mut(4) {
                chunk[0] = 255;
            }
        }

        assert_eq!(fb.get_pixel(5, 2).unwrap().r, 255);
        assert_eq!(fb.get_pixel(5, 1).unwrap().r, 0);
        assert!(fb.row(5).is_none());
        assert_eq!(fb.row(2).unwrap().len(), 40);
    }
}

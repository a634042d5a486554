//! Drawing facade over a framebuffer.
//!
//! [`Canvas`] owns the pixel store plus exactly one piece of device state:
//! the current draw color. Primitives draw with the current color; each has
//! a `*_with` variant that temporarily overrides the color for one call and
//! restores the previous color afterward. Drawing never fails — geometry
//! falling outside the framebuffer is silently discarded.

use crate::color::Color;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Point, Vector};
use crate::raster;

/// A 2D drawing surface with a current draw color.
#[derive(Debug, Clone)]
pub struct Canvas {
    fb: Framebuffer,
    color: Color,
}

impl Canvas {
    /// Create a canvas with a fresh framebuffer of the given dimensions.
    ///
    /// The draw color starts as opaque black.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDimensions`] if width or height is
    /// zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            fb: Framebuffer::new(width, height)?,
            color: Color::BLACK,
        })
    }

    /// Get the current draw color.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Set the current draw color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// The canvas dimensions as a displacement from [`Canvas::first`].
    #[must_use]
    pub fn size(&self) -> Vector {
        Vector::new(self.fb.width() as i32, self.fb.height() as i32)
    }

    /// The top-left drawable point, always (0, 0).
    #[must_use]
    pub fn first(&self) -> Point {
        Point::ORIGIN
    }

    /// The bottom-right drawable point.
    #[must_use]
    pub fn last(&self) -> Point {
        Point::new(-1, -1) + self.size()
    }

    /// Read the color at a point, or `None` outside the canvas.
    #[must_use]
    pub fn pixel(&self, p: Point) -> Option<Color> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        self.fb.get_pixel(p.x as u32, p.y as u32)
    }

    /// Clear the whole canvas to a color, leaving the draw color unchanged.
    pub fn clear(&mut self, color: Color) {
        self.fb.clear(color);
    }

    /// Borrow the underlying framebuffer.
    #[must_use]
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }

    /// Consume the canvas, returning the framebuffer.
    #[must_use]
    pub fn into_framebuffer(self) -> Framebuffer {
        self.fb
    }

    // Primitives drawing with the current color.

    /// Plot a single point.
    pub fn draw_point(&mut self, p: Point) {
        self.plot(p.x, p.y);
    }

    /// Draw a line segment between two points, endpoints inclusive.
    pub fn draw_line(&mut self, p0: Point, p1: Point) {
        let color = self.color;
        let fb = &mut self.fb;
        raster::trace_line(p0.x, p0.y, p1.x, p1.y, |x, y| {
            if x >= 0 && y >= 0 {
                fb.set_pixel(x as u32, y as u32, color);
            }
        });
    }

    /// Draw a stroked circle around `center`.
    ///
    /// `radius <= 0` draws nothing.
    pub fn draw_circle(&mut self, center: Point, radius: i32) {
        let color = self.color;
        let fb = &mut self.fb;
        raster::stroke_circle(center.x, center.y, radius, |x, y| {
            if x >= 0 && y >= 0 {
                fb.set_pixel(x as u32, y as u32, color);
            }
        });
    }

    /// Draw a filled circle around `center`.
    ///
    /// `radius <= 0` draws nothing.
    pub fn fill_circle(&mut self, center: Point, radius: i32) {
        let color = self.color;
        let width = self.fb.width() as i32;
        let height = self.fb.height() as i32;
        let fb = &mut self.fb;
        raster::fill_circle(center.x, center.y, radius, |x0, x1, y| {
            if y < 0 || y >= height {
                return;
            }
            let xs = x0.max(0);
            let xe = x1.min(width - 1);
            if xs <= xe {
                fb.fill_rect(xs as u32, y as u32, (xe - xs + 1) as u32, 1, color);
            }
        });
    }

    /// Draw a rectangle outline with corner `p` and extent `size` in pixels.
    ///
    /// Covers columns `p.x ..= p.x + size.x - 1` and the corresponding rows.
    /// A non-positive extent component draws nothing.
    pub fn draw_rect(&mut self, p: Point, size: Vector) {
        if size.x <= 0 || size.y <= 0 {
            return;
        }
        let opposite = p + size + Vector::new(-1, -1);

        self.draw_line(p, Point::new(opposite.x, p.y));
        self.draw_line(Point::new(p.x, opposite.y), opposite);
        self.draw_line(p, Point::new(p.x, opposite.y));
        self.draw_line(Point::new(opposite.x, p.y), opposite);
    }

    /// Draw a filled rectangle with corner `p` and extent `size` in pixels.
    ///
    /// A non-positive extent component draws nothing.
    pub fn fill_rect(&mut self, p: Point, size: Vector) {
        if size.x <= 0 || size.y <= 0 {
            return;
        }
        // Clip against the origin; the framebuffer clamps the far edge.
        let xs = p.x.max(0);
        let ys = p.y.max(0);
        let xe = p.x + size.x;
        let ye = p.y + size.y;
        if xs >= xe || ys >= ye {
            return;
        }
        self.fb.fill_rect(
            xs as u32,
            ys as u32,
            (xe - xs) as u32,
            (ye - ys) as u32,
            self.color,
        );
    }

    // Explicit-color variants: save, override, draw, restore.

    /// Plot a single point in the given color.
    pub fn draw_point_with(&mut self, p: Point, color: Color) {
        let old = self.color;
        self.color = color;
        self.draw_point(p);
        self.color = old;
    }

    /// Draw a line segment in the given color.
    pub fn draw_line_with(&mut self, p0: Point, p1: Point, color: Color) {
        let old = self.color;
        self.color = color;
        self.draw_line(p0, p1);
        self.color = old;
    }

    /// Draw a stroked circle in the given color.
    pub fn draw_circle_with(&mut self, center: Point, radius: i32, color: Color) {
        let old = self.color;
        self.color = color;
        self.draw_circle(center, radius);
        self.color = old;
    }

    /// Draw a filled circle in the given color.
    pub fn fill_circle_with(&mut self, center: Point, radius: i32, color: Color) {
        let old = self.color;
        self.color = color;
        self.fill_circle(center, radius);
        self.color = old;
    }

    /// Draw a rectangle outline in the given color.
    pub fn draw_rect_with(&mut self, p: Point, size: Vector, color: Color) {
        let old = self.color;
        self.color = color;
        self.draw_rect(p, size);
        self.color = old;
    }

    /// Draw a filled rectangle in the given color.
    pub fn fill_rect_with(&mut self, p: Point, size: Vector, color: Color) {
        let old = self.color;
        self.color = color;
        self.fill_rect(p, size);
        self.color = old;
    }

    /// Write one pixel in the current color, discarding out-of-bounds.
    #[inline]
    fn plot(&mut self, x: i32, y: i32) {
        if x >= 0 && y >= 0 {
            self.fb.set_pixel(x as u32, y as u32, self.color);
        }
    }
}

impl From<Framebuffer> for Canvas {
    fn from(fb: Framebuffer) -> Self {
        Self {
            fb,
            color: Color::BLACK,
        }
    }
}

//! # Lienzo
//!
//! A minimal software 2D drawing surface: integer points and vectors,
//! RGBA colors with gamma-correct blending, and primitive rasterization
//! (points, lines, circles, rectangles) onto an in-memory pixel canvas.
//!
//! Everything renders deterministically in integer arithmetic — the same
//! calls produce the same pixel set on every platform — and nothing here
//! touches a window or a GPU. The finished surface can be exported as PNG.
//!
//! ## Quick Start
//!
//! ```
//! use lienzo::prelude::*;
//!
//! let mut canvas = Canvas::new(256, 256)?;
//! canvas.clear(Color::WHITE);
//!
//! canvas.fill_circle_with(Point::new(128, 128), 80, Color::TEAL);
//! canvas.draw_circle_with(Point::new(128, 128), 80, Color::NAVY);
//! canvas.draw_line_with(Point::new(0, 0), Point::new(255, 255), Color::RED);
//!
//! let png_bytes = lienzo::output::png::encode(canvas.framebuffer())?;
//! # let _ = png_bytes;
//! # Ok::<(), lienzo::Error>(())
//! ```
//!
//! ## Design
//!
//! - [`geometry`]: `Point` (location) and `Vector` (displacement) are
//!   distinct `i32` value types with the usual affine algebra.
//! - [`color`]: colors blend through an sRGB decode → linear mix → encode
//!   pipeline, so the midpoint of two saturated hues looks right instead of
//!   muddy.
//! - [`raster`]: pure integer algorithms (midpoint circle, Bresenham line)
//!   that emit coordinates through callbacks.
//! - [`canvas`]: the stateful facade tying rasterization to a
//!   [`framebuffer::Framebuffer`] and a current draw color.

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::excessive_precision)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]

/// Color types and gamma-correct blending.
pub mod color;

/// Integer geometric primitives (points, vectors).
pub mod geometry;

/// In-memory pixel store backing the canvas.
pub mod framebuffer;

/// Rasterization algorithms.
pub mod raster;

/// Drawing facade over a framebuffer.
pub mod canvas;

/// Output encoders (PNG).
pub mod output;

/// Error types for lienzo operations.
pub mod error;

pub use error::{Error, Result};

/// Commonly used types for convenient imports.
///
/// ```
/// use lienzo::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::color::Color;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Point, Vector};
}

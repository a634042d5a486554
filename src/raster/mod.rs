//! Rasterization algorithms.
//!
//! Integer-only pixel enumeration for the drawing primitives. Everything
//! here is pure: the algorithms emit coordinates through caller-supplied
//! callbacks and never touch a framebuffer themselves, which keeps the
//! traversal logic testable without a pixel store and lets the canvas decide
//! how emitted pixels and spans hit the device.
//!
//! # Algorithms
//!
//! - **Midpoint circle**: stroked and filled circle enumeration sharing one
//!   octant traversal, no floating point or trigonometry.
//! - **Bresenham line**: all-octant integer line stepping.

mod circle;
mod line;

pub use circle::{fill_circle, stroke_circle, OctantPoints};
pub use line::trace_line;

//! Output encoders.
//!
//! The canvas itself has no I/O; this module turns a finished framebuffer
//! into bytes on disk or in memory.

pub mod png;

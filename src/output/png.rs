//! PNG export.
//!
//! Pure Rust PNG encoding of a framebuffer using the `png` crate. The
//! framebuffer is tightly packed RGBA8, which is exactly the layout the
//! encoder consumes, so no staging copy is needed.

use crate::error::Result;
use crate::framebuffer::Framebuffer;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write a framebuffer to a PNG file.
///
/// # Errors
///
/// Returns an error if file creation or PNG encoding fails.
pub fn write_file<P: AsRef<Path>>(fb: &Framebuffer, path: P) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    encode_into(fb, writer)
}

/// Encode a framebuffer to PNG bytes in memory.
///
/// # Errors
///
/// Returns an error if PNG encoding fails.
pub fn encode(fb: &Framebuffer) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    encode_into(fb, &mut buffer)?;
    Ok(buffer)
}

fn encode_into<W: std::io::Write>(fb: &Framebuffer, writer: W) -> Result<()> {
    let mut encoder = png::Encoder::new(writer, fb.width(), fb.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(fb.pixels())?;

    Ok(())
}

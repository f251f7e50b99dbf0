//! PNG preview of the packed bitmap.
//!
//! Renders one tile exactly as the shader would sample it, which makes it easy
//! to check bit order and row padding without opening Godot.

use image::{ImageBuffer, Rgba as ImageRgba, RgbaImage};
use std::path::Path;

use crate::color::Rgba;
use crate::format::BitmapDimensions;
use crate::repack::packed_bit;

/// Render packed words to an RGBA image: set bits use `fg`, unset bits `bg`.
pub fn render_preview(dimensions: BitmapDimensions, words: &[u32], fg: Rgba, bg: Rgba) -> RgbaImage {
    let width = dimensions.width;
    ImageBuffer::from_fn(width, dimensions.height, |x, y| {
        let idx = y as usize * width as usize + x as usize;
        let color = if packed_bit(words, idx) { fg } else { bg };
        ImageRgba(color.to_array())
    })
}

/// Save a rendered preview as PNG
pub fn save_preview(path: &Path, img: &RgbaImage) -> Result<(), String> {
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| format!("Failed to save {}: {}", path.display(), e))
}

//! XBM to Godot shader conversion - Rust/WASM
//!
//! This crate turns an XBM (X BitMap) text file into a self-contained Godot 4
//! shader that tiles the bitmap across the screen at one bitmap pixel per
//! screen pixel.
//!
//! Pipeline: XBM text -> (width, height, row-padded bytes) -> tightly packed
//! u32 words -> shader source. The same pipeline is exposed to native callers
//! through `convert` and to JavaScript through `xbm_to_gdshader`.

use wasm_bindgen::prelude::*;

pub mod color;
pub mod error;
pub mod format;
pub mod preview;
pub mod repack;
pub mod shader;

pub use color::Rgba;
pub use error::{ColorError, ParseError};
pub use format::{parse_xbm, BitmapDimensions, XbmImage};
pub use repack::{packed_bit, repack_bits_to_u32, word_count};
pub use shader::{build_shader, ShaderOptions, ShaderType};

/// Result of a full XBM to shader conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub dimensions: BitmapDimensions,
    pub words: Vec<u32>,
    pub shader: String,
}

/// Run the whole pipeline on XBM text
pub fn convert(text: &str, options: &ShaderOptions) -> Result<Conversion, ParseError> {
    let xbm = parse_xbm(text)?;
    let words = repack_bits_to_u32(&xbm.bits, xbm.dimensions);
    let shader = build_shader(options, xbm.dimensions, &words);
    Ok(Conversion {
        dimensions: xbm.dimensions,
        words,
        shader,
    })
}

// ============================================================================
// WASM Entry Point
// ============================================================================

/// Convert XBM text to Godot shader source.
///
/// `shader_type` is `canvas_item` or `spatial`; `fg` and `bg` are `#RRGGBBAA`.
#[wasm_bindgen]
pub fn xbm_to_gdshader(text: &str, shader_type: &str, fg: &str, bg: &str) -> Result<String, JsValue> {
    let options = ShaderOptions {
        shader_type: ShaderType::parse(shader_type).map_err(|e| JsValue::from_str(&e))?,
        fg: Rgba::parse_hex(fg).map_err(|e| JsValue::from_str(&e.to_string()))?,
        bg: Rgba::parse_hex(bg).map_err(|e| JsValue::from_str(&e.to_string()))?,
    };
    convert(text, &options)
        .map(|c| c.shader)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

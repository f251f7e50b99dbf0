//! Command-line argument definitions and type conversions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use xbm_shader::ShaderType;

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq)]
pub enum ShaderTypeArg {
    /// 2D canvas_item shader (writes COLOR)
    #[default]
    #[value(name = "canvas_item")]
    CanvasItem,
    /// 3D spatial shader (writes ALBEDO and ALPHA)
    #[value(name = "spatial")]
    Spatial,
}

impl ShaderTypeArg {
    pub fn to_shader_type(self) -> ShaderType {
        match self {
            ShaderTypeArg::CanvasItem => ShaderType::CanvasItem,
            ShaderTypeArg::Spatial => ShaderType::Spatial,
        }
    }
}

// ============================================================================
// Command Line Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "xbm2gdshader")]
#[command(author, version, about = "Convert XBM files into a self-contained Godot 4 shader", long_about = None)]
pub struct Args {
    /// Input .xbm file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output .gdshader path
    #[arg(short, long, default_value = "out.gdshader")]
    pub output: PathBuf,

    /// Shader type
    #[arg(short = 't', long = "type", value_enum, default_value_t = ShaderTypeArg::CanvasItem)]
    pub shader_type: ShaderTypeArg,

    /// Foreground colour for set bits (hex #RRGGBBAA)
    #[arg(long, default_value = "#000000FF")]
    pub fg: String,

    /// Background colour for unset bits (hex #RRGGBBAA)
    #[arg(long, default_value = "#00000000")]
    pub bg: String,

    /// Also write a PNG preview of one tile (optional)
    #[arg(long, value_name = "PNG")]
    pub preview: Option<PathBuf>,

    /// Output metadata JSON file path (optional)
    #[arg(long, value_name = "JSON")]
    pub output_meta: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

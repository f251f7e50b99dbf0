//! Godot 4 shader emission.
//!
//! The generated shader embeds the packed bitmap as a `uint` constant array and
//! tiles it across the screen one bitmap pixel per screen pixel. Foreground is
//! a set bit (XBM "black"), background an unset bit.

use crate::color::Rgba;
use crate::format::BitmapDimensions;

/// Godot shader variant to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShaderType {
    /// 2D `canvas_item` shader writing `COLOR`
    #[default]
    CanvasItem,
    /// 3D `spatial` shader writing `ALBEDO` / `ALPHA`
    Spatial,
}

impl ShaderType {
    /// Parse the Godot name (`canvas_item` or `spatial`)
    pub fn parse(name: &str) -> Result<Self, String> {
        match name {
            "canvas_item" => Ok(ShaderType::CanvasItem),
            "spatial" => Ok(ShaderType::Spatial),
            _ => Err(format!(
                "Unknown shader type '{}': expected canvas_item or spatial",
                name
            )),
        }
    }

    /// Name as written after `shader_type`
    pub fn name(self) -> &'static str {
        match self {
            ShaderType::CanvasItem => "canvas_item",
            ShaderType::Spatial => "spatial",
        }
    }
}

/// Everything about the output shader that doesn't come from the bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderOptions {
    pub shader_type: ShaderType,
    pub fg: Rgba,
    pub bg: Rgba,
}

impl Default for ShaderOptions {
    fn default() -> Self {
        ShaderOptions {
            shader_type: ShaderType::CanvasItem,
            fg: Rgba::new(0, 0, 0, 255),
            bg: Rgba::new(0, 0, 0, 0),
        }
    }
}

const BIT_LOOKUP: &str = "\
bool xbm_bit(ivec2 p) {
    if (p.x < 0 || p.y < 0 || p.x >= int(WIDTH) || p.y >= int(HEIGHT)) return false;
    int idx = p.y * int(WIDTH) + p.x;
    uint w = DATA[idx >> 5];
    return ((w >> uint(idx & 31)) & 1u) == 1u;
}
";

const FRAGMENT_CANVAS_ITEM: &str = "\
void fragment() {
    // Convert normalized screen UV (0..1) into integer screen pixel coords
    vec2 screen_px = floor(SCREEN_UV / SCREEN_PIXEL_SIZE);

    // Tile every WIDTH × HEIGHT screen pixels
    int px = int(mod(screen_px.x, float(WIDTH)));
    int py = int(mod(screen_px.y, float(HEIGHT)));
    ivec2 p = ivec2(px, py);

    bool on = xbm_bit(p);
    float v = on ? 1.0 : 0.0;
    if (invert) v = 1.0 - v;
    COLOR = mix(bg_color, fg_color, v);
}
";

const FRAGMENT_SPATIAL: &str = "\
void fragment() {
    vec2 screen_px = floor(SCREEN_UV / SCREEN_PIXEL_SIZE);
    int px = int(mod(screen_px.x, float(WIDTH)));
    int py = int(mod(screen_px.y, float(HEIGHT)));
    ivec2 p = ivec2(px, py);

    bool on = xbm_bit(p);
    float v = on ? 1.0 : 0.0;
    if (invert) v = 1.0 - v;
    ALBEDO = mix(bg_color.rgb, fg_color.rgb, v);
    ALPHA  = mix(bg_color.a,   fg_color.a,   v);
}
";

/// Build the complete shader source for a packed bitmap
pub fn build_shader(options: &ShaderOptions, dimensions: BitmapDimensions, words: &[u32]) -> String {
    let mut out = String::with_capacity(1024 + words.len() * 16);

    out.push_str(&format!("shader_type {};\n\n", options.shader_type.name()));

    out.push_str(&format!("const uint WIDTH = {}u;\n", dimensions.width));
    out.push_str(&format!("const uint HEIGHT = {}u;\n", dimensions.height));
    out.push_str(&format!("const uint WORDS = {}u;\n\n", words.len()));

    out.push_str("// Foreground = bit 1 (XBM 'black'); Background = bit 0\n");
    out.push_str(&format!(
        "instance uniform vec4 fg_color = {};\n",
        options.fg.to_vec4_literal()
    ));
    out.push_str(&format!(
        "instance uniform vec4 bg_color = {};\n",
        options.bg.to_vec4_literal()
    ));
    out.push_str("instance uniform bool invert = false;\n\n");

    out.push_str("const uint DATA[WORDS] = uint[](\n");
    for (i, word) in words.iter().enumerate() {
        let sep = if i + 1 == words.len() { "" } else { "," };
        out.push_str(&format!("    0x{:08X}u{}\n", word, sep));
    }
    out.push_str(");\n\n");

    out.push_str(BIT_LOOKUP);
    out.push('\n');

    out.push_str(match options.shader_type {
        ShaderType::CanvasItem => FRAGMENT_CANVAS_ITEM,
        ShaderType::Spatial => FRAGMENT_SPATIAL,
    });

    out
}

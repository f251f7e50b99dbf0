//! xbm2gdshader - XBM to Godot 4 shader CLI
//!
//! Reads an XBM bitmap and writes a self-contained `canvas_item` or `spatial`
//! shader that tiles it across the screen, one bitmap pixel per screen pixel.
//! Pipeline: XBM text -> dimensions + row-padded bytes -> packed u32 words -> shader
//!
//! Optional outputs: a PNG preview of one tile and a metadata JSON file.

mod args;

use args::*;
use clap::Parser;
use serde_json::json;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use xbm_shader::preview::{render_preview, save_preview};
use xbm_shader::{convert, Conversion, Rgba, ShaderOptions};

// ============================================================================
// Output Files
// ============================================================================

fn write_text(path: &Path, text: &str) -> Result<(), String> {
    let mut file = File::create(path)
        .map_err(|e| format!("Failed to create {}: {}", path.display(), e))?;
    file.write_all(text.as_bytes())
        .map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}

fn write_metadata(
    path: &Path,
    args: &Args,
    options: &ShaderOptions,
    conversion: &Conversion,
) -> Result<(), String> {
    // Name from the input filename, without extension
    let name = args
        .input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("bitmap");

    let meta = json!({
        "name": name,
        "type": "xbm",
        "width": conversion.dimensions.width,
        "height": conversion.dimensions.height,
        "words": conversion.words.len(),
        "shader_type": options.shader_type.name(),
        "fg": options.fg.to_hex(),
        "bg": options.bg.to_hex(),
        "output": args.output.display().to_string(),
    });
    let text = serde_json::to_string_pretty(&meta)
        .map_err(|e| format!("Failed to serialize metadata: {}", e))?;
    write_text(path, &(text + "\n"))
}

/// Convert `args.input` and write every requested output
fn run(args: &Args) -> Result<Conversion, String> {
    // Validate colours before touching the filesystem
    let options = ShaderOptions {
        shader_type: args.shader_type.to_shader_type(),
        fg: Rgba::parse_hex(&args.fg).map_err(|e| format!("--fg: {}", e))?,
        bg: Rgba::parse_hex(&args.bg).map_err(|e| format!("--bg: {}", e))?,
    };

    log::debug!("Loading: {}", args.input.display());
    // Old XBM files often carry Latin-1 comments; only ASCII matters to the parser
    let bytes = std::fs::read(&args.input)
        .map_err(|e| format!("Failed to read {}: {}", args.input.display(), e))?;
    let text = String::from_utf8_lossy(&bytes);

    let conversion = convert(&text, &options)
        .map_err(|e| format!("{}: {}", args.input.display(), e))?;
    log::debug!(
        "Packed {}x{} into {} words ({})",
        conversion.dimensions.width,
        conversion.dimensions.height,
        conversion.words.len(),
        options.shader_type.name()
    );

    write_text(&args.output, &conversion.shader)?;

    if let Some(ref preview_path) = args.preview {
        log::debug!("Writing preview: {}", preview_path.display());
        let img = render_preview(conversion.dimensions, &conversion.words, options.fg, options.bg);
        save_preview(preview_path, &img)?;
    }

    if let Some(ref meta_path) = args.output_meta {
        log::debug!("Writing metadata: {}", meta_path.display());
        write_metadata(meta_path, args, &options, &conversion)?;
    }

    Ok(conversion)
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let conversion = run(&args)?;

    println!(
        "Wrote {} ({}x{}, {} uints)",
        args.output.display(),
        conversion.dimensions.width,
        conversion.dimensions.height,
        conversion.words.len()
    );

    Ok(())
}

//! The platform shim: load a scene, render one frame, write a PNG.
//!
//! Usage: `glint <scene.json> <out.png> [width height]`
//!
//! Everything interesting lives in `glint_core` (scene model and
//! loading) and `glint_renderer` (the ray tracer); this binary only
//! wires dimensions and file paths to them.

use anyhow::{bail, Context, Result};
use glint_core::load_scene;
use glint_renderer::render;

const DEFAULT_WIDTH: u32 = 1024;
const DEFAULT_HEIGHT: u32 = 768;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (scene_path, out_path, width, height) = match args.as_slice() {
        [scene, out] => (scene, out, DEFAULT_WIDTH, DEFAULT_HEIGHT),
        [scene, out, width, height] => {
            let width = parse_dimension(width, "width")?;
            let height = parse_dimension(height, "height")?;
            (scene, out, width, height)
        }
        _ => bail!("usage: glint <scene.json> <out.png> [width height]"),
    };

    let scene = load_scene(scene_path)
        .with_context(|| format!("failed to load scene '{}'", scene_path))?;

    let frame = render(&scene, width, height);

    frame
        .save_png(out_path)
        .with_context(|| format!("failed to write '{}'", out_path))?;
    log::info!("wrote {}", out_path);

    Ok(())
}

fn parse_dimension(arg: &str, name: &str) -> Result<u32> {
    let value: u32 = arg
        .parse()
        .with_context(|| format!("{} must be a positive integer, got '{}'", name, arg))?;
    if value == 0 {
        bail!("{} must be positive", name);
    }
    Ok(value)
}

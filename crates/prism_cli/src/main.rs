//! prism - render a built-in scene to a PPM file.

use anyhow::{Context, Result};
use clap::Parser;
use prism_renderer::{render_to_file, CameraConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::Path;

mod cli;
mod logger;
mod scene;

use cli::Args;
use logger::init_logger;

/// Read a camera description from a JSON file.
fn load_camera(path: &Path) -> Result<CameraConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read camera file {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse camera file {}", path.display()))?;
    Ok(config)
}

/// Combine the scene camera, an optional camera file and the flag overrides.
fn resolve_camera(args: &Args, scene_camera: CameraConfig) -> Result<CameraConfig> {
    let mut config = match &args.camera {
        Some(path) => load_camera(path)?,
        None => scene_camera,
    };

    if let Some(width) = args.width {
        config.image_width = width;
    }
    if let Some(samples) = args.samples {
        config.samples_per_pixel = samples;
    }
    if let Some(max_depth) = args.max_depth {
        config.max_depth = max_depth;
    }

    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let (world, scene_camera) = scene::build(args.scene);
    let config = resolve_camera(&args, scene_camera)?;
    log::info!("Scene {:?} with {} objects", args.scene, world.len());

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    render_to_file(&config, &world, &args.output, &mut rng)
        .with_context(|| format!("Failed to render to {}", args.output.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_scene_camera() {
        let args = Args::try_parse_from(["prism", "--width", "32", "--samples", "2"]).unwrap();
        let config = resolve_camera(&args, CameraConfig::default().with_quality(50, 7)).unwrap();

        assert_eq!(config.image_width, 32);
        assert_eq!(config.samples_per_pixel, 2);
        assert_eq!(config.max_depth, 7);
    }

    #[test]
    fn test_camera_file() {
        let path = std::env::temp_dir().join(format!("prism-camera-{}.json", std::process::id()));
        fs::write(&path, r#"{ "vfov": 35.0, "max_depth": 3 }"#).unwrap();

        let args = Args::try_parse_from(["prism", "--camera", path.to_str().unwrap()]).unwrap();
        let scene_camera = CameraConfig::default().with_resolution(400, 2.0);
        let config = resolve_camera(&args, scene_camera).unwrap();
        fs::remove_file(&path).unwrap();

        // The file replaces the scene camera entirely
        assert_eq!(config.vfov, 35.0);
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.image_width, 100);
    }

    #[test]
    fn test_missing_camera_file() {
        let args =
            Args::try_parse_from(["prism", "--camera", "/nonexistent/prism/camera.json"]).unwrap();
        assert!(resolve_camera(&args, CameraConfig::default()).is_err());
    }
}

//! Image output: plain PPM encoding and the render entry points.

use crate::{render, Camera, CameraConfig, Hittable, ImageBuffer};
use rand::RngCore;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;

/// Errors that can occur while producing an image.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not open {path} for writing: {source}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Write an image as ASCII PPM (P3), one "r g b" line per pixel.
pub fn write_ppm<W: Write>(image: &ImageBuffer, writer: &mut W) -> RenderResult<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for rgb in image.to_rgb().chunks_exact(3) {
        writeln!(writer, "{} {} {}", rgb[0], rgb[1], rgb[2])?;
    }

    Ok(())
}

/// Render `world` through a camera built from `config` and stream it as PPM.
pub fn render_to_stream<W: Write>(
    config: &CameraConfig,
    world: &dyn Hittable,
    writer: &mut W,
    rng: &mut dyn RngCore,
) -> RenderResult<()> {
    let camera = Camera::new(config);

    log::info!(
        "Rendering {}x{} at {} spp, max depth {}",
        camera.image_width(),
        camera.image_height(),
        camera.samples_per_pixel(),
        camera.max_depth()
    );
    let start = Instant::now();

    let image = render(&camera, world, rng);
    log::info!("Render complete in {:.2?}", start.elapsed());

    write_ppm(&image, writer)?;
    writer.flush()?;

    Ok(())
}

/// Render to a PPM file at `path`.
///
/// The file is opened before any work is done; if that fails nothing is
/// rendered.
pub fn render_to_file(
    config: &CameraConfig,
    world: &dyn Hittable,
    path: impl AsRef<Path>,
    rng: &mut dyn RngCore,
) -> RenderResult<()> {
    let path = path.as_ref();

    let file = match File::create(path) {
        Ok(file) => file,
        Err(source) => {
            log::error!("Could not open {} for writing: {}", path.display(), source);
            return Err(RenderError::CreateOutput {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let mut writer = BufWriter::new(file);
    render_to_stream(config, world, &mut writer, rng)?;
    log::info!("Wrote {}", path.display());

    Ok(())
}

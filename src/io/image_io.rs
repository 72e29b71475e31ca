//! Image file loading and saving
//!
//! Decoding supports whatever formats the `image` crate was built with;
//! pieces are always written as PNG.

use std::path::Path;

use image::ImageFormat;
use log::{debug, error, info};

use crate::split::errors::{SplitError, SplitResult};
use crate::surface::{PixelSurface, Surface};

/// Load an image file into an RGBA surface
///
/// # Arguments
/// * `path` - Path to the image file
///
/// # Returns
/// The decoded surface, or an I/O or decode error
pub fn load_surface<P: AsRef<Path>>(path: P) -> SplitResult<PixelSurface> {
    let path = path.as_ref();
    info!("Loading image {}", path.display());

    let image = image::open(path).map_err(|e| {
        error!("Failed to load {}: {}", path.display(), e);
        match e {
            image::ImageError::IoError(io) => SplitError::Io(io),
            other => SplitError::Image(other),
        }
    })?;

    let surface = PixelSurface::from_image(image.to_rgba8());
    debug!("Loaded {}x{} image", surface.width(), surface.height());
    Ok(surface)
}

/// Save a surface as a PNG file
///
/// # Arguments
/// * `surface` - Surface to encode
/// * `path` - Destination file; overwritten if it exists
pub fn save_png<P: AsRef<Path>>(surface: &PixelSurface, path: P) -> SplitResult<()> {
    let path = path.as_ref();
    debug!("Saving {}", path.display());

    surface
        .image()
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| {
            error!("Failed to save {}: {}", path.display(), e);
            match e {
                image::ImageError::IoError(io) => SplitError::Io(io),
                other => SplitError::Image(other),
            }
        })
}

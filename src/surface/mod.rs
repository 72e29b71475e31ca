//! Pixel buffer capability used by the splitter

mod surface;
mod pixel_surface;

pub use surface::Surface;
pub use pixel_surface::PixelSurface;

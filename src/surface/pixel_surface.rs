//! RGBA8 surface backed by the `image` crate

use image::{GenericImage, GenericImageView, ImageBuffer, Rgba, RgbaImage};
use log::debug;

use crate::split::errors::{SplitError, SplitResult};
use crate::split::region::Region;

use super::surface::Surface;

const BYTES_PER_PIXEL: usize = 4;

/// In-memory RGBA8 pixel buffer
#[derive(Debug, Clone)]
pub struct PixelSurface {
    image: RgbaImage,
}

impl PixelSurface {
    /// Wrap an existing image buffer
    pub fn from_image(image: RgbaImage) -> Self {
        PixelSurface { image }
    }

    /// Borrow the underlying image buffer
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }
}

impl Surface for PixelSurface {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn create(width: u32, height: u32) -> SplitResult<Self> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
            .ok_or(SplitError::Allocation { width, height })?;

        let mut data: Vec<u8> = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| SplitError::Allocation { width, height })?;
        data.resize(len, 0);

        let image = ImageBuffer::from_raw(width, height, data)
            .ok_or(SplitError::Allocation { width, height })?;
        Ok(PixelSurface { image })
    }

    fn copy_rect(&self, region: Region, destination: &mut Self) -> SplitResult<()> {
        if !region.fits_within(self.width(), self.height()) {
            return Err(SplitError::Surface(format!(
                "region {:?} lies outside {}x{} source",
                region,
                self.width(),
                self.height()
            )));
        }
        if region.width > destination.width() || region.height > destination.height() {
            return Err(SplitError::Surface(format!(
                "region {:?} does not fit {}x{} destination",
                region,
                destination.width(),
                destination.height()
            )));
        }

        debug!("Copying {:?}", region);
        let view = self.image.view(region.x, region.y, region.width, region.height);
        destination
            .image
            .copy_from(&*view, 0, 0)
            .map_err(|e| SplitError::Surface(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> PixelSurface {
        PixelSurface::from_image(RgbaImage::from_fn(width, height, |x, y| {
            Rgba([x as u8, y as u8, 0, 255])
        }))
    }

    #[test]
    fn test_create_is_zeroed() {
        let surface = PixelSurface::create(3, 2).unwrap();
        assert_eq!(surface.width(), 3);
        assert_eq!(surface.height(), 2);
        assert_eq!(surface.get_pixel(2, 1), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_copy_rect_copies_pixels() {
        let source = gradient(10, 8);
        let mut dest = PixelSurface::create(4, 3).unwrap();
        source.copy_rect(Region::new(5, 2, 4, 3), &mut dest).unwrap();

        assert_eq!(dest.get_pixel(0, 0), Rgba([5, 2, 0, 255]));
        assert_eq!(dest.get_pixel(3, 2), Rgba([8, 4, 0, 255]));
    }

    #[test]
    fn test_copy_rect_outside_source_fails() {
        let source = gradient(10, 8);
        let mut dest = PixelSurface::create(4, 4).unwrap();
        let result = source.copy_rect(Region::new(8, 0, 4, 4), &mut dest);
        assert!(matches!(result, Err(SplitError::Surface(_))));
    }

    #[test]
    fn test_copy_rect_larger_than_destination_fails() {
        let source = gradient(10, 8);
        let mut dest = PixelSurface::create(2, 2).unwrap();
        let result = source.copy_rect(Region::new(0, 0, 4, 4), &mut dest);
        assert!(matches!(result, Err(SplitError::Surface(_))));
    }
}

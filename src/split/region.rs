//! Region structure for a single grid cell
//!
//! Coordinates are in pixels with (0,0) at the top-left corner of the
//! source image.

/// Rectangular pixel area of the source image
///
/// Represents a rectangle defined by its top-left corner and dimensions.
/// The splitter computes one of these per cell and hands it to the
/// surface capability for copying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// X-coordinate of the top-left corner (pixels from left)
    pub x: u32,

    /// Y-coordinate of the top-left corner (pixels from top)
    pub y: u32,

    /// Width of the region in pixels
    pub width: u32,

    /// Height of the region in pixels
    pub height: u32,
}

impl Region {
    /// Create a new region
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Region { x, y, width, height }
    }

    /// Rightmost X coordinate (exclusive), widened so it cannot overflow
    pub fn end_x(&self) -> u64 {
        self.x as u64 + self.width as u64
    }

    /// Bottommost Y coordinate (exclusive), widened so it cannot overflow
    pub fn end_y(&self) -> u64 {
        self.y as u64 + self.height as u64
    }

    /// Whether the region lies entirely inside a `width` x `height` area
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.end_x() <= width as u64 && self.end_y() <= height as u64
    }
}

//! Surface capability
//!
//! The splitter never touches pixels itself. It asks a `Surface`
//! implementation to allocate cell buffers and to copy rectangles into them.

use crate::split::errors::SplitResult;
use crate::split::region::Region;

/// A rectangular pixel buffer
///
/// Releasing a surface is dropping it; every buffer has exactly one owner.
pub trait Surface: Sized {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Allocate a new surface of the given size
    ///
    /// # Returns
    /// The new surface, or `SplitError::Allocation` if the buffer cannot
    /// be reserved
    fn create(width: u32, height: u32) -> SplitResult<Self>;

    /// Copy `region` of `self` into the top-left corner of `destination`
    ///
    /// # Returns
    /// `SplitError::Surface` if the region is outside `self` or larger than
    /// `destination`
    fn copy_rect(&self, region: Region, destination: &mut Self) -> SplitResult<()>;
}

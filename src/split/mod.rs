//! Grid tiling engine
//!
//! This module resolves grid geometry against a source image, enumerates
//! grid cells and names them for output.

pub mod errors;
pub mod geometry;
pub mod region;
pub mod resolver;
pub mod splitter;
pub mod naming;
#[cfg(test)]
mod tests;

pub use errors::{Axis, ParameterError, SplitError, SplitResult};
pub use geometry::{Geometry, GeometryRequest};
pub use region::Region;
pub use resolver::ParameterResolver;
pub use splitter::{GridSplitter, Piece, SplitState};
pub use naming::{CellId, IndexMode, NamingScheme};

pub mod io;
pub mod split;
pub mod surface;
pub mod config;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::{ImageSplitter, SplitOptions, SplitPlan};

pub use split::{Geometry, GeometryRequest, GridSplitter, IndexMode, NamingScheme, ParameterResolver, SplitError, SplitResult};
pub use surface::{PixelSurface, Surface};

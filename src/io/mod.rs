//! I/O utilities for image files
//!
//! This module loads source images and writes extracted pieces.

pub mod image_io;

pub use image_io::{load_surface, save_png};

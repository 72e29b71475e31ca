//! Utility modules for common functionality
//!
//! This module provides logging, progress reporting and string helpers
//! used throughout the application.

pub mod logger;
pub mod progress;
pub mod string_utils;

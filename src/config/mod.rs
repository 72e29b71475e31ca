//! Optional file-based defaults for split options

pub mod defaults;

pub use defaults::SplitDefaults;

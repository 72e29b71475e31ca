//! Split defaults loaded from a TOML file
//!
//! The file may contain a `[split]` table:
//!
//! ```toml
//! [split]
//! start_x = 0
//! start_y = 0
//! rows = 4
//! columns = 4
//! width = 64
//! height = 64
//! mode = "grid"
//! prefix = "out/tile"
//! ```
//!
//! Every key is optional. Command-line values take precedence.

use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::split::errors::{SplitError, SplitResult};
use crate::split::geometry::GeometryRequest;
use crate::split::naming::IndexMode;

const SPLIT_TABLE: &str = "split";

/// Defaults read from a configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitDefaults {
    pub request: GeometryRequest,
    pub mode: Option<IndexMode>,
    pub prefix: Option<String>,
}

impl SplitDefaults {
    /// Parse defaults from a TOML string
    pub fn from_str(content: &str) -> SplitResult<Self> {
        let document: toml::Table = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(SplitError::Config(format!("Failed to parse TOML: {}", e))),
        };

        let mut defaults = SplitDefaults::default();
        let Some(table) = document.get(SPLIT_TABLE).and_then(|v| v.as_table()) else {
            debug!("No [{}] table in configuration", SPLIT_TABLE);
            return Ok(defaults);
        };

        for (key, value) in table {
            match key.as_str() {
                "start_x" => defaults.request.start_x = Self::integer(key, value, 0)?,
                "start_y" => defaults.request.start_y = Self::integer(key, value, 0)?,
                "rows" => defaults.request = defaults.request.with_rows(Self::integer(key, value, 1)?),
                "columns" => defaults.request = defaults.request.with_columns(Self::integer(key, value, 1)?),
                "width" => defaults.request = defaults.request.with_cell_width(Self::integer(key, value, 1)?),
                "height" => defaults.request = defaults.request.with_cell_height(Self::integer(key, value, 1)?),
                "mode" => {
                    let mode = Self::string(key, value)?;
                    defaults.mode = Some(mode.parse::<IndexMode>().map_err(|e| SplitError::Config(format!("{}", e)))?);
                }
                "prefix" => defaults.prefix = Some(Self::string(key, value)?.to_string()),
                _ => warn!("Ignoring unknown configuration key {}.{}", SPLIT_TABLE, key),
            }
        }

        Ok(defaults)
    }

    /// Load defaults from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> SplitResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        debug!("Read configuration from {}", path.display());
        Self::from_str(&contents)
    }

    /// Integer in `[min, i32::MAX]`
    fn integer(key: &str, value: &toml::Value, min: i64) -> SplitResult<u32> {
        match value.as_integer() {
            Some(v) if v >= min && v <= i32::MAX as i64 => Ok(v as u32),
            _ => Err(SplitError::Config(format!("Invalid value for {}: {}", key, value))),
        }
    }

    fn string<'v>(key: &str, value: &'v toml::Value) -> SplitResult<&'v str> {
        value
            .as_str()
            .ok_or_else(|| SplitError::Config(format!("Expected a string for {}: {}", key, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_table() {
        let defaults = SplitDefaults::from_str(
            r#"
            [split]
            start_x = 4
            start_y = 2
            rows = 3
            width = 16
            mode = "linear"
            prefix = "out/tile"
            "#,
        )
        .unwrap();

        assert_eq!(
            defaults.request,
            GeometryRequest::new().with_start(4, 2).with_rows(3).with_cell_width(16)
        );
        assert_eq!(defaults.mode, Some(IndexMode::Linear));
        assert_eq!(defaults.prefix.as_deref(), Some("out/tile"));
    }

    #[test]
    fn test_missing_table_gives_empty_defaults() {
        let defaults = SplitDefaults::from_str("[other]\nrows = 2\n").unwrap();
        assert_eq!(defaults, SplitDefaults::default());
    }

    #[test]
    fn test_zero_rows_rejected() {
        let result = SplitDefaults::from_str("[split]\nrows = 0\n");
        assert!(matches!(result, Err(SplitError::Config(_))));
    }

    #[test]
    fn test_bad_mode_rejected() {
        let result = SplitDefaults::from_str("[split]\nmode = \"spiral\"\n");
        assert!(matches!(result, Err(SplitError::Config(_))));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(SplitDefaults::from_str("[split\nrows = 1").is_err());
    }
}

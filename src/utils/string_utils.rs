//! String utility functions
//!
//! Parsing of numeric command-line values and output prefix derivation.

use std::path::Path;

use crate::split::errors::ParameterError;

/// Largest value accepted for any numeric option
const MAX_OPTION_VALUE: u32 = i32::MAX as u32;

/// Parses an integer in `[0, i32::MAX]`
pub fn parse_non_negative(name: &'static str, value: &str) -> Result<u32, ParameterError> {
    value
        .parse::<u32>()
        .ok()
        .filter(|&v| v <= MAX_OPTION_VALUE)
        .ok_or_else(|| ParameterError::InvalidValue { name, value: value.to_string() })
}

/// Parses an integer in `[1, i32::MAX]`
pub fn parse_positive(name: &'static str, value: &str) -> Result<u32, ParameterError> {
    match parse_non_negative(name, value)? {
        0 => Err(ParameterError::InvalidValue { name, value: value.to_string() }),
        v => Ok(v),
    }
}

/// Parses a start position of the form `X,Y`
pub fn parse_start_position(value: &str) -> Result<(u32, u32), ParameterError> {
    let invalid = || ParameterError::InvalidValue { name: "starting position", value: value.to_string() };

    let (x, y) = value.split_once(',').ok_or_else(invalid)?;
    let x = parse_non_negative("starting position", x).map_err(|_| invalid())?;
    let y = parse_non_negative("starting position", y).map_err(|_| invalid())?;
    Ok((x, y))
}

/// Output prefix for an input path: the path without its final extension
///
/// Paths whose file name has no extension are returned unchanged.
pub fn derive_prefix(input: &str) -> String {
    let path = Path::new(input);
    match path.extension() {
        Some(_) => path.with_extension("").to_string_lossy().into_owned(),
        None => input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive("width", "12"), Ok(12));
        assert_eq!(parse_positive("width", "2147483647"), Ok(2147483647));
        assert!(parse_positive("width", "0").is_err());
        assert!(parse_positive("width", "-3").is_err());
        assert!(parse_positive("width", "2147483648").is_err());
        assert!(parse_positive("width", "12px").is_err());
        assert!(parse_positive("width", "").is_err());
    }

    #[test]
    fn test_parse_start_position() {
        assert_eq!(parse_start_position("10,20"), Ok((10, 20)));
        assert_eq!(parse_start_position("0,0"), Ok((0, 0)));
        assert!(parse_start_position("10").is_err());
        assert!(parse_start_position("10,").is_err());
        assert!(parse_start_position("10;20").is_err());
        assert!(parse_start_position("10,20,30").is_err());
        assert!(parse_start_position("-1,5").is_err());
    }

    #[test]
    fn test_derive_prefix() {
        assert_eq!(derive_prefix("photo.png"), "photo");
        assert_eq!(derive_prefix("dir/archive.tar.gz"), "dir/archive.tar");
        assert_eq!(derive_prefix("noext"), "noext");
        assert_eq!(derive_prefix("some.dir/noext"), "some.dir/noext");
        assert_eq!(derive_prefix(".hidden"), ".hidden");
    }
}

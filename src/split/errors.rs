//! Custom error types for image splitting

use std::fmt;
use std::io;

/// Image axis, used to say which bound a parameter violates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
        }
    }
}

/// Problems with the requested grid geometry
///
/// All of these are detected before any cell is enumerated, so a run that
/// fails with one of them never writes an output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    /// Start position lies outside the source image
    StartOutOfBounds { axis: Axis, start: u32, extent: u32 },
    /// A geometry value was neither given nor derivable
    Unspecified(&'static str),
    /// A geometry value was derived as zero
    NonPositive(&'static str),
    /// rows * columns would not fit the signed index range
    TooManyCells { rows: u32, columns: u32 },
    /// The grid extends past the edge of the source image
    ExceedsImage { axis: Axis, required: u64, extent: u32 },
    /// A value could not be parsed or is out of range
    InvalidValue { name: &'static str, value: String },
    /// No input file was given
    MissingInput,
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterError::StartOutOfBounds { axis, start, extent } => write!(
                f,
                "Start {} position lies outside image bounds: {} of {}",
                axis, start, extent
            ),
            ParameterError::Unspecified(field) => write!(f, "{} value unspecified", field),
            ParameterError::NonPositive(field) => {
                write!(f, "{} value resolves to zero for this image", field)
            }
            ParameterError::TooManyCells { rows, columns } => write!(
                f,
                "There are too many rows ({}) and/or columns ({})",
                rows, columns
            ),
            ParameterError::ExceedsImage { axis, required, extent } => write!(
                f,
                "Grid exceeds image {} extent: needs {} pixels, image has {}",
                axis, required, extent
            ),
            ParameterError::InvalidValue { name, value } => {
                write!(f, "Invalid {} value: {}", name, value)
            }
            ParameterError::MissingInput => write!(f, "Input file unspecified"),
        }
    }
}

/// Image splitting error types
#[derive(Debug)]
pub enum SplitError {
    /// Invalid or inconsistent geometry
    Parameter(ParameterError),
    /// I/O error
    Io(io::Error),
    /// Image decode or encode error
    Image(image::ImageError),
    /// A pixel buffer could not be allocated
    Allocation { width: u32, height: u32 },
    /// A rectangle copy fell outside a surface; indicates a geometry bug
    Surface(String),
    /// Configuration file error
    Config(String),
}

impl SplitError {
    /// Whether this error was raised before enumeration started
    pub fn is_parameter_error(&self) -> bool {
        matches!(self, SplitError::Parameter(_))
    }
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::Parameter(e) => write!(f, "{}", e),
            SplitError::Io(e) => write!(f, "I/O error: {}", e),
            SplitError::Image(e) => write!(f, "Image error: {}", e),
            SplitError::Allocation { width, height } => {
                write!(f, "Memory error: cannot allocate a {}x{} surface", width, height)
            }
            SplitError::Surface(msg) => write!(f, "Internal surface error: {}", msg),
            SplitError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for SplitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SplitError::Io(e) => Some(e),
            SplitError::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SplitError {
    fn from(error: io::Error) -> Self {
        SplitError::Io(error)
    }
}

impl From<image::ImageError> for SplitError {
    fn from(error: image::ImageError) -> Self {
        SplitError::Image(error)
    }
}

impl From<ParameterError> for SplitError {
    fn from(error: ParameterError) -> Self {
        SplitError::Parameter(error)
    }
}

/// Result type for splitting operations
pub type SplitResult<T> = Result<T, SplitError>;

//! Error types for the Kerf toolkit.
//!
//! The per-cell kernels are total and never fail. Errors only arise when
//! constructing boxes and arrays, validating configuration, or checking
//! that the data handed to a sweep covers the region it needs.

use std::error::Error;
use std::fmt;

/// Errors from index-space construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IndexError {
    /// `hi < lo` on some axis.
    InvertedBox {
        /// The offending axis.
        axis: usize,
        /// Lower corner on that axis.
        lo: i32,
        /// Upper corner on that axis.
        hi: i32,
    },
    /// Only 2D and 3D index spaces are supported.
    UnsupportedDimension {
        /// The requested dimension.
        dim: usize,
    },
    /// A requested extent does not fit the `i32` index space.
    ExtentOverflow {
        /// The requested number of cells per axis.
        extent: u32,
    },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedBox { axis, lo, hi } => {
                write!(f, "inverted box on axis {axis}: lo {lo} > hi {hi}")
            }
            Self::UnsupportedDimension { dim } => {
                write!(f, "unsupported dimension {dim}, expected 2 or 3")
            }
            Self::ExtentOverflow { extent } => {
                write!(f, "extent {extent} exceeds the i32 index space")
            }
        }
    }
}

impl Error for IndexError {}

/// Errors from data shape validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataError {
    /// An input does not cover the region a computation needs.
    BoxNotCovered {
        /// Which input fell short (e.g. `"state"`, `"flags"`).
        input: &'static str,
        /// The region that must be covered, formatted.
        needed: String,
        /// The region actually available, formatted.
        available: String,
    },
    /// A component index exceeds the stored component count.
    ComponentOutOfRange {
        /// Which input was addressed.
        input: &'static str,
        /// The requested component.
        component: usize,
        /// Components available.
        available: usize,
    },
    /// Two inputs that must share a box do not.
    BoxMismatch {
        /// Which input disagrees.
        input: &'static str,
        /// The box it must match, formatted.
        expected: String,
        /// Its actual box, formatted.
        actual: String,
    },
    /// A buffer has the wrong length for its box and component count.
    LengthMismatch {
        /// Expected element count.
        expected: usize,
        /// Actual element count.
        actual: usize,
    },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoxNotCovered {
                input,
                needed,
                available,
            } => write!(f, "{input} covers {available}, need {needed}"),
            Self::ComponentOutOfRange {
                input,
                component,
                available,
            } => write!(
                f,
                "{input} component {component} out of range ({available} available)"
            ),
            Self::BoxMismatch {
                input,
                expected,
                actual,
            } => write!(f, "{input} box {actual} differs from {expected}"),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "buffer has {actual} elements, expected {expected}")
            }
        }
    }
}

impl Error for DataError {}

/// Errors detected by limiter configuration validation.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The relative tolerance is NaN, infinite or negative.
    InvalidEpsilon {
        /// The rejected value.
        value: f64,
    },
    /// The requested component range is empty.
    EmptyComponentRange,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEpsilon { value } => {
                write!(f, "epsilon must be finite and non-negative, got {value}")
            }
            Self::EmptyComponentRange => write!(f, "component range is empty"),
        }
    }
}

impl Error for ConfigError {}

/// Errors from a limiter sweep.
#[derive(Clone, Debug, PartialEq)]
pub enum LimiterError {
    /// Configuration failed validation.
    Config(ConfigError),
    /// Input data has the wrong shape.
    Data(DataError),
    /// The sweep region itself is malformed.
    Index(IndexError),
}

impl fmt::Display for LimiterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Data(e) => write!(f, "data: {e}"),
            Self::Index(e) => write!(f, "index: {e}"),
        }
    }
}

impl Error for LimiterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Data(e) => Some(e),
            Self::Index(e) => Some(e),
        }
    }
}

impl From<ConfigError> for LimiterError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<DataError> for LimiterError {
    fn from(e: DataError) -> Self {
        Self::Data(e)
    }
}

impl From<IndexError> for LimiterError {
    fn from(e: IndexError) -> Self {
        Self::Index(e)
    }
}

use std::fmt;

use mesi_core::{Rational, ScaleError};

/// Arithmetic on a quantity value that has no real result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuantityError {
    /// `value^exponent` is undefined: an even root of a negative value, or a
    /// negative exponent of zero.
    Domain { value: f64, exponent: Rational },
}

impl fmt::Display for QuantityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantityError::Domain { value, exponent } => {
                write!(f, "{value}^({exponent}) is outside the domain of a real power")
            }
        }
    }
}

impl std::error::Error for QuantityError {}

/// Any error produced by this crate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    Scale(ScaleError),
    Quantity(QuantityError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Scale(err) => write!(f, "scale error: {err}"),
            Error::Quantity(err) => write!(f, "quantity error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Scale(err) => Some(err),
            Error::Quantity(err) => Some(err),
        }
    }
}

impl From<ScaleError> for Error {
    fn from(err: ScaleError) -> Self {
        Error::Scale(err)
    }
}

impl From<QuantityError> for Error {
    fn from(err: QuantityError) -> Self {
        Error::Quantity(err)
    }
}

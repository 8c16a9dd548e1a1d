use std::fmt;

/// Failure while constructing or combining a [`ScaleFactor`](crate::ScaleFactor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleError {
    /// An integer power or product needed for canonicalization does not fit in `i64`.
    Overflow,
    /// Scale ratios must be strictly positive.
    NonPositiveRatio,
    /// A root index of zero has no meaning.
    ZeroRoot,
    ZeroDenominator,
}

impl ScaleError {
    /// Abort with a message naming the error.
    ///
    /// Used by the `const fn` entry points so that a failure while evaluating a
    /// unit's associated constant is reported as a compile error.
    pub const fn panic(self) -> ! {
        match self {
            ScaleError::Overflow => panic!("scale factor overflow"),
            ScaleError::NonPositiveRatio => panic!("scale factor ratio must be positive"),
            ScaleError::ZeroRoot => panic!("scale factor root index must be non-zero"),
            ScaleError::ZeroDenominator => panic!("scale factor denominator must be non-zero"),
        }
    }
}

impl fmt::Display for ScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleError::Overflow => write!(f, "integer overflow while canonicalizing scale factor"),
            ScaleError::NonPositiveRatio => write!(f, "scale factor ratio must be positive"),
            ScaleError::ZeroRoot => write!(f, "scale factor root index must be non-zero"),
            ScaleError::ZeroDenominator => write!(f, "scale factor denominator must be non-zero"),
        }
    }
}

impl std::error::Error for ScaleError {}

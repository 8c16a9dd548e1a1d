//! Compile-time dimension and scale algebra for `mesi` quantities.
//!
//! This crate holds the value-level descriptors that every quantity type is
//! built from:
//!
//! - [`Rational`]: exact exponents,
//! - [`Dimension`]: exponents of the seven SI base units,
//! - [`ScaleFactor`]: canonical `ratio^(1/root) * 10^power` multipliers,
//! - [`Numeric`]: the numeric representations a quantity may store.
//!
//! All descriptor arithmetic is `const fn` so that `mesi` can compute the
//! dimension and scale of a product or quotient as associated constants.
//!
//! The `serde` feature adds `Serialize` and `Deserialize` for the descriptors.

pub mod checked;
pub mod dimension;
pub mod error;
pub mod numeric;
pub mod rational;
pub mod scale;
#[cfg(feature = "serde")]
mod serde_impls;

pub use dimension::{BaseUnit, Dimension};
pub use error::ScaleError;
pub use numeric::Numeric;
pub use rational::Rational;
pub use scale::ScaleFactor;

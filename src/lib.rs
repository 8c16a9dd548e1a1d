//! Dimensionally checked arithmetic on numeric quantities.
//!
//! A [`Quantity<U, R>`] pairs a number of type `R` with a unit `U` known at
//! compile time. The unit carries a [`Dimension`] (rational exponents of the
//! seven SI base units) and a [`ScaleFactor`] (`ratio^(1/root) * 10^power`,
//! kept in a canonical form so that equal multipliers are equal values).
//!
//! ```rust
//! use mesi::si::*;
//! use mesi::unit::{DivUnit, Unit};
//!
//! let d = Meters::new(5.0);
//! let t = Seconds::new(20.0);
//! let v = d / t;
//! assert_eq!(v.value(), 0.25);
//! assert_eq!(v.dimension(), DivUnit::<Meter, Second>::DIMENSION);
//!
//! let km: Kilometers = Meters::new(1500.0).convert();
//! assert_eq!(km.value(), 1.5);
//! ```
//!
//! The descriptor algebra itself lives in `mesi_core` and is re-exported
//! here.

pub mod error;
pub mod format;
pub mod math;
pub mod quantity;
pub mod si;
pub mod unit;

pub use mesi_core::{checked, dimension, numeric, rational, scale};
pub use mesi_core::{BaseUnit, Dimension, Numeric, Rational, ScaleError, ScaleFactor};

pub use error::{Error, QuantityError};
pub use quantity::Quantity;
pub use unit::Unit;

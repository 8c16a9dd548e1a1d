//! Floating-point functions on quantities.
//!
//! Rounding, extrema and magnitude functions keep the unit. Transcendental
//! and special functions (`erf`, `tgamma`, ...) only accept dimensionless
//! quantities; they fold the scale into
//! the value first and return a plain [`Unitless`] number.
//!
//! ```rust
//! use mesi::si::{Kilometers, Meters};
//!
//! let a = Meters::new(3.0);
//! let b = Meters::new(-4.0);
//! assert_eq!(a.hypot(b), Meters::new(5.0));
//! assert_eq!(b.abs(), Meters::new(4.0));
//!
//! let ratio = Meters::new(1000.0) / Kilometers::new(1.0);
//! assert_eq!(ratio.ln().get(), 0.0);
//! ```
//!
//! ```rust,compile_fail
//! use mesi::si::Meters;
//!
//! let _ = Meters::new(1.0).exp();
//! ```

use num_traits::Float;

use mesi_core::Numeric;

use crate::quantity::Quantity;
use crate::unit::{same_unit, MulUnit, Unit, Unitless};

macro_rules! dimensionless_guard {
    ($u:ty) => {
        const {
            assert!(
                <$u as Unit>::DIMENSION.is_dimensionless(),
                "Dimension mismatch: expected a dimensionless quantity"
            )
        }
    };
}

/// Functions of a dimensionless argument, evaluated on the base value.
macro_rules! dimensionless_fns {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $name(self) -> Quantity<Unitless, R> {
                dimensionless_guard!(U);
                Quantity::new(self.into_base_value().$name())
            }
        )*
    };
}

/// Dimensionless functions that `num_traits::Float` lacks, computed in `f64`
/// by `libm`.
macro_rules! libm_fns {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $name(self) -> Quantity<Unitless, R> {
                dimensionless_guard!(U);
                Quantity::new(R::val_from_f64(libm::$name(self.into_base_value().val_to_f64())))
            }
        )*
    };
}

fn round_ties_even<R: Float>(x: R) -> R {
    if !x.is_finite() {
        return x;
    }
    let one = R::one();
    let two = one + one;
    let floor = x.floor();
    let diff = x - floor;
    if diff < one / two {
        floor
    } else if diff > one / two || (floor / two).fract() != R::zero() {
        floor + one
    } else {
        floor
    }
}

impl<U: Unit, R: Numeric + Float> Quantity<U, R> {
    pub fn abs(self) -> Self {
        Self::new(self.value().abs())
    }

    /// Sign of the value as a plain number: `1`, `-1` or NaN.
    pub fn signum(self) -> Quantity<Unitless, R> {
        Quantity::new(self.value().signum())
    }

    pub fn max(self, other: Self) -> Self {
        Self::new(self.value().max(other.value()))
    }

    pub fn min(self, other: Self) -> Self {
        Self::new(self.value().min(other.value()))
    }

    /// `self - other` when positive, zero otherwise.
    pub fn positive_diff(self, other: Self) -> Self {
        if self.value() <= other.value() {
            Self::new(R::zero())
        } else {
            Self::new(self.value() - other.value())
        }
    }

    pub fn ceil(self) -> Self {
        Self::new(self.value().ceil())
    }

    pub fn floor(self) -> Self {
        Self::new(self.value().floor())
    }

    pub fn trunc(self) -> Self {
        Self::new(self.value().trunc())
    }

    pub fn round(self) -> Self {
        Self::new(self.value().round())
    }

    /// Round to the nearest integer, ties to even.
    pub fn rint(self) -> Self {
        Self::new(round_ties_even(self.value()))
    }

    /// Same as [`Quantity::rint`]; rounding never raises a floating-point
    /// exception here.
    pub fn nearbyint(self) -> Self {
        self.rint()
    }

    /// `sqrt(self^2 + other^2)` without intermediate overflow.
    pub fn hypot(self, other: Self) -> Self {
        Self::new(self.value().hypot(other.value()))
    }

    /// `self * factor + addend`, where `addend` has the unit of the product.
    ///
    /// ```rust
    /// use mesi::si::{Meters, MetersPerSecond, Seconds};
    ///
    /// let x0 = Meters::new(2.0);
    /// let v = MetersPerSecond::new(3.0);
    /// let x = v.mul_add(Seconds::new(4.0), x0);
    /// assert_eq!(x, Meters::new(14.0));
    /// ```
    pub fn mul_add<V: Unit, W: Unit>(
        self,
        factor: Quantity<V, R>,
        addend: Quantity<W, R>,
    ) -> Quantity<W, R> {
        const {
            assert!(
                same_unit::<MulUnit<U, V>, W>(),
                "Unit mismatch: addend must have the unit of the product"
            )
        };
        Quantity::new(self.value().mul_add(factor.value(), addend.value()))
    }

    pub fn is_nan(&self) -> bool {
        self.value().is_nan()
    }

    pub fn is_finite(&self) -> bool {
        self.value().is_finite()
    }

    dimensionless_fns! {
        exp,
        exp2,
        exp_m1,
        /// Natural logarithm.
        ln,
        log10,
        log2,
        ln_1p,
        sin,
        cos,
        tan,
        asin,
        acos,
        atan,
        sinh,
        cosh,
        tanh,
        asinh,
        acosh,
        atanh,
    }

    libm_fns! {
        /// Error function.
        erf,
        erfc,
        /// Natural logarithm of the absolute value of the gamma function.
        lgamma,
        tgamma,
    }

    /// Four-quadrant arctangent of `self / other`, both dimensionless.
    pub fn atan2<V: Unit>(self, other: Quantity<V, R>) -> Quantity<Unitless, R> {
        dimensionless_guard!(U);
        dimensionless_guard!(V);
        Quantity::new(self.into_base_value().atan2(other.into_base_value()))
    }
}

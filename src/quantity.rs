//! Numbers tagged with a compile-time unit.
//!
//! A [`Quantity<U, R>`] stores a single value of representation `R`; its
//! dimension and scale are the associated constants of `U`. Arithmetic
//! follows the rules of dimensional analysis:
//!
//! - `+`, `-`, comparisons: both operands must have the same dimension and
//!   the same scale, checked at compile time
//! - `*`, `/`: dimensions add or subtract, scale factors multiply or divide
//! - [`Quantity::convert`]: rescale between units of the same dimension
//!
//! # Example
//!
//! ```rust
//! use mesi::si::{Kilometers, Meters, Seconds};
//!
//! let d = Meters::new(3.0) + Meters::new(4.0);
//! assert_eq!(d, Meters::new(7.0));
//!
//! let v = Meters::new(5.0) / Seconds::new(20.0);
//! assert_eq!(v.value(), 0.25);
//! assert_eq!(v.unit_string(), "m s^-1");
//!
//! let m: Meters = Kilometers::new(1.0).convert();
//! assert_eq!(m, Meters::new(1000.0));
//! ```
//!
//! Mixing dimensions or scales in an addition does not compile:
//!
//! ```rust,compile_fail
//! use mesi::si::{Meters, Seconds};
//!
//! let _ = Meters::new(1.0) + Seconds::new(1.0);
//! ```
//!
//! ```rust,compile_fail
//! use mesi::si::{Kilometers, Meters};
//!
//! let _ = Meters::new(1.0) + Kilometers::new(1.0);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use mesi_core::{Dimension, Numeric, Rational, ScaleFactor};

use crate::error::QuantityError;
use crate::unit::{
    same_dimension, same_unit, CbrtUnit, Cubed, DivUnit, Inverse, MulUnit, PowUnit, SqrtUnit,
    Squared, Unit, Unitless,
};

/// A value of representation `R` measured in unit `U`.
///
/// The unit is a zero-sized marker, so a quantity has exactly the size and
/// layout of `R`.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct Quantity<U: Unit, R: Numeric = f64> {
    value: R,
    _unit: PhantomData<U>,
}

impl<U: Unit, R: Numeric> Quantity<U, R> {
    pub const fn new(value: R) -> Self {
        Self {
            value,
            _unit: PhantomData,
        }
    }

    /// The stored number, in units of `U`.
    pub fn value(&self) -> R {
        self.value
    }

    pub fn into_value(self) -> R {
        self.value
    }

    /// The value expressed in SI base units, with the scale of `U` applied.
    pub fn into_base_value(self) -> R {
        U::SCALE.apply(self.value)
    }

    pub fn dimension(&self) -> Dimension {
        U::DIMENSION
    }

    pub fn scale(&self) -> ScaleFactor {
        U::SCALE
    }

    pub fn unit_string(&self) -> String {
        U::unit_string()
    }

    /// Unary plus.
    pub fn pos(self) -> Self {
        self
    }

    /// Rescale into another unit of the same dimension.
    ///
    /// The multiplier `U::SCALE / V::SCALE` is a compile-time constant. When
    /// it is rational with an integral power of ten, the conversion uses only
    /// multiplications and divisions in `R`.
    ///
    /// ```rust
    /// use mesi::si::{Centimeters, Kilometers, Meters};
    ///
    /// let m: Meters<i64> = Kilometers::<i64>::new(3).convert();
    /// assert_eq!(m.value(), 3000);
    /// let cm: Centimeters = Meters::new(1.5).convert();
    /// assert_eq!(cm.value(), 150.0);
    /// ```
    ///
    /// ```rust,compile_fail
    /// use mesi::si::{Meters, Seconds};
    ///
    /// let _: Seconds = Meters::new(1.0).convert();
    /// ```
    pub fn convert<V: Unit>(self) -> Quantity<V, R> {
        const {
            assert!(
                same_dimension::<U, V>(),
                "Dimension mismatch: conversion requires identical dimensions"
            )
        };
        let factor = const { U::SCALE.divide(V::SCALE) };
        if !factor.is_exact() {
            log::trace!(
                "inexact conversion from [{}] to [{}] by {}",
                U::unit_string(),
                V::unit_string(),
                factor
            );
        }
        Quantity::new(factor.apply(self.value))
    }

    /// Reinterpret as another unit type with an identical descriptor.
    ///
    /// `MulUnit<Meter, Second>` and `MulUnit<Second, Meter>` are different
    /// Rust types with the same dimension and scale; this moves a value
    /// between them without touching it.
    pub fn into_unit<V: Unit>(self) -> Quantity<V, R> {
        const {
            assert!(
                same_unit::<U, V>(),
                "Unit mismatch: expected identical dimension and scale"
            )
        };
        Quantity::new(self.value)
    }

    /// Strip the unit of a dimensionless quantity, applying its scale.
    ///
    /// ```rust
    /// use mesi::si::{Kilometers, Meters};
    ///
    /// let ratio = Meters::new(500.0) / Kilometers::new(2.0);
    /// assert_eq!(ratio.into_number(), 0.25);
    /// ```
    pub fn into_number(self) -> R {
        const {
            assert!(
                U::DIMENSION.is_dimensionless(),
                "Dimension mismatch: expected a dimensionless quantity"
            )
        };
        self.into_base_value()
    }

    // ========================================================================
    // Powers
    // ========================================================================

    /// `self^(N/D)`.
    ///
    /// Fails with [`QuantityError::Domain`] for an even root of a negative
    /// value and for a negative exponent of zero. An odd root of a negative
    /// value keeps the sign.
    ///
    /// ```rust
    /// use mesi::si::Meters;
    /// use mesi::unit::{Meter, PowUnit};
    /// use mesi::Quantity;
    ///
    /// let v: Quantity<PowUnit<Meter, 3, 2>> = Meters::new(4.0).pow::<3, 2>()?;
    /// assert_eq!(v.value(), 8.0);
    /// assert!(Meters::new(-4.0).pow::<1, 2>().is_err());
    /// assert_eq!(Meters::new(-8.0).pow::<1, 3>()?.value(), -2.0);
    /// # Ok::<(), mesi::QuantityError>(())
    /// ```
    pub fn pow<const N: i64, const D: i64>(
        self,
    ) -> Result<Quantity<PowUnit<U, N, D>, R>, QuantityError> {
        let exponent = const { Rational::new(N, D) };
        let zero = R::zero();
        let even_root_of_negative = self.value < zero && exponent.denom() % 2 == 0;
        let negative_power_of_zero = self.value == zero && exponent.is_negative();
        if even_root_of_negative || negative_power_of_zero {
            let err = QuantityError::Domain {
                value: self.value.val_to_f64(),
                exponent,
            };
            log::debug!("pow on [{}]: {}", U::unit_string(), err);
            return Err(err);
        }
        Ok(Quantity::new(raise(self.value, exponent)))
    }

    pub fn squared(self) -> Quantity<Squared<U>, R> {
        Quantity::new(self.value * self.value)
    }

    pub fn cubed(self) -> Quantity<Cubed<U>, R> {
        Quantity::new(self.value * self.value * self.value)
    }

    /// `1 / self`.
    pub fn recip(self) -> Quantity<Inverse<U>, R> {
        Quantity::new(R::one() / self.value)
    }

    pub fn sqrt(self) -> Result<Quantity<SqrtUnit<U>, R>, QuantityError> {
        self.pow::<1, 2>()
    }

    /// Cube root; defined for every value.
    pub fn cbrt(self) -> Quantity<CbrtUnit<U>, R> {
        Quantity::new(raise(self.value, Rational::new(1, 3)))
    }
}

/// `value^exponent` for an exponent already checked against the domain.
///
/// Non-negative integer exponents multiply in `R`; anything else goes through
/// `f64` with the sign restored for odd roots of negative values.
fn raise<R: Numeric>(value: R, exponent: Rational) -> R {
    if exponent.is_integer() && !exponent.is_negative() {
        let mut out = R::one();
        for _ in 0..exponent.numer() {
            out = out * value;
        }
        return out;
    }

    let x = value.val_to_f64();
    let magnitude = match (exponent.numer(), exponent.denom()) {
        (1, 2) => x.abs().sqrt(),
        (1, 3) => x.abs().cbrt(),
        _ => x.abs().powf(exponent.to_f64()),
    };
    if x < 0.0 && exponent.numer() % 2 != 0 {
        R::val_from_f64(-magnitude)
    } else {
        R::val_from_f64(magnitude)
    }
}

impl<R: Numeric> Quantity<Unitless, R> {
    /// The plain number held by a unitless quantity.
    pub fn get(self) -> R {
        self.value
    }
}

impl<R: Numeric> From<R> for Quantity<Unitless, R> {
    fn from(value: R) -> Self {
        Self::new(value)
    }
}

impl<U: Unit, R: Numeric> Default for Quantity<U, R> {
    fn default() -> Self {
        Self::new(R::zero())
    }
}

impl<U: Unit, R: Numeric> fmt::Debug for Quantity<U, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("value", &self.value)
            .field("unit", &U::unit_string())
            .finish()
    }
}

/// `"{value} {unit}"`; a plain number has no unit suffix.
impl<U: Unit, R: Numeric + fmt::Display> fmt::Display for Quantity<U, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if U::DIMENSION.is_dimensionless() && U::SCALE.is_unit() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, U::unit_string())
        }
    }
}

// ============================================================================
// Same-unit arithmetic and comparison
// ============================================================================

macro_rules! same_unit_guard {
    ($u:ty, $v:ty) => {
        const {
            assert!(
                same_unit::<$u, $v>(),
                "Unit mismatch: expected identical dimension and scale"
            )
        }
    };
}

impl<U: Unit, V: Unit, R: Numeric> Add<Quantity<V, R>> for Quantity<U, R> {
    type Output = Quantity<U, R>;

    fn add(self, rhs: Quantity<V, R>) -> Self::Output {
        same_unit_guard!(U, V);
        Quantity::new(self.value + rhs.value)
    }
}

impl<U: Unit, V: Unit, R: Numeric> Sub<Quantity<V, R>> for Quantity<U, R> {
    type Output = Quantity<U, R>;

    fn sub(self, rhs: Quantity<V, R>) -> Self::Output {
        same_unit_guard!(U, V);
        Quantity::new(self.value - rhs.value)
    }
}

impl<U: Unit, V: Unit, R: Numeric> AddAssign<Quantity<V, R>> for Quantity<U, R> {
    fn add_assign(&mut self, rhs: Quantity<V, R>) {
        same_unit_guard!(U, V);
        self.value = self.value + rhs.value;
    }
}

impl<U: Unit, V: Unit, R: Numeric> SubAssign<Quantity<V, R>> for Quantity<U, R> {
    fn sub_assign(&mut self, rhs: Quantity<V, R>) {
        same_unit_guard!(U, V);
        self.value = self.value - rhs.value;
    }
}

impl<U: Unit, R: Numeric + Neg<Output = R>> Neg for Quantity<U, R> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.value)
    }
}

impl<U: Unit, V: Unit, R: Numeric> PartialEq<Quantity<V, R>> for Quantity<U, R> {
    fn eq(&self, other: &Quantity<V, R>) -> bool {
        same_unit_guard!(U, V);
        self.value == other.value
    }
}

impl<U: Unit, R: Numeric + Eq> Eq for Quantity<U, R> {}

impl<U: Unit, V: Unit, R: Numeric> PartialOrd<Quantity<V, R>> for Quantity<U, R> {
    fn partial_cmp(&self, other: &Quantity<V, R>) -> Option<Ordering> {
        same_unit_guard!(U, V);
        self.value.partial_cmp(&other.value)
    }
}

impl<U: Unit, R: Numeric + Ord> Ord for Quantity<U, R> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<U: Unit, R: Numeric> Sum for Quantity<U, R> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, q| acc + q)
    }
}

impl<'a, U: Unit, R: Numeric> Sum<&'a Quantity<U, R>> for Quantity<U, R> {
    fn sum<I: Iterator<Item = &'a Quantity<U, R>>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// ============================================================================
// Multiplicative arithmetic
// ============================================================================

impl<U: Unit, V: Unit, R: Numeric> Mul<Quantity<V, R>> for Quantity<U, R> {
    type Output = Quantity<MulUnit<U, V>, R>;

    fn mul(self, rhs: Quantity<V, R>) -> Self::Output {
        Quantity::new(self.value * rhs.value)
    }
}

impl<U: Unit, V: Unit, R: Numeric> Div<Quantity<V, R>> for Quantity<U, R> {
    type Output = Quantity<DivUnit<U, V>, R>;

    fn div(self, rhs: Quantity<V, R>) -> Self::Output {
        Quantity::new(self.value / rhs.value)
    }
}

impl<U: Unit, R: Numeric> MulAssign<R> for Quantity<U, R> {
    fn mul_assign(&mut self, rhs: R) {
        self.value = self.value * rhs;
    }
}

impl<U: Unit, R: Numeric> DivAssign<R> for Quantity<U, R> {
    fn div_assign(&mut self, rhs: R) {
        self.value = self.value / rhs;
    }
}

/// Scalar `*` and `/` on both sides, one set of impls per primitive.
macro_rules! impl_scalar_ops {
    ($($t:ty),* $(,)?) => {
        $(
            impl<U: Unit> Mul<$t> for Quantity<U, $t> {
                type Output = Self;

                fn mul(self, rhs: $t) -> Self::Output {
                    Self::new(self.value * rhs)
                }
            }

            impl<U: Unit> Mul<Quantity<U, $t>> for $t {
                type Output = Quantity<U, $t>;

                fn mul(self, rhs: Quantity<U, $t>) -> Self::Output {
                    Quantity::new(self * rhs.value)
                }
            }

            impl<U: Unit> Div<$t> for Quantity<U, $t> {
                type Output = Self;

                fn div(self, rhs: $t) -> Self::Output {
                    Self::new(self.value / rhs)
                }
            }

            impl<U: Unit> Div<Quantity<U, $t>> for $t {
                type Output = Quantity<Inverse<U>, $t>;

                fn div(self, rhs: Quantity<U, $t>) -> Self::Output {
                    Quantity::new(self / rhs.value)
                }
            }
        )*
    };
}

impl_scalar_ops!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// A quantity serializes as its bare value; the unit is part of the type.
#[cfg(feature = "serde")]
mod serde_impls {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Quantity;
    use crate::unit::Unit;
    use mesi_core::Numeric;

    impl<U: Unit, R: Numeric + Serialize> Serialize for Quantity<U, R> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.value.serialize(serializer)
        }
    }

    impl<'de, U: Unit, R: Numeric + Deserialize<'de>> Deserialize<'de> for Quantity<U, R> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            R::deserialize(deserializer).map(Quantity::new)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::si::*;
    use crate::unit::{Meter, Multiply, Scaled, Second};

    #[test]
    fn addition_keeps_the_unit() {
        let d = Meters::new(3.0) + Meters::new(4.0);
        assert_eq!(d.value(), 7.0);
        assert_eq!(d - Meters::new(7.0), Meters::new(0.0));

        let mut acc = Meters::new(1.0);
        acc += Meters::new(2.0);
        acc -= Meters::new(0.5);
        assert_eq!(acc, Meters::new(2.5));
    }

    #[test]
    fn commuted_products_are_interchangeable() {
        let ms = Meters::new(2.0) * Seconds::new(3.0);
        let sm = Seconds::new(3.0) * Meters::new(2.0);
        assert_eq!(ms, sm);
        assert_eq!((ms + sm).value(), 12.0);
        let retagged = sm.into_unit::<MulUnit<Meter, Second>>();
        assert_eq!(retagged.value(), 6.0);
    }

    #[test]
    fn scalar_operations() {
        let d = Meters::<f64>::new(6.0);
        assert_eq!(d * 2.0, 2.0 * d);
        assert_eq!((d / 3.0).value(), 2.0);

        let per: Quantity<Inverse<Meter>> = 12.0 / d;
        assert_eq!(per.value(), 2.0);
        assert_eq!(per.unit_string(), "m^-1");

        let mut q = Meters::<i32>::new(5);
        q *= 3;
        q /= 2;
        assert_eq!(q.value(), 7);
    }

    #[test]
    fn negation_and_unary_plus() {
        let d = Meters::new(2.5);
        assert_eq!(-d, Meters::new(-2.5));
        assert_eq!(d.pos(), d);
        assert_eq!(-(-d), d);
    }

    #[test]
    fn division_by_itself_is_one() {
        let q = Kilometers::new(4.0);
        let one: Quantity<Unitless> = (q / q).into_unit();
        assert_eq!(one, Quantity::<Unitless>::from(1.0));
        assert_eq!(one.get(), 1.0);
    }

    #[test]
    fn comparisons() {
        assert!(Seconds::new(1.0) < Seconds::new(2.0));
        assert!(Seconds::new(2.0) >= Seconds::new(2.0));
        assert!(Seconds::new(2.0) != Seconds::new(3.0));
        assert_eq!(Meters::<i64>::new(3).cmp(&Meters::new(1)), Ordering::Greater);
        assert_eq!(Seconds::new(f64::NAN).partial_cmp(&Seconds::new(1.0)), None);
    }

    #[test]
    fn conversion_is_exact_for_integral_scales() {
        let m: Meters<i64> = Kilometers::<i64>::new(7).convert();
        assert_eq!(m.value(), 7000);
        let km: Kilometers<i64> = Meters::<i64>::new(2500).convert();
        assert_eq!(km.value(), 2);
        let back: Kilometers = Meters::new(1500.0).convert();
        assert_eq!(back.value(), 1.5);
        let minutes: Minutes = Hours::new(2.0).convert();
        assert_eq!(minutes.value(), 120.0);
    }

    #[test]
    fn integer_conversion_divides_by_the_reduced_factor() {
        type HalfMeter = Scaled<Meter, Multiply<1, 2>>;
        let m: Quantity<Meter, i32> = Quantity::<HalfMeter, i32>::new(500_000_000).convert();
        assert_eq!(m.value(), 250_000_000);
        let halves: Quantity<HalfMeter, i32> = Quantity::<Meter, i32>::new(3).convert();
        assert_eq!(halves.value(), 6);

        type Tiny = Scaled<Meter, Multiply<1, { 1 << 28 }>>;
        let m: Quantity<Meter, i64> = Quantity::<Tiny, i64>::new(3 << 28).convert();
        assert_eq!(m.value(), 3);
    }

    #[test]
    fn base_value_applies_the_scale() {
        assert_eq!(Kilometers::new(2.0).into_base_value(), 2000.0);
        assert_eq!(Grams::new(500.0).into_base_value(), 0.5);
        assert_eq!(Meters::new(3.0).into_base_value(), 3.0);
    }

    #[test]
    fn powers_and_roots() {
        let area = Meters::new(3.0).squared();
        assert_eq!(area.value(), 9.0);
        assert_eq!(area.dimension(), Dimension::new(2, 0, 0, 0, 0, 0, 0));

        let side = area.sqrt().map(|q| q.value());
        assert_eq!(side, Ok(3.0));
        assert_eq!(Meters::new(2.0).cubed().value(), 8.0);
        assert_eq!(Meters::new(-27.0).cbrt().value(), -3.0);
        assert_eq!(Seconds::new(4.0).recip().value(), 0.25);

        let inv = Seconds::new(4.0).pow::<-1, 1>().map(|q| q.value());
        assert_eq!(inv, Ok(0.25));
        assert_eq!(Seconds::new(5.0).pow::<0, 1>().map(|q| q.value()), Ok(1.0));
    }

    #[test]
    fn integer_powers_stay_exact() {
        let q = Meters::<i64>::new(-3).pow::<3, 1>().map(|q| q.value());
        assert_eq!(q, Ok(-27));
    }

    #[test]
    fn power_domain_errors() {
        assert_eq!(
            Meters::new(-4.0).sqrt().map(|q| q.value()),
            Err(QuantityError::Domain {
                value: -4.0,
                exponent: Rational::new(1, 2)
            })
        );
        assert!(Meters::new(0.0).pow::<-2, 1>().is_err());
        assert!(Meters::new(-16.0).pow::<3, 4>().is_err());
        let v = Meters::<f64>::new(-8.0).pow::<2, 3>().map(|q| q.value());
        assert!(v.is_ok_and(|v| (v - 4.0).abs() < 1e-12));
    }

    #[test]
    fn scaled_powers_carry_the_scale() {
        let a = Kilometers::new(2.0).squared();
        assert_eq!(a.scale(), ScaleFactor::ten_to_the(Rational::integer(6)));
        assert_eq!(a.into_base_value(), 4.0e6);
    }

    #[test]
    fn sums() {
        let laps = [Meters::new(400.0), Meters::new(400.0), Meters::new(200.0)];
        let total: Meters = laps.iter().sum();
        assert_eq!(total, Meters::new(1000.0));
        let owned: Meters = laps.into_iter().sum();
        assert_eq!(owned, total);
        assert_eq!(Meters::<f64>::default().value(), 0.0);
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(Meters::new(2.5).to_string(), "2.5 m");
        assert_eq!(Kilometers::new(3.0).to_string(), "3 m * 10^3");
        assert_eq!(Quantity::<Unitless>::from(4.0).to_string(), "4");
        assert_eq!(
            format!("{:?}", Seconds::new(1.0)),
            "Quantity { value: 1.0, unit: \"s\" }"
        );
    }

    #[test]
    fn quantity_is_as_large_as_its_value() {
        assert_eq!(std::mem::size_of::<Meters<f64>>(), std::mem::size_of::<f64>());
        assert_eq!(std::mem::size_of::<Meters<u8>>(), 1);
    }
}

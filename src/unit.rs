//! Type-level units: a dimension and a scale factor carried as associated
//! constants.
//!
//! A [`Unit`] is a zero-sized marker. Its [`Dimension`] and [`ScaleFactor`]
//! are `const` items, so the descriptor of a product, quotient, or power is
//! computed by the compiler and two units with the same descriptor compare
//! equal without any runtime state.
//!
//! # Features
//!
//! - Base markers for the seven SI units plus [`Unitless`]
//! - Type constructors: [`MulUnit`], [`DivUnit`], [`PowUnit`], [`Scaled`]
//! - Scale markers: [`TenToThe`], [`Multiply`], [`Radical`]
//!
//! # Example
//!
//! ```rust
//! use mesi::unit::*;
//!
//! type Velocity = DivUnit<Meter, Second>;
//! type Kilometer = Scaled<Meter, TenToThe<3>>;
//!
//! assert!(MulUnit::<Meter, Second>::same_as::<MulUnit<Second, Meter>>());
//! assert!(!Kilometer::same_as::<Meter>());
//! assert!(Kilometer::commensurable_with::<Meter>());
//! assert_eq!(Velocity::unit_string(), "m s^-1");
//! ```

use std::fmt::Debug;
use std::marker::PhantomData;

use mesi_core::{Dimension, Rational, ScaleFactor};

use crate::format;

/// A unit of measure known at compile time.
///
/// Implement this for a zero-sized marker to define a new unit. Derived
/// units are usually better expressed with the type constructors in this
/// module.
///
/// ```rust
/// use mesi::unit::Unit;
/// use mesi::{Dimension, Rational, ScaleFactor};
///
/// /// The inch: 0.0254 m.
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// struct Inch;
///
/// impl Unit for Inch {
///     const DIMENSION: Dimension = Dimension::LENGTH;
///     const SCALE: ScaleFactor = ScaleFactor::from_ratio(254, 10_000);
/// }
///
/// assert_eq!(Inch::unit_string(), "m * 254 * 10^-4");
/// ```
pub trait Unit: 'static + Copy + Send + Sync + Eq + Debug {
    /// Exponents of the SI base units.
    const DIMENSION: Dimension;
    /// Multiplier from a stored number to the value in SI base units.
    const SCALE: ScaleFactor;

    fn dimension() -> Dimension {
        Self::DIMENSION
    }

    fn scale() -> ScaleFactor {
        Self::SCALE
    }

    /// Same dimension and same scale: values may be added and compared.
    fn same_as<Other: Unit>() -> bool {
        same_unit::<Self, Other>()
    }

    /// Same dimension: values may be converted into each other.
    fn commensurable_with<Other: Unit>() -> bool {
        same_dimension::<Self, Other>()
    }

    /// Rendered descriptor, e.g. `m^2 s^-1 * 10^3`.
    fn unit_string() -> String {
        format::unit_string(&Self::DIMENSION, &Self::SCALE)
    }
}

/// `const` form of [`Unit::same_as`], usable in assertions.
pub const fn same_unit<A: Unit, B: Unit>() -> bool {
    A::DIMENSION.equals(&B::DIMENSION) && A::SCALE.equals(&B::SCALE)
}

/// `const` form of [`Unit::commensurable_with`].
pub const fn same_dimension<A: Unit, B: Unit>() -> bool {
    A::DIMENSION.equals(&B::DIMENSION)
}

/// Compile-time assertion that two units have identical descriptors.
///
/// ```rust
/// use mesi::unit::{DivUnit, MulUnit, Meter, Second, Unitless};
///
/// mesi::assert_same_unit!(MulUnit<Meter, Second>, MulUnit<Second, Meter>);
/// mesi::assert_same_unit!(DivUnit<Meter, Meter>, Unitless);
/// ```
///
/// ```rust,compile_fail
/// use mesi::unit::{Meter, Second};
///
/// mesi::assert_same_unit!(Meter, Second);
/// ```
#[macro_export]
macro_rules! assert_same_unit {
    ($a:ty, $b:ty) => {
        const _: () = assert!(
            $crate::unit::same_unit::<$a, $b>(),
            "Unit mismatch: expected identical dimension and scale"
        );
    };
}

// ============================================================================
// Base Units
// ============================================================================

macro_rules! base_unit {
    ($($(#[$meta:meta])* $name:ident => $dim:expr;)*) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
            pub struct $name;

            impl Unit for $name {
                const DIMENSION: Dimension = $dim;
                const SCALE: ScaleFactor = ScaleFactor::UNIT;
            }
        )*
    };
}

base_unit! {
    /// Pure number: no dimension, no scale.
    Unitless => Dimension::NONE;
    /// Base unit: length (m)
    Meter => Dimension::LENGTH;
    /// Base unit: time (s)
    Second => Dimension::TIME;
    /// Base unit: mass (kg)
    Kilogram => Dimension::MASS;
    /// Base unit: electric current (A)
    Ampere => Dimension::CURRENT;
    /// Base unit: thermodynamic temperature (K)
    Kelvin => Dimension::TEMPERATURE;
    /// Base unit: amount of substance (mol)
    Mole => Dimension::AMOUNT;
    /// Base unit: luminous intensity (cd)
    Candela => Dimension::LUMINOUS_INTENSITY;
}

// ============================================================================
// Type Constructors
// ============================================================================

/// Product of two units: dimensions add, scales multiply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MulUnit<A: Unit, B: Unit> {
    _a: PhantomData<A>,
    _b: PhantomData<B>,
}

impl<A: Unit, B: Unit> Unit for MulUnit<A, B> {
    const DIMENSION: Dimension = A::DIMENSION.add(B::DIMENSION);
    const SCALE: ScaleFactor = A::SCALE.multiply(B::SCALE);
}

/// Quotient of two units: dimensions subtract, scales divide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DivUnit<A: Unit, B: Unit> {
    _a: PhantomData<A>,
    _b: PhantomData<B>,
}

impl<A: Unit, B: Unit> Unit for DivUnit<A, B> {
    const DIMENSION: Dimension = A::DIMENSION.sub(B::DIMENSION);
    const SCALE: ScaleFactor = A::SCALE.divide(B::SCALE);
}

/// `A^(NUM/DEN)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PowUnit<A: Unit, const NUM: i64, const DEN: i64> {
    _a: PhantomData<A>,
}

impl<A: Unit, const NUM: i64, const DEN: i64> Unit for PowUnit<A, NUM, DEN> {
    const DIMENSION: Dimension = A::DIMENSION.scale(Rational::new(NUM, DEN));
    const SCALE: ScaleFactor = A::SCALE.raise(Rational::new(NUM, DEN));
}

/// `A` with its scale multiplied by `S`; same dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scaled<A: Unit, S: ScaleMarker> {
    _a: PhantomData<A>,
    _s: PhantomData<S>,
}

impl<A: Unit, S: ScaleMarker> Unit for Scaled<A, S> {
    const DIMENSION: Dimension = A::DIMENSION;
    const SCALE: ScaleFactor = A::SCALE.multiply(S::FACTOR);
}

/// `1 / A`.
pub type Inverse<A> = DivUnit<Unitless, A>;
/// `A^2`.
pub type Squared<A> = PowUnit<A, 2, 1>;
/// `A^3`.
pub type Cubed<A> = PowUnit<A, 3, 1>;
/// `A^(1/2)`.
pub type SqrtUnit<A> = PowUnit<A, 1, 2>;
/// `A^(1/3)`.
pub type CbrtUnit<A> = PowUnit<A, 1, 3>;

// ============================================================================
// Scale Markers
// ============================================================================

/// A compile-time scale factor applied by [`Scaled`].
pub trait ScaleMarker: 'static + Copy + Send + Sync + Eq + Debug {
    const FACTOR: ScaleFactor;
}

/// `10^(N/D)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct TenToThe<const N: i64, const D: i64 = 1>;

impl<const N: i64, const D: i64> ScaleMarker for TenToThe<N, D> {
    const FACTOR: ScaleFactor = ScaleFactor::ten_to_the(Rational::new(N, D));
}

/// The rational multiplier `N/D`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Multiply<const N: i64, const D: i64 = 1>;

impl<const N: i64, const D: i64> ScaleMarker for Multiply<N, D> {
    const FACTOR: ScaleFactor = ScaleFactor::from_ratio(N, D);
}

/// `(N/D)^(1/ROOT)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Radical<const N: i64, const D: i64, const ROOT: u32>;

impl<const N: i64, const D: i64, const ROOT: u32> ScaleMarker for Radical<N, D, ROOT> {
    const FACTOR: ScaleFactor = ScaleFactor::radical(N, D, ROOT);
}

//! SI units, prefixes and quantity aliases.
//!
//! Every named unit here is a type alias over the constructors in
//! [`crate::unit`], so `Newton` and `MulUnit<Kilogram, Acceleration>` are
//! interchangeable: they are the same type.
//!
//! ```rust
//! use mesi::si::*;
//!
//! let a: MetersPerSecondSquared = MetersPerSecond::new(6.0) / Seconds::new(3.0);
//! let f: Newtons = Kilograms::new(2.0) * a;
//! let w: Joules = f * Meters::new(5.0);
//! assert_eq!(w.value(), 20.0);
//! assert_eq!(Joules::new(1.0).unit_string(), "m^2 s^-2 kg");
//!
//! let d = 3.0_f64.meters() + 2.0_f64.meters();
//! assert_eq!(d, Meters::new(5.0));
//! ```

use mesi_core::Numeric;

use crate::quantity::Quantity;
pub use crate::unit::{Ampere, Candela, Kelvin, Kilogram, Meter, Mole, Second, Unitless};
use crate::unit::{Cubed, DivUnit, Inverse, MulUnit, Multiply, Scaled, Squared, TenToThe};

// ============================================================================
// Prefixes
// ============================================================================

pub type Deca = TenToThe<1>;
pub type Hecto = TenToThe<2>;
pub type Kilo = TenToThe<3>;
pub type Mega = TenToThe<6>;
pub type Giga = TenToThe<9>;
pub type Tera = TenToThe<12>;
pub type Peta = TenToThe<15>;
pub type Exa = TenToThe<18>;
pub type Zetta = TenToThe<21>;
pub type Yotta = TenToThe<24>;

pub type Deci = TenToThe<-1>;
pub type Centi = TenToThe<-2>;
pub type Milli = TenToThe<-3>;
pub type Micro = TenToThe<-6>;
pub type Nano = TenToThe<-9>;
pub type Pico = TenToThe<-12>;
pub type Femto = TenToThe<-15>;
pub type Atto = TenToThe<-18>;
pub type Zepto = TenToThe<-21>;
pub type Yocto = TenToThe<-24>;

// ============================================================================
// Scaled units
// ============================================================================

pub type Kilometer = Scaled<Meter, Kilo>;
pub type Centimeter = Scaled<Meter, Centi>;
pub type Millimeter = Scaled<Meter, Milli>;
/// The kilogram is the base unit of mass, so the gram is scaled down from it.
pub type Gram = Scaled<Kilogram, Milli>;
pub type Minute = Scaled<Second, Multiply<60>>;
pub type Hour = Scaled<Second, Multiply<3600>>;

// ============================================================================
// Derived units
// ============================================================================

pub type Velocity = DivUnit<Meter, Second>;
pub type Acceleration = DivUnit<Velocity, Second>;

pub type Hertz = Inverse<Second>;
pub type Newton = MulUnit<Kilogram, Acceleration>;
pub type Pascal = DivUnit<Newton, Squared<Meter>>;
pub type Joule = MulUnit<Newton, Meter>;
pub type Watt = DivUnit<Joule, Second>;
pub type Coulomb = MulUnit<Ampere, Second>;
pub type Volt = DivUnit<Watt, Ampere>;
pub type Farad = DivUnit<Coulomb, Volt>;
pub type Ohm = DivUnit<Volt, Ampere>;
pub type Siemens = Inverse<Ohm>;
pub type Weber = MulUnit<Volt, Second>;
pub type Tesla = DivUnit<Weber, Squared<Meter>>;
pub type Henry = DivUnit<Weber, Ampere>;

// ============================================================================
// Quantity aliases
// ============================================================================

pub type Scalar<R = f64> = Quantity<Unitless, R>;
pub type Meters<R = f64> = Quantity<Meter, R>;
pub type Seconds<R = f64> = Quantity<Second, R>;
pub type Kilograms<R = f64> = Quantity<Kilogram, R>;
pub type Kilos<R = f64> = Kilograms<R>;
pub type Amperes<R = f64> = Quantity<Ampere, R>;
pub type Kelvins<R = f64> = Quantity<Kelvin, R>;
pub type Moles<R = f64> = Quantity<Mole, R>;
pub type Candelas<R = f64> = Quantity<Candela, R>;

pub type Kilometers<R = f64> = Quantity<Kilometer, R>;
pub type Centimeters<R = f64> = Quantity<Centimeter, R>;
pub type Millimeters<R = f64> = Quantity<Millimeter, R>;
pub type Grams<R = f64> = Quantity<Gram, R>;
pub type Minutes<R = f64> = Quantity<Minute, R>;
pub type Hours<R = f64> = Quantity<Hour, R>;

pub type SquareMeters<R = f64> = Quantity<Squared<Meter>, R>;
pub type CubicMeters<R = f64> = Quantity<Cubed<Meter>, R>;
pub type MetersPerSecond<R = f64> = Quantity<Velocity, R>;
pub type MetersPerSecondSquared<R = f64> = Quantity<Acceleration, R>;
pub type Hertzes<R = f64> = Quantity<Hertz, R>;
pub type Newtons<R = f64> = Quantity<Newton, R>;
pub type Pascals<R = f64> = Quantity<Pascal, R>;
pub type Joules<R = f64> = Quantity<Joule, R>;
pub type Watts<R = f64> = Quantity<Watt, R>;
pub type Coulombs<R = f64> = Quantity<Coulomb, R>;
pub type Volts<R = f64> = Quantity<Volt, R>;
pub type Ohms<R = f64> = Quantity<Ohm, R>;

// ============================================================================
// Literals
// ============================================================================

/// Attach a base unit to a bare number: `2.5_f64.meters()`.
pub trait Literal: Numeric {
    fn meters(self) -> Meters<Self> {
        Quantity::new(self)
    }

    fn seconds(self) -> Seconds<Self> {
        Quantity::new(self)
    }

    fn kilograms(self) -> Kilograms<Self> {
        Quantity::new(self)
    }

    fn kilos(self) -> Kilos<Self> {
        Quantity::new(self)
    }

    fn scalar(self) -> Scalar<Self> {
        Quantity::new(self)
    }
}

impl<R: Numeric> Literal for R {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::{same_unit, Unit};
    use mesi_core::dimension::si;
    use mesi_core::{Rational, ScaleFactor};

    #[test]
    fn derived_units_have_si_dimensions() {
        assert_eq!(Hertz::DIMENSION, si::FREQUENCY);
        assert_eq!(Newton::DIMENSION, si::FORCE);
        assert_eq!(Pascal::DIMENSION, si::PRESSURE);
        assert_eq!(Joule::DIMENSION, si::ENERGY);
        assert_eq!(Watt::DIMENSION, si::POWER);
        assert_eq!(Coulomb::DIMENSION, si::CHARGE);
        assert_eq!(Volt::DIMENSION, si::VOLTAGE);
        assert_eq!(Ohm::DIMENSION, si::RESISTANCE);
        assert_eq!(Farad::DIMENSION, si::CAPACITANCE);
        assert!(Siemens::DIMENSION.equals(&si::RESISTANCE.neg()));
        assert!(same_unit::<Tesla, DivUnit<Weber, MulUnit<Meter, Meter>>>());
        assert!(same_unit::<Henry, MulUnit<Ohm, Second>>());
        assert!(Newton::SCALE.is_unit() && Henry::SCALE.is_unit());
    }

    #[test]
    fn prefixes_are_powers_of_ten() {
        assert_eq!(
            Scaled::<Meter, Yotta>::SCALE,
            ScaleFactor::ten_to_the(Rational::integer(24))
        );
        assert_eq!(
            Scaled::<Meter, Yocto>::SCALE,
            ScaleFactor::ten_to_the(Rational::integer(-24))
        );
        assert!(same_unit::<Scaled<Meter, Hecto>, Scaled<Scaled<Meter, Deca>, Deca>>());
        assert!(same_unit::<Scaled<Second, Micro>, Scaled<Scaled<Second, Milli>, Milli>>());
    }

    #[test]
    fn scaled_unit_strings() {
        assert_eq!(Gram::unit_string(), "kg * 10^-3");
        assert_eq!(Minute::unit_string(), "s * 6 * 10^1");
        assert_eq!(Hour::unit_string(), "s * 36 * 10^2");
        assert_eq!(Millimeter::unit_string(), "m * 10^-3");
    }

    #[test]
    fn kilos_are_kilograms() {
        let a: Kilos = 2.0_f64.kilos();
        let b: Kilograms = 3.0_f64.kilograms();
        assert_eq!((a + b).value(), 5.0);
    }

    #[test]
    fn literals_keep_the_representation() {
        let d = 7_i32.meters();
        assert_eq!(d.value(), 7);
        let t = 0.5_f32.seconds();
        assert_eq!(t.value(), 0.5);
        assert_eq!(4_u8.scalar().get(), 4);
    }

    #[test]
    fn kinetic_energy() {
        let m = 4.0_f64.kilograms();
        let v = MetersPerSecond::new(3.0);
        let e: Joules = (0.5 * m * v.squared()).into_unit();
        assert_eq!(e.value(), 18.0);
    }
}

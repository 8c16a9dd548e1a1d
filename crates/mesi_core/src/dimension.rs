//! Physical dimensions as vectors of rational exponents over the SI base units.
//!
//! A [`Dimension`] records the exponent of each of the seven SI base units in
//! the fixed order m, s, kg, A, K, mol, cd. Exponents are [`Rational`], so
//! `sqrt(m)` is `m^(1/2)` rather than an error.
//!
//! Every operation is a `const fn`: unit markers compute their dimension as
//! an associated constant, and combining two quantities combines their
//! dimensions while the program is compiled.
//!
//! # Example
//!
//! ```rust
//! use mesi_core::dimension::{si, Dimension};
//!
//! const VELOCITY: Dimension = si::LENGTH.sub(si::TIME);
//! assert_eq!(VELOCITY, si::VELOCITY);
//! assert_eq!(VELOCITY.to_string(), "m s^-1");
//! ```

use std::fmt;

use crate::rational::Rational;

/// The seven SI base units in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseUnit {
    Meter,
    Second,
    Kilogram,
    Ampere,
    Kelvin,
    Mole,
    Candela,
}

impl BaseUnit {
    pub const ALL: [BaseUnit; 7] = [
        BaseUnit::Meter,
        BaseUnit::Second,
        BaseUnit::Kilogram,
        BaseUnit::Ampere,
        BaseUnit::Kelvin,
        BaseUnit::Mole,
        BaseUnit::Candela,
    ];

    pub const fn symbol(self) -> &'static str {
        match self {
            BaseUnit::Meter => "m",
            BaseUnit::Second => "s",
            BaseUnit::Kilogram => "kg",
            BaseUnit::Ampere => "A",
            BaseUnit::Kelvin => "K",
            BaseUnit::Mole => "mol",
            BaseUnit::Candela => "cd",
        }
    }
}

/// Exponents of the SI base units.
///
/// Two dimensions are equal iff all seven exponents are equal. Because every
/// exponent is kept reduced, the derived `PartialEq` is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimension {
    meter: Rational,
    second: Rational,
    kilogram: Rational,
    ampere: Rational,
    kelvin: Rational,
    mole: Rational,
    candela: Rational,
}

impl Dimension {
    /// All exponents zero.
    pub const NONE: Self = Self::from_exponents([Rational::ZERO; 7]);

    pub const LENGTH: Self = Self::base(BaseUnit::Meter);
    pub const TIME: Self = Self::base(BaseUnit::Second);
    pub const MASS: Self = Self::base(BaseUnit::Kilogram);
    pub const CURRENT: Self = Self::base(BaseUnit::Ampere);
    pub const TEMPERATURE: Self = Self::base(BaseUnit::Kelvin);
    pub const AMOUNT: Self = Self::base(BaseUnit::Mole);
    pub const LUMINOUS_INTENSITY: Self = Self::base(BaseUnit::Candela);

    /// Build from exponents in canonical order (m, s, kg, A, K, mol, cd).
    pub const fn from_exponents(exps: [Rational; 7]) -> Self {
        Self {
            meter: exps[0],
            second: exps[1],
            kilogram: exps[2],
            ampere: exps[3],
            kelvin: exps[4],
            mole: exps[5],
            candela: exps[6],
        }
    }

    /// Integer exponents in canonical order.
    pub const fn new(m: i64, s: i64, kg: i64, a: i64, k: i64, mol: i64, cd: i64) -> Self {
        Self::from_exponents([
            Rational::integer(m),
            Rational::integer(s),
            Rational::integer(kg),
            Rational::integer(a),
            Rational::integer(k),
            Rational::integer(mol),
            Rational::integer(cd),
        ])
    }

    /// The dimension of a single base unit raised to the first power.
    pub const fn base(unit: BaseUnit) -> Self {
        let mut exps = [Rational::ZERO; 7];
        exps[unit as usize] = Rational::ONE;
        Self::from_exponents(exps)
    }

    pub const fn exponent(&self, unit: BaseUnit) -> Rational {
        match unit {
            BaseUnit::Meter => self.meter,
            BaseUnit::Second => self.second,
            BaseUnit::Kilogram => self.kilogram,
            BaseUnit::Ampere => self.ampere,
            BaseUnit::Kelvin => self.kelvin,
            BaseUnit::Mole => self.mole,
            BaseUnit::Candela => self.candela,
        }
    }

    pub const fn to_array(&self) -> [Rational; 7] {
        [
            self.meter,
            self.second,
            self.kilogram,
            self.ampere,
            self.kelvin,
            self.mole,
            self.candela,
        ]
    }

    /// `(unit, exponent)` pairs in canonical order, zero exponents included.
    pub fn exponents(&self) -> [(BaseUnit, Rational); 7] {
        let exps = self.to_array();
        BaseUnit::ALL.map(|unit| (unit, exps[unit as usize]))
    }

    /// Component-wise sum; the dimension of a product.
    pub const fn add(self, rhs: Self) -> Self {
        let (a, b) = (self.to_array(), rhs.to_array());
        let mut out = [Rational::ZERO; 7];
        let mut i = 0;
        while i < 7 {
            out[i] = a[i].add(b[i]);
            i += 1;
        }
        Self::from_exponents(out)
    }

    /// Component-wise difference; the dimension of a quotient.
    pub const fn sub(self, rhs: Self) -> Self {
        self.add(rhs.neg())
    }

    /// Component-wise negation; the dimension of a reciprocal.
    pub const fn neg(self) -> Self {
        self.scale(Rational::integer(-1))
    }

    /// Every exponent multiplied by `k`; the dimension of a `k`-th power.
    pub const fn scale(self, k: Rational) -> Self {
        let a = self.to_array();
        let mut out = [Rational::ZERO; 7];
        let mut i = 0;
        while i < 7 {
            out[i] = a[i].mul(k);
            i += 1;
        }
        Self::from_exponents(out)
    }

    pub const fn pow_ratio(self, num: i64, den: i64) -> Self {
        self.scale(Rational::new(num, den))
    }

    pub const fn powi(self, exp: i64) -> Self {
        self.scale(Rational::integer(exp))
    }

    pub const fn sqrt(self) -> Self {
        self.pow_ratio(1, 2)
    }

    /// `const` equality, for compile-time unit checks.
    pub const fn equals(&self, rhs: &Self) -> bool {
        let (a, b) = (self.to_array(), rhs.to_array());
        let mut i = 0;
        while i < 7 {
            if !a[i].equals(b[i]) {
                return false;
            }
            i += 1;
        }
        true
    }

    pub const fn is_dimensionless(&self) -> bool {
        self.equals(&Self::NONE)
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::NONE
    }
}

impl std::ops::Mul for Dimension {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.add(rhs)
    }
}

impl std::ops::Div for Dimension {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.sub(rhs)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "1");
        }

        let parts: Vec<String> = self
            .exponents()
            .into_iter()
            .filter_map(|(unit, exp)| format_exponent(unit.symbol(), exp))
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}

/// `name`, `name^n` or `name^(n/d)`; `None` for a zero exponent.
pub fn format_exponent(name: &str, exp: Rational) -> Option<String> {
    if exp.is_zero() {
        None
    } else if exp.equals(Rational::ONE) {
        Some(name.to_string())
    } else if exp.is_integer() {
        Some(format!("{name}^{}", exp.numer()))
    } else {
        Some(format!("{name}^({exp})"))
    }
}

/// Frequently used dimensions.
pub mod si {
    use super::Dimension;

    pub const DIMENSIONLESS: Dimension = Dimension::NONE;

    pub const LENGTH: Dimension = Dimension::LENGTH;
    pub const TIME: Dimension = Dimension::TIME;
    pub const MASS: Dimension = Dimension::MASS;
    pub const CURRENT: Dimension = Dimension::CURRENT;
    pub const TEMPERATURE: Dimension = Dimension::TEMPERATURE;
    pub const AMOUNT: Dimension = Dimension::AMOUNT;
    pub const LUMINOUS_INTENSITY: Dimension = Dimension::LUMINOUS_INTENSITY;

    pub const AREA: Dimension = LENGTH.powi(2);
    pub const VOLUME: Dimension = AREA.add(LENGTH);
    pub const FREQUENCY: Dimension = TIME.neg();

    pub const VELOCITY: Dimension = LENGTH.sub(TIME);
    pub const ACCELERATION: Dimension = VELOCITY.sub(TIME);
    pub const FORCE: Dimension = MASS.add(ACCELERATION); // N = kg·m/s^2
    pub const PRESSURE: Dimension = FORCE.sub(AREA);
    pub const ENERGY: Dimension = FORCE.add(LENGTH);
    pub const POWER: Dimension = ENERGY.sub(TIME);

    pub const CHARGE: Dimension = CURRENT.add(TIME);
    pub const VOLTAGE: Dimension = POWER.sub(CURRENT);
    pub const RESISTANCE: Dimension = VOLTAGE.sub(CURRENT);
    pub const CAPACITANCE: Dimension = CHARGE.sub(VOLTAGE);
}

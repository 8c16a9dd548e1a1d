//! Exact rational numbers usable in `const` contexts.
//!
//! Dimension exponents and scale powers are fractions (`m^(1/2)`, `10^(3/2)`),
//! and both are evaluated while the compiler resolves a unit's associated
//! constants. `Rational` therefore exposes its whole arithmetic as `const fn`;
//! the operator traits are thin wrappers on top.

use std::cmp::Ordering;
use std::fmt;

use crate::error::ScaleError;

/// A reduced fraction with a strictly positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    num: i64,
    den: i64,
}

impl Rational {
    pub const ZERO: Self = Self { num: 0, den: 1 };
    pub const ONE: Self = Self { num: 1, den: 1 };

    /// Build `num/den` reduced to lowest terms.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero or if the normalized value does not fit in `i64`
    /// (only possible for `i64::MIN` operands).
    pub const fn new(num: i64, den: i64) -> Self {
        assert!(den != 0, "rational denominator must be non-zero");
        Self::reduce(num as i128, den as i128)
    }

    /// [`Rational::new`] reporting a zero denominator or an unrepresentable
    /// result instead of panicking.
    pub const fn try_new(num: i64, den: i64) -> Result<Self, ScaleError> {
        if den == 0 {
            return Err(ScaleError::ZeroDenominator);
        }
        Self::try_reduce(num as i128, den as i128)
    }

    pub const fn integer(value: i64) -> Self {
        Self { num: value, den: 1 }
    }

    pub const fn numer(self) -> i64 {
        self.num
    }

    pub const fn denom(self) -> i64 {
        self.den
    }

    pub const fn is_zero(self) -> bool {
        self.num == 0
    }

    pub const fn is_integer(self) -> bool {
        self.den == 1
    }

    pub const fn is_negative(self) -> bool {
        self.num < 0
    }

    /// `const` equality; `PartialEq::eq` cannot be called in const contexts.
    pub const fn equals(self, rhs: Self) -> bool {
        self.num == rhs.num && self.den == rhs.den
    }

    pub const fn add(self, rhs: Self) -> Self {
        if self.num == 0 {
            return rhs;
        }
        if rhs.num == 0 {
            return self;
        }
        let num = (self.num as i128) * (rhs.den as i128) + (rhs.num as i128) * (self.den as i128);
        let den = (self.den as i128) * (rhs.den as i128);
        Self::reduce(num, den)
    }

    pub const fn sub(self, rhs: Self) -> Self {
        self.add(rhs.neg())
    }

    pub const fn mul(self, rhs: Self) -> Self {
        if self.num == 0 || rhs.num == 0 {
            return Self::ZERO;
        }
        let num = (self.num as i128) * (rhs.num as i128);
        let den = (self.den as i128) * (rhs.den as i128);
        Self::reduce(num, den)
    }

    pub const fn checked_add(self, rhs: Self) -> Result<Self, ScaleError> {
        let num = (self.num as i128) * (rhs.den as i128) + (rhs.num as i128) * (self.den as i128);
        let den = (self.den as i128) * (rhs.den as i128);
        Self::try_reduce(num, den)
    }

    pub const fn checked_sub(self, rhs: Self) -> Result<Self, ScaleError> {
        let num = (self.num as i128) * (rhs.den as i128) - (rhs.num as i128) * (self.den as i128);
        let den = (self.den as i128) * (rhs.den as i128);
        Self::try_reduce(num, den)
    }

    pub const fn checked_mul(self, rhs: Self) -> Result<Self, ScaleError> {
        let num = (self.num as i128) * (rhs.num as i128);
        let den = (self.den as i128) * (rhs.den as i128);
        Self::try_reduce(num, den)
    }

    /// Fails only for `i64::MIN` numerators.
    pub const fn checked_neg(self) -> Result<Self, ScaleError> {
        Self::try_reduce(-(self.num as i128), self.den as i128)
    }

    pub const fn div(self, rhs: Self) -> Self {
        self.mul(rhs.recip())
    }

    pub const fn neg(self) -> Self {
        Self {
            num: match narrow(-(self.num as i128)) {
                Some(num) => num,
                None => panic!("rational overflow"),
            },
            den: self.den,
        }
    }

    /// # Panics
    ///
    /// Panics on zero.
    pub const fn recip(self) -> Self {
        assert!(self.num != 0, "reciprocal of zero");
        Self::reduce(self.den as i128, self.num as i128)
    }

    pub const fn abs(self) -> Self {
        if self.num < 0 {
            self.neg()
        } else {
            self
        }
    }

    /// Three-way comparison usable in const contexts.
    pub const fn compare(self, rhs: Self) -> Ordering {
        let lhs = (self.num as i128) * (rhs.den as i128);
        let rhs = (rhs.num as i128) * (self.den as i128);
        if lhs < rhs {
            Ordering::Less
        } else if lhs > rhs {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }

    const fn reduce(num: i128, den: i128) -> Self {
        match Self::try_reduce(num, den) {
            Ok(value) => value,
            Err(_) => panic!("rational overflow"),
        }
    }

    const fn try_reduce(num: i128, den: i128) -> Result<Self, ScaleError> {
        if num == 0 {
            return Ok(Self::ZERO);
        }
        let (mut num, mut den) = (num, den);
        if den < 0 {
            num = -num;
            den = -den;
        }
        let g = gcd_i128(num, den);
        match (narrow(num / g), narrow(den / g)) {
            (Some(num), Some(den)) => Ok(Self { num, den }),
            _ => Err(ScaleError::Overflow),
        }
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::integer(value)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(*other)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl std::ops::Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Rational::add(self, rhs)
    }
}

impl std::ops::Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Rational::sub(self, rhs)
    }
}

impl std::ops::Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational::mul(self, rhs)
    }
}

impl std::ops::Div for Rational {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Rational::div(self, rhs)
    }
}

impl std::ops::Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Rational::neg(self)
    }
}

const fn narrow(value: i128) -> Option<i64> {
    if value < i64::MIN as i128 || value > i64::MAX as i128 {
        None
    } else {
        Some(value as i64)
    }
}

const fn gcd_i128(a: i128, b: i128) -> i128 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    if a == 0 {
        1
    } else {
        a
    }
}

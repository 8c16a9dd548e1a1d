//! Canonical scale factors of the form `ratio^(1/root) * 10^power`.
//!
//! A [`ScaleFactor`] describes how a stored number relates to the value in SI
//! base units: kilometers carry `10^3`, inches `127 * 10^-4`, a unit defined as
//! the square root of two meters carries `2^(1/2)`.
//!
//! Every constructor and combinator canonicalizes its result so that two scale
//! factors denoting the same multiplier are field-for-field identical:
//!
//! 1. `ratio` is reduced and strictly positive,
//! 2. `root` is minimal (no prime `p | root` with exact `p`-th roots of both
//!    the numerator and the denominator),
//! 3. neither the numerator nor the denominator is divisible by 10, and the
//!    denominator keeps a factor 2 or 5 only when moving it into `power`
//!    would overflow the numerator.
//!
//! Like [`Dimension`](crate::Dimension), the whole algebra is `const fn`. The
//! `try_*` forms return [`ScaleError`]; the plain forms panic, which is a
//! compile error when they are evaluated for a unit's associated constant.
//!
//! # Example
//!
//! ```rust
//! use mesi_core::{Rational, ScaleFactor};
//!
//! const HECTO: ScaleFactor =
//!     ScaleFactor::from_ratio(4, 1).multiply(ScaleFactor::from_ratio(25, 1));
//! const ALSO_HECTO: ScaleFactor = ScaleFactor::ten_to_the(Rational::integer(3))
//!     .multiply(ScaleFactor::ten_to_the(Rational::integer(-1)));
//! assert_eq!(HECTO, ALSO_HECTO);
//! assert_eq!(HECTO.to_string(), "10^2");
//! ```

use std::fmt;

use crate::checked::{
    checked_mul, checked_mul_u32, checked_pow, exact_root, lcm_u32, smallest_prime_factor,
};
use crate::error::ScaleError;
use crate::numeric::Numeric;
use crate::rational::Rational;

/// `?` for `const fn`, where the `Try` trait is unavailable.
macro_rules! tri {
    ($e:expr) => {
        match $e {
            Ok(value) => value,
            Err(err) => return Err(err),
        }
    };
}

/// A canonical numeric multiplier `ratio^(1/root) * 10^power`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScaleFactor {
    ratio: Rational,
    root: u32,
    power: Rational,
}

impl ScaleFactor {
    /// The identity: values in SI base units.
    pub const UNIT: Self = Self {
        ratio: Rational::ONE,
        root: 1,
        power: Rational::ZERO,
    };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Canonicalize `ratio^(1/root) * 10^power`.
    ///
    /// # Panics
    ///
    /// Panics on any [`ScaleError`]; see [`ScaleFactor::try_new`].
    pub const fn new(ratio: Rational, root: u32, power: Rational) -> Self {
        expect_scale(Self::try_new(ratio, root, power))
    }

    pub const fn try_new(ratio: Rational, root: u32, power: Rational) -> Result<Self, ScaleError> {
        Self::canonicalize(ratio, root, power)
    }

    /// The plain rational multiplier `num/den`.
    pub const fn from_ratio(num: i64, den: i64) -> Self {
        expect_scale(Self::try_from_ratio(num, den))
    }

    pub const fn try_from_ratio(num: i64, den: i64) -> Result<Self, ScaleError> {
        Self::canonicalize(tri!(Rational::try_new(num, den)), 1, Rational::ZERO)
    }

    /// `10^power`; already canonical.
    pub const fn ten_to_the(power: Rational) -> Self {
        Self {
            ratio: Rational::ONE,
            root: 1,
            power,
        }
    }

    /// `(num/den)^(1/root)`.
    pub const fn radical(num: i64, den: i64, root: u32) -> Self {
        if den == 0 {
            ScaleError::ZeroDenominator.panic()
        }
        Self::new(Rational::new(num, den), root, Rational::ZERO)
    }

    /// Bring `ratio^(1/root) * 10^power` into canonical form.
    ///
    /// The normalization steps run to a fixed point: root minimization,
    /// moving factors 10, 5 and 2 out of the denominator, and extracting
    /// factors of ten from the numerator. Each factor of ten taken from under
    /// the root contributes `1/root` to the power. The 2s and 5s move for as
    /// long as the numerator fits in `i64`, which depends only on the value,
    /// so the result stays unique.
    pub const fn canonicalize(
        ratio: Rational,
        root: u32,
        power: Rational,
    ) -> Result<Self, ScaleError> {
        if root == 0 {
            return Err(ScaleError::ZeroRoot);
        }
        if ratio.numer() <= 0 {
            return Err(ScaleError::NonPositiveRatio);
        }

        let (mut num, mut den) = (ratio.numer(), ratio.denom());
        let mut root = root;
        let mut power = power;

        loop {
            let mut changed = false;

            // Root minimization. An exact d-th root for composite d implies an
            // exact root for each prime factor of d, so primes suffice.
            let mut rest = root;
            while rest > 1 {
                let p = smallest_prime_factor(rest);
                match (exact_root(num, p), exact_root(den, p)) {
                    (Some(n), Some(d)) => {
                        num = n;
                        den = d;
                        root /= p;
                        rest = root;
                        changed = true;
                    }
                    _ => {
                        while rest % p == 0 {
                            rest /= p;
                        }
                    }
                }
            }

            let step = Rational::new(1, root as i64);

            // n/(10k) = (n/k) * 10^-1, under the root.
            while den % 10 == 0 {
                den /= 10;
                power = tri!(power.checked_sub(step));
                changed = true;
            }

            // n/(5k) = (2n/k) * 10^-1 and n/(2k) = (5n/k) * 10^-1. A factor
            // stays in the denominator once the numerator can no longer
            // absorb its complement.
            while den % 5 == 0 {
                match num.checked_mul(2) {
                    Some(n) => num = n,
                    None => break,
                }
                den /= 5;
                power = tri!(power.checked_sub(step));
                changed = true;
            }
            while den % 2 == 0 {
                match num.checked_mul(5) {
                    Some(n) => num = n,
                    None => break,
                }
                den /= 2;
                power = tri!(power.checked_sub(step));
                changed = true;
            }

            while num % 10 == 0 {
                num /= 10;
                power = tri!(power.checked_add(step));
                changed = true;
            }

            let reduced = Rational::new(num, den);
            if reduced.numer() != num || reduced.denom() != den {
                num = reduced.numer();
                den = reduced.denom();
                changed = true;
            }

            if !changed {
                break;
            }
        }

        Ok(Self {
            ratio: Rational::new(num, den),
            root,
            power,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub const fn ratio(&self) -> Rational {
        self.ratio
    }

    pub const fn root(&self) -> u32 {
        self.root
    }

    pub const fn power(&self) -> Rational {
        self.power
    }

    pub const fn is_unit(&self) -> bool {
        self.equals(&Self::UNIT)
    }

    /// True when the multiplier is rational: no radical and an integral power.
    ///
    /// Exact scale factors are applied with integer multiplications and
    /// divisions only.
    pub const fn is_exact(&self) -> bool {
        self.root == 1 && self.power.is_integer()
    }

    /// `const` equality. Canonical form makes field equality exact.
    pub const fn equals(&self, rhs: &Self) -> bool {
        self.ratio.equals(rhs.ratio) && self.root == rhs.root && self.power.equals(rhs.power)
    }

    // ========================================================================
    // Combination
    // ========================================================================

    pub const fn multiply(self, rhs: Self) -> Self {
        expect_scale(self.try_multiply(rhs))
    }

    /// Product of two scale factors.
    ///
    /// Both radicals are lifted to the common root `lcm(e1, e2)`:
    /// `r1^(1/e1) * r2^(1/e2) = (r1^(L/e1) * r2^(L/e2))^(1/L)`.
    pub const fn try_multiply(self, rhs: Self) -> Result<Self, ScaleError> {
        let root = tri!(lcm_u32(self.root, rhs.root));
        let (ka, kb) = (root / self.root, root / rhs.root);
        let num = tri!(checked_mul(
            tri!(checked_pow(self.ratio.numer(), ka)),
            tri!(checked_pow(rhs.ratio.numer(), kb)),
        ));
        let den = tri!(checked_mul(
            tri!(checked_pow(self.ratio.denom(), ka)),
            tri!(checked_pow(rhs.ratio.denom(), kb)),
        ));
        Self::canonicalize(
            Rational::new(num, den),
            root,
            tri!(self.power.checked_add(rhs.power)),
        )
    }

    pub const fn invert(self) -> Self {
        expect_scale(self.try_invert())
    }

    /// Reciprocal. Swapping the ratio can put a 2 or 5 into the denominator,
    /// so the result is renormalized.
    pub const fn try_invert(self) -> Result<Self, ScaleError> {
        Self::canonicalize(self.ratio.recip(), self.root, tri!(self.power.checked_neg()))
    }

    pub const fn divide(self, rhs: Self) -> Self {
        expect_scale(self.try_divide(rhs))
    }

    pub const fn try_divide(self, rhs: Self) -> Result<Self, ScaleError> {
        self.try_multiply(tri!(rhs.try_invert()))
    }

    pub const fn raise(self, exp: Rational) -> Self {
        expect_scale(self.try_raise(exp))
    }

    /// `self^exp` for a rational exponent.
    ///
    /// The ratio is raised to the exponent's numerator and the root index is
    /// multiplied by its denominator; a negative exponent inverts first.
    pub const fn try_raise(self, exp: Rational) -> Result<Self, ScaleError> {
        if exp.is_zero() {
            return Ok(Self::UNIT);
        }
        let base = if exp.is_negative() {
            tri!(self.try_invert())
        } else {
            self
        };
        let exp = if exp.is_negative() {
            tri!(exp.checked_neg())
        } else {
            exp
        };
        if exp.numer() > u32::MAX as i64 || exp.denom() > u32::MAX as i64 {
            return Err(ScaleError::Overflow);
        }
        let (n, d) = (exp.numer() as u32, exp.denom() as u32);

        let num = tri!(checked_pow(base.ratio.numer(), n));
        let den = tri!(checked_pow(base.ratio.denom(), n));
        let root = tri!(checked_mul_u32(base.root, d));
        Self::canonicalize(
            Rational::new(num, den),
            root,
            tri!(base.power.checked_mul(exp)),
        )
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// The multiplier as an `f64`.
    pub fn to_f64(&self) -> f64 {
        let ratio = self.ratio.to_f64();
        let radical = if self.root == 1 {
            ratio
        } else {
            ratio.powf(1.0 / self.root as f64)
        };
        let tens = match i32::try_from(self.power.numer()) {
            Ok(p) if self.power.is_integer() => 10f64.powi(p),
            _ => 10f64.powf(self.power.to_f64()),
        };
        radical * tens
    }

    /// The multiplier in representation `R`.
    ///
    /// Exact scale factors are built by repeated multiplication and division
    /// in `R`; integer representations truncate a fractional multiplier the
    /// way their division does. Radicals and fractional powers go through
    /// `f64::powf`.
    pub fn value<R: Numeric>(&self) -> R {
        self.apply(R::one())
    }

    /// `value * self`, multiplying before dividing.
    ///
    /// An exact factor is first reduced to a single fraction `up/down`, so
    /// `5 * 10^-1` is applied as `value / 2`. When that fraction does not fit
    /// in `i64` the multiplier goes through `f64`.
    pub fn apply<R: Numeric>(&self, value: R) -> R {
        match self.exact_fraction() {
            Some((up, down)) => value * R::val_from_i64(up) / R::val_from_i64(down),
            None => R::val_from_f64(value.val_to_f64() * self.to_f64()),
        }
    }

    /// `ratio * 10^power` as a reduced `(numerator, denominator)` pair.
    fn exact_fraction(&self) -> Option<(i64, i64)> {
        if !self.is_exact() {
            return None;
        }
        let p = self.power.numer();
        let tens = 10i128.checked_pow(u32::try_from(p.unsigned_abs()).ok()?)?;
        let (mut up, mut down) = (self.ratio.numer() as i128, self.ratio.denom() as i128);
        if p >= 0 {
            up = up.checked_mul(tens)?;
        } else {
            down = down.checked_mul(tens)?;
        }
        let g = gcd_i128(up, down);
        Some((i64::try_from(up / g).ok()?, i64::try_from(down / g).ok()?))
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self::UNIT
    }
}

impl std::ops::Mul for ScaleFactor {
    type Output = Result<Self, ScaleError>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.try_multiply(rhs)
    }
}

impl std::ops::Div for ScaleFactor {
    type Output = Result<Self, ScaleError>;

    fn div(self, rhs: Self) -> Self::Output {
        self.try_divide(rhs)
    }
}

/// `n[/d][^(1/root)]` and `10^p[/q]`, joined by ` * `; `1` for the identity.
impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unit() {
            return write!(f, "1");
        }

        let mut parts = Vec::new();
        if !self.ratio.equals(Rational::ONE) {
            if self.root == 1 {
                parts.push(self.ratio.to_string());
            } else {
                parts.push(format!("{}^(1/{})", self.ratio, self.root));
            }
        }
        if !self.power.is_zero() {
            parts.push(format!("10^{}", self.power));
        }
        write!(f, "{}", parts.join(" * "))
    }
}

fn gcd_i128(mut a: i128, mut b: i128) -> i128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

const fn expect_scale(result: Result<ScaleFactor, ScaleError>) -> ScaleFactor {
    match result {
        Ok(scale) => scale,
        Err(err) => err.panic(),
    }
}

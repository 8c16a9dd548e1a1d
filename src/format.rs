//! Rendering of unit descriptors.

use mesi_core::dimension::format_exponent;
use mesi_core::{Dimension, ScaleFactor};

/// Render a `(dimension, scale)` descriptor.
///
/// Base units appear in the order m, s, kg, A, K, mol, cd. A zero exponent is
/// omitted, an exponent of one is the bare symbol, other integers are written
/// `m^2`, fractions `A^(1/2)`. A non-unit scale follows after ` * `. A
/// dimensionless, unscaled descriptor renders as `1`.
///
/// ```rust
/// use mesi::format::unit_string;
/// use mesi::{Dimension, Rational, ScaleFactor};
///
/// let dim = Dimension::new(2, -1, 0, 0, 0, 0, 0);
/// let kilo = ScaleFactor::ten_to_the(Rational::integer(3));
/// assert_eq!(unit_string(&dim, &kilo), "m^2 s^-1 * 10^3");
/// assert_eq!(unit_string(&Dimension::NONE, &ScaleFactor::UNIT), "1");
/// ```
pub fn unit_string(dimension: &Dimension, scale: &ScaleFactor) -> String {
    let dims: Vec<String> = dimension
        .exponents()
        .into_iter()
        .filter_map(|(unit, exp)| format_exponent(unit.symbol(), exp))
        .collect();

    match (dims.is_empty(), scale.is_unit()) {
        (true, true) => "1".to_string(),
        (true, false) => scale.to_string(),
        (false, true) => dims.join(" "),
        (false, false) => format!("{} * {}", dims.join(" "), scale),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesi_core::Rational;

    #[test]
    fn fractional_exponents_are_parenthesized() {
        let dim = Dimension::from_exponents([
            Rational::integer(2),
            Rational::integer(2),
            Rational::integer(2),
            Rational::new(1, 2),
            Rational::ZERO,
            Rational::ZERO,
            Rational::ZERO,
        ]);
        assert_eq!(unit_string(&dim, &ScaleFactor::UNIT), "m^2 s^2 kg^2 A^(1/2)");
    }

    #[test]
    fn scale_follows_dimension() {
        let milli = ScaleFactor::ten_to_the(Rational::integer(-3));
        assert_eq!(unit_string(&Dimension::LENGTH, &milli), "m * 10^-3");
        assert_eq!(unit_string(&Dimension::NONE, &milli), "10^-3");
        assert_eq!(
            unit_string(&Dimension::TIME, &ScaleFactor::from_ratio(60, 1)),
            "s * 6 * 10^1"
        );
        assert_eq!(
            unit_string(&Dimension::MASS, &ScaleFactor::radical(2, 1, 2)),
            "kg * 2^(1/2)"
        );
    }

    #[test]
    fn every_base_unit_has_a_symbol() {
        let all = Dimension::new(1, 1, 1, 1, 1, 1, 1);
        assert_eq!(unit_string(&all, &ScaleFactor::UNIT), "m s kg A K mol cd");
    }
}

//! `serde` support for the descriptor types.
//!
//! Deserialized values go back through the checked constructors, so a
//! non-canonical scale factor on the wire comes out canonical and an invalid
//! one is rejected.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::dimension::Dimension;
use crate::rational::Rational;
use crate::scale::ScaleFactor;

#[derive(Serialize, Deserialize)]
struct RationalRepr {
    num: i64,
    den: i64,
}

#[derive(Serialize, Deserialize)]
struct ScaleRepr {
    ratio: Rational,
    root: u32,
    power: Rational,
}

impl Serialize for Rational {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RationalRepr {
            num: self.numer(),
            den: self.denom(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RationalRepr::deserialize(deserializer)?;
        Rational::try_new(raw.num, raw.den).map_err(D::Error::custom)
    }
}

/// Seven exponents in the order m, s, kg, A, K, mol, cd.
impl Serialize for Dimension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_array().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <[Rational; 7]>::deserialize(deserializer).map(Dimension::from_exponents)
    }
}

impl Serialize for ScaleFactor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ScaleRepr {
            ratio: self.ratio(),
            root: self.root(),
            power: self.power(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ScaleFactor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = ScaleRepr::deserialize(deserializer)?;
        ScaleFactor::try_new(raw.ratio, raw.root, raw.power).map_err(D::Error::custom)
    }
}

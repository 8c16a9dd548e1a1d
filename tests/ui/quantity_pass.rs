use mesi::si::*;
use mesi::unit::{DivUnit, Meter, Radical, Scaled, TenToThe, Unit};
use mesi::{Dimension, Quantity, Rational, ScaleFactor};

/// The survey foot: 1200/3937 m.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct SurveyFoot;

impl Unit for SurveyFoot {
    const DIMENSION: Dimension = Dimension::LENGTH;
    const SCALE: ScaleFactor = ScaleFactor::from_ratio(1200, 3937);
}

type RootTwoMeter = Scaled<Meter, Radical<2, 1, 2>>;
type Decimeter = Scaled<Meter, TenToThe<-1>>;

mesi::assert_same_unit!(Joule, DivUnit<Watt, Hertz>);
mesi::assert_same_unit!(Scaled<Meter, TenToThe<2>>, Scaled<Decimeter, TenToThe<3>>);

fn travel(speed: MetersPerSecond, time: Seconds) -> Meters {
    (speed * time).into_unit()
}

fn main() {
    let d = travel(MetersPerSecond::new(3.0), Seconds::new(2.0));
    assert_eq!(d, Meters::new(6.0));

    let feet = Quantity::<SurveyFoot>::new(3937.0);
    let m: Meters = feet.convert();
    assert!((m.value() - 1200.0).abs() < 1e-9);

    let r = Quantity::<RootTwoMeter>::new(1.0);
    let squared = r.squared();
    assert_eq!(squared.scale(), ScaleFactor::from_ratio(2, 1));
    assert_eq!(squared.dimension(), Dimension::LENGTH.scale(Rational::integer(2)));

    let total: Meters = [1.0, 2.0, 3.0].into_iter().map(Meters::new).sum();
    assert_eq!(total.to_string(), "6 m");
}

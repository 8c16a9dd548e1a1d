use num_traits::Num;
use std::fmt::Debug;

/// Numeric representation stored inside a quantity.
///
/// Arithmetic comes from [`num_traits::Num`]; the conversions are used to
/// apply scale factors. Integer conversions saturate.
pub trait Numeric: Num + Copy + PartialOrd + Debug + Send + Sync + 'static {
    fn val_from_i64(v: i64) -> Self;
    fn val_from_f64(v: f64) -> Self;
    fn val_to_f64(self) -> f64;
}

macro_rules! impl_numeric_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                fn val_from_i64(v: i64) -> Self {
                    v as $t
                }
                fn val_from_f64(v: f64) -> Self {
                    v as $t
                }
                fn val_to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

macro_rules! impl_numeric_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                fn val_from_i64(v: i64) -> Self {
                    <$t>::try_from(v).unwrap_or(if v < 0 { <$t>::MIN } else { <$t>::MAX })
                }
                fn val_from_f64(v: f64) -> Self {
                    v as $t
                }
                fn val_to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_numeric_float!(f32, f64);
impl_numeric_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

use half::f16;

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for half::f16 {}
}

/// A floating point type that can be quantized and reconstructed.
///
/// Implemented for `f32`, `f64` and [`f16`]. Half precision values are
/// widened to `f32` for the arithmetic, since `2^W - 1` is out of the half
/// range for widths above 16.
pub trait Float: Copy + Debug + PartialOrd + sealed::Sealed {
    /// The type the quantization arithmetic is done in.
    type Math: Math;

    fn widen(self) -> Self::Math;
    fn narrow(value: Self::Math) -> Self;
}

/// Arithmetic the codecs need from a floating point type.
pub trait Math:
    Copy
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + sealed::Sealed
{
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;

    /// Nearest representable value, ties to even.
    fn from_i128(value: i128) -> Self;

    /// Round half away from zero. Saturates at the `i128` range and maps
    /// NaN to zero.
    fn round_to_i128(self) -> i128;

    fn is_nan(self) -> bool;
    fn to_f64(self) -> f64;
}

macro_rules! impl_float {
    ($($float:ty),*) => {$(
        impl Math for $float {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;

            #[inline]
            fn from_i128(value: i128) -> Self {
                value as $float
            }

            #[inline]
            fn round_to_i128(self) -> i128 {
                self.round() as i128
            }

            #[inline]
            fn is_nan(self) -> bool {
                <$float>::is_nan(self)
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }

        impl Float for $float {
            type Math = Self;

            #[inline]
            fn widen(self) -> Self {
                self
            }

            #[inline]
            fn narrow(value: Self) -> Self {
                value
            }
        }
    )*};
}

impl_float!(f32, f64);

impl Float for f16 {
    type Math = f32;

    #[inline]
    fn widen(self) -> f32 {
        self.to_f32()
    }

    #[inline]
    fn narrow(value: f32) -> Self {
        f16::from_f32(value)
    }
}

#[test]
fn round_half_away_from_zero() {
    assert_eq!(0.5_f32.round_to_i128(), 1);
    assert_eq!((-0.5_f32).round_to_i128(), -1);
    assert_eq!(2.5_f64.round_to_i128(), 3);
    assert_eq!((-2.5_f64).round_to_i128(), -3);
    assert_eq!(1.49_f64.round_to_i128(), 1);
}

#[test]
fn round_saturates() {
    assert_eq!(f64::NAN.round_to_i128(), 0);
    assert_eq!(f32::INFINITY.round_to_i128(), i128::MAX);
    assert_eq!(f64::NEG_INFINITY.round_to_i128(), i128::MIN);
}

#[test]
fn half_widens_exactly() {
    for value in [-1.0_f32, -0.5, 0.0, 0.25, 1.0] {
        let half = f16::from_f32(value);
        assert_eq!(half.widen(), value);
        assert_eq!(f16::narrow(value), half);
    }
}

//! Codes with the bit width fixed at compile time, stored in the smallest
//! native integer that fits.
//!
//! ```
//! use normq::{Snorm, Unorm};
//!
//! let red = Unorm::<5>::encode(1.0_f32);
//! assert_eq!(red.code(), 31_u8);
//!
//! let normal = Snorm::<10>::encode(-0.5_f32);
//! assert_eq!(normal.code(), -256_i16);
//! assert_eq!(normal.decode::<f32>(), -256.0 / 511.0);
//! ```

use crate::float::Float;
use crate::round::{signed_max, signed_min, unsigned_max};
use crate::width::{Bits, SignedStorage, SignedWidth, UnsignedStorage, UnsignedWidth};
use crate::{snorm, snorm_no_zero, unorm};

/// An `N` bit unsigned normalized code, see [`unorm`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Unorm<const N: u32>(<Bits<N> as UnsignedWidth>::Storage)
where
    Bits<N>: UnsignedWidth;

impl<const N: u32> Unorm<N>
where
    Bits<N>: UnsignedWidth,
{
    pub const MIN_CODE: u32 = 0;
    pub const MAX_CODE: u32 = unsigned_max(N) as u32;

    #[inline]
    pub fn encode<F: Float>(value: F) -> Self {
        Self(UnsignedStorage::from_code(unorm::encode(value, N)))
    }

    #[inline]
    pub fn decode<F: Float>(self) -> F {
        unorm::decode(self.0.to_code(), N)
    }

    #[inline]
    pub fn code(self) -> <Bits<N> as UnsignedWidth>::Storage {
        self.0
    }

    /// Returns `None` if `code` doesn't fit in `N` bits.
    pub fn from_code(code: <Bits<N> as UnsignedWidth>::Storage) -> Option<Self> {
        (code.to_code() <= Self::MAX_CODE).then_some(Self(code))
    }
}

/// An `N` bit signed normalized code with an exact zero, see [`snorm`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Snorm<const N: u32>(<Bits<N> as SignedWidth>::Storage)
where
    Bits<N>: SignedWidth;

impl<const N: u32> Snorm<N>
where
    Bits<N>: SignedWidth,
{
    pub const MIN_CODE: i64 = signed_min(N);
    pub const MAX_CODE: i64 = signed_max(N);

    #[inline]
    pub fn encode<F: Float>(value: F) -> Self {
        Self(SignedStorage::from_code(snorm::encode(value, N)))
    }

    #[inline]
    pub fn decode<F: Float>(self) -> F {
        snorm::decode(self.0.to_code(), N)
    }

    #[inline]
    pub fn code(self) -> <Bits<N> as SignedWidth>::Storage {
        self.0
    }

    /// Returns `None` if `code` doesn't fit in `N` bits.
    pub fn from_code(code: <Bits<N> as SignedWidth>::Storage) -> Option<Self> {
        (Self::MIN_CODE..=Self::MAX_CODE)
            .contains(&code.to_code())
            .then_some(Self(code))
    }
}

/// An `N` bit signed normalized code without a zero, see [`snorm_no_zero`].
///
/// The default code decodes to the smallest positive value, not zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SnormNoZero<const N: u32>(<Bits<N> as SignedWidth>::Storage)
where
    Bits<N>: SignedWidth;

impl<const N: u32> SnormNoZero<N>
where
    Bits<N>: SignedWidth,
{
    pub const MIN_CODE: i64 = signed_min(N);
    pub const MAX_CODE: i64 = signed_max(N);

    #[inline]
    pub fn encode<F: Float>(value: F) -> Self {
        Self(SignedStorage::from_code(snorm_no_zero::encode(value, N)))
    }

    #[inline]
    pub fn decode<F: Float>(self) -> F {
        snorm_no_zero::decode(self.0.to_code(), N)
    }

    #[inline]
    pub fn code(self) -> <Bits<N> as SignedWidth>::Storage {
        self.0
    }

    /// Returns `None` if `code` doesn't fit in `N` bits.
    pub fn from_code(code: <Bits<N> as SignedWidth>::Storage) -> Option<Self> {
        (Self::MIN_CODE..=Self::MAX_CODE)
            .contains(&code.to_code())
            .then_some(Self(code))
    }
}

macro_rules! impl_into_float {
    ($code:ident, $width:ident => $($float:ty),*) => {$(
        impl<const N: u32> From<$code<N>> for $float
        where
            Bits<N>: $width,
        {
            #[inline]
            fn from(code: $code<N>) -> Self {
                code.decode()
            }
        }
    )*};
}

impl_into_float!(Unorm, UnsignedWidth => f32, f64);
impl_into_float!(Snorm, SignedWidth => f32, f64);
impl_into_float!(SnormNoZero, SignedWidth => f32, f64);

#[test]
fn unorm_storage() {
    let code = Unorm::<8>::encode(1.0_f32);
    assert_eq!(code.code(), 255_u8);
    assert_eq!(f32::from(code), 1.0);

    let code = Unorm::<10>::encode(0.5_f64);
    assert_eq!(code.code(), 512_u16);

    let code = Unorm::<32>::encode(1.0_f64);
    assert_eq!(code.code(), u32::MAX);
    assert_eq!(code.decode::<f64>(), 1.0);

    assert_eq!(Unorm::<4>::MAX_CODE, 15);
    assert_eq!(Unorm::<4>::from_code(15).map(|code| code.code()), Some(15));
    assert_eq!(Unorm::<4>::from_code(16), None);
}

#[test]
fn snorm_storage() {
    let code = Snorm::<16>::encode(-1.0_f32);
    assert_eq!(code.code(), -32767_i16);
    assert_eq!(code.decode::<f32>(), -1.0);

    let code = Snorm::<64>::encode(1.0_f64);
    assert_eq!(code.code(), i64::MAX);
    assert_eq!(f64::from(code), 1.0);

    assert_eq!(Snorm::<12>::from_code(-2048).map(f32::from), Some(-1.0));
    assert_eq!(Snorm::<12>::from_code(2048), None);
    assert_eq!(Snorm::<12>::from_code(-2049), None);
    assert_eq!(Snorm::<3>::default().decode::<f32>(), 0.0);
}

#[test]
fn snorm_no_zero_storage() {
    let code = SnormNoZero::<8>::encode(-1.0_f32);
    assert_eq!(code.code(), -128_i8);
    assert_eq!(f32::from(code), -1.0);

    let code = SnormNoZero::<2>::encode(1.0_f32);
    assert_eq!(code.code(), 1_i8);
    assert_eq!(SnormNoZero::<2>::MIN_CODE, -2);
    assert_eq!(SnormNoZero::<2>::from_code(-3), None);

    assert_eq!(SnormNoZero::<8>::default().decode::<f64>(), 1.0 / 255.0);
}

#[test]
fn order_follows_value() {
    let values = [-1.0_f32, -0.75, -0.1, 0.0, 0.2, 0.9, 1.0];

    let codes: Vec<_> = values.iter().map(|&v| Snorm::<6>::encode(v)).collect();
    assert!(codes.windows(2).all(|pair| pair[0] <= pair[1]));

    let codes: Vec<_> = values.iter().map(|&v| SnormNoZero::<6>::encode(v)).collect();
    assert!(codes.windows(2).all(|pair| pair[0] <= pair[1]));
}

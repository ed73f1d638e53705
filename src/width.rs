use std::fmt::Debug;
use std::hash::Hash;

mod sealed {
    pub trait Sealed {}
}

/// Compile time bit width of a typed code.
///
/// [`UnsignedWidth`] is implemented for `Bits<2>` through `Bits<32>` and
/// [`SignedWidth`] for `Bits<2>` through `Bits<64>`, so other widths are
/// rejected at compile time.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bits<const N: u32>;

/// Picks the smallest unsigned integer that holds `N` bits.
pub trait UnsignedWidth {
    type Storage: UnsignedStorage;
}

/// Picks the smallest signed integer that holds `N` bits.
pub trait SignedWidth {
    type Storage: SignedStorage;
}

/// Native integer holding an unsigned code, widened to `u32` when coding.
pub trait UnsignedStorage: Copy + Debug + Default + Eq + Ord + Hash + sealed::Sealed {
    /// Truncates `code` to the storage width.
    fn from_code(code: u32) -> Self;
    fn to_code(self) -> u32;
}

/// Native integer holding a signed code, widened to `i64` when coding.
pub trait SignedStorage: Copy + Debug + Default + Eq + Ord + Hash + sealed::Sealed {
    /// Truncates `code` to the storage width.
    fn from_code(code: i64) -> Self;
    fn to_code(self) -> i64;
}

macro_rules! impl_storage {
    ($storage:ident, $wide:ty => $($int:ty),*) => {$(
        impl sealed::Sealed for $int {}

        impl $storage for $int {
            #[inline]
            fn from_code(code: $wide) -> Self {
                code as $int
            }

            #[inline]
            fn to_code(self) -> $wide {
                self as $wide
            }
        }
    )*};
}

impl_storage!(UnsignedStorage, u32 => u8, u16, u32);
impl_storage!(SignedStorage, i64 => i8, i16, i32, i64);

macro_rules! impl_width {
    ($width:ident, $int:ty => $($bits:literal)*) => {$(
        impl $width for Bits<$bits> {
            type Storage = $int;
        }
    )*};
}

impl_width!(UnsignedWidth, u8 => 2 3 4 5 6 7 8);
impl_width!(UnsignedWidth, u16 => 9 10 11 12 13 14 15 16);
impl_width!(UnsignedWidth, u32 => 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32);

impl_width!(SignedWidth, i8 => 2 3 4 5 6 7 8);
impl_width!(SignedWidth, i16 => 9 10 11 12 13 14 15 16);
impl_width!(SignedWidth, i32 => 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32);
impl_width!(
    SignedWidth,
    i64 => 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60
        61 62 63 64
);

#[test]
fn smallest_storage() {
    use std::mem::size_of;

    fn unsigned<const N: u32>() -> usize
    where
        Bits<N>: UnsignedWidth,
    {
        size_of::<<Bits<N> as UnsignedWidth>::Storage>()
    }

    fn signed<const N: u32>() -> usize
    where
        Bits<N>: SignedWidth,
    {
        size_of::<<Bits<N> as SignedWidth>::Storage>()
    }

    assert_eq!(unsigned::<2>(), 1);
    assert_eq!(unsigned::<8>(), 1);
    assert_eq!(unsigned::<9>(), 2);
    assert_eq!(unsigned::<17>(), 4);
    assert_eq!(unsigned::<32>(), 4);

    assert_eq!(signed::<8>(), 1);
    assert_eq!(signed::<16>(), 2);
    assert_eq!(signed::<24>(), 4);
    assert_eq!(signed::<33>(), 8);
    assert_eq!(signed::<64>(), 8);
}

#[test]
fn storage_round_trip() {
    assert_eq!(u8::from_code(255).to_code(), 255);
    assert_eq!(u16::from_code(1023).to_code(), 1023);
    assert_eq!(i8::from_code(-128).to_code(), -128);
    assert_eq!(i32::from_code(-5).to_code(), -5);
    assert_eq!(i64::from_code(i64::MIN).to_code(), i64::MIN);
}

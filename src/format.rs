use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{validate_width, Error, Result};
use crate::float::Float;
use crate::round::{signed_max, signed_min, unsigned_max};
use crate::{snorm, snorm_no_zero, unorm};

/// The quantization convention of a [`Format`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Codec {
    /// `[0, 1]`, see [`unorm`].
    Unsigned,
    /// `[-1, 1]` with an exact zero, see [`snorm`].
    SignedWithZero,
    /// `[-1, 1]` using every code symmetrically, see [`snorm_no_zero`].
    SignedWithoutZero,
}

impl Codec {
    pub fn max_bits(self) -> u32 {
        match self {
            Codec::Unsigned => unorm::MAX_BITS,
            Codec::SignedWithZero => snorm::MAX_BITS,
            Codec::SignedWithoutZero => snorm_no_zero::MAX_BITS,
        }
    }

    pub fn domain(self) -> RangeInclusive<f64> {
        match self {
            Codec::Unsigned => 0.0..=1.0,
            Codec::SignedWithZero | Codec::SignedWithoutZero => -1.0..=1.0,
        }
    }
}

/// A codec and bit width chosen at runtime, for example when reading
/// attribute layouts from an asset.
///
/// Codes are widened to `i64` regardless of codec.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFormat")]
pub struct Format {
    codec: Codec,
    bits: u32,
}

#[derive(Deserialize)]
struct RawFormat {
    codec: Codec,
    bits: u32,
}

impl TryFrom<RawFormat> for Format {
    type Error = Error;

    fn try_from(raw: RawFormat) -> Result<Self> {
        Format::new(raw.codec, raw.bits)
    }
}

impl Format {
    pub fn new(codec: Codec, bits: u32) -> Result<Self> {
        validate_width(bits, codec.max_bits())?;
        log::debug!("{bits} bit {codec:?} format");

        Ok(Self { codec, bits })
    }

    pub fn codec(self) -> Codec {
        self.codec
    }

    pub fn bits(self) -> u32 {
        self.bits
    }

    pub fn domain(self) -> RangeInclusive<f64> {
        self.codec.domain()
    }

    pub fn min_code(self) -> i64 {
        match self.codec {
            Codec::Unsigned => 0,
            Codec::SignedWithZero | Codec::SignedWithoutZero => signed_min(self.bits),
        }
    }

    pub fn max_code(self) -> i64 {
        match self.codec {
            Codec::Unsigned => unsigned_max(self.bits) as i64,
            Codec::SignedWithZero | Codec::SignedWithoutZero => signed_max(self.bits),
        }
    }

    /// The quantization step `1 / (2^K - 1)`, where `K` is the width for
    /// [`Codec::Unsigned`] and [`Codec::SignedWithoutZero`], and one less for
    /// [`Codec::SignedWithZero`]. Reconstruction error is at most one step.
    pub fn step(self) -> f64 {
        let levels = match self.codec {
            Codec::Unsigned | Codec::SignedWithoutZero => unsigned_max(self.bits),
            Codec::SignedWithZero => signed_max(self.bits) as u64,
        };

        1.0 / levels as f64
    }

    /// Quantize `value`, clamping values outside [`Format::domain`].
    pub fn encode<F: Float>(self, value: F) -> i64 {
        match self.codec {
            Codec::Unsigned => unorm::encode(value, self.bits).into(),
            Codec::SignedWithZero => snorm::encode(value, self.bits),
            Codec::SignedWithoutZero => snorm_no_zero::encode(value, self.bits),
        }
    }

    /// Reconstruct `code`, saturating codes outside
    /// [`Format::min_code`]`..=`[`Format::max_code`].
    pub fn decode<F: Float>(self, code: i64) -> F {
        match self.codec {
            Codec::Unsigned => {
                let code = code.clamp(0, self.max_code()) as u32;
                unorm::decode(code, self.bits)
            }
            Codec::SignedWithZero => snorm::decode(code, self.bits),
            Codec::SignedWithoutZero => snorm_no_zero::decode(code, self.bits),
        }
    }

    pub fn try_encode<F: Float>(self, value: F) -> Result<i64> {
        match self.codec {
            Codec::Unsigned => unorm::try_encode(value, self.bits).map(i64::from),
            Codec::SignedWithZero => snorm::try_encode(value, self.bits),
            Codec::SignedWithoutZero => snorm_no_zero::try_encode(value, self.bits),
        }
    }

    pub fn try_decode<F: Float>(self, code: i64) -> Result<F> {
        match self.codec {
            Codec::Unsigned => {
                let code = u32::try_from(code)
                    .map_err(|_| Error::CodeOutOfRange { code: code.into(), bits: self.bits })?;
                unorm::try_decode(code, self.bits)
            }
            Codec::SignedWithZero => snorm::try_decode(code, self.bits),
            Codec::SignedWithoutZero => snorm_no_zero::try_decode(code, self.bits),
        }
    }
}

#[test]
fn validates_width() {
    assert!(Format::new(Codec::Unsigned, 32).is_ok());
    assert_eq!(
        Format::new(Codec::Unsigned, 33),
        Err(Error::InvalidWidth { bits: 33, max: 32 })
    );
    assert!(Format::new(Codec::SignedWithZero, 64).is_ok());
    assert!(Format::new(Codec::SignedWithoutZero, 1).is_err());
}

#[test]
fn dispatch() -> Result<()> {
    let unsigned = Format::new(Codec::Unsigned, 8)?;
    assert_eq!(unsigned.encode(1.0_f32), 255);
    assert_eq!(unsigned.decode::<f32>(255), 1.0);
    assert_eq!(unsigned.decode::<f32>(-4), 0.0);
    assert_eq!(unsigned.step(), 1.0 / 255.0);
    assert_eq!((unsigned.min_code(), unsigned.max_code()), (0, 255));

    let with_zero = Format::new(Codec::SignedWithZero, 8)?;
    assert_eq!(with_zero.encode(0.0_f32), 0);
    assert_eq!(with_zero.step(), 1.0 / 127.0);
    assert_eq!((with_zero.min_code(), with_zero.max_code()), (-128, 127));

    let without_zero = Format::new(Codec::SignedWithoutZero, 8)?;
    assert_eq!(without_zero.encode(-1.0_f64), -128);
    assert_eq!(without_zero.decode::<f64>(-128), -1.0);
    assert_eq!(without_zero.domain(), -1.0..=1.0);

    Ok(())
}

#[test]
fn strict_dispatch() -> Result<()> {
    let unsigned = Format::new(Codec::Unsigned, 8)?;
    assert_eq!(
        unsigned.try_decode::<f32>(-1),
        Err(Error::CodeOutOfRange { code: -1, bits: 8 })
    );
    assert!(unsigned.try_encode(-0.5_f32).is_err());
    assert_eq!(unsigned.try_encode(0.0_f32)?, 0);

    let with_zero = Format::new(Codec::SignedWithZero, 4)?;
    assert_eq!(with_zero.try_decode::<f64>(-8)?, -1.0);
    assert!(with_zero.try_decode::<f64>(8).is_err());

    Ok(())
}

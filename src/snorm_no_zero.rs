//! Signed normalized codes without a zero: `[-1, 1]` to `W` bit two's
//! complement integers, using every code symmetrically.
//!
//! `code = round((value * (2^W - 1) - 1) / 2)` and
//! `value = (2 * code + 1) / (2^W - 1)`. The numerator is always odd, so no
//! code decodes to zero, while `-1` and `1` land on the smallest and largest
//! code.

use crate::error::{validate_code, validate_value, validate_width, Result};
use crate::float::{Float, Math};
use crate::round::{assert_width, clamp_round, signed_max, signed_min, unsigned_max};

pub const MAX_BITS: u32 = 64;

#[inline]
fn scale<M: Math>(bits: u32) -> M {
    M::from_i128(unsigned_max(bits).into())
}

/// Quantize `value` to a `bits` wide code. Values outside `[-1, 1]` are
/// clamped to the nearest code.
///
/// # Panics
///
/// If `bits` is outside `2..=64`.
#[inline]
#[track_caller]
pub fn encode<F: Float>(value: F, bits: u32) -> i64 {
    assert_width(bits, MAX_BITS);

    let (min, max) = (signed_min(bits).into(), signed_max(bits).into());
    let scaled = (value.widen() * scale(bits) - F::Math::ONE) / F::Math::TWO;

    clamp_round(scaled, min, max) as i64
}

/// Reconstruct the value of a `bits` wide code. Codes outside the `bits`
/// wide range saturate.
///
/// # Panics
///
/// If `bits` is outside `2..=64`.
#[inline]
#[track_caller]
pub fn decode<F: Float>(code: i64, bits: u32) -> F {
    assert_width(bits, MAX_BITS);

    let code = i128::from(code.clamp(signed_min(bits), signed_max(bits)));
    F::narrow(F::Math::from_i128(2 * code + 1) / scale(bits))
}

/// Like [`encode`], but rejects invalid widths and values outside `[-1, 1]`.
pub fn try_encode<F: Float>(value: F, bits: u32) -> Result<i64> {
    validate_width(bits, MAX_BITS)?;
    let value = validate_value(value, -F::Math::ONE, F::Math::ONE)?;

    Ok(encode(value, bits))
}

/// Like [`decode`], but rejects invalid widths and codes that don't fit in
/// `bits` bits.
pub fn try_decode<F: Float>(code: i64, bits: u32) -> Result<F> {
    validate_width(bits, MAX_BITS)?;

    let (min, max) = (signed_min(bits).into(), signed_max(bits).into());
    validate_code(code.into(), min, max, bits)?;

    Ok(decode(code, bits))
}

#[test]
fn two_bits() {
    assert_eq!(encode(-1.0_f32, 2), -2);
    assert_eq!(encode(1.0_f32, 2), 1);

    let decoded: Vec<f64> = (-2..=1).map(|code| decode(code, 2)).collect();
    assert_eq!(decoded, [-1.0, -1.0 / 3.0, 1.0 / 3.0, 1.0]);
}

#[test]
fn byte() {
    assert_eq!(encode(-1.0_f32, 8), -128);
    assert_eq!(decode::<f32>(-128, 8), -1.0);
    assert_eq!(encode(1.0_f32, 8), 127);
    assert_eq!(decode::<f32>(127, 8), 1.0);

    // Zero sits halfway between -1 and 0 and rounds away from zero.
    assert_eq!(encode(0.0_f32, 8), -1);
    assert_eq!(decode::<f64>(-1, 8), -1.0 / 255.0);
    assert_eq!(decode::<f64>(0, 8), 1.0 / 255.0);
}

#[test]
fn exact_ends() {
    for bits in 2..=MAX_BITS {
        let (min, max) = (signed_min(bits), signed_max(bits));

        assert_eq!(encode(-1.0_f64, bits), min, "{bits} bits");
        assert_eq!(encode(1.0_f64, bits), max, "{bits} bits");
        assert_eq!(encode(-1.0_f32, bits), min, "{bits} bits");
        assert_eq!(encode(1.0_f32, bits), max, "{bits} bits");

        assert_eq!(decode::<f64>(min, bits), -1.0, "{bits} bits");
        assert_eq!(decode::<f64>(max, bits), 1.0, "{bits} bits");
        assert_eq!(decode::<f32>(min, bits), -1.0, "{bits} bits");
        assert_eq!(decode::<f32>(max, bits), 1.0, "{bits} bits");
    }
}

#[test]
fn never_zero() {
    for bits in 2..=12 {
        for code in signed_min(bits)..=signed_max(bits) {
            assert_ne!(decode::<f32>(code, bits), 0.0);
            assert_ne!(decode::<f64>(code, bits), 0.0);
        }
    }

    for bits in 13..=MAX_BITS {
        for code in [-1, 0, signed_min(bits), signed_max(bits)] {
            assert_ne!(decode::<f32>(code, bits), 0.0);
            assert_ne!(decode::<f64>(code, bits), 0.0);
        }
    }
}

#[test]
fn strict() {
    use crate::Error;

    assert_eq!(try_encode(1.0_f64, 16), Ok(i64::from(i16::MAX)));
    assert_eq!(try_decode::<f64>(i16::MIN.into(), 16), Ok(-1.0));
    assert_eq!(
        try_decode::<f64>(-3, 2),
        Err(Error::CodeOutOfRange { code: -3, bits: 2 })
    );
    assert_eq!(try_encode(f32::NAN, 8), Err(Error::NotANumber));
}

//! Signed normalized codes with an exact zero: `[-1, 1]` to `W` bit two's
//! complement integers.
//!
//! `code = round(value * (2^(W-1) - 1))` and
//! `value = max(code / (2^(W-1) - 1), -1)`. The most negative code has no
//! positive counterpart and decodes to `-1` like the one above it.

use crate::error::{validate_code, validate_value, validate_width, Result};
use crate::float::{Float, Math};
use crate::round::{assert_width, clamp_round, signed_max, signed_min};

pub const MAX_BITS: u32 = 64;

#[inline]
fn scale<M: Math>(bits: u32) -> M {
    M::from_i128(signed_max(bits).into())
}

/// Quantize `value` to a `bits` wide code. Values outside `[-1, 1]` are
/// clamped to the nearest code and NaN becomes zero.
///
/// # Panics
///
/// If `bits` is outside `2..=64`.
#[inline]
#[track_caller]
pub fn encode<F: Float>(value: F, bits: u32) -> i64 {
    assert_width(bits, MAX_BITS);

    let (min, max) = (signed_min(bits).into(), signed_max(bits).into());
    clamp_round(value.widen() * scale(bits), min, max) as i64
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

    let code = code.clamp(signed_min(bits), signed_max(bits));
    let value = F::Math::from_i128(code.into()) / scale(bits);

    F::narrow(if value < -F::Math::ONE {
        -F::Math::ONE
    } else {
        value
    })
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
fn zero_is_exact() {
    for bits in 2..=MAX_BITS {
        assert_eq!(encode(0.0_f32, bits), 0);
        assert_eq!(encode(0.0_f64, bits), 0);
        assert_eq!(encode(-0.0_f64, bits), 0);
        assert_eq!(decode::<f32>(0, bits), 0.0);
        assert_eq!(decode::<f64>(0, bits), 0.0);
    }
}

#[test]
fn exact_ends() {
    for bits in 2..=MAX_BITS {
        for value in [-1.0_f64, 1.0] {
            let code = encode(value, bits);
            assert_ne!(code, 0, "{value} encoded to zero with {bits} bits");
            assert_eq!(decode::<f64>(code, bits), value, "{bits} bits");

            let code = encode(value as f32, bits);
            assert_ne!(code, 0);
            assert_eq!(decode::<f32>(code, bits), value as f32, "{bits} bits");
        }
    }
}

#[test]
fn most_negative_code() {
    assert_eq!(decode::<f32>(-128, 8), -1.0);
    assert_eq!(decode::<f32>(-127, 8), -1.0);
    assert_eq!(decode::<f64>(i64::MIN, 64), -1.0);
    assert_eq!(decode::<f32>(-2, 2), -1.0);
}

#[test]
fn byte() {
    assert_eq!(encode(0.0_f32, 8), 0);
    assert_eq!(encode(1.0_f32, 8), 127);
    assert_eq!(encode(-1.0_f32, 8), -127);
    assert_eq!(encode(0.5_f32, 8), 64);
    assert_eq!(encode(-0.5_f32, 8), -64);
    assert_eq!(encode(2.0_f32, 8), 127);
    assert_eq!(encode(-2.0_f32, 8), -128);
    assert_eq!(encode(-2.0_f64, 64), i64::MIN);
}

#[test]
fn fraction() {
    let value = std::f32::consts::PI - 3.0;
    let decoded = decode::<f32>(encode(value, 31), 31);

    assert!((value - decoded).abs() < 0.001, "{value} -> {decoded}");
}

#[test]
fn strict() {
    use crate::Error;

    assert_eq!(try_encode(-1.0_f32, 8), Ok(-127));
    assert_eq!(try_decode::<f32>(-128, 8), Ok(-1.0));
    assert_eq!(
        try_decode::<f32>(128, 8),
        Err(Error::CodeOutOfRange { code: 128, bits: 8 })
    );
    assert!(matches!(
        try_encode(-1.01_f64, 8),
        Err(Error::OutOfDomain { .. })
    ));
    assert_eq!(
        try_encode(0.0_f32, 65),
        Err(Error::InvalidWidth { bits: 65, max: 64 })
    );
}

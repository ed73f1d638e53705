//! Unsigned normalized codes: `[0, 1]` to `W` bit unsigned integers.
//!
//! `code = round(value * (2^W - 1))` and `value = code / (2^W - 1)`.

use crate::error::{validate_code, validate_value, validate_width, Result};
use crate::float::{Float, Math};
use crate::round::{assert_width, clamp_round, unsigned_max};

/// Widest supported code.
pub const MAX_BITS: u32 = 32;

#[inline]
fn scale<M: Math>(bits: u32) -> M {
    M::from_i128(unsigned_max(bits) as i128)
}

/// Quantize `value` to a `bits` wide code.
///
/// Values outside `[0, 1]` are clamped to the nearest code and NaN becomes
/// zero.
///
/// # Panics
///
/// If `bits` is outside `2..=32`.
#[inline]
#[track_caller]
pub fn encode<F: Float>(value: F, bits: u32) -> u32 {
    assert_width(bits, MAX_BITS);

    let max = unsigned_max(bits) as i128;
    clamp_round(value.widen() * scale(bits), 0, max) as u32
}

/// Reconstruct the value of a `bits` wide code. Bits above `bits` saturate
/// the code to its maximum.
///
/// # Panics
///
/// If `bits` is outside `2..=32`.
#[inline]
#[track_caller]
pub fn decode<F: Float>(code: u32, bits: u32) -> F {
    assert_width(bits, MAX_BITS);

    let code = u64::from(code).min(unsigned_max(bits));
    F::narrow(F::Math::from_i128(code as i128) / scale(bits))
}

/// Like [`encode`], but rejects invalid widths and values outside `[0, 1]`.
pub fn try_encode<F: Float>(value: F, bits: u32) -> Result<u32> {
    validate_width(bits, MAX_BITS)?;
    let value = validate_value(value, F::Math::ZERO, F::Math::ONE)?;

    Ok(encode(value, bits))
}

/// Like [`decode`], but rejects invalid widths and codes wider than `bits`.
pub fn try_decode<F: Float>(code: u32, bits: u32) -> Result<F> {
    validate_width(bits, MAX_BITS)?;
    validate_code(code.into(), 0, unsigned_max(bits).into(), bits)?;

    Ok(decode(code, bits))
}

#[test]
fn byte() {
    assert_eq!(encode(1.0_f32, 8), 255);
    assert_eq!(decode::<f32>(255, 8), 1.0);
    assert_eq!(encode(0.5_f32, 8), 128);
    assert_eq!(encode(0.2_f64, 8), 51);
    assert_eq!(decode::<f64>(51, 8), 0.2);
}

#[test]
fn exact_ends() {
    use half::f16;

    for bits in 2..=MAX_BITS {
        assert_eq!(encode(0.0_f32, bits), 0);
        assert_eq!(encode(0.0_f64, bits), 0);
        assert_eq!(decode::<f32>(0, bits), 0.0);
        assert_eq!(decode::<f64>(0, bits), 0.0);

        let max = unsigned_max(bits) as u32;
        assert_eq!(encode(1.0_f32, bits), max);
        assert_eq!(encode(1.0_f64, bits), max);
        assert_eq!(decode::<f32>(max, bits), 1.0);
        assert_eq!(decode::<f64>(max, bits), 1.0);

        assert_eq!(decode::<f16>(encode(f16::ONE, bits), bits), f16::ONE);
        assert_eq!(decode::<f16>(encode(f16::ZERO, bits), bits), f16::ZERO);
    }
}

#[test]
fn two_bits() {
    assert_eq!(encode(0.0_f32, 2), 0);
    assert_eq!(encode(1.0 / 3.0_f32, 2), 1);
    assert_eq!(encode(2.0 / 3.0_f32, 2), 2);
    assert_eq!(encode(1.0_f32, 2), 3);
    assert_eq!(decode::<f64>(1, 2), 1.0 / 3.0);
}

#[test]
fn clamps_outside_domain() {
    assert_eq!(encode(1.5_f32, 8), 255);
    assert_eq!(encode(-0.5_f32, 8), 0);
    assert_eq!(encode(f32::NAN, 8), 0);
    assert_eq!(encode(f64::INFINITY, 32), u32::MAX);
    assert_eq!(decode::<f32>(1000, 8), 1.0);
}

#[test]
fn strict() {
    use crate::Error;

    assert_eq!(try_encode(1.0_f32, 8), Ok(255));
    assert_eq!(try_decode::<f32>(255, 8), Ok(1.0));

    assert!(matches!(
        try_encode(1.5_f32, 8),
        Err(Error::OutOfDomain { .. })
    ));
    assert_eq!(try_encode(f64::NAN, 8), Err(Error::NotANumber));
    assert_eq!(
        try_encode(0.5_f32, 33),
        Err(Error::InvalidWidth { bits: 33, max: 32 })
    );
    assert_eq!(
        try_decode::<f32>(256, 8),
        Err(Error::CodeOutOfRange { code: 256, bits: 8 })
    );
}

#[test]
#[should_panic]
fn one_bit() {
    encode(0.5_f32, 1);
}

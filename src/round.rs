use crate::float::Math;

/// Largest unsigned `bits` wide code, `2^bits - 1`.
///
/// Shifts an all ones word down instead of computing `2^bits` so 64 bit
/// wide codes don't overflow.
#[inline]
pub const fn unsigned_max(bits: u32) -> u64 {
    u64::MAX >> (64 - bits)
}

/// Largest signed `bits` wide code, `2^(bits - 1) - 1`.
#[inline]
pub const fn signed_max(bits: u32) -> i64 {
    (u64::MAX >> (65 - bits)) as i64
}

/// Smallest signed `bits` wide code, `-2^(bits - 1)`.
#[inline]
pub const fn signed_min(bits: u32) -> i64 {
    -signed_max(bits) - 1
}

/// Round `value` to the nearest integer, ties away from zero, and clamp it
/// into `min..=max`.
///
/// The clamp only guards against floating point overshoot at the ends of
/// the code range. NaN becomes zero before clamping.
#[inline]
pub fn clamp_round<M: Math>(value: M, min: i128, max: i128) -> i128 {
    value.round_to_i128().clamp(min, max)
}

#[inline]
#[track_caller]
pub fn assert_width(bits: u32, max: u32) {
    assert!(
        (2..=max).contains(&bits),
        "bit width must be in 2..={max}, got {bits}"
    );
}

#[test]
fn code_ranges() {
    assert_eq!(unsigned_max(2), 3);
    assert_eq!(unsigned_max(8), 255);
    assert_eq!(unsigned_max(32), u32::MAX as u64);
    assert_eq!(unsigned_max(64), u64::MAX);

    assert_eq!(signed_max(2), 1);
    assert_eq!(signed_min(2), -2);
    assert_eq!(signed_max(8), 127);
    assert_eq!(signed_min(8), -128);
    assert_eq!(signed_max(64), i64::MAX);
    assert_eq!(signed_min(64), i64::MIN);
}

#[test]
fn clamps_overshoot() {
    assert_eq!(clamp_round(255.4_f32, 0, 255), 255);
    assert_eq!(clamp_round(255.6_f32, 0, 255), 255);
    assert_eq!(clamp_round(-0.7_f64, 0, 255), 0);
    assert_eq!(clamp_round(f64::NAN, -128, 127), 0);

    let (min, max) = (i64::MIN as i128, i64::MAX as i128);
    assert_eq!(clamp_round(9.3e18_f64, min, max), max);
}

#[test]
#[should_panic(expected = "bit width must be in 2..=32, got 1")]
fn rejects_one_bit() {
    assert_width(1, 32);
}

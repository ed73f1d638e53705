use crate::float::{Float, Math};

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("bit width {bits} is outside 2..={max}")]
    InvalidWidth { bits: u32, max: u32 },
    #[error("value {value} is outside [{min}, {max}]")]
    OutOfDomain { value: f64, min: f64, max: f64 },
    #[error("value is not a number")]
    NotANumber,
    #[error("code {code} does not fit in {bits} bits")]
    CodeOutOfRange { code: i128, bits: u32 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub(crate) fn validate_width(bits: u32, max: u32) -> Result<()> {
    if (2..=max).contains(&bits) {
        Ok(())
    } else {
        log::trace!("rejecting bit width {bits}, expected 2..={max}");
        Err(Error::InvalidWidth { bits, max })
    }
}

pub(crate) fn validate_value<F: Float>(value: F, min: F::Math, max: F::Math) -> Result<F> {
    let wide = value.widen();

    if wide.is_nan() {
        log::trace!("rejecting NaN");
        return Err(Error::NotANumber);
    }

    if wide < min || wide > max {
        log::trace!("rejecting {value:?}, outside [{min:?}, {max:?}]");
        return Err(Error::OutOfDomain {
            value: wide.to_f64(),
            min: min.to_f64(),
            max: max.to_f64(),
        });
    }

    Ok(value)
}

pub(crate) fn validate_code(code: i128, min: i128, max: i128, bits: u32) -> Result<()> {
    if (min..=max).contains(&code) {
        Ok(())
    } else {
        log::trace!("rejecting code {code}, outside {min}..={max}");
        Err(Error::CodeOutOfRange { code, bits })
    }
}

#[test]
fn messages() {
    let err = Error::InvalidWidth { bits: 1, max: 32 };
    assert_eq!(err.to_string(), "bit width 1 is outside 2..=32");

    let err = Error::OutOfDomain { value: 1.5, min: -1.0, max: 1.0 };
    assert_eq!(err.to_string(), "value 1.5 is outside [-1, 1]");

    let err = Error::CodeOutOfRange { code: 256, bits: 8 };
    assert_eq!(err.to_string(), "code 256 does not fit in 8 bits");
}

#[test]
fn rejects_infinity_and_nan() {
    let (min, max) = (0.0_f32, 1.0_f32);
    assert_eq!(validate_value(f32::NAN, min, max), Err(Error::NotANumber));
    assert!(matches!(
        validate_value(f32::INFINITY, min, max),
        Err(Error::OutOfDomain { .. })
    ));
    assert_eq!(validate_value(1.0_f32, min, max), Ok(1.0));
}

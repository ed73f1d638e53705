use half::f16;
use normq::{Codec, Float, Format};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn formats() -> impl Iterator<Item = Format> {
    [Codec::Unsigned, Codec::SignedWithZero, Codec::SignedWithoutZero]
        .into_iter()
        .flat_map(|codec| {
            (2..=codec.max_bits()).filter_map(move |bits| Format::new(codec, bits).ok())
        })
}

/// Evenly spaced values covering the domain of `format`, ends included.
fn sweep(format: Format) -> impl Iterator<Item = f64> {
    let (min, max) = format.domain().into_inner();
    (0..=1000).map(move |i| min + (max - min) * i as f64 / 1000.0)
}

fn error_bound<F: Float + Into<f64>>(format: Format, from: fn(f64) -> F, epsilon: f64) {
    for value in sweep(format) {
        let value = from(value);
        let decoded: F = format.decode(format.encode(value));
        let error = (Into::<f64>::into(decoded) - Into::<f64>::into(value)).abs();

        assert!(
            error <= format.step() + epsilon,
            "{format:?}: {value:?} decoded to {decoded:?}",
        );
    }
}

#[test]
fn every_format_is_constructible() {
    init_logger();

    assert_eq!(formats().count(), 31 + 63 + 63);
}

#[test]
fn exact_ends() {
    init_logger();

    for format in formats() {
        let (min, max) = format.domain().into_inner();
        for value in [min, max] {
            let codes = [
                format.encode(value),
                format.encode(value as f32),
                format.encode(f16::from_f64(value)),
            ];

            assert_eq!(format.decode::<f64>(codes[0]), value, "{format:?}");
            assert_eq!(format.decode::<f32>(codes[1]), value as f32, "{format:?}");
            assert_eq!(format.decode::<f16>(codes[2]).to_f64(), value, "{format:?}");

            if format.codec() != Codec::Unsigned {
                for code in codes {
                    assert_ne!(code, 0, "{format:?}: {value} encoded to zero");
                }
            }
        }

        // With an exact zero -1 lands on the negated largest code, leaving
        // the most negative code unused. Past 54 bits `2^(W-1) - 1` rounds up
        // to a power of two in f64 and -1 reaches the most negative code.
        let lowest = match format.codec() {
            Codec::SignedWithZero if format.bits() <= 54 => -format.max_code(),
            _ => format.min_code(),
        };
        assert_eq!(format.encode(min), lowest, "{format:?}");
        assert_eq!(format.encode(max), format.max_code(), "{format:?}");
    }
}

#[test]
fn exact_zero() {
    init_logger();

    for format in formats() {
        match format.codec() {
            Codec::Unsigned | Codec::SignedWithZero => {
                assert_eq!(format.encode(0.0_f32), 0);
                assert_eq!(format.encode(0.0_f64), 0);
                assert_eq!(format.decode::<f32>(0).to_bits(), 0.0_f32.to_bits());
                assert_eq!(format.decode::<f64>(0).to_bits(), 0.0_f64.to_bits());
            }
            Codec::SignedWithoutZero => {
                let code = format.encode(0.0_f64);
                assert_ne!(format.decode::<f64>(code), 0.0, "{format:?}");
                assert_ne!(format.decode::<f64>(code + 1), 0.0, "{format:?}");
            }
        }
    }
}

#[test]
fn monotonic() {
    init_logger();

    for format in formats() {
        let codes: Vec<i64> = sweep(format).map(|value| format.encode(value)).collect();
        assert!(codes.windows(2).all(|pair| pair[0] <= pair[1]), "{format:?}");

        let codes: Vec<i64> = sweep(format).map(|value| format.encode(value as f32)).collect();
        assert!(codes.windows(2).all(|pair| pair[0] <= pair[1]), "{format:?}");
    }
}

#[test]
fn within_one_step() {
    init_logger();

    for format in formats() {
        error_bound::<f64>(format, |value| value, 4.0 * f64::EPSILON);
        error_bound::<f32>(format, |value| value as f32, 4.0 * f32::EPSILON as f64);

        if format.bits() <= 11 {
            error_bound::<f16>(format, f16::from_f64, 4.0 * f16::EPSILON.to_f64());
        }
    }
}

#[test]
fn two_bits() -> eyre::Result<()> {
    init_logger();

    let unsigned = Format::new(Codec::Unsigned, 2)?;
    assert_eq!(unsigned.decode::<f64>(0), 0.0);
    assert_eq!(unsigned.decode::<f64>(3), 1.0);
    assert_eq!(unsigned.encode(0.0_f64), 0);
    assert_eq!(unsigned.encode(1.0_f64), 3);

    let without_zero = Format::new(Codec::SignedWithoutZero, 2)?;
    let decoded: Vec<f64> = (-2..=1).map(|code| without_zero.decode(code)).collect();
    assert_eq!(decoded, [-1.0, -1.0 / 3.0, 1.0 / 3.0, 1.0]);

    Ok(())
}

#[test]
fn outside_domain_clamps() -> eyre::Result<()> {
    init_logger();

    let format = Format::new(Codec::SignedWithZero, 10)?;
    assert_eq!(format.encode(1.5_f32), format.max_code());
    assert_eq!(format.encode(-7.0_f32), format.min_code());
    assert_eq!(format.encode(-7.0_f32), -512);
    assert!(format.try_encode(1.5_f32).is_err());
    assert!(format.try_encode(f32::NAN).is_err());

    Ok(())
}

#[test]
fn format_serde() -> eyre::Result<()> {
    init_logger();

    let format = Format::new(Codec::SignedWithoutZero, 12)?;
    let bytes = bincode::serialize(&format)?;
    assert_eq!(bincode::deserialize::<Format>(&bytes)?, format);

    let bytes = bincode::serialize(&(Codec::SignedWithZero, 65_u32))?;
    let err = bincode::deserialize::<Format>(&bytes).unwrap_err();
    assert!(err.to_string().contains("bit width 65"), "{err}");

    Ok(())
}

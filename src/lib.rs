//! Quantization of normalized floating point values to fixed width integer
//! codes and back.
//!
//! Three conventions are supported, each for any width from 2 bits up to
//! the width of the code integer:
//!
//! - [`unorm`]: `[0, 1]` to unsigned codes of up to 32 bits.
//! - [`snorm`]: `[-1, 1]` to signed codes of up to 64 bits, with `0.0`
//!   mapping to code `0`.
//! - [`snorm_no_zero`]: `[-1, 1]` to signed codes of up to 64 bits, using
//!   every code symmetrically so `0.0` is never exactly representable.
//!
//! In all three, `-1.0`, `0.0` and `1.0` (where representable) survive a
//! round trip bit for bit. Rounding is half away from zero.
//!
//! The plain `encode`/`decode` functions clamp out of range input and panic on
//! a width outside the supported range. The `try_` variants reject both with
//! an [`Error`]. [`Unorm`], [`Snorm`] and [`SnormNoZero`] fix the width at
//! compile time, and [`Format`] carries a width chosen at runtime.
//!
//! ```
//! assert_eq!(normq::unsigned_encode(1.0_f32, 8), 255);
//! assert_eq!(normq::unsigned_decode::<f32>(255, 8), 1.0);
//! assert_eq!(normq::signed_with_zero_encode(0.0_f64, 8), 0);
//! assert_eq!(normq::signed_without_zero_encode(-1.0_f32, 8), -128);
//! assert_eq!(normq::signed_without_zero_decode::<f32>(-128, 8), -1.0);
//! ```

mod code;
mod error;
mod format;
mod round;
mod width;

pub mod float;
pub mod snorm;
pub mod snorm_no_zero;
pub mod unorm;

pub use code::{Snorm, SnormNoZero, Unorm};
pub use error::{Error, Result};
pub use float::Float;
pub use format::{Codec, Format};
pub use round::clamp_round;
pub use width::{Bits, SignedStorage, SignedWidth, UnsignedStorage, UnsignedWidth};

pub use snorm::{decode as signed_with_zero_decode, encode as signed_with_zero_encode};
pub use snorm_no_zero::{
    decode as signed_without_zero_decode, encode as signed_without_zero_encode,
};
pub use unorm::{decode as unsigned_decode, encode as unsigned_encode};

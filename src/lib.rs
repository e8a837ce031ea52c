//! # qfft - Fixed-point complex IFFT for 16-bit audio pipelines
//!
//! An in-place inverse FFT over interleaved `i16` real/imaginary samples, built for
//! speech and audio processing chains (echo control, noise suppression, resampling)
//! that run on integer-only hardware.
//!
//! ## Features
//!
//! - **🚀 Zero-allocation, in-place API** suitable for MCU/embedded systems
//! - **🔧 Radix-2 decimation-in-time** butterfly network, up to 1024 complex points
//! - **📏 Dynamic per-stage scaling** with the cumulative shift reported to the caller
//! - **🎚️ Two precision modes**: Q15 truncation or 14 extra guard bits with rounding
//! - **📱 Parallel frame batching** (optional)
//!
//! ## Cargo Features
//!
//! - `std` (default): `std::error::Error` impls and [`ifft::new_ifft_impl`]
//! - `parallel`: Transform batches of frames with Rayon
//! - `verbose-logging`: Emit per-stage records through the `log` facade
//! - `internal-tests`: Enable the in-crate property test suites
//!
//! ## Data layout
//!
//! A transform of `N = 2^stages` points works on `2 * N` samples laid out as
//! `[re0, im0, re1, im1, ...]`. The butterfly network consumes its input in
//! bit-reversed order; run [`spl::complex_bit_reverse`] first when the spectrum is
//! in natural order.
//!
//! ```
//! use qfft::{complex_bit_reverse, complex_ifft, IfftMode};
//!
//! // A single bin at k = 1 becomes a complex exponential.
//! let mut frfi = [0i16; 16];
//! frfi[2] = 8192;
//! complex_bit_reverse(&mut frfi, 3).unwrap();
//! let scale = complex_ifft(&mut frfi, 3, IfftMode::HighAccuracy).unwrap();
//! assert_eq!(scale, 0);
//! assert_eq!(frfi[0], 8192);
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or https://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or https://opensource.org/licenses/MIT)
//!
//! at your option.

#![no_std]
#[cfg(any(feature = "std", test))]
extern crate std;

#[cfg(feature = "verbose-logging")]
macro_rules! qfft_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}
#[cfg(not(feature = "verbose-logging"))]
macro_rules! qfft_trace {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "verbose-logging")]
macro_rules! qfft_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}
#[cfg(not(feature = "verbose-logging"))]
macro_rules! qfft_debug {
    ($($arg:tt)*) => {};
}

/// Fixed-point inverse FFT engine
///
/// The transform entry points, precision modes, error type and backend trait.
pub mod ifft;

/// Per-stage butterfly kernels for both precision modes.
pub mod ifft_kernels;

/// Q15 sine table shared by all transforms.
pub mod table;

/// Fixed-point vector helpers
///
/// Peak detection and bit-reversal reordering used around the transform.
pub mod spl;

/// Frame batching, optionally parallel.
pub mod batch;

pub use ifft::{complex_ifft, complex_ifft_raw, FixedIfft, IfftError, IfftImpl, IfftMode};
pub use spl::{complex_bit_reverse, max_abs_value_w16};
pub use table::{SinTable, SIN_TABLE_1024};

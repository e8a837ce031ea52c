//! Fixed-point inverse Fast Fourier Transform.
//!
//! This module implements an in-place, iterative radix-2 decimation-in-time IFFT over
//! interleaved `i16` samples. Before every stage the whole buffer is scanned for its
//! peak magnitude and, when the next stage could overflow 16 bits, all outputs of that
//! stage are shifted right by one or two bits. The total number of shifts is returned
//! so callers can bring the result back to a known magnitude.
//!
//! Two numeric policies are available through [`IfftMode`]; they share the butterfly
//! ordering but not the rounding, see [`crate::ifft_kernels`].

#[cfg(feature = "std")]
use std::boxed::Box;

use crate::ifft_kernels::{butterfly_stage_high, butterfly_stage_low};
use crate::spl::max_abs_value_w16;
use crate::table::{SinTable, SIN_TABLE_1024, TABLE_LEN};

/// Largest supported stage count; `2^MAX_STAGES` equals the sine table length.
pub const MAX_STAGES: usize = 10;

/// Largest supported transform length in complex samples.
pub const MAX_POINTS: usize = 1 << MAX_STAGES;

/// Peak above which a stage shifts its outputs right by one bit.
pub const SCALE_THRESHOLD_1: i16 = 13573;

/// Peak above which a stage shifts its outputs right by a second bit.
pub const SCALE_THRESHOLD_2: i16 = 27146;

const _: () = assert!(MAX_POINTS == TABLE_LEN);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IfftError {
    /// `2^stages` exceeds the resolution of the sine table.
    SizeExceeded,
    /// The buffer does not hold exactly `2 * 2^stages` samples, or paired buffers
    /// disagree in length.
    MismatchedLengths,
}

impl IfftError {
    /// Integer status used by callers that speak the `scale | -1` convention.
    pub const fn status_code(&self) -> i32 {
        -1
    }
}

impl core::fmt::Display for IfftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            IfftError::SizeExceeded => {
                write!(f, "transform size exceeds {} points", MAX_POINTS)
            }
            IfftError::MismatchedLengths => write!(f, "buffer length does not match stage count"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for IfftError {}

/// Numeric policy of the butterfly network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IfftMode {
    /// Q15 products truncated right after every multiply. Cheapest, least accurate.
    LowComplexity,
    /// 14 guard bits carried through each butterfly and rounded away at write-back.
    HighAccuracy,
}

impl IfftMode {
    /// Map the integer mode flag: `0` selects [`IfftMode::LowComplexity`] and every
    /// other value selects [`IfftMode::HighAccuracy`].
    pub const fn from_raw(mode: i32) -> Self {
        if mode == 0 {
            IfftMode::LowComplexity
        } else {
            IfftMode::HighAccuracy
        }
    }

    pub const fn as_raw(self) -> i32 {
        match self {
            IfftMode::LowComplexity => 0,
            IfftMode::HighAccuracy => 1,
        }
    }
}

impl From<i32> for IfftMode {
    fn from(mode: i32) -> Self {
        Self::from_raw(mode)
    }
}

/// Number of complex points for `stages`, validated against the buffer length.
pub(crate) fn checked_points(len: usize, stages: usize) -> Result<usize, IfftError> {
    if stages > MAX_STAGES {
        qfft_debug!("rejecting {} stages, limit is {}", stages, MAX_STAGES);
        return Err(IfftError::SizeExceeded);
    }
    let n = 1usize << stages;
    if len != 2 * n {
        qfft_debug!("buffer holds {} samples, {} stages need {}", len, stages, 2 * n);
        return Err(IfftError::MismatchedLengths);
    }
    Ok(n)
}

/// Right shift a stage applies for the observed peak magnitude.
#[inline]
pub fn dynamic_shift(peak: i16) -> u32 {
    let mut shift = 0;
    if peak > SCALE_THRESHOLD_1 {
        shift += 1;
    }
    if peak > SCALE_THRESHOLD_2 {
        shift += 1;
    }
    shift
}

/// A complex inverse FFT backend over interleaved `i16` buffers.
///
/// Implementors transform `2 * 2^stages` samples in place and return the cumulative
/// right shift applied to the data. Backends that do not scale dynamically return 0.
pub trait IfftImpl {
    fn ifft(&self, frfi: &mut [i16], stages: usize, mode: IfftMode) -> Result<u32, IfftError>;

    /// Transform `input` into `output`, leaving `input` untouched.
    fn ifft_out_of_place(
        &self,
        input: &[i16],
        output: &mut [i16],
        stages: usize,
        mode: IfftMode,
    ) -> Result<u32, IfftError> {
        if stages > MAX_STAGES {
            return Err(IfftError::SizeExceeded);
        }
        if input.len() != output.len() {
            return Err(IfftError::MismatchedLengths);
        }
        checked_points(input.len(), stages)?;
        output.copy_from_slice(input);
        self.ifft(output, stages, mode)
    }
}

/// Portable fixed-point IFFT engine.
///
/// The engine only borrows its sine table, so it is `Copy` and can be shared freely
/// between threads.
#[derive(Debug, Clone, Copy)]
pub struct FixedIfft<'a> {
    table: &'a SinTable,
}

impl Default for FixedIfft<'static> {
    fn default() -> Self {
        Self::with_table(&SIN_TABLE_1024)
    }
}

impl<'a> FixedIfft<'a> {
    pub const fn with_table(table: &'a SinTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a SinTable {
        self.table
    }

    /// Transform `frfi` in place and return the total right shift applied.
    ///
    /// On error the buffer is left exactly as it was.
    pub fn ifft(&self, frfi: &mut [i16], stages: usize, mode: IfftMode) -> Result<u32, IfftError> {
        let n = checked_points(frfi.len(), stages)?;
        let mut scale = 0;

        // Stage `s` combines spans of `l = 2^s` and reads every `2^k`-th table entry,
        // so the angle step is always 2π / (2l).
        for stage in 0..stages {
            let l = 1usize << stage;
            let k = (MAX_STAGES - 1 - stage) as u32;

            let peak = max_abs_value_w16(frfi);
            let shift = dynamic_shift(peak);
            scale += shift;
            qfft_trace!(
                "stage {}/{}: span {}, peak {}, shift {}",
                stage + 1,
                stages,
                l,
                peak,
                shift
            );

            match mode {
                IfftMode::LowComplexity => butterfly_stage_low(frfi, n, l, k, shift, self.table),
                IfftMode::HighAccuracy => butterfly_stage_high(frfi, n, l, k, shift, self.table),
            }
        }

        Ok(scale)
    }
}

impl IfftImpl for FixedIfft<'_> {
    fn ifft(&self, frfi: &mut [i16], stages: usize, mode: IfftMode) -> Result<u32, IfftError> {
        FixedIfft::ifft(self, frfi, stages, mode)
    }
}

/// Transform `frfi` in place with the shared [`SIN_TABLE_1024`].
///
/// `frfi` must hold `2 * 2^stages` interleaved samples in bit-reversed order. Returns
/// the number of bits the data was shifted right, between 0 and `2 * stages`.
pub fn complex_ifft(frfi: &mut [i16], stages: usize, mode: IfftMode) -> Result<u32, IfftError> {
    FixedIfft::default().ifft(frfi, stages, mode)
}

/// Integer-flag variant of [`complex_ifft`]: returns the scale, or `-1` on failure.
///
/// Negative stage counts are rejected like oversized ones. Any non-zero `mode`
/// selects high accuracy.
pub fn complex_ifft_raw(frfi: &mut [i16], stages: i32, mode: i32) -> i32 {
    let result = usize::try_from(stages)
        .map_err(|_| IfftError::SizeExceeded)
        .and_then(|stages| complex_ifft(frfi, stages, IfftMode::from_raw(mode)));
    match result {
        Ok(scale) => scale as i32,
        Err(e) => e.status_code(),
    }
}

/// Returns the IFFT backend selected for this build.
///
/// Platform-specific backends register here; the portable engine is the fallback
/// and currently the only implementation.
#[cfg(feature = "std")]
pub fn new_ifft_impl() -> Box<dyn IfftImpl + Send + Sync> {
    Box::new(FixedIfft::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec;
    use std::vec::Vec;

    fn ramp(stages: usize) -> Vec<i16> {
        (0..2 << stages).map(|i| ((i * 37) % 400) as i16 - 200).collect()
    }

    #[test]
    fn test_zero_stages_is_identity() {
        let mut frfi = [1234i16, -567];
        for mode in [IfftMode::LowComplexity, IfftMode::HighAccuracy] {
            assert_eq!(complex_ifft(&mut frfi, 0, mode), Ok(0));
            assert_eq!(frfi, [1234, -567]);
        }
    }

    #[test]
    fn test_size_exceeded_leaves_buffer() {
        let mut frfi = vec![i16::MAX; 2 * 2048];
        let orig = frfi.clone();
        assert_eq!(
            complex_ifft(&mut frfi, 11, IfftMode::HighAccuracy),
            Err(IfftError::SizeExceeded)
        );
        assert_eq!(frfi, orig);
    }

    #[test]
    fn test_mismatched_length() {
        let mut frfi = vec![0i16; 15];
        assert_eq!(
            complex_ifft(&mut frfi, 3, IfftMode::LowComplexity),
            Err(IfftError::MismatchedLengths)
        );
        let mut frfi = vec![0i16; 32];
        assert_eq!(
            complex_ifft(&mut frfi, 3, IfftMode::LowComplexity),
            Err(IfftError::MismatchedLengths)
        );
    }

    #[test]
    fn test_huge_stage_count_does_not_overflow_shift() {
        let mut frfi = [0i16; 2];
        assert_eq!(
            complex_ifft(&mut frfi, 200, IfftMode::LowComplexity),
            Err(IfftError::SizeExceeded)
        );
    }

    #[test]
    fn test_max_stages_completes() {
        for mode in [IfftMode::LowComplexity, IfftMode::HighAccuracy] {
            let mut frfi = ramp(MAX_STAGES);
            let scale = complex_ifft(&mut frfi, MAX_STAGES, mode).unwrap();
            assert!(scale as usize <= 2 * MAX_STAGES);
            assert_eq!(frfi.len(), 2 * MAX_POINTS);
        }
    }

    #[test]
    fn test_zero_input_stays_zero() {
        let mut frfi = vec![0i16; 2 * 64];
        assert_eq!(complex_ifft(&mut frfi, 6, IfftMode::HighAccuracy), Ok(0));
        assert!(frfi.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_dynamic_shift_thresholds() {
        assert_eq!(dynamic_shift(0), 0);
        assert_eq!(dynamic_shift(SCALE_THRESHOLD_1), 0);
        assert_eq!(dynamic_shift(SCALE_THRESHOLD_1 + 1), 1);
        assert_eq!(dynamic_shift(SCALE_THRESHOLD_2), 1);
        assert_eq!(dynamic_shift(SCALE_THRESHOLD_2 + 1), 2);
        assert_eq!(dynamic_shift(i16::MAX), 2);
    }

    #[test]
    fn test_mode_from_raw_is_permissive() {
        assert_eq!(IfftMode::from_raw(0), IfftMode::LowComplexity);
        assert_eq!(IfftMode::from_raw(1), IfftMode::HighAccuracy);
        assert_eq!(IfftMode::from(7), IfftMode::HighAccuracy);
        assert_eq!(IfftMode::from(-1), IfftMode::HighAccuracy);
        assert_eq!(IfftMode::LowComplexity.as_raw(), 0);
    }

    #[test]
    fn test_raw_entry_point_matches_typed() {
        let mut typed = ramp(5);
        let mut raw = typed.clone();
        let scale = complex_ifft(&mut typed, 5, IfftMode::HighAccuracy).unwrap();
        assert_eq!(complex_ifft_raw(&mut raw, 5, 3), scale as i32);
        assert_eq!(raw, typed);

        let mut frfi = vec![0i16; 2];
        assert_eq!(complex_ifft_raw(&mut frfi, -1, 0), -1);
        assert_eq!(complex_ifft_raw(&mut frfi, 11, 0), -1);
    }

    #[test]
    fn test_out_of_place_keeps_input() {
        let engine = FixedIfft::default();
        let input = ramp(4);
        let mut output = vec![0i16; input.len()];
        let mut in_place = input.clone();
        let s1 = engine
            .ifft_out_of_place(&input, &mut output, 4, IfftMode::LowComplexity)
            .unwrap();
        let s2 = engine.ifft(&mut in_place, 4, IfftMode::LowComplexity).unwrap();
        assert_eq!(s1, s2);
        assert_eq!(output, in_place);
        assert_eq!(input, ramp(4));
    }

    #[test]
    fn test_out_of_place_errors() {
        let engine = FixedIfft::default();
        let input = vec![0i16; 16];
        let mut short = vec![7i16; 8];
        assert_eq!(
            engine.ifft_out_of_place(&input, &mut short, 3, IfftMode::HighAccuracy),
            Err(IfftError::MismatchedLengths)
        );
        let mut output = vec![7i16; 16];
        assert_eq!(
            engine.ifft_out_of_place(&input, &mut output, 11, IfftMode::HighAccuracy),
            Err(IfftError::SizeExceeded)
        );
        assert!(output.iter().all(|&v| v == 7));
    }

    #[test]
    fn test_custom_table_is_used() {
        // A table of zeros kills every rotated operand: out_i = out_j = x_i.
        static ZEROS: SinTable = SinTable::new([0; TABLE_LEN]);
        let engine = FixedIfft::with_table(&ZEROS);
        let mut frfi = [100i16, 50, 3, 4];
        assert_eq!(engine.ifft(&mut frfi, 1, IfftMode::LowComplexity), Ok(0));
        assert_eq!(frfi, [100, 50, 100, 50]);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_boxed_backend() {
        let backend = new_ifft_impl();
        let mut a = ramp(6);
        let mut b = a.clone();
        let s = backend.ifft(&mut a, 6, IfftMode::LowComplexity).unwrap();
        assert_eq!(Ok(s), complex_ifft(&mut b, 6, IfftMode::LowComplexity));
        assert_eq!(a, b);
    }

    #[test]
    fn test_error_display() {
        use std::string::ToString;
        assert_eq!(
            IfftError::SizeExceeded.to_string(),
            "transform size exceeds 1024 points"
        );
        assert_eq!(IfftError::MismatchedLengths.status_code(), -1);
    }
}

#[cfg(all(feature = "internal-tests", test))]
mod coverage_tests {
    use super::*;
    use proptest::prelude::*;
    use std::vec::Vec;

    proptest! {
        #[test]
        fn prop_scale_is_bounded(stages in 0usize..=MAX_STAGES, high in any::<bool>(), seed in any::<u64>()) {
            use rand::rngs::StdRng;
            use rand::{Rng, SeedableRng};
            let mut rng = StdRng::seed_from_u64(seed);
            let mut frfi: Vec<i16> = (0..2 << stages).map(|_| rng.gen()).collect();
            let mode = if high { IfftMode::HighAccuracy } else { IfftMode::LowComplexity };
            let scale = complex_ifft(&mut frfi, stages, mode).unwrap();
            prop_assert!(scale as usize <= 2 * stages);
            prop_assert_eq!(frfi.len(), 2 << stages);
        }

        #[test]
        fn prop_oversized_stages_fail(stages in (MAX_STAGES + 1)..64usize) {
            let mut frfi = [5i16; 4];
            prop_assert_eq!(complex_ifft(&mut frfi, stages, IfftMode::LowComplexity), Err(IfftError::SizeExceeded));
            prop_assert_eq!(frfi, [5i16; 4]);
        }
    }
}

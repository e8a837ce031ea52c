//! Transform many equally sized frames stored back to back.
//!
//! Frames are independent, so with the `parallel` feature they are spread over
//! Rayon workers once there are enough of them to pay for the fork. The threshold
//! comes from [`set_parallel_min_frames`], then the `QFFT_PAR_MIN_FRAMES`
//! environment variable, then [`DEFAULT_PARALLEL_MIN_FRAMES`].

#[cfg(feature = "parallel")]
use core::sync::atomic::{AtomicUsize, Ordering};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::OnceLock;

use crate::ifft::{FixedIfft, IfftError, IfftMode, MAX_STAGES};

/// Frame count at which batches go parallel when nothing overrides it.
pub const DEFAULT_PARALLEL_MIN_FRAMES: usize = 4;

/// `0` means no override.
#[cfg(feature = "parallel")]
static PARALLEL_MIN_FRAMES_OVERRIDE: AtomicUsize = AtomicUsize::new(0);
#[cfg(feature = "parallel")]
static PARALLEL_MIN_FRAMES_ENV: OnceLock<usize> = OnceLock::new();

#[cfg(feature = "parallel")]
/// Set the minimum number of frames a batch needs before it is processed in
/// parallel.
///
/// Passing `0` reverts to the environment variable or built-in default.
pub fn set_parallel_min_frames(frames: usize) {
    PARALLEL_MIN_FRAMES_OVERRIDE.store(frames, Ordering::Relaxed);
}

#[cfg(feature = "parallel")]
/// Current minimum frame count for parallel batches.
pub fn parallel_min_frames() -> usize {
    let override_frames = PARALLEL_MIN_FRAMES_OVERRIDE.load(Ordering::Relaxed);
    if override_frames != 0 {
        return override_frames;
    }
    *PARALLEL_MIN_FRAMES_ENV.get_or_init(|| {
        std::env::var("QFFT_PAR_MIN_FRAMES")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&v| v != 0)
            .unwrap_or(DEFAULT_PARALLEL_MIN_FRAMES)
    })
}

impl FixedIfft<'_> {
    /// Transform every `2 * 2^stages`-sample frame of `frames` in place.
    ///
    /// `scales[f]` receives the scale of frame `f`, so `scales.len()` must equal the
    /// number of frames. Nothing is modified when the sizes do not line up.
    ///
    /// # Examples
    /// ```
    /// use qfft::{FixedIfft, IfftMode};
    /// let mut frames = vec![0i16; 3 * 2 * 16];
    /// frames[0] = 100;
    /// let mut scales = [0u32; 3];
    /// FixedIfft::default()
    ///     .ifft_frames(&mut frames, 4, IfftMode::HighAccuracy, &mut scales)
    ///     .unwrap();
    /// assert_eq!(frames[2], 100);
    /// ```
    pub fn ifft_frames(
        &self,
        frames: &mut [i16],
        stages: usize,
        mode: IfftMode,
        scales: &mut [u32],
    ) -> Result<(), IfftError> {
        if stages > MAX_STAGES {
            return Err(IfftError::SizeExceeded);
        }
        let frame_len = 2usize << stages;
        if frames.len() % frame_len != 0 || frames.len() / frame_len != scales.len() {
            qfft_debug!(
                "{} samples do not split into {} frames of {}",
                frames.len(),
                scales.len(),
                frame_len
            );
            return Err(IfftError::MismatchedLengths);
        }

        #[cfg(feature = "parallel")]
        {
            if scales.len() >= parallel_min_frames() {
                qfft_trace!("transforming {} frames in parallel", scales.len());
                return frames
                    .par_chunks_mut(frame_len)
                    .zip(scales.par_iter_mut())
                    .try_for_each(|(frame, scale)| {
                        *scale = self.ifft(frame, stages, mode)?;
                        Ok(())
                    });
            }
        }

        for (frame, scale) in frames.chunks_mut(frame_len).zip(scales.iter_mut()) {
            *scale = self.ifft(frame, stages, mode)?;
        }
        Ok(())
    }
}

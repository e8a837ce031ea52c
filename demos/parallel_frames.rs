//! Transform a block of frames with Rayon and compare against the serial path.
use std::time::Instant;

use qfft::batch::set_parallel_min_frames;
use qfft::{FixedIfft, IfftMode};

fn main() {
    const STAGES: usize = 9;
    const FRAMES: usize = 512;
    let frame_len = 2 << STAGES;

    let input: Vec<i16> = (0..FRAMES * frame_len)
        .map(|i| (((i * 104_729) % 40_001) as i32 - 20_000) as i16)
        .collect();
    let engine = FixedIfft::default();

    for (label, min_frames) in [("serial", usize::MAX), ("parallel", 1)] {
        set_parallel_min_frames(min_frames);
        let mut frames = input.clone();
        let mut scales = vec![0u32; FRAMES];
        let start = Instant::now();
        engine
            .ifft_frames(&mut frames, STAGES, IfftMode::HighAccuracy, &mut scales)
            .unwrap();
        println!(
            "{label:>8}: {:?} for {FRAMES} frames, max scale {}",
            start.elapsed(),
            scales.iter().max().copied().unwrap_or(0)
        );
    }
}

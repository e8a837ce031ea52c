//! Floating-point references shared by the integration tests.
#![allow(dead_code)]

use std::f64::consts::PI;

/// Forward DFT of interleaved `(re, im)` pairs, unnormalised.
pub fn dft(x: &[f64]) -> Vec<f64> {
    transform(x, -1.0)
}

/// Inverse DFT of interleaved `(re, im)` pairs, unnormalised.
pub fn idft(x: &[f64]) -> Vec<f64> {
    transform(x, 1.0)
}

fn transform(x: &[f64], sign: f64) -> Vec<f64> {
    let n = x.len() / 2;
    let mut out = vec![0.0; x.len()];
    for k in 0..n {
        let (mut sr, mut si) = (0.0, 0.0);
        for t in 0..n {
            let angle = sign * 2.0 * PI * ((k * t) % n) as f64 / n as f64;
            let (s, c) = angle.sin_cos();
            sr += x[2 * t] * c - x[2 * t + 1] * s;
            si += x[2 * t] * s + x[2 * t + 1] * c;
        }
        out[2 * k] = sr;
        out[2 * k + 1] = si;
    }
    out
}

pub fn to_f64(x: &[i16]) -> Vec<f64> {
    x.iter().map(|&v| v as f64).collect()
}

/// Largest absolute difference between the fixed-point output, undone by `scale`,
/// and the floating-point IDFT of the natural-order spectrum.
pub fn error_vs_reference(spectrum: &[i16], output: &[i16], scale: u32) -> f64 {
    let reference = idft(&to_f64(spectrum));
    let gain = (1u64 << scale) as f64;
    output
        .iter()
        .zip(reference.iter())
        .map(|(&a, &b)| (a as f64 - b / gain).abs())
        .fold(0.0, f64::max)
}

/// Deterministic time-domain test signal: two tones, a third on the imaginary rail
/// and a little broadband content.
pub fn test_signal(n: usize) -> Vec<f64> {
    let mut x = Vec::with_capacity(2 * n);
    for t in 0..n {
        let phase = 2.0 * PI * t as f64 / n as f64;
        let noise = ((t * 7919 + 13) % 2001) as f64 - 1000.0;
        x.push(12000.0 * (3.0 * phase).sin() + 6000.0 * (5.0 * phase + 0.3).cos());
        x.push(9000.0 * (7.0 * phase).cos() + noise);
    }
    x
}

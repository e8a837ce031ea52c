//! Synthesize a tone from a single spectral bin and undo the reported scale.
use qfft::{complex_bit_reverse, complex_ifft, IfftMode};

fn main() {
    const STAGES: usize = 6;
    const N: usize = 1 << STAGES;

    // Natural-order spectrum with energy in bin 3.
    let mut frfi = [0i16; 2 * N];
    frfi[2 * 3] = 30000;

    complex_bit_reverse(&mut frfi, STAGES).unwrap();
    let scale = complex_ifft(&mut frfi, STAGES, IfftMode::HighAccuracy).unwrap();
    println!("IFFT of {} points, scaled down by 2^{}", N, scale);

    for (t, pair) in frfi.chunks(2).take(8).enumerate() {
        let re = (pair[0] as i32) << scale;
        let im = (pair[1] as i32) << scale;
        println!("x[{t}] = {re:6} + {im:6}j");
    }
}

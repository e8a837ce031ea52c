//! Demonstrates enabling verbose logging for qfft.
use qfft::{complex_ifft, IfftMode};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .init();

    let mut frfi = vec![i16::MAX; 2 * 16];
    let scale = complex_ifft(&mut frfi, 4, IfftMode::LowComplexity).unwrap();
    log::info!("scale = {}", scale);

    let _ = complex_ifft(&mut frfi, 11, IfftMode::LowComplexity);
}

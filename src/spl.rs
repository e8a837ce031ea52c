//! Fixed-point vector helpers used around the IFFT.
//! no_std, allocation-free.

use crate::ifft::{checked_points, IfftError};

/// Largest absolute value in `vector`, saturated to `i16::MAX`.
///
/// `-32768` has no positive counterpart in 16 bits and is reported as `32767`.
/// An empty slice returns `0`.
pub fn max_abs_value_w16(vector: &[i16]) -> i16 {
    let peak = vector.iter().map(|v| v.unsigned_abs()).max().unwrap_or(0);
    peak.min(i16::MAX as u16) as i16
}

/// Reorder `2^stages` interleaved complex samples into bit-reversed index order.
///
/// This is the input permutation the decimation-in-time network in
/// [`crate::ifft`] expects. Applying it twice restores the original order.
pub fn complex_bit_reverse(frfi: &mut [i16], stages: usize) -> Result<(), IfftError> {
    let n = checked_points(frfi.len(), stages)?;
    if n < 2 {
        return Ok(());
    }
    let drop = usize::BITS - stages as u32;
    for m in 1..n - 1 {
        let mr = m.reverse_bits() >> drop;
        if mr > m {
            frfi.swap(2 * m, 2 * mr);
            frfi.swap(2 * m + 1, 2 * mr + 1);
        }
    }
    Ok(())
}

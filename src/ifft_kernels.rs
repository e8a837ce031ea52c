//! Butterfly stage kernels for the fixed-point IFFT.
//!
//! Both kernels walk the same index pattern: for every group `m < l` they load the
//! twiddle `(cos, sin)` at table index `m << k` and combine each pair `(i, i + l)`,
//! `i = m, m + 2l, ...`, into `x_i ± w·x_j`. They differ only in where bits are
//! dropped:
//!
//! - [`butterfly_stage_low`] truncates each `16 × 16` product back to Q15 at once,
//!   then truncates again by the stage shift.
//! - [`butterfly_stage_high`] keeps [`GUARD_BITS`] extra fractional bits until the
//!   final write-back and rounds at both shifts.
//!
//! All write-backs truncate to 16 bits without saturating.

use crate::table::SinTable;

/// Extra fractional bits carried by the high-accuracy kernel.
pub const GUARD_BITS: u32 = 14;

/// Rounding addend applied to the rotated operand before dropping `15 - GUARD_BITS`.
pub const PRODUCT_ROUND: i32 = 1;

/// Rounding addend for the final shift by `GUARD_BITS` with no stage shift.
pub const WRITE_ROUND: i32 = 1 << (GUARD_BITS - 1);

#[inline(always)]
fn mul_16_16(a: i16, b: i16) -> i32 {
    a as i32 * b as i32
}

/// `w·x` as raw 32-bit real and imaginary sums of products.
#[inline(always)]
fn rotate(wr: i16, wi: i16, xr: i16, xi: i16) -> (i32, i32) {
    let re = mul_16_16(wr, xr).wrapping_sub(mul_16_16(wi, xi));
    let im = mul_16_16(wr, xi).wrapping_add(mul_16_16(wi, xr));
    (re, im)
}

/// One stage of the low-complexity network over `n` complex points.
pub fn butterfly_stage_low(
    frfi: &mut [i16],
    n: usize,
    l: usize,
    k: u32,
    shift: u32,
    table: &SinTable,
) {
    debug_assert_eq!(frfi.len(), 2 * n);
    let istep = l << 1;
    for m in 0..l {
        let (wr, wi) = table.twiddle(m << k);
        for i in (m..n).step_by(istep) {
            let j = i + l;
            let (re, im) = rotate(wr, wi, frfi[2 * j], frfi[2 * j + 1]);
            let tr32 = re >> 15;
            let ti32 = im >> 15;

            let qr32 = frfi[2 * i] as i32;
            let qi32 = frfi[2 * i + 1] as i32;
            frfi[2 * j] = ((qr32 - tr32) >> shift) as i16;
            frfi[2 * j + 1] = ((qi32 - ti32) >> shift) as i16;
            frfi[2 * i] = ((qr32 + tr32) >> shift) as i16;
            frfi[2 * i + 1] = ((qi32 + ti32) >> shift) as i16;
        }
    }
}

/// One stage of the high-accuracy network over `n` complex points.
pub fn butterfly_stage_high(
    frfi: &mut [i16],
    n: usize,
    l: usize,
    k: u32,
    shift: u32,
    table: &SinTable,
) {
    debug_assert_eq!(frfi.len(), 2 * n);
    let istep = l << 1;
    let out_shift = shift + GUARD_BITS;
    let round2 = WRITE_ROUND << shift;
    for m in 0..l {
        let (wr, wi) = table.twiddle(m << k);
        for i in (m..n).step_by(istep) {
            let j = i + l;
            let (re, im) = rotate(wr, wi, frfi[2 * j], frfi[2 * j + 1]);
            let tr32 = re.wrapping_add(PRODUCT_ROUND) >> (15 - GUARD_BITS);
            let ti32 = im.wrapping_add(PRODUCT_ROUND) >> (15 - GUARD_BITS);

            let qr32 = (frfi[2 * i] as i32) << GUARD_BITS;
            let qi32 = (frfi[2 * i + 1] as i32) << GUARD_BITS;
            frfi[2 * j] = ((qr32 - tr32 + round2) >> out_shift) as i16;
            frfi[2 * j + 1] = ((qi32 - ti32 + round2) >> out_shift) as i16;
            frfi[2 * i] = ((qr32 + tr32 + round2) >> out_shift) as i16;
            frfi[2 * i + 1] = ((qi32 + ti32 + round2) >> out_shift) as i16;
        }
    }
}

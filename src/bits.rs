use crate::random::Random;

pub const BIT_WIDTH: u32 = 32;

/// Draw a 32-bit value whose bits are independently set with probability `p`.
///
/// Bit 0 is decided first. Always consumes exactly 32 draws from `rng`, so
/// the stream position after a call does not depend on `p`. `p` is not
/// validated; values outside [0, 1] yield all-zero or all-one bits.
pub fn sample(p: f64, rng: &mut Random) -> u32 {
    let mut value: u32 = 0;
    for i in 0..BIT_WIDTH {
        if rng.sample() < p {
            value |= 1 << i;
        }
    }
    value
}

/// Render `value` as 32 '0'/'1' characters in bit-index order, bit 0 first.
pub fn format(value: u32) -> String {
    let mut out = String::with_capacity(BIT_WIDTH as usize);
    for i in 0..BIT_WIDTH {
        out.push(if value >> i & 1 == 1 { '1' } else { '0' });
    }
    out
}

//! Scalar bit-pattern reinterpretation leaves for the portable backend.
//!
//! Every reinterpretation goes through an explicit byte copy
//! (`to_le_bytes`/`from_le_bytes`), never through pointer casts or unions.
//! Lane regrouping between 32-bit and 64-bit widths is
//! least-significant-lane-first: the low 32-bit lane occupies the low bytes
//! of the 64-bit lane, matching the register layout of the hardware
//! backends on both supported (little-endian) ISAs.

#[inline(always)]
pub(crate) fn f32_bits(x: f32) -> u32 {
    u32::from_le_bytes(x.to_le_bytes())
}

#[inline(always)]
pub(crate) fn f32_from_bits(b: u32) -> f32 {
    f32::from_le_bytes(b.to_le_bytes())
}

#[inline(always)]
pub(crate) fn f64_bits(x: f64) -> u64 {
    u64::from_le_bytes(x.to_le_bytes())
}

#[inline(always)]
pub(crate) fn f64_from_bits(b: u64) -> f64 {
    f64::from_le_bytes(b.to_le_bytes())
}

#[inline(always)]
pub(crate) fn i32_bits(x: i32) -> u32 {
    u32::from_le_bytes(x.to_le_bytes())
}

#[inline(always)]
pub(crate) fn i32_from_bits(b: u32) -> i32 {
    i32::from_le_bytes(b.to_le_bytes())
}

#[inline(always)]
pub(crate) fn i64_bits(x: i64) -> u64 {
    u64::from_le_bytes(x.to_le_bytes())
}

#[inline(always)]
pub(crate) fn i64_from_bits(b: u64) -> i64 {
    i64::from_le_bytes(b.to_le_bytes())
}

/// Split a 64-bit lane into its two 32-bit halves, low lane first.
#[inline(always)]
pub(crate) fn split_u64(x: u64) -> [u32; 2] {
    let b = x.to_le_bytes();
    [
        u32::from_le_bytes([b[0], b[1], b[2], b[3]]),
        u32::from_le_bytes([b[4], b[5], b[6], b[7]]),
    ]
}

/// Join two 32-bit lanes into one 64-bit lane; `lo` is lane 0.
#[inline(always)]
pub(crate) fn join_u64(lo: u32, hi: u32) -> u64 {
    let l = lo.to_le_bytes();
    let h = hi.to_le_bytes();
    u64::from_le_bytes([l[0], l[1], l[2], l[3], h[0], h[1], h[2], h[3]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_bits_round_trip() {
        for &x in &[0.0f32, -0.0, 1.5, f32::MIN_POSITIVE, f32::NAN, f32::INFINITY] {
            assert_eq!(f32_bits(f32_from_bits(f32_bits(x))), f32_bits(x));
        }
        assert_eq!(f32_bits(-0.0), 0x8000_0000);
        assert_eq!(f64_bits(-0.0), 0x8000_0000_0000_0000);
    }

    #[test]
    fn width_regroup_is_low_lane_first() {
        let x = 0x1122_3344_5566_7788u64;
        assert_eq!(split_u64(x), [0x5566_7788, 0x1122_3344]);
        assert_eq!(join_u64(0x5566_7788, 0x1122_3344), x);
        assert_eq!(i64_from_bits(i64_bits(-1)), -1);
        assert_eq!(i32_from_bits(i32_bits(i32::MIN)), i32::MIN);
    }
}

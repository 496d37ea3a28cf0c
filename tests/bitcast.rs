//! Bit-pattern reinterpretation between the four vector types: identity
//! round trips, sign-bit visibility, and the lane-regrouping rule when
//! mixing 32-bit and 64-bit widths (low 32-bit lane occupies the low bits
//! of the 64-bit lane).

use vec128::{F32x4, F64x2, I32x4, I64x2};

#[test]
fn f32_bits_are_exposed_exactly() {
    // 1.0f32 = 0x3F80_0000
    let v = F32x4::splat(1.0);
    assert_eq!(v.bitcast_i32x4().to_array(), [0x3F80_0000; 4]);

    // The sign bit of -0.0 survives; as an integer that is i32::MIN.
    let z = F32x4::splat(-0.0);
    assert_eq!(z.bitcast_i32x4().to_array(), [i32::MIN; 4]);
}

#[test]
fn f64_bits_are_exposed_exactly() {
    // 1.0f64 = 0x3FF0_0000_0000_0000
    let v = F64x2::splat(1.0);
    assert_eq!(v.bitcast_i64x2().to_array(), [0x3FF0_0000_0000_0000; 2]);
    assert_eq!(F64x2::splat(-0.0).bitcast_i64x2().to_array(), [i64::MIN; 2]);
}

#[test]
fn width_regrouping_is_low_lane_first() {
    let v = I32x4::from_array([0x0000_0001, 0x0000_0002, -1, 0]);
    let wide = v.bitcast_i64x2().to_array();
    // 32-bit lane 0 is the low half of 64-bit lane 0.
    assert_eq!(wide[0], 0x0000_0002_0000_0001);
    // Lane 2 (all-1s) is the low half of 64-bit lane 1.
    assert_eq!(wide[1], 0x0000_0000_FFFF_FFFFu64 as i64);

    let back = v.bitcast_i64x2().bitcast_i32x4();
    assert!(back.debug_eq(v));
}

#[test]
fn round_trips_preserve_all_bits() {
    let v = I32x4::from_array([i32::MIN, -1, 0, i32::MAX]);
    assert!(v.bitcast_f32x4().bitcast_i32x4().debug_eq(v));
    assert!(v.bitcast_f64x2().bitcast_i32x4().debug_eq(v));
    assert!(v
        .bitcast_i64x2()
        .bitcast_f64x2()
        .bitcast_f32x4()
        .bitcast_i32x4()
        .debug_eq(v));
}

#[test]
fn nan_payload_survives_bitcast() {
    // A quiet NaN with a distinctive payload; float arithmetic could
    // canonicalize it, reinterpretation must not.
    let bits = I32x4::splat(0x7FC0_1234);
    let f = bits.bitcast_f32x4();
    assert!(f.to_array()[0].is_nan());
    assert_eq!(f.bitcast_i32x4().to_array(), [0x7FC0_1234; 4]);
}

#[test]
fn bitcast_between_int_widths_is_involutive() {
    let v = I64x2::from_array([0x0102_0304_0506_0708, -42]);
    assert!(v.bitcast_i32x4().bitcast_i64x2().debug_eq(v));
    assert!(v.bitcast_f32x4().bitcast_i64x2().debug_eq(v));
}

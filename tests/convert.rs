//! Numeric (value-preserving) conversions: the three float→int rounding
//! modes, int→float, and the width-changing widen/narrow operations. All
//! inputs here are in range, where every backend agrees bit for bit;
//! out-of-range behavior is architecture-defined and deliberately untested.

use vec128::{F32x4, F64x2, I32x4, I64x2};

#[test]
fn nearest_rounds_ties_to_even() {
    let v = F32x4::from_array([0.5, 1.5, 2.5, -2.5]);
    assert_eq!(v.convert_nearest_i32x4().to_array(), [0, 2, 2, -2]);

    let d = F64x2::from_array([0.5, -1.5]);
    assert_eq!(d.convert_nearest_i64x2().to_array(), [0, -2]);
}

#[test]
fn truncate_rounds_toward_zero() {
    let v = F32x4::from_array([1.9, -1.9, 0.99, -0.99]);
    assert_eq!(v.convert_truncate_i32x4().to_array(), [1, -1, 0, 0]);

    let d = F64x2::from_array([2.75, -2.75]);
    assert_eq!(d.convert_truncate_i64x2().to_array(), [2, -2]);
}

#[test]
fn floor_rounds_toward_negative_infinity() {
    let v = F32x4::from_array([1.9, -1.1, -0.5, 2.0]);
    assert_eq!(v.convert_floor_i32x4().to_array(), [1, -2, -1, 2]);

    let d = F64x2::from_array([-0.25, 3.99]);
    assert_eq!(d.convert_floor_i64x2().to_array(), [-1, 3]);
}

#[test]
fn double_to_i32_zero_fills_high_lanes() {
    let d = F64x2::from_array([2.5, -7.9]);
    assert_eq!(d.convert_nearest_i32x4().to_array(), [2, -8, 0, 0]);
    assert_eq!(d.convert_truncate_i32x4().to_array(), [2, -7, 0, 0]);
    assert_eq!(d.convert_floor_i32x4().to_array(), [2, -8, 0, 0]);
}

#[test]
fn int_to_float_is_exact_in_mantissa_range() {
    let v = I32x4::from_array([0, -1, 1 << 24, -(1 << 24)]);
    assert_eq!(
        v.convert_f32x4().to_array(),
        [0.0, -1.0, 16_777_216.0, -16_777_216.0]
    );

    // i32 -> f64 is always exact.
    let w = I32x4::from_array([i32::MAX, i32::MIN, 0, 0]);
    assert_eq!(
        w.convert_f64x2().to_array(),
        [i32::MAX as f64, i32::MIN as f64]
    );

    let l = I64x2::from_array([1 << 52, -3]);
    assert_eq!(l.convert_f64x2().to_array(), [(1u64 << 52) as f64, -3.0]);
}

#[test]
fn integer_widen_sign_extends() {
    let v = I32x4::from_array([-1, i32::MIN, 99, 7]);
    assert_eq!(v.widen_i64x2().to_array(), [-1, i32::MIN as i64]);
}

#[test]
fn integer_narrow_truncates_low_bits() {
    let v = I64x2::from_array([0x1_0000_0001, -1]);
    assert_eq!(v.narrow_i32x4().to_array(), [1, -1, 0, 0]);
}

#[test]
fn float_widen_and_narrow() {
    let f = F32x4::from_array([1.5, -2.25, 99.0, 7.0]);
    // Widening the low two lanes is exact.
    assert_eq!(f.widen_f64x2().to_array(), [1.5, -2.25]);

    let d = F64x2::from_array([1.5, -0.125]);
    assert_eq!(d.narrow_f32x4().to_array(), [1.5, -0.125, 0.0, 0.0]);

    // Narrowing rounds to nearest single: 1 + 2^-40 is not representable.
    let lossy = F64x2::from_array([1.0 + 2f64.powi(-40), 0.0]);
    assert_eq!(lossy.narrow_f32x4().to_array()[0], 1.0);
}

#[test]
fn truncate_recovers_exactly_representable_integers() {
    // Every i32 with |i| <= 2^24 has an exact f32 image, so the int -> float
    // -> int round trip must be the identity there. Sweep the boundary and
    // its neighbors on both sides of zero.
    let mut cases = vec![0i32, 1, -1, 4096, -4096];
    for off in 0..4 {
        cases.push((1 << 23) - off);
        cases.push(-((1 << 23) - off));
        cases.push((1 << 24) - off);
        cases.push(-((1 << 24) - off));
    }
    for &i in &cases {
        let v = I32x4::splat(i);
        assert!(
            v.convert_f32x4().convert_truncate_i32x4().debug_eq(v),
            "i32 {i} lost in f32 round trip"
        );
    }

    // f64 holds every i64 with |i| <= 2^53 exactly.
    let mut wide = vec![0i64, 1, -1];
    for off in 0..4 {
        wide.push((1 << 52) - off);
        wide.push(-((1 << 52) - off));
        wide.push((1 << 53) - off);
        wide.push(-((1 << 53) - off));
    }
    for &i in &wide {
        let v = I64x2::splat(i);
        assert!(
            v.convert_f64x2().convert_truncate_i64x2().debug_eq(v),
            "i64 {i} lost in f64 round trip"
        );
    }

    // i32 -> f64 is exact for the whole i32 range, including the extremes;
    // the conversion pair only touches the low two lanes.
    for &i in &[i32::MIN, i32::MAX, 1 << 30, -(1 << 30)] {
        let back = I32x4::splat(i).convert_f64x2().convert_truncate_i32x4();
        assert!(back.debug_eq(I32x4::from_array([i, i, 0, 0])));
    }
}

#[test]
fn nearest_agrees_with_truncate_on_integral_values() {
    let v = F32x4::from_array([-3.0, 0.0, 5.0, 1024.0]);
    assert!(v
        .convert_nearest_i32x4()
        .debug_eq(v.convert_truncate_i32x4()));
    assert!(v.convert_nearest_i32x4().debug_eq(v.convert_floor_i32x4()));
}

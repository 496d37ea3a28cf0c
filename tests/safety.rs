//! The arithmetic safety layer: trap-free division, abs/min/max, signed-zero
//! normalization, compile-time-checked shifts, and the denormal-flush guard.

use std::hint::black_box;
use vec128::{F32x4, F64x2, FlushDenormals, I32x4, I64x2};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn safe_divide_replaces_zero_divisors() {
    let a = I32x4::from_array([10, 7, -9, 5]);
    let b = I32x4::from_array([2, 0, 3, 0]);
    assert_eq!(a.safe_divide(b).to_array(), [5, 7, -3, 5]);

    let c = I64x2::from_array([-100, 42]);
    let d = I64x2::from_array([0, -7]);
    assert_eq!(c.safe_divide(d).to_array(), [-100, -6]);
}

#[test]
fn safe_divide_float_never_produces_infinity() {
    let a = F32x4::from_array([1.0, 2.0, -3.0, 4.0]);
    let b = F32x4::from_array([0.0, 4.0, 0.0, -2.0]);
    assert_eq!(a.safe_divide(b).to_array(), [1.0, 0.5, -3.0, -2.0]);

    let c = F64x2::from_array([9.0, 1.0]);
    let d = F64x2::from_array([3.0, 0.0]);
    assert_eq!(c.safe_divide(d).to_array(), [3.0, 1.0]);
}

#[test]
fn abs_matches_hardware_wrapping() {
    let v = I32x4::from_array([-5, 5, i32::MIN, 0]);
    assert_eq!(v.abs().to_array(), [5, 5, i32::MIN, 0]);

    let w = I64x2::from_array([i64::MIN, -7]);
    assert_eq!(w.abs().to_array(), [i64::MIN, 7]);

    let f = F32x4::from_array([-1.5, 1.5, -0.0, f32::NEG_INFINITY]);
    let fa = f.abs().to_array();
    assert_eq!(fa[0], 1.5);
    assert_eq!(fa[1], 1.5);
    assert!(fa[2].is_sign_positive());
    assert_eq!(fa[3], f32::INFINITY);

    assert_eq!(F64x2::from_array([-2.5, -0.5]).abs().to_array(), [2.5, 0.5]);
}

#[test]
fn integer_min_max() {
    let a = I32x4::from_array([1, 9, -4, 0]);
    let b = I32x4::from_array([3, 2, -5, 0]);
    assert_eq!(a.min(b).to_array(), [1, 2, -5, 0]);
    assert_eq!(a.max(b).to_array(), [3, 9, -4, 0]);

    let c = I64x2::from_array([i64::MIN, 10]);
    let d = I64x2::from_array([0, -10]);
    assert_eq!(c.min(d).to_array(), [i64::MIN, -10]);
    assert_eq!(c.max(d).to_array(), [0, 10]);
}

#[test]
fn float_min_max_on_ordered_values() {
    // NaN and signed-zero lanes diverge across backends by contract; plain
    // ordered values must not.
    let a = F32x4::from_array([1.0, -2.0, 3.5, 0.0]);
    let b = F32x4::from_array([2.0, -3.0, 3.5, 1.0]);
    assert_eq!(a.min_fast(b).to_array(), [1.0, -3.0, 3.5, 0.0]);
    assert_eq!(a.max_fast(b).to_array(), [2.0, -2.0, 3.5, 1.0]);

    let c = F64x2::from_array([-1.5, 8.0]);
    let d = F64x2::from_array([1.5, 4.0]);
    assert_eq!(c.min_fast(d).to_array(), [-1.5, 4.0]);
    assert_eq!(c.max_fast(d).to_array(), [1.5, 8.0]);
}

#[test]
fn remove_signed_zero_normalizes() {
    let v = F32x4::from_array([-0.0, 0.0, -1.5, 2.0]);
    let out = v.remove_signed_zero();
    assert!(out.debug_eq(F32x4::from_array([0.0, 0.0, -1.5, 2.0])));

    let d = F64x2::splat(-0.0).remove_signed_zero();
    assert!(d.debug_eq(F64x2::zero()));
}

#[test]
fn shifts_are_lane_wise_and_arithmetic() {
    let v = I32x4::from_array([3, -8, 1, i32::MIN]);
    assert_eq!(v.shl::<4>().to_array(), [48, -128, 16, 0]);
    assert_eq!(v.shr::<1>().to_array(), [1, -4, 0, i32::MIN / 2]);
    // Shifting by zero is the identity.
    assert!(v.shl::<0>().debug_eq(v));
    assert!(v.shr::<0>().debug_eq(v));

    let w = I64x2::from_array([-16, 1]);
    assert_eq!(w.shl::<8>().to_array(), [-4096, 256]);
    assert_eq!(w.shr::<2>().to_array(), [-4, 0]);
}

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
#[test]
fn flush_denormals_guard_flushes_and_restores() {
    init_logging();

    // A subnormal single: MIN_POSITIVE is the smallest normal.
    let tiny = f32::MIN_POSITIVE / 4.0;
    let v = F32x4::splat(black_box(tiny));
    let one = F32x4::splat(black_box(1.0));

    {
        let _ftz = FlushDenormals::new();
        let flushed = (black_box(v) * one).lane0();
        assert_eq!(flushed, 0.0, "subnormal survived under flush-to-zero");
    }

    // Default behavior returns once the guard drops.
    let kept = (black_box(v) * one).lane0();
    assert_eq!(kept, tiny);
}

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
#[test]
fn flush_denormals_guards_nest() {
    init_logging();

    let tiny = f64::MIN_POSITIVE / 2.0;
    let v = F64x2::splat(black_box(tiny));
    let one = F64x2::splat(black_box(1.0));

    let outer = FlushDenormals::new();
    {
        let _inner = FlushDenormals::new();
        assert_eq!((black_box(v) * one).lane0(), 0.0);
    }
    // Inner drop restored the outer guard's state, which still flushes.
    assert_eq!((black_box(v) * one).lane0(), 0.0);
    drop(outer);
    assert_eq!((black_box(v) * one).lane0(), tiny);
}

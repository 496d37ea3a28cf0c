//! Construction, lane access, and the operator-trait arithmetic shared by
//! all backends.

use vec128::{Backend, F32x4, F64x2, I32x4, I64x2, BACKEND};

#[test]
fn backend_constant_is_consistent_with_features() {
    // force-scalar must always pin the portable backend; otherwise any of
    // the three is legitimate depending on the target.
    if cfg!(feature = "force-scalar") {
        assert_eq!(BACKEND, Backend::Scalar);
    }
}

#[test]
fn new_is_most_significant_lane_first() {
    let v = I32x4::new(3, 2, 1, 0);
    assert_eq!(v.to_array(), [0, 1, 2, 3]);
    assert_eq!(v.lane0(), 0);
    assert_eq!(v.lane1(), 1);
    assert_eq!(v.lane2(), 2);
    assert_eq!(v.lane3(), 3);

    let w = I64x2::new(9, 8);
    assert_eq!(w.to_array(), [8, 9]);
    assert_eq!((w.lane0(), w.lane1()), (8, 9));

    let f = F32x4::new(3.0, 2.0, 1.0, 0.0);
    assert_eq!(f.to_array(), [0.0, 1.0, 2.0, 3.0]);

    let d = F64x2::new(2.0, 1.0);
    assert_eq!((d.lane0(), d.lane1()), (1.0, 2.0));
}

#[test]
fn splat_and_zero() {
    assert_eq!(I32x4::splat(-7).to_array(), [-7; 4]);
    assert_eq!(I32x4::zero().to_array(), [0; 4]);
    assert_eq!(I64x2::splat(i64::MAX).to_array(), [i64::MAX; 2]);
    assert_eq!(F32x4::splat(0.25).to_array(), [0.25; 4]);
    assert_eq!(F64x2::zero().to_array(), [0.0; 2]);
}

#[test]
fn array_round_trip() {
    let a = [i32::MIN, -1, 0, i32::MAX];
    assert_eq!(I32x4::from_array(a).to_array(), a);
    let b = [f64::MIN, f64::MAX];
    assert_eq!(F64x2::from_array(b).to_array(), b);
}

#[test]
fn integer_arithmetic_wraps() {
    let a = I32x4::from_array([i32::MAX, 1, -2, 100]);
    let b = I32x4::from_array([1, 1, 3, -100]);
    assert_eq!((a + b).to_array(), [i32::MIN, 2, 1, 0]);
    assert_eq!((a - b).to_array(), [i32::MAX - 1, 0, -5, 200]);
    assert_eq!(
        (I32x4::splat(1 << 30) * I32x4::splat(4)).to_array(),
        [0; 4]
    );
    assert_eq!((-I32x4::from_array([1, -1, 0, i32::MIN])).to_array(), [-1, 1, 0, i32::MIN]);

    let c = I64x2::from_array([i64::MAX, -5]);
    assert_eq!((c + I64x2::splat(1)).to_array(), [i64::MIN, -4]);
    assert_eq!((c * I64x2::splat(2)).to_array(), [-2, -10]);
}

#[test]
fn integer_bit_operators() {
    let a = I32x4::splat(0b1100);
    let b = I32x4::splat(0b1010);
    assert_eq!((a & b).to_array(), [0b1000; 4]);
    assert_eq!((a | b).to_array(), [0b1110; 4]);
    assert_eq!((a ^ b).to_array(), [0b0110; 4]);
    assert_eq!((!I32x4::zero()).to_array(), [-1; 4]);

    let c = I64x2::splat(-1);
    assert_eq!((c ^ c).to_array(), [0; 2]);
    assert_eq!((!c).to_array(), [0; 2]);
}

#[test]
fn float_arithmetic() {
    let a = F32x4::from_array([1.0, 2.0, 3.0, 4.0]);
    let b = F32x4::from_array([0.5, 0.5, 0.5, 0.5]);
    assert_eq!((a + b).to_array(), [1.5, 2.5, 3.5, 4.5]);
    assert_eq!((a - b).to_array(), [0.5, 1.5, 2.5, 3.5]);
    assert_eq!((a * b).to_array(), [0.5, 1.0, 1.5, 2.0]);
    assert_eq!((a / b).to_array(), [2.0, 4.0, 6.0, 8.0]);
    assert_eq!((-a).to_array(), [-1.0, -2.0, -3.0, -4.0]);

    let c = F64x2::from_array([1.5, -3.0]);
    assert_eq!((c / F64x2::splat(2.0)).to_array(), [0.75, -1.5]);
    // Negation flips the sign bit even on zero.
    assert!((-F64x2::zero()).debug_eq(F64x2::splat(-0.0)));
}

#[test]
fn debug_eq_is_bit_exact() {
    let z = F32x4::zero();
    let nz = F32x4::splat(-0.0);
    // IEEE eq sees them as equal lanes, debug_eq does not.
    assert_eq!(z.eq(nz).to_array(), [true; 4]);
    assert!(!z.debug_eq(nz));
    assert!(z.debug_eq(z));

    let nan = F64x2::splat(f64::NAN);
    assert!(nan.debug_eq(nan));
    assert_eq!(nan.eq(nan).to_array(), [false; 2]);
}

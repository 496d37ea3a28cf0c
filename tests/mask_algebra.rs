//! Comparison results, mask combinators, blends, and the conversions
//! between mask widths and between integer and float mask flavors.

use vec128::{F32x4, F64x2, I32x4, I64x2, Mask32x4, Mask64x2, MaskF32x4, MaskF64x2};

#[test]
fn integer_comparisons() {
    let a = I32x4::from_array([1, 5, -3, 0]);
    let b = I32x4::from_array([1, 2, -3, 7]);
    assert_eq!(a.eq(b).to_array(), [true, false, true, false]);
    assert_eq!(a.ne(b).to_array(), [false, true, false, true]);
    assert_eq!(a.lt(b).to_array(), [false, false, false, true]);
    assert_eq!(a.le(b).to_array(), [true, false, true, true]);
    assert_eq!(a.gt(b).to_array(), [false, true, false, false]);
    assert_eq!(a.ge(b).to_array(), [true, true, true, false]);

    let c = I64x2::from_array([i64::MIN, 4]);
    let d = I64x2::from_array([0, 4]);
    assert_eq!(c.lt(d).to_array(), [true, false]);
    assert_eq!(c.ge(d).to_array(), [false, true]);
}

#[test]
fn float_comparisons_are_ieee() {
    let a = F32x4::from_array([1.0, f32::NAN, 0.0, -1.0]);
    let b = F32x4::from_array([1.0, f32::NAN, -0.0, 1.0]);
    // NaN is unordered: eq false, ne true. +0.0 and -0.0 compare equal.
    assert_eq!(a.eq(b).to_array(), [true, false, true, false]);
    assert_eq!(a.ne(b).to_array(), [false, true, false, true]);
    assert_eq!(a.lt(b).to_array(), [false, false, false, true]);
    assert_eq!(a.le(b).to_array(), [true, false, true, true]);
    assert_eq!(a.ge(b).to_array(), [true, false, true, false]);

    let c = F64x2::from_array([f64::NAN, 2.0]);
    assert_eq!(c.eq(c).to_array(), [false, true]);
    assert_eq!(c.ne(c).to_array(), [true, false]);
}

#[test]
fn mask_combinators() {
    let m = Mask32x4::new(true, true, false, false);
    let n = Mask32x4::new(true, false, true, false);
    assert_eq!((m & n).to_array(), [false, false, false, true]);
    assert_eq!((m | n).to_array(), [false, true, true, true]);
    assert_eq!((m ^ n).to_array(), [false, true, true, false]);
    assert_eq!((!m).to_array(), [true, true, false, false]);

    let p = Mask64x2::new(true, false);
    let q = Mask64x2::new(false, false);
    assert_eq!((p & q).to_array(), [false, false]);
    assert_eq!((p | q).to_array(), [false, true]);
    assert_eq!((!p).to_array(), [true, false]);
}

#[test]
fn mask_eq_compares_mask_lanes() {
    let m = Mask32x4::new(true, false, true, false);
    let n = Mask32x4::new(true, true, false, false);
    assert_eq!(m.eq(n).to_array(), [true, false, false, true]);
    assert!(m.debug_eq(m));
    assert!(!m.debug_eq(n));

    let p = MaskF64x2::new(true, false);
    assert_eq!(p.eq(!p).to_array(), [false, false]);
}

#[test]
fn choose_selects_per_lane() {
    let m = Mask32x4::new(true, false, false, true);
    let t = I32x4::from_array([10, 11, 12, 13]);
    let f = I32x4::from_array([-10, -11, -12, -13]);
    assert_eq!(m.choose(t, f).to_array(), [10, -11, -12, 13]);
    assert_eq!(m.choose_else_zero(t).to_array(), [10, 0, 0, 13]);

    let fm = MaskF32x4::new(false, true, false, true);
    let ft = F32x4::from_array([1.0, 2.0, 3.0, 4.0]);
    let ff = F32x4::from_array([-1.0, -2.0, -3.0, -4.0]);
    assert_eq!(fm.choose(ft, ff).to_array(), [1.0, -2.0, 3.0, -4.0]);
    assert_eq!(fm.choose_else_zero(ft).to_array(), [1.0, 0.0, 3.0, 0.0]);
}

#[test]
fn choose_is_bitwise_on_float_payloads() {
    // A NaN with a distinctive payload and a negative zero must pass
    // through a blend untouched; choose is defined as bit selection, not
    // float arithmetic.
    let odd = I32x4::from_array([0x7FC0_1234u32 as i32, i32::MIN, 0, 0]).bitcast_f32x4();
    let all = MaskF32x4::splat(true);
    assert!(all.choose(odd, F32x4::zero()).debug_eq(odd));
    assert!(all.choose_else_zero(odd).debug_eq(odd));
}

#[test]
fn mask_narrow_and_widen() {
    let wide = Mask64x2::new(false, true);
    assert_eq!(wide.narrow().to_array(), [true, false, false, false]);

    let narrow = Mask32x4::new(true, true, false, true);
    assert_eq!(narrow.widen().to_array(), [true, false]);

    // Widening a set lane must produce a fully set 64-bit lane, which a
    // subsequent 32-bit view can confirm.
    let w = Mask32x4::new(false, false, false, true).widen();
    assert_eq!(w.bitcast_mask32x4().to_array(), [true, true, false, false]);

    let fw = MaskF32x4::new(false, false, true, true).widen();
    assert_eq!(fw.to_array(), [true, true]);
    assert_eq!(MaskF64x2::new(true, false).narrow().to_array(), [false, true, false, false]);
}

#[test]
fn mask_bitcast_replicates_lanes() {
    let m = Mask64x2::new(true, false);
    assert_eq!(m.bitcast_mask32x4().to_array(), [false, false, true, true]);
}

#[test]
fn int_and_float_masks_interconvert() {
    let m = Mask32x4::new(true, false, true, false);
    let f = MaskF32x4::from(m);
    assert_eq!(f.to_array(), m.to_array());
    assert!(Mask32x4::from(f).debug_eq(m));

    let p = MaskF64x2::new(false, true);
    let q = Mask64x2::from(p);
    assert_eq!(q.to_array(), p.to_array());
}

#[test]
fn choose_identities_hold_on_random_inputs() {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0x5EED_CAFE);
    for _ in 0..200 {
        let t = I32x4::from_array(rng.gen::<[i32; 4]>());
        let f = I32x4::from_array(rng.gen::<[i32; 4]>());
        let m = Mask32x4::new(rng.gen(), rng.gen(), rng.gen(), rng.gen());
        // Complementing the mask swaps the operands.
        assert!(m.choose(t, f).debug_eq((!m).choose(f, t)));
        // choose_else_zero is choose against zero.
        assert!(m.choose_else_zero(t).debug_eq(m.choose(t, I32x4::zero())));
        // De Morgan over the lane algebra.
        let n = Mask32x4::new(rng.gen(), rng.gen(), rng.gen(), rng.gen());
        assert!((!(m & n)).debug_eq(!m | !n));
        assert!((!(m | n)).debug_eq(!m & !n));
    }
}

#[test]
fn comparison_feeds_choose() {
    // The usual branchless select: clamp negatives to zero.
    let v = I32x4::from_array([5, -2, 0, -9]);
    let clamped = v.lt(I32x4::zero()).choose(I32x4::zero(), v);
    assert_eq!(clamped.to_array(), [5, 0, 0, 0]);
}

//! Instantiates every 4-lane shuffle (256 index combinations) and every
//! 2-lane shuffle (4 combinations) and checks them against the index
//! semantics. On aarch64 this exercises every derived permutation sequence;
//! on the other backends it pins the shared contract.

use vec128::{F32x4, F64x2, I32x4, I64x2};

fn check_one<const I3: u32, const I2: u32, const I1: u32, const I0: u32>() {
    let v = I32x4::from_array([10, 21, 32, 43]);
    let a = v.to_array();
    let out = v.shuffle::<I3, I2, I1, I0>().to_array();
    let expected = [
        a[I0 as usize],
        a[I1 as usize],
        a[I2 as usize],
        a[I3 as usize],
    ];
    assert_eq!(
        out, expected,
        "shuffle::<{I3}, {I2}, {I1}, {I0}> mismatched"
    );

    let f = F32x4::from_array([0.5, 1.5, 2.5, 3.5]);
    let fa = f.to_array();
    let fout = f.shuffle::<I3, I2, I1, I0>().to_array();
    let fexpected = [
        fa[I0 as usize],
        fa[I1 as usize],
        fa[I2 as usize],
        fa[I3 as usize],
    ];
    assert_eq!(fout, fexpected);
}

fn sweep_i0<const I3: u32, const I2: u32, const I1: u32>() {
    check_one::<I3, I2, I1, 0>();
    check_one::<I3, I2, I1, 1>();
    check_one::<I3, I2, I1, 2>();
    check_one::<I3, I2, I1, 3>();
}

fn sweep_i1<const I3: u32, const I2: u32>() {
    sweep_i0::<I3, I2, 0>();
    sweep_i0::<I3, I2, 1>();
    sweep_i0::<I3, I2, 2>();
    sweep_i0::<I3, I2, 3>();
}

fn sweep_i2<const I3: u32>() {
    sweep_i1::<I3, 0>();
    sweep_i1::<I3, 1>();
    sweep_i1::<I3, 2>();
    sweep_i1::<I3, 3>();
}

#[test]
fn all_256_four_lane_shuffles() {
    sweep_i2::<0>();
    sweep_i2::<1>();
    sweep_i2::<2>();
    sweep_i2::<3>();
}

#[test]
fn all_four_two_lane_shuffles() {
    let v = I64x2::from_array([111, 222]);
    assert_eq!(v.shuffle::<1, 0>().to_array(), [111, 222]);
    assert_eq!(v.shuffle::<0, 1>().to_array(), [222, 111]);
    assert_eq!(v.shuffle::<0, 0>().to_array(), [111, 111]);
    assert_eq!(v.shuffle::<1, 1>().to_array(), [222, 222]);

    let f = F64x2::from_array([1.25, -8.5]);
    assert_eq!(f.shuffle::<1, 0>().to_array(), [1.25, -8.5]);
    assert_eq!(f.shuffle::<0, 1>().to_array(), [-8.5, 1.25]);
    assert_eq!(f.shuffle::<0, 0>().to_array(), [1.25, 1.25]);
    assert_eq!(f.shuffle::<1, 1>().to_array(), [-8.5, -8.5]);
}

#[test]
fn shuffle_with_repeats_duplicates_lanes() {
    let v = I32x4::from_array([7, 8, 9, 10]);
    assert_eq!(v.shuffle::<2, 2, 2, 2>().to_array(), [9, 9, 9, 9]);
    assert_eq!(v.shuffle::<0, 0, 3, 3>().to_array(), [10, 10, 7, 7]);
}

#[test]
fn shuffle_reverse_and_rotate() {
    let v = I32x4::from_array([1, 2, 3, 4]);
    assert_eq!(v.shuffle::<0, 1, 2, 3>().to_array(), [4, 3, 2, 1]);
    assert_eq!(v.shuffle::<0, 3, 2, 1>().to_array(), [2, 3, 4, 1]);
}

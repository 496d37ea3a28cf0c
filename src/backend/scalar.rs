//! Portable lane-array backend.
//!
//! Reference implementation used on targets without a native 128-bit unit
//! (or whenever the `force-scalar` feature is set). Each vector is a plain
//! 16-byte-aligned lane array; every operation is an unrolled 2- or 4-lane
//! expression so the surface stays branch-free and O(1) like the hardware
//! backends. Bit reinterpretation goes through the byte-copy leaves in
//! `bits.rs` — never pointer punning.
//!
//! Behavioral notes specific to this backend:
//! - out-of-range float→int conversions saturate (Rust `as` semantics);
//!   the hardware backends are documented separately,
//! - `min_fast`/`max_fast` use `f32::min`/`f32::max`, which ignore a NaN
//!   operand rather than propagate it the way `minps` does.

use super::bits::{
    f32_bits, f32_from_bits, f64_bits, f64_from_bits, i32_bits, i32_from_bits, i64_bits,
    i64_from_bits, join_u64, split_u64,
};
use crate::{LaneIdx, ShiftAmt};
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Sub};

/// Four signed 32-bit lanes.
#[derive(Clone, Copy, Debug)]
#[repr(C, align(16))]
pub struct I32x4([i32; 4]);

/// Two signed 64-bit lanes.
#[derive(Clone, Copy, Debug)]
#[repr(C, align(16))]
pub struct I64x2([i64; 2]);

/// Four IEEE-754 single-precision lanes.
#[derive(Clone, Copy, Debug)]
#[repr(C, align(16))]
pub struct F32x4([f32; 4]);

/// Two IEEE-754 double-precision lanes.
#[derive(Clone, Copy, Debug)]
#[repr(C, align(16))]
pub struct F64x2([f64; 2]);

/// Comparison mask for 4-lane 32-bit integer vectors. Each lane is all-1s or
/// all-0s, never a partial pattern.
#[derive(Clone, Copy, Debug)]
#[repr(C, align(16))]
pub struct Mask32x4([u32; 4]);

/// Comparison mask for 2-lane 64-bit integer vectors.
#[derive(Clone, Copy, Debug)]
#[repr(C, align(16))]
pub struct Mask64x2([u64; 2]);

/// Comparison mask for `F32x4`. Structurally identical to [`Mask32x4`] but a
/// distinct nominal type so float and integer masks cannot be mixed by
/// accident.
#[derive(Clone, Copy, Debug)]
#[repr(C, align(16))]
pub struct MaskF32x4([u32; 4]);

/// Comparison mask for `F64x2`.
#[derive(Clone, Copy, Debug)]
#[repr(C, align(16))]
pub struct MaskF64x2([u64; 2]);

#[inline(always)]
fn m32(b: bool) -> u32 {
    if b {
        u32::MAX
    } else {
        0
    }
}

#[inline(always)]
fn m64(b: bool) -> u64 {
    if b {
        u64::MAX
    } else {
        0
    }
}

// ===== I32x4 =====

impl I32x4 {
    /// All lanes zero.
    #[inline(always)]
    pub fn zero() -> Self {
        Self([0; 4])
    }

    /// Broadcast one value into all lanes.
    #[inline(always)]
    pub fn splat(v: i32) -> Self {
        Self([v; 4])
    }

    /// Per-lane constructor, most-significant lane first (the hardware
    /// `set` convention): `new(e3, e2, e1, e0)` puts `e0` in lane 0.
    #[inline(always)]
    pub fn new(e3: i32, e2: i32, e1: i32, e0: i32) -> Self {
        Self([e0, e1, e2, e3])
    }

    /// Lane-order array constructor (lane 0 first); the portable-struct
    /// boundary used for interop and cross-backend testing.
    #[inline(always)]
    pub fn from_array(a: [i32; 4]) -> Self {
        Self(a)
    }

    /// Lane-order array extraction (lane 0 first).
    #[inline(always)]
    pub fn to_array(self) -> [i32; 4] {
        self.0
    }

    #[inline(always)]
    pub fn lane0(self) -> i32 {
        self.0[0]
    }

    #[inline(always)]
    pub fn lane1(self) -> i32 {
        self.0[1]
    }

    #[inline(always)]
    pub fn lane2(self) -> i32 {
        self.0[2]
    }

    #[inline(always)]
    pub fn lane3(self) -> i32 {
        self.0[3]
    }

    /// Compile-time-constant lane permutation: output lane `k` takes input
    /// lane `Ik`. Indices outside `0..4` fail the build; the body still
    /// masks modulo the lane count so the indexing stays branch-free.
    #[inline(always)]
    pub fn shuffle<const I3: u32, const I2: u32, const I1: u32, const I0: u32>(self) -> Self {
        let _: () = LaneIdx::<I3, 4>::CHECK;
        let _: () = LaneIdx::<I2, 4>::CHECK;
        let _: () = LaneIdx::<I1, 4>::CHECK;
        let _: () = LaneIdx::<I0, 4>::CHECK;
        let a = self.0;
        Self([
            a[(I0 & 3) as usize],
            a[(I1 & 3) as usize],
            a[(I2 & 3) as usize],
            a[(I3 & 3) as usize],
        ])
    }

    /// Reinterpret the 128 bits as two 64-bit lanes; 32-bit lanes 0–1 become
    /// 64-bit lane 0 (least-significant-lane-first).
    #[inline(always)]
    pub fn bitcast_i64x2(self) -> I64x2 {
        let a = self.0;
        I64x2([
            i64_from_bits(join_u64(i32_bits(a[0]), i32_bits(a[1]))),
            i64_from_bits(join_u64(i32_bits(a[2]), i32_bits(a[3]))),
        ])
    }

    /// Reinterpret lanes as single-precision floats, bit pattern preserved.
    #[inline(always)]
    pub fn bitcast_f32x4(self) -> F32x4 {
        let a = self.0;
        F32x4([
            f32_from_bits(i32_bits(a[0])),
            f32_from_bits(i32_bits(a[1])),
            f32_from_bits(i32_bits(a[2])),
            f32_from_bits(i32_bits(a[3])),
        ])
    }

    /// Reinterpret the 128 bits as two double-precision lanes.
    #[inline(always)]
    pub fn bitcast_f64x2(self) -> F64x2 {
        let a = self.0;
        F64x2([
            f64_from_bits(join_u64(i32_bits(a[0]), i32_bits(a[1]))),
            f64_from_bits(join_u64(i32_bits(a[2]), i32_bits(a[3]))),
        ])
    }

    /// Convert each lane to `f32`. Exact for |v| <= 2^24; rounds to nearest
    /// beyond that.
    #[inline(always)]
    pub fn convert_f32x4(self) -> F32x4 {
        let a = self.0;
        F32x4([a[0] as f32, a[1] as f32, a[2] as f32, a[3] as f32])
    }

    /// Convert the low two lanes to `f64` (exact).
    #[inline(always)]
    pub fn convert_f64x2(self) -> F64x2 {
        F64x2([self.0[0] as f64, self.0[1] as f64])
    }

    /// Sign-extend the low two lanes to 64 bits (exact).
    #[inline(always)]
    pub fn widen_i64x2(self) -> I64x2 {
        I64x2([self.0[0] as i64, self.0[1] as i64])
    }

    #[inline(always)]
    pub fn eq(self, rhs: Self) -> Mask32x4 {
        let (a, b) = (self.0, rhs.0);
        Mask32x4([
            m32(a[0] == b[0]),
            m32(a[1] == b[1]),
            m32(a[2] == b[2]),
            m32(a[3] == b[3]),
        ])
    }

    #[inline(always)]
    pub fn ne(self, rhs: Self) -> Mask32x4 {
        !self.eq(rhs)
    }

    #[inline(always)]
    pub fn lt(self, rhs: Self) -> Mask32x4 {
        let (a, b) = (self.0, rhs.0);
        Mask32x4([
            m32(a[0] < b[0]),
            m32(a[1] < b[1]),
            m32(a[2] < b[2]),
            m32(a[3] < b[3]),
        ])
    }

    #[inline(always)]
    pub fn le(self, rhs: Self) -> Mask32x4 {
        !rhs.lt(self)
    }

    #[inline(always)]
    pub fn gt(self, rhs: Self) -> Mask32x4 {
        rhs.lt(self)
    }

    #[inline(always)]
    pub fn ge(self, rhs: Self) -> Mask32x4 {
        !self.lt(rhs)
    }

    /// Lane-wise absolute value; `i32::MIN` stays `i32::MIN`, matching the
    /// hardware `abs` instructions.
    #[inline(always)]
    pub fn abs(self) -> Self {
        let a = self.0;
        Self([
            a[0].wrapping_abs(),
            a[1].wrapping_abs(),
            a[2].wrapping_abs(),
            a[3].wrapping_abs(),
        ])
    }

    #[inline(always)]
    pub fn min(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([
            a[0].min(b[0]),
            a[1].min(b[1]),
            a[2].min(b[2]),
            a[3].min(b[3]),
        ])
    }

    #[inline(always)]
    pub fn max(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([
            a[0].max(b[0]),
            a[1].max(b[1]),
            a[2].max(b[2]),
            a[3].max(b[3]),
        ])
    }

    /// Division with zero divisors replaced by 1 beforehand, so the
    /// operation never traps. Does not protect `i32::MIN / -1`.
    #[inline(always)]
    pub fn safe_divide(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([
            a[0] / (if b[0] == 0 { 1 } else { b[0] }),
            a[1] / (if b[1] == 0 { 1 } else { b[1] }),
            a[2] / (if b[2] == 0 { 1 } else { b[2] }),
            a[3] / (if b[3] == 0 { 1 } else { b[3] }),
        ])
    }

    /// Shift every lane left by the compile-time amount `N` (`N` >= 32 fails
    /// the build).
    #[inline(always)]
    pub fn shl<const N: u32>(self) -> Self {
        let _: () = ShiftAmt::<N, 32>::CHECK;
        let a = self.0;
        Self([a[0] << N, a[1] << N, a[2] << N, a[3] << N])
    }

    /// Arithmetic right shift by the compile-time amount `N`.
    #[inline(always)]
    pub fn shr<const N: u32>(self) -> Self {
        let _: () = ShiftAmt::<N, 32>::CHECK;
        let a = self.0;
        Self([a[0] >> N, a[1] >> N, a[2] >> N, a[3] >> N])
    }

    /// Bit-exact equality for test assertions; unlike [`I32x4::eq`] this
    /// returns a `bool`, not a mask.
    #[inline(always)]
    pub fn debug_eq(self, rhs: Self) -> bool {
        self.0 == rhs.0
    }
}

impl Add for I32x4 {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([
            a[0].wrapping_add(b[0]),
            a[1].wrapping_add(b[1]),
            a[2].wrapping_add(b[2]),
            a[3].wrapping_add(b[3]),
        ])
    }
}

impl Sub for I32x4 {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([
            a[0].wrapping_sub(b[0]),
            a[1].wrapping_sub(b[1]),
            a[2].wrapping_sub(b[2]),
            a[3].wrapping_sub(b[3]),
        ])
    }
}

impl Mul for I32x4 {
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([
            a[0].wrapping_mul(b[0]),
            a[1].wrapping_mul(b[1]),
            a[2].wrapping_mul(b[2]),
            a[3].wrapping_mul(b[3]),
        ])
    }
}

impl Neg for I32x4 {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self::zero() - self
    }
}

impl BitAnd for I32x4 {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0] & b[0], a[1] & b[1], a[2] & b[2], a[3] & b[3]])
    }
}

impl BitOr for I32x4 {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0] | b[0], a[1] | b[1], a[2] | b[2], a[3] | b[3]])
    }
}

impl BitXor for I32x4 {
    type Output = Self;
    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]])
    }
}

impl Not for I32x4 {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self {
        let a = self.0;
        Self([!a[0], !a[1], !a[2], !a[3]])
    }
}

// ===== I64x2 =====

impl I64x2 {
    #[inline(always)]
    pub fn zero() -> Self {
        Self([0; 2])
    }

    #[inline(always)]
    pub fn splat(v: i64) -> Self {
        Self([v; 2])
    }

    /// Per-lane constructor, most-significant lane first.
    #[inline(always)]
    pub fn new(e1: i64, e0: i64) -> Self {
        Self([e0, e1])
    }

    #[inline(always)]
    pub fn from_array(a: [i64; 2]) -> Self {
        Self(a)
    }

    #[inline(always)]
    pub fn to_array(self) -> [i64; 2] {
        self.0
    }

    #[inline(always)]
    pub fn lane0(self) -> i64 {
        self.0[0]
    }

    #[inline(always)]
    pub fn lane1(self) -> i64 {
        self.0[1]
    }

    /// Two-lane compile-time permutation: output lane `k` takes input lane
    /// `Ik`.
    #[inline(always)]
    pub fn shuffle<const I1: u32, const I0: u32>(self) -> Self {
        let _: () = LaneIdx::<I1, 2>::CHECK;
        let _: () = LaneIdx::<I0, 2>::CHECK;
        let a = self.0;
        Self([a[(I0 & 1) as usize], a[(I1 & 1) as usize]])
    }

    /// Reinterpret as four 32-bit lanes; 64-bit lane 0 supplies 32-bit
    /// lanes 0–1.
    #[inline(always)]
    pub fn bitcast_i32x4(self) -> I32x4 {
        let a = self.0;
        let [l0, l1] = split_u64(i64_bits(a[0]));
        let [l2, l3] = split_u64(i64_bits(a[1]));
        I32x4([
            i32_from_bits(l0),
            i32_from_bits(l1),
            i32_from_bits(l2),
            i32_from_bits(l3),
        ])
    }

    #[inline(always)]
    pub fn bitcast_f32x4(self) -> F32x4 {
        self.bitcast_i32x4().bitcast_f32x4()
    }

    #[inline(always)]
    pub fn bitcast_f64x2(self) -> F64x2 {
        let a = self.0;
        F64x2([f64_from_bits(i64_bits(a[0])), f64_from_bits(i64_bits(a[1]))])
    }

    /// Convert each lane to `f64`. Exact for |v| <= 2^53; rounds to nearest
    /// beyond that.
    #[inline(always)]
    pub fn convert_f64x2(self) -> F64x2 {
        F64x2([self.0[0] as f64, self.0[1] as f64])
    }

    /// Truncate each lane to its low 32 bits — no saturation, by contract —
    /// and zero-fill output lanes 2–3.
    #[inline(always)]
    pub fn narrow_i32x4(self) -> I32x4 {
        let a = self.0;
        I32x4([a[0] as i32, a[1] as i32, 0, 0])
    }

    #[inline(always)]
    pub fn eq(self, rhs: Self) -> Mask64x2 {
        let (a, b) = (self.0, rhs.0);
        Mask64x2([m64(a[0] == b[0]), m64(a[1] == b[1])])
    }

    #[inline(always)]
    pub fn ne(self, rhs: Self) -> Mask64x2 {
        !self.eq(rhs)
    }

    #[inline(always)]
    pub fn lt(self, rhs: Self) -> Mask64x2 {
        let (a, b) = (self.0, rhs.0);
        Mask64x2([m64(a[0] < b[0]), m64(a[1] < b[1])])
    }

    #[inline(always)]
    pub fn le(self, rhs: Self) -> Mask64x2 {
        !rhs.lt(self)
    }

    #[inline(always)]
    pub fn gt(self, rhs: Self) -> Mask64x2 {
        rhs.lt(self)
    }

    #[inline(always)]
    pub fn ge(self, rhs: Self) -> Mask64x2 {
        !self.lt(rhs)
    }

    #[inline(always)]
    pub fn abs(self) -> Self {
        let a = self.0;
        Self([a[0].wrapping_abs(), a[1].wrapping_abs()])
    }

    #[inline(always)]
    pub fn min(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0].min(b[0]), a[1].min(b[1])])
    }

    #[inline(always)]
    pub fn max(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0].max(b[0]), a[1].max(b[1])])
    }

    /// See [`I32x4::safe_divide`].
    #[inline(always)]
    pub fn safe_divide(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([
            a[0] / (if b[0] == 0 { 1 } else { b[0] }),
            a[1] / (if b[1] == 0 { 1 } else { b[1] }),
        ])
    }

    #[inline(always)]
    pub fn shl<const N: u32>(self) -> Self {
        let _: () = ShiftAmt::<N, 64>::CHECK;
        let a = self.0;
        Self([a[0] << N, a[1] << N])
    }

    #[inline(always)]
    pub fn shr<const N: u32>(self) -> Self {
        let _: () = ShiftAmt::<N, 64>::CHECK;
        let a = self.0;
        Self([a[0] >> N, a[1] >> N])
    }

    #[inline(always)]
    pub fn debug_eq(self, rhs: Self) -> bool {
        self.0 == rhs.0
    }
}

impl Add for I64x2 {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0].wrapping_add(b[0]), a[1].wrapping_add(b[1])])
    }
}

impl Sub for I64x2 {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0].wrapping_sub(b[0]), a[1].wrapping_sub(b[1])])
    }
}

/// Lane-wise; neither SSE4.2 nor NEON has a packed 64-bit multiply, so every
/// backend computes this per lane.
impl Mul for I64x2 {
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0].wrapping_mul(b[0]), a[1].wrapping_mul(b[1])])
    }
}

impl Neg for I64x2 {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self::zero() - self
    }
}

impl BitAnd for I64x2 {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0] & b[0], a[1] & b[1]])
    }
}

impl BitOr for I64x2 {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0] | b[0], a[1] | b[1]])
    }
}

impl BitXor for I64x2 {
    type Output = Self;
    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0] ^ b[0], a[1] ^ b[1]])
    }
}

impl Not for I64x2 {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self {
        let a = self.0;
        Self([!a[0], !a[1]])
    }
}

// ===== F32x4 =====

impl F32x4 {
    #[inline(always)]
    pub fn zero() -> Self {
        Self([0.0; 4])
    }

    #[inline(always)]
    pub fn splat(v: f32) -> Self {
        Self([v; 4])
    }

    /// Per-lane constructor, most-significant lane first.
    #[inline(always)]
    pub fn new(e3: f32, e2: f32, e1: f32, e0: f32) -> Self {
        Self([e0, e1, e2, e3])
    }

    #[inline(always)]
    pub fn from_array(a: [f32; 4]) -> Self {
        Self(a)
    }

    #[inline(always)]
    pub fn to_array(self) -> [f32; 4] {
        self.0
    }

    #[inline(always)]
    pub fn lane0(self) -> f32 {
        self.0[0]
    }

    #[inline(always)]
    pub fn lane1(self) -> f32 {
        self.0[1]
    }

    #[inline(always)]
    pub fn lane2(self) -> f32 {
        self.0[2]
    }

    #[inline(always)]
    pub fn lane3(self) -> f32 {
        self.0[3]
    }

    /// See [`I32x4::shuffle`].
    #[inline(always)]
    pub fn shuffle<const I3: u32, const I2: u32, const I1: u32, const I0: u32>(self) -> Self {
        let _: () = LaneIdx::<I3, 4>::CHECK;
        let _: () = LaneIdx::<I2, 4>::CHECK;
        let _: () = LaneIdx::<I1, 4>::CHECK;
        let _: () = LaneIdx::<I0, 4>::CHECK;
        let a = self.0;
        Self([
            a[(I0 & 3) as usize],
            a[(I1 & 3) as usize],
            a[(I2 & 3) as usize],
            a[(I3 & 3) as usize],
        ])
    }

    #[inline(always)]
    pub fn bitcast_i32x4(self) -> I32x4 {
        let a = self.0;
        I32x4([
            i32_from_bits(f32_bits(a[0])),
            i32_from_bits(f32_bits(a[1])),
            i32_from_bits(f32_bits(a[2])),
            i32_from_bits(f32_bits(a[3])),
        ])
    }

    #[inline(always)]
    pub fn bitcast_i64x2(self) -> I64x2 {
        self.bitcast_i32x4().bitcast_i64x2()
    }

    #[inline(always)]
    pub fn bitcast_f64x2(self) -> F64x2 {
        self.bitcast_i32x4().bitcast_f64x2()
    }

    /// Round to nearest (ties to even under the default rounding mode) and
    /// convert to `i32`. Out-of-range lanes are architecture-defined: this
    /// backend saturates, x86 yields `i32::MIN`, NEON saturates.
    #[inline(always)]
    pub fn convert_nearest_i32x4(self) -> I32x4 {
        let a = self.0;
        I32x4([
            a[0].round_ties_even() as i32,
            a[1].round_ties_even() as i32,
            a[2].round_ties_even() as i32,
            a[3].round_ties_even() as i32,
        ])
    }

    /// Round toward zero and convert to `i32`. Out-of-range lanes are
    /// architecture-defined (see [`F32x4::convert_nearest_i32x4`]).
    #[inline(always)]
    pub fn convert_truncate_i32x4(self) -> I32x4 {
        let a = self.0;
        I32x4([a[0] as i32, a[1] as i32, a[2] as i32, a[3] as i32])
    }

    /// Round toward negative infinity and convert to `i32`. Out-of-range
    /// lanes are architecture-defined.
    #[inline(always)]
    pub fn convert_floor_i32x4(self) -> I32x4 {
        let a = self.0;
        I32x4([
            a[0].floor() as i32,
            a[1].floor() as i32,
            a[2].floor() as i32,
            a[3].floor() as i32,
        ])
    }

    /// Widen the low two lanes to `f64` (exact).
    #[inline(always)]
    pub fn widen_f64x2(self) -> F64x2 {
        F64x2([self.0[0] as f64, self.0[1] as f64])
    }

    /// IEEE equality: a NaN lane compares unequal to everything, itself
    /// included.
    #[inline(always)]
    pub fn eq(self, rhs: Self) -> MaskF32x4 {
        let (a, b) = (self.0, rhs.0);
        MaskF32x4([
            m32(a[0] == b[0]),
            m32(a[1] == b[1]),
            m32(a[2] == b[2]),
            m32(a[3] == b[3]),
        ])
    }

    /// IEEE inequality; true for NaN lanes (unordered).
    #[inline(always)]
    pub fn ne(self, rhs: Self) -> MaskF32x4 {
        !self.eq(rhs)
    }

    #[inline(always)]
    pub fn lt(self, rhs: Self) -> MaskF32x4 {
        let (a, b) = (self.0, rhs.0);
        MaskF32x4([
            m32(a[0] < b[0]),
            m32(a[1] < b[1]),
            m32(a[2] < b[2]),
            m32(a[3] < b[3]),
        ])
    }

    #[inline(always)]
    pub fn le(self, rhs: Self) -> MaskF32x4 {
        let (a, b) = (self.0, rhs.0);
        MaskF32x4([
            m32(a[0] <= b[0]),
            m32(a[1] <= b[1]),
            m32(a[2] <= b[2]),
            m32(a[3] <= b[3]),
        ])
    }

    #[inline(always)]
    pub fn gt(self, rhs: Self) -> MaskF32x4 {
        rhs.lt(self)
    }

    #[inline(always)]
    pub fn ge(self, rhs: Self) -> MaskF32x4 {
        rhs.le(self)
    }

    /// Clear the sign bit of every lane.
    #[inline(always)]
    pub fn abs(self) -> Self {
        let a = self.0;
        Self([a[0].abs(), a[1].abs(), a[2].abs(), a[3].abs()])
    }

    /// Lane-wise minimum. `_fast` because backends are permitted to differ
    /// on signed zero and NaN propagation; compose with
    /// [`F32x4::remove_signed_zero`] when determinism matters.
    #[inline(always)]
    pub fn min_fast(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([
            a[0].min(b[0]),
            a[1].min(b[1]),
            a[2].min(b[2]),
            a[3].min(b[3]),
        ])
    }

    /// Lane-wise maximum; see [`F32x4::min_fast`].
    #[inline(always)]
    pub fn max_fast(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([
            a[0].max(b[0]),
            a[1].max(b[1]),
            a[2].max(b[2]),
            a[3].max(b[3]),
        ])
    }

    /// Normalize `-0.0` lanes to `+0.0` (adds `+0.0`; other values and NaN
    /// payloads pass through).
    #[inline(always)]
    pub fn remove_signed_zero(self) -> Self {
        let a = self.0;
        Self([a[0] + 0.0, a[1] + 0.0, a[2] + 0.0, a[3] + 0.0])
    }

    /// Division with zero divisors replaced by 1.0 beforehand, so a zero
    /// lane never produces an infinity or a hardware stall.
    #[inline(always)]
    pub fn safe_divide(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([
            a[0] / (if b[0] == 0.0 { 1.0 } else { b[0] }),
            a[1] / (if b[1] == 0.0 { 1.0 } else { b[1] }),
            a[2] / (if b[2] == 0.0 { 1.0 } else { b[2] }),
            a[3] / (if b[3] == 0.0 { 1.0 } else { b[3] }),
        ])
    }

    /// Bit-exact equality for test assertions: `+0.0 != -0.0`, and NaN lanes
    /// compare equal when their bit patterns match.
    #[inline(always)]
    pub fn debug_eq(self, rhs: Self) -> bool {
        let (a, b) = (self.0, rhs.0);
        f32_bits(a[0]) == f32_bits(b[0])
            && f32_bits(a[1]) == f32_bits(b[1])
            && f32_bits(a[2]) == f32_bits(b[2])
            && f32_bits(a[3]) == f32_bits(b[3])
    }
}

impl Add for F32x4 {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0] + b[0], a[1] + b[1], a[2] + b[2], a[3] + b[3]])
    }
}

impl Sub for F32x4 {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0] - b[0], a[1] - b[1], a[2] - b[2], a[3] - b[3]])
    }
}

impl Mul for F32x4 {
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0] * b[0], a[1] * b[1], a[2] * b[2], a[3] * b[3]])
    }
}

impl Div for F32x4 {
    type Output = Self;
    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0] / b[0], a[1] / b[1], a[2] / b[2], a[3] / b[3]])
    }
}

impl Neg for F32x4 {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        let a = self.0;
        Self([-a[0], -a[1], -a[2], -a[3]])
    }
}

// ===== F64x2 =====

impl F64x2 {
    #[inline(always)]
    pub fn zero() -> Self {
        Self([0.0; 2])
    }

    #[inline(always)]
    pub fn splat(v: f64) -> Self {
        Self([v; 2])
    }

    /// Per-lane constructor, most-significant lane first.
    #[inline(always)]
    pub fn new(e1: f64, e0: f64) -> Self {
        Self([e0, e1])
    }

    #[inline(always)]
    pub fn from_array(a: [f64; 2]) -> Self {
        Self(a)
    }

    #[inline(always)]
    pub fn to_array(self) -> [f64; 2] {
        self.0
    }

    #[inline(always)]
    pub fn lane0(self) -> f64 {
        self.0[0]
    }

    #[inline(always)]
    pub fn lane1(self) -> f64 {
        self.0[1]
    }

    /// See [`I64x2::shuffle`].
    #[inline(always)]
    pub fn shuffle<const I1: u32, const I0: u32>(self) -> Self {
        let _: () = LaneIdx::<I1, 2>::CHECK;
        let _: () = LaneIdx::<I0, 2>::CHECK;
        let a = self.0;
        Self([a[(I0 & 1) as usize], a[(I1 & 1) as usize]])
    }

    #[inline(always)]
    pub fn bitcast_i64x2(self) -> I64x2 {
        let a = self.0;
        I64x2([i64_from_bits(f64_bits(a[0])), i64_from_bits(f64_bits(a[1]))])
    }

    #[inline(always)]
    pub fn bitcast_i32x4(self) -> I32x4 {
        self.bitcast_i64x2().bitcast_i32x4()
    }

    #[inline(always)]
    pub fn bitcast_f32x4(self) -> F32x4 {
        self.bitcast_i64x2().bitcast_f32x4()
    }

    /// Round to nearest (ties to even) and convert to `i64`; out-of-range
    /// lanes are architecture-defined.
    #[inline(always)]
    pub fn convert_nearest_i64x2(self) -> I64x2 {
        let a = self.0;
        I64x2([
            a[0].round_ties_even() as i64,
            a[1].round_ties_even() as i64,
        ])
    }

    /// Round toward zero and convert to `i64`; out-of-range lanes are
    /// architecture-defined.
    #[inline(always)]
    pub fn convert_truncate_i64x2(self) -> I64x2 {
        let a = self.0;
        I64x2([a[0] as i64, a[1] as i64])
    }

    /// Round toward negative infinity and convert to `i64`; out-of-range
    /// lanes are architecture-defined.
    #[inline(always)]
    pub fn convert_floor_i64x2(self) -> I64x2 {
        let a = self.0;
        I64x2([a[0].floor() as i64, a[1].floor() as i64])
    }

    /// Round to nearest and convert to `i32`, filling output lanes 2–3 with
    /// zero.
    #[inline(always)]
    pub fn convert_nearest_i32x4(self) -> I32x4 {
        let a = self.0;
        I32x4([
            a[0].round_ties_even() as i32,
            a[1].round_ties_even() as i32,
            0,
            0,
        ])
    }

    /// Round toward zero and convert to `i32`, zero-filling lanes 2–3.
    #[inline(always)]
    pub fn convert_truncate_i32x4(self) -> I32x4 {
        let a = self.0;
        I32x4([a[0] as i32, a[1] as i32, 0, 0])
    }

    /// Round toward negative infinity and convert to `i32`, zero-filling
    /// lanes 2–3.
    #[inline(always)]
    pub fn convert_floor_i32x4(self) -> I32x4 {
        let a = self.0;
        I32x4([a[0].floor() as i32, a[1].floor() as i32, 0, 0])
    }

    /// IEEE double→single narrowing (ties to even), zero-filling output
    /// lanes 2–3.
    #[inline(always)]
    pub fn narrow_f32x4(self) -> F32x4 {
        let a = self.0;
        F32x4([a[0] as f32, a[1] as f32, 0.0, 0.0])
    }

    #[inline(always)]
    pub fn eq(self, rhs: Self) -> MaskF64x2 {
        let (a, b) = (self.0, rhs.0);
        MaskF64x2([m64(a[0] == b[0]), m64(a[1] == b[1])])
    }

    #[inline(always)]
    pub fn ne(self, rhs: Self) -> MaskF64x2 {
        !self.eq(rhs)
    }

    #[inline(always)]
    pub fn lt(self, rhs: Self) -> MaskF64x2 {
        let (a, b) = (self.0, rhs.0);
        MaskF64x2([m64(a[0] < b[0]), m64(a[1] < b[1])])
    }

    #[inline(always)]
    pub fn le(self, rhs: Self) -> MaskF64x2 {
        let (a, b) = (self.0, rhs.0);
        MaskF64x2([m64(a[0] <= b[0]), m64(a[1] <= b[1])])
    }

    #[inline(always)]
    pub fn gt(self, rhs: Self) -> MaskF64x2 {
        rhs.lt(self)
    }

    #[inline(always)]
    pub fn ge(self, rhs: Self) -> MaskF64x2 {
        rhs.le(self)
    }

    #[inline(always)]
    pub fn abs(self) -> Self {
        let a = self.0;
        Self([a[0].abs(), a[1].abs()])
    }

    /// See [`F32x4::min_fast`].
    #[inline(always)]
    pub fn min_fast(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0].min(b[0]), a[1].min(b[1])])
    }

    /// See [`F32x4::max_fast`].
    #[inline(always)]
    pub fn max_fast(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0].max(b[0]), a[1].max(b[1])])
    }

    /// Normalize `-0.0` lanes to `+0.0`.
    #[inline(always)]
    pub fn remove_signed_zero(self) -> Self {
        let a = self.0;
        Self([a[0] + 0.0, a[1] + 0.0])
    }

    /// See [`F32x4::safe_divide`].
    #[inline(always)]
    pub fn safe_divide(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([
            a[0] / (if b[0] == 0.0 { 1.0 } else { b[0] }),
            a[1] / (if b[1] == 0.0 { 1.0 } else { b[1] }),
        ])
    }

    /// Bit-exact equality; see [`F32x4::debug_eq`].
    #[inline(always)]
    pub fn debug_eq(self, rhs: Self) -> bool {
        let (a, b) = (self.0, rhs.0);
        f64_bits(a[0]) == f64_bits(b[0]) && f64_bits(a[1]) == f64_bits(b[1])
    }
}

impl Add for F64x2 {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0] + b[0], a[1] + b[1]])
    }
}

impl Sub for F64x2 {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0] - b[0], a[1] - b[1]])
    }
}

impl Mul for F64x2 {
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0] * b[0], a[1] * b[1]])
    }
}

impl Div for F64x2 {
    type Output = Self;
    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0] / b[0], a[1] / b[1]])
    }
}

impl Neg for F64x2 {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        let a = self.0;
        Self([-a[0], -a[1]])
    }
}

// ===== Mask32x4 =====

impl Mask32x4 {
    /// Per-lane constructor, most-significant lane first.
    #[inline(always)]
    pub fn new(e3: bool, e2: bool, e1: bool, e0: bool) -> Self {
        Self([m32(e0), m32(e1), m32(e2), m32(e3)])
    }

    #[inline(always)]
    pub fn splat(v: bool) -> Self {
        Self([m32(v); 4])
    }

    #[inline(always)]
    pub fn to_array(self) -> [bool; 4] {
        let a = self.0;
        [a[0] != 0, a[1] != 0, a[2] != 0, a[3] != 0]
    }

    #[inline(always)]
    pub fn lane0(self) -> bool {
        self.0[0] != 0
    }

    #[inline(always)]
    pub fn lane1(self) -> bool {
        self.0[1] != 0
    }

    #[inline(always)]
    pub fn lane2(self) -> bool {
        self.0[2] != 0
    }

    #[inline(always)]
    pub fn lane3(self) -> bool {
        self.0[3] != 0
    }

    /// Per-lane blend: lanes where the mask is set come from `if_true`.
    /// Bitwise, so NaN payloads and signed zeros pass through untouched.
    #[inline(always)]
    pub fn choose(self, if_true: I32x4, if_false: I32x4) -> I32x4 {
        let m = self.0;
        let t = if_true.to_array();
        let f = if_false.to_array();
        I32x4::from_array([
            i32_from_bits((i32_bits(t[0]) & m[0]) | (i32_bits(f[0]) & !m[0])),
            i32_from_bits((i32_bits(t[1]) & m[1]) | (i32_bits(f[1]) & !m[1])),
            i32_from_bits((i32_bits(t[2]) & m[2]) | (i32_bits(f[2]) & !m[2])),
            i32_from_bits((i32_bits(t[3]) & m[3]) | (i32_bits(f[3]) & !m[3])),
        ])
    }

    /// `choose(self, if_true, zero)` as a single bitwise AND.
    #[inline(always)]
    pub fn choose_else_zero(self, if_true: I32x4) -> I32x4 {
        let m = self.0;
        let t = if_true.to_array();
        I32x4::from_array([
            i32_from_bits(i32_bits(t[0]) & m[0]),
            i32_from_bits(i32_bits(t[1]) & m[1]),
            i32_from_bits(i32_bits(t[2]) & m[2]),
            i32_from_bits(i32_bits(t[3]) & m[3]),
        ])
    }

    /// Lane-wise mask equality by bit pattern. Distinct from vector `eq`:
    /// this compares mask bits, not data.
    #[inline(always)]
    pub fn eq(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([
            m32(a[0] == b[0]),
            m32(a[1] == b[1]),
            m32(a[2] == b[2]),
            m32(a[3] == b[3]),
        ])
    }

    /// Sign-extend lanes 0–1 into a 2-lane 64-bit mask.
    #[inline(always)]
    pub fn widen(self) -> Mask64x2 {
        let a = self.0;
        Mask64x2([m64(a[0] != 0), m64(a[1] != 0)])
    }

    #[inline(always)]
    pub fn debug_eq(self, rhs: Self) -> bool {
        self.0 == rhs.0
    }
}

impl BitAnd for Mask32x4 {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0] & b[0], a[1] & b[1], a[2] & b[2], a[3] & b[3]])
    }
}

impl BitOr for Mask32x4 {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0] | b[0], a[1] | b[1], a[2] | b[2], a[3] | b[3]])
    }
}

impl BitXor for Mask32x4 {
    type Output = Self;
    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]])
    }
}

impl Not for Mask32x4 {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self {
        let a = self.0;
        Self([!a[0], !a[1], !a[2], !a[3]])
    }
}

// ===== Mask64x2 =====

impl Mask64x2 {
    /// Per-lane constructor, most-significant lane first.
    #[inline(always)]
    pub fn new(e1: bool, e0: bool) -> Self {
        Self([m64(e0), m64(e1)])
    }

    #[inline(always)]
    pub fn splat(v: bool) -> Self {
        Self([m64(v); 2])
    }

    #[inline(always)]
    pub fn to_array(self) -> [bool; 2] {
        let a = self.0;
        [a[0] != 0, a[1] != 0]
    }

    #[inline(always)]
    pub fn lane0(self) -> bool {
        self.0[0] != 0
    }

    #[inline(always)]
    pub fn lane1(self) -> bool {
        self.0[1] != 0
    }

    #[inline(always)]
    pub fn choose(self, if_true: I64x2, if_false: I64x2) -> I64x2 {
        let m = self.0;
        let t = if_true.to_array();
        let f = if_false.to_array();
        I64x2::from_array([
            i64_from_bits((i64_bits(t[0]) & m[0]) | (i64_bits(f[0]) & !m[0])),
            i64_from_bits((i64_bits(t[1]) & m[1]) | (i64_bits(f[1]) & !m[1])),
        ])
    }

    /// `choose(self, if_true, zero)` as a single bitwise AND.
    #[inline(always)]
    pub fn choose_else_zero(self, if_true: I64x2) -> I64x2 {
        let m = self.0;
        let t = if_true.to_array();
        I64x2::from_array([
            i64_from_bits(i64_bits(t[0]) & m[0]),
            i64_from_bits(i64_bits(t[1]) & m[1]),
        ])
    }

    /// Lane-wise mask equality by bit pattern.
    #[inline(always)]
    pub fn eq(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([m64(a[0] == b[0]), m64(a[1] == b[1])])
    }

    /// Narrow each 64-bit mask lane into one 32-bit lane, zero-filling
    /// output lanes 2–3.
    #[inline(always)]
    pub fn narrow(self) -> Mask32x4 {
        let a = self.0;
        Mask32x4([m32(a[0] != 0), m32(a[1] != 0), 0, 0])
    }

    /// Bit-pattern reinterpretation: each 64-bit lane spans the two 32-bit
    /// lanes it occupies, so a set lane replicates into both.
    #[inline(always)]
    pub fn bitcast_mask32x4(self) -> Mask32x4 {
        let a = self.0;
        let [l0, l1] = split_u64(a[0]);
        let [l2, l3] = split_u64(a[1]);
        Mask32x4([l0, l1, l2, l3])
    }

    #[inline(always)]
    pub fn debug_eq(self, rhs: Self) -> bool {
        self.0 == rhs.0
    }
}

impl BitAnd for Mask64x2 {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0] & b[0], a[1] & b[1]])
    }
}

impl BitOr for Mask64x2 {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0] | b[0], a[1] | b[1]])
    }
}

impl BitXor for Mask64x2 {
    type Output = Self;
    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0] ^ b[0], a[1] ^ b[1]])
    }
}

impl Not for Mask64x2 {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self {
        let a = self.0;
        Self([!a[0], !a[1]])
    }
}

// ===== MaskF32x4 =====

impl MaskF32x4 {
    /// Per-lane constructor, most-significant lane first.
    #[inline(always)]
    pub fn new(e3: bool, e2: bool, e1: bool, e0: bool) -> Self {
        Self([m32(e0), m32(e1), m32(e2), m32(e3)])
    }

    #[inline(always)]
    pub fn splat(v: bool) -> Self {
        Self([m32(v); 4])
    }

    #[inline(always)]
    pub fn to_array(self) -> [bool; 4] {
        let a = self.0;
        [a[0] != 0, a[1] != 0, a[2] != 0, a[3] != 0]
    }

    #[inline(always)]
    pub fn lane0(self) -> bool {
        self.0[0] != 0
    }

    #[inline(always)]
    pub fn lane1(self) -> bool {
        self.0[1] != 0
    }

    #[inline(always)]
    pub fn lane2(self) -> bool {
        self.0[2] != 0
    }

    #[inline(always)]
    pub fn lane3(self) -> bool {
        self.0[3] != 0
    }

    #[inline(always)]
    pub fn choose(self, if_true: F32x4, if_false: F32x4) -> F32x4 {
        let m = self.0;
        let t = if_true.to_array();
        let f = if_false.to_array();
        F32x4::from_array([
            f32_from_bits((f32_bits(t[0]) & m[0]) | (f32_bits(f[0]) & !m[0])),
            f32_from_bits((f32_bits(t[1]) & m[1]) | (f32_bits(f[1]) & !m[1])),
            f32_from_bits((f32_bits(t[2]) & m[2]) | (f32_bits(f[2]) & !m[2])),
            f32_from_bits((f32_bits(t[3]) & m[3]) | (f32_bits(f[3]) & !m[3])),
        ])
    }

    /// `choose(self, if_true, zero)` as a single bitwise AND.
    #[inline(always)]
    pub fn choose_else_zero(self, if_true: F32x4) -> F32x4 {
        let m = self.0;
        let t = if_true.to_array();
        F32x4::from_array([
            f32_from_bits(f32_bits(t[0]) & m[0]),
            f32_from_bits(f32_bits(t[1]) & m[1]),
            f32_from_bits(f32_bits(t[2]) & m[2]),
            f32_from_bits(f32_bits(t[3]) & m[3]),
        ])
    }

    /// Lane-wise mask equality by bit pattern — not a float comparison, so
    /// two set lanes compare equal regardless of any NaN subtlety in the
    /// data that produced them.
    #[inline(always)]
    pub fn eq(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([
            m32(a[0] == b[0]),
            m32(a[1] == b[1]),
            m32(a[2] == b[2]),
            m32(a[3] == b[3]),
        ])
    }

    /// Sign-extend lanes 0–1 into a 2-lane double-precision mask.
    #[inline(always)]
    pub fn widen(self) -> MaskF64x2 {
        let a = self.0;
        MaskF64x2([m64(a[0] != 0), m64(a[1] != 0)])
    }

    #[inline(always)]
    pub fn debug_eq(self, rhs: Self) -> bool {
        self.0 == rhs.0
    }
}

impl BitAnd for MaskF32x4 {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0] & b[0], a[1] & b[1], a[2] & b[2], a[3] & b[3]])
    }
}

impl BitOr for MaskF32x4 {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0] | b[0], a[1] | b[1], a[2] | b[2], a[3] | b[3]])
    }
}

impl BitXor for MaskF32x4 {
    type Output = Self;
    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]])
    }
}

impl Not for MaskF32x4 {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self {
        let a = self.0;
        Self([!a[0], !a[1], !a[2], !a[3]])
    }
}

// ===== MaskF64x2 =====

impl MaskF64x2 {
    /// Per-lane constructor, most-significant lane first.
    #[inline(always)]
    pub fn new(e1: bool, e0: bool) -> Self {
        Self([m64(e0), m64(e1)])
    }

    #[inline(always)]
    pub fn splat(v: bool) -> Self {
        Self([m64(v); 2])
    }

    #[inline(always)]
    pub fn to_array(self) -> [bool; 2] {
        let a = self.0;
        [a[0] != 0, a[1] != 0]
    }

    #[inline(always)]
    pub fn lane0(self) -> bool {
        self.0[0] != 0
    }

    #[inline(always)]
    pub fn lane1(self) -> bool {
        self.0[1] != 0
    }

    #[inline(always)]
    pub fn choose(self, if_true: F64x2, if_false: F64x2) -> F64x2 {
        let m = self.0;
        let t = if_true.to_array();
        let f = if_false.to_array();
        F64x2::from_array([
            f64_from_bits((f64_bits(t[0]) & m[0]) | (f64_bits(f[0]) & !m[0])),
            f64_from_bits((f64_bits(t[1]) & m[1]) | (f64_bits(f[1]) & !m[1])),
        ])
    }

    /// `choose(self, if_true, zero)` as a single bitwise AND.
    #[inline(always)]
    pub fn choose_else_zero(self, if_true: F64x2) -> F64x2 {
        let m = self.0;
        let t = if_true.to_array();
        F64x2::from_array([
            f64_from_bits(f64_bits(t[0]) & m[0]),
            f64_from_bits(f64_bits(t[1]) & m[1]),
        ])
    }

    /// Lane-wise mask equality by bit pattern.
    #[inline(always)]
    pub fn eq(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([m64(a[0] == b[0]), m64(a[1] == b[1])])
    }

    /// Narrow each lane into one single-precision mask lane, zero-filling
    /// output lanes 2–3.
    #[inline(always)]
    pub fn narrow(self) -> MaskF32x4 {
        let a = self.0;
        MaskF32x4([m32(a[0] != 0), m32(a[1] != 0), 0, 0])
    }

    #[inline(always)]
    pub fn debug_eq(self, rhs: Self) -> bool {
        self.0 == rhs.0
    }
}

impl BitAnd for MaskF64x2 {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0] & b[0], a[1] & b[1]])
    }
}

impl BitOr for MaskF64x2 {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0] | b[0], a[1] | b[1]])
    }
}

impl BitXor for MaskF64x2 {
    type Output = Self;
    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0] ^ b[0], a[1] ^ b[1]])
    }
}

impl Not for MaskF64x2 {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self {
        let a = self.0;
        Self([!a[0], !a[1]])
    }
}

// ===== Nominal conversions between integer and float masks =====

impl From<Mask32x4> for MaskF32x4 {
    #[inline(always)]
    fn from(m: Mask32x4) -> Self {
        Self(m.0)
    }
}

impl From<MaskF32x4> for Mask32x4 {
    #[inline(always)]
    fn from(m: MaskF32x4) -> Self {
        Self(m.0)
    }
}

impl From<Mask64x2> for MaskF64x2 {
    #[inline(always)]
    fn from(m: Mask64x2) -> Self {
        Self(m.0)
    }
}

impl From<MaskF64x2> for Mask64x2 {
    #[inline(always)]
    fn from(m: MaskF64x2) -> Self {
        Self(m.0)
    }
}

//! x86_64 SSE4.2 backend.
//!
//! Thin newtype wrappers over `__m128i` / `__m128` / `__m128d`. Every method
//! is a fixed, branch-free instruction sequence; anything that has no packed
//! SSE form (64-bit division, 64-bit multiply, 64-bit arithmetic right
//! shift, `i64`↔`f64` conversion) drops to per-lane scalar code on the
//! extracted values and rebuilds the register.
//!
//! 4-lane shuffles compile to a single `pshufb` against a control vector
//! computed at compile time; because the immediate-operand shuffles cannot
//! take an index derived from a const generic on stable Rust, the control
//! bytes live in an associated const and the load folds away. 2-lane
//! shuffles select a `pshufd`/`shufpd` immediate through a match that
//! monomorphization collapses to one arm.
//!
//! # Safety
//!
//! This module only compiles when `sse4.2` is statically enabled for the
//! target, so every intrinsic call here is reachable only on hardware that
//! supports it. All pointers passed to load/store intrinsics come from
//! stack arrays sized to exactly 16 bytes.

#![allow(unused_unsafe)]

use crate::{LaneIdx, ShiftAmt};
use std::arch::x86_64::*;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Sub};

/// Four signed 32-bit lanes in one SSE register.
#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub struct I32x4(__m128i);

/// Two signed 64-bit lanes in one SSE register.
#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub struct I64x2(__m128i);

/// Four single-precision lanes in one SSE register.
#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub struct F32x4(__m128);

/// Two double-precision lanes in one SSE register.
#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub struct F64x2(__m128d);

/// Comparison mask for [`I32x4`]; lanes are all-1s or all-0s.
#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub struct Mask32x4(__m128i);

/// Comparison mask for [`I64x2`].
#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub struct Mask64x2(__m128i);

/// Comparison mask for [`F32x4`]; distinct nominal type from [`Mask32x4`]
/// so float and integer masks cannot be mixed by accident.
#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub struct MaskF32x4(__m128);

/// Comparison mask for [`F64x2`].
#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub struct MaskF64x2(__m128d);

#[inline(always)]
fn all_ones() -> __m128i {
    unsafe {
        let z = _mm_setzero_si128();
        _mm_cmpeq_epi32(z, z)
    }
}

/// Bit-exact 128-bit equality: compare all 16 byte lanes and require a full
/// movemask.
#[inline(always)]
fn bits_eq(a: __m128i, b: __m128i) -> bool {
    unsafe { _mm_movemask_epi8(_mm_cmpeq_epi8(a, b)) == 0xFFFF }
}

/// `pshufb` control bytes for a 4×32-bit lane permutation: output lane `j`
/// gathers the four bytes of input lane `idx[j]`.
const fn shuffle_ctrl(i3: u32, i2: u32, i1: u32, i0: u32) -> [i8; 16] {
    let idx = [i0 & 3, i1 & 3, i2 & 3, i3 & 3];
    let mut bytes = [0i8; 16];
    let mut lane = 0;
    while lane < 4 {
        let base = (idx[lane] * 4) as i8;
        let mut k = 0;
        while k < 4 {
            bytes[lane * 4 + k] = base + k as i8;
            k += 1;
        }
        lane += 1;
    }
    bytes
}

/// Carrier for the per-permutation control vector; the associated const is
/// evaluated once per monomorphization and the load of it folds to a
/// constant.
struct Ctrl4<const I3: u32, const I2: u32, const I1: u32, const I0: u32>;

impl<const I3: u32, const I2: u32, const I1: u32, const I0: u32> Ctrl4<I3, I2, I1, I0> {
    const BYTES: [i8; 16] = shuffle_ctrl(I3, I2, I1, I0);
}

#[inline(always)]
fn pshufb_4x32<const I3: u32, const I2: u32, const I1: u32, const I0: u32>(v: __m128i) -> __m128i {
    unsafe {
        let ctrl = _mm_loadu_si128(Ctrl4::<I3, I2, I1, I0>::BYTES.as_ptr() as *const __m128i);
        _mm_shuffle_epi8(v, ctrl)
    }
}

// ===== I32x4 =====

impl I32x4 {
    /// All lanes zero.
    #[inline(always)]
    pub fn zero() -> Self {
        Self(unsafe { _mm_setzero_si128() })
    }

    /// Broadcast one value into all lanes.
    #[inline(always)]
    pub fn splat(v: i32) -> Self {
        Self(unsafe { _mm_set1_epi32(v) })
    }

    /// Per-lane constructor, most-significant lane first (the hardware
    /// `set` convention): `new(e3, e2, e1, e0)` puts `e0` in lane 0.
    #[inline(always)]
    pub fn new(e3: i32, e2: i32, e1: i32, e0: i32) -> Self {
        Self(unsafe { _mm_set_epi32(e3, e2, e1, e0) })
    }

    /// Lane-order array constructor (lane 0 first).
    #[inline(always)]
    pub fn from_array(a: [i32; 4]) -> Self {
        Self(unsafe { _mm_loadu_si128(a.as_ptr() as *const __m128i) })
    }

    /// Lane-order array extraction (lane 0 first).
    #[inline(always)]
    pub fn to_array(self) -> [i32; 4] {
        let mut out = [0i32; 4];
        unsafe { _mm_storeu_si128(out.as_mut_ptr() as *mut __m128i, self.0) };
        out
    }

    #[inline(always)]
    pub fn lane0(self) -> i32 {
        self.to_array()[0]
    }

    #[inline(always)]
    pub fn lane1(self) -> i32 {
        self.to_array()[1]
    }

    #[inline(always)]
    pub fn lane2(self) -> i32 {
        self.to_array()[2]
    }

    #[inline(always)]
    pub fn lane3(self) -> i32 {
        self.to_array()[3]
    }

    /// Compile-time-constant lane permutation: output lane `k` takes input
    /// lane `Ik`. Indices outside `0..4` fail the build.
    #[inline(always)]
    pub fn shuffle<const I3: u32, const I2: u32, const I1: u32, const I0: u32>(self) -> Self {
        let _: () = LaneIdx::<I3, 4>::CHECK;
        let _: () = LaneIdx::<I2, 4>::CHECK;
        let _: () = LaneIdx::<I1, 4>::CHECK;
        let _: () = LaneIdx::<I0, 4>::CHECK;
        Self(pshufb_4x32::<I3, I2, I1, I0>(self.0))
    }

    /// Reinterpret the 128 bits as two 64-bit lanes; 32-bit lanes 0–1 become
    /// 64-bit lane 0.
    #[inline(always)]
    pub fn bitcast_i64x2(self) -> I64x2 {
        I64x2(self.0)
    }

    /// Reinterpret lanes as single-precision floats, bit pattern preserved.
    #[inline(always)]
    pub fn bitcast_f32x4(self) -> F32x4 {
        F32x4(unsafe { _mm_castsi128_ps(self.0) })
    }

    /// Reinterpret the 128 bits as two double-precision lanes.
    #[inline(always)]
    pub fn bitcast_f64x2(self) -> F64x2 {
        F64x2(unsafe { _mm_castsi128_pd(self.0) })
    }

    /// Convert each lane to `f32` (`cvtdq2ps`).
    #[inline(always)]
    pub fn convert_f32x4(self) -> F32x4 {
        F32x4(unsafe { _mm_cvtepi32_ps(self.0) })
    }

    /// Convert the low two lanes to `f64` (exact, `cvtdq2pd`).
    #[inline(always)]
    pub fn convert_f64x2(self) -> F64x2 {
        F64x2(unsafe { _mm_cvtepi32_pd(self.0) })
    }

    /// Sign-extend the low two lanes to 64 bits (`pmovsxdq`).
    #[inline(always)]
    pub fn widen_i64x2(self) -> I64x2 {
        I64x2(unsafe { _mm_cvtepi32_epi64(self.0) })
    }

    #[inline(always)]
    pub fn eq(self, rhs: Self) -> Mask32x4 {
        Mask32x4(unsafe { _mm_cmpeq_epi32(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn ne(self, rhs: Self) -> Mask32x4 {
        !self.eq(rhs)
    }

    #[inline(always)]
    pub fn lt(self, rhs: Self) -> Mask32x4 {
        Mask32x4(unsafe { _mm_cmplt_epi32(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn le(self, rhs: Self) -> Mask32x4 {
        !self.gt(rhs)
    }

    #[inline(always)]
    pub fn gt(self, rhs: Self) -> Mask32x4 {
        Mask32x4(unsafe { _mm_cmpgt_epi32(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn ge(self, rhs: Self) -> Mask32x4 {
        !self.lt(rhs)
    }

    /// Lane-wise absolute value (`pabsd`); `i32::MIN` stays `i32::MIN`.
    #[inline(always)]
    pub fn abs(self) -> Self {
        Self(unsafe { _mm_abs_epi32(self.0) })
    }

    #[inline(always)]
    pub fn min(self, rhs: Self) -> Self {
        Self(unsafe { _mm_min_epi32(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn max(self, rhs: Self) -> Self {
        Self(unsafe { _mm_max_epi32(self.0, rhs.0) })
    }

    /// Division with zero divisors replaced by 1 beforehand. SSE has no
    /// packed integer division, so this runs per lane on the extracted
    /// values. Does not protect `i32::MIN / -1`.
    #[inline(always)]
    pub fn safe_divide(self, rhs: Self) -> Self {
        let a = self.to_array();
        let b = rhs.to_array();
        Self::from_array([
            a[0] / (if b[0] == 0 { 1 } else { b[0] }),
            a[1] / (if b[1] == 0 { 1 } else { b[1] }),
            a[2] / (if b[2] == 0 { 1 } else { b[2] }),
            a[3] / (if b[3] == 0 { 1 } else { b[3] }),
        ])
    }

    /// Shift every lane left by the compile-time amount `N` (`N` >= 32
    /// fails the build). Uses the register-count form so no immediate is
    /// needed.
    #[inline(always)]
    pub fn shl<const N: u32>(self) -> Self {
        let _: () = ShiftAmt::<N, 32>::CHECK;
        Self(unsafe { _mm_sll_epi32(self.0, _mm_cvtsi32_si128(N as i32)) })
    }

    /// Arithmetic right shift by the compile-time amount `N`.
    #[inline(always)]
    pub fn shr<const N: u32>(self) -> Self {
        let _: () = ShiftAmt::<N, 32>::CHECK;
        Self(unsafe { _mm_sra_epi32(self.0, _mm_cvtsi32_si128(N as i32)) })
    }

    /// Bit-exact equality for test assertions; unlike [`I32x4::eq`] this
    /// returns a `bool`, not a mask.
    #[inline(always)]
    pub fn debug_eq(self, rhs: Self) -> bool {
        bits_eq(self.0, rhs.0)
    }
}

impl Add for I32x4 {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { _mm_add_epi32(self.0, rhs.0) })
    }
}

impl Sub for I32x4 {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(unsafe { _mm_sub_epi32(self.0, rhs.0) })
    }
}

impl Mul for I32x4 {
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self(unsafe { _mm_mullo_epi32(self.0, rhs.0) })
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
        Self(unsafe { _mm_and_si128(self.0, rhs.0) })
    }
}

impl BitOr for I32x4 {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self(unsafe { _mm_or_si128(self.0, rhs.0) })
    }
}

impl BitXor for I32x4 {
    type Output = Self;
    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self(unsafe { _mm_xor_si128(self.0, rhs.0) })
    }
}

impl Not for I32x4 {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self {
        Self(unsafe { _mm_xor_si128(self.0, all_ones()) })
    }
}

// ===== I64x2 =====

impl I64x2 {
    #[inline(always)]
    pub fn zero() -> Self {
        Self(unsafe { _mm_setzero_si128() })
    }

    #[inline(always)]
    pub fn splat(v: i64) -> Self {
        Self(unsafe { _mm_set1_epi64x(v) })
    }

    /// Per-lane constructor, most-significant lane first.
    #[inline(always)]
    pub fn new(e1: i64, e0: i64) -> Self {
        Self(unsafe { _mm_set_epi64x(e1, e0) })
    }

    #[inline(always)]
    pub fn from_array(a: [i64; 2]) -> Self {
        Self(unsafe { _mm_loadu_si128(a.as_ptr() as *const __m128i) })
    }

    #[inline(always)]
    pub fn to_array(self) -> [i64; 2] {
        let mut out = [0i64; 2];
        unsafe { _mm_storeu_si128(out.as_mut_ptr() as *mut __m128i, self.0) };
        out
    }

    #[inline(always)]
    pub fn lane0(self) -> i64 {
        unsafe { _mm_cvtsi128_si64(self.0) }
    }

    #[inline(always)]
    pub fn lane1(self) -> i64 {
        unsafe { _mm_cvtsi128_si64(_mm_unpackhi_epi64(self.0, self.0)) }
    }

    /// Two-lane compile-time permutation via a single `pshufd`; the match
    /// collapses to one arm at monomorphization.
    #[inline(always)]
    pub fn shuffle<const I1: u32, const I0: u32>(self) -> Self {
        let _: () = LaneIdx::<I1, 2>::CHECK;
        let _: () = LaneIdx::<I0, 2>::CHECK;
        match (I1 & 1, I0 & 1) {
            (1, 0) => self,
            (0, 1) => Self(unsafe { _mm_shuffle_epi32::<0b0100_1110>(self.0) }),
            (0, 0) => Self(unsafe { _mm_shuffle_epi32::<0b0100_0100>(self.0) }),
            (1, 1) => Self(unsafe { _mm_shuffle_epi32::<0b1110_1110>(self.0) }),
            _ => unreachable!(),
        }
    }

    /// Reinterpret as four 32-bit lanes; 64-bit lane 0 supplies 32-bit
    /// lanes 0–1.
    #[inline(always)]
    pub fn bitcast_i32x4(self) -> I32x4 {
        I32x4(self.0)
    }

    #[inline(always)]
    pub fn bitcast_f32x4(self) -> F32x4 {
        F32x4(unsafe { _mm_castsi128_ps(self.0) })
    }

    #[inline(always)]
    pub fn bitcast_f64x2(self) -> F64x2 {
        F64x2(unsafe { _mm_castsi128_pd(self.0) })
    }

    /// Convert each lane to `f64`. SSE has no packed `i64`→`f64` form, so
    /// each lane goes through the scalar `cvtsi2sd` path.
    #[inline(always)]
    pub fn convert_f64x2(self) -> F64x2 {
        let lo = self.lane0() as f64;
        let hi = self.lane1() as f64;
        F64x2(unsafe { _mm_set_pd(hi, lo) })
    }

    /// Truncate each lane to its low 32 bits — no saturation, by contract —
    /// and zero-fill output lanes 2–3.
    #[inline(always)]
    pub fn narrow_i32x4(self) -> I32x4 {
        // Gather the low halves into lanes 0-1, then zero the top 64 bits.
        I32x4(unsafe { _mm_move_epi64(_mm_shuffle_epi32::<0b0000_1000>(self.0)) })
    }

    #[inline(always)]
    pub fn eq(self, rhs: Self) -> Mask64x2 {
        Mask64x2(unsafe { _mm_cmpeq_epi64(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn ne(self, rhs: Self) -> Mask64x2 {
        !self.eq(rhs)
    }

    #[inline(always)]
    pub fn lt(self, rhs: Self) -> Mask64x2 {
        rhs.gt(self)
    }

    #[inline(always)]
    pub fn le(self, rhs: Self) -> Mask64x2 {
        !self.gt(rhs)
    }

    #[inline(always)]
    pub fn gt(self, rhs: Self) -> Mask64x2 {
        Mask64x2(unsafe { _mm_cmpgt_epi64(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn ge(self, rhs: Self) -> Mask64x2 {
        !rhs.gt(self)
    }

    /// Absolute value via the sign-mask identity `(v ^ s) - s`; there is no
    /// 64-bit `pabs` below AVX-512.
    #[inline(always)]
    pub fn abs(self) -> Self {
        unsafe {
            let sign = _mm_cmpgt_epi64(_mm_setzero_si128(), self.0);
            Self(_mm_sub_epi64(_mm_xor_si128(self.0, sign), sign))
        }
    }

    #[inline(always)]
    pub fn min(self, rhs: Self) -> Self {
        // No pminsq below AVX-512: compare then blend.
        unsafe {
            let gt = _mm_cmpgt_epi64(self.0, rhs.0);
            Self(_mm_blendv_epi8(self.0, rhs.0, gt))
        }
    }

    #[inline(always)]
    pub fn max(self, rhs: Self) -> Self {
        unsafe {
            let gt = _mm_cmpgt_epi64(self.0, rhs.0);
            Self(_mm_blendv_epi8(rhs.0, self.0, gt))
        }
    }

    /// See [`I32x4::safe_divide`].
    #[inline(always)]
    pub fn safe_divide(self, rhs: Self) -> Self {
        let a = self.to_array();
        let b = rhs.to_array();
        Self::from_array([
            a[0] / (if b[0] == 0 { 1 } else { b[0] }),
            a[1] / (if b[1] == 0 { 1 } else { b[1] }),
        ])
    }

    #[inline(always)]
    pub fn shl<const N: u32>(self) -> Self {
        let _: () = ShiftAmt::<N, 64>::CHECK;
        Self(unsafe { _mm_sll_epi64(self.0, _mm_cvtsi32_si128(N as i32)) })
    }

    /// Arithmetic right shift. SSE only has the logical 64-bit form, so
    /// this runs per lane on the extracted values.
    #[inline(always)]
    pub fn shr<const N: u32>(self) -> Self {
        let _: () = ShiftAmt::<N, 64>::CHECK;
        let a = self.to_array();
        Self::from_array([a[0] >> N, a[1] >> N])
    }

    #[inline(always)]
    pub fn debug_eq(self, rhs: Self) -> bool {
        bits_eq(self.0, rhs.0)
    }
}

impl Add for I64x2 {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { _mm_add_epi64(self.0, rhs.0) })
    }
}

impl Sub for I64x2 {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(unsafe { _mm_sub_epi64(self.0, rhs.0) })
    }
}

/// Lane-wise; there is no packed 64-bit multiply below AVX-512.
impl Mul for I64x2 {
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        let a = self.to_array();
        let b = rhs.to_array();
        Self::from_array([a[0].wrapping_mul(b[0]), a[1].wrapping_mul(b[1])])
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
        Self(unsafe { _mm_and_si128(self.0, rhs.0) })
    }
}

impl BitOr for I64x2 {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self(unsafe { _mm_or_si128(self.0, rhs.0) })
    }
}

impl BitXor for I64x2 {
    type Output = Self;
    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self(unsafe { _mm_xor_si128(self.0, rhs.0) })
    }
}

impl Not for I64x2 {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self {
        Self(unsafe { _mm_xor_si128(self.0, all_ones()) })
    }
}

// ===== F32x4 =====

impl F32x4 {
    #[inline(always)]
    pub fn zero() -> Self {
        Self(unsafe { _mm_setzero_ps() })
    }

    #[inline(always)]
    pub fn splat(v: f32) -> Self {
        Self(unsafe { _mm_set1_ps(v) })
    }

    /// Per-lane constructor, most-significant lane first.
    #[inline(always)]
    pub fn new(e3: f32, e2: f32, e1: f32, e0: f32) -> Self {
        Self(unsafe { _mm_set_ps(e3, e2, e1, e0) })
    }

    #[inline(always)]
    pub fn from_array(a: [f32; 4]) -> Self {
        Self(unsafe { _mm_loadu_ps(a.as_ptr()) })
    }

    #[inline(always)]
    pub fn to_array(self) -> [f32; 4] {
        let mut out = [0.0f32; 4];
        unsafe { _mm_storeu_ps(out.as_mut_ptr(), self.0) };
        out
    }

    #[inline(always)]
    pub fn lane0(self) -> f32 {
        unsafe { _mm_cvtss_f32(self.0) }
    }

    #[inline(always)]
    pub fn lane1(self) -> f32 {
        self.to_array()[1]
    }

    #[inline(always)]
    pub fn lane2(self) -> f32 {
        self.to_array()[2]
    }

    #[inline(always)]
    pub fn lane3(self) -> f32 {
        self.to_array()[3]
    }

    /// See [`I32x4::shuffle`].
    #[inline(always)]
    pub fn shuffle<const I3: u32, const I2: u32, const I1: u32, const I0: u32>(self) -> Self {
        let _: () = LaneIdx::<I3, 4>::CHECK;
        let _: () = LaneIdx::<I2, 4>::CHECK;
        let _: () = LaneIdx::<I1, 4>::CHECK;
        let _: () = LaneIdx::<I0, 4>::CHECK;
        unsafe {
            Self(_mm_castsi128_ps(pshufb_4x32::<I3, I2, I1, I0>(
                _mm_castps_si128(self.0),
            )))
        }
    }

    #[inline(always)]
    pub fn bitcast_i32x4(self) -> I32x4 {
        I32x4(unsafe { _mm_castps_si128(self.0) })
    }

    #[inline(always)]
    pub fn bitcast_i64x2(self) -> I64x2 {
        I64x2(unsafe { _mm_castps_si128(self.0) })
    }

    #[inline(always)]
    pub fn bitcast_f64x2(self) -> F64x2 {
        F64x2(unsafe { _mm_castps_pd(self.0) })
    }

    /// Round to nearest under the current rounding mode (ties to even by
    /// default) and convert to `i32` (`cvtps2dq`). Out-of-range lanes yield
    /// the x86 sentinel `i32::MIN`.
    #[inline(always)]
    pub fn convert_nearest_i32x4(self) -> I32x4 {
        I32x4(unsafe { _mm_cvtps_epi32(self.0) })
    }

    /// Round toward zero and convert to `i32` (`cvttps2dq`); out-of-range
    /// lanes yield `i32::MIN`.
    #[inline(always)]
    pub fn convert_truncate_i32x4(self) -> I32x4 {
        I32x4(unsafe { _mm_cvttps_epi32(self.0) })
    }

    /// Round toward negative infinity (`roundps`) then convert; out-of-range
    /// lanes yield `i32::MIN`.
    #[inline(always)]
    pub fn convert_floor_i32x4(self) -> I32x4 {
        I32x4(unsafe { _mm_cvttps_epi32(_mm_floor_ps(self.0)) })
    }

    /// Widen the low two lanes to `f64` (exact, `cvtps2pd`).
    #[inline(always)]
    pub fn widen_f64x2(self) -> F64x2 {
        F64x2(unsafe { _mm_cvtps_pd(self.0) })
    }

    /// IEEE equality: a NaN lane compares unequal to everything, itself
    /// included.
    #[inline(always)]
    pub fn eq(self, rhs: Self) -> MaskF32x4 {
        MaskF32x4(unsafe { _mm_cmpeq_ps(self.0, rhs.0) })
    }

    /// IEEE inequality; true for NaN lanes (unordered).
    #[inline(always)]
    pub fn ne(self, rhs: Self) -> MaskF32x4 {
        MaskF32x4(unsafe { _mm_cmpneq_ps(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn lt(self, rhs: Self) -> MaskF32x4 {
        MaskF32x4(unsafe { _mm_cmplt_ps(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn le(self, rhs: Self) -> MaskF32x4 {
        MaskF32x4(unsafe { _mm_cmple_ps(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn gt(self, rhs: Self) -> MaskF32x4 {
        MaskF32x4(unsafe { _mm_cmpgt_ps(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn ge(self, rhs: Self) -> MaskF32x4 {
        MaskF32x4(unsafe { _mm_cmpge_ps(self.0, rhs.0) })
    }

    /// Clear the sign bit of every lane.
    #[inline(always)]
    pub fn abs(self) -> Self {
        Self(unsafe { _mm_andnot_ps(_mm_set1_ps(-0.0), self.0) })
    }

    /// Lane-wise minimum (`minps`): returns the second operand when either
    /// lane is NaN or both are zero, so `min_fast(a, b)` and
    /// `min_fast(b, a)` can differ on those inputs. Compose with
    /// [`F32x4::remove_signed_zero`] when determinism matters.
    #[inline(always)]
    pub fn min_fast(self, rhs: Self) -> Self {
        Self(unsafe { _mm_min_ps(self.0, rhs.0) })
    }

    /// Lane-wise maximum (`maxps`); see [`F32x4::min_fast`].
    #[inline(always)]
    pub fn max_fast(self, rhs: Self) -> Self {
        Self(unsafe { _mm_max_ps(self.0, rhs.0) })
    }

    /// Normalize `-0.0` lanes to `+0.0` (adds `+0.0`; other values and NaN
    /// payloads pass through).
    #[inline(always)]
    pub fn remove_signed_zero(self) -> Self {
        Self(unsafe { _mm_add_ps(self.0, _mm_setzero_ps()) })
    }

    /// Division with zero divisors replaced by 1.0 beforehand, so a zero
    /// lane never produces an infinity or a hardware stall.
    #[inline(always)]
    pub fn safe_divide(self, rhs: Self) -> Self {
        unsafe {
            let zero_mask = _mm_cmpeq_ps(rhs.0, _mm_setzero_ps());
            let divisor = _mm_blendv_ps(rhs.0, _mm_set1_ps(1.0), zero_mask);
            Self(_mm_div_ps(self.0, divisor))
        }
    }

    /// Bit-exact equality for test assertions: `+0.0 != -0.0`, and NaN lanes
    /// compare equal when their bit patterns match.
    #[inline(always)]
    pub fn debug_eq(self, rhs: Self) -> bool {
        unsafe { bits_eq(_mm_castps_si128(self.0), _mm_castps_si128(rhs.0)) }
    }
}

impl Add for F32x4 {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { _mm_add_ps(self.0, rhs.0) })
    }
}

impl Sub for F32x4 {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(unsafe { _mm_sub_ps(self.0, rhs.0) })
    }
}

impl Mul for F32x4 {
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self(unsafe { _mm_mul_ps(self.0, rhs.0) })
    }
}

impl Div for F32x4 {
    type Output = Self;
    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self(unsafe { _mm_div_ps(self.0, rhs.0) })
    }
}

impl Neg for F32x4 {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self(unsafe { _mm_xor_ps(self.0, _mm_set1_ps(-0.0)) })
    }
}

// ===== F64x2 =====

impl F64x2 {
    #[inline(always)]
    pub fn zero() -> Self {
        Self(unsafe { _mm_setzero_pd() })
    }

    #[inline(always)]
    pub fn splat(v: f64) -> Self {
        Self(unsafe { _mm_set1_pd(v) })
    }

    /// Per-lane constructor, most-significant lane first.
    #[inline(always)]
    pub fn new(e1: f64, e0: f64) -> Self {
        Self(unsafe { _mm_set_pd(e1, e0) })
    }

    #[inline(always)]
    pub fn from_array(a: [f64; 2]) -> Self {
        Self(unsafe { _mm_loadu_pd(a.as_ptr()) })
    }

    #[inline(always)]
    pub fn to_array(self) -> [f64; 2] {
        let mut out = [0.0f64; 2];
        unsafe { _mm_storeu_pd(out.as_mut_ptr(), self.0) };
        out
    }

    #[inline(always)]
    pub fn lane0(self) -> f64 {
        unsafe { _mm_cvtsd_f64(self.0) }
    }

    #[inline(always)]
    pub fn lane1(self) -> f64 {
        unsafe { _mm_cvtsd_f64(_mm_unpackhi_pd(self.0, self.0)) }
    }

    /// See [`I64x2::shuffle`]; compiles to one `shufpd`.
    #[inline(always)]
    pub fn shuffle<const I1: u32, const I0: u32>(self) -> Self {
        let _: () = LaneIdx::<I1, 2>::CHECK;
        let _: () = LaneIdx::<I0, 2>::CHECK;
        match (I1 & 1, I0 & 1) {
            (1, 0) => self,
            (0, 1) => Self(unsafe { _mm_shuffle_pd::<0b01>(self.0, self.0) }),
            (0, 0) => Self(unsafe { _mm_shuffle_pd::<0b00>(self.0, self.0) }),
            (1, 1) => Self(unsafe { _mm_shuffle_pd::<0b11>(self.0, self.0) }),
            _ => unreachable!(),
        }
    }

    #[inline(always)]
    pub fn bitcast_i64x2(self) -> I64x2 {
        I64x2(unsafe { _mm_castpd_si128(self.0) })
    }

    #[inline(always)]
    pub fn bitcast_i32x4(self) -> I32x4 {
        I32x4(unsafe { _mm_castpd_si128(self.0) })
    }

    #[inline(always)]
    pub fn bitcast_f32x4(self) -> F32x4 {
        F32x4(unsafe { _mm_castpd_ps(self.0) })
    }

    /// Round to nearest (ties to even by default) and convert to `i64`. No
    /// packed form below AVX-512, so each lane goes through the scalar
    /// `cvtsd2si`; out-of-range lanes yield the x86 sentinel `i64::MIN`.
    #[inline(always)]
    pub fn convert_nearest_i64x2(self) -> I64x2 {
        unsafe {
            let lo = _mm_cvtsd_si64(self.0);
            let hi = _mm_cvtsd_si64(_mm_unpackhi_pd(self.0, self.0));
            I64x2(_mm_set_epi64x(hi, lo))
        }
    }

    /// Round toward zero and convert to `i64` (scalar `cvttsd2si` per
    /// lane); out-of-range lanes yield `i64::MIN`.
    #[inline(always)]
    pub fn convert_truncate_i64x2(self) -> I64x2 {
        unsafe {
            let lo = _mm_cvttsd_si64(self.0);
            let hi = _mm_cvttsd_si64(_mm_unpackhi_pd(self.0, self.0));
            I64x2(_mm_set_epi64x(hi, lo))
        }
    }

    /// Round toward negative infinity and convert to `i64`; out-of-range
    /// lanes yield `i64::MIN`.
    #[inline(always)]
    pub fn convert_floor_i64x2(self) -> I64x2 {
        unsafe {
            let floored = _mm_floor_pd(self.0);
            let lo = _mm_cvttsd_si64(floored);
            let hi = _mm_cvttsd_si64(_mm_unpackhi_pd(floored, floored));
            I64x2(_mm_set_epi64x(hi, lo))
        }
    }

    /// Round to nearest and convert to `i32` (`cvtpd2dq`), zero-filling
    /// output lanes 2–3; out-of-range lanes yield `i32::MIN`.
    #[inline(always)]
    pub fn convert_nearest_i32x4(self) -> I32x4 {
        I32x4(unsafe { _mm_cvtpd_epi32(self.0) })
    }

    /// Round toward zero and convert to `i32` (`cvttpd2dq`), zero-filling
    /// lanes 2–3.
    #[inline(always)]
    pub fn convert_truncate_i32x4(self) -> I32x4 {
        I32x4(unsafe { _mm_cvttpd_epi32(self.0) })
    }

    /// Round toward negative infinity and convert to `i32`, zero-filling
    /// lanes 2–3.
    #[inline(always)]
    pub fn convert_floor_i32x4(self) -> I32x4 {
        I32x4(unsafe { _mm_cvttpd_epi32(_mm_floor_pd(self.0)) })
    }

    /// IEEE double→single narrowing (`cvtpd2ps`, ties to even),
    /// zero-filling output lanes 2–3.
    #[inline(always)]
    pub fn narrow_f32x4(self) -> F32x4 {
        F32x4(unsafe { _mm_cvtpd_ps(self.0) })
    }

    #[inline(always)]
    pub fn eq(self, rhs: Self) -> MaskF64x2 {
        MaskF64x2(unsafe { _mm_cmpeq_pd(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn ne(self, rhs: Self) -> MaskF64x2 {
        MaskF64x2(unsafe { _mm_cmpneq_pd(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn lt(self, rhs: Self) -> MaskF64x2 {
        MaskF64x2(unsafe { _mm_cmplt_pd(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn le(self, rhs: Self) -> MaskF64x2 {
        MaskF64x2(unsafe { _mm_cmple_pd(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn gt(self, rhs: Self) -> MaskF64x2 {
        MaskF64x2(unsafe { _mm_cmpgt_pd(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn ge(self, rhs: Self) -> MaskF64x2 {
        MaskF64x2(unsafe { _mm_cmpge_pd(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn abs(self) -> Self {
        Self(unsafe { _mm_andnot_pd(_mm_set1_pd(-0.0), self.0) })
    }

    /// See [`F32x4::min_fast`].
    #[inline(always)]
    pub fn min_fast(self, rhs: Self) -> Self {
        Self(unsafe { _mm_min_pd(self.0, rhs.0) })
    }

    /// See [`F32x4::max_fast`].
    #[inline(always)]
    pub fn max_fast(self, rhs: Self) -> Self {
        Self(unsafe { _mm_max_pd(self.0, rhs.0) })
    }

    /// Normalize `-0.0` lanes to `+0.0`.
    #[inline(always)]
    pub fn remove_signed_zero(self) -> Self {
        Self(unsafe { _mm_add_pd(self.0, _mm_setzero_pd()) })
    }

    /// See [`F32x4::safe_divide`].
    #[inline(always)]
    pub fn safe_divide(self, rhs: Self) -> Self {
        unsafe {
            let zero_mask = _mm_cmpeq_pd(rhs.0, _mm_setzero_pd());
            let divisor = _mm_blendv_pd(rhs.0, _mm_set1_pd(1.0), zero_mask);
            Self(_mm_div_pd(self.0, divisor))
        }
    }

    /// Bit-exact equality; see [`F32x4::debug_eq`].
    #[inline(always)]
    pub fn debug_eq(self, rhs: Self) -> bool {
        unsafe { bits_eq(_mm_castpd_si128(self.0), _mm_castpd_si128(rhs.0)) }
    }
}

impl Add for F64x2 {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { _mm_add_pd(self.0, rhs.0) })
    }
}

impl Sub for F64x2 {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(unsafe { _mm_sub_pd(self.0, rhs.0) })
    }
}

impl Mul for F64x2 {
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self(unsafe { _mm_mul_pd(self.0, rhs.0) })
    }
}

impl Div for F64x2 {
    type Output = Self;
    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self(unsafe { _mm_div_pd(self.0, rhs.0) })
    }
}

impl Neg for F64x2 {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self(unsafe { _mm_xor_pd(self.0, _mm_set1_pd(-0.0)) })
    }
}

// ===== Mask32x4 =====

impl Mask32x4 {
    /// Per-lane constructor, most-significant lane first.
    #[inline(always)]
    pub fn new(e3: bool, e2: bool, e1: bool, e0: bool) -> Self {
        Self(unsafe { _mm_set_epi32(-(e3 as i32), -(e2 as i32), -(e1 as i32), -(e0 as i32)) })
    }

    #[inline(always)]
    pub fn splat(v: bool) -> Self {
        Self(unsafe { _mm_set1_epi32(-(v as i32)) })
    }

    #[inline(always)]
    pub fn to_array(self) -> [bool; 4] {
        let mut out = [0i32; 4];
        unsafe { _mm_storeu_si128(out.as_mut_ptr() as *mut __m128i, self.0) };
        [out[0] != 0, out[1] != 0, out[2] != 0, out[3] != 0]
    }

    #[inline(always)]
    pub fn lane0(self) -> bool {
        self.to_array()[0]
    }

    #[inline(always)]
    pub fn lane1(self) -> bool {
        self.to_array()[1]
    }

    #[inline(always)]
    pub fn lane2(self) -> bool {
        self.to_array()[2]
    }

    #[inline(always)]
    pub fn lane3(self) -> bool {
        self.to_array()[3]
    }

    /// Per-lane blend (`pblendvb`): lanes where the mask is set come from
    /// `if_true`.
    #[inline(always)]
    pub fn choose(self, if_true: I32x4, if_false: I32x4) -> I32x4 {
        I32x4(unsafe { _mm_blendv_epi8(if_false.0, if_true.0, self.0) })
    }

    /// `choose(self, if_true, zero)` as a single bitwise AND.
    #[inline(always)]
    pub fn choose_else_zero(self, if_true: I32x4) -> I32x4 {
        I32x4(unsafe { _mm_and_si128(self.0, if_true.0) })
    }

    /// Lane-wise mask equality by bit pattern. Distinct from vector `eq`:
    /// this compares mask bits, not data.
    #[inline(always)]
    pub fn eq(self, rhs: Self) -> Self {
        Self(unsafe { _mm_cmpeq_epi32(self.0, rhs.0) })
    }

    /// Sign-extend lanes 0–1 into a 2-lane 64-bit mask (`pmovsxdq`, which
    /// keeps all-1s lanes all-1s).
    #[inline(always)]
    pub fn widen(self) -> Mask64x2 {
        Mask64x2(unsafe { _mm_cvtepi32_epi64(self.0) })
    }

    #[inline(always)]
    pub fn debug_eq(self, rhs: Self) -> bool {
        bits_eq(self.0, rhs.0)
    }
}

impl BitAnd for Mask32x4 {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self(unsafe { _mm_and_si128(self.0, rhs.0) })
    }
}

impl BitOr for Mask32x4 {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self(unsafe { _mm_or_si128(self.0, rhs.0) })
    }
}

impl BitXor for Mask32x4 {
    type Output = Self;
    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self(unsafe { _mm_xor_si128(self.0, rhs.0) })
    }
}

impl Not for Mask32x4 {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self {
        Self(unsafe { _mm_xor_si128(self.0, all_ones()) })
    }
}

// ===== Mask64x2 =====

impl Mask64x2 {
    /// Per-lane constructor, most-significant lane first.
    #[inline(always)]
    pub fn new(e1: bool, e0: bool) -> Self {
        Self(unsafe { _mm_set_epi64x(-(e1 as i64), -(e0 as i64)) })
    }

    #[inline(always)]
    pub fn splat(v: bool) -> Self {
        Self(unsafe { _mm_set1_epi64x(-(v as i64)) })
    }

    #[inline(always)]
    pub fn to_array(self) -> [bool; 2] {
        let mut out = [0i64; 2];
        unsafe { _mm_storeu_si128(out.as_mut_ptr() as *mut __m128i, self.0) };
        [out[0] != 0, out[1] != 0]
    }

    #[inline(always)]
    pub fn lane0(self) -> bool {
        self.to_array()[0]
    }

    #[inline(always)]
    pub fn lane1(self) -> bool {
        self.to_array()[1]
    }

    #[inline(always)]
    pub fn choose(self, if_true: I64x2, if_false: I64x2) -> I64x2 {
        I64x2(unsafe { _mm_blendv_epi8(if_false.0, if_true.0, self.0) })
    }

    /// `choose(self, if_true, zero)` as a single bitwise AND.
    #[inline(always)]
    pub fn choose_else_zero(self, if_true: I64x2) -> I64x2 {
        I64x2(unsafe { _mm_and_si128(self.0, if_true.0) })
    }

    /// Lane-wise mask equality by bit pattern.
    #[inline(always)]
    pub fn eq(self, rhs: Self) -> Self {
        Self(unsafe { _mm_cmpeq_epi64(self.0, rhs.0) })
    }

    /// Narrow each 64-bit mask lane into one 32-bit lane, zero-filling
    /// output lanes 2–3. Truncating an all-1s lane keeps it all-1s.
    #[inline(always)]
    pub fn narrow(self) -> Mask32x4 {
        Mask32x4(unsafe { _mm_move_epi64(_mm_shuffle_epi32::<0b0000_1000>(self.0)) })
    }

    /// Bit-pattern reinterpretation: each 64-bit lane spans the two 32-bit
    /// lanes it occupies, so a set lane replicates into both.
    #[inline(always)]
    pub fn bitcast_mask32x4(self) -> Mask32x4 {
        Mask32x4(self.0)
    }

    #[inline(always)]
    pub fn debug_eq(self, rhs: Self) -> bool {
        bits_eq(self.0, rhs.0)
    }
}

impl BitAnd for Mask64x2 {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self(unsafe { _mm_and_si128(self.0, rhs.0) })
    }
}

impl BitOr for Mask64x2 {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self(unsafe { _mm_or_si128(self.0, rhs.0) })
    }
}

impl BitXor for Mask64x2 {
    type Output = Self;
    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self(unsafe { _mm_xor_si128(self.0, rhs.0) })
    }
}

impl Not for Mask64x2 {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self {
        Self(unsafe { _mm_xor_si128(self.0, all_ones()) })
    }
}

// ===== MaskF32x4 =====

impl MaskF32x4 {
    /// Per-lane constructor, most-significant lane first.
    #[inline(always)]
    pub fn new(e3: bool, e2: bool, e1: bool, e0: bool) -> Self {
        Self(unsafe {
            _mm_castsi128_ps(_mm_set_epi32(
                -(e3 as i32),
                -(e2 as i32),
                -(e1 as i32),
                -(e0 as i32),
            ))
        })
    }

    #[inline(always)]
    pub fn splat(v: bool) -> Self {
        Self(unsafe { _mm_castsi128_ps(_mm_set1_epi32(-(v as i32))) })
    }

    #[inline(always)]
    pub fn to_array(self) -> [bool; 4] {
        Mask32x4::from(self).to_array()
    }

    #[inline(always)]
    pub fn lane0(self) -> bool {
        self.to_array()[0]
    }

    #[inline(always)]
    pub fn lane1(self) -> bool {
        self.to_array()[1]
    }

    #[inline(always)]
    pub fn lane2(self) -> bool {
        self.to_array()[2]
    }

    #[inline(always)]
    pub fn lane3(self) -> bool {
        self.to_array()[3]
    }

    /// Per-lane blend (`blendvps`); bitwise, so NaN payloads and signed
    /// zeros pass through untouched.
    #[inline(always)]
    pub fn choose(self, if_true: F32x4, if_false: F32x4) -> F32x4 {
        F32x4(unsafe { _mm_blendv_ps(if_false.0, if_true.0, self.0) })
    }

    /// `choose(self, if_true, zero)` as a single bitwise AND.
    #[inline(always)]
    pub fn choose_else_zero(self, if_true: F32x4) -> F32x4 {
        F32x4(unsafe { _mm_and_ps(self.0, if_true.0) })
    }

    /// Lane-wise mask equality by bit pattern — an integer compare, not a
    /// float compare, so set lanes match regardless of any NaN subtlety in
    /// the data that produced them.
    #[inline(always)]
    pub fn eq(self, rhs: Self) -> Self {
        Self(unsafe {
            _mm_castsi128_ps(_mm_cmpeq_epi32(
                _mm_castps_si128(self.0),
                _mm_castps_si128(rhs.0),
            ))
        })
    }

    /// Sign-extend lanes 0–1 into a 2-lane double-precision mask.
    #[inline(always)]
    pub fn widen(self) -> MaskF64x2 {
        MaskF64x2(unsafe { _mm_castsi128_pd(_mm_cvtepi32_epi64(_mm_castps_si128(self.0))) })
    }

    #[inline(always)]
    pub fn debug_eq(self, rhs: Self) -> bool {
        unsafe { bits_eq(_mm_castps_si128(self.0), _mm_castps_si128(rhs.0)) }
    }
}

impl BitAnd for MaskF32x4 {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self(unsafe { _mm_and_ps(self.0, rhs.0) })
    }
}

impl BitOr for MaskF32x4 {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self(unsafe { _mm_or_ps(self.0, rhs.0) })
    }
}

impl BitXor for MaskF32x4 {
    type Output = Self;
    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self(unsafe { _mm_xor_ps(self.0, rhs.0) })
    }
}

impl Not for MaskF32x4 {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self {
        Self(unsafe { _mm_xor_ps(self.0, _mm_castsi128_ps(all_ones())) })
    }
}

// ===== MaskF64x2 =====

impl MaskF64x2 {
    /// Per-lane constructor, most-significant lane first.
    #[inline(always)]
    pub fn new(e1: bool, e0: bool) -> Self {
        Self(unsafe { _mm_castsi128_pd(_mm_set_epi64x(-(e1 as i64), -(e0 as i64))) })
    }

    #[inline(always)]
    pub fn splat(v: bool) -> Self {
        Self(unsafe { _mm_castsi128_pd(_mm_set1_epi64x(-(v as i64))) })
    }

    #[inline(always)]
    pub fn to_array(self) -> [bool; 2] {
        Mask64x2::from(self).to_array()
    }

    #[inline(always)]
    pub fn lane0(self) -> bool {
        self.to_array()[0]
    }

    #[inline(always)]
    pub fn lane1(self) -> bool {
        self.to_array()[1]
    }

    #[inline(always)]
    pub fn choose(self, if_true: F64x2, if_false: F64x2) -> F64x2 {
        F64x2(unsafe { _mm_blendv_pd(if_false.0, if_true.0, self.0) })
    }

    /// `choose(self, if_true, zero)` as a single bitwise AND.
    #[inline(always)]
    pub fn choose_else_zero(self, if_true: F64x2) -> F64x2 {
        F64x2(unsafe { _mm_and_pd(self.0, if_true.0) })
    }

    /// Lane-wise mask equality by bit pattern.
    #[inline(always)]
    pub fn eq(self, rhs: Self) -> Self {
        Self(unsafe {
            _mm_castsi128_pd(_mm_cmpeq_epi64(
                _mm_castpd_si128(self.0),
                _mm_castpd_si128(rhs.0),
            ))
        })
    }

    /// Narrow each lane into one single-precision mask lane, zero-filling
    /// output lanes 2–3.
    #[inline(always)]
    pub fn narrow(self) -> MaskF32x4 {
        MaskF32x4(unsafe {
            _mm_castsi128_ps(_mm_move_epi64(_mm_shuffle_epi32::<0b0000_1000>(
                _mm_castpd_si128(self.0),
            )))
        })
    }

    #[inline(always)]
    pub fn debug_eq(self, rhs: Self) -> bool {
        unsafe { bits_eq(_mm_castpd_si128(self.0), _mm_castpd_si128(rhs.0)) }
    }
}

impl BitAnd for MaskF64x2 {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self(unsafe { _mm_and_pd(self.0, rhs.0) })
    }
}

impl BitOr for MaskF64x2 {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self(unsafe { _mm_or_pd(self.0, rhs.0) })
    }
}

impl BitXor for MaskF64x2 {
    type Output = Self;
    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self(unsafe { _mm_xor_pd(self.0, rhs.0) })
    }
}

impl Not for MaskF64x2 {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self {
        Self(unsafe { _mm_xor_pd(self.0, _mm_castsi128_pd(all_ones())) })
    }
}

// ===== Nominal conversions between integer and float masks =====

impl From<Mask32x4> for MaskF32x4 {
    #[inline(always)]
    fn from(m: Mask32x4) -> Self {
        Self(unsafe { _mm_castsi128_ps(m.0) })
    }
}

impl From<MaskF32x4> for Mask32x4 {
    #[inline(always)]
    fn from(m: MaskF32x4) -> Self {
        Self(unsafe { _mm_castps_si128(m.0) })
    }
}

impl From<Mask64x2> for MaskF64x2 {
    #[inline(always)]
    fn from(m: Mask64x2) -> Self {
        Self(unsafe { _mm_castsi128_pd(m.0) })
    }
}

impl From<MaskF64x2> for Mask64x2 {
    #[inline(always)]
    fn from(m: MaskF64x2) -> Self {
        Self(unsafe { _mm_castpd_si128(m.0) })
    }
}

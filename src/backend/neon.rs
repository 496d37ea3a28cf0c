//! aarch64 NEON backend.
//!
//! Thin newtype wrappers over the typed NEON registers (`int32x4_t`,
//! `float64x2_t`, ...). Masks are the unsigned register of matching width,
//! which is what the `vceq`/`vcgt` family produces natively.
//!
//! NEON has no single-instruction "permute 32-bit lanes by immediate", so
//! 4-lane shuffles execute the shortest primitive sequence derived at
//! compile time in [`crate::permute`]: the sequence for a given index set is
//! an associated const, the executor is unrolled, and every match inside it
//! is on a compile-time value, so each monomorphized shuffle collapses to
//! its 0–3 literal instructions.
//!
//! # Safety
//!
//! This module only compiles for aarch64 with NEON enabled (baseline on
//! that architecture), so every intrinsic call is reachable only on
//! supporting hardware. All pointers passed to `vld1q`/`vst1q` come from
//! stack arrays sized to exactly 16 bytes.

#![allow(unused_unsafe)]

use crate::permute::{Operands, PermSeq, PermStep, PERM4_TABLE};
use crate::{LaneIdx, ShiftAmt};
use std::arch::aarch64::*;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Sub};

/// Four signed 32-bit lanes in one NEON register.
#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub struct I32x4(int32x4_t);

/// Two signed 64-bit lanes in one NEON register.
#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub struct I64x2(int64x2_t);

/// Four single-precision lanes in one NEON register.
#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub struct F32x4(float32x4_t);

/// Two double-precision lanes in one NEON register.
#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub struct F64x2(float64x2_t);

/// Comparison mask for [`I32x4`]; lanes are all-1s or all-0s.
#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub struct Mask32x4(uint32x4_t);

/// Comparison mask for [`I64x2`].
#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub struct Mask64x2(uint64x2_t);

/// Comparison mask for [`F32x4`]; distinct nominal type from [`Mask32x4`]
/// so float and integer masks cannot be mixed by accident.
#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub struct MaskF32x4(uint32x4_t);

/// Comparison mask for [`F64x2`].
#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub struct MaskF64x2(uint64x2_t);

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

/// Bit-exact 128-bit equality: lane compare, then require the lane-wise
/// minimum of the result mask to be all-1s.
#[inline(always)]
fn bits_eq_u32(a: uint32x4_t, b: uint32x4_t) -> bool {
    unsafe { vminvq_u32(vceqq_u32(a, b)) == u32::MAX }
}

/// Carrier for the derived shuffle sequence; `SEQ` is evaluated once per
/// monomorphization from the shared permutation table.
struct PermSel<const I3: u32, const I2: u32, const I1: u32, const I0: u32>;

impl<const I3: u32, const I2: u32, const I1: u32, const I0: u32> PermSel<I3, I2, I1, I0> {
    const SEQ: PermSeq =
        PERM4_TABLE[((I0 & 3) | ((I1 & 3) << 2) | ((I2 & 3) << 4) | ((I3 & 3) << 6)) as usize];
}

/// Execute one derived permutation step. `cur` is the running intermediate,
/// `orig` the untouched shuffle input. The step value is always a constant
/// at the call sites in [`shuffle_4x32`], so the matches fold away.
///
/// # Safety
///
/// NEON must be available (guaranteed by this module's cfg).
#[inline(always)]
unsafe fn apply_step(step: PermStep, cur: uint32x4_t, orig: uint32x4_t) -> uint32x4_t {
    let sel = |ops: Operands| match ops {
        Operands::CurCur => (cur, cur),
        Operands::CurOrig => (cur, orig),
        Operands::OrigCur => (orig, cur),
    };
    match step {
        PermStep::Dup { lane: 0 } => vdupq_laneq_u32::<0>(cur),
        PermStep::Dup { lane: 1 } => vdupq_laneq_u32::<1>(cur),
        PermStep::Dup { lane: 2 } => vdupq_laneq_u32::<2>(cur),
        PermStep::Dup { lane: 3 } => vdupq_laneq_u32::<3>(cur),
        PermStep::Rev64 => vrev64q_u32(cur),
        PermStep::Ext { n: 1 } => vextq_u32::<1>(cur, cur),
        PermStep::Ext { n: 2 } => vextq_u32::<2>(cur, cur),
        PermStep::Ext { n: 3 } => vextq_u32::<3>(cur, cur),
        PermStep::Trn1 { ops } => {
            let (a, b) = sel(ops);
            vtrn1q_u32(a, b)
        }
        PermStep::Trn2 { ops } => {
            let (a, b) = sel(ops);
            vtrn2q_u32(a, b)
        }
        PermStep::Zip1 { ops } => {
            let (a, b) = sel(ops);
            vzip1q_u32(a, b)
        }
        PermStep::Zip2 { ops } => {
            let (a, b) = sel(ops);
            vzip2q_u32(a, b)
        }
        PermStep::Uzp1 { ops } => {
            let (a, b) = sel(ops);
            vuzp1q_u32(a, b)
        }
        PermStep::Uzp2 { ops } => {
            let (a, b) = sel(ops);
            vuzp2q_u32(a, b)
        }
        PermStep::CopyCur { dst: 0, src: 1 } => vcopyq_laneq_u32::<0, 1>(cur, cur),
        PermStep::CopyCur { dst: 0, src: 2 } => vcopyq_laneq_u32::<0, 2>(cur, cur),
        PermStep::CopyCur { dst: 0, src: 3 } => vcopyq_laneq_u32::<0, 3>(cur, cur),
        PermStep::CopyCur { dst: 1, src: 0 } => vcopyq_laneq_u32::<1, 0>(cur, cur),
        PermStep::CopyCur { dst: 1, src: 2 } => vcopyq_laneq_u32::<1, 2>(cur, cur),
        PermStep::CopyCur { dst: 1, src: 3 } => vcopyq_laneq_u32::<1, 3>(cur, cur),
        PermStep::CopyCur { dst: 2, src: 0 } => vcopyq_laneq_u32::<2, 0>(cur, cur),
        PermStep::CopyCur { dst: 2, src: 1 } => vcopyq_laneq_u32::<2, 1>(cur, cur),
        PermStep::CopyCur { dst: 2, src: 3 } => vcopyq_laneq_u32::<2, 3>(cur, cur),
        PermStep::CopyCur { dst: 3, src: 0 } => vcopyq_laneq_u32::<3, 0>(cur, cur),
        PermStep::CopyCur { dst: 3, src: 1 } => vcopyq_laneq_u32::<3, 1>(cur, cur),
        PermStep::CopyCur { dst: 3, src: 2 } => vcopyq_laneq_u32::<3, 2>(cur, cur),
        PermStep::CopyOrig { dst: 0, src: 0 } => vcopyq_laneq_u32::<0, 0>(cur, orig),
        PermStep::CopyOrig { dst: 0, src: 1 } => vcopyq_laneq_u32::<0, 1>(cur, orig),
        PermStep::CopyOrig { dst: 0, src: 2 } => vcopyq_laneq_u32::<0, 2>(cur, orig),
        PermStep::CopyOrig { dst: 0, src: 3 } => vcopyq_laneq_u32::<0, 3>(cur, orig),
        PermStep::CopyOrig { dst: 1, src: 0 } => vcopyq_laneq_u32::<1, 0>(cur, orig),
        PermStep::CopyOrig { dst: 1, src: 1 } => vcopyq_laneq_u32::<1, 1>(cur, orig),
        PermStep::CopyOrig { dst: 1, src: 2 } => vcopyq_laneq_u32::<1, 2>(cur, orig),
        PermStep::CopyOrig { dst: 1, src: 3 } => vcopyq_laneq_u32::<1, 3>(cur, orig),
        PermStep::CopyOrig { dst: 2, src: 0 } => vcopyq_laneq_u32::<2, 0>(cur, orig),
        PermStep::CopyOrig { dst: 2, src: 1 } => vcopyq_laneq_u32::<2, 1>(cur, orig),
        PermStep::CopyOrig { dst: 2, src: 2 } => vcopyq_laneq_u32::<2, 2>(cur, orig),
        PermStep::CopyOrig { dst: 2, src: 3 } => vcopyq_laneq_u32::<2, 3>(cur, orig),
        PermStep::CopyOrig { dst: 3, src: 0 } => vcopyq_laneq_u32::<3, 0>(cur, orig),
        PermStep::CopyOrig { dst: 3, src: 1 } => vcopyq_laneq_u32::<3, 1>(cur, orig),
        PermStep::CopyOrig { dst: 3, src: 2 } => vcopyq_laneq_u32::<3, 2>(cur, orig),
        PermStep::CopyOrig { dst: 3, src: 3 } => vcopyq_laneq_u32::<3, 3>(cur, orig),
        _ => unreachable!(),
    }
}

/// Run the derived sequence for one permutation. `SEQ` is a constant, so
/// the length tests and step matches disappear at monomorphization.
///
/// # Safety
///
/// NEON must be available (guaranteed by this module's cfg).
#[inline(always)]
unsafe fn shuffle_4x32<const I3: u32, const I2: u32, const I1: u32, const I0: u32>(
    v: uint32x4_t,
) -> uint32x4_t {
    let seq = PermSel::<I3, I2, I1, I0>::SEQ;
    let mut cur = v;
    if seq.len >= 1 {
        cur = apply_step(seq.steps[0], cur, v);
    }
    if seq.len >= 2 {
        cur = apply_step(seq.steps[1], cur, v);
    }
    if seq.len >= 3 {
        cur = apply_step(seq.steps[2], cur, v);
    }
    cur
}

// ===== I32x4 =====

impl I32x4 {
    /// All lanes zero.
    #[inline(always)]
    pub fn zero() -> Self {
        Self(unsafe { vdupq_n_s32(0) })
    }

    /// Broadcast one value into all lanes.
    #[inline(always)]
    pub fn splat(v: i32) -> Self {
        Self(unsafe { vdupq_n_s32(v) })
    }

    /// Per-lane constructor, most-significant lane first (the hardware
    /// `set` convention): `new(e3, e2, e1, e0)` puts `e0` in lane 0.
    #[inline(always)]
    pub fn new(e3: i32, e2: i32, e1: i32, e0: i32) -> Self {
        Self::from_array([e0, e1, e2, e3])
    }

    /// Lane-order array constructor (lane 0 first).
    #[inline(always)]
    pub fn from_array(a: [i32; 4]) -> Self {
        Self(unsafe { vld1q_s32(a.as_ptr()) })
    }

    /// Lane-order array extraction (lane 0 first).
    #[inline(always)]
    pub fn to_array(self) -> [i32; 4] {
        let mut out = [0i32; 4];
        unsafe { vst1q_s32(out.as_mut_ptr(), self.0) };
        out
    }

    #[inline(always)]
    pub fn lane0(self) -> i32 {
        unsafe { vgetq_lane_s32::<0>(self.0) }
    }

    #[inline(always)]
    pub fn lane1(self) -> i32 {
        unsafe { vgetq_lane_s32::<1>(self.0) }
    }

    #[inline(always)]
    pub fn lane2(self) -> i32 {
        unsafe { vgetq_lane_s32::<2>(self.0) }
    }

    #[inline(always)]
    pub fn lane3(self) -> i32 {
        unsafe { vgetq_lane_s32::<3>(self.0) }
    }

    /// Compile-time-constant lane permutation: output lane `k` takes input
    /// lane `Ik`. Indices outside `0..4` fail the build.
    #[inline(always)]
    pub fn shuffle<const I3: u32, const I2: u32, const I1: u32, const I0: u32>(self) -> Self {
        let _: () = LaneIdx::<I3, 4>::CHECK;
        let _: () = LaneIdx::<I2, 4>::CHECK;
        let _: () = LaneIdx::<I1, 4>::CHECK;
        let _: () = LaneIdx::<I0, 4>::CHECK;
        unsafe {
            Self(vreinterpretq_s32_u32(shuffle_4x32::<I3, I2, I1, I0>(
                vreinterpretq_u32_s32(self.0),
            )))
        }
    }

    /// Reinterpret the 128 bits as two 64-bit lanes; 32-bit lanes 0–1 become
    /// 64-bit lane 0.
    #[inline(always)]
    pub fn bitcast_i64x2(self) -> I64x2 {
        I64x2(unsafe { vreinterpretq_s64_s32(self.0) })
    }

    /// Reinterpret lanes as single-precision floats, bit pattern preserved.
    #[inline(always)]
    pub fn bitcast_f32x4(self) -> F32x4 {
        F32x4(unsafe { vreinterpretq_f32_s32(self.0) })
    }

    /// Reinterpret the 128 bits as two double-precision lanes.
    #[inline(always)]
    pub fn bitcast_f64x2(self) -> F64x2 {
        F64x2(unsafe { vreinterpretq_f64_s32(self.0) })
    }

    /// Convert each lane to `f32` (`scvtf`).
    #[inline(always)]
    pub fn convert_f32x4(self) -> F32x4 {
        F32x4(unsafe { vcvtq_f32_s32(self.0) })
    }

    /// Convert the low two lanes to `f64` (exact): widen, then `scvtf`.
    #[inline(always)]
    pub fn convert_f64x2(self) -> F64x2 {
        F64x2(unsafe { vcvtq_f64_s64(vmovl_s32(vget_low_s32(self.0))) })
    }

    /// Sign-extend the low two lanes to 64 bits (`sshll`).
    #[inline(always)]
    pub fn widen_i64x2(self) -> I64x2 {
        I64x2(unsafe { vmovl_s32(vget_low_s32(self.0)) })
    }

    #[inline(always)]
    pub fn eq(self, rhs: Self) -> Mask32x4 {
        Mask32x4(unsafe { vceqq_s32(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn ne(self, rhs: Self) -> Mask32x4 {
        !self.eq(rhs)
    }

    #[inline(always)]
    pub fn lt(self, rhs: Self) -> Mask32x4 {
        Mask32x4(unsafe { vcltq_s32(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn le(self, rhs: Self) -> Mask32x4 {
        Mask32x4(unsafe { vcleq_s32(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn gt(self, rhs: Self) -> Mask32x4 {
        Mask32x4(unsafe { vcgtq_s32(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn ge(self, rhs: Self) -> Mask32x4 {
        Mask32x4(unsafe { vcgeq_s32(self.0, rhs.0) })
    }

    /// Lane-wise absolute value (`abs`); `i32::MIN` stays `i32::MIN`.
    #[inline(always)]
    pub fn abs(self) -> Self {
        Self(unsafe { vabsq_s32(self.0) })
    }

    #[inline(always)]
    pub fn min(self, rhs: Self) -> Self {
        Self(unsafe { vminq_s32(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn max(self, rhs: Self) -> Self {
        Self(unsafe { vmaxq_s32(self.0, rhs.0) })
    }

    /// Division with zero divisors replaced by 1 beforehand. NEON has no
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
    /// fails the build).
    #[inline(always)]
    pub fn shl<const N: u32>(self) -> Self {
        let _: () = ShiftAmt::<N, 32>::CHECK;
        Self(unsafe { vshlq_s32(self.0, vdupq_n_s32(N as i32)) })
    }

    /// Arithmetic right shift by the compile-time amount `N`; `sshl` with a
    /// negative count shifts right.
    #[inline(always)]
    pub fn shr<const N: u32>(self) -> Self {
        let _: () = ShiftAmt::<N, 32>::CHECK;
        Self(unsafe { vshlq_s32(self.0, vdupq_n_s32(-(N as i32))) })
    }

    /// Bit-exact equality for test assertions; unlike [`I32x4::eq`] this
    /// returns a `bool`, not a mask.
    #[inline(always)]
    pub fn debug_eq(self, rhs: Self) -> bool {
        unsafe { bits_eq_u32(vreinterpretq_u32_s32(self.0), vreinterpretq_u32_s32(rhs.0)) }
    }
}

impl Add for I32x4 {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { vaddq_s32(self.0, rhs.0) })
    }
}

impl Sub for I32x4 {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(unsafe { vsubq_s32(self.0, rhs.0) })
    }
}

impl Mul for I32x4 {
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self(unsafe { vmulq_s32(self.0, rhs.0) })
    }
}

impl Neg for I32x4 {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self(unsafe { vnegq_s32(self.0) })
    }
}

impl BitAnd for I32x4 {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self(unsafe { vandq_s32(self.0, rhs.0) })
    }
}

impl BitOr for I32x4 {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self(unsafe { vorrq_s32(self.0, rhs.0) })
    }
}

impl BitXor for I32x4 {
    type Output = Self;
    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self(unsafe { veorq_s32(self.0, rhs.0) })
    }
}

impl Not for I32x4 {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self {
        Self(unsafe { vmvnq_s32(self.0) })
    }
}

// ===== I64x2 =====

impl I64x2 {
    #[inline(always)]
    pub fn zero() -> Self {
        Self(unsafe { vdupq_n_s64(0) })
    }

    #[inline(always)]
    pub fn splat(v: i64) -> Self {
        Self(unsafe { vdupq_n_s64(v) })
    }

    /// Per-lane constructor, most-significant lane first.
    #[inline(always)]
    pub fn new(e1: i64, e0: i64) -> Self {
        Self::from_array([e0, e1])
    }

    #[inline(always)]
    pub fn from_array(a: [i64; 2]) -> Self {
        Self(unsafe { vld1q_s64(a.as_ptr()) })
    }

    #[inline(always)]
    pub fn to_array(self) -> [i64; 2] {
        let mut out = [0i64; 2];
        unsafe { vst1q_s64(out.as_mut_ptr(), self.0) };
        out
    }

    #[inline(always)]
    pub fn lane0(self) -> i64 {
        unsafe { vgetq_lane_s64::<0>(self.0) }
    }

    #[inline(always)]
    pub fn lane1(self) -> i64 {
        unsafe { vgetq_lane_s64::<1>(self.0) }
    }

    /// Two-lane compile-time permutation; one `ext` or `dup`, or nothing.
    #[inline(always)]
    pub fn shuffle<const I1: u32, const I0: u32>(self) -> Self {
        let _: () = LaneIdx::<I1, 2>::CHECK;
        let _: () = LaneIdx::<I0, 2>::CHECK;
        match (I1 & 1, I0 & 1) {
            (1, 0) => self,
            (0, 1) => Self(unsafe { vextq_s64::<1>(self.0, self.0) }),
            (0, 0) => Self(unsafe { vdupq_laneq_s64::<0>(self.0) }),
            (1, 1) => Self(unsafe { vdupq_laneq_s64::<1>(self.0) }),
            _ => unreachable!(),
        }
    }

    /// Reinterpret as four 32-bit lanes; 64-bit lane 0 supplies 32-bit
    /// lanes 0–1.
    #[inline(always)]
    pub fn bitcast_i32x4(self) -> I32x4 {
        I32x4(unsafe { vreinterpretq_s32_s64(self.0) })
    }

    #[inline(always)]
    pub fn bitcast_f32x4(self) -> F32x4 {
        F32x4(unsafe { vreinterpretq_f32_s64(self.0) })
    }

    #[inline(always)]
    pub fn bitcast_f64x2(self) -> F64x2 {
        F64x2(unsafe { vreinterpretq_f64_s64(self.0) })
    }

    /// Convert each lane to `f64` (`scvtf`).
    #[inline(always)]
    pub fn convert_f64x2(self) -> F64x2 {
        F64x2(unsafe { vcvtq_f64_s64(self.0) })
    }

    /// Truncate each lane to its low 32 bits (`xtn`) — no saturation, by
    /// contract — and zero-fill output lanes 2–3.
    #[inline(always)]
    pub fn narrow_i32x4(self) -> I32x4 {
        I32x4(unsafe { vcombine_s32(vmovn_s64(self.0), vdup_n_s32(0)) })
    }

    #[inline(always)]
    pub fn eq(self, rhs: Self) -> Mask64x2 {
        Mask64x2(unsafe { vceqq_s64(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn ne(self, rhs: Self) -> Mask64x2 {
        !self.eq(rhs)
    }

    #[inline(always)]
    pub fn lt(self, rhs: Self) -> Mask64x2 {
        Mask64x2(unsafe { vcltq_s64(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn le(self, rhs: Self) -> Mask64x2 {
        Mask64x2(unsafe { vcleq_s64(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn gt(self, rhs: Self) -> Mask64x2 {
        Mask64x2(unsafe { vcgtq_s64(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn ge(self, rhs: Self) -> Mask64x2 {
        Mask64x2(unsafe { vcgeq_s64(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn abs(self) -> Self {
        Self(unsafe { vabsq_s64(self.0) })
    }

    #[inline(always)]
    pub fn min(self, rhs: Self) -> Self {
        // No smin for 64-bit lanes: compare then select.
        unsafe {
            let gt = vcgtq_s64(self.0, rhs.0);
            Self(vbslq_s64(gt, rhs.0, self.0))
        }
    }

    #[inline(always)]
    pub fn max(self, rhs: Self) -> Self {
        unsafe {
            let gt = vcgtq_s64(self.0, rhs.0);
            Self(vbslq_s64(gt, self.0, rhs.0))
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
        Self(unsafe { vshlq_s64(self.0, vdupq_n_s64(N as i64)) })
    }

    /// Arithmetic right shift (`sshl` with a negative count).
    #[inline(always)]
    pub fn shr<const N: u32>(self) -> Self {
        let _: () = ShiftAmt::<N, 64>::CHECK;
        Self(unsafe { vshlq_s64(self.0, vdupq_n_s64(-(N as i64))) })
    }

    #[inline(always)]
    pub fn debug_eq(self, rhs: Self) -> bool {
        unsafe { bits_eq_u32(vreinterpretq_u32_s64(self.0), vreinterpretq_u32_s64(rhs.0)) }
    }
}

impl Add for I64x2 {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { vaddq_s64(self.0, rhs.0) })
    }
}

impl Sub for I64x2 {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(unsafe { vsubq_s64(self.0, rhs.0) })
    }
}

/// Lane-wise; NEON has no packed 64-bit multiply.
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
        Self(unsafe { vnegq_s64(self.0) })
    }
}

impl BitAnd for I64x2 {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self(unsafe { vandq_s64(self.0, rhs.0) })
    }
}

impl BitOr for I64x2 {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self(unsafe { vorrq_s64(self.0, rhs.0) })
    }
}

impl BitXor for I64x2 {
    type Output = Self;
    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self(unsafe { veorq_s64(self.0, rhs.0) })
    }
}

impl Not for I64x2 {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self {
        Self(unsafe {
            vreinterpretq_s64_s32(vmvnq_s32(vreinterpretq_s32_s64(self.0)))
        })
    }
}

// ===== F32x4 =====

impl F32x4 {
    #[inline(always)]
    pub fn zero() -> Self {
        Self(unsafe { vdupq_n_f32(0.0) })
    }

    #[inline(always)]
    pub fn splat(v: f32) -> Self {
        Self(unsafe { vdupq_n_f32(v) })
    }

    /// Per-lane constructor, most-significant lane first.
    #[inline(always)]
    pub fn new(e3: f32, e2: f32, e1: f32, e0: f32) -> Self {
        Self::from_array([e0, e1, e2, e3])
    }

    #[inline(always)]
    pub fn from_array(a: [f32; 4]) -> Self {
        Self(unsafe { vld1q_f32(a.as_ptr()) })
    }

    #[inline(always)]
    pub fn to_array(self) -> [f32; 4] {
        let mut out = [0.0f32; 4];
        unsafe { vst1q_f32(out.as_mut_ptr(), self.0) };
        out
    }

    #[inline(always)]
    pub fn lane0(self) -> f32 {
        unsafe { vgetq_lane_f32::<0>(self.0) }
    }

    #[inline(always)]
    pub fn lane1(self) -> f32 {
        unsafe { vgetq_lane_f32::<1>(self.0) }
    }

    #[inline(always)]
    pub fn lane2(self) -> f32 {
        unsafe { vgetq_lane_f32::<2>(self.0) }
    }

    #[inline(always)]
    pub fn lane3(self) -> f32 {
        unsafe { vgetq_lane_f32::<3>(self.0) }
    }

    /// See [`I32x4::shuffle`].
    #[inline(always)]
    pub fn shuffle<const I3: u32, const I2: u32, const I1: u32, const I0: u32>(self) -> Self {
        let _: () = LaneIdx::<I3, 4>::CHECK;
        let _: () = LaneIdx::<I2, 4>::CHECK;
        let _: () = LaneIdx::<I1, 4>::CHECK;
        let _: () = LaneIdx::<I0, 4>::CHECK;
        unsafe {
            Self(vreinterpretq_f32_u32(shuffle_4x32::<I3, I2, I1, I0>(
                vreinterpretq_u32_f32(self.0),
            )))
        }
    }

    #[inline(always)]
    pub fn bitcast_i32x4(self) -> I32x4 {
        I32x4(unsafe { vreinterpretq_s32_f32(self.0) })
    }

    #[inline(always)]
    pub fn bitcast_i64x2(self) -> I64x2 {
        I64x2(unsafe { vreinterpretq_s64_f32(self.0) })
    }

    #[inline(always)]
    pub fn bitcast_f64x2(self) -> F64x2 {
        F64x2(unsafe { vreinterpretq_f64_f32(self.0) })
    }

    /// Round to nearest, ties to even, and convert to `i32` (`fcvtns`).
    /// Out-of-range lanes saturate.
    #[inline(always)]
    pub fn convert_nearest_i32x4(self) -> I32x4 {
        I32x4(unsafe { vcvtnq_s32_f32(self.0) })
    }

    /// Round toward zero and convert to `i32` (`fcvtzs`); out-of-range
    /// lanes saturate.
    #[inline(always)]
    pub fn convert_truncate_i32x4(self) -> I32x4 {
        I32x4(unsafe { vcvtq_s32_f32(self.0) })
    }

    /// Round toward negative infinity and convert to `i32` (`fcvtms`);
    /// out-of-range lanes saturate.
    #[inline(always)]
    pub fn convert_floor_i32x4(self) -> I32x4 {
        I32x4(unsafe { vcvtmq_s32_f32(self.0) })
    }

    /// Widen the low two lanes to `f64` (exact, `fcvtl`).
    #[inline(always)]
    pub fn widen_f64x2(self) -> F64x2 {
        F64x2(unsafe { vcvt_f64_f32(vget_low_f32(self.0)) })
    }

    /// IEEE equality: a NaN lane compares unequal to everything, itself
    /// included.
    #[inline(always)]
    pub fn eq(self, rhs: Self) -> MaskF32x4 {
        MaskF32x4(unsafe { vceqq_f32(self.0, rhs.0) })
    }

    /// IEEE inequality; true for NaN lanes (unordered).
    #[inline(always)]
    pub fn ne(self, rhs: Self) -> MaskF32x4 {
        !self.eq(rhs)
    }

    #[inline(always)]
    pub fn lt(self, rhs: Self) -> MaskF32x4 {
        MaskF32x4(unsafe { vcltq_f32(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn le(self, rhs: Self) -> MaskF32x4 {
        MaskF32x4(unsafe { vcleq_f32(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn gt(self, rhs: Self) -> MaskF32x4 {
        MaskF32x4(unsafe { vcgtq_f32(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn ge(self, rhs: Self) -> MaskF32x4 {
        MaskF32x4(unsafe { vcgeq_f32(self.0, rhs.0) })
    }

    /// Clear the sign bit of every lane (`fabs`).
    #[inline(always)]
    pub fn abs(self) -> Self {
        Self(unsafe { vabsq_f32(self.0) })
    }

    /// Lane-wise minimum (`fmin`): propagates NaN and orders `-0.0` below
    /// `+0.0`, unlike x86 `minps`, which returns its second operand in both
    /// cases. Compose with [`F32x4::remove_signed_zero`] when determinism
    /// across backends matters.
    #[inline(always)]
    pub fn min_fast(self, rhs: Self) -> Self {
        Self(unsafe { vminq_f32(self.0, rhs.0) })
    }

    /// Lane-wise maximum (`fmax`); see [`F32x4::min_fast`].
    #[inline(always)]
    pub fn max_fast(self, rhs: Self) -> Self {
        Self(unsafe { vmaxq_f32(self.0, rhs.0) })
    }

    /// Normalize `-0.0` lanes to `+0.0` (adds `+0.0`; other values and NaN
    /// payloads pass through).
    #[inline(always)]
    pub fn remove_signed_zero(self) -> Self {
        Self(unsafe { vaddq_f32(self.0, vdupq_n_f32(0.0)) })
    }

    /// Division with zero divisors replaced by 1.0 beforehand, so a zero
    /// lane never produces an infinity.
    #[inline(always)]
    pub fn safe_divide(self, rhs: Self) -> Self {
        unsafe {
            let zero_mask = vceqq_f32(rhs.0, vdupq_n_f32(0.0));
            let divisor = vbslq_f32(zero_mask, vdupq_n_f32(1.0), rhs.0);
            Self(vdivq_f32(self.0, divisor))
        }
    }

    /// Bit-exact equality for test assertions: `+0.0 != -0.0`, and NaN lanes
    /// compare equal when their bit patterns match.
    #[inline(always)]
    pub fn debug_eq(self, rhs: Self) -> bool {
        unsafe { bits_eq_u32(vreinterpretq_u32_f32(self.0), vreinterpretq_u32_f32(rhs.0)) }
    }
}

impl Add for F32x4 {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { vaddq_f32(self.0, rhs.0) })
    }
}

impl Sub for F32x4 {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(unsafe { vsubq_f32(self.0, rhs.0) })
    }
}

impl Mul for F32x4 {
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self(unsafe { vmulq_f32(self.0, rhs.0) })
    }
}

impl Div for F32x4 {
    type Output = Self;
    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self(unsafe { vdivq_f32(self.0, rhs.0) })
    }
}

impl Neg for F32x4 {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self(unsafe { vnegq_f32(self.0) })
    }
}

// ===== F64x2 =====

impl F64x2 {
    #[inline(always)]
    pub fn zero() -> Self {
        Self(unsafe { vdupq_n_f64(0.0) })
    }

    #[inline(always)]
    pub fn splat(v: f64) -> Self {
        Self(unsafe { vdupq_n_f64(v) })
    }

    /// Per-lane constructor, most-significant lane first.
    #[inline(always)]
    pub fn new(e1: f64, e0: f64) -> Self {
        Self::from_array([e0, e1])
    }

    #[inline(always)]
    pub fn from_array(a: [f64; 2]) -> Self {
        Self(unsafe { vld1q_f64(a.as_ptr()) })
    }

    #[inline(always)]
    pub fn to_array(self) -> [f64; 2] {
        let mut out = [0.0f64; 2];
        unsafe { vst1q_f64(out.as_mut_ptr(), self.0) };
        out
    }

    #[inline(always)]
    pub fn lane0(self) -> f64 {
        unsafe { vgetq_lane_f64::<0>(self.0) }
    }

    #[inline(always)]
    pub fn lane1(self) -> f64 {
        unsafe { vgetq_lane_f64::<1>(self.0) }
    }

    /// See [`I64x2::shuffle`].
    #[inline(always)]
    pub fn shuffle<const I1: u32, const I0: u32>(self) -> Self {
        let _: () = LaneIdx::<I1, 2>::CHECK;
        let _: () = LaneIdx::<I0, 2>::CHECK;
        match (I1 & 1, I0 & 1) {
            (1, 0) => self,
            (0, 1) => Self(unsafe { vextq_f64::<1>(self.0, self.0) }),
            (0, 0) => Self(unsafe { vdupq_laneq_f64::<0>(self.0) }),
            (1, 1) => Self(unsafe { vdupq_laneq_f64::<1>(self.0) }),
            _ => unreachable!(),
        }
    }

    #[inline(always)]
    pub fn bitcast_i64x2(self) -> I64x2 {
        I64x2(unsafe { vreinterpretq_s64_f64(self.0) })
    }

    #[inline(always)]
    pub fn bitcast_i32x4(self) -> I32x4 {
        I32x4(unsafe { vreinterpretq_s32_f64(self.0) })
    }

    #[inline(always)]
    pub fn bitcast_f32x4(self) -> F32x4 {
        F32x4(unsafe { vreinterpretq_f32_f64(self.0) })
    }

    /// Round to nearest, ties to even, and convert to `i64` (`fcvtns`);
    /// out-of-range lanes saturate.
    #[inline(always)]
    pub fn convert_nearest_i64x2(self) -> I64x2 {
        I64x2(unsafe { vcvtnq_s64_f64(self.0) })
    }

    /// Round toward zero and convert to `i64` (`fcvtzs`); out-of-range
    /// lanes saturate.
    #[inline(always)]
    pub fn convert_truncate_i64x2(self) -> I64x2 {
        I64x2(unsafe { vcvtq_s64_f64(self.0) })
    }

    /// Round toward negative infinity and convert to `i64` (`fcvtms`);
    /// out-of-range lanes saturate.
    #[inline(always)]
    pub fn convert_floor_i64x2(self) -> I64x2 {
        I64x2(unsafe { vcvtmq_s64_f64(self.0) })
    }

    /// Round to nearest and convert to `i32`, zero-filling output lanes
    /// 2–3. Converts through `i64`, so an out-of-range lane saturates at
    /// the 64-bit bound and then truncates.
    #[inline(always)]
    pub fn convert_nearest_i32x4(self) -> I32x4 {
        I32x4(unsafe { vcombine_s32(vmovn_s64(vcvtnq_s64_f64(self.0)), vdup_n_s32(0)) })
    }

    /// Round toward zero and convert to `i32`, zero-filling lanes 2–3.
    #[inline(always)]
    pub fn convert_truncate_i32x4(self) -> I32x4 {
        I32x4(unsafe { vcombine_s32(vmovn_s64(vcvtq_s64_f64(self.0)), vdup_n_s32(0)) })
    }

    /// Round toward negative infinity and convert to `i32`, zero-filling
    /// lanes 2–3.
    #[inline(always)]
    pub fn convert_floor_i32x4(self) -> I32x4 {
        I32x4(unsafe { vcombine_s32(vmovn_s64(vcvtmq_s64_f64(self.0)), vdup_n_s32(0)) })
    }

    /// IEEE double→single narrowing (`fcvtn`, ties to even), zero-filling
    /// output lanes 2–3.
    #[inline(always)]
    pub fn narrow_f32x4(self) -> F32x4 {
        F32x4(unsafe { vcombine_f32(vcvt_f32_f64(self.0), vdup_n_f32(0.0)) })
    }

    #[inline(always)]
    pub fn eq(self, rhs: Self) -> MaskF64x2 {
        MaskF64x2(unsafe { vceqq_f64(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn ne(self, rhs: Self) -> MaskF64x2 {
        !self.eq(rhs)
    }

    #[inline(always)]
    pub fn lt(self, rhs: Self) -> MaskF64x2 {
        MaskF64x2(unsafe { vcltq_f64(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn le(self, rhs: Self) -> MaskF64x2 {
        MaskF64x2(unsafe { vcleq_f64(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn gt(self, rhs: Self) -> MaskF64x2 {
        MaskF64x2(unsafe { vcgtq_f64(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn ge(self, rhs: Self) -> MaskF64x2 {
        MaskF64x2(unsafe { vcgeq_f64(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn abs(self) -> Self {
        Self(unsafe { vabsq_f64(self.0) })
    }

    /// See [`F32x4::min_fast`].
    #[inline(always)]
    pub fn min_fast(self, rhs: Self) -> Self {
        Self(unsafe { vminq_f64(self.0, rhs.0) })
    }

    /// See [`F32x4::max_fast`].
    #[inline(always)]
    pub fn max_fast(self, rhs: Self) -> Self {
        Self(unsafe { vmaxq_f64(self.0, rhs.0) })
    }

    /// Normalize `-0.0` lanes to `+0.0`.
    #[inline(always)]
    pub fn remove_signed_zero(self) -> Self {
        Self(unsafe { vaddq_f64(self.0, vdupq_n_f64(0.0)) })
    }

    /// See [`F32x4::safe_divide`].
    #[inline(always)]
    pub fn safe_divide(self, rhs: Self) -> Self {
        unsafe {
            let zero_mask = vceqq_f64(rhs.0, vdupq_n_f64(0.0));
            let divisor = vbslq_f64(zero_mask, vdupq_n_f64(1.0), rhs.0);
            Self(vdivq_f64(self.0, divisor))
        }
    }

    /// Bit-exact equality; see [`F32x4::debug_eq`].
    #[inline(always)]
    pub fn debug_eq(self, rhs: Self) -> bool {
        unsafe { bits_eq_u32(vreinterpretq_u32_f64(self.0), vreinterpretq_u32_f64(rhs.0)) }
    }
}

impl Add for F64x2 {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(unsafe { vaddq_f64(self.0, rhs.0) })
    }
}

impl Sub for F64x2 {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(unsafe { vsubq_f64(self.0, rhs.0) })
    }
}

impl Mul for F64x2 {
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self(unsafe { vmulq_f64(self.0, rhs.0) })
    }
}

impl Div for F64x2 {
    type Output = Self;
    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self(unsafe { vdivq_f64(self.0, rhs.0) })
    }
}

impl Neg for F64x2 {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self(unsafe { vnegq_f64(self.0) })
    }
}

// ===== Mask32x4 =====

impl Mask32x4 {
    /// Per-lane constructor, most-significant lane first.
    #[inline(always)]
    pub fn new(e3: bool, e2: bool, e1: bool, e0: bool) -> Self {
        let a = [m32(e0), m32(e1), m32(e2), m32(e3)];
        Self(unsafe { vld1q_u32(a.as_ptr()) })
    }

    #[inline(always)]
    pub fn splat(v: bool) -> Self {
        Self(unsafe { vdupq_n_u32(m32(v)) })
    }

    #[inline(always)]
    pub fn to_array(self) -> [bool; 4] {
        let mut out = [0u32; 4];
        unsafe { vst1q_u32(out.as_mut_ptr(), self.0) };
        [out[0] != 0, out[1] != 0, out[2] != 0, out[3] != 0]
    }

    #[inline(always)]
    pub fn lane0(self) -> bool {
        unsafe { vgetq_lane_u32::<0>(self.0) != 0 }
    }

    #[inline(always)]
    pub fn lane1(self) -> bool {
        unsafe { vgetq_lane_u32::<1>(self.0) != 0 }
    }

    #[inline(always)]
    pub fn lane2(self) -> bool {
        unsafe { vgetq_lane_u32::<2>(self.0) != 0 }
    }

    #[inline(always)]
    pub fn lane3(self) -> bool {
        unsafe { vgetq_lane_u32::<3>(self.0) != 0 }
    }

    /// Per-lane blend (`bsl`): lanes where the mask is set come from
    /// `if_true`.
    #[inline(always)]
    pub fn choose(self, if_true: I32x4, if_false: I32x4) -> I32x4 {
        I32x4(unsafe { vbslq_s32(self.0, if_true.0, if_false.0) })
    }

    /// `choose(self, if_true, zero)` as a single bitwise AND.
    #[inline(always)]
    pub fn choose_else_zero(self, if_true: I32x4) -> I32x4 {
        I32x4(unsafe { vandq_s32(vreinterpretq_s32_u32(self.0), if_true.0) })
    }

    /// Lane-wise mask equality by bit pattern. Distinct from vector `eq`:
    /// this compares mask bits, not data.
    #[inline(always)]
    pub fn eq(self, rhs: Self) -> Self {
        Self(unsafe { vceqq_u32(self.0, rhs.0) })
    }

    /// Sign-extend lanes 0–1 into a 2-lane 64-bit mask. Widening must
    /// sign-extend, not zero-extend, or a set lane would come out half-set.
    #[inline(always)]
    pub fn widen(self) -> Mask64x2 {
        Mask64x2(unsafe {
            vreinterpretq_u64_s64(vmovl_s32(vget_low_s32(vreinterpretq_s32_u32(self.0))))
        })
    }

    #[inline(always)]
    pub fn debug_eq(self, rhs: Self) -> bool {
        bits_eq_u32(self.0, rhs.0)
    }
}

impl BitAnd for Mask32x4 {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self(unsafe { vandq_u32(self.0, rhs.0) })
    }
}

impl BitOr for Mask32x4 {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self(unsafe { vorrq_u32(self.0, rhs.0) })
    }
}

impl BitXor for Mask32x4 {
    type Output = Self;
    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self(unsafe { veorq_u32(self.0, rhs.0) })
    }
}

impl Not for Mask32x4 {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self {
        Self(unsafe { vmvnq_u32(self.0) })
    }
}

// ===== Mask64x2 =====

impl Mask64x2 {
    /// Per-lane constructor, most-significant lane first.
    #[inline(always)]
    pub fn new(e1: bool, e0: bool) -> Self {
        let a = [m64(e0), m64(e1)];
        Self(unsafe { vld1q_u64(a.as_ptr()) })
    }

    #[inline(always)]
    pub fn splat(v: bool) -> Self {
        Self(unsafe { vdupq_n_u64(m64(v)) })
    }

    #[inline(always)]
    pub fn to_array(self) -> [bool; 2] {
        let mut out = [0u64; 2];
        unsafe { vst1q_u64(out.as_mut_ptr(), self.0) };
        [out[0] != 0, out[1] != 0]
    }

    #[inline(always)]
    pub fn lane0(self) -> bool {
        unsafe { vgetq_lane_u64::<0>(self.0) != 0 }
    }

    #[inline(always)]
    pub fn lane1(self) -> bool {
        unsafe { vgetq_lane_u64::<1>(self.0) != 0 }
    }

    #[inline(always)]
    pub fn choose(self, if_true: I64x2, if_false: I64x2) -> I64x2 {
        I64x2(unsafe { vbslq_s64(self.0, if_true.0, if_false.0) })
    }

    /// `choose(self, if_true, zero)` as a single bitwise AND.
    #[inline(always)]
    pub fn choose_else_zero(self, if_true: I64x2) -> I64x2 {
        I64x2(unsafe { vandq_s64(vreinterpretq_s64_u64(self.0), if_true.0) })
    }

    /// Lane-wise mask equality by bit pattern.
    #[inline(always)]
    pub fn eq(self, rhs: Self) -> Self {
        Self(unsafe { vceqq_u64(self.0, rhs.0) })
    }

    /// Narrow each 64-bit mask lane into one 32-bit lane (`xtn`), zero-
    /// filling output lanes 2–3. Truncating an all-1s lane keeps it all-1s.
    #[inline(always)]
    pub fn narrow(self) -> Mask32x4 {
        Mask32x4(unsafe { vcombine_u32(vmovn_u64(self.0), vdup_n_u32(0)) })
    }

    /// Bit-pattern reinterpretation: each 64-bit lane spans the two 32-bit
    /// lanes it occupies, so a set lane replicates into both.
    #[inline(always)]
    pub fn bitcast_mask32x4(self) -> Mask32x4 {
        Mask32x4(unsafe { vreinterpretq_u32_u64(self.0) })
    }

    #[inline(always)]
    pub fn debug_eq(self, rhs: Self) -> bool {
        unsafe { bits_eq_u32(vreinterpretq_u32_u64(self.0), vreinterpretq_u32_u64(rhs.0)) }
    }
}

impl BitAnd for Mask64x2 {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self(unsafe { vandq_u64(self.0, rhs.0) })
    }
}

impl BitOr for Mask64x2 {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self(unsafe { vorrq_u64(self.0, rhs.0) })
    }
}

impl BitXor for Mask64x2 {
    type Output = Self;
    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self(unsafe { veorq_u64(self.0, rhs.0) })
    }
}

impl Not for Mask64x2 {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self {
        Self(unsafe {
            vreinterpretq_u64_u32(vmvnq_u32(vreinterpretq_u32_u64(self.0)))
        })
    }
}

// ===== MaskF32x4 =====

impl MaskF32x4 {
    /// Per-lane constructor, most-significant lane first.
    #[inline(always)]
    pub fn new(e3: bool, e2: bool, e1: bool, e0: bool) -> Self {
        let a = [m32(e0), m32(e1), m32(e2), m32(e3)];
        Self(unsafe { vld1q_u32(a.as_ptr()) })
    }

    #[inline(always)]
    pub fn splat(v: bool) -> Self {
        Self(unsafe { vdupq_n_u32(m32(v)) })
    }

    #[inline(always)]
    pub fn to_array(self) -> [bool; 4] {
        let mut out = [0u32; 4];
        unsafe { vst1q_u32(out.as_mut_ptr(), self.0) };
        [out[0] != 0, out[1] != 0, out[2] != 0, out[3] != 0]
    }

    #[inline(always)]
    pub fn lane0(self) -> bool {
        unsafe { vgetq_lane_u32::<0>(self.0) != 0 }
    }

    #[inline(always)]
    pub fn lane1(self) -> bool {
        unsafe { vgetq_lane_u32::<1>(self.0) != 0 }
    }

    #[inline(always)]
    pub fn lane2(self) -> bool {
        unsafe { vgetq_lane_u32::<2>(self.0) != 0 }
    }

    #[inline(always)]
    pub fn lane3(self) -> bool {
        unsafe { vgetq_lane_u32::<3>(self.0) != 0 }
    }

    /// Per-lane blend (`bsl`); bitwise, so NaN payloads and signed zeros
    /// pass through untouched.
    #[inline(always)]
    pub fn choose(self, if_true: F32x4, if_false: F32x4) -> F32x4 {
        F32x4(unsafe { vbslq_f32(self.0, if_true.0, if_false.0) })
    }

    /// `choose(self, if_true, zero)` as a single bitwise AND.
    #[inline(always)]
    pub fn choose_else_zero(self, if_true: F32x4) -> F32x4 {
        F32x4(unsafe {
            vreinterpretq_f32_u32(vandq_u32(self.0, vreinterpretq_u32_f32(if_true.0)))
        })
    }

    /// Lane-wise mask equality by bit pattern — an integer compare, not a
    /// float compare.
    #[inline(always)]
    pub fn eq(self, rhs: Self) -> Self {
        Self(unsafe { vceqq_u32(self.0, rhs.0) })
    }

    /// Sign-extend lanes 0–1 into a 2-lane double-precision mask.
    #[inline(always)]
    pub fn widen(self) -> MaskF64x2 {
        MaskF64x2(unsafe {
            vreinterpretq_u64_s64(vmovl_s32(vget_low_s32(vreinterpretq_s32_u32(self.0))))
        })
    }

    #[inline(always)]
    pub fn debug_eq(self, rhs: Self) -> bool {
        bits_eq_u32(self.0, rhs.0)
    }
}

impl BitAnd for MaskF32x4 {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self(unsafe { vandq_u32(self.0, rhs.0) })
    }
}

impl BitOr for MaskF32x4 {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self(unsafe { vorrq_u32(self.0, rhs.0) })
    }
}

impl BitXor for MaskF32x4 {
    type Output = Self;
    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self(unsafe { veorq_u32(self.0, rhs.0) })
    }
}

impl Not for MaskF32x4 {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self {
        Self(unsafe { vmvnq_u32(self.0) })
    }
}

// ===== MaskF64x2 =====

impl MaskF64x2 {
    /// Per-lane constructor, most-significant lane first.
    #[inline(always)]
    pub fn new(e1: bool, e0: bool) -> Self {
        let a = [m64(e0), m64(e1)];
        Self(unsafe { vld1q_u64(a.as_ptr()) })
    }

    #[inline(always)]
    pub fn splat(v: bool) -> Self {
        Self(unsafe { vdupq_n_u64(m64(v)) })
    }

    #[inline(always)]
    pub fn to_array(self) -> [bool; 2] {
        let mut out = [0u64; 2];
        unsafe { vst1q_u64(out.as_mut_ptr(), self.0) };
        [out[0] != 0, out[1] != 0]
    }

    #[inline(always)]
    pub fn lane0(self) -> bool {
        unsafe { vgetq_lane_u64::<0>(self.0) != 0 }
    }

    #[inline(always)]
    pub fn lane1(self) -> bool {
        unsafe { vgetq_lane_u64::<1>(self.0) != 0 }
    }

    #[inline(always)]
    pub fn choose(self, if_true: F64x2, if_false: F64x2) -> F64x2 {
        F64x2(unsafe { vbslq_f64(self.0, if_true.0, if_false.0) })
    }

    /// `choose(self, if_true, zero)` as a single bitwise AND.
    #[inline(always)]
    pub fn choose_else_zero(self, if_true: F64x2) -> F64x2 {
        F64x2(unsafe {
            vreinterpretq_f64_u64(vandq_u64(self.0, vreinterpretq_u64_f64(if_true.0)))
        })
    }

    /// Lane-wise mask equality by bit pattern.
    #[inline(always)]
    pub fn eq(self, rhs: Self) -> Self {
        Self(unsafe { vceqq_u64(self.0, rhs.0) })
    }

    /// Narrow each lane into one single-precision mask lane, zero-filling
    /// output lanes 2–3.
    #[inline(always)]
    pub fn narrow(self) -> MaskF32x4 {
        MaskF32x4(unsafe { vcombine_u32(vmovn_u64(self.0), vdup_n_u32(0)) })
    }

    #[inline(always)]
    pub fn debug_eq(self, rhs: Self) -> bool {
        unsafe { bits_eq_u32(vreinterpretq_u32_u64(self.0), vreinterpretq_u32_u64(rhs.0)) }
    }
}

impl BitAnd for MaskF64x2 {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self(unsafe { vandq_u64(self.0, rhs.0) })
    }
}

impl BitOr for MaskF64x2 {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self(unsafe { vorrq_u64(self.0, rhs.0) })
    }
}

impl BitXor for MaskF64x2 {
    type Output = Self;
    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self(unsafe { veorq_u64(self.0, rhs.0) })
    }
}

impl Not for MaskF64x2 {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self {
        Self(unsafe {
            vreinterpretq_u64_u32(vmvnq_u32(vreinterpretq_u32_u64(self.0)))
        })
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

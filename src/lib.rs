//! vec128 — a portable fixed-width 128-bit SIMD vector abstraction.
//!
//! This crate exposes four 128-bit vector types (`I32x4`, `I64x2`, `F32x4`,
//! `F64x2`) and their comparison-mask counterparts behind a single API surface
//! that compiles to native SIMD instructions on x86_64 (SSE4.2) and aarch64
//! (NEON), with a scalar lane-array fallback everywhere else.
//!
//! ## Backends and compile-time dispatch
//!
//! Exactly one backend is selected at build time and re-exported from the
//! crate root; all three expose an identical public surface:
//! - **sse** — x86_64 with `sse4.2` statically enabled
//!   (`-C target-feature=+sse4.2` or an equivalent `target-cpu`)
//! - **neon** — aarch64 (NEON is baseline)
//! - **scalar** — every other target, or any target when the `force-scalar`
//!   feature is set
//!
//! There is no runtime branching on backend identity: selection is pure `cfg`
//! logic, and higher-level code is written once against the shared surface.
//! The `require-native` feature turns silent fallback to the scalar backend
//! into a build failure; combining it with `force-scalar` is a conflicting
//! selection and also fails the build.
//!
//! ## Semantics that intentionally differ across backends
//!
//! Most operations are bit-identical everywhere. The documented exceptions,
//! which follow each ISA's native instruction rather than forcing one
//! behavior, are:
//! - out-of-range float→int conversion results (x86 sentinel vs. saturation),
//! - halfway ties in `convert_nearest` under a non-default rounding mode,
//! - signed-zero and NaN handling in `min_fast`/`max_fast`.
//!
//! Callers that need deterministic float min/max can normalize with
//! [`F32x4::remove_signed_zero`] first.
//!
//! ## Value model
//!
//! Vector and mask values are immutable `Copy` value types. Constructors are
//! `zero()`, `splat(v)` and per-lane `new(..)` (most-significant-lane-first,
//! the hardware immediate convention); every pure operation returns a new
//! value. Nothing here allocates.

#[cfg(all(feature = "force-scalar", feature = "require-native"))]
compile_error!(
    "features `force-scalar` and `require-native` are mutually exclusive: \
     one forces the portable backend, the other forbids it"
);

#[cfg(all(
    feature = "require-native",
    not(any(
        all(target_arch = "x86_64", target_feature = "sse4.2"),
        all(target_arch = "aarch64", target_feature = "neon"),
    ))
))]
compile_error!(
    "`require-native` is set but no native 128-bit backend exists for this \
     target (x86_64 needs sse4.2 enabled at compile time)"
);

mod backend;
pub mod denormal;
pub mod permute;

pub use backend::{
    Backend, F32x4, F64x2, I32x4, I64x2, Mask32x4, Mask64x2, MaskF32x4, MaskF64x2, BACKEND,
};
pub use denormal::FlushDenormals;

/// Compile-time lane-index range check used by `shuffle`.
///
/// Referencing `CHECK` with an out-of-range `I` fails the build at
/// monomorphization time, so malformed shuffle indices are rejected rather
/// than wrapped silently.
pub(crate) struct LaneIdx<const I: u32, const LANES: u32>;

impl<const I: u32, const LANES: u32> LaneIdx<I, LANES> {
    pub(crate) const CHECK: () = assert!(I < LANES, "shuffle lane index out of range");
}

/// Compile-time shift-amount range check used by `shl`/`shr`.
pub(crate) struct ShiftAmt<const N: u32, const BITS: u32>;

impl<const N: u32, const BITS: u32> ShiftAmt<N, BITS> {
    pub(crate) const CHECK: () = assert!(N < BITS, "shift amount exceeds lane width");
}

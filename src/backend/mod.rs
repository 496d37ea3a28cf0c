//! Backend selection.
//!
//! Exactly one of the three backend modules is compiled and re-exported,
//! chosen purely from target `cfg` facts (plus the `force-scalar` feature).
//! The modules implement an identical public surface, so the rest of the
//! crate and downstream code never mention a backend by name.

/// Identity of the register representation active in this build.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Backend {
    /// Portable lane-array emulation.
    Scalar,
    /// x86_64 SSE4.2 128-bit registers.
    Sse,
    /// aarch64 NEON typed registers.
    Neon,
}

#[cfg(all(
    target_arch = "x86_64",
    target_feature = "sse4.2",
    not(feature = "force-scalar")
))]
mod sse;
#[cfg(all(
    target_arch = "x86_64",
    target_feature = "sse4.2",
    not(feature = "force-scalar")
))]
pub use sse::*;
#[cfg(all(
    target_arch = "x86_64",
    target_feature = "sse4.2",
    not(feature = "force-scalar")
))]
pub const BACKEND: Backend = Backend::Sse;

#[cfg(all(
    target_arch = "aarch64",
    target_feature = "neon",
    not(feature = "force-scalar")
))]
mod neon;
#[cfg(all(
    target_arch = "aarch64",
    target_feature = "neon",
    not(feature = "force-scalar")
))]
pub use neon::*;
#[cfg(all(
    target_arch = "aarch64",
    target_feature = "neon",
    not(feature = "force-scalar")
))]
pub const BACKEND: Backend = Backend::Neon;

#[cfg(any(
    feature = "force-scalar",
    not(any(
        all(target_arch = "x86_64", target_feature = "sse4.2"),
        all(target_arch = "aarch64", target_feature = "neon"),
    ))
))]
mod bits;
#[cfg(any(
    feature = "force-scalar",
    not(any(
        all(target_arch = "x86_64", target_feature = "sse4.2"),
        all(target_arch = "aarch64", target_feature = "neon"),
    ))
))]
mod scalar;
#[cfg(any(
    feature = "force-scalar",
    not(any(
        all(target_arch = "x86_64", target_feature = "sse4.2"),
        all(target_arch = "aarch64", target_feature = "neon"),
    ))
))]
pub use scalar::*;
#[cfg(any(
    feature = "force-scalar",
    not(any(
        all(target_arch = "x86_64", target_feature = "sse4.2"),
        all(target_arch = "aarch64", target_feature = "neon"),
    ))
))]
pub const BACKEND: Backend = Backend::Scalar;

//! Scoped control of denormal (subnormal) float handling.
//!
//! Denormal inputs and results put many cores into a microcoded slow path
//! that can cost an order of magnitude in float throughput. Iterative
//! kernels whose values decay toward zero hit this without warning. The
//! [`FlushDenormals`] guard switches the hardware float-control register to
//! flush-to-zero for the current thread and restores the previous state on
//! drop, so the change can never leak past the scope that asked for it.
//!
//! The control register:
//! - x86_64: MXCSR, FZ (bit 15) and DAZ (bit 6)
//! - aarch64: FPCR, FZ (bit 24)
//!
//! On targets with neither register the guard is a no-op. Note this keys on
//! the architecture, not the active vector backend: scalar float math on
//! x86_64 runs through SSE registers and is governed by MXCSR all the same.
//!
//! The register is ambient hardware state, not something this module can
//! fence. Guards nest cleanly on one thread (each restores exactly what it
//! observed), but interleaving acquisition with other code that writes the
//! float-control register — on this thread or, via shared float-sensitive
//! data, on others — is the caller's responsibility to coordinate.

use std::marker::PhantomData;

#[cfg(target_arch = "x86_64")]
const MXCSR_FTZ_DAZ: u32 = (1 << 15) | (1 << 6);

#[cfg(target_arch = "aarch64")]
const FPCR_FZ: u64 = 1 << 24;

#[cfg(target_arch = "x86_64")]
#[inline]
fn read_mxcsr() -> u32 {
    let mut v: u32 = 0;
    unsafe {
        std::arch::asm!(
            "stmxcsr [{ptr}]",
            ptr = in(reg) &mut v,
            options(nostack, preserves_flags)
        );
    }
    v
}

#[cfg(target_arch = "x86_64")]
#[inline]
fn write_mxcsr(v: u32) {
    unsafe {
        std::arch::asm!(
            "ldmxcsr [{ptr}]",
            ptr = in(reg) &v,
            options(nostack)
        );
    }
}

#[cfg(target_arch = "aarch64")]
#[inline]
fn read_fpcr() -> u64 {
    let v: u64;
    unsafe {
        std::arch::asm!("mrs {v}, fpcr", v = out(reg) v, options(nomem, nostack));
    }
    v
}

#[cfg(target_arch = "aarch64")]
#[inline]
fn write_fpcr(v: u64) {
    unsafe {
        std::arch::asm!("msr fpcr, {v}", v = in(reg) v, options(nomem, nostack));
    }
}

/// RAII guard that flushes denormals to zero while it is alive.
///
/// The guard is `!Send`: it must be dropped on the thread that created it,
/// since it restores the register it read at construction. Guards nest;
/// each one restores exactly the value it observed. Coordinating with other
/// writers of the float-control register is a caller obligation (see the
/// module docs).
///
/// ```
/// use vec128::{F32x4, FlushDenormals};
///
/// let _ftz = FlushDenormals::new();
/// let tiny = F32x4::splat(1.0e-42); // subnormal in f32
/// let _ = tiny * F32x4::splat(0.5);
/// // previous denormal behavior is restored when `_ftz` drops
/// ```
#[must_use = "the guard restores denormal handling when dropped"]
pub struct FlushDenormals {
    #[cfg(target_arch = "x86_64")]
    saved: u32,
    #[cfg(target_arch = "aarch64")]
    saved: u64,
    _not_send: PhantomData<*mut ()>,
}

impl FlushDenormals {
    /// Enable flush-to-zero (and, on x86_64, denormals-are-zero) for the
    /// current thread until the returned guard is dropped.
    pub fn new() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            let saved = read_mxcsr();
            write_mxcsr(saved | MXCSR_FTZ_DAZ);
            log::trace!("mxcsr {saved:#010x} -> {:#010x}", saved | MXCSR_FTZ_DAZ);
            Self {
                saved,
                _not_send: PhantomData,
            }
        }
        #[cfg(target_arch = "aarch64")]
        {
            let saved = read_fpcr();
            write_fpcr(saved | FPCR_FZ);
            log::trace!("fpcr {saved:#018x} -> {:#018x}", saved | FPCR_FZ);
            Self {
                saved,
                _not_send: PhantomData,
            }
        }
        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        {
            log::trace!("no float-control register on this target; guard is a no-op");
            Self {
                _not_send: PhantomData,
            }
        }
    }
}

impl Default for FlushDenormals {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for FlushDenormals {
    fn drop(&mut self) {
        #[cfg(target_arch = "x86_64")]
        {
            write_mxcsr(self.saved);
            log::trace!("mxcsr restored to {:#010x}", self.saved);
        }
        #[cfg(target_arch = "aarch64")]
        {
            write_fpcr(self.saved);
            log::trace!("fpcr restored to {:#018x}", self.saved);
        }
    }
}

//! CPU capability detection and kernel selection.
//!
//! Detection runs at most a handful of times per process (racing first
//! callers may each probe; they all store the same answer) and is read-only
//! afterwards. Selection itself is a pure function of its inputs so the
//! chosen kernel can be computed once and passed into the hot path.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::ElementType;

const UNPROBED: u8 = 0;
const ABSENT: u8 = 1;
const PRESENT: u8 = 2;

static AVX2: AtomicU8 = AtomicU8::new(UNPROBED);

/// Caller preference for which kernel runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExecutionMode {
    /// Vectorized when the element type and CPU allow it.
    #[default]
    Auto,
    /// Always the portable kernel.
    Scalar,
    /// Vectorized when possible; silently scalar otherwise.
    Vectorized,
}

/// Kernel a conversion will run on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KernelChoice {
    Scalar,
    /// 256-bit byte shuffle, 8-bit channels only.
    Vectorized,
}

/// Instruction sets the conversion kernels care about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Capabilities {
    /// AVX2 (x86-64-v3) is usable on this processor.
    pub avx2: bool,
}

impl Capabilities {
    /// Capabilities of the running processor, probed on first use and cached
    /// for the rest of the process.
    pub fn detect() -> Self {
        let avx2 = match AVX2.load(Ordering::Acquire) {
            PRESENT => true,
            ABSENT => false,
            _ => {
                let found = probe_avx2();
                log::debug!("capability probe: avx2={found}");
                AVX2.store(if found { PRESENT } else { ABSENT }, Ordering::Release);
                found
            }
        };
        Capabilities { avx2 }
    }

    /// No vector instruction sets; every request runs scalar.
    pub const fn scalar_only() -> Self {
        Capabilities { avx2: false }
    }
}

#[cfg(target_arch = "x86_64")]
fn probe_avx2() -> bool {
    use archmage::{SimdToken, X64V3Token};
    X64V3Token::summon().is_some()
}

#[cfg(not(target_arch = "x86_64"))]
fn probe_avx2() -> bool {
    false
}

/// Pick the kernel for one conversion.
///
/// Vectorized only for 8-bit channels on a CPU with AVX2, and only when the
/// caller did not ask for scalar. Everything else runs scalar, which is
/// always correct.
pub fn select_kernel(
    element: ElementType,
    mode: ExecutionMode,
    caps: Capabilities,
) -> KernelChoice {
    let choice = match mode {
        ExecutionMode::Scalar => KernelChoice::Scalar,
        ExecutionMode::Auto | ExecutionMode::Vectorized => {
            if element.is_vectorizable() && caps.avx2 {
                KernelChoice::Vectorized
            } else {
                if mode == ExecutionMode::Vectorized {
                    log::debug!(
                        "vectorized kernel unavailable for {element} (avx2={}), using scalar",
                        caps.avx2
                    );
                }
                KernelChoice::Scalar
            }
        }
    };
    log::trace!("kernel for {element} ({mode:?}): {choice:?}");
    choice
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;

    const WITH_AVX2: Capabilities = Capabilities { avx2: true };
    const NONE: Capabilities = Capabilities::scalar_only();

    #[test]
    fn scalar_mode_always_scalar() {
        for el in [ElementType::U8, ElementType::U16, ElementType::F32] {
            assert_eq!(
                select_kernel(el, ExecutionMode::Scalar, WITH_AVX2),
                KernelChoice::Scalar
            );
        }
    }

    #[test]
    fn only_u8_vectorizes() {
        for mode in [ExecutionMode::Auto, ExecutionMode::Vectorized] {
            assert_eq!(
                select_kernel(ElementType::U8, mode, WITH_AVX2),
                KernelChoice::Vectorized
            );
            assert_eq!(
                select_kernel(ElementType::U16, mode, WITH_AVX2),
                KernelChoice::Scalar
            );
            assert_eq!(
                select_kernel(ElementType::F32, mode, WITH_AVX2),
                KernelChoice::Scalar
            );
        }
    }

    #[test]
    fn missing_avx2_falls_back() {
        assert_eq!(
            select_kernel(ElementType::U8, ExecutionMode::Vectorized, NONE),
            KernelChoice::Scalar
        );
        assert_eq!(
            select_kernel(ElementType::U8, ExecutionMode::Auto, NONE),
            KernelChoice::Scalar
        );
    }

    #[test]
    fn detection_is_stable() {
        let first = Capabilities::detect();
        let threads: std::vec::Vec<_> = (0..4)
            .map(|_| std::thread::spawn(Capabilities::detect))
            .collect();
        for t in threads {
            assert_eq!(t.join().unwrap(), first);
        }
        #[cfg(not(target_arch = "x86_64"))]
        assert!(!first.avx2);
    }
}

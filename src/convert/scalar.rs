use archmage::prelude::*;

use crate::{Swizzle, SwizzleSlot};

// ===========================================================================
// Scalar row implementation (every element type)
// ===========================================================================

/// Apply `swizzle` to every whole pixel of `src`, writing packed target
/// pixels into `dst`. Stops at whichever buffer runs out of pixels first.
///
/// Callers reject `Unknown` layouts before getting here; a zero-width
/// layout writes nothing.
pub(crate) fn swizzle_row_scalar<T: Copy>(swizzle: &Swizzle, fill: T, src: &[T], dst: &mut [T]) {
    let (sc, dc) = (swizzle.source_channels(), swizzle.len());
    debug_assert!(sc != 0 && dc != 0, "unknown layout reached the scalar kernel");
    if sc == 0 || dc == 0 {
        return;
    }
    let slots = swizzle.slots();
    for (s, d) in src.chunks_exact(sc).zip(dst.chunks_exact_mut(dc)) {
        for (out, slot) in d.iter_mut().zip(slots) {
            *out = match *slot {
                SwizzleSlot::Source(i) => s[i as usize],
                SwizzleSlot::Fill => fill,
            };
        }
    }
}

// ===========================================================================
// Scalar dispatch target for incant!
// ===========================================================================

pub(super) fn swizzle_u8_impl_scalar(
    _token: ScalarToken,
    swizzle: &Swizzle,
    fill: u8,
    src: &[u8],
    dst: &mut [u8],
) {
    swizzle_row_scalar(swizzle, fill, src, dst);
}

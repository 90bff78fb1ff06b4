use archmage::prelude::*;

use super::scalar::swizzle_row_scalar;
use crate::{Swizzle, SwizzleSlot};

// pshufb writes zero for any index byte with the high bit set.
const ZERO_BYTE: i8 = -128;
// blendv takes the fill byte wherever the select byte has the high bit set.
const SELECT_FILL: i8 = -1;

// ===========================================================================
// Mask construction
// ===========================================================================

/// Shuffle and blend-select masks for one (source, target, fill) triple.
///
/// A 256-bit vector is two 128-bit lanes and `vpshufb` cannot move bytes
/// across them, so each lane carries `lane_pixels` whole pixels, few enough
/// that both their source bytes and their target bytes fit in 16 bytes.
/// Lane 1 is loaded from the pixel right after lane 0's last one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct VectorPlan {
    pub(crate) shuffle: [i8; 32],
    pub(crate) blend: [i8; 32],
    pub(crate) lane_pixels: usize,
    pub(crate) src_lane_bytes: usize,
    pub(crate) dst_lane_bytes: usize,
}

impl VectorPlan {
    pub(crate) fn new(swizzle: &Swizzle) -> Self {
        let (sc, dc) = (swizzle.source_channels(), swizzle.len());
        let lane_pixels = 16 / sc.max(dc).max(1);
        let mut shuffle = [ZERO_BYTE; 32];
        let mut blend = [0i8; 32];
        for lane in 0..2 {
            for p in 0..lane_pixels {
                for (c, slot) in swizzle.slots().iter().enumerate() {
                    let out = lane * 16 + p * dc + c;
                    match *slot {
                        SwizzleSlot::Source(s) => shuffle[out] = (p * sc + s as usize) as i8,
                        SwizzleSlot::Fill => blend[out] = SELECT_FILL,
                    }
                }
            }
        }
        VectorPlan {
            shuffle,
            blend,
            lane_pixels,
            src_lane_bytes: lane_pixels * sc,
            dst_lane_bytes: lane_pixels * dc,
        }
    }

    /// Pixels converted per 256-bit block.
    #[inline]
    pub(crate) fn block_pixels(&self) -> usize {
        2 * self.lane_pixels
    }
}

// ===========================================================================
// x86-64 AVX2: rite row implementation
// ===========================================================================

#[rite]
pub(super) fn swizzle_u8_row_v3(
    _token: X64V3Token,
    swizzle: &Swizzle,
    fill: u8,
    src: &[u8],
    dst: &mut [u8],
) {
    let (sc, dc) = (swizzle.source_channels(), swizzle.len());
    if sc == 0 || dc == 0 {
        return;
    }
    let plan = VectorPlan::new(swizzle);
    let mask = _mm256_loadu_si256(&plan.shuffle);
    let select = _mm256_loadu_si256(&plan.blend);
    let fills = _mm256_set1_epi8(fill as i8);

    let pixels = (src.len() / sc).min(dst.len() / dc);
    let step = plan.block_pixels();
    let lane_out = plan.dst_lane_bytes;
    let (slen, dlen) = (src.len(), dst.len());
    let mut px = 0;
    while px + step <= pixels {
        let s0 = px * sc;
        let s1 = s0 + plan.src_lane_bytes;
        let d0 = px * dc;
        // Lane 1's 16-byte load reaches furthest; never read past the source.
        if s1 + 16 > slen || d0 + 2 * lane_out > dlen {
            break;
        }
        let lo: &[u8; 16] = src[s0..s0 + 16].try_into().unwrap();
        let hi: &[u8; 16] = src[s1..s1 + 16].try_into().unwrap();
        let block = _mm256_set_m128i(_mm_loadu_si128(hi), _mm_loadu_si128(lo));
        let shuffled = _mm256_shuffle_epi8(block, mask);
        let out = _mm256_blendv_epi8(shuffled, fills, select);
        if lane_out == 16 {
            let d: &mut [u8; 32] = (&mut dst[d0..d0 + 32]).try_into().unwrap();
            _mm256_storeu_si256(d, out);
        } else {
            let mut tmp = [0u8; 32];
            _mm256_storeu_si256(&mut tmp, out);
            dst[d0..d0 + lane_out].copy_from_slice(&tmp[..lane_out]);
            dst[d0 + lane_out..d0 + 2 * lane_out].copy_from_slice(&tmp[16..16 + lane_out]);
        }
        px += step;
    }
    swizzle_row_scalar(swizzle, fill, &src[px * sc..], &mut dst[px * dc..]);
}

// x86-64 arcane contiguous wrapper
#[arcane]
pub(super) fn swizzle_u8_impl_v3(
    t: X64V3Token,
    swizzle: &Swizzle,
    fill: u8,
    src: &[u8],
    dst: &mut [u8],
) {
    swizzle_u8_row_v3(t, swizzle, fill, src, dst);
}

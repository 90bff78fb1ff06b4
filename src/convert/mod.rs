// ---------------------------------------------------------------------------
// Channel-layout conversion engine.
//
// Architecture: validation and kernel selection happen once per call, then
// the swizzle runs over the whole buffer. 8-bit buffers dispatch through
// incant! (#[arcane] AVX2 entry, #[rite] row loop, scalar fallback); every
// other element type runs the generic scalar row.
// ---------------------------------------------------------------------------

use alloc::vec;
use alloc::vec::Vec;

use archmage::incant;

use crate::{
    Capabilities, ChannelFormat, ConvertError, ConvertOptions, Element, FillMode, FormatRole,
    KernelChoice, Swizzle, fill_value, select_kernel,
};

mod scalar;
pub(crate) use scalar::swizzle_row_scalar;
use scalar::*;

#[cfg(target_arch = "x86_64")]
mod avx2;
#[cfg(target_arch = "x86_64")]
use avx2::*;


// ===========================================================================
// Validation helpers
// ===========================================================================

#[inline]
fn check_formats(source: ChannelFormat, target: ChannelFormat) -> Result<(), ConvertError> {
    if !source.is_known() {
        return Err(ConvertError::UnknownFormat {
            role: FormatRole::Source,
        });
    }
    if !target.is_known() {
        return Err(ConvertError::UnknownFormat {
            role: FormatRole::Target,
        });
    }
    Ok(())
}

/// Returns the number of destination elements the conversion writes.
#[inline]
fn check_copy(
    src_len: usize,
    source: ChannelFormat,
    dst_len: usize,
    target: ChannelFormat,
) -> Result<usize, ConvertError> {
    check_formats(source, target)?;
    let (sc, dc) = (source.channel_count(), target.channel_count());
    if !src_len.is_multiple_of(sc) {
        return Err(ConvertError::NotPixelAligned {
            len: src_len,
            channels: sc,
        });
    }
    let required = (src_len / sc)
        .checked_mul(dc)
        .ok_or(ConvertError::DimensionsOverflow)?;
    if dst_len < required {
        return Err(ConvertError::DestinationTooSmall {
            required,
            actual: dst_len,
        });
    }
    Ok(required)
}

/// Elements needed to hold `src_len` source elements converted to `target`.
fn output_len(
    src_len: usize,
    source: ChannelFormat,
    target: ChannelFormat,
) -> Result<usize, ConvertError> {
    check_formats(source, target)?;
    (src_len / source.channel_count())
        .checked_mul(target.channel_count())
        .ok_or(ConvertError::DimensionsOverflow)
}

// ===========================================================================
// Kernel routing
// ===========================================================================

/// 8-bit rows: SIMD when the chosen kernel allows it.
pub(crate) fn swizzle_u8(
    kernel: KernelChoice,
    swizzle: &Swizzle,
    fill: u8,
    src: &[u8],
    dst: &mut [u8],
) {
    match kernel {
        KernelChoice::Vectorized => {
            incant!(swizzle_u8_impl(swizzle, fill, src, dst), [v3, scalar]);
        }
        KernelChoice::Scalar => swizzle_row_scalar(swizzle, fill, src, dst),
    }
}

fn run<T: Element>(
    source: ChannelFormat,
    target: ChannelFormat,
    src: &[T],
    dst: &mut [T],
    options: &ConvertOptions,
) {
    if source == target {
        dst.copy_from_slice(src);
        return;
    }
    let swizzle = Swizzle::resolve(source, target);
    let fill = fill_value::<T>(options.fill);
    let kernel = select_kernel(T::ELEMENT_TYPE, options.mode, Capabilities::detect());
    T::swizzle_rows(kernel, &swizzle, fill, src, dst);
}

// ===========================================================================
// Public API
// ===========================================================================

/// Convert `src` from `source` layout to `target` layout into a new buffer.
///
/// The pixel count is preserved; only channel count and order change.
/// Channels the source lacks get the value chosen by `options.fill`.
///
/// ```
/// use chanswiz::{ChannelFormat, ConvertOptions, convert};
///
/// let rgb = [10u8, 20, 30, 40, 50, 60];
/// let bgra = convert(&rgb, ChannelFormat::Rgb, ChannelFormat::Bgra, &ConvertOptions::new())?;
/// assert_eq!(bgra, [30, 20, 10, 255, 60, 50, 40, 255]);
/// # Ok::<(), chanswiz::ConvertError>(())
/// ```
pub fn convert<T: Element>(
    src: &[T],
    source: ChannelFormat,
    target: ChannelFormat,
    options: &ConvertOptions,
) -> Result<Vec<T>, ConvertError> {
    let len = output_len(src.len(), source, target)?;
    let mut dst = vec![<T as bytemuck::Zeroable>::zeroed(); len];
    convert_into(src, source, &mut dst, target, options)?;
    Ok(dst)
}

/// Convert `src` into the caller's `dst`.
///
/// `dst` must hold at least `pixels × target.channel_count()` elements;
/// anything past that is left untouched.
pub fn convert_into<T: Element>(
    src: &[T],
    source: ChannelFormat,
    dst: &mut [T],
    target: ChannelFormat,
    options: &ConvertOptions,
) -> Result<(), ConvertError> {
    let required = check_copy(src.len(), source, dst.len(), target)?;
    run(source, target, src, &mut dst[..required], options);
    Ok(())
}

/// Convert with the portable kernel regardless of CPU or options.
///
/// This is the reference every other path must match.
pub fn convert_scalar<T: Element>(
    src: &[T],
    source: ChannelFormat,
    target: ChannelFormat,
    fill: FillMode,
) -> Result<Vec<T>, ConvertError> {
    let len = output_len(src.len(), source, target)?;
    let mut dst = vec![<T as bytemuck::Zeroable>::zeroed(); len];
    check_copy(src.len(), source, dst.len(), target)?;
    let swizzle = Swizzle::resolve(source, target);
    swizzle_row_scalar(&swizzle, fill_value::<T>(fill), src, &mut dst);
    Ok(dst)
}

/// Convert 8-bit channels with the AVX2 kernel.
///
/// Runs the scalar kernel instead when the processor lacks AVX2; the output
/// is identical either way.
pub fn convert_vectorized_u8(
    src: &[u8],
    source: ChannelFormat,
    target: ChannelFormat,
    fill: FillMode,
) -> Result<Vec<u8>, ConvertError> {
    let len = output_len(src.len(), source, target)?;
    let mut dst = vec![0u8; len];
    check_copy(src.len(), source, dst.len(), target)?;
    let swizzle = Swizzle::resolve(source, target);
    let fill = fill_value::<u8>(fill);
    incant!(swizzle_u8_impl(&swizzle, fill, src, &mut dst), [v3, scalar]);
    Ok(dst)
}

//! Whole-image conversions using [`imgref`] types.
//!
//! Sources may be strided; results are always packed (`stride == width`).
//!
//! ```rust
//! use imgref::ImgVec;
//! use rgb::{Bgra, Rgb};
//! use chanswiz::{ConvertOptions, img};
//!
//! let rgb_img = ImgVec::new(vec![Rgb::new(255u8, 0, 128); 100], 10, 10);
//! let bgra_img: ImgVec<Bgra<u8>> = img::convert_image(rgb_img.as_ref(), &ConvertOptions::new())?;
//! assert_eq!(bgra_img.width(), 10);
//! # Ok::<(), chanswiz::ConvertError>(())
//! ```

use alloc::vec;
use alloc::vec::Vec;

use imgref::{ImgRef, ImgVec};

use crate::typed::{Pixel, convert_pixels_into};
use crate::{ConvertError, ConvertOptions, PixelBuffer};

/// Convert every row of `img` into a packed image of another pixel type.
pub fn convert_image<S, D>(
    img: ImgRef<'_, S>,
    options: &ConvertOptions,
) -> Result<ImgVec<D>, ConvertError>
where
    S: Pixel,
    D: Pixel<Channel = S::Channel>,
{
    let (w, h) = (img.width(), img.height());
    let len = w.checked_mul(h).ok_or(ConvertError::DimensionsOverflow)?;
    let mut dst = ImgVec::new(vec![D::zeroed(); len], w, h);

    if img.stride() == w {
        // Packed source: one call over the whole buffer.
        convert_pixels_into(&img.buf()[..len], dst.buf_mut(), options)?;
    } else {
        for (src_row, dst_row) in img.rows().zip(dst.rows_mut()) {
            convert_pixels_into(src_row, dst_row, options)?;
        }
    }
    log::trace!("converted {w}x{h} image {} -> {}", S::FORMAT, D::FORMAT);
    Ok(dst)
}

/// Copy a strided image into a packed [`PixelBuffer`] of its channels.
pub fn to_pixel_buffer<P: Pixel>(
    img: ImgRef<'_, P>,
) -> Result<PixelBuffer<P::Channel>, ConvertError> {
    let (w, h) = (img.width(), img.height());
    let mut data: Vec<P::Channel> = Vec::new();
    for row in img.rows() {
        data.extend_from_slice(bytemuck::cast_slice(row));
    }
    PixelBuffer::new(data, w, h, P::FORMAT)
}

/// View a [`PixelBuffer`] as an image of `P` pixels.
///
/// Fails with [`ConvertError::FormatMismatch`] when `P` does not have the
/// buffer's layout.
pub fn from_pixel_buffer<P: Pixel>(
    buf: PixelBuffer<P::Channel>,
) -> Result<ImgVec<P>, ConvertError> {
    if buf.format() != P::FORMAT {
        return Err(ConvertError::FormatMismatch {
            expected: P::FORMAT,
            actual: buf.format(),
        });
    }
    let (w, h) = (buf.width(), buf.height());
    let pixels: Vec<P> = bytemuck::allocation::pod_collect_to_vec(buf.as_slice());
    Ok(ImgVec::new(pixels, w, h))
}

//! Conversions between [`rgb`] crate pixel slices.
//!
//! Each pixel type carries its channel layout, so the source and target
//! formats come from the types instead of arguments. The slices are
//! reinterpreted as flat channel slices via bytemuck and run through the
//! same engine as [`convert`](crate::convert).
//!
//! ```rust
//! use rgb::{Bgra, Rgb};
//! use chanswiz::{ConvertOptions, typed};
//!
//! let pixels = vec![Rgb::new(255u8, 0, 128); 100];
//! let bgra: Vec<Bgra<u8>> = typed::convert_pixels(&pixels, &ConvertOptions::new())?;
//! assert_eq!(bgra[0], Bgra { b: 128, g: 0, r: 255, a: 255 });
//! # Ok::<(), chanswiz::ConvertError>(())
//! ```

use alloc::vec;
use alloc::vec::Vec;

use rgb::{Bgr, Bgra, Rgb, Rgba};

use crate::{ChannelFormat, ConvertError, ConvertOptions, Element};

mod sealed {
    pub trait Sealed {}
}

/// A pixel struct whose fields are channels in a fixed [`ChannelFormat`].
pub trait Pixel: sealed::Sealed + bytemuck::Pod {
    /// Storage type of each channel.
    type Channel: Element;
    /// Layout of the channels in memory.
    const FORMAT: ChannelFormat;
}

macro_rules! impl_pixel {
    ($($ty:ident => $format:ident),* $(,)?) => {$(
        impl<T: Element> sealed::Sealed for $ty<T> {}
        impl<T: Element> Pixel for $ty<T>
        where
            $ty<T>: bytemuck::Pod,
        {
            type Channel = T;
            const FORMAT: ChannelFormat = ChannelFormat::$format;
        }
    )*};
}

impl_pixel! {
    Rgb => Rgb,
    Rgba => Rgba,
    Bgr => Bgr,
    Bgra => Bgra,
}

/// Convert a pixel slice into a newly allocated slice of another pixel type.
///
/// Both types must share a channel type; the pixel count is preserved.
pub fn convert_pixels<S, D>(src: &[S], options: &ConvertOptions) -> Result<Vec<D>, ConvertError>
where
    S: Pixel,
    D: Pixel<Channel = S::Channel>,
{
    let mut dst = vec![D::zeroed(); src.len()];
    convert_pixels_into(src, &mut dst, options)?;
    Ok(dst)
}

/// Convert `src` into the front of `dst`.
///
/// `dst` must hold at least `src.len()` pixels; the rest is left untouched.
pub fn convert_pixels_into<S, D>(
    src: &[S],
    dst: &mut [D],
    options: &ConvertOptions,
) -> Result<(), ConvertError>
where
    S: Pixel,
    D: Pixel<Channel = S::Channel>,
{
    let src_channels: &[S::Channel] = bytemuck::cast_slice(src);
    let dst_channels: &mut [D::Channel] = bytemuck::cast_slice_mut(dst);
    crate::convert_into(src_channels, S::FORMAT, dst_channels, D::FORMAT, options)
}

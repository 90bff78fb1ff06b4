//! Packed pixel buffer with its dimensions and layout.

use alloc::vec;
use alloc::vec::Vec;

use crate::{ChannelFormat, ConvertError, ConvertOptions, Element, ElementType, FormatRole};

/// A width × height image of packed `T` channels in `format` order.
///
/// `data.len()` is always `width × height × format.channel_count()`.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer<T: Element> {
    data: Vec<T>,
    width: usize,
    height: usize,
    format: ChannelFormat,
}

fn expected_len(
    width: usize,
    height: usize,
    format: ChannelFormat,
) -> Result<usize, ConvertError> {
    if !format.is_known() {
        return Err(ConvertError::UnknownFormat {
            role: FormatRole::Source,
        });
    }
    width
        .checked_mul(height)
        .and_then(|px| px.checked_mul(format.channel_count()))
        .ok_or(ConvertError::DimensionsOverflow)
}

impl<T: Element> PixelBuffer<T> {
    /// Wrap existing pixel data, checking its length against the shape.
    pub fn new(
        data: Vec<T>,
        width: usize,
        height: usize,
        format: ChannelFormat,
    ) -> Result<Self, ConvertError> {
        let expected = expected_len(width, height, format)?;
        if data.len() != expected {
            return Err(ConvertError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(PixelBuffer {
            data,
            width,
            height,
            format,
        })
    }

    /// An image with every channel of every pixel set to `value`.
    pub fn filled(
        width: usize,
        height: usize,
        format: ChannelFormat,
        value: T,
    ) -> Result<Self, ConvertError> {
        let len = expected_len(width, height, format)?;
        Ok(PixelBuffer {
            data: vec![value; len],
            width,
            height,
            format,
        })
    }

    /// An image filled with the element type's maximum (opaque white).
    pub fn opaque(
        width: usize,
        height: usize,
        format: ChannelFormat,
    ) -> Result<Self, ConvertError> {
        Self::filled(width, height, format, T::MAX)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn format(&self) -> ChannelFormat {
        self.format
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.format.channel_count()
    }

    /// width × height.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Number of channel values, `pixel_count() × channels()`.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn element_type(&self) -> ElementType {
        T::ELEMENT_TYPE
    }

    /// Size of the channel data in bytes.
    #[inline]
    pub fn size_bytes(&self) -> usize {
        self.len() * self.element_type().size_bytes()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Channels of the pixel at (`x`, `y`), or `None` outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[T]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let c = self.channels();
        let start = (y * self.width + x) * c;
        self.data.get(start..start + c)
    }

    /// A new image of the same size in `target` layout.
    pub fn convert(
        &self,
        target: ChannelFormat,
        options: &ConvertOptions,
    ) -> Result<PixelBuffer<T>, ConvertError> {
        let data = crate::convert(&self.data, self.format, target, options)?;
        log::trace!(
            "converted {}x{} {} -> {}",
            self.width,
            self.height,
            self.format,
            target
        );
        Ok(PixelBuffer {
            data,
            width: self.width,
            height: self.height,
            format: target,
        })
    }
}

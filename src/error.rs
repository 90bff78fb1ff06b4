//! Error type for conversion requests the engine refuses to run.

use core::fmt;

use crate::ChannelFormat;

/// Which side of a conversion a rejected format belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatRole {
    Source,
    Target,
}

impl fmt::Display for FormatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatRole::Source => f.write_str("source"),
            FormatRole::Target => f.write_str("target"),
        }
    }
}

/// A conversion was configured in a way the engine cannot honor.
///
/// Every variant is detectable by the caller before any pixel work starts.
/// Falling back to the scalar kernel is never reported here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConvertError {
    /// The source or target layout is [`ChannelFormat::Unknown`](crate::ChannelFormat::Unknown).
    UnknownFormat {
        /// Which side carried the unknown layout.
        role: FormatRole,
    },
    /// Source length is not a whole number of pixels.
    NotPixelAligned {
        /// Source length in elements.
        len: usize,
        /// Channels per source pixel.
        channels: usize,
    },
    /// Destination cannot hold every converted pixel.
    DestinationTooSmall {
        /// Elements needed.
        required: usize,
        /// Elements available.
        actual: usize,
    },
    /// Buffer length disagrees with the declared width, height and format.
    ShapeMismatch {
        /// width × height × channels.
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },
    /// A buffer's layout is not the one its pixel type requires.
    FormatMismatch {
        /// Layout of the pixel type.
        expected: ChannelFormat,
        /// Layout of the buffer.
        actual: ChannelFormat,
    },
    /// width × height × channels does not fit in `usize`.
    DimensionsOverflow,
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::UnknownFormat { role } => {
                write!(f, "unknown {role} channel format")
            }
            ConvertError::NotPixelAligned { len, channels } => {
                write!(
                    f,
                    "buffer of {len} elements is not a multiple of {channels} channels"
                )
            }
            ConvertError::DestinationTooSmall { required, actual } => {
                write!(
                    f,
                    "destination too small: need {required} elements, got {actual}"
                )
            }
            ConvertError::ShapeMismatch { expected, actual } => {
                write!(
                    f,
                    "buffer length mismatch: expected {expected} elements, got {actual}"
                )
            }
            ConvertError::FormatMismatch { expected, actual } => {
                write!(f, "layout mismatch: expected {expected}, got {actual}")
            }
            ConvertError::DimensionsOverflow => f.write_str("image dimensions overflow usize"),
        }
    }
}

impl core::error::Error for ConvertError {}

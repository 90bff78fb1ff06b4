//! Channel layouts and the storage order of their channels.

use core::fmt;

/// Semantic channel indices used by [`ChannelFormat::channel_order`].
pub const RED: u8 = 0;
pub const GREEN: u8 = 1;
pub const BLUE: u8 = 2;
pub const ALPHA: u8 = 3;

/// Named pixel channel layout.
///
/// Channel count and storage order are a pure function of the variant.
/// `Unknown` has no channels and is rejected by every conversion entry point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ChannelFormat {
    #[default]
    Unknown = 0,
    R = 1,
    Rg = 2,
    Rgb = 3,
    Rgba = 4,
    Bgr = 5,
    Bgra = 6,
}

impl ChannelFormat {
    /// Every layout with at least one channel.
    pub const ALL: [ChannelFormat; 6] = [
        ChannelFormat::R,
        ChannelFormat::Rg,
        ChannelFormat::Rgb,
        ChannelFormat::Rgba,
        ChannelFormat::Bgr,
        ChannelFormat::Bgra,
    ];

    /// Channels per pixel: 1–4, or 0 for `Unknown`.
    #[inline]
    pub const fn channel_count(self) -> usize {
        self.channel_order().len()
    }

    /// Semantic channel stored at each position of a pixel
    /// (`0`=R, `1`=G, `2`=B, `3`=A).
    #[inline]
    pub const fn channel_order(self) -> &'static [u8] {
        match self {
            ChannelFormat::Unknown => &[],
            ChannelFormat::R => &[RED],
            ChannelFormat::Rg => &[RED, GREEN],
            ChannelFormat::Rgb => &[RED, GREEN, BLUE],
            ChannelFormat::Rgba => &[RED, GREEN, BLUE, ALPHA],
            ChannelFormat::Bgr => &[BLUE, GREEN, RED],
            ChannelFormat::Bgra => &[BLUE, GREEN, RED, ALPHA],
        }
    }

    /// Default layout for a channel count, assuming R/G/B/A order.
    ///
    /// Anything outside 1–4 maps to `Unknown`.
    pub const fn from_channel_count(channels: usize) -> Self {
        match channels {
            1 => ChannelFormat::R,
            2 => ChannelFormat::Rg,
            3 => ChannelFormat::Rgb,
            4 => ChannelFormat::Rgba,
            _ => ChannelFormat::Unknown,
        }
    }

    #[inline]
    pub const fn is_known(self) -> bool {
        !matches!(self, ChannelFormat::Unknown)
    }

    #[inline]
    pub const fn has_alpha(self) -> bool {
        matches!(self, ChannelFormat::Rgba | ChannelFormat::Bgra)
    }

    pub const fn name(self) -> &'static str {
        match self {
            ChannelFormat::Unknown => "Unknown",
            ChannelFormat::R => "R",
            ChannelFormat::Rg => "RG",
            ChannelFormat::Rgb => "RGB",
            ChannelFormat::Rgba => "RGBA",
            ChannelFormat::Bgr => "BGR",
            ChannelFormat::Bgra => "BGRA",
        }
    }
}

impl fmt::Display for ChannelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

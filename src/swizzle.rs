//! Per-channel remapping between two channel layouts.

use core::fmt;

use crate::ChannelFormat;

/// Where one target channel takes its value from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwizzleSlot {
    /// Copy the channel at this position within a source pixel.
    Source(u8),
    /// The source has no such channel; write the fill value.
    Fill,
}

impl SwizzleSlot {
    #[inline]
    pub const fn source_index(self) -> Option<usize> {
        match self {
            SwizzleSlot::Source(i) => Some(i as usize),
            SwizzleSlot::Fill => None,
        }
    }
}

/// One [`SwizzleSlot`] per target channel, in target storage order.
///
/// Built from a (source, target) layout pair; holds no other state.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Swizzle {
    slots: [SwizzleSlot; 4],
    len: u8,
    source_channels: u8,
}

impl Swizzle {
    /// Map every target channel to its position in the source pixel, or to
    /// [`SwizzleSlot::Fill`] when the source lacks it.
    ///
    /// Total: an `Unknown` target yields an empty map, an `Unknown` source
    /// yields all-fill.
    pub fn resolve(source: ChannelFormat, target: ChannelFormat) -> Self {
        let src = source.channel_order();
        let dst = target.channel_order();
        let mut slots = [SwizzleSlot::Fill; 4];
        for (slot, want) in slots.iter_mut().zip(dst) {
            if let Some(pos) = src.iter().position(|c| c == want) {
                *slot = SwizzleSlot::Source(pos as u8);
            }
        }
        Swizzle {
            slots,
            len: dst.len() as u8,
            source_channels: src.len() as u8,
        }
    }

    /// Number of target channels.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of channels in a source pixel.
    #[inline]
    pub fn source_channels(&self) -> usize {
        self.source_channels as usize
    }

    #[inline]
    pub fn slots(&self) -> &[SwizzleSlot] {
        &self.slots[..self.len as usize]
    }

    #[inline]
    pub fn get(&self, target_channel: usize) -> Option<SwizzleSlot> {
        self.slots().get(target_channel).copied()
    }

    /// Any target channel needs the fill value.
    pub fn needs_fill(&self) -> bool {
        self.slots().contains(&SwizzleSlot::Fill)
    }

    /// Output pixels equal input pixels byte for byte.
    pub fn is_identity(&self) -> bool {
        self.len == self.source_channels
            && self
                .slots()
                .iter()
                .enumerate()
                .all(|(j, s)| *s == SwizzleSlot::Source(j as u8))
    }
}

impl fmt::Debug for Swizzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.slots()).finish()
    }
}

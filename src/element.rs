//! Per-channel storage types.

use core::fmt;

use crate::{KernelChoice, Swizzle};

/// Numeric representation of one channel value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementType {
    U8,
    U16,
    F32,
}

impl ElementType {
    #[inline]
    pub const fn size_bytes(self) -> usize {
        match self {
            ElementType::U8 => 1,
            ElementType::U16 => 2,
            ElementType::F32 => 4,
        }
    }

    /// Only 8-bit channels have a vectorized kernel.
    #[inline]
    pub const fn is_vectorizable(self) -> bool {
        matches!(self, ElementType::U8)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ElementType::U8 => "u8",
            ElementType::U16 => "u16",
            ElementType::F32 => "f32",
        })
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for f32 {}
}

/// A channel value the engine can convert: `u8`, `u16` or `f32`.
///
/// `MIN` and `MAX` are the values written for [`FillMode::Min`] and
/// [`FillMode::Max`](crate::FillMode).
pub trait Element: sealed::Sealed + bytemuck::Pod + PartialEq + fmt::Debug {
    const ELEMENT_TYPE: ElementType;
    const MIN: Self;
    const MAX: Self;

    /// Run the chosen kernel over packed pixels. Only `u8` has a vector path.
    #[doc(hidden)]
    fn swizzle_rows(
        _kernel: KernelChoice,
        swizzle: &Swizzle,
        fill: Self,
        src: &[Self],
        dst: &mut [Self],
    ) {
        crate::convert::swizzle_row_scalar(swizzle, fill, src, dst);
    }
}

impl Element for u8 {
    const ELEMENT_TYPE: ElementType = ElementType::U8;
    const MIN: Self = u8::MIN;
    const MAX: Self = u8::MAX;

    fn swizzle_rows(kernel: KernelChoice, swizzle: &Swizzle, fill: u8, src: &[u8], dst: &mut [u8]) {
        crate::convert::swizzle_u8(kernel, swizzle, fill, src, dst);
    }
}

impl Element for u16 {
    const ELEMENT_TYPE: ElementType = ElementType::U16;
    const MIN: Self = u16::MIN;
    const MAX: Self = u16::MAX;
}

impl Element for f32 {
    const ELEMENT_TYPE: ElementType = ElementType::F32;
    const MIN: Self = 0.0;
    const MAX: Self = 1.0;
}

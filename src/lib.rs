//! # chanswiz
//!
//! Convert raster pixel buffers between channel layouts: swap RGB for BGR,
//! expand R or RGB to RGBA, strip alpha from BGRA, and so on. Channels the
//! source does not carry are synthesized from a fill policy (minimum or
//! maximum of the element type).
//!
//! Two kernels produce identical output: a portable scalar kernel for `u8`,
//! `u16` and `f32` channels, and an AVX2 byte-shuffle kernel for `u8`
//! channels. The vectorized kernel is chosen at runtime when the processor
//! supports it; everything else falls back to scalar.
//!
//! ```
//! use chanswiz::{ChannelFormat, ConvertOptions, PixelBuffer};
//!
//! let img = PixelBuffer::new(vec![10u8, 20, 30, 40, 50, 60], 2, 1, ChannelFormat::Rgb)?;
//! let bgra = img.convert(ChannelFormat::Bgra, &ConvertOptions::new())?;
//! assert_eq!(bgra.as_slice(), &[30, 20, 10, 255, 60, 50, 40, 255]);
//! # Ok::<(), chanswiz::ConvertError>(())
//! ```
//!
//! ## Feature flags
//!
//! - **`rgb`**: Typed conversions between [`rgb`] crate pixel slices.
//! - **`imgref`**: Whole-image conversions of strided [`imgref`] images.
//!   Implies `rgb`.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod buffer;
mod convert;
mod dispatch;
mod element;
mod error;
mod fill;
mod layout;
mod options;
mod swizzle;

pub use buffer::PixelBuffer;
pub use convert::{convert, convert_into, convert_scalar, convert_vectorized_u8};
pub use dispatch::{Capabilities, ExecutionMode, KernelChoice, select_kernel};
pub use element::{Element, ElementType};
pub use error::{ConvertError, FormatRole};
pub use fill::{FillMode, fill_value};
pub use layout::{ALPHA, BLUE, ChannelFormat, GREEN, RED};
pub use options::ConvertOptions;
pub use swizzle::{Swizzle, SwizzleSlot};

#[cfg(feature = "rgb")]
pub mod typed;

#[cfg(feature = "imgref")]
pub mod img;

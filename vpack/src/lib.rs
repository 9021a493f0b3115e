#![doc = include_str!("../README.md")]

mod codec;
pub mod inspect;
mod packer;
pub mod pattern;

pub use codec::{CodecSettings, PixelCodec};
pub use vpack_common::error::{Error, Result};
pub use vpack_common::{chroma, colorimetry, format, packing, range, sample};

#[cfg(feature = "bgra")]
pub use vpack_bgra as bgra;
#[cfg(feature = "rgb10")]
pub use vpack_rgb10 as rgb10;
#[cfg(feature = "rgb12")]
pub use vpack_rgb12 as rgb12;
#[cfg(feature = "uyvy")]
pub use vpack_uyvy as uyvy;
#[cfg(feature = "v210")]
pub use vpack_v210 as v210;

use vpack_common::format::PixelFormat;

/// Bytes of one packed row
pub fn row_bytes(format: PixelFormat, width: u32) -> Result<usize> {
    Ok(format.row_bytes(width)?)
}

/// Bytes of a packed frame
///
/// ```
/// # use vpack::format::PixelFormat;
/// assert_eq!(vpack::frame_size(PixelFormat::Yuv10, 1920, 1080).unwrap(), 5_529_600);
/// ```
pub fn frame_size(format: PixelFormat, width: u32, height: u32) -> Result<usize> {
    Ok(format.frame_size(width, height)?)
}

pub mod prelude {
    pub use crate::pattern::TestPattern;
    pub use crate::{CodecSettings, PixelCodec};
    pub use vpack_common::prelude::*;
}

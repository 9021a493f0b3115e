use vpack_common::prelude::*;

/// Bit layout of one of the enabled wire formats
#[derive(Clone, Copy)]
pub(crate) enum RowPacker {
    Ycc(&'static dyn YccPacker),
    Rgb(&'static dyn RgbPacker),
}

impl RowPacker {
    pub(crate) fn for_format(format: PixelFormat) -> Result<Self> {
        match format {
            #[cfg(feature = "v210")]
            PixelFormat::Yuv10 => Ok(Self::Ycc(&vpack_v210::V210)),
            #[cfg(feature = "uyvy")]
            PixelFormat::Yuv8 => Ok(Self::Ycc(&vpack_uyvy::Uyvy)),
            #[cfg(feature = "rgb10")]
            PixelFormat::Rgb10 => Ok(Self::Rgb(&vpack_rgb10::R10l)),
            #[cfg(feature = "rgb10")]
            PixelFormat::Rgb10Be => Ok(Self::Rgb(&vpack_rgb10::R210)),
            #[cfg(feature = "rgb12")]
            PixelFormat::Rgb12 => Ok(Self::Rgb(&vpack_rgb12::R12l)),
            #[cfg(feature = "bgra")]
            PixelFormat::Bgra8 => Ok(Self::Rgb(&vpack_bgra::Bgra8)),
            #[allow(unreachable_patterns)]
            other => Err(Error::unsupported(format_args!(
                "Format '{other}' is not enabled"
            ))),
        }
    }
}

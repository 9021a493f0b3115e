//! Packed wire formats and their frame geometry

use crate::math::*;
use crate::range::BitDepth;
use crate::utils::{fourcc_str, maybe_convertible_enum, UnknownNameError};

maybe_convertible_enum!(
    #[repr(u32)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    /// Packed frame layout, identified by its FourCC
    ///
    /// ```
    /// # use vpack_common::format::*;
    /// assert_eq!(PixelFormat::try_from(0x7632_3130), Ok(PixelFormat::Yuv10));
    /// assert_eq!(PixelFormat::Rgb12.to_string(), "R12L");
    /// assert_eq!("2vuy".parse::<PixelFormat>(), Ok(PixelFormat::Yuv8));
    /// ```
    pub enum PixelFormat {
        /// `2vuy`, 8-bit 4:2:2 YCbCr
        Yuv8 = 0x3276_7579,
        /// `v210`, 10-bit 4:2:2 YCbCr
        Yuv10 = 0x7632_3130,
        /// `R10l`, 10-bit RGB little-endian
        Rgb10 = 0x5231_306C,
        /// `r210`, 10-bit RGB big-endian
        Rgb10Be = 0x7232_3130,
        /// `R12L`, 12-bit RGB little-endian
        Rgb12 = 0x5231_324C,
        /// `BGRA`, 8-bit RGB with opaque alpha
        Bgra8 = 0x4247_5241,
    }
);

impl PixelFormat {
    pub const ALL: [Self; 6] = [
        Self::Yuv8,
        Self::Yuv10,
        Self::Rgb10,
        Self::Rgb10Be,
        Self::Rgb12,
        Self::Bgra8,
    ];

    pub fn fourcc(self) -> u32 {
        self.into()
    }

    pub const fn descriptor(self) -> PackedFormatDescriptor {
        match self {
            Self::Yuv8 => PackedFormatDescriptor::UYVY,
            Self::Yuv10 => PackedFormatDescriptor::V210,
            Self::Rgb10 | Self::Rgb10Be => PackedFormatDescriptor::RGB10,
            Self::Rgb12 => PackedFormatDescriptor::R12L,
            Self::Bgra8 => PackedFormatDescriptor::BGRA,
        }
    }

    pub const fn bit_depth(self) -> BitDepth {
        match self {
            Self::Yuv8 | Self::Bgra8 => BitDepth::Eight,
            Self::Yuv10 | Self::Rgb10 | Self::Rgb10Be => BitDepth::Ten,
            Self::Rgb12 => BitDepth::Twelve,
        }
    }

    /// Whether the format carries 4:2:2 YCbCr instead of RGB
    pub const fn is_ycbcr(self) -> bool {
        matches!(self, Self::Yuv8 | Self::Yuv10)
    }

    pub fn row_bytes(self, width: u32) -> Result<usize, MathError> {
        self.descriptor().row_bytes(width)
    }

    pub fn frame_size(self, width: u32, height: u32) -> Result<usize, MathError> {
        self.descriptor().frame_size(width, height)
    }
}

impl std::fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&fourcc_str(self.fourcc()))
    }
}

impl std::str::FromStr for PixelFormat {
    type Err = UnknownNameError;

    /// Accepts the FourCC and the descriptive name, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "2vuy" | "uyvy" | "yuv8" => Ok(Self::Yuv8),
            "v210" | "yuv10" => Ok(Self::Yuv10),
            "r10l" | "rgb10" => Ok(Self::Rgb10),
            "r210" | "rgb10be" => Ok(Self::Rgb10Be),
            "r12l" | "rgb12" => Ok(Self::Rgb12),
            "bgra" | "bgra8" => Ok(Self::Bgra8),
            _ => Err(UnknownNameError(s.to_string())),
        }
    }
}

/// Group geometry of a packed format
///
/// Rows consist of whole groups; a partial trailing group is padded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PackedFormatDescriptor {
    pub pixels_per_group: u32,
    pub bytes_per_group: u32,
    pub components_per_pixel: u32,
}

impl PackedFormatDescriptor {
    pub const V210: Self = Self {
        pixels_per_group: 6,
        bytes_per_group: 16,
        components_per_pixel: 2,
    };
    pub const UYVY: Self = Self {
        pixels_per_group: 2,
        bytes_per_group: 4,
        components_per_pixel: 2,
    };
    pub const RGB10: Self = Self {
        pixels_per_group: 1,
        bytes_per_group: 4,
        components_per_pixel: 3,
    };
    pub const R12L: Self = Self {
        pixels_per_group: 8,
        bytes_per_group: 36,
        components_per_pixel: 3,
    };
    /// Alpha counts as fourth component
    pub const BGRA: Self = Self {
        pixels_per_group: 1,
        bytes_per_group: 4,
        components_per_pixel: 4,
    };

    pub fn groups(&self, width: u32) -> Result<usize, MathError> {
        div_ceil(width.usize()?, self.pixels_per_group.usize()?)
    }

    /// Bytes of one row, `ceil(width / pixels_per_group) * bytes_per_group`
    ///
    /// ```
    /// # use vpack_common::format::*;
    /// assert_eq!(PackedFormatDescriptor::V210.row_bytes(7).unwrap(), 32);
    /// assert_eq!(PackedFormatDescriptor::V210.row_bytes(1920).unwrap(), 5120);
    /// assert_eq!(PackedFormatDescriptor::R12L.row_bytes(1920).unwrap(), 8640);
    /// assert_eq!(PackedFormatDescriptor::UYVY.row_bytes(3).unwrap(), 8);
    /// ```
    pub fn row_bytes(&self, width: u32) -> Result<usize, MathError> {
        self.groups(width)?.safe_mul(self.bytes_per_group.usize()?)
    }

    pub fn frame_size(&self, width: u32, height: u32) -> Result<usize, MathError> {
        self.row_bytes(width)?.safe_mul(height.usize()?)
    }
}

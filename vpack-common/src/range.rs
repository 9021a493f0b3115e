//! Mapping between normalized values and integer code values

use crate::utils::{maybe_convertible_enum, UnknownNameError};

maybe_convertible_enum!(
    #[repr(u8)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    /// Signal range of integer code values
    ///
    /// Values match the video full range flag of ITU-T H.273.
    pub enum SignalRange {
        /// Studio levels with foot- and headroom, 16–235 at 8 bit
        Narrow = 0,
        /// Code values span the complete bit depth
        Full = 1,
    }
);

impl std::str::FromStr for SignalRange {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "narrow" | "legal" | "studio" | "limited" => Ok(Self::Narrow),
            "full" | "data" | "pc" => Ok(Self::Full),
            _ => Err(UnknownNameError(s.to_string())),
        }
    }
}

maybe_convertible_enum!(
    #[repr(u8)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
    /// Number of bits of an integer code value
    pub enum BitDepth {
        Eight = 8,
        Ten = 10,
        Twelve = 12,
        Sixteen = 16,
    }
);

impl BitDepth {
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Largest representable code, `2^n - 1`
    pub const fn max_code(self) -> u32 {
        (1 << self.bits()) - 1
    }

    /// Whether `code` fits into the bit depth
    pub fn holds(self, code: u16) -> bool {
        u32::from(code) <= self.max_code()
    }
}

/// Code values for black and white at a given bit depth and signal range
///
/// Narrow range codes are the 8-bit studio levels shifted to the bit depth.
///
/// ```
/// # use vpack_common::range::*;
/// assert_eq!(RangeSpec::NARROW_10.black_code(), 64);
/// assert_eq!(RangeSpec::NARROW_10.white_code(), 940);
/// assert_eq!(RangeSpec::NARROW_12.code_range(), 3504);
/// assert_eq!(RangeSpec::FULL_12.white_code(), 4095);
/// assert_eq!(RangeSpec::NARROW_16.black_code(), 4096);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeSpec {
    range: SignalRange,
    bit_depth: BitDepth,
    black_code: u32,
    white_code: u32,
}

impl RangeSpec {
    pub const NARROW_8: Self = Self::new(BitDepth::Eight, SignalRange::Narrow);
    pub const FULL_8: Self = Self::new(BitDepth::Eight, SignalRange::Full);
    pub const NARROW_10: Self = Self::new(BitDepth::Ten, SignalRange::Narrow);
    pub const FULL_10: Self = Self::new(BitDepth::Ten, SignalRange::Full);
    pub const NARROW_12: Self = Self::new(BitDepth::Twelve, SignalRange::Narrow);
    pub const FULL_12: Self = Self::new(BitDepth::Twelve, SignalRange::Full);
    pub const NARROW_16: Self = Self::new(BitDepth::Sixteen, SignalRange::Narrow);
    pub const FULL_16: Self = Self::new(BitDepth::Sixteen, SignalRange::Full);

    pub const fn new(bit_depth: BitDepth, range: SignalRange) -> Self {
        let shift = bit_depth.bits() - 8;
        match range {
            SignalRange::Narrow => Self {
                range,
                bit_depth,
                black_code: 16 << shift,
                white_code: 235 << shift,
            },
            SignalRange::Full => Self {
                range,
                bit_depth,
                black_code: 0,
                white_code: bit_depth.max_code(),
            },
        }
    }

    pub const fn range(&self) -> SignalRange {
        self.range
    }

    pub const fn bit_depth(&self) -> BitDepth {
        self.bit_depth
    }

    pub fn black_code(&self) -> u16 {
        code(self.black_code)
    }

    pub fn white_code(&self) -> u16 {
        code(self.white_code)
    }

    /// Number of code steps between black and white
    pub const fn code_range(&self) -> u32 {
        self.white_code - self.black_code
    }

    /// Code of zero color difference
    pub fn chroma_neutral(&self) -> u16 {
        code(1 << (self.bit_depth.bits() - 1))
    }

    /// Code steps covered by color difference values from -0.5 to 0.5
    pub const fn chroma_span(&self) -> u32 {
        match self.range {
            SignalRange::Narrow => 224 << (self.bit_depth.bits() - 8),
            SignalRange::Full => self.bit_depth.max_code(),
        }
    }

    /// Maps a code to the normalized value with black at 0 and white at 1
    ///
    /// Codes in foot- or headroom give values outside of `[0, 1]`.
    pub fn normalize(&self, code: u16) -> f64 {
        (f64::from(code) - f64::from(self.black_code)) / f64::from(self.code_range())
    }

    /// Maps a normalized value to the nearest code
    ///
    /// Rounds half away from zero and clamps to `[0, 2^n - 1]`.
    pub fn quantize(&self, value: f64) -> u16 {
        self.clamp_code(value * f64::from(self.code_range()) + f64::from(self.black_code))
    }

    /// Maps a chroma code to a color difference around 0
    pub fn normalize_chroma(&self, code: u16) -> f64 {
        (f64::from(code) - f64::from(self.chroma_neutral())) / f64::from(self.chroma_span())
    }

    /// Maps a color difference in `[-0.5, 0.5]` to the nearest chroma code
    pub fn quantize_chroma(&self, value: f64) -> u16 {
        self.clamp_code(value * f64::from(self.chroma_span()) + f64::from(self.chroma_neutral()))
    }

    /// Converts a code into the code of another range spec
    ///
    /// Codes of the same signal range are rescaled by shifting bits, all other
    /// combinations go through the normalized value.
    ///
    /// ```
    /// # use vpack_common::range::*;
    /// assert_eq!(RangeSpec::NARROW_16.rescale(60160, &RangeSpec::NARROW_10), 940);
    /// assert_eq!(RangeSpec::FULL_10.rescale(1023, &RangeSpec::FULL_16), 65535);
    /// assert_eq!(RangeSpec::NARROW_16.rescale(60160, &RangeSpec::FULL_10), 1023);
    /// ```
    pub fn rescale(&self, code: u16, target: &RangeSpec) -> u16 {
        if self.range == target.range {
            self.shift_code(code, target)
        } else {
            target.quantize(self.normalize(code))
        }
    }

    fn shift_code(&self, value: u16, target: &RangeSpec) -> u16 {
        let value = u32::from(value);
        let from = self.bit_depth.bits();
        let to = target.bit_depth.bits();

        if to <= from {
            return code(value >> (from - to));
        }

        let widened = value << (to - from);
        code(match self.range {
            // Black and white of narrow range are exact multiples
            SignalRange::Narrow => widened,
            // Repeat the top bits so that the largest code stays the largest
            SignalRange::Full => widened | (value >> (2 * from).saturating_sub(to)),
        })
    }

    #[allow(clippy::cast_possible_truncation)]
    fn clamp_code(&self, value: f64) -> u16 {
        let max = f64::from(self.bit_depth.max_code());
        // Rounded and clamped to at most 16 bit
        value.round().clamp(0., max) as u16
    }
}

/// Code values are at most 16 bit
fn code(value: u32) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

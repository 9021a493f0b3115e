//! Application-facing RGB samples and their normalization

use crate::error::{Error, Result};
use crate::math::*;
use crate::range::{BitDepth, RangeSpec, SignalRange};
use crate::utils::UnknownNameError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SampleType {
    U8,
    U16,
    F32,
}

impl SampleType {
    /// Size of one sample in bytes
    pub const fn size(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
            Self::F32 => 4,
        }
    }
}

impl std::str::FromStr for SampleType {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "u8" | "uint8" => Ok(Self::U8),
            "u16" | "uint16" => Ok(Self::U16),
            "f32" | "float" | "float32" => Ok(Self::F32),
            _ => Err(UnknownNameError(s.to_string())),
        }
    }
}

/// Sample value of one RGB channel
///
/// Integer samples are codes of their own bit depth in the given signal
/// range. Float samples are normalized values and are only clamped, the
/// signal range never applies to them.
pub trait Sample: Copy + Default + Send + Sync + 'static {
    const TYPE: SampleType;

    /// Code mapping of the sample type, `None` for float samples
    fn range_spec(range: SignalRange) -> Option<RangeSpec>;

    /// Normalized value clamped to `[0, 1]`
    fn to_normalized(self, range: SignalRange) -> f64;

    /// Sample for a normalized value, rounded and clamped
    fn from_normalized(value: f64, range: SignalRange) -> Self;

    /// Code of `target` for this sample
    ///
    /// Integer samples in the same signal range as `target` are converted by
    /// shifting bits.
    fn to_code(self, range: SignalRange, target: &RangeSpec) -> u16;

    /// Sample for a code of `source`
    fn from_code(code: u16, source: &RangeSpec, range: SignalRange) -> Self;
}

macro_rules! impl_integer_sample {
    ($t:ty, $sample_type:ident, $bit_depth:ident) => {
        impl Sample for $t {
            const TYPE: SampleType = SampleType::$sample_type;

            fn range_spec(range: SignalRange) -> Option<RangeSpec> {
                Some(RangeSpec::new(BitDepth::$bit_depth, range))
            }

            fn to_normalized(self, range: SignalRange) -> f64 {
                RangeSpec::new(BitDepth::$bit_depth, range)
                    .normalize(u16::from(self))
                    .clamp(0., 1.)
            }

            fn from_normalized(value: f64, range: SignalRange) -> Self {
                let code = RangeSpec::new(BitDepth::$bit_depth, range).quantize(value);
                <$t>::try_from(code).unwrap_or(<$t>::MAX)
            }

            fn to_code(self, range: SignalRange, target: &RangeSpec) -> u16 {
                RangeSpec::new(BitDepth::$bit_depth, range).rescale(u16::from(self), target)
            }

            fn from_code(code: u16, source: &RangeSpec, range: SignalRange) -> Self {
                let code = source.rescale(code, &RangeSpec::new(BitDepth::$bit_depth, range));
                <$t>::try_from(code).unwrap_or(<$t>::MAX)
            }
        }
    };
}

impl_integer_sample!(u8, U8, Eight);
impl_integer_sample!(u16, U16, Sixteen);

impl Sample for f32 {
    const TYPE: SampleType = SampleType::F32;

    fn range_spec(_: SignalRange) -> Option<RangeSpec> {
        None
    }

    fn to_normalized(self, _: SignalRange) -> f64 {
        let value = f64::from(self);
        if value.is_nan() {
            0.
        } else {
            value.clamp(0., 1.)
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_normalized(value: f64, _: SignalRange) -> Self {
        if value.is_nan() {
            0.
        } else {
            value.clamp(0., 1.) as f32
        }
    }

    fn to_code(self, range: SignalRange, target: &RangeSpec) -> u16 {
        target.quantize(self.to_normalized(range))
    }

    fn from_code(code: u16, source: &RangeSpec, range: SignalRange) -> Self {
        Self::from_normalized(source.normalize(code), range)
    }
}

/// Random access to the RGB channels of a frame
pub trait SampleSource: Sync {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Channel 0, 1, 2 for R, G, B normalized to `[0, 1]`
    fn read_normalized(&self, x: usize, y: usize, channel: usize) -> f64;

    /// Channel value as code of `target`
    fn read_code(&self, x: usize, y: usize, channel: usize, target: &RangeSpec) -> u16;

    /// Whether [`Self::read_code`] converts by shifting bits for `target`
    fn is_bit_exact(&self, target: &RangeSpec) -> bool;
}

/// Row-major, pixel-interleaved RGB samples with checked shape
///
/// ```
/// # use vpack_common::prelude::*;
/// let samples = vec![0_u8; 2 * 2 * 3];
/// assert!(RgbView::new(&samples, 2, 2, SignalRange::Full).is_ok());
/// assert!(matches!(
///     RgbView::new(&samples, 3, 2, SignalRange::Full),
///     Err(Error::ShapeMismatch { expected: 18, actual: 12, .. })
/// ));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RgbView<'a, T> {
    samples: &'a [T],
    width: u32,
    height: u32,
    range: SignalRange,
}

impl<'a, T: Sample> RgbView<'a, T> {
    pub const CHANNELS: usize = 3;

    pub fn new(samples: &'a [T], width: u32, height: u32, range: SignalRange) -> Result<Self> {
        let expected = width
            .usize()?
            .safe_mul(height.usize()?)?
            .safe_mul(Self::CHANNELS)?;

        if width == 0 || height == 0 || samples.len() != expected {
            return Err(Error::ShapeMismatch {
                width,
                height,
                expected,
                actual: samples.len(),
            });
        }

        Ok(Self {
            samples,
            width,
            height,
            range,
        })
    }

    pub fn range(&self) -> SignalRange {
        self.range
    }

    pub fn pixel(&self, x: usize, y: usize) -> [T; 3] {
        let i = self.index(x, y, 0);
        [self.samples[i], self.samples[i + 1], self.samples[i + 2]]
    }

    fn index(&self, x: usize, y: usize, channel: usize) -> usize {
        (y * self.width as usize + x) * Self::CHANNELS + channel
    }
}

impl<T: Sample> SampleSource for RgbView<'_, T> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn read_normalized(&self, x: usize, y: usize, channel: usize) -> f64 {
        self.samples[self.index(x, y, channel)].to_normalized(self.range)
    }

    fn read_code(&self, x: usize, y: usize, channel: usize, target: &RangeSpec) -> u16 {
        self.samples[self.index(x, y, channel)].to_code(self.range, target)
    }

    fn is_bit_exact(&self, target: &RangeSpec) -> bool {
        T::range_spec(self.range).is_some_and(|spec| spec.range() == target.range())
    }
}

#![doc = include_str!("../README.md")]

pub mod chroma;
pub mod colorimetry;
pub mod error;
pub mod format;
pub mod frame;
pub mod math;
pub mod packing;
pub mod range;
pub mod sample;
pub mod utils;

pub mod prelude {
    pub use crate::chroma::{subsample_422, Chroma};
    pub use crate::colorimetry::{ColorMatrix, Matrix};
    pub use crate::error::{Error, Result};
    pub use crate::format::{PackedFormatDescriptor, PixelFormat};
    pub use crate::math::{SafeMul, ToUsize};
    pub use crate::packing::{
        ChromaCode, CodeFrame, CodePlanes, RgbCode, RgbPacker, YccPacker, YccPadding,
    };
    pub use crate::range::{BitDepth, RangeSpec, SignalRange};
    pub use crate::sample::{RgbView, Sample, SampleSource, SampleType};
}

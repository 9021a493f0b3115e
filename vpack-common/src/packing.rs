//! Integer code planes and the row packer interfaces of the wire formats

use crate::error::{Error, Result};
use crate::format::PixelFormat;
use crate::math::*;
use crate::range::{BitDepth, RangeSpec};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChromaCode {
    pub cb: u16,
    pub cr: u16,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RgbCode {
    pub r: u16,
    pub g: u16,
    pub b: u16,
}

impl RgbCode {
    pub const fn new(r: u16, g: u16, b: u16) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(code: u16) -> Self {
        Self::new(code, code, code)
    }

    pub const fn to_array(self) -> [u16; 3] {
        [self.r, self.g, self.b]
    }
}

/// Codes written into lanes of a 4:2:2 row that have no pixel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YccPadding {
    pub luma: u16,
    pub chroma: ChromaCode,
}

impl YccPadding {
    /// Black luma and neutral chroma of `spec`
    pub fn for_range(spec: &RangeSpec) -> Self {
        let neutral = spec.chroma_neutral();
        Self {
            luma: spec.black_code(),
            chroma: ChromaCode {
                cb: neutral,
                cr: neutral,
            },
        }
    }
}

/// Bit layout of a 4:2:2 YCbCr wire format
///
/// Rows hold `width` luma codes and `ceil(width / 2)` chroma pairs. Lanes of
/// a partial trailing group without pixel data take the padding codes.
pub trait YccPacker: Send + Sync {
    fn format(&self) -> PixelFormat;

    /// Writes one packed row
    ///
    /// `row` has exactly the row stride of the format.
    fn pack_row(&self, luma: &[u16], chroma: &[ChromaCode], padding: YccPadding, row: &mut [u8]);

    /// Appends every lane of a packed row, padding included
    fn unpack_row(&self, row: &[u8], luma: &mut Vec<u16>, chroma: &mut Vec<ChromaCode>);
}

/// Bit layout of an RGB wire format
pub trait RgbPacker: Send + Sync {
    fn format(&self) -> PixelFormat;

    fn pack_row(&self, pixels: &[RgbCode], padding: RgbCode, row: &mut [u8]);

    /// Appends every pixel of a packed row, padding included
    fn unpack_row(&self, row: &[u8], pixels: &mut Vec<RgbCode>);
}

/// Integer codes of a whole frame, already at the bit depth of their format
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodePlanes {
    /// 4:2:2 YCbCr with `ceil(width / 2)` chroma pairs per row
    YCbCr422 {
        luma: Vec<u16>,
        chroma: Vec<ChromaCode>,
    },
    Rgb(Vec<RgbCode>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeFrame {
    width: u32,
    height: u32,
    planes: CodePlanes,
}

impl CodeFrame {
    /// Checks that the planes match the frame dimensions
    pub fn new(width: u32, height: u32, planes: CodePlanes) -> Result<Self> {
        let pixels = width.usize()?.safe_mul(height.usize()?)?;
        let chroma_pixels = div_ceil(width.usize()?, 2)?.safe_mul(height.usize()?)?;

        let mismatch = |expected, actual| Error::ShapeMismatch {
            width,
            height,
            expected,
            actual,
        };

        if pixels == 0 {
            return Err(mismatch(0, 0));
        }

        match &planes {
            CodePlanes::YCbCr422 { luma, chroma } => {
                if luma.len() != pixels {
                    return Err(mismatch(pixels, luma.len()));
                }
                if chroma.len() != chroma_pixels {
                    return Err(mismatch(chroma_pixels, chroma.len()));
                }
            }
            CodePlanes::Rgb(pixels_rgb) => {
                if pixels_rgb.len() != pixels {
                    return Err(mismatch(pixels, pixels_rgb.len()));
                }
            }
        }

        Ok(Self {
            width,
            height,
            planes,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn planes(&self) -> &CodePlanes {
        &self.planes
    }

    pub fn into_planes(self) -> CodePlanes {
        self.planes
    }

    pub fn is_ycbcr(&self) -> bool {
        matches!(self.planes, CodePlanes::YCbCr422 { .. })
    }

    /// Fails with [`Error::UnsupportedCombination`] for the first code that
    /// does not fit into `bit_depth`
    pub fn check_bit_depth(&self, bit_depth: BitDepth) -> Result<()> {
        let out_of_range = |plane: &str, code: u16| -> Result<()> {
            Err(Error::unsupported(format_args!(
                "{plane} code {code} exceeds {} bit",
                bit_depth.bits()
            )))
        };

        match &self.planes {
            CodePlanes::YCbCr422 { luma, chroma } => {
                if let Some(y) = luma.iter().find(|y| !bit_depth.holds(**y)) {
                    return out_of_range("Luma", *y);
                }
                let mut chroma_codes = chroma.iter().flat_map(|c| [c.cb, c.cr]);
                if let Some(c) = chroma_codes.find(|c| !bit_depth.holds(*c)) {
                    return out_of_range("Chroma", c);
                }
            }
            CodePlanes::Rgb(pixels) => {
                let mut codes = pixels.iter().flat_map(|px| px.to_array());
                if let Some(c) = codes.find(|c| !bit_depth.holds(*c)) {
                    return out_of_range("RGB", c);
                }
            }
        }

        Ok(())
    }

    /// Chroma pair for every pixel, each 4:2:2 pair repeated for both of its
    /// pixels
    ///
    /// Returns `None` for RGB frames.
    pub fn chroma_444(&self) -> Option<Vec<ChromaCode>> {
        let CodePlanes::YCbCr422 { chroma, .. } = &self.planes else {
            return None;
        };

        let width = self.width as usize;
        let pairs_per_row = width.div_ceil(2);

        let mut full = Vec::with_capacity(width * self.height as usize);
        for row in chroma.chunks_exact(pairs_per_row) {
            full.extend((0..width).map(|x| row[x / 2]));
        }

        Some(full)
    }
}

/// Lower 16 bits of a word
///
/// Used to take already masked fields out of packed words.
pub fn low_bits(word: u32) -> u16 {
    let [a, b, _, _] = word.to_le_bytes();
    u16::from_le_bytes([a, b])
}

/// Iterates the little-endian 32-bit words of a row
pub fn words_le(row: &[u8]) -> impl Iterator<Item = u32> + '_ {
    row.chunks_exact(4)
        .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

/// Iterates the big-endian 32-bit words of a row
pub fn words_be(row: &[u8]) -> impl Iterator<Item = u32> + '_ {
    row.chunks_exact(4)
        .map(|b| u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
}

/// Stores words little-endian starting at the beginning of `bytes`
pub fn write_words_le(bytes: &mut [u8], words: &[u32]) {
    for (chunk, word) in bytes.chunks_exact_mut(4).zip(words) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
}

/// Stores words big-endian starting at the beginning of `bytes`
pub fn write_words_be(bytes: &mut [u8], words: &[u32]) {
    for (chunk, word) in bytes.chunks_exact_mut(4).zip(words) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_checks() {
        let planes = CodePlanes::YCbCr422 {
            luma: vec![64; 7 * 2],
            chroma: vec![ChromaCode::default(); 4 * 2],
        };
        assert!(CodeFrame::new(7, 2, planes.clone()).is_ok());
        assert!(matches!(
            CodeFrame::new(8, 2, planes),
            Err(Error::ShapeMismatch {
                expected: 16,
                actual: 14,
                ..
            })
        ));

        let planes = CodePlanes::Rgb(vec![RgbCode::default(); 3]);
        assert!(CodeFrame::new(0, 3, planes).is_err());
    }

    #[test]
    fn chroma_444_repeats_pairs() {
        let pair = |v| ChromaCode { cb: v, cr: v + 1 };
        let frame = CodeFrame::new(
            3,
            2,
            CodePlanes::YCbCr422 {
                luma: vec![0; 6],
                chroma: vec![pair(10), pair(20), pair(30), pair(40)],
            },
        )
        .unwrap();

        assert_eq!(
            frame.chroma_444().unwrap(),
            vec![pair(10), pair(10), pair(20), pair(30), pair(30), pair(40)]
        );

        let rgb = CodeFrame::new(1, 1, CodePlanes::Rgb(vec![RgbCode::gray(4)])).unwrap();
        assert_eq!(rgb.chroma_444(), None);
    }

    #[test]
    fn codes_beyond_bit_depth() {
        let frame = CodeFrame::new(
            2,
            1,
            CodePlanes::YCbCr422 {
                luma: vec![64, 1023],
                chroma: vec![ChromaCode { cb: 512, cr: 1023 }],
            },
        )
        .unwrap();
        assert!(frame.check_bit_depth(BitDepth::Ten).is_ok());
        assert!(matches!(
            frame.check_bit_depth(BitDepth::Eight),
            Err(Error::UnsupportedCombination(msg)) if msg == "Luma code 1023 exceeds 8 bit"
        ));

        let frame = CodeFrame::new(1, 1, CodePlanes::Rgb(vec![RgbCode::new(0, 4096, 0)])).unwrap();
        assert!(frame.check_bit_depth(BitDepth::Twelve).is_err());
        assert!(frame.check_bit_depth(BitDepth::Sixteen).is_ok());
    }

    #[test]
    fn low_bits_of_words() {
        assert_eq!(low_bits(0x1234_5678), 0x5678);
        assert_eq!(low_bits(0x3FF), 1023);
    }

    #[test]
    fn word_order() {
        let mut bytes = [0; 8];
        write_words_le(&mut bytes, &[0x0403_0201, 0x0807_0605]);
        assert_eq!(bytes, [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(words_be(&bytes).collect::<Vec<_>>(), [0x0102_0304, 0x0506_0708]);
        write_words_be(&mut bytes, &[0x0a0b_0c0d]);
        assert_eq!(words_le(&bytes).next(), Some(0x0d0c_0b0a));
    }
}

use vpack_common::frame::for_each_row;
use vpack_common::prelude::*;

use crate::packer::RowPacker;

/// Parameters of a conversion
///
/// `input_range` is the signal range of the data passed into a call,
/// `output_range` that of the data it returns. For encoding this means the
/// RGB samples are in `input_range` and the packed codes in `output_range`,
/// for decoding it is the other way around. Float samples ignore the range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodecSettings {
    pub format: PixelFormat,
    pub matrix: Matrix,
    pub input_range: SignalRange,
    pub output_range: SignalRange,
}

impl CodecSettings {
    /// Rec.709 from full range samples to narrow range video
    pub fn new(format: PixelFormat) -> Self {
        Self {
            format,
            matrix: Matrix::Rec709,
            input_range: SignalRange::Full,
            output_range: SignalRange::Narrow,
        }
    }

    pub fn matrix(mut self, matrix: Matrix) -> Self {
        self.matrix = matrix;
        self
    }

    pub fn input_range(mut self, range: SignalRange) -> Self {
        self.input_range = range;
        self
    }

    pub fn output_range(mut self, range: SignalRange) -> Self {
        self.output_range = range;
        self
    }

    /// Settings for decoding frames produced with these settings
    pub fn reversed(self) -> Self {
        Self {
            input_range: self.output_range,
            output_range: self.input_range,
            ..self
        }
    }
}

/// Whole-frame conversion between RGB samples and a packed format
///
/// A codec holds only its settings. Every call is independent and can run
/// on any thread.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelCodec {
    settings: CodecSettings,
}

static_assertions::assert_impl_all!(PixelCodec: Send, Sync);

impl PixelCodec {
    pub fn new(settings: CodecSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &CodecSettings {
        &self.settings
    }

    pub fn format(&self) -> PixelFormat {
        self.settings.format
    }

    /// Codec for the opposite direction, with input and output range swapped
    pub fn reversed(&self) -> Self {
        Self::new(self.settings.reversed())
    }

    /// Packs row-major, pixel-interleaved RGB samples
    pub fn encode<T: Sample>(&self, samples: &[T], width: u32, height: u32) -> Result<Vec<u8>> {
        let view = RgbView::new(samples, width, height, self.settings.input_range)?;
        self.encode_source(&view)
    }

    /// Packs RGB samples into a caller-provided buffer
    ///
    /// The buffer needs at least the frame size of the format. Bytes after
    /// the frame are left untouched.
    pub fn encode_into<T: Sample>(
        &self,
        samples: &[T],
        width: u32,
        height: u32,
        packed: &mut [u8],
    ) -> Result<()> {
        let view = RgbView::new(samples, width, height, self.settings.input_range)?;
        self.encode_source_into(&view, packed)
    }

    pub fn encode_source<S: SampleSource>(&self, source: &S) -> Result<Vec<u8>> {
        let frame_size = self
            .settings
            .format
            .frame_size(source.width(), source.height())?;

        let mut packed = vec![0; frame_size];
        self.encode_source_into(source, &mut packed)?;
        Ok(packed)
    }

    pub fn encode_source_into<S: SampleSource>(&self, source: &S, packed: &mut [u8]) -> Result<()> {
        let format = self.settings.format;
        let (width, height) = (source.width(), source.height());

        let packer = RowPacker::for_format(format)?;
        let geometry = Geometry::new(format, width, height)?;
        let packed = geometry.frame_mut(packed)?;
        let target = RangeSpec::new(format.bit_depth(), self.settings.output_range);

        tracing::debug!(
            %format,
            width,
            height,
            matrix = ?self.settings.matrix,
            input_range = ?self.settings.input_range,
            output_range = ?self.settings.output_range,
            "Encoding frame"
        );

        match packer {
            RowPacker::Rgb(packer) => {
                if source.is_bit_exact(&target) {
                    tracing::trace!("Samples are rescaled by bit shifts");
                }

                let padding = RgbCode::gray(target.black_code());
                for_each_row(packed, geometry.row_bytes, |y, row| {
                    let pixels: Vec<RgbCode> = (0..geometry.width)
                        .map(|x| {
                            let [r, g, b] =
                                std::array::from_fn(|c| source.read_code(x, y, c, &target));
                            RgbCode::new(r, g, b)
                        })
                        .collect();

                    packer.pack_row(&pixels, padding, row);
                });
            }
            RowPacker::Ycc(packer) => {
                let matrix = self.settings.matrix.coefficients();
                let padding = YccPadding::for_range(&target);

                for_each_row(packed, geometry.row_bytes, |y, row| {
                    let mut luma = Vec::with_capacity(geometry.width);
                    let mut chroma = Vec::with_capacity(geometry.width);

                    for x in 0..geometry.width {
                        let rgb = std::array::from_fn(|c| source.read_normalized(x, y, c));
                        let [l, cb, cr] = matrix.forward(rgb);
                        luma.push(target.quantize(l));
                        chroma.push(Chroma::new(cb, cr));
                    }

                    let chroma: Vec<ChromaCode> = subsample_422(&chroma)
                        .into_iter()
                        .map(|c| ChromaCode {
                            cb: target.quantize_chroma(c.cb),
                            cr: target.quantize_chroma(c.cr),
                        })
                        .collect();

                    packer.pack_row(&luma, &chroma, padding, row);
                });
            }
        }

        Ok(())
    }

    /// Unpacks a frame into row-major, pixel-interleaved RGB samples
    ///
    /// YCbCr is converted with the inverse matrix and clamped to `[0, 1]`
    /// before it is stored as sample.
    pub fn decode<T: Sample>(&self, packed: &[u8], width: u32, height: u32) -> Result<Vec<T>> {
        let format = self.settings.format;

        let packer = RowPacker::for_format(format)?;
        let geometry = Geometry::new(format, width, height)?;
        let packed = geometry.frame(packed)?;
        let source = RangeSpec::new(format.bit_depth(), self.settings.input_range);
        let range = self.settings.output_range;

        let sample_row = geometry.width.safe_mul(RgbView::<T>::CHANNELS)?;
        let mut samples = vec![T::default(); sample_row.safe_mul(geometry.height)?];

        tracing::debug!(
            %format,
            width,
            height,
            matrix = ?self.settings.matrix,
            input_range = ?self.settings.input_range,
            output_range = ?range,
            sample_type = ?T::TYPE,
            "Decoding frame"
        );

        match packer {
            RowPacker::Rgb(packer) => {
                if T::range_spec(range).is_some_and(|spec| spec.range() == source.range()) {
                    tracing::trace!("Codes are rescaled by bit shifts");
                }

                for_each_row(&mut samples, sample_row, |y, out| {
                    let mut pixels = Vec::with_capacity(geometry.width);
                    packer.unpack_row(geometry.row(packed, y), &mut pixels);

                    for (dst, px) in out.chunks_exact_mut(3).zip(&pixels) {
                        for (d, code) in dst.iter_mut().zip(px.to_array()) {
                            *d = T::from_code(code, &source, range);
                        }
                    }
                });
            }
            RowPacker::Ycc(packer) => {
                let matrix = self.settings.matrix.coefficients();

                for_each_row(&mut samples, sample_row, |y, out| {
                    let mut luma = Vec::with_capacity(geometry.width);
                    let mut chroma = Vec::with_capacity(geometry.width);
                    packer.unpack_row(geometry.row(packed, y), &mut luma, &mut chroma);

                    for (x, (dst, l)) in out.chunks_exact_mut(3).zip(&luma).enumerate() {
                        let c = chroma.get(x / 2).copied().unwrap_or_default();
                        let rgb = matrix.inverse([
                            source.normalize(*l),
                            source.normalize_chroma(c.cb),
                            source.normalize_chroma(c.cr),
                        ]);

                        for (d, v) in dst.iter_mut().zip(rgb) {
                            *d = T::from_normalized(v.clamp(0., 1.), range);
                        }
                    }
                });
            }
        }

        Ok(samples)
    }

    /// Packs integer codes that are already at the bit depth of the format
    ///
    /// Padding uses black and neutral codes of `output_range`. Codes that
    /// do not fit into the bit depth of the format are rejected.
    pub fn pack(&self, codes: &CodeFrame) -> Result<Vec<u8>> {
        let format = self.settings.format;

        let packer = RowPacker::for_format(format)?;
        let geometry = Geometry::new(format, codes.width(), codes.height())?;
        let target = RangeSpec::new(format.bit_depth(), self.settings.output_range);
        codes.check_bit_depth(format.bit_depth())?;

        let mut packed = vec![0; geometry.frame_size];

        match (packer, codes.planes()) {
            (RowPacker::Rgb(packer), CodePlanes::Rgb(pixels)) => {
                let padding = RgbCode::gray(target.black_code());
                for_each_row(&mut packed, geometry.row_bytes, |y, row| {
                    let pixels = &pixels[y * geometry.width..][..geometry.width];
                    packer.pack_row(pixels, padding, row);
                });
            }
            (RowPacker::Ycc(packer), CodePlanes::YCbCr422 { luma, chroma }) => {
                let padding = YccPadding::for_range(&target);
                let pairs = geometry.width.div_ceil(2);
                for_each_row(&mut packed, geometry.row_bytes, |y, row| {
                    packer.pack_row(
                        &luma[y * geometry.width..][..geometry.width],
                        &chroma[y * pairs..][..pairs],
                        padding,
                        row,
                    );
                });
            }
            _ => {
                return Err(Error::unsupported(format_args!(
                    "Code planes do not match format '{format}'"
                )));
            }
        }

        Ok(packed)
    }

    /// Extracts the integer codes of a packed frame without any conversion
    pub fn unpack(&self, packed: &[u8], width: u32, height: u32) -> Result<CodeFrame> {
        let format = self.settings.format;

        let packer = RowPacker::for_format(format)?;
        let geometry = Geometry::new(format, width, height)?;
        let packed = geometry.frame(packed)?;

        let planes = match packer {
            RowPacker::Rgb(packer) => {
                let mut pixels = Vec::with_capacity(geometry.width * geometry.height);
                let mut row_pixels = Vec::with_capacity(geometry.width);
                for row in packed.chunks_exact(geometry.row_bytes) {
                    row_pixels.clear();
                    packer.unpack_row(row, &mut row_pixels);
                    pixels.extend_from_slice(&row_pixels[..geometry.width]);
                }
                CodePlanes::Rgb(pixels)
            }
            RowPacker::Ycc(packer) => {
                let pairs = geometry.width.div_ceil(2);
                let mut luma = Vec::with_capacity(geometry.width * geometry.height);
                let mut chroma = Vec::with_capacity(pairs * geometry.height);
                let (mut row_luma, mut row_chroma) = (Vec::new(), Vec::new());
                for row in packed.chunks_exact(geometry.row_bytes) {
                    row_luma.clear();
                    row_chroma.clear();
                    packer.unpack_row(row, &mut row_luma, &mut row_chroma);
                    luma.extend_from_slice(&row_luma[..geometry.width]);
                    chroma.extend_from_slice(&row_chroma[..pairs]);
                }
                CodePlanes::YCbCr422 { luma, chroma }
            }
        };

        CodeFrame::new(width, height, planes)
    }
}

/// Validated dimensions of a packed frame
#[derive(Debug, Clone, Copy)]
pub(crate) struct Geometry {
    pub width: usize,
    pub height: usize,
    pub row_bytes: usize,
    pub frame_size: usize,
}

impl Geometry {
    pub fn new(format: PixelFormat, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::ShapeMismatch {
                width,
                height,
                expected: 0,
                actual: 0,
            });
        }

        Ok(Self {
            width: width.usize()?,
            height: height.usize()?,
            row_bytes: format.row_bytes(width)?,
            frame_size: format.frame_size(width, height)?,
        })
    }

    /// The frame part of a packed buffer
    pub fn frame<'a>(&self, packed: &'a [u8]) -> Result<&'a [u8]> {
        packed
            .get(..self.frame_size)
            .ok_or(Error::BufferTooSmall {
                expected: self.frame_size,
                actual: packed.len(),
            })
    }

    pub fn frame_mut<'a>(&self, packed: &'a mut [u8]) -> Result<&'a mut [u8]> {
        let actual = packed.len();
        packed
            .get_mut(..self.frame_size)
            .ok_or(Error::BufferTooSmall {
                expected: self.frame_size,
                actual,
            })
    }

    /// Row `y` of a buffer returned by [`Self::frame`]
    pub fn row<'a>(&self, frame: &'a [u8], y: usize) -> &'a [u8] {
        &frame[y * self.row_bytes..][..self.row_bytes]
    }
}

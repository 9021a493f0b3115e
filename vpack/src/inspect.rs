//! Reading single pixels of packed frames

use vpack_common::prelude::*;

use crate::codec::Geometry;
use crate::packer::RowPacker;

/// Component codes of the pixel at `x`, `y`
///
/// YCbCr formats return `[Cb, Y, Cr]` with the chroma pair the pixel shares,
/// RGB formats return `[R, G, B]`. Only the row holding the pixel is
/// unpacked.
///
/// ```
/// # use vpack::prelude::*;
/// let codec = PixelCodec::new(CodecSettings::new(PixelFormat::Rgb12));
/// let packed = codec.encode(&[1.0_f32, 0.0, 0.0], 1, 1).unwrap();
/// let px = vpack::inspect::read_pixel(&packed, 1, 1, PixelFormat::Rgb12, 0, 0).unwrap();
/// assert_eq!(px, [3760, 256, 256]);
/// ```
pub fn read_pixel(
    packed: &[u8],
    width: u32,
    height: u32,
    format: PixelFormat,
    x: u32,
    y: u32,
) -> Result<[u16; 3]> {
    let packer = RowPacker::for_format(format)?;
    let geometry = Geometry::new(format, width, height)?;
    let frame = geometry.frame(packed)?;

    if x >= width || y >= height {
        return Err(Error::PixelOutOfBounds {
            x,
            y,
            width,
            height,
        });
    }

    let row = geometry.row(frame, y.usize()?);
    let column = x.usize()?;

    let codes = match packer {
        RowPacker::Rgb(packer) => {
            let mut pixels = Vec::new();
            packer.unpack_row(row, &mut pixels);
            pixels.get(column).map(|px| px.to_array())
        }
        RowPacker::Ycc(packer) => {
            let (mut luma, mut chroma) = (Vec::new(), Vec::new());
            packer.unpack_row(row, &mut luma, &mut chroma);
            luma.get(column)
                .zip(chroma.get(column / 2))
                .map(|(l, c)| [c.cb, *l, c.cr])
        }
    };

    codes.ok_or(Error::PixelOutOfBounds {
        x,
        y,
        width,
        height,
    })
}

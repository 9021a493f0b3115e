#![doc = include_str!("../README.md")]

use vpack_common::prelude::*;

pub const ALPHA: u8 = 0xFF;

/// BGRA packer
///
/// One pixel per four bytes `[B, G, R, A]`. Alpha is always opaque and is
/// ignored when unpacking.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bgra8;

impl Bgra8 {
    pub fn pack(px: RgbCode) -> [u8; 4] {
        // Codes are checked against the bit depth before packing
        let byte = |code: u16| u8::try_from(code).unwrap_or(u8::MAX);
        [byte(px.b), byte(px.g), byte(px.r), ALPHA]
    }

    pub fn unpack(bytes: [u8; 4]) -> RgbCode {
        let [b, g, r, _] = bytes;
        RgbCode::new(r.into(), g.into(), b.into())
    }
}

impl RgbPacker for Bgra8 {
    fn format(&self) -> PixelFormat {
        PixelFormat::Bgra8
    }

    fn pack_row(&self, pixels: &[RgbCode], _padding: RgbCode, row: &mut [u8]) {
        for (bytes, px) in row.chunks_exact_mut(4).zip(pixels) {
            bytes.copy_from_slice(&Self::pack(*px));
        }
    }

    fn unpack_row(&self, row: &[u8], pixels: &mut Vec<RgbCode>) {
        pixels.extend(
            row.chunks_exact(4)
                .map(|b| Self::unpack([b[0], b[1], b[2], b[3]])),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_order() {
        let mut row = [0; 8];
        Bgra8.pack_row(
            &[RgbCode::new(1, 2, 3), RgbCode::new(255, 128, 0)],
            RgbCode::default(),
            &mut row,
        );
        assert_eq!(row, [3, 2, 1, 255, 0, 128, 255, 255]);
    }

    #[test]
    fn alpha_is_ignored() {
        let mut pixels = Vec::new();
        Bgra8.unpack_row(&[10, 20, 30, 0, 40, 50, 60, 7], &mut pixels);
        assert_eq!(pixels, [RgbCode::new(30, 20, 10), RgbCode::new(60, 50, 40)]);
    }

    #[test]
    fn round_trip() {
        let pixels: Vec<RgbCode> = (0..=255).map(|v| RgbCode::new(v, 255 - v, v / 2)).collect();
        let mut row = vec![0; PixelFormat::Bgra8.row_bytes(256).unwrap()];
        Bgra8.pack_row(&pixels, RgbCode::default(), &mut row);

        let mut out = Vec::new();
        Bgra8.unpack_row(&row, &mut out);
        assert_eq!(out, pixels);
    }
}

#![doc = include_str!("../README.md")]

use vpack_common::prelude::*;

/// 2vuy packer
///
/// Two pixels share one chroma pair, stored as the bytes `[Cb, Y0, Cr, Y1]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uyvy;

impl YccPacker for Uyvy {
    fn format(&self) -> PixelFormat {
        PixelFormat::Yuv8
    }

    fn pack_row(&self, luma: &[u16], chroma: &[ChromaCode], padding: YccPadding, row: &mut [u8]) {
        for (i, group) in row.chunks_exact_mut(4).enumerate() {
            // Codes are checked against the bit depth before packing
            let byte = |code: u16| u8::try_from(code).unwrap_or(u8::MAX);
            let y = |n| byte(luma.get(i * 2 + n).copied().unwrap_or(padding.luma));
            let c = chroma.get(i).copied().unwrap_or(padding.chroma);

            group.copy_from_slice(&[byte(c.cb), y(0), byte(c.cr), y(1)]);
        }
    }

    fn unpack_row(&self, row: &[u8], luma: &mut Vec<u16>, chroma: &mut Vec<ChromaCode>) {
        for group in row.chunks_exact(4) {
            chroma.push(ChromaCode {
                cb: group[0].into(),
                cr: group[2].into(),
            });
            luma.extend([u16::from(group[1]), u16::from(group[3])]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PADDING: YccPadding = YccPadding {
        luma: 16,
        chroma: ChromaCode { cb: 128, cr: 128 },
    };

    #[test]
    fn byte_order() {
        let mut row = [0; 8];
        Uyvy.pack_row(
            &[1, 2, 3, 4],
            &[ChromaCode { cb: 5, cr: 6 }, ChromaCode { cb: 7, cr: 8 }],
            PADDING,
            &mut row,
        );
        assert_eq!(row, [5, 1, 6, 2, 7, 3, 8, 4]);
    }

    #[test]
    fn round_trip() {
        let luma: Vec<u16> = (0..=255).collect();
        let chroma: Vec<ChromaCode> = (0..128)
            .map(|i| ChromaCode { cb: i * 2, cr: 255 - i })
            .collect();
        let mut row = vec![0; PixelFormat::Yuv8.row_bytes(256).unwrap()];
        Uyvy.pack_row(&luma, &chroma, PADDING, &mut row);

        let mut luma_out = Vec::new();
        let mut chroma_out = Vec::new();
        Uyvy.unpack_row(&row, &mut luma_out, &mut chroma_out);
        assert_eq!(luma_out, luma);
        assert_eq!(chroma_out, chroma);
    }

    #[test]
    fn odd_width_pads_luma() {
        let mut row = vec![0; PixelFormat::Yuv8.row_bytes(3).unwrap()];
        assert_eq!(row.len(), 8);
        Uyvy.pack_row(
            &[100, 101, 102],
            &[ChromaCode { cb: 90, cr: 91 }, ChromaCode { cb: 92, cr: 93 }],
            PADDING,
            &mut row,
        );
        assert_eq!(row, [90, 100, 91, 101, 92, 102, 93, 16]);
    }
}

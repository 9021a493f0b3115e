#![doc = include_str!("../README.md")]

use vpack_common::packing::{low_bits, words_le, write_words_le};
use vpack_common::prelude::*;

pub const GROUP_PIXELS: usize = 8;
pub const GROUP_WORDS: usize = 9;
pub const GROUP_BYTES: usize = GROUP_WORDS * 4;

/// R12L packer
///
/// Eight pixels of 36 bits each fill nine little-endian words. The components
/// are stored in the order R, G, B starting at bit 0 of word 0, so that many of
/// them straddle a word boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct R12l;

impl R12l {
    pub fn pack_group(px: &[RgbCode; GROUP_PIXELS]) -> [u32; GROUP_WORDS] {
        let r = px.map(|p| u32::from(p.r) & 0xFFF);
        let g = px.map(|p| u32::from(p.g) & 0xFFF);
        let b = px.map(|p| u32::from(p.b) & 0xFFF);

        [
            (b[0] & 0xFF) << 24 | g[0] << 12 | r[0],
            (b[1] & 0xF) << 28 | g[1] << 16 | r[1] << 4 | b[0] >> 8,
            g[2] << 20 | r[2] << 8 | b[1] >> 4,
            (g[3] & 0xFF) << 24 | r[3] << 12 | b[2],
            (g[4] & 0xF) << 28 | r[4] << 16 | b[3] << 4 | g[3] >> 8,
            r[5] << 20 | b[4] << 8 | g[4] >> 4,
            (r[6] & 0xFF) << 24 | b[5] << 12 | g[5],
            (r[7] & 0xF) << 28 | b[6] << 16 | g[6] << 4 | r[6] >> 8,
            b[7] << 20 | g[7] << 8 | r[7] >> 4,
        ]
    }

    pub fn unpack_group(w: &[u32; GROUP_WORDS]) -> [RgbCode; GROUP_PIXELS] {
        let c = |v: u32| low_bits(v & 0xFFF);

        [
            RgbCode::new(c(w[0]), c(w[0] >> 12), c(w[0] >> 24 | w[1] << 8)),
            RgbCode::new(c(w[1] >> 4), c(w[1] >> 16), c(w[1] >> 28 | w[2] << 4)),
            RgbCode::new(c(w[2] >> 8), c(w[2] >> 20), c(w[3])),
            RgbCode::new(c(w[3] >> 12), c(w[3] >> 24 | w[4] << 8), c(w[4] >> 4)),
            RgbCode::new(c(w[4] >> 16), c(w[4] >> 28 | w[5] << 4), c(w[5] >> 8)),
            RgbCode::new(c(w[5] >> 20), c(w[6]), c(w[6] >> 12)),
            RgbCode::new(c(w[6] >> 24 | w[7] << 8), c(w[7] >> 4), c(w[7] >> 16)),
            RgbCode::new(c(w[7] >> 28 | w[8] << 4), c(w[8] >> 8), c(w[8] >> 20)),
        ]
    }
}

impl RgbPacker for R12l {
    fn format(&self) -> PixelFormat {
        PixelFormat::Rgb12
    }

    fn pack_row(&self, pixels: &[RgbCode], padding: RgbCode, row: &mut [u8]) {
        for (g, group) in row.chunks_exact_mut(GROUP_BYTES).enumerate() {
            let px = std::array::from_fn(|i| {
                pixels
                    .get(g * GROUP_PIXELS + i)
                    .copied()
                    .unwrap_or(padding)
            });
            write_words_le(group, &Self::pack_group(&px));
        }
    }

    fn unpack_row(&self, row: &[u8], pixels: &mut Vec<RgbCode>) {
        for group in row.chunks_exact(GROUP_BYTES) {
            let mut w = [0; GROUP_WORDS];
            for (dst, word) in w.iter_mut().zip(words_le(group)) {
                *dst = word;
            }
            pixels.extend(Self::unpack_group(&w));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> [RgbCode; GROUP_PIXELS] {
        let mut v: u16 = 0;
        std::array::from_fn(|_| {
            let px = RgbCode::new(v, 4095 - v, (v + 2048) % 4096);
            v += 585;
            px
        })
    }

    #[test]
    fn straddling_fields() {
        let mut px = [RgbCode::default(); GROUP_PIXELS];
        px[0].b = 0xABC;
        px[3].g = 0x123;
        px[7].r = 0xFED;

        let w = R12l::pack_group(&px);
        // Low 8 bits of blue 0 end word 0, the high 4 bits start word 1
        assert_eq!(w[0], 0xBC << 24);
        assert_eq!(w[1], 0xA);
        assert_eq!(w[3], 0x23 << 24);
        assert_eq!(w[4], 0x1);
        assert_eq!(w[7], 0xD << 28);
        assert_eq!(w[8], 0xFE);
    }

    #[test]
    fn word_formula() {
        let px = ramp();
        let w = R12l::pack_group(&px);
        let (r, g, b) = (
            px.map(|p| u32::from(p.r)),
            px.map(|p| u32::from(p.g)),
            px.map(|p| u32::from(p.b)),
        );

        assert_eq!(w[0], ((b[0] & 0xFF) << 24) | ((g[0] & 0xFFF) << 12) | (r[0] & 0xFFF));
        assert_eq!(
            w[2],
            ((g[2] & 0xFFF) << 20) | ((r[2] & 0xFFF) << 8) | ((b[1] & 0xFF0) >> 4)
        );
        assert_eq!(
            w[4],
            ((g[4] & 0xF) << 28) | ((r[4] & 0xFFF) << 16) | ((b[3] & 0xFFF) << 4) | ((g[3] & 0xF00) >> 8)
        );
        assert_eq!(
            w[8],
            ((b[7] & 0xFFF) << 20) | ((g[7] & 0xFFF) << 8) | ((r[7] & 0xFF0) >> 4)
        );
    }

    #[test]
    fn round_trip() {
        let px = ramp();
        assert_eq!(R12l::unpack_group(&R12l::pack_group(&px)), px);

        let full = [RgbCode::gray(4095); GROUP_PIXELS];
        assert_eq!(R12l::pack_group(&full), [u32::MAX; GROUP_WORDS]);
        assert_eq!(R12l::unpack_group(&[u32::MAX; GROUP_WORDS]), full);
    }

    #[test]
    fn partial_group_padding() {
        let black = RgbCode::gray(256);
        let pixels = ramp();
        let mut row = vec![0; PixelFormat::Rgb12.row_bytes(11).unwrap()];
        assert_eq!(row.len(), 72);

        let input = [&pixels[..], &pixels[..3]].concat();
        R12l.pack_row(&input, black, &mut row);

        let mut out = Vec::new();
        R12l.unpack_row(&row, &mut out);
        assert_eq!(out.len(), 16);
        assert_eq!(out[..11], input[..]);
        assert!(out[11..].iter().all(|px| *px == black));
    }
}

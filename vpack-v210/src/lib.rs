#![doc = include_str!("../README.md")]

use vpack_common::packing::{low_bits, words_le, write_words_le};
use vpack_common::prelude::*;

const MASK: u32 = 0x3FF;

/// Pixels per group of four words
pub const GROUP_PIXELS: usize = 6;
/// Chroma pairs per group
pub const GROUP_PAIRS: usize = 3;
pub const GROUP_BYTES: usize = 16;

/// v210 packer
///
/// Each group of 16 bytes holds six luma and three chroma pairs in four
/// little-endian words with three 10-bit fields at bit 0, 10 and 20.
///
/// | word | bits 0–9 | bits 10–19 | bits 20–29 |
/// |------|----------|------------|------------|
/// | 0    | Cb0      | Y0         | Cr0        |
/// | 1    | Y1       | Cb1        | Y2         |
/// | 2    | Cr1      | Y3         | Cb2        |
/// | 3    | Y4       | Cr2        | Y5         |
#[derive(Debug, Clone, Copy, Default)]
pub struct V210;

impl V210 {
    fn pack_group(y: [u16; GROUP_PIXELS], c: [ChromaCode; GROUP_PAIRS]) -> [u32; 4] {
        let f = |v: u16| u32::from(v) & MASK;
        [
            f(c[0].cb) | f(y[0]) << 10 | f(c[0].cr) << 20,
            f(y[1]) | f(c[1].cb) << 10 | f(y[2]) << 20,
            f(c[1].cr) | f(y[3]) << 10 | f(c[2].cb) << 20,
            f(y[4]) | f(c[2].cr) << 10 | f(y[5]) << 20,
        ]
    }

    fn unpack_group(w: [u32; 4]) -> ([u16; GROUP_PIXELS], [ChromaCode; GROUP_PAIRS]) {
        let f = |word: u32, shift: u32| low_bits((word >> shift) & MASK);
        let luma = [
            f(w[0], 10),
            f(w[1], 0),
            f(w[1], 20),
            f(w[2], 10),
            f(w[3], 0),
            f(w[3], 20),
        ];
        let chroma = [
            ChromaCode {
                cb: f(w[0], 0),
                cr: f(w[0], 20),
            },
            ChromaCode {
                cb: f(w[1], 10),
                cr: f(w[2], 0),
            },
            ChromaCode {
                cb: f(w[2], 20),
                cr: f(w[3], 10),
            },
        ];
        (luma, chroma)
    }
}

impl YccPacker for V210 {
    fn format(&self) -> PixelFormat {
        PixelFormat::Yuv10
    }

    fn pack_row(&self, luma: &[u16], chroma: &[ChromaCode], padding: YccPadding, row: &mut [u8]) {
        for (g, group) in row.chunks_exact_mut(GROUP_BYTES).enumerate() {
            let y = std::array::from_fn(|i| {
                luma.get(g * GROUP_PIXELS + i)
                    .copied()
                    .unwrap_or(padding.luma)
            });
            let c = std::array::from_fn(|i| {
                chroma
                    .get(g * GROUP_PAIRS + i)
                    .copied()
                    .unwrap_or(padding.chroma)
            });

            write_words_le(group, &Self::pack_group(y, c));
        }
    }

    fn unpack_row(&self, row: &[u8], luma: &mut Vec<u16>, chroma: &mut Vec<ChromaCode>) {
        for group in row.chunks_exact(GROUP_BYTES) {
            let mut w = [0; 4];
            for (dst, word) in w.iter_mut().zip(words_le(group)) {
                *dst = word;
            }

            let (y, c) = Self::unpack_group(w);
            luma.extend(y);
            chroma.extend(c);
        }
    }
}

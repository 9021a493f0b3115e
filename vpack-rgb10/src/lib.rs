#![doc = include_str!("../README.md")]

use vpack_common::packing::{low_bits, words_be, words_le, write_words_be, write_words_le};
use vpack_common::prelude::*;

const MASK: u32 = 0x3FF;

/// R10l packer
///
/// One little-endian word per pixel, `R` at bits 31–22, `G` at 21–12 and `B`
/// at 11–2. The two lowest bits are zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct R10l;

/// r210 packer
///
/// One big-endian word per pixel, `R` at bits 29–20, `G` at 19–10 and `B` at
/// 9–0. The two highest bits are zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct R210;

impl R10l {
    pub fn pack(px: RgbCode) -> u32 {
        (u32::from(px.r) & MASK) << 22 | (u32::from(px.g) & MASK) << 12 | (u32::from(px.b) & MASK) << 2
    }

    pub fn unpack(word: u32) -> RgbCode {
        RgbCode {
            r: low_bits(word >> 22 & MASK),
            g: low_bits(word >> 12 & MASK),
            b: low_bits(word >> 2 & MASK),
        }
    }
}

impl R210 {
    pub fn pack(px: RgbCode) -> u32 {
        (u32::from(px.r) & MASK) << 20 | (u32::from(px.g) & MASK) << 10 | u32::from(px.b) & MASK
    }

    pub fn unpack(word: u32) -> RgbCode {
        RgbCode {
            r: low_bits(word >> 20 & MASK),
            g: low_bits(word >> 10 & MASK),
            b: low_bits(word & MASK),
        }
    }
}

impl RgbPacker for R10l {
    fn format(&self) -> PixelFormat {
        PixelFormat::Rgb10
    }

    fn pack_row(&self, pixels: &[RgbCode], _padding: RgbCode, row: &mut [u8]) {
        let words: Vec<u32> = pixels.iter().map(|px| Self::pack(*px)).collect();
        write_words_le(row, &words);
    }

    fn unpack_row(&self, row: &[u8], pixels: &mut Vec<RgbCode>) {
        pixels.extend(words_le(row).map(Self::unpack));
    }
}

impl RgbPacker for R210 {
    fn format(&self) -> PixelFormat {
        PixelFormat::Rgb10Be
    }

    fn pack_row(&self, pixels: &[RgbCode], _padding: RgbCode, row: &mut [u8]) {
        let words: Vec<u32> = pixels.iter().map(|px| Self::pack(*px)).collect();
        write_words_be(row, &words);
    }

    fn unpack_row(&self, row: &[u8], pixels: &mut Vec<RgbCode>) {
        pixels.extend(words_be(row).map(Self::unpack));
    }
}

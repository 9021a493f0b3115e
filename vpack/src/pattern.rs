//! Float RGB test frames

use vpack_common::frame::for_each_row;
use vpack_common::prelude::*;
use vpack_common::utils::UnknownNameError;

const WHITE: [f32; 3] = [1., 1., 1.];
const BLACK: [f32; 3] = [0., 0., 0.];

/// Full amplitude bars from white to black
const BARS: [[f32; 3]; 8] = [
    WHITE,
    [1., 1., 0.],
    [0., 1., 1.],
    [0., 1., 0.],
    [1., 0., 1.],
    [1., 0., 0.],
    [0., 0., 1.],
    BLACK,
];

/// 75% bars from white to blue
const COLOR_BARS: [[f32; 3]; 7] = [
    [0.75, 0.75, 0.75],
    [0.75, 0.75, 0.],
    [0., 0.75, 0.75],
    [0., 0.75, 0.],
    [0.75, 0., 0.75],
    [0.75, 0., 0.],
    [0., 0., 0.75],
];

/// Below black, black, setup level and 15% gray
const PLUGE: [f32; 4] = [-0.04, 0., 0.075, 0.15];

const CHECKER_SIZE: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TestPattern {
    /// Horizontal gray ramp from `start` at the left edge towards `end`
    Gradient { start: f32, end: f32 },
    /// Eight bars at full amplitude
    Bars,
    /// Black and white squares of 32 pixels
    Checkerboard,
    /// 75% color bars over the top two thirds, blue, a ramp and PLUGE levels
    /// below
    ColorBars,
}

impl Default for TestPattern {
    fn default() -> Self {
        Self::Gradient { start: 0., end: 1. }
    }
}

impl TestPattern {
    /// Row-major, pixel-interleaved samples of a `width` by `height` frame
    ///
    /// ```
    /// # use vpack::pattern::TestPattern;
    /// let frame = TestPattern::Bars.render(8, 1).unwrap();
    /// assert_eq!(frame[..3], [1., 1., 1.]);
    /// assert_eq!(frame[21..], [0., 0., 0.]);
    /// ```
    pub fn render(&self, width: u32, height: u32) -> Result<Vec<f32>> {
        let row_len = width.usize()?.safe_mul(3)?;
        let len = row_len.safe_mul(height.usize()?)?;

        if len == 0 {
            return Err(Error::ShapeMismatch {
                width,
                height,
                expected: 0,
                actual: 0,
            });
        }

        let (width, height) = (width as usize, height as usize);
        let mut frame = vec![0.; len];
        for_each_row(&mut frame, row_len, |y, row| {
            for (x, px) in row.chunks_exact_mut(3).enumerate() {
                px.copy_from_slice(&self.pixel(x, y, width, height));
            }
        });

        Ok(frame)
    }

    fn pixel(&self, x: usize, y: usize, width: usize, height: usize) -> [f32; 3] {
        match *self {
            Self::Gradient { start, end } => {
                let v = start + (end - start) * x as f32 / width as f32;
                [v; 3]
            }
            Self::Bars => BARS[(x * BARS.len() / width).min(BARS.len() - 1)],
            Self::Checkerboard => {
                if (x / CHECKER_SIZE + y / CHECKER_SIZE) % 2 == 1 {
                    WHITE
                } else {
                    BLACK
                }
            }
            Self::ColorBars => {
                if y < height * 2 / 3 {
                    let bar_width = (width / COLOR_BARS.len()).max(1);
                    COLOR_BARS[(x / bar_width).min(COLOR_BARS.len() - 1)]
                } else {
                    Self::lower_third(x, width)
                }
            }
        }
    }

    fn lower_third(x: usize, width: usize) -> [f32; 3] {
        let section = width / 3;

        if x < section {
            [0., 0., 0.75]
        } else if x < 2 * section {
            [(x - section) as f32 / section as f32; 3]
        } else {
            let pluge_width = ((width - 2 * section) / PLUGE.len()).max(1);
            [PLUGE[((x - 2 * section) / pluge_width).min(PLUGE.len() - 1)]; 3]
        }
    }
}

impl std::str::FromStr for TestPattern {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gradient" => Ok(Self::default()),
            "bars" => Ok(Self::Bars),
            "checkerboard" => Ok(Self::Checkerboard),
            "colorbars" | "color-bars" | "smpte" => Ok(Self::ColorBars),
            _ => Err(UnknownNameError(s.to_string())),
        }
    }
}

//! Transform between RGB and YCbCr color difference signals
//!
//! - [ITU-R BT.601](https://www.itu.int/rec/R-REC-BT.601)
//! - [ITU-R BT.709](https://www.itu.int/rec/R-REC-BT.709)
//! - [ITU-R BT.2020](https://www.itu.int/rec/R-REC-BT.2020)

use crate::utils::{maybe_convertible_enum, UnknownNameError};

maybe_convertible_enum!(
    #[repr(u8)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    /// Colorimetry standard
    ///
    /// Values are the matrix coefficients code points of ITU-T H.273.
    ///
    /// ```
    /// # use vpack_common::colorimetry::*;
    /// assert_eq!(Matrix::try_from(9), Ok(Matrix::Rec2020));
    /// assert_eq!(u8::from(Matrix::Rec601), 6);
    /// assert_eq!("bt709".parse::<Matrix>(), Ok(Matrix::Rec709));
    /// ```
    pub enum Matrix {
        #[default]
        Rec709 = 1,
        Rec601 = 6,
        Rec2020 = 9,
    }
);

impl Matrix {
    pub const fn coefficients(self) -> ColorMatrix {
        match self {
            Self::Rec601 => ColorMatrix::REC601,
            Self::Rec709 => ColorMatrix::REC709,
            Self::Rec2020 => ColorMatrix::REC2020,
        }
    }
}

impl std::str::FromStr for Matrix {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['.', '-', '_'], "").as_str() {
            "rec601" | "bt601" | "601" => Ok(Self::Rec601),
            "rec709" | "bt709" | "709" => Ok(Self::Rec709),
            "rec2020" | "bt2020" | "2020" => Ok(Self::Rec2020),
            _ => Err(UnknownNameError(s.to_string())),
        }
    }
}

/// Luma coefficients of a colorimetry standard
///
/// The green coefficient is derived as `1 - kr - kb`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorMatrix {
    kr: f64,
    kb: f64,
}

impl ColorMatrix {
    pub const REC601: Self = Self {
        kr: 0.299,
        kb: 0.114,
    };
    pub const REC709: Self = Self {
        kr: 0.2126,
        kb: 0.0722,
    };
    pub const REC2020: Self = Self {
        kr: 0.2627,
        kb: 0.0593,
    };

    pub fn kr(&self) -> f64 {
        self.kr
    }

    pub fn kb(&self) -> f64 {
        self.kb
    }

    pub fn kg(&self) -> f64 {
        1. - self.kr - self.kb
    }

    /// RGB to luma and color differences
    ///
    /// For RGB in `[0, 1]` luma is in `[0, 1]` and both color differences are
    /// in `[-0.5, 0.5]`.
    ///
    /// ```
    /// # use vpack_common::colorimetry::*;
    /// let [y, cb, cr] = ColorMatrix::REC709.forward([1., 1., 1.]);
    /// assert!((y - 1.).abs() < 1e-12);
    /// assert!(cb.abs() < 1e-12 && cr.abs() < 1e-12);
    /// ```
    pub fn forward(&self, [r, g, b]: [f64; 3]) -> [f64; 3] {
        let y = self.kr * r + self.kg() * g + self.kb * b;
        let cb = (b - y) / (2. * (1. - self.kb));
        let cr = (r - y) / (2. * (1. - self.kr));
        [y, cb, cr]
    }

    /// Luma and color differences to RGB
    ///
    /// The result is not clamped.
    pub fn inverse(&self, [y, cb, cr]: [f64; 3]) -> [f64; 3] {
        let r = y + cr * 2. * (1. - self.kr);
        let b = y + cb * 2. * (1. - self.kb);
        let g = (y - self.kr * r - self.kb * b) / self.kg();
        [r, g, b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MATRICES: [Matrix; 3] = [Matrix::Rec601, Matrix::Rec709, Matrix::Rec2020];

    #[test]
    fn round_trip() {
        let steps = [0., 0.1, 0.25, 0.5, 0.73, 0.9, 1.];
        for matrix in MATRICES {
            let m = matrix.coefficients();
            for r in steps {
                for g in steps {
                    for b in steps {
                        let back = m.inverse(m.forward([r, g, b]));
                        for (x, y) in back.iter().zip([r, g, b]) {
                            assert!((x - y).abs() < 1e-6, "{matrix:?} {back:?} {r} {g} {b}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn chroma_extremes() {
        for matrix in MATRICES {
            let m = matrix.coefficients();
            let [_, cb, _] = m.forward([0., 0., 1.]);
            assert!((cb - 0.5).abs() < 1e-12);
            let [_, _, cr] = m.forward([1., 0., 0.]);
            assert!((cr - 0.5).abs() < 1e-12);
            let [_, cb, cr] = m.forward([1., 1., 0.]);
            assert!((cb + 0.5).abs() < 1e-12);
            assert!(cr.abs() <= 0.5);
        }
    }

    #[test]
    fn inverse_is_not_clamped() {
        let [r, _, _] = ColorMatrix::REC709.inverse([0., 0., 0.5]);
        assert!(r > 0.7);
        let [_, g, _] = ColorMatrix::REC709.inverse([0., 0.5, 0.5]);
        assert!(g < 0.);
    }

    #[test]
    fn code_points() {
        for matrix in MATRICES {
            assert_eq!(Matrix::try_from(u8::from(matrix)), Ok(matrix));
        }
        assert!(Matrix::try_from(2).is_err());
        assert_eq!("Rec.2020".parse::<Matrix>(), Ok(Matrix::Rec2020));
        assert!("srgb".parse::<Matrix>().is_err());
    }
}

//! Horizontal chroma subsampling

/// Normalized color difference pair
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Chroma {
    pub cb: f64,
    pub cr: f64,
}

impl Chroma {
    pub const NEUTRAL: Self = Self { cb: 0., cr: 0. };

    pub fn new(cb: f64, cr: f64) -> Self {
        Self { cb, cr }
    }
}

/// Averages horizontally adjacent pairs of a 4:4:4 row into 4:2:2
///
/// An odd trailing sample is taken as is, as if its missing neighbor had the
/// same color. Averaging happens before quantization.
///
/// ```
/// # use vpack_common::chroma::*;
/// let row = [Chroma::new(0.5, 0.), Chroma::new(0., -0.5), Chroma::new(0.25, 0.25)];
/// assert_eq!(
///     subsample_422(&row),
///     vec![Chroma::new(0.25, -0.25), Chroma::new(0.25, 0.25)]
/// );
/// ```
pub fn subsample_422(row: &[Chroma]) -> Vec<Chroma> {
    row.chunks(2)
        .map(|pair| match pair {
            [a, b] => Chroma {
                cb: (a.cb + b.cb) / 2.,
                cr: (a.cr + b.cr) / 2.,
            },
            [a] => *a,
            _ => Chroma::NEUTRAL,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::RangeSpec;

    #[test]
    fn empty_row() {
        assert!(subsample_422(&[]).is_empty());
    }

    #[test]
    fn averages_before_quantization() {
        let spec = RangeSpec::NARROW_10;
        let a = 0.4 / 896.;
        let b = 1.4 / 896.;

        let float_avg = subsample_422(&[Chroma::new(a, 0.), Chroma::new(b, 0.)])[0];
        assert_eq!(spec.quantize_chroma(float_avg.cb), 513);

        // Codes 512 and 513 have no integer average
        let code_avg = f64::from(spec.quantize_chroma(a) + spec.quantize_chroma(b)) / 2.;
        assert_eq!(code_avg, 512.5);
    }
}

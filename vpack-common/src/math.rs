//! Checked arithmetic for buffer geometry
//!
//! Frame dimensions come from callers, so `width * height * stride` is
//! computed with operations that report overflow instead of wrapping.

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("Operation {0:?} * {1:?} failed")]
    MulFailed(Option<i128>, Option<i128>),
    #[error("Operation {0:?} / {1:?} failed")]
    DivFailed(Option<i128>, Option<i128>),
    #[error("Conversion failed for value {0:?}")]
    ConversionFailed(Option<i128>),
}

/// Same as `checked_mul` functions but returns an error
pub trait SafeMul: Sized {
    fn safe_mul(self, rhs: Self) -> Result<Self, MathError>;
}

macro_rules! impl_operator {
    ($op:ident, $f:ident, $t:ty) => {
        paste::paste! {
            impl [< Safe $op >] for $t {
                fn [< safe_ $f >](self, rhs: $t) -> Result<$t, MathError> {
                    let err = || MathError:: [< $op Failed >] (self.try_into().ok(), rhs.try_into().ok());
                    self.[< checked_ $f >](rhs)
                        .ok_or_else(err)
                }
            }
        }
    };
}

impl_operator!(Mul, mul, u32);
impl_operator!(Mul, mul, u64);
impl_operator!(Mul, mul, usize);

/// Rounding-up division, as used for group counts per row
///
/// ```
/// # use vpack_common::math::div_ceil;
/// assert_eq!(div_ceil(7, 6).unwrap(), 2);
/// assert_eq!(div_ceil(12, 6).unwrap(), 2);
/// assert!(div_ceil(1, 0).is_err());
/// ```
pub fn div_ceil(value: usize, divisor: usize) -> Result<usize, MathError> {
    if divisor == 0 {
        return Err(MathError::DivFailed(value.try_into().ok(), Some(0)));
    }
    Ok(value.div_ceil(divisor))
}

pub trait ToUsize: Sized + TryInto<usize> + TryInto<i128> + Copy {
    fn usize(self) -> Result<usize, MathError> {
        self.try_into()
            .map_err(|_| MathError::ConversionFailed(self.try_into().ok()))
    }
}

impl ToUsize for u32 {}
impl ToUsize for u64 {}

//! Floating-point calculator with an absolute sign tolerance.

use std::fmt::Debug;

use num_traits::{Float, NumCast};

use super::{AlgebraicNumberCalculator, Sign};
use crate::error::DomainError;

/// Calculator over any `num_traits::Float`.
///
/// `sign(x)` is `Zero` whenever `|x| <= eps_sign`, so every geometric
/// predicate built on top of it inherits the same tolerance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatCalculator<T> {
    pub eps_sign: T,
}

/// The common `f64` backend.
pub type DoubleCalculator = FloatCalculator<f64>;

impl<T: Float> FloatCalculator<T> {
    #[inline]
    pub fn new(eps_sign: T) -> Self {
        Self {
            eps_sign: eps_sign.abs(),
        }
    }

    /// Zero tolerance: signs are taken literally.
    #[inline]
    pub fn exact() -> Self {
        Self { eps_sign: T::zero() }
    }
}

impl Default for FloatCalculator<f64> {
    fn default() -> Self {
        Self { eps_sign: 1e-9 }
    }
}

impl Default for FloatCalculator<f32> {
    fn default() -> Self {
        Self { eps_sign: 1e-5 }
    }
}

impl<T: Float + Debug + 'static> AlgebraicNumberCalculator for FloatCalculator<T> {
    type Number = T;

    #[inline]
    fn zero(&self) -> T {
        T::zero()
    }
    #[inline]
    fn one(&self) -> T {
        T::one()
    }
    #[inline]
    fn from_i64(&self, value: i64) -> T {
        <T as NumCast>::from(value).unwrap_or_else(T::nan)
    }

    #[inline]
    fn add(&self, a: &T, b: &T) -> T {
        *a + *b
    }
    #[inline]
    fn subtract(&self, a: &T, b: &T) -> T {
        *a - *b
    }
    #[inline]
    fn multiply(&self, a: &T, b: &T) -> T {
        *a * *b
    }
    #[inline]
    fn opposite(&self, a: &T) -> T {
        -*a
    }

    fn inverse(&self, a: &T) -> Result<T, DomainError> {
        if self.is_zero(a) {
            return Err(DomainError::ZeroInverse);
        }
        Ok(a.recip())
    }

    fn square_root(&self, a: &T) -> Result<T, DomainError> {
        match self.sign(a) {
            Sign::Negative => Err(DomainError::NegativeSquareRoot),
            Sign::Zero => Ok(T::zero()),
            Sign::Positive => Ok(a.sqrt()),
        }
    }

    #[inline]
    fn sign(&self, a: &T) -> Sign {
        if a.abs() <= self.eps_sign {
            Sign::Zero
        } else if *a > T::zero() {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

//! Algebraic number calculators.
//!
//! Purpose
//! - Keep every geometric computation generic over the number type: the
//!   geometry never performs raw arithmetic, it asks a calculator.
//! - Reduce every geometric decision to one tolerance policy: all predicates
//!   (`is_zero`, `is_strictly_positive`, ...) derive from `sign`.
//!
//! Backends
//! - `FloatCalculator<T>` (alias `DoubleCalculator` for `f64`): tolerance-aware
//!   signs for floating point.
//! - `RationalCalculator`: exact `BigRational` arithmetic, tolerance 0.

mod float;
mod rational;

pub use float::{DoubleCalculator, FloatCalculator};
pub use rational::RationalCalculator;

use std::fmt::Debug;

use num_rational::Rational64;

use crate::error::DomainError;

/// Three-valued sign with tolerance already applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    /// -1, 0 or +1.
    #[inline]
    pub fn as_i8(self) -> i8 {
        match self {
            Sign::Negative => -1,
            Sign::Zero => 0,
            Sign::Positive => 1,
        }
    }

    #[inline]
    pub fn flipped(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }
}

/// Arithmetic capability over an opaque number type.
///
/// Implementations are small value objects (cheap to clone) because every
/// geometric value keeps a copy of the calculator it was built with.
pub trait AlgebraicNumberCalculator: Clone + Debug {
    type Number: nalgebra::Scalar;

    fn zero(&self) -> Self::Number;
    fn one(&self) -> Self::Number;
    fn from_i64(&self, value: i64) -> Self::Number;

    fn add(&self, a: &Self::Number, b: &Self::Number) -> Self::Number;
    fn subtract(&self, a: &Self::Number, b: &Self::Number) -> Self::Number;
    fn multiply(&self, a: &Self::Number, b: &Self::Number) -> Self::Number;
    fn opposite(&self, a: &Self::Number) -> Self::Number;

    /// Fails with `DomainError::ZeroInverse` when `sign(a) == Zero`.
    fn inverse(&self, a: &Self::Number) -> Result<Self::Number, DomainError>;

    /// Fails with `DomainError::NegativeSquareRoot` when `sign(a) == Negative`.
    fn square_root(&self, a: &Self::Number) -> Result<Self::Number, DomainError>;

    /// Sign of `a`; values within the backend tolerance are `Zero`.
    fn sign(&self, a: &Self::Number) -> Sign;

    fn divide(&self, a: &Self::Number, b: &Self::Number) -> Result<Self::Number, DomainError> {
        Ok(self.multiply(a, &self.inverse(b)?))
    }

    /// Fails when the backend's tolerance reads the denominator as zero.
    fn from_ratio(&self, ratio: Rational64) -> Result<Self::Number, DomainError> {
        let numer = self.from_i64(*ratio.numer());
        let denom = self.from_i64(*ratio.denom());
        self.divide(&numer, &denom)
    }

    #[inline]
    fn is_zero(&self, a: &Self::Number) -> bool {
        self.sign(a) == Sign::Zero
    }
    #[inline]
    fn is_strictly_positive(&self, a: &Self::Number) -> bool {
        self.sign(a) == Sign::Positive
    }
    #[inline]
    fn is_positive(&self, a: &Self::Number) -> bool {
        self.sign(a) != Sign::Negative
    }
    #[inline]
    fn is_strictly_negative(&self, a: &Self::Number) -> bool {
        self.sign(a) == Sign::Negative
    }
    #[inline]
    fn is_negative(&self, a: &Self::Number) -> bool {
        self.sign(a) != Sign::Positive
    }

    /// `a == b` under the tolerance policy, i.e. `sign(a - b) == Zero`.
    #[inline]
    fn are_equal(&self, a: &Self::Number, b: &Self::Number) -> bool {
        self.is_zero(&self.subtract(a, b))
    }

    fn absolute(&self, a: &Self::Number) -> Self::Number {
        if self.is_strictly_negative(a) {
            self.opposite(a)
        } else {
            a.clone()
        }
    }
}

#[cfg(test)]
mod tests;

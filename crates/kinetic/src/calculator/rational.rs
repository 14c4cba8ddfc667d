//! Exact calculator over arbitrary-precision rationals.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::{AlgebraicNumberCalculator, Sign};
use crate::error::DomainError;

/// Exact `BigRational` arithmetic. Tolerance is zero by construction.
///
/// Square roots are only available for perfect squares; anything else is
/// `DomainError::Unrepresentable`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RationalCalculator;

impl RationalCalculator {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Convenience constructor for `numer / denom`.
    pub fn ratio(&self, numer: i64, denom: i64) -> Result<BigRational, DomainError> {
        if denom == 0 {
            return Err(DomainError::ZeroInverse);
        }
        Ok(BigRational::new(BigInt::from(numer), BigInt::from(denom)))
    }
}

fn exact_sqrt(n: &BigInt) -> Option<BigInt> {
    let r = n.sqrt();
    (&r * &r == *n).then_some(r)
}

impl AlgebraicNumberCalculator for RationalCalculator {
    type Number = BigRational;

    #[inline]
    fn zero(&self) -> BigRational {
        BigRational::zero()
    }
    #[inline]
    fn one(&self) -> BigRational {
        BigRational::one()
    }
    #[inline]
    fn from_i64(&self, value: i64) -> BigRational {
        BigRational::from_integer(BigInt::from(value))
    }

    #[inline]
    fn add(&self, a: &BigRational, b: &BigRational) -> BigRational {
        a + b
    }
    #[inline]
    fn subtract(&self, a: &BigRational, b: &BigRational) -> BigRational {
        a - b
    }
    #[inline]
    fn multiply(&self, a: &BigRational, b: &BigRational) -> BigRational {
        a * b
    }
    #[inline]
    fn opposite(&self, a: &BigRational) -> BigRational {
        -a
    }

    fn inverse(&self, a: &BigRational) -> Result<BigRational, DomainError> {
        if a.is_zero() {
            return Err(DomainError::ZeroInverse);
        }
        Ok(a.recip())
    }

    fn square_root(&self, a: &BigRational) -> Result<BigRational, DomainError> {
        if a.is_negative() {
            return Err(DomainError::NegativeSquareRoot);
        }
        // `BigRational` is kept reduced with a positive denominator.
        match (exact_sqrt(a.numer()), exact_sqrt(a.denom())) {
            (Some(n), Some(d)) => Ok(BigRational::new(n, d)),
            _ => Err(DomainError::Unrepresentable {
                value: a.to_string(),
            }),
        }
    }

    #[inline]
    fn sign(&self, a: &BigRational) -> Sign {
        if a.is_zero() {
            Sign::Zero
        } else if a.is_positive() {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

//! Shapes: cyclic tracing sequences stored flat, with modular indices.

use tracing::debug;

use super::Tracing;
use crate::calculator::AlgebraicNumberCalculator;
use crate::error::{Discontinuity, DiscontinuityKind, GeometryError, Result, ShapeValidationError};

/// `(i, (i + 1) % n)` for every `i < n`, wrapping the last index to the first.
pub fn cyclic_pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).map(move |i| (i, (i + 1) % n))
}

/// Closed boundary made of at least one tracing.
///
/// Invariant: for every cyclic pair `(i, next)`, tracing `i` ends where
/// `next` starts and with the same tangent direction.
#[derive(Clone, Debug)]
pub struct Shape<C: AlgebraicNumberCalculator> {
    tracings: Vec<Tracing<C>>,
}

impl<C: AlgebraicNumberCalculator> Shape<C> {
    /// Validate and wrap `tracings`. Every failed check is reported, position
    /// and tangent independently.
    pub fn new(tracings: Vec<Tracing<C>>) -> Result<Self> {
        if tracings.is_empty() {
            return Err(GeometryError::construction(
                "a shape needs at least one tracing",
            ));
        }
        let mut discontinuities = Vec::new();
        for (index, next) in cyclic_pairs(tracings.len()) {
            let (a, b) = (&tracings[index], &tracings[next]);
            if !a.is_continuous_with(b) {
                discontinuities.push(Discontinuity {
                    kind: DiscontinuityKind::Position,
                    index,
                    next,
                });
            }
            if !a.tangent_is_continuous_with(b) {
                discontinuities.push(Discontinuity {
                    kind: DiscontinuityKind::Tangent,
                    index,
                    next,
                });
            }
        }
        if !discontinuities.is_empty() {
            debug!(
                tracings = tracings.len(),
                discontinuities = discontinuities.len(),
                "shape rejected"
            );
            return Err(ShapeValidationError { discontinuities }.into());
        }
        Ok(Self { tracings })
    }

    #[inline]
    pub fn tracings(&self) -> &[Tracing<C>] {
        &self.tracings
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tracings.len()
    }

    /// Never true for a validated shape.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tracings.is_empty()
    }

    #[inline]
    pub fn next_index(&self, i: usize) -> usize {
        (i + 1) % self.tracings.len()
    }
}

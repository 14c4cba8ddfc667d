//! Boundary primitives (tracings) and shapes.
//!
//! - `Tracing`: closed sum of `Arc` and `Segment`; every tracing has start and
//!   end points, start and end tangents, and a rational weight.
//! - `Shape`: a validated cyclic sequence of tracings, continuous in position
//!   (G0) and tangent direction (G1), last tracing wrapping to the first.

mod arc;
mod segment;
mod shape;

pub use arc::Arc;
pub use segment::Segment;
pub use shape::{cyclic_pairs, Shape};

use std::fmt;

use nalgebra::Vector2;
use num_rational::Rational64;

use crate::calculator::AlgebraicNumberCalculator;
use crate::geom::{Direction, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TracingKind {
    Arc,
    Segment,
}

impl fmt::Display for TracingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TracingKind::Arc => f.write_str("arc"),
            TracingKind::Segment => f.write_str("segment"),
        }
    }
}

/// Oriented boundary piece.
#[derive(Clone, Debug)]
pub enum Tracing<C: AlgebraicNumberCalculator> {
    Arc(Arc<C>),
    Segment(Segment<C>),
}

impl<C: AlgebraicNumberCalculator> Tracing<C> {
    #[inline]
    pub fn kind(&self) -> TracingKind {
        match self {
            Tracing::Arc(_) => TracingKind::Arc,
            Tracing::Segment(_) => TracingKind::Segment,
        }
    }

    pub fn start(&self) -> &Point<C> {
        match self {
            Tracing::Arc(a) => a.start(),
            Tracing::Segment(s) => s.start(),
        }
    }

    pub fn end(&self) -> &Point<C> {
        match self {
            Tracing::Arc(a) => a.end(),
            Tracing::Segment(s) => s.end(),
        }
    }

    pub fn start_tangent(&self) -> Direction<C> {
        match self {
            Tracing::Arc(a) => a.start_tangent(),
            Tracing::Segment(s) => s.direction().clone(),
        }
    }

    pub fn end_tangent(&self) -> Direction<C> {
        match self {
            Tracing::Arc(a) => a.end_tangent(),
            Tracing::Segment(s) => s.direction().clone(),
        }
    }

    pub fn weight(&self) -> Rational64 {
        match self {
            Tracing::Arc(a) => a.weight(),
            Tracing::Segment(s) => s.weight(),
        }
    }

    pub fn as_arc(&self) -> Option<&Arc<C>> {
        match self {
            Tracing::Arc(a) => Some(a),
            Tracing::Segment(_) => None,
        }
    }

    pub fn as_segment(&self) -> Option<&Segment<C>> {
        match self {
            Tracing::Segment(s) => Some(s),
            Tracing::Arc(_) => None,
        }
    }

    pub fn translated(&self, offset: &Vector2<C::Number>) -> Self {
        match self {
            Tracing::Arc(a) => Tracing::Arc(a.translated(offset)),
            Tracing::Segment(s) => Tracing::Segment(s.translated(offset)),
        }
    }

    /// G0: `self.end == next.start`.
    #[inline]
    pub fn is_continuous_with(&self, next: &Tracing<C>) -> bool {
        self.end() == next.start()
    }

    /// G1: end tangent and next start tangent are the same ray.
    #[inline]
    pub fn tangent_is_continuous_with(&self, next: &Tracing<C>) -> bool {
        self.end_tangent() == next.start_tangent()
    }
}

impl<C: AlgebraicNumberCalculator> From<Arc<C>> for Tracing<C> {
    fn from(a: Arc<C>) -> Self {
        Tracing::Arc(a)
    }
}

impl<C: AlgebraicNumberCalculator> From<Segment<C>> for Tracing<C> {
    fn from(s: Segment<C>) -> Self {
        Tracing::Segment(s)
    }
}

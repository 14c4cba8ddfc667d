//! Single entry point: builds geometry with one calculator and convolves it.

use num_rational::Rational64;
use tracing::{debug, trace};

use super::rules::{convolve_arc_and_segment, convolve_arcs};
use super::types::{Convolution, ConvolvedTracing};
use crate::boundary::{Arc, Segment, Shape, Tracing};
use crate::calculator::{AlgebraicNumberCalculator, DoubleCalculator};
use crate::error::Result;
use crate::geom::{Direction, DirectionRange, Orientation, Point};

/// Factory for points, directions, tracings and shapes sharing one
/// calculator, and the shape/tracing convolution operations.
#[derive(Clone, Debug)]
pub struct ConvolutionFactory<C: AlgebraicNumberCalculator> {
    calc: C,
}

impl Default for ConvolutionFactory<DoubleCalculator> {
    fn default() -> Self {
        Self::new(DoubleCalculator::default())
    }
}

impl<C: AlgebraicNumberCalculator> ConvolutionFactory<C> {
    pub fn new(calc: C) -> Self {
        Self { calc }
    }

    #[inline]
    pub fn calculator(&self) -> &C {
        &self.calc
    }

    pub fn create_point(&self, x: C::Number, y: C::Number) -> Point<C> {
        Point::new(self.calc.clone(), x, y)
    }

    /// Fails when `(x, y)` is zero under the calculator's sign.
    pub fn create_direction(&self, x: C::Number, y: C::Number) -> Result<Direction<C>> {
        Direction::new(self.calc.clone(), x, y)
    }

    pub fn create_direction_range(
        &self,
        start: Direction<C>,
        end: Direction<C>,
        orientation: Orientation,
    ) -> DirectionRange<C> {
        DirectionRange::new(start, end, orientation)
    }

    pub fn create_segment(
        &self,
        start: Point<C>,
        end: Point<C>,
        weight: Rational64,
    ) -> Result<Segment<C>> {
        Segment::new(start, end, weight)
    }

    pub fn create_arc(
        &self,
        center: Point<C>,
        directions: DirectionRange<C>,
        radius: C::Number,
        weight: Rational64,
    ) -> Result<Arc<C>> {
        Arc::new(center, directions, radius, weight)
    }

    /// Validates continuity of the cyclic sequence, see [`Shape::new`].
    pub fn create_shape<I, T>(&self, tracings: I) -> Result<Shape<C>>
    where
        I: IntoIterator<Item = T>,
        T: Into<Tracing<C>>,
    {
        Shape::new(tracings.into_iter().map(Into::into).collect())
    }

    /// Every tracing of `shape1` against every tracing of `shape2`, in
    /// row-major order.
    pub fn convolve_shapes<'a>(
        &self,
        shape1: &'a Shape<C>,
        shape2: &'a Shape<C>,
    ) -> Result<Convolution<'a, C>> {
        debug!(
            tracings1 = shape1.len(),
            tracings2 = shape2.len(),
            "convolving shapes"
        );
        let mut convolved = Vec::new();
        for t1 in shape1.tracings() {
            for t2 in shape2.tracings() {
                convolved.extend(self.convolve_tracings(t1, t2)?);
            }
        }
        debug!(convolved = convolved.len(), "convolution done");
        Ok(Convolution::new(shape1, shape2, convolved))
    }

    /// Convolve one pair; parents keep the argument order.
    pub fn convolve_tracings<'a>(
        &self,
        t1: &'a Tracing<C>,
        t2: &'a Tracing<C>,
    ) -> Result<Vec<ConvolvedTracing<'a, C>>> {
        let pieces: Vec<Tracing<C>> = match (t1, t2) {
            (Tracing::Arc(a1), Tracing::Arc(a2)) => convolve_arcs(a1, a2)?
                .into_iter()
                .map(Tracing::Arc)
                .collect(),
            (Tracing::Arc(a), Tracing::Segment(s)) | (Tracing::Segment(s), Tracing::Arc(a)) => {
                convolve_arc_and_segment(a, s)?
                    .map(Tracing::Segment)
                    .into_iter()
                    .collect()
            }
            (Tracing::Segment(_), Tracing::Segment(_)) => Vec::new(),
        };
        trace!(
            kind1 = %t1.kind(),
            kind2 = %t2.kind(),
            results = pieces.len(),
            "convolved pair"
        );
        Ok(pieces
            .into_iter()
            .map(|convolution| ConvolvedTracing {
                convolution,
                parent1: t1,
                parent2: t2,
            })
            .collect())
    }
}

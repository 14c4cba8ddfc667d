//! Straight tracings.

use nalgebra::Vector2;
use num_rational::Rational64;

use crate::calculator::AlgebraicNumberCalculator;
use crate::error::{GeometryError, Result};
use crate::geom::{Direction, Point};

/// Straight piece from `start` to `end`; the tangent is `start -> end` at
/// both ends.
#[derive(Clone, Debug)]
pub struct Segment<C: AlgebraicNumberCalculator> {
    start: Point<C>,
    end: Point<C>,
    direction: Direction<C>,
    weight: Rational64,
}

impl<C: AlgebraicNumberCalculator> Segment<C> {
    /// Fails when `start == end` under the calculator's tolerance.
    pub fn new(start: Point<C>, end: Point<C>, weight: Rational64) -> Result<Self> {
        if start == end {
            return Err(GeometryError::construction(format!(
                "segment endpoints coincide at {start:?}"
            )));
        }
        let direction = Direction::from_points(&start, &end)?;
        Ok(Self {
            start,
            end,
            direction,
            weight,
        })
    }

    #[inline]
    pub fn start(&self) -> &Point<C> {
        &self.start
    }
    #[inline]
    pub fn end(&self) -> &Point<C> {
        &self.end
    }
    #[inline]
    pub fn direction(&self) -> &Direction<C> {
        &self.direction
    }
    #[inline]
    pub fn weight(&self) -> Rational64 {
        self.weight
    }

    /// Left-hand normal: the direction of travel rotated by +90°.
    pub fn normal(&self) -> Direction<C> {
        self.direction.rotate_counter_clockwise()
    }

    pub fn translated(&self, offset: &Vector2<C::Number>) -> Self {
        Self {
            start: self.start.translated(offset),
            end: self.end.translated(offset),
            direction: self.direction.clone(),
            weight: self.weight,
        }
    }

    pub fn with_weight(&self, weight: Rational64) -> Self {
        Self {
            weight,
            ..self.clone()
        }
    }
}

//! Circular tracings.
//!
//! An arc is described by its center, radius and the range of *outward
//! normals* it sweeps. End points follow from `center + radius · n̂` at the
//! range extremities; tangents are the normals rotated into the direction
//! of travel (+90° counter-clockwise, −90° clockwise). A degenerate normal
//! range (`start == end`) is a full circle.

use nalgebra::Vector2;
use num_rational::Rational64;

use crate::calculator::AlgebraicNumberCalculator;
use crate::error::{GeometryError, Result};
use crate::geom::{Direction, DirectionRange, Orientation, Point};

#[derive(Clone, Debug)]
pub struct Arc<C: AlgebraicNumberCalculator> {
    center: Point<C>,
    directions: DirectionRange<C>,
    radius: C::Number,
    weight: Rational64,
    start: Point<C>,
    end: Point<C>,
}

impl<C: AlgebraicNumberCalculator> Arc<C> {
    /// Fails on a negative radius, or when the backend cannot normalize the
    /// extremity normals (`DomainError`).
    pub fn new(
        center: Point<C>,
        directions: DirectionRange<C>,
        radius: C::Number,
        weight: Rational64,
    ) -> Result<Self> {
        let calc = center.calculator();
        if calc.is_strictly_negative(&radius) {
            return Err(GeometryError::construction(format!(
                "arc radius must be non-negative, got {radius:?}"
            )));
        }
        let start = center.translated_by(directions.start(), &radius)?;
        let end = center.translated_by(directions.end(), &radius)?;
        Ok(Self {
            center,
            directions,
            radius,
            weight,
            start,
            end,
        })
    }

    #[inline]
    pub fn center(&self) -> &Point<C> {
        &self.center
    }
    #[inline]
    pub fn directions(&self) -> &DirectionRange<C> {
        &self.directions
    }
    #[inline]
    pub fn radius(&self) -> &C::Number {
        &self.radius
    }
    #[inline]
    pub fn weight(&self) -> Rational64 {
        self.weight
    }
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.directions.orientation()
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
    pub fn is_full_circle(&self) -> bool {
        self.directions.is_degenerate()
    }

    /// Direction of travel at the point with outward normal `normal`.
    pub fn tangent_at(&self, normal: &Direction<C>) -> Direction<C> {
        match self.orientation() {
            Orientation::CounterClockwise => normal.rotate_counter_clockwise(),
            Orientation::Clockwise => normal.rotate_clockwise(),
        }
    }

    pub fn start_tangent(&self) -> Direction<C> {
        self.tangent_at(self.directions.start())
    }

    pub fn end_tangent(&self) -> Direction<C> {
        self.tangent_at(self.directions.end())
    }

    pub fn translated(&self, offset: &Vector2<C::Number>) -> Self {
        Self {
            center: self.center.translated(offset),
            directions: self.directions.clone(),
            radius: self.radius.clone(),
            weight: self.weight,
            start: self.start.translated(offset),
            end: self.end.translated(offset),
        }
    }
}

//! Planar points. Coordinates live in a `Vector2<Number>`; all arithmetic
//! goes through the calculator the point was built with.

use std::fmt;

use nalgebra::Vector2;

use super::direction::Direction;
use crate::calculator::{AlgebraicNumberCalculator, DoubleCalculator};
use crate::error::Result;

/// 2D position over the calculator's number type.
#[derive(Clone)]
pub struct Point<C: AlgebraicNumberCalculator> {
    calc: C,
    coords: Vector2<C::Number>,
}

impl<C: AlgebraicNumberCalculator> Point<C> {
    #[inline]
    pub fn new(calc: C, x: C::Number, y: C::Number) -> Self {
        Self {
            calc,
            coords: Vector2::new(x, y),
        }
    }

    #[inline]
    pub fn x(&self) -> &C::Number {
        &self.coords.x
    }
    #[inline]
    pub fn y(&self) -> &C::Number {
        &self.coords.y
    }
    #[inline]
    pub fn coords(&self) -> &Vector2<C::Number> {
        &self.coords
    }
    #[inline]
    pub fn calculator(&self) -> &C {
        &self.calc
    }

    /// Componentwise sum, e.g. the sum of two arc centers.
    pub fn add(&self, other: &Point<C>) -> Point<C> {
        self.translated(&other.coords)
    }

    /// The vector `other - self`.
    pub fn vector_to(&self, other: &Point<C>) -> Vector2<C::Number> {
        let c = &self.calc;
        Vector2::new(
            c.subtract(&other.coords.x, &self.coords.x),
            c.subtract(&other.coords.y, &self.coords.y),
        )
    }

    /// Componentwise difference `self - other`.
    pub fn subtract(&self, other: &Point<C>) -> Point<C> {
        let [x, y]: [C::Number; 2] = other.vector_to(self).into();
        Point::new(self.calc.clone(), x, y)
    }

    /// `self + length · d̂`.
    pub fn translated_by(&self, direction: &Direction<C>, length: &C::Number) -> Result<Point<C>> {
        Ok(self.translated(&direction.with_length(length)?))
    }

    pub fn translated(&self, offset: &Vector2<C::Number>) -> Point<C> {
        let c = &self.calc;
        Point::new(
            c.clone(),
            c.add(&self.coords.x, &offset.x),
            c.add(&self.coords.y, &offset.y),
        )
    }
}

impl Point<DoubleCalculator> {
    #[inline]
    pub fn to_vector(&self) -> Vector2<f64> {
        self.coords
    }
}

/// Equality under the calculator's tolerance, not bitwise.
impl<C: AlgebraicNumberCalculator> PartialEq for Point<C> {
    fn eq(&self, other: &Self) -> bool {
        self.calc.are_equal(&self.coords.x, &other.coords.x)
            && self.calc.are_equal(&self.coords.y, &other.coords.y)
    }
}

impl<C: AlgebraicNumberCalculator> fmt::Debug for Point<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({:?}, {:?})", self.coords.x, self.coords.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::RationalCalculator;

    #[test]
    fn equality_uses_tolerance() {
        let calc = DoubleCalculator::new(1e-6);
        let p = Point::new(calc, 1.0, 2.0);
        let q = Point::new(calc, 1.0 + 1e-8, 2.0 - 1e-8);
        let r = Point::new(calc, 1.0, 2.1);
        assert_eq!(p, q);
        assert_ne!(p, r);
    }

    #[test]
    fn to_vector_exposes_f64_coordinates() {
        let calc = DoubleCalculator::default();
        let p = Point::new(calc, 1.5, -2.0);
        let v = p.to_vector();
        assert_eq!(v, Vector2::new(1.5, -2.0));
        assert_eq!(p.translated(&(v * 2.0)).to_vector(), Vector2::new(4.5, -6.0));
    }

    #[test]
    fn add_and_vector_to() {
        let calc = RationalCalculator::new();
        let p = Point::new(calc, calc.from_i64(1), calc.from_i64(-2));
        let q = Point::new(calc, calc.from_i64(4), calc.from_i64(2));
        let v = p.vector_to(&q);
        assert_eq!(v.x, calc.from_i64(3));
        assert_eq!(v.y, calc.from_i64(4));
        assert_eq!(p.translated(&v), q);
        let s = p.add(&q);
        assert_eq!(s, Point::new(calc, calc.from_i64(5), calc.from_i64(0)));
        assert_eq!(s.subtract(&q), p);
    }

    #[test]
    fn translated_by_walks_along_a_unit_direction() {
        let calc = RationalCalculator::new();
        let p = Point::new(calc, calc.from_i64(1), calc.from_i64(1));
        let d = Direction::new(calc, calc.from_i64(3), calc.from_i64(4)).unwrap();
        let q = p.translated_by(&d, &calc.from_i64(10)).unwrap();
        assert_eq!(q, Point::new(calc, calc.from_i64(7), calc.from_i64(9)));
        let diagonal = Direction::new(calc, calc.from_i64(1), calc.from_i64(1)).unwrap();
        assert!(p.translated_by(&diagonal, &calc.from_i64(1)).is_err());
    }
}

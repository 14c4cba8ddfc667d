//! Unit-free directions and their circular ordering.
//!
//! A `Direction` is a ray from the origin: two directions are equal iff they
//! are collinear and point the same way. The oriented cross product
//! (`determinant`) gives the rotational order of two directions; every
//! ordering decision below reduces to its sign.

use std::cmp::Ordering;
use std::fmt;

use nalgebra::Vector2;

use super::point::Point;
use super::range::DirectionRange;
use crate::calculator::{AlgebraicNumberCalculator, Sign};
use crate::error::{GeometryError, Result};

/// Rotational sense of an arc or direction range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
}

impl Orientation {
    /// `Positive` for counter-clockwise, `Negative` for clockwise.
    #[inline]
    pub fn sign(self) -> Sign {
        match self {
            Orientation::Clockwise => Sign::Negative,
            Orientation::CounterClockwise => Sign::Positive,
        }
    }

    #[inline]
    pub fn reversed(self) -> Orientation {
        match self {
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::CounterClockwise => Orientation::Clockwise,
        }
    }
}

/// +1 ⇒ counter-clockwise, -1 ⇒ clockwise.
impl TryFrom<i32> for Orientation {
    type Error = GeometryError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            1 => Ok(Orientation::CounterClockwise),
            -1 => Ok(Orientation::Clockwise),
            other => Err(GeometryError::unsupported(format!(
                "orientation code {other} (expected +1 or -1)"
            ))),
        }
    }
}

/// Non-zero direction vector with ray semantics.
#[derive(Clone)]
pub struct Direction<C: AlgebraicNumberCalculator> {
    calc: C,
    coords: Vector2<C::Number>,
}

impl<C: AlgebraicNumberCalculator> Direction<C> {
    /// Fails when both components are zero under the calculator's sign.
    pub fn new(calc: C, x: C::Number, y: C::Number) -> Result<Self> {
        if calc.is_zero(&x) && calc.is_zero(&y) {
            return Err(GeometryError::construction("direction must be non-zero"));
        }
        Ok(Self {
            calc,
            coords: Vector2::new(x, y),
        })
    }

    /// Direction of travel from `from` to `to`.
    pub fn from_points(from: &Point<C>, to: &Point<C>) -> Result<Self> {
        let [x, y]: [C::Number; 2] = from.vector_to(to).into();
        Self::new(from.calculator().clone(), x, y)
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
    pub fn calculator(&self) -> &C {
        &self.calc
    }

    fn with_coords(&self, x: C::Number, y: C::Number) -> Self {
        Self {
            calc: self.calc.clone(),
            coords: Vector2::new(x, y),
        }
    }

    /// Oriented cross product `self.x·other.y − self.y·other.x`.
    pub fn determinant(&self, other: &Direction<C>) -> C::Number {
        let c = &self.calc;
        c.subtract(
            &c.multiply(&self.coords.x, &other.coords.y),
            &c.multiply(&self.coords.y, &other.coords.x),
        )
    }

    pub fn dot(&self, other: &Direction<C>) -> C::Number {
        let c = &self.calc;
        c.add(
            &c.multiply(&self.coords.x, &other.coords.x),
            &c.multiply(&self.coords.y, &other.coords.y),
        )
    }

    pub fn opposite(&self) -> Self {
        let c = &self.calc;
        self.with_coords(c.opposite(&self.coords.x), c.opposite(&self.coords.y))
    }

    /// Rotation by +90°.
    pub fn rotate_counter_clockwise(&self) -> Self {
        self.with_coords(self.calc.opposite(&self.coords.y), self.coords.x.clone())
    }

    /// Rotation by −90°.
    pub fn rotate_clockwise(&self) -> Self {
        self.with_coords(self.coords.y.clone(), self.calc.opposite(&self.coords.x))
    }

    /// `s · self`; a negative factor flips the ray, a zero factor is rejected.
    pub fn scaled(&self, s: &C::Number) -> Result<Self> {
        let c = &self.calc;
        Self::new(
            c.clone(),
            c.multiply(&self.coords.x, s),
            c.multiply(&self.coords.y, s),
        )
    }

    /// Euclidean length of the representative vector.
    pub fn norm(&self) -> Result<C::Number> {
        Ok(self.calc.square_root(&self.dot(self))?)
    }

    /// Representative vector rescaled to `length` (unit vector for `length = 1`).
    pub fn with_length(&self, length: &C::Number) -> Result<Vector2<C::Number>> {
        let c = &self.calc;
        let factor = c.divide(length, &self.norm()?)?;
        Ok(Vector2::new(
            c.multiply(&self.coords.x, &factor),
            c.multiply(&self.coords.y, &factor),
        ))
    }

    #[inline]
    pub fn normalized(&self) -> Result<Vector2<C::Number>> {
        self.with_length(&self.calc.one())
    }

    /// Position of `self` against `other` when sweeping counter-clockwise
    /// from `reference`: `Less` if `self` is reached first.
    ///
    /// `reference` itself sits at the very beginning of the sweep.
    pub fn compare_to(&self, other: &Direction<C>, reference: &Direction<C>) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }
        if self == reference {
            return Ordering::Less;
        }
        if other == reference {
            return Ordering::Greater;
        }
        let sweep = DirectionRange::new(
            reference.clone(),
            other.clone(),
            Orientation::CounterClockwise,
        );
        if self.strictly_belongs_to(&sweep) {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }

    /// Whichever of `a`/`b` comes first counter-clockwise from `pivot` (ties pick `a`).
    pub fn first_of<'d>(
        pivot: &Direction<C>,
        a: &'d Direction<C>,
        b: &'d Direction<C>,
    ) -> &'d Direction<C> {
        match a.compare_to(b, pivot) {
            Ordering::Greater => b,
            _ => a,
        }
    }

    /// Whichever of `a`/`b` comes last counter-clockwise from `pivot` (ties pick `a`).
    pub fn last_of<'d>(
        pivot: &Direction<C>,
        a: &'d Direction<C>,
        b: &'d Direction<C>,
    ) -> &'d Direction<C> {
        match a.compare_to(b, pivot) {
            Ordering::Less => b,
            _ => a,
        }
    }

    /// Inclusive membership: range extremities always belong.
    pub fn belongs_to(&self, range: &DirectionRange<C>) -> bool {
        if self == range.start() || self == range.end() {
            return true;
        }
        self.inside(range)
    }

    /// Exclusive membership: range extremities never belong.
    pub fn strictly_belongs_to(&self, range: &DirectionRange<C>) -> bool {
        if self == range.start() || self == range.end() {
            return false;
        }
        self.inside(range)
    }

    // Interior test for a direction already known to differ from both extremities.
    // Strict inclusion in the minor arc between start and end, compared with
    // whether the range *is* the minor arc.
    fn inside(&self, range: &DirectionRange<C>) -> bool {
        let c = &self.calc;
        let (start, end) = (range.start(), range.end());
        let span = c.sign(&start.determinant(end));
        if span == Sign::Zero {
            if start == end {
                // whole circle
                return true;
            }
            // half circle: left of `start` when CCW, right of it when CW
            return c.sign(&start.determinant(self)) == range.orientation().sign();
        }
        let in_minor = c.sign(&start.determinant(self)) == span
            && c.sign(&self.determinant(end)) == span;
        in_minor == range.is_shortest_range()
    }
}

/// Ray equality: collinear and same-signed.
impl<C: AlgebraicNumberCalculator> PartialEq for Direction<C> {
    fn eq(&self, other: &Self) -> bool {
        self.calc.is_zero(&self.determinant(other))
            && self.calc.is_strictly_positive(&self.dot(other))
    }
}

impl<C: AlgebraicNumberCalculator> fmt::Debug for Direction<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Direction({:?}, {:?})", self.coords.x, self.coords.y)
    }
}

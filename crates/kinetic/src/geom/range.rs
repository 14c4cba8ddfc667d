//! Direction ranges: circular intervals of directions with a sense of traversal.
//!
//! Conventions
//! - A range sweeps from `start` to `end` in its `orientation`; both
//!   extremities belong to it.
//! - `start == end` is the whole circle anchored at `start` (a full disk
//!   when used as the normals of an arc). The range-set union reads it as a
//!   single direction instead, see `range_set`.
//! - `intersection` always answers with counter-clockwise pieces.

use std::fmt;

use super::direction::{Direction, Orientation};
use crate::calculator::{AlgebraicNumberCalculator, Sign};

#[derive(Clone)]
pub struct DirectionRange<C: AlgebraicNumberCalculator> {
    start: Direction<C>,
    end: Direction<C>,
    orientation: Orientation,
}

impl<C: AlgebraicNumberCalculator> DirectionRange<C> {
    #[inline]
    pub fn new(start: Direction<C>, end: Direction<C>, orientation: Orientation) -> Self {
        Self {
            start,
            end,
            orientation,
        }
    }

    #[inline]
    pub fn start(&self) -> &Direction<C> {
        &self.start
    }
    #[inline]
    pub fn end(&self) -> &Direction<C> {
        &self.end
    }
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    pub fn is_counter_clockwise(&self) -> bool {
        self.orientation == Orientation::CounterClockwise
    }

    /// `start == end`.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// True iff the range is the strictly shorter (< 180°) of the two arcs
    /// joining its extremities.
    pub fn is_shortest_range(&self) -> bool {
        let calc = self.start.calculator();
        let det = calc.sign(&self.start.determinant(&self.end));
        match self.orientation {
            Orientation::CounterClockwise => det == Sign::Positive,
            Orientation::Clockwise => det == Sign::Negative,
        }
    }

    /// Same set of directions, traversed the other way.
    pub fn reverse(&self) -> Self {
        Self::new(
            self.end.clone(),
            self.start.clone(),
            self.orientation.reversed(),
        )
    }

    /// Antipodal reflection: every direction `d` becomes `-d`.
    pub fn opposite(&self) -> Self {
        Self::new(self.start.opposite(), self.end.opposite(), self.orientation)
    }

    pub fn to_counter_clockwise(&self) -> Self {
        if self.is_counter_clockwise() {
            self.clone()
        } else {
            self.reverse()
        }
    }

    #[inline]
    pub fn contains(&self, direction: &Direction<C>) -> bool {
        direction.belongs_to(self)
    }

    /// Set intersection as 0, 1 or 2 disjoint counter-clockwise ranges.
    ///
    /// Pieces that shrink to a single shared direction are dropped.
    pub fn intersection(&self, other: &DirectionRange<C>) -> Vec<DirectionRange<C>> {
        let a = self.to_counter_clockwise();
        let b = other.to_counter_clockwise();
        counter_clockwise_ranges_intersection(&a, &b)
    }
}

fn ccw<C: AlgebraicNumberCalculator>(start: &Direction<C>, end: &Direction<C>) -> DirectionRange<C> {
    DirectionRange::new(start.clone(), end.clone(), Orientation::CounterClockwise)
}

/// Core intersection of two counter-clockwise ranges.
fn counter_clockwise_ranges_intersection<C: AlgebraicNumberCalculator>(
    a: &DirectionRange<C>,
    b: &DirectionRange<C>,
) -> Vec<DirectionRange<C>> {
    let (a0, a1) = (a.start(), a.end());
    let (b0, b1) = (b.start(), b.end());

    // Whole circles run from their anchor all the way round; a range that
    // straddles the anchor of a whole circle is split there.
    match (a.is_degenerate(), b.is_degenerate()) {
        (true, true) if a0 == b0 => return vec![a.clone()],
        (true, true) => return vec![ccw(a0, b0), ccw(b0, a0)],
        (true, false) if a0.strictly_belongs_to(b) => return vec![ccw(b0, a0), ccw(a0, b1)],
        (true, false) => return vec![b.clone()],
        (false, true) if b0.strictly_belongs_to(a) => return vec![ccw(a0, b0), ccw(b0, a1)],
        (false, true) => return vec![a.clone()],
        (false, false) => {}
    }

    let pieces = if b0.belongs_to(a) {
        if a0 != b0 && a0.belongs_to(b) {
            // B leaves A through its end, wraps round and re-enters through
            // A's start before it stops.
            vec![ccw(b0, a1), ccw(a0, b1)]
        } else {
            vec![ccw(b0, Direction::first_of(a0, a1, b1))]
        }
    } else if a0.belongs_to(b) {
        vec![ccw(a0, Direction::first_of(a0, a1, b1))]
    } else {
        Vec::new()
    };
    // ranges that only touch leave a single shared direction behind
    pieces.into_iter().filter(|r| !r.is_degenerate()).collect()
}

/// Equal extremities (ray equality) and equal orientation.
impl<C: AlgebraicNumberCalculator> PartialEq for DirectionRange<C> {
    fn eq(&self, other: &Self) -> bool {
        self.orientation == other.orientation && self.start == other.start && self.end == other.end
    }
}

impl<C: AlgebraicNumberCalculator> fmt::Debug for DirectionRange<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = match self.orientation {
            Orientation::CounterClockwise => "ccw",
            Orientation::Clockwise => "cw",
        };
        write!(f, "[{:?} -{}-> {:?}]", self.start, arrow, self.end)
    }
}

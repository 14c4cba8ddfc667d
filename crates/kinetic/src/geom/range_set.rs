//! Sorting and union of sets of counter-clockwise direction ranges.
//!
//! Here a degenerate range (`start == end`) is a single direction, not the
//! whole circle: it merges into a range that contains it and otherwise
//! stays a separate singleton. A union that covers every direction is
//! `RangeSet::Whole`, never a degenerate range, so results can be fed back
//! into another union.

use std::collections::VecDeque;

use super::direction::{Direction, Orientation};
use super::range::DirectionRange;
use crate::calculator::AlgebraicNumberCalculator;
use crate::error::{GeometryError, Result};

/// Outcome of merging two counter-clockwise ranges.
enum PairUnion<C: AlgebraicNumberCalculator> {
    Merged(DirectionRange<C>),
    Disjoint,
    Whole,
}

/// Result of a union: every direction, or a set of disjoint
/// counter-clockwise ranges.
#[derive(Clone, Debug)]
pub enum RangeSet<C: AlgebraicNumberCalculator> {
    /// The whole circle; `anchor` is the first sorted start of the inputs.
    Whole { anchor: Direction<C> },
    /// Disjoint ranges in sweep order; degenerate members are single
    /// directions.
    Disjoint(Vec<DirectionRange<C>>),
}

impl<C: AlgebraicNumberCalculator> RangeSet<C> {
    #[inline]
    pub fn is_whole(&self) -> bool {
        matches!(self, RangeSet::Whole { .. })
    }

    /// True only for the union of no ranges.
    pub fn is_empty(&self) -> bool {
        match self {
            RangeSet::Whole { .. } => false,
            RangeSet::Disjoint(ranges) => ranges.is_empty(),
        }
    }

    /// Number of pieces; the whole circle counts as one.
    pub fn len(&self) -> usize {
        match self {
            RangeSet::Whole { .. } => 1,
            RangeSet::Disjoint(ranges) => ranges.len(),
        }
    }

    pub fn as_disjoint(&self) -> Option<&[DirectionRange<C>]> {
        match self {
            RangeSet::Whole { .. } => None,
            RangeSet::Disjoint(ranges) => Some(ranges),
        }
    }

    pub fn contains(&self, direction: &Direction<C>) -> bool {
        match self {
            RangeSet::Whole { .. } => true,
            RangeSet::Disjoint(ranges) => ranges.iter().any(|r| direction.belongs_to(r)),
        }
    }

    /// Ranges in the convention of intersections and arcs, where the whole
    /// circle is the degenerate range at its anchor.
    ///
    /// Degenerate members of a `Disjoint` set are single directions and have
    /// no such reading; they are dropped.
    pub fn to_ranges(&self) -> Vec<DirectionRange<C>> {
        match self {
            RangeSet::Whole { anchor } => vec![ccw(anchor, anchor)],
            RangeSet::Disjoint(ranges) => ranges
                .iter()
                .filter(|r| !r.is_degenerate())
                .cloned()
                .collect(),
        }
    }

    /// Union of two sets. A whole circle absorbs anything.
    pub fn union(&self, other: &RangeSet<C>) -> Result<RangeSet<C>> {
        match (self, other) {
            (RangeSet::Whole { .. }, _) => Ok(self.clone()),
            (_, RangeSet::Whole { .. }) => Ok(other.clone()),
            (RangeSet::Disjoint(a), RangeSet::Disjoint(b)) => {
                let all: Vec<DirectionRange<C>> = a.iter().chain(b).cloned().collect();
                union(&all)
            }
        }
    }
}

impl<C: AlgebraicNumberCalculator> PartialEq for RangeSet<C> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (RangeSet::Whole { anchor: a }, RangeSet::Whole { anchor: b }) => a == b,
            (RangeSet::Disjoint(a), RangeSet::Disjoint(b)) => a == b,
            _ => false,
        }
    }
}

fn ccw<C: AlgebraicNumberCalculator>(start: &Direction<C>, end: &Direction<C>) -> DirectionRange<C> {
    DirectionRange::new(start.clone(), end.clone(), Orientation::CounterClockwise)
}

fn ensure_counter_clockwise<C: AlgebraicNumberCalculator>(ranges: &[DirectionRange<C>]) -> Result<()> {
    match ranges.iter().position(|r| !r.is_counter_clockwise()) {
        Some(i) => Err(GeometryError::unsupported(format!(
            "range {i} is clockwise; expected counter-clockwise ranges"
        ))),
        None => Ok(()),
    }
}

fn union_pair<C: AlgebraicNumberCalculator>(
    a: &DirectionRange<C>,
    b: &DirectionRange<C>,
) -> PairUnion<C> {
    let (a0, a1) = (a.start(), a.end());
    let (b0, b1) = (b.start(), b.end());
    match (a.is_degenerate(), b.is_degenerate()) {
        (true, true) if a0 == b0 => return PairUnion::Merged(a.clone()),
        (true, true) => return PairUnion::Disjoint,
        (true, false) if a0.belongs_to(b) => return PairUnion::Merged(b.clone()),
        (false, true) if b0.belongs_to(a) => return PairUnion::Merged(a.clone()),
        (true, false) | (false, true) => return PairUnion::Disjoint,
        (false, false) => {}
    }
    let b0_in_a = b0.belongs_to(a);
    let a0_in_b = a0.belongs_to(b);
    if b0_in_a && a0_in_b && a0 != b0 {
        // each range reaches the start of the other
        PairUnion::Whole
    } else if b0_in_a {
        PairUnion::Merged(ccw(a0, Direction::last_of(a0, a1, b1)))
    } else if a0_in_b {
        PairUnion::Merged(ccw(b0, Direction::last_of(b0, a1, b1)))
    } else {
        PairUnion::Disjoint
    }
}

impl<C: AlgebraicNumberCalculator> DirectionRange<C> {
    /// Pairwise union of two ranges (both read counter-clockwise): one range
    /// when they overlap or abut, both otherwise.
    pub fn union(&self, other: &DirectionRange<C>) -> RangeSet<C> {
        let a = self.to_counter_clockwise();
        let b = other.to_counter_clockwise();
        match union_pair(&a, &b) {
            PairUnion::Merged(m) => RangeSet::Disjoint(vec![m]),
            PairUnion::Disjoint => RangeSet::Disjoint(vec![a, b]),
            PairUnion::Whole => RangeSet::Whole {
                anchor: a.start().clone(),
            },
        }
    }
}

/// Order counter-clockwise ranges by the position of their start when
/// sweeping counter-clockwise from `reference`.
pub fn sort_counter_clockwise_with_respect_to<C: AlgebraicNumberCalculator>(
    ranges: &[DirectionRange<C>],
    reference: &Direction<C>,
) -> Result<Vec<DirectionRange<C>>> {
    ensure_counter_clockwise(ranges)?;
    let mut sorted = ranges.to_vec();
    sorted.sort_by(|a, b| a.start().compare_to(b.start(), reference));
    Ok(sorted)
}

/// Union of counter-clockwise ranges as a minimal set of disjoint ranges,
/// or the whole circle.
///
/// Single sweep over the ranges sorted by start; the last staged range may
/// wrap round and swallow ranges flushed at the front, which a final
/// backward pass merges.
pub fn union<C: AlgebraicNumberCalculator>(ranges: &[DirectionRange<C>]) -> Result<RangeSet<C>> {
    ensure_counter_clockwise(ranges)?;
    let Some(first) = ranges.first() else {
        return Ok(RangeSet::Disjoint(Vec::new()));
    };
    let anchor = first.start().clone();
    let sorted = sort_counter_clockwise_with_respect_to(ranges, &anchor)?;
    let whole = || RangeSet::Whole {
        anchor: sorted[0].start().clone(),
    };

    let mut queue: VecDeque<DirectionRange<C>> = VecDeque::with_capacity(sorted.len());
    let mut staging = sorted[0].clone();
    for range in &sorted[1..] {
        match union_pair(&staging, range) {
            PairUnion::Merged(m) => staging = m,
            PairUnion::Disjoint => {
                queue.push_back(staging);
                staging = range.clone();
            }
            PairUnion::Whole => return Ok(whole()),
        }
    }
    while let Some(front) = queue.front() {
        match union_pair(&staging, front) {
            PairUnion::Merged(m) => {
                staging = m;
                queue.pop_front();
            }
            PairUnion::Disjoint => break,
            PairUnion::Whole => return Ok(whole()),
        }
    }
    queue.push_back(staging);
    Ok(RangeSet::Disjoint(queue.into_iter().collect()))
}

//! Shape builders shared by the unit tests.

use num_rational::Rational64;

use crate::boundary::{Arc, Segment, Shape, Tracing};
use crate::calculator::{AlgebraicNumberCalculator, DoubleCalculator};
use crate::geom::{Direction, DirectionRange, Orientation, Point};

pub(crate) fn point<C: AlgebraicNumberCalculator>(calc: &C, x: i64, y: i64) -> Point<C> {
    Point::new(calc.clone(), calc.from_i64(x), calc.from_i64(y))
}

pub(crate) fn direction<C: AlgebraicNumberCalculator>(calc: &C, x: i64, y: i64) -> Direction<C> {
    Direction::new(calc.clone(), calc.from_i64(x), calc.from_i64(y)).unwrap()
}

pub(crate) fn ccw_range<C: AlgebraicNumberCalculator>(
    calc: &C,
    from: (i64, i64),
    to: (i64, i64),
) -> DirectionRange<C> {
    DirectionRange::new(
        direction(calc, from.0, from.1),
        direction(calc, to.0, to.1),
        Orientation::CounterClockwise,
    )
}

pub(crate) fn segment<C: AlgebraicNumberCalculator>(
    calc: &C,
    from: (i64, i64),
    to: (i64, i64),
) -> Tracing<C> {
    Segment::new(point(calc, from.0, from.1), point(calc, to.0, to.1), Rational64::from_integer(1))
        .unwrap()
        .into()
}

pub(crate) fn quarter<C: AlgebraicNumberCalculator>(
    calc: &C,
    center: (i64, i64),
    from: (i64, i64),
    to: (i64, i64),
    radius: i64,
) -> Tracing<C> {
    Arc::new(
        point(calc, center.0, center.1),
        ccw_range(calc, from, to),
        calc.from_i64(radius),
        Rational64::from_integer(1),
    )
    .unwrap()
    .into()
}

/// Square `[0, side]²` grown by `radius`: four edges joined by quarter arcs.
pub(crate) fn rounded_square_tracings<C: AlgebraicNumberCalculator>(
    calc: &C,
    side: i64,
    radius: i64,
) -> Vec<Tracing<C>> {
    let (l, r) = (side, radius);
    vec![
        segment(calc, (0, -r), (l, -r)),
        quarter(calc, (l, 0), (0, -1), (1, 0), r),
        segment(calc, (l + r, 0), (l + r, l)),
        quarter(calc, (l, l), (1, 0), (0, 1), r),
        segment(calc, (l, l + r), (0, l + r)),
        quarter(calc, (0, l), (0, 1), (-1, 0), r),
        segment(calc, (-r, l), (-r, 0)),
        quarter(calc, (0, 0), (-1, 0), (0, -1), r),
    ]
}

pub(crate) fn rounded_square<C: AlgebraicNumberCalculator>(calc: &C, side: i64, radius: i64) -> Shape<C> {
    Shape::new(rounded_square_tracings(calc, side, radius)).unwrap()
}

/// Full counter-clockwise circle anchored at normal `(1, 0)`.
pub(crate) fn disk<C: AlgebraicNumberCalculator>(calc: &C, center: (i64, i64), radius: i64) -> Tracing<C> {
    quarter(calc, center, (1, 0), (1, 0), radius)
}

/// Closed path along the segment `(0,0) -> (1,2)` and back, joined by two
/// zero-radius half-turns.
pub(crate) fn there_and_back(calc: &DoubleCalculator) -> Shape<DoubleCalculator> {
    Shape::new(vec![
        segment(calc, (0, 0), (1, 2)),
        quarter(calc, (1, 2), (2, -1), (-2, 1), 0),
        segment(calc, (1, 2), (0, 0)),
        quarter(calc, (0, 0), (-2, 1), (2, -1), 0),
    ])
    .unwrap()
}

//! Planar geometry over an algebraic number calculator.
//!
//! - `Point`: positions, equality through the calculator.
//! - `Direction`: rays with determinant-based circular ordering.
//! - `DirectionRange`: circular intervals of directions; membership and
//!   intersection.
//! - `range_set`: sorting and union of counter-clockwise range sets.

mod direction;
mod point;
mod range;
pub mod range_set;

pub use direction::{Direction, Orientation};
pub use point::Point;
pub use range::DirectionRange;
pub use range_set::{sort_counter_clockwise_with_respect_to, union, RangeSet};

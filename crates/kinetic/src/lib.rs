//! Kinetic convolution of planar shapes bounded by arcs and segments.
//!
//! Layers, bottom-up:
//! - `calculator`: number backends (`DoubleCalculator`, `RationalCalculator`)
//!   behind one trait; every geometric predicate is a sign decision.
//! - `geom`: points, directions, direction ranges and range sets.
//! - `boundary`: weighted tracings (`Arc`, `Segment`) and validated shapes.
//! - `convolution`: the factory that builds geometry and convolves shapes.

pub mod boundary;
pub mod calculator;
pub mod convolution;
pub mod error;
pub mod geom;

#[cfg(test)]
mod test_support;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{GeometryError, Result};

/// Common exports for callers building and convolving shapes.
pub mod prelude {
    pub use crate::boundary::{Arc, Segment, Shape, Tracing, TracingKind};
    pub use crate::calculator::{
        AlgebraicNumberCalculator, DoubleCalculator, FloatCalculator, RationalCalculator, Sign,
    };
    pub use crate::convolution::{Convolution, ConvolutionFactory, ConvolvedTracing};
    pub use crate::error::{DomainError, GeometryError, ShapeValidationError};
    pub use crate::geom::{Direction, DirectionRange, Orientation, Point, RangeSet};
    pub use num_rational::Rational64;
}

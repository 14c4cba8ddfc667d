//! Error taxonomy shared by calculators, geometry constructors and the
//! convolution factory.
//!
//! Every failure is raised at the smallest constructor that can detect it:
//! numeric domain errors from calculators, construction errors from points,
//! directions and tracings, and continuity errors from `create_shape`.

use std::fmt;

use thiserror::Error;

/// Numeric operation undefined for the calculator backend.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("inverse of zero is undefined")]
    ZeroInverse,
    #[error("square root of a negative number is undefined")]
    NegativeSquareRoot,
    /// The exact result exists but the backend cannot represent it
    /// (e.g. `sqrt(2)` over the rationals).
    #[error("square root of {value} is not representable by this backend")]
    Unrepresentable { value: String },
}

/// Which continuity check failed between two consecutive tracings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiscontinuityKind {
    /// G0: the end point of one tracing differs from the start of the next.
    Position,
    /// G1: the end tangent of one tracing differs from the start tangent of the next.
    Tangent,
}

/// One failed continuity check, `index -> next` in cyclic order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Discontinuity {
    pub kind: DiscontinuityKind,
    pub index: usize,
    pub next: usize,
}

impl fmt::Display for Discontinuity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiscontinuityKind::Position => write!(
                f,
                "tracing {} does not end where tracing {} starts",
                self.index, self.next
            ),
            DiscontinuityKind::Tangent => write!(
                f,
                "end tangent of tracing {} differs from start tangent of tracing {}",
                self.index, self.next
            ),
        }
    }
}

/// A tracing sequence rejected by `create_shape`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("shape is not continuous: {}", join(.discontinuities))]
pub struct ShapeValidationError {
    pub discontinuities: Vec<Discontinuity>,
}

impl ShapeValidationError {
    /// Index pairs `(index, next)` of every reported discontinuity.
    pub fn positions(&self) -> Vec<(usize, usize)> {
        self.discontinuities
            .iter()
            .map(|d| (d.index, d.next))
            .collect()
    }
}

fn join(discontinuities: &[Discontinuity]) -> String {
    discontinuities
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Top-level error of the crate.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    /// Invalid argument to a constructor (zero direction, coincident
    /// segment endpoints, negative radius, empty shape).
    #[error("invalid construction: {0}")]
    Construction(String),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    ShapeValidation(#[from] ShapeValidationError),
    #[error("unsupported operation: {0}")]
    Unsupported(String),
}

impl GeometryError {
    pub(crate) fn construction(reason: impl Into<String>) -> Self {
        Self::Construction(reason.into())
    }

    pub(crate) fn unsupported(reason: impl Into<String>) -> Self {
        Self::Unsupported(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, GeometryError>;

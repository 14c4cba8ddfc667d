//! Kinetic convolution of shapes.
//!
//! Purpose
//! - Pair every tracing of one shape with every tracing of another and keep
//!   the pieces where their normal ranges meet. The weighted union of the
//!   pieces is the boundary of the Minkowski sum.
//!
//! Rules (see `rules.rs`)
//! - arc ⊛ arc: overlap of normal ranges, radii add or subtract by
//!   orientation, centers add.
//! - arc ⊛ segment: the segment translated onto the arc point with matching
//!   normal; half weight at a range extremity.
//! - segment ⊛ segment: nothing.
//!
//! Results keep references to their parents in the input shapes; a
//! `Convolution` borrows both shapes for its lifetime.

mod factory;
mod rules;
mod types;

pub use factory::ConvolutionFactory;
pub use types::{Convolution, ConvolvedTracing};

use crate::boundary::{Shape, Tracing};
use crate::calculator::AlgebraicNumberCalculator;

/// One piece of a convolution, with the two tracings it came from.
///
/// The parents borrow from the input shapes; `parent1` belongs to the first
/// argument of the convolution call, `parent2` to the second.
#[derive(Clone, Debug)]
pub struct ConvolvedTracing<'a, C: AlgebraicNumberCalculator> {
    pub convolution: Tracing<C>,
    pub parent1: &'a Tracing<C>,
    pub parent2: &'a Tracing<C>,
}

/// Result of convolving two shapes: the row-major list of convolved tracings
/// (`shape1` outer, `shape2` inner) and the inputs they reference.
#[derive(Clone, Debug)]
pub struct Convolution<'a, C: AlgebraicNumberCalculator> {
    shape1: &'a Shape<C>,
    shape2: &'a Shape<C>,
    convolved_tracings: Vec<ConvolvedTracing<'a, C>>,
}

impl<'a, C: AlgebraicNumberCalculator> Convolution<'a, C> {
    pub(crate) fn new(
        shape1: &'a Shape<C>,
        shape2: &'a Shape<C>,
        convolved_tracings: Vec<ConvolvedTracing<'a, C>>,
    ) -> Self {
        Self {
            shape1,
            shape2,
            convolved_tracings,
        }
    }

    #[inline]
    pub fn shape1(&self) -> &'a Shape<C> {
        self.shape1
    }
    #[inline]
    pub fn shape2(&self) -> &'a Shape<C> {
        self.shape2
    }
    #[inline]
    pub fn convolved_tracings(&self) -> &[ConvolvedTracing<'a, C>] {
        &self.convolved_tracings
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.convolved_tracings.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.convolved_tracings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConvolvedTracing<'a, C>> {
        self.convolved_tracings.iter()
    }

    /// Sum of the weights of every convolved tracing.
    pub fn total_weight(&self) -> num_rational::Rational64 {
        self.iter().map(|t| t.convolution.weight()).sum()
    }
}

impl<'s, 'a, C: AlgebraicNumberCalculator> IntoIterator for &'s Convolution<'a, C> {
    type Item = &'s ConvolvedTracing<'a, C>;
    type IntoIter = std::slice::Iter<'s, ConvolvedTracing<'a, C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

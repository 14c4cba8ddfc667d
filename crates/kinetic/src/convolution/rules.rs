//! Pairwise convolution rules.
//!
//! Each rule returns the convolved tracings only; the factory attaches the
//! parents. Output arcs are always counter-clockwise: the orientation of the
//! inputs survives only through the sign of the result weight.

use num_rational::Rational64;

use crate::boundary::{Arc, Segment};
use crate::calculator::AlgebraicNumberCalculator;
use crate::error::Result;
use crate::geom::Orientation;

fn orientation_factor(orientation: Orientation) -> Rational64 {
    Rational64::from_integer(orientation.sign().as_i8() as i64)
}

/// Arc ⊛ arc: one arc per piece of the overlap of their normal ranges.
///
/// - Same orientation: overlap of the two ranges, radii add, weight
///   `±w1·w2` (+ for counter-clockwise).
/// - Opposite orientations: `arc2` meets `arc1` with antipodal normals, so the
///   overlap is taken against `arc2`'s reflected range and the radii
///   subtract. A negative difference reflects the piece back and keeps the
///   radius non-negative. The weight is `+w1·w2` only for clockwise ⊛
///   counter-clockwise.
pub(crate) fn convolve_arcs<C: AlgebraicNumberCalculator>(
    arc1: &Arc<C>,
    arc2: &Arc<C>,
) -> Result<Vec<Arc<C>>> {
    let calc = arc1.center().calculator();
    let center = arc1.center().add(arc2.center());
    let w = arc1.weight() * arc2.weight();

    if arc1.orientation() == arc2.orientation() {
        let radius = calc.add(arc1.radius(), arc2.radius());
        let weight = orientation_factor(arc1.orientation()) * w;
        return arc1
            .directions()
            .intersection(arc2.directions())
            .into_iter()
            .map(|piece| Arc::new(center.clone(), piece, radius.clone(), weight))
            .collect();
    }

    let difference = calc.subtract(arc1.radius(), arc2.radius());
    let flipped = calc.is_strictly_negative(&difference);
    let radius = calc.absolute(&difference);
    let weight = match (arc1.orientation(), arc2.orientation()) {
        (Orientation::Clockwise, Orientation::CounterClockwise) => w,
        _ => -w,
    };
    arc1.directions()
        .intersection(&arc2.directions().opposite())
        .into_iter()
        .map(|piece| {
            let piece = if flipped { piece.opposite() } else { piece };
            Arc::new(center.clone(), piece, radius.clone(), weight)
        })
        .collect()
}

/// Arc ⊛ segment: the segment translated to the point of the arc whose normal
/// matches the segment's, or nothing when the arc never reaches that normal.
///
/// Contact at exactly one extremity of the arc's range counts for half.
pub(crate) fn convolve_arc_and_segment<C: AlgebraicNumberCalculator>(
    arc: &Arc<C>,
    segment: &Segment<C>,
) -> Result<Option<Segment<C>>> {
    let normal = match arc.orientation() {
        Orientation::CounterClockwise => segment.normal().opposite(),
        Orientation::Clockwise => segment.normal(),
    };
    let range = arc.directions();
    if !range.contains(&normal) {
        return Ok(None);
    }
    let mut weight = orientation_factor(arc.orientation()) * arc.weight() * segment.weight();
    if (&normal == range.start()) != (&normal == range.end()) {
        weight /= 2;
    }
    let anchor = arc.center().translated_by(&normal, arc.radius())?;
    let translated = segment.translated(anchor.coords());
    Ok(Some(translated.with_weight(weight)))
}

//! Offset-to-transform mapping
//!
//! Both functions are pure in `(index, offset, metrics)`. The card arc is
//! clamped outside its domain; the backdrop reveal is not, so it keeps
//! growing (or turns negative) past its domain edges.

use super::interpolate::{Extrapolate, Interpolation};
use super::metrics::CarouselMetrics;

/// Vertical translation of a card at rest
pub const ARC_REST: f64 = 100.0;
/// Vertical translation of the centered card
pub const ARC_CENTER: f64 = 50.0;

/// Vertical translation of the card at display `index`
///
/// Maps `[(i-2)·ITEM, (i-1)·ITEM, i·ITEM]` to `[100, 50, 100]`, clamped.
pub fn arc_translate_y(index: usize, offset: f64, metrics: &CarouselMetrics) -> f64 {
    let i = index as f64;
    let item = metrics.item_size;
    Interpolation::new(
        vec![(i - 2.0) * item, (i - 1.0) * item, i * item],
        vec![ARC_REST, ARC_CENTER, ARC_REST],
        Extrapolate::Clamp,
    )
    .map(|arc| arc.map(offset))
    .unwrap_or(ARC_REST)
}

/// Revealed width of the backdrop at display `index`
///
/// Maps `[(i-2)·ITEM, (i-1)·ITEM]` to `[0, viewport_width]`, unclamped.
pub fn backdrop_reveal_width(index: usize, offset: f64, metrics: &CarouselMetrics) -> f64 {
    let i = index as f64;
    let item = metrics.item_size;
    Interpolation::new(
        vec![(i - 2.0) * item, (i - 1.0) * item],
        vec![0.0, metrics.viewport_width],
        Extrapolate::Extend,
    )
    .map(|reveal| reveal.map(offset))
    .unwrap_or(0.0)
}

/// How far a card has risen toward the center, from 0.0 (rest) to 1.0
pub fn arc_lift(translate_y: f64) -> f64 {
    ((ARC_REST - translate_y) / (ARC_REST - ARC_CENTER)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> CarouselMetrics {
        CarouselMetrics::new(100.0, 40.0, 0.72, 0.65)
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_arc_rest_before_domain() {
        let m = metrics();
        for i in 1..8 {
            let start = (i as f64 - 2.0) * m.item_size;
            for o in [start, start - 1.0, start - 500.0] {
                assert!(approx(arc_translate_y(i, o, &m), 100.0), "i={i} o={o}");
            }
        }
    }

    #[test]
    fn test_arc_rest_after_domain() {
        let m = metrics();
        for i in 1..8 {
            let end = i as f64 * m.item_size;
            for o in [end, end + 1.0, end + 500.0] {
                assert!(approx(arc_translate_y(i, o, &m), 100.0), "i={i} o={o}");
            }
        }
    }

    #[test]
    fn test_arc_minimum_when_centered() {
        let m = metrics();
        for i in 1..8 {
            let o = (i as f64 - 1.0) * m.item_size;
            assert!(approx(arc_translate_y(i, o, &m), 50.0));
        }
    }

    #[test]
    fn test_arc_halfway() {
        let m = metrics();
        let o = 1.5 * m.item_size;
        assert!(approx(arc_translate_y(2, o, &m), 75.0));
        assert!(approx(arc_translate_y(3, o, &m), 75.0));
    }

    #[test]
    fn test_jump_to_two_items() {
        let m = metrics();
        let o = 2.0 * m.item_size;
        assert!(approx(arc_translate_y(3, o, &m), 50.0));
        assert!(approx(arc_translate_y(1, o, &m), 100.0));
        assert!(approx(arc_translate_y(5, o, &m), 100.0));
    }

    #[test]
    fn test_reveal_domain_edges_and_linearity() {
        let m = metrics();
        for i in 1..6 {
            let start = (i as f64 - 2.0) * m.item_size;
            let end = (i as f64 - 1.0) * m.item_size;
            assert!(approx(backdrop_reveal_width(i, start, &m), 0.0));
            assert!(approx(backdrop_reveal_width(i, end, &m), m.viewport_width));
            let quarter = start + 0.25 * m.item_size;
            assert!(approx(backdrop_reveal_width(i, quarter, &m), 0.25 * m.viewport_width));
        }
    }

    #[test]
    fn test_reveal_is_unclamped() {
        let m = metrics();
        let before = backdrop_reveal_width(3, 0.0, &m);
        assert!(approx(before, -m.viewport_width));
        let after = backdrop_reveal_width(1, m.item_size, &m);
        assert!(approx(after, 2.0 * m.viewport_width));
    }

    #[test]
    fn test_degenerate_viewport_is_at_rest() {
        let m = CarouselMetrics::new(0.0, 0.0, 0.72, 0.65);
        assert!(approx(arc_translate_y(2, 0.0, &m), 100.0));
        assert!(approx(backdrop_reveal_width(2, 0.0, &m), 0.0));
    }

    #[test]
    fn test_arc_lift() {
        assert!(approx(arc_lift(100.0), 0.0));
        assert!(approx(arc_lift(75.0), 0.5));
        assert!(approx(arc_lift(50.0), 1.0));
    }
}

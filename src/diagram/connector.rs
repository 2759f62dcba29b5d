//! Directed connectors between shapes.
//!
//! [`connect_lr`] joins two boxes in a left-to-right flow. [`elbow_feedback`]
//! routes a loop back over intervening shapes through a horizontal lane:
//!
//! ```text
//!   via_y  +-----------<-----------+
//!          |                       |
//!          v                       ^
//!       [ to ]   [ ... ]   [ ... ] [ from ]
//! ```
//!
//! Every connector is drawn onto the slide immediately; the returned
//! [`Connector`] records what was drawn.

use crate::common::RGBColor;
use crate::common::unit::pt;
use crate::diagram::geometry::{Bounds, Point};
use crate::ooxml::pptx::format::{ArrowheadStyle, DashStyle, LineFormat};
use crate::ooxml::pptx::writer::MutableSlide;
use tracing::trace;

/// Gray used for arrows and labels.
pub const ARROW_GRAY: RGBColor = RGBColor::new(90, 90, 90);

/// Stroke of a directed connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrowStyle {
    /// Line width in EMUs
    pub width: i64,
    pub color: RGBColor,
    pub dash: DashStyle,
    /// Decoration at the end point
    pub arrowhead: ArrowheadStyle,
}

impl Default for ArrowStyle {
    /// 2 pt solid gray line ending in a triangle.
    fn default() -> Self {
        Self {
            width: pt(2.0),
            color: ARROW_GRAY,
            dash: DashStyle::Solid,
            arrowhead: ArrowheadStyle::Triangle,
        }
    }
}

impl ArrowStyle {
    /// Same style with a dashed line.
    pub fn dashed(self) -> Self {
        Self {
            dash: DashStyle::Dash,
            ..self
        }
    }

    /// Same style with no arrowhead.
    pub fn plain(self) -> Self {
        Self {
            arrowhead: ArrowheadStyle::None,
            ..self
        }
    }

    pub fn line_format(&self) -> LineFormat {
        LineFormat {
            color: Some(self.color),
            width: Some(self.width),
            dash: self.dash,
            head_end: ArrowheadStyle::None,
            tail_end: self.arrowhead,
        }
    }
}

/// A straight connector drawn on a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connector {
    pub begin: Point,
    pub end: Point,
    pub style: ArrowStyle,
}

/// Which segments of an elbow path carry an arrowhead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElbowArrowheads {
    /// Every segment ends in an arrowhead
    #[default]
    EverySegment,
    /// Only the segment entering the destination does
    TerminalOnly,
}

/// Draw a straight connector from `from` to `to`.
pub fn add_arrow(slide: &mut MutableSlide, from: Point, to: Point, style: &ArrowStyle) -> Connector {
    slide.add_connector(from, to).line(style.line_format());
    trace!(?from, ?to, dash = ?style.dash, "connector drawn");
    Connector {
        begin: from,
        end: to,
        style: *style,
    }
}

/// Draw a connector from the right-mid anchor of `left` to the left-mid
/// anchor of `right`.
pub fn connect_lr(
    slide: &mut MutableSlide,
    left: &Bounds,
    right: &Bounds,
    style: &ArrowStyle,
) -> Connector {
    add_arrow(slide, left.right_mid(), right.left_mid(), style)
}

/// Draw a three-segment feedback path from the top of `from` to the top of
/// `to` through the horizontal lane at `via_y`.
///
/// Segments, in order: up from `from`'s top-center to `via_y`; across to
/// `to`'s center x; down to `to`'s top-center. `via_y` is expected to lie
/// above both shapes; it is not checked.
pub fn elbow_feedback(
    slide: &mut MutableSlide,
    from: &Bounds,
    to: &Bounds,
    via_y: i64,
    style: &ArrowStyle,
    arrowheads: ElbowArrowheads,
) -> [Connector; 3] {
    let inner = match arrowheads {
        ElbowArrowheads::EverySegment => *style,
        ElbowArrowheads::TerminalOnly => style.plain(),
    };

    let x_up = from.center_x();
    let x_to = to.center_x();

    [
        add_arrow(slide, Point::new(x_up, from.top), Point::new(x_up, via_y), &inner),
        add_arrow(slide, Point::new(x_up, via_y), Point::new(x_to, via_y), &inner),
        add_arrow(slide, Point::new(x_to, via_y), Point::new(x_to, to.top), style),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::{MutablePresentation, SlideLayout};
    use proptest::prelude::*;

    fn with_slide<T>(f: impl FnOnce(&mut MutableSlide) -> T) -> T {
        let mut pres = MutablePresentation::new();
        let slide = pres.add_slide(SlideLayout::Blank).unwrap();
        f(slide)
    }

    #[test]
    fn test_default_style() {
        let line = ArrowStyle::default().line_format();
        assert_eq!(line.width, Some(25_400));
        assert_eq!(line.color, Some(RGBColor::new(90, 90, 90)));
        assert_eq!(line.dash, DashStyle::Solid);
        assert_eq!(line.tail_end, ArrowheadStyle::Triangle);
        assert_eq!(ArrowStyle::default().dashed().dash, DashStyle::Dash);
    }

    #[test]
    fn test_arrow_is_added_to_slide() {
        with_slide(|slide| {
            let c = add_arrow(slide, Point::new(1, 2), Point::new(3, 4), &ArrowStyle::default().dashed());
            assert_eq!(slide.shape_count(), 1);

            let shape = &slide.shapes()[0];
            assert_eq!(shape.endpoints(), Some((c.begin, c.end)));
            assert_eq!(shape.line_format().map(|l| l.dash), Some(DashStyle::Dash));
        });
    }

    #[test]
    fn test_terminal_only_arrowheads() {
        with_slide(|slide| {
            let from = Bounds::new(800, 500, 200, 100);
            let to = Bounds::new(0, 500, 200, 100);
            let segs = elbow_feedback(
                slide,
                &from,
                &to,
                100,
                &ArrowStyle::default(),
                ElbowArrowheads::TerminalOnly,
            );

            let heads: Vec<_> = segs.iter().map(|c| c.style.arrowhead).collect();
            assert_eq!(
                heads,
                [ArrowheadStyle::None, ArrowheadStyle::None, ArrowheadStyle::Triangle]
            );
        });
    }

    #[test]
    fn test_every_segment_arrowheads() {
        with_slide(|slide| {
            let b = Bounds::new(0, 500, 200, 100);
            let segs = elbow_feedback(slide, &b, &b, 100, &ArrowStyle::default(), ElbowArrowheads::default());
            assert!(segs.iter().all(|c| c.style.arrowhead == ArrowheadStyle::Triangle));
            assert_eq!(slide.shape_count(), 3);
        });
    }

    fn any_bounds() -> impl Strategy<Value = Bounds> {
        (0i64..12_000_000, 0i64..6_000_000, 1i64..3_000_000, 1i64..2_000_000)
            .prop_map(|(l, t, w, h)| Bounds::new(l, t, w, h))
    }

    proptest! {
        #[test]
        fn prop_connect_lr_uses_side_anchors(a in any_bounds(), b in any_bounds()) {
            let c = with_slide(|slide| connect_lr(slide, &a, &b, &ArrowStyle::default()));
            prop_assert_eq!(c.begin, a.right_mid());
            prop_assert_eq!(c.end, b.left_mid());
        }

        #[test]
        fn prop_elbow_path_shape(s in any_bounds(), d in any_bounds(), via_y in 0i64..6_000_000) {
            let segs = with_slide(|slide| {
                elbow_feedback(slide, &s, &d, via_y, &ArrowStyle::default(), ElbowArrowheads::EverySegment)
            });
            prop_assert_eq!(segs.len(), 3);

            prop_assert_eq!(segs[0].begin, s.top_center());
            prop_assert_eq!(segs[0].end.x, s.center_x());
            prop_assert_eq!(segs[1].begin.x, s.center_x());

            prop_assert_eq!(segs[1].end.x, d.center_x());
            prop_assert_eq!(segs[2].begin.x, d.center_x());
            prop_assert_eq!(segs[2].end, d.top_center());

            prop_assert_eq!(segs[1].begin.y, via_y);
            prop_assert_eq!(segs[1].end.y, via_y);
            prop_assert_eq!(segs[0].end.y, via_y);
            prop_assert_eq!(segs[2].begin.y, via_y);
        }
    }
}

//! Hybrid models deck: two 4:3 slides of data-driven learning loops.
//!
//! Slide 1 is a single macroscale loop. Slide 2 stacks a macroscale loop over
//! a mesoscale loop and links them with a solid and a dashed connector.

use crate::common::RGBColor;
use crate::common::unit::{inches, pt};
use crate::diagram::connector::{
    add_arrow, connect_lr, elbow_feedback, ArrowStyle, Connector, ElbowArrowheads, ARROW_GRAY,
};
use crate::diagram::geometry::Bounds;
use crate::ooxml::error::Result;
use crate::ooxml::pptx::{
    MutablePresentation, MutableShape, MutableSlide, PresetGeometry, SlideLayout, TextAlign,
};
use std::path::Path;

/// Where the deck is written when no path is given.
pub const DEFAULT_OUTPUT: &str = "hybrid_models.pptx";

pub const MACROSCALE_TITLE: &str = "Pure Data-Driven Approach: Macroscale (Horizontal)";
pub const HYBRID_TITLE: &str = "Hybrid Model: Macro (Top) → Meso (Bottom), Both Horizontal";

const TITLE_FONT_SIZE: f64 = 24.0;
const BOX_FONT_SIZE: f64 = 16.0;
const LABEL_FONT_SIZE: f64 = 12.0;
const CAPTION_FONT_SIZE: f64 = 14.0;

const LAVENDER: RGBColor = RGBColor::new(235, 232, 255);
const BORDER: RGBColor = RGBColor::new(140, 114, 219);
const PALE_YELLOW: RGBColor = RGBColor::new(255, 252, 220);
const BOX_TEXT: RGBColor = RGBColor::new(20, 20, 20);

/// Feedback loops keep an arrowhead on every leg.
const FEEDBACK_ARROWHEADS: ElbowArrowheads = ElbowArrowheads::EverySegment;

/// Build the deck in memory.
pub fn build() -> Result<MutablePresentation> {
    let mut pres = MutablePresentation::new();
    pres.set_slide_width(inches(10.0));
    pres.set_slide_height(inches(7.5));
    pres.set_title(HYBRID_TITLE);

    macroscale_slide(pres.add_slide(SlideLayout::TitleOnly)?);
    hybrid_slide(pres.add_slide(SlideLayout::TitleOnly)?);

    Ok(pres)
}

/// Build the deck and write it to `output`. Returns the slide count.
pub fn run(output: &Path) -> Result<usize> {
    let pres = build()?;
    super::save_deck(&pres, output)
}

/// Fill the title placeholder, or add a title text box if the layout has none.
fn add_title(slide: &mut MutableSlide, text: &str) {
    match slide.title_mut() {
        Some(title) => {
            title
                .set_text(text)
                .font_size(TITLE_FONT_SIZE)
                .bold(true);
        },
        None => {
            let bounds = Bounds::new(inches(0.5), inches(0.2), inches(9.0), inches(0.6));
            slide
                .add_text_box(bounds, text)
                .font_size(TITLE_FONT_SIZE)
                .bold(true);
        },
    }
}

/// Shadowless backdrop grouping one loop, with an optional caption above it.
fn add_panel(slide: &mut MutableSlide, bounds: Bounds, caption: Option<&str>) -> Bounds {
    slide
        .add_auto_shape(PresetGeometry::Rectangle, bounds)
        .fill(PALE_YELLOW)
        .outline(BORDER, pt(1.25))
        .no_shadow();

    if let Some(caption) = caption {
        let cap = Bounds::new(
            bounds.left + inches(0.25),
            bounds.top - inches(0.35),
            inches(5.0),
            inches(0.3),
        );
        slide
            .add_text_box(cap, caption)
            .font_size(CAPTION_FONT_SIZE)
            .bold(true)
            .color(ARROW_GRAY);
    }

    bounds
}

fn add_box(slide: &mut MutableSlide, bounds: Bounds, text: &str) -> Bounds {
    add_node(slide, PresetGeometry::RoundedRectangle, bounds, text)
        .bold(false);
    bounds
}

fn add_diamond(slide: &mut MutableSlide, bounds: Bounds, text: &str) -> Bounds {
    add_node(slide, PresetGeometry::Diamond, bounds, text);
    bounds
}

fn add_node<'a>(
    slide: &'a mut MutableSlide,
    geometry: PresetGeometry,
    bounds: Bounds,
    text: &str,
) -> &'a mut MutableShape {
    slide
        .add_auto_shape(geometry, bounds)
        .fill(LAVENDER)
        .outline(BORDER, pt(1.25))
        .text(text)
        .align(TextAlign::Center)
        .font_size(BOX_FONT_SIZE)
        .color(BOX_TEXT)
}

fn add_label(slide: &mut MutableSlide, bounds: Bounds, text: &str) {
    slide
        .add_text_box(bounds, text)
        .font_size(LABEL_FONT_SIZE)
        .color(ARROW_GRAY);
}

fn macroscale_slide(slide: &mut MutableSlide) {
    let arrow = ArrowStyle::default();

    add_title(slide, MACROSCALE_TITLE);
    add_panel(
        slide,
        Bounds::new(inches(0.25), inches(0.9), inches(9.5), inches(5.8)),
        None,
    );

    let y = inches(3.1);
    let (box_w, box_h, gap) = (inches(2.0), inches(1.0), inches(0.35));
    let mut x = inches(0.4);

    let exp = add_box(slide, Bounds::new(x, y, box_w, box_h), "Macroscale Experiments");
    x += box_w + gap;
    let data = add_box(slide, Bounds::new(x, y, box_w, box_h), "Macro Experimental Data");
    x += box_w + gap;
    let core = add_box(
        slide,
        Bounds::new(x, y, box_w, box_h),
        "AI Learning Core\nSINDy / Bayesian\nCalibration",
    );
    x += box_w + gap;
    let validated = add_box(slide, Bounds::new(x, y, box_w, box_h), "Validated Predictive Model");
    x += box_w + gap;
    let oed = add_diamond(
        slide,
        Bounds::new(x, y - inches(0.1), inches(1.6), inches(1.6)),
        "Design of New\nExperiments",
    );

    connect_lr(slide, &exp, &data, &arrow);
    connect_lr(slide, &data, &core, &arrow);
    connect_lr(slide, &core, &validated, &arrow);
    add_arrow(slide, validated.right_mid(), oed.left_mid(), &arrow);

    elbow_feedback(slide, &oed, &exp, inches(1.4), &arrow, FEEDBACK_ARROWHEADS);
}

fn hybrid_slide(slide: &mut MutableSlide) {
    let arrow = ArrowStyle::default();

    add_title(slide, HYBRID_TITLE);

    let macro_panel = add_panel(
        slide,
        Bounds::new(inches(0.3), inches(1.0), inches(6.8), inches(3.0)),
        Some("Macroscale Learning Loop"),
    );
    let meso_panel = add_panel(
        slide,
        Bounds::new(inches(0.8), inches(4.0), inches(8.6), inches(3.0)),
        Some("Mesoscale Learning Loop"),
    );

    // Macro loop, left to right, closing back over the top
    let y_m = inches(2.1);
    let (w, h, g) = (inches(1.7), inches(0.9), inches(0.3));
    let mut x_m = macro_panel.left + inches(0.3);

    let m_exp = add_box(slide, Bounds::new(x_m, y_m, w, h), "Macro Experiments");
    x_m += w + g;
    let m_data = add_box(slide, Bounds::new(x_m, y_m, w, h), "Macro Data");
    x_m += w + g;
    let m_core = add_box(slide, Bounds::new(x_m, y_m, w, h), "Macro AI Core");
    x_m += w + g;
    let m_val = add_box(slide, Bounds::new(x_m, y_m, w, h), "Validated Macro Model");
    x_m += w + g;
    let m_oed = add_diamond(
        slide,
        Bounds::new(x_m, y_m - inches(0.05), inches(1.2), inches(1.2)),
        "Macro OED",
    );

    connect_lr(slide, &m_exp, &m_data, &arrow);
    connect_lr(slide, &m_data, &m_core, &arrow);
    connect_lr(slide, &m_core, &m_val, &arrow);
    connect_lr(slide, &m_val, &m_oed, &arrow);
    elbow_feedback(
        slide,
        &m_oed,
        &m_exp,
        macro_panel.top + inches(1.15),
        &arrow,
        FEEDBACK_ARROWHEADS,
    );

    // Meso loop
    let y_s = inches(5.2);
    let mut x_s = meso_panel.left + inches(0.35);

    let s_data = add_box(slide, Bounds::new(x_s, y_s, w, h), "Meso Data");
    x_s += w + g;
    let s_core = add_box(slide, Bounds::new(x_s, y_s, w, h), "Meso AI Core");
    x_s += w + g;
    let s_val = add_box(slide, Bounds::new(x_s, y_s, w, h), "Validated Meso Model");
    x_s += w + g;
    let s_oed = add_diamond(
        slide,
        Bounds::new(x_s, y_s - inches(0.05), inches(1.2), inches(1.2)),
        "Meso OED",
    );
    x_s += inches(1.2) + g;
    let s_exp = add_box(slide, Bounds::new(x_s, y_s, w, h), "Meso Experiments");

    connect_lr(slide, &s_data, &s_core, &arrow);
    connect_lr(slide, &s_core, &s_val, &arrow);
    connect_lr(slide, &s_val, &s_oed, &arrow);
    connect_lr(slide, &s_oed, &s_exp, &arrow);
    elbow_feedback(
        slide,
        &s_exp,
        &s_data,
        meso_panel.top + inches(2.25),
        &arrow,
        FEEDBACK_ARROWHEADS,
    );

    // Macro -> meso links, each with a two-line label at its midpoint
    let target = add_arrow(slide, m_val.bottom_center(), s_core.top_center(), &arrow);
    let (mid_x, mid_y) = midpoint(&target);
    add_label(
        slide,
        Bounds::new(mid_x - inches(1.2), mid_y - inches(0.4), inches(2.8), inches(0.5)),
        "Macro data provides target\nfor inverse analysis",
    );

    let homogenized = add_arrow(
        slide,
        m_val.bottom_center(),
        s_val.top_center(),
        &arrow.dashed(),
    );
    let (mid_x, mid_y) = midpoint(&homogenized);
    add_label(
        slide,
        Bounds::new(mid_x - inches(1.4), mid_y, inches(3.2), inches(0.5)),
        "Predicts macro response /\nProvides homogenized properties as input",
    );
}

fn midpoint(c: &Connector) -> (i64, i64) {
    ((c.begin.x + c.end.x) / 2, (c.begin.y + c.end.y) / 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::DashStyle;

    fn connectors(slide: &MutableSlide) -> Vec<&MutableShape> {
        slide
            .shapes()
            .iter()
            .filter(|s| s.endpoints().is_some())
            .collect()
    }

    fn box_named(slide: &MutableSlide, text: &str) -> Bounds {
        slide
            .shapes()
            .iter()
            .find(|s| s.text_frame().map(|t| t.text()) == Some(text))
            .map(MutableShape::bounds)
            .unwrap_or_else(|| panic!("no shape labelled {text:?}"))
    }

    #[test]
    fn test_two_title_only_slides() {
        let pres = build().unwrap();
        assert_eq!(pres.slide_count(), 2);
        assert_eq!(pres.slide_width(), inches(10.0));
        assert_eq!(pres.slide_height(), inches(7.5));

        let titles: Vec<_> = (0..2).map(|i| pres.slide(i).unwrap().title()).collect();
        assert_eq!(titles, [Some(MACROSCALE_TITLE), Some(HYBRID_TITLE)]);
    }

    #[test]
    fn test_macroscale_slide_layout() {
        let pres = build().unwrap();
        let slide = pres.slide(0).unwrap();

        // panel, 4 boxes, diamond, 4 straight connectors, 3 elbow segments
        assert_eq!(slide.shape_count(), 13);
        assert_eq!(connectors(slide).len(), 7);

        let exp = box_named(slide, "Macroscale Experiments");
        assert_eq!(exp, Bounds::new(inches(0.4), inches(3.1), inches(2.0), inches(1.0)));
        let oed = box_named(slide, "Design of New\nExperiments");
        assert_eq!(oed.top, inches(3.1) - inches(0.1));

        // Last elbow leg drops onto the experiments box
        let last = connectors(slide)[6].endpoints().unwrap();
        assert_eq!(last.0.y, inches(1.4));
        assert_eq!(last.1, exp.top_center());
    }

    #[test]
    fn test_hybrid_slide_links() {
        let pres = build().unwrap();
        let slide = pres.slide(1).unwrap();

        // 2 panels + 2 captions, 5 macro shapes, 5 meso shapes,
        // 2 x (4 straight + 3 elbow), 2 cross links, 2 labels
        assert_eq!(slide.shape_count(), 32);

        let m_val = box_named(slide, "Validated Macro Model");
        let s_val = box_named(slide, "Validated Meso Model");
        let dashed: Vec<_> = connectors(slide)
            .into_iter()
            .filter(|c| c.line_format().map(|l| l.dash) == Some(DashStyle::Dash))
            .collect();
        assert_eq!(dashed.len(), 1);
        assert_eq!(
            dashed[0].endpoints(),
            Some((m_val.bottom_center(), s_val.top_center()))
        );
    }

    #[test]
    fn test_panels_have_no_shadow() {
        let pres = build().unwrap();
        let xml = pres.slide(1).unwrap().to_xml().unwrap();
        assert_eq!(xml.matches("<a:effectLst/>").count(), 2);
        assert!(xml.contains(r#"<a:srgbClr val="FFFCDC"/>"#));
    }
}

//! Research pipeline deck: one 16:9 slide with a row of chevrons leading from
//! theory to a software platform.

use crate::common::RGBColor;
use crate::common::unit::{inches, pt};
use crate::diagram::geometry::Bounds;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::pptx::{
    MutablePresentation, MutableSlide, PresetGeometry, SlideBackground, SlideLayout, TextAlign,
    VerticalAnchor,
};
use std::path::Path;
use tracing::debug;

/// Where the deck is written when no path is given.
pub const DEFAULT_OUTPUT: &str = "output/research-pipeline.pptx";

pub const TITLE: &str = "Research Pipeline";
pub const SUBTITLE: &str = "理论 → 模型 → 方法 → 算法 → 代码 → 原型软件 → 软件平台";

/// Stage labels, left to right.
pub const STAGES: [&str; 7] = [
    "Theory",
    "Models",
    "Methods",
    "Algorithms",
    "Code",
    "Prototype\nSoftware",
    "Software\nPlatform",
];

/// Chevron fills, dark blue to cyan.
pub const PALETTE: [&str; 7] = [
    "#0b63ce", "#1e78d5", "#2e8ddc", "#3ea2e3", "#4eb7ea", "#5fcdf1", "#70e2f8",
];

const NOTES: &str = concat!(
    "From hypothesis to deployed platform: each stage validates and de-risks the next.\n",
    "• Theory: rigorous problem + assumptions   • Models: abstractions + metrics\n",
    "• Methods/Algorithms: design + proof/analysis   • Code: reproducible implementation\n",
    "• Prototype: empirical validation   • Platform: productized, scalable",
);

const TITLE_COLOR: RGBColor = RGBColor::new(20, 20, 20);
const SUBTITLE_COLOR: RGBColor = RGBColor::new(80, 80, 80);
const NOTES_COLOR: RGBColor = RGBColor::new(60, 60, 60);

/// Build the deck in memory.
pub fn build() -> Result<MutablePresentation> {
    let mut pres = MutablePresentation::new();
    pres.set_slide_width(inches(13.33));
    pres.set_slide_height(inches(7.5));
    pres.set_title(TITLE);

    let slide_width = pres.slide_width();
    let slide = pres.add_slide(SlideLayout::Blank)?;
    slide.set_background(SlideBackground::solid(RGBColor::WHITE));

    add_title(slide, slide_width);
    add_flow(slide, slide_width)?;
    add_notes(slide, slide_width);

    Ok(pres)
}

/// Build the deck and write it to `output`. Returns the slide count.
pub fn run(output: &Path) -> Result<usize> {
    let pres = build()?;
    super::save_deck(&pres, output)
}

fn add_title(slide: &mut MutableSlide, slide_width: i64) {
    let left = inches(0.6);
    let top = inches(0.35);
    let width = slide_width - inches(1.2);

    slide
        .add_text_box(Bounds::new(left, top, width, inches(1.0)), TITLE)
        .font_size(40.0)
        .bold(true)
        .color(TITLE_COLOR)
        .align(TextAlign::Center)
        .vertical_anchor(VerticalAnchor::Middle);

    slide
        .add_text_box(Bounds::new(left, top + inches(0.8), width, inches(0.7)), SUBTITLE)
        .font_size(18.0)
        .color(SUBTITLE_COLOR)
        .align(TextAlign::Center)
        .vertical_anchor(VerticalAnchor::Middle);
}

/// Chevrons split the width between the side margins evenly.
fn add_flow(slide: &mut MutableSlide, slide_width: i64) -> Result<()> {
    let margin = inches(0.6);
    let top = inches(2.1);
    let height = inches(1.6);

    let avail_w = slide_width - margin * 2;
    let n = STAGES.len() as i64;
    let chevron_w = avail_w / n;

    for (i, label) in STAGES.iter().enumerate() {
        let hex = PALETTE[i % PALETTE.len()];
        let fill = RGBColor::from_hex(hex)
            .ok_or_else(|| OoxmlError::InvalidFormat(format!("bad palette color {hex}")))?;
        let left = margin + avail_w * i as i64 / n;

        slide
            .add_auto_shape(PresetGeometry::Chevron, Bounds::new(left, top, chevron_w, height))
            .fill(fill)
            .outline(RGBColor::WHITE, pt(1.25))
            .text(label)
            .word_wrap(true)
            .vertical_anchor(VerticalAnchor::Middle)
            .font_size(18.0)
            .bold(true)
            .color(RGBColor::WHITE)
            .align(TextAlign::Center);
        debug!(stage = label, left, fill = %fill, "chevron placed");
    }

    Ok(())
}

fn add_notes(slide: &mut MutableSlide, slide_width: i64) {
    let bounds = Bounds::new(inches(0.6), inches(4.1), slide_width - inches(1.2), inches(1.6));
    slide
        .add_text_box(bounds, NOTES)
        .font_size(14.0)
        .color(NOTES_COLOR)
        .align(TextAlign::Left)
        .vertical_anchor(VerticalAnchor::Top);
}

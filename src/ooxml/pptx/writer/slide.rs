/// Slide types and implementation for PPTX presentations.
use crate::diagram::geometry::{Bounds, Point};
use crate::ooxml::error::Result;
use crate::ooxml::pptx::backgrounds::SlideBackground;
use crate::ooxml::pptx::template::SlideLayout;

use super::super::format::PresetGeometry;
use super::shape::{MutableShape, TextFrame};

/// Shape ID of the title placeholder. The group root is always id 1.
const TITLE_SHAPE_ID: u32 = 2;
/// First ID handed to user shapes.
const FIRST_SHAPE_ID: u32 = 3;

/// A mutable slide in a presentation.
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// Slide ID (unique identifier, >= 256)
    pub(crate) slide_id: u32,
    /// Layout the slide is based on
    pub(crate) layout: SlideLayout,
    /// Title placeholder text, present when the layout has a title
    pub(crate) title: Option<TextFrame>,
    /// Shapes on the slide, in z-order
    pub(crate) shapes: Vec<MutableShape>,
    pub(crate) background: SlideBackground,
}

impl MutableSlide {
    /// Create a new empty slide from a layout.
    pub(crate) fn new(slide_id: u32, layout: SlideLayout) -> Self {
        Self {
            slide_id,
            layout,
            title: layout.has_title().then(TextFrame::default),
            shapes: Vec::new(),
            background: SlideBackground::None,
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    pub fn layout(&self) -> SlideLayout {
        self.layout
    }

    /// Title placeholder of the slide, or `None` if the layout has none.
    pub fn title_mut(&mut self) -> Option<&mut TextFrame> {
        self.title.as_mut()
    }

    /// Get the slide title text.
    pub fn title(&self) -> Option<&str> {
        self.title.as_ref().map(TextFrame::text)
    }

    pub fn set_background(&mut self, background: SlideBackground) {
        self.background = background;
    }

    pub fn background(&self) -> &SlideBackground {
        &self.background
    }

    /// Add a text box.
    ///
    /// # Arguments
    /// * `bounds` - Position and size in EMUs
    /// * `text` - Text content; `\n` starts a new line in the same paragraph
    pub fn add_text_box(&mut self, bounds: Bounds, text: &str) -> &mut MutableShape {
        let shape_id = self.next_shape_id();
        self.push_shape(MutableShape::new_text_box(shape_id, bounds, text))
    }

    /// Add a preset-geometry shape (rectangle, rounded rectangle, diamond,
    /// chevron).
    pub fn add_auto_shape(&mut self, geometry: PresetGeometry, bounds: Bounds) -> &mut MutableShape {
        let shape_id = self.next_shape_id();
        self.push_shape(MutableShape::new_auto_shape(shape_id, geometry, bounds))
    }

    /// Add a straight connector from `begin` to `end`.
    pub fn add_connector(&mut self, begin: Point, end: Point) -> &mut MutableShape {
        let shape_id = self.next_shape_id();
        self.push_shape(MutableShape::new_connector(shape_id, begin, end))
    }

    /// Shapes in the order they were added, not counting the title.
    pub fn shapes(&self) -> &[MutableShape] {
        &self.shapes
    }

    /// Get the number of shapes, not counting the title.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    fn next_shape_id(&self) -> u32 {
        self.shapes.len() as u32 + FIRST_SHAPE_ID
    }

    fn push_shape(&mut self, shape: MutableShape) -> &mut MutableShape {
        self.shapes.push(shape);
        let last = self.shapes.len() - 1;
        &mut self.shapes[last]
    }

    /// Generate slide XML content.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096 + self.shapes.len() * 768);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
        );
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
        );
        xml.push_str(r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#);

        xml.push_str("<p:cSld>");

        // p:bg must come before p:spTree
        self.background.write_xml(&mut xml)?;

        xml.push_str("<p:spTree>");

        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        if let Some(ref title) = self.title {
            Self::write_title_shape(&mut xml, title)?;
        }

        for shape in &self.shapes {
            shape.to_xml(&mut xml)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:sld>");

        Ok(xml)
    }

    /// Title placeholder; position and size come from the layout.
    fn write_title_shape(xml: &mut String, title: &TextFrame) -> Result<()> {
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        xml.push_str(&format!(r#"<p:cNvPr id="{}" name="Title 1"/>"#, TITLE_SHAPE_ID));
        xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
        xml.push_str(r#"<p:nvPr><p:ph type="title"/></p:nvPr>"#);
        xml.push_str("</p:nvSpPr>");

        xml.push_str("<p:spPr/>");

        xml.push_str("<p:txBody>");
        xml.push_str("<a:bodyPr/>");
        xml.push_str("<a:lstStyle/>");
        title.write_paragraph(xml)?;
        xml.push_str("</p:txBody>");

        xml.push_str("</p:sp>");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;

    #[test]
    fn test_title_only_layout_has_placeholder() {
        let mut slide = MutableSlide::new(256, SlideLayout::TitleOnly);
        slide
            .title_mut()
            .unwrap()
            .set_text("Loop")
            .font_size(24.0)
            .bold(true);
        assert_eq!(slide.title(), Some("Loop"));

        let xml = slide.to_xml().unwrap();
        assert!(xml.contains(r#"<p:ph type="title"/>"#));
        assert!(xml.contains(r#"<a:rPr lang="en-US" sz="2400" b="1" dirty="0"/><a:t>Loop</a:t>"#));
    }

    #[test]
    fn test_blank_layout_has_no_title() {
        let mut slide = MutableSlide::new(256, SlideLayout::Blank);
        assert!(slide.title_mut().is_none());
        assert!(!slide.to_xml().unwrap().contains("<p:ph"));
    }

    #[test]
    fn test_shape_ids_are_unique() {
        let mut slide = MutableSlide::new(256, SlideLayout::TitleOnly);
        let a = slide.add_text_box(Bounds::new(0, 0, 10, 10), "a").shape_id();
        let b = slide
            .add_auto_shape(PresetGeometry::Diamond, Bounds::new(0, 0, 10, 10))
            .shape_id();
        let c = slide
            .add_connector(Point::new(0, 0), Point::new(5, 5))
            .shape_id();
        assert_eq!((a, b, c), (3, 4, 5));
        assert_eq!(slide.shape_count(), 3);
    }

    #[test]
    fn test_background_precedes_shape_tree() {
        let mut slide = MutableSlide::new(256, SlideLayout::Blank);
        slide.set_background(SlideBackground::solid(RGBColor::WHITE));
        let xml = slide.to_xml().unwrap();

        let bg = xml.find("<p:bg>").unwrap();
        assert!(bg < xml.find("<p:spTree>").unwrap());
        assert!(xml.ends_with("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>"));
    }
}

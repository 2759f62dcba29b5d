/// Shape types and serialization for PPTX slides.
use crate::common::RGBColor;
use crate::common::xml::escape_xml;
use crate::diagram::geometry::{Bounds, Point};
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

pub use super::super::format::{
    LineFormat, PresetGeometry, TextAlign, TextFormat, VerticalAnchor,
};

/// Text content of a shape: one paragraph with a single run style.
///
/// Newlines in the text become line breaks (`a:br`) inside the paragraph,
/// so the whole block keeps one alignment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFrame {
    text: String,
    format: TextFormat,
    align: Option<TextAlign>,
    anchor: Option<VerticalAnchor>,
    word_wrap: Option<bool>,
}

impl TextFrame {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn format(&self) -> &TextFormat {
        &self.format
    }

    /// Replace the text, keeping formatting.
    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = text.into();
        self
    }

    pub fn font(&mut self, font: &str) -> &mut Self {
        self.format.font = Some(font.to_string());
        self
    }

    /// Font size in points.
    pub fn font_size(&mut self, size: f64) -> &mut Self {
        self.format.size = Some(size);
        self
    }

    pub fn bold(&mut self, bold: bool) -> &mut Self {
        self.format.bold = Some(bold);
        self
    }

    pub fn italic(&mut self, italic: bool) -> &mut Self {
        self.format.italic = Some(italic);
        self
    }

    pub fn color(&mut self, color: RGBColor) -> &mut Self {
        self.format.color = Some(color);
        self
    }

    pub fn align(&mut self, align: TextAlign) -> &mut Self {
        self.align = Some(align);
        self
    }

    pub fn vertical_anchor(&mut self, anchor: VerticalAnchor) -> &mut Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn word_wrap(&mut self, wrap: bool) -> &mut Self {
        self.word_wrap = Some(wrap);
        self
    }

    /// Write `p:txBody`.
    ///
    /// `body_defaults` holds the shape kind's default `a:bodyPr` settings
    /// (wrap, anchor, autofit); explicit frame settings win over them.
    fn write_xml(&self, xml: &mut String, body_defaults: BodyDefaults) -> Result<()> {
        xml.push_str("<p:txBody>");

        xml.push_str("<a:bodyPr");
        let wrap = self.word_wrap.or(body_defaults.wrap);
        match wrap {
            Some(true) => xml.push_str(r#" wrap="square""#),
            Some(false) => xml.push_str(r#" wrap="none""#),
            None => {},
        }
        xml.push_str(r#" rtlCol="0""#);
        if let Some(anchor) = self.anchor.or(body_defaults.anchor) {
            write!(xml, r#" anchor="{}""#, anchor.as_str())?;
        }
        if body_defaults.auto_fit {
            xml.push_str("><a:spAutoFit/></a:bodyPr>");
        } else {
            xml.push_str("/>");
        }

        xml.push_str("<a:lstStyle/>");
        self.write_paragraph(xml)?;
        xml.push_str("</p:txBody>");
        Ok(())
    }

    /// Write the single `a:p` of this frame.
    pub(crate) fn write_paragraph(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:p>");

        if let Some(align) = self.align {
            write!(xml, r#"<a:pPr algn="{}"/>"#, align.as_str())?;
        }

        for (i, line) in self.text.split('\n').enumerate() {
            if i > 0 {
                xml.push_str("<a:br>");
                self.format.write_run_properties(xml)?;
                xml.push_str("</a:br>");
            }
            if line.is_empty() {
                continue;
            }
            xml.push_str("<a:r>");
            self.format.write_run_properties(xml)?;
            write!(xml, "<a:t>{}</a:t>", escape_xml(line))?;
            xml.push_str("</a:r>");
        }

        xml.push_str("</a:p>");
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
struct BodyDefaults {
    wrap: Option<bool>,
    anchor: Option<VerticalAnchor>,
    auto_fit: bool,
}

impl BodyDefaults {
    /// New text boxes: no wrapping, shape grows to fit text.
    const TEXT_BOX: BodyDefaults = BodyDefaults {
        wrap: Some(false),
        anchor: None,
        auto_fit: true,
    };

    /// New auto shapes: text centered vertically.
    const AUTO_SHAPE: BodyDefaults = BodyDefaults {
        wrap: None,
        anchor: Some(VerticalAnchor::Middle),
        auto_fit: false,
    };
}

/// A shape on a slide (text box, auto shape, or connector).
#[derive(Debug, Clone)]
pub struct MutableShape {
    /// Shape ID, unique within the slide
    pub(crate) shape_id: u32,
    pub(crate) shape_type: ShapeType,
}

#[derive(Debug, Clone)]
pub(crate) enum ShapeType {
    TextBox {
        bounds: Bounds,
        text: TextFrame,
    },
    AutoShape {
        geometry: PresetGeometry,
        bounds: Bounds,
        fill: Option<RGBColor>,
        line: Option<LineFormat>,
        /// Empty effect list, which turns off the theme shadow
        no_shadow: bool,
        text: Option<TextFrame>,
    },
    Connector {
        begin: Point,
        end: Point,
        line: LineFormat,
    },
}

impl MutableShape {
    /// Create a new text box shape.
    pub(crate) fn new_text_box(shape_id: u32, bounds: Bounds, text: impl Into<String>) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::TextBox {
                bounds,
                text: TextFrame::new(text),
            },
        }
    }

    /// Create a new preset-geometry shape with no fill, outline or text.
    pub(crate) fn new_auto_shape(shape_id: u32, geometry: PresetGeometry, bounds: Bounds) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::AutoShape {
                geometry,
                bounds,
                fill: None,
                line: None,
                no_shadow: false,
                text: None,
            },
        }
    }

    /// Create a new straight connector from `begin` to `end`.
    pub(crate) fn new_connector(shape_id: u32, begin: Point, end: Point) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::Connector {
                begin,
                end,
                line: LineFormat::default(),
            },
        }
    }

    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    /// Bounding box of the shape. For connectors this is the box spanned by
    /// the two end points.
    pub fn bounds(&self) -> Bounds {
        match &self.shape_type {
            ShapeType::TextBox { bounds, .. } | ShapeType::AutoShape { bounds, .. } => *bounds,
            ShapeType::Connector { begin, end, .. } => connector_bounds(*begin, *end),
        }
    }

    /// Begin and end points, for connectors.
    pub fn endpoints(&self) -> Option<(Point, Point)> {
        match self.shape_type {
            ShapeType::Connector { begin, end, .. } => Some((begin, end)),
            _ => None,
        }
    }

    /// Line format of a connector or outlined auto shape.
    pub fn line_format(&self) -> Option<&LineFormat> {
        match &self.shape_type {
            ShapeType::AutoShape { line, .. } => line.as_ref(),
            ShapeType::Connector { line, .. } => Some(line),
            ShapeType::TextBox { .. } => None,
        }
    }

    /// Text frame of the shape, if it has one.
    pub fn text_frame(&self) -> Option<&TextFrame> {
        match &self.shape_type {
            ShapeType::TextBox { text, .. } => Some(text),
            ShapeType::AutoShape { text, .. } => text.as_ref(),
            ShapeType::Connector { .. } => None,
        }
    }

    /// Text frame of the shape, created empty on first access for auto
    /// shapes. Connectors carry no text.
    pub fn text_frame_mut(&mut self) -> Option<&mut TextFrame> {
        match &mut self.shape_type {
            ShapeType::TextBox { text, .. } => Some(text),
            ShapeType::AutoShape { text, .. } => Some(text.get_or_insert_with(TextFrame::default)),
            ShapeType::Connector { .. } => None,
        }
    }

    /// Builder method: set the text content.
    pub fn text(&mut self, text: &str) -> &mut Self {
        if let Some(frame) = self.text_frame_mut() {
            frame.set_text(text);
        }
        self
    }

    /// Builder method: apply `f` to the text frame, if the shape has one.
    pub fn with_text_frame(&mut self, f: impl FnOnce(&mut TextFrame)) -> &mut Self {
        if let Some(frame) = self.text_frame_mut() {
            f(frame);
        }
        self
    }

    /// Builder method: set font size in points.
    pub fn font_size(&mut self, size: f64) -> &mut Self {
        self.with_text_frame(|f| {
            f.font_size(size);
        })
    }

    /// Builder method: set bold.
    pub fn bold(&mut self, bold: bool) -> &mut Self {
        self.with_text_frame(|f| {
            f.bold(bold);
        })
    }

    /// Builder method: set text color.
    pub fn color(&mut self, color: RGBColor) -> &mut Self {
        self.with_text_frame(|f| {
            f.color(color);
        })
    }

    /// Builder method: set paragraph alignment.
    pub fn align(&mut self, align: TextAlign) -> &mut Self {
        self.with_text_frame(|f| {
            f.align(align);
        })
    }

    /// Builder method: set vertical text anchoring.
    pub fn vertical_anchor(&mut self, anchor: VerticalAnchor) -> &mut Self {
        self.with_text_frame(|f| {
            f.vertical_anchor(anchor);
        })
    }

    /// Builder method: set word wrap.
    pub fn word_wrap(&mut self, wrap: bool) -> &mut Self {
        self.with_text_frame(|f| {
            f.word_wrap(wrap);
        })
    }

    /// Builder method: solid fill (auto shapes only).
    pub fn fill(&mut self, color: RGBColor) -> &mut Self {
        if let ShapeType::AutoShape {
            fill: ref mut f, ..
        } = self.shape_type
        {
            *f = Some(color);
        }
        self
    }

    /// Builder method: outline color and width in EMUs (auto shapes and
    /// connectors).
    pub fn outline(&mut self, color: RGBColor, width: i64) -> &mut Self {
        self.line_mut(|line| {
            line.color = Some(color);
            line.width = Some(width);
        })
    }

    /// Builder method: replace the whole line format.
    pub fn line(&mut self, format: LineFormat) -> &mut Self {
        self.line_mut(|line| *line = format)
    }

    /// Builder method: turn off the inherited theme shadow (auto shapes only).
    pub fn no_shadow(&mut self) -> &mut Self {
        if let ShapeType::AutoShape {
            no_shadow: ref mut n, ..
        } = self.shape_type
        {
            *n = true;
        }
        self
    }

    fn line_mut(&mut self, f: impl FnOnce(&mut LineFormat)) -> &mut Self {
        match &mut self.shape_type {
            ShapeType::AutoShape { line, .. } => f(line.get_or_insert_with(LineFormat::default)),
            ShapeType::Connector { line, .. } => f(line),
            ShapeType::TextBox { .. } => {},
        }
        self
    }

    /// Generate XML for this shape.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        match &self.shape_type {
            ShapeType::TextBox { bounds, text } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="TextBox {}"/>"#,
                    self.shape_id,
                    self.shape_id - 1
                )?;
                xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, *bounds, false, false)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("<a:noFill/>");
                xml.push_str("</p:spPr>");

                text.write_xml(xml, BodyDefaults::TEXT_BOX)?;
                xml.push_str("</p:sp>");
            },
            ShapeType::AutoShape {
                geometry,
                bounds,
                fill,
                line,
                no_shadow,
                text,
            } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="{} {}"/>"#,
                    self.shape_id,
                    geometry.display_name(),
                    self.shape_id - 1
                )?;
                xml.push_str("<p:cNvSpPr/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                // Schema order: xfrm, geometry, fill, ln, effectLst
                xml.push_str("<p:spPr>");
                write_xfrm(xml, *bounds, false, false)?;
                write!(
                    xml,
                    r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#,
                    geometry.prst()
                )?;
                if let Some(color) = fill {
                    write!(
                        xml,
                        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                        color.to_hex()
                    )?;
                }
                if let Some(line) = line {
                    line.write_xml(xml)?;
                }
                if *no_shadow {
                    xml.push_str("<a:effectLst/>");
                }
                xml.push_str("</p:spPr>");

                if let Some(text) = text {
                    text.write_xml(xml, BodyDefaults::AUTO_SHAPE)?;
                }
                xml.push_str("</p:sp>");
            },
            ShapeType::Connector { begin, end, line } => {
                xml.push_str("<p:cxnSp>");
                xml.push_str("<p:nvCxnSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Connector {}"/>"#,
                    self.shape_id,
                    self.shape_id - 1
                )?;
                xml.push_str("<p:cNvCxnSpPr/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvCxnSpPr>");

                xml.push_str("<p:spPr>");
                let flip_h = begin.x > end.x;
                let flip_v = begin.y > end.y;
                write_xfrm(xml, connector_bounds(*begin, *end), flip_h, flip_v)?;
                xml.push_str(r#"<a:prstGeom prst="line"><a:avLst/></a:prstGeom>"#);
                line.write_xml(xml)?;
                xml.push_str("</p:spPr>");
                xml.push_str("</p:cxnSp>");
            },
        }

        Ok(())
    }
}

/// Box spanned by two points; the flip flags recover the direction.
fn connector_bounds(begin: Point, end: Point) -> Bounds {
    Bounds::new(
        begin.x.min(end.x),
        begin.y.min(end.y),
        (end.x - begin.x).abs(),
        (end.y - begin.y).abs(),
    )
}

fn write_xfrm(xml: &mut String, bounds: Bounds, flip_h: bool, flip_v: bool) -> Result<()> {
    xml.push_str("<a:xfrm");
    if flip_h {
        xml.push_str(r#" flipH="1""#);
    }
    if flip_v {
        xml.push_str(r#" flipV="1""#);
    }
    xml.push('>');
    write!(xml, r#"<a:off x="{}" y="{}"/>"#, bounds.left, bounds.top)?;
    write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, bounds.width, bounds.height)?;
    xml.push_str("</a:xfrm>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::format::ArrowheadStyle;

    fn render(shape: &MutableShape) -> String {
        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_text_box_line_breaks() {
        let mut shape = MutableShape::new_text_box(3, Bounds::new(0, 0, 100, 50), "a & b\nc");
        shape.font_size(12.0).align(TextAlign::Center);
        let xml = render(&shape);

        assert!(xml.contains(r#"<p:cNvSpPr txBox="1"/>"#));
        assert!(xml.contains(r#"<a:bodyPr wrap="none" rtlCol="0"><a:spAutoFit/></a:bodyPr>"#));
        assert!(xml.contains(r#"<a:pPr algn="ctr"/>"#));
        assert!(xml.contains("<a:t>a &amp; b</a:t></a:r><a:br>"));
        assert!(xml.contains("<a:t>c</a:t>"));
        assert_eq!(xml.matches("<a:p>").count(), 1);
    }

    #[test]
    fn test_auto_shape_xml() {
        let mut shape = MutableShape::new_auto_shape(
            4,
            PresetGeometry::Chevron,
            Bounds::new(10, 20, 30, 40),
        );
        shape
            .fill(RGBColor::new(0x0b, 0x63, 0xce))
            .outline(RGBColor::WHITE, 15_875)
            .text("Theory")
            .word_wrap(true)
            .bold(true);
        let xml = render(&shape);

        assert!(xml.contains(r#"<p:cNvPr id="4" name="Chevron 3"/>"#));
        assert!(xml.contains(r#"<a:off x="10" y="20"/><a:ext cx="30" cy="40"/>"#));
        assert!(xml.contains(r#"<a:prstGeom prst="chevron">"#));
        assert!(xml.contains(r#"<a:solidFill><a:srgbClr val="0B63CE"/></a:solidFill><a:ln w="15875">"#));
        assert!(xml.contains(r#"<a:bodyPr wrap="square" rtlCol="0" anchor="ctr"/>"#));
        assert!(!xml.contains("<a:effectLst/>"));
    }

    #[test]
    fn test_panel_without_text_or_shadow() {
        let mut shape = MutableShape::new_auto_shape(5, PresetGeometry::Rectangle, Bounds::default());
        shape.no_shadow();
        let xml = render(&shape);
        assert!(xml.contains("<a:effectLst/></p:spPr></p:sp>"));
        assert!(!xml.contains("<p:txBody>"));
    }

    #[test]
    fn test_connector_flips() {
        let mut shape = MutableShape::new_connector(6, Point::new(500, 400), Point::new(100, 400));
        shape.line(LineFormat {
            tail_end: ArrowheadStyle::Triangle,
            ..LineFormat::default()
        });
        let xml = render(&shape);

        assert!(xml.starts_with("<p:cxnSp>"));
        assert!(xml.contains(r#"<a:xfrm flipH="1"><a:off x="100" y="400"/><a:ext cx="400" cy="0"/>"#));
        assert!(xml.contains(r#"<a:tailEnd type="triangle"/>"#));
        assert_eq!(shape.bounds(), Bounds::new(100, 400, 400, 0));
    }

    #[test]
    fn test_connector_has_no_text() {
        let mut shape = MutableShape::new_connector(7, Point::new(0, 0), Point::new(0, 10));
        shape.text("ignored").font_size(10.0);
        assert!(shape.text_frame().is_none());
        assert!(render(&shape).contains(r#"<a:xfrm><a:off x="0" y="0"/>"#));
    }
}

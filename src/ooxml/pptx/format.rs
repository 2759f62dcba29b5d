//! Format types for PPTX presentations.

use crate::common::RGBColor;
use crate::common::unit::font_size_to_centipoints;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

/// Preset auto-shape geometries (`a:prstGeom/@prst`) used by the decks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetGeometry {
    Rectangle,
    RoundedRectangle,
    Diamond,
    Chevron,
}

impl PresetGeometry {
    /// DrawingML preset name.
    pub fn prst(&self) -> &'static str {
        match self {
            Self::Rectangle => "rect",
            Self::RoundedRectangle => "roundRect",
            Self::Diamond => "diamond",
            Self::Chevron => "chevron",
        }
    }

    /// Base name PowerPoint gives new shapes of this kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::RoundedRectangle => "Rounded Rectangle",
            Self::Diamond => "Diamond",
            Self::Chevron => "Chevron",
        }
    }
}

/// Horizontal paragraph alignment (`a:pPr/@algn`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
            Self::Justify => "just",
        }
    }
}

/// Vertical anchoring of text inside its frame (`a:bodyPr/@anchor`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAnchor {
    Top,
    Middle,
    Bottom,
}

impl VerticalAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "t",
            Self::Middle => "ctr",
            Self::Bottom => "b",
        }
    }
}

/// Line dash pattern (`a:prstDash/@val`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashStyle {
    #[default]
    Solid,
    Dash,
    Dot,
    DashDot,
}

impl DashStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dash => "dash",
            Self::Dot => "sysDot",
            Self::DashDot => "dashDot",
        }
    }
}

/// Line end decoration (`a:headEnd/@type`, `a:tailEnd/@type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArrowheadStyle {
    #[default]
    None,
    Triangle,
    Stealth,
    Arrow,
    Oval,
}

impl ArrowheadStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Triangle => "triangle",
            Self::Stealth => "stealth",
            Self::Arrow => "arrow",
            Self::Oval => "oval",
        }
    }
}

/// Text run formatting properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFormat {
    /// Font family
    pub font: Option<String>,
    /// Font size in points
    pub size: Option<f64>,
    /// Bold text
    pub bold: Option<bool>,
    /// Italic text
    pub italic: Option<bool>,
    /// Text color
    pub color: Option<RGBColor>,
}

impl TextFormat {
    /// Write an `a:rPr` element for these properties.
    pub(crate) fn write_run_properties(&self, xml: &mut String) -> Result<()> {
        xml.push_str(r#"<a:rPr lang="en-US""#);

        if let Some(size) = self.size {
            write!(xml, r#" sz="{}""#, font_size_to_centipoints(size))?;
        }

        match self.bold {
            Some(true) => xml.push_str(r#" b="1""#),
            Some(false) => xml.push_str(r#" b="0""#),
            None => {},
        }

        if let Some(true) = self.italic {
            xml.push_str(r#" i="1""#);
        }

        xml.push_str(r#" dirty="0""#);

        if self.color.is_none() && self.font.is_none() {
            xml.push_str("/>");
            return Ok(());
        }

        xml.push('>');

        // Schema order: fill before latin
        if let Some(color) = self.color {
            write!(
                xml,
                r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                color.to_hex()
            )?;
        }

        if let Some(ref font) = self.font {
            write!(
                xml,
                r#"<a:latin typeface="{}"/>"#,
                crate::common::xml::escape_xml(font)
            )?;
        }

        xml.push_str("</a:rPr>");
        Ok(())
    }
}

/// Outline formatting for auto shapes and connectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineFormat {
    /// Solid line color; `None` inherits from the theme
    pub color: Option<RGBColor>,
    /// Line width in EMUs
    pub width: Option<i64>,
    pub dash: DashStyle,
    /// Decoration at the start point
    pub head_end: ArrowheadStyle,
    /// Decoration at the end point
    pub tail_end: ArrowheadStyle,
}

impl LineFormat {
    /// Write an `a:ln` element.
    pub(crate) fn write_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:ln");
        if let Some(width) = self.width {
            write!(xml, r#" w="{}""#, width)?;
        }
        xml.push('>');

        if let Some(color) = self.color {
            write!(
                xml,
                r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                color.to_hex()
            )?;
        }

        if self.dash != DashStyle::Solid {
            write!(xml, r#"<a:prstDash val="{}"/>"#, self.dash.as_str())?;
        }

        if self.head_end != ArrowheadStyle::None {
            write!(xml, r#"<a:headEnd type="{}"/>"#, self.head_end.as_str())?;
        }

        if self.tail_end != ArrowheadStyle::None {
            write!(xml, r#"<a:tailEnd type="{}"/>"#, self.tail_end.as_str())?;
        }

        xml.push_str("</a:ln>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_properties_minimal() {
        let mut xml = String::new();
        TextFormat::default().write_run_properties(&mut xml).unwrap();
        assert_eq!(xml, r#"<a:rPr lang="en-US" dirty="0"/>"#);
    }

    #[test]
    fn test_run_properties_full() {
        let format = TextFormat {
            font: Some("Calibri".to_string()),
            size: Some(16.0),
            bold: Some(true),
            italic: None,
            color: Some(RGBColor::new(20, 20, 20)),
        };
        let mut xml = String::new();
        format.write_run_properties(&mut xml).unwrap();

        assert!(xml.starts_with(r#"<a:rPr lang="en-US" sz="1600" b="1" dirty="0">"#));
        assert!(xml.contains(r#"<a:srgbClr val="141414"/>"#));
        assert!(xml.find("solidFill").unwrap() < xml.find("latin").unwrap());
        assert!(xml.ends_with("</a:rPr>"));
    }

    #[test]
    fn test_line_xml_dashed_arrow() {
        let line = LineFormat {
            color: Some(RGBColor::new(90, 90, 90)),
            width: Some(25_400),
            dash: DashStyle::Dash,
            head_end: ArrowheadStyle::None,
            tail_end: ArrowheadStyle::Triangle,
        };
        let mut xml = String::new();
        line.write_xml(&mut xml).unwrap();

        assert_eq!(
            xml,
            concat!(
                r#"<a:ln w="25400"><a:solidFill><a:srgbClr val="5A5A5A"/></a:solidFill>"#,
                r#"<a:prstDash val="dash"/><a:tailEnd type="triangle"/></a:ln>"#
            )
        );
    }

    #[test]
    fn test_preset_names() {
        assert_eq!(PresetGeometry::RoundedRectangle.prst(), "roundRect");
        assert_eq!(PresetGeometry::Chevron.display_name(), "Chevron");
    }
}

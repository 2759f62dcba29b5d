//! Slide background support.
//!
//! Only solid fills are written; a slide without an explicit background
//! inherits the master's.

use crate::common::RGBColor;
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

/// Slide background configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideBackground {
    /// Inherit the master background
    #[default]
    None,
    /// Solid color background
    Solid {
        color: RGBColor,
    },
}

impl SlideBackground {
    /// Create a solid color background.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pipeline_decks::common::RGBColor;
    /// use pipeline_decks::ooxml::pptx::SlideBackground;
    ///
    /// let bg = SlideBackground::solid(RGBColor::WHITE);
    /// assert!(!bg.is_inherited());
    /// ```
    pub fn solid(color: RGBColor) -> Self {
        SlideBackground::Solid { color }
    }

    /// Whether the slide falls back to the master background.
    pub fn is_inherited(&self) -> bool {
        matches!(self, SlideBackground::None)
    }

    /// Append the `p:bg` element, if any. Must precede `p:spTree`.
    pub(crate) fn write_xml(&self, xml: &mut String) -> Result<()> {
        match self {
            SlideBackground::None => {},
            SlideBackground::Solid { color } => {
                xml.push_str("<p:bg><p:bgPr>");
                write!(
                    xml,
                    r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                    color.to_hex()
                )?;
                xml.push_str("<a:effectLst/>");
                xml.push_str("</p:bgPr></p:bg>");
            },
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inherited_background_writes_nothing() {
        let mut xml = String::new();
        SlideBackground::default().write_xml(&mut xml).unwrap();
        assert!(xml.is_empty());
    }

    #[test]
    fn test_solid_background_xml() {
        let mut xml = String::new();
        SlideBackground::solid(RGBColor::new(255, 0, 0))
            .write_xml(&mut xml)
            .unwrap();
        assert_eq!(
            xml,
            concat!(
                r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="FF0000"/></a:solidFill>"#,
                "<a:effectLst/></p:bgPr></p:bg>"
            )
        );
    }
}

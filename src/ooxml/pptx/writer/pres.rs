/// Presentation writer for PPTX.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::{OpcPackage, PackageWriter, Part, Relationships};
use crate::ooxml::pptx::template::{self, SlideLayout};
use chrono::Utc;
use std::fmt::Write as FmtWrite;
use std::path::Path;
use tracing::{debug, info};

use super::slide::MutableSlide;

/// First value of `p:sldId/@id`.
const FIRST_SLIDE_ID: u32 = 256;
/// Largest value PowerPoint accepts for `p:sldId/@id`.
const MAX_SLIDE_ID: u32 = 2_147_483_647;

const MASTER_PARTNAME: &str = "/ppt/slideMasters/slideMaster1.xml";
const THEME_PARTNAME: &str = "/ppt/theme/theme1.xml";

/// A PowerPoint presentation being built for writing.
///
/// Holds the slides and canvas size; [`save`](Self::save) assembles the
/// whole package (master, layouts, theme, properties) around them.
///
/// # Examples
///
/// ```no_run
/// use pipeline_decks::common::unit::inches;
/// use pipeline_decks::ooxml::pptx::{MutablePresentation, SlideLayout};
///
/// let mut pres = MutablePresentation::new();
/// pres.set_slide_width(inches(13.33));
/// pres.add_slide(SlideLayout::Blank)?;
/// pres.save("deck.pptx")?;
/// # Ok::<(), pipeline_decks::ooxml::OoxmlError>(())
/// ```
#[derive(Debug)]
pub struct MutablePresentation {
    /// Slides in the presentation
    pub(crate) slides: Vec<MutableSlide>,
    /// Slide width in EMUs (English Metric Units, 914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
    /// Document title written to the core properties
    title: Option<String>,
}

impl MutablePresentation {
    /// Create a new empty presentation with default dimensions.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: 9144000,  // 10 inches
            slide_height: 6858000, // 7.5 inches
            title: None,
        }
    }

    /// Add a new slide based on `layout`.
    pub fn add_slide(&mut self, layout: SlideLayout) -> Result<&mut MutableSlide> {
        let slide_id = u32::try_from(self.slides.len())
            .ok()
            .and_then(|n| n.checked_add(FIRST_SLIDE_ID))
            .filter(|id| *id <= MAX_SLIDE_ID)
            .ok_or_else(|| OoxmlError::InvalidFormat("slide ID space exhausted".to_string()))?;

        self.slides.push(MutableSlide::new(slide_id, layout));
        debug!(slide_id, ?layout, "slide added");

        let last = self.slides.len() - 1;
        Ok(&mut self.slides[last])
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Get a slide by index (0-based).
    pub fn slide(&self, index: usize) -> Option<&MutableSlide> {
        self.slides.get(index)
    }

    /// Get a mutable reference to a slide by index (0-based).
    pub fn slide_mut(&mut self, index: usize) -> Option<&mut MutableSlide> {
        self.slides.get_mut(index)
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Set the slide width in EMUs. Applies to every slide.
    pub fn set_slide_width(&mut self, width: i64) {
        self.slide_width = width;
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Set the slide height in EMUs. Applies to every slide.
    pub fn set_slide_height(&mut self, height: i64) {
        self.slide_height = height;
    }

    /// Set the document title stored in `docProps/core.xml`.
    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Generate presentation.xml content.
    ///
    /// # Arguments
    /// * `slide_rel_ids` - Relationship IDs of the slides, in slide order
    pub(crate) fn generate_presentation_xml(&self, slide_rel_ids: &[String]) -> Result<String> {
        if slide_rel_ids.len() != self.slides.len() {
            return Err(OoxmlError::Xml(format!(
                "{} slide relationship IDs for {} slides",
                slide_rel_ids.len(),
                self.slides.len()
            )));
        }

        let mut xml = String::with_capacity(1024 + self.slides.len() * 48);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" saveSubsetFonts="1">"#);

        // The master is always the first relationship
        xml.push_str("<p:sldMasterIdLst>");
        xml.push_str(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#);
        xml.push_str("</p:sldMasterIdLst>");

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )?;
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }

    /// Assemble the complete OPC package.
    pub fn to_package(&self) -> Result<OpcPackage> {
        let mut pkg = OpcPackage::new();

        pkg.rels_mut()
            .add(rt::OFFICE_DOCUMENT, "ppt/presentation.xml");
        pkg.rels_mut()
            .add(rt::CORE_PROPERTIES, "docProps/core.xml");
        pkg.rels_mut()
            .add(rt::EXTENDED_PROPERTIES, "docProps/app.xml");

        // presentation.xml: master first, then slides, then the shared parts
        let mut pres_rels = Relationships::new();
        pres_rels.add(rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml");
        let slide_rel_ids: Vec<String> = (1..=self.slides.len())
            .map(|n| pres_rels.add(rt::SLIDE, format!("slides/slide{}.xml", n)))
            .collect();
        pres_rels.add(rt::THEME, "theme/theme1.xml");
        pres_rels.add(rt::PRES_PROPS, "presProps.xml");
        pres_rels.add(rt::VIEW_PROPS, "viewProps.xml");
        pres_rels.add(rt::TABLE_STYLES, "tableStyles.xml");

        let pres_xml = self.generate_presentation_xml(&slide_rel_ids)?;
        pkg.add_part(
            Part::new("/ppt/presentation.xml", ct::PML_PRESENTATION_MAIN, pres_xml)
                .with_rels(pres_rels),
        );

        let mut master_rels = Relationships::new();
        for layout in SlideLayout::ALL {
            master_rels.add(rt::SLIDE_LAYOUT, relative_to_ppt_subdir(&layout.partname()));
        }
        master_rels.add(rt::THEME, relative_to_ppt_subdir(THEME_PARTNAME));
        pkg.add_part(
            Part::new(MASTER_PARTNAME, ct::PML_SLIDE_MASTER, template::SLIDE_MASTER_XML)
                .with_rels(master_rels),
        );

        for layout in SlideLayout::ALL {
            let mut layout_rels = Relationships::new();
            layout_rels.add(rt::SLIDE_MASTER, relative_to_ppt_subdir(MASTER_PARTNAME));
            pkg.add_part(
                Part::new(layout.partname(), ct::PML_SLIDE_LAYOUT, layout.xml())
                    .with_rels(layout_rels),
            );
        }

        pkg.add_part(Part::new(THEME_PARTNAME, ct::OFC_THEME, template::THEME_XML));

        for (index, slide) in self.slides.iter().enumerate() {
            let mut slide_rels = Relationships::new();
            slide_rels.add(rt::SLIDE_LAYOUT, relative_to_ppt_subdir(&slide.layout().partname()));
            pkg.add_part(
                Part::new(
                    format!("/ppt/slides/slide{}.xml", index + 1),
                    ct::PML_SLIDE,
                    slide.to_xml()?,
                )
                .with_rels(slide_rels),
            );
        }

        pkg.add_part(Part::new("/ppt/presProps.xml", ct::PML_PRES_PROPS, template::PRES_PROPS_XML));
        pkg.add_part(Part::new("/ppt/viewProps.xml", ct::PML_VIEW_PROPS, template::VIEW_PROPS_XML));
        pkg.add_part(Part::new(
            "/ppt/tableStyles.xml",
            ct::PML_TABLE_STYLES,
            template::TABLE_STYLES_XML,
        ));

        pkg.add_part(Part::new(
            "/docProps/core.xml",
            ct::OPC_CORE_PROPERTIES,
            template::core_props_xml(self.title.as_deref(), Utc::now()),
        ));
        pkg.add_part(Part::new(
            "/docProps/app.xml",
            ct::OFC_EXTENDED_PROPERTIES,
            template::app_props_xml(self.slides.len()),
        ));

        Ok(pkg)
    }

    /// Serialize the presentation to `.pptx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        PackageWriter::to_bytes(&self.to_package()?)
    }

    /// Write the presentation to `path`. The parent directory must exist.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let pkg = self.to_package()?;
        PackageWriter::write(path.as_ref(), &pkg)?;
        info!(
            path = %path.as_ref().display(),
            slides = self.slides.len(),
            parts = pkg.part_count(),
            "presentation saved"
        );
        Ok(())
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}

/// Target of a relationship between two parts in sibling `ppt/` subfolders,
/// e.g. `/ppt/theme/theme1.xml` -> `../theme/theme1.xml`.
fn relative_to_ppt_subdir(partname: &str) -> String {
    format!("..{}", partname.trim_start_matches("/ppt"))
}

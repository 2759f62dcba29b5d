//! Package writer for OPC packages.
//!
//! This module serializes an [`OpcPackage`] into a ZIP container,
//! including `[Content_Types].xml`, the package relationships, and every part
//! together with its relationships.

use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::{content_type as ct, namespace};
use crate::ooxml::opc::package::OpcPackage;
use std::collections::BTreeMap;
use std::io::{Cursor, Seek, Write};
use std::path::Path;
use tracing::debug;
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

pub const CONTENT_TYPES_MEMBER: &str = "[Content_Types].xml";
pub const PACKAGE_RELS_MEMBER: &str = "_rels/.rels";

/// Package writer that serializes an OPC package to a ZIP file.
///
/// # Example
///
/// ```no_run
/// use pipeline_decks::ooxml::opc::{OpcPackage, PackageWriter};
///
/// let pkg = OpcPackage::new();
/// // ... add parts to package ...
/// PackageWriter::write("output.pptx", &pkg)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct PackageWriter;

impl PackageWriter {
    /// Write an OPC package to a file.
    pub fn write<P: AsRef<Path>>(path: P, package: &OpcPackage) -> Result<()> {
        let bytes = Self::to_bytes(package)?;
        std::fs::write(path.as_ref(), &bytes)?;
        debug!(path = %path.as_ref().display(), bytes = bytes.len(), "package written");
        Ok(())
    }

    /// Serialize an OPC package to bytes.
    pub fn to_bytes(package: &OpcPackage) -> Result<Vec<u8>> {
        let cursor = Self::write_to_stream(Cursor::new(Vec::new()), package)?;
        Ok(cursor.into_inner())
    }

    /// Write an OPC package into any seekable stream and hand the stream back.
    pub fn write_to_stream<W: Write + Seek>(writer: W, package: &OpcPackage) -> Result<W> {
        let mut zip = zip::ZipWriter::new(writer);
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        // [Content_Types].xml goes first by convention
        let content_types = ContentTypesItem::from_package(package).to_xml();
        Self::write_member(&mut zip, options, CONTENT_TYPES_MEMBER, content_types.as_bytes())?;

        Self::write_member(
            &mut zip,
            options,
            PACKAGE_RELS_MEMBER,
            package.rels().to_xml().as_bytes(),
        )?;

        for part in package.iter_parts() {
            Self::write_member(&mut zip, options, part.member_name(), part.blob())?;

            if !part.rels().is_empty() {
                let rels_xml = part.rels().to_xml();
                Self::write_member(&mut zip, options, &part.rels_member_name(), rels_xml.as_bytes())?;
            }
        }

        Ok(zip.finish()?)
    }

    fn write_member<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        options: SimpleFileOptions,
        name: &str,
        data: &[u8],
    ) -> Result<()> {
        zip.start_file(name, options)?;
        zip.write_all(data)?;
        debug!(member = name, bytes = data.len(), "wrote package member");
        Ok(())
    }
}

/// Helper for building [Content_Types].xml content.
///
/// Manages Default and Override elements for content type mapping.
struct ContentTypesItem {
    /// Default content types by extension
    defaults: BTreeMap<String, &'static str>,

    /// Override content types by partname
    overrides: BTreeMap<String, &'static str>,
}

impl ContentTypesItem {
    fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS);
        defaults.insert("xml".to_string(), ct::XML);

        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    /// Build ContentTypesItem from an OPC package.
    fn from_package(package: &OpcPackage) -> Self {
        let mut cti = Self::new();

        for part in package.iter_parts() {
            cti.add_content_type(part.partname(), part.ext(), part.content_type());
        }

        cti
    }

    /// Uses a default mapping if the extension matches a well-known type,
    /// otherwise an override for the specific partname.
    fn add_content_type(&mut self, partname: &str, ext: &str, content_type: &'static str) {
        if Self::is_default_content_type(ext, content_type) {
            self.defaults.insert(ext.to_string(), content_type);
        } else {
            self.overrides.insert(partname.to_string(), content_type);
        }
    }

    fn is_default_content_type(ext: &str, content_type: &str) -> bool {
        matches!(
            (ext, content_type),
            ("rels", ct::OPC_RELATIONSHIPS) | ("xml", ct::XML)
        )
    }

    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<Types xmlns=""#);
        xml.push_str(namespace::OPC_CONTENT_TYPES);
        xml.push_str(r#"">"#);

        // BTreeMap keeps both lists sorted
        for (ext, content_type) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(content_type)
            ));
        }

        for (partname, content_type) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(content_type)
            ));
        }

        xml.push_str("</Types>");

        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;
    use crate::ooxml::opc::package::Part;
    use crate::ooxml::opc::rel::Relationships;
    use std::io::Read;

    fn sample_package() -> OpcPackage {
        let mut pkg = OpcPackage::new();
        pkg.rels_mut()
            .add(rt::OFFICE_DOCUMENT, "ppt/presentation.xml");

        let mut rels = Relationships::new();
        rels.add(rt::SLIDE, "slides/slide1.xml");
        pkg.add_part(
            Part::new("/ppt/presentation.xml", ct::PML_PRESENTATION_MAIN, "<p:presentation/>")
                .with_rels(rels),
        );
        pkg.add_part(Part::new("/ppt/slides/slide1.xml", ct::PML_SLIDE, "<p:sld/>"));
        pkg
    }

    #[test]
    fn test_content_types_xml() {
        let xml = ContentTypesItem::from_package(&sample_package()).to_xml();

        assert!(xml.contains(&format!(
            r#"<Default Extension="rels" ContentType="{}"/>"#,
            ct::OPC_RELATIONSHIPS
        )));
        assert!(xml.contains(&format!(
            r#"<Override PartName="/ppt/presentation.xml" ContentType="{}"/>"#,
            ct::PML_PRESENTATION_MAIN
        )));
        assert!(xml.contains(r#"<Override PartName="/ppt/slides/slide1.xml""#));
    }

    #[test]
    fn test_zip_members() {
        let bytes = PackageWriter::to_bytes(&sample_package()).unwrap();
        assert!(bytes.starts_with(b"PK\x03\x04"));

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.by_index(0).unwrap().name(), CONTENT_TYPES_MEMBER);

        let names: Vec<String> = archive.file_names().map(str::to_string).collect();
        assert!(names.contains(&PACKAGE_RELS_MEMBER.to_string()));
        assert!(names.contains(&"ppt/_rels/presentation.xml.rels".to_string()));
        // No rels member for a part without relationships
        assert!(!names.contains(&"ppt/slides/_rels/slide1.xml.rels".to_string()));

        let mut slide = String::new();
        archive
            .by_name("ppt/slides/slide1.xml")
            .unwrap()
            .read_to_string(&mut slide)
            .unwrap();
        assert_eq!(slide, "<p:sld/>");
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.zip");
        PackageWriter::write(&path, &sample_package()).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}

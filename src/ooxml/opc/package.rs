//! In-memory OPC package assembled before serialization.
//!
//! A package is a flat list of parts plus the package-level relationships
//! (`_rels/.rels`). Each part knows its absolute partname, content type,
//! serialized bytes, and its own outgoing relationships.

use crate::ooxml::opc::rel::Relationships;

/// A single part of an OPC package.
#[derive(Debug, Clone)]
pub struct Part {
    /// Absolute partname, e.g. `/ppt/slides/slide1.xml`
    partname: String,
    content_type: &'static str,
    blob: Vec<u8>,
    rels: Relationships,
}

impl Part {
    /// Create a part with no outgoing relationships.
    pub fn new(partname: impl Into<String>, content_type: &'static str, blob: impl Into<Vec<u8>>) -> Self {
        Self {
            partname: partname.into(),
            content_type,
            blob: blob.into(),
            rels: Relationships::new(),
        }
    }

    /// Attach outgoing relationships to this part.
    pub fn with_rels(mut self, rels: Relationships) -> Self {
        self.rels = rels;
        self
    }

    #[inline]
    pub fn partname(&self) -> &str {
        &self.partname
    }

    #[inline]
    pub fn content_type(&self) -> &'static str {
        self.content_type
    }

    #[inline]
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Extension of the partname, without the dot.
    pub fn ext(&self) -> &str {
        self.partname
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .unwrap_or("")
    }

    /// ZIP member name of this part (partname without the leading slash).
    pub fn member_name(&self) -> &str {
        self.partname.trim_start_matches('/')
    }

    /// ZIP member name of this part's relationships, e.g.
    /// `ppt/slides/_rels/slide1.xml.rels`.
    pub fn rels_member_name(&self) -> String {
        let member = self.member_name();
        match member.rsplit_once('/') {
            Some((dir, file)) => format!("{}/_rels/{}.rels", dir, file),
            None => format!("_rels/{}.rels", member),
        }
    }
}

/// An OPC package ready to be written.
#[derive(Debug, Clone, Default)]
pub struct OpcPackage {
    parts: Vec<Part>,
    rels: Relationships,
}

impl OpcPackage {
    /// Create an empty package.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a part. Parts are written in insertion order.
    pub fn add_part(&mut self, part: Part) {
        self.parts.push(part);
    }

    /// Package-level relationships (`_rels/.rels`).
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Mutable access to the package-level relationships.
    pub fn rels_mut(&mut self) -> &mut Relationships {
        &mut self.rels
    }

    /// Iterate over all parts in insertion order.
    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    /// Number of parts, not counting `[Content_Types].xml` and `.rels` members.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }
}

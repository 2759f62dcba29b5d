/// Relationship collections for OPC parts.
///
/// Every part that references another part carries a `.rels` sibling listing
/// those references by relationship ID. The writer only ever creates internal
/// relationships, numbered `rId1`, `rId2`, ... in insertion order.
use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;

/// A single relationship from a source part to a target part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: &'static str,

    /// Target reference, relative to the source part's directory
    target_ref: String,
}

impl Relationship {
    /// Get the relationship ID.
    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    /// Get the relationship type.
    #[inline]
    pub fn reltype(&self) -> &str {
        self.reltype
    }

    /// Get the target reference.
    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }
}

/// Ordered collection of relationships belonging to one source part.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    rels: Vec<Relationship>,
}

impl Relationships {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relationship and return its newly assigned ID.
    pub fn add(&mut self, reltype: &'static str, target_ref: impl Into<String>) -> String {
        let r_id = format!("rId{}", self.rels.len() + 1);
        self.rels.push(Relationship {
            r_id: r_id.clone(),
            reltype,
            target_ref: target_ref.into(),
        });
        r_id
    }

    /// Number of relationships.
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    /// Whether there are no relationships.
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Iterate in rId order.
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    /// Serialize to the `.rels` XML format.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<Relationships xmlns=""#);
        xml.push_str(namespace::OPC_RELATIONSHIPS);
        xml.push_str(r#"">"#);

        for rel in &self.rels {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(rel.r_id()),
                escape_xml(rel.reltype()),
                escape_xml(rel.target_ref()),
            ));
        }

        xml.push_str("</Relationships>");

        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;

    #[test]
    fn test_sequential_ids() {
        let mut rels = Relationships::new();
        assert!(rels.is_empty());
        assert_eq!(rels.add(rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml"), "rId1");
        assert_eq!(rels.add(rt::SLIDE, "slides/slide1.xml"), "rId2");
        assert_eq!(rels.len(), 2);

        let targets: Vec<_> = rels.iter().map(|r| r.target_ref()).collect();
        assert_eq!(targets, ["slideMasters/slideMaster1.xml", "slides/slide1.xml"]);
    }

    #[test]
    fn test_rels_xml() {
        let mut rels = Relationships::new();
        rels.add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout2.xml");
        let xml = rels.to_xml();

        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains(r#"Id="rId1""#));
        assert!(xml.contains(rt::SLIDE_LAYOUT));
        assert!(xml.contains(r#"Target="../slideLayouts/slideLayout2.xml""#));
        assert!(xml.ends_with("</Relationships>"));
    }
}

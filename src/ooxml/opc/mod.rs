//! Open Packaging Conventions (OPC) writing layer.
//!
//! An OOXML file is a ZIP container of XML "parts" tied together by
//! relationship parts and described by `[Content_Types].xml`. This module
//! models just enough of that to emit a package.

pub mod constants;
pub mod package;
pub mod pkgwriter;
pub mod rel;

pub use package::{OpcPackage, Part};
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};

//! Office Open XML (OOXML) writing.
//!
//! Two layers:
//!
//! 1. **OPC layer** (`opc`): parts, relationships, content types and the ZIP
//!    container
//! 2. **PresentationML** (`pptx`): slides, shapes and the fixed template parts
//!
//! Errors from both layers are reported as [`OoxmlError`].
pub mod error;
pub mod opc;
pub mod pptx;

pub use error::{OoxmlError, Result};
pub use opc::OpcPackage;

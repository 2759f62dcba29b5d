//! Pipeline decks - diagram slide decks written as PowerPoint (.pptx) files
//!
//! This crate assembles two fixed diagram decks and writes them with a small
//! PresentationML writer of its own.
//!
//! # Features
//!
//! - **Research pipeline deck**: one 16:9 slide, a chevron row from theory to
//!   software platform
//! - **Hybrid models deck**: two 4:3 slides of macroscale and mesoscale
//!   learning loops with feedback connectors
//! - **Diagram helpers**: anchor points on shape bounds, left-to-right and
//!   elbow feedback connectors
//! - **PPTX writer**: slides, text boxes, preset shapes, connectors, and the
//!   OPC package around them
//!
//! # Example - Writing a deck
//!
//! ```no_run
//! use pipeline_decks::decks::research_pipeline;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let slides = research_pipeline::run(Path::new(research_pipeline::DEFAULT_OUTPUT))?;
//! assert_eq!(slides, 1);
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Connecting two boxes
//!
//! ```no_run
//! use pipeline_decks::common::unit::inches;
//! use pipeline_decks::diagram::{connect_lr, ArrowStyle, Bounds};
//! use pipeline_decks::ooxml::pptx::{MutablePresentation, PresetGeometry, SlideLayout};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut pres = MutablePresentation::new();
//! let slide = pres.add_slide(SlideLayout::Blank)?;
//!
//! let a = Bounds::new(inches(1.0), inches(2.0), inches(2.0), inches(1.0));
//! let b = Bounds::new(inches(4.0), inches(2.0), inches(2.0), inches(1.0));
//! slide.add_auto_shape(PresetGeometry::Rectangle, a).text("A");
//! slide.add_auto_shape(PresetGeometry::Rectangle, b).text("B");
//! connect_lr(slide, &a, &b, &ArrowStyle::default());
//!
//! pres.save("two-boxes.pptx")?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod common;
pub mod decks;
pub mod diagram;
pub mod ooxml;

pub use common::RGBColor;
pub use ooxml::{OoxmlError, Result};

//! PowerPoint (.pptx) presentation writing.
//!
//! The writer builds slides in memory and serializes them, together with a
//! fixed master, two layouts and a theme, into a PresentationML package:
//!
//! - [`MutablePresentation`]: canvas size, slides, `save`
//! - [`MutableSlide`]: title placeholder, background, shapes
//! - [`MutableShape`]: text boxes, preset auto shapes, straight connectors
//!
//! # Example
//!
//! ```rust,no_run
//! use pipeline_decks::common::RGBColor;
//! use pipeline_decks::common::unit::{inches, pt};
//! use pipeline_decks::diagram::geometry::Bounds;
//! use pipeline_decks::ooxml::pptx::{MutablePresentation, PresetGeometry, SlideLayout};
//!
//! let mut pres = MutablePresentation::new();
//! let slide = pres.add_slide(SlideLayout::Blank)?;
//! slide
//!     .add_auto_shape(
//!         PresetGeometry::RoundedRectangle,
//!         Bounds::new(inches(1.0), inches(1.0), inches(2.0), inches(1.0)),
//!     )
//!     .fill(RGBColor::new(235, 232, 255))
//!     .outline(RGBColor::new(140, 114, 219), pt(1.25))
//!     .text("Macro Data");
//! pres.save("example.pptx")?;
//! # Ok::<(), pipeline_decks::ooxml::OoxmlError>(())
//! ```

pub mod backgrounds;
pub mod format;
pub mod template;
pub mod writer;

pub use backgrounds::SlideBackground;
pub use format::{
    ArrowheadStyle, DashStyle, LineFormat, PresetGeometry, TextAlign, TextFormat, VerticalAnchor,
};
pub use template::SlideLayout;
pub use writer::{MutablePresentation, MutableShape, MutableSlide, TextFrame};

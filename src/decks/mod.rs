//! The two generated decks.
//!
//! Each deck module exposes `build`, which assembles the presentation in
//! memory, and `run`, which builds it and writes it to disk.

pub mod hybrid_models;
pub mod research_pipeline;

use crate::ooxml::error::Result;
use crate::ooxml::pptx::MutablePresentation;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Save `pres` to `output`, creating the parent directory if needed.
///
/// Returns the number of slides written.
pub(crate) fn save_deck(pres: &MutablePresentation, output: &Path) -> Result<usize> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
        debug!(dir = %parent.display(), "output directory ready");
    }

    pres.save(output)?;
    info!(path = %output.display(), slides = pres.slide_count(), "deck written");
    Ok(pres.slide_count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::SlideLayout;

    #[test]
    fn test_save_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("nested").join("out").join("deck.pptx");

        let mut pres = MutablePresentation::new();
        pres.add_slide(SlideLayout::Blank).unwrap();
        assert_eq!(save_deck(&pres, &output).unwrap(), 1);
        assert!(output.is_file());
    }
}

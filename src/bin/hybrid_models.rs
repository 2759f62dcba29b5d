//! Writes the hybrid models deck.
//!
//! ```sh
//! hybrid-models                     # hybrid_models.pptx
//! hybrid-models --output decks/hybrid.pptx
//! ```

use clap::Parser;
use pipeline_decks::cli::{DeckArgs, init_logging};
use pipeline_decks::decks::hybrid_models;
use pipeline_decks::ooxml::OoxmlError;

/// Generate the hybrid models slide deck
#[derive(Parser, Debug)]
#[command(
    name = "hybrid-models",
    about = "Generate the macro/meso hybrid modeling loops deck (.pptx)",
    version
)]
struct Args {
    #[command(flatten)]
    deck: DeckArgs,
}

fn main() -> Result<(), OoxmlError> {
    let args = Args::parse();
    init_logging(args.deck.verbose);

    let output = args.deck.output_or(hybrid_models::DEFAULT_OUTPUT);
    let slides = hybrid_models::run(&output)?;

    println!("Generated {} with {} slides.", output.display(), slides);
    Ok(())
}

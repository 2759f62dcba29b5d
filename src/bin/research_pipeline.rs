//! Writes the research pipeline deck.
//!
//! ```sh
//! research-pipeline                 # output/research-pipeline.pptx
//! research-pipeline -o deck.pptx -v
//! ```

use clap::Parser;
use pipeline_decks::cli::{DeckArgs, init_logging};
use pipeline_decks::decks::research_pipeline;
use pipeline_decks::ooxml::OoxmlError;

/// Generate the research pipeline slide deck
#[derive(Parser, Debug)]
#[command(
    name = "research-pipeline",
    about = "Generate a one-slide research pipeline deck (.pptx)",
    version
)]
struct Args {
    #[command(flatten)]
    deck: DeckArgs,
}

fn main() -> Result<(), OoxmlError> {
    let args = Args::parse();
    init_logging(args.deck.verbose);

    let output = args.deck.output_or(research_pipeline::DEFAULT_OUTPUT);
    research_pipeline::run(&output)?;

    println!("Saved -> {}", output.display());
    Ok(())
}

//! Command-line plumbing shared by the deck binaries.

use clap::Args;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Options every deck binary accepts.
#[derive(Args, Debug, Clone, Default)]
pub struct DeckArgs {
    /// Write the deck here instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

impl DeckArgs {
    /// The requested output path, or `default` when none was given.
    pub fn output_or(&self, default: &str) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(default))
    }
}

/// Install the global log subscriber.
///
/// `RUST_LOG` selects the filter; without it only warnings are shown, or
/// everything from this crate at debug level with `verbose`.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(concat!(env!("CARGO_CRATE_NAME"), "=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // Logs go to stderr so stdout carries only the result line
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        deck: DeckArgs,
    }

    #[test]
    fn test_defaults_to_fixed_path() {
        let cli = TestCli::parse_from(["deck"]);
        assert!(!cli.deck.verbose);
        assert_eq!(cli.deck.output_or("out/a.pptx"), PathBuf::from("out/a.pptx"));
    }

    #[test]
    fn test_output_override() {
        let cli = TestCli::parse_from(["deck", "-v", "--output", "x/y.pptx"]);
        assert!(cli.deck.verbose);
        assert_eq!(cli.deck.output_or("out/a.pptx"), PathBuf::from("x/y.pptx"));
    }
}

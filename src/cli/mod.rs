//! CLI interface for plugview.
//!
//! Provides command-line argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Default number of result cards to render.
pub const DEFAULT_RESULT_LIMIT: usize = 10;

/// When to emit ANSI colors for highlighted matches.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal (default).
    #[default]
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

impl ColorMode {
    /// Resolve the mode against the current stdout.
    #[must_use]
    pub fn enabled(self) -> bool {
        match self {
            Self::Auto => atty::is(atty::Stream::Stdout),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Command-line interface for plugview.
#[derive(Parser)]
#[command(name = "plugview")]
#[command(author, version, about = "Render plugin search results with match previews", long_about = None)]
pub struct Cli {
    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Render a search-results file as result cards.
    Render {
        /// Path to the results file produced by the search engine.
        results: PathBuf,

        /// Maximum number of result cards to render.
        #[arg(short, long, default_value_t = DEFAULT_RESULT_LIMIT)]
        limit: usize,

        /// Characters of context on each side of a description match.
        #[arg(short = 'w', long)]
        context_width: Option<usize>,

        /// When to use ANSI colors for highlighted matches.
        #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
        color: ColorMode,
    },

    /// Extract a context window around a matched span from a text.
    Preview {
        /// Start of the matched span (character offset, inclusive).
        start: usize,

        /// End of the matched span (character offset, inclusive).
        end: usize,

        /// Read the text from a file instead of stdin.
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Characters of context on each side of the span.
        #[arg(short = 'w', long)]
        context_width: Option<usize>,
    },

    /// Check a plugin index file against the record schema.
    Validate {
        /// Path to the plugin index file.
        index: PathBuf,
    },
}

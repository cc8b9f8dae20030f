//! Command implementations behind the CLI.

use std::path::Path;

use anyhow::Context;

use crate::config::Config;
use crate::registry::Registry;
use crate::render::{self, RenderOptions};
use crate::search::Results;
use crate::snippet::{self, Span};

/// Render a search-results file as result cards.
///
/// # Arguments
///
/// * `results_path` - Path to the results file produced by the search engine
/// * `limit` - Maximum number of result cards to render
/// * `context_width` - Override for the configured preview context width
/// * `use_color` - Whether to emit ANSI highlighting
///
/// # Errors
///
/// Returns an error if config loading fails or the results file cannot be
/// loaded.
pub fn render(
    results_path: &Path,
    limit: usize,
    context_width: Option<usize>,
    use_color: bool,
) -> anyhow::Result<String> {
    let config = Config::load()?;

    let mut results = Results::load(results_path)
        .with_context(|| format!("Render failed for {}", results_path.display()))?;
    results.hits.truncate(limit);

    let options = RenderOptions {
        context_width: context_width.unwrap_or(config.preview.context_width),
        use_color,
    };

    Ok(render::render_results(&results.hits, &options))
}

/// Extract a context window around `[start, end]` from `text`.
///
/// # Errors
///
/// Returns an error if config loading fails or the span doesn't fit the
/// text.
pub fn preview(
    text: &str,
    start: usize,
    end: usize,
    context_width: Option<usize>,
) -> anyhow::Result<String> {
    let config = Config::load()?;
    let width = context_width.unwrap_or(config.preview.context_width);

    let preview = snippet::extract(text, Span::new(start, end), width)
        .context("Preview failed")?;

    Ok(preview.text)
}

/// Check a plugin index file against the record schema.
///
/// # Errors
///
/// Returns an error if the index cannot be read or a record doesn't match
/// the schema.
pub fn validate(index_path: &Path) -> anyhow::Result<String> {
    let registry = Registry::load(index_path)
        .with_context(|| format!("Validation failed for {}", index_path.display()))?;

    Ok(format!("{} plugin record(s) OK", registry.plugins().len()))
}

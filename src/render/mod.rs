//! Search-result card assembly.
//!
//! Every displayable field goes through the same decision: no match means
//! the raw text, a match on a short field (name, summary, author name) is
//! highlighted in place, and a match on the long description is first cut
//! down to a context window so highlighting operates on the bounded
//! preview. A match whose offsets turn out to be unusable falls back to
//! the plain description text rather than failing the card.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::highlight::highlight_matches;
use crate::registry::Plugin;
use crate::search::{FieldMatch, Hit};
use crate::snippet::{self, DEFAULT_CONTEXT_WIDTH};

/// Placeholder shown for metadata a plugin did not submit.
const MISSING_VALUE: &str = "information not submitted";

/// Category dimensions hidden from the card.
const HIDDEN_DIMENSION: &str = "Supported data";

/// Rendering knobs shared by all cards in one run.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Characters of context on each side of a description match.
    pub context_width: usize,
    /// Whether to emit ANSI highlighting.
    pub use_color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            context_width: DEFAULT_CONTEXT_WIDTH,
            use_color: false,
        }
    }
}

/// Render a full result listing: one card per hit, blank-line separated,
/// with a result-count trailer.
#[must_use]
pub fn render_results(hits: &[Hit], options: &RenderOptions) -> String {
    if hits.is_empty() {
        return "No results found.".to_string();
    }

    let mut output = String::new();
    for hit in hits {
        output.push_str(&render_hit(hit, options));
        output.push('\n');
    }
    let _ = write!(output, "{} result(s) found", hits.len());

    output
}

/// Render a single search-result card.
#[must_use]
pub fn render_hit(hit: &Hit, options: &RenderOptions) -> String {
    let plugin = &hit.plugin;
    let matches = &hit.matches;
    let mut card = String::new();

    let _ = writeln!(
        card,
        "{}",
        render_field(&plugin.name, matches.get("name"), options)
    );

    if !plugin.summary.is_empty() {
        let _ = writeln!(
            card,
            "  {}",
            render_field(&plugin.summary, matches.get("summary"), options)
        );
    }

    for author in &plugin.authors {
        let _ = writeln!(
            card,
            "  by {}",
            render_field(&author.name, matches.get(author.name.as_str()), options)
        );
    }

    if let Some(m) = matches.get("description_text")
        && let Some(line) = description_preview(plugin, m, options)
    {
        let _ = writeln!(card, "  {line}");
    }

    for (label, value) in metadata_items(plugin) {
        let shown = if value.is_empty() {
            MISSING_VALUE.to_string()
        } else {
            value
        };
        let _ = writeln!(card, "  {label}: {shown}");
    }

    let chips = category_chips(plugin);
    if !chips.is_empty() {
        let _ = writeln!(card, "  {}", chips.join(" "));
    }

    card
}

/// Highlight a short field in place when the engine matched it.
fn render_field(text: &str, m: Option<&FieldMatch>, options: &RenderOptions) -> String {
    match m {
        Some(m) => highlight_matches(text, &[&m.word], options.use_color),
        None => text.to_string(),
    }
}

/// The windowed, highlighted description line, if there is one to show.
///
/// Unusable offsets degrade to the plain full text; an empty description
/// yields nothing either way.
fn description_preview(plugin: &Plugin, m: &FieldMatch, options: &RenderOptions) -> Option<String> {
    match snippet::extract(&plugin.description_text, m.span(), options.context_width) {
        Ok(preview) if preview.text.is_empty() => None,
        Ok(preview) => Some(highlight_matches(
            &preview.text,
            &[&m.word],
            options.use_color,
        )),
        Err(_) if plugin.description_text.is_empty() => None,
        Err(_) => Some(plugin.description_text.clone()),
    }
}

/// Metadata lines in display order. Values may be empty; the caller
/// substitutes the placeholder.
fn metadata_items(plugin: &Plugin) -> Vec<(&'static str, String)> {
    vec![
        ("version", plugin.version.clone().unwrap_or_default()),
        (
            "release date",
            plugin
                .release_date
                .as_deref()
                .map(format_date)
                .unwrap_or_default(),
        ),
        ("license", plugin.license.clone().unwrap_or_default()),
        (
            "Python version",
            plugin.python_version.clone().unwrap_or_default(),
        ),
        (
            "operating system",
            plugin
                .operating_system
                .iter()
                .map(|os| format_operating_system(os))
                .collect::<Vec<_>>()
                .join(", "),
        ),
    ]
}

/// Format an ISO release date as "13 April 2021"; unparseable input is
/// shown as-is.
fn format_date(raw: &str) -> String {
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_or_else(|_| raw.to_string(), |d| d.format("%-d %B %Y").to_string())
}

/// Shorten a trove classifier to its final segment, e.g.
/// "Operating System :: POSIX :: Linux" to "Linux".
fn format_operating_system(classifier: &str) -> &str {
    classifier.rsplit(" :: ").next().unwrap_or(classifier)
}

/// Bracketed category labels across all visible dimensions.
fn category_chips(plugin: &Plugin) -> Vec<String> {
    plugin
        .category
        .iter()
        .filter(|(dimension, _)| !dimension.contains(HIDDEN_DIMENSION))
        .flat_map(|(_, labels)| labels.iter().map(|label| format!("[{label}]")))
        .collect()
}

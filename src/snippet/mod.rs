//! Context-window extraction around a match in a long text.
//!
//! The search engine reports where a word matched inside a plugin's
//! description; showing the whole description would drown the card, so we
//! cut a window: the matched span plus a fixed number of characters of
//! context on each side. When the window would run past one edge of the
//! text, the unused budget is spent on the other side, keeping the preview
//! close to full width even for matches near the edges. `"..."` markers are
//! added only where the preview stops short of the text.
//!
//! Offsets count characters (Unicode scalar values), not bytes. Slicing is
//! always on char boundaries, so multi-byte text never panics.

use std::ops::Range;

use thiserror::Error;

/// Default number of characters shown on each side of a match.
pub const DEFAULT_CONTEXT_WIDTH: usize = 40;

/// Marker added where a preview stops short of a text edge.
const ELLIPSIS: &str = "...";

/// Errors for spans that cannot be windowed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnippetError {
    #[error("invalid span: start {start} is after end {end}")]
    StartAfterEnd { start: usize, end: usize },

    #[error("span end {end} out of bounds for text of {len} characters")]
    OutOfBounds { end: usize, len: usize },
}

/// An inclusive character range locating a match within a text.
///
/// This is the coordinate form the search engine reports: both `start` and
/// `end` point at matched characters, so a single-character match has
/// `start == end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A bounded preview of a longer text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// The preview text, including any ellipsis markers.
    pub text: String,
    /// Where the matched span landed inside `text`, in character offsets.
    /// Half-open, and empty only when the source text was empty.
    pub highlight: Range<usize>,
}

/// Extract a context window around `span` from `text`.
///
/// The window covers `span` plus up to `context_width` characters on each
/// side. Budget that would run past one edge of the text is given to the
/// other side; the two adjustments are computed independently from the
/// unclamped window, so one side's overflow never reclaims budget already
/// granted to the other. Ellipsis markers are added only where the preview
/// stops short of the text's edges, and the returned highlight range
/// accounts for them.
///
/// Empty text yields an empty preview for any span.
///
/// # Errors
///
/// Returns `SnippetError` when `span.start > span.end` or `span.end` is
/// past the last character of a non-empty text. Callers rendering search
/// results should fall back to the plain, unhighlighted text.
pub fn extract(text: &str, span: Span, context_width: usize) -> Result<Preview, SnippetError> {
    // Byte offset of each character, so char positions map to slice bounds.
    let boundaries: Vec<usize> = text.char_indices().map(|(offset, _)| offset).collect();
    let char_count = boundaries.len();

    if char_count == 0 {
        return Ok(Preview {
            text: String::new(),
            highlight: 0..0,
        });
    }

    if span.start > span.end {
        return Err(SnippetError::StartAfterEnd {
            start: span.start,
            end: span.end,
        });
    }

    let max_index = char_count - 1;
    if span.end > max_index {
        return Err(SnippetError::OutOfBounds {
            end: span.end,
            len: char_count,
        });
    }

    let mut preview_start = span.start.saturating_sub(context_width);
    let mut preview_end = span.end.saturating_add(context_width).min(max_index);

    // Deficits are measured against the unclamped window on each side.
    let left_deficit = context_width.saturating_sub(span.start);
    let right_deficit = span
        .end
        .saturating_add(context_width)
        .saturating_sub(max_index);

    if left_deficit > 0 {
        preview_end = preview_end.saturating_add(left_deficit).min(max_index);
    }
    if right_deficit > 0 {
        preview_start = preview_start.saturating_sub(right_deficit);
    }

    let byte_start = boundaries[preview_start];
    let byte_end = boundaries
        .get(preview_end + 1)
        .copied()
        .unwrap_or(text.len());

    let mut preview = String::new();
    if preview_start > 0 {
        preview.push_str(ELLIPSIS);
    }
    let lead = if preview_start > 0 { ELLIPSIS.len() } else { 0 };
    preview.push_str(&text[byte_start..byte_end]);
    if preview_end < max_index {
        preview.push_str(ELLIPSIS);
    }

    let highlight_start = lead + (span.start - preview_start);
    let highlight_end = highlight_start + (span.end - span.start) + 1;

    Ok(Preview {
        text: preview,
        highlight: highlight_start..highlight_end,
    })
}

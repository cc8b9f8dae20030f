//! ANSI marking of matched words in a rendered field.
//!
//! Relocation is by case-insensitive string search within the text being
//! rendered. For description previews that text is the windowed snippet,
//! which is guaranteed to still contain the matched word.

use regex::RegexBuilder;

/// Escape sequence opening a highlighted region (bold red, grep-style).
const HIGHLIGHT_ON: &str = "\x1b[1;31m";
/// Escape sequence closing a highlighted region.
const HIGHLIGHT_OFF: &str = "\x1b[0m";

/// Mark every case-insensitive occurrence of each word in `text`.
///
/// Empty words are skipped. With `use_color` off the text comes back
/// unchanged, keeping output pipe-friendly.
#[must_use]
pub fn highlight_matches(text: &str, words: &[&str], use_color: bool) -> String {
    if !use_color {
        return text.to_string();
    }

    let mut result = text.to_string();

    for word in words {
        if word.is_empty() {
            continue;
        }

        let re = RegexBuilder::new(&regex::escape(word))
            .case_insensitive(true)
            .build();

        if let Ok(re) = re {
            result = re
                .replace_all(&result, |caps: &regex::Captures| {
                    format!("{HIGHLIGHT_ON}{}{HIGHLIGHT_OFF}", &caps[0])
                })
                .to_string();
        }
    }

    result
}

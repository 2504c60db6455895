//! Text normalization for raw model output.
//!
//! Total functions over any string input; never panic, never error.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Maximum entries kept in a normalized list.
pub const MAX_LIST_ITEMS: usize = 6;

/// A leading list marker: a run of bullet-like glyphs, or a numeric prefix
/// followed by `.`, `)`, `-`, or a bullet. Stripped once per line, not
/// recursively.
static LIST_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:[•\-*–—]+|\d+[.)\-•]*)?\s*").expect("list marker pattern is valid")
});

/// Quote characters stripped from both ends of a restaurant name.
const QUOTE_CHARS: [char; 7] = ['"', '\'', '\u{201c}', '\u{201d}', '\u{2018}', '\u{2019}', '`'];

/// Turns raw model text into a clean, deduplicated, bounded list.
///
/// Splits into lines, trims, strips one leading list marker per line, drops
/// lines left empty, deduplicates preserving first-seen order, and truncates
/// to [`MAX_LIST_ITEMS`].
///
/// # Examples
///
/// ```
/// use escoffier_pipeline::normalize_lines;
///
/// let items = normalize_lines("- Pad Thai\n- Pad Thai\n2. Tom Yum\n\n* Green Curry");
/// assert_eq!(items, vec!["Pad Thai", "Tom Yum", "Green Curry"]);
/// ```
pub fn normalize_lines(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut items = Vec::new();

    for raw_line in raw.lines() {
        let stripped = raw_line.trim();
        if stripped.is_empty() {
            continue;
        }
        let normalized = LIST_MARKER_RE.replace(stripped, "").trim().to_string();
        if normalized.is_empty() {
            continue;
        }
        if seen.insert(normalized.clone()) {
            items.push(normalized);
        }
    }

    items.truncate(MAX_LIST_ITEMS);
    items
}

/// Strips whitespace and surrounding quotes from a raw restaurant name.
///
/// # Examples
///
/// ```
/// use escoffier_pipeline::clean_restaurant_name;
///
/// assert_eq!(clean_restaurant_name(" \"Spice Route\"  "), "Spice Route");
/// ```
pub fn clean_restaurant_name(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c: char| QUOTE_CHARS.contains(&c))
        .trim()
        .to_string()
}

//! Clean-up of model replies before display.

use std::sync::LazyLock;

use regex::Regex;

/// Rewrite rules applied in order: pattern and replacement.
const RULES: &[(&str, &str)] = &[
    (r"(?i)\b(based on|from)\s+(the\s+)?(provided\s+)?context\b[:,]?\s*", ""),
    (r"(?i)\b(based on|from)\s+our\s+context\b[:,]?\s*", ""),
    (r"(?i)\b(in|from)\s+this\s+context\b[:,]?\s*", ""),
    (r"\*\*(.+?)\*\*", "$1"),
    (r"`{1,3}([^`]+?)`{1,3}", "$1"),
    (r"(?m)^\s*[-*]\s+", "• "),
    (r"(?m)^\s*(\d+)[.)]\s+", "${1}. "),
    (r"\n{3,}", "\n\n"),
];

static COMPILED: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    RULES
        .iter()
        .filter_map(|(pattern, replacement)| Regex::new(pattern).ok().map(|re| (re, *replacement)))
        .collect()
});

/// Turn a model reply into plain display text.
///
/// Drops phrases that refer to "the context", strips `**bold**` and
/// backtick markers, rewrites `-`/`*` bullets as `•`, normalizes numbered
/// list markers to `N. `, and collapses runs of blank lines.
pub fn format_assistant_text(text: &str) -> String {
    let mut out = text.replace("\r\n", "\n");
    for (re, replacement) in COMPILED.iter() {
        out = re.replace_all(&out, *replacement).into_owned();
    }
    out.trim().to_string()
}

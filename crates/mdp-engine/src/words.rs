//! Word counting over Markdown source.
//!
//! Syntax markers are stripped with a fixed sequence of substitutions, then
//! the remaining text is split on whitespace.

use std::sync::LazyLock;

use regex::Regex;

/// Strip rules in application order: pattern and replacement.
///
/// Fenced blocks and images go first so that the inline code and link
/// rules cannot consume their delimiters.
const STRIP_TABLE: &[(&str, &str)] = &[
    (r"```(?s:.*?)```", ""),
    (r"!\[[^\]]*\]\([^)]+\)", ""),
    (r"#{1,6}\s", ""),
    (r"\*\*([^*]+)\*\*", "${1}"),
    (r"\*([^*]+)\*", "${1}"),
    (r"`([^`]+)`", "${1}"),
    (r"\[([^\]]+)\]\([^)]+\)", "${1}"),
    (r"(?m)^[-*+]\s", ""),
    (r"(?m)^[0-9]+\.\s", ""),
    (r"(?m)^>\s", ""),
    (r"\|", " "),
    (r"---", ""),
];

static STRIP_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    STRIP_TABLE
        .iter()
        .map(|&(pattern, replacement)| (Regex::new(pattern).unwrap(), replacement))
        .collect()
});

/// Count the words of a Markdown document, ignoring syntax markers.
pub(crate) fn count(markdown: &str) -> usize {
    if markdown.is_empty() {
        return 0;
    }
    let text = STRIP_RULES
        .iter()
        .fold(markdown.to_owned(), |acc, (pattern, replacement)| {
            pattern.replace_all(&acc, *replacement).into_owned()
        });
    text.split_whitespace().count()
}

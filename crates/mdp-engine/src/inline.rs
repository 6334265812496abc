//! Inline substitution rules.
//!
//! Rules are global regex substitutions applied in table order, each over
//! the output of the previous one. Patterns are multi-line and CRLF aware,
//! so `^`/`$` anchor at line boundaries and `.` never crosses one.
//!
//! Link runs before image, so `![alt](src)` with a non-empty `alt` is
//! turned into `!` followed by a link and never reaches the image rule.

use std::sync::LazyLock;

use regex::Regex;

/// A single substitution: pattern and `$`-style replacement template.
struct InlineRule {
    pattern: Regex,
    replacement: &'static str,
}

/// Rule table in application order.
const RULE_TABLE: &[(&str, &str)] = &[
    // Headings: h3, h2, h1 first, then h4-h6. The mandatory space after the
    // hashes pins each pattern to an exact count.
    (r"(?mR)^### (.*)$", "<h3>${1}</h3>"),
    (r"(?mR)^## (.*)$", "<h2>${1}</h2>"),
    (r"(?mR)^# (.*)$", "<h1>${1}</h1>"),
    (r"(?mR)^#### (.*)$", "<h4>${1}</h4>"),
    (r"(?mR)^##### (.*)$", "<h5>${1}</h5>"),
    (r"(?mR)^###### (.*)$", "<h6>${1}</h6>"),
    // Horizontal rules
    (r"(?mR)^---$", "<hr>"),
    (r"(?mR)^\*\*\*$", "<hr>"),
    // Emphasis, longest delimiter first
    (r"(?R)\*\*\*(.*?)\*\*\*", "<strong><em>${1}</em></strong>"),
    (r"(?R)\*\*(.*?)\*\*", "<strong>${1}</strong>"),
    (r"(?R)\*(.*?)\*", "<em>${1}</em>"),
    (r"(?R)__(.*?)__", "<strong>${1}</strong>"),
    (r"(?R)_(.*?)_", "<em>${1}</em>"),
    // Inline code
    (r"`([^`]+)`", "<code>${1}</code>"),
    // Links
    (
        r"\[([^\]]+)\]\(([^)]+)\)",
        r#"<a href="${2}" target="_blank" rel="noopener noreferrer">${1}</a>"#,
    ),
    // Images. The style value keeps the spaced form the web previewer
    // emitted (`max-width: 100%; height: auto;`).
    (
        r"!\[([^\]]*)\]\(([^)]+)\)",
        r#"<img src="${2}" alt="${1}" style="max-width: 100%; height: auto;">"#,
    ),
];

static RULES: LazyLock<Vec<InlineRule>> = LazyLock::new(|| {
    RULE_TABLE
        .iter()
        .map(|&(pattern, replacement)| InlineRule {
            pattern: Regex::new(pattern).unwrap(),
            replacement,
        })
        .collect()
});

/// Apply every inline rule, in order, across the whole text.
pub(crate) fn process(text: &str) -> String {
    RULES.iter().fold(text.to_owned(), |acc, rule| {
        rule.pattern
            .replace_all(&acc, rule.replacement)
            .into_owned()
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_headings_all_levels() {
        assert_eq!(
            process("# a\n## b\n### c\n#### d\n##### e\n###### f"),
            "<h1>a</h1>\n<h2>b</h2>\n<h3>c</h3>\n<h4>d</h4>\n<h5>e</h5>\n<h6>f</h6>"
        );
    }

    #[test]
    fn test_seven_hashes_not_heading() {
        assert_eq!(process("####### x"), "####### x");
    }

    #[test]
    fn test_heading_requires_space() {
        assert_eq!(process("#tag"), "#tag");
    }

    #[test]
    fn test_heading_only_at_line_start() {
        assert_eq!(process("text # not"), "text # not");
    }

    #[test]
    fn test_heading_crlf() {
        assert_eq!(process("# Title\r\nnext"), "<h1>Title</h1>\r\nnext");
    }

    #[test]
    fn test_horizontal_rules() {
        assert_eq!(process("---\n***"), "<hr>\n<hr>");
    }

    #[test]
    fn test_rule_needs_whole_line() {
        assert_eq!(process("a --- b"), "a --- b");
    }

    #[test]
    fn test_bold_italic() {
        assert_eq!(process("***both***"), "<strong><em>both</em></strong>");
    }

    #[test]
    fn test_bold_and_italic() {
        assert_eq!(
            process("**bold** and *italic*"),
            "<strong>bold</strong> and <em>italic</em>"
        );
    }

    #[test]
    fn test_underscore_emphasis() {
        assert_eq!(
            process("__bold__ and _italic_"),
            "<strong>bold</strong> and <em>italic</em>"
        );
    }

    #[test]
    fn test_emphasis_does_not_span_lines() {
        assert_eq!(process("*a\nb*"), "*a\nb*");
    }

    #[test]
    fn test_underscores_in_words_become_emphasis() {
        assert_eq!(process("snake_case_name"), "snake<em>case</em>name");
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(process("use `cargo`"), "use <code>cargo</code>");
    }

    #[test]
    fn test_link() {
        assert_eq!(
            process("[docs](https://example.com)"),
            r#"<a href="https://example.com" target="_blank" rel="noopener noreferrer">docs</a>"#
        );
    }

    #[test]
    fn test_image_with_empty_alt() {
        assert_eq!(
            process("![](logo.png)"),
            r#"<img src="logo.png" alt="" style="max-width: 100%; height: auto;">"#
        );
    }

    #[test]
    fn test_image_with_alt_consumed_by_link_rule() {
        assert_eq!(
            process("![logo](logo.png)"),
            r#"!<a href="logo.png" target="_blank" rel="noopener noreferrer">logo</a>"#
        );
    }

    #[test]
    fn test_emphasis_inside_link_label() {
        assert_eq!(
            process("[**x**](u)"),
            r#"<a href="u" target="_blank" rel="noopener noreferrer"><strong>x</strong></a>"#
        );
    }
}

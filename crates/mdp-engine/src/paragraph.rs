//! Paragraph wrapping.
//!
//! Runs last. Lines that already carry block-level HTML pass through
//! verbatim; runs of remaining text lines become `<p>` elements.

/// Tag openers that mark a line as already rendered HTML.
///
/// Matched as plain substrings, so `<p` also matches `<pre` and `<a`
/// matches `<abbr`.
const HTML_BLOCK_OPENERS: &[&str] = &[
    "<h1",
    "<h2",
    "<h3",
    "<h4",
    "<h5",
    "<h6",
    "<p",
    "<div",
    "<ul",
    "<ol",
    "<li",
    "<blockquote",
    "<pre",
    "<table",
    "<tr",
    "<td",
    "<th",
    "<hr",
    "<img",
    "<a",
];

/// Check whether a line contains any block-level HTML tag opener.
pub(crate) fn is_html_block(line: &str) -> bool {
    HTML_BLOCK_OPENERS.iter().any(|tag| line.contains(tag))
}

/// Wrap runs of plain text lines in `<p>` elements.
///
/// Lines are trimmed and joined with single spaces. Blank lines end a
/// paragraph and are kept as empty lines.
pub(crate) fn process(text: &str) -> String {
    let mut output: Vec<String> = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();

    for line in text.split('\n').map(str::trim) {
        if line.is_empty() {
            flush(&mut paragraph, &mut output);
            output.push(String::new());
        } else if is_html_block(line) {
            flush(&mut paragraph, &mut output);
            output.push(line.to_owned());
        } else {
            paragraph.push(line);
        }
    }

    flush(&mut paragraph, &mut output);

    output.join("\n")
}

// Accumulated lines never contain a block opener, and joining with a space
// cannot create one, so the joined text is always wrapped.
fn flush(paragraph: &mut Vec<&str>, output: &mut Vec<String>) {
    if paragraph.is_empty() {
        return;
    }
    output.push(format!("<p>{}</p>", paragraph.join(" ")));
    paragraph.clear();
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_single_paragraph() {
        assert_eq!(process("hello world"), "<p>hello world</p>");
    }

    #[test]
    fn test_lines_joined_with_space() {
        assert_eq!(
            process("line one\n  line two  "),
            "<p>line one line two</p>"
        );
    }

    #[test]
    fn test_blank_line_separates_paragraphs() {
        assert_eq!(process("one\n\ntwo"), "<p>one</p>\n\n<p>two</p>");
    }

    #[test]
    fn test_html_line_flushes_paragraph() {
        assert_eq!(
            process("intro\n<h2>Title</h2>\nbody"),
            "<p>intro</p>\n<h2>Title</h2>\n<p>body</p>"
        );
    }

    #[test]
    fn test_html_line_trimmed() {
        assert_eq!(process("   <hr>   "), "<hr>");
    }

    #[test]
    fn test_blank_lines_preserved() {
        assert_eq!(process("\n\n"), "\n\n");
    }

    #[test]
    fn test_inline_only_html_wrapped() {
        assert_eq!(
            process("<strong>x</strong> and <em>y</em>"),
            "<p><strong>x</strong> and <em>y</em></p>"
        );
    }

    #[test]
    fn test_lone_angle_bracket_wrapped() {
        assert_eq!(process("x <\na"), "<p>x < a</p>");
    }

    #[test]
    fn test_is_html_block() {
        assert!(is_html_block("<h1>Title</h1>"));
        assert!(is_html_block(r#"see <a href="x">x</a>"#));
        assert!(!is_html_block("<strong>bold</strong>"));
    }

    #[test]
    fn test_is_html_block_substring_match() {
        assert!(is_html_block("<pre><code>"));
        assert!(is_html_block("<abbr>"));
        assert!(!is_html_block("b</code></pre>"));
        assert!(!is_html_block("plain"));
    }
}

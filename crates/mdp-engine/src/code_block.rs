//! Fenced code block extraction.
//!
//! Runs first so that code content is escaped before any other stage sees
//! it. Only the fence lines are consumed; the block keeps its inner line
//! breaks, and later line-based stages still scan those lines.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::escape::escape_html;

/// Fence with an optional language tag, content up to the next fence.
static TAGGED_FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```([A-Za-z0-9_]+)?\n((?s:.*?))```").unwrap());

/// Untagged fence. Only sees fences the first pass left behind.
static PLAIN_FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```\n((?s:.*?))```").unwrap());

/// Replace fenced code blocks with `<pre><code>` elements.
///
/// An unterminated fence does not match and stays as plain text.
pub(crate) fn process(text: &str) -> String {
    let text = TAGGED_FENCE_RE.replace_all(text, |caps: &Captures| {
        let code = escape_html(caps[2].trim());
        match caps.get(1) {
            Some(lang) => format!(
                r#"<pre><code class="language-{}">{code}</code></pre>"#,
                lang.as_str()
            ),
            None => format!("<pre><code>{code}</code></pre>"),
        }
    });

    PLAIN_FENCE_RE
        .replace_all(&text, |caps: &Captures| {
            format!("<pre><code>{}</code></pre>", escape_html(caps[1].trim()))
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_fence_with_language() {
        assert_eq!(
            process("```js\nconst x = 1;\n```"),
            r#"<pre><code class="language-js">const x = 1;</code></pre>"#
        );
    }

    #[test]
    fn test_fence_without_language() {
        assert_eq!(process("```\nplain\n```"), "<pre><code>plain</code></pre>");
    }

    #[test]
    fn test_content_escaped() {
        assert_eq!(
            process("```html\n<a href=\"x\">&</a>\n```"),
            r#"<pre><code class="language-html">&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;</code></pre>"#
        );
    }

    #[test]
    fn test_content_trimmed_before_escaping() {
        assert_eq!(
            process("```\n\n   indented\n\n```"),
            "<pre><code>indented</code></pre>"
        );
    }

    #[test]
    fn test_inner_line_breaks_kept() {
        assert_eq!(
            process("```rust\nfn a() {}\nfn b() {}\n```"),
            "<pre><code class=\"language-rust\">fn a() {}\nfn b() {}</code></pre>"
        );
    }

    #[test]
    fn test_unterminated_fence_left_alone() {
        assert_eq!(process("```js\nlet x;"), "```js\nlet x;");
    }

    #[test]
    fn test_surrounding_text_kept() {
        assert_eq!(
            process("before\n```\ncode\n```\nafter"),
            "before\n<pre><code>code</code></pre>\nafter"
        );
    }

    #[test]
    fn test_multiple_blocks() {
        assert_eq!(
            process("```py\na\n```\n\n```\nb\n```"),
            "<pre><code class=\"language-py\">a</code></pre>\n\n<pre><code>b</code></pre>"
        );
    }

    #[test]
    fn test_language_tag_is_ascii_word() {
        // A non-word character after the fence is not a language tag.
        assert_eq!(process("```c++\nx\n```"), "```c++\nx\n```");
    }
}

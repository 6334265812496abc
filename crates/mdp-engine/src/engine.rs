//! Engine entry points and the stage pipeline.

use crate::{blockquote, code_block, inline, list, paragraph, table, words};

/// A pipeline stage: a pure text-to-text transform.
struct Stage {
    name: &'static str,
    run: fn(&str) -> String,
}

/// Stages in execution order.
const PIPELINE: &[Stage] = &[
    Stage {
        name: "code_blocks",
        run: code_block::process,
    },
    Stage {
        name: "blockquotes",
        run: blockquote::process,
    },
    Stage {
        name: "lists",
        run: list::process,
    },
    Stage {
        name: "tables",
        run: table::process,
    },
    Stage {
        name: "inline",
        run: inline::process,
    },
    Stage {
        name: "paragraphs",
        run: paragraph::process,
    },
];

/// Markdown to HTML converter.
///
/// The engine holds no state; construct one wherever it is needed. Every
/// call is a pure function of its input.
///
/// # Example
///
/// ```
/// use mdp_engine::MarkdownEngine;
///
/// let engine = MarkdownEngine::new();
/// assert_eq!(
///     engine.parse("**bold** and *italic*"),
///     "<p><strong>bold</strong> and <em>italic</em></p>"
/// );
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownEngine;

#[allow(clippy::unused_self)]
impl MarkdownEngine {
    /// Create a new engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Convert Markdown text to an HTML fragment.
    ///
    /// Never fails. Empty input yields an empty string; unrecognised syntax
    /// passes through as text.
    #[must_use]
    pub fn parse(&self, markdown: &str) -> String {
        if markdown.is_empty() {
            return String::new();
        }

        let html = PIPELINE.iter().fold(markdown.to_owned(), |text, stage| {
            let out = (stage.run)(&text);
            tracing::trace!(stage = stage.name, len = out.len(), "Stage completed");
            out
        });

        tracing::debug!(
            input_len = markdown.len(),
            output_len = html.len(),
            "Parsed markdown"
        );
        html
    }

    /// Count the words of a Markdown document, ignoring syntax markers.
    #[must_use]
    pub fn count_words(&self, markdown: &str) -> usize {
        words::count(markdown)
    }
}

/// Convert Markdown text to HTML with a default engine.
#[must_use]
pub fn parse(markdown: &str) -> String {
    MarkdownEngine::new().parse(markdown)
}

/// Count words in Markdown text with a default engine.
#[must_use]
pub fn count_words(markdown: &str) -> usize {
    MarkdownEngine::new().count_words(markdown)
}

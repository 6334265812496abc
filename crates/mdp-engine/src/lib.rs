//! Single-pass Markdown to HTML conversion engine.
//!
//! The engine turns a Markdown document into an HTML fragment by running a
//! fixed pipeline of text-to-text stages. Each stage consumes the output of
//! the previous one:
//!
//! 1. Fenced code blocks
//! 2. Blockquotes
//! 3. Lists
//! 4. Tables
//! 5. Inline rules (headings, rules, emphasis, code, links, images)
//! 6. Paragraphs
//!
//! Stages work on plain text, so later stages see HTML emitted by earlier
//! ones. The output reflects that ordering, including its quirks: a link
//! rule that runs before the image rule, or a paragraph stage that leaves
//! any line containing a block-level tag opener unwrapped.
//!
//! The engine never fails. Malformed input degrades into literal text.
//!
//! # Example
//!
//! ```
//! use mdp_engine::MarkdownEngine;
//!
//! let engine = MarkdownEngine::new();
//! assert_eq!(engine.parse("# Title"), "<h1>Title</h1>");
//! assert_eq!(engine.count_words("# Hello **world**"), 2);
//! ```

mod blockquote;
mod code_block;
mod engine;
mod escape;
mod inline;
mod list;
mod paragraph;
mod table;
mod words;

pub use engine::{MarkdownEngine, count_words, parse};
pub use escape::escape_html;

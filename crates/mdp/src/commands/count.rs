//! `mdp count` command implementation.

use std::path::PathBuf;

use clap::Args;
use mdp_config::Config;
use mdp_engine::MarkdownEngine;

use super::write_output;
use crate::error::CliError;
use crate::input::read_markdown;

/// Arguments for the count command.
#[derive(Args)]
pub(crate) struct CountArgs {
    /// Markdown file to count (`-` reads stdin).
    input: PathBuf,

    /// Path to configuration file (default: auto-discover mdp.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl CountArgs {
    /// Execute the count command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the input cannot be read.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = Config::load(self.config.as_deref(), None)?;
        let markdown = read_markdown(&self.input, &config.input)?;

        let count = MarkdownEngine::new().count_words(&markdown);
        write_output(None, &format_word_count(count))
    }
}

/// Format a count as `1 word` / `N words`.
fn format_word_count(count: usize) -> String {
    if count == 1 {
        "1 word".to_owned()
    } else {
        format!("{count} words")
    }
}

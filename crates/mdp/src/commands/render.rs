//! `mdp render` command implementation.

use std::path::PathBuf;

use clap::Args;
use mdp_engine::MarkdownEngine;

use super::{DocumentArgs, write_output};
use crate::document;
use crate::error::CliError;
use crate::input::read_markdown;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to render (`-` reads stdin).
    input: PathBuf,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Wrap the fragment in a complete HTML document.
    #[arg(long)]
    standalone: bool,

    #[command(flatten)]
    document: DocumentArgs,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the input cannot be read,
    /// or the output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = self.document.load_config(None)?;
        let markdown = read_markdown(&self.input, &config.input)?;

        let fragment = MarkdownEngine::new().parse(&markdown);
        let html = if self.standalone {
            document::standalone(&fragment, &config.export)
        } else {
            fragment
        };

        write_output(self.output.as_deref(), &html)?;
        tracing::info!(
            bytes = html.len(),
            standalone = self.standalone,
            "Rendered HTML"
        );
        Ok(())
    }
}

//! `mdp export` command implementation.

use std::path::PathBuf;

use clap::Args;
use mdp_engine::MarkdownEngine;

use super::{DocumentArgs, write_output};
use crate::document;
use crate::error::CliError;
use crate::input::read_markdown;
use crate::output::Output;

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    /// Markdown file to export (`-` reads stdin).
    input: PathBuf,

    /// Directory to write the document into (overrides config).
    #[arg(long)]
    output_dir: Option<PathBuf>,

    #[command(flatten)]
    document: DocumentArgs,
}

impl ExportArgs {
    /// Execute the export command.
    ///
    /// Writes `<output_dir>/<file_name>` as a standalone HTML document.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the input cannot be read,
    /// or the document cannot be written.
    pub(crate) fn execute(self, output: &Output) -> Result<PathBuf, CliError> {
        let config = self.document.load_config(self.output_dir)?;
        let markdown = read_markdown(&self.input, &config.input)?;

        let fragment = MarkdownEngine::new().parse(&markdown);
        let html = document::standalone(&fragment, &config.export);

        std::fs::create_dir_all(&config.export.output_dir).map_err(|source| CliError::Write {
            path: config.export.output_dir.clone(),
            source,
        })?;
        let path = config.export.output_path();
        write_output(Some(&path), &html)?;

        output.info(&format!("Source: {}", self.input.display()));
        output.success(&format!("Exported HTML to {}", path.display()));
        Ok(path)
    }
}

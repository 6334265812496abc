//! CLI command implementations.

pub(crate) mod count;
pub(crate) mod export;
pub(crate) mod render;

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use mdp_config::{CliSettings, Config};

use crate::error::CliError;

pub(crate) use count::CountArgs;
pub(crate) use export::ExportArgs;
pub(crate) use render::RenderArgs;

/// Options shared by commands that produce HTML documents.
#[derive(Args)]
pub(crate) struct DocumentArgs {
    /// Path to configuration file (default: auto-discover mdp.toml).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Document title for standalone output (overrides config).
    #[arg(long)]
    pub title: Option<String>,

    /// Document language for standalone output (overrides config).
    #[arg(long)]
    pub lang: Option<String>,
}

impl DocumentArgs {
    /// Load config with the title, language and output directory overrides.
    pub(crate) fn load_config(&self, output_dir: Option<PathBuf>) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            title: self.title.clone(),
            lang: self.lang.clone(),
            output_dir,
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}

/// Write content to a file, or to stdout when no path is given.
pub(crate) fn write_output(path: Option<&Path>, content: &str) -> Result<(), CliError> {
    if let Some(path) = path {
        return std::fs::write(path, content).map_err(|source| CliError::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(content.as_bytes())?;
    if !content.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}

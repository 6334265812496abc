//! Configuration management for mdp.
//!
//! Parses `mdp.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Expansion
//!
//! Export string values support `~` and environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `export.title`
//! - `export.output_dir`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override document title for standalone output.
    pub title: Option<String>,
    /// Override document language for standalone output.
    pub lang: Option<String>,
    /// Override export output directory.
    pub output_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "mdp.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input file configuration.
    pub input: InputConfig,
    /// Export configuration (output directory is a relative string from TOML).
    #[serde(rename = "export")]
    export_raw: ExportConfigRaw,

    /// Resolved export configuration (set after loading).
    #[serde(skip)]
    pub export: ExportConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Input file configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Accepted file extensions, without the leading dot.
    pub extensions: Vec<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["md".to_owned(), "txt".to_owned()],
        }
    }
}

impl InputConfig {
    /// Check whether a path has one of the accepted extensions.
    ///
    /// Comparison ignores ASCII case.
    #[must_use]
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
    }
}

/// Raw export configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ExportConfigRaw {
    title: Option<String>,
    lang: Option<String>,
    file_name: Option<String>,
    output_dir: Option<String>,
}

/// Resolved export configuration with an absolute output directory.
#[derive(Debug)]
pub struct ExportConfig {
    /// Document title for standalone HTML.
    pub title: String,
    /// Value of the `lang` attribute on `<html>`.
    pub lang: String,
    /// File name written by `mdp export`.
    pub file_name: String,
    /// Directory `mdp export` writes into.
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            lang: DEFAULT_LANG.to_owned(),
            file_name: DEFAULT_FILE_NAME.to_owned(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl ExportConfig {
    /// Full path of the exported document.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }
}

const DEFAULT_TITLE: &str = "Exported Markdown Document";
const DEFAULT_LANG: &str = "en";
const DEFAULT_FILE_NAME: &str = "markdown-export.html";

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`export.output_dir`").
        field: String,
        /// Error message from expansion.
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `mdp.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(title) = &settings.title {
            self.export.title.clone_from(title);
        }
        if let Some(lang) = &settings.lang {
            self.export.lang.clone_from(lang);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.export.output_dir.clone_from(output_dir);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            input: InputConfig::default(),
            export_raw: ExportConfigRaw::default(),
            export: ExportConfig {
                output_dir: base.to_path_buf(),
                ..ExportConfig::default()
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate the resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "input.extensions must list at least one extension".to_owned(),
            ));
        }
        for ext in &self.input.extensions {
            require_non_empty(ext, "input.extensions")?;
            if ext.starts_with('.') {
                return Err(ConfigError::Validation(format!(
                    "input.extensions entry \"{ext}\" must not start with a dot"
                )));
            }
        }

        require_non_empty(&self.export.title, "export.title")?;
        require_non_empty(&self.export.lang, "export.lang")?;
        require_non_empty(&self.export.file_name, "export.file_name")?;
        if self.export.file_name.contains(['/', '\\']) {
            return Err(ConfigError::Validation(
                "export.file_name must be a file name, not a path".to_owned(),
            ));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref title) = self.export_raw.title {
            self.export_raw.title = Some(expand::expand_env(title, "export.title")?);
        }
        if let Some(ref dir) = self.export_raw.output_dir {
            self.export_raw.output_dir = Some(expand::expand_env(dir, "export.output_dir")?);
        }
        Ok(())
    }

    /// Resolve raw export values against defaults and the config directory.
    fn resolve(&mut self, config_dir: &Path) {
        let raw = &self.export_raw;
        self.export = ExportConfig {
            title: raw
                .title
                .clone()
                .unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
            lang: raw.lang.clone().unwrap_or_else(|| DEFAULT_LANG.to_owned()),
            file_name: raw
                .file_name
                .clone()
                .unwrap_or_else(|| DEFAULT_FILE_NAME.to_owned()),
            output_dir: raw
                .output_dir
                .as_deref()
                .map_or_else(|| config_dir.to_path_buf(), |dir| config_dir.join(dir)),
        };
    }
}

//! Markdown input loading.

use std::io::Read;
use std::path::Path;

use mdp_config::InputConfig;

use crate::error::CliError;

/// Path argument that selects standard input.
const STDIN_ARG: &str = "-";

/// Read markdown from a file, or from stdin when `path` is `-`.
///
/// Files must carry one of the configured extensions. Stdin skips the check.
pub(crate) fn read_markdown(path: &Path, input: &InputConfig) -> Result<String, CliError> {
    if path == Path::new(STDIN_ARG) {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        tracing::info!(bytes = content.len(), "Read markdown from stdin");
        return Ok(content);
    }

    check_extension(path, input)?;

    let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = content.len(), "Read markdown file");
    Ok(content)
}

/// Reject files whose extension is not in the allow list.
fn check_extension(path: &Path, input: &InputConfig) -> Result<(), CliError> {
    if input.accepts(path) {
        return Ok(());
    }
    let allowed = input
        .extensions
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(", ");
    Err(CliError::UnsupportedInput {
        path: path.to_path_buf(),
        allowed,
    })
}

use std::path::{Path, PathBuf};

use listcraft_core::ContentConfig;

use crate::CliError;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "listcraft.toml";

/// Load the run configuration.
///
/// An explicit path must exist; the default file is optional and falls back
/// to built-in settings.
pub fn load_config(path: Option<&Path>) -> Result<ContentConfig, CliError> {
    let (path, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    if !path.exists() {
        if required {
            return Err(CliError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        return Ok(ContentConfig::default());
    }

    let content = std::fs::read_to_string(&path)?;
    let config = parse_config(&content)?;
    tracing::info!(path = %path.display(), "config loaded");
    Ok(config)
}

pub fn parse_config(content: &str) -> Result<ContentConfig, CliError> {
    let config: ContentConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use listcraft_core::{MissingFieldPolicy, StripMode};

    use super::*;

    #[test]
    fn parses_partial_toml() {
        let config = parse_config(
            r#"
            [policy]
            extra_banned_terms = ["miracle"]
            strip_mode = "until_stable"

            [limits]
            meta_title_max_chars = 60

            [batch]
            on_missing_field = "skip_row"
            "#,
        )
        .expect("parse config");

        assert_eq!(config.policy.strip_mode, StripMode::UntilStable);
        assert_eq!(config.limits.meta_title_max_chars, 60);
        assert_eq!(config.limits.bullet_max_chars, 85);
        assert_eq!(config.batch.on_missing_field, MissingFieldPolicy::SkipRow);
    }

    #[test]
    fn empty_file_means_defaults() {
        assert_eq!(parse_config("").expect("parse"), ContentConfig::default());
    }

    #[test]
    fn rejects_blank_terms() {
        let result = parse_config("[policy]\nbanned_terms = [\"ok\", \" \"]\n");
        assert!(matches!(result, Err(CliError::Core(_))));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let result = load_config(Some(Path::new("/nonexistent/listcraft.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}

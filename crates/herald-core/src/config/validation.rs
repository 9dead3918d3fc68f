//! Configuration validation

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::{ConfigError, Result};
use crate::placeholder::{self, CURRENT_TAG, HASH, ID, PREVIOUS_TAG, USER};

use super::defaults::CI_SKIP_MARKERS;
use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_types(config)?;
    validate_url_formats(config)?;
    validate_release_message(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_types(config: &Config) -> Result<()> {
    let mut seen = HashSet::new();

    for (i, entry) in config.types.iter().enumerate() {
        if entry.type_tag.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: format!("types[{}].type", i),
                message: "type cannot be empty".to_string(),
            }
            .into());
        }

        if !seen.insert(entry.type_tag.to_lowercase()) {
            return Err(ConfigError::DuplicateType(entry.type_tag.clone()).into());
        }

        let has_section = entry
            .section
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty());
        if !entry.hidden && !has_section {
            return Err(ConfigError::InvalidValue {
                field: format!("types[{}].section", i),
                message: format!(
                    "visible type '{}' needs a section label",
                    entry.type_tag
                ),
            }
            .into());
        }
    }

    Ok(())
}

fn require_placeholders(field: &str, template: Option<&str>, names: &[&str]) -> Result<()> {
    let Some(template) = template else {
        return Ok(());
    };

    for name in names {
        if !placeholder::references(template, name) {
            return Err(ConfigError::InvalidValue {
                field: field.to_string(),
                message: format!("must contain {{{{{}}}}} placeholder", name),
            }
            .into());
        }
    }

    Ok(())
}

fn validate_url_formats(config: &Config) -> Result<()> {
    require_placeholders("commitUrlFormat", config.commit_url_format.as_deref(), &[HASH])?;
    require_placeholders(
        "compareUrlFormat",
        config.compare_url_format.as_deref(),
        &[PREVIOUS_TAG, CURRENT_TAG],
    )?;
    require_placeholders("userUrlFormat", config.user_url_format.as_deref(), &[USER])?;
    require_placeholders("issueUrlFormat", config.issue_url_format.as_deref(), &[ID])?;
    Ok(())
}

fn validate_release_message(config: &Config) -> Result<()> {
    let template = &config.release_commit_message_format;
    require_placeholders("releaseCommitMessageFormat", Some(template), &[CURRENT_TAG])?;

    if !CI_SKIP_MARKERS.iter().any(|marker| template.contains(marker)) {
        warn!(
            template = %template,
            "release commit message has no CI-skip marker; release commits may retrigger CI"
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CommitTypeConfig;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_duplicate_type() {
        let mut config = Config::default();
        config
            .types
            .push(CommitTypeConfig::visible("feat", "More Features"));
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("feat"));
    }

    #[test]
    fn test_validate_visible_type_without_section() {
        let mut config = Config::default();
        config.types.push(CommitTypeConfig {
            type_tag: "ops".to_string(),
            section: None,
            hidden: false,
            severity: None,
        });
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_release_message_placeholder() {
        let mut config = Config::default();
        config.release_commit_message_format = "chore(release) [skip ci]".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_release_message_without_ci_marker_is_accepted() {
        let mut config = Config::default();
        config.release_commit_message_format = "chore(release): {{currentTag}}".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_compare_url_placeholders() {
        let mut config = Config::default();
        config.compare_url_format =
            Some("https://github.com/acme/app/compare/{{currentTag}}".to_string());
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("compareUrlFormat"));

        config.compare_url_format = Some(
            "https://github.com/acme/app/compare/{{previousTag}}...{{currentTag}}".to_string(),
        );
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_commit_url_placeholder() {
        let mut config = Config::default();
        config.commit_url_format = Some("https://github.com/acme/app/commit/".to_string());
        assert!(validate_config(&config).is_err());
    }
}

//! Error types for Herald

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using HeraldError
pub type Result<T> = std::result::Result<T, HeraldError>;

/// Main error type for Herald operations
#[derive(Debug, Error)]
pub enum HeraldError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Version-related errors
    #[error(transparent)]
    Version(#[from] VersionError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    /// Template substitution errors
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Workflow-related errors
    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// The same commit type was declared twice
    #[error("Commit type '{0}' is declared more than once")]
    DuplicateType(String),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Version-related errors
#[derive(Debug, Error)]
pub enum VersionError {
    /// Failed to parse version
    #[error("Failed to parse version '{0}': {1}")]
    ParseFailed(String, String),

    /// Prerelease channel is not a valid prerelease identifier
    #[error("Invalid prerelease channel '{0}': {1}")]
    InvalidPrerelease(String, String),
}

/// Changelog-related errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChangelogError {
    /// Commit header does not follow the conventional shape
    #[error("Malformed commit {hash}: {reason}")]
    MalformedCommit { hash: String, reason: String },
}

/// Template substitution errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A placeholder is referenced but no value is available for it
    #[error("No value available for placeholder {{{{{0}}}}}")]
    MissingValue(String),
}

/// Workflow-related errors
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Nothing to release from
    #[error("Commit list is empty - nothing to analyze")]
    EmptyCommitList,

    /// Collaborator refused the release artifacts
    #[error("Release sink failed: {0}")]
    SinkFailed(String),

    /// Commit history could not be read
    #[error("Commit source failed: {0}")]
    SourceFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_value_display() {
        let err = TemplateError::MissingValue("previousTag".to_string());
        assert_eq!(
            err.to_string(),
            "No value available for placeholder {{previousTag}}"
        );
    }

    #[test]
    fn test_transparent_wrapping() {
        let err: HeraldError = ChangelogError::MalformedCommit {
            hash: "abc1234".to_string(),
            reason: "missing type prefix".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Malformed commit abc1234: missing type prefix"
        );

        let err: HeraldError = WorkflowError::EmptyCommitList.into();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_invalid_value_display() {
        let err = ConfigError::InvalidValue {
            field: "commitUrlFormat".to_string(),
            message: "must contain {{hash}} placeholder".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration: commitUrlFormat - must contain {{hash}} placeholder"
        );
    }
}

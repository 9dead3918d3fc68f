//! Core types for Herald

use serde::{Deserialize, Serialize};

/// How strongly a commit type pushes the next version
///
/// Ordered from weakest to strongest. Breaking changes are tracked separately
/// on each commit and always outrank every severity.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Never triggers a release
    #[default]
    None,
    /// Bug fix
    Fix,
    /// Performance improvement
    Performance,
    /// New feature
    Feature,
}

impl Severity {
    /// Returns the string representation of the severity
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Fix => "fix",
            Self::Performance => "performance",
            Self::Feature => "feature",
        }
    }

    /// Default severity for a commit type that does not declare one
    pub fn for_type(type_tag: &str) -> Self {
        match type_tag {
            "feat" | "feature" => Self::Feature,
            "fix" | "revert" | "deps" => Self::Fix,
            "perf" => Self::Performance,
            _ => Self::None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "fix" | "patch" => Ok(Self::Fix),
            "perf" | "performance" => Ok(Self::Performance),
            "feature" | "feat" | "minor" => Ok(Self::Feature),
            _ => Err(format!("Unknown severity: {}", s)),
        }
    }
}

/// A bump signal extracted from one visible commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeSignal {
    /// Whether the commit declares a breaking change
    pub breaking: bool,
    /// Severity of the commit's type
    pub severity: Severity,
}

impl ChangeSignal {
    /// Create a new signal
    pub fn new(severity: Severity, breaking: bool) -> Self {
        Self { breaking, severity }
    }
}

/// A commit as handed over by the commit-history source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCommit {
    /// Commit hash (full)
    pub hash: String,
    /// Full commit message: header line, optional body and footers
    pub message: String,
    /// Author handle on the hosting provider, if known
    pub author: Option<String>,
}

impl RawCommit {
    /// Create a new raw commit
    pub fn new(hash: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            message: message.into(),
            author: None,
        }
    }

    /// Set the author handle
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

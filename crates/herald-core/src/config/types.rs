//! Configuration types

use serde::{Deserialize, Serialize};

use crate::types::Severity;

/// Main configuration for Herald
///
/// Field names follow the `.versionrc` vocabulary (`commitUrlFormat`,
/// `releaseCommitMessageFormat`, ...) in every supported file format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Recognized commit types, in declaration order
    pub types: Vec<CommitTypeConfig>,

    /// Link to a single commit, with `{{hash}}`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_url_format: Option<String>,

    /// Link comparing two releases, with `{{previousTag}}` and `{{currentTag}}`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_url_format: Option<String>,

    /// Link to an author profile, with `{{user}}`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_url_format: Option<String>,

    /// Link to an issue, with `{{id}}`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_url_format: Option<String>,

    /// Message of the release commit, with `{{currentTag}}`
    pub release_commit_message_format: String,

    /// Literal text placed at the top of the changelog document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,

    /// Prefix turning a version into a tag name
    pub tag_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            types: default_types(),
            commit_url_format: None,
            compare_url_format: None,
            user_url_format: None,
            issue_url_format: None,
            release_commit_message_format: "chore(release): v{{currentTag}} [skip ci]".to_string(),
            header: None,
            tag_prefix: "v".to_string(),
        }
    }
}

impl Config {
    /// Collect the URL templates used by the changelog renderer
    pub fn url_templates(&self) -> UrlTemplates {
        UrlTemplates {
            commit_url_format: self.commit_url_format.clone(),
            compare_url_format: self.compare_url_format.clone(),
            user_url_format: self.user_url_format.clone(),
            issue_url_format: self.issue_url_format.clone(),
        }
    }
}

/// Configuration for a commit type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitTypeConfig {
    /// Type identifier as written in commit headers (e.g. `feat`)
    #[serde(rename = "type")]
    pub type_tag: String,

    /// Section header in changelog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,

    /// Whether to hide this type from changelog and version calculation
    #[serde(default)]
    pub hidden: bool,

    /// Overrides the default severity derived from the type name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

impl CommitTypeConfig {
    /// A visible type rendered under `section`
    pub fn visible(type_tag: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            type_tag: type_tag.into(),
            section: Some(section.into()),
            hidden: false,
            severity: None,
        }
    }

    /// A type that never appears in the changelog
    pub fn hidden(type_tag: impl Into<String>) -> Self {
        Self {
            type_tag: type_tag.into(),
            section: None,
            hidden: true,
            severity: None,
        }
    }

    /// Set an explicit severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Declared severity, or the default for the type name
    pub fn effective_severity(&self) -> Severity {
        self.severity
            .unwrap_or_else(|| Severity::for_type(&self.type_tag))
    }
}

/// URL templates consumed by the changelog renderer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlTemplates {
    /// Link to a single commit
    pub commit_url_format: Option<String>,
    /// Link comparing two tags
    pub compare_url_format: Option<String>,
    /// Link to an author profile
    pub user_url_format: Option<String>,
    /// Link to an issue
    pub issue_url_format: Option<String>,
}

impl UrlTemplates {
    /// Set the commit URL format
    pub fn with_commit_url(mut self, format: impl Into<String>) -> Self {
        self.commit_url_format = Some(format.into());
        self
    }

    /// Set the compare URL format
    pub fn with_compare_url(mut self, format: impl Into<String>) -> Self {
        self.compare_url_format = Some(format.into());
        self
    }

    /// Set the user URL format
    pub fn with_user_url(mut self, format: impl Into<String>) -> Self {
        self.user_url_format = Some(format.into());
        self
    }

    /// Set the issue URL format
    pub fn with_issue_url(mut self, format: impl Into<String>) -> Self {
        self.issue_url_format = Some(format.into());
        self
    }
}

fn default_types() -> Vec<CommitTypeConfig> {
    vec![
        CommitTypeConfig::visible("feat", "✨ Features"),
        CommitTypeConfig::visible("fix", "🐛 Bug Fixes"),
        CommitTypeConfig::visible("perf", "⚡ Performance"),
        CommitTypeConfig::visible("deps", "📦 Dependencies"),
        CommitTypeConfig::visible("revert", "⏪ Reverts"),
        CommitTypeConfig::visible("test", "✅ Tests"),
        CommitTypeConfig::visible("ci", "🤖 Continuous Integration"),
        CommitTypeConfig::visible("build", "🏗️ Build System"),
        CommitTypeConfig::hidden("style"),
        CommitTypeConfig::hidden("refactor"),
        CommitTypeConfig::hidden("chore"),
        CommitTypeConfig::hidden("docs"),
    ]
}

//! Inputs of one release computation

use chrono::NaiveDate;
use herald_changelog::{ParserConfig, TypeRegistry};
use herald_core::config::{Config, UrlTemplates};
use herald_core::error::Result;
use herald_core::types::RawCommit;

/// Everything needed to plan one release
///
/// Built fresh for every run and dropped once the plan is produced.
#[derive(Debug, Clone)]
pub struct ReleaseContext {
    /// Version of the previous release (`1.2.3`, `v1.2.3`)
    pub current_version: String,
    /// Commits since the previous release, oldest first
    pub commits: Vec<RawCommit>,
    /// Tag of the previous release; absent for a first release
    pub previous_tag: Option<String>,
    /// Recognized commit types
    pub registry: TypeRegistry,
    /// Footer tokens read as issue references
    pub parser: ParserConfig,
    /// Link templates for the changelog
    pub url_templates: UrlTemplates,
    /// Release commit message template
    pub release_message_format: String,
    /// Custom changelog header
    pub header: Option<String>,
    /// Prefix turning a version into a tag name
    pub tag_prefix: String,
    /// Release date shown in the changelog heading
    pub date: Option<NaiveDate>,
    /// Prerelease channel (`alpha`, `rc`, ...)
    pub prerelease: Option<String>,
    /// Current changelog document, already read by the caller
    pub existing_changelog: Option<String>,
}

impl ReleaseContext {
    /// Build a context from configuration
    pub fn from_config(
        config: &Config,
        current_version: impl Into<String>,
        commits: Vec<RawCommit>,
    ) -> Result<Self> {
        Ok(Self {
            current_version: current_version.into(),
            commits,
            previous_tag: None,
            registry: TypeRegistry::from_config(&config.types)?,
            parser: ParserConfig::default(),
            url_templates: config.url_templates(),
            release_message_format: config.release_commit_message_format.clone(),
            header: config.header.clone(),
            tag_prefix: config.tag_prefix.clone(),
            date: None,
            prerelease: None,
            existing_changelog: None,
        })
    }

    /// Set the previous release tag
    pub fn with_previous_tag(mut self, tag: impl Into<String>) -> Self {
        self.previous_tag = Some(tag.into());
        self
    }

    /// Set the release date
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Read another footer token (e.g. `Part-of`) as an issue reference
    pub fn with_reference_action(mut self, token: impl Into<String>) -> Self {
        self.parser = self.parser.with_reference_action(token);
        self
    }

    /// Produce prerelease versions on a channel
    pub fn with_prerelease(mut self, channel: impl Into<String>) -> Self {
        self.prerelease = Some(channel.into());
        self
    }

    /// Prepend the new release to an existing changelog document
    pub fn with_existing_changelog(mut self, document: impl Into<String>) -> Self {
        self.existing_changelog = Some(document.into());
        self
    }
}

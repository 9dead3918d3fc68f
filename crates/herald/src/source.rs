//! Collaborators around the engine: commit history in, release artifacts out

use chrono::NaiveDate;
use herald_core::config::Config;
use herald_core::error::Result;
use herald_core::types::RawCommit;
use tracing::{info, instrument};

use crate::context::ReleaseContext;
use crate::planner::{plan_release, PreparedRelease, ReleasePlan};

/// Supplies the commits since the last release
pub trait CommitSource {
    /// Tag of the previous release, if there is one
    fn previous_tag(&self) -> Result<Option<String>>;

    /// Commits since the previous release, oldest first
    fn commits(&self) -> Result<Vec<RawCommit>>;
}

/// Receives the artifacts of a planned release
pub trait ReleaseSink {
    /// Apply a release (write the changelog, commit, tag)
    fn record_release(&mut self, release: &PreparedRelease) -> Result<()>;
}

/// Commit history held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistory {
    previous_tag: Option<String>,
    commits: Vec<RawCommit>,
}

impl InMemoryHistory {
    /// Create a history with the given commits and no previous release
    pub fn new(commits: Vec<RawCommit>) -> Self {
        Self {
            previous_tag: None,
            commits,
        }
    }

    /// Set the tag of the previous release
    pub fn with_previous_tag(mut self, tag: impl Into<String>) -> Self {
        self.previous_tag = Some(tag.into());
        self
    }

    /// Append a commit
    pub fn push(&mut self, commit: RawCommit) {
        self.commits.push(commit);
    }
}

impl CommitSource for InMemoryHistory {
    fn previous_tag(&self) -> Result<Option<String>> {
        Ok(self.previous_tag.clone())
    }

    fn commits(&self) -> Result<Vec<RawCommit>> {
        Ok(self.commits.clone())
    }
}

/// Sink that keeps every release it receives
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    releases: Vec<PreparedRelease>,
}

impl RecordingSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Releases received so far
    pub fn releases(&self) -> &[PreparedRelease] {
        &self.releases
    }
}

impl ReleaseSink for RecordingSink {
    fn record_release(&mut self, release: &PreparedRelease) -> Result<()> {
        self.releases.push(release.clone());
        Ok(())
    }
}

/// Options for [`run_release`]
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Release date shown in the changelog heading
    pub date: Option<NaiveDate>,
    /// Prerelease channel
    pub prerelease: Option<String>,
    /// Current changelog document
    pub existing_changelog: Option<String>,
}

impl RunOptions {
    /// Set the release date
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Set the prerelease channel
    pub fn with_prerelease(mut self, channel: impl Into<String>) -> Self {
        self.prerelease = Some(channel.into());
        self
    }
}

/// Version of the previous release, read from its tag
fn version_from_tag(tag: Option<&str>, tag_prefix: &str) -> String {
    match tag {
        Some(tag) => tag.strip_prefix(tag_prefix).unwrap_or(tag).to_string(),
        None => "0.0.0".to_string(),
    }
}

/// Plan a release from `source` and hand it to `sink`.
///
/// The sink is called at most once, after planning has fully succeeded.
#[instrument(skip_all)]
pub fn run_release(
    source: &dyn CommitSource,
    sink: &mut dyn ReleaseSink,
    config: &Config,
    options: &RunOptions,
) -> Result<ReleasePlan> {
    let previous_tag = source.previous_tag()?;
    let commits = source.commits()?;
    let current_version = version_from_tag(previous_tag.as_deref(), &config.tag_prefix);

    let mut ctx = ReleaseContext::from_config(config, current_version, commits)?;
    ctx.previous_tag = previous_tag;
    ctx.date = options.date;
    ctx.prerelease = options.prerelease.clone();
    ctx.existing_changelog = options.existing_changelog.clone();

    let plan = plan_release(&ctx)?;
    if let Some(release) = plan.release() {
        sink.record_release(release)?;
        info!(tag = %release.tag, "release recorded");
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_core::error::{HeraldError, WorkflowError};

    struct FailingSink;

    impl ReleaseSink for FailingSink {
        fn record_release(&mut self, _release: &PreparedRelease) -> Result<()> {
            Err(WorkflowError::SinkFailed("tag already exists".to_string()).into())
        }
    }

    struct BrokenSource;

    impl CommitSource for BrokenSource {
        fn previous_tag(&self) -> Result<Option<String>> {
            Err(WorkflowError::SourceFailed("not a repository".to_string()).into())
        }

        fn commits(&self) -> Result<Vec<RawCommit>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_run_release_records_once() {
        let history = InMemoryHistory::new(vec![
            RawCommit::new("a1", "feat: add X"),
            RawCommit::new("b2", "fix: fix Y"),
        ])
        .with_previous_tag("v1.2.3");
        let mut sink = RecordingSink::new();

        let plan = run_release(&history, &mut sink, &Config::default(), &RunOptions::default())
            .unwrap();

        assert!(plan.is_release());
        assert_eq!(sink.releases().len(), 1);
        assert_eq!(sink.releases()[0].tag, "v1.3.0");
        assert_eq!(sink.releases()[0].previous_version.to_string(), "1.2.3");
    }

    #[test]
    fn test_no_release_skips_sink() {
        let mut history = InMemoryHistory::default().with_previous_tag("v2.0.0");
        history.push(RawCommit::new("a1", "chore: tidy"));
        let mut sink = RecordingSink::new();

        let plan = run_release(&history, &mut sink, &Config::default(), &RunOptions::default())
            .unwrap();

        assert!(!plan.is_release());
        assert!(sink.releases().is_empty());
    }

    #[test]
    fn test_first_release_starts_from_zero() {
        let history = InMemoryHistory::new(vec![RawCommit::new("a1", "feat: initial")]);
        let mut sink = RecordingSink::new();

        let plan = run_release(&history, &mut sink, &Config::default(), &RunOptions::default())
            .unwrap();

        let release = plan.release().unwrap();
        assert_eq!(release.version.to_string(), "0.1.0");
        assert!(release.changelog.starts_with("## 0.1.0\n"));
    }

    #[test]
    fn test_empty_history_never_reaches_sink() {
        let history = InMemoryHistory::default().with_previous_tag("v1.0.0");
        let mut sink = RecordingSink::new();

        let err = run_release(&history, &mut sink, &Config::default(), &RunOptions::default())
            .unwrap_err();

        assert!(matches!(err, HeraldError::Workflow(WorkflowError::EmptyCommitList)));
        assert!(sink.releases().is_empty());
    }

    #[test]
    fn test_sink_failure_propagates() {
        let history = InMemoryHistory::new(vec![RawCommit::new("a1", "fix: x")]);
        let err = run_release(&history, &mut FailingSink, &Config::default(), &RunOptions::default())
            .unwrap_err();
        assert!(matches!(err, HeraldError::Workflow(WorkflowError::SinkFailed(_))));
    }

    #[test]
    fn test_source_failure_propagates() {
        let mut sink = RecordingSink::new();
        let err = run_release(&BrokenSource, &mut sink, &Config::default(), &RunOptions::default())
            .unwrap_err();
        assert!(matches!(err, HeraldError::Workflow(WorkflowError::SourceFailed(_))));
    }

    #[test]
    fn test_prerelease_option() {
        let history =
            InMemoryHistory::new(vec![RawCommit::new("a1", "fix: x")]).with_previous_tag("v1.3.0-rc.0");
        let mut sink = RecordingSink::new();
        let options = RunOptions::default().with_prerelease("rc");

        let plan = run_release(&history, &mut sink, &Config::default(), &options).unwrap();
        assert_eq!(plan.release().unwrap().version.to_string(), "1.3.0-rc.1");
    }

    #[test]
    fn test_version_from_tag() {
        assert_eq!(version_from_tag(Some("v1.2.3"), "v"), "1.2.3");
        assert_eq!(version_from_tag(Some("1.2.3"), "release-"), "1.2.3");
        assert_eq!(version_from_tag(None, "v"), "0.0.0");
    }
}

//! Release planning: from raw commits to a prepared release

use herald_changelog::{
    ChangelogEntry, ChangelogGenerator, CommitRecord, ConventionalParser, Diagnostic, TypeRegistry,
};
use herald_core::error::{Result, WorkflowError};
use herald_core::workflow::{compose_document, compose_release_message, format_tag};
use herald_strategies::{BumpType, NextVersion, Version, VersionCalculator};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::context::ReleaseContext;

/// Artifacts of a release, ready for the version-control collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreparedRelease {
    /// Version the release starts from
    pub previous_version: Version,
    /// New version
    pub version: Version,
    /// Tag name for the new version
    pub tag: String,
    /// Bump that produced the new version
    pub bump: BumpType,
    /// Changelog fragment of this release
    pub changelog: String,
    /// Full changelog document
    pub document: String,
    /// Release commit message
    pub commit_message: String,
}

/// Whether a release should be created
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReleaseOutcome {
    /// A release is warranted
    Release(PreparedRelease),
    /// No commit qualifies; nothing is rendered
    NoRelease,
}

/// Result of planning a release
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleasePlan {
    /// Release artifacts, or the no-release signal
    pub outcome: ReleaseOutcome,
    /// Excluded commits and warnings, in input order per stage
    pub diagnostics: Vec<Diagnostic>,
}

impl ReleasePlan {
    /// The prepared release, if one is warranted
    pub fn release(&self) -> Option<&PreparedRelease> {
        match &self.outcome {
            ReleaseOutcome::Release(release) => Some(release),
            ReleaseOutcome::NoRelease => None,
        }
    }

    /// Whether a release should be created
    pub fn is_release(&self) -> bool {
        self.release().is_some()
    }
}

/// Next version for already parsed commits
pub fn next_version(
    current: &Version,
    commits: &[CommitRecord],
    registry: &TypeRegistry,
) -> Result<NextVersion> {
    VersionCalculator::new().next_version(current, &registry.signals(commits))
}

/// Plan a release.
///
/// Malformed commits and unknown types end up in the plan's diagnostics.
/// An empty commit list or an unparsable current version aborts the run.
#[instrument(skip(ctx), fields(commit_count = ctx.commits.len(), current = %ctx.current_version))]
pub fn plan_release(ctx: &ReleaseContext) -> Result<ReleasePlan> {
    if ctx.commits.is_empty() {
        return Err(WorkflowError::EmptyCommitList.into());
    }

    let calculator = match &ctx.prerelease {
        Some(channel) => VersionCalculator::new().with_prerelease(channel.clone()),
        None => VersionCalculator::new(),
    };
    let current = calculator.parse(&ctx.current_version)?;

    let generator = ChangelogGenerator::new(ctx.registry.clone(), ctx.url_templates.clone())
        .with_parser(ConventionalParser::with_config(ctx.parser.clone()));
    let analysis = generator.analyze(&ctx.commits);
    for diagnostic in &analysis.diagnostics {
        warn!(%diagnostic, "commit diagnostic");
    }

    let (version, bump) = match calculator.next_version(&current, &generator.signals(&analysis))? {
        NextVersion::Release { version, bump } => (version, bump),
        NextVersion::NoRelease => {
            info!(current = %current, "no qualifying changes");
            return Ok(ReleasePlan {
                outcome: ReleaseOutcome::NoRelease,
                diagnostics: analysis.diagnostics,
            });
        }
    };

    let version_string = version.to_string();
    let tag = format_tag(&ctx.tag_prefix, &version_string);

    let mut entry = ChangelogEntry::new(&version_string, &tag);
    if let Some(previous_tag) = &ctx.previous_tag {
        entry = entry.with_previous_tag(previous_tag);
    }
    if let Some(date) = ctx.date {
        entry = entry.with_date(date);
    }

    let changelog = generator.render(entry, &analysis.changes);
    let document = compose_document(
        ctx.header.as_deref(),
        &changelog,
        ctx.existing_changelog.as_deref(),
    );
    let commit_message = compose_release_message(&version_string, &ctx.release_message_format)?;

    info!(
        previous = %current,
        next = %version,
        bump = %bump,
        diagnostics = analysis.diagnostics.len(),
        "release planned"
    );

    Ok(ReleasePlan {
        outcome: ReleaseOutcome::Release(PreparedRelease {
            previous_version: current,
            version,
            tag,
            bump,
            changelog,
            document,
            commit_message,
        }),
        diagnostics: analysis.diagnostics,
    })
}

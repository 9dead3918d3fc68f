//! Herald - Conventional-commit release engine
//!
//! Herald reads a list of conventional commits, decides the next semantic
//! version, renders the changelog and composes the release commit message.
//! Reading history and applying the release (commit, tag, push) stay with the
//! caller, behind [`CommitSource`] and [`ReleaseSink`].
//!
//! ```no_run
//! use herald::{plan_release, Config, RawCommit, ReleaseContext};
//!
//! let config = Config::default();
//! let commits = vec![RawCommit::new("abc1234", "feat: add X")];
//! let ctx = ReleaseContext::from_config(&config, "1.2.3", commits)?
//!     .with_previous_tag("v1.2.3");
//!
//! if let Some(release) = plan_release(&ctx)?.release() {
//!     println!("{}", release.commit_message);
//! }
//! # Ok::<(), herald::HeraldError>(())
//! ```

pub mod context;
pub mod logging;
pub mod planner;
pub mod source;

pub use context::ReleaseContext;
pub use logging::init_tracing;
pub use planner::{next_version, plan_release, PreparedRelease, ReleaseOutcome, ReleasePlan};
pub use source::{run_release, CommitSource, InMemoryHistory, RecordingSink, ReleaseSink, RunOptions};

pub use herald_changelog::{
    classify, ChangelogEntry, ChangelogGenerator, ClassifiedChanges, CommitParser, CommitRecord,
    ConventionalParser, Diagnostic, MarkdownFormatter, ParserConfig, TypeDescriptor, TypeRegistry,
};
pub use herald_core::config::{load_config, load_config_or_default, CommitTypeConfig, Config, UrlTemplates};
pub use herald_core::error::{HeraldError, Result};
pub use herald_core::types::{RawCommit, Severity};
pub use herald_core::workflow::{compose_document, compose_release_message};
pub use herald_strategies::{BumpType, NextVersion, Version, VersionCalculator};

//! Commit parsing

mod conventional;
mod types;

pub use conventional::ConventionalParser;
pub use types::*;

use herald_core::error::ChangelogError;
use herald_core::types::RawCommit;
use tracing::{info, warn};

use crate::types::{CommitRecord, Diagnostic};

/// Records and diagnostics from parsing a batch of commits
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Successfully parsed commits, in input order
    pub records: Vec<CommitRecord>,
    /// One entry per excluded commit
    pub diagnostics: Vec<Diagnostic>,
}

/// Trait for commit parsers
pub trait CommitParser: Send + Sync {
    /// Parse a single commit into a structured record
    fn parse(&self, commit: &RawCommit) -> Result<CommitRecord, ChangelogError>;

    /// Parse every commit, collecting failures instead of stopping at them
    fn parse_all(&self, commits: &[RawCommit]) -> ParseOutcome {
        let mut outcome = ParseOutcome::default();

        for commit in commits {
            match self.parse(commit) {
                Ok(record) => outcome.records.push(record),
                Err(err) => {
                    warn!(hash = %commit.hash, error = %err, "excluding commit");
                    outcome.diagnostics.push(err.into());
                }
            }
        }

        info!(
            parsed = outcome.records.len(),
            excluded = outcome.diagnostics.len(),
            "commits parsed"
        );
        outcome
    }
}

//! Next-version calculation from commit signals

use herald_core::error::Result;
use herald_core::types::ChangeSignal;
use tracing::{debug, info, instrument};

use crate::semver::SemVerStrategy;
use crate::traits::VersionStrategy;
use crate::types::{BumpType, Version};

/// Outcome of a version calculation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextVersion {
    /// A release is warranted
    Release {
        /// The new version
        version: Version,
        /// The bump that produced it
        bump: BumpType,
    },
    /// No commit qualifies for a release; callers skip release creation
    NoRelease,
}

impl NextVersion {
    /// The new version, if a release is warranted
    pub fn version(&self) -> Option<&Version> {
        match self {
            Self::Release { version, .. } => Some(version),
            Self::NoRelease => None,
        }
    }

    /// Whether a release should be created
    pub fn is_release(&self) -> bool {
        matches!(self, Self::Release { .. })
    }
}

/// Derives the next semantic version from the current one
#[derive(Debug, Clone, Default)]
pub struct VersionCalculator {
    strategy: SemVerStrategy,
    prerelease: Option<String>,
}

impl VersionCalculator {
    /// Create a calculator producing regular releases
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce prerelease versions on the given channel (e.g. `alpha`)
    pub fn with_prerelease(mut self, channel: impl Into<String>) -> Self {
        self.prerelease = Some(channel.into());
        self
    }

    /// Parse a version string with this calculator's strategy
    pub fn parse(&self, version: &str) -> Result<Version> {
        self.strategy.parse(version)
    }

    /// Compute the next version.
    ///
    /// `signals` holds one entry per visible, successfully parsed commit.
    /// Returns [`NextVersion::NoRelease`] instead of an unchanged version when
    /// nothing qualifies. Fails only when the prerelease channel is not a
    /// valid prerelease identifier.
    #[instrument(skip(self, current, signals), fields(current = %current, signal_count = signals.len()))]
    pub fn next_version(&self, current: &Version, signals: &[ChangeSignal]) -> Result<NextVersion> {
        let bump = self.strategy.determine_bump_type(current, signals);
        debug!(bump = %bump, "bump type determined");

        if bump == BumpType::None {
            info!(current = %current, "no qualifying changes, skipping release");
            return Ok(NextVersion::NoRelease);
        }

        let mut version = self.strategy.bump(current, bump);
        if let Some(channel) = &self.prerelease {
            version = self.strategy.apply_prerelease(current, &version, channel)?;
        }

        info!(current = %current, next = %version, bump = %bump, "version calculated");
        Ok(NextVersion::Release { version, bump })
    }
}

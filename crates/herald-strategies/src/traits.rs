//! Version strategy traits

use herald_core::error::Result;
use herald_core::types::{ChangeSignal, Severity};

use crate::types::{BumpType, Version};

/// Trait for version strategies
pub trait VersionStrategy: Send + Sync {
    /// Parse a version string into components
    fn parse(&self, version: &str) -> Result<Version>;

    /// Bump the version according to the bump type
    fn bump(&self, current: &Version, bump_type: BumpType) -> Version;

    /// Determine the bump type from the signals of all visible commits.
    ///
    /// Strict priority: any breaking change outranks any feature, which
    /// outranks any other releasable severity. Before 1.0.0 a breaking change
    /// only bumps minor.
    fn determine_bump_type(&self, current: &Version, signals: &[ChangeSignal]) -> BumpType {
        if signals.iter().any(|s| s.breaking) {
            return if current.major > 0 {
                BumpType::Major
            } else {
                BumpType::Minor
            };
        }

        match signals.iter().map(|s| s.severity).max() {
            Some(Severity::Feature) => BumpType::Minor,
            Some(Severity::Fix | Severity::Performance) => BumpType::Patch,
            Some(Severity::None) | None => BumpType::None,
        }
    }
}

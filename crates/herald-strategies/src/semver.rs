//! SemVer version strategy

use ::semver::{BuildMetadata, Prerelease};
use herald_core::error::{Result, VersionError};

use crate::traits::VersionStrategy;
use crate::types::{BumpType, Version};

/// Semantic Versioning strategy
///
/// Follows the SemVer 2.0.0 specification: https://semver.org/
#[derive(Debug, Clone, Copy, Default)]
pub struct SemVerStrategy;

impl SemVerStrategy {
    /// Create a new SemVer strategy
    pub fn new() -> Self {
        Self
    }

    /// Move `bumped` onto the `channel` prerelease line.
    ///
    /// Continues the counter when `current` already is a `channel.N`
    /// prerelease of the same base version, otherwise starts at `channel.0`.
    /// Fails when `channel` is not a valid prerelease identifier.
    pub fn apply_prerelease(
        &self,
        current: &Version,
        bumped: &Version,
        channel: &str,
    ) -> Result<Version> {
        let continued = Some(current.pre.as_str())
            .filter(|pre| !pre.is_empty() && same_base(current, bumped))
            .and_then(|pre| pre.strip_prefix(channel))
            .and_then(|rest| rest.strip_prefix('.'))
            .and_then(|n| n.parse::<u64>().ok())
            .map(|n| n + 1);

        let counter = continued.unwrap_or(0);
        let pre = Prerelease::new(&format!("{}.{}", channel, counter))
            .map_err(|e| VersionError::InvalidPrerelease(channel.to_string(), e.to_string()))?;

        let mut result = bumped.clone();
        result.pre = pre;
        result.build = BuildMetadata::EMPTY;
        Ok(result)
    }
}

fn same_base(a: &Version, b: &Version) -> bool {
    (a.major, a.minor, a.patch) == (b.major, b.minor, b.patch)
}

impl VersionStrategy for SemVerStrategy {
    fn parse(&self, version: &str) -> Result<Version> {
        let trimmed = version.trim();
        let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);
        Version::parse(trimmed)
            .map_err(|e| VersionError::ParseFailed(version.to_string(), e.to_string()).into())
    }

    fn bump(&self, current: &Version, bump_type: BumpType) -> Version {
        let mut result = current.clone();
        let promoting = !current.pre.is_empty();

        match bump_type {
            BumpType::Major => {
                // 2.0.0-rc.1 releases as 2.0.0
                if !(promoting && current.minor == 0 && current.patch == 0) {
                    result.major += 1;
                }
                result.minor = 0;
                result.patch = 0;
            }
            BumpType::Minor => {
                if !(promoting && current.patch == 0) {
                    result.minor += 1;
                }
                result.patch = 0;
            }
            BumpType::Patch => {
                if !promoting {
                    result.patch += 1;
                }
            }
            BumpType::None => return result,
        }

        result.pre = Prerelease::EMPTY;
        result.build = BuildMetadata::EMPTY;
        result
    }
}

//! Version strategy types

use serde::{Deserialize, Serialize};

/// A semantic version: `major.minor.patch[-prerelease][+build]`
pub use ::semver::Version;

/// Type of version bump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BumpType {
    /// Major version bump (breaking changes)
    Major,
    /// Minor version bump (new features, or breaking changes before 1.0)
    Minor,
    /// Patch version bump (fixes and other releasable changes)
    Patch,
    /// No bump needed
    None,
}

impl std::fmt::Display for BumpType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Major => write!(f, "major"),
            Self::Minor => write!(f, "minor"),
            Self::Patch => write!(f, "patch"),
            Self::None => write!(f, "none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bump_type_display() {
        assert_eq!(BumpType::Major.to_string(), "major");
        assert_eq!(BumpType::None.to_string(), "none");
    }

    #[test]
    fn test_bump_type_serde() {
        let json = serde_json::to_string(&BumpType::Minor).unwrap();
        assert_eq!(json, "\"minor\"");
    }

    #[test]
    fn test_version_serializes_as_string() {
        let json = serde_json::to_string(&Version::new(1, 3, 0)).unwrap();
        assert_eq!(json, "\"1.3.0\"");
    }
}

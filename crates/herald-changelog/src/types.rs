//! Changelog types

use chrono::NaiveDate;
use herald_core::error::ChangelogError;
use serde::{Deserialize, Serialize};

/// A commit parsed from conventional commit format
///
/// Built once by a [`CommitParser`](crate::parser::CommitParser) and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Original commit hash
    pub hash: String,
    /// Commit type (feat, fix, etc.), lowercased
    pub type_tag: String,
    /// Scope (optional, in parentheses)
    pub scope: Option<String>,
    /// Header text after the colon
    pub subject: String,
    /// Free text between header and footers
    pub body: Option<String>,
    /// Whether this is a breaking change
    pub breaking_change: bool,
    /// Text describing the breaking change
    pub breaking_note: Option<String>,
    /// Footer fields
    pub footers: Vec<Footer>,
    /// Issue references from footers, in document order
    pub footer_references: Vec<String>,
    /// Author handle supplied with the raw commit
    pub author: Option<String>,
}

impl CommitRecord {
    /// Create a record with only the header fields set
    pub fn new(
        hash: impl Into<String>,
        type_tag: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            hash: hash.into(),
            type_tag: type_tag.into(),
            scope: None,
            subject: subject.into(),
            body: None,
            breaking_change: false,
            breaking_note: None,
            footers: Vec::new(),
            footer_references: Vec::new(),
            author: None,
        }
    }

    /// Set the scope
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Mark as breaking
    pub fn with_breaking(mut self, note: impl Into<String>) -> Self {
        self.breaking_change = true;
        self.breaking_note = Some(note.into());
        self
    }

    /// Set the author handle
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Add an issue reference
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.footer_references.push(reference.into());
        self
    }

    /// First seven characters of the hash
    pub fn short_hash(&self) -> &str {
        let end = self
            .hash
            .char_indices()
            .nth(7)
            .map_or(self.hash.len(), |(i, _)| i);
        &self.hash[..end]
    }
}

/// A footer field from a conventional commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    /// Footer token (e.g., "BREAKING CHANGE", "Closes", "Refs")
    pub token: String,
    /// Footer value
    pub value: String,
}

impl Footer {
    /// Whether this footer announces a breaking change
    pub fn is_breaking(&self) -> bool {
        self.token.eq_ignore_ascii_case("BREAKING CHANGE")
            || self.token.eq_ignore_ascii_case("BREAKING-CHANGE")
    }
}

/// A section in a changelog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogSection {
    /// Section label
    pub label: String,
    /// Commits in this section, in arrival order
    pub entries: Vec<CommitRecord>,
}

impl ChangelogSection {
    /// Create a new section
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            entries: Vec::new(),
        }
    }

    /// Add a commit to the section
    pub fn add_entry(&mut self, commit: CommitRecord) {
        self.entries.push(commit);
    }

    /// Check if section is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything the renderer needs for one release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogEntry {
    /// Version string
    pub version: String,
    /// Tag of this release
    pub current_tag: String,
    /// Tag of the previous release; absent for a first release
    pub previous_tag: Option<String>,
    /// Release date, rendered when supplied
    pub date: Option<NaiveDate>,
    /// Sections in registry order
    pub sections: Vec<ChangelogSection>,
    /// Visible breaking changes, highlighted separately
    pub breaking_changes: Vec<CommitRecord>,
}

impl ChangelogEntry {
    /// Create a new changelog entry
    pub fn new(version: impl Into<String>, current_tag: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            current_tag: current_tag.into(),
            previous_tag: None,
            date: None,
            sections: Vec::new(),
            breaking_changes: Vec::new(),
        }
    }

    /// Set the previous tag
    pub fn with_previous_tag(mut self, tag: impl Into<String>) -> Self {
        self.previous_tag = Some(tag.into());
        self
    }

    /// Set the date
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Add a section; empty sections are dropped
    pub fn add_section(&mut self, section: ChangelogSection) {
        if !section.is_empty() {
            self.sections.push(section);
        }
    }

    /// Add a breaking change
    pub fn add_breaking_change(&mut self, commit: CommitRecord) {
        self.breaking_changes.push(commit);
    }

    /// Check if entry has any content
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.breaking_changes.is_empty()
    }
}

/// A non-fatal problem found while parsing or classifying commits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Header does not follow the conventional shape; commit was excluded
    MalformedCommit {
        /// Commit hash
        hash: String,
        /// Why parsing failed
        reason: String,
    },
    /// Type is not configured; commit was treated as hidden
    UnknownType {
        /// Commit hash
        hash: String,
        /// The unrecognized type
        type_tag: String,
    },
}

impl Diagnostic {
    /// Hash of the commit this diagnostic is about
    pub fn hash(&self) -> &str {
        match self {
            Self::MalformedCommit { hash, .. } | Self::UnknownType { hash, .. } => hash,
        }
    }

    /// Warnings do not exclude anything the configuration asked for
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::UnknownType { .. })
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedCommit { hash, reason } => {
                write!(f, "malformed commit {}: {}", hash, reason)
            }
            Self::UnknownType { hash, type_tag } => {
                write!(f, "commit {} has unknown type '{}'", hash, type_tag)
            }
        }
    }
}

impl From<ChangelogError> for Diagnostic {
    fn from(err: ChangelogError) -> Self {
        match err {
            ChangelogError::MalformedCommit { hash, reason } => {
                Self::MalformedCommit { hash, reason }
            }
        }
    }
}

//! Grouping of parsed commits into changelog sections

use std::collections::HashMap;

use tracing::{debug, instrument, warn};

use crate::registry::TypeRegistry;
use crate::types::{ChangelogSection, CommitRecord, Diagnostic};

/// Visible commits grouped for rendering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedChanges {
    /// Non-empty sections in registry order
    pub sections: Vec<ChangelogSection>,
    /// Visible breaking commits in arrival order
    pub breaking: Vec<CommitRecord>,
    /// Unknown-type warnings
    pub diagnostics: Vec<Diagnostic>,
}

impl ClassifiedChanges {
    /// Whether nothing visible survived classification
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Number of visible commits
    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }

    /// Entries of the section with the given label
    pub fn section(&self, label: &str) -> Option<&ChangelogSection> {
        self.sections.iter().find(|s| s.label == label)
    }
}

/// Group commits by section, dropping hidden and unknown types.
///
/// Sections follow [`TypeRegistry::ordered_visible_sections`]; entries keep
/// the order of `commits`.
#[instrument(skip(commits, registry), fields(commit_count = commits.len()))]
pub fn classify(commits: &[CommitRecord], registry: &TypeRegistry) -> ClassifiedChanges {
    let mut sections: Vec<ChangelogSection> = registry
        .ordered_visible_sections()
        .into_iter()
        .map(ChangelogSection::new)
        .collect();
    let positions: HashMap<String, usize> = sections
        .iter()
        .enumerate()
        .map(|(i, s)| (s.label.clone(), i))
        .collect();

    let mut changes = ClassifiedChanges::default();

    for commit in commits {
        if !registry.is_known(&commit.type_tag) {
            warn!(hash = %commit.hash, type_tag = %commit.type_tag, "unknown commit type, treating as hidden");
            changes.diagnostics.push(Diagnostic::UnknownType {
                hash: commit.hash.clone(),
                type_tag: commit.type_tag.clone(),
            });
            continue;
        }

        let descriptor = registry.resolve(&commit.type_tag);
        let Some(&position) = descriptor
            .section
            .as_ref()
            .filter(|_| descriptor.is_visible())
            .and_then(|label| positions.get(label))
        else {
            continue;
        };

        sections[position].add_entry(commit.clone());
        if commit.breaking_change {
            changes.breaking.push(commit.clone());
        }
    }

    changes.sections = sections.into_iter().filter(|s| !s.is_empty()).collect();

    debug!(
        sections = changes.sections.len(),
        entries = changes.entry_count(),
        breaking = changes.breaking.len(),
        "commits classified"
    );
    changes
}

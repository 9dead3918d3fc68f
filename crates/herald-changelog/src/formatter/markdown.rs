//! Markdown changelog formatter

use herald_core::config::UrlTemplates;
use herald_core::placeholder::{self, CURRENT_TAG, HASH, ID, PREVIOUS_TAG, USER};
use tracing::{debug, instrument, warn};

use super::ChangelogFormatter;
use crate::types::{ChangelogEntry, CommitRecord};

/// Markdown changelog formatter
///
/// Output depends only on the entry and the templates, so formatting the same
/// input twice yields identical text.
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self
    }

    fn heading(&self, entry: &ChangelogEntry, templates: &UrlTemplates) -> String {
        let compare = entry.previous_tag.as_deref().and_then(|previous| {
            link(
                templates.compare_url_format.as_deref(),
                &[(PREVIOUS_TAG, previous), (CURRENT_TAG, entry.current_tag.as_str())],
            )
        });

        let mut heading = match compare {
            Some(url) => format!("## [{}]({})", entry.version, url),
            None => format!("## {}", entry.version),
        };
        if let Some(date) = entry.date {
            heading.push_str(&format!(" ({})", date.format("%Y-%m-%d")));
        }
        heading
    }

    fn entry_line(&self, commit: &CommitRecord, templates: &UrlTemplates) -> String {
        let mut line = String::from("* ");

        if let Some(scope) = &commit.scope {
            line.push_str(&format!("({}) ", scope));
        }
        line.push_str(&commit.subject);

        let short_hash = commit.short_hash();
        match link(templates.commit_url_format.as_deref(), &[(HASH, commit.hash.as_str())]) {
            Some(url) => line.push_str(&format!(" ([{}]({}))", short_hash, url)),
            None => line.push_str(&format!(" ({})", short_hash)),
        }

        if let Some(user) = &commit.author {
            if let Some(url) = link(templates.user_url_format.as_deref(), &[(USER, user.as_str())]) {
                line.push_str(&format!(" by [@{}]({})", user, url));
            }
        }

        if !commit.footer_references.is_empty() {
            let references: Vec<String> = commit
                .footer_references
                .iter()
                .map(|reference| self.reference(reference, templates))
                .collect();
            line.push_str(&format!(", closes {}", references.join(", ")));
        }

        line
    }

    /// Issue reference, linked when it points into this repository
    fn reference(&self, reference: &str, templates: &UrlTemplates) -> String {
        match reference.strip_prefix('#') {
            Some(id) => link(templates.issue_url_format.as_deref(), &[(ID, id)])
                .map(|url| format!("[{}]({})", reference, url))
                .unwrap_or_else(|| reference.to_string()),
            None => reference.to_string(),
        }
    }
}

/// Substitute a template, omitting the link when it is unset or cannot be
/// filled
fn link(template: Option<&str>, vars: &[(&str, &str)]) -> Option<String> {
    let template = template?;
    match placeholder::substitute(template, vars) {
        Ok(url) => Some(url),
        Err(err) => {
            warn!(template, error = %err, "omitting link");
            None
        }
    }
}

impl ChangelogFormatter for MarkdownFormatter {
    #[instrument(skip(self, entry, templates), fields(version = %entry.version, section_count = entry.sections.len()))]
    fn format(&self, entry: &ChangelogEntry, templates: &UrlTemplates) -> String {
        let mut output = String::new();

        output.push_str(&self.heading(entry, templates));
        output.push_str("\n\n");

        // Breaking changes
        if !entry.breaking_changes.is_empty() {
            output.push_str("### ⚠ BREAKING CHANGES\n\n");
            for commit in &entry.breaking_changes {
                let note = commit.breaking_note.as_deref().unwrap_or(&commit.subject);
                let note = note.replace('\n', "\n  ");
                match &commit.scope {
                    Some(scope) => output.push_str(&format!("* **{}:** {}\n", scope, note)),
                    None => output.push_str(&format!("* {}\n", note)),
                }
            }
            output.push('\n');
        }

        // Sections
        for section in &entry.sections {
            if section.is_empty() {
                continue;
            }

            output.push_str(&format!("### {}\n\n", section.label));
            for commit in &section.entries {
                output.push_str(&self.entry_line(commit, templates));
                output.push('\n');
            }
            output.push('\n');
        }

        debug!(output_len = output.len(), "markdown changelog formatted");
        output
    }
}

//! Changelog formatters

mod markdown;

pub use markdown::MarkdownFormatter;

use herald_core::config::UrlTemplates;

use crate::types::ChangelogEntry;

/// Trait for changelog formatters
pub trait ChangelogFormatter: Send + Sync {
    /// Format a changelog entry to string
    fn format(&self, entry: &ChangelogEntry, templates: &UrlTemplates) -> String;
}

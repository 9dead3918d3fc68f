//! Herald Changelog - Commit parsing and changelog rendering
//!
//! This crate turns raw commit messages into conventional commit records,
//! groups them by the configured commit types and renders changelog
//! fragments.

pub mod classifier;
pub mod formatter;
pub mod generator;
pub mod parser;
pub mod registry;
pub mod types;

pub use classifier::{classify, ClassifiedChanges};
pub use formatter::{ChangelogFormatter, MarkdownFormatter};
pub use generator::{Analysis, ChangelogGenerator};
pub use parser::{CommitParser, ConventionalParser, ParseOutcome, ParserConfig};
pub use registry::{TypeDescriptor, TypeRegistry};
pub use types::{ChangelogEntry, ChangelogSection, CommitRecord, Diagnostic, Footer};

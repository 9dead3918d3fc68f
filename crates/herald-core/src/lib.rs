//! Herald Core - Core library for release automation
//!
//! This crate provides the foundational types, error handling, configuration,
//! template substitution and release-commit composition shared by the other
//! Herald crates.

pub mod config;
pub mod error;
pub mod placeholder;
pub mod types;
pub mod workflow;

pub use config::{CommitTypeConfig, Config, UrlTemplates};
pub use error::{HeraldError, Result};
pub use types::{ChangeSignal, RawCommit, Severity};
pub use workflow::{compose_document, compose_release_message, format_tag};

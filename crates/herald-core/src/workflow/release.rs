//! Release commit composition

use tracing::debug;

use crate::error::Result;
use crate::placeholder::{self, CURRENT_TAG};

/// Build the release commit message for `next_version`.
///
/// `{{currentTag}}` receives the bare version; templates carry their own tag
/// prefix (`chore(release): v{{currentTag}} [skip ci]`). The message is handed
/// verbatim to the version-control collaborator.
pub fn compose_release_message(next_version: &str, template: &str) -> Result<String> {
    let message = placeholder::substitute(template, &[(CURRENT_TAG, next_version)])?;
    debug!(version = next_version, message = %message, "release commit message composed");
    Ok(message)
}

/// Format a version tag with the configured prefix
pub fn format_tag(tag_prefix: &str, version: &str) -> String {
    format!("{}{}", tag_prefix, version)
}

//! `{{name}}` placeholder substitution for URL and message templates

use std::sync::LazyLock;

use regex::Regex;

use crate::error::TemplateError;

/// Commit hash in `commitUrlFormat`
pub const HASH: &str = "hash";
/// Tag of the previous release in `compareUrlFormat`
pub const PREVIOUS_TAG: &str = "previousTag";
/// Tag (or version, in release messages) of the release being prepared
pub const CURRENT_TAG: &str = "currentTag";
/// Author handle in `userUrlFormat`
pub const USER: &str = "user";
/// Issue number in `issueUrlFormat`
pub const ID: &str = "id";

static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*(?P<name>[A-Za-z][A-Za-z0-9_]*)\s*\}\}").expect("Invalid regex")
});

/// Replace every `{{name}}` in `template` with its value from `vars`.
///
/// Text outside placeholders is copied verbatim. A placeholder whose name has
/// no entry in `vars` fails the whole substitution; callers decide whether
/// that omits the output or aborts.
pub fn substitute(template: &str, vars: &[(&str, &str)]) -> Result<String, TemplateError> {
    let mut output = String::with_capacity(template.len());
    let mut last = 0;

    for caps in PLACEHOLDER_REGEX.captures_iter(template) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.name("name")) else {
            continue;
        };

        let value = vars
            .iter()
            .find(|(key, _)| *key == name.as_str())
            .map(|(_, value)| *value)
            .ok_or_else(|| TemplateError::MissingValue(name.as_str().to_string()))?;

        output.push_str(&template[last..whole.start()]);
        output.push_str(value);
        last = whole.end();
    }

    output.push_str(&template[last..]);
    Ok(output)
}

/// Names of all placeholders referenced by `template`, in order of appearance
pub fn placeholders(template: &str) -> Vec<String> {
    PLACEHOLDER_REGEX
        .captures_iter(template)
        .filter_map(|caps| caps.name("name").map(|m| m.as_str().to_string()))
        .collect()
}

/// Whether `template` references the placeholder `name`
pub fn references(template: &str, name: &str) -> bool {
    placeholders(template).iter().any(|p| p == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_single() {
        let url = substitute(
            "https://github.com/acme/app/commit/{{hash}}",
            &[(HASH, "abc123")],
        )
        .unwrap();
        assert_eq!(url, "https://github.com/acme/app/commit/abc123");
    }

    #[test]
    fn test_substitute_multiple_and_repeated() {
        let out = substitute(
            "{{previousTag}}...{{currentTag}} ({{currentTag}})",
            &[(PREVIOUS_TAG, "v1.0.0"), (CURRENT_TAG, "v1.1.0")],
        )
        .unwrap();
        assert_eq!(out, "v1.0.0...v1.1.0 (v1.1.0)");
    }

    #[test]
    fn test_substitute_tolerates_inner_whitespace() {
        let out = substitute("chore(release): v{{ currentTag }}", &[(CURRENT_TAG, "2.0.0")]).unwrap();
        assert_eq!(out, "chore(release): v2.0.0");
    }

    #[test]
    fn test_substitute_missing_value() {
        let err = substitute("{{previousTag}}...{{currentTag}}", &[(CURRENT_TAG, "v1.0.0")])
            .unwrap_err();
        assert_eq!(err, TemplateError::MissingValue("previousTag".to_string()));
    }

    #[test]
    fn test_substitute_without_placeholders() {
        let out = substitute("plain text", &[]).unwrap();
        assert_eq!(out, "plain text");
    }

    #[test]
    fn test_placeholders_and_references() {
        let template = "https://x/compare/{{previousTag}}...{{currentTag}}";
        assert_eq!(placeholders(template), vec!["previousTag", "currentTag"]);
        assert!(references(template, CURRENT_TAG));
        assert!(!references(template, HASH));
    }
}

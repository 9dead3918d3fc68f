//! Conventional Commits parser
//!
//! Parses commits following the Conventional Commits specification:
//! https://www.conventionalcommits.org/

use regex::Regex;
use std::sync::LazyLock;

use herald_core::error::ChangelogError;
use herald_core::types::RawCommit;
use tracing::trace;

use super::{CommitParser, ParserConfig};
use crate::types::{CommitRecord, Footer};

/// Regex for parsing conventional commit headers
static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<type>[A-Za-z][A-Za-z0-9_-]*)(?:\((?P<scope>[^()\r\n]+)\))?(?P<breaking>!)?:[ \t]+(?P<subject>\S.*)$",
    )
    .expect("Invalid regex")
});

/// Regex for parsing footer lines (`Token: value` or `Token #value`)
static FOOTER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<token>BREAKING[ -]CHANGE|[A-Za-z][A-Za-z-]*)(?P<sep>:[ \t]+| #)(?P<value>\S.*)$")
        .expect("Invalid regex")
});

/// Regex for the breaking-change footer, which may carry its note on the next line
static BREAKING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<token>BREAKING[ -]CHANGE):[ \t]*(?P<value>.*)$").expect("Invalid regex")
});

/// Regex for issue references inside footer values
static REFERENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[A-Za-z0-9_.-]+/[A-Za-z0-9_.-]+)?#\d+").expect("Invalid regex")
});

/// Parser for Conventional Commits format
pub struct ConventionalParser {
    config: ParserConfig,
}

impl ConventionalParser {
    /// Create a new parser with default configuration
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a commit message
    fn parse_message(&self, message: &str) -> Result<ParsedMessage, String> {
        let mut lines = message.lines().skip_while(|l| l.trim().is_empty());
        let header = lines
            .next()
            .map(str::trim_end)
            .ok_or_else(|| "empty commit message".to_string())?;

        let caps = HEADER_REGEX.captures(header).ok_or_else(|| {
            format!(
                "header '{}' does not match 'type(scope)!: subject'",
                header
            )
        })?;

        let group = |name: &str| caps.name(name).map(|m| m.as_str());
        let type_tag = group("type").unwrap_or_default().to_lowercase();
        let scope = group("scope").map(str::to_string);
        let breaking_marker = group("breaking").is_some();
        let subject = group("subject").unwrap_or_default().trim_end().to_string();

        let rest: Vec<&str> = lines.collect();
        let (body, footers) = self.parse_body(&rest);

        let breaking_footer = footers.iter().find(|f| f.is_breaking());
        let breaking_note = match breaking_footer {
            Some(footer) if !footer.value.is_empty() => Some(footer.value.clone()),
            Some(_) => Some(subject.clone()),
            None if breaking_marker => Some(subject.clone()),
            None => None,
        };

        let references = footers
            .iter()
            .filter(|f| self.config.is_reference_action(&f.token))
            .flat_map(|f| REFERENCE_REGEX.find_iter(&f.value))
            .map(|m| m.as_str().to_string())
            .collect();

        Ok(ParsedMessage {
            type_tag,
            scope,
            breaking: breaking_marker || breaking_footer.is_some(),
            breaking_note,
            subject,
            body,
            footers,
            references,
        })
    }

    /// Split the lines after the header into body text and footers.
    ///
    /// The footer block starts at the first footer line that opens a
    /// paragraph, at any `BREAKING CHANGE:` line, or at a reference footer
    /// such as `Closes #12`. Inside it, lines that are not footers continue
    /// the previous footer's value.
    fn parse_body(&self, lines: &[&str]) -> (Option<String>, Vec<Footer>) {
        let mut footers: Vec<Footer> = Vec::new();
        let mut body_lines = Vec::new();
        let mut in_footer = false;
        let mut paragraph_start = true;

        for line in lines {
            let line = line.trim_end();
            if line.is_empty() {
                if !in_footer {
                    body_lines.push(line);
                }
                paragraph_start = true;
                continue;
            }

            if let Some(caps) = BREAKING_REGEX.captures(line) {
                in_footer = true;
                let group = |name: &str| caps.name(name).map_or("", |m| m.as_str());
                footers.push(Footer {
                    token: group("token").to_string(),
                    value: group("value").trim().to_string(),
                });
            } else {
                match FOOTER_REGEX.captures(line) {
                    Some(caps)
                        if in_footer
                            || paragraph_start
                            || caps
                                .name("token")
                                .is_some_and(|m| self.config.is_reference_action(m.as_str())) =>
                    {
                        in_footer = true;
                        footers.push(footer_from(&caps));
                    }
                    _ if in_footer => {
                        if let Some(last) = footers.last_mut() {
                            if !last.value.is_empty() {
                                last.value.push('\n');
                            }
                            last.value.push_str(line.trim());
                        }
                    }
                    _ => body_lines.push(line),
                }
            }
            paragraph_start = false;
        }

        let body = body_lines.join("\n").trim().to_string();
        let body = if body.is_empty() { None } else { Some(body) };

        (body, footers)
    }
}

fn footer_from(caps: &regex::Captures<'_>) -> Footer {
    let token = caps.name("token").map_or("", |m| m.as_str()).to_string();
    let value = caps.name("value").map_or("", |m| m.as_str());
    let value = if caps.name("sep").is_some_and(|m| m.as_str() == " #") {
        format!("#{}", value)
    } else {
        value.to_string()
    };
    Footer { token, value }
}

impl Default for ConventionalParser {
    fn default() -> Self {
        Self::new()
    }
}

struct ParsedMessage {
    type_tag: String,
    scope: Option<String>,
    breaking: bool,
    breaking_note: Option<String>,
    subject: String,
    body: Option<String>,
    footers: Vec<Footer>,
    references: Vec<String>,
}

impl CommitParser for ConventionalParser {
    fn parse(&self, commit: &RawCommit) -> Result<CommitRecord, ChangelogError> {
        let parsed = self
            .parse_message(&commit.message)
            .map_err(|reason| ChangelogError::MalformedCommit {
                hash: commit.hash.clone(),
                reason,
            })?;

        trace!(hash = %commit.hash, type_tag = %parsed.type_tag, breaking = parsed.breaking, "commit parsed");

        Ok(CommitRecord {
            hash: commit.hash.clone(),
            type_tag: parsed.type_tag,
            scope: parsed.scope,
            subject: parsed.subject,
            body: parsed.body,
            breaking_change: parsed.breaking,
            breaking_note: parsed.breaking_note,
            footers: parsed.footers,
            footer_references: parsed.references,
            author: commit.author.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_commit(message: &str) -> RawCommit {
        RawCommit::new("abc1234567890", message)
    }

    fn parse(message: &str) -> CommitRecord {
        ConventionalParser::new().parse(&make_commit(message)).unwrap()
    }

    #[test]
    fn test_parse_simple_feat() {
        let parsed = parse("feat: add new feature");

        assert_eq!(parsed.type_tag, "feat");
        assert_eq!(parsed.subject, "add new feature");
        assert!(parsed.scope.is_none());
        assert!(!parsed.breaking_change);
        assert!(parsed.body.is_none());
    }

    #[test]
    fn test_parse_with_scope() {
        let parsed = parse("fix(parser): handle edge case");

        assert_eq!(parsed.type_tag, "fix");
        assert_eq!(parsed.scope, Some("parser".to_string()));
        assert_eq!(parsed.subject, "handle edge case");
    }

    #[test]
    fn test_parse_breaking_change_marker() {
        let parsed = parse("feat!: drop legacy API");

        assert!(parsed.breaking_change);
        assert_eq!(parsed.breaking_note.as_deref(), Some("drop legacy API"));
    }

    #[test]
    fn test_parse_breaking_with_scope() {
        let parsed = parse("refactor(core)!: major refactoring");

        assert_eq!(parsed.type_tag, "refactor");
        assert_eq!(parsed.scope, Some("core".to_string()));
        assert!(parsed.breaking_change);
    }

    #[test]
    fn test_type_is_lowercased() {
        let parsed = parse("Feat: shout");
        assert_eq!(parsed.type_tag, "feat");
    }

    #[test]
    fn test_parse_non_conventional() {
        let parser = ConventionalParser::new();
        let err = parser
            .parse(&make_commit("Just a regular commit message"))
            .unwrap_err();

        match err {
            ChangelogError::MalformedCommit { hash, reason } => {
                assert_eq!(hash, "abc1234567890");
                assert!(reason.contains("Just a regular commit message"));
            }
        }
    }

    #[test]
    fn test_parse_rejects_malformed_headers() {
        let parser = ConventionalParser::new();
        for message in ["", "\n\n", "feat(): empty scope", "feat:no space", "feat: ", "(scope): x"] {
            assert!(
                parser.parse(&make_commit(message)).is_err(),
                "expected '{}' to be malformed",
                message
            );
        }
    }

    #[test]
    fn test_parse_skips_leading_blank_lines() {
        let parsed = parse("\n\nfix: trailing  \n");
        assert_eq!(parsed.subject, "trailing");
    }

    #[test]
    fn test_parse_with_body() {
        let parsed = parse("feat: add feature\n\nThis is the body\n\nWith multiple paragraphs.");
        assert_eq!(
            parsed.body.as_deref(),
            Some("This is the body\n\nWith multiple paragraphs.")
        );
        assert!(parsed.footers.is_empty());
    }

    #[test]
    fn test_parse_with_footer() {
        let parsed = parse("feat: add feature\n\nBody text\n\nRefs: #123\nReviewed-by: Z");
        assert_eq!(parsed.body.as_deref(), Some("Body text"));
        assert_eq!(parsed.footers.len(), 2);
        assert_eq!(parsed.footers[0].token, "Refs");
        assert_eq!(parsed.footers[0].value, "#123");
        assert_eq!(parsed.footer_references, vec!["#123"]);
    }

    #[test]
    fn test_colon_line_inside_paragraph_is_body() {
        let parsed = parse("fix: x\n\nfirst line\nNote: still body");
        assert!(parsed.footers.is_empty());
        assert_eq!(parsed.body.as_deref(), Some("first line\nNote: still body"));
    }

    #[test]
    fn test_breaking_footer_directly_under_body() {
        let parsed = parse(
            "feat: new api\n\nRewrote the handler.\nBREAKING CHANGE: old endpoints removed",
        );
        assert!(parsed.breaking_change);
        assert_eq!(parsed.breaking_note.as_deref(), Some("old endpoints removed"));
        assert_eq!(parsed.body.as_deref(), Some("Rewrote the handler."));
    }

    #[test]
    fn test_breaking_footer_with_note_on_next_line() {
        let parsed = parse("feat: new api\n\nBREAKING CHANGE:\nold endpoints removed");
        assert!(parsed.breaking_change);
        assert_eq!(parsed.breaking_note.as_deref(), Some("old endpoints removed"));
        assert!(parsed.body.is_none());
    }

    #[test]
    fn test_empty_breaking_footer_falls_back_to_subject() {
        let parsed = parse("feat: new api\n\nBREAKING-CHANGE:");
        assert!(parsed.breaking_change);
        assert_eq!(parsed.breaking_note.as_deref(), Some("new api"));
    }

    #[test]
    fn test_reference_footer_directly_under_body() {
        let parsed = parse("fix: x\n\nSome body\nCloses #12");
        assert_eq!(parsed.footer_references, vec!["#12"]);
        assert_eq!(parsed.body.as_deref(), Some("Some body"));
    }

    #[test]
    fn test_breaking_change_footer() {
        let parsed = parse("fix: something\n\nBREAKING CHANGE: config moved to herald.toml");
        assert!(parsed.breaking_change);
        assert_eq!(
            parsed.breaking_note.as_deref(),
            Some("config moved to herald.toml")
        );
    }

    #[test]
    fn test_breaking_change_footer_multiline() {
        let parsed = parse(
            "feat: new config\n\nBREAKING CHANGE: the old format\nis no longer read\nCloses #4",
        );
        assert_eq!(
            parsed.breaking_note.as_deref(),
            Some("the old format\nis no longer read")
        );
        assert_eq!(parsed.footer_references, vec!["#4"]);
    }

    #[test]
    fn test_references_in_document_order() {
        let parsed = parse(
            "fix: crash\n\nCloses #12, #13\nRefs: acme/other#7\nReviewed-by: #99",
        );
        assert_eq!(parsed.footer_references, vec!["#12", "#13", "acme/other#7"]);
    }

    #[test]
    fn test_hash_separator_footer() {
        let parsed = parse("fix: crash\n\nFixes #42");
        assert_eq!(parsed.footers[0].token, "Fixes");
        assert_eq!(parsed.footers[0].value, "#42");
        assert_eq!(parsed.footer_references, vec!["#42"]);
    }

    #[test]
    fn test_custom_reference_action() {
        let parser =
            ConventionalParser::with_config(ParserConfig::default().with_reference_action("Part-of"));
        let parsed = parser
            .parse(&make_commit("feat: x\n\nPart-of: #8"))
            .unwrap();
        assert_eq!(parsed.footer_references, vec!["#8"]);
    }

    #[test]
    fn test_author_carried_through() {
        let parser = ConventionalParser::new();
        let commit = make_commit("feat: x").with_author("octocat");
        let parsed = parser.parse(&commit).unwrap();
        assert_eq!(parsed.author.as_deref(), Some("octocat"));
    }

    #[test]
    fn test_parse_all_collects_diagnostics() {
        let parser = ConventionalParser::new();
        let commits = vec![
            RawCommit::new("a1", "feat: add X"),
            RawCommit::new("b2", "updated stuff"),
            RawCommit::new("c3", "fix: fix Y"),
        ];

        let outcome = parser.parse_all(&commits);
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.records[0].hash, "a1");
        assert_eq!(outcome.records[1].hash, "c3");
        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(outcome.diagnostics[0].hash(), "b2");
    }
}

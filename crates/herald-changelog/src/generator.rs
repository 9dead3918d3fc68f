//! Changelog generation

use herald_core::config::{Config, UrlTemplates};
use herald_core::error::ConfigError;
use herald_core::types::{ChangeSignal, RawCommit};
use tracing::{debug, info, instrument};

use crate::classifier::{classify, ClassifiedChanges};
use crate::formatter::{ChangelogFormatter, MarkdownFormatter};
use crate::parser::{CommitParser, ConventionalParser};
use crate::registry::TypeRegistry;
use crate::types::{ChangelogEntry, CommitRecord, Diagnostic};

/// Parsed and classified commits of one release
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    /// Every successfully parsed commit, in input order
    pub records: Vec<CommitRecord>,
    /// Visible commits grouped for rendering
    pub changes: ClassifiedChanges,
    /// Parse failures followed by classification warnings
    pub diagnostics: Vec<Diagnostic>,
}

/// Changelog generator
pub struct ChangelogGenerator {
    parser: Box<dyn CommitParser>,
    formatter: Box<dyn ChangelogFormatter>,
    registry: TypeRegistry,
    templates: UrlTemplates,
}

impl ChangelogGenerator {
    /// Create a new generator with default parser and formatter
    pub fn new(registry: TypeRegistry, templates: UrlTemplates) -> Self {
        Self {
            parser: Box::new(ConventionalParser::new()),
            formatter: Box::new(MarkdownFormatter::new()),
            registry,
            templates,
        }
    }

    /// Create a generator from configuration
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let registry = TypeRegistry::from_config(&config.types)?;
        Ok(Self::new(registry, config.url_templates()))
    }

    /// Use a custom parser
    pub fn with_parser<P: CommitParser + 'static>(mut self, parser: P) -> Self {
        self.parser = Box::new(parser);
        self
    }

    /// The type registry in use
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Parse and classify raw commits
    #[instrument(skip(self, commits), fields(commit_count = commits.len()))]
    pub fn analyze(&self, commits: &[RawCommit]) -> Analysis {
        let parsed = self.parser.parse_all(commits);
        let changes = classify(&parsed.records, &self.registry);

        let mut diagnostics = parsed.diagnostics;
        diagnostics.extend(changes.diagnostics.iter().cloned());

        info!(
            parsed = parsed.records.len(),
            visible = changes.entry_count(),
            diagnostics = diagnostics.len(),
            "commits analyzed"
        );

        Analysis {
            records: parsed.records,
            changes,
            diagnostics,
        }
    }

    /// Bump signals of the visible commits in an analysis
    pub fn signals(&self, analysis: &Analysis) -> Vec<ChangeSignal> {
        self.registry.signals(&analysis.records)
    }

    /// Fill a release entry with classified changes
    pub fn build_entry(&self, mut entry: ChangelogEntry, changes: &ClassifiedChanges) -> ChangelogEntry {
        for section in &changes.sections {
            entry.add_section(section.clone());
        }
        for commit in &changes.breaking {
            entry.add_breaking_change(commit.clone());
        }

        debug!(
            section_count = entry.sections.len(),
            breaking_count = entry.breaking_changes.len(),
            "changelog sections built"
        );
        entry
    }

    /// Format a changelog entry to string
    pub fn format(&self, entry: &ChangelogEntry) -> String {
        self.formatter.format(entry, &self.templates)
    }

    /// Build and format in one step
    pub fn render(&self, entry: ChangelogEntry, changes: &ClassifiedChanges) -> String {
        let entry = self.build_entry(entry, changes);
        let output = self.format(&entry);
        debug!(output_len = output.len(), "changelog formatted");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_commit(hash: &str, message: &str) -> RawCommit {
        RawCommit::new(hash, message)
    }

    fn generator() -> ChangelogGenerator {
        let config = Config {
            commit_url_format: Some("https://github.com/acme/app/commit/{{hash}}".to_string()),
            ..Config::default()
        };
        ChangelogGenerator::from_config(&config).unwrap()
    }

    #[test]
    fn test_analyze() {
        let commits = vec![
            make_commit("a1", "feat: add new feature"),
            make_commit("b2", "not conventional"),
            make_commit("c3", "chore: update deps"),
            make_commit("d4", "wip: halfway"),
            make_commit("e5", "fix: fix bug"),
        ];

        let analysis = generator().analyze(&commits);

        assert_eq!(analysis.records.len(), 4);
        assert_eq!(analysis.changes.entry_count(), 2);
        assert_eq!(analysis.diagnostics.len(), 2);
        assert_eq!(analysis.diagnostics[0].hash(), "b2");
        assert_eq!(analysis.diagnostics[1].hash(), "d4");
    }

    #[test]
    fn test_signals_only_visible() {
        let generator = generator();
        let commits = vec![
            make_commit("a1", "chore!: drop node 16"),
            make_commit("b2", "ci: faster pipeline"),
        ];
        let analysis = generator.analyze(&commits);
        let signals = generator.signals(&analysis);
        assert_eq!(signals.len(), 1);
        assert!(!signals[0].breaking);
    }

    #[test]
    fn test_render() {
        let generator = generator();
        let commits = vec![
            make_commit("abc1234567890", "fix: fix Y"),
            make_commit("bcd2345678901", "feat(api)!: add X\n\nBREAKING CHANGE: X replaces W"),
        ];
        let analysis = generator.analyze(&commits);
        let output = generator.render(
            ChangelogEntry::new("2.0.0", "v2.0.0").with_previous_tag("v1.4.0"),
            &analysis.changes,
        );

        assert!(output.starts_with("## 2.0.0\n"));
        assert!(output.contains("* **api:** X replaces W\n"));
        let features = output.find("### ✨ Features").unwrap();
        let fixes = output.find("### 🐛 Bug Fixes").unwrap();
        assert!(features < fixes);
        assert!(output.contains("([abc1234](https://github.com/acme/app/commit/abc1234567890))"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let histories = [
            vec![make_commit("a1b2c3d4", "feat: add X"), make_commit("b2c3d4e5", "fix: fix Y")],
            vec![
                make_commit("c3d4e5f6", "perf(io)!: buffer writes\n\nCloses #5"),
                make_commit("d4e5f6a7", "chore: tidy"),
                make_commit("e5f6a7b8", "garbage"),
            ],
            vec![make_commit("f6a7b8c9", "fix: x\n\nBody text.\nBREAKING CHANGE: y\nRefs #9")],
        ];
        let entries = [
            ChangelogEntry::new("1.0.0", "v1.0.0"),
            ChangelogEntry::new("2.0.0", "v2.0.0").with_previous_tag("v1.0.0"),
            ChangelogEntry::new("2.0.0", "v2.0.0")
                .with_date(chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
        ];

        for commits in &histories {
            for entry in &entries {
                let (one, two) = (generator(), generator());
                let analysis = one.analyze(commits);
                let first = one.render(entry.clone(), &analysis.changes);
                assert_eq!(first, one.render(entry.clone(), &analysis.changes));

                let again = two.render(entry.clone(), &two.analyze(commits).changes);
                assert_eq!(first, again);
            }
        }
    }

    #[test]
    fn test_hidden_subjects_never_rendered() {
        let generator = generator();
        let commits = vec![
            make_commit("a1", "chore!: hidden chore subject"),
            make_commit("b2", "docs: hidden docs subject"),
            make_commit("c3", "style: hidden style subject"),
            make_commit("d4", "fix: visible fix subject"),
        ];
        let analysis = generator.analyze(&commits);
        let output = generator.render(ChangelogEntry::new("1.0.1", "v1.0.1"), &analysis.changes);

        assert!(output.contains("visible fix subject"));
        assert!(!output.contains("hidden"));
        assert!(!output.contains("BREAKING"));
    }

    #[test]
    fn test_duplicate_config_types() {
        let mut config = Config::default();
        config.types.push(herald_core::config::CommitTypeConfig::hidden("feat"));
        assert!(ChangelogGenerator::from_config(&config).is_err());
    }
}

//! Parser configuration types

/// Footer tokens whose values reference issues
const DEFAULT_REFERENCE_ACTIONS: &[&str] = &[
    "close", "closes", "closed", "fix", "fixes", "fixed", "resolve", "resolves", "resolved",
    "ref", "refs",
];

/// Configuration for the commit parser
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Lowercased footer tokens treated as issue references
    pub reference_actions: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            reference_actions: DEFAULT_REFERENCE_ACTIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl ParserConfig {
    /// Treat another footer token as an issue reference
    pub fn with_reference_action(mut self, token: impl Into<String>) -> Self {
        let token = token.into().to_lowercase();
        if !self.reference_actions.contains(&token) {
            self.reference_actions.push(token);
        }
        self
    }

    /// Whether a footer token carries issue references
    pub fn is_reference_action(&self, token: &str) -> bool {
        let token = token.to_lowercase();
        self.reference_actions.iter().any(|a| *a == token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_actions() {
        let config = ParserConfig::default();
        assert!(config.is_reference_action("Closes"));
        assert!(config.is_reference_action("refs"));
        assert!(!config.is_reference_action("Reviewed-by"));
    }

    #[test]
    fn test_custom_action() {
        let config = ParserConfig::default().with_reference_action("Jira");
        assert!(config.is_reference_action("JIRA"));
    }
}

//! Commit type registry

use std::borrow::Cow;
use std::collections::HashMap;

use herald_core::config::CommitTypeConfig;
use herald_core::error::ConfigError;
use herald_core::types::{ChangeSignal, Severity};
use tracing::debug;

use crate::types::CommitRecord;

/// How one commit type is rendered and weighed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Type identifier, lowercased
    pub type_tag: String,
    /// Section label; `None` for hidden types
    pub section: Option<String>,
    /// Hidden types are neither rendered nor counted toward the version
    pub hidden: bool,
    /// Bump weight of this type
    pub severity: Severity,
}

impl TypeDescriptor {
    /// Descriptor used for types missing from the registry
    pub fn unknown(type_tag: impl Into<String>) -> Self {
        Self {
            type_tag: type_tag.into(),
            section: None,
            hidden: true,
            severity: Severity::None,
        }
    }

    /// Whether commits of this type reach the changelog
    pub fn is_visible(&self) -> bool {
        !self.hidden && self.section.is_some()
    }

    fn from_config(config: &CommitTypeConfig) -> Self {
        Self {
            type_tag: config.type_tag.to_lowercase(),
            section: config.section.clone(),
            hidden: config.hidden,
            severity: config.effective_severity(),
        }
    }
}

/// Ordered set of recognized commit types
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    descriptors: Vec<TypeDescriptor>,
    index: HashMap<String, usize>,
}

impl TypeRegistry {
    /// Build a registry from configured types, keeping declaration order
    pub fn from_config(types: &[CommitTypeConfig]) -> Result<Self, ConfigError> {
        let mut registry = Self::default();
        for config in types {
            registry.insert(TypeDescriptor::from_config(config))?;
        }
        debug!(types = registry.descriptors.len(), "type registry built");
        Ok(registry)
    }

    fn insert(&mut self, mut descriptor: TypeDescriptor) -> Result<(), ConfigError> {
        descriptor.type_tag = descriptor.type_tag.to_lowercase();
        if self.index.contains_key(&descriptor.type_tag) {
            return Err(ConfigError::DuplicateType(descriptor.type_tag));
        }
        self.index
            .insert(descriptor.type_tag.clone(), self.descriptors.len());
        self.descriptors.push(descriptor);
        Ok(())
    }

    /// Look up a configured type
    pub fn lookup(&self, type_tag: &str) -> Option<&TypeDescriptor> {
        self.index
            .get(&type_tag.to_lowercase())
            .map(|&i| &self.descriptors[i])
    }

    /// Descriptor for a type, falling back to a hidden no-bump descriptor
    pub fn resolve(&self, type_tag: &str) -> Cow<'_, TypeDescriptor> {
        match self.lookup(type_tag) {
            Some(descriptor) => Cow::Borrowed(descriptor),
            None => Cow::Owned(TypeDescriptor::unknown(type_tag.to_lowercase())),
        }
    }

    /// Whether the type is configured
    pub fn is_known(&self, type_tag: &str) -> bool {
        self.lookup(type_tag).is_some()
    }

    /// Whether commits of the type are rendered
    pub fn is_visible(&self, type_tag: &str) -> bool {
        self.lookup(type_tag).is_some_and(TypeDescriptor::is_visible)
    }

    /// Section labels in placement order.
    ///
    /// Each label appears once, at the position of the first type declaring
    /// it.
    pub fn ordered_visible_sections(&self) -> Vec<&str> {
        let mut sections: Vec<&str> = Vec::new();
        for descriptor in self.descriptors.iter().filter(|d| d.is_visible()) {
            if let Some(label) = descriptor.section.as_deref() {
                if !sections.contains(&label) {
                    sections.push(label);
                }
            }
        }
        sections
    }

    /// All descriptors in declaration order
    pub fn descriptors(&self) -> &[TypeDescriptor] {
        &self.descriptors
    }

    /// Bump signals of the visible commits
    pub fn signals(&self, commits: &[CommitRecord]) -> Vec<ChangeSignal> {
        commits
            .iter()
            .map(|commit| (commit, self.resolve(&commit.type_tag)))
            .filter(|(_, descriptor)| descriptor.is_visible())
            .map(|(commit, descriptor)| ChangeSignal::new(descriptor.severity, commit.breaking_change))
            .collect()
    }
}

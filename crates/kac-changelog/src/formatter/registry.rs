//! Formatter registry

use std::sync::Arc;

use kac_core::ReleaseOrder;

use super::{ChangelogFormatter, GenericFormatter, MarkdownFormatter};

/// Registry of available changelog formatters
pub struct FormatterRegistry {
    formatters: Vec<Arc<dyn ChangelogFormatter>>,
}

impl FormatterRegistry {
    /// Create a new registry with all built-in formatters
    pub fn new() -> Self {
        Self::with_order(ReleaseOrder::default())
    }

    /// Create the built-in formatters for changelogs stored in `order`
    pub fn with_order(order: ReleaseOrder) -> Self {
        Self {
            formatters: vec![
                Arc::new(GenericFormatter::new().with_order(order)),
                Arc::new(MarkdownFormatter::new().with_order(order)),
            ],
        }
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self {
            formatters: Vec::new(),
        }
    }

    /// Register a formatter
    pub fn register<F: ChangelogFormatter + 'static>(&mut self, formatter: F) {
        self.formatters.push(Arc::new(formatter));
    }

    /// Get formatter by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn ChangelogFormatter>> {
        self.formatters.iter().find(|f| f.name() == name).cloned()
    }

    /// Get all registered formatters
    pub fn all(&self) -> &[Arc<dyn ChangelogFormatter>] {
        &self.formatters
    }

    /// Get all registered format names
    pub fn names(&self) -> Vec<&'static str> {
        self.formatters.iter().map(|f| f.name()).collect()
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

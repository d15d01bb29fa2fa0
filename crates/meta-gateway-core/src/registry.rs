//! The set of configured adapters.
//!
//! Built once at startup, then shared read-only (behind an `Arc`) by the
//! search, health-check, and template entry points. Iteration order is
//! registration order, which is configuration order.

use anyhow::{bail, Result};

use crate::adapter::MetaAdapter;

/// Filter value that selects every configured adapter.
pub const ALL_SOURCES: &str = "all";

/// Ordered registry of adapters with unique names.
///
/// # Example
///
/// ```rust
/// use meta_gateway_core::AdapterRegistry;
///
/// let registry = AdapterRegistry::new();
/// // registry.register(Box::new(MyAdapter::new()))?;
/// assert!(registry.select(None).is_empty());
/// ```
pub struct AdapterRegistry {
    adapters: Vec<Box<dyn MetaAdapter>>,
}

impl AdapterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            adapters: Vec::new(),
        }
    }

    /// Register an adapter. Fails if another adapter already uses its name.
    pub fn register(&mut self, adapter: Box<dyn MetaAdapter>) -> Result<()> {
        if self.by_name(adapter.name()).is_some() {
            bail!("duplicate adapter name: '{}'", adapter.name());
        }
        self.adapters.push(adapter);
        Ok(())
    }

    /// All adapters, in configuration order.
    pub fn all(&self) -> Vec<&dyn MetaAdapter> {
        self.adapters.iter().map(|a| a.as_ref()).collect()
    }

    /// The adapter named `name`, if configured.
    pub fn by_name(&self, name: &str) -> Option<&dyn MetaAdapter> {
        self.adapters
            .iter()
            .find(|a| a.name() == name)
            .map(|a| a.as_ref())
    }

    /// Resolve a source filter to target adapters.
    ///
    /// `None` and `"all"` select everything; any other value selects the
    /// adapter with that name (zero or one).
    pub fn select(&self, filter: Option<&str>) -> Vec<&dyn MetaAdapter> {
        match filter {
            None | Some(ALL_SOURCES) => self.all(),
            Some(name) => self.by_name(name).into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeAdapter;

    fn registry(names: &[&str]) -> AdapterRegistry {
        let mut reg = AdapterRegistry::new();
        for name in names {
            reg.register(Box::new(FakeAdapter::returning(name, 1)))
                .unwrap();
        }
        reg
    }

    fn names(adapters: &[&dyn MetaAdapter]) -> Vec<String> {
        adapters.iter().map(|a| a.name().to_string()).collect()
    }

    #[test]
    fn test_all_keeps_registration_order() {
        let reg = registry(&["postgres", "elasticsearch", "vector"]);
        assert_eq!(names(&reg.all()), vec!["postgres", "elasticsearch", "vector"]);
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut reg = registry(&["postgres"]);
        let err = reg
            .register(Box::new(FakeAdapter::returning("postgres", 0)))
            .unwrap_err();
        assert!(err.to_string().contains("duplicate adapter name"));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_select_all_and_unset() {
        let reg = registry(&["a", "b"]);
        assert_eq!(names(&reg.select(None)), vec!["a", "b"]);
        assert_eq!(names(&reg.select(Some("all"))), vec!["a", "b"]);
    }

    #[test]
    fn test_select_by_name() {
        let reg = registry(&["a", "b", "c"]);
        assert_eq!(names(&reg.select(Some("b"))), vec!["b"]);
        assert!(reg.select(Some("oracle")).is_empty());
    }

    #[test]
    fn test_empty_registry() {
        let reg = AdapterRegistry::new();
        assert!(reg.is_empty());
        assert!(reg.select(None).is_empty());
        assert!(reg.by_name("a").is_none());
    }
}

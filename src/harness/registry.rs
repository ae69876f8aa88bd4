//! Check module registry
//!
//! Check modules are ordinary statically-linked units: a name, an optional
//! one-time load hook, and a table of named zero-argument check functions.
//! The registry is the lookup table the loader resolves modules from.

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

/// A zero-argument check function
pub type CheckFn = fn() -> anyhow::Result<()>;

/// A statically-linked check module
#[derive(Clone, Copy, Debug)]
pub struct CheckModule {
    name: &'static str,
    load: Option<CheckFn>,
    checks: &'static [(&'static str, CheckFn)],
}

impl CheckModule {
    /// Create a module with the given name and check table
    pub const fn new(name: &'static str, checks: &'static [(&'static str, CheckFn)]) -> Self {
        Self {
            name,
            load: None,
            checks,
        }
    }

    /// Attach a load hook, run once per process when the module is loaded
    pub const fn with_load(mut self, load: CheckFn) -> Self {
        self.load = Some(load);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn load_hook(&self) -> Option<CheckFn> {
        self.load
    }

    /// Resolve a check function by name
    pub fn resolve(&self, name: &str) -> Option<CheckFn> {
        self.checks
            .iter()
            .find(|(check_name, _)| *check_name == name)
            .map(|(_, check)| *check)
    }

    /// Names of all checks in this module
    pub fn check_names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|(name, _)| *name).collect()
    }
}

/// Lookup table of registered check modules
#[derive(Debug, Default)]
pub struct Registry {
    modules: BTreeMap<&'static str, CheckModule>,
    loaded: Mutex<BTreeSet<&'static str>>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module; a later registration under the same name wins
    pub fn register(&mut self, module: CheckModule) {
        self.modules.insert(module.name(), module);
    }

    /// Look up a module by name
    pub fn get(&self, name: &str) -> Option<&CheckModule> {
        self.modules.get(name)
    }

    /// Names of all registered modules
    pub fn module_names(&self) -> Vec<&'static str> {
        self.modules.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Whether a module's load hook has already run in this registry
    pub(crate) fn is_loaded(&self, name: &str) -> bool {
        self.loaded
            .lock()
            .expect("loaded-set lock poisoned")
            .contains(name)
    }

    /// Record that a module's load hook completed
    pub(crate) fn mark_loaded(&self, name: &'static str) {
        self.loaded
            .lock()
            .expect("loaded-set lock poisoned")
            .insert(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passing() -> anyhow::Result<()> {
        Ok(())
    }

    const CHECKS: &[(&str, CheckFn)] = &[("first", passing), ("second", passing)];

    #[test]
    fn test_module_resolve() {
        let module = CheckModule::new("fixture", CHECKS);
        assert!(module.resolve("first").is_some());
        assert!(module.resolve("missing").is_none());
        assert_eq!(module.check_names(), vec!["first", "second"]);
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());

        registry.register(CheckModule::new("fixture", CHECKS));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("fixture").map(|m| m.name()), Some("fixture"));
        assert!(registry.get("other").is_none());
    }

    #[test]
    fn test_later_registration_wins() {
        const REPLACEMENT: &[(&str, CheckFn)] = &[("only", passing)];

        let mut registry = Registry::new();
        registry.register(CheckModule::new("fixture", CHECKS));
        registry.register(CheckModule::new("fixture", REPLACEMENT));

        assert_eq!(registry.len(), 1);
        let module = registry.get("fixture").unwrap();
        assert_eq!(module.check_names(), vec!["only"]);
    }

    #[test]
    fn test_loaded_tracking() {
        let mut registry = Registry::new();
        registry.register(CheckModule::new("fixture", CHECKS));

        assert!(!registry.is_loaded("fixture"));
        registry.mark_loaded("fixture");
        assert!(registry.is_loaded("fixture"));
    }
}

//! Process-wide harness state
//!
//! One-time setup of the check module registry, the step that must complete
//! before any check module can be loaded. Setup is idempotent-at-most-once:
//! the first call builds the registry from the built-in check modules and
//! every later call returns the same registry. Nothing tears it down; the
//! process exits right after the one check it was asked to run.

#![allow(dead_code)]

pub mod registry;

use std::sync::OnceLock;
use tracing::debug;

use registry::Registry;

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Initialize the process-wide registry and return it
pub fn setup() -> &'static Registry {
    REGISTRY.get_or_init(|| {
        let mut registry = Registry::new();
        for module in crate::checks::builtin_modules() {
            debug!("registering check module '{}'", module.name());
            registry.register(module);
        }
        registry
    })
}

/// Whether setup has completed in this process
pub fn is_ready() -> bool {
    REGISTRY.get().is_some()
}

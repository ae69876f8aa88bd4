//! Check execution runner
//!
//! The single linear sequence this tool exists for: set up the harness, load
//! the module named by the file path, resolve the check, invoke it. A check's
//! own error is propagated verbatim, so the caller sees the original failure
//! rather than a translation of it.

use anyhow::Result;
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::harness;
use crate::harness::registry::Registry;
use crate::loader;

/// Run one named check from the module referenced by `file_path`
pub fn run(file_path: &Path, function_name: &str) -> Result<()> {
    // Harness setup strictly precedes loading
    let registry = harness::setup();
    info!("harness ready ({} modules registered)", registry.len());

    run_with(registry, file_path, function_name)
}

/// Run one named check against an explicit registry
pub fn run_with(registry: &Registry, file_path: &Path, function_name: &str) -> Result<()> {
    let module = loader::load(registry, file_path)?;
    info!(
        "loaded check module '{}' from {}",
        module.name(),
        file_path.display()
    );

    let check = module.resolve(function_name)?;

    info!("running check '{}::{}'", module.name(), function_name);
    let start = Instant::now();
    check()?;
    info!(
        "check '{}' completed in {}ms",
        function_name,
        start.elapsed().as_millis()
    );

    Ok(())
}

//! Check file loading
//!
//! Maps a filesystem path onto a registered check module. The path must
//! reference a readable regular file; its stem selects the module. The
//! module's load hook (the stand-in for top-level statements in a dynamic
//! check file) runs the first time the module is loaded per registry, before
//! any check from it is resolved. A failing hook is a load error and leaves
//! the module unloaded, so a later load attempts the hook again.

use std::fs::File;
use std::path::Path;
use tracing::debug;

use crate::error::HarnessError;
use crate::harness::registry::{CheckFn, CheckModule, Registry};

/// A check module resolved from a file path
#[derive(Debug)]
pub struct LoadedModule<'a> {
    module: &'a CheckModule,
}

impl LoadedModule<'_> {
    pub fn name(&self) -> &'static str {
        self.module.name()
    }

    /// Resolve a check function by name
    pub fn resolve(&self, name: &str) -> Result<CheckFn, HarnessError> {
        self.module.resolve(name).ok_or_else(|| {
            let names = self.module.check_names();
            let available = if names.is_empty() {
                "none".to_string()
            } else {
                names.join(", ")
            };
            HarnessError::UnknownCheck {
                module: self.module.name(),
                name: name.to_string(),
                available,
            }
        })
    }
}

/// Load the check module referenced by `path`
pub fn load<'a>(registry: &'a Registry, path: &Path) -> Result<LoadedModule<'a>, HarnessError> {
    let file = File::open(path).map_err(|source| HarnessError::file_access(path, source))?;
    let metadata = file
        .metadata()
        .map_err(|source| HarnessError::file_access(path, source))?;
    if !metadata.is_file() {
        return Err(HarnessError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    let module = registry
        .get(stem)
        .ok_or_else(|| HarnessError::UnknownModule {
            path: path.to_path_buf(),
        })?;

    if !registry.is_loaded(module.name()) {
        if let Some(hook) = module.load_hook() {
            debug!("running load hook for module '{}'", module.name());
            hook().map_err(|source| HarnessError::module_load(module.name(), source))?;
        }
        registry.mark_loaded(module.name());
    }

    Ok(LoadedModule { module })
}

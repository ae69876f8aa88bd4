//! Error types for the check harness
//!
//! Only the harness's own failures are typed here: file access, module
//! lookup, load hooks, and check resolution. A failing check keeps its
//! original `anyhow::Error` and is never converted or wrapped.

use std::path::PathBuf;
use thiserror::Error;

/// Failures produced by the harness itself, before a check runs
#[derive(Error, Debug)]
pub enum HarnessError {
    /// The check file could not be opened
    #[error("cannot read check file {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The path exists but is not a regular file
    #[error("check file {path} is not a regular file")]
    NotAFile { path: PathBuf },

    /// The file stem does not name a registered check module
    #[error("check file {path} does not map to a registered module")]
    UnknownModule { path: PathBuf },

    /// The module's load hook failed
    #[error("check module '{module}' failed to load: {source}")]
    ModuleLoad {
        module: &'static str,
        source: anyhow::Error,
    },

    /// The named check is absent from the module's table
    #[error("check module '{module}' has no check named '{name}' (available: {available})")]
    UnknownCheck {
        module: &'static str,
        name: String,
        available: String,
    },
}

impl HarnessError {
    /// Create a file access error
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HarnessError::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// Create a module load error from a hook's error value
    pub fn module_load(module: &'static str, source: anyhow::Error) -> Self {
        HarnessError::ModuleLoad { module, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_file_access_display() {
        let err = HarnessError::file_access(
            "/nonexistent/path.py",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let rendered = err.to_string();
        assert!(rendered.contains("/nonexistent/path.py"));
        assert!(rendered.contains("no such file"));
    }

    #[test]
    fn test_unknown_check_names_module_and_check() {
        let err = HarnessError::UnknownCheck {
            module: "imports",
            name: "check".to_string(),
            available: "working_directory, temp_directory".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("'imports'"));
        assert!(rendered.contains("'check'"));
        assert!(rendered.contains("working_directory"));
    }

    #[test]
    fn test_module_load_keeps_original_message() {
        let err = HarnessError::module_load("imports", anyhow::anyhow!("bad import"));
        assert!(err.to_string().contains("'imports'"));
        assert!(err.to_string().contains("bad import"));
    }
}

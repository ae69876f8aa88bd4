//! check-runner - one-shot check invocation tool
//!
//! Resolves a named zero-argument check function from a registered check
//! module and runs it once. The module is selected by the stem of the
//! supplied file path; the process-wide registry is initialized exactly
//! once, before any module is loaded.
//!
//! ## Usage
//!
//! ```bash
//! check-runner --test-file-path ./imports.rs --test-function-name working_directory
//! ```
//!
//! The check file must exist and be readable but is never parsed; its stem
//! (`imports` above) is what selects the registered module.
//!
//! Exit code 0 means the check ran without failing. Any failure - argument
//! parsing, harness setup, module load, check resolution, or the check's own
//! error - terminates the process non-zero with the error's default
//! rendering. Nothing is caught, retried, or rewritten on the way up.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod checks;
mod cli;
mod error;
mod harness;
mod loader;
mod runner;

use cli::Args;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();

    runner::run(&args.test_file_path, &args.test_function_name)
}

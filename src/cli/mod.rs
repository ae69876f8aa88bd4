//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::Parser;
use std::path::PathBuf;

/// One-shot check invocation tool
#[derive(Parser, Debug)]
#[command(name = "check-runner")]
#[command(version = "0.1.0")]
#[command(about = "Resolve and run one named check from a check module")]
#[command(long_about = None)]
pub struct Args {
    /// Path to the check file; its stem selects the registered module
    #[arg(long)]
    pub test_file_path: PathBuf,

    /// Name of the check function to execute
    #[arg(long)]
    pub test_function_name: String,
}

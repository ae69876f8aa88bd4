//! Import sanity checks
//!
//! The kind of checks this runner was built to execute: each one validates an
//! assumption application code makes the moment it is imported. They touch
//! nothing outside the current process's view of the environment.

use anyhow::{ensure, Context, Result};
use std::env;
use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

use crate::harness::registry::{CheckFn, CheckModule};

const CHECKS: &[(&str, CheckFn)] = &[
    ("working_directory", working_directory),
    ("temp_directory", temp_directory),
    ("system_clock", system_clock),
];

pub fn module() -> CheckModule {
    CheckModule::new("imports", CHECKS).with_load(announce)
}

fn announce() -> Result<()> {
    debug!("imports check module loaded");
    Ok(())
}

/// The working directory exists and is absolute
fn working_directory() -> Result<()> {
    let cwd = env::current_dir().context("working directory is not accessible")?;
    ensure!(
        cwd.is_absolute(),
        "working directory {} is not absolute",
        cwd.display()
    );
    Ok(())
}

/// The temp directory accepts writes
fn temp_directory() -> Result<()> {
    let dir = env::temp_dir();
    let probe = dir.join(format!("check-runner-probe-{}", std::process::id()));

    fs::write(&probe, b"probe")
        .with_context(|| format!("temp directory {} is not writable", dir.display()))?;
    let _ = fs::remove_file(&probe);
    Ok(())
}

/// The system clock is past the unix epoch
fn system_clock() -> Result<()> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is before the unix epoch")?;
    Ok(())
}

//! Process environment checks

use anyhow::{ensure, Result};
use std::env;

use crate::harness::registry::{CheckFn, CheckModule};

const CHECKS: &[(&str, CheckFn)] = &[
    ("path_variable", path_variable),
    ("executable_path", executable_path),
];

pub fn module() -> CheckModule {
    CheckModule::new("environment", CHECKS)
}

/// PATH is set and non-empty
fn path_variable() -> Result<()> {
    let path = env::var_os("PATH").unwrap_or_default();
    ensure!(!path.is_empty(), "PATH is not set or empty");
    Ok(())
}

/// The current executable can be located
fn executable_path() -> Result<()> {
    let exe = env::current_exe()?;
    ensure!(
        exe.is_absolute(),
        "executable path {} is not absolute",
        exe.display()
    );
    Ok(())
}

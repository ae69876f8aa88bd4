//! Built-in check modules
//!
//! Each file here is the statically-linked counterpart of a check file: a
//! named module exposing zero-argument checks. Everything listed by
//! `builtin_modules` is registered into the process-wide registry during
//! harness setup.

mod environment;
mod imports;

use crate::harness::registry::CheckModule;

/// All built-in check modules
pub fn builtin_modules() -> Vec<CheckModule> {
    vec![imports::module(), environment::module()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_module_names_are_unique() {
        let modules = builtin_modules();
        let mut names: Vec<_> = modules.iter().map(|m| m.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), modules.len());
    }

    #[test]
    fn test_builtin_modules_have_checks() {
        for module in builtin_modules() {
            assert!(
                !module.check_names().is_empty(),
                "module '{}' has no checks",
                module.name()
            );
        }
    }
}

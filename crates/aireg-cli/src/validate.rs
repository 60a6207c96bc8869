//! # Validate Subcommand
//!
//! Loads a registry data file through the full hard-validation pipeline
//! and reports the outcome. A valid file prints a one-line summary; an
//! invalid file prints every record violation, not just the first.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use aireg_registry::{ModelRegistry, RegistryError};

/// Arguments for the `aireg validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the registry data file (.json, .yaml, or .yml).
    pub file: PathBuf,
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    match ModelRegistry::load(&args.file) {
        Ok(registry) => {
            println!(
                "OK: {} validated ({} models)",
                args.file.display(),
                registry.len()
            );
            Ok(0)
        }
        Err(RegistryError::ValidationFailed { path, violations }) => {
            eprintln!("FAIL: {} ({} violations)", path, violations.len());
            for violation in violations.violations() {
                eprintln!("{violation}");
            }
            Ok(1)
        }
        Err(e) => Err(e.into()),
    }
}

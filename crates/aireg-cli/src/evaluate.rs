//! # Evaluate Subcommand
//!
//! Live per-jurisdiction evaluation of one model. Unlike the status
//! strings baked into the canonical registry, this re-runs the rule set
//! and prints full issue detail with a fresh `checked_at` stamp.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use aireg_compliance::ComplianceReport;
use aireg_core::{Jurisdiction, ModelId};
use aireg_registry::ModelRegistry;

/// Arguments for the `aireg evaluate` subcommand.
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Path to the registry data file (.json, .yaml, or .yml).
    pub file: PathBuf,

    /// Model id to evaluate.
    #[arg(long)]
    pub model: String,

    /// Jurisdiction code (EU, IN, or US).
    #[arg(long)]
    pub jurisdiction: String,
}

/// Execute the evaluate subcommand.
///
/// Exits 0 when the model is compliant in the selected jurisdiction, 1
/// when issues were found.
pub fn run_evaluate(args: &EvaluateArgs) -> Result<u8> {
    let jurisdiction: Jurisdiction = args.jurisdiction.parse()?;
    let model_id = ModelId::new(args.model.as_str())?;

    let registry = ModelRegistry::load(&args.file)?;
    let Some(model) = registry.get(&model_id) else {
        bail!(
            "model '{}' not found in {}",
            model_id,
            args.file.display()
        );
    };

    let report = ComplianceReport::generate(model_id, &model.profile(), jurisdiction);

    println!("Model: {}", report.model_id);
    println!("  Jurisdiction: {}", report.jurisdiction.display_name());
    println!("  Ruleset:      {}", report.ruleset_snapshot);
    println!("  Checked at:   {}", report.checked_at);
    if report.compliant {
        println!("  Status:       COMPLIANT");
        Ok(0)
    } else {
        println!("  Status:       AT RISK");
        for issue in &report.issues {
            println!("  Issue:        [{}] {}", issue.requirement, issue.message);
        }
        Ok(1)
    }
}

//! # Normalize Subcommand
//!
//! Loads a registry data file and emits the canonical models as pretty
//! JSON, either to stdout or to a file. The output is exactly the
//! in-memory registry shape: every model carries the precomputed
//! `{EU, IN, US}` status map.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use aireg_registry::ModelRegistry;

/// Arguments for the `aireg normalize` subcommand.
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Path to the registry data file (.json, .yaml, or .yml).
    pub file: PathBuf,

    /// Write the canonical JSON here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Execute the normalize subcommand.
pub fn run_normalize(args: &NormalizeArgs) -> Result<u8> {
    let registry = ModelRegistry::load(&args.file)?;
    let json = serde_json::to_string_pretty(registry.models())
        .context("failed to serialize canonical models")?;

    match &args.out {
        Some(out) => {
            std::fs::write(out, &json)
                .with_context(|| format!("failed to write output: {}", out.display()))?;
            println!("OK: wrote {} models to {}", registry.len(), out.display());
        }
        None => println!("{json}"),
    }

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    fn write_registry(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn sample_registry() -> tempfile::NamedTempFile {
        write_registry(
            r#"[{
                "id": "gpt-oss",
                "name": "GPT-OSS",
                "provider": "OpenAI",
                "origin": "USA",
                "openness": "Fully Open",
                "compliance": { "EU_AI_Act": "Partial" },
                "data_residency": false
            }]"#,
        )
    }

    #[test]
    fn writes_canonical_json_to_out_path() {
        let file = sample_registry();
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("canonical.json");

        let args = NormalizeArgs {
            file: file.path().to_path_buf(),
            out: Some(out.clone()),
        };
        assert_eq!(run_normalize(&args).unwrap(), 0);

        let written = std::fs::read_to_string(&out).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed[0]["origin_country"], "United States");
        assert_eq!(parsed[0]["compliance"]["EU"], "Partial");
        assert_eq!(parsed[0]["compliance"]["IN"], "—");
    }

    #[test]
    fn stdout_mode_exits_zero() {
        let file = sample_registry();
        let args = NormalizeArgs {
            file: file.path().to_path_buf(),
            out: None,
        };
        assert_eq!(run_normalize(&args).unwrap(), 0);
    }

    #[test]
    fn invalid_registry_propagates_the_load_error() {
        let file = write_registry(r#"[{ "id": "broken" }]"#);
        let args = NormalizeArgs {
            file: file.path().to_path_buf(),
            out: None,
        };
        assert!(run_normalize(&args).is_err());
    }
}

//! # aireg-cli — CLI Tool for the Sovereign AI Registry Stack
//!
//! Provides the `aireg` command-line interface: registry file validation,
//! canonical normalization, and live per-jurisdiction compliance
//! evaluation. Coordinating glue only; every decision lives in the
//! library crates.
//!
//! ## Subcommands
//!
//! - `aireg validate` — Load a registry file and report every violation.
//! - `aireg normalize` — Emit the canonical models as pretty JSON.
//! - `aireg evaluate` — Evaluate one model against one jurisdiction.
//!
//! ```bash
//! aireg validate data/registry.json
//! aireg normalize data/registry.json --out canonical.json
//! aireg evaluate data/registry.json --model mistral-7b --jurisdiction EU
//! ```

pub mod evaluate;
pub mod normalize;
pub mod validate;

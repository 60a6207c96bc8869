//! # aireg-compliance — Jurisdiction Rule Evaluation
//!
//! Evaluates a model's regulatory posture against a hardcoded rule
//! snapshot, one rule per jurisdiction. Evaluation is a pure function:
//! no I/O, no shared state, no error channel — every legal input
//! produces a definite verdict. The registry normalizer calls it to
//! pre-compute display statuses, and the CLI calls it directly for live
//! per-jurisdiction detail.
//!
//! ## Rule Snapshot
//!
//! Rules are a static snapshot ([`RULESET_SNAPSHOT`]), not live regulatory
//! data. Updating the snapshot is a code change; nothing here fetches.

pub mod evaluator;
pub mod profile;
pub mod report;

pub use evaluator::{evaluate, ComplianceIssue, ComplianceVerdict, RULESET_SNAPSHOT};
pub use profile::ModelProfile;
pub use report::ComplianceReport;

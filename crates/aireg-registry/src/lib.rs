//! # aireg-registry — Schema Reconciliation & Registry Lifecycle
//!
//! Ingests raw heterogeneous registry records, discriminates the two
//! generations of the registry schema ONCE at the parse boundary, maps
//! both onto one canonical model shape, and owns the explicit load step
//! that turns a data file into an immutable in-memory registry.
//!
//! ## Data Flow
//!
//! registry file → [`ModelRegistry::load`] (hard validation, whole-batch
//! rejection) → [`RawModelRecord`] values → [`normalize_records`] →
//! [`CanonicalModel`] values, each carrying a pre-computed `{EU, IN, US}`
//! status map.
//!
//! ## Invariants
//!
//! - Normalization is order- and cardinality-preserving: one output per
//!   input, no filtering, no dedup.
//! - Every canonical model has a status string for all three
//!   jurisdictions (placeholder `"—"` permitted).
//! - A loaded registry is immutable; refreshing it means calling
//!   [`ModelRegistry::load`] again.

pub mod canonical;
pub mod comparison;
pub mod error;
pub mod intelligence;
pub mod normalize;
pub mod raw;
pub mod registry;

// Re-export primary types for ergonomic imports.
pub use canonical::{CanonicalModel, ComplianceSummary, STATUS_PLACEHOLDER};
pub use error::{RecordViolation, RecordViolations, RegistryError};
pub use intelligence::ModelIntelligence;
pub use normalize::{normalize_record, normalize_records};
pub use raw::{LegacyRecord, NewRecord, RawComplianceStatuses, RawModelRecord};
pub use registry::ModelRegistry;

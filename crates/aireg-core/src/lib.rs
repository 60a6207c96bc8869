//! # aireg-core — Foundational Types for the Sovereign AI Registry Stack
//!
//! This crate is the bedrock of the registry stack. It defines the
//! type-system primitives that enforce correctness guarantees at compile
//! time. Every other crate in the workspace depends on `aireg-core`; it
//! depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Closed enums for regulatory vocabulary.** [`Jurisdiction`] and
//!    [`OpennessLevel`] are exhaustive enums. Adding a jurisdiction forces
//!    every consumer to handle it at compile time, and an unknown wire
//!    value is a loud parse failure, never a silent no-op.
//!
//! 2. **Newtype wrappers for domain primitives.** [`ModelId`] is a newtype
//!    with a validated constructor. No bare strings for identifiers.
//!
//! 3. **Validation at the boundary.** Every `Deserialize` impl in this
//!    crate rejects malformed input at parse time, so downstream code
//!    never sees an invalid value.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `aireg-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod jurisdiction;
pub mod model;
pub mod openness;

// Re-export primary types for ergonomic imports.
pub use error::ValidationError;
pub use jurisdiction::{Jurisdiction, JURISDICTION_COUNT};
pub use model::ModelId;
pub use openness::OpennessLevel;

//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! utility billing test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for consumers, amounts and readings
//! - `builders`: Builder for registries pre-populated with consumers and bills
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;

//! Test harness for the layout engine.
//!
//! Provides fixtures for building models, verification oracles that check
//! layout invariants without panicking, and text reports for diagnosing a
//! failed check.
//!
//! # Key Components
//!
//! - [`oracle`]: Verification functions returning pass/fail verdicts
//! - [`report`]: Structured text descriptions of an evaluated model
//! - [`helpers`]: Error type and model fixtures
//! - [`assertions`]: Assertion helpers with diagnostics

pub mod assertions;
pub mod helpers;
pub mod oracle;
pub mod report;

pub use helpers::HarnessError;
pub use oracle::OracleVerdict;
pub use report::LayoutReport;

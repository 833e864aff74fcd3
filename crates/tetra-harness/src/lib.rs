//! Conformance harness for the TETRA primitives.
//!
//! Vector tables for every primitive family, a registry of suites that check
//! them, and the `tetra` command-line tool.
//!
//! # Suites
//!
//! Each [`Suite`] checks one primitive family. A suite that misses any vector
//! fails, and any failing suite fails the run. Use
//! [`SuiteRegistry::standard()`] for every built-in suite.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub mod error;
pub mod report;
pub mod suite;
pub mod vectors;

pub use config::{DEFAULT_SEARCH_RANGE, RunnerConfig};
pub use error::{HarnessError, hex_array};
pub use report::{CaseFailure, CaseResult, RunSummary, SuiteReport, Verdict};
pub use suite::{Suite, SuiteRegistry, TableSuite, standard_suites};

//! Conformance suites and their registry
//!
//! A suite checks one primitive family against its vector table. Any vector
//! that does not reproduce fails its suite and the run.
//!
//! # Usage
//!
//! ```ignore
//! let registry = SuiteRegistry::standard();
//! let summary = registry.run(&RunnerConfig::default())?;
//! assert!(summary.is_success());
//! ```

mod checks;

pub use checks::{TableSuite, standard_suites};

use crate::{
    config::RunnerConfig,
    error::HarnessError,
    report::{CaseResult, RunSummary, SuiteReport},
};

/// A named set of conformance vectors for one primitive family.
pub trait Suite: Send + Sync {
    /// Suite name, as accepted by `--suite`.
    fn name(&self) -> &'static str;

    /// Check every vector.
    ///
    /// Returns one result per vector. Errors are reserved for fixtures that
    /// cannot be decoded.
    fn check(&self) -> Result<Vec<CaseResult>, HarnessError>;
}

/// Registry of suites to run.
pub struct SuiteRegistry {
    suites: Vec<Box<dyn Suite>>,
}

impl Default for SuiteRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SuiteRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { suites: Vec::new() }
    }

    /// Create a registry holding every built-in suite.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for suite in standard_suites() {
            registry.add(suite);
        }
        registry
    }

    /// Add a suite to the registry.
    pub fn add<S: Suite + 'static>(&mut self, suite: S) {
        self.suites.push(Box::new(suite));
    }

    /// Names of all registered suites, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.suites.iter().map(|suite| suite.name())
    }

    /// Run the suites selected by `config`.
    ///
    /// # Errors
    ///
    /// - `HarnessError::UnknownSuite` if a filter is set and matches nothing
    /// - `HarnessError::Hex` or `HarnessError::Crypto` if a fixture is
    ///   malformed
    pub fn run(&self, config: &RunnerConfig) -> Result<RunSummary, HarnessError> {
        let mut summary = RunSummary::default();

        for suite in self.suites.iter().filter(|suite| config.selects(suite.name())) {
            tracing::debug!(suite = suite.name(), "running suite");

            let report = SuiteReport::from_cases(suite.name(), suite.check()?);
            for failure in &report.failures {
                tracing::warn!(suite = report.suite, %failure, "vector failed");
            }
            summary.reports.push(report);
        }

        if let Some(filter) = &config.suite_filter
            && summary.reports.is_empty()
        {
            return Err(HarnessError::UnknownSuite(filter.clone()));
        }

        tracing::info!(
            suites = summary.reports.len(),
            failed = summary.failed().count(),
            "conformance run complete"
        );
        Ok(summary)
    }

    /// Number of registered suites.
    pub fn len(&self) -> usize {
        self.suites.len()
    }

    /// True if no suites are registered.
    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }
}

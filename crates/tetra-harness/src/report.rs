//! Suite outcomes and run summaries.

use std::fmt;

/// A single vector that did not reproduce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseFailure {
    /// Index of the vector in its table
    pub case: usize,
    /// What differed
    pub message: String,
}

impl fmt::Display for CaseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "case {}: {}", self.case, self.message)
    }
}

impl std::error::Error for CaseFailure {}

/// Result of checking one vector.
pub type CaseResult = Result<(), CaseFailure>;

/// Compare an output against its expected value.
pub fn compare(case: usize, label: &str, expected: &[u8], actual: &[u8]) -> CaseResult {
    if expected == actual {
        return Ok(());
    }
    Err(CaseFailure {
        case,
        message: format!(
            "{label}: expected {}, got {}",
            hex::encode_upper(expected),
            hex::encode_upper(actual)
        ),
    })
}

/// How a suite's result should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every vector reproduced
    Pass,
    /// At least one vector did not reproduce
    Fail,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pass => "pass",
            Self::Fail => "FAIL",
        };
        f.pad(label)
    }
}

/// Outcome of one suite.
#[derive(Debug, Clone)]
pub struct SuiteReport {
    /// Suite name
    pub suite: &'static str,
    /// Vectors checked
    pub total: usize,
    /// Vectors that did not reproduce
    pub failures: Vec<CaseFailure>,
}

impl SuiteReport {
    /// Build a report from per-case results.
    pub fn from_cases(suite: &'static str, cases: Vec<CaseResult>) -> Self {
        let total = cases.len();
        let failures = cases.into_iter().filter_map(Result::err).collect();
        Self { suite, total, failures }
    }

    /// Vectors that reproduced.
    pub fn passed(&self) -> usize {
        self.total - self.failures.len()
    }

    /// Pass if every vector reproduced.
    pub fn verdict(&self) -> Verdict {
        if self.failures.is_empty() { Verdict::Pass } else { Verdict::Fail }
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<12} {:<6} {}/{}", self.suite, self.verdict(), self.passed(), self.total)
    }
}

/// Reports for every suite in a run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Per-suite reports in registration order
    pub reports: Vec<SuiteReport>,
}

impl RunSummary {
    /// Suites with at least one failing vector.
    pub fn failed(&self) -> impl Iterator<Item = &SuiteReport> {
        self.reports.iter().filter(|report| report.verdict() == Verdict::Fail)
    }

    /// True if every vector of every suite reproduced.
    pub fn is_success(&self) -> bool {
        self.failed().next().is_none()
    }
}

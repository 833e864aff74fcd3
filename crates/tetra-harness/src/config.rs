//! Runner configuration.

use std::ops::RangeInclusive;

/// Key-register values `tetra search` tries when no bounds are given.
pub const DEFAULT_SEARCH_RANGE: RangeInclusive<u32> = 0..=0x000F_FFFF;

/// Settings for a conformance run.
#[derive(Debug, Clone, Default)]
pub struct RunnerConfig {
    /// Run only the suite with this name
    pub suite_filter: Option<String>,
}

impl RunnerConfig {
    /// True if a suite with this name should run.
    pub fn selects(&self, name: &str) -> bool {
        self.suite_filter.as_deref().is_none_or(|filter| filter.eq_ignore_ascii_case(name))
    }
}

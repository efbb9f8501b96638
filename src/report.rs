//! Check result and suite summary types
//!
//! One `CheckResult` is built per probe and discarded after printing; the
//! `SuiteSummary` aggregates pass/fail counts for the closing block.

/// Result of a single smoke check
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Check name (stable identifier used in output and logs)
    pub name: &'static str,
    /// Whether the checked condition held
    pub passed: bool,
    /// Human-readable outcome line
    pub detail: String,
    /// Extra report lines (response text, warnings); printed after the detail
    pub notes: Vec<String>,
    /// Wall-clock time the probe took, when it completed
    pub latency_ms: Option<u64>,
}

impl CheckResult {
    /// Build a passing result.
    pub fn pass(name: &'static str, detail: impl Into<String>) -> Self {
        Self {
            name,
            passed: true,
            detail: detail.into(),
            notes: Vec::new(),
            latency_ms: None,
        }
    }

    /// Build a failing result.
    pub fn fail(name: &'static str, detail: impl Into<String>) -> Self {
        Self {
            name,
            passed: false,
            detail: detail.into(),
            notes: Vec::new(),
            latency_ms: None,
        }
    }

    /// Attach a report note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Attach the measured probe latency.
    pub fn with_latency(mut self, latency_ms: u64) -> Self {
        self.latency_ms = Some(latency_ms);
        self
    }
}

/// Aggregate pass/fail counts over one suite run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuiteSummary {
    /// Number of checks that passed
    pub passed: usize,
    /// Number of checks that ran
    pub total: usize,
}

impl SuiteSummary {
    /// Record one check result.
    pub fn record(&mut self, result: &CheckResult) {
        self.total += 1;
        if result.passed {
            self.passed += 1;
        }
    }

    /// Whether every recorded check passed.
    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

// SPDX-License-Identifier: AGPL-3.0-only

//! Check accumulator shared by the regression harness and `validate_ssh`.
//!
//! Two ways to finish:
//!   - `finish()` prints the summary and exits 0 (all pass) or 1 (any fail),
//!     for validation binaries.
//!   - `format_summary()` / `failed_labels()` leave control with the caller,
//!     for the regression harness, whose mismatches are warnings only.

use std::fmt::Write as _;
use std::process;

/// A single validation check with result tracking.
#[derive(Debug, Clone)]
pub struct Check {
    /// Human-readable label
    pub label: String,
    /// Whether this check passed
    pub passed: bool,
    /// Observed value
    pub observed: f64,
    /// Expected value
    pub expected: f64,
    /// Tolerance used
    pub tolerance: f64,
    /// How the tolerance was applied
    pub mode: ToleranceMode,
}

/// How a tolerance threshold is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceMode {
    /// |observed - expected| < tolerance
    Absolute,
    /// |observed - expected| / |expected| < tolerance
    Relative,
    /// observed < threshold (upper bound only)
    UpperBound,
    /// observed ≥ threshold (inclusive lower bound, for counts)
    AtLeast,
}

impl std::fmt::Display for ToleranceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absolute => write!(f, "abs"),
            Self::Relative => write!(f, "rel"),
            Self::UpperBound => write!(f, "<"),
            Self::AtLeast => write!(f, ">="),
        }
    }
}

/// Accumulates validation checks and produces a summary.
#[derive(Debug, Default, Clone)]
#[must_use]
pub struct ValidationHarness {
    /// Name of the validation run
    pub name: String,
    /// All checks performed
    pub checks: Vec<Check>,
}

impl ValidationHarness {
    /// Create a new harness for a named validation run.
    #[must_use = "validation harness must be used to run checks"]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            checks: Vec::new(),
        }
    }

    /// Add an absolute tolerance check: |observed - expected| < tolerance
    pub fn check_abs(&mut self, label: &str, observed: f64, expected: f64, tolerance: f64) {
        let passed = (observed - expected).abs() < tolerance;
        self.push(label, passed, observed, expected, tolerance, ToleranceMode::Absolute);
    }

    /// Add a relative tolerance check: |observed - expected| / |expected| < tolerance
    pub fn check_rel(&mut self, label: &str, observed: f64, expected: f64, tolerance: f64) {
        let passed = if expected.abs() > f64::EPSILON {
            ((observed - expected) / expected).abs() < tolerance
        } else {
            observed.abs() < tolerance
        };
        self.push(label, passed, observed, expected, tolerance, ToleranceMode::Relative);
    }

    /// Add an upper-bound check: observed < threshold
    pub fn check_upper(&mut self, label: &str, observed: f64, threshold: f64) {
        self.push(
            label,
            observed < threshold,
            observed,
            threshold,
            threshold,
            ToleranceMode::UpperBound,
        );
    }

    /// Add an inclusive count check: observed ≥ minimum
    pub fn check_at_least(&mut self, label: &str, observed: usize, minimum: usize) {
        self.push(
            label,
            observed >= minimum,
            observed as f64,
            minimum as f64,
            0.0,
            ToleranceMode::AtLeast,
        );
    }

    /// Add an exact count check: observed == expected
    pub fn check_count(&mut self, label: &str, observed: usize, expected: usize) {
        self.push(
            label,
            observed == expected,
            observed as f64,
            expected as f64,
            0.0,
            ToleranceMode::Absolute,
        );
    }

    /// Add a boolean pass/fail check.
    pub fn check_bool(&mut self, label: &str, passed: bool) {
        self.push(
            label,
            passed,
            f64::from(u8::from(passed)),
            1.0,
            0.0,
            ToleranceMode::Absolute,
        );
    }

    fn push(
        &mut self,
        label: &str,
        passed: bool,
        observed: f64,
        expected: f64,
        tolerance: f64,
        mode: ToleranceMode,
    ) {
        self.checks.push(Check {
            label: label.to_string(),
            passed,
            observed,
            expected,
            tolerance,
            mode,
        });
    }

    /// Number of checks that passed.
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    /// Total number of checks.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.checks.len()
    }

    /// Whether all checks passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Labels of failed checks, in insertion order.
    #[must_use]
    pub fn failed_labels(&self) -> Vec<&str> {
        self.checks
            .iter()
            .filter(|c| !c.passed)
            .map(|c| c.label.as_str())
            .collect()
    }

    /// Format the validation summary as a string.
    #[must_use]
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        let _ = writeln!(
            s,
            "═══ {} validation: {}/{} checks passed ═══",
            self.name,
            self.passed_count(),
            self.total_count()
        );
        for check in &self.checks {
            let icon = if check.passed { "✓" } else { "✗" };
            let _ = writeln!(
                s,
                "  {icon} {}: observed={:.6e}, expected={:.6e}, tol={:.2e} ({})",
                check.label, check.observed, check.expected, check.tolerance, check.mode
            );
        }
        s
    }

    /// Print summary and exit with appropriate code.
    ///
    /// Exit 0 if all checks pass, exit 1 if any fails.
    pub fn finish(&self) -> ! {
        println!();
        print!("{}", self.format_summary());

        if self.all_passed() {
            println!("ALL CHECKS PASSED");
            process::exit(0);
        } else {
            println!("FAILED CHECKS: {}", self.failed_labels().join(", "));
            process::exit(1);
        }
    }
}

// SPDX-License-Identifier: AGPL-3.0-only

//! Acceptance self-check: one topological and one trivial chain.
//!
//! | Case | v | w | detector | expected edge states |
//! |------|---|---|----------|----------------------|
//! | topological | 1.0 | 1.5 | threshold 0.15 | ≥ 2 |
//! | trivial | 1.5 | 0.5 | default | 0 |
//!
//! Both cases use 40 cells. A mismatch is logged as a warning and recorded
//! in the report; it never aborts the caller.

use crate::error::SshError;
use crate::spectral::{
    build_hamiltonian, detect_edge_states, solve, winding_number, EdgeDetectorConfig,
    LatticeConfig, Phase,
};
use crate::tolerances::{
    REGRESSION_N_CELLS, REGRESSION_TOPOLOGICAL_THRESHOLD, TOPOLOGICAL_MIN_EDGE_STATES,
};
use crate::validation::ValidationHarness;

/// What a regression case expects from the edge count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeExpectation {
    /// count ≥ n
    AtLeast(usize),
    /// count == n
    Exactly(usize),
}

impl EdgeExpectation {
    /// Whether `count` meets the expectation.
    #[must_use]
    pub const fn holds(self, count: usize) -> bool {
        match self {
            Self::AtLeast(n) => count >= n,
            Self::Exactly(n) => count == n,
        }
    }
}

/// A fixed configuration and its expected edge count.
#[derive(Clone, Copy, Debug)]
pub struct RegressionCase {
    /// Case label.
    pub name: &'static str,
    /// Chain parameters.
    pub lattice: LatticeConfig,
    /// Detector thresholds for this case.
    pub detector: EdgeDetectorConfig,
    /// Expected edge count.
    pub expectation: EdgeExpectation,
}

/// The two acceptance cases.
#[must_use]
pub fn default_cases() -> [RegressionCase; 2] {
    [
        RegressionCase {
            name: "topological",
            lattice: LatticeConfig::new(REGRESSION_N_CELLS, 1.0, 1.5),
            detector: EdgeDetectorConfig::default()
                .with_threshold(REGRESSION_TOPOLOGICAL_THRESHOLD),
            expectation: EdgeExpectation::AtLeast(TOPOLOGICAL_MIN_EDGE_STATES),
        },
        RegressionCase {
            name: "trivial",
            lattice: LatticeConfig::new(REGRESSION_N_CELLS, 1.5, 0.5),
            detector: EdgeDetectorConfig::default(),
            expectation: EdgeExpectation::Exactly(0),
        },
    ]
}

/// Outcome of one case.
#[derive(Clone, Debug, PartialEq)]
pub struct RegressionOutcome {
    /// Case label.
    pub name: &'static str,
    /// Intracell hopping.
    pub v: f64,
    /// Intercell hopping.
    pub w: f64,
    /// Phase from the hopping ratio.
    pub phase: Phase,
    /// Bulk winding number for (v, w).
    pub winding: u32,
    /// Edge states found, or the error that prevented counting.
    pub count: Result<usize, SshError>,
    /// Whether the count met the expectation.
    pub passed: bool,
}

/// All case outcomes plus the check log.
#[derive(Debug)]
pub struct RegressionReport {
    /// Per-case outcomes, in case order.
    pub outcomes: Vec<RegressionOutcome>,
    /// Check log (one check per case).
    pub harness: ValidationHarness,
}

impl RegressionReport {
    /// Whether every case met its expectation.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    /// Outcome for a case label.
    #[must_use]
    pub fn outcome(&self, name: &str) -> Option<&RegressionOutcome> {
        self.outcomes.iter().find(|o| o.name == name)
    }
}

fn count_edge_states(case: &RegressionCase) -> Result<usize, SshError> {
    let hamiltonian = build_hamiltonian(&case.lattice)?;
    let spectrum = solve(hamiltonian)?;
    Ok(detect_edge_states(&spectrum, &case.detector).count())
}

/// Run an arbitrary list of cases.
pub fn run_regression_cases(cases: &[RegressionCase]) -> RegressionReport {
    let mut harness = ValidationHarness::new("ssh_regression");
    let mut outcomes = Vec::with_capacity(cases.len());

    for case in cases {
        let LatticeConfig { v, w, .. } = case.lattice;
        let count = count_edge_states(case);
        let label = format!("{} (v={v}, w={w}) edge count", case.name);

        let passed = match (&count, case.expectation) {
            (Ok(n), EdgeExpectation::AtLeast(min)) => {
                harness.check_at_least(&label, *n, min);
                case.expectation.holds(*n)
            }
            (Ok(n), EdgeExpectation::Exactly(expected)) => {
                harness.check_count(&label, *n, expected);
                case.expectation.holds(*n)
            }
            (Err(_), _) => {
                harness.check_bool(&label, false);
                false
            }
        };

        if !passed {
            match &count {
                Ok(n) => tracing::warn!(
                    case = case.name,
                    v,
                    w,
                    count = n,
                    expected = ?case.expectation,
                    "regression mismatch"
                ),
                Err(e) => {
                    tracing::warn!(case = case.name, v, w, error = %e, "regression case failed");
                }
            }
        }

        outcomes.push(RegressionOutcome {
            name: case.name,
            v,
            w,
            phase: Phase::of(v, w),
            winding: winding_number(v, w),
            count,
            passed,
        });
    }

    RegressionReport { outcomes, harness }
}

/// Run the two acceptance cases.
pub fn run_regression() -> RegressionReport {
    run_regression_cases(&default_cases())
}

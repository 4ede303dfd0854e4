// SPDX-License-Identifier: AGPL-3.0-only

//! Centralized tolerances and detector thresholds with physical justification.
//!
//! Every numeric threshold used by the detector, the sweep, the regression
//! harness, and the validation binary is defined here with its rationale.
//! No ad-hoc magic numbers in the physics modules.
//!
//! # Tolerance categories
//!
//! | Category | Basis | Example |
//! |----------|-------|---------|
//! | Machine precision | IEEE 754 f64 | 1e-10 for the isolated dimer |
//! | Numerical method | Eigensolver convergence | 1e-9 chiral pairing |
//! | Physical model | Finite-size localization | 0.2 boundary weight |

/// Machine-precision and eigensolver tolerances.
pub mod core;
/// Edge-state detector thresholds and regression expectations.
pub mod topology;

pub use self::core::{
    CHIRAL_PAIRING_ABS, EIGH_EPSILON, EIGH_MAX_ITER, EIGH_ORTHONORMALITY, EXACT_F64,
    ITERATIVE_F64, TRACE_RELATIVE,
};

pub use self::topology::{
    EDGE_ENERGY_TOL, EDGE_WEIGHT_THRESHOLD, EDGE_WINDOW_SITES, LOW_ENERGY_BRANCHES,
    REGRESSION_N_CELLS, REGRESSION_TOPOLOGICAL_THRESHOLD, TOPOLOGICAL_MIN_EDGE_STATES,
};

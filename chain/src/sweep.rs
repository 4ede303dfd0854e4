// SPDX-License-Identifier: AGPL-3.0-only

//! Hopping sweep: build → diagonalize → classify at each intercell hopping w.
//!
//! Every sweep point is independent. `run_sweep` evaluates them in order on
//! the calling thread; `run_sweep_parallel` hands them to the rayon pool,
//! where each task owns its Hamiltonian and spectrum and the results are
//! collected back in input order. Both produce the same [`SweepResult`].

use crate::error::SshError;
use crate::spectral::{
    build_hamiltonian, detect_edge_states, solve, EdgeDetectorConfig, LatticeConfig,
};
use crate::tolerances::{EDGE_ENERGY_TOL, LOW_ENERGY_BRANCHES};
use rayon::prelude::*;
use serde::Serialize;

/// Default demo chain: 40 cells.
pub const DEMO_N_CELLS: usize = 40;
/// Default demo intracell hopping.
pub const DEMO_V: f64 = 1.0;
/// Default demo w range start.
pub const DEMO_W_MIN: f64 = 0.0;
/// Default demo w range end.
pub const DEMO_W_MAX: f64 = 2.0;
/// Default demo resolution.
pub const DEMO_W_POINTS: usize = 301;

/// Sweep parameters. `n_cells` and `v` are fixed; `w` runs over `w_values`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SweepConfig {
    /// Unit cells per chain.
    pub n_cells: usize,
    /// Intracell hopping.
    pub v: f64,
    /// Intercell hoppings, in sweep order.
    pub w_values: Vec<f64>,
    /// Forwarded into the detector; the weight rule does not read it.
    pub energy_tol: f64,
    /// Detector thresholds.
    pub detector: EdgeDetectorConfig,
}

impl SweepConfig {
    /// Sweep with the default detector.
    #[must_use]
    pub fn new(n_cells: usize, v: f64, w_values: Vec<f64>) -> Self {
        Self {
            n_cells,
            v,
            w_values,
            energy_tol: EDGE_ENERGY_TOL,
            detector: EdgeDetectorConfig::default(),
        }
    }

    /// 40 cells, v = 1, 301 points over w ∈ [0, 2].
    #[must_use]
    pub fn default_demo() -> Self {
        Self::new(
            DEMO_N_CELLS,
            DEMO_V,
            linspace(DEMO_W_MIN, DEMO_W_MAX, DEMO_W_POINTS),
        )
    }

    /// Detector configuration with this sweep's `energy_tol` applied.
    #[must_use]
    pub const fn effective_detector(&self) -> EdgeDetectorConfig {
        self.detector.with_energy_tol(self.energy_tol)
    }

    /// Check the chain before any point is evaluated.
    ///
    /// # Errors
    ///
    /// - [`SshError::InvalidConfiguration`] for `n_cells == 0` or non-finite `v`.
    /// - [`SshError::InsufficientSpectrumSize`] if the chain has fewer sites
    ///   than the branch table.
    pub fn validate(&self) -> Result<(), SshError> {
        LatticeConfig::new(self.n_cells, self.v, 0.0).validate()?;
        let n_sites = 2 * self.n_cells;
        if n_sites < LOW_ENERGY_BRANCHES {
            return Err(SshError::InsufficientSpectrumSize {
                n_sites,
                required: LOW_ENERGY_BRANCHES,
            });
        }
        Ok(())
    }
}

/// Result at one value of w.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SweepPoint {
    /// Intercell hopping.
    pub w: f64,
    /// The 6 eigenvalues closest to zero, ordered by ascending |E| (signed).
    pub low_energies: [f64; LOW_ENERGY_BRANCHES],
    /// Number of classified edge states.
    pub edge_count: usize,
}

/// Evaluate one sweep point.
///
/// # Errors
///
/// Propagates lattice validation, branch-table size, and solver errors.
pub fn evaluate_point(
    n_cells: usize,
    v: f64,
    w: f64,
    detector: &EdgeDetectorConfig,
) -> Result<SweepPoint, SshError> {
    let hamiltonian = build_hamiltonian(&LatticeConfig::new(n_cells, v, w))?;
    let spectrum = solve(hamiltonian)?;

    let mut low_energies = [0.0; LOW_ENERGY_BRANCHES];
    let indices = spectrum.lowest_magnitude_indices(LOW_ENERGY_BRANCHES)?;
    for (slot, &idx) in low_energies.iter_mut().zip(&indices) {
        *slot = spectrum.eigenvalues()[idx];
    }

    let edge_count = detect_edge_states(&spectrum, detector).count();
    tracing::debug!(w, edge_count, "sweep point");

    Ok(SweepPoint {
        w,
        low_energies,
        edge_count,
    })
}

/// Run the sweep sequentially.
///
/// # Errors
///
/// Fails before any point is evaluated for an invalid chain, otherwise
/// propagates the first per-point error.
pub fn run_sweep(config: &SweepConfig) -> Result<SweepResult, SshError> {
    config.validate()?;
    let detector = config.effective_detector();
    let points = config
        .w_values
        .iter()
        .map(|&w| evaluate_point(config.n_cells, config.v, w, &detector))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SweepResult::from_points(config.n_cells, config.v, &points))
}

/// Run the sweep on the rayon global pool. Output matches [`run_sweep`].
///
/// # Errors
///
/// Same conditions as [`run_sweep`].
pub fn run_sweep_parallel(config: &SweepConfig) -> Result<SweepResult, SshError> {
    config.validate()?;
    let detector = config.effective_detector();
    let points = config
        .w_values
        .par_iter()
        .map(|&w| evaluate_point(config.n_cells, config.v, w, &detector))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SweepResult::from_points(config.n_cells, config.v, &points))
}

/// Parallel tables aligned by sweep index.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SweepResult {
    /// Unit cells per chain.
    pub n_cells: usize,
    /// Intracell hopping.
    pub v: f64,
    /// Intercell hopping at each point.
    pub w_values: Vec<f64>,
    /// 6 smallest-|E| eigenvalues at each point.
    pub low_energies: Vec<[f64; LOW_ENERGY_BRANCHES]>,
    /// Edge-state count at each point.
    pub edge_counts: Vec<usize>,
}

impl SweepResult {
    /// Split per-point results into the three aligned tables.
    #[must_use]
    pub fn from_points(n_cells: usize, v: f64, points: &[SweepPoint]) -> Self {
        Self {
            n_cells,
            v,
            w_values: points.iter().map(|p| p.w).collect(),
            low_energies: points.iter().map(|p| p.low_energies).collect(),
            edge_counts: points.iter().map(|p| p.edge_count).collect(),
        }
    }

    /// Number of sweep points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.w_values.len()
    }

    /// Whether the sweep had no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.w_values.is_empty()
    }

    /// Branch `k` (k-th smallest |E|) across all points.
    ///
    /// # Panics
    ///
    /// Panics if `k >= LOW_ENERGY_BRANCHES`.
    #[must_use]
    pub fn branch(&self, k: usize) -> Vec<f64> {
        self.low_energies.iter().map(|row| row[k]).collect()
    }

    /// Largest edge count seen.
    #[must_use]
    pub fn max_edge_count(&self) -> usize {
        self.edge_counts.iter().copied().max().unwrap_or(0)
    }

    /// First w from which every later point has at least `min_count` edge
    /// states. `None` if the last point is already below `min_count`.
    #[must_use]
    pub fn transition_estimate(&self, min_count: usize) -> Option<f64> {
        let tail = self
            .edge_counts
            .iter()
            .rev()
            .take_while(|&&c| c >= min_count)
            .count();
        if tail == 0 {
            return None;
        }
        Some(self.w_values[self.len() - tail])
    }
}

/// `n` evenly spaced values from `start` to `end` inclusive.
#[must_use]
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn linspace_endpoints() {
        let xs = linspace(0.0, 2.0, 301);
        assert_eq!(xs.len(), 301);
        assert_eq!(xs[0], 0.0);
        assert_eq!(xs[300], 2.0);
        assert!((xs[150] - 1.0).abs() < 1e-12);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.5, 1.0, 1), vec![0.5]);
    }

    #[test]
    fn demo_config_matches_defaults() {
        let cfg = SweepConfig::default_demo();
        assert_eq!(cfg.n_cells, 40);
        assert_eq!(cfg.v, 1.0);
        assert_eq!(cfg.w_values.len(), 301);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_cells_rejected_before_sweep() {
        let cfg = SweepConfig::new(0, 1.0, vec![0.5]);
        assert!(matches!(
            run_sweep(&cfg),
            Err(SshError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn two_cells_too_small_for_branch_table() {
        let cfg = SweepConfig::new(2, 1.0, vec![0.5, 1.5]);
        assert_eq!(
            run_sweep(&cfg),
            Err(SshError::InsufficientSpectrumSize {
                n_sites: 4,
                required: 6
            })
        );
        // three cells is the smallest chain with 6 eigenvalues
        assert!(run_sweep(&SweepConfig::new(3, 1.0, vec![0.5])).is_ok());
    }

    #[test]
    fn low_energies_sorted_by_magnitude() {
        let p = evaluate_point(20, 1.0, 1.5, &EdgeDetectorConfig::default()).expect("point");
        let mags: Vec<f64> = p.low_energies.iter().map(|e| e.abs()).collect();
        assert!(mags.windows(2).all(|m| m[0] <= m[1]), "{mags:?}");
        // the two zero modes come first
        assert!(mags[0] < 1e-3 && mags[1] < 1e-3, "{mags:?}");
        assert!(mags[2] > 0.1, "bulk gap missing: {mags:?}");
    }

    #[test]
    fn empty_sweep_is_valid() {
        let res = run_sweep(&SweepConfig::new(10, 1.0, Vec::new())).expect("empty");
        assert!(res.is_empty());
        assert_eq!(res.max_edge_count(), 0);
        assert_eq!(res.transition_estimate(2), None);
    }

    #[test]
    fn energy_tol_is_forwarded() {
        let mut cfg = SweepConfig::new(10, 1.0, vec![1.5]);
        cfg.energy_tol = 0.25;
        assert_eq!(cfg.effective_detector().energy_tol, 0.25);
        assert_eq!(
            cfg.effective_detector().edge_weight_thresh,
            cfg.detector.edge_weight_thresh
        );
    }

    #[test]
    fn transition_estimate_uses_tail() {
        let res = SweepResult {
            n_cells: 40,
            v: 1.0,
            w_values: vec![0.0, 0.5, 1.0, 1.2, 1.4, 1.6],
            low_energies: vec![[0.0; LOW_ENERGY_BRANCHES]; 6],
            edge_counts: vec![0, 0, 2, 0, 2, 2],
        };
        assert_eq!(res.transition_estimate(2), Some(1.4));
        assert_eq!(res.max_edge_count(), 2);
        assert_eq!(res.branch(3).len(), 6);
    }
}

// SPDX-License-Identifier: AGPL-3.0-only

//! Boundary-localization detector for edge states.
//!
//! An eigenstate is an edge state when the probability mass in either
//! boundary window (the first or last `edge_size_sites` sites) reaches
//! `edge_weight_thresh`. The rule sums |ψ|², so it depends only on the
//! projector onto each eigenvector: a rotation inside a degenerate subspace
//! redistributes boundary mass between partners but preserves its total.
//!
//! Windows clamp to the chain length; for chains shorter than two windows
//! the left and right windows overlap.

use super::eigen::Spectrum;
use crate::tolerances::{EDGE_ENERGY_TOL, EDGE_WEIGHT_THRESHOLD, EDGE_WINDOW_SITES};
use serde::Serialize;

/// Detector parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EdgeDetectorConfig {
    /// Minimum boundary-window probability for an edge state.
    pub edge_weight_thresh: f64,
    /// Sites per boundary window.
    pub edge_size_sites: usize,
    /// Energy window; carried through but not read by the weight rule.
    pub energy_tol: f64,
    /// Emit the sorted edge-state energies as an `info` event.
    pub report_energies: bool,
}

impl Default for EdgeDetectorConfig {
    fn default() -> Self {
        Self {
            edge_weight_thresh: EDGE_WEIGHT_THRESHOLD,
            edge_size_sites: EDGE_WINDOW_SITES,
            energy_tol: EDGE_ENERGY_TOL,
            report_energies: false,
        }
    }
}

impl EdgeDetectorConfig {
    /// Same configuration with a different weight threshold.
    #[must_use]
    pub const fn with_threshold(mut self, edge_weight_thresh: f64) -> Self {
        self.edge_weight_thresh = edge_weight_thresh;
        self
    }

    /// Same configuration with a different (pass-through) energy window.
    #[must_use]
    pub const fn with_energy_tol(mut self, energy_tol: f64) -> Self {
        self.energy_tol = energy_tol;
        self
    }

    /// Same configuration with energy reporting switched on or off.
    #[must_use]
    pub const fn with_report_energies(mut self, report_energies: bool) -> Self {
        self.report_energies = report_energies;
        self
    }
}

/// Which boundary window carried enough weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum EdgeSide {
    /// First `edge_size_sites` sites.
    Left,
    /// Last `edge_size_sites` sites.
    Right,
    /// Both windows reached the threshold (hybridized or overlapping).
    Both,
}

/// One classified eigenstate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EdgeState {
    /// Position in the ascending spectrum.
    pub spectrum_index: usize,
    /// Eigenvalue.
    pub energy: f64,
    /// max(`p_left`, `p_right`).
    pub boundary_weight: f64,
    /// Window(s) that reached the threshold.
    pub side: EdgeSide,
}

/// Detector output: classified states in ascending spectral index.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EdgeDetection {
    /// Classified states; indices are unique and ascending.
    pub states: Vec<EdgeState>,
}

impl EdgeDetection {
    /// Number of edge states.
    #[must_use]
    pub fn count(&self) -> usize {
        self.states.len()
    }

    /// Whether no state was classified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Spectral indices of the edge states.
    #[must_use]
    pub fn indices(&self) -> Vec<usize> {
        self.states.iter().map(|s| s.spectrum_index).collect()
    }

    /// Edge-state energies, ascending.
    #[must_use]
    pub fn sorted_energies(&self) -> Vec<f64> {
        let mut energies: Vec<f64> = self.states.iter().map(|s| s.energy).collect();
        energies.sort_by(f64::total_cmp);
        energies
    }
}

/// Probability mass (`p_left`, `p_right`) of one eigenvector in the two
/// boundary windows.
#[must_use]
pub fn boundary_weights(psi: &[f64], edge_size_sites: usize) -> (f64, f64) {
    let window = edge_size_sites.min(psi.len());
    let p_left = psi[..window].iter().map(|a| a * a).sum();
    let p_right = psi[psi.len() - window..].iter().map(|a| a * a).sum();
    (p_left, p_right)
}

/// Classify every eigenstate of `spectrum` by boundary weight.
///
/// `energy_tol` is not consulted. Zero matches is a normal result.
#[must_use]
pub fn detect_edge_states(spectrum: &Spectrum, config: &EdgeDetectorConfig) -> EdgeDetection {
    let thresh = config.edge_weight_thresh;

    let states: Vec<EdgeState> = (0..spectrum.len())
        .filter_map(|i| {
            let (p_left, p_right) =
                boundary_weights(spectrum.eigenvector(i), config.edge_size_sites);
            let left = p_left >= thresh;
            let right = p_right >= thresh;
            let side = match (left, right) {
                (true, true) => EdgeSide::Both,
                (true, false) => EdgeSide::Left,
                (false, true) => EdgeSide::Right,
                (false, false) => return None,
            };
            Some(EdgeState {
                spectrum_index: i,
                energy: spectrum.eigenvalues()[i],
                boundary_weight: p_left.max(p_right),
                side,
            })
        })
        .collect();

    let detection = EdgeDetection { states };

    if config.report_energies {
        tracing::info!(
            count = detection.count(),
            energies = ?detection.sorted_energies(),
            "edge-state energies"
        );
    }

    detection
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::spectral::eigen::solve;
    use crate::spectral::hamiltonian::{build_hamiltonian, LatticeConfig};
    use nalgebra::DMatrix;

    fn chain_spectrum(n_cells: usize, v: f64, w: f64) -> Spectrum {
        let h = build_hamiltonian(&LatticeConfig::new(n_cells, v, w)).expect("build");
        solve(h).expect("solve")
    }

    #[test]
    fn weights_of_localized_vector() {
        let psi = [1.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        assert_eq!(boundary_weights(&psi, 2), (1.0, 0.0));
        let psi = [0.0, 0.0, 0.0, 0.0, 0.6, 0.8];
        let (l, r) = boundary_weights(&psi, 2);
        assert_eq!(l, 0.0);
        assert!((r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn windows_clamp_and_overlap() {
        // 2 sites, 5-site windows: both windows cover the whole vector
        let psi = [0.6, 0.8];
        let (l, r) = boundary_weights(&psi, 5);
        assert!((l - 1.0).abs() < 1e-12);
        assert!((r - 1.0).abs() < 1e-12);
        assert_eq!(boundary_weights(&[], 2), (0.0, 0.0));
    }

    #[test]
    fn identity_basis_only_ends_classified() {
        let s = Spectrum::from_parts((0..8u32).map(f64::from).collect(), DMatrix::identity(8, 8))
            .expect("parts");
        let det = detect_edge_states(&s, &EdgeDetectorConfig::default());
        assert_eq!(det.indices(), vec![0, 1, 6, 7]);
        assert_eq!(det.states[0].side, EdgeSide::Left);
        assert_eq!(det.states[3].side, EdgeSide::Right);
    }

    #[test]
    fn topological_chain_has_two_edge_states() {
        let s = chain_spectrum(40, 1.0, 1.5);
        let det = detect_edge_states(&s, &EdgeDetectorConfig::default());
        assert_eq!(det.count(), 2, "indices {:?}", det.indices());
        for state in &det.states {
            assert!(state.energy.abs() < 1e-4, "edge energy {}", state.energy);
        }
    }

    #[test]
    fn trivial_chain_has_none() {
        let s = chain_spectrum(40, 1.5, 0.5);
        let det = detect_edge_states(&s, &EdgeDetectorConfig::default());
        assert!(det.is_empty(), "unexpected edge states {:?}", det.indices());
    }

    #[test]
    fn detection_is_deterministic() {
        let s = chain_spectrum(30, 1.0, 1.8);
        let cfg = EdgeDetectorConfig::default();
        let a = detect_edge_states(&s, &cfg);
        let b = detect_edge_states(&s, &cfg);
        assert_eq!(a, b);
    }

    #[test]
    fn energy_tol_does_not_change_classification() {
        let s = chain_spectrum(40, 1.0, 1.5);
        let base = detect_edge_states(&s, &EdgeDetectorConfig::default());
        for tol in [0.0, 1e-12, 1.0, 100.0] {
            let cfg = EdgeDetectorConfig::default().with_energy_tol(tol);
            assert_eq!(detect_edge_states(&s, &cfg), base, "energy_tol={tol}");
        }
    }

    #[test]
    fn report_energies_keeps_result() {
        let s = chain_spectrum(20, 1.0, 2.0);
        let quiet = detect_edge_states(&s, &EdgeDetectorConfig::default());
        let loud = detect_edge_states(
            &s,
            &EdgeDetectorConfig::default().with_report_energies(true),
        );
        assert_eq!(quiet, loud);
        let e = loud.sorted_energies();
        assert!(e.windows(2).all(|p| p[0] <= p[1]));
    }

    #[test]
    fn rotated_degenerate_pair_keeps_boundary_mass() {
        // Build a synthetic degenerate pair from pure left and right modes,
        // then rotate by several angles inside the pair's subspace.
        let n = 10;
        let mut left = vec![0.0; n];
        let mut right = vec![0.0; n];
        let q: f64 = 0.5;
        for cell in 0..n / 2 {
            left[2 * cell] = q.powi(cell as i32);
            right[n - 1 - 2 * cell] = q.powi(cell as i32);
        }
        let norm = left.iter().map(|a| a * a).sum::<f64>().sqrt();
        left.iter_mut().for_each(|a| *a /= norm);
        right.iter_mut().for_each(|a| *a /= norm);
        let (left_l, left_r) = boundary_weights(&left, 2);
        let (right_l, right_r) = boundary_weights(&right, 2);

        for &theta in &[0.0, 0.3, std::f64::consts::FRAC_PI_4, 1.1] {
            let (c, s) = (f64::cos(theta), f64::sin(theta));
            // only the degenerate pair is populated
            let mut vecs = DMatrix::<f64>::zeros(n, n);
            for site in 0..n {
                vecs[(site, 0)] = c * left[site] + s * right[site];
                vecs[(site, 1)] = -s * left[site] + c * right[site];
            }
            let spectrum = Spectrum::from_parts(vec![0.0; n], vecs).expect("synthetic spectrum");

            let (l0, r0) = boundary_weights(spectrum.eigenvector(0), 2);
            let (l1, r1) = boundary_weights(spectrum.eigenvector(1), 2);
            assert!(
                (l0 + l1 - (left_l + right_l)).abs() < 1e-12,
                "θ={theta}: left mass {}",
                l0 + l1
            );
            assert!(
                (r0 + r1 - (left_r + right_r)).abs() < 1e-12,
                "θ={theta}: right mass {}",
                r0 + r1
            );

            let det = detect_edge_states(&spectrum, &EdgeDetectorConfig::default());
            assert_eq!(det.indices(), vec![0, 1], "θ={theta}");
        }
    }
}

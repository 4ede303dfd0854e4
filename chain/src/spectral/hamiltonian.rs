// SPDX-License-Identifier: AGPL-3.0-only

//! Open-boundary SSH tight-binding Hamiltonian.
//!
//! The chain has `n_cells` unit cells, each holding an A and a B site.
//! With 0-based site indices, cell `n` owns A at `2n` and B at `2n+1`.
//!
//! H = −v Σₙ (|A_n⟩⟨B_n| + h.c.) − w Σₙ (|B_n⟩⟨A_{n+1}| + h.c.)
//!
//! Open boundaries: the last B site is not coupled back to the first A site.
//! The diagonal is empty, so H anticommutes with the sublattice operator and
//! its spectrum is symmetric about zero.
//!
//! # Provenance
//! Su, Schrieffer & Heeger (1979), Phys. Rev. Lett. 42, 1698
//! Asbóth, Oroszlány & Pályi (2016), "A Short Course on Topological
//! Insulators", Lecture Notes in Physics 919, ch. 1

use crate::error::SshError;
use nalgebra::DMatrix;
use serde::Serialize;

/// Lattice parameters of one SSH chain.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LatticeConfig {
    /// Number of unit cells (≥ 1).
    pub n_cells: usize,
    /// Intracell hopping (A_n ↔ B_n).
    pub v: f64,
    /// Intercell hopping (B_n ↔ A_{n+1}).
    pub w: f64,
}

impl LatticeConfig {
    /// Bundle lattice parameters; validation happens in [`build_hamiltonian`].
    #[must_use]
    pub const fn new(n_cells: usize, v: f64, w: f64) -> Self {
        Self { n_cells, v, w }
    }

    /// Number of sites, 2 · `n_cells`.
    #[must_use]
    pub const fn n_sites(&self) -> usize {
        2 * self.n_cells
    }

    /// Reject an empty chain and non-finite hoppings.
    ///
    /// # Errors
    ///
    /// Returns [`SshError::InvalidConfiguration`] if `n_cells == 0` or either
    /// hopping is NaN or infinite.
    pub fn validate(&self) -> Result<(), SshError> {
        if self.n_cells < 1 {
            return Err(SshError::InvalidConfiguration(format!(
                "n_cells must be >= 1, got {}",
                self.n_cells
            )));
        }
        if !self.v.is_finite() || !self.w.is_finite() {
            return Err(SshError::InvalidConfiguration(format!(
                "hoppings must be finite, got v={}, w={}",
                self.v, self.w
            )));
        }
        Ok(())
    }
}

/// Real symmetric SSH Hamiltonian. Immutable once built.
#[derive(Clone, Debug)]
pub struct Hamiltonian {
    matrix: DMatrix<f64>,
}

impl Hamiltonian {
    /// Matrix dimension.
    #[must_use]
    pub fn n_sites(&self) -> usize {
        self.matrix.nrows()
    }

    /// Dense matrix view.
    #[must_use]
    pub const fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// Consume into the dense matrix; [`solve`](super::eigen::solve) uses
    /// this so the matrix is not copied.
    #[must_use]
    pub fn into_matrix(self) -> DMatrix<f64> {
        self.matrix
    }

    /// Element `H[i, j]` (0-based).
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is not below [`Self::n_sites`].
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.matrix[(i, j)]
    }

    /// Sum of diagonal elements (zero by construction).
    #[must_use]
    pub fn trace(&self) -> f64 {
        self.matrix.trace()
    }

    /// Whether |H[i,j] − H[j,i]| ≤ `tol` for every pair.
    #[must_use]
    pub fn is_symmetric(&self, tol: f64) -> bool {
        let n = self.n_sites();
        (0..n).all(|i| {
            (i + 1..n).all(|j| (self.matrix[(i, j)] - self.matrix[(j, i)]).abs() <= tol)
        })
    }

    /// Number of nonzero bonds (upper-triangle entries).
    #[must_use]
    pub fn bond_count(&self) -> usize {
        let n = self.n_sites();
        (0..n)
            .map(|i| (i + 1..n).filter(|&j| self.matrix[(i, j)] != 0.0).count())
            .sum()
    }
}

/// Build the open-chain SSH Hamiltonian.
///
/// Intracell bonds carry −v, intercell bonds −w. A single cell is an
/// isolated dimer: no intercell bond exists whatever `w` is.
///
/// # Errors
///
/// Returns [`SshError::InvalidConfiguration`] for an empty chain or
/// non-finite hoppings.
pub fn build_hamiltonian(config: &LatticeConfig) -> Result<Hamiltonian, SshError> {
    config.validate()?;

    let n_sites = config.n_sites();
    let mut matrix = DMatrix::zeros(n_sites, n_sites);

    for cell in 0..config.n_cells {
        let a = 2 * cell;
        let b = a + 1;
        matrix[(a, b)] = -config.v;
        matrix[(b, a)] = -config.v;

        if cell + 1 < config.n_cells {
            let next_a = b + 1;
            matrix[(b, next_a)] = -config.w;
            matrix[(next_a, b)] = -config.w;
        }
    }

    Ok(Hamiltonian { matrix })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::tolerances::EXACT_F64;

    #[test]
    fn zero_cells_rejected() {
        let err = build_hamiltonian(&LatticeConfig::new(0, 1.0, 1.0)).unwrap_err();
        assert!(matches!(err, SshError::InvalidConfiguration(_)));
    }

    #[test]
    fn nan_hopping_rejected() {
        let err = build_hamiltonian(&LatticeConfig::new(4, f64::NAN, 1.0)).unwrap_err();
        assert!(matches!(err, SshError::InvalidConfiguration(_)));
    }

    #[test]
    fn dimer_ignores_intercell_hopping() {
        let h = build_hamiltonian(&LatticeConfig::new(1, 1.0, 7.5)).expect("dimer");
        assert_eq!(h.n_sites(), 2);
        assert_eq!(h.get(0, 1), -1.0);
        assert_eq!(h.get(1, 0), -1.0);
        assert_eq!(h.get(0, 0), 0.0);
        assert_eq!(h.get(1, 1), 0.0);
        assert_eq!(h.bond_count(), 1);
    }

    #[test]
    fn bond_pattern_three_cells() {
        let h = build_hamiltonian(&LatticeConfig::new(3, 0.7, 1.3)).expect("3 cells");
        // intracell: (0,1), (2,3), (4,5); intercell: (1,2), (3,4)
        for (i, j) in [(0, 1), (2, 3), (4, 5)] {
            assert_eq!(h.get(i, j), -0.7, "intracell ({i},{j})");
        }
        for (i, j) in [(1, 2), (3, 4)] {
            assert_eq!(h.get(i, j), -1.3, "intercell ({i},{j})");
        }
        // open boundary: last B not coupled to first A
        assert_eq!(h.get(5, 0), 0.0);
        assert_eq!(h.bond_count(), 5);
    }

    #[test]
    fn symmetric_zero_diagonal_any_sign() {
        for &(v, w) in &[(1.0, 1.5), (-0.3, 2.0), (0.0, 0.0), (2.5, -1.0)] {
            let h = build_hamiltonian(&LatticeConfig::new(12, v, w)).expect("build");
            assert!(h.is_symmetric(0.0), "v={v}, w={w} not symmetric");
            for i in 0..h.n_sites() {
                assert_eq!(h.get(i, i), 0.0, "diagonal at {i}");
            }
            assert!(h.trace().abs() < EXACT_F64);
        }
    }

    #[test]
    fn bond_count_scales_with_cells() {
        let n_cells = 25;
        let h = build_hamiltonian(&LatticeConfig::new(n_cells, 1.0, 0.5)).expect("build");
        assert_eq!(h.bond_count(), 2 * n_cells - 1);
    }

    #[test]
    fn into_matrix_hands_over_storage() {
        let h = build_hamiltonian(&LatticeConfig::new(4, 1.0, 0.5)).expect("build");
        let view = h.matrix().clone();
        let owned = h.into_matrix();
        assert_eq!(owned, view);
        assert_eq!(owned[(1, 2)], -0.5);
    }
}

// SPDX-License-Identifier: AGPL-3.0-only

//! Dense symmetric eigendecomposition and the ordered spectrum it yields.
//!
//! `nalgebra::SymmetricEigen` (Householder tridiagonalization + implicit QR)
//! returns eigenpairs in no particular order; this adapter sorts them
//! ascending and permutes the eigenvector columns to match.
//!
//! Eigenvector sign is solver-defined, and inside a (near-)degenerate
//! subspace the returned basis is an arbitrary orthonormal one. Nothing in
//! this crate reads raw eigenvector signs: consumers work with |ψ|².

use super::hamiltonian::Hamiltonian;
use crate::error::SshError;
use crate::tolerances::{EIGH_EPSILON, EIGH_MAX_ITER};
use nalgebra::{DMatrix, SymmetricEigen};

/// Diagonalize a real symmetric matrix.
///
/// Returns ascending eigenvalues and the matching orthonormal eigenvectors
/// as columns.
///
/// # Errors
///
/// - [`SshError::InvalidConfiguration`] if the matrix is not square.
/// - [`SshError::NumericalNonConvergence`] if the QR sweep exceeds
///   [`EIGH_MAX_ITER`].
pub fn symmetric_eigendecompose(
    matrix: DMatrix<f64>,
) -> Result<(Vec<f64>, DMatrix<f64>), SshError> {
    let n = matrix.nrows();
    if n != matrix.ncols() {
        return Err(SshError::InvalidConfiguration(format!(
            "eigendecomposition needs a square matrix, got {}x{}",
            n,
            matrix.ncols()
        )));
    }
    if n == 0 {
        return Ok((Vec::new(), DMatrix::zeros(0, 0)));
    }

    let eig = SymmetricEigen::try_new(matrix, EIGH_EPSILON, EIGH_MAX_ITER)
        .ok_or(SshError::NumericalNonConvergence { dimension: n })?;

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| eig.eigenvalues[a].total_cmp(&eig.eigenvalues[b]));

    let eigenvalues = order.iter().map(|&k| eig.eigenvalues[k]).collect();
    let eigenvectors = DMatrix::from_fn(n, n, |row, col| eig.eigenvectors[(row, order[col])]);

    Ok((eigenvalues, eigenvectors))
}

/// Diagonalize an SSH Hamiltonian into an ordered [`Spectrum`].
///
/// The Hamiltonian is consumed; its storage becomes the solver's workspace.
///
/// # Errors
///
/// Propagates [`SshError::NumericalNonConvergence`] from the eigensolver.
pub fn solve(hamiltonian: Hamiltonian) -> Result<Spectrum, SshError> {
    let (eigenvalues, eigenvectors) = symmetric_eigendecompose(hamiltonian.into_matrix())?;
    Ok(Spectrum {
        eigenvalues,
        eigenvectors,
    })
}

/// Ascending eigenvalues with their unit-norm eigenvectors (columns).
#[derive(Clone, Debug)]
pub struct Spectrum {
    eigenvalues: Vec<f64>,
    eigenvectors: DMatrix<f64>,
}

impl Spectrum {
    /// Assemble a spectrum from explicit parts (synthetic or external).
    ///
    /// # Errors
    ///
    /// Returns [`SshError::InvalidConfiguration`] if the eigenvector matrix
    /// is not `n × n` for `n` eigenvalues, or the eigenvalues are not
    /// ascending.
    pub fn from_parts(eigenvalues: Vec<f64>, eigenvectors: DMatrix<f64>) -> Result<Self, SshError> {
        let n = eigenvalues.len();
        if eigenvectors.nrows() != n || eigenvectors.ncols() != n {
            return Err(SshError::InvalidConfiguration(format!(
                "{n} eigenvalues but a {}x{} eigenvector matrix",
                eigenvectors.nrows(),
                eigenvectors.ncols()
            )));
        }
        if eigenvalues.windows(2).any(|p| p[0] > p[1]) {
            return Err(SshError::InvalidConfiguration(
                "eigenvalues must be sorted ascending".into(),
            ));
        }
        Ok(Self {
            eigenvalues,
            eigenvectors,
        })
    }

    /// Number of eigenpairs (= number of sites).
    #[must_use]
    pub fn len(&self) -> usize {
        self.eigenvalues.len()
    }

    /// Whether the spectrum is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.eigenvalues.is_empty()
    }

    /// Ascending eigenvalues.
    #[must_use]
    pub fn eigenvalues(&self) -> &[f64] {
        &self.eigenvalues
    }

    /// Eigenvector matrix, one column per eigenvalue.
    #[must_use]
    pub const fn eigenvectors(&self) -> &DMatrix<f64> {
        &self.eigenvectors
    }

    /// Site amplitudes of eigenstate `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    #[must_use]
    pub fn eigenvector(&self, i: usize) -> &[f64] {
        let n = self.len();
        &self.eigenvectors.as_slice()[i * n..(i + 1) * n]
    }

    /// Indices of the `k` eigenvalues closest to zero, ordered by ascending
    /// |E|. Ties keep ascending spectral order.
    ///
    /// # Errors
    ///
    /// Returns [`SshError::InsufficientSpectrumSize`] if `k > self.len()`.
    pub fn lowest_magnitude_indices(&self, k: usize) -> Result<Vec<usize>, SshError> {
        if k > self.len() {
            return Err(SshError::InsufficientSpectrumSize {
                n_sites: self.len(),
                required: k,
            });
        }
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.sort_by(|&a, &b| self.eigenvalues[a].abs().total_cmp(&self.eigenvalues[b].abs()));
        order.truncate(k);
        Ok(order)
    }

    /// Sum of eigenvalues (equals the Hamiltonian trace).
    #[must_use]
    pub fn trace(&self) -> f64 {
        self.eigenvalues.iter().sum()
    }

    /// Sum of |E|, used to scale the trace check.
    #[must_use]
    pub fn absolute_sum(&self) -> f64 {
        self.eigenvalues.iter().map(|e| e.abs()).sum()
    }

    /// Largest |E_k + E_{n−1−k}| over the sorted spectrum.
    ///
    /// Zero for a spectrum symmetric about E = 0.
    #[must_use]
    pub fn max_chiral_mismatch(&self) -> f64 {
        let n = self.len();
        (0..n / 2)
            .map(|k| (self.eigenvalues[k] + self.eigenvalues[n - 1 - k]).abs())
            .fold(0.0, f64::max)
    }

    /// Inverse participation ratio Σ |ψ|⁴ of eigenstate `i`.
    ///
    /// 1/N for a uniformly spread state, 1 for a single-site state.
    #[must_use]
    pub fn inverse_participation_ratio(&self, i: usize) -> f64 {
        self.eigenvector(i).iter().map(|a| a.powi(4)).sum()
    }

    /// Largest |(VᵀV − I)ᵢⱼ|.
    #[must_use]
    pub fn orthonormality_defect(&self) -> f64 {
        let n = self.len();
        let gram = self.eigenvectors.transpose() * &self.eigenvectors;
        let mut defect = 0.0f64;
        for i in 0..n {
            for j in 0..n {
                let target = if i == j { 1.0 } else { 0.0 };
                defect = defect.max((gram[(i, j)] - target).abs());
            }
        }
        defect
    }
}

// SPDX-License-Identifier: AGPL-3.0-only

//! Machine-precision and dense eigensolver tolerances.

// ═══════════════════════════════════════════════════════════════════
// Machine-precision tolerances (IEEE 754 f64)
// ═══════════════════════════════════════════════════════════════════

/// Tolerance for operations that should be exact in f64 arithmetic.
///
/// f64 has ~15.9 significant digits; 1e-10 allows 5 digits of accumulated
/// rounding. Used for the isolated dimer (eigenvalues exactly ±v) and for
/// Hamiltonian symmetry, which is exact by construction.
pub const EXACT_F64: f64 = 1e-10;

/// Tolerance for f64 results of iterative algorithms.
///
/// Implicit-shift QR on an n×n tridiagonal accumulates O(n) rotations.
/// 1e-8 leaves ~7 digits after iteration.
pub const ITERATIVE_F64: f64 = 1e-8;

// ═══════════════════════════════════════════════════════════════════
// Symmetric eigendecomposition
// ═══════════════════════════════════════════════════════════════════

/// Convergence threshold handed to `nalgebra::SymmetricEigen::try_new`.
///
/// An off-diagonal element is deflated once it is below `eps` times the
/// neighbouring diagonal magnitude. Machine epsilon reproduces the
/// behaviour of `SymmetricEigen::new`.
pub const EIGH_EPSILON: f64 = f64::EPSILON;

/// Iteration cap for the symmetric QR sweep.
///
/// Chains in the low hundreds of cells converge in a few hundred sweeps.
/// Exceeding this cap is reported as non-convergence instead of looping.
pub const EIGH_MAX_ITER: usize = 100_000;

/// Orthonormality defect of the eigenvector matrix: max |VᵀV − I|.
///
/// Householder tridiagonalization plus QR keeps V orthogonal to a few
/// hundred ulps for the sizes used here.
pub const EIGH_ORTHONORMALITY: f64 = 1e-10;

/// Trace invariant: |Σ Eᵢ| relative to Σ |Eᵢ|.
///
/// The Hamiltonian has zero diagonal, so its trace (and the eigenvalue sum)
/// is exactly zero. Summation over 2·n_cells values of O(1) leaves
/// ~1e-14 relative residual; 1e-9 is the acceptance threshold.
pub const TRACE_RELATIVE: f64 = 1e-9;

/// Chiral symmetry: |E_k + E_{n−1−k}| for the sorted spectrum.
///
/// The bipartite hopping structure makes the spectrum exactly symmetric
/// about zero. Backward-stable diagonalization reproduces the pairing to
/// ~1e-14 × ‖H‖; 1e-9 covers ‖H‖ up to a few hundred.
pub const CHIRAL_PAIRING_ABS: f64 = 1e-9;

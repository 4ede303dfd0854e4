// SPDX-License-Identifier: AGPL-3.0-only

//! Typed errors for lattice construction, diagonalization, and export.
//!
//! Callers pattern-match on the failure mode (bad lattice, spectrum too
//! small for the branch table, solver breakdown, file output) instead of
//! parsing strings.

use std::fmt;

/// Errors arising from building, solving, sweeping, or exporting an SSH chain.
#[derive(Debug, Clone, PartialEq)]
pub enum SshError {
    /// Lattice parameters or spectrum parts are not usable (e.g. zero cells).
    InvalidConfiguration(String),

    /// The spectrum has fewer sites than the branch table needs.
    InsufficientSpectrumSize {
        /// Number of sites in the chain.
        n_sites: usize,
        /// Number of eigenvalues the caller asked for.
        required: usize,
    },

    /// The symmetric eigensolver did not converge.
    NumericalNonConvergence {
        /// Dimension of the matrix that failed.
        dimension: usize,
    },

    /// Chart or JSON output failed (path and underlying message).
    Export(String),
}

impl fmt::Display for SshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {msg}"),
            Self::InsufficientSpectrumSize { n_sites, required } => write!(
                f,
                "Spectrum has {n_sites} sites but {required} low-energy branches were requested"
            ),
            Self::NumericalNonConvergence { dimension } => write!(
                f,
                "Symmetric eigensolver failed to converge for a {dimension}x{dimension} matrix"
            ),
            Self::Export(msg) => write!(f, "Export failed: {msg}"),
        }
    }
}

impl std::error::Error for SshError {}

// SPDX-License-Identifier: AGPL-3.0-only

//! Spectral theory of the open SSH chain.
//!
//! - `hamiltonian`: lattice parameters → symmetric tight-binding matrix
//! - `eigen`: dense symmetric eigendecomposition into an ordered spectrum
//! - `edge`: boundary-weight classification of edge states
//! - `topology`: bulk winding number and phase label
//!
//! # Provenance
//!
//! - Su, Schrieffer & Heeger (1979) "Solitons in Polyacetylene", PRL 42, 1698
//! - Ryu & Hatsugai (2002) "Topological origin of zero-energy edge states
//!   in particle-hole symmetric systems", PRL 89, 077002
//! - Asbóth, Oroszlány & Pályi (2016) "A Short Course on Topological
//!   Insulators", ch. 1

pub mod edge;
pub mod eigen;
pub mod hamiltonian;
pub mod topology;

pub use edge::{
    boundary_weights, detect_edge_states, EdgeDetection, EdgeDetectorConfig, EdgeSide, EdgeState,
};
pub use eigen::{solve, symmetric_eigendecompose, Spectrum};
pub use hamiltonian::{build_hamiltonian, Hamiltonian, LatticeConfig};
pub use topology::{bulk_gap, expected_zero_modes, try_winding_number, winding_number, Phase};

// SPDX-License-Identifier: AGPL-3.0-only

//! SSH chain: edge states and the topological transition of the open
//! Su–Schrieffer–Heeger lattice.
//!
//! ## Modules
//!   - `spectral`: Hamiltonian builder, dense eigensolve, edge-state
//!     detector, bulk winding number
//!   - `sweep`: intercell-hopping sweep (sequential and rayon-parallel)
//!   - `regression`: topological/trivial acceptance cases
//!   - `validation`: check accumulator with pass/fail summary
//!   - `export`: energy and edge-count charts, JSON results
//!   - `tolerances`: every threshold with its justification
//!   - `report`: tracing setup and console tables for the binaries
//!
//! ## Binaries
//!   - `ssh_sweep`: default sweep (40 cells, v = 1, w ∈ [0, 2]), charts,
//!     regression findings
//!   - `validate_ssh`: spectral invariants and scenarios, exit 0/1

pub mod error;
pub mod export;
pub mod regression;
pub mod report;
pub mod spectral;
pub mod sweep;
pub mod tolerances;
pub mod validation;

pub use error::SshError;

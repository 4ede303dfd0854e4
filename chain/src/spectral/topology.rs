// SPDX-License-Identifier: AGPL-3.0-only

//! Bulk topological invariant of the SSH chain.
//!
//! For the infinite chain, h(k) = −(v + w e^{ik}) traces a circle of radius
//! |w| centered at −v in the complex plane. Its winding number about the
//! origin is 1 when |w| > |v| and 0 when |w| < |v|; at |w| = |v| the gap
//! closes and the invariant is undefined. Bulk–boundary correspondence ties
//! the winding number to the number of zero modes per edge of the open
//! chain, which is what the edge detector counts from the other side.

use serde::Serialize;
use std::fmt;

/// Phase of the chain for given hoppings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// |v| > |w|: no protected edge modes.
    Trivial,
    /// |w| > |v|: one zero mode per edge.
    Topological,
    /// |v| = |w|: gapless.
    Critical,
}

impl Phase {
    /// Phase of the chain with intracell `v` and intercell `w`.
    #[must_use]
    pub fn of(v: f64, w: f64) -> Self {
        match w.abs().total_cmp(&v.abs()) {
            std::cmp::Ordering::Greater => Self::Topological,
            std::cmp::Ordering::Less => Self::Trivial,
            std::cmp::Ordering::Equal => Self::Critical,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trivial => write!(f, "trivial"),
            Self::Topological => write!(f, "topological"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// Winding number, or `None` at the gap closing.
#[must_use]
pub fn try_winding_number(v: f64, w: f64) -> Option<u32> {
    match Phase::of(v, w) {
        Phase::Topological => Some(1),
        Phase::Trivial => Some(0),
        Phase::Critical => None,
    }
}

/// Winding number; 0 at the gap closing.
#[must_use]
pub fn winding_number(v: f64, w: f64) -> u32 {
    try_winding_number(v, w).unwrap_or(0)
}

/// Zero modes expected on the open chain: one per edge per unit of winding.
#[must_use]
pub fn expected_zero_modes(v: f64, w: f64) -> usize {
    2 * winding_number(v, w) as usize
}

/// Bulk gap of the infinite chain, 2·||v| − |w||.
#[must_use]
pub fn bulk_gap(v: f64, w: f64) -> f64 {
    2.0 * (v.abs() - w.abs()).abs()
}

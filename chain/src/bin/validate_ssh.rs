// SPDX-License-Identifier: AGPL-3.0-only

//! SSH Chain Validation — Edge States and Bulk–Boundary Correspondence
//!
//! Validates the open Su–Schrieffer–Heeger chain end to end:
//!
//! **Hamiltonian**: real symmetric, zero diagonal, 2N−1 bonds alternating
//! −v (intracell) and −w (intercell).
//!
//! **Spectrum**: ascending, orthonormal eigenvectors, zero trace, and
//! chiral pairing E ↔ −E from the sublattice symmetry.
//!
//! **Edge states**: ≥ 2 boundary-localized states for w > v, none for
//! v > w, and a sweep in w that switches on the pair past w = v.
//!
//! # Provenance
//!
//! Su, Schrieffer & Heeger (1979) Phys. Rev. Lett. 42, 1698
//! Asbóth, Oroszlány & Pályi (2016) Lecture Notes in Physics 919, ch. 1

use ssh_chain::report;
use ssh_chain::spectral::{
    self, build_hamiltonian, detect_edge_states, expected_zero_modes, solve, EdgeDetectorConfig,
    LatticeConfig, Spectrum,
};
use ssh_chain::sweep::{self, SweepConfig};
use ssh_chain::tolerances;
use ssh_chain::validation::ValidationHarness;

fn main() {
    report::init_tracing();
    report::print_banner(
        "SSH Chain Validation — edge states",
        "spectral invariants + topological/trivial scenarios",
    );

    let mut harness = ValidationHarness::new("ssh_chain");

    check_hamiltonian_structure(&mut harness);
    check_spectrum_invariants(&mut harness);
    check_minimal_cell(&mut harness);
    check_topological_edges(&mut harness);
    check_trivial_no_edges(&mut harness);
    check_degenerate_rotation(&mut harness);
    check_sweep_trend(&mut harness);
    check_bulk_boundary(&mut harness);

    println!();
    harness.finish();
}

/// Build and solve, recording a failed check on error.
fn spectrum_or_fail(
    harness: &mut ValidationHarness,
    label: &str,
    config: &LatticeConfig,
) -> Option<Spectrum> {
    match build_hamiltonian(config).and_then(solve) {
        Ok(s) => Some(s),
        Err(e) => {
            println!("  ERROR: {e}");
            harness.check_bool(label, false);
            None
        }
    }
}

/// Hamiltonian: symmetric, traceless, nearest-neighbour bonds only.
fn check_hamiltonian_structure(harness: &mut ValidationHarness) {
    println!("[1] Hamiltonian Structure");

    let config = LatticeConfig::new(10, 1.0, 0.5);
    let h = match build_hamiltonian(&config) {
        Ok(h) => h,
        Err(e) => {
            println!("  ERROR: {e}");
            harness.check_bool("Hamiltonian builds", false);
            return;
        }
    };

    let n = h.n_sites();
    let diag_max = (0..n).map(|i| h.get(i, i).abs()).fold(0.0, f64::max);
    let beyond_nn = (0..n)
        .flat_map(|i| (0..n).map(move |j| (i, j)))
        .filter(|&(i, j)| i.abs_diff(j) > 1)
        .map(|(i, j)| h.get(i, j).abs())
        .fold(0.0, f64::max);

    println!("  N_cells=10, v=1.0, w=0.5 → {n}×{n}, {} bonds", h.bond_count());

    harness.check_count("matrix size 2·N_cells", n, 20);
    harness.check_bool("Hamiltonian symmetric", h.is_symmetric(tolerances::EXACT_F64));
    harness.check_upper("max |diagonal|", diag_max, tolerances::EXACT_F64);
    harness.check_upper("max |H_ij| beyond nearest neighbour", beyond_nn, tolerances::EXACT_F64);
    harness.check_count("bond count 2N−1", h.bond_count(), 19);
    harness.check_abs("intracell H[0][1] = −v", h.get(0, 1), -1.0, tolerances::EXACT_F64);
    harness.check_abs("intercell H[1][2] = −w", h.get(1, 2), -0.5, tolerances::EXACT_F64);
    println!();
}

/// Spectrum: size, order, trace, chiral pairing, orthonormality, determinism.
fn check_spectrum_invariants(harness: &mut ValidationHarness) {
    println!("[2] Spectrum Invariants");

    for &(v, w) in &[(1.0, 0.5), (1.0, 1.5), (0.7, 0.7)] {
        let config = LatticeConfig::new(30, v, w);
        let Some(spectrum) = spectrum_or_fail(harness, "spectrum solves", &config) else {
            continue;
        };

        let ascending = spectrum.eigenvalues().windows(2).all(|p| p[0] <= p[1]);
        let trace_rel = spectrum.trace().abs() / spectrum.absolute_sum().max(1.0);
        let chiral = spectrum.max_chiral_mismatch();
        let ortho = spectrum.orthonormality_defect();

        println!(
            "  v={v}, w={w}: E ∈ [{:.4}, {:.4}], |trace|/Σ|E| = {trace_rel:.2e}, \
             chiral = {chiral:.2e}, ortho = {ortho:.2e}",
            spectrum.eigenvalues().first().copied().unwrap_or(0.0),
            spectrum.eigenvalues().last().copied().unwrap_or(0.0),
        );

        harness.check_count(&format!("v={v} w={w}: spectrum size"), spectrum.len(), 60);
        harness.check_bool(&format!("v={v} w={w}: eigenvalues ascending"), ascending);
        harness.check_upper(&format!("v={v} w={w}: trace"), trace_rel, tolerances::TRACE_RELATIVE);
        harness.check_upper(
            &format!("v={v} w={w}: chiral pairing"),
            chiral,
            tolerances::CHIRAL_PAIRING_ABS,
        );
        harness.check_upper(
            &format!("v={v} w={w}: orthonormality"),
            ortho,
            tolerances::EIGH_ORTHONORMALITY,
        );

        if let Some(again) = spectrum_or_fail(harness, "spectrum solves", &config) {
            harness.check_bool(
                &format!("v={v} w={w}: eigenvalues reproducible"),
                again.eigenvalues() == spectrum.eigenvalues(),
            );
        }
    }
    println!();
}

/// One unit cell: a single −v bond, E = ±v.
fn check_minimal_cell(harness: &mut ValidationHarness) {
    println!("[3] Minimal Cell (N_cells = 1)");

    let config = LatticeConfig::new(1, 1.0, 0.8);
    let Some(spectrum) = spectrum_or_fail(harness, "minimal cell solves", &config) else {
        return;
    };
    let e = spectrum.eigenvalues();
    println!("  eigenvalues: {e:?}");

    if let Ok(h) = build_hamiltonian(&config) {
        harness.check_count("minimal cell bonds", h.bond_count(), 1);
        harness.check_abs("minimal cell H[0][1]", h.get(0, 1), -1.0, tolerances::EXACT_F64);
    }
    harness.check_count("minimal cell spectrum size", e.len(), 2);
    harness.check_abs("minimal cell E_0", e[0], -1.0, tolerances::EXACT_F64);
    harness.check_abs("minimal cell E_1", e[1], 1.0, tolerances::EXACT_F64);
    println!();
}

/// w > v: zero-mode pair localized on the two ends.
fn check_topological_edges(harness: &mut ValidationHarness) {
    println!("[4] Topological Chain (N_cells=40, v=1.0, w=1.5)");

    let config = LatticeConfig::new(tolerances::REGRESSION_N_CELLS, 1.0, 1.5);
    let Some(spectrum) = spectrum_or_fail(harness, "topological chain solves", &config) else {
        return;
    };
    let detector = EdgeDetectorConfig::default()
        .with_threshold(tolerances::REGRESSION_TOPOLOGICAL_THRESHOLD);
    let edges = detect_edge_states(&spectrum, &detector);

    for s in &edges.states {
        println!(
            "  state {:>2}: E = {:+.3e}, weight = {:.3}, side = {:?}, IPR = {:.3}",
            s.spectrum_index,
            s.energy,
            s.boundary_weight,
            s.side,
            spectrum.inverse_participation_ratio(s.spectrum_index)
        );
    }

    let max_edge_energy = edges
        .states
        .iter()
        .map(|s| s.energy.abs())
        .fold(0.0, f64::max);

    harness.check_at_least(
        "topological edge count",
        edges.count(),
        tolerances::TOPOLOGICAL_MIN_EDGE_STATES,
    );
    harness.check_upper("edge-state |E| (exponentially small)", max_edge_energy, 1e-4);
    println!();
}

/// v > w: every state is bulk.
fn check_trivial_no_edges(harness: &mut ValidationHarness) {
    println!("[5] Trivial Chain (N_cells=40, v=1.5, w=0.5)");

    let config = LatticeConfig::new(tolerances::REGRESSION_N_CELLS, 1.5, 0.5);
    let Some(spectrum) = spectrum_or_fail(harness, "trivial chain solves", &config) else {
        return;
    };
    let edges = detect_edge_states(&spectrum, &EdgeDetectorConfig::default());
    let min_abs = spectrum
        .eigenvalues()
        .iter()
        .map(|e| e.abs())
        .fold(f64::INFINITY, f64::min);

    println!("  edge count = {}, min |E| = {min_abs:.4}", edges.count());

    harness.check_count("trivial edge count", edges.count(), 0);
    harness.check_bool("trivial spectrum gapped (min |E| > 0.5)", min_abs > 0.5);
    println!();
}

/// A rotation inside the zero-mode pair keeps the summed boundary mass.
fn check_degenerate_rotation(harness: &mut ValidationHarness) {
    println!("[6] Degenerate Pair Rotation");

    let config = LatticeConfig::new(20, 1.0, 2.0);
    let Some(spectrum) = spectrum_or_fail(harness, "rotation chain solves", &config) else {
        return;
    };
    let Ok(pair) = spectrum.lowest_magnitude_indices(2) else {
        harness.check_bool("zero-mode pair available", false);
        return;
    };
    let window = tolerances::EDGE_WINDOW_SITES;
    let mass = |psi: &[f64]| {
        let (l, r) = spectral::boundary_weights(psi, window);
        l + r
    };

    let a = spectrum.eigenvector(pair[0]);
    let b = spectrum.eigenvector(pair[1]);
    let before = mass(a) + mass(b);

    let theta = 0.37f64;
    let (s, c) = theta.sin_cos();
    let ra: Vec<f64> = a.iter().zip(b).map(|(x, y)| c * x - s * y).collect();
    let rb: Vec<f64> = a.iter().zip(b).map(|(x, y)| s * x + c * y).collect();
    let after = mass(&ra) + mass(&rb);

    println!("  summed boundary mass: before = {before:.6}, after = {after:.6}");
    harness.check_abs("boundary mass rotation-invariant", after, before, tolerances::ITERATIVE_F64);
    println!();
}

/// Sweep w ∈ [0, 2] at v = 1: edge pair appears past the transition.
fn check_sweep_trend(harness: &mut ValidationHarness) {
    println!("[7] Hopping Sweep Trend (v=1.0, w ∈ [0, 2])");

    let config = SweepConfig::new(
        sweep::DEMO_N_CELLS,
        sweep::DEMO_V,
        sweep::linspace(sweep::DEMO_W_MIN, sweep::DEMO_W_MAX, 41),
    );
    let (par, seq) = match (sweep::run_sweep_parallel(&config), sweep::run_sweep(&config)) {
        (Ok(p), Ok(s)) => (p, s),
        (Err(e), _) | (_, Err(e)) => {
            println!("  ERROR: {e}");
            harness.check_bool("sweep runs", false);
            return;
        }
    };

    let weak_max = par
        .w_values
        .iter()
        .zip(&par.edge_counts)
        .filter(|&(&w, _)| w > 0.0 && w <= 0.8)
        .map(|(_, &c)| c)
        .max()
        .unwrap_or(0);
    let strong_min = par
        .w_values
        .iter()
        .zip(&par.edge_counts)
        .filter(|&(&w, _)| w >= 1.5)
        .map(|(_, &c)| c)
        .min()
        .unwrap_or(0);

    println!("  edge counts: {:?}", par.edge_counts);
    match par.transition_estimate(tolerances::TOPOLOGICAL_MIN_EDGE_STATES) {
        Some(w) => println!("  edge pair onset at w ≈ {w:.3}"),
        None => println!("  no edge pair found"),
    }

    harness.check_count("max edge count for 0 < w ≤ 0.8", weak_max, 0);
    harness.check_at_least(
        "min edge count for w ≥ 1.5",
        strong_min,
        tolerances::TOPOLOGICAL_MIN_EDGE_STATES,
    );
    harness.check_bool("parallel sweep equals sequential", par == seq);
    println!();
}

/// Edge count vs. bulk winding number across both phases.
fn check_bulk_boundary(harness: &mut ValidationHarness) {
    println!("[8] Bulk–Boundary Correspondence");

    for &(v, w) in &[(1.0, 0.3), (1.0, 0.6), (1.0, 1.6), (0.5, 1.5), (1.2, 2.0)] {
        let config = LatticeConfig::new(tolerances::REGRESSION_N_CELLS, v, w);
        let Some(spectrum) = spectrum_or_fail(harness, "bulk-boundary chain solves", &config)
        else {
            continue;
        };
        let count = detect_edge_states(&spectrum, &EdgeDetectorConfig::default()).count();
        let expected = expected_zero_modes(v, w);
        println!(
            "  v={v}, w={w}: phase = {}, winding = {}, edges = {count}",
            spectral::Phase::of(v, w),
            spectral::winding_number(v, w)
        );
        if expected == 0 {
            harness.check_count(&format!("v={v} w={w}: edges (trivial)"), count, 0);
        } else {
            harness.check_at_least(&format!("v={v} w={w}: edges ≥ 2·winding"), count, expected);
        }
    }
    println!();
}

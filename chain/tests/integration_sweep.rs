// SPDX-License-Identifier: AGPL-3.0-only

//! Integration tests: hopping sweep, parallel agreement, JSON export.

use ssh_chain::export;
use ssh_chain::spectral::{
    boundary_weights, build_hamiltonian, detect_edge_states, solve, EdgeDetectorConfig,
    LatticeConfig,
};
use ssh_chain::sweep::{self, SweepConfig};
use ssh_chain::tolerances::{LOW_ENERGY_BRANCHES, TOPOLOGICAL_MIN_EDGE_STATES};
use ssh_chain::SshError;
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ssh_chain_{name}_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn trend_config() -> SweepConfig {
    SweepConfig::new(40, 1.0, sweep::linspace(0.0, 2.0, 81))
}

#[test]
fn sweep_trend_switches_on_edge_pair() {
    let result = sweep::run_sweep(&trend_config()).expect("sweep runs");
    assert_eq!(result.len(), 81);

    for (&w, &count) in result.w_values.iter().zip(&result.edge_counts) {
        if w > 0.0 && w <= 0.8 {
            assert_eq!(count, 0, "w={w}: deep trivial phase has no edge states");
        }
        if w >= 1.5 {
            assert!(
                count >= TOPOLOGICAL_MIN_EDGE_STATES,
                "w={w}: deep topological phase needs an edge pair, got {count}"
            );
        }
    }

    let onset = result
        .transition_estimate(TOPOLOGICAL_MIN_EDGE_STATES)
        .expect("edge pair persists to the end of the sweep");
    assert!(onset > 0.8 && onset <= 1.5, "onset at w={onset}");
}

#[test]
fn low_energy_branches_ordered_by_magnitude() {
    let result = sweep::run_sweep(&trend_config()).expect("sweep runs");
    for row in &result.low_energies {
        assert!(row.windows(2).all(|p| p[0].abs() <= p[1].abs()), "{row:?}");
    }

    // the lowest branch closes to zero deep in the topological phase
    let last = result.low_energies.last().expect("non-empty sweep");
    assert!(last[0].abs() < 1e-6, "|E_min| at w=2: {}", last[0]);

    // and stays gapped deep in the trivial phase (w=0.25 → gap ≥ |v−w|)
    let idx = result
        .w_values
        .iter()
        .position(|&w| (w - 0.25).abs() < 1e-12)
        .expect("w=0.25 in grid");
    assert!(result.low_energies[idx][0].abs() > 0.7);
}

#[test]
fn parallel_sweep_matches_sequential() {
    let config = SweepConfig::new(30, 1.0, sweep::linspace(0.0, 2.0, 37));
    let seq = sweep::run_sweep(&config).expect("sequential");
    let par = sweep::run_sweep_parallel(&config).expect("parallel");
    assert_eq!(par, seq);
    assert_eq!(par.w_values, config.w_values, "sweep order preserved");
}

#[test]
fn default_demo_shape() {
    let config = SweepConfig::default_demo();
    assert_eq!(config.n_cells, 40);
    assert_eq!(config.w_values.len(), 301);
    assert_eq!(config.w_values.first().copied(), Some(0.0));
    assert_eq!(config.w_values.last().copied(), Some(2.0));
}

#[test]
fn zero_intercell_hopping_counts_end_dimers() {
    let detector = EdgeDetectorConfig::default();
    let spectrum = solve(build_hamiltonian(&LatticeConfig::new(40, 1.0, 0.0)).expect("valid"))
        .expect("solver converges");
    let edges = detect_edge_states(&spectrum, &detector);

    // isolated dimers: only the two end dimers touch a boundary window
    let count = edges.count();
    assert!(count > 0 && count <= 4 && count % 2 == 0, "count {count}");
    for s in &edges.states {
        assert!((s.energy.abs() - 1.0).abs() < 1e-9, "E = {}", s.energy);
        assert!(s.boundary_weight > 0.99, "weight {}", s.boundary_weight);
    }

    // each window holds exactly its sites' worth of mass over the whole basis
    let (left, right) = (0..spectrum.len())
        .map(|i| boundary_weights(spectrum.eigenvector(i), detector.edge_size_sites))
        .fold((0.0, 0.0), |(l, r), (pl, pr)| (l + pl, r + pr));
    assert!((left - 2.0).abs() < 1e-9 && (right - 2.0).abs() < 1e-9);

    let point = sweep::evaluate_point(40, 1.0, 0.0, &detector).expect("point");
    assert_eq!(point.edge_count, count);
    let demo = sweep::run_sweep(&SweepConfig::new(40, 1.0, vec![0.0])).expect("sweep runs");
    assert_eq!(demo.edge_counts, vec![count], "demo sweep starts at w=0");
}

#[test]
fn too_small_chain_fails_before_sweeping() {
    let config = SweepConfig::new(2, 1.0, vec![0.5, 1.5]);
    assert_eq!(
        sweep::run_sweep(&config),
        Err(SshError::InsufficientSpectrumSize {
            n_sites: 4,
            required: LOW_ENERGY_BRANCHES,
        })
    );
    assert_eq!(sweep::run_sweep_parallel(&config), sweep::run_sweep(&config));
}

#[test]
fn invalid_sweep_rejected() {
    let empty_chain = SweepConfig::new(0, 1.0, vec![1.0]);
    assert!(matches!(
        sweep::run_sweep(&empty_chain),
        Err(SshError::InvalidConfiguration(_))
    ));

    let bad_w = SweepConfig::new(10, 1.0, vec![0.5, f64::NAN]);
    assert!(matches!(
        sweep::run_sweep_parallel(&bad_w),
        Err(SshError::InvalidConfiguration(_))
    ));
}

#[test]
fn empty_w_list_gives_empty_result() {
    let result = sweep::run_sweep(&SweepConfig::new(10, 1.0, Vec::new())).expect("no points");
    assert!(result.is_empty());
    assert_eq!(result.max_edge_count(), 0);
    assert_eq!(result.transition_estimate(TOPOLOGICAL_MIN_EDGE_STATES), None);
}

#[test]
fn sweep_json_written_to_chosen_dir() {
    let dir = scratch_dir("json");
    let path = dir.join(export::SWEEP_JSON_FILE);
    let config = SweepConfig::new(10, 1.0, sweep::linspace(0.0, 2.0, 9));
    let result = sweep::run_sweep(&config).expect("sweep runs");

    export::save_sweep_json(&result, &path).expect("JSON written");

    let text = std::fs::read_to_string(&path).expect("read back");
    let json: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
    assert_eq!(json["n_cells"], 10);
    assert_eq!(json["w_values"].as_array().map(Vec::len), Some(9));
    assert_eq!(json["edge_counts"].as_array().map(Vec::len), Some(9));
    let rows = json["low_energies"].as_array().expect("array");
    assert_eq!(rows.len(), 9);
    assert!(rows
        .iter()
        .all(|r| r.as_array().map(Vec::len) == Some(LOW_ENERGY_BRANCHES)));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn empty_sweep_not_exported() {
    let dir = scratch_dir("empty");
    let result = sweep::run_sweep(&SweepConfig::new(10, 1.0, Vec::new())).expect("no points");
    let err = export::export_figures(&result, &export::ExportPaths::in_dir(&dir)).unwrap_err();
    assert!(matches!(err, SshError::Export(_)));
}

#[test]
fn charts_rendered_and_overwritten() {
    let dir = scratch_dir("charts");
    let config = SweepConfig::new(10, 1.0, sweep::linspace(0.0, 2.0, 21));
    let result = sweep::run_sweep(&config).expect("sweep runs");
    let paths = export::ExportPaths::in_dir(&dir);
    assert_eq!(
        paths.energy_chart.file_name().and_then(|n| n.to_str()),
        Some(export::ENERGY_CHART_FILE)
    );
    assert_eq!(
        paths.edge_count_chart.file_name().and_then(|n| n.to_str()),
        Some(export::EDGE_COUNT_CHART_FILE)
    );

    for pass in 0..2 {
        export::export_figures(&result, &paths).expect("charts written");
        for chart in [&paths.energy_chart, &paths.edge_count_chart] {
            let len = std::fs::metadata(chart).map(|m| m.len()).unwrap_or(0);
            assert!(len > 0, "pass {pass}: {} empty or missing", chart.display());
        }
    }

    let _ = std::fs::remove_dir_all(&dir);
}

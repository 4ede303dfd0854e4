// SPDX-License-Identifier: AGPL-3.0-only

//! Sweep output: two PNG charts and a JSON results file.
//!
//! Chart file names are fixed (`ssh_energy_vs_w.png`,
//! `ssh_edgecount_vs_w.png`) and overwritten on every run; the directory is
//! always a caller parameter so separate runs can be kept apart.

use crate::error::SshError;
use crate::sweep::SweepResult;
use crate::tolerances::LOW_ENERGY_BRANCHES;
use plotters::prelude::*;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Energy-vs-w chart file name.
pub const ENERGY_CHART_FILE: &str = "ssh_energy_vs_w.png";
/// Edge-count-vs-w chart file name.
pub const EDGE_COUNT_CHART_FILE: &str = "ssh_edgecount_vs_w.png";
/// Sweep results file name.
pub const SWEEP_JSON_FILE: &str = "ssh_sweep.json";

const CHART_SIZE: (u32, u32) = (1200, 700);

/// Output locations for the two charts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportPaths {
    /// Energy branches vs w.
    pub energy_chart: PathBuf,
    /// Edge count vs w.
    pub edge_count_chart: PathBuf,
}

impl ExportPaths {
    /// Fixed file names inside `dir`.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            energy_chart: dir.join(ENERGY_CHART_FILE),
            edge_count_chart: dir.join(EDGE_COUNT_CHART_FILE),
        }
    }
}

fn ensure_parent(path: &Path) -> Result<(), SshError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| SshError::Export(format!("create {}: {e}", parent.display())))?;
    }
    Ok(())
}

fn export_err(path: &Path, e: &dyn Error) -> SshError {
    SshError::Export(format!("{}: {e}", path.display()))
}

/// Render both charts.
///
/// # Errors
///
/// Returns [`SshError::Export`] for an empty sweep or any drawing/IO
/// failure.
pub fn export_figures(result: &SweepResult, paths: &ExportPaths) -> Result<(), SshError> {
    if result.is_empty() {
        return Err(SshError::Export("sweep has no points to plot".into()));
    }
    ensure_parent(&paths.energy_chart)?;
    ensure_parent(&paths.edge_count_chart)?;

    render_energy_chart(result, &paths.energy_chart)
        .map_err(|e| export_err(&paths.energy_chart, e.as_ref()))?;
    render_edge_count_chart(result, &paths.edge_count_chart)
        .map_err(|e| export_err(&paths.edge_count_chart, e.as_ref()))?;
    Ok(())
}

/// Write the sweep tables as pretty JSON.
///
/// # Errors
///
/// Returns [`SshError::Export`] if serialization or the write fails.
pub fn save_sweep_json(result: &SweepResult, path: &Path) -> Result<(), SshError> {
    ensure_parent(path)?;
    let json = serde_json::to_string_pretty(result)
        .map_err(|e| SshError::Export(format!("JSON serialize: {e}")))?;
    std::fs::write(path, json).map_err(|e| export_err(path, &e))
}

fn w_range(w_values: &[f64]) -> (f64, f64) {
    let lo = w_values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = w_values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if (hi - lo).abs() < 1e-12 {
        (lo - 0.5, hi + 0.5)
    } else {
        (lo, hi)
    }
}

fn render_energy_chart(result: &SweepResult, out_path: &Path) -> Result<(), Box<dyn Error>> {
    let (w_min, w_max) = w_range(&result.w_values);
    let e_max = result
        .low_energies
        .iter()
        .flatten()
        .fold(0.0f64, |m, e| m.max(e.abs()))
        .max(1e-3)
        * 1.1;

    let root = BitMapBackend::new(out_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!(
                "SSH low-energy spectrum (N_cells={}, v={})",
                result.n_cells, result.v
            ),
            ("sans-serif", 22),
        )
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(w_min..w_max, -e_max..e_max)?;

    chart
        .configure_mesh()
        .x_desc("intercell hopping w")
        .y_desc("E")
        .draw()?;

    for k in 0..LOW_ENERGY_BRANCHES {
        let color = Palette99::pick(k).to_rgba();
        let pts: Vec<(f64, f64)> = result
            .w_values
            .iter()
            .copied()
            .zip(result.branch(k))
            .collect();
        chart
            .draw_series(LineSeries::new(pts, color.stroke_width(2)))?
            .label(format!("|E| rank {}", k + 1))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK.mix(0.4))
        .draw()?;
    root.present()?;
    Ok(())
}

/// Staircase points: each count holds until the next w.
fn step_points(w_values: &[f64], counts: &[usize]) -> Vec<(f64, f64)> {
    let mut pts = Vec::with_capacity(2 * counts.len());
    for (&w, &c) in w_values.iter().zip(counts) {
        if let Some(&(_, prev)) = pts.last() {
            pts.push((w, prev));
        }
        pts.push((w, c as f64));
    }
    pts
}

fn render_edge_count_chart(result: &SweepResult, out_path: &Path) -> Result<(), Box<dyn Error>> {
    let (w_min, w_max) = w_range(&result.w_values);
    let y_top = result.max_edge_count().max(4);

    let root = BitMapBackend::new(out_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!(
                "SSH edge-state count (N_cells={}, v={})",
                result.n_cells, result.v
            ),
            ("sans-serif", 22),
        )
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(w_min..w_max, -0.2f64..(y_top as f64 + 0.5))?;

    chart
        .configure_mesh()
        .x_desc("intercell hopping w")
        .y_desc("edge states")
        .y_labels(y_top + 1)
        .y_label_formatter(&|y| format!("{y:.0}"))
        .draw()?;

    chart.draw_series(LineSeries::new(
        step_points(&result.w_values, &result.edge_counts),
        BLUE.stroke_width(2),
    ))?;

    // gap closing of the infinite chain
    if result.v.abs() >= w_min && result.v.abs() <= w_max {
        let wc = result.v.abs();
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(wc, 0.0), (wc, y_top as f64)],
            BLACK.mix(0.5),
        )))?;
    }

    root.present()?;
    Ok(())
}

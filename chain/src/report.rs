// SPDX-License-Identifier: AGPL-3.0-only

//! Console output for the binaries: tracing setup, banners, summary tables.

use crate::regression::RegressionReport;
use crate::sweep::SweepResult;
use crate::tolerances::TOPOLOGICAL_MIN_EDGE_STATES;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the `fmt` subscriber at `info` level.
///
/// The filter is fixed; no environment variable is consulted. Calling this
/// twice is harmless (the second install is ignored).
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(EnvFilter::new("info"))
        .try_init();
}

/// Boxed two-line banner.
pub fn print_banner(title: &str, subtitle: &str) {
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║  {title:<58}  ║");
    println!("║  {subtitle:<58}  ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();
}

fn summary_row(label: &str, value: &str) {
    println!("║  {label:<18}{value:<42}║");
}

/// Summary box for a finished sweep.
pub fn print_sweep_summary(result: &SweepResult, wall_s: f64) {
    let w_first = result.w_values.first().copied().unwrap_or(f64::NAN);
    let w_last = result.w_values.last().copied().unwrap_or(f64::NAN);
    let transition = result
        .transition_estimate(TOPOLOGICAL_MIN_EDGE_STATES)
        .map_or_else(|| "none".to_string(), |w| format!("{w:.4}"));

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║  SSH hopping sweep                                           ║");
    println!("╠══════════════════════════════════════════════════════════════╣");
    summary_row("N_cells:", &result.n_cells.to_string());
    summary_row("v:", &format!("{:.4}", result.v));
    summary_row("w range:", &format!("[{w_first:.3}, {w_last:.3}]"));
    summary_row("points:", &result.len().to_string());
    summary_row("max edge count:", &result.max_edge_count().to_string());
    summary_row("edge onset (w):", &transition);
    summary_row("wall time:", &format!("{wall_s:.2}s"));
    if w_first == 0.0 {
        summary_row("note:", "w=0 isolates the end dimers");
    }
    println!("╚══════════════════════════════════════════════════════════════╝");
}

/// Per-case table followed by the check summary.
pub fn print_regression_report(report: &RegressionReport) {
    println!();
    println!("  Regression cases:");
    println!(
        "  {:<12} {:>6} {:>6} {:>12} {:>8} {:>8}  status",
        "case", "v", "w", "phase", "winding", "edges"
    );
    for o in &report.outcomes {
        let edges = match &o.count {
            Ok(n) => n.to_string(),
            Err(_) => "error".to_string(),
        };
        let status = if o.passed { "ok" } else { "WARNING" };
        println!(
            "  {:<12} {:>6.2} {:>6.2} {:>12} {:>8} {:>8}  {status}",
            o.name,
            o.v,
            o.w,
            o.phase.to_string(),
            o.winding,
            edges
        );
    }
    println!();
    print!("{}", report.harness.format_summary());
    if !report.all_passed() {
        println!(
            "  WARNING: regression mismatches: {}",
            report.harness.failed_labels().join(", ")
        );
    }
}

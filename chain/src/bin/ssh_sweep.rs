// SPDX-License-Identifier: AGPL-3.0-only

//! SSH hopping sweep with edge-state detection.
//!
//! Sweeps the intercell hopping w at fixed intracell hopping v, records the
//! six eigenvalues closest to zero and the edge-state count at each point,
//! writes the two charts plus a JSON results file, then runs the
//! topological/trivial regression cases.
//!
//! # Usage
//!
//! ```bash
//! cargo run --release --bin ssh_sweep -- \
//!   --cells=40 --v=1.0 --w-min=0.0 --w-max=2.0 --points=301 --output-dir=results
//! ```
//!
//! Every flag is optional; the defaults above are the standard demo.

use ssh_chain::export::{self, ExportPaths};
use ssh_chain::regression;
use ssh_chain::report;
use ssh_chain::sweep::{self, SweepConfig};
use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

struct CliArgs {
    n_cells: usize,
    v: f64,
    w_min: f64,
    w_max: f64,
    points: usize,
    output_dir: PathBuf,
}

fn parse_args() -> Result<CliArgs, Box<dyn Error>> {
    let mut args = CliArgs {
        n_cells: sweep::DEMO_N_CELLS,
        v: sweep::DEMO_V,
        w_min: sweep::DEMO_W_MIN,
        w_max: sweep::DEMO_W_MAX,
        points: sweep::DEMO_W_POINTS,
        output_dir: PathBuf::from("."),
    };

    for arg in std::env::args().skip(1) {
        if let Some(val) = arg.strip_prefix("--cells=") {
            args.n_cells = val.parse()?;
        } else if let Some(val) = arg.strip_prefix("--v=") {
            args.v = val.parse()?;
        } else if let Some(val) = arg.strip_prefix("--w-min=") {
            args.w_min = val.parse()?;
        } else if let Some(val) = arg.strip_prefix("--w-max=") {
            args.w_max = val.parse()?;
        } else if let Some(val) = arg.strip_prefix("--points=") {
            args.points = val.parse()?;
        } else if let Some(val) = arg.strip_prefix("--output-dir=") {
            args.output_dir = PathBuf::from(val);
        } else {
            eprintln!("  WARNING: ignoring unknown argument '{arg}'");
        }
    }

    Ok(args)
}

fn main() -> Result<(), Box<dyn Error>> {
    report::init_tracing();
    let args = parse_args()?;

    report::print_banner(
        "SSH chain — topological edge states",
        "open-boundary sweep of the intercell hopping w",
    );

    let config = SweepConfig::new(
        args.n_cells,
        args.v,
        sweep::linspace(args.w_min, args.w_max, args.points),
    );
    println!(
        "  N_cells={}, v={}, {} points in [{}, {}], rayon threads: {}",
        config.n_cells,
        config.v,
        config.w_values.len(),
        args.w_min,
        args.w_max,
        rayon::current_num_threads()
    );
    println!();

    let t0 = Instant::now();
    let result = sweep::run_sweep_parallel(&config)?;
    report::print_sweep_summary(&result, t0.elapsed().as_secs_f64());

    let paths = ExportPaths::in_dir(&args.output_dir);
    export::export_figures(&result, &paths)?;
    let json_path = args.output_dir.join(export::SWEEP_JSON_FILE);
    export::save_sweep_json(&result, &json_path)?;
    println!();
    println!("  Energy chart:     {}", paths.energy_chart.display());
    println!("  Edge-count chart: {}", paths.edge_count_chart.display());
    println!("  Results JSON:     {}", json_path.display());

    let regression = regression::run_regression();
    report::print_regression_report(&regression);

    Ok(())
}

//! Export the whole street graph for the visualisation layer.
//!
//! Writes `network.json` (`{directed, nodes: [{id, label}], edges: [{source,
//! target, weight}]}`) to `--out`, default `output/route/`.
//!
//! Run with: `cargo run -p route --bin export_network -- --mode S`

mod data;

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use sr_route::{RouteMode, RoutePlanner};

#[derive(Parser, Debug)]
#[command(author, version, about = "Export the street graph as JSON")]
struct Cli {
    #[arg(long)]
    intersections: Option<PathBuf>,

    #[arg(long)]
    addresses: Option<PathBuf>,

    #[arg(long)]
    config: Option<PathBuf>,

    /// Weight model: "S" (distance) or "F" (speed).
    #[arg(long, default_value = "S")]
    mode: String,

    #[arg(long, default_value = "output/route")]
    out: PathBuf,
}

fn main() -> Result<()> {
    data::init_tracing();
    let cli = Cli::parse();

    let config = data::load_config(cli.config.as_deref())?;
    let dataset = data::load_dataset(cli.intersections.as_deref(), cli.addresses.as_deref())?;
    let planner = RoutePlanner::new(dataset, config);

    let graph = planner.graph(RouteMode::from_flag(&cli.mode))?;
    let export = graph.to_export(|i| i.to_string());

    fs::create_dir_all(&cli.out)?;
    let path = cli.out.join("network.json");
    fs::write(&path, export.to_json()?)?;
    println!(
        "Wrote {} ({} nodes, {} edges)",
        path.display(),
        export.nodes.len(),
        export.edges.len()
    );

    Ok(())
}

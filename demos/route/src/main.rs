//! route — turn-by-turn directions between two street addresses.
//!
//! Without `--intersections`/`--addresses` a small bundled sample of central
//! Madrid is used; without `--from`/`--to` the known address labels are
//! listed instead.
//!
//! Run with:
//! `cargo run -p route -- --from "CALLE MAYOR NUM0001" --to "CALLE DEL ARENAL NUM0010" --mode S`

mod data;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use sr_network::AddressBook;
use sr_route::{RouteMode, RoutePlanner};

#[derive(Parser, Debug)]
#[command(author, version, about = "Turn-by-turn directions between two street addresses")]
struct Cli {
    /// Intersections CSV (requires --addresses).
    #[arg(long)]
    intersections: Option<PathBuf>,

    /// Addresses CSV (requires --intersections).
    #[arg(long)]
    addresses: Option<PathBuf>,

    /// JSON planner configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Origin address label, e.g. "CALLE MAYOR NUM0001".
    #[arg(long = "from")]
    from: Option<String>,

    /// Destination address label.
    #[arg(long = "to")]
    to: Option<String>,

    /// "S" for shortest, "F" for fastest.
    #[arg(long, default_value = "F")]
    mode: String,
}

fn main() -> Result<()> {
    data::init_tracing();
    let cli = Cli::parse();

    let config = data::load_config(cli.config.as_deref())?;
    let dataset = data::load_dataset(cli.intersections.as_deref(), cli.addresses.as_deref())?;
    let planner = RoutePlanner::new(dataset, config);

    let (Some(from), Some(to)) = (cli.from.as_deref(), cli.to.as_deref()) else {
        println!("Known addresses:");
        for label in AddressBook::from_records(&planner.dataset().addresses).labels() {
            println!("  {label}");
        }
        return Ok(());
    };

    let mode = RouteMode::from_flag(&cli.mode);
    let t0 = Instant::now();
    let directions = planner
        .plan(from, to, mode)
        .with_context(|| format!("failed to plan a route from {from:?} to {to:?}"))?;

    println!(
        "{mode} route: {} intersections, {:.1} m (planned in {:.1} ms)",
        directions.path.len(),
        directions.total_meters(),
        t0.elapsed().as_secs_f64() * 1e3,
    );
    print!("{directions}");

    Ok(())
}

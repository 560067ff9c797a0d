//! End-to-end route planning between two address labels.
//!
//! # Request flow
//!
//! ```text
//! labels ─► parse_address ─► AddressBook::resolve ─► nearest intersection
//!        ─► StreetNetwork::build ─► graph(mode) ─► shortest_path ─► narrate
//! ```
//!
//! The planner owns only the immutable [`Dataset`].  Every call to
//! [`RoutePlanner::plan`] rebuilds the network and the graph from it, so no
//! state is carried from one request to the next.

use std::fmt;
use std::path::Path;

use sr_graph::GraphError;
use sr_network::{
    AddressBook, AddressRecord, Intersection, IntersectionRecord, NetworkConfig, SpeedTable,
    StreetClasses, StreetGraph, StreetNetwork, WeightModel, load_addresses_csv,
    load_intersections_csv, parse_address,
};

use crate::{Instruction, NarratorConfig, RouteError, RouteResult, narrate};

// ── RouteMode ─────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouteMode {
    /// Minimise straight-line length.
    Shortest,
    /// Minimise the sum of street speed limits.
    #[default]
    Fastest,
}

impl RouteMode {
    /// `"S"` → shortest, `"F"` → fastest (case-insensitive).  Anything else
    /// falls back to fastest.
    pub fn from_flag(flag: &str) -> Self {
        match flag.trim().to_ascii_uppercase().as_str() {
            "S" | "SHORTEST" => RouteMode::Shortest,
            "F" | "FASTEST" => RouteMode::Fastest,
            other => {
                tracing::warn!(flag = other, "unrecognised route mode, using fastest");
                RouteMode::Fastest
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RouteMode::Shortest => "shortest",
            RouteMode::Fastest => "fastest",
        }
    }
}

impl fmt::Display for RouteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── PlannerConfig ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    pub network: NetworkConfig,
    pub narrator: NarratorConfig,
    /// Class → speed table used by [`RouteMode::Fastest`].
    pub speed_table: SpeedTable,
}

// ── Dataset ───────────────────────────────────────────────────────────────────

/// The cleaned input rows a planner works from.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub intersections: Vec<IntersectionRecord>,
    pub addresses: Vec<AddressRecord>,
}

impl Dataset {
    pub fn new(intersections: Vec<IntersectionRecord>, addresses: Vec<AddressRecord>) -> Self {
        Self { intersections, addresses }
    }

    /// Load both CSV files (see [`sr_network::loader`] for the format).
    pub fn load(intersections: &Path, addresses: &Path) -> RouteResult<Self> {
        Ok(Self {
            intersections: load_intersections_csv(intersections)?,
            addresses: load_addresses_csv(addresses)?,
        })
    }
}

// ── Directions ────────────────────────────────────────────────────────────────

/// A planned route: the intersections visited and the narrative.
#[derive(Clone, Debug)]
pub struct Directions {
    pub mode: RouteMode,
    pub path: Vec<Intersection>,
    pub instructions: Vec<Instruction>,
    /// Sum of edge weights along `path` under `mode`'s weight model.
    pub total_weight: f64,
}

impl Directions {
    /// Total narrated length in metres, including the walks to and from the
    /// addresses.
    pub fn total_meters(&self) -> f64 {
        self.instructions.iter().map(Instruction::meters).sum()
    }
}

impl fmt::Display for Directions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.instructions.iter().enumerate() {
            writeln!(f, "{:>3}. {step}", i + 1)?;
        }
        Ok(())
    }
}

// ── RoutePlanner ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct RoutePlanner {
    dataset: Dataset,
    config: PlannerConfig,
}

impl RoutePlanner {
    pub fn new(dataset: Dataset, config: PlannerConfig) -> Self {
        Self { dataset, config }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// The weight model behind `mode`.
    pub fn weight_model(&self, mode: RouteMode) -> WeightModel {
        match mode {
            RouteMode::Shortest => WeightModel::Distance,
            RouteMode::Fastest => WeightModel::speed(
                self.config.speed_table.clone(),
                StreetClasses::from_addresses(&self.dataset.addresses),
            ),
        }
    }

    /// Build the network and its graph under `mode`.
    pub fn graph(&self, mode: RouteMode) -> RouteResult<StreetGraph> {
        let network = StreetNetwork::build(&self.dataset.intersections, &self.config.network)?;
        Ok(network.graph(&self.weight_model(mode))?)
    }

    /// Plan a route from `origin` to `destination`, both full address labels
    /// such as `"CALLE DE ALCALA NUM0012"`.
    pub fn plan(&self, origin: &str, destination: &str, mode: RouteMode) -> RouteResult<Directions> {
        let origin_street = parse_address(origin)?.name;
        let destination_street = parse_address(destination)?.name;

        let book = AddressBook::from_records(&self.dataset.addresses);
        let origin_coord = book.resolve(origin)?;
        let destination_coord = book.resolve(destination)?;

        let network = StreetNetwork::build(&self.dataset.intersections, &self.config.network)?;
        let (from, from_cm) = network.nearest_intersection(origin_coord)?;
        let (to, to_cm) = network.nearest_intersection(destination_coord)?;

        let graph = network.graph(&self.weight_model(mode))?;
        let path = graph.shortest_path(from, to).map_err(|e| match e {
            GraphError::RouteNotFound { .. } => RouteError::RouteNotFound {
                from: origin.trim().to_owned(),
                to: destination.trim().to_owned(),
            },
            other => RouteError::Graph(other),
        })?;

        let mut instructions = Vec::with_capacity(path.len() + 2);
        instructions.push(Instruction::Start { street: origin_street, meters: from_cm / 100.0 });
        instructions.extend(narrate(path.vertices(), &self.config.narrator));
        instructions.push(Instruction::Finish { street: destination_street, meters: to_cm / 100.0 });
        instructions.push(Instruction::Arrive);

        let total_weight = path.weight();
        tracing::info!(
            mode = mode.as_str(),
            from = %from,
            to = %to,
            hops = path.len().saturating_sub(1),
            total_weight,
            "route planned"
        );

        Ok(Directions {
            mode,
            path: path.into_vertices(),
            instructions,
            total_weight,
        })
    }
}

//! `sr-route` — address-to-address routes and their narration.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`narrator`] | `Instruction`, `TurnRule`, `NarratorConfig`, `narrate`       |
//! | [`planner`]  | `RoutePlanner`, `RouteMode`, `PlannerConfig`, `Directions`   |
//! | [`error`]    | `RouteError`, `RouteResult<T>`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on configuration types.    |

pub mod error;
pub mod narrator;
pub mod planner;


pub use error::{RouteError, RouteResult};
pub use narrator::{
    DEFAULT_ROUNDABOUT_THRESHOLD, Instruction, NarratorConfig, TurnDirection, TurnRule, narrate,
};
pub use planner::{Dataset, Directions, PlannerConfig, RouteMode, RoutePlanner};

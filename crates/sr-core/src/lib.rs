//! `sr-core` — foundational types for the `street-router` workspace.
//!
//! This crate is a dependency of every other `sr-*` crate.  It has no `sr-*`
//! dependencies and only `thiserror` (plus optional `serde`) from outside.
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `StreetCode`, `NodeId`                                |
//! | [`geo`]     | `Coord` (planar, centimetres), `GeoPoint` (WGS-84)    |
//! | [`error`]   | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{Coord, GeoPoint};
pub use ids::{NodeId, StreetCode};

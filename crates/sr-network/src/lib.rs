//! `sr-network` — from raw intersection records to a routable street graph.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                   |
//! |------------------|------------------------------------------------------------|
//! | [`record`]       | `IntersectionRecord`, `AddressRecord`                      |
//! | [`loader`]       | CSV loaders for both record types                          |
//! | [`dedup`]        | `merge_nearby`, `MergeMode`                                |
//! | [`intersection`] | `Intersection` (identity = coordinates), `IntersectionIndex` |
//! | [`street`]       | `Street`, `StreetIndex`                                    |
//! | [`weight`]       | `WeightModel`, `SpeedTable`, `StreetClasses`               |
//! | [`network`]      | `NetworkConfig`, `StreetNetwork` — graph assembly          |
//! | [`address`]      | `AddressBook`, `parse_address`                             |
//! | [`error`]        | `NetworkError`, `NetworkResult<T>`                         |
//!
//! # Pipeline
//!
//! ```text
//! records ─► merge_nearby ─► IntersectionIndex ─► StreetIndex ─► Graph<Intersection, StreetCode>
//! ```
//!
//! Everything is an explicit value: a [`StreetNetwork`] is built per request
//! and passed to whoever needs it.  Nothing is cached between builds.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on configuration types.    |

pub mod address;
pub mod dedup;
pub mod error;
pub mod intersection;
pub mod loader;
pub mod network;
pub mod record;
pub mod street;
pub mod weight;

#[cfg(test)]
mod tests;

pub use address::{AddressBook, AddressKind, ParsedAddress, parse_address};
pub use dedup::{DEFAULT_MERGE_RADIUS_CM, MergeMode, merge_nearby};
pub use error::{NetworkError, NetworkResult};
pub use intersection::{Intersection, IntersectionIndex};
pub use loader::{
    load_addresses_csv, load_addresses_reader, load_intersections_csv, load_intersections_reader,
};
pub use network::{NetworkConfig, StreetGraph, StreetNetwork};
pub use record::{AddressRecord, IntersectionRecord};
pub use street::{Street, StreetIndex};
pub use weight::{STANDARD_SPEED_KMH, SpeedTable, StreetClasses, WeightModel};

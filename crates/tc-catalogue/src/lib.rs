//! `tc-catalogue` — the transit network registry and route statistics.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`domain`]    | `Stop`, `Bus`, `BusStat`, `expand_route`                  |
//! | [`catalogue`] | `TransportCatalogue` (stops, buses, road distances)       |
//! | [`stats`]     | `bus_stat`, road/geo length over stop sequences           |
//! | [`error`]     | `CatalogueError`, `CatalogueResult<T>`                    |
//!
//! # Ingestion order
//!
//! Stops first, then road distances (keyed by stop id), then buses.  Bus
//! statistics are computed on demand, so a distance only has to exist by the
//! time the bus that needs it is queried.

pub mod catalogue;
pub mod domain;
pub mod error;
pub mod stats;


pub use catalogue::TransportCatalogue;
pub use domain::{Bus, BusStat, Stop, expand_route};
pub use error::{CatalogueError, CatalogueResult};

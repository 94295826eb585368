//! `tc-core` — foundational types for the transit catalogue workspace.
//!
//! This crate is a dependency of every other `tc-*` crate.  It has no `tc-*`
//! dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `StopId`, `BusId`, `EdgeId`                           |
//! | [`geo`]         | `Coordinates`, great-circle distance                  |
//! | [`settings`]    | `RoutingSettings` (wait time, bus velocity)           |
//! | [`error`]       | `TcError`, `TcResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required by `tc-io`.                                       |

pub mod error;
pub mod geo;
pub mod ids;
pub mod settings;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{TcError, TcResult};
pub use geo::{Coordinates, geo_length};
pub use ids::{BusId, EdgeId, StopId};
pub use settings::RoutingSettings;

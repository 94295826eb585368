//! `tc-routing` — transit graph construction and minimum-time routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`graph`]   | `TransitGraph` (CSR), `TransitGraphBuilder`, `SpanEdge`     |
//! | [`builder`] | `build_transit_graph`: catalogue + settings → graph         |
//! | [`router`]  | `Router` trait, `RouteInfo`, caching `DijkstraRouter`       |
//! | [`error`]   | `RoutingError`, `RoutingResult<T>`                          |
//!
//! # Edge model
//!
//! Every ordered pair (boarding index `i`, alighting index `j > i`) of a bus's
//! stop sequence becomes one edge weighted `wait + ride(i..j)`.  Riding
//! through is therefore a single edge and pays the wait once, while every
//! transfer pays it again.

pub mod builder;
pub mod error;
pub mod graph;
pub mod router;


pub use builder::build_transit_graph;
pub use error::{RoutingError, RoutingResult};
pub use graph::{SpanEdge, TransitGraph, TransitGraphBuilder};
pub use router::{DijkstraRouter, RouteInfo, Router};

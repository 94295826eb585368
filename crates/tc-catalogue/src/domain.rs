//! Records owned by the catalogue.
//!
//! Buses refer to their stops by [`StopId`] only.  Names and coordinates are
//! resolved through the catalogue at the point of use.

use tc_core::{BusId, Coordinates, StopId};

/// A named point with geographic coordinates.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    pub id:          StopId,
    pub name:        String,
    pub coordinates: Coordinates,
}

/// A named bus route.
///
/// `stops` is always the full traversed sequence: a there-and-back route
/// `A,B,C` is stored as `A,B,C,B,A` (see [`expand_route`]).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bus {
    pub id:           BusId,
    pub name:         String,
    pub stops:        Vec<StopId>,
    pub is_roundtrip: bool,
}

/// Aggregate metrics for one bus, recomputed on every query.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BusStat {
    /// Length of the expanded stop sequence.
    pub stop_count: usize,

    /// Number of distinct stops.
    pub unique_stop_count: usize,

    /// Sum of measured road distances, in metres.
    pub route_length: f64,

    /// `route_length` divided by the great-circle length of the same sequence.
    /// Defined as `1.0` when the great-circle length is zero, including a bus
    /// whose stops share coordinates but have a positive road distance.
    pub curvature: f64,
}

/// Expand the stop list of a route into the sequence a bus traverses.
///
/// Round trips are returned unchanged; otherwise the list is mirrored
/// (`A,B,C` → `A,B,C,B,A`).
pub fn expand_route<T: Clone>(stops: &[T], is_roundtrip: bool) -> Vec<T> {
    let mut expanded = stops.to_vec();
    if !is_roundtrip && stops.len() > 1 {
        expanded.extend(stops.iter().rev().skip(1).cloned());
    }
    expanded
}

//! Request document types and catalogue ingestion.

use std::collections::BTreeMap;

use serde::Deserialize;

use tc_catalogue::{TransportCatalogue, expand_route};
use tc_core::{Coordinates, RoutingSettings};

use crate::IoResult;

/// A whole request document.  Unknown top-level keys (e.g.
/// `render_settings`) are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct RequestDocument {
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,

    #[serde(default)]
    pub routing_settings: Option<RoutingSettings>,

    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

/// One network definition entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop {
        name:      String,
        latitude:  f64,
        longitude: f64,
        /// Road distance in metres from this stop to each named neighbour.
        #[serde(default)]
        road_distances: BTreeMap<String, u32>,
    },
    Bus {
        name: String,
        /// As written: one-way for there-and-back routes.
        stops: Vec<String>,
        is_roundtrip: bool,
    },
}

/// One query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Bus { id: i64, name: String },
    Stop { id: i64, name: String },
    Route { id: i64, from: String, to: String },
    /// Rendered map of the network.  Rendering is not available, so this is
    /// always answered "not found".
    Map { id: i64 },
}

/// Apply `requests` to `catalogue`: every stop first, then every road
/// distance, then every bus (expanding there-and-back routes).
pub fn populate(catalogue: &mut TransportCatalogue, requests: &[BaseRequest]) -> IoResult<()> {
    for req in requests {
        if let BaseRequest::Stop { name, latitude, longitude, .. } = req {
            catalogue.add_stop(name, Coordinates::new(*latitude, *longitude));
        }
    }

    let mut distance_count = 0usize;
    for req in requests {
        if let BaseRequest::Stop { name, road_distances, .. } = req {
            for (to, &meters) in road_distances {
                catalogue.add_distance(name, to, meters)?;
                distance_count += 1;
            }
        }
    }

    for req in requests {
        if let BaseRequest::Bus { name, stops, is_roundtrip } = req {
            catalogue.add_bus(name, &expand_route(stops, *is_roundtrip), *is_roundtrip)?;
        }
    }

    log::info!(
        "loaded {} stops, {} road distances, {} buses",
        catalogue.stop_count(),
        distance_count,
        catalogue.bus_count(),
    );
    Ok(())
}

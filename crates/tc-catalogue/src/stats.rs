//! Per-bus route statistics.
//!
//! Nothing here is cached: buses and distances may still be arriving when a
//! statistic is requested, so every call reflects the catalogue as it is now.

use std::collections::BTreeSet;

use tc_core::{StopId, geo_length};

use crate::domain::BusStat;
use crate::{CatalogueResult, TransportCatalogue};

impl TransportCatalogue {
    /// Statistics for the bus called `name`, or `Ok(None)` if no such bus.
    ///
    /// # Errors
    ///
    /// [`CatalogueError::MissingDistance`](crate::CatalogueError::MissingDistance)
    /// if a traversed segment has no recorded road distance.
    pub fn bus_stat(&self, name: &str) -> CatalogueResult<Option<BusStat>> {
        let Some(bus) = self.find_bus(name) else {
            return Ok(None);
        };

        let route_length = self.road_length(&bus.stops)?;
        let geo = self.geo_length(&bus.stops);
        // No straight-line baseline: coincident stops count as a straight route.
        let curvature = if geo > 0.0 { route_length / geo } else { 1.0 };

        Ok(Some(BusStat {
            stop_count: bus.stops.len(),
            unique_stop_count: bus.stops.iter().collect::<BTreeSet<_>>().len(),
            route_length,
            curvature,
        }))
    }

    /// Sum of road distances between consecutive stops, in metres.
    pub fn road_length(&self, stops: &[StopId]) -> CatalogueResult<f64> {
        stops.windows(2).try_fold(0.0, |total, pair| -> CatalogueResult<f64> {
            Ok(total + f64::from(self.require_road_distance(pair[0], pair[1])?))
        })
    }

    /// Sum of great-circle distances between consecutive stops, in metres.
    pub fn geo_length(&self, stops: &[StopId]) -> f64 {
        geo_length(stops.iter().map(|&id| self.stop(id).coordinates))
    }
}

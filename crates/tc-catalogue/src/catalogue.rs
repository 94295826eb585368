//! The network registry.
//!
//! # Storage
//!
//! Stops and buses live in `Vec`s indexed by their ids, so an id resolves to
//! its record in O(1) and stays valid for the lifetime of the catalogue (there
//! is no removal).  Name lookups go through hash indices.  Road distances are
//! keyed by the ordered `(StopId, StopId)` pair.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use tc_core::{BusId, Coordinates, StopId};

use crate::domain::{Bus, Stop};
use crate::{CatalogueError, CatalogueResult};

/// Owns every stop, bus, and measured road distance of a network.
#[derive(Default)]
pub struct TransportCatalogue {
    stops:      Vec<Stop>,
    stop_ids:   FxHashMap<String, StopId>,
    buses:      Vec<Bus>,
    bus_ids:    FxHashMap<String, BusId>,
    /// Buses serving each stop.  Indexed by `StopId`.
    stop_buses: Vec<BTreeSet<BusId>>,
    distances:  FxHashMap<(StopId, StopId), u32>,
}

impl TransportCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Ingestion ─────────────────────────────────────────────────────────

    /// Register a stop and return its id (sequential from 0).
    ///
    /// Re-adding a known name overwrites its coordinates and keeps the
    /// id it was first given.
    pub fn add_stop(&mut self, name: &str, coordinates: Coordinates) -> StopId {
        if let Some(&id) = self.stop_ids.get(name) {
            log::warn!("stop {name:?} registered twice; keeping {id}");
            self.stops[id.index()].coordinates = coordinates;
            return id;
        }

        let id = StopId(self.stops.len() as u32);
        self.stops.push(Stop { id, name: name.to_owned(), coordinates });
        self.stop_ids.insert(name.to_owned(), id);
        self.stop_buses.push(BTreeSet::new());
        id
    }

    /// Record the road distance from `from` to `to`.  Last write wins.
    pub fn add_distance(&mut self, from: &str, to: &str, meters: u32) -> CatalogueResult<()> {
        let from = self.require_stop(from)?;
        let to = self.require_stop(to)?;
        self.distances.insert((from, to), meters);
        Ok(())
    }

    /// Register a bus over an already-expanded stop sequence.
    ///
    /// Fails without storing anything if a stop is unknown or the name is
    /// taken.
    pub fn add_bus<S: AsRef<str>>(
        &mut self,
        name: &str,
        stop_names: &[S],
        is_roundtrip: bool,
    ) -> CatalogueResult<BusId> {
        if self.bus_ids.contains_key(name) {
            return Err(CatalogueError::DuplicateBus(name.to_owned()));
        }
        let stops = stop_names
            .iter()
            .map(|s| self.require_stop(s.as_ref()))
            .collect::<CatalogueResult<Vec<StopId>>>()?;

        let id = BusId(self.buses.len() as u32);
        for stop in &stops {
            self.stop_buses[stop.index()].insert(id);
        }
        self.buses.push(Bus { id, name: name.to_owned(), stops, is_roundtrip });
        self.bus_ids.insert(name.to_owned(), id);
        Ok(id)
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn find_stop(&self, name: &str) -> Option<&Stop> {
        self.stop_ids.get(name).map(|id| &self.stops[id.index()])
    }

    pub fn find_bus(&self, name: &str) -> Option<&Bus> {
        self.bus_ids.get(name).map(|id| &self.buses[id.index()])
    }

    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_ids.get(name).copied()
    }

    /// # Panics
    /// Panics if `id` was not issued by this catalogue.
    #[inline]
    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.index()]
    }

    /// # Panics
    /// Panics if `id` was not issued by this catalogue.
    #[inline]
    pub fn bus(&self, id: BusId) -> &Bus {
        &self.buses[id.index()]
    }

    /// All stops in id order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// All buses in registration order.
    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    /// All buses ordered by name.
    pub fn buses_by_name(&self) -> Vec<&Bus> {
        let mut buses: Vec<&Bus> = self.buses.iter().collect();
        buses.sort_unstable_by(|a, b| a.name.cmp(&b.name));
        buses
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }

    /// Names of the buses serving `stop`, sorted.  Empty for an unknown stop;
    /// use [`find_stop`](Self::find_stop) to tell the two cases apart.
    pub fn buses_through_stop(&self, stop: &str) -> Vec<&str> {
        let Some(id) = self.stop_id(stop) else {
            return Vec::new();
        };
        let mut names: Vec<&str> = self.stop_buses[id.index()]
            .iter()
            .map(|&bus| self.buses[bus.index()].name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// Measured road distance from `from` to `to`, falling back to the
    /// reverse direction when only that one was recorded.
    pub fn road_distance(&self, from: StopId, to: StopId) -> Option<u32> {
        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
    }

    /// Like [`road_distance`](Self::road_distance) but a missing entry is a
    /// [`CatalogueError::MissingDistance`].
    pub fn require_road_distance(&self, from: StopId, to: StopId) -> CatalogueResult<u32> {
        self.road_distance(from, to).ok_or_else(|| CatalogueError::MissingDistance {
            from: self.stop(from).name.clone(),
            to:   self.stop(to).name.clone(),
        })
    }

    // ── Presentation helpers ──────────────────────────────────────────────

    /// Coordinates of a bus's stops in travel order.
    pub fn bus_points<'a>(&'a self, bus: &'a Bus) -> impl Iterator<Item = Coordinates> + 'a {
        bus.stops.iter().map(|&id| self.stops[id.index()].coordinates)
    }

    /// Stops served by at least one bus, ordered by name.
    pub fn stops_on_routes(&self) -> Vec<&Stop> {
        let mut stops: Vec<&Stop> = self
            .stops
            .iter()
            .filter(|s| !self.stop_buses[s.id.index()].is_empty())
            .collect();
        stops.sort_unstable_by(|a, b| a.name.cmp(&b.name));
        stops
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn require_stop(&self, name: &str) -> CatalogueResult<StopId> {
        self.stop_id(name)
            .ok_or_else(|| CatalogueError::UnknownStop(name.to_owned()))
    }
}

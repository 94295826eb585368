//! A populated catalogue plus its router, answering stat requests.

use tc_catalogue::TransportCatalogue;
use tc_core::RoutingSettings;
use tc_routing::{DijkstraRouter, Router, build_transit_graph};

use crate::requests::{BaseRequest, StatRequest, populate};
use crate::response::{RouteItem, StatResponse};
use crate::IoResult;

/// Catalogue and (when routing settings were given) a router built over it.
///
/// The router is built once, after ingestion; the catalogue is not mutated
/// afterwards.
pub struct TransitSystem {
    catalogue: TransportCatalogue,
    planner:   Option<Planner>,
}

struct Planner {
    settings: RoutingSettings,
    router:   DijkstraRouter,
}

impl TransitSystem {
    /// Ingest `base_requests` and, if `settings` is present, build the router.
    pub fn build(base_requests: &[BaseRequest], settings: Option<RoutingSettings>) -> IoResult<Self> {
        let mut catalogue = TransportCatalogue::new();
        populate(&mut catalogue, base_requests)?;

        let planner = match settings {
            Some(settings) => {
                let graph = build_transit_graph(&catalogue, &settings)?;
                Some(Planner { settings, router: DijkstraRouter::new(graph) })
            }
            None => None,
        };

        Ok(Self { catalogue, planner })
    }

    pub fn catalogue(&self) -> &TransportCatalogue {
        &self.catalogue
    }

    /// Answer every request in order.
    pub fn answer_all(&mut self, requests: &[StatRequest]) -> Vec<StatResponse> {
        requests.iter().map(|r| self.answer(r)).collect()
    }

    /// Answer one request.  Unknown names, unreachable stops, and buses
    /// with a missing road distance produce a "not found" response.
    pub fn answer(&mut self, request: &StatRequest) -> StatResponse {
        match request {
            StatRequest::Bus { id, name } => self.answer_bus(*id, name),
            StatRequest::Stop { id, name } => self.answer_stop(*id, name),
            StatRequest::Route { id, from, to } => self.answer_route(*id, from, to),
            StatRequest::Map { id } => {
                log::warn!("request {id}: map rendering is not supported");
                StatResponse::not_found(*id)
            }
        }
    }

    fn answer_bus(&self, request_id: i64, name: &str) -> StatResponse {
        let stat = match self.catalogue.bus_stat(name) {
            Ok(Some(stat)) => stat,
            Ok(None) => {
                log::debug!("request {request_id}: bus {name:?} not found");
                return StatResponse::not_found(request_id);
            }
            Err(e) => {
                log::warn!("request {request_id}: no statistics for bus {name:?}: {e}");
                return StatResponse::not_found(request_id);
            }
        };
        StatResponse::Bus {
            request_id,
            curvature:         stat.curvature,
            route_length:      stat.route_length,
            stop_count:        stat.stop_count,
            unique_stop_count: stat.unique_stop_count,
        }
    }

    fn answer_stop(&self, request_id: i64, name: &str) -> StatResponse {
        if self.catalogue.find_stop(name).is_none() {
            log::debug!("request {request_id}: stop {name:?} not found");
            return StatResponse::not_found(request_id);
        }
        let buses = self
            .catalogue
            .buses_through_stop(name)
            .into_iter()
            .map(str::to_owned)
            .collect();
        StatResponse::Stop { request_id, buses }
    }

    fn answer_route(&mut self, request_id: i64, from: &str, to: &str) -> StatResponse {
        let Some(planner) = self.planner.as_mut() else {
            log::warn!("request {request_id}: route requested but no routing settings were given");
            return StatResponse::not_found(request_id);
        };
        let (Some(from_id), Some(to_id)) = (self.catalogue.stop_id(from), self.catalogue.stop_id(to))
        else {
            log::debug!("request {request_id}: unknown stop in route {from:?} -> {to:?}");
            return StatResponse::not_found(request_id);
        };
        let Some(route) = planner.router.route(from_id, to_id) else {
            log::debug!("request {request_id}: no route {from:?} -> {to:?}");
            return StatResponse::not_found(request_id);
        };

        let graph = planner.router.graph();
        let mut items = Vec::with_capacity(route.edges.len() * 2);
        for &e in &route.edges {
            let edge = graph.edge(e);
            items.push(RouteItem::Wait {
                stop_name: self.catalogue.stop(edge.from).name.clone(),
                time:      planner.settings.bus_wait_time,
            });
            items.push(RouteItem::Bus {
                bus:        self.catalogue.bus(edge.bus).name.clone(),
                span_count: edge.span_count,
                time:       edge.ride_minutes,
            });
        }

        StatResponse::Route { request_id, total_time: route.total_minutes, items }
    }
}

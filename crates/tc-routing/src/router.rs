//! Routing trait and the default caching Dijkstra implementation.
//!
//! # Caching
//!
//! [`DijkstraRouter`] computes a full shortest-path tree the first time a
//! source stop is queried and keeps it for the lifetime of the router, so
//! any later query from the same origin is a path walk with no relaxation.
//!
//! # Cost units
//!
//! All weights and totals are minutes (`f64`).

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use tc_core::{EdgeId, StopId};

use crate::graph::TransitGraph;

// ── RouteInfo ─────────────────────────────────────────────────────────────────

/// The result of a routing query.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteInfo {
    /// Total travel time in minutes, waits included.
    pub total_minutes: f64,
    /// Edges to ride in order, from origin to destination.
    pub edges: Vec<EdgeId>,
}

impl RouteInfo {
    /// `true` if origin and destination are the same stop.
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable minimum-time routing engine.
///
/// Takes `&mut self` so implementations may memoize per-origin work.
pub trait Router {
    /// Fastest route from `from` to `to`.
    ///
    /// Returns `None` if `to` is unreachable.  `from == to` is an empty route
    /// of zero minutes.
    ///
    /// # Panics
    /// Implementations panic if either stop is outside the graph.
    fn route(&mut self, from: StopId, to: StopId) -> Option<RouteInfo>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Dijkstra over a [`TransitGraph`] with a per-origin tree cache.
///
/// Owns its graph: rebuilding the network means building a new router.
pub struct DijkstraRouter {
    graph: TransitGraph,
    trees: FxHashMap<StopId, ShortestPathTree>,
}

impl DijkstraRouter {
    pub fn new(graph: TransitGraph) -> Self {
        Self { graph, trees: FxHashMap::default() }
    }

    pub fn graph(&self) -> &TransitGraph {
        &self.graph
    }

    /// Number of origins whose shortest-path tree is cached.
    pub fn cached_sources(&self) -> usize {
        self.trees.len()
    }
}

impl Router for DijkstraRouter {
    fn route(&mut self, from: StopId, to: StopId) -> Option<RouteInfo> {
        let n = self.graph.vertex_count();
        assert!(from.index() < n, "origin {from} outside graph of {n} stops");
        assert!(to.index() < n, "destination {to} outside graph of {n} stops");

        let graph = &self.graph;
        let tree = self.trees.entry(from).or_insert_with(|| {
            log::debug!("computing shortest-path tree from {from}");
            ShortestPathTree::compute(graph, from)
        });
        tree.path_to(graph, to)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Best known cost and incoming edge for every vertex, from one origin.
struct ShortestPathTree {
    dist:      Vec<f64>,
    /// `EdgeId::INVALID` for the origin and unreached vertices.
    prev_edge: Vec<EdgeId>,
}

/// Heap entry ordered by cost, then vertex for deterministic tie-breaking.
#[derive(Copy, Clone, PartialEq)]
struct Frontier {
    cost:   f64,
    vertex: StopId,
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl ShortestPathTree {
    fn compute(graph: &TransitGraph, from: StopId) -> Self {
        let n = graph.vertex_count();
        let mut dist      = vec![f64::INFINITY; n];
        let mut prev_edge = vec![EdgeId::INVALID; n];

        dist[from.index()] = 0.0;

        // Reverse turns the max-heap into a min-heap.
        let mut heap: BinaryHeap<Reverse<Frontier>> = BinaryHeap::new();
        heap.push(Reverse(Frontier { cost: 0.0, vertex: from }));

        while let Some(Reverse(Frontier { cost, vertex })) = heap.pop() {
            // Skip stale heap entries.
            if cost > dist[vertex.index()] {
                continue;
            }

            for edge in graph.out_edges(vertex) {
                let next = graph.edge_to[edge.index()];
                let new_cost = cost + graph.edge_weight[edge.index()];

                if new_cost < dist[next.index()] {
                    dist[next.index()] = new_cost;
                    prev_edge[next.index()] = edge;
                    heap.push(Reverse(Frontier { cost: new_cost, vertex: next }));
                }
            }
        }

        Self { dist, prev_edge }
    }

    fn path_to(&self, graph: &TransitGraph, to: StopId) -> Option<RouteInfo> {
        let total_minutes = self.dist[to.index()];
        if total_minutes.is_infinite() {
            return None;
        }

        let mut edges = Vec::new();
        let mut cur = to;
        loop {
            let e = self.prev_edge[cur.index()];
            if e == EdgeId::INVALID {
                break;
            }
            edges.push(e);
            cur = graph.edge_from[e.index()];
        }
        edges.reverse();
        Some(RouteInfo { total_minutes, edges })
    }
}

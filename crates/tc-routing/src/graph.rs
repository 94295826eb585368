//! Directed weighted transit graph and its builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a vertex `v`, its outgoing edges occupy the `EdgeId` range:
//!
//! ```text
//! vertex_out_start[v] .. vertex_out_start[v+1]
//! ```
//!
//! All edge arrays are sorted by source vertex and indexed by `EdgeId`.
//! Vertices are catalogue `StopId`s.

use tc_core::{BusId, EdgeId, StopId};

// ── SpanEdge ──────────────────────────────────────────────────────────────────

/// One boarding-to-alighting ride on a single bus.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpanEdge {
    /// Boarding stop.
    pub from: StopId,
    /// Alighting stop.
    pub to: StopId,
    /// `wait + ride_minutes`.
    pub weight: f64,
    pub bus: BusId,
    /// Number of stops travelled (`j - i`).
    pub span_count: u32,
    pub ride_minutes: f64,
}

// ── TransitGraph ──────────────────────────────────────────────────────────────

/// Immutable directed graph with one vertex per stop.
///
/// Fields are `pub` for direct indexed access in the router's inner loop.
/// Do not construct directly; use [`TransitGraphBuilder`].
#[derive(Debug)]
pub struct TransitGraph {
    /// CSR row pointer.  Length = `vertex_count + 1`.
    pub vertex_out_start: Vec<u32>,

    // ── Edge data (indexed by EdgeId) ─────────────────────────────────────
    /// Source vertex of each edge; used to walk a path back to its origin.
    pub edge_from: Vec<StopId>,
    pub edge_to: Vec<StopId>,
    /// Total edge cost in minutes.
    pub edge_weight: Vec<f64>,
    pub edge_bus: Vec<BusId>,
    pub edge_span: Vec<u32>,
    pub edge_ride_minutes: Vec<f64>,
}

impl TransitGraph {
    pub fn vertex_count(&self) -> usize {
        self.vertex_out_start.len() - 1
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    /// Iterator over the `EdgeId`s of all outgoing edges from `v`.
    #[inline]
    pub fn out_edges(&self, v: StopId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.vertex_out_start[v.index()] as usize;
        let end   = self.vertex_out_start[v.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    #[inline]
    pub fn out_degree(&self, v: StopId) -> usize {
        let start = self.vertex_out_start[v.index()] as usize;
        let end   = self.vertex_out_start[v.index() + 1] as usize;
        end - start
    }

    /// Reassemble the edge record stored under `id`.
    pub fn edge(&self, id: EdgeId) -> SpanEdge {
        let i = id.index();
        SpanEdge {
            from:         self.edge_from[i],
            to:           self.edge_to[i],
            weight:       self.edge_weight[i],
            bus:          self.edge_bus[i],
            span_count:   self.edge_span[i],
            ride_minutes: self.edge_ride_minutes[i],
        }
    }
}

// ── TransitGraphBuilder ───────────────────────────────────────────────────────

/// Collect edges in any order, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use tc_core::{BusId, StopId};
/// use tc_routing::{SpanEdge, TransitGraphBuilder};
///
/// let mut b = TransitGraphBuilder::new(2);
/// b.add_edge(SpanEdge {
///     from: StopId(0),
///     to: StopId(1),
///     weight: 8.0,
///     bus: BusId(0),
///     span_count: 1,
///     ride_minutes: 2.0,
/// });
/// let graph = b.build();
/// assert_eq!(graph.vertex_count(), 2);
/// assert_eq!(graph.out_degree(StopId(0)), 1);
/// ```
pub struct TransitGraphBuilder {
    vertex_count: usize,
    raw_edges:    Vec<SpanEdge>,
}

impl TransitGraphBuilder {
    pub fn new(vertex_count: usize) -> Self {
        Self { vertex_count, raw_edges: Vec::new() }
    }

    /// # Panics
    /// Panics if either endpoint is not below `vertex_count`.
    pub fn add_edge(&mut self, edge: SpanEdge) {
        assert!(
            edge.from.index() < self.vertex_count && edge.to.index() < self.vertex_count,
            "edge {} -> {} outside vertex range 0..{}",
            edge.from,
            edge.to,
            self.vertex_count,
        );
        self.raw_edges.push(edge);
    }

    pub fn edge_count(&self) -> usize {
        self.raw_edges.len()
    }

    /// Consume the builder and produce a [`TransitGraph`].
    ///
    /// The sort is stable: edges leaving the same vertex keep the order they
    /// were added in, so path reconstruction is deterministic.
    pub fn build(self) -> TransitGraph {
        let vertex_count = self.vertex_count;

        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from);

        let mut vertex_out_start = vec![0u32; vertex_count + 1];
        for e in &raw {
            vertex_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=vertex_count {
            vertex_out_start[i] += vertex_out_start[i - 1];
        }
        debug_assert_eq!(vertex_out_start[vertex_count] as usize, raw.len());

        TransitGraph {
            vertex_out_start,
            edge_from:         raw.iter().map(|e| e.from).collect(),
            edge_to:           raw.iter().map(|e| e.to).collect(),
            edge_weight:       raw.iter().map(|e| e.weight).collect(),
            edge_bus:          raw.iter().map(|e| e.bus).collect(),
            edge_span:         raw.iter().map(|e| e.span_count).collect(),
            edge_ride_minutes: raw.iter().map(|e| e.ride_minutes).collect(),
        }
    }
}

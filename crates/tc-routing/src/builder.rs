//! Turn a populated catalogue into a [`TransitGraph`].

use tc_catalogue::{CatalogueResult, TransportCatalogue};
use tc_core::RoutingSettings;

use crate::graph::{SpanEdge, TransitGraph, TransitGraphBuilder};
use crate::RoutingResult;

/// Build the span-edge graph for every bus in `catalogue`.
///
/// For a bus of `n` stops this emits `n·(n-1)/2` edges: one per boarding
/// index `i` and later stop `j`, carrying the cumulative road distance of
/// `i..=j` converted to minutes at `settings.bus_velocity`, plus one
/// `bus_wait_time`.
///
/// A bus with a segment that has no road distance in either direction is
/// left out of the graph with a warning; every other bus is still routable.
///
/// The graph is a snapshot; later catalogue changes do not reach it.
///
/// # Errors
///
/// [`RoutingError::Config`](crate::RoutingError::Config) for invalid
/// settings.
pub fn build_transit_graph(
    catalogue: &TransportCatalogue,
    settings:  &RoutingSettings,
) -> RoutingResult<TransitGraph> {
    settings.validate()?;

    let mut builder = TransitGraphBuilder::new(catalogue.stop_count());

    let mut skipped = 0usize;
    for bus in catalogue.buses() {
        let stops = &bus.stops;
        let hops = match stops
            .windows(2)
            .map(|pair| catalogue.require_road_distance(pair[0], pair[1]))
            .collect::<CatalogueResult<Vec<u32>>>()
        {
            Ok(hops) => hops,
            Err(e) => {
                log::warn!("bus {:?} left out of the transit graph: {e}", bus.name);
                skipped += 1;
                continue;
            }
        };

        for i in 0..hops.len() {
            let mut meters = 0u64;
            for j in (i + 1)..stops.len() {
                meters += u64::from(hops[j - 1]);
                let ride_minutes = settings.ride_minutes(meters as f64);
                builder.add_edge(SpanEdge {
                    from: stops[i],
                    to: stops[j],
                    weight: settings.bus_wait_time + ride_minutes,
                    bus: bus.id,
                    span_count: (j - i) as u32,
                    ride_minutes,
                });
            }
        }
    }

    let graph = builder.build();
    log::info!(
        "built transit graph: {} vertices, {} span edges from {} buses ({} skipped)",
        graph.vertex_count(),
        graph.edge_count(),
        catalogue.bus_count() - skipped,
        skipped,
    );
    Ok(graph)
}

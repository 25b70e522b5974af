use crate::distance::Distance;
use crate::error::Result;
use crate::graph::Graph;
use crate::heap::IndexedMinHeap;

/// Work done by one solver run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RunStats {
    pub settled: usize,
    pub relaxations: usize,
    pub decrease_keys: usize,
}

/// Single-source shortest paths with an indexed binary heap.
///
/// Every vertex is queued up front. Results are written into the graph's
/// vertex records: afterwards [`Graph::distance`], [`Graph::predecessor`] and
/// [`Graph::path_to`] describe the shortest-path tree rooted at `source`.
/// Unreachable vertices keep an infinite distance and no predecessor.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn dijkstra_indexed_heap(graph: &mut Graph, source: usize) -> Result<RunStats> {
    graph.check_vertex(source)?;
    graph.reset_for(source);

    let (adjacency, vertices) = graph.split_mut();
    let mut heap = IndexedMinHeap::build(0..vertices.len(), &*vertices)?;
    let mut stats = RunStats::default();

    while !heap.is_empty() {
        let u = heap.extract_min(&*vertices)?;
        stats.settled += 1;

        let Some(du) = vertices[u].distance.finite() else {
            continue;
        };

        for edge in &adjacency[u] {
            let candidate = Distance::Finite(du + u128::from(edge.weight));

            let v = &mut vertices[edge.to];
            if candidate >= v.distance {
                continue;
            }
            v.distance = candidate;
            v.predecessor = Some(u);
            stats.relaxations += 1;
            tracing::trace!(from = u, to = edge.to, distance = %candidate, "relax");

            if heap.contains(edge.to) {
                heap.decrease_key(edge.to, &*vertices)?;
                stats.decrease_keys += 1;
            }
        }
    }

    tracing::debug!(
        settled = stats.settled,
        relaxations = stats.relaxations,
        decrease_keys = stats.decrease_keys,
        "dijkstra finished"
    );
    Ok(stats)
}

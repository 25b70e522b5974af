use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::distance::Distance;
use crate::error::Result;
use crate::graph::Graph;

/// Dijkstra on `std`'s binary heap: pushes a fresh entry on every improvement
/// and skips stale ones on pop. Does not touch the graph's vertex records.
pub fn dijkstra_lazy_heap(graph: &Graph, source: usize) -> Result<Vec<Distance>> {
    graph.check_vertex(source)?;
    let mut dist = vec![Distance::Infinite; graph.vertex_count()];

    let mut heap = BinaryHeap::new();
    dist[source] = Distance::ZERO;
    heap.push(Reverse((Distance::ZERO, source)));

    while let Some(Reverse((d, u))) = heap.pop() {
        if d != dist[u] {
            continue;
        }
        let Some(du) = d.finite() else {
            continue;
        };

        for edge in graph.neighbors(u)? {
            let cand = Distance::Finite(du + u128::from(edge.weight));
            if cand < dist[edge.to] {
                dist[edge.to] = cand;
                heap.push(Reverse((cand, edge.to)));
            }
        }
    }

    Ok(dist)
}

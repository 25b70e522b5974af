mod dijkstra_indexed;
mod dijkstra_lazy;
mod distance;
mod error;
pub mod generator;
pub mod graph;
pub mod heap;

pub use dijkstra_indexed::RunStats;
pub use dijkstra_indexed::dijkstra_indexed_heap;
pub use dijkstra_lazy::dijkstra_lazy_heap;
pub use distance::Distance;
pub use error::Error;
pub use error::Result;
pub use graph::Edge;
pub use graph::Graph;
pub use graph::Vertex;
pub use heap::DistanceKeys;
pub use heap::IndexedMinHeap;

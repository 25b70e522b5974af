use crate::distance::Distance;
use crate::error::Error;
use crate::error::Result;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Edge {
    pub to: usize,
    pub weight: u64,
}

/// A vertex record. The index is its slot in the owning graph; distance and
/// predecessor hold the outcome of the most recent solver run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Vertex {
    index: usize,
    name: String,
    pub(crate) distance: Distance,
    pub(crate) predecessor: Option<usize>,
}

impl Vertex {
    fn new(index: usize, name: String) -> Self {
        Self {
            index,
            name,
            distance: Distance::Infinite,
            predecessor: None,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn distance(&self) -> Distance {
        self.distance
    }

    #[inline]
    pub fn predecessor(&self) -> Option<usize> {
        self.predecessor
    }
}

/// Directed graph with non-negative integer weights over vertices `0..n`.
///
/// Out-edges of each vertex are kept in insertion order.
#[derive(Clone, Debug)]
pub struct Graph {
    vertices: Vec<Vertex>,
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
    source: Option<usize>,
}

impl Graph {
    /// Graph with `vertex_count` vertices named by their index.
    pub fn new(vertex_count: usize) -> Self {
        Self::with_names((0..vertex_count).map(|i| i.to_string()))
    }

    /// Like [`Graph::new`], for counts coming from signed external input.
    pub fn try_new(vertex_count: i64) -> Result<Self> {
        let n = usize::try_from(vertex_count)
            .map_err(|_| Error::invalid(format!("negative vertex count {vertex_count}")))?;
        Ok(Self::new(n))
    }

    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let vertices: Vec<Vertex> = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Vertex::new(i, name.into()))
            .collect();
        let adjacency = vec![Vec::new(); vertices.len()];
        Self {
            vertices,
            adjacency,
            edge_count: 0,
            source: None,
        }
    }

    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize, i64)]) -> Result<Self> {
        let mut graph = Self::new(vertex_count);
        for &(from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    pub fn add_edge(&mut self, from: usize, to: usize, weight: i64) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        let weight = u64::try_from(weight)
            .map_err(|_| Error::invalid(format!("negative weight {weight} on edge {from}->{to}")))?;
        self.adjacency[from].push(Edge { to, weight });
        self.edge_count += 1;
        Ok(())
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn neighbors(&self, v: usize) -> Result<&[Edge]> {
        self.check_vertex(v)?;
        Ok(&self.adjacency[v])
    }

    #[inline]
    pub fn vertex(&self, v: usize) -> Option<&Vertex> {
        self.vertices.get(v)
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn distance(&self, v: usize) -> Result<Distance> {
        self.check_vertex(v)?;
        Ok(self.vertices[v].distance)
    }

    pub fn predecessor(&self, v: usize) -> Result<Option<usize>> {
        self.check_vertex(v)?;
        Ok(self.vertices[v].predecessor)
    }

    pub fn distances(&self) -> Vec<Distance> {
        self.vertices.iter().map(Vertex::distance).collect()
    }

    /// Source of the most recent solver run.
    #[inline]
    pub fn source(&self) -> Option<usize> {
        self.source
    }

    /// Case-insensitive (ASCII) lookup of a vertex by display name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.vertices
            .iter()
            .find(|v| v.name.eq_ignore_ascii_case(name))
            .map(Vertex::index)
    }

    /// Vertices on the shortest path from the last run's source to `target`,
    /// both ends included. `None` if no run happened or `target` is unreachable.
    pub fn path_to(&self, target: usize) -> Result<Option<Vec<usize>>> {
        self.check_vertex(target)?;
        let Some(source) = self.source else {
            return Ok(None);
        };
        if !self.vertices[target].distance.is_finite() {
            return Ok(None);
        }

        let mut path = vec![target];
        let mut cur = target;
        while cur != source {
            let prev = self.vertices[cur].predecessor;
            let within_bound = path.len() <= self.vertices.len();
            debug_assert!(prev.is_some(), "predecessor chain of {target} is broken");
            debug_assert!(within_bound, "predecessor chain of {target} loops");
            let (Some(prev), true) = (prev, within_bound) else {
                return Ok(None);
            };
            path.push(prev);
            cur = prev;
        }
        path.reverse();
        Ok(Some(path))
    }

    #[inline]
    pub(crate) fn check_vertex(&self, v: usize) -> Result<()> {
        if v < self.vertices.len() {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                index: v,
                len: self.vertices.len(),
            })
        }
    }

    pub(crate) fn reset_for(&mut self, source: usize) {
        for vertex in &mut self.vertices {
            vertex.distance = Distance::Infinite;
            vertex.predecessor = None;
        }
        self.vertices[source].distance = Distance::ZERO;
        self.source = Some(source);
    }

    /// Adjacency lists and vertex records borrowed separately so a solver can
    /// walk edges while updating vertices.
    pub(crate) fn split_mut(&mut self) -> (&[Vec<Edge>], &mut [Vertex]) {
        (&self.adjacency, &mut self.vertices)
    }
}

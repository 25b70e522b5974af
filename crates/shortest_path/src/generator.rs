use std::collections::HashSet;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::error::Result;
use crate::graph::Graph;

const MAX_WEIGHT: i64 = 1_000_000_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GraphCase {
    SparseRandom,
    DenseRandom,
    DenseZero,
    AlmostLine,
    Grid,
}

pub const ALL_CASES: [GraphCase; 5] = [
    GraphCase::SparseRandom,
    GraphCase::DenseRandom,
    GraphCase::DenseZero,
    GraphCase::AlmostLine,
    GraphCase::Grid,
];

impl GraphCase {
    pub fn label(self) -> &'static str {
        match self {
            Self::SparseRandom => "sparse_random",
            Self::DenseRandom => "dense_random",
            Self::DenseZero => "dense_zero",
            Self::AlmostLine => "almost_line",
            Self::Grid => "grid",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GeneratedGraph {
    pub graph: Graph,
    pub source: usize,
}

/// Seeded graph of roughly `size` vertices (dense cases use about `sqrt(size)`).
pub fn generate_case(case: GraphCase, size: usize, seed: u64) -> Result<GeneratedGraph> {
    let mut rng = StdRng::seed_from_u64(seed);
    let (n, edges) = match case {
        GraphCase::SparseRandom => sparse_random(&mut rng, size.max(16), 4),
        GraphCase::DenseRandom => dense(&mut rng, floor_sqrt(size).max(8), true),
        GraphCase::DenseZero => dense(&mut rng, floor_sqrt(size).max(8), false),
        GraphCase::AlmostLine => almost_line(&mut rng, size.max(8)),
        GraphCase::Grid => grid(&mut rng, floor_sqrt(size).max(4)),
    };
    let source = rng.random_range(0..n);
    Ok(GeneratedGraph {
        graph: Graph::from_edges(n, &edges)?,
        source,
    })
}

type EdgeList = Vec<(usize, usize, i64)>;

fn sparse_random(rng: &mut StdRng, n: usize, edge_factor: usize) -> (usize, EdgeList) {
    let m = (n * edge_factor).min(n * (n - 1));
    let mut used = HashSet::with_capacity(m);
    let mut edges = Vec::with_capacity(m);
    while edges.len() < m {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        if u != v && used.insert((u, v)) {
            edges.push((u, v, rng.random_range(0..=MAX_WEIGHT)));
        }
    }
    (n, edges)
}

fn dense(rng: &mut StdRng, n: usize, random_weights: bool) -> (usize, EdgeList) {
    let mut edges = Vec::with_capacity(n * (n - 1));
    for u in 0..n {
        for v in (0..n).filter(|&v| v != u) {
            let w = if random_weights {
                rng.random_range(0..=MAX_WEIGHT)
            } else {
                0
            };
            edges.push((u, v, w));
        }
    }
    (n, edges)
}

// A shuffled chain with short forward and backward hops of 2..=3.
fn almost_line(rng: &mut StdRng, n: usize) -> (usize, EdgeList) {
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);

    let mut edges = Vec::with_capacity(n * 2);
    for i in 0..n - 1 {
        edges.push((perm[i], perm[i + 1], rng.random_range(0..=MAX_WEIGHT)));
    }
    for _ in 0..n {
        let a = rng.random_range(0..n - 2);
        let b = (a + rng.random_range(2..=3)).min(n - 1);
        let (u, v) = if rng.random_bool(0.5) { (b, a) } else { (a, b) };
        edges.push((perm[u], perm[v], rng.random_range(0..=MAX_WEIGHT)));
    }
    edges.shuffle(rng);
    (n, edges)
}

fn grid(rng: &mut StdRng, side: usize) -> (usize, EdgeList) {
    let index = |i: usize, j: usize| i * side + j;
    let mut edges = Vec::with_capacity(side * side * 4);
    for i in 0..side {
        for j in 0..side {
            let here = index(i, j);
            let mut around = Vec::with_capacity(4);
            if j + 1 < side {
                around.push(index(i, j + 1));
            }
            if i + 1 < side {
                around.push(index(i + 1, j));
            }
            if j > 0 {
                around.push(index(i, j - 1));
            }
            if i > 0 {
                around.push(index(i - 1, j));
            }
            for there in around {
                edges.push((here, there, rng.random_range(0..=MAX_WEIGHT)));
            }
        }
    }
    edges.shuffle(rng);
    (side * side, edges)
}

fn floor_sqrt(n: usize) -> usize {
    let mut r = (n as f64).sqrt() as usize;
    while r * r > n {
        r -= 1;
    }
    while (r + 1) * (r + 1) <= n {
        r += 1;
    }
    r
}

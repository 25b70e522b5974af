//! Binary min-heap over vertex indices with a position index.
//!
//! The heap does not own the keys. Every operation that compares reads the
//! current distances through a [`DistanceKeys`] view, so the caller may lower
//! a queued vertex's distance between calls as long as it follows up with
//! [`IndexedMinHeap::decrease_key`].
//!
//! Layout (0-based):
//!   heap[0..len]      live entries, min-heap ordered by distance
//!   heap[len..]       extracted entries, most recent first
//!   position[v]       slot of v in `heap`, or None if v was never inserted
//!
//!   parent(i) = (i - 1) / 2, left(i) = 2i + 1, right(i) = 2i + 2

use crate::distance::Distance;
use crate::error::Error;
use crate::error::Result;
use crate::graph::Vertex;

/// Read-only access to the ordering key of every vertex index.
pub trait DistanceKeys {
    fn key_count(&self) -> usize;
    fn distance_of(&self, index: usize) -> Distance;
}

impl DistanceKeys for [Vertex] {
    #[inline]
    fn key_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn distance_of(&self, index: usize) -> Distance {
        self[index].distance
    }
}

impl DistanceKeys for [Distance] {
    #[inline]
    fn key_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn distance_of(&self, index: usize) -> Distance {
        self[index]
    }
}

#[derive(Clone, Debug, Default)]
pub struct IndexedMinHeap {
    heap: Vec<usize>,
    len: usize,
    position: Vec<Option<usize>>,
}

impl IndexedMinHeap {
    /// Heapifies `vertices` bottom-up in linear time.
    ///
    /// Fails with `OutOfRange` for an index outside `keys`, and with
    /// `InvalidArgument` if an index appears twice.
    pub fn build<I, K>(vertices: I, keys: &K) -> Result<Self>
    where
        I: IntoIterator<Item = usize>,
        K: DistanceKeys + ?Sized,
    {
        let n = keys.key_count();
        let mut position = vec![None; n];
        let mut heap = Vec::new();
        for v in vertices {
            let slot = position.get_mut(v).ok_or(Error::OutOfRange { index: v, len: n })?;
            if slot.is_some() {
                return Err(Error::invalid(format!("vertex {v} inserted twice")));
            }
            *slot = Some(heap.len());
            heap.push(v);
        }

        let len = heap.len();
        let mut this = Self {
            heap,
            len,
            position,
        };
        for i in (0..len / 2).rev() {
            this.sift_down(i, keys);
        }
        Ok(this)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True while `v` is queued: inserted by `build` and not yet extracted.
    #[inline]
    pub fn contains(&self, v: usize) -> bool {
        self.live_position(v).is_some()
    }

    #[inline]
    pub fn peek_min(&self) -> Option<usize> {
        (self.len > 0).then(|| self.heap[0])
    }

    pub fn extract_min<K: DistanceKeys + ?Sized>(&mut self, keys: &K) -> Result<usize> {
        if self.len == 0 {
            return Err(Error::EmptyHeap);
        }
        let last = self.len - 1;
        self.swap(0, last);
        self.len = last;
        self.sift_down(0, keys);
        Ok(self.heap[last])
    }

    /// Moves `v` toward the root after its distance was lowered.
    ///
    /// Fails with `NotInHeap` if `v` is not queued, and with `InvalidArgument`
    /// if its key now exceeds a child's key (it was raised, not lowered).
    /// The heap is untouched on failure.
    pub fn decrease_key<K: DistanceKeys + ?Sized>(&mut self, v: usize, keys: &K) -> Result<()> {
        let mut i = self
            .live_position(v)
            .ok_or(Error::NotInHeap { index: v })?;
        let key = keys.distance_of(v);
        let left = 2 * i + 1;
        for child in [left, left + 1] {
            if child < self.len && keys.distance_of(self.heap[child]) < key {
                return Err(Error::invalid(format!(
                    "key of vertex {v} increased to {key}, above its child"
                )));
            }
        }
        while i > 0 {
            let parent = (i - 1) / 2;
            if keys.distance_of(self.heap[parent]) <= key {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
        Ok(())
    }

    #[inline]
    fn live_position(&self, v: usize) -> Option<usize> {
        match self.position.get(v) {
            Some(&Some(p)) if p < self.len => Some(p),
            _ => None,
        }
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.position[self.heap[i]] = Some(i);
        self.position[self.heap[j]] = Some(j);
    }

    // Left child wins ties with the right child.
    fn sift_down<K: DistanceKeys + ?Sized>(&mut self, mut i: usize, keys: &K) {
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            let mut smallest_key = keys.distance_of(self.heap[i]);

            if left < self.len {
                let k = keys.distance_of(self.heap[left]);
                if k < smallest_key {
                    smallest = left;
                    smallest_key = k;
                }
            }
            if right < self.len && keys.distance_of(self.heap[right]) < smallest_key {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::DistanceKeys;
    use super::IndexedMinHeap;
    use crate::Distance;
    use crate::Error;

    fn assert_heap_property(heap: &IndexedMinHeap, keys: &[Distance]) {
        for i in 1..heap.len {
            let parent = (i - 1) / 2;
            assert!(
                keys.distance_of(heap.heap[parent]) <= keys.distance_of(heap.heap[i]),
                "parent slot {parent} > child slot {i}"
            );
        }
        for (slot, &v) in heap.heap.iter().enumerate() {
            assert_eq!(heap.position[v], Some(slot), "stale position for {v}");
        }
    }

    fn finite(values: &[u64]) -> Vec<Distance> {
        values.iter().copied().map(Distance::from).collect()
    }

    #[test]
    fn extracts_in_non_decreasing_order() {
        let keys = finite(&[9, 4, 7, 1, 8, 2, 2, 6]);
        let mut heap = IndexedMinHeap::build(0..keys.len(), keys.as_slice()).unwrap();
        assert_heap_property(&heap, &keys);
        assert_eq!(heap.len(), keys.len());

        let mut out = Vec::new();
        while !heap.is_empty() {
            out.push(heap.extract_min(keys.as_slice()).unwrap());
            assert_heap_property(&heap, &keys);
        }
        assert_eq!(out.len(), keys.len());
        assert!(out.windows(2).all(|w| keys[w[0]] <= keys[w[1]]));
        assert_eq!(heap.extract_min(keys.as_slice()), Err(Error::EmptyHeap));
    }

    #[test]
    fn infinite_keys_sort_last() {
        let keys = vec![
            Distance::Infinite,
            Distance::Finite(5),
            Distance::Infinite,
            Distance::ZERO,
        ];
        let mut heap = IndexedMinHeap::build(0..4, keys.as_slice()).unwrap();
        assert_eq!(heap.extract_min(keys.as_slice()), Ok(3));
        assert_eq!(heap.extract_min(keys.as_slice()), Ok(1));
        assert_eq!(keys[heap.extract_min(keys.as_slice()).unwrap()], Distance::Infinite);
        assert_eq!(keys[heap.extract_min(keys.as_slice()).unwrap()], Distance::Infinite);
        assert!(heap.is_empty());
    }

    #[test]
    fn contains_tracks_membership() {
        let keys = finite(&[3, 1, 2]);
        let mut heap = IndexedMinHeap::build([0, 1, 2], keys.as_slice()).unwrap();
        assert!((0..3).all(|v| heap.contains(v)));
        assert!(!heap.contains(3));

        let min = heap.extract_min(keys.as_slice()).unwrap();
        assert_eq!(min, 1);
        assert!(!heap.contains(1));
        assert!(heap.contains(0));
        assert!(heap.contains(2));
    }

    #[test]
    fn never_inserted_vertex_is_not_contained() {
        let keys = finite(&[3, 1, 2, 0]);
        let heap = IndexedMinHeap::build([0, 2], keys.as_slice()).unwrap();
        assert!(!heap.contains(1));
        assert!(!heap.contains(3));
        assert_eq!(heap.peek_min(), Some(2));
    }

    #[test]
    fn decrease_key_moves_vertex_to_root() {
        let mut keys = finite(&[1, 5, 6, 7, 8, 9, 10]);
        let mut heap = IndexedMinHeap::build(0..keys.len(), keys.as_slice()).unwrap();

        keys[6] = Distance::ZERO;
        heap.decrease_key(6, keys.as_slice()).unwrap();
        assert_heap_property(&heap, &keys);
        assert_eq!(heap.peek_min(), Some(6));
        assert!(heap.contains(6));

        keys[4] = Distance::Finite(3);
        heap.decrease_key(4, keys.as_slice()).unwrap();
        assert_heap_property(&heap, &keys);
        assert_eq!(heap.extract_min(keys.as_slice()), Ok(6));
        assert_eq!(heap.extract_min(keys.as_slice()), Ok(0));
        assert_eq!(heap.extract_min(keys.as_slice()), Ok(4));
    }

    #[test]
    fn decrease_key_on_extracted_vertex_fails_without_mutation() {
        let mut keys = finite(&[2, 1, 3]);
        let mut heap = IndexedMinHeap::build(0..3, keys.as_slice()).unwrap();
        assert_eq!(heap.extract_min(keys.as_slice()), Ok(1));

        let before = (heap.heap.clone(), heap.len, heap.position.clone());
        keys[1] = Distance::ZERO;
        assert_eq!(
            heap.decrease_key(1, keys.as_slice()),
            Err(Error::NotInHeap { index: 1 })
        );
        assert_eq!(
            heap.decrease_key(7, keys.as_slice()),
            Err(Error::NotInHeap { index: 7 })
        );
        assert_eq!((heap.heap.clone(), heap.len, heap.position.clone()), before);
    }

    #[test]
    fn raised_key_is_rejected_without_mutation() {
        let mut keys = finite(&[1, 5, 6, 7]);
        let mut heap = IndexedMinHeap::build(0..keys.len(), keys.as_slice()).unwrap();
        let before = (heap.heap.clone(), heap.len, heap.position.clone());

        keys[0] = Distance::Finite(100);
        assert!(matches!(
            heap.decrease_key(0, keys.as_slice()),
            Err(Error::InvalidArgument { .. })
        ));
        assert_eq!((heap.heap.clone(), heap.len, heap.position.clone()), before);

        // A raise that stays below both children keeps the heap valid.
        keys[0] = Distance::Finite(4);
        heap.decrease_key(0, keys.as_slice()).unwrap();
        assert_heap_property(&heap, &keys);
        assert_eq!(heap.peek_min(), Some(0));
    }

    #[test]
    fn build_rejects_duplicates_and_out_of_range() {
        let keys = finite(&[1, 2]);
        assert!(matches!(
            IndexedMinHeap::build([0, 0], keys.as_slice()),
            Err(Error::InvalidArgument { .. })
        ));
        assert_eq!(
            IndexedMinHeap::build([0, 2], keys.as_slice()).unwrap_err(),
            Error::OutOfRange { index: 2, len: 2 }
        );
    }

    #[test]
    fn empty_build() {
        let keys: Vec<Distance> = Vec::new();
        let mut heap = IndexedMinHeap::build(0..0, keys.as_slice()).unwrap();
        assert!(heap.is_empty());
        assert_eq!(heap.peek_min(), None);
        assert_eq!(heap.extract_min(keys.as_slice()), Err(Error::EmptyHeap));
    }

    #[test]
    fn left_child_wins_ties() {
        let keys = finite(&[5, 1, 1]);
        let mut heap = IndexedMinHeap::build(0..3, keys.as_slice()).unwrap();
        assert_eq!(heap.heap, vec![1, 0, 2]);
        assert_eq!(heap.extract_min(keys.as_slice()), Ok(1));
        assert_eq!(heap.extract_min(keys.as_slice()), Ok(2));
        assert_eq!(heap.extract_min(keys.as_slice()), Ok(0));
    }

    #[test]
    fn random_interleaved_operations_keep_invariant() {
        for seed in 0..16_u64 {
            let mut rng = StdRng::seed_from_u64(0x4EA9_0000 + seed);
            let n = rng.random_range(1..200);
            let mut keys: Vec<Distance> = (0..n)
                .map(|_| {
                    if rng.random_bool(0.2) {
                        Distance::Infinite
                    } else {
                        Distance::Finite(rng.random_range(0..1_000))
                    }
                })
                .collect();
            let mut heap = IndexedMinHeap::build(0..n, keys.as_slice()).unwrap();
            assert_heap_property(&heap, &keys);

            let mut last = Distance::ZERO;
            let mut extracted = 0;
            while !heap.is_empty() {
                // Keys may only drop to the last extracted key, as in Dijkstra.
                if let (true, Some(floor)) = (rng.random_bool(0.6), last.finite()) {
                    let v = rng.random_range(0..n);
                    if heap.contains(v) {
                        let lowered = match keys[v] {
                            Distance::Finite(d) => rng.random_range(floor..=d),
                            Distance::Infinite => floor + rng.random_range(0..500),
                        };
                        keys[v] = Distance::Finite(lowered);
                        heap.decrease_key(v, keys.as_slice()).unwrap();
                        assert!(heap.contains(v));
                    } else {
                        assert_eq!(
                            heap.decrease_key(v, keys.as_slice()),
                            Err(Error::NotInHeap { index: v })
                        );
                    }
                } else {
                    let v = heap.extract_min(keys.as_slice()).unwrap();
                    assert!(!heap.contains(v));
                    assert!(keys[v] >= last, "seed={seed}");
                    last = keys[v];
                    extracted += 1;
                }
                assert_heap_property(&heap, &keys);
            }
            assert_eq!(extracted, n, "seed={seed}");
        }
    }
}

//! Frontier for the Dijkstra algorithm.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::distance::Distance;

/// Frontier for the Dijkstra algorithm.
/// Min-priority queue on top of a binary heap. A vertex may be queued several times;
/// there is no decrease-key, so the caller has to skip stale entries on `pop()`.
pub(super) struct Frontier {
    heap: BinaryHeap<Entry>,
}

/// Queued vertex. Ordered by distance only, reversed, so the heap top is the nearest vertex.
#[derive(Debug)]
struct Entry {
    vertex: usize,
    distance: Distance,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.distance.cmp(&self.distance)
    }
}

impl Frontier {
    /// Create new empty instance.
    pub fn new() -> Self {
        Frontier { heap: BinaryHeap::new() }
    }

    /// Queue a vertex with its tentative distance.
    pub fn push(&mut self, vertex: usize, distance: Distance) {
        self.heap.push(Entry { vertex, distance });
    }

    /// Extract the vertex with the least distance.
    pub fn pop(&mut self) -> Option<(usize, Distance)> {
        self.heap.pop().map(|Entry { vertex, distance }| (vertex, distance))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

#[test]
fn test_push_pop() {
    use Distance::Finite;

    let mut f = Frontier::new();
    assert_eq!(f.pop(), None);

    f.push(0, Finite(1));
    assert_eq!(f.pop(), Some((0, Finite(1))));
    assert_eq!(f.pop(), None);

    f.push(1, Finite(2));
    f.push(0, Finite(1));
    f.push(2, Finite(3));
    assert_eq!(f.len(), 3);
    assert_eq!(f.pop(), Some((0, Finite(1))));
    assert_eq!(f.pop(), Some((1, Finite(2))));
    assert_eq!(f.pop(), Some((2, Finite(3))));
    assert_eq!(f.pop(), None);
}

#[test]
fn test_duplicate_entries() {
    use Distance::Finite;

    let mut f = Frontier::new();
    f.push(5, Finite(9));
    f.push(5, Finite(4));
    assert_eq!(f.len(), 2);
    assert_eq!(f.pop(), Some((5, Finite(4))));
    assert_eq!(f.pop(), Some((5, Finite(9))));
    assert_eq!(f.pop(), None);
}

#[test]
fn test_ties() {
    use Distance::{Finite, Infinite};

    let mut f = Frontier::new();
    f.push(3, Infinite);
    f.push(1, Finite(2));
    f.push(2, Finite(2));
    f.push(4, Infinite);

    let mut tied = vec![f.pop().map(|e| e.0), f.pop().map(|e| e.0)];
    tied.sort();
    assert_eq!(tied, vec![Some(1), Some(2)]);
    assert_eq!(f.pop().map(|e| e.1), Some(Infinite));
    assert_eq!(f.pop().map(|e| e.1), Some(Infinite));
    assert_eq!(f.pop(), None);
}

//! Dijkstra path search implementation.

use std::collections::HashMap;

use super::distance::Distance;
use super::frontier::Frontier;
use super::Adjacency;

/// Found path with its total weight.
#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) struct SearchResult {
    /// Vertices from the start to the end, inclusive.
    pub path: Vec<usize>,
    pub cost: u64,
}

/// Find the least-weight path from `start` to `end`.
///
/// Returns `None` if `end` is not reachable from `start`.
/// Both vertices must be valid indices into `adjacency`.
pub(crate) fn dijkstra(adjacency: &Adjacency, start: usize, end: usize) -> Option<SearchResult> {
    debug_assert!(start < adjacency.len() && end < adjacency.len(), "Vertex out of range");

    // Algorithm state
    let mut dist = vec![Distance::Infinite; adjacency.len()];
    let mut previous = HashMap::<usize, usize>::new();
    let mut frontier = Frontier::new();

    dist[start] = Distance::ZERO;
    frontier.push(start, Distance::ZERO);

    while let Some((vertex, cost)) = frontier.pop() {
        // The first time `end` leaves the frontier its distance is final
        if vertex == end {
            break;
        }

        // Stale entry, the vertex was queued again with a lower distance since
        if cost > dist[vertex] {
            continue;
        }

        for (&neighbor, &weight) in adjacency[vertex].iter() {
            let candidate = cost + weight;
            if candidate < dist[neighbor] {
                dist[neighbor] = candidate;
                previous.insert(neighbor, vertex);
                frontier.push(neighbor, candidate);
            }
        }
    }

    // Walk back from the end; the chain must be rooted at the start
    let mut path = vec![end];
    let mut current = end;
    while let Some(&prev) = previous.get(&current) {
        path.push(prev);
        current = prev;
    }
    if current != start {
        return None;
    }
    path.reverse();

    let cost = dist[end].finite()?;
    Some(SearchResult { path, cost })
}

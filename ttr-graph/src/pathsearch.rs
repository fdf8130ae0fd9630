//! Path search in a weighted graph.

pub(crate) use self::dijkstra::dijkstra;

mod dijkstra;
mod distance;
mod frontier;

/// Adjacency list indexed by vertex number, linking each vertex
/// to its neighbors with the corresponding edge weight.
pub(crate) type Adjacency = [std::collections::BTreeMap<usize, std::num::NonZeroU32>];

//! Undirected destination graph.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::num::NonZeroU32;

use log::debug;

use crate::errors::{GraphError, Result};
use crate::path::{Path, Segment};
use crate::pathsearch::dijkstra;
use crate::route::Route;

/// Undirected graph over a fixed set of destinations, weighted in segments.
///
/// Vertices are registered once, at construction. Edges are stored per vertex
/// in a map keyed by neighbor, so a second edge between the same pair
/// replaces the first one instead of adding a parallel edge.
#[derive(Clone, Debug)]
pub struct Graph {
    /// Vertex keys in registration order; the position is the vertex number.
    keys: Vec<String>,
    /// Display names, indexed by vertex number.
    names: Vec<String>,
    index: HashMap<String, usize>,
    /// Always symmetric: `adjacency[u][v] == adjacency[v][u]`.
    adjacency: Vec<BTreeMap<usize, NonZeroU32>>,
}

impl Graph {
    /// Create a graph without edges over the given `(key, display name)` pairs.
    ///
    /// A key given twice keeps its first position and takes the last name.
    pub fn new<I, K, N>(destinations: I) -> Self
    where
        I: IntoIterator<Item = (K, N)>,
        K: Into<String>,
        N: Into<String>,
    {
        let mut keys = Vec::<String>::new();
        let mut names = Vec::<String>::new();
        let mut index = HashMap::<String, usize>::new();

        for (key, name) in destinations {
            let (key, name) = (key.into(), name.into());
            if let Some(&i) = index.get(&key) {
                names[i] = name;
                continue;
            }
            index.insert(key.clone(), keys.len());
            keys.push(key);
            names.push(name);
        }

        let adjacency = vec![BTreeMap::new(); keys.len()];
        Graph { keys, names, index, adjacency }
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.keys.len()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Vertex keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Display name of the vertex.
    pub fn vertex_name(&self, key: &str) -> Result<&str> {
        let i = self.vertex(key)?;
        Ok(&self.names[i])
    }

    fn vertex(&self, key: &str) -> Result<usize> {
        self.index.get(key).copied().ok_or_else(|| GraphError::InvalidVertex(key.to_string()))
    }

    /// Join `u` and `v` with an edge of the given weight, replacing any existing edge between them.
    pub fn add_edge(&mut self, u: &str, v: &str, weight: NonZeroU32) -> Result<()> {
        let (i, j) = (self.vertex(u)?, self.vertex(v)?);
        self.adjacency[i].insert(j, weight);
        self.adjacency[j].insert(i, weight);
        Ok(())
    }

    /// Add an edge for every route. Stops at the first route with an unknown endpoint.
    pub fn add_routes<'a, I: IntoIterator<Item = &'a Route>>(&mut self, routes: I) -> Result<()> {
        let mut count = 0;
        for route in routes {
            self.add_edge(&route.start, &route.end, route.segments)?;
            count += 1;
        }
        debug!("added {} routes between {} destinations", count, self.size());
        Ok(())
    }

    /// Keys of the vertices adjacent to `v`.
    pub fn neighbors(&self, v: &str) -> Result<BTreeSet<&str>> {
        let i = self.vertex(v)?;
        Ok(self.adjacency[i].keys().map(|&n| self.keys[n].as_str()).collect())
    }

    pub fn has_edge(&self, u: &str, v: &str) -> Result<bool> {
        Ok(self.edge_weight(u, v)?.is_some())
    }

    /// Weight of the edge between `u` and `v`, if they are adjacent.
    pub fn edge_weight(&self, u: &str, v: &str) -> Result<Option<NonZeroU32>> {
        let (i, j) = (self.vertex(u)?, self.vertex(v)?);
        Ok(self.adjacency[i].get(&j).copied())
    }

    /// Find a path from `start` to `end` with the least total weight.
    ///
    /// `Ok(None)` means `end` is not reachable from `start` over the current edges,
    /// which is a normal outcome the caller has to check for.
    pub fn shortest_path(&self, start: &str, end: &str) -> Result<Option<Path>> {
        let (from, to) = (self.vertex(start)?, self.vertex(end)?);

        match dijkstra(&self.adjacency, from, to) {
            Some(found) => {
                debug!("path {} -> {}: {} hops, {} segments", start, end, found.path.len() - 1, found.cost);
                let vertices = found.path.into_iter().map(|i| self.keys[i].clone()).collect();
                Ok(Some(Path::new(vertices, found.cost)))
            }
            None => {
                debug!("no path {} -> {}", start, end);
                Ok(None)
            }
        }
    }

    /// Describe each edge travelled along the path.
    ///
    /// A single-vertex path travels no edges and yields an empty list.
    pub fn path_segments(&self, path: &Path) -> Result<Vec<Segment>> {
        path.hops()
            .map(|(u, v)| -> Result<Segment> {
                let weight = self.edge_weight(u, v)?.ok_or_else(|| GraphError::MissingEdge(u.to_string(), v.to_string()))?;
                Ok(Segment {
                    from: self.vertex_name(u)?.to_string(),
                    to: self.vertex_name(v)?.to_string(),
                    segments: weight.get(),
                })
            })
            .collect()
    }

    /// Render each edge travelled along the path as `"<from> to <to> in <n> segments"`.
    pub fn path_to_strings(&self, path: &Path) -> Result<Vec<String>> {
        Ok(self.path_segments(path)?.iter().map(Segment::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn w(w: u32) -> NonZeroU32 {
        NonZeroU32::new(w).expect("bad test weight")
    }

    fn route(start: &str, end: &str, segments: u32) -> Route {
        Route::new(start, end, segments).expect("bad test route")
    }

    fn abc() -> Graph {
        Graph::new(vec![("A", "Alpha"), ("B", "Beta"), ("C", "Gamma")])
    }

    #[test]
    fn test_new() {
        let g = abc();
        assert_eq!(g.size(), 3);
        assert_eq!(g.keys().collect::<Vec<_>>(), vec!["A", "B", "C"]);
        assert_eq!(g.vertex_name("B"), Ok("Beta"));
        assert!(g.contains("C"));
        assert!(!g.contains("D"));
        assert_eq!(g.vertex_name("D"), Err(GraphError::InvalidVertex("D".to_string())));
        assert!(g.neighbors("A").expect("bad vertex").is_empty());

        let dup = Graph::new(vec![("A", "Alpha"), ("B", "Beta"), ("A", "Aleph")]);
        assert_eq!(dup.size(), 2);
        assert_eq!(dup.keys().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(dup.vertex_name("A"), Ok("Aleph"));
    }

    #[test]
    fn test_add_edge_is_symmetric() {
        let mut g = abc();
        g.add_edge("A", "B", w(2)).expect("add_edge failed");

        assert!(g.neighbors("A").expect("bad vertex").contains("B"));
        assert!(g.neighbors("B").expect("bad vertex").contains("A"));
        assert_eq!(g.has_edge("A", "B"), Ok(true));
        assert_eq!(g.has_edge("B", "A"), Ok(true));
        assert_eq!(g.has_edge("A", "C"), Ok(false));
        assert_eq!(g.edge_weight("B", "A"), Ok(Some(w(2))));
        assert!(g.neighbors("C").expect("bad vertex").is_empty());
    }

    #[test]
    fn test_add_edge_overwrites() {
        let mut g = abc();
        g.add_edge("A", "B", w(2)).expect("add_edge failed");
        g.add_edge("B", "A", w(5)).expect("add_edge failed");
        assert_eq!(g.edge_weight("A", "B"), Ok(Some(w(5))));
        assert_eq!(g.edge_weight("B", "A"), Ok(Some(w(5))));
        assert_eq!(g.neighbors("A").expect("bad vertex").len(), 1);
    }

    #[test]
    fn test_invalid_vertex() {
        fn invalid<T>() -> Result<T> {
            Err(GraphError::InvalidVertex("X".to_string()))
        }

        let mut g = abc();
        assert_eq!(g.add_edge("A", "X", w(1)), invalid());
        assert_eq!(g.add_edge("X", "A", w(1)), invalid());
        assert_eq!(g.neighbors("X"), invalid());
        assert_eq!(g.has_edge("X", "A"), invalid());
        assert_eq!(g.shortest_path("X", "A"), invalid());
        assert_eq!(g.shortest_path("A", "X"), invalid());
        assert!(g.neighbors("A").expect("bad vertex").is_empty());
    }

    #[test]
    fn test_add_routes() {
        let routes = vec![route("A", "B", 2), route("B", "C", 3)];
        let mut g = abc();
        g.add_routes(&routes).expect("add_routes failed");
        assert_eq!(g.edge_weight("A", "B"), Ok(Some(w(2))));
        assert_eq!(g.edge_weight("C", "B"), Ok(Some(w(3))));
        assert_eq!(g.has_edge("A", "C"), Ok(false));

        let bad = vec![route("A", "C", 1), route("C", "Z", 1), route("B", "A", 9)];
        assert_eq!(g.add_routes(&bad), Err(GraphError::InvalidVertex("Z".to_string())));
        assert_eq!(g.edge_weight("A", "C"), Ok(Some(w(1))));
        assert_eq!(g.edge_weight("A", "B"), Ok(Some(w(2))));
    }

    #[test]
    fn test_add_routes_idempotent() {
        let routes = vec![route("A", "B", 2), route("B", "C", 3), route("A", "C", 7)];
        let mut once = abc();
        once.add_routes(&routes).expect("add_routes failed");
        let mut twice = abc();
        twice.add_routes(&routes).expect("add_routes failed");
        twice.add_routes(&routes).expect("add_routes failed");

        for u in ["A", "B", "C"].iter() {
            for v in ["A", "B", "C"].iter() {
                assert_eq!(once.edge_weight(u, v), twice.edge_weight(u, v));
            }
        }
    }

    #[test]
    fn test_shortest_path() {
        let mut g = abc();
        g.add_routes(&[route("A", "B", 2), route("B", "C", 3)]).expect("add_routes failed");

        let p = g.shortest_path("A", "C").expect("bad vertex").expect("no path");
        assert_eq!(p.vertices(), &["A", "B", "C"]);
        assert_eq!(p.total_segments(), 5);
        assert_eq!(
            g.path_to_strings(&p),
            Ok(vec!["Alpha to Beta in 2 segments".to_string(), "Beta to Gamma in 3 segments".to_string()])
        );

        // A direct route only wins when it is shorter
        g.add_edge("A", "C", w(6)).expect("add_edge failed");
        let p = g.shortest_path("A", "C").expect("bad vertex").expect("no path");
        assert_eq!(p.vertices(), &["A", "B", "C"]);
        g.add_edge("A", "C", w(4)).expect("add_edge failed");
        let p = g.shortest_path("C", "A").expect("bad vertex").expect("no path");
        assert_eq!(p.vertices(), &["C", "A"]);
        assert_eq!(g.path_to_strings(&p), Ok(vec!["Gamma to Alpha in 4 segments".to_string()]));
    }

    #[test]
    fn test_shortest_path_same_vertex() {
        let g = abc();
        let p = g.shortest_path("B", "B").expect("bad vertex").expect("no path");
        assert_eq!(p.vertices(), &["B"]);
        assert_eq!(p.total_segments(), 0);
        assert_eq!(g.path_segments(&p), Ok(vec![]));
    }

    #[test]
    fn test_no_path() {
        let mut g = abc();
        g.add_routes(&[route("B", "C", 3)]).expect("add_routes failed");
        assert_eq!(g.shortest_path("A", "C"), Ok(None));
        assert_eq!(g.shortest_path("C", "A"), Ok(None));
    }

    #[test]
    fn test_path_from_other_graph() {
        let mut full = abc();
        full.add_routes(&[route("A", "B", 2), route("B", "C", 3)]).expect("add_routes failed");
        let p = full.shortest_path("A", "C").expect("bad vertex").expect("no path");

        let mut partial = abc();
        partial.add_routes(&[route("A", "B", 2)]).expect("add_routes failed");
        assert_eq!(partial.path_segments(&p), Err(GraphError::MissingEdge("B".to_string(), "C".to_string())));

        let other = Graph::new(vec![("A", "Alpha")]);
        assert_eq!(other.path_segments(&p), Err(GraphError::InvalidVertex("B".to_string())));
    }

    fn key(i: usize) -> String {
        format!("v{}", i)
    }

    fn random_graph(rng: &mut SmallRng, size: usize) -> Graph {
        let mut g = Graph::new((0..size).map(|i| (key(i), format!("Destination {}", i))));
        for u in 0..size {
            for v in (u + 1)..size {
                if rng.gen_bool(0.35) {
                    g.add_edge(&key(u), &key(v), w(rng.gen_range(1, 9))).expect("add_edge failed");
                }
            }
        }
        g
    }

    /// Least total weight over every simple path, by exhaustive enumeration.
    fn brute_force_min(g: &Graph, from: &str, to: &str) -> Option<u64> {
        fn walk(g: &Graph, at: &str, to: &str, visited: &mut Vec<String>, cost: u64, best: &mut Option<u64>) {
            if at == to {
                *best = Some(best.map_or(cost, |b| b.min(cost)));
                return;
            }
            for n in g.neighbors(at).expect("bad vertex") {
                if visited.iter().any(|v| v == n) {
                    continue;
                }
                let weight = g.edge_weight(at, n).expect("bad vertex").expect("no edge").get();
                visited.push(n.to_string());
                walk(g, n, to, visited, cost + u64::from(weight), best);
                visited.pop();
            }
        }

        let mut best = None;
        walk(g, from, to, &mut vec![from.to_string()], 0, &mut best);
        best
    }

    fn path_weight(g: &Graph, p: &Path) -> u64 {
        p.hops()
            .map(|(u, v)| u64::from(g.edge_weight(u, v).expect("bad vertex").expect("path uses missing edge").get()))
            .sum()
    }

    #[test]
    fn test_shortest_path_is_optimal() {
        let mut rng = SmallRng::seed_from_u64(0x7072);
        for _ in 0..40 {
            let size = rng.gen_range(1, 8);
            let g = random_graph(&mut rng, size);
            for u in 0..size {
                for v in 0..size {
                    let (u, v) = (key(u), key(v));
                    let found = g.shortest_path(&u, &v).expect("bad vertex");
                    let expected = brute_force_min(&g, &u, &v);
                    match found {
                        Some(p) => {
                            assert_eq!(p.start(), u);
                            assert_eq!(p.end(), v);
                            assert_eq!(path_weight(&g, &p), p.total_segments());
                            assert_eq!(Some(p.total_segments()), expected, "{} -> {} in {:?}", u, v, g);
                        }
                        None => assert_eq!(expected, None, "{} -> {} in {:?}", u, v, g),
                    }
                }
            }
        }
    }

    #[test]
    fn test_shortest_path_is_symmetric() {
        let mut rng = SmallRng::seed_from_u64(0x5359);
        for _ in 0..40 {
            let size = rng.gen_range(2, 10);
            let g = random_graph(&mut rng, size);
            for u in 0..size {
                for v in 0..size {
                    let (u, v) = (key(u), key(v));
                    let there = g.shortest_path(&u, &v).expect("bad vertex").map(|p| p.total_segments());
                    let back = g.shortest_path(&v, &u).expect("bad vertex").map(|p| p.total_segments());
                    assert_eq!(there, back, "{} <-> {}", u, v);
                }
            }
        }
    }

    #[test]
    fn test_isolated_vertex_is_unreachable() {
        let mut rng = SmallRng::seed_from_u64(0x150);
        let g = random_graph(&mut rng, 6);

        // Same graph without any edge touching v5
        let mut isolated = Graph::new(g.keys().map(|k| (k.to_string(), k.to_string())).collect::<Vec<_>>());
        for u in 0..5 {
            for v in 0..5 {
                if let Some(weight) = g.edge_weight(&key(u), &key(v)).expect("bad vertex") {
                    isolated.add_edge(&key(u), &key(v), weight).expect("add_edge failed");
                }
            }
        }
        for u in 0..5 {
            assert_eq!(isolated.shortest_path(&key(u), "v5"), Ok(None));
        }
        assert!(isolated.neighbors("v5").expect("bad vertex").is_empty());
    }
}

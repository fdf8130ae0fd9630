//! Found path and its per-edge description.

use std::fmt;

/// Path through the graph, from the start vertex to the end vertex inclusive.
///
/// Never empty. A path from a vertex to itself holds that single vertex.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Path {
    vertices: Vec<String>,
    total_segments: u64,
}

impl Path {
    pub(crate) fn new(vertices: Vec<String>, total_segments: u64) -> Self {
        debug_assert!(!vertices.is_empty(), "Empty path");
        Path { vertices, total_segments }
    }

    /// Vertex keys in travel order.
    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    pub fn start(&self) -> &str {
        &self.vertices[0]
    }

    pub fn end(&self) -> &str {
        &self.vertices[self.vertices.len() - 1]
    }

    /// Number of vertices on the path.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Sum of the edge weights along the path.
    pub fn total_segments(&self) -> u64 {
        self.total_segments
    }

    /// Consecutive vertex pairs, i.e. the edges travelled.
    pub fn hops(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vertices.windows(2).map(|w| (w[0].as_str(), w[1].as_str()))
    }
}

/// One travelled edge, described by destination display names.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Segment {
    pub from: String,
    pub to: String,
    pub segments: u32,
}

impl Segment {
    /// Zero-length description of staying at the same destination.
    pub fn same_destination<S: Into<String>>(name: S) -> Self {
        let name = name.into();
        Segment {
            from: name.clone(),
            to: name,
            segments: 0,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} to {} in {} segments", self.from, self.to, self.segments)
    }
}

#[test]
fn test_path_accessors() {
    let p = Path::new(vec!["A".to_string(), "B".to_string(), "C".to_string()], 5);
    assert_eq!(p.start(), "A");
    assert_eq!(p.end(), "C");
    assert_eq!(p.len(), 3);
    assert_eq!(p.total_segments(), 5);
    assert_eq!(p.hops().collect::<Vec<_>>(), vec![("A", "B"), ("B", "C")]);

    let single = Path::new(vec!["A".to_string()], 0);
    assert_eq!(single.start(), "A");
    assert_eq!(single.end(), "A");
    assert_eq!(single.hops().count(), 0);
}

#[test]
fn test_segment_display() {
    let s = Segment { from: "Alpha".to_string(), to: "Beta".to_string(), segments: 2 };
    assert_eq!(s.to_string(), "Alpha to Beta in 2 segments");
    assert_eq!(Segment::same_destination("Alpha").to_string(), "Alpha to Alpha in 0 segments");
}

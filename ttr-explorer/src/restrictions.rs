//! Restricted edges: routes the traveller may not use.

use std::fmt;
use std::iter::FromIterator;
use std::str::FromStr;

use ttr_graph::Route;

use crate::errors::RestrictionParseError;

/// Unordered pair of destination keys whose route is excluded from the graph.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct RestrictedEdge {
    start: String,
    end: String,
}

impl RestrictedEdge {
    pub fn new<S: Into<String>, E: Into<String>>(start: S, end: E) -> Self {
        RestrictedEdge { start: start.into(), end: end.into() }
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// Whether this edge joins `a` and `b`, in either direction.
    pub fn joins(&self, a: &str, b: &str) -> bool {
        (self.start == a && self.end == b) || (self.start == b && self.end == a)
    }
}

impl FromStr for RestrictedEdge {
    type Err = RestrictionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(2, ':');
        match (parts.next(), parts.next()) {
            (Some(start), Some(end)) if !start.is_empty() && !end.is_empty() => Ok(RestrictedEdge::new(start, end)),
            _ => Err(RestrictionParseError::BadFormat(s.to_string())),
        }
    }
}

impl fmt::Display for RestrictedEdge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

/// Set of restricted edges, kept in the order they were added.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct Restrictions {
    edges: Vec<RestrictedEdge>,
}

impl Restrictions {
    /// Restrict the edge between `a` and `b`.
    ///
    /// Returns `false` and does nothing if either key is empty
    /// or the edge is already restricted, in either direction.
    pub fn add(&mut self, a: &str, b: &str) -> bool {
        if a.is_empty() || b.is_empty() || self.contains(a, b) {
            return false;
        }
        self.edges.push(RestrictedEdge::new(a, b));
        true
    }

    /// Lift the restriction between `a` and `b`. Returns `false` if there was none.
    pub fn remove(&mut self, a: &str, b: &str) -> bool {
        let before = self.edges.len();
        self.edges.retain(|e| !e.joins(a, b));
        self.edges.len() != before
    }

    pub fn contains(&self, a: &str, b: &str) -> bool {
        self.edges.iter().any(|e| e.joins(a, b))
    }

    /// Whether the route is excluded by one of the restrictions.
    pub fn covers(&self, route: &Route) -> bool {
        self.edges.iter().any(|e| route.connects(&e.start, &e.end))
    }

    pub fn iter(&self) -> impl Iterator<Item = &RestrictedEdge> {
        self.edges.iter()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl Extend<RestrictedEdge> for Restrictions {
    fn extend<I: IntoIterator<Item = RestrictedEdge>>(&mut self, iter: I) {
        for edge in iter {
            self.add(&edge.start, &edge.end);
        }
    }
}

impl FromIterator<RestrictedEdge> for Restrictions {
    fn from_iter<I: IntoIterator<Item = RestrictedEdge>>(iter: I) -> Self {
        let mut res = Restrictions::default();
        res.extend(iter);
        res
    }
}

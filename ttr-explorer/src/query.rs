//! Route query over a board.

use log::debug;

use ttr_graph::{GraphError, Segment};

use crate::board::Board;
use crate::restrictions::Restrictions;

pub const INVALID_SELECTION: &str = "Invalid selection";
pub const NO_PATH: &str = "No path exists.";

/// Result of a route query.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum RouteOutcome {
    /// Start or end destination is not selected.
    InvalidSelection,
    /// Start and end are the same destination.
    SameDestination(Segment),
    /// Edges of the shortest route, in travel order.
    Found(Vec<Segment>),
    /// End is not reachable from start with the current restrictions.
    NoPath,
}

impl RouteOutcome {
    /// User-facing lines describing the outcome.
    pub fn describe(&self) -> Vec<String> {
        match self {
            RouteOutcome::InvalidSelection => vec![INVALID_SELECTION.to_string()],
            RouteOutcome::SameDestination(segment) => vec![segment.to_string()],
            RouteOutcome::Found(segments) => segments.iter().map(Segment::to_string).collect(),
            RouteOutcome::NoPath => vec![NO_PATH.to_string()],
        }
    }
}

/// Find the shortest route from `start` to `end` avoiding the restricted edges.
///
/// A missing or empty key means no selection. The graph is built fresh
/// for every query and only when start and end differ.
pub fn plan_route(board: &Board, restrictions: &Restrictions, start: Option<&str>, end: Option<&str>) -> Result<RouteOutcome, GraphError> {
    fn selected(key: Option<&str>) -> Option<&str> {
        key.filter(|k| !k.is_empty())
    }

    let (start, end) = match (selected(start), selected(end)) {
        (Some(start), Some(end)) => (start, end),
        _ => return Ok(RouteOutcome::InvalidSelection),
    };

    if start == end {
        let name = board.name(start).ok_or_else(|| GraphError::InvalidVertex(start.to_string()))?;
        return Ok(RouteOutcome::SameDestination(Segment::same_destination(name)));
    }

    let graph = board.graph(restrictions)?;
    let outcome = match graph.shortest_path(start, end)? {
        Some(path) => RouteOutcome::Found(graph.path_segments(&path)?),
        None => RouteOutcome::NoPath,
    };
    debug!("route {} -> {} with {} restrictions: {:?}", start, end, restrictions.len(), outcome);

    Ok(outcome)
}

/// Describe the shortest route from `start` to `end` as one line per edge.
pub fn compute_route(board: &Board, restrictions: &Restrictions, start: Option<&str>, end: Option<&str>) -> Result<Vec<String>, GraphError> {
    Ok(plan_route(board, restrictions, start, end)?.describe())
}

//! Route explorer: shortest routes between the destinations of a game board,
//! with some of the routes optionally restricted.

pub use ttr_graph::{Graph, GraphError, Path, Route, Segment};

pub use self::board::Board;
pub use self::errors::{BoardError, RestrictionParseError};
pub use self::query::{compute_route, plan_route, RouteOutcome, INVALID_SELECTION, NO_PATH};
pub use self::restrictions::{RestrictedEdge, Restrictions};

mod board;
mod errors;
mod query;
mod restrictions;

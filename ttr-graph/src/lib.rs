//! Destination graph for the route explorer.
//!
//! Holds a small undirected graph of named destinations joined by routes
//! weighted in segments, and finds the shortest route between two of them.

pub use self::errors::{GraphError, RouteError};
pub use self::graph::Graph;
pub use self::path::{Path, Segment};
pub use self::route::Route;

mod errors;
mod graph;
mod path;
mod pathsearch;
mod route;

//! Board data: destination registry and route list.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use ttr_graph::{Graph, GraphError, Route};

use crate::errors::BoardError;
use crate::restrictions::Restrictions;

/// Destinations of a game board and the routes between them. Can be loaded from a JSON file.
#[derive(Clone, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Board {
    /// Destination key to display name.
    pub destinations: BTreeMap<String, String>,

    /// Routes between destinations, in board order.
    #[serde(default)]
    pub routes: Vec<Route>,
}

impl Board {
    /// Read, parse and validate a board file.
    pub fn load(file_path: &Path) -> Result<Self, BoardError> {
        let json = fs::read(file_path).map_err(BoardError::Read)?;
        let board = Self::parse(&json)?;
        board.validate()?;
        info!("Loaded board [{}]: {} destinations, {} routes", file_path.display(), board.destinations.len(), board.routes.len());
        Ok(board)
    }

    pub fn parse(json: &[u8]) -> Result<Self, BoardError> {
        serde_json::from_slice(json).map_err(BoardError::Parse)
    }

    /// Check that every route joins two known destinations.
    pub fn validate(&self) -> Result<(), BoardError> {
        for route in &self.routes {
            for key in &[&route.start, &route.end] {
                if !self.destinations.contains_key(key.as_str()) {
                    return Err(BoardError::UnknownDestination {
                        start: route.start.clone(),
                        end: route.end.clone(),
                        key: key.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Display name of the destination.
    pub fn name(&self, key: &str) -> Option<&str> {
        self.destinations.get(key).map(String::as_str)
    }

    /// Build a fresh graph of every route not covered by `restrictions`.
    pub fn graph(&self, restrictions: &Restrictions) -> Result<Graph, GraphError> {
        let mut graph = Graph::new(self.destinations.iter().map(|(key, name)| (key.as_str(), name.as_str())));
        let open = self.routes.iter().filter(|route| {
            let restricted = restrictions.covers(route);
            if restricted {
                debug!("skipping restricted route {} - {}", route.start, route.end);
            }
            !restricted
        });
        graph.add_routes(open)?;
        Ok(graph)
    }
}

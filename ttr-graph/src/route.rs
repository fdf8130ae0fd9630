//! Route between two destinations.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::errors::RouteError;

/// Undirected route between two destinations, `segments` long.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Route {
    pub start: String,
    pub end: String,
    pub segments: NonZeroU32,
}

impl Route {
    /// New route. Fails if `segments` is zero.
    pub fn new<S: Into<String>, E: Into<String>>(start: S, end: E, segments: u32) -> Result<Self, RouteError> {
        let segments = NonZeroU32::new(segments).ok_or(RouteError::ZeroSegments)?;
        Ok(Route {
            start: start.into(),
            end: end.into(),
            segments,
        })
    }

    /// Whether this route joins `a` and `b`, in either direction.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.start == a && self.end == b) || (self.start == b && self.end == a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let r = Route::new("A", "B", 2).expect("bad test route");
        assert_eq!(r.start, "A");
        assert_eq!(r.end, "B");
        assert_eq!(r.segments.get(), 2);
        assert_eq!(Route::new("A", "B", 0), Err(RouteError::ZeroSegments));
    }

    #[test]
    fn test_connects() {
        let r = Route::new("A", "B", 2).expect("bad test route");
        assert!(r.connects("A", "B"));
        assert!(r.connects("B", "A"));
        assert!(!r.connects("A", "C"));
        assert!(!r.connects("A", "A"));
    }

    #[test]
    fn test_deserialize() {
        let r: Route = serde_json::from_str(r#"{ "start": "A", "end": "B", "segments": 3 }"#).expect("bad test json");
        assert_eq!(r, Route::new("A", "B", 3).expect("bad test route"));

        let zero = serde_json::from_str::<Route>(r#"{ "start": "A", "end": "B", "segments": 0 }"#);
        assert!(zero.is_err());

        let negative = serde_json::from_str::<Route>(r#"{ "start": "A", "end": "B", "segments": -1 }"#);
        assert!(negative.is_err());
    }
}

//! Star systems and the hyperspace lanes joining them.
//!
//! Both types are immutable once constructed. Lanes refer to their endpoints
//! by name only; the [`Graph`](crate::graph::Graph) owns the systems and
//! resolves those names.

use serde::Serialize;

use crate::error::{Error, Result};

/// Upper bound of the hazard scale. Values above are clamped to it.
pub const MAX_HAZARD: u32 = 10;

/// A node in the transit network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    name: String,
    faction: String,
    hazard: u32,
}

impl Location {
    /// Create a location, clamping `hazard` into `0..=MAX_HAZARD`.
    ///
    /// Fails when the name is empty or only whitespace.
    pub fn new(name: impl Into<String>, faction: impl Into<String>, hazard: i64) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::InvalidLocation {
                message: "location name must not be empty".to_string(),
            });
        }

        Ok(Self {
            name,
            faction: faction.into(),
            hazard: hazard.clamp(0, i64::from(MAX_HAZARD)) as u32,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn faction(&self) -> &str {
        &self.faction
    }

    pub fn hazard(&self) -> u32 {
        self.hazard
    }
}

/// An undirected, weighted lane between two locations.
///
/// Equality ignores direction and weights: `A-B` equals `B-A` regardless of
/// distance or toll, which is what the graph uses to reject duplicate lanes.
#[derive(Debug, Clone, Serialize)]
pub struct Connection {
    from: String,
    to: String,
    distance: f64,
    toll: f64,
}

impl Connection {
    /// Create a lane between `from` and `to`.
    ///
    /// Fails when either endpoint name is empty or when `distance` or `toll`
    /// is negative or not finite.
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        distance: f64,
        toll: f64,
    ) -> Result<Self> {
        let from = from.into();
        let to = to.into();
        if from.trim().is_empty() || to.trim().is_empty() {
            return Err(Error::InvalidConnection {
                message: "connection endpoints must not be empty".to_string(),
            });
        }

        for (value, field) in [(distance, "distance"), (toll, "toll")] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConnection {
                    message: format!("{field} must be finite and non-negative, got {value}"),
                });
            }
        }

        Ok(Self {
            from,
            to,
            distance,
            toll,
        })
    }

    /// First endpoint as given at construction.
    pub fn from(&self) -> &str {
        &self.from
    }

    /// Second endpoint as given at construction.
    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn toll(&self) -> f64 {
        self.toll
    }

    /// Whether `name` is one of the two endpoints.
    pub fn contains(&self, name: &str) -> bool {
        self.from == name || self.to == name
    }

    /// Whether this lane joins `a` and `b`, in either direction.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }

    /// The endpoint across the lane from `name`, if `name` is an endpoint.
    pub fn other_endpoint(&self, name: &str) -> Option<&str> {
        if self.from == name {
            Some(&self.to)
        } else if self.to == name {
            Some(&self.from)
        } else {
            None
        }
    }
}

impl PartialEq for Connection {
    fn eq(&self, other: &Self) -> bool {
        self.connects(&other.from, &other.to)
    }
}

impl Eq for Connection {}

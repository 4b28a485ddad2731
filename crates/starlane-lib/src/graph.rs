use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::debug;

use crate::location::{Connection, Location};

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const FUZZY_MATCH_THRESHOLD: f64 = 0.75;

/// Transit network: star systems plus the lanes joining them.
///
/// Systems and lanes are stored flat and cross-referenced by name. The
/// adjacency list of each system holds indices into the lane list, in the
/// order the lanes were added.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    locations: Vec<Location>,
    name_to_index: HashMap<String, usize>,
    connections: Vec<Connection>,
    adjacency: HashMap<String, Vec<usize>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a system. Returns `false` if a system with the same name exists.
    pub fn add_location(&mut self, location: Location) -> bool {
        if self.name_to_index.contains_key(location.name()) {
            debug!(name = location.name(), "rejecting duplicate location");
            return false;
        }
        self.name_to_index
            .insert(location.name().to_string(), self.locations.len());
        self.adjacency.entry(location.name().to_string()).or_default();
        self.locations.push(location);
        true
    }

    /// Add a lane and register it on both endpoints.
    ///
    /// Returns `false` if either endpoint is not a known system or if an
    /// equal lane (same endpoints in either direction) already exists.
    pub fn add_connection(&mut self, connection: Connection) -> bool {
        if !self.contains(connection.from()) || !self.contains(connection.to()) {
            debug!(
                from = connection.from(),
                to = connection.to(),
                "rejecting connection with unknown endpoint"
            );
            return false;
        }

        let duplicate = self
            .lanes_of(connection.from())
            .any(|existing| *existing == connection);
        if duplicate {
            debug!(
                from = connection.from(),
                to = connection.to(),
                "rejecting duplicate connection"
            );
            return false;
        }

        let index = self.connections.len();
        let from = connection.from().to_string();
        let to = connection.to().to_string();
        self.connections.push(connection);
        self.adjacency.entry(from.clone()).or_default().push(index);
        if to != from {
            self.adjacency.entry(to).or_default().push(index);
        }
        true
    }

    /// Whether a system with exactly this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.name_to_index.contains_key(name)
    }

    /// Lookup a system by its case-sensitive name.
    pub fn find_location(&self, name: &str) -> Option<&Location> {
        self.name_to_index
            .get(name)
            .map(|&index| &self.locations[index])
    }

    /// Lookup a system by name, falling back to a trimmed, case-insensitive
    /// match when there is no exact one.
    pub fn resolve_location(&self, name: &str) -> Option<&Location> {
        if let Some(location) = self.find_location(name) {
            return Some(location);
        }
        let wanted = name.trim().to_lowercase();
        self.locations
            .iter()
            .find(|location| location.name().trim().to_lowercase() == wanted)
    }

    /// Names of systems one lane away from `name`, de-duplicated, in
    /// adjacency order. Unknown names have no neighbours.
    pub fn neighbors(&self, name: &str) -> Vec<&str> {
        let mut neighbors: Vec<&str> = Vec::new();
        for lane in self.lanes_of(name) {
            if let Some(other) = lane.other_endpoint(name) {
                if !neighbors.contains(&other) {
                    neighbors.push(other);
                }
            }
        }
        neighbors
    }

    /// The lane joining `a` and `b`, if there is one.
    pub fn connection_between(&self, a: &str, b: &str) -> Option<&Connection> {
        self.lanes_of(a).find(|lane| lane.connects(a, b))
    }

    /// Systems in insertion order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Lanes in insertion order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Systems sorted by name.
    pub fn locations_sorted(&self) -> Vec<&Location> {
        let mut locations: Vec<&Location> = self.locations.iter().collect();
        locations.sort_by(|a, b| a.name().cmp(b.name()));
        locations
    }

    /// Lanes sorted by their first endpoint. Ties keep insertion order.
    pub fn connections_sorted(&self) -> Vec<&Connection> {
        let mut connections: Vec<&Connection> = self.connections.iter().collect();
        connections.sort_by(|a, b| a.from().cmp(b.from()));
        connections
    }

    /// Up to `limit` system names that look like `name`, best match first.
    pub fn fuzzy_location_matches(&self, name: &str, limit: usize) -> Vec<String> {
        fuzzy_matches(self.locations.iter().map(Location::name), name, limit)
    }

    fn lanes_of<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Connection> + 'a {
        self.adjacency
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .map(move |&index| &self.connections[index])
    }
}

/// Rank `candidates` by similarity to `name`, keeping those above the
/// suggestion threshold.
pub(crate) fn fuzzy_matches<'a>(
    candidates: impl Iterator<Item = &'a str>,
    name: &str,
    limit: usize,
) -> Vec<String> {
    let wanted = name.trim().to_lowercase();
    let mut scored: Vec<(f64, &str)> = candidates
        .map(|candidate| {
            let score = strsim::jaro_winkler(&wanted, &candidate.to_lowercase());
            (score, candidate)
        })
        .filter(|(score, _)| *score >= FUZZY_MATCH_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.1.cmp(b.1))
    });
    scored
        .into_iter()
        .take(limit)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}

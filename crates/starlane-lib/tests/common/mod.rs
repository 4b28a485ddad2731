//! Shared fixtures for the integration tests.

use std::path::PathBuf;

use starlane_lib::{Connection, DatasetPaths, Graph, Location, Vehicle};

/// Directory holding the checked-in CSV fixtures.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

#[allow(dead_code)]
pub fn fixture_paths() -> DatasetPaths {
    DatasetPaths::in_dir(&fixtures_dir())
}

/// Add a location, panicking on invalid input or rejection.
#[allow(dead_code)]
pub fn add_location(graph: &mut Graph, name: &str, faction: &str, hazard: i64) {
    let location = Location::new(name, faction, hazard).expect("valid location");
    assert!(graph.add_location(location), "{name} added once");
}

/// Add a lane, panicking on invalid input or rejection.
#[allow(dead_code)]
pub fn add_lane(graph: &mut Graph, from: &str, to: &str, distance: f64, toll: f64) {
    let lane = Connection::new(from, to, distance, toll).expect("valid lane");
    assert!(graph.add_connection(lane), "{from}-{to} accepted");
}

/// A, B, C joined by A-B (5, no toll), B-C (3, toll 2) and A-C (10, no toll).
#[allow(dead_code)]
pub fn triangle() -> Graph {
    let mut graph = Graph::new();
    for name in ["A", "B", "C"] {
        add_location(&mut graph, name, "Neutral", 1);
    }
    add_lane(&mut graph, "A", "B", 5.0, 0.0);
    add_lane(&mut graph, "B", "C", 3.0, 2.0);
    add_lane(&mut graph, "A", "C", 10.0, 0.0);
    graph
}

/// One fuel unit per distance at one credit per unit, no hostile factions.
#[allow(dead_code)]
pub fn unit_vehicle() -> Vehicle {
    let none: [&str; 0] = [];
    Vehicle::new("Unit", "Neutral", 1.0, 1.0, none).expect("valid vehicle")
}

#[allow(dead_code)]
pub fn vehicle_hostile_to(factions: &[&str]) -> Vehicle {
    Vehicle::new("Wary", "Neutral", 1.0, 1.0, factions.iter().copied()).expect("valid vehicle")
}

#[allow(dead_code)]
pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

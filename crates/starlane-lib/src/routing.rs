use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{fuzzy_matches, Graph};
use crate::location::Location;
use crate::path::{find_all_routes_with, EnumerationStrategy};
use crate::route::Route;
use crate::vehicle::{Vehicle, VehicleCatalog};

/// Number of "did you mean" suggestions attached to name lookup errors.
const MAX_SUGGESTIONS: usize = 3;

/// High-level route analysis request, as typed by a user.
///
/// Names are resolved leniently: exact match first, then a trimmed,
/// case-insensitive match. The vehicle may also be given as its zero-based
/// catalog index.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub origin: String,
    pub destination: String,
    pub vehicle: String,
    pub strategy: EnumerationStrategy,
}

impl RouteRequest {
    /// Convenience constructor using the default enumeration strategy.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        vehicle: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            vehicle: vehicle.into(),
            strategy: EnumerationStrategy::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: EnumerationStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Every route found for a resolved request.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub origin: String,
    pub destination: String,
    pub vehicle: Vehicle,
    pub strategy: EnumerationStrategy,
    pub routes: Vec<Route>,
}

impl RoutePlan {
    /// Full path of a route, origin first.
    pub fn path_of(&self, route: &Route) -> Vec<String> {
        std::iter::once(self.origin.clone())
            .chain(route.visited().iter().cloned())
            .collect()
    }
}

/// Resolve the request's names and enumerate all routes.
///
/// Unknown systems or ships are errors carrying suggestions. A request whose
/// endpoints are simply not connected succeeds with no routes.
pub fn plan_routes(
    graph: &Graph,
    catalog: &VehicleCatalog,
    request: &RouteRequest,
) -> Result<RoutePlan> {
    let origin = resolve_location(graph, &request.origin)?;
    let destination = resolve_location(graph, &request.destination)?;
    let vehicle = resolve_vehicle(catalog, &request.vehicle)?;

    debug!(
        origin = origin.name(),
        destination = destination.name(),
        vehicle = vehicle.name(),
        "planning routes"
    );

    let routes = find_all_routes_with(
        graph,
        origin.name(),
        destination.name(),
        vehicle,
        request.strategy,
    );

    Ok(RoutePlan {
        origin: origin.name().to_string(),
        destination: destination.name().to_string(),
        vehicle: vehicle.clone(),
        strategy: request.strategy,
        routes,
    })
}

/// Resolve a system name, returning an error with suggestions when unknown.
pub fn resolve_location<'a>(graph: &'a Graph, name: &str) -> Result<&'a Location> {
    graph.resolve_location(name).ok_or_else(|| Error::UnknownLocation {
        name: name.to_string(),
        suggestions: graph.fuzzy_location_matches(name, MAX_SUGGESTIONS),
    })
}

/// Resolve a ship by name or, failing that, by catalog index.
pub fn resolve_vehicle<'a>(catalog: &'a VehicleCatalog, name: &str) -> Result<&'a Vehicle> {
    if let Some(vehicle) = catalog.get(name) {
        return Ok(vehicle);
    }
    if let Ok(index) = name.trim().parse::<usize>() {
        if let Some(vehicle) = catalog.get_index(index) {
            return Ok(vehicle);
        }
    }

    let names = catalog.names();
    Err(Error::UnknownVehicle {
        name: name.to_string(),
        suggestions: fuzzy_matches(names.iter().map(String::as_str), name, MAX_SUGGESTIONS),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Connection;

    fn fixture() -> (Graph, VehicleCatalog) {
        let mut graph = Graph::new();
        for name in ["Sol", "Vega", "Rigel"] {
            graph.add_location(Location::new(name, "Neutral", 1).expect("valid"));
        }
        graph.add_connection(Connection::new("Sol", "Vega", 2.0, 0.0).expect("valid"));

        let none: [&str; 0] = [];
        let mut catalog = VehicleCatalog::new();
        catalog.add(Vehicle::new("Courier", "Neutral", 1.0, 1.0, none).expect("valid"));
        catalog.add(Vehicle::new("Hauler", "Neutral", 2.0, 1.0, none).expect("valid"));
        (graph, catalog)
    }

    #[test]
    fn names_resolve_case_insensitively() {
        let (graph, catalog) = fixture();
        let plan = plan_routes(&graph, &catalog, &RouteRequest::new(" sol", "VEGA", "courier"))
            .expect("names resolve");
        assert_eq!(plan.origin, "Sol");
        assert_eq!(plan.destination, "Vega");
        assert_eq!(plan.vehicle.name(), "Courier");
        assert_eq!(plan.routes.len(), 1);
        assert_eq!(plan.path_of(&plan.routes[0]), ["Sol", "Vega"]);
    }

    #[test]
    fn vehicle_can_be_selected_by_index() {
        let (_, catalog) = fixture();
        let vehicle = resolve_vehicle(&catalog, "1").expect("index resolves");
        assert_eq!(vehicle.name(), "Hauler");
        assert!(resolve_vehicle(&catalog, "7").is_err());
    }

    #[test]
    fn unknown_system_carries_suggestions() {
        let (graph, catalog) = fixture();
        let err = plan_routes(&graph, &catalog, &RouteRequest::new("Vegaa", "Sol", "Courier"))
            .expect_err("unknown origin");
        match err {
            Error::UnknownLocation { name, suggestions } => {
                assert_eq!(name, "Vegaa");
                assert_eq!(suggestions.first().map(String::as_str), Some("Vega"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn disconnected_endpoints_plan_successfully_with_no_routes() {
        let (graph, catalog) = fixture();
        let plan = plan_routes(&graph, &catalog, &RouteRequest::new("Sol", "Rigel", "Courier"))
            .expect("known names");
        assert!(plan.routes.is_empty());
    }
}

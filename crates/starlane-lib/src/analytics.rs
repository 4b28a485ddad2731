//! Ranking and filtering over a set of enumerated routes.
//!
//! Every function is a single pass over a borrowed slice. Extremum selectors
//! keep the first route seen when several share the best value.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::route::Route;

/// Route with the smallest total distance.
pub fn shortest_by_distance(routes: &[Route]) -> Option<&Route> {
    first_best(routes, |candidate, best| {
        candidate.total_distance() < best.total_distance()
    })
}

/// Route with the largest total distance.
pub fn longest_by_distance(routes: &[Route]) -> Option<&Route> {
    first_best(routes, |candidate, best| {
        candidate.total_distance() > best.total_distance()
    })
}

/// Route with the lowest total cost (fuel plus tolls).
pub fn cheapest(routes: &[Route]) -> Option<&Route> {
    first_best(routes, |candidate, best| {
        candidate.total_cost() < best.total_cost()
    })
}

/// Route with the highest accumulated hazard.
pub fn most_hazardous(routes: &[Route]) -> Option<&Route> {
    first_best(routes, |candidate, best| {
        candidate.total_hazard() > best.total_hazard()
    })
}

/// Routes that never enter a system held by a faction hostile to the ship.
pub fn safe_routes(routes: &[Route]) -> Vec<&Route> {
    routes
        .iter()
        .filter(|route| !route.has_hostile_encounter())
        .collect()
}

/// Routes that only use lanes without a toll.
pub fn toll_free_routes(routes: &[Route]) -> Vec<&Route> {
    routes.iter().filter(|route| route.is_toll_free()).collect()
}

/// Replace the current best only when `better` holds strictly, so ties keep
/// the earliest route.
fn first_best<F>(routes: &[Route], better: F) -> Option<&Route>
where
    F: Fn(&Route, &Route) -> bool,
{
    let mut iter = routes.iter();
    let mut best = iter.next()?;
    for candidate in iter {
        if better(candidate, best) {
            best = candidate;
        }
    }
    Some(best)
}

/// Named analysis over a route set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RouteSelection {
    /// Every route, in enumeration order.
    #[default]
    All,
    Shortest,
    Longest,
    Cheapest,
    MostHazardous,
    /// Routes without hostile encounters.
    Safe,
    TollFree,
}

impl RouteSelection {
    /// All selections, in menu order.
    pub const ALL: [RouteSelection; 7] = [
        RouteSelection::All,
        RouteSelection::Shortest,
        RouteSelection::Longest,
        RouteSelection::Cheapest,
        RouteSelection::MostHazardous,
        RouteSelection::Safe,
        RouteSelection::TollFree,
    ];

    /// Apply the selection, keeping enumeration order. Extremum selections
    /// yield at most one route.
    pub fn apply(self, routes: &[Route]) -> Vec<&Route> {
        match self {
            RouteSelection::All => routes.iter().collect(),
            RouteSelection::Shortest => shortest_by_distance(routes).into_iter().collect(),
            RouteSelection::Longest => longest_by_distance(routes).into_iter().collect(),
            RouteSelection::Cheapest => cheapest(routes).into_iter().collect(),
            RouteSelection::MostHazardous => most_hazardous(routes).into_iter().collect(),
            RouteSelection::Safe => safe_routes(routes),
            RouteSelection::TollFree => toll_free_routes(routes),
        }
    }

    /// Heading used when rendering the selection.
    pub fn label(self) -> &'static str {
        match self {
            RouteSelection::All => "All routes",
            RouteSelection::Shortest => "Shortest route",
            RouteSelection::Longest => "Longest route",
            RouteSelection::Cheapest => "Least expensive route",
            RouteSelection::MostHazardous => "Most hostile route",
            RouteSelection::Safe => "Safe routes",
            RouteSelection::TollFree => "Toll-free routes",
        }
    }
}

impl fmt::Display for RouteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteSelection::All => "all",
            RouteSelection::Shortest => "shortest",
            RouteSelection::Longest => "longest",
            RouteSelection::Cheapest => "cheapest",
            RouteSelection::MostHazardous => "most-hazardous",
            RouteSelection::Safe => "safe",
            RouteSelection::TollFree => "toll-free",
        };
        f.write_str(value)
    }
}

impl FromStr for RouteSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        RouteSelection::ALL
            .into_iter()
            .find(|selection| selection.to_string() == wanted)
            .ok_or_else(|| {
                format!(
                    "unknown route selection '{s}' (expected one of: {})",
                    RouteSelection::ALL
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}

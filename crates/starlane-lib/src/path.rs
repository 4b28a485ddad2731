//! Exhaustive enumeration of simple routes between two systems.
//!
//! The search is a depth-first backtracking walk. Each branch works on its
//! own copy of the in-progress [`Route`], a branch never re-enters the origin
//! or a system it already visited, and it stops as soon as it reaches the
//! destination. Every path found is therefore simple, and recursion depth is
//! bounded by the number of systems.
//!
//! The number of simple paths grows exponentially with the density of cycles
//! in the graph, so queries over large, heavily connected networks can be
//! slow. There is no internal deadline.
//!
//! Each pending branch owns a full copy of its route, so memory grows with
//! the square of the path length under either strategy. Chains of a few
//! thousand systems are fine; tens of thousands can exhaust memory.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::graph::Graph;
use crate::route::Route;
use crate::vehicle::Vehicle;

/// How the depth-first walk keeps its backtracking state.
///
/// Both strategies visit neighbours in the same order and return the same
/// routes in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EnumerationStrategy {
    /// Plain recursion on the call stack.
    #[default]
    Recursive,
    /// An explicit work-stack of frames, for graphs deep enough to exhaust
    /// the call stack. Every frame holds its own route copy, so a chain of
    /// depth `d` keeps O(d²) route entries alive at the deepest point.
    Stack,
}

impl fmt::Display for EnumerationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            EnumerationStrategy::Recursive => "recursive",
            EnumerationStrategy::Stack => "stack",
        };
        f.write_str(value)
    }
}

impl FromStr for EnumerationStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recursive" => Ok(EnumerationStrategy::Recursive),
            "stack" => Ok(EnumerationStrategy::Stack),
            other => Err(format!(
                "unknown enumeration strategy '{other}' (expected recursive or stack)"
            )),
        }
    }
}

/// Find every simple route from `origin` to `destination` for `vehicle`.
///
/// Unknown endpoints, identical endpoints and disconnected endpoints all
/// yield an empty result rather than an error.
pub fn find_all_routes(
    graph: &Graph,
    origin: &str,
    destination: &str,
    vehicle: &Vehicle,
) -> Vec<Route> {
    find_all_routes_with(
        graph,
        origin,
        destination,
        vehicle,
        EnumerationStrategy::default(),
    )
}

/// [`find_all_routes`] with an explicit backtracking strategy.
pub fn find_all_routes_with(
    graph: &Graph,
    origin: &str,
    destination: &str,
    vehicle: &Vehicle,
    strategy: EnumerationStrategy,
) -> Vec<Route> {
    if !graph.contains(origin) || !graph.contains(destination) {
        debug!(origin, destination, "endpoint missing from graph");
        return Vec::new();
    }
    if origin == destination {
        return Vec::new();
    }

    let mut search = Search {
        graph,
        origin,
        destination,
        vehicle,
        routes: Vec::new(),
        seen: HashSet::new(),
    };
    match strategy {
        EnumerationStrategy::Recursive => search.descend(origin, &Route::new()),
        EnumerationStrategy::Stack => search.run_stack(),
    }

    debug!(
        origin,
        destination,
        vehicle = vehicle.name(),
        %strategy,
        routes = search.routes.len(),
        "route enumeration complete"
    );
    search.routes
}

struct Search<'a> {
    graph: &'a Graph,
    origin: &'a str,
    destination: &'a str,
    vehicle: &'a Vehicle,
    routes: Vec<Route>,
    seen: HashSet<Vec<String>>,
}

struct Frame<'a> {
    current: &'a str,
    route: Route,
    neighbors: Vec<&'a str>,
    cursor: usize,
}

impl<'a> Search<'a> {
    fn descend(&mut self, current: &str, route: &Route) {
        let graph = self.graph;
        for next in graph.neighbors(current) {
            if let Some(branch) = self.visit(current, route, next) {
                self.descend(next, &branch);
            }
        }
    }

    fn run_stack(&mut self) {
        let graph = self.graph;
        let mut stack = vec![Frame {
            current: self.origin,
            route: Route::new(),
            neighbors: graph.neighbors(self.origin),
            cursor: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let Some(&next) = frame.neighbors.get(frame.cursor) else {
                stack.pop();
                continue;
            };
            frame.cursor += 1;

            if let Some(route) = self.visit(frame.current, &frame.route, next) {
                stack.push(Frame {
                    current: next,
                    route,
                    neighbors: graph.neighbors(next),
                    cursor: 0,
                });
            }
        }
    }

    /// Handle the hop `current -> next` from `route`.
    ///
    /// Records a finished route when `next` is the destination. Otherwise
    /// returns the extended copy to descend into, or `None` when the branch
    /// is pruned.
    fn visit(&mut self, current: &str, route: &Route, next: &str) -> Option<Route> {
        if next == self.origin {
            return None;
        }
        let connection = self.graph.connection_between(current, next)?;
        let location = self.graph.find_location(next)?;

        if next == self.destination {
            if let Some(arrived) = route.extended(location, connection, self.vehicle) {
                self.accept(arrived);
            }
            return None;
        }

        if route.contains(next) {
            return None;
        }
        route.extended(location, connection, self.vehicle)
    }

    fn accept(&mut self, route: Route) {
        if self.seen.insert(route.visited().to_vec()) {
            self.routes.push(route);
        }
    }
}

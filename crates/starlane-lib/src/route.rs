use std::fmt;

use serde::Serialize;

use crate::location::{Connection, Location};
use crate::vehicle::Vehicle;

/// A path through the network with aggregates accumulated hop by hop.
///
/// `visited` lists the systems entered, in order; the system the journey
/// starts from is not part of it. Every aggregate only grows (or, for the
/// flags, only flips once) as hops are added through [`Route::extend`].
///
/// Cloning a route copies its visited list, so a clone can be extended
/// without affecting the original.
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    visited: Vec<String>,
    total_distance: f64,
    total_cost: f64,
    total_hazard: u32,
    has_hostile_encounter: bool,
    is_toll_free: bool,
}

impl Default for Route {
    fn default() -> Self {
        Self {
            visited: Vec::new(),
            total_distance: 0.0,
            total_cost: 0.0,
            total_hazard: 0,
            has_hostile_encounter: false,
            is_toll_free: true,
        }
    }
}

impl Route {
    /// An empty route: no systems visited, zero totals, toll-free.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one hop into `next` across `connection`.
    ///
    /// The hop is rejected (and `false` returned, leaving the route untouched)
    /// when `connection` does not join the last visited system to `next`
    /// (for an empty route: does not touch `next`), or when `next` has
    /// already been visited.
    pub fn extend(&mut self, next: &Location, connection: &Connection, vehicle: &Vehicle) -> bool {
        let name = next.name();
        let joins = match self.last() {
            Some(last) => connection.connects(last, name),
            None => connection.contains(name),
        };
        if !joins || self.contains(name) {
            return false;
        }

        // `Connection::new` only accepts finite, non-negative distances, so
        // this never rejects a lane that came through the public constructor.
        let Ok(fuel_cost) = vehicle.fuel_cost(connection.distance()) else {
            return false;
        };

        self.visited.push(name.to_string());
        self.total_distance += connection.distance();
        self.total_cost += fuel_cost + connection.toll();
        self.total_hazard += next.hazard();
        if !self.has_hostile_encounter && vehicle.is_hostile_to(next.faction()) {
            self.has_hostile_encounter = true;
        }
        if self.is_toll_free && connection.toll() > 0.0 {
            self.is_toll_free = false;
        }
        true
    }

    /// A copy of this route extended by one hop, or `None` if the hop is
    /// rejected by [`Route::extend`].
    pub fn extended(&self, next: &Location, connection: &Connection, vehicle: &Vehicle) -> Option<Self> {
        let mut copy = self.clone();
        copy.extend(next, connection, vehicle).then_some(copy)
    }

    /// Order-sensitive path equality: same systems in the same order.
    pub fn equals_ordered(&self, other: &Route) -> bool {
        self.visited == other.visited
    }

    pub fn visited(&self) -> &[String] {
        &self.visited
    }

    /// Whether `name` already appears in the visited list.
    pub fn contains(&self, name: &str) -> bool {
        self.visited.iter().any(|visited| visited == name)
    }

    /// The most recently entered system.
    pub fn last(&self) -> Option<&str> {
        self.visited.last().map(String::as_str)
    }

    pub fn hop_count(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn total_hazard(&self) -> u32 {
        self.total_hazard
    }

    pub fn has_hostile_encounter(&self) -> bool {
        self.has_hostile_encounter
    }

    pub fn is_toll_free(&self) -> bool {
        self.is_toll_free
    }
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        self.equals_ordered(other)
    }
}

impl Eq for Route {}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Route: {}", self.visited.join(" -> "))?;
        write!(
            f,
            "Distance: {:.2} LY | Danger: {} | Enemy Encountered: {} | Toll Free: {} | Total Cost: {:.2} cr",
            self.total_distance,
            self.total_hazard,
            yes_no(self.has_hostile_encounter),
            yes_no(self.is_toll_free),
            self.total_cost
        )
    }
}

pub(crate) fn yes_no(flag: bool) -> &'static str {
    if flag {
        "YES"
    } else {
        "NO"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(name: &str, faction: &str, hazard: i64) -> Location {
        Location::new(name, faction, hazard).expect("valid location")
    }

    fn lane(from: &str, to: &str, distance: f64, toll: f64) -> Connection {
        Connection::new(from, to, distance, toll).expect("valid lane")
    }

    fn shuttle() -> Vehicle {
        Vehicle::new("Shuttle", "Union", 2.0, 1.5, ["Pirates"]).expect("valid vehicle")
    }

    #[test]
    fn empty_route_has_neutral_aggregates() {
        let route = Route::new();
        assert!(route.is_empty());
        assert_eq!(route.total_distance(), 0.0);
        assert_eq!(route.total_cost(), 0.0);
        assert_eq!(route.total_hazard(), 0);
        assert!(!route.has_hostile_encounter());
        assert!(route.is_toll_free());
    }

    #[test]
    fn extend_accumulates_every_aggregate() {
        let ship = shuttle();
        let mut route = Route::new();

        assert!(route.extend(&location("Vega", "Union", 3), &lane("Sol", "Vega", 4.0, 0.0), &ship));
        assert!(route.extend(&location("Tortuga", "Pirates", 9), &lane("Vega", "Tortuga", 2.0, 5.0), &ship));

        assert_eq!(route.visited(), ["Vega", "Tortuga"]);
        assert!((route.total_distance() - 6.0).abs() < 1e-9);
        // 4 * 3.0 + 2 * 3.0 fuel plus a 5 credit toll
        assert!((route.total_cost() - 23.0).abs() < 1e-9);
        assert_eq!(route.total_hazard(), 12);
        assert!(route.has_hostile_encounter());
        assert!(!route.is_toll_free());
    }

    #[test]
    fn extend_rejects_lane_not_touching_the_last_system() {
        let ship = shuttle();
        let mut route = Route::new();
        assert!(route.extend(&location("Vega", "Union", 1), &lane("Sol", "Vega", 1.0, 0.0), &ship));

        let before = route.clone();
        assert!(!route.extend(&location("Rigel", "Union", 1), &lane("Sol", "Rigel", 1.0, 0.0), &ship));
        assert_eq!(route, before);
        assert_eq!(route.total_distance(), before.total_distance());
    }

    #[test]
    fn extend_rejects_revisits() {
        let ship = shuttle();
        let mut route = Route::new();
        assert!(route.extend(&location("Vega", "Union", 1), &lane("Sol", "Vega", 1.0, 0.0), &ship));
        assert!(route.extend(&location("Rigel", "Union", 1), &lane("Vega", "Rigel", 1.0, 0.0), &ship));
        assert!(!route.extend(&location("Vega", "Union", 1), &lane("Rigel", "Vega", 1.0, 0.0), &ship));
        assert_eq!(route.hop_count(), 2);
    }

    #[test]
    fn clones_do_not_share_visited_state() {
        let ship = shuttle();
        let mut base = Route::new();
        assert!(base.extend(&location("Vega", "Union", 1), &lane("Sol", "Vega", 1.0, 0.0), &ship));

        let branch = base
            .extended(&location("Rigel", "Union", 1), &lane("Vega", "Rigel", 1.0, 0.0), &ship)
            .expect("valid hop");

        assert_eq!(base.visited(), ["Vega"]);
        assert_eq!(branch.visited(), ["Vega", "Rigel"]);
    }

    #[test]
    fn equality_is_order_sensitive() {
        let ship = shuttle();
        let mut first = Route::new();
        first.extend(&location("A", "Union", 0), &lane("O", "A", 1.0, 0.0), &ship);
        first.extend(&location("B", "Union", 0), &lane("A", "B", 1.0, 0.0), &ship);

        let mut second = Route::new();
        second.extend(&location("B", "Union", 0), &lane("O", "B", 1.0, 0.0), &ship);
        second.extend(&location("A", "Union", 0), &lane("B", "A", 1.0, 0.0), &ship);

        assert!(!first.equals_ordered(&second));
        assert!(first.equals_ordered(&first.clone()));
    }

    #[test]
    fn display_lists_path_and_totals() {
        let ship = shuttle();
        let mut route = Route::new();
        route.extend(&location("Vega", "Union", 2), &lane("Sol", "Vega", 1.0, 0.5), &ship);

        let text = route.to_string();
        assert!(text.starts_with("Route: Vega\n"));
        assert!(text.contains("Distance: 1.00 LY"));
        assert!(text.contains("Toll Free: NO"));
        assert!(text.contains("Total Cost: 3.50 cr"));
    }

    #[test]
    fn lanes_that_reach_extend_always_have_a_fuel_cost() {
        assert!(Connection::new("A", "B", -1.0, 0.0).is_err());
        assert!(Connection::new("A", "B", f64::NAN, 0.0).is_err());

        let ship = shuttle();
        let mut route = Route::new();
        assert!(route.extend(&location("B", "Union", 0), &lane("A", "B", 0.0, 0.0), &ship));
        assert_eq!(route.total_cost(), 0.0);
        assert!(route.is_toll_free());
    }
}

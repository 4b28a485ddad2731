//! Ships, their fuel cost model and the catalog they are selected from.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::{Error, Result};

/// A ship able to travel the network.
///
/// Fuel cost per hop is `distance * cost_per_unit_fuel * fuel_per_unit_distance`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vehicle {
    name: String,
    faction: String,
    cost_per_unit_fuel: f64,
    fuel_per_unit_distance: f64,
    hostile_factions: BTreeSet<String>,
}

impl Vehicle {
    /// Create a vehicle, validating its name and fuel rates.
    pub fn new<I, S>(
        name: impl Into<String>,
        faction: impl Into<String>,
        cost_per_unit_fuel: f64,
        fuel_per_unit_distance: f64,
        hostile_factions: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::InvalidVehicle {
                message: "vehicle name must not be empty".to_string(),
            });
        }

        let rates = [
            (cost_per_unit_fuel, "cost_per_unit_fuel"),
            (fuel_per_unit_distance, "fuel_per_unit_distance"),
        ];
        for (value, field) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidVehicle {
                    message: format!("{field} must be finite and non-negative, got {value}"),
                });
            }
        }

        Ok(Self {
            name,
            faction: faction.into(),
            cost_per_unit_fuel,
            fuel_per_unit_distance,
            hostile_factions: hostile_factions.into_iter().map(Into::into).collect(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn faction(&self) -> &str {
        &self.faction
    }

    pub fn cost_per_unit_fuel(&self) -> f64 {
        self.cost_per_unit_fuel
    }

    pub fn fuel_per_unit_distance(&self) -> f64 {
        self.fuel_per_unit_distance
    }

    /// Hostile factions in sorted order.
    pub fn hostile_factions(&self) -> impl Iterator<Item = &str> {
        self.hostile_factions.iter().map(String::as_str)
    }

    /// Whether systems held by `faction` count as a hostile encounter.
    pub fn is_hostile_to(&self, faction: &str) -> bool {
        self.hostile_factions.contains(faction)
    }

    /// Credits spent on fuel to cover `distance`.
    ///
    /// # Errors
    /// Returns [`Error::NegativeDistance`] when `distance` is negative or not
    /// finite.
    pub fn fuel_cost(&self, distance: f64) -> Result<f64> {
        if !distance.is_finite() || distance < 0.0 {
            return Err(Error::NegativeDistance { distance });
        }
        Ok(distance * self.cost_per_unit_fuel * self.fuel_per_unit_distance)
    }
}

/// Ordered collection of ships, unique by case-insensitive name.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VehicleCatalog {
    vehicles: Vec<Vehicle>,
}

impl VehicleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vehicle. Returns `false` when a vehicle with the same
    /// normalized name is already present.
    pub fn add(&mut self, vehicle: Vehicle) -> bool {
        if self.get(vehicle.name()).is_some() {
            return false;
        }
        self.vehicles.push(vehicle);
        true
    }

    /// Get a vehicle by name (case-insensitive, surrounding whitespace ignored).
    pub fn get(&self, name: &str) -> Option<&Vehicle> {
        let key = normalize_name(name);
        self.vehicles
            .iter()
            .find(|vehicle| normalize_name(vehicle.name()) == key)
    }

    /// Get a vehicle by its position in load order.
    pub fn get_index(&self, index: usize) -> Option<&Vehicle> {
        self.vehicles.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.iter()
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Names of all vehicles, in load order.
    pub fn names(&self) -> Vec<String> {
        self.vehicles.iter().map(|v| v.name.clone()).collect()
    }
}

/// Normalize a ship name for case-insensitive lookup.
fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freighter() -> Vehicle {
        Vehicle::new("Freighter", "Union", 2.5, 4.0, ["Pirates", "Syndicate"])
            .expect("valid vehicle")
    }

    #[test]
    fn fuel_cost_multiplies_distance_by_both_rates() {
        let ship = freighter();
        let cost = ship.fuel_cost(3.0).expect("non-negative distance");
        assert!((cost - 30.0).abs() < 1e-9);
        assert_eq!(ship.fuel_cost(0.0).expect("zero distance"), 0.0);
    }

    #[test]
    fn negative_distance_is_an_invalid_argument() {
        let err = freighter().fuel_cost(-1.0).expect_err("negative distance");
        assert!(matches!(err, Error::NegativeDistance { .. }));
    }

    #[test]
    fn hostility_is_exact_match() {
        let ship = freighter();
        assert!(ship.is_hostile_to("Pirates"));
        assert!(!ship.is_hostile_to("pirates"));
        assert!(!ship.is_hostile_to("Union"));
    }

    #[test]
    fn invalid_rates_are_rejected() {
        let empty: [&str; 0] = [];
        assert!(Vehicle::new("Bad", "Union", -1.0, 1.0, empty).is_err());
        assert!(Vehicle::new("Bad", "Union", 1.0, f64::INFINITY, empty).is_err());
        assert!(Vehicle::new(" ", "Union", 1.0, 1.0, empty).is_err());
    }

    #[test]
    fn catalog_rejects_case_insensitive_duplicates() {
        let empty: [&str; 0] = [];
        let mut catalog = VehicleCatalog::new();
        assert!(catalog.add(freighter()));
        assert!(!catalog.add(
            Vehicle::new(" freighter ", "Other", 1.0, 1.0, empty).expect("valid vehicle")
        ));
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.get("FREIGHTER").map(Vehicle::faction),
            Some("Union")
        );
        assert_eq!(catalog.get_index(0).map(Vehicle::name), Some("Freighter"));
        assert!(catalog.get_index(1).is_none());
    }
}

use std::fmt::Write;

use serde::Serialize;

use crate::analytics::RouteSelection;
use crate::route::{yes_no, Route};
use crate::routing::RoutePlan;

/// Presentation style for turning a [`RouteReport`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    PlainText,
    RichText,
}

/// One route, with the origin prepended to its path.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    /// Position of the route in enumeration order (1-based).
    pub index: usize,
    pub systems: Vec<String>,
    pub hops: usize,
    pub total_distance: f64,
    pub total_cost: f64,
    pub total_hazard: u32,
    pub hostile_encounter: bool,
    pub toll_free: bool,
}

impl RouteSummary {
    pub fn from_route(index: usize, origin: &str, route: &Route) -> Self {
        let systems = std::iter::once(origin.to_string())
            .chain(route.visited().iter().cloned())
            .collect();
        Self {
            index,
            systems,
            hops: route.hop_count(),
            total_distance: route.total_distance(),
            total_cost: route.total_cost(),
            total_hazard: route.total_hazard(),
            hostile_encounter: route.has_hostile_encounter(),
            toll_free: route.is_toll_free(),
        }
    }

    fn path(&self, separator: &str) -> String {
        self.systems.join(separator)
    }
}

/// A selection applied to a route plan, ready to render or serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteReport {
    pub origin: String,
    pub destination: String,
    pub vehicle: String,
    pub selection: RouteSelection,
    /// Number of routes enumerated before the selection was applied.
    pub total_routes: usize,
    pub routes: Vec<RouteSummary>,
}

impl RouteReport {
    /// Apply `selection` to the plan's routes.
    ///
    /// Summaries keep the index of each route within the full enumeration,
    /// so a route is numbered the same under every selection.
    pub fn from_plan(plan: &RoutePlan, selection: RouteSelection) -> Self {
        // Selections keep enumeration order, so one forward pass finds every index.
        let mut indexed = plan.routes.iter().enumerate();
        let routes = selection
            .apply(&plan.routes)
            .into_iter()
            .filter_map(|route| {
                indexed
                    .find(|(_, candidate)| std::ptr::eq(*candidate, route))
                    .map(|(position, _)| RouteSummary::from_route(position + 1, &plan.origin, route))
            })
            .collect();

        Self {
            origin: plan.origin.clone(),
            destination: plan.destination.clone(),
            vehicle: plan.vehicle.name().to_string(),
            selection,
            total_routes: plan.routes.len(),
            routes,
        }
    }

    /// Render the report using the requested textual mode.
    pub fn render(&self, mode: RenderMode) -> String {
        match mode {
            RenderMode::PlainText => self.render_plain(),
            RenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "{}: {} -> {} (ship: {})",
            self.selection.label(),
            self.origin,
            self.destination,
            self.vehicle
        );

        if self.routes.is_empty() {
            let _ = writeln!(buffer, "No {} found.", self.empty_noun());
            return buffer;
        }

        for summary in &self.routes {
            let _ = writeln!(buffer);
            let _ = writeln!(buffer, "Route #{}: {}", summary.index, summary.path(" -> "));
            let _ = writeln!(
                buffer,
                "Distance: {:.2} LY | Danger: {} | Enemy Encountered: {} | Toll Free: {} | Total Cost: {:.2} cr",
                summary.total_distance,
                summary.total_hazard,
                yes_no(summary.hostile_encounter),
                yes_no(summary.toll_free),
                summary.total_cost
            );
        }

        if self.selection == RouteSelection::All {
            let _ = writeln!(buffer, "\nTotal routes found: {}", self.total_routes);
        }
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**{}**: _{} → {}_ (ship: `{}`)",
            self.selection.label(),
            self.origin,
            self.destination,
            self.vehicle
        );

        if self.routes.is_empty() {
            let _ = writeln!(buffer, "_No {} found._", self.empty_noun());
            return buffer;
        }

        for summary in &self.routes {
            let _ = writeln!(
                buffer,
                "* **#{}** {} ({:.2} LY, {:.2} cr, danger {}{}{})",
                summary.index,
                summary.path(" → "),
                summary.total_distance,
                summary.total_cost,
                summary.total_hazard,
                if summary.hostile_encounter {
                    ", hostile"
                } else {
                    ""
                },
                if summary.toll_free { ", toll-free" } else { "" }
            );
        }
        buffer
    }

    fn empty_noun(&self) -> &'static str {
        match self.selection {
            RouteSelection::Safe => "safe routes",
            RouteSelection::TollFree => "toll-free routes",
            _ => "routes",
        }
    }
}

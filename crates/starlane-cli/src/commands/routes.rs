//! Route command handler: enumerate every route and print the requested
//! analyses.

use anyhow::{Context, Result};
use tracing::debug;

use starlane_lib::{
    plan_routes, EnumerationStrategy, Error as PlanError, RouteReport, RouteRequest,
    RouteSelection,
};

use crate::commands::DataSource;
use crate::output::{render_json, render_report, OutputFormat};
use crate::terminal::ColorPalette;

/// Arguments for the routes command.
#[derive(Debug, Clone)]
pub struct RoutesCommandArgs {
    /// Starting system name.
    pub from: String,
    /// Destination system name.
    pub to: String,
    /// Ship name or catalog index.
    pub ship: String,
    /// Analyses to print, in order. Empty means every route.
    pub selections: Vec<RouteSelection>,
    pub strategy: EnumerationStrategy,
}

impl RoutesCommandArgs {
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest::new(&self.from, &self.to, &self.ship).with_strategy(self.strategy)
    }

    fn selections(&self) -> Vec<RouteSelection> {
        if self.selections.is_empty() {
            vec![RouteSelection::All]
        } else {
            self.selections.clone()
        }
    }
}

/// Handle the routes subcommand.
pub fn handle_routes_command(
    source: &DataSource,
    format: OutputFormat,
    args: &RoutesCommandArgs,
) -> Result<()> {
    let dataset = source.load()?;
    let request = args.to_request();

    let plan = plan_routes(&dataset.graph, &dataset.vehicles, &request)
        .map_err(handle_plan_failure)
        .context("failed to plan routes")?;
    debug!(routes = plan.routes.len(), "routes enumerated");

    let reports: Vec<RouteReport> = args
        .selections()
        .into_iter()
        .map(|selection| RouteReport::from_plan(&plan, selection))
        .collect();

    if format == OutputFormat::Json {
        print!("{}", render_json(&reports)?);
        return Ok(());
    }

    let palette = ColorPalette::detect();
    let rendered = reports
        .iter()
        .map(|report| render_report(format, report))
        .collect::<Result<Vec<_>>>()?;
    let separator = format!("\n{}\n\n", palette.muted("----"));
    print!("{}", rendered.join(&separator));
    Ok(())
}

/// Turn lookup failures into a user-facing message. Other errors pass through.
fn handle_plan_failure(err: PlanError) -> anyhow::Error {
    match err {
        PlanError::UnknownLocation { .. } | PlanError::UnknownVehicle { .. } => {
            anyhow::anyhow!("{err}\nhint: the `systems` and `ships` commands list valid names")
        }
        other => anyhow::Error::new(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(selections: Vec<RouteSelection>) -> RoutesCommandArgs {
        RoutesCommandArgs {
            from: "Sol".to_string(),
            to: "Deneb".to_string(),
            ship: "0".to_string(),
            selections,
            strategy: EnumerationStrategy::Stack,
        }
    }

    #[test]
    fn no_selection_means_all_routes() {
        assert_eq!(args(Vec::new()).selections(), [RouteSelection::All]);
        assert_eq!(
            args(vec![RouteSelection::Safe, RouteSelection::Cheapest]).selections(),
            [RouteSelection::Safe, RouteSelection::Cheapest]
        );
    }

    #[test]
    fn request_carries_strategy() {
        let request = args(Vec::new()).to_request();
        assert_eq!(request.origin, "Sol");
        assert_eq!(request.vehicle, "0");
        assert_eq!(request.strategy, EnumerationStrategy::Stack);
    }

    #[test]
    fn unknown_names_point_at_listings() {
        let err = handle_plan_failure(PlanError::UnknownLocation {
            name: "Sool".to_string(),
            suggestions: vec!["Sol".to_string()],
        });
        assert_eq!(
            err.to_string(),
            "unknown system name: Sool. Did you mean 'Sol'?\nhint: the `systems` and `ships` commands list valid names"
        );
    }
}

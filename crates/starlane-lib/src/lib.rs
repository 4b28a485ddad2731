//! Starlane library entry points.
//!
//! This crate models a transit network of star systems joined by hyperspace
//! lanes, enumerates every simple route between two systems for a given ship,
//! and ranks or filters the resulting route set. Dataset loading from CSV
//! files and route rendering live here as well so that higher-level consumers
//! (the CLI) only depend on the functions exported below.
//!

#![deny(warnings)]

pub mod analytics;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod location;
pub mod output;
pub mod path;
pub mod route;
pub mod routing;
pub mod vehicle;

pub use analytics::{
    cheapest, longest_by_distance, most_hazardous, safe_routes, shortest_by_distance,
    toll_free_routes, RouteSelection,
};
pub use dataset::{default_data_dir, load_dataset, Dataset, DatasetPaths, LoadReport};
pub use error::{Error, Result};
pub use graph::Graph;
pub use location::{Connection, Location, MAX_HAZARD};
pub use output::{RenderMode, RouteReport, RouteSummary};
pub use path::{find_all_routes, find_all_routes_with, EnumerationStrategy};
pub use route::Route;
pub use routing::{plan_routes, RoutePlan, RouteRequest};
pub use vehicle::{Vehicle, VehicleCatalog};

//! Loading the transit network and ship roster from CSV files.
//!
//! Three files make up a dataset, each with a single header row:
//!
//! - `star_systems.csv`: `name, faction, danger`
//! - `hyperspace_lanes.csv`: `from, to, distance, toll`
//! - `starships.csv`: `name, faction, fuel_per_distance, cost_per_fuel[, hostile_factions]`
//!
//! Malformed rows are skipped with a warning rather than failing the load, and
//! so are duplicates and lanes whose endpoints are not known systems. The
//! counts end up in the returned [`LoadReport`].

use std::env;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use directories::ProjectDirs;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::location::{Connection, Location};
use crate::vehicle::{Vehicle, VehicleCatalog};

/// Default filename for star systems.
pub const SYSTEMS_FILENAME: &str = "star_systems.csv";
/// Default filename for hyperspace lanes.
pub const LANES_FILENAME: &str = "hyperspace_lanes.csv";
/// Default filename for starships.
pub const SHIPS_FILENAME: &str = "starships.csv";
/// Environment variable naming the directory holding the dataset files.
pub const DATA_DIR_ENV: &str = "STARLANE_DATA_DIR";
/// Faction assigned to systems whose faction column is blank.
pub const DEFAULT_FACTION: &str = "Neutral";

/// Separator between hostile factions in the ships file.
const HOSTILE_SEPARATOR: char = '|';

/// Locations of the three dataset files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub systems: PathBuf,
    pub lanes: PathBuf,
    pub ships: PathBuf,
}

impl DatasetPaths {
    /// Default filenames inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            systems: dir.join(SYSTEMS_FILENAME),
            lanes: dir.join(LANES_FILENAME),
            ships: dir.join(SHIPS_FILENAME),
        }
    }

    /// Resolve the data directory and use the default filenames inside it.
    ///
    /// Precedence: `data_dir` argument, then `STARLANE_DATA_DIR`, then the
    /// platform data directory.
    pub fn resolve(data_dir: Option<&Path>) -> Result<Self> {
        if let Some(dir) = data_dir {
            return Ok(Self::in_dir(dir));
        }
        if let Some(dir) = env::var_os(DATA_DIR_ENV) {
            return Ok(Self::in_dir(Path::new(&dir)));
        }
        Ok(Self::in_dir(&default_data_dir()?))
    }
}

/// Resolve the default data directory using platform-specific project directories.
pub fn default_data_dir() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("com", "starlane", "starlane").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Rows accepted and rejected from one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub loaded: usize,
    pub skipped: usize,
}

/// Per-file outcome of [`load_dataset`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub systems: FileReport,
    pub lanes: FileReport,
    pub ships: FileReport,
}

/// A fully loaded dataset.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub graph: Graph,
    pub vehicles: VehicleCatalog,
    pub report: LoadReport,
}

/// Load systems, then lanes, then ships from `paths`.
pub fn load_dataset(paths: &DatasetPaths) -> Result<Dataset> {
    let mut graph = Graph::new();
    let mut vehicles = VehicleCatalog::new();

    let systems = load_locations(&mut graph, open(&paths.systems)?)?;
    let lanes = load_connections(&mut graph, open(&paths.lanes)?)?;
    let ships = load_vehicles(&mut vehicles, open(&paths.ships)?)?;

    info!(
        systems = systems.loaded,
        lanes = lanes.loaded,
        ships = ships.loaded,
        skipped = systems.skipped + lanes.skipped + ships.skipped,
        "dataset loaded"
    );

    Ok(Dataset {
        graph,
        vehicles,
        report: LoadReport {
            systems,
            lanes,
            ships,
        },
    })
}

fn open(path: &Path) -> Result<File> {
    if !path.exists() {
        return Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(File::open(path)?)
}

/// Read `name, faction, danger` rows into `graph`.
pub fn load_locations<R: Read>(graph: &mut Graph, reader: R) -> Result<FileReport> {
    load_rows(reader, SYSTEMS_FILENAME, |record| {
        let location = parse_location(record)?;
        if graph.add_location(location) {
            Ok(())
        } else {
            Err("duplicate system".to_string())
        }
    })
}

/// Read `from, to, distance, toll` rows into `graph`.
///
/// Systems must already be loaded: lanes naming unknown systems are skipped.
pub fn load_connections<R: Read>(graph: &mut Graph, reader: R) -> Result<FileReport> {
    load_rows(reader, LANES_FILENAME, |record| {
        let connection = parse_connection(record)?;
        if !graph.contains(connection.from()) || !graph.contains(connection.to()) {
            return Err("lane endpoint is not a known system".to_string());
        }
        if graph.add_connection(connection) {
            Ok(())
        } else {
            Err("duplicate lane".to_string())
        }
    })
}

/// Read `name, faction, fuel_per_distance, cost_per_fuel[, hostile]` rows into
/// `catalog`.
pub fn load_vehicles<R: Read>(catalog: &mut VehicleCatalog, reader: R) -> Result<FileReport> {
    load_rows(reader, SHIPS_FILENAME, |record| {
        let vehicle = parse_vehicle(record)?;
        if catalog.add(vehicle) {
            Ok(())
        } else {
            Err("duplicate ship".to_string())
        }
    })
}

/// Drive `accept` over every data row, counting rows it rejects.
///
/// `accept` returns the reason a row was skipped. Rows that are not valid
/// UTF-8 are skipped as well. CSV framing and IO errors abort the load.
fn load_rows<R, F>(reader: R, file: &str, mut accept: F) -> Result<FileReport>
where
    R: Read,
    F: FnMut(&StringRecord) -> std::result::Result<(), String>,
{
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut report = FileReport::default();
    for result in csv_reader.byte_records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let outcome = StringRecord::from_byte_record(record)
            .map_err(|err| err.to_string())
            .and_then(|record| accept(&record));
        match outcome {
            Ok(()) => report.loaded += 1,
            Err(reason) => {
                warn!(file, line, %reason, "skipping row");
                report.skipped += 1;
            }
        }
    }
    Ok(report)
}

fn parse_location(record: &StringRecord) -> std::result::Result<Location, String> {
    expect_columns(record, 3..=3)?;
    let name = required(record, 0, "name")?;
    let faction = match record.get(1) {
        Some(faction) if !faction.is_empty() => faction,
        _ => DEFAULT_FACTION,
    };
    let danger = required(record, 2, "danger")?;
    if !danger.chars().all(|c| c.is_ascii_digit()) {
        return Err(format!("danger must be a non-negative integer, got '{danger}'"));
    }
    // Long digit strings saturate; the location clamps them anyway.
    let danger = danger.parse::<i64>().unwrap_or(i64::MAX);
    Location::new(name, faction, danger).map_err(|err| err.to_string())
}

fn parse_connection(record: &StringRecord) -> std::result::Result<Connection, String> {
    expect_columns(record, 4..=4)?;
    let from = required(record, 0, "from")?;
    let to = required(record, 1, "to")?;
    let distance = non_negative_decimal(required(record, 2, "distance")?, "distance")?;
    let toll = non_negative_decimal(required(record, 3, "toll")?, "toll")?;
    Connection::new(from, to, distance, toll).map_err(|err| err.to_string())
}

fn parse_vehicle(record: &StringRecord) -> std::result::Result<Vehicle, String> {
    expect_columns(record, 4..=5)?;
    let name = required(record, 0, "name")?;
    let faction = required(record, 1, "faction")?;
    let fuel_per_distance = non_negative_decimal(
        required(record, 2, "fuel_per_distance")?,
        "fuel_per_distance",
    )?;
    let cost_per_fuel =
        non_negative_decimal(required(record, 3, "cost_per_fuel")?, "cost_per_fuel")?;
    let hostile = record
        .get(4)
        .unwrap_or_default()
        .split(HOSTILE_SEPARATOR)
        .map(str::trim)
        .filter(|faction| !faction.is_empty());

    Vehicle::new(name, faction, cost_per_fuel, fuel_per_distance, hostile)
        .map_err(|err| err.to_string())
}

fn expect_columns(
    record: &StringRecord,
    expected: std::ops::RangeInclusive<usize>,
) -> std::result::Result<(), String> {
    if expected.contains(&record.len()) {
        Ok(())
    } else {
        Err(format!(
            "expected {}..={} columns, got {}",
            expected.start(),
            expected.end(),
            record.len()
        ))
    }
}

fn required<'r>(
    record: &'r StringRecord,
    index: usize,
    field: &str,
) -> std::result::Result<&'r str, String> {
    match record.get(index) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(format!("{field} must not be blank")),
    }
}

/// Accept plain decimals such as `12` or `3.75`: digits with at most one
/// decimal point, no sign or exponent.
fn non_negative_decimal(value: &str, field: &str) -> std::result::Result<f64, String> {
    let digits_only = value.chars().all(|c| c.is_ascii_digit() || c == '.');
    let single_point = value.matches('.').count() <= 1;
    if !digits_only || !single_point {
        return Err(format!("{field} must be a non-negative number, got '{value}'"));
    }
    value
        .parse::<f64>()
        .map_err(|_| format!("{field} must be a non-negative number, got '{value}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_parser_matches_plain_numbers_only() {
        assert_eq!(non_negative_decimal("12", "d"), Ok(12.0));
        assert_eq!(non_negative_decimal("3.75", "d"), Ok(3.75));
        assert_eq!(non_negative_decimal("0.5", "d"), Ok(0.5));
        assert!(non_negative_decimal("-1", "d").is_err());
        assert!(non_negative_decimal("1e3", "d").is_err());
        assert!(non_negative_decimal("1.2.3", "d").is_err());
        assert!(non_negative_decimal(".", "d").is_err());
    }

    #[test]
    fn paths_use_default_filenames() {
        let paths = DatasetPaths::in_dir(Path::new("/data"));
        assert_eq!(paths.systems, Path::new("/data/star_systems.csv"));
        assert_eq!(paths.lanes, Path::new("/data/hyperspace_lanes.csv"));
        assert_eq!(paths.ships, Path::new("/data/starships.csv"));
    }

    #[test]
    fn explicit_data_dir_wins() {
        let paths = DatasetPaths::resolve(Some(Path::new("/explicit"))).expect("resolves");
        assert_eq!(paths, DatasetPaths::in_dir(Path::new("/explicit")));
    }
}

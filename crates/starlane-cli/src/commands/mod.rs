// One module per subcommand family; main.rs only parses and dispatches.

pub mod listing;
pub mod routes;

use std::path::PathBuf;

use anyhow::{Context, Result};
use starlane_lib::{load_dataset, Dataset, DatasetPaths};

/// Where to read the dataset from, as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct DataSource {
    pub data_dir: Option<PathBuf>,
    pub systems: Option<PathBuf>,
    pub lanes: Option<PathBuf>,
    pub ships: Option<PathBuf>,
}

impl DataSource {
    /// Resolve the data directory, then apply per-file overrides.
    pub fn paths(&self) -> Result<DatasetPaths> {
        let mut paths = DatasetPaths::resolve(self.data_dir.as_deref())
            .context("failed to resolve the dataset directory")?;
        if let Some(systems) = &self.systems {
            paths.systems = systems.clone();
        }
        if let Some(lanes) = &self.lanes {
            paths.lanes = lanes.clone();
        }
        if let Some(ships) = &self.ships {
            paths.ships = ships.clone();
        }
        Ok(paths)
    }

    pub fn load(&self) -> Result<Dataset> {
        let paths = self.paths()?;
        load_dataset(&paths).with_context(|| {
            format!(
                "failed to load dataset (systems: {}, lanes: {}, ships: {})",
                paths.systems.display(),
                paths.lanes.display(),
                paths.ships.display()
            )
        })
    }
}

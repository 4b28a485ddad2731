//! Handlers for the `systems`, `lanes` and `ships` listings.

use anyhow::Result;

use crate::commands::DataSource;
use crate::output::{render_lanes, render_ships, render_systems, OutputFormat};
use crate::terminal::ColorPalette;

/// Print every system, sorted by name.
pub fn handle_list_systems(source: &DataSource, format: OutputFormat) -> Result<()> {
    let dataset = source.load()?;
    let systems = dataset.graph.locations_sorted();
    print!(
        "{}",
        render_systems(format, &systems, &ColorPalette::detect())?
    );
    Ok(())
}

/// Print every lane, sorted by its first endpoint.
pub fn handle_list_lanes(source: &DataSource, format: OutputFormat) -> Result<()> {
    let dataset = source.load()?;
    let lanes = dataset.graph.connections_sorted();
    print!("{}", render_lanes(format, &lanes, &ColorPalette::detect())?);
    Ok(())
}

/// Print every ship in catalog order. The printed index can be passed to
/// `routes --ship`.
pub fn handle_list_ships(source: &DataSource, format: OutputFormat) -> Result<()> {
    let dataset = source.load()?;
    let ships: Vec<_> = dataset.vehicles.iter().collect();
    if ships.is_empty() && format != OutputFormat::Json {
        println!("No ships available in catalog.");
        return Ok(());
    }
    print!("{}", render_ships(format, &ships, &ColorPalette::detect())?);
    Ok(())
}

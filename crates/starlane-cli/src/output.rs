//! Output formatting for listings and route reports.

use std::fmt::{self, Write};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::Serialize;
use starlane_lib::{Connection, Location, RenderMode, RouteReport, Vehicle};

use crate::terminal::ColorPalette;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text with optional terminal colors.
    #[default]
    Text,
    /// Markdown suitable for pasting into notes or chat.
    Rich,
    /// Pretty-printed JSON.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Text => "text",
            OutputFormat::Rich => "rich",
            OutputFormat::Json => "json",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "rich" | "markdown" => Ok(OutputFormat::Rich),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown format '{other}' (expected one of: text, rich, json)"
            )),
        }
    }
}

/// Serialize any result as pretty JSON.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    json.push('\n');
    Ok(json)
}

/// Render one route report. Several reports in JSON mode are rendered by the
/// caller as a single array instead.
pub fn render_report(format: OutputFormat, report: &RouteReport) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.render(RenderMode::PlainText)),
        OutputFormat::Rich => Ok(report.render(RenderMode::RichText)),
        OutputFormat::Json => render_json(report),
    }
}

pub fn render_systems(
    format: OutputFormat,
    systems: &[&Location],
    palette: &ColorPalette,
) -> Result<String> {
    let mut buffer = String::new();
    match format {
        OutputFormat::Json => return render_json(systems),
        OutputFormat::Rich => {
            let _ = writeln!(buffer, "| System | Faction | Danger |");
            let _ = writeln!(buffer, "|---|---|---|");
            for system in systems {
                let _ = writeln!(
                    buffer,
                    "| {} | {} | {} |",
                    system.name(),
                    system.faction(),
                    system.hazard()
                );
            }
        }
        OutputFormat::Text => {
            let _ = writeln!(
                buffer,
                "{}",
                palette.heading(&format!("Star systems ({}):", systems.len()))
            );
            let _ = writeln!(buffer, "{:<20} {:<16} {:>6}", "Name", "Faction", "Danger");
            for system in systems {
                let _ = writeln!(
                    buffer,
                    "{:<20} {:<16} {:>6}",
                    system.name(),
                    system.faction(),
                    system.hazard()
                );
            }
        }
    }
    Ok(buffer)
}

pub fn render_lanes(
    format: OutputFormat,
    lanes: &[&Connection],
    palette: &ColorPalette,
) -> Result<String> {
    let mut buffer = String::new();
    match format {
        OutputFormat::Json => return render_json(lanes),
        OutputFormat::Rich => {
            let _ = writeln!(buffer, "| From | To | Distance (LY) | Toll (cr) |");
            let _ = writeln!(buffer, "|---|---|---|---|");
            for lane in lanes {
                let _ = writeln!(
                    buffer,
                    "| {} | {} | {:.2} | {:.2} |",
                    lane.from(),
                    lane.to(),
                    lane.distance(),
                    lane.toll()
                );
            }
        }
        OutputFormat::Text => {
            let _ = writeln!(
                buffer,
                "{}",
                palette.heading(&format!("Hyperspace lanes ({}):", lanes.len()))
            );
            let _ = writeln!(
                buffer,
                "{:<16} {:<16} {:>13} {:>10}  {}",
                "From", "To", "Distance (LY)", "Toll (cr)", "Toll Free"
            );
            for lane in lanes {
                let _ = writeln!(
                    buffer,
                    "{:<16} {:<16} {:>13.2} {:>10.2}  {}",
                    lane.from(),
                    lane.to(),
                    lane.distance(),
                    lane.toll(),
                    palette.flag(lane.toll() <= 0.0, true)
                );
            }
        }
    }
    Ok(buffer)
}

pub fn render_ships(
    format: OutputFormat,
    ships: &[&Vehicle],
    palette: &ColorPalette,
) -> Result<String> {
    let mut buffer = String::new();
    match format {
        OutputFormat::Json => return render_json(ships),
        OutputFormat::Rich => {
            let _ = writeln!(
                buffer,
                "| # | Ship | Faction | Fuel / LY | Cost / Fuel | Hostile To |"
            );
            let _ = writeln!(buffer, "|---|---|---|---|---|---|");
            for (index, ship) in ships.iter().enumerate() {
                let _ = writeln!(
                    buffer,
                    "| {} | {} | {} | {:.2} | {:.2} | {} |",
                    index,
                    ship.name(),
                    ship.faction(),
                    ship.fuel_per_unit_distance(),
                    ship.cost_per_unit_fuel(),
                    hostile_list(ship)
                );
            }
        }
        OutputFormat::Text => {
            let _ = writeln!(
                buffer,
                "{}",
                palette.heading(&format!("Available ships ({}):", ships.len()))
            );
            let _ = writeln!(
                buffer,
                "{:>3}  {:<16} {:<16} {:>9} {:>11}  {}",
                "#", "Name", "Faction", "Fuel / LY", "Cost / Fuel", "Hostile To"
            );
            for (index, ship) in ships.iter().enumerate() {
                let _ = writeln!(
                    buffer,
                    "{:>3}  {:<16} {:<16} {:>9.2} {:>11.2}  {}",
                    index,
                    ship.name(),
                    ship.faction(),
                    ship.fuel_per_unit_distance(),
                    ship.cost_per_unit_fuel(),
                    hostile_list(ship)
                );
            }
        }
    }
    Ok(buffer)
}

fn hostile_list(ship: &Vehicle) -> String {
    let factions: Vec<&str> = ship.hostile_factions().collect();
    if factions.is_empty() {
        "-".to_string()
    } else {
        factions.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("markdown".parse::<OutputFormat>(), Ok(OutputFormat::Rich));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn ships_table_shows_catalog_index_and_hostiles() {
        let none: [&str; 0] = [];
        let courier = Vehicle::new("Courier", "Federation", 1.0, 1.0, none).expect("valid");
        let raider = Vehicle::new("Raider", "Pirates", 0.8, 1.5, ["Federation"]).expect("valid");
        let text = render_ships(
            OutputFormat::Text,
            &[&courier, &raider],
            &ColorPalette::plain(),
        )
        .expect("renders");

        assert!(text.starts_with("Available ships (2):"));
        let raider_line = text
            .lines()
            .find(|line| line.contains("Raider"))
            .expect("raider listed");
        assert!(raider_line.trim_start().starts_with('1'));
        assert!(raider_line.ends_with("Federation"));
    }
}

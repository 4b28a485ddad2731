use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use starlane_cli::commands::listing::{handle_list_lanes, handle_list_ships, handle_list_systems};
use starlane_cli::commands::routes::{handle_routes_command, RoutesCommandArgs};
use starlane_cli::commands::DataSource;
use starlane_cli::output::OutputFormat;
use starlane_lib::{EnumerationStrategy, RouteSelection};

#[derive(Parser, Debug)]
#[command(author, version, about = "Star lane route discovery")]
struct Cli {
    /// Directory holding star_systems.csv, hyperspace_lanes.csv and starships.csv.
    ///
    /// Defaults to $STARLANE_DATA_DIR, then the platform data directory.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Override the star systems file.
    #[arg(long, global = true)]
    systems: Option<PathBuf>,

    /// Override the hyperspace lanes file.
    #[arg(long, global = true)]
    lanes: Option<PathBuf>,

    /// Override the starships file.
    #[arg(long, global = true)]
    ships: Option<PathBuf>,

    /// Output format: text, rich or json.
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List star systems sorted by name.
    Systems,
    /// List hyperspace lanes sorted by their first endpoint.
    Lanes,
    /// List ships with their catalog index.
    Ships,
    /// Enumerate every route between two systems and analyse them.
    Routes {
        /// Starting system name.
        #[arg(long = "from")]
        from: String,
        /// Destination system name.
        #[arg(long = "to")]
        to: String,
        /// Ship name or catalog index.
        #[arg(long)]
        ship: String,
        /// Analysis to print; repeat for several. One of: all, shortest,
        /// longest, cheapest, most-hazardous, safe, toll-free.
        #[arg(long = "select")]
        select: Vec<RouteSelection>,
        /// Backtracking strategy: recursive or stack.
        #[arg(long, default_value = "recursive")]
        strategy: EnumerationStrategy,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let source = DataSource {
        data_dir: cli.data_dir,
        systems: cli.systems,
        lanes: cli.lanes,
        ships: cli.ships,
    };

    match cli.command {
        Command::Systems => handle_list_systems(&source, cli.format),
        Command::Lanes => handle_list_lanes(&source, cli.format),
        Command::Ships => handle_list_ships(&source, cli.format),
        Command::Routes {
            from,
            to,
            ship,
            select,
            strategy,
        } => {
            let args = RoutesCommandArgs {
                from,
                to,
                ship,
                selections: select,
                strategy,
            };
            handle_routes_command(&source, cli.format, &args)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

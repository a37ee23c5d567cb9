mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tessera",
    version,
    about = "Overlap and coverage analysis for axis-aligned rectangles"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// List every pair of overlapping rectangles
    Overlaps(QueryArgs),
    /// List the intersection region of every overlapping pair
    Regions(QueryArgs),
    /// Print the area covered by the union of all rectangles
    Area(QueryArgs),
    /// Check whether a point is covered by any rectangle
    Covered(commands::covered::CoveredArgs),
    /// Find a point covered by the most rectangles
    MaxPoint(commands::max_point::MaxPointArgs),
    /// Print aggregate coverage statistics
    Stats(QueryArgs),
}

/// Arguments shared by every query command.
#[derive(Args)]
pub struct QueryArgs {
    /// Rectangle set: a `.json` array or a TOML file of `[[rect]]` tables
    pub file: PathBuf,
    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

fn main() {
    let cli = Cli::parse();
    let config = tessera_core::config::load();
    tessera_core::log::init(&config.log);

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Overlaps(args) => commands::overlaps::execute(&args),
        Commands::Regions(args) => commands::regions::execute(&args),
        Commands::Area(args) => commands::area::execute(&args),
        Commands::Covered(args) => commands::covered::execute(&args),
        Commands::MaxPoint(args) => commands::max_point::execute(&args, &config),
        Commands::Stats(args) => commands::stats::execute(&args),
    }
}

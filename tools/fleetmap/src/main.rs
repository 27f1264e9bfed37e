//! fleetmap: place campus robots on a web map.
//!
//! Usage:
//!   fleetmap render --output site/index.html
//!   fleetmap render --config dover.json --roster robots.json --strict
//!   fleetmap scene --pretty
//!   fleetmap geojson --output robots.geojson
//!   fleetmap locate 406 334

use clap::{Parser, Subcommand};

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "fleetmap")]
#[command(about = "Render robot positions from a floor plan onto a Leaflet map", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a self-contained Leaflet page
    Render(commands::RenderArgs),

    /// Print the composed scene as JSON
    Scene(commands::SceneArgs),

    /// Export robot positions as GeoJSON
    Geojson(commands::GeojsonArgs),

    /// Convert one floor-plan pixel position to lat/lng
    Locate(commands::LocateArgs),

    /// Print the default configuration as JSON
    Config,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        for cause in e.chain().skip(1) {
            eprintln!("  {cause}");
        }
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command {
        Commands::Render(args) => commands::render(args),
        Commands::Scene(args) => commands::scene(args),
        Commands::Geojson(args) => commands::geojson(args),
        Commands::Locate(args) => commands::locate(args),
        Commands::Config => commands::print_default_config(),
    }
}

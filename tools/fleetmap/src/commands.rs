//! Subcommand handlers.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use fleetmap_core::config::MapConfig;
use fleetmap_core::state::SceneSnapshot;
use fleetmap_core::types::Robot;
use fleetmap_geo::PixelProjection;
use fleetmap_render::{render_page, to_geojson, write_output};
use fleetmap_scene::roster::{load_roster, validate_roster, FramePolicy};
use fleetmap_scene::{campus_roster, compose_scene};

/// Inputs shared by every command that composes a scene.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Map config JSON (defaults to the built-in campus config)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Robot roster JSON array (defaults to the built-in campus roster)
    #[arg(short, long, value_name = "FILE")]
    pub roster: Option<PathBuf>,

    /// Fail if any robot lies outside the floor-plan image
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output HTML file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Page title
    #[arg(long, default_value = "Campus Robot Map")]
    pub title: String,
}

#[derive(Args, Debug)]
pub struct SceneArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug)]
pub struct GeojsonArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct LocateArgs {
    /// Pixel column on the floor plan
    #[arg(allow_negative_numbers = true)]
    pub x: f64,

    /// Pixel row on the floor plan (0 = top edge)
    #[arg(allow_negative_numbers = true)]
    pub y: f64,

    /// Map config JSON (defaults to the built-in campus config)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn render(args: RenderArgs) -> Result<()> {
    let scene = build_scene(&args.input)?;
    let page = render_page(&scene, &args.title).context("Failed to render page")?;
    emit(args.output.as_deref(), &page)
}

pub fn scene(args: SceneArgs) -> Result<()> {
    let scene = build_scene(&args.input)?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&scene)?
    } else {
        serde_json::to_string(&scene)?
    };
    emit(None, &json)
}

pub fn geojson(args: GeojsonArgs) -> Result<()> {
    let scene = build_scene(&args.input)?;
    let json = serde_json::to_string_pretty(&to_geojson(&scene))?;
    emit(args.output.as_deref(), &json)
}

pub fn locate(args: LocateArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let projection = PixelProjection::new(&config.frame);
    let geo = projection.to_geo(args.x, args.y);
    if !config.frame.contains_local(args.x, args.y) {
        tracing::warn!(x = args.x, y = args.y, "position lies outside the image frame");
    }
    println!("{},{}", geo.lat, geo.lng);
    Ok(())
}

pub fn print_default_config() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&MapConfig::default())?);
    Ok(())
}

fn build_scene(input: &InputArgs) -> Result<SceneSnapshot> {
    let config = load_config(input.config.as_deref())?;
    let robots = load_robots(input.roster.as_deref())?;

    let policy = if input.strict {
        FramePolicy::Reject
    } else {
        FramePolicy::Warn
    };
    let warnings =
        validate_roster(&robots, &config.frame, policy).context("Roster failed validation")?;
    if !warnings.is_empty() {
        tracing::info!(count = warnings.len(), "robots placed outside the image frame");
    }

    Ok(compose_scene(&robots, &config))
}

fn load_config(path: Option<&Path>) -> Result<MapConfig> {
    match path {
        Some(path) => MapConfig::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(MapConfig::default()),
    }
}

fn load_robots(path: Option<&Path>) -> Result<Vec<Robot>> {
    match path {
        Some(path) => {
            load_roster(path).with_context(|| format!("Failed to load roster {}", path.display()))
        }
        None => Ok(campus_roster()),
    }
}

/// Write to `output`, or stdout when no path is given.
fn emit(output: Option<&Path>, contents: &str) -> Result<()> {
    match output {
        Some(path) => Ok(write_output(path, contents)?),
        None => {
            println!("{contents}");
            Ok(())
        }
    }
}

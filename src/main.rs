mod args;
mod config;
mod scene;

use clap::{Args, Parser, Subcommand};
use planner::viewport::{compute_visible_rect, visible_center_offset};
use planner::{
    CameraOptions, CameraPlanner, CameraState, GeoCoordinate, InvalidPaddingError, Padding, ScreenOffset, ViewportSize,
    VisualCenterError, WebMercator,
};
use serde::Serialize;

use crate::config::{ConfigError, MapConfig};
use crate::scene::ContentOffsetScene;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Padding(#[from] InvalidPaddingError),
    #[error(transparent)]
    VisualCenter(#[from] VisualCenterError),
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "mapcam", about = "Plan map cameras around UI chrome")]
struct Cli {
    /// Vector tile edge length used by the projection.
    #[arg(
        long,
        env = "MAP_TILE_SIZE",
        value_parser = args::parse_tile_size,
        default_value_t = planner::consts::DEFAULT_TILE_SIZE_PX
    )]
    tile_size: f64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Visible rectangle left after padding.
    Rect(LayoutArgs),
    /// Pixel offset from the viewport centre to the visible centre.
    Offset(LayoutArgs),
    /// Camera that centres a target in the visible area.
    Plan(PlanArgs),
    /// Coordinate shown at the visible centre of a camera.
    VisualCenter(VisualCenterArgs),
    /// The Nashville content-offset scene (needs MAPBOX_ACCESS_TOKEN).
    Scene {
        #[arg(long, value_parser = args::parse_viewport, default_value = "1080x1920")]
        viewport: ViewportSize,
    },
}

#[derive(Args, Debug)]
struct LayoutArgs {
    /// Viewport size as WIDTHxHEIGHT pixels.
    #[arg(long, value_parser = args::parse_viewport)]
    viewport: ViewportSize,

    /// Insets as LEFT,TOP,RIGHT,BOTTOM pixels, or one value for all edges.
    #[arg(long, value_parser = args::parse_padding, default_value = "0")]
    padding: Padding,
}

#[derive(Args, Debug)]
struct CameraArgs {
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,

    #[arg(long, allow_negative_numbers = true)]
    lon: f64,

    #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
    bearing: f64,

    #[arg(long, default_value_t = 0.0)]
    pitch: f64,
}

#[derive(Args, Debug)]
struct PlanArgs {
    #[command(flatten)]
    camera: CameraArgs,

    /// Zoom level; 0 keeps --current-zoom.
    #[arg(long, default_value_t = 0.0)]
    zoom: f64,

    #[command(flatten)]
    layout: LayoutArgs,

    /// Zoom currently shown by the map, used when --zoom is 0.
    #[arg(long)]
    current_zoom: Option<f64>,
}

#[derive(Args, Debug)]
struct VisualCenterArgs {
    #[command(flatten)]
    camera: CameraArgs,

    /// Zoom level the camera is shown at.
    #[arg(long)]
    zoom: f64,

    #[command(flatten)]
    layout: LayoutArgs,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let planner = CameraPlanner::new(WebMercator::with_tile_size(cli.tile_size));

    match cli.command {
        Command::Rect(layout) => print_json(&compute_visible_rect(layout.viewport, layout.padding)?),
        Command::Offset(layout) => print_json(&checked_offset(&layout)?),
        Command::Plan(plan) => run_plan(&planner, plan),
        Command::VisualCenter(args) => run_visual_center(&planner, args),
        Command::Scene { viewport } => run_scene(&planner, viewport),
    }
}

/// Visible-centre offset, refusing padding the viewport cannot hold.
fn checked_offset(layout: &LayoutArgs) -> Result<ScreenOffset, InvalidPaddingError> {
    compute_visible_rect(layout.viewport, layout.padding)?;
    Ok(visible_center_offset(layout.viewport, layout.padding))
}

fn run_plan(planner: &CameraPlanner, args: PlanArgs) -> Result<(), CliError> {
    let target = GeoCoordinate::new(args.camera.lat, args.camera.lon);
    let options = CameraOptions {
        padding: args.layout.padding,
        zoom: args.zoom,
        bearing: args.camera.bearing,
        pitch: args.camera.pitch,
    };
    let camera = planner.plan(target, args.layout.viewport, &options, args.current_zoom)?;
    print_json(&camera)
}

fn run_visual_center(planner: &CameraPlanner, args: VisualCenterArgs) -> Result<(), CliError> {
    let camera = CameraState::new(
        GeoCoordinate::new(args.camera.lat, args.camera.lon),
        args.zoom,
        args.camera.bearing,
        args.camera.pitch,
    );
    let visual = planner.visual_center(&camera, args.layout.viewport, args.layout.padding)?;
    print_json(&visual)
}

fn run_scene(planner: &CameraPlanner, viewport: ViewportSize) -> Result<(), CliError> {
    let config = MapConfig::from_env()?;
    tracing::info!(style = config.style.name(), token = %config.redacted_token(), "map configured");
    if config.is_secret_token() {
        tracing::warn!("secret access token in use; prefer a public pk. token for map clients");
    }

    let update = ContentOffsetScene::default().build(planner, &config, viewport)?;
    tracing::info!(
        width = viewport.width,
        height = viewport.height,
        markers = update.markers.len(),
        "scene planned"
    );
    print_json(&update)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;

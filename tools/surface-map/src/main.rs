//! Surface observation analysis map.
//!
//! Loads surface station observations from a delimited text file, projects
//! them to an equal-area CRS, cleans them, interpolates the selected
//! variable onto a regular grid, and renders the result over a base map as
//! a PNG figure.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use gridding::{
    interpolate, observations, remove_nan_observations, remove_repeat_coordinates,
    InterpolationMethod,
};
use obs_common::BoundingBox;
use projection::{project_observations, AlbersEqualArea};
use renderer::{render_map, save_png, BoundaryNorm, Colormap};
use station_parser::{dedup_by_station, extract, read_station_file, Variable};

#[derive(Parser, Debug)]
#[command(name = "surface-map")]
#[command(about = "Render an interpolated surface observation analysis map")]
struct Args {
    /// Station observation file path
    #[arg(short, long, default_value = "station_data.txt")]
    input: String,

    /// Output PNG path
    #[arg(short, long, default_value = "surface_map.png")]
    output: String,

    /// Observation variable to analyze
    #[arg(short, long, default_value = "air_temperature")]
    variable: Variable,

    /// Interpolation method (linear, nearest, cressman, barnes)
    #[arg(short, long, default_value = "linear")]
    method: InterpolationMethod,

    /// Horizontal grid resolution in meters
    #[arg(long, default_value_t = 75_000.0)]
    hres: f64,

    /// Geodetic view extent as min_lon,min_lat,max_lon,max_lat
    #[arg(long, default_value = "-120,20,-70,50")]
    extent: BoundingBox,

    /// Lowest color level boundary
    #[arg(long, default_value_t = -20)]
    level_min: i32,

    /// Highest color level boundary (exclusive)
    #[arg(long, default_value_t = 20)]
    level_max: i32,

    /// Figure width in pixels
    #[arg(long, default_value_t = 1500)]
    width: u32,

    /// Figure height in pixels
    #[arg(long, default_value_t = 1000)]
    height: u32,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!(input = %args.input, variable = %args.variable, "Starting surface analysis");

    // Load and deduplicate station records
    let records = read_station_file(&args.input)
        .with_context(|| format!("loading station file {}", args.input))?;
    let records = dedup_by_station(records);
    info!(stations = records.len(), "Loaded station records");

    // Extract the requested variable and reproject coordinates
    let (lons, lats, values) = extract(&records, args.variable);
    let proj = AlbersEqualArea::conus();
    let (xs, ys) = project_observations(&proj, &lons, &lats)
        .context("projecting station coordinates")?;

    // Clean the observation set
    let obs = observations(&xs, &ys, &values)?;
    let obs = remove_nan_observations(&obs);
    info!(observations = obs.len(), "After NaN removal");
    let obs = remove_repeat_coordinates(&obs);
    info!(observations = obs.len(), "After duplicate-coordinate removal");

    // Interpolate onto the analysis grid
    let field = interpolate(&obs, args.method, args.hres)
        .context("interpolating observations")?;
    info!(
        valid = field.valid_count(),
        total = field.spec.len(),
        "Interpolated grid"
    );

    // Render and write the figure
    let cmap = Colormap::magma();
    let norm = BoundaryNorm::unit_range(args.level_min, args.level_max)
        .context("building color levels")?;
    let figure = render_map(
        &field,
        &proj,
        &args.extent,
        args.width,
        args.height,
        &cmap,
        &norm,
    );
    save_png(&figure, &args.output).with_context(|| format!("writing {}", args.output))?;

    info!(output = %args.output, "Analysis complete");
    Ok(())
}

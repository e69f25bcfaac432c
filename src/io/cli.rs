//! Command-line driver: close a stroke against territory loaded from a PNG

use std::path::{Path as FsPath, PathBuf};

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::algorithm::session::ClaimSession;
use crate::algorithm::strategy::FillAlgorithm;
use crate::geometry::{GridCell, Path};
use crate::io::configuration::{
    DEFAULT_FILL_ALGORITHM, DEFAULT_MAX_GROWTH_CELLS, DEFAULT_PLANE, FillSettings, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{load_occupancy, render_claims};

#[derive(Parser, Debug)]
#[command(name = "territory")]
#[command(
    author,
    version,
    about = "Close a drawn stroke against claimed territory and fill the enclosed cells"
)]
/// Command-line arguments for the territory tool
pub struct Cli {
    /// Occupancy PNG; opaque pixels are claimed territory
    #[arg(value_name = "MAP")]
    pub map: PathBuf,

    /// Drawn stroke as `x,z` pairs separated by `;`
    #[arg(short, long)]
    pub stroke: String,

    /// Outline cell the stroke leaves from, as `x,z`
    #[arg(long)]
    pub start: String,

    /// Outline cell the stroke returns to, as `x,z`
    #[arg(long)]
    pub end: String,

    /// Interior fill algorithm
    #[arg(short, long, value_enum, default_value_t = DEFAULT_FILL_ALGORITHM)]
    pub algorithm: FillAlgorithm,

    /// Ceiling on cells accepted by a single growth pass
    #[arg(long, default_value_t = DEFAULT_MAX_GROWTH_CELLS)]
    pub max_cells: usize,

    /// Elevation plane of the claim grid
    #[arg(long, default_value_t = DEFAULT_PLANE, allow_negative_numbers = true)]
    pub plane: i32,

    /// Output PNG (defaults to `<MAP>_claimed.png`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Where the rendered result is written
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.map))
    }

    /// Fill settings selected on the command line
    pub const fn settings(&self) -> FillSettings {
        FillSettings {
            algorithm: self.algorithm,
            max_cells: self.max_cells,
        }
    }
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence; otherwise warnings only, or debug when
/// `verbose` is set. A subscriber installed earlier is kept.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Parse a cell written as `x,z`
///
/// # Errors
///
/// Returns an invalid parameter error if the text is not two integers
pub fn parse_cell(parameter: &'static str, text: &str, plane: i32) -> Result<GridCell> {
    let reason = "expected two integers written as `x,z`";
    let mut parts = text.split(',').map(str::trim);
    let (Some(x), Some(z), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid_parameter(parameter, &text, &reason));
    };
    match (x.parse::<i32>(), z.parse::<i32>()) {
        (Ok(x), Ok(z)) => Ok(GridCell::new(x, z, plane)),
        _ => Err(invalid_parameter(parameter, &text, &reason)),
    }
}

/// Parse a stroke written as `x,z` pairs separated by `;`
///
/// # Errors
///
/// Returns an invalid parameter error if any pair is malformed
pub fn parse_stroke(text: &str, plane: i32) -> Result<Path> {
    text.split(';')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| parse_cell("stroke", pair, plane))
        .collect::<Result<Vec<_>>>()
        .map(Path::new)
}

fn default_output_path(map: &FsPath) -> PathBuf {
    let stem = map.file_stem().unwrap_or_default();
    let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());

    if let Some(parent) = map.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}

/// Runs one claim attempt described by the command line
pub struct ClaimRunner {
    cli: Cli,
}

impl ClaimRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the map, submit the stroke and render the outcome
    ///
    /// Returns the number of newly claimed cells, or `None` if the stroke was
    /// rejected (nothing is written in that case).
    ///
    /// # Errors
    ///
    /// Returns an error if argument parsing, image I/O or the claim itself fails
    pub fn run(&self) -> Result<Option<usize>> {
        let plane = self.cli.plane;
        let settings = self.cli.settings();
        settings.validate()?;

        let stroke = parse_stroke(&self.cli.stroke, plane)?;
        let start = parse_cell("start", &self.cli.start, plane)?;
        let end = parse_cell("end", &self.cli.end, plane)?;

        let map = load_occupancy(&self.cli.map, plane)?;
        info!(
            map = %self.cli.map.display(),
            occupied = map.occupied.len(),
            "loaded occupancy map"
        );

        let mut session = ClaimSession::from_oracle(start, &map.occupied, settings)?;
        let Some(claimed) = session.submit(&stroke, start, end, &map.occupied)? else {
            warn!(%start, %end, "stroke does not connect to claimed territory");
            return Ok(None);
        };

        let output_path = self.cli.output_path();
        render_claims(map.width, map.height, &map.occupied, &claimed, &output_path)?;
        info!(
            output = %output_path.display(),
            claimed = claimed.len(),
            outline = session.region().outline().len(),
            "claim rendered"
        );

        Ok(Some(claimed.len()))
    }
}

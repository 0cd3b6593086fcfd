//! raster-lab: watch classic rasterization algorithms light up a grid.
//!
//! Runs one algorithm on the given endpoints (or circle center and radius),
//! prints its description and a timing summary, then renders the result to
//! the terminal or a PNG file.
//!
//! Run: `raster-lab -a wu --x1 -6 --y1 -2 --x2 7 --y2 4`

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use raster_lab::catalog;
use raster_lab::config::Config;
use raster_lab::output::{PngEncoder, TerminalEncoder, TerminalMode};
use raster_lab::raster::{Algorithm, Request};
use raster_lab::render::{select_renderer, RenderTarget, RendererKind};
use raster_lab::timing::time_runs;
use std::path::PathBuf;

/// raster-lab: classic rasterization algorithms on a cell grid
#[derive(Parser, Debug)]
#[command(name = "raster-lab")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Step, DDA, Bresenham, midpoint circle, Bezier and Wu on a cell grid", long_about = None)]
struct Cli {
    /// Algorithm: step, dda, bresenham, circle, bezier, wu
    #[arg(short, long, default_value = "bresenham")]
    algorithm: String,

    /// First point X (circle center X)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    x1: f64,

    /// First point Y (circle center Y)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    y1: f64,

    /// Second point X
    #[arg(long, default_value_t = 5.0, allow_hyphen_values = true)]
    x2: f64,

    /// Second point Y
    #[arg(long, default_value_t = 3.0, allow_hyphen_values = true)]
    y2: f64,

    /// Circle radius in cells [default: from config, 8]
    #[arg(short, long, allow_hyphen_values = true)]
    radius: Option<i64>,

    /// Timing runs [default: from config, 50]
    #[arg(long)]
    runs: Option<usize>,

    /// Renderer: auto, direct, accelerated [default: from config, auto]
    #[arg(long)]
    renderer: Option<String>,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the rendered grid to a PNG file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the grid to the terminal: ascii, half-block, ansi
    #[arg(short, long)]
    terminal: Option<String>,

    /// Print every emitted plot
    #[arg(long)]
    cells: bool,

    /// List the algorithms and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if cli.list {
        for info in catalog::entries() {
            println!("{:<10} {}", info.algorithm.id(), info.title);
        }
        return Ok(());
    }

    let config = load_config(cli.config.as_deref())?;
    let algorithm: Algorithm = cli.algorithm.parse()?;

    let mut request = if algorithm.uses_radius() {
        Request::circle(cli.x1, cli.y1, cli.radius.unwrap_or_else(|| i64::from(config.radius)))
    } else {
        Request::line(algorithm, cli.x1, cli.y1, cli.x2, cli.y2)
    };
    request = request.with_color(config.color_for(algorithm)?);

    let info = catalog::describe(algorithm);
    println!("{}", info.title);
    println!("{}", info.summary);

    let timing = time_runs(&request, cli.runs.unwrap_or(config.runs))?;
    println!("{}", timing.summary());

    if cli.cells {
        for plot in &timing.plots {
            println!("{:>5} {:>5}  {:.3}", plot.cell.x, plot.cell.y, plot.coverage());
        }
    }

    let kind: RendererKind = match &cli.renderer {
        Some(name) => name.parse()?,
        None => config.renderer,
    };
    let mut target =
        RenderTarget::new(config.canvas.width, config.canvas.height, config.canvas.cell_size)
            .context("invalid canvas settings")?;
    let mut renderer = select_renderer(kind);
    renderer.render(&mut target, &config.grid_style()?, &timing.plots)?;

    if let Some(path) = &cli.output {
        PngEncoder::write_to_file(target.framebuffer(), path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("saved {}", path.display());
    }

    if cli.terminal.is_some() || cli.output.is_none() {
        let mode: TerminalMode = match &cli.terminal {
            Some(name) => name.parse()?,
            None => TerminalMode::default(),
        };
        print!("{}", TerminalEncoder::new().mode(mode).render(&target));
    }

    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    if let Some(path) = path {
        return Config::load(path).with_context(|| format!("failed to load {}", path.display()));
    }
    match Config::default_path() {
        Some(path) if path.exists() => {
            debug!("config: {}", path.display());
            Config::load(&path).with_context(|| format!("failed to load {}", path.display()))
        }
        _ => Ok(Config::default()),
    }
}

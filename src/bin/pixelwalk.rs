//! pixelwalk: step through rasterization and clipping algorithms.
//!
//! Run: `pixelwalk raster 0 0 8 3 --algorithm wu`
//!      `pixelwalk clip -5 5 15 5 --window 0 0 10 10`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use pixelwalk::config::Config;
use pixelwalk::{clip_with, debug, rasterize, ClipKind, ClipWindow, Line, Point, RasterKind};

/// pixelwalk: discrete rasterization and line clipping
#[derive(Parser, Debug)]
#[command(name = "pixelwalk")]
#[command(version)]
#[command(about = "Step through line rasterizers and clippers", long_about = None)]
struct Cli {
    /// Config file path [default: <config dir>/pixelwalk/config.yaml]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print debug logging to stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rasterize a segment (or a circle: center, then a point on it)
    Raster {
        /// Start x (circle center x)
        #[arg(allow_negative_numbers = true)]
        x0: i32,
        /// Start y (circle center y)
        #[arg(allow_negative_numbers = true)]
        y0: i32,
        /// End x (radius point x)
        #[arg(allow_negative_numbers = true)]
        x1: i32,
        /// End y (radius point y)
        #[arg(allow_negative_numbers = true)]
        y1: i32,

        /// Rasterizer name (see `pixelwalk list`)
        #[arg(short, long)]
        algorithm: Option<String>,
    },

    /// Clip a segment against a rectangular window
    Clip {
        /// Start x
        #[arg(allow_negative_numbers = true)]
        x1: f64,
        /// Start y
        #[arg(allow_negative_numbers = true)]
        y1: f64,
        /// End x
        #[arg(allow_negative_numbers = true)]
        x2: f64,
        /// End y
        #[arg(allow_negative_numbers = true)]
        y2: f64,

        /// Clip window bounds
        #[arg(
            short,
            long,
            num_args = 4,
            required = true,
            allow_negative_numbers = true,
            value_names = ["XMIN", "YMIN", "XMAX", "YMAX"]
        )]
        window: Vec<f64>,

        /// Clipper name (see `pixelwalk list`)
        #[arg(short, long)]
        algorithm: Option<String>,
    },

    /// List available algorithms
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    if cli.debug || config.debug {
        debug::enable();
    }
    pixelwalk::debug!("cli", "{config:?}");

    if let Err(e) = run(&cli, &config) {
        pixelwalk::error!("cli", "{e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => default_config_path().map(Config::load_or_default).unwrap_or_default(),
    };
    config.apply_env().context("reading environment overrides")?;
    Ok(config)
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pixelwalk").join("config.yaml"))
}

fn run(cli: &Cli, config: &Config) -> Result<()> {
    match &cli.command {
        Command::Raster { x0, y0, x1, y1, algorithm } => {
            let kind = match algorithm {
                Some(name) => name.parse::<RasterKind>()?,
                None => config.raster.default_algorithm,
            };
            run_raster(kind, Point::new(*x0, *y0), Point::new(*x1, *y1));
        }
        Command::Clip { x1, y1, x2, y2, window, algorithm } => {
            let kind = match algorithm {
                Some(name) => name.parse::<ClipKind>()?,
                None => config.clip.default_algorithm,
            };
            let &[xmin, ymin, xmax, ymax] = window.as_slice() else {
                anyhow::bail!("--window takes exactly four values");
            };
            let window = ClipWindow::try_new(xmin, ymin, xmax, ymax)?;
            run_clip(kind, Line::from_coords(*x1, *y1, *x2, *y2), &window, config);
        }
        Command::List => run_list(),
    }
    Ok(())
}

fn run_raster(kind: RasterKind, a: Point, b: Point) {
    let result = rasterize(kind, a, b);

    println!(
        "{kind}: {} steps in {:.3}ms",
        result.len(),
        result.elapsed().as_secs_f64() * 1000.0
    );
    for (i, step) in result.iter().enumerate() {
        let p = step.coordinates();
        println!("step {i}: ({}, {}) {} [{:.3}]", p.x, p.y, step.label(), step.intensity());
    }
}

fn run_clip(kind: ClipKind, line: Line, window: &ClipWindow, config: &Config) {
    let outcome = clip_with(kind, line, window, &config.midpoint_limits());

    println!("{kind}: {} iterations", outcome.iterations);
    match outcome.visible_line() {
        Some(visible) => println!(
            "visible: ({:.3}, {:.3}) - ({:.3}, {:.3})",
            visible.start.x, visible.start.y, visible.end.x, visible.end.y
        ),
        None => println!("not visible"),
    }
}

fn run_list() {
    println!("rasterizers:");
    for kind in RasterKind::ALL {
        println!("  {kind}");
    }
    println!("clippers:");
    for kind in ClipKind::ALL {
        println!("  {kind}");
    }
}

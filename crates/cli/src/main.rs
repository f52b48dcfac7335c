use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use csg::Vector;
use tracing_subscriber::fmt::SubscriberBuilder;

mod demo;
mod render;

use demo::{Demo, ViewArgs};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Headless driver for the csg polygon kernel")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print an ASCII dot fill of a demo shape
    Fill {
        #[arg(long, value_enum, default_value_t = Demo::SquareHole)]
        shape: Demo,
        /// Lattice spacing in view units
        #[arg(long, default_value_t = 0.05)]
        res: f64,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Print the inside segments of the horizontal line at `y` as JSON
    Scan {
        #[arg(long, value_enum, default_value_t = Demo::TwinPeaks)]
        shape: Demo,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Print one scanline per lattice row across the shape as JSON
    Rows {
        #[arg(long, value_enum, default_value_t = Demo::TwinPeaks)]
        shape: Demo,
        #[arg(long, default_value_t = 0.25)]
        res: f64,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Print winding number and containment of a point as JSON
    Query {
        #[arg(long, value_enum, default_value_t = Demo::SquareHole)]
        shape: Demo,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Print library version information as JSON
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Fill { shape, res, view } => fill(shape, res, view),
        Action::Scan { shape, y, view } => scan(shape, y, view),
        Action::Rows { shape, res, view } => rows(shape, res, view),
        Action::Query { shape, x, y, view } => query(shape, Vector::new(x, y), view),
        Action::Report => report(),
    }
}

fn fill(demo: Demo, res: f64, view: ViewArgs) -> Result<()> {
    tracing::info!(shape = ?demo, res, view = ?view, "fill");
    let shape = view.place(demo)?;
    let art = render::ascii_fill(&shape, res).context("rasterizing shape")?;
    print!("{art}");
    Ok(())
}

fn scan(demo: Demo, y: f64, view: ViewArgs) -> Result<()> {
    tracing::info!(shape = ?demo, y, view = ?view, "scan");
    let shape = view.place(demo)?;
    let report = render::scan(&shape, y);
    tracing::info!(segments = report.segments.len(), "scan_done");
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn rows(demo: Demo, res: f64, view: ViewArgs) -> Result<()> {
    tracing::info!(shape = ?demo, res, view = ?view, "rows");
    let shape = view.place(demo)?;
    let rows = render::rows(&shape, res).context("scanning rows")?;
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

fn query(demo: Demo, p: Vector, view: ViewArgs) -> Result<()> {
    tracing::info!(shape = ?demo, point = %p, view = ?view, "query");
    let shape = view.place(demo)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&render::query(&shape, p))?
    );
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "csg": csg::VERSION,
        "cli": env!("CARGO_PKG_VERSION"),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

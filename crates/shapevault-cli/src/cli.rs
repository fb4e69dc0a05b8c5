use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "shapevault",
    about = "shapevault: in-memory shape repository with derived metrics",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Rectangle file, one `x y width height` line per shape
    #[arg(long, global = true)]
    pub rectangles: Vec<PathBuf>,

    /// Cone file, one `cx cy cz radius height` line per shape
    #[arg(long, global = true)]
    pub cones: Vec<PathBuf>,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print cached metrics for every loaded shape
    Metrics,
    /// Filter shapes with composed conditions
    Query(QueryArgs),
    /// Sort shapes by a derived metric
    Sort(SortArgs),
    /// Totals and extremes per shape kind
    Summary,
}

#[derive(Args, Default)]
pub struct QueryArgs {
    /// Only shapes of this kind
    #[arg(long)]
    pub kind: Option<KindArg>,
    #[arg(long)]
    pub min_area: Option<f64>,
    #[arg(long)]
    pub max_area: Option<f64>,
    #[arg(long)]
    pub min_volume: Option<f64>,
    /// Only rectangles touching an axis
    #[arg(long)]
    pub touching_axis: bool,
    /// Invert the combined condition
    #[arg(long)]
    pub invert: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum KindArg {
    Rectangle,
    Cone,
}

#[derive(Args)]
pub struct SortArgs {
    #[arg(long, default_value = "area")]
    pub by: SortKey,
    #[arg(long)]
    pub descending: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum SortKey {
    Area,
    Perimeter,
    Volume,
    SurfaceArea,
}

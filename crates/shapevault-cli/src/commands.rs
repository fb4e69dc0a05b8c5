use colored::Colorize;
use serde::Serialize;
use shapevault_io::summary;
use shapevault_types::{ConeModel, RectangleModel, Shape, ShapeId, ShapeKind};
use shapevault_warehouse::{ShapeMetrics, Warehouse};

use crate::cli::*;
use crate::config::CliConfig;
use crate::session::{build_specification, Session};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?;
    let session = Session::open(
        &cli.rectangles,
        &cli.cones,
        config.repository,
        Warehouse::instance(),
    )?;
    if !session.rejected.is_empty() {
        eprintln!(
            "{} skipped {} invalid line(s)",
            "warning:".yellow().bold(),
            session.rejected.len()
        );
    }

    match cli.command {
        Command::Metrics => cmd_metrics(&session, cli.format),
        Command::Query(args) => cmd_query(&session, &args, cli.format),
        Command::Sort(args) => cmd_sort(&session, &args, cli.format),
        Command::Summary => cmd_summary(&session, cli.format),
    }
}

#[derive(Serialize)]
struct ShapeRow<'a> {
    id: &'a ShapeId,
    kind: ShapeKind,
    name: &'a str,
    metrics: Option<ShapeMetrics>,
}

fn rows<'a>(session: &Session, shapes: &'a [Shape]) -> Vec<ShapeRow<'a>> {
    shapes
        .iter()
        .map(|s| ShapeRow {
            id: s.id(),
            kind: s.kind(),
            name: s.name(),
            metrics: session.metrics_of(s),
        })
        .collect()
}

fn describe(metrics: Option<ShapeMetrics>) -> String {
    match metrics {
        Some(ShapeMetrics::Planar { area, perimeter }) => {
            format!("area={area:.3} perimeter={perimeter:.3}")
        }
        Some(ShapeMetrics::Solid {
            volume,
            base_area,
            surface_area,
        }) => format!(
            "volume={volume:.3} base_area={base_area:.3} surface_area={surface_area:.3}"
        ),
        None => "no metrics".dimmed().to_string(),
    }
}

fn print_shapes(
    session: &Session,
    shapes: &[Shape],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows(session, shapes))?);
        }
        OutputFormat::Text => {
            if shapes.is_empty() {
                println!("No shapes.");
            }
            for row in rows(session, shapes) {
                println!(
                    "{}  {:<9} {}",
                    row.id.to_string().yellow(),
                    row.kind.to_string().cyan(),
                    describe(row.metrics)
                );
            }
        }
    }
    Ok(())
}

fn cmd_metrics(session: &Session, format: OutputFormat) -> anyhow::Result<()> {
    print_shapes(session, &session.repository.get_all(), format)
}

fn cmd_query(session: &Session, args: &QueryArgs, format: OutputFormat) -> anyhow::Result<()> {
    let spec = build_specification(args, &session.warehouse);
    let hits = session.repository.query(spec.as_deref());
    print_shapes(session, &hits, format)
}

fn cmd_sort(session: &Session, args: &SortArgs, format: OutputFormat) -> anyhow::Result<()> {
    let sorted = session.sorted_by(args.by, args.descending);
    print_shapes(session, &sorted, format)
}

#[derive(Serialize)]
struct Summary {
    rectangles: usize,
    total_area: f64,
    largest_area: Option<f64>,
    smallest_area: Option<f64>,
    touching_axis: usize,
    cones: usize,
    total_volume: f64,
    largest_volume: Option<f64>,
    smallest_volume: Option<f64>,
}

fn cmd_summary(session: &Session, format: OutputFormat) -> anyhow::Result<()> {
    let shapes = session.repository.get_all();
    let rects: Vec<RectangleModel> = shapes
        .iter()
        .filter_map(|s| s.as_rectangle().cloned())
        .collect();
    let cones: Vec<ConeModel> = shapes
        .iter()
        .filter_map(|s| s.as_cone().cloned())
        .collect();

    let report = Summary {
        rectangles: rects.len(),
        total_area: summary::total_area(&rects),
        largest_area: summary::largest_by_area(&rects).map(RectangleModel::area),
        smallest_area: summary::smallest_by_area(&rects).map(RectangleModel::area),
        touching_axis: summary::touching_axis(&rects).len(),
        cones: cones.len(),
        total_volume: summary::total_volume(&cones),
        largest_volume: summary::largest_by_volume(&cones).map(ConeModel::volume),
        smallest_volume: summary::smallest_by_volume(&cones).map(ConeModel::volume),
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            let opt = |v: Option<f64>| v.map_or_else(|| "-".into(), |v| format!("{v:.3}"));
            println!("{}", "Rectangles".bold());
            println!("  count: {}", report.rectangles);
            println!("  total area: {:.3}", report.total_area);
            println!(
                "  largest / smallest: {} / {}",
                opt(report.largest_area),
                opt(report.smallest_area)
            );
            println!("  touching an axis: {}", report.touching_axis);
            println!("{}", "Cones".bold());
            println!("  count: {}", report.cones);
            println!("  total volume: {:.3}", report.total_volume);
            println!(
                "  largest / smallest: {} / {}",
                opt(report.largest_volume),
                opt(report.smallest_volume)
            );
        }
    }
    Ok(())
}

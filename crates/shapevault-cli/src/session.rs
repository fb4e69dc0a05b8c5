use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use shapevault_io::{load_cones, load_rectangles, RejectedLine};
use shapevault_store::{
    AndSpecification, Comparator, NotSpecification, PredicateSpecification, Repository,
    RepositoryConfig, Specification,
};
use shapevault_types::{Shape, ShapeKind};
use shapevault_warehouse::{ShapeMetrics, Warehouse};
use tracing::debug;

use crate::cli::{KindArg, QueryArgs, SortKey};

/// A repository filled from input files, observed by the warehouse.
pub struct Session {
    pub repository: Repository<Shape>,
    pub warehouse: Arc<Warehouse>,
    pub rejected: Vec<RejectedLine>,
}

impl Session {
    pub fn open(
        rectangles: &[PathBuf],
        cones: &[PathBuf],
        config: RepositoryConfig,
        warehouse: Arc<Warehouse>,
    ) -> anyhow::Result<Self> {
        let mut repository = Repository::with_config(config);
        repository.add_observer(warehouse.clone());
        let mut rejected = Vec::new();

        for path in rectangles {
            let report = load_rectangles(path)
                .with_context(|| format!("loading rectangles from {}", path.display()))?;
            rejected.extend(report.rejected);
            for rect in report.shapes {
                repository.add(rect.into())?;
            }
        }
        for path in cones {
            let report = load_cones(path)
                .with_context(|| format!("loading cones from {}", path.display()))?;
            rejected.extend(report.rejected);
            for cone in report.shapes {
                repository.add(cone.into())?;
            }
        }

        debug!(
            shapes = repository.len(),
            rejected = rejected.len(),
            cached = warehouse.len(),
            "session opened"
        );
        Ok(Self {
            repository,
            warehouse,
            rejected,
        })
    }

    pub fn metrics_of(&self, shape: &Shape) -> Option<ShapeMetrics> {
        self.warehouse.get_metrics(shape.id().as_str())
    }

    /// Value of `key` for `shape`, read from the warehouse.
    pub fn metric(&self, shape: &Shape, key: SortKey) -> Option<f64> {
        metric_value(&self.warehouse, shape, key)
    }

    /// Shapes ordered by `key`. Shapes without that metric come last in
    /// either direction, and ties keep repository order.
    pub fn sorted_by(&self, key: SortKey, descending: bool) -> Vec<Shape> {
        let ascending =
            Repository::<Shape>::number_comparator(|s| self.metric(s, key).unwrap_or(f64::NAN));
        if !descending {
            return self.repository.sorted(&ascending);
        }
        let has_metric = |s: &Shape| self.metric(s, key).is_some();
        self.repository.sorted(&|a: &Shape, b: &Shape| {
            if has_metric(a) && has_metric(b) {
                ascending.compare(b, a)
            } else {
                ascending.compare(a, b)
            }
        })
    }
}

fn metric_value(warehouse: &Warehouse, shape: &Shape, key: SortKey) -> Option<f64> {
    let metrics = warehouse.get_metrics(shape.id().as_str())?;
    match key {
        SortKey::Area => metrics.area(),
        SortKey::Perimeter => metrics.perimeter(),
        SortKey::Volume => metrics.volume(),
        SortKey::SurfaceArea => metrics.surface_area(),
    }
}

type BoxedSpec = Box<dyn Specification<Shape>>;

/// Combine every condition in `args` with AND; `None` when no condition is
/// given. `--invert` negates the combined condition and is ignored when
/// there is nothing to negate.
pub fn build_specification(args: &QueryArgs, warehouse: &Arc<Warehouse>) -> Option<BoxedSpec> {
    let mut parts: Vec<BoxedSpec> = Vec::new();

    if let Some(kind) = args.kind {
        let wanted = match kind {
            KindArg::Rectangle => ShapeKind::Rectangle,
            KindArg::Cone => ShapeKind::Cone,
        };
        parts.push(Box::new(PredicateSpecification::new(move |s: &Shape| {
            s.kind() == wanted
        })));
    }
    if let Some(min) = args.min_area {
        let warehouse = warehouse.clone();
        parts.push(Box::new(PredicateSpecification::new(move |s: &Shape| {
            metric_value(&warehouse, s, SortKey::Area).is_some_and(|a| a >= min)
        })));
    }
    if let Some(max) = args.max_area {
        let warehouse = warehouse.clone();
        parts.push(Box::new(PredicateSpecification::new(move |s: &Shape| {
            metric_value(&warehouse, s, SortKey::Area).is_some_and(|a| a <= max)
        })));
    }
    if let Some(min) = args.min_volume {
        let warehouse = warehouse.clone();
        parts.push(Box::new(PredicateSpecification::new(move |s: &Shape| {
            metric_value(&warehouse, s, SortKey::Volume).is_some_and(|v| v >= min)
        })));
    }
    if args.touching_axis {
        parts.push(Box::new(PredicateSpecification::new(|s: &Shape| {
            s.as_rectangle().is_some_and(|r| r.touches_axis())
        })));
    }

    let combined = parts
        .into_iter()
        .reduce(|acc, next| Box::new(AndSpecification::new(acc, next)) as BoxedSpec)?;
    if args.invert {
        Some(Box::new(NotSpecification::new(combined)))
    } else {
        Some(combined)
    }
}

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use shapevault_store::{ObserverError, ObserverResult, RepositoryObserver};
use shapevault_types::{Classify, Identified, ShapeId};
use tracing::debug;

use crate::metrics::ShapeMetrics;

/// Process-wide warehouse, built on first access.
static INSTANCE: OnceLock<Arc<Warehouse>> = OnceLock::new();

/// Derived-metrics cache keyed by shape id.
///
/// Register it on any repository whose items implement [`Identified`] and
/// [`Classify`]; it will keep one [`ShapeMetrics`] entry per observed shape
/// that has a metric set, and none for shapes that do not.
pub struct Warehouse {
    storage: RwLock<HashMap<ShapeId, ShapeMetrics>>,
}

impl Warehouse {
    pub(crate) fn new() -> Self {
        Self {
            storage: RwLock::new(HashMap::new()),
        }
    }

    /// The shared warehouse. Every call returns the same instance.
    pub fn instance() -> Arc<Warehouse> {
        INSTANCE.get_or_init(|| Arc::new(Warehouse::new())).clone()
    }

    /// Cached metrics for `id`, or `None` if it was never observed, was
    /// removed, or has no metric set.
    pub fn get_metrics(&self, id: &str) -> Option<ShapeMetrics> {
        self.storage
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.storage
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.storage
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached entry. The instance itself stays alive.
    pub fn clear(&self) {
        self.storage
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        debug!("warehouse cleared");
    }

    fn recalculate<T: Identified + Classify>(&self, item: &T) -> ObserverResult {
        let id = item.id();
        let mut storage = self
            .storage
            .write()
            .map_err(|e| ObserverError::new(format!("warehouse lock poisoned: {e}")))?;
        match ShapeMetrics::compute(item.view()) {
            Some(metrics) => {
                debug!(%id, ?metrics, "metrics recalculated");
                storage.insert(id.clone(), metrics);
            }
            None => {
                if storage.remove(id.as_str()).is_some() {
                    debug!(%id, "stale metrics evicted for shape without a metric set");
                }
            }
        }
        Ok(())
    }

    fn evict(&self, id: &ShapeId) -> ObserverResult {
        let mut storage = self
            .storage
            .write()
            .map_err(|e| ObserverError::new(format!("warehouse lock poisoned: {e}")))?;
        if storage.remove(id.as_str()).is_some() {
            debug!(%id, "metrics evicted");
        }
        Ok(())
    }
}

impl<T: Identified + Classify> RepositoryObserver<T> for Warehouse {
    fn name(&self) -> &str {
        "warehouse"
    }

    fn on_item_added(&self, item: &T) -> ObserverResult {
        self.recalculate(item)
    }

    fn on_item_updated(&self, item: &T) -> ObserverResult {
        self.recalculate(item)
    }

    fn on_item_removed(&self, item: &T) -> ObserverResult {
        self.evict(item.id())
    }
}

impl fmt::Debug for Warehouse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Warehouse")
            .field("entry_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use shapevault_store::{Repository, SharedObserver};
    use shapevault_types::{ConeModel, Dimension, Point3D, RectangleModel, Shape, UnknownShape};

    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn rect(id: &str, width: f64, height: f64) -> RectangleModel {
        RectangleModel::new(0.0, 0.0, width, height)
            .unwrap()
            .with_id(id)
    }

    fn cone(id: &str, radius: f64, height: f64) -> ConeModel {
        ConeModel::new(Point3D::origin(), radius, height)
            .unwrap()
            .with_id(id)
    }

    /// A private warehouse so tests do not race on the shared instance.
    fn observed<T: Identified + Classify + Clone + 'static>() -> (Repository<T>, Arc<Warehouse>) {
        let warehouse = Arc::new(Warehouse::new());
        let mut repo = Repository::new();
        repo.add_observer(warehouse.clone());
        (repo, warehouse)
    }

    #[test]
    fn stores_area_and_perimeter_for_rectangle() {
        let (mut repo, warehouse) = observed::<RectangleModel>();
        let rect = RectangleModel::new(0.0, 0.0, 4.0, 3.0).unwrap();
        repo.add(rect.clone()).unwrap();

        let metrics = warehouse.get_metrics(rect.id().as_str()).unwrap();
        assert_eq!(metrics.area(), Some(12.0));
        assert_eq!(metrics.perimeter(), Some(14.0));
    }

    #[test]
    fn stores_volume_and_areas_for_cone() {
        let (mut repo, warehouse) = observed::<ConeModel>();
        let cone = ConeModel::new(Point3D::origin(), 2.0, 5.0).unwrap();
        repo.add(cone.clone()).unwrap();

        let metrics = warehouse.get_metrics(cone.id().as_str()).unwrap();
        assert!(close(metrics.volume().unwrap(), 20.0 * PI / 3.0));
        assert!(close(metrics.base_area().unwrap(), 4.0 * PI));
        assert!(close(metrics.surface_area().unwrap(), cone.surface_area()));
    }

    #[test]
    fn removes_metrics_when_shape_is_removed() {
        let (mut repo, warehouse) = observed::<RectangleModel>();
        let rect = RectangleModel::new(0.0, 0.0, 2.0, 2.0).unwrap();
        repo.add(rect.clone()).unwrap();
        assert!(warehouse.contains(rect.id().as_str()));

        repo.remove(rect.id().as_str()).unwrap();
        assert!(warehouse.get_metrics(rect.id().as_str()).is_none());
    }

    #[test]
    fn in_place_replace_recalculates() {
        let (mut repo, warehouse) = observed::<RectangleModel>();
        repo.add(rect("r", 1.0, 1.0)).unwrap();
        repo.replace("r", rect("r", 5.0, 2.0)).unwrap();

        let metrics = warehouse.get_metrics("r").unwrap();
        assert_eq!(metrics.area(), Some(10.0));
        assert_eq!(metrics.perimeter(), Some(14.0));
    }

    #[test]
    fn replace_with_new_id_moves_entry() {
        let (mut repo, warehouse) = observed::<RectangleModel>();
        repo.add(rect("old", 1.0, 1.0)).unwrap();
        repo.replace("old", rect("new", 3.0, 1.0)).unwrap();

        assert!(warehouse.get_metrics("old").is_none());
        assert_eq!(warehouse.get_metrics("new").unwrap().area(), Some(3.0));
    }

    #[test]
    fn unknown_shape_never_gets_an_entry() {
        let (mut repo, warehouse) = observed::<Shape>();
        repo.add(UnknownShape::new(Dimension::Planar).with_id("u").into())
            .unwrap();
        assert!(warehouse.get_metrics("u").is_none());
        assert!(warehouse.is_empty());
    }

    #[test]
    fn unknown_shape_evicts_stale_entry() {
        let (mut repo, warehouse) = observed::<Shape>();
        repo.add(rect("s", 2.0, 3.0).into()).unwrap();
        assert!(warehouse.contains("s"));

        let unknown: Shape = UnknownShape::new(Dimension::Solid).with_id("s").into();
        repo.replace("s", unknown).unwrap();
        assert!(warehouse.get_metrics("s").is_none());
    }

    #[test]
    fn kind_change_switches_metric_set() {
        let (mut repo, warehouse) = observed::<Shape>();
        repo.add(rect("s", 2.0, 3.0).into()).unwrap();

        repo.add(cone("s", 1.0, 3.0).into()).unwrap();

        let metrics = warehouse.get_metrics("s").unwrap();
        assert!(metrics.area().is_none());
        assert!(close(metrics.volume().unwrap(), PI));
    }

    #[test]
    fn clear_empties_but_keeps_observing() {
        let (mut repo, warehouse) = observed::<RectangleModel>();
        repo.add(rect("a", 1.0, 1.0)).unwrap();
        warehouse.clear();
        assert!(warehouse.is_empty());

        repo.add(rect("b", 2.0, 1.0)).unwrap();
        assert_eq!(warehouse.len(), 1);
    }

    #[test]
    fn deregistered_warehouse_stops_tracking() {
        let (mut repo, warehouse) = observed::<RectangleModel>();
        let handle: SharedObserver<RectangleModel> = warehouse.clone();
        repo.remove_observer(&handle);

        repo.add(rect("a", 1.0, 1.0)).unwrap();
        assert!(!warehouse.contains("a"));
    }

    #[test]
    fn one_warehouse_observes_many_repositories() {
        let warehouse = Arc::new(Warehouse::new());
        let mut rects: Repository<RectangleModel> = Repository::new();
        let mut cones: Repository<ConeModel> = Repository::new();
        rects.add_observer(warehouse.clone());
        cones.add_observer(warehouse.clone());

        rects.add(rect("r", 1.0, 1.0)).unwrap();
        cones.add(cone("c", 1.0, 1.0)).unwrap();
        assert_eq!(warehouse.len(), 2);
    }

    #[test]
    fn instance_is_shared() {
        let a = Warehouse::instance();
        let b = Warehouse::instance();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn shared_instance_tracks_repository() {
        let warehouse = Warehouse::instance();
        let mut repo: Repository<RectangleModel> = Repository::new();
        repo.add_observer(warehouse.clone());

        // Generated ids keep this test independent of others using the instance.
        let rect = RectangleModel::new(0.0, 0.0, 4.0, 3.0).unwrap();
        let id = rect.id().clone();
        repo.add(rect).unwrap();
        assert_eq!(
            Warehouse::instance().get_metrics(id.as_str()),
            Some(ShapeMetrics::Planar {
                area: 12.0,
                perimeter: 14.0,
            })
        );

        repo.remove(id.as_str()).unwrap();
        assert!(Warehouse::instance().get_metrics(id.as_str()).is_none());
    }

    #[test]
    fn debug_format() {
        let warehouse = Warehouse::new();
        assert!(format!("{warehouse:?}").contains("entry_count"));
    }
}

//! Aggregates over shape collections.
//!
//! Empty input yields `0.0` for totals and `None` for extremes. When several
//! shapes tie for an extreme, the first one wins.

use shapevault_types::{ConeModel, RectangleModel};

fn extreme_by<'a, S>(
    items: &'a [S],
    key: impl Fn(&S) -> f64,
    better: impl Fn(f64, f64) -> bool,
) -> Option<&'a S> {
    let mut iter = items.iter();
    let first = iter.next()?;
    Some(iter.fold(first, |best, cur| {
        if better(key(cur), key(best)) {
            cur
        } else {
            best
        }
    }))
}

pub fn total_area(rects: &[RectangleModel]) -> f64 {
    rects.iter().map(RectangleModel::area).sum()
}

pub fn largest_by_area(rects: &[RectangleModel]) -> Option<&RectangleModel> {
    extreme_by(rects, RectangleModel::area, |a, b| a > b)
}

pub fn smallest_by_area(rects: &[RectangleModel]) -> Option<&RectangleModel> {
    extreme_by(rects, RectangleModel::area, |a, b| a < b)
}

/// Rectangles touching or crossing either axis.
pub fn touching_axis(rects: &[RectangleModel]) -> Vec<&RectangleModel> {
    rects.iter().filter(|r| r.touches_axis()).collect()
}

pub fn total_volume(cones: &[ConeModel]) -> f64 {
    cones.iter().map(ConeModel::volume).sum()
}

pub fn largest_by_volume(cones: &[ConeModel]) -> Option<&ConeModel> {
    extreme_by(cones, ConeModel::volume, |a, b| a > b)
}

pub fn smallest_by_volume(cones: &[ConeModel]) -> Option<&ConeModel> {
    extreme_by(cones, ConeModel::volume, |a, b| a < b)
}

/// Cones whose volume is at least `min_volume`.
pub fn with_min_volume(cones: &[ConeModel], min_volume: f64) -> Vec<&ConeModel> {
    cones.iter().filter(|c| c.volume() >= min_volume).collect()
}

#[cfg(test)]
mod tests {
    use shapevault_types::Point3D;

    use super::*;

    fn rect(w: f64, h: f64, id: &str) -> RectangleModel {
        RectangleModel::new(1.0, 1.0, w, h).unwrap().with_id(id)
    }

    fn cone(r: f64, h: f64, id: &str) -> ConeModel {
        ConeModel::new(Point3D::origin(), r, h).unwrap().with_id(id)
    }

    #[test]
    fn rectangle_aggregates() {
        let rects = vec![rect(2.0, 2.0, "a"), rect(5.0, 1.0, "b"), rect(1.0, 1.0, "c")];
        assert_eq!(total_area(&rects), 10.0);
        assert_eq!(largest_by_area(&rects).unwrap().id().as_str(), "b");
        assert_eq!(smallest_by_area(&rects).unwrap().id().as_str(), "c");
    }

    #[test]
    fn ties_keep_first() {
        let rects = vec![rect(2.0, 2.0, "a"), rect(4.0, 1.0, "b")];
        assert_eq!(largest_by_area(&rects).unwrap().id().as_str(), "a");
        assert_eq!(smallest_by_area(&rects).unwrap().id().as_str(), "a");
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(total_area(&[]), 0.0);
        assert!(largest_by_area(&[]).is_none());
        assert_eq!(total_volume(&[]), 0.0);
        assert!(smallest_by_volume(&[]).is_none());
    }

    #[test]
    fn touching_axis_filter() {
        let on_axis = RectangleModel::new(-1.0, 2.0, 3.0, 1.0).unwrap();
        let rects = vec![rect(1.0, 1.0, "off"), on_axis.clone()];
        let hits = touching_axis(&rects);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id(), on_axis.id());
    }

    #[test]
    fn cone_aggregates() {
        let cones = vec![cone(1.0, 3.0, "small"), cone(3.0, 3.0, "big")];
        assert!((total_volume(&cones) - 10.0 * std::f64::consts::PI).abs() < 1e-9);
        assert_eq!(largest_by_volume(&cones).unwrap().id().as_str(), "big");
        assert_eq!(smallest_by_volume(&cones).unwrap().id().as_str(), "small");
        assert_eq!(with_min_volume(&cones, 5.0).len(), 1);
    }
}

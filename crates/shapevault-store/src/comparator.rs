use std::cmp::Ordering;

/// Three-way comparison used by [`Repository::sorted`](crate::Repository::sorted).
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> Comparator<T> for F {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Ascending comparator over a numeric projection.
///
/// Projections are compared with [`f64::total_cmp`], so NaN sorts after
/// every number instead of breaking the ordering.
#[derive(Clone, Debug)]
pub struct NumberComparator<F> {
    selector: F,
}

impl<T: ?Sized, F: Fn(&T) -> f64> Comparator<T> for NumberComparator<F> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.selector)(a).total_cmp(&(self.selector)(b))
    }
}

/// Build an ascending comparator from a numeric projection.
pub fn number_comparator<T: ?Sized, F: Fn(&T) -> f64>(selector: F) -> NumberComparator<F> {
    NumberComparator { selector }
}

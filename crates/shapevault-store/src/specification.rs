//! Composable boolean queries over repository items.
//!
//! A specification answers one question about one item. Leaves wrap a
//! predicate; `And`, `Or` and `Not` combine other specifications into
//! arbitrary boolean trees. Nothing is memoized: every call re-evaluates the
//! tree, so a specification must be free of side effects.

use std::sync::Arc;

/// A reusable boolean query over items of type `T`.
pub trait Specification<T: ?Sized> {
    fn is_satisfied_by(&self, item: &T) -> bool;
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for &S {
    fn is_satisfied_by(&self, item: &T) -> bool {
        (**self).is_satisfied_by(item)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    fn is_satisfied_by(&self, item: &T) -> bool {
        (**self).is_satisfied_by(item)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Arc<S> {
    fn is_satisfied_by(&self, item: &T) -> bool {
        (**self).is_satisfied_by(item)
    }
}

/// Leaf specification wrapping an arbitrary predicate.
#[derive(Clone)]
pub struct PredicateSpecification<F> {
    predicate: F,
}

impl<F> PredicateSpecification<F> {
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<T: ?Sized, F: Fn(&T) -> bool> Specification<T> for PredicateSpecification<F> {
    fn is_satisfied_by(&self, item: &T) -> bool {
        (self.predicate)(item)
    }
}

/// True iff both operands are true. `right` is skipped when `left` fails.
#[derive(Clone, Debug)]
pub struct AndSpecification<L, R> {
    left: L,
    right: R,
}

impl<L, R> AndSpecification<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<T: ?Sized, L: Specification<T>, R: Specification<T>> Specification<T>
    for AndSpecification<L, R>
{
    fn is_satisfied_by(&self, item: &T) -> bool {
        self.left.is_satisfied_by(item) && self.right.is_satisfied_by(item)
    }
}

/// True iff either operand is true. `right` is skipped when `left` holds.
#[derive(Clone, Debug)]
pub struct OrSpecification<L, R> {
    left: L,
    right: R,
}

impl<L, R> OrSpecification<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}

impl<T: ?Sized, L: Specification<T>, R: Specification<T>> Specification<T>
    for OrSpecification<L, R>
{
    fn is_satisfied_by(&self, item: &T) -> bool {
        self.left.is_satisfied_by(item) || self.right.is_satisfied_by(item)
    }
}

/// Logical negation.
#[derive(Clone, Debug)]
pub struct NotSpecification<S> {
    inner: S,
}

impl<S> NotSpecification<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<T: ?Sized, S: Specification<T>> Specification<T> for NotSpecification<S> {
    fn is_satisfied_by(&self, item: &T) -> bool {
        !self.inner.is_satisfied_by(item)
    }
}

/// Builder methods for composing specifications fluently.
pub trait SpecificationExt<T: ?Sized>: Specification<T> + Sized {
    fn and<S: Specification<T>>(self, other: S) -> AndSpecification<Self, S> {
        AndSpecification::new(self, other)
    }

    fn or<S: Specification<T>>(self, other: S) -> OrSpecification<Self, S> {
        OrSpecification::new(self, other)
    }

    fn not(self) -> NotSpecification<Self> {
        NotSpecification::new(self)
    }
}

impl<T: ?Sized, S: Specification<T>> SpecificationExt<T> for S {}

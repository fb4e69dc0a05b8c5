//! Observer contract and the registration list the repository fans out to.

use std::fmt;
use std::sync::Arc;

use shapevault_types::Identified;
use tracing::warn;

use crate::error::{NotificationFailure, ObserverError};

/// Kind of change broadcast to observers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChangeEvent {
    Added,
    Updated,
    Removed,
}

impl fmt::Display for ChangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added => f.write_str("add"),
            Self::Updated => f.write_str("update"),
            Self::Removed => f.write_str("remove"),
        }
    }
}

pub type ObserverResult = Result<(), ObserverError>;

/// Receives every effective mutation of a [`Repository`](crate::Repository).
///
/// Callbacks run synchronously inside the mutating call, after the
/// repository state has been updated.
pub trait RepositoryObserver<T>: Send + Sync {
    /// Human-readable name used in logs and failure reports.
    fn name(&self) -> &str {
        "observer"
    }

    fn on_item_added(&self, item: &T) -> ObserverResult;

    fn on_item_updated(&self, item: &T) -> ObserverResult;

    fn on_item_removed(&self, item: &T) -> ObserverResult;
}

/// Shared handle to a registered observer.
pub type SharedObserver<T> = Arc<dyn RepositoryObserver<T>>;

/// Ordered set of observers, compared by identity.
pub(crate) struct ObserverList<T> {
    observers: Vec<SharedObserver<T>>,
}

impl<T> ObserverList<T> {
    pub(crate) fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.observers.len()
    }

    fn position(&self, observer: &SharedObserver<T>) -> Option<usize> {
        self.observers
            .iter()
            .position(|o| std::ptr::addr_eq(Arc::as_ptr(o), Arc::as_ptr(observer)))
    }

    /// Returns `false` if the observer was already registered.
    pub(crate) fn register(&mut self, observer: SharedObserver<T>) -> bool {
        if self.position(&observer).is_some() {
            return false;
        }
        self.observers.push(observer);
        true
    }

    /// Returns `false` if the observer was not registered.
    pub(crate) fn deregister(&mut self, observer: &SharedObserver<T>) -> bool {
        match self.position(observer) {
            Some(index) => {
                self.observers.remove(index);
                true
            }
            None => false,
        }
    }
}

impl<T: Identified> ObserverList<T> {
    /// Deliver `event` to every observer in registration order.
    ///
    /// A failing observer does not stop delivery to the ones after it.
    pub(crate) fn notify(&self, event: ChangeEvent, item: &T) -> Vec<NotificationFailure> {
        let mut failures = Vec::new();
        for observer in &self.observers {
            let outcome = match event {
                ChangeEvent::Added => observer.on_item_added(item),
                ChangeEvent::Updated => observer.on_item_updated(item),
                ChangeEvent::Removed => observer.on_item_removed(item),
            };
            if let Err(error) = outcome {
                warn!(
                    observer = observer.name(),
                    %event,
                    id = %item.id(),
                    %error,
                    "observer failed"
                );
                failures.push(NotificationFailure {
                    observer: observer.name().to_string(),
                    event,
                    id: item.id().clone(),
                    error,
                });
            }
        }
        failures
    }
}

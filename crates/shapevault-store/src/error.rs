use shapevault_types::ShapeId;

use crate::observer::ChangeEvent;

/// Failure reported by an observer callback.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason}")]
pub struct ObserverError {
    pub reason: String,
}

impl ObserverError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// One observer that failed to handle one change event.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("observer '{observer}' failed on {event} of {id}: {error}")]
pub struct NotificationFailure {
    pub observer: String,
    pub event: ChangeEvent,
    pub id: ShapeId,
    #[source]
    pub error: ObserverError,
}

/// Errors from repository operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// The requested item does not exist.
    #[error("item not found: {0}")]
    NotFound(ShapeId),

    /// The mutation was applied but one or more observers failed.
    #[error("{} observer notification(s) failed", .0.len())]
    Notification(Vec<NotificationFailure>),
}

/// Result alias for repository operations.
pub type StoreResult<T> = Result<T, StoreError>;

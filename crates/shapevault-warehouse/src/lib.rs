//! Derived-metrics cache for shapevault.
//!
//! The [`Warehouse`] mirrors a repository's shapes into a per-id index of
//! [`ShapeMetrics`]. It never polls: it is registered as a
//! [`RepositoryObserver`](shapevault_store::RepositoryObserver) and updates
//! its entries from the add/update/remove notifications it receives.
//!
//! Exactly one warehouse exists per process, reached through
//! [`Warehouse::instance`]. [`Warehouse::clear`] empties it between
//! independent sessions without replacing the instance.

pub mod metrics;
pub mod warehouse;

pub use metrics::ShapeMetrics;
pub use warehouse::Warehouse;

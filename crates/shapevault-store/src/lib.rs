//! In-memory shape repository for shapevault.
//!
//! [`Repository`] is the authoritative keyed store for shape-like entities.
//! It exposes CRUD, specification-based queries and comparator-based sorted
//! views, and broadcasts every effective mutation to registered
//! [`RepositoryObserver`]s.
//!
//! # Querying
//!
//! Filters are expressed as [`Specification`] trees built from
//! [`PredicateSpecification`] leaves and the [`AndSpecification`],
//! [`OrSpecification`] and [`NotSpecification`] combinators (or the
//! [`SpecificationExt`] builder methods). Specifications are stateless and
//! re-evaluated on every call.
//!
//! # Design Rules
//!
//! 1. Every stored entry is keyed by its own id: `map[id].id() == id`.
//! 2. Snapshots returned by `get_all`, `query` and `sorted` never alias
//!    internal storage.
//! 3. Observer fan-out is synchronous and in registration order.
//! 4. A failing observer never prevents later observers from being notified;
//!    failures are collected and reported after the fan-out completes.

pub mod comparator;
pub mod config;
pub mod error;
pub mod observer;
pub mod repository;
pub mod specification;

pub use comparator::{number_comparator, Comparator, NumberComparator};
pub use config::{NotificationPolicy, RepositoryConfig};
pub use error::{NotificationFailure, ObserverError, StoreError, StoreResult};
pub use observer::{ChangeEvent, ObserverResult, RepositoryObserver, SharedObserver};
pub use repository::Repository;
pub use specification::{
    AndSpecification, NotSpecification, OrSpecification, PredicateSpecification, Specification,
    SpecificationExt,
};

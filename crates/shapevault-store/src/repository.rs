use std::collections::{BTreeMap, HashMap};
use std::fmt;

use shapevault_types::{Identified, ShapeId};
use tracing::{debug, warn};

use crate::comparator::{number_comparator, Comparator, NumberComparator};
use crate::config::{NotificationPolicy, RepositoryConfig};
use crate::error::{NotificationFailure, StoreError, StoreResult};
use crate::observer::{ChangeEvent, ObserverList, SharedObserver};
use crate::specification::Specification;

/// Authoritative in-memory store of shape-like entities keyed by id.
///
/// Entries are kept in insertion order: overwriting an id through [`add`]
/// or an in-place [`replace`] keeps its position, while a `replace` that
/// changes the id appends the new entry. [`get_all`] returns that order, and
/// [`sorted`] breaks ties by it.
///
/// Every effective mutation is broadcast to the registered observers before
/// the mutating call returns.
///
/// [`add`]: Repository::add
/// [`replace`]: Repository::replace
/// [`get_all`]: Repository::get_all
/// [`sorted`]: Repository::sorted
pub struct Repository<T> {
    config: RepositoryConfig,
    /// Insertion-ordered entries keyed by slot number.
    slots: BTreeMap<u64, T>,
    /// Id to slot lookup.
    index: HashMap<ShapeId, u64>,
    next_slot: u64,
    observers: ObserverList<T>,
}

impl<T: Identified + Clone> Repository<T> {
    /// Create an empty repository with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RepositoryConfig::default())
    }

    /// Create an empty repository with the given configuration.
    pub fn with_config(config: RepositoryConfig) -> Self {
        Self {
            config,
            slots: BTreeMap::new(),
            index: HashMap::new(),
            next_slot: 0,
            observers: ObserverList::new(),
        }
    }

    /// The configuration this repository was built with.
    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns `true` if an entry with `id` is stored.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    // ---------------------------------------------------------------
    // Observers
    // ---------------------------------------------------------------

    /// Register an observer. Registering the same `Arc` twice is a no-op.
    pub fn add_observer(&mut self, observer: SharedObserver<T>) {
        let name = observer.name().to_string();
        if self.observers.register(observer) {
            debug!(repository = %self.config.label, observer = %name, "observer registered");
        }
    }

    /// Deregister an observer by identity. Unknown observers are ignored.
    pub fn remove_observer(&mut self, observer: &SharedObserver<T>) {
        if self.observers.deregister(observer) {
            debug!(
                repository = %self.config.label,
                observer = observer.name(),
                "observer deregistered"
            );
        }
    }

    // ---------------------------------------------------------------
    // Mutations
    // ---------------------------------------------------------------

    /// Insert `item`, overwriting any entry with the same id.
    ///
    /// Always broadcasts [`ChangeEvent::Added`], even when an existing entry
    /// was overwritten.
    pub fn add(&mut self, item: T) -> StoreResult<()> {
        let slot = self.store(item);
        debug!(
            repository = %self.config.label,
            id = %self.slots[&slot].id(),
            "item added"
        );
        let failures = self
            .observers
            .notify(ChangeEvent::Added, &self.slots[&slot]);
        self.settle(failures)
    }

    /// Delete the entry for `id`. Missing ids are a silent no-op.
    pub fn remove(&mut self, id: &str) -> StoreResult<()> {
        let Some(slot) = self.index.remove(id) else {
            return Ok(());
        };
        let Some(removed) = self.slots.remove(&slot) else {
            return Ok(());
        };
        debug!(repository = %self.config.label, id = %removed.id(), "item removed");
        let failures = self.observers.notify(ChangeEvent::Removed, &removed);
        self.settle(failures)
    }

    /// Replace the entry for `old_id` with `item`.
    ///
    /// If `item` keeps the same id this is an in-place update and only
    /// [`ChangeEvent::Updated`] is broadcast. If the id changes, the old
    /// entry is deleted and observers see [`ChangeEvent::Removed`] for the
    /// old value followed by [`ChangeEvent::Added`] for the new one.
    ///
    /// Fails with [`StoreError::NotFound`] without mutating or notifying
    /// when `old_id` is absent.
    pub fn replace(&mut self, old_id: &str, item: T) -> StoreResult<()> {
        let Some(&old_slot) = self.index.get(old_id) else {
            return Err(StoreError::NotFound(ShapeId::new(old_id)));
        };

        if item.id().as_str() == old_id {
            self.slots.insert(old_slot, item);
            debug!(repository = %self.config.label, id = old_id, "item updated");
            let failures = self
                .observers
                .notify(ChangeEvent::Updated, &self.slots[&old_slot]);
            return self.settle(failures);
        }

        self.index.remove(old_id);
        let Some(old) = self.slots.remove(&old_slot) else {
            return Err(StoreError::NotFound(ShapeId::new(old_id)));
        };
        let new_slot = self.store(item);
        debug!(
            repository = %self.config.label,
            old_id,
            new_id = %self.slots[&new_slot].id(),
            "item replaced under a new id"
        );

        let mut failures = self.observers.notify(ChangeEvent::Removed, &old);
        failures.extend(
            self.observers
                .notify(ChangeEvent::Added, &self.slots[&new_slot]),
        );
        self.settle(failures)
    }

    // ---------------------------------------------------------------
    // Reads
    // ---------------------------------------------------------------

    /// Look up an entry by id.
    pub fn get_by_id(&self, id: &str) -> Option<&T> {
        self.index.get(id).and_then(|slot| self.slots.get(slot))
    }

    /// Iterate entries in storage order without cloning.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots.values()
    }

    /// Snapshot of every entry in storage order.
    pub fn get_all(&self) -> Vec<T> {
        self.slots.values().cloned().collect()
    }

    /// Entries satisfying `specification`, in storage order.
    ///
    /// `None` is equivalent to [`get_all`](Self::get_all).
    pub fn query(&self, specification: Option<&dyn Specification<T>>) -> Vec<T> {
        match specification {
            None => self.get_all(),
            Some(spec) => self
                .slots
                .values()
                .filter(|item| spec.is_satisfied_by(item))
                .cloned()
                .collect(),
        }
    }

    /// Snapshot sorted by `comparator`. Equal items keep storage order.
    pub fn sorted<C: Comparator<T> + ?Sized>(&self, comparator: &C) -> Vec<T> {
        let mut items = self.get_all();
        items.sort_by(|a, b| comparator.compare(a, b));
        items
    }

    /// Ascending comparator over a numeric projection of `T`.
    pub fn number_comparator<F: Fn(&T) -> f64>(selector: F) -> NumberComparator<F> {
        number_comparator(selector)
    }

    // ---------------------------------------------------------------
    // Internals
    // ---------------------------------------------------------------

    /// Store `item` under its own id, reusing the slot of an existing entry.
    fn store(&mut self, item: T) -> u64 {
        let slot = match self.index.get(item.id()) {
            Some(&slot) => slot,
            None => {
                let slot = self.next_slot;
                self.next_slot += 1;
                self.index.insert(item.id().clone(), slot);
                slot
            }
        };
        self.slots.insert(slot, item);
        debug_assert_eq!(self.index.len(), self.slots.len());
        slot
    }

    fn settle(&self, failures: Vec<NotificationFailure>) -> StoreResult<()> {
        if failures.is_empty() {
            return Ok(());
        }
        match self.config.notification_policy {
            NotificationPolicy::Report => Err(StoreError::Notification(failures)),
            NotificationPolicy::LogOnly => {
                warn!(
                    repository = %self.config.label,
                    failed = failures.len(),
                    "observer failures ignored"
                );
                Ok(())
            }
        }
    }
}

impl<T: Identified + Clone> Default for Repository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Repository<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repository")
            .field("label", &self.config.label)
            .field("item_count", &self.slots.len())
            .field("observer_count", &self.observers.len())
            .finish()
    }
}

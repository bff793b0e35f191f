//! Observer registry and the handle returned by `subscribe`.

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

/// Identifies one registration in a store's observer list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub(crate) type Observer<S> = Arc<dyn Fn(&S) + Send + Sync>;

/// Insertion-ordered observer list.
pub(crate) struct ObserverList<S> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Observer<S>)>,
}

impl<S> ObserverList<S> {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub(crate) fn insert(&mut self, observer: Observer<S>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    /// Copy of the current observers, so notification runs without the lock.
    pub(crate) fn snapshot(&self) -> Vec<Observer<S>> {
        self.entries
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    fn remove(&mut self, id: SubscriptionId) -> bool {
        match self.entries.iter().position(|(entry, _)| *entry == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }
}

/// Type-erased access to an observer list, so `Subscription` is not
/// generic over the store's state type.
trait Detach: Send + Sync {
    fn detach(&self, id: SubscriptionId) -> bool;
}

impl<S: 'static> Detach for Mutex<ObserverList<S>> {
    fn detach(&self, id: SubscriptionId) -> bool {
        self.lock().remove(id)
    }
}

/// Handle returned by [`Store::subscribe`](super::Store::subscribe).
///
/// Dropping the handle leaves the observer registered. Call
/// [`unsubscribe`](Self::unsubscribe) to remove it.
pub struct Subscription {
    id: SubscriptionId,
    observers: Weak<dyn Detach>,
}

impl Subscription {
    pub(crate) fn new<S: 'static>(
        id: SubscriptionId,
        observers: &Arc<Mutex<ObserverList<S>>>,
    ) -> Self {
        let erased: Arc<dyn Detach> = Arc::clone(observers) as Arc<dyn Detach>;
        Self {
            id,
            observers: Arc::downgrade(&erased),
        }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Remove exactly this observer from the store's live list.
    ///
    /// Returns `true` if the observer was removed by this call. Repeated
    /// calls, or calls after the store is gone, return `false`.
    pub fn unsubscribe(&self) -> bool {
        let removed = self
            .observers
            .upgrade()
            .is_some_and(|observers| observers.detach(self.id));
        if removed {
            tracing::trace!(subscription = self.id.0, "observer unsubscribed");
        }
        removed
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("store_alive", &(self.observers.strong_count() > 0))
            .finish()
    }
}

//! Unidirectional state container.
//!
//! A [`Store`] owns one state tree. The only way to change it is
//! [`Store::dispatch`], which runs the root [`Reducer`] and then notifies
//! every observer registered with [`Store::subscribe`].
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Observers
//!    ↑                                 │
//!    └─────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot, replaced wholesale on every dispatch
//! - **Action**: Plain data describing what happened
//! - **Reducer**: Pure function that computes the next state

mod action;
mod error;
mod reducer;
mod state;
mod subscription;

pub use action::Action;
pub use error::StoreError;
pub use reducer::Reducer;
pub use state::State;
pub use subscription::{Subscription, SubscriptionId};

use std::cell::Cell;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::{Mutex, ReentrantMutex, RwLock};

use subscription::ObserverList;

/// State container driven by the reducer `R`.
///
/// `Store` is `Send + Sync`. Dispatches from different threads are
/// serialized: "reduce, replace, snapshot observers, notify" runs as one
/// critical section and contending callers block.
pub struct Store<R: Reducer> {
    state: RwLock<Arc<R::State>>,
    observers: Arc<Mutex<ObserverList<R::State>>>,
    /// Held for the whole dispatch. The flag is set while observers run,
    /// which lets a same-thread reentrant dispatch be detected.
    dispatching: ReentrantMutex<Cell<bool>>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Store<R> {
    /// Create a store whose initial state is the reducer's default.
    pub fn new() -> Self {
        Self::with_state(R::State::default())
    }

    /// Create a store starting from a preloaded state.
    pub fn with_state(state: R::State) -> Self {
        Self {
            state: RwLock::new(Arc::new(state)),
            observers: Arc::new(Mutex::new(ObserverList::new())),
            dispatching: ReentrantMutex::new(Cell::new(false)),
            _reducer: PhantomData,
        }
    }

    /// Current state snapshot.
    pub fn get_state(&self) -> Arc<R::State> {
        Arc::clone(&self.state.read())
    }

    /// Register `observer` to be called with the new state after every
    /// dispatch, in registration order.
    ///
    /// Registering the same closure twice yields two notifications.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&R::State) + Send + Sync + 'static,
    {
        let id = self.observers.lock().insert(Arc::new(observer));
        tracing::trace!(subscription = ?id, "observer subscribed");
        Subscription::new(id, &self.observers)
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.lock().len()
    }

    /// Apply `action` and notify observers.
    ///
    /// The state is replaced even when the reducer returns an equal value.
    /// A panicking reducer propagates and leaves the state untouched. A
    /// panicking observer propagates too: the new state is already stored
    /// and the remaining observers of that round are skipped.
    ///
    /// # Errors
    /// Returns [`StoreError::ReentrantDispatch`] when called from inside an
    /// observer on the dispatching thread.
    pub fn dispatch(&self, action: R::Action) -> Result<(), StoreError> {
        let guard = self.dispatching.lock();
        if guard.replace(true) {
            tracing::warn!(action = action.name(), "reentrant dispatch rejected");
            return Err(StoreError::ReentrantDispatch {
                action: action.name(),
            });
        }
        let _reset = scopeguard::guard(&*guard, |flag| flag.set(false));

        let current = self.get_state();
        let next = Arc::new(R::reduce(R::State::clone(&current), &action));
        *self.state.write() = Arc::clone(&next);

        let observers = self.observers.lock().snapshot();
        tracing::debug!(
            action = action.name(),
            observers = observers.len(),
            changed = (*current != *next),
            "action dispatched"
        );
        for observer in &observers {
            observer(&*next);
        }
        Ok(())
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Reducer> fmt::Debug for Store<R>
where
    R::State: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.get_state())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

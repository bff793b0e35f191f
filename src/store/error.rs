use thiserror::Error;

/// Errors returned by [`Store::dispatch`](super::Store::dispatch).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// An observer called `dispatch` while it was being notified.
    #[error("dispatch of '{action}' rejected: observers of the previous dispatch are still running")]
    ReentrantDispatch { action: &'static str },
}

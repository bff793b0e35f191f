//! Base trait for actions dispatched to a store.

use std::fmt::Debug;

/// Marker trait for action values.
///
/// Actions are plain data describing what happened:
/// - User actions (a record was added, an item was clicked)
/// - Replayed events read back from a log
///
/// Actions are processed by reducers to produce new states.
pub trait Action: Debug + Send + 'static {
    /// Discriminant used for logging.
    fn name(&self) -> &'static str;
}

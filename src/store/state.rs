//! Base trait for state held by a store.

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Comparable (PartialEq for detecting changes)
/// - Defaultable (the initial value before any dispatch)
pub trait State: Clone + PartialEq + Default + Send + Sync + 'static {}

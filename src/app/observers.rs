//! Stock observers for the application store.

use super::state::AppState;

/// Observer that logs every new state as JSON at `info` level.
pub fn log_state_observer() -> impl Fn(&AppState) + Send + Sync + 'static {
    |state: &AppState| match serde_json::to_string(state) {
        Ok(json) => tracing::info!(target: "todokit::state", state = %json, "The new state is"),
        Err(err) => tracing::warn!(target: "todokit::state", "Failed to serialize state: {}", err),
    }
}

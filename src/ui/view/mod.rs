//! Screen-local view state.
//!
//! Same pattern as the application store, applied to focus, selection
//! and the input line:
//! - `state.rs` - `ViewState` and `Pane`
//! - `intent.rs` - Key-driven intents
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::ViewIntent;
pub use reducer::ViewReducer;
pub use state::{Pane, ViewState};

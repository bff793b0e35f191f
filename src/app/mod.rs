//! Application state: the todo and goal slices behind one store.
//!
//! - `state.rs` - Root `AppState`
//! - `action.rs` - `AppAction` tagged union, action creators, JSON form
//! - `reducer.rs` - `AppReducer`, combining the slice reducers
//! - `observers.rs` - Ready-made observers (state logging)

mod action;
mod observers;
mod reducer;
mod state;

pub use action::{
    add_goal, add_todo, remove_goal, remove_todo, toggle_todo, ActionDecodeError, AppAction,
};
pub use observers::log_state_observer;
pub use reducer::AppReducer;
pub use state::AppState;

use crate::store::Store;

/// The store type used by the application.
pub type AppStore = Store<AppReducer>;

//! Todo slice of the application state.
//!
//! - `state.rs` - `Todo` record and the `TodoList` slice
//! - `reducer.rs` - Add, remove and toggle transitions (pure, no side effects)

mod reducer;
mod state;

pub use reducer::TodosReducer;
pub use state::{Todo, TodoList};

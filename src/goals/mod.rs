//! Goal slice of the application state.

mod reducer;
mod state;

pub use reducer::GoalsReducer;
pub use state::{Goal, GoalList};

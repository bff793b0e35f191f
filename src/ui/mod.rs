//! Terminal front end.
//!
//! Two lists (todos, goals) and an input line. Everything shown is read
//! from the application store; every change goes through `dispatch`.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod view;

pub use app::TodoApp;
pub use runtime::run;

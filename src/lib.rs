//! Todo and goal lists on top of a minimal unidirectional state store.
//!
//! [`store`] is the container: one state tree, changed only by
//! dispatching actions through a pure reducer, with observers notified
//! after every dispatch. [`app`], [`todos`] and [`goals`] define the
//! application state and reducers. [`ui`] and [`replay`] drive a store
//! from the terminal or from a file of recorded actions.

pub mod app;
pub mod config;
pub mod goals;
pub mod ids;
pub mod logging;
pub mod replay;
pub mod store;
pub mod todos;
pub mod ui;

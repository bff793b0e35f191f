use serde::{Deserialize, Serialize};

use crate::ids::generate_id;
use crate::store::State;

/// A single goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub name: String,
}

impl Goal {
    /// New goal with a freshly generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
        }
    }
}

/// The goal slice: records in insertion order.
pub type GoalList = Vec<Goal>;

impl State for GoalList {}

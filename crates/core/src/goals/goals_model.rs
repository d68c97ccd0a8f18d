//! Goals domain models.

use serde::{Deserialize, Serialize};

/// Domain model representing a goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub id: i32,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Input model for creating or overwriting a goal
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct NewGoal {
    pub title: Option<String>,
    pub content: Option<String>,
}

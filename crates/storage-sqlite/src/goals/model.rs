//! Database models for goals.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for goals
#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GoalDB {
    pub id: i32,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Database model for creating a new goal, and for overwriting an existing one.
#[derive(Insertable, AsChangeset, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
#[diesel(treat_none_as_null = true)]
pub struct NewGoalDB {
    pub title: Option<String>,
    pub content: Option<String>,
}

// Conversion to domain models
impl From<GoalDB> for journal_core::goals::Goal {
    fn from(db: GoalDB) -> Self {
        Self {
            id: db.id,
            title: db.title,
            content: db.content,
        }
    }
}

impl From<journal_core::goals::NewGoal> for NewGoalDB {
    fn from(domain: journal_core::goals::NewGoal) -> Self {
        Self {
            title: domain.title,
            content: domain.content,
        }
    }
}

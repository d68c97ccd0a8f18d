//! Database models for journal entries.

use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Database model for journal entries
#[derive(Queryable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::journal)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct JournalDB {
    pub id: i32,
    pub title: Option<String>,
    pub content: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Database model for inserting an entry or overwriting its text fields.
/// `created_at` is left to the column default.
#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::journal)]
#[diesel(treat_none_as_null = true)]
pub struct NewJournalDB {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Database model for an entry-goal link
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::entry_goals)]
pub struct EntryGoalDB {
    pub entry_id: i32,
    pub goal_id: i32,
}

// Conversion to domain models
impl From<JournalDB> for journal_core::entries::Entry {
    fn from(db: JournalDB) -> Self {
        Self {
            id: db.id,
            title: db.title,
            content: db.content,
            created_at: db.created_at,
        }
    }
}

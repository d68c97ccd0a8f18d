//! Journal entry domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::GOAL_LIST_DELIMITER;

/// Domain model representing a journal entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    pub id: i32,
    pub title: Option<String>,
    pub content: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Input model for creating or overwriting an entry.
///
/// `goals` is the complete set of goal ids the entry should reference.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct NewEntry {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(default)]
    pub goals: Vec<i32>,
}

/// A goal as seen through an entry link
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkedGoal {
    pub id: i32,
    pub title: Option<String>,
}

/// An entry together with the goals it references, ordered by goal id
#[derive(Debug, Clone, PartialEq)]
pub struct EntryWithGoals {
    pub entry: Entry,
    pub goals: Vec<LinkedGoal>,
}

/// Flattened listing row: one per entry, with the linked goal ids and titles
/// joined into two parallel delimiter-separated strings.
///
/// Both lists are `None` when the entry references no goals. A goal without
/// a title contributes an empty segment so positions stay aligned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntrySummary {
    pub id: i32,
    pub title: Option<String>,
    pub content: Option<String>,
    pub created_at: NaiveDateTime,
    pub goal_ids: Option<String>,
    pub goal_titles: Option<String>,
}

impl From<EntryWithGoals> for EntrySummary {
    fn from(value: EntryWithGoals) -> Self {
        let EntryWithGoals { entry, goals } = value;
        let (goal_ids, goal_titles) = if goals.is_empty() {
            (None, None)
        } else {
            let ids = goals
                .iter()
                .map(|g| g.id.to_string())
                .collect::<Vec<_>>()
                .join(GOAL_LIST_DELIMITER);
            let titles = goals
                .iter()
                .map(|g| g.title.as_deref().unwrap_or_default())
                .collect::<Vec<_>>()
                .join(GOAL_LIST_DELIMITER);
            (Some(ids), Some(titles))
        };

        Self {
            id: entry.id,
            title: entry.title,
            content: entry.content,
            created_at: entry.created_at,
            goal_ids,
            goal_titles,
        }
    }
}

use chrono::NaiveDateTime;
use journal_core::{entries as core_entries, goals as core_goals};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform response envelope: `{success, message, data?}`.
#[derive(Serialize, Debug)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl ApiResponse<()> {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn with_data(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

/// One row of the entry listing, goals flattened into comma-joined columns.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct EntryRow {
    pub id: i32,
    pub title: Option<String>,
    pub content: Option<String>,
    pub created_at: NaiveDateTime,
    pub goal_ids: Option<String>,
    pub goal_titles: Option<String>,
}

impl From<core_entries::EntrySummary> for EntryRow {
    fn from(e: core_entries::EntrySummary) -> Self {
        Self {
            id: e.id,
            title: e.title,
            content: e.content,
            created_at: e.created_at,
            goal_ids: e.goal_ids,
            goal_titles: e.goal_titles,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct EntryPayload {
    pub title: Option<String>,
    pub content: Option<String>,
    /// Ids of the goals this entry references; replaces any previous set.
    /// Absent or `null` means none.
    #[serde(default)]
    pub goals: Option<Vec<i32>>,
}

impl From<EntryPayload> for core_entries::NewEntry {
    fn from(p: EntryPayload) -> Self {
        Self {
            title: p.title,
            content: p.content,
            goals: p.goals.unwrap_or_default(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct GoalRow {
    pub id: i32,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl From<core_goals::Goal> for GoalRow {
    fn from(g: core_goals::Goal) -> Self {
        Self {
            id: g.id,
            title: g.title,
            content: g.content,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct GoalPayload {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl From<GoalPayload> for core_goals::NewGoal {
    fn from(p: GoalPayload) -> Self {
        Self {
            title: p.title,
            content: p.content,
        }
    }
}

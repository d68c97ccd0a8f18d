use crate::entries::entries_model::{Entry, EntrySummary, EntryWithGoals, NewEntry};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for journal entry repository operations.
///
/// Implementations must apply each mutating call as one unit: the entry row
/// and its goal links are written together or not at all.
#[async_trait]
pub trait EntryRepositoryTrait: Send + Sync {
    fn load_entries_with_goals(&self) -> Result<Vec<EntryWithGoals>>;
    async fn insert_new_entry(&self, new_entry: NewEntry) -> Result<Entry>;
    /// Overwrites title and content and replaces the entry's goal links with
    /// exactly `entry_update.goals`.
    async fn update_entry(&self, entry_id: i32, entry_update: NewEntry) -> Result<Entry>;
    /// Removes the entry together with all of its goal links.
    async fn delete_entry(&self, entry_id: i32) -> Result<usize>;
}

/// Trait for journal entry service operations
#[async_trait]
pub trait EntryServiceTrait: Send + Sync {
    fn get_entries(&self) -> Result<Vec<EntrySummary>>;
    async fn create_entry(&self, new_entry: NewEntry) -> Result<Entry>;
    async fn update_entry(&self, entry_id: i32, entry_update: NewEntry) -> Result<Entry>;
    async fn delete_entry(&self, entry_id: i32) -> Result<usize>;
}

use crate::entries::entries_model::{Entry, EntrySummary, NewEntry};
use crate::entries::entries_traits::{EntryRepositoryTrait, EntryServiceTrait};
use crate::errors::Result;
use async_trait::async_trait;
use log::debug;
use std::collections::HashSet;
use std::sync::Arc;

pub struct EntryService<T: EntryRepositoryTrait> {
    entry_repo: Arc<T>,
}

impl<T: EntryRepositoryTrait> EntryService<T> {
    pub fn new(entry_repo: Arc<T>) -> Self {
        EntryService { entry_repo }
    }
}

/// Collapses repeated goal ids, keeping the first occurrence of each.
fn distinct_goal_ids(goal_ids: Vec<i32>) -> Vec<i32> {
    let mut seen = HashSet::with_capacity(goal_ids.len());
    goal_ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

#[async_trait]
impl<T: EntryRepositoryTrait + Send + Sync> EntryServiceTrait for EntryService<T> {
    fn get_entries(&self) -> Result<Vec<EntrySummary>> {
        let entries = self.entry_repo.load_entries_with_goals()?;
        Ok(entries.into_iter().map(EntrySummary::from).collect())
    }

    async fn create_entry(&self, mut new_entry: NewEntry) -> Result<Entry> {
        new_entry.goals = distinct_goal_ids(new_entry.goals);
        let link_count = new_entry.goals.len();
        let entry = self.entry_repo.insert_new_entry(new_entry).await?;
        debug!("Created entry {} with {} goal link(s)", entry.id, link_count);
        Ok(entry)
    }

    async fn update_entry(&self, entry_id: i32, mut entry_update: NewEntry) -> Result<Entry> {
        entry_update.goals = distinct_goal_ids(entry_update.goals);
        self.entry_repo.update_entry(entry_id, entry_update).await
    }

    async fn delete_entry(&self, entry_id: i32) -> Result<usize> {
        let deleted = self.entry_repo.delete_entry(entry_id).await?;
        debug!("Deleted entry {} ({} row(s))", entry_id, deleted);
        Ok(deleted)
    }
}

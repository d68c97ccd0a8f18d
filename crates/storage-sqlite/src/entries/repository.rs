use journal_core::entries::{Entry, EntryRepositoryTrait, EntryWithGoals, LinkedGoal, NewEntry};
use journal_core::Result;

use super::model::{EntryGoalDB, JournalDB, NewJournalDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{entry_goals, goals, journal};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;

use std::collections::HashMap;
use std::sync::Arc;

pub struct EntryRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

/// Inserts one link row per goal id for the given entry.
fn insert_links(conn: &mut SqliteConnection, entry_id: i32, goal_ids: &[i32]) -> Result<usize> {
    let mut affected_rows = 0;
    for goal_id in goal_ids {
        let link = EntryGoalDB {
            entry_id,
            goal_id: *goal_id,
        };
        affected_rows += diesel::insert_into(entry_goals::table)
            .values(&link)
            .execute(conn)
            .into_core()?;
    }
    Ok(affected_rows)
}

impl EntryRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        EntryRepository { pool, writer }
    }

    pub fn load_entries_with_goals_impl(&self) -> Result<Vec<EntryWithGoals>> {
        let mut conn = get_connection(&self.pool)?;
        // Both reads share one transaction so links match the entries loaded.
        let (entries_db, links) = conn
            .transaction::<_, diesel::result::Error, _>(|conn| {
                let entries_db = journal::table
                    .select(JournalDB::as_select())
                    .order(journal::id.asc())
                    .load::<JournalDB>(conn)?;
                let links = entry_goals::table
                    .inner_join(goals::table)
                    .select((entry_goals::entry_id, goals::id, goals::title))
                    .order((entry_goals::entry_id.asc(), goals::id.asc()))
                    .load::<(i32, i32, Option<String>)>(conn)?;
                Ok((entries_db, links))
            })
            .into_core()?;

        let mut goals_by_entry: HashMap<i32, Vec<LinkedGoal>> = HashMap::new();
        for (entry_id, goal_id, goal_title) in links {
            goals_by_entry.entry(entry_id).or_default().push(LinkedGoal {
                id: goal_id,
                title: goal_title,
            });
        }

        Ok(entries_db
            .into_iter()
            .map(|entry_db| EntryWithGoals {
                goals: goals_by_entry.remove(&entry_db.id).unwrap_or_default(),
                entry: Entry::from(entry_db),
            })
            .collect())
    }
}

#[async_trait]
impl EntryRepositoryTrait for EntryRepository {
    fn load_entries_with_goals(&self) -> Result<Vec<EntryWithGoals>> {
        self.load_entries_with_goals_impl()
    }

    async fn insert_new_entry(&self, new_entry: NewEntry) -> Result<Entry> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Entry> {
                let NewEntry {
                    title,
                    content,
                    goals: goal_ids,
                } = new_entry;

                let entry_db = diesel::insert_into(journal::table)
                    .values(&NewJournalDB { title, content })
                    .returning(JournalDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                insert_links(conn, entry_db.id, &goal_ids)?;
                Ok(Entry::from(entry_db))
            })
            .await
    }

    async fn update_entry(&self, entry_id: i32, entry_update: NewEntry) -> Result<Entry> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Entry> {
                let NewEntry {
                    title,
                    content,
                    goals: goal_ids,
                } = entry_update;

                // No matching row surfaces as NotFound before any link is touched.
                let entry_db = diesel::update(journal::table.find(entry_id))
                    .set(&NewJournalDB { title, content })
                    .returning(JournalDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                diesel::delete(entry_goals::table.filter(entry_goals::entry_id.eq(entry_id)))
                    .execute(conn)
                    .into_core()?;
                insert_links(conn, entry_id, &goal_ids)?;
                Ok(Entry::from(entry_db))
            })
            .await
    }

    async fn delete_entry(&self, entry_id: i32) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(entry_goals::table.filter(entry_goals::entry_id.eq(entry_id)))
                    .execute(conn)
                    .into_core()?;
                diesel::delete(journal::table.find(entry_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}

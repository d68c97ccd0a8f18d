use journal_core::goals::{Goal, GoalRepositoryTrait, NewGoal};
use journal_core::Result;

use super::model::{GoalDB, NewGoalDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::goals;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct GoalRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl GoalRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        GoalRepository { pool, writer }
    }

    pub fn load_goals_impl(&self) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        let goals_db = goals::table
            .select(GoalDB::as_select())
            .order(goals::id.asc())
            .load::<GoalDB>(&mut conn)
            .into_core()?;
        Ok(goals_db.into_iter().map(Goal::from).collect())
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn load_goals(&self) -> Result<Vec<Goal>> {
        self.load_goals_impl()
    }

    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Goal> {
                let new_goal_db: NewGoalDB = new_goal.into();
                let result_db = diesel::insert_into(goals::table)
                    .values(&new_goal_db)
                    .returning(GoalDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Goal::from(result_db))
            })
            .await
    }

    async fn update_goal(&self, goal_id: i32, goal_update: NewGoal) -> Result<Goal> {
        let changes: NewGoalDB = goal_update.into();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Goal> {
                // No matching row surfaces as NotFound.
                let result_db = diesel::update(goals::table.find(goal_id))
                    .set(&changes)
                    .returning(GoalDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Goal::from(result_db))
            })
            .await
    }

    async fn delete_goal(&self, goal_id: i32) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(goals::table.find(goal_id))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}

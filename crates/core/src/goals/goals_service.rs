use crate::errors::Result;
use crate::goals::goals_model::{Goal, NewGoal};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

pub struct GoalService<T: GoalRepositoryTrait> {
    goal_repo: Arc<T>,
}

impl<T: GoalRepositoryTrait> GoalService<T> {
    pub fn new(goal_repo: Arc<T>) -> Self {
        GoalService { goal_repo }
    }
}

#[async_trait]
impl<T: GoalRepositoryTrait + Send + Sync> GoalServiceTrait for GoalService<T> {
    fn get_goals(&self) -> Result<Vec<Goal>> {
        self.goal_repo.load_goals()
    }

    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        let goal = self.goal_repo.insert_new_goal(new_goal).await?;
        debug!("Created goal {}", goal.id);
        Ok(goal)
    }

    async fn update_goal(&self, goal_id: i32, goal_update: NewGoal) -> Result<Goal> {
        self.goal_repo.update_goal(goal_id, goal_update).await
    }

    async fn delete_goal(&self, goal_id: i32) -> Result<usize> {
        let deleted = self.goal_repo.delete_goal(goal_id).await?;
        debug!("Deleted goal {} ({} row(s))", goal_id, deleted);
        Ok(deleted)
    }
}

//! Task repository contract and in-memory implementation.

use crate::catalog::sample_tasks;
use crate::model::task::Task;
use crate::repo::{ensure_unique_ids, RepoResult};

/// Read access to the home screen task collection.
pub trait TaskRepository {
    /// Returns the full task collection in display order.
    fn list_tasks(&self) -> RepoResult<Vec<Task>>;
}

/// Task repository over an owned vector.
#[derive(Debug, Clone)]
pub struct InMemoryTaskRepository {
    tasks: Vec<Task>,
}

impl InMemoryTaskRepository {
    /// Creates a repository after checking id uniqueness.
    pub fn try_new(tasks: Vec<Task>) -> RepoResult<Self> {
        ensure_unique_ids("task", tasks.iter().map(|task| task.id.as_str()))?;
        Ok(Self { tasks })
    }

    /// Repository serving the built-in sample tasks.
    pub fn sample() -> Self {
        Self {
            tasks: sample_tasks().to_vec(),
        }
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn list_tasks(&self) -> RepoResult<Vec<Task>> {
        Ok(self.tasks.clone())
    }
}

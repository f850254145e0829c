use chrono::Utc;
use tokio::sync::RwLock;

use super::{NewTask, Page, Task, TaskError, TaskUpdate};

#[derive(Debug)]
struct TaskTable {
    next_id: u64,
    tasks: Vec<Task>,
}

/// Ordered, process-lifetime task collection. IDs are never reused, even after `clear`.
#[derive(Debug)]
pub struct TaskStore {
    table: RwLock<TaskTable>,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self {
            table: RwLock::new(TaskTable { next_id: 1, tasks: Vec::new() }),
        }
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, new_task: NewTask) -> Result<Task, TaskError> {
        let new_task = new_task.validate()?;
        let now = Utc::now();

        let mut table = self.table.write().await;
        let task = Task {
            id: table.next_id,
            title: new_task.title,
            description: new_task.description,
            status: new_task.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        table.next_id += 1;
        table.tasks.push(task.clone());

        tracing::debug!("Created task {}", task.id);
        Ok(task)
    }

    pub async fn get(&self, id: u64) -> Result<Task, TaskError> {
        self.table
            .read()
            .await
            .tasks
            .iter()
            .find(|task| task.id == id)
            .cloned()
            .ok_or(TaskError::NotFound(id))
    }

    pub async fn list(&self, page: Page) -> Vec<Task> {
        self.table
            .read()
            .await
            .tasks
            .iter()
            .skip(page.skip)
            .take(page.limit)
            .cloned()
            .collect()
    }

    pub async fn update(&self, id: u64, update: TaskUpdate) -> Result<Task, TaskError> {
        let update = update.validate()?;

        let mut table = self.table.write().await;
        let task = table
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(TaskError::NotFound(id))?;

        if let Some(title) = update.title {
            task.title = title;
        }
        if let Some(description) = update.description {
            task.description = Some(description);
        }
        if let Some(status) = update.status {
            task.status = status;
        }
        task.updated_at = Utc::now();

        Ok(task.clone())
    }

    pub async fn delete(&self, id: u64) -> Result<(), TaskError> {
        let mut table = self.table.write().await;
        let position = table
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(TaskError::NotFound(id))?;
        table.tasks.remove(position);
        Ok(())
    }

    /// Remove every task, returning how many were removed.
    pub async fn clear(&self) -> usize {
        let mut table = self.table.write().await;
        let removed = table.tasks.len();
        table.tasks.clear();
        removed
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.tasks.len()
    }
}

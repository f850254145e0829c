//! Task records and the in-memory task store.

pub mod store;

pub use store::TaskStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const MAX_TITLE_LEN: usize = 100;
const MAX_DESCRIPTION_LEN: usize = 500;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaskError {
    #[error("Task not found")]
    NotFound(u64),

    #[error("{field}: {message}")]
    Invalid { field: &'static str, message: String },

    #[error("{0}")]
    InvalidPage(String),
}

impl TaskError {
    fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        TaskError::Invalid { field, message: message.into() }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a task. Any client-supplied `id` is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
}

impl NewTask {
    pub fn validate(mut self) -> Result<Self, TaskError> {
        self.title = validate_title(&self.title)?;
        if let Some(description) = &self.description {
            validate_description(description)?;
        }
        Ok(self)
    }
}

/// Partial update; absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
}

impl TaskUpdate {
    pub fn validate(mut self) -> Result<Self, TaskError> {
        if let Some(title) = &self.title {
            self.title = Some(validate_title(title)?);
        }
        if let Some(description) = &self.description {
            validate_description(description)?;
        }
        Ok(self)
    }
}

fn validate_title(title: &str) -> Result<String, TaskError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(TaskError::invalid("title", "title cannot be empty"));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(TaskError::invalid(
            "title",
            format!("title cannot exceed {} characters", MAX_TITLE_LEN),
        ));
    }
    Ok(title.to_string())
}

fn validate_description(description: &str) -> Result<(), TaskError> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(TaskError::invalid(
            "description",
            format!("description cannot exceed {} characters", MAX_DESCRIPTION_LEN),
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskLimits {
    pub default_limit: usize,
    pub max_limit: usize,
}

impl Default for TaskLimits {
    fn default() -> Self {
        Self { default_limit: 10, max_limit: 100 }
    }
}

/// A window over the task list in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: usize,
    pub limit: usize,
}

impl Page {
    /// Build a page from raw query values: `skip >= 0`, `1 <= limit <= max_limit`.
    pub fn from_query(skip: Option<i64>, limit: Option<i64>, limits: &TaskLimits) -> Result<Self, TaskError> {
        let skip = skip.unwrap_or(0);
        if skip < 0 {
            return Err(TaskError::InvalidPage("skip must be greater than or equal to 0".to_string()));
        }

        let limit = limit.unwrap_or(limits.default_limit as i64);
        if limit < 1 || limit > limits.max_limit as i64 {
            return Err(TaskError::InvalidPage(format!(
                "limit must be between 1 and {}",
                limits.max_limit
            )));
        }

        Ok(Self { skip: skip as usize, limit: limit as usize })
    }
}

//! Shared application state for both services.
//!
//! Each service builds its state once at startup and hands it to axum; the
//! stores inside are dropped with the router at shutdown.

use std::sync::Arc;

use crate::auth::{AuthError, TokenService, UserStore};
use crate::config::AppConfig;
use crate::tasks::{TaskLimits, TaskStore};

/// State for the algorithms service: registered users and the token service.
#[derive(Clone)]
pub struct AuthState {
    pub users: Arc<UserStore>,
    pub tokens: Arc<TokenService>,
}

impl AuthState {
    pub fn new(tokens: TokenService) -> Self {
        Self {
            users: Arc::new(UserStore::new()),
            tokens: Arc::new(tokens),
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, AuthError> {
        Ok(Self::new(TokenService::from_config(&config.security)?))
    }
}

/// State for the task service.
#[derive(Debug, Clone)]
pub struct TaskState {
    pub store: Arc<TaskStore>,
    pub limits: TaskLimits,
}

impl TaskState {
    pub fn new(limits: TaskLimits) -> Self {
        Self {
            store: Arc::new(TaskStore::new()),
            limits,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(TaskLimits::from(&config.tasks))
    }
}

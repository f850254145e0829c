// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Token acquisition and service information. No middleware layers.
pub mod auth;
pub mod info;

pub use auth::{login, register};
pub use info::{algorithms_root, health, tasks_root};

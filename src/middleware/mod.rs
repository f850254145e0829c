pub mod auth;
pub mod request_id;

pub use auth::{require_bearer, AuthUser};
pub use request_id::request_id_middleware;

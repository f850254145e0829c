// handlers/mod.rs - handlers grouped by security tier
//
// Public (no auth) → Protected (bearer token) for the algorithms service,
// plus the task service, which has no authentication.
pub mod public; // /register, /login, /, /health
pub mod protected; // /protected and the list algorithm routes
pub mod tasks; // /tasks CRUD

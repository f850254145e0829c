pub mod algorithms;
pub mod api;
pub mod auth;
pub mod balance;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod state;
pub mod tasks;

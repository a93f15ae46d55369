//! plantd-server: HTTP API for the plant inventory
//!
//! Exposes the plants table over REST: list, create, and fetch-by-id,
//! with validation at the edge and SQLite persistence underneath.

pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{run_server, AppState, ServerConfig};

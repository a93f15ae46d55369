//! Database layer - connection pool, migrations, and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - no Arc<Mutex<Connection>>
//! - Handlers never write SQL; repositories own every query
//! - Rely on DB constraints, handle conflicts - no check-then-insert

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;

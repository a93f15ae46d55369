//! Repositories organized by resource

pub mod plants;

pub use plants::{DbError, Plant, PlantRepo};

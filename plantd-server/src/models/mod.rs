//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod plant;
pub mod validation;

pub use plant::{ImageRef, NewPlant, PlantName, Price};
pub use validation::ValidationError;

pub mod error;
pub mod model;
pub mod path_compute;
pub mod runtime;
pub mod simulation;

pub use error::{PathError, Result};

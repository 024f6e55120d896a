//! Core utilities: randomness, errors and logging.

pub mod error;
pub mod logging;
pub mod random;

pub use error::{RainError, Result};

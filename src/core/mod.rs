//! Core types: grant rows, skip reasons, extractor configuration, errors,
//! and amount normalization.

mod amount;
mod config;
mod error;
mod types;

pub use amount::*;
pub use config::*;
pub use error::*;
pub use types::*;

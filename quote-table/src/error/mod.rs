//! Error types

mod config;
mod field;
mod source;

pub use config::*;
pub use field::*;
pub use source::*;

//! Row models

mod id;
mod record;
mod record_serde;
mod row;
mod value;

pub use id::*;
pub use record::*;
pub use row::*;
pub use value::*;

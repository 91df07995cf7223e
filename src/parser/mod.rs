//! Hebrew number phrase parsing module
//!
//! This module is responsible for turning Hebrew number phrases into numeric values.
//! The main entry point is the `convert` function.

mod combiner;
mod convert;
mod decimal;
mod tokens;
mod validate;

pub use convert::convert;
pub use tokens::tokenize;

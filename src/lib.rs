pub mod error;
pub mod lexicon;
pub mod parser;
pub mod types;

// Public API
pub use error::{ConversionError, Result};
pub use parser::{convert, tokenize};
pub use types::*;

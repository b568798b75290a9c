//! CODA handlers.

mod extract_model;

pub use extract_model::{ExtractModelHandler, ExtractModelResult};

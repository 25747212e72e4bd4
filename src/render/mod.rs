//! Rendering extraction results to output formats.

mod json;

pub use json::{to_json, JsonFormat};

//! JSON rendering for extraction results.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::{Error, Result};
use crate::model::ExtractionResult;

/// Indentation used by [`JsonFormat::Pretty`].
const PRETTY_INDENT: &[u8] = b"    ";

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with four-space indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert an extraction result to JSON.
///
/// Non-ASCII text is written as-is, not as `\u` escapes.
pub fn to_json(result: &ExtractionResult, format: JsonFormat) -> Result<String> {
    let bytes = match format {
        JsonFormat::Pretty => {
            let mut buf = Vec::new();
            let formatter = PrettyFormatter::with_indent(PRETTY_INDENT);
            let mut ser = Serializer::with_formatter(&mut buf, formatter);
            result.serialize(&mut ser).map(|_| buf)
        }
        JsonFormat::Compact => serde_json::to_vec(result),
    }
    .map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))?;

    String::from_utf8(bytes).map_err(|e| Error::Render(e.to_string()))
}

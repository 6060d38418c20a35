//! Response formatting.

use crate::error::Result;

/// Prepare an API response for printing.
///
/// Without `pretty` the body is returned untouched. With it, the body is
/// parsed as JSON and re-serialized with two-space indentation, keeping the
/// original key order.
pub fn format_response(body: &str, pretty: bool) -> Result<String> {
    if !pretty {
        return Ok(body.to_string());
    }

    let value: serde_json::Value = serde_json::from_str(body)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

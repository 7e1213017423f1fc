//! JSON glue between request bodies, response text and caller types.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Formatting;
use crate::error::{RequestError, Result};

/// Serialize `value` to JSON text laid out per `formatting`.
///
/// Returns `None` when the value serializes to JSON `null`, so an absent
/// body object leaves the request body untouched.
pub fn serialize<S: Serialize + ?Sized>(value: &S, formatting: Formatting) -> Result<Option<String>> {
    let text = match formatting {
        Formatting::Compact => serde_json::to_string(value),
        Formatting::Indented => serde_json::to_string_pretty(value),
    }
    .map_err(RequestError::SerializationError)?;

    if text == "null" {
        return Ok(None);
    }
    Ok(Some(text))
}

/// Deserialize response text into `T`, reporting the JSON path of the first
/// mismatch.
pub fn deserialize<T: DeserializeOwned>(text: &str) -> Result<T> {
    let mut de = serde_json::Deserializer::from_str(text);
    let value = serde_path_to_error::deserialize(&mut de).map_err(|e| RequestError::DeserializationError {
        path: e.path().to_string(),
        message: e.into_inner().to_string(),
    })?;
    // Reject trailing characters after the value.
    de.end().map_err(|e| RequestError::DeserializationError {
        path: ".".to_string(),
        message: e.to_string(),
    })?;
    Ok(value)
}

//! Decoding of ID-keyed response objects
//!
//! Several ZAPI endpoints answer with a JSON object used as a map from entity
//! ID to entity body, where the body itself omits the ID:
//!
//! ```json
//! { "54": { "name": "Sprint 12", ... }, "55": { ... }, "recordsCount": 2 }
//! ```
//!
//! Keys that parse as integers are entities; anything else is metadata and is
//! skipped. The parsed key is written back into the decoded entity.

use log::trace;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::client::models::{Cycle, Execution};
use crate::error::ApiError;

/// Entities whose identity can be restored from a map key
pub trait Identified {
    /// Whether the entity already carries a (non-zero) ID
    fn has_id(&self) -> bool;

    fn set_id(&mut self, id: i64);
}

impl Identified for Cycle {
    fn has_id(&self) -> bool {
        self.id.is_some_and(|id| id != 0)
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

impl Identified for Execution {
    fn has_id(&self) -> bool {
        self.id != 0
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

/// Parse a response body as a JSON object. A `null` body is an empty object.
fn decode_object(body: &str) -> Result<Map<String, Value>, ApiError> {
    serde_json::from_str::<Option<Map<String, Value>>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| ApiError::Decode(format!("Expected an ID-keyed object: {}", e)))
}

fn decode_entity<T: DeserializeOwned>(key: &str, value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value)
        .map_err(|e| ApiError::Decode(format!("Failed to decode entry {:?}: {}", key, e)))
}

/// Decode every integer-keyed entry of an ID-keyed object.
///
/// The key always wins over any `id` present in the body. One undecodable
/// entry fails the whole call. Result order is unspecified.
pub fn decode_keyed_list<T>(body: &str) -> Result<Vec<T>, ApiError>
where
    T: DeserializeOwned + Identified,
{
    let object = decode_object(body)?;

    let mut entities = Vec::with_capacity(object.len());
    for (key, value) in object {
        let Ok(id) = key.parse::<i64>() else {
            trace!("Skipping non-entity key {:?}", key);
            continue;
        };

        let mut entity: T = decode_entity(&key, value)?;
        entity.set_id(id);
        entities.push(entity);
    }

    Ok(entities)
}

/// Decode the first entry of an ID-keyed object expected to hold exactly one.
///
/// Returns `None` for an empty object. The key fills in the ID only when the
/// body lacks one.
pub fn decode_first_entry<T>(body: &str) -> Result<Option<T>, ApiError>
where
    T: DeserializeOwned + Identified,
{
    let object = decode_object(body)?;

    let Some((key, value)) = object.into_iter().next() else {
        return Ok(None);
    };

    let mut entity: T = decode_entity(&key, value)?;
    if !entity.has_id()
        && let Ok(id) = key.parse::<i64>()
    {
        entity.set_id(id);
    }

    Ok(Some(entity))
}

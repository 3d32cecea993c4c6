//! Record request/response types.

use menagerie_core::{Animal, AnimalKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

/// Request to create a record.
///
/// `type` stays a plain string here so an unknown tag is reported as an
/// invalid type rather than as malformed JSON. Absent and `null` fields read
/// as empty.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAnimalRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
}

impl CreateAnimalRequest {
    /// Parses a raw request body.
    ///
    /// The body must be a JSON object or a bare `null` (an empty request).
    /// Arrays, scalars, and fields of the wrong type are `InvalidJson`.
    pub fn from_body(body: &[u8]) -> Result<Self, ApiError> {
        match serde_json::from_slice::<Value>(body).map_err(|_| ApiError::InvalidJson)? {
            Value::Null => Ok(CreateAnimalRequest {
                kind: None,
                name: None,
            }),
            object @ Value::Object(_) => {
                serde_json::from_value(object).map_err(|_| ApiError::InvalidJson)
            }
            _ => Err(ApiError::InvalidJson),
        }
    }

    pub fn kind(&self) -> &str {
        self.kind.as_deref().unwrap_or_default()
    }

    pub fn into_name(self) -> String {
        self.name.unwrap_or_default()
    }
}

/// Wire view of a record: `{"type": ..., "name": ..., "sound": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimalView {
    #[serde(rename = "type")]
    pub kind: AnimalKind,
    pub name: String,
    pub sound: String,
}

impl From<&Animal> for AnimalView {
    fn from(animal: &Animal) -> Self {
        let (kind, name) = match animal {
            Animal::Dog { name } => (AnimalKind::Dog, name),
            Animal::Cat { name } => (AnimalKind::Cat, name),
        };
        AnimalView {
            kind,
            name: name.clone(),
            sound: animal.speak(),
        }
    }
}

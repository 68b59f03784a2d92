use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of a capture request.
/// Fields are optional and any other fields are ignored.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CapturePokemonRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// A captured pokemon, as persisted and as returned to the caller.
///
/// Missing `title` or `description` are left out of the serialized form
/// rather than written as `null`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pokemon {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Pokemon {
    /// Create a new record with a random v4 id, stamped with the current time.
    pub fn capture(request: CapturePokemonRequest) -> Self {
        Pokemon {
            id: Uuid::new_v4().to_string(),
            title: request.title,
            description: request.description,
            // Millisecond precision keeps the stored and returned timestamps identical
            created_at: Utc::now().trunc_subsecs(3),
        }
    }
}

impl From<CapturePokemonRequest> for Pokemon {
    fn from(request: CapturePokemonRequest) -> Self {
        Pokemon::capture(request)
    }
}

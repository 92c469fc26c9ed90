use serde::{Deserialize, Serialize};

use crate::model::lenient::{or_default, timestamp};
use crate::model::record_id::RecordId;

/// An audience persona, from `GET /api/personas`. Only counted on the
/// dashboard.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Persona {
    #[serde(deserialize_with = "or_default")]
    pub id: RecordId,
    #[serde(deserialize_with = "or_default")]
    pub name: String,
    #[serde(deserialize_with = "or_default")]
    pub role: Option<String>,
    #[serde(deserialize_with = "or_default")]
    pub industry: Option<String>,
    #[serde(deserialize_with = "or_default")]
    pub description: Option<String>,
    #[serde(deserialize_with = "timestamp")]
    pub created_at: Option<String>,
}

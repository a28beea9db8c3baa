//! Response bodies returned by the REST API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use magic_movers_domain::types::QuestState;

/// A magic item as seen by clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MagicItemResponse {
    pub id: Uuid,
    pub name: String,
    pub weight: u32,
    pub is_being_used: bool,
}

/// A mover as seen by clients. Completed mission counts are internal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MagicMoverResponse {
    pub id: Uuid,
    pub name: String,
    pub weight_limit: u32,
    pub energy: u32,
    pub quest_state: QuestState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionResponse {
    pub id: Uuid,
    pub mover_id: Uuid,
    pub items_ids: Vec<Uuid>,
    pub quest_state: QuestState,
}

/// One row of `GET /api/magic-movers/rank`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedMoverResponse {
    pub id: Uuid,
    pub name: String,
    pub rank: u32,
}

/// Error envelope.
///
/// Either a general `message` or a per-field `validation` map is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<BTreeMap<String, String>>,
}

impl ErrorResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            validation: None,
        }
    }

    pub fn validation(fields: BTreeMap<String, String>) -> Self {
        Self {
            message: None,
            validation: Some(fields),
        }
    }

    /// Single-field validation error.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(field.into(), message.into());
        Self::validation(fields)
    }
}

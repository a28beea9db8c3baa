use serde::{Deserialize, Serialize};

/// Query string for `GET /api/missions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MissionsQuery {
    #[serde(default)]
    pub state: Option<String>,
}

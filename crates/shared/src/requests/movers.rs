use serde::{Deserialize, Serialize};

/// `POST /api/magic-movers`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMagicMoverRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub weight_limit: Option<i64>,
    #[serde(default)]
    pub energy: Option<i64>,
}

/// `POST /api/magic-movers/{moverId}/load`
///
/// IDs stay as strings: a value that is not a UUID simply names no item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadMoverRequest {
    #[serde(default)]
    pub magic_items_ids: Option<Vec<String>>,
}

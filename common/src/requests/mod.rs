use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::column::Column;

/// Create-or-update payload for `POST /api/tables/save`. Without an `id` the
/// store creates a new table; with one it replaces the stored definition
/// wholesale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveTableRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    pub detail_page_id: i64,
    pub columns: Vec<Column>,
    pub rows: Vec<RowPayload>,
}

/// Row as it arrives on the wire. `data` is loosely typed on purpose: the
/// store normalizes positional arrays and keyed maps alike.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RowPayload {
    pub id: String,
    pub data: Value,
}

/// Payload for `POST /api/detail_pages/save`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaveDetailPageRequest {
    pub title: String,
    pub slug: String,
}

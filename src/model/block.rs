use super::Parent;
use crate::types::BlockId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A Notion block.
///
/// The type-specific payload (`"paragraph": {...}`, `"heading_1": {...}`, ...)
/// is kept as raw JSON under `payload`, keyed by the block type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub object: String,
    pub id: BlockId,
    #[serde(rename = "type", default)]
    pub block_type: String,
    #[serde(default)]
    pub has_children: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_edited_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub parent: Option<Parent>,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl Block {
    /// The type-specific object, e.g. the `paragraph` object of a paragraph block.
    pub fn content(&self) -> Option<&Value> {
        self.payload.get(&self.block_type)
    }

    /// Plain text of the block's `rich_text`, concatenated without separators.
    pub fn plain_text(&self) -> String {
        self.content()
            .and_then(|c| c.get("rich_text"))
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.get("plain_text").and_then(Value::as_str))
                    .collect()
            })
            .unwrap_or_default()
    }
}

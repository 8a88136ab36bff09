use serde::{Deserialize, Serialize};

use crate::model::MatchedItem;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchedItemDto {
    pub id: String,
    pub title: String,
    pub path: String,
    pub relevance: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppendRequest {
    pub group: String,
    pub items: Vec<MatchedItemDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppendResponse {
    pub relayout: bool,
    pub item_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpandRequest {
    pub group: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpandResponse {
    pub expanded: bool,
    pub total_height: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClearResponse {
    pub item_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "payload")]
pub enum PanelRequest {
    Append(AppendRequest),
    Expand(ExpandRequest),
    Clear,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "payload")]
pub enum PanelResponse {
    Append(AppendResponse),
    Expand(ExpandResponse),
    Clear(ClearResponse),
}

impl From<MatchedItemDto> for MatchedItem {
    fn from(value: MatchedItemDto) -> Self {
        Self {
            id: value.id,
            title: value.title,
            path: value.path,
            relevance: value.relevance,
        }
    }
}

impl From<MatchedItem> for MatchedItemDto {
    fn from(value: MatchedItem) -> Self {
        Self {
            id: value.id,
            title: value.title,
            path: value.path,
            relevance: value.relevance,
        }
    }
}

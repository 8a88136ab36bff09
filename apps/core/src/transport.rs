use serde::{Deserialize, Serialize};

use crate::contract::{
    AppendResponse, ClearResponse, ExpandResponse, PanelRequest, PanelResponse,
};
use crate::model::MatchedItem;
use crate::panel::ResultsPanel;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidJson,
    UnknownGroup,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TransportResponse {
    Ok { response: PanelResponse },
    Err { error: ErrorResponse },
}

pub fn handle_request(panel: &mut ResultsPanel, request: PanelRequest) -> TransportResponse {
    match request {
        PanelRequest::Append(payload) => {
            let items: Vec<MatchedItem> =
                payload.items.into_iter().map(MatchedItem::from).collect();
            let relayout = panel.append(&items, &payload.group);
            TransportResponse::Ok {
                response: PanelResponse::Append(AppendResponse {
                    relayout,
                    item_count: panel.item_count(),
                }),
            }
        }
        PanelRequest::Expand(payload) => match panel.expand(&payload.group) {
            Some(expanded) => TransportResponse::Ok {
                response: PanelResponse::Expand(ExpandResponse {
                    expanded,
                    total_height: panel.total_height(),
                }),
            },
            None => TransportResponse::Err {
                error: ErrorResponse {
                    code: ErrorCode::UnknownGroup,
                    message: format!("no result group for '{}'", payload.group),
                },
            },
        },
        PanelRequest::Clear => {
            panel.clear();
            TransportResponse::Ok {
                response: PanelResponse::Clear(ClearResponse {
                    item_count: panel.item_count(),
                }),
            }
        }
    }
}

pub fn handle_json(panel: &mut ResultsPanel, payload: &str) -> String {
    let response = match serde_json::from_str::<PanelRequest>(payload) {
        Ok(request) => handle_request(panel, request),
        Err(error) => TransportResponse::Err {
            error: ErrorResponse {
                code: ErrorCode::InvalidJson,
                message: error.to_string(),
            },
        },
    };

    serde_json::to_string(&response).expect("transport response should serialize")
}

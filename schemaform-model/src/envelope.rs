use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::EntityRecord;

/// Outcome of a storage or use-case call, as handed to the engines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ResultData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ResultEnvelope {
    pub fn ok(data: ResultData) -> Self {
        Self {
            success: true,
            data: Some(data),
            ..Self::default()
        }
    }

    pub fn failed(error_message: &str) -> Self {
        Self {
            success: false,
            error_message: Some(error_message.into()),
            ..Self::default()
        }
    }
}

/// The `data` payload: a bare list, a page, or something else entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultData {
    List(Vec<EntityRecord>),
    /// Needs an `items` key; other objects land in `Other`.
    Page {
        items: Vec<EntityRecord>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        total_count: Option<u64>,
    },
    /// Anything that is neither; treated as empty by consumers.
    Other(Value),
}

impl ResultData {
    pub fn page(items: Vec<EntityRecord>, total_count: u64) -> Self {
        ResultData::Page {
            items,
            total_count: Some(total_count),
        }
    }
}

use schemaform_model::{EntityRecord, ResultData, ResultEnvelope};

const UNKNOWN_ERROR: &str = "Unknown error";

/// Records carried by a result payload: the list itself, or a page's
/// `items`. Anything else is empty.
pub fn extract_items_from_result_data(data: Option<&ResultData>) -> Vec<EntityRecord> {
    match data {
        Some(ResultData::List(items)) | Some(ResultData::Page { items, .. }) => items.clone(),
        Some(ResultData::Other(_)) | None => Vec::new(),
    }
}

/// Total count of a result payload: a list's length, or a page's
/// `total_count` (0 when the page omits it).
pub fn extract_total_count_from_result_data(data: Option<&ResultData>) -> u64 {
    match data {
        Some(ResultData::List(items)) => items.len() as u64,
        Some(ResultData::Page { total_count, .. }) => total_count.unwrap_or(0),
        Some(ResultData::Other(_)) | None => 0,
    }
}

/// Message of a failed result: `error_message`, then `error`, then
/// `"Unknown error"`. Successful or missing results also yield `"Unknown error"`.
pub fn extract_error_message_from_result(result: Option<&ResultEnvelope>) -> String {
    result
        .filter(|r| !r.success)
        .and_then(|r| {
            [r.error_message.as_deref(), r.error.as_deref()]
                .into_iter()
                .flatten()
                .find(|message| !message.is_empty())
        })
        .unwrap_or(UNKNOWN_ERROR)
        .to_owned()
}

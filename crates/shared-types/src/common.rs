use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

/// Rows per page used by every list screen unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Upper bound accepted for a page size.
pub const MAX_PAGE_SIZE: u32 = 100;

/// One page of rows as returned by a list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub rows: Vec<T>,
    pub total_pages: u32,
    /// Absent when the endpoint does not report it.
    pub total_count: Option<u64>,
}

impl<T> PageResult<T> {
    /// Slice page `page` (1-based) of `limit` rows out of a complete, already
    /// ordered result set.
    pub fn paginate(all: Vec<T>, page: u32, limit: u32) -> Self {
        let (page, limit) = normalize_pagination(Some(page), Some(limit));
        let total = all.len() as u64;
        let total_pages = total_pages_for(total, limit);
        let skip = ((page - 1) as usize).saturating_mul(limit as usize);
        let rows = all.into_iter().skip(skip).take(limit as usize).collect();
        Self {
            rows,
            total_pages,
            total_count: Some(total),
        }
    }
}

/// Number of pages needed for `total` rows; an empty set still has one page.
pub fn total_pages_for(total: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 1;
    }
    let pages = total.div_ceil(limit as u64);
    pages.max(1) as u32
}

/// Helper to normalize pagination params with safe defaults.
pub fn normalize_pagination(page: Option<u32>, limit: Option<u32>) -> (u32, u32) {
    let page = page.unwrap_or(1).max(1);
    let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    (page, limit)
}

/// Decode a list response of the shape
/// `{ success, <rows_field>: [...], totalPages, totalCount?, message? }`.
pub fn parse_list_envelope<T: DeserializeOwned>(
    body: Value,
    rows_field: &str,
) -> Result<PageResult<T>, AppError> {
    let success = body.get("success").and_then(Value::as_bool).unwrap_or(false);
    if !success {
        return Err(AppError::server_or_generic(envelope_message(&body)));
    }

    let rows_value = body.get(rows_field).cloned().ok_or_else(|| {
        AppError::network(format!("Unexpected response: missing `{rows_field}`"))
    })?;
    let rows: Vec<T> = serde_json::from_value(rows_value)
        .map_err(|e| AppError::network(format!("Unexpected response: {e}")))?;

    let total_count = body.get("totalCount").and_then(Value::as_u64);
    let total_pages = body
        .get("totalPages")
        .and_then(Value::as_u64)
        .map(|p| p.max(1) as u32)
        .unwrap_or(1);

    Ok(PageResult {
        rows,
        total_pages,
        total_count,
    })
}

/// Decode a detail response of the shape `{ success, data, message? }`.
///
/// A successful envelope whose `data` is missing or `null` means the entity
/// no longer exists.
pub fn parse_detail_envelope<T: DeserializeOwned>(body: Value) -> Result<T, AppError> {
    let success = body.get("success").and_then(Value::as_bool).unwrap_or(false);
    if !success {
        return Err(AppError::server_or_generic(envelope_message(&body)));
    }
    match body.get("data") {
        None | Some(Value::Null) => Err(AppError::not_found("No data available")),
        Some(data) => serde_json::from_value(data.clone())
            .map_err(|e| AppError::network(format!("Unexpected response: {e}"))),
    }
}

/// Decode a mutation acknowledgement `{ success, message? }`, returning the
/// backend's message on success.
pub fn parse_ack_envelope(body: Value) -> Result<Option<String>, AppError> {
    let success = body.get("success").and_then(Value::as_bool).unwrap_or(false);
    if success {
        Ok(envelope_message(&body))
    } else {
        Err(AppError::server_or_generic(envelope_message(&body)))
    }
}

fn envelope_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}

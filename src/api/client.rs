//! HTTP API Client
//!
//! Functions for communicating with the finance tracker REST API.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// localStorage key holding an optional API base URL override.
///
/// When unset the client issues same-origin relative requests, which is the
/// normal deployment (the dashboard is served by the tracker itself).
const API_BASE_KEY: &str = "fintrack_api_url";

/// Get the API base URL from local storage, defaulting to same-origin paths.
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            storage
                .get_item(API_BASE_KEY)
                .ok()
                .flatten()
                .unwrap_or_default()
        } else {
            String::new()
        }
    } else {
        String::new()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL override in local storage.
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_BASE_KEY, url);
        }
    }
}

// ============ Errors ============

/// Failure modes of one fetch-decode cycle.
///
/// `Network` covers transport failures and non-2xx statuses; `Malformed`
/// covers bodies that are not JSON or do not match the expected shape.
/// A missing view element is never an error and never reaches this type.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}

// ============ Response Types ============

/// Aggregate totals shown on the three summary cards.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct SummarySnapshot {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
}

/// One month of income/expense totals. Producer order is display order.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct MonthlyPoint {
    pub month: String,
    pub income: f64,
    pub expense: f64,
}

/// Spending total for one category. Producer order is display order.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct CategoryPoint {
    pub category: String,
    pub amount: f64,
}

// ============ API Functions ============

/// Fetch the summary aggregate snapshot.
pub async fn fetch_summary() -> Result<SummarySnapshot, FetchError> {
    let path = "/api/summary";
    decode(fetch_json(path).await?, path)
}

/// Fetch the per-month income/expense series.
pub async fn fetch_monthly_summary() -> Result<Vec<MonthlyPoint>, FetchError> {
    let path = "/api/monthly-summary";
    let items = expect_array(fetch_json(path).await?, path)?;
    items.into_iter().map(|item| decode(item, path)).collect()
}

/// Fetch the spending-by-category distribution.
pub async fn fetch_category_distribution() -> Result<Vec<CategoryPoint>, FetchError> {
    let path = "/api/category-distribution";
    let items = expect_array(fetch_json(path).await?, path)?;
    items.into_iter().map(|item| decode(item, path)).collect()
}

/// Fetch the raw transaction list. Records are opaque to the dashboard.
pub async fn fetch_transactions() -> Result<Vec<Value>, FetchError> {
    let path = "/api/transactions";
    expect_array(fetch_json(path).await?, path)
}

/// Fetch expense records grouped by category. Records are opaque.
pub async fn fetch_expenses_by_category() -> Result<Vec<Value>, FetchError> {
    let path = "/api/expenses-by-category";
    expect_array(fetch_json(path).await?, path)
}

// ============ Internals ============

async fn fetch_json(path: &str) -> Result<Value, FetchError> {
    let response = Request::get(&format!("{}{}", get_api_base(), path))
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Network(format!(
            "{} returned HTTP {}",
            path,
            response.status()
        )));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| FetchError::Malformed(e.to_string()))
}

fn decode<T: DeserializeOwned>(value: Value, path: &str) -> Result<T, FetchError> {
    serde_json::from_value(value).map_err(|e| FetchError::Malformed(format!("{path}: {e}")))
}

fn expect_array(value: Value, path: &str) -> Result<Vec<Value>, FetchError> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(FetchError::Malformed(format!(
            "{path}: expected an array, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

use serde::Serialize;

use scene_core::analytics::Period;

use crate::error::{ApiError, ApiResult};

/// JSON envelope every `/api` response is wrapped in.
#[derive(Debug, Serialize)]
pub struct ApiEnvelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiEnvelope<T> {
    pub fn success(data: T) -> Self {
        ApiEnvelope {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        ApiEnvelope {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Page window parsed from `page`/`limit` query parameters.
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
}

pub const DEFAULT_PAGE_LIMIT: u32 = 20;
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Query parameters arrive as raw strings so that malformed values produce
/// an enveloped 400 instead of the extractor's plain-text rejection.
pub fn parse_u32(name: &str, raw: Option<&String>) -> ApiResult<Option<u32>> {
    match raw {
        None => Ok(None),
        Some(raw) => raw
            .parse::<u32>()
            .map(Some)
            .map_err(|_| ApiError::invalid_query(format!("{name} must be a positive integer"))),
    }
}

pub fn parse_pagination(page: Option<&String>, limit: Option<&String>) -> ApiResult<Pagination> {
    let page = parse_u32("page", page)?.unwrap_or(1);
    let limit = parse_u32("limit", limit)?.unwrap_or(DEFAULT_PAGE_LIMIT);

    if page < 1 {
        return Err(ApiError::invalid_query("page must be at least 1"));
    }
    if !(1..=MAX_PAGE_LIMIT).contains(&limit) {
        return Err(ApiError::invalid_query(format!(
            "limit must be between 1 and {MAX_PAGE_LIMIT}"
        )));
    }

    Ok(Pagination { page, limit })
}

pub fn paginate<T: Clone>(items: &[T], pagination: Pagination) -> Vec<T> {
    items
        .iter()
        .skip((pagination.page as usize - 1) * pagination.limit as usize)
        .take(pagination.limit as usize)
        .cloned()
        .collect()
}

pub fn parse_period(raw: Option<&String>, default: Period) -> ApiResult<Period> {
    match raw {
        None => Ok(default),
        Some(tag) => Period::parse(tag).map_err(ApiError::from),
    }
}

/// The dashboard works off "today"; everything downstream takes the date
/// as an argument so tests can fix it.
pub fn today() -> chrono::NaiveDate {
    chrono::Utc::now().date_naive()
}

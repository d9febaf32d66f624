use crate::shared::error::AppError;
use serde::Deserialize;
use utoipa::IntoParams;

pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

pub fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

pub fn default_offset() -> i64 {
    0
}

/// `?limit=&offset=` query parameters
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
pub struct PageQuery {
    /// Number of items to return
    #[serde(default = "default_limit")]
    #[param(example = 10, minimum = 1, maximum = 100)]
    pub limit: i64,
    /// Number of items to skip
    #[serde(default = "default_offset")]
    #[param(example = 0, minimum = 0)]
    pub offset: i64,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl PageQuery {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.limit < 1 || self.limit > MAX_LIMIT {
            return Err(AppError::ValidationError(format!(
                "invalid limit parameter: must be between 1 and {}",
                MAX_LIMIT
            )));
        }
        if self.offset < 0 {
            return Err(AppError::ValidationError(
                "invalid offset parameter: must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Page arithmetic for offset-based listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub has_more: bool,
}

impl PageInfo {
    /// `returned` is the number of items in the current page.
    pub fn new(query: PageQuery, returned: usize, total: i64) -> Self {
        Self {
            total,
            page: query.offset / query.limit + 1,
            limit: query.limit,
            has_more: query.offset + (returned as i64) < total,
        }
    }
}

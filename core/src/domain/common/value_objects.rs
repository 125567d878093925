use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

pub const DEFAULT_PAGE: u64 = 0;
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Largest row count SQL drivers accept for LIMIT and OFFSET (a signed bigint).
pub const MAX_ROW_BOUND: u64 = i64::MAX as u64;

/// Zero-based page window over an ordered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u64,
    pub size: u64,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageWindow {
    pub fn new(page: Option<u64>, size: Option<u64>) -> Result<Self, CoreError> {
        let size = size.unwrap_or(DEFAULT_PAGE_SIZE);
        if size == 0 {
            return Err(CoreError::UnvalidatedInput(
                "page size must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            page: page.unwrap_or(DEFAULT_PAGE),
            size,
        })
    }

    /// Rows to skip, clamped to [`MAX_ROW_BOUND`]. A clamped offset lies past
    /// any real table, so the page simply comes back empty.
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size).min(MAX_ROW_BOUND)
    }

    /// Rows to fetch, clamped to [`MAX_ROW_BOUND`].
    pub fn limit(&self) -> u64 {
        self.size.min(MAX_ROW_BOUND)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number: u64,
    pub size: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, window: PageWindow, total_elements: u64) -> Self {
        Self {
            content,
            total_elements,
            total_pages: total_elements.div_ceil(window.size),
            number: window.page,
            size: window.size,
        }
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number: self.number,
            size: self.size,
        }
    }
}

//! Shared DTO types used across multiple endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Pagination query parameters for list endpoints.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct PaginationParams {
    /// Page number (1-indexed). Defaults to 1.
    #[serde(default = "default_page")]
    pub page: u32,
    /// Items per page (max 100). Defaults to 20.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

/// Pagination metadata included in list responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaginationMeta {
    /// Current page number.
    pub page: u32,
    /// Items per page.
    pub per_page: u32,
    /// Total number of items.
    pub total: u32,
    /// Total number of pages.
    pub total_pages: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    20
}

impl PaginationParams {
    /// Clamps `page` to at least 1 and `per_page` to 1..=100.
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self {
            page: self.page.max(1),
            per_page: self.per_page.clamp(1, 100),
        }
    }

    /// Returns the zero-based item offset for this page.
    ///
    /// Computed in `u64` so that `page` values near `u32::MAX` cannot
    /// overflow the multiplication (overflow checks are on in all
    /// profiles, so a narrower computation would panic the handler).
    #[must_use]
    pub fn offset(&self) -> usize {
        let page = u64::from(self.page.max(1)) - 1;
        let offset = page.saturating_mul(u64::from(self.per_page));
        usize::try_from(offset).unwrap_or(usize::MAX)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn clamped_enforces_bounds() {
        let params = PaginationParams {
            page: 0,
            per_page: 500,
        };
        let clamped = params.clamped();
        assert_eq!(clamped.page, 1);
        assert_eq!(clamped.per_page, 100);
    }

    #[test]
    fn defaults_apply_on_empty_query() {
        let Ok(params) = serde_json::from_str::<PaginationParams>("{}") else {
            panic!("deserialization failed");
        };
        assert_eq!(params.page, 1);
        assert_eq!(params.per_page, 20);
    }

    #[test]
    fn offset_is_zero_based() {
        let params = PaginationParams {
            page: 3,
            per_page: 20,
        };
        assert_eq!(params.offset(), 40);
    }

    #[test]
    fn offset_survives_max_page() {
        let params = PaginationParams {
            page: u32::MAX,
            per_page: 100,
        }
        .clamped();
        let expected = (u64::from(u32::MAX) - 1) * 100;
        assert_eq!(params.offset() as u64, expected);
    }
}

use serde::{Deserialize, Serialize};

/// Pagination metadata. All four fields are present whenever `meta` is.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

impl Meta {
    /// Builds metadata for a page, deriving `total_pages` from `total` and `limit`.
    /// A non-positive `limit` or `total` yields zero pages.
    pub fn new(total: i64, page: i64, limit: i64) -> Self {
        let total_pages = if limit <= 0 || total <= 0 {
            0
        } else {
            total / limit + i64::from(total % limit != 0)
        };
        Self {
            total,
            page,
            limit,
            total_pages,
        }
    }

    /// Whether a page exists after the current one.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Envelope for successful responses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: None,
            message: None,
        }
    }

    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(Meta::new(95, 1, 10).total_pages, 10);
        assert_eq!(Meta::new(100, 1, 10).total_pages, 10);
        assert_eq!(Meta::new(1, 1, 10).total_pages, 1);
    }

    #[test]
    fn total_pages_at_i64_max() {
        assert_eq!(Meta::new(i64::MAX, 1, 2).total_pages, i64::MAX / 2 + 1);
        assert_eq!(Meta::new(i64::MAX, 1, i64::MAX).total_pages, 1);
        assert_eq!(Meta::new(i64::MAX, 1, 1).total_pages, i64::MAX);
    }

    #[test]
    fn total_pages_zero_for_empty_or_zero_limit() {
        assert_eq!(Meta::new(0, 1, 10).total_pages, 0);
        assert_eq!(Meta::new(50, 1, 0).total_pages, 0);
        assert_eq!(Meta::new(50, 1, -5).total_pages, 0);
    }

    #[test]
    fn has_next_stops_at_last_page() {
        assert!(Meta::new(25, 2, 10).has_next());
        assert!(!Meta::new(25, 3, 10).has_next());
    }

    #[test]
    fn builder_sets_optional_fields() {
        let resp = ApiResponse::new(7)
            .with_meta(Meta::new(1, 1, 1))
            .with_message("ok");
        assert_eq!(resp.data, 7);
        assert_eq!(resp.meta.map(|m| m.total_pages), Some(1));
        assert_eq!(resp.message.as_deref(), Some("ok"));
    }
}

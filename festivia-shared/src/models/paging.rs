use serde::{Deserialize, Serialize};

/// Query parameters for paginated history endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub limit: u32,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

/// One page of a paginated listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

impl<T> Paged<T> {
    /// Number of pages needed to cover `total` items at the page's limit.
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        if self.limit == 0 {
            return 0;
        }
        let pages = self.total.div_ceil(u64::from(self.limit));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Whether a page follows the current one.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_of(total: u64, page: u32, limit: u32) -> Paged<u8> {
        Paged {
            items: Vec::new(),
            total,
            page,
            limit,
        }
    }

    #[test]
    fn default_query_starts_at_first_page() {
        let query = PageQuery::default();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 10);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(page_of(0, 1, 10).total_pages(), 0);
        assert_eq!(page_of(10, 1, 10).total_pages(), 1);
        assert_eq!(page_of(11, 1, 10).total_pages(), 2);
    }

    #[test]
    fn zero_limit_means_no_pages() {
        assert_eq!(page_of(42, 1, 0).total_pages(), 0);
        assert!(!page_of(42, 1, 0).has_next());
    }

    #[test]
    fn has_next_stops_on_last_page() {
        assert!(page_of(25, 2, 10).has_next());
        assert!(!page_of(25, 3, 10).has_next());
    }
}

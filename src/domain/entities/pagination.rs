use serde::Serialize;

/// Pagination block returned beside every list payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: i64,
    pub pages: i64,
}

impl Pagination {
    /// `pages = ceil(total / limit)`. `limit` is validated to be >= 1 before
    /// this is reached.
    pub fn new(page: u32, limit: u32, total: i64) -> Self {
        let limit_i = i64::from(limit.max(1));
        Pagination {
            page,
            limit,
            total,
            pages: (total + limit_i - 1) / limit_i,
        }
    }

    pub fn offset(page: u32, limit: u32) -> i64 {
        (i64::from(page) - 1) * i64::from(limit)
    }
}

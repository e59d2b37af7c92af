use serde::Deserialize;

use crate::pagination::{PageRequest, PaginationError};

/// `?limit=&next=` on every paginated listing. Absent parameters mean the
/// first page at the default limit.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<i64>,
    pub next: Option<String>,
}

impl PageQuery {
    pub fn into_request(self) -> Result<PageRequest, PaginationError> {
        PageRequest::new(self.limit, self.next)
    }
}

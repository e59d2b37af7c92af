use std::cmp::Ordering;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::cursor::{self, KeysetPosition};
use super::error::PaginationError;

pub const DEFAULT_LIMIT: u32 = 25;
pub const MAX_LIMIT: u32 = 100;
pub const MIN_LIMIT: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    /// Operator selecting values that sort strictly after a bound.
    pub fn beyond_op(&self) -> &'static str {
        match self {
            SortDirection::Asc => ">",
            SortDirection::Desc => "<",
        }
    }

    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// A validated page request: a limit inside `MIN_LIMIT..=MAX_LIMIT` plus an optional opaque cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    limit: u32,
    cursor: Option<String>,
}

impl PageRequest {
    /// Absent parameters mean "first page, default limit". Limits outside the
    /// allowed range are rejected rather than clamped.
    pub fn new(limit: Option<i64>, cursor: Option<String>) -> Result<Self, PaginationError> {
        let limit = match limit {
            None => DEFAULT_LIMIT,
            Some(l) if l > i64::from(MAX_LIMIT) => {
                return Err(PaginationError::LimitTooLarge { max: MAX_LIMIT })
            }
            Some(l) if l < i64::from(MIN_LIMIT) => {
                return Err(PaginationError::LimitTooSmall { min: MIN_LIMIT })
            }
            Some(l) => l as u32,
        };

        Ok(Self {
            limit,
            cursor: cursor.filter(|c| !c.trim().is_empty()),
        })
    }

    pub fn first(limit: u32) -> Self {
        Self {
            limit: limit.clamp(MIN_LIMIT, MAX_LIMIT),
            cursor: None,
        }
    }

    pub fn after(limit: u32, cursor: impl Into<String>) -> Self {
        Self {
            cursor: Some(cursor.into()),
            ..Self::first(limit)
        }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// One extra row is fetched to learn whether another page exists.
    pub fn fetch_limit(&self) -> usize {
        self.limit as usize + 1
    }

    pub fn raw_cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// Decode the cursor into a typed keyset position. Undecodable cursors
    /// restart from the beginning.
    pub fn position<P, T>(&self) -> Option<KeysetPosition<P, T>>
    where
        P: DeserializeOwned,
        T: DeserializeOwned,
    {
        let raw = self.cursor.as_deref()?;
        let position = cursor::decode(raw);
        if position.is_none() {
            tracing::debug!("Ignoring malformed pagination cursor: {}", raw);
        }
        position
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(DEFAULT_LIMIT)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
    pub count: usize,
    pub limit: u32,
}

impl<T> Page<T> {
    pub fn empty(limit: u32) -> Self {
        Self {
            data: Vec::new(),
            next_cursor: None,
            has_more: false,
            count: 0,
            limit,
        }
    }

    /// Build a page from up to `limit + 1` rows already in keyset order.
    pub fn from_fetched<P, B>(
        mut rows: Vec<T>,
        limit: u32,
        position: impl Fn(&T) -> KeysetPosition<P, B>,
    ) -> Result<Self, PaginationError>
    where
        P: Serialize,
        B: Serialize,
    {
        let has_more = rows.len() > limit as usize;
        rows.truncate(limit as usize);

        let next_cursor = match rows.last() {
            Some(last) if has_more => Some(cursor::encode(&position(last))?),
            _ => None,
        };

        Ok(Self {
            count: rows.len(),
            data: rows,
            next_cursor,
            has_more,
            limit,
        })
    }

    /// Swap the page contents, keeping the cursor state.
    pub fn with_data<U>(self, data: Vec<U>) -> Page<U> {
        Page {
            count: data.len(),
            data,
            next_cursor: self.next_cursor,
            has_more: self.has_more,
            limit: self.limit,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            data: self.data.into_iter().map(f).collect(),
            next_cursor: self.next_cursor,
            has_more: self.has_more,
            count: self.count,
            limit: self.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_parameters_use_defaults() {
        let request = PageRequest::new(None, None).unwrap();
        assert_eq!(request.limit(), DEFAULT_LIMIT);
        assert_eq!(request.raw_cursor(), None);
    }

    #[test]
    fn test_limit_above_cap_is_rejected() {
        let err = PageRequest::new(Some(150), None).unwrap_err();
        assert_eq!(err.to_string(), "Limit cannot exceed 100");
        assert!(PageRequest::new(Some(100), None).is_ok());
    }

    #[test]
    fn test_limit_below_one_is_rejected() {
        assert!(matches!(
            PageRequest::new(Some(0), None),
            Err(PaginationError::LimitTooSmall { min: 1 })
        ));
        assert!(PageRequest::new(Some(-5), None).is_err());
    }

    #[test]
    fn test_blank_cursor_is_ignored() {
        let request = PageRequest::new(Some(10), Some("   ".to_string())).unwrap();
        assert_eq!(request.raw_cursor(), None);
    }

    #[test]
    fn test_from_fetched_with_extra_row() {
        let rows = vec![1, 2, 3];
        let page = Page::from_fetched(rows, 2, |n: &i32| KeysetPosition::new(Some(*n), *n)).unwrap();
        assert_eq!(page.data, vec![1, 2]);
        assert!(page.has_more);
        assert_eq!(page.count, 2);

        let position: KeysetPosition<i32, i32> = PageRequest::after(2, page.next_cursor.unwrap())
            .position()
            .unwrap();
        assert_eq!(position, KeysetPosition::new(Some(2), 2));
    }

    #[test]
    fn test_from_fetched_exactly_limit_rows() {
        let page = Page::from_fetched(vec![1, 2], 2, |n: &i32| KeysetPosition::new(Some(*n), *n)).unwrap();
        assert!(!page.has_more);
        assert!(page.next_cursor.is_none());
    }

    #[test]
    fn test_empty_page() {
        let page = Page::from_fetched(Vec::<i32>::new(), 25, |n: &i32| KeysetPosition::new(Some(*n), *n)).unwrap();
        assert_eq!(page.count, 0);
        assert!(!page.has_more);
        assert!(page.next_cursor.is_none());
    }
}

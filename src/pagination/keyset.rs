use std::cmp::Ordering;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::cursor::KeysetPosition;
use super::error::PaginationError;
use super::types::{Page, PageRequest, SortDirection};

/// Sort definition for one listing: a primary column (nulls always last) and a
/// strictly unique tie-break made of one or more columns sharing a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyset {
    pub primary: &'static str,
    pub primary_direction: SortDirection,
    pub tie_break: &'static [&'static str],
    pub tie_break_direction: SortDirection,
}

impl Keyset {
    pub const fn new(
        primary: &'static str,
        primary_direction: SortDirection,
        tie_break: &'static [&'static str],
        tie_break_direction: SortDirection,
    ) -> Self {
        Self {
            primary,
            primary_direction,
            tie_break,
            tie_break_direction,
        }
    }

    pub fn compare<P: Ord, T: Ord>(
        &self,
        a: &KeysetPosition<P, T>,
        b: &KeysetPosition<P, T>,
    ) -> Ordering {
        let primary = match (&a.primary, &b.primary) {
            (Some(x), Some(y)) => self.primary_direction.apply(x.cmp(y)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        primary.then_with(|| self.tie_break_direction.apply(a.tie_break.cmp(&b.tie_break)))
    }

    pub fn is_after<P: Ord, T: Ord>(
        &self,
        row: &KeysetPosition<P, T>,
        cursor: &KeysetPosition<P, T>,
    ) -> bool {
        self.compare(row, cursor) == Ordering::Greater
    }

    /// Apply the keyset algorithm to rows held in memory.
    pub fn paginate<R, P, T>(
        &self,
        rows: Vec<R>,
        request: &PageRequest,
        position: impl Fn(&R) -> KeysetPosition<P, T>,
    ) -> Result<Page<R>, PaginationError>
    where
        P: Ord + Serialize + DeserializeOwned,
        T: Ord + Serialize + DeserializeOwned,
    {
        let cursor = request.position::<P, T>();

        let mut keyed: Vec<(KeysetPosition<P, T>, R)> =
            rows.into_iter().map(|row| (position(&row), row)).collect();
        keyed.sort_by(|a, b| self.compare(&a.0, &b.0));

        let fetched: Vec<R> = keyed
            .into_iter()
            .filter(|(key, _)| cursor.as_ref().map_or(true, |c| self.is_after(key, c)))
            .take(request.fetch_limit())
            .map(|(_, row)| row)
            .collect();

        Page::from_fetched(fetched, request.limit(), position)
    }

    pub fn order_by(&self) -> String {
        let mut parts = vec![format!(
            "\"{}\" {} NULLS LAST",
            self.primary,
            self.primary_direction.to_sql()
        )];
        parts.extend(
            self.tie_break
                .iter()
                .map(|column| format!("\"{}\" {}", column, self.tie_break_direction.to_sql())),
        );
        format!("ORDER BY {}", parts.join(", "))
    }

    /// Predicate selecting rows strictly after a cursor position, with bind
    /// parameters numbered from `first_param`: the primary value (omitted when
    /// the cursor's primary is null) followed by each tie-break value.
    /// Returns the predicate and the next free parameter number.
    pub fn after_predicate(&self, primary_is_null: bool, first_param: usize) -> (String, usize) {
        let primary = format!("\"{}\"", self.primary);
        let mut next = first_param;

        let primary_param = if primary_is_null {
            None
        } else {
            next += 1;
            Some(format!("${}", next - 1))
        };

        let tie_columns = self
            .tie_break
            .iter()
            .map(|column| format!("\"{}\"", column))
            .collect::<Vec<_>>()
            .join(", ");
        let tie_params = (0..self.tie_break.len())
            .map(|i| format!("${}", next + i))
            .collect::<Vec<_>>()
            .join(", ");
        next += self.tie_break.len();

        let tie_after = format!(
            "({}) {} ({})",
            tie_columns,
            self.tie_break_direction.beyond_op(),
            tie_params
        );

        let predicate = match primary_param {
            None => format!("({} IS NULL AND {})", primary, tie_after),
            Some(param) => format!(
                "({p} {op} {param} OR {p} IS NULL OR ({p} = {param} AND {tie}))",
                p = primary,
                op = self.primary_direction.beyond_op(),
                param = param,
                tie = tie_after,
            ),
        };

        (predicate, next)
    }

    /// Complete a base `SELECT ... WHERE ...` with the cursor predicate, ordering
    /// and a `LIMIT` placeholder.
    pub fn page_sql(&self, base: &str, cursor_primary_is_null: Option<bool>, first_param: usize) -> String {
        let mut sql = base.to_string();
        let mut next = first_param;
        if let Some(primary_is_null) = cursor_primary_is_null {
            let (predicate, after) = self.after_predicate(primary_is_null, next);
            sql.push_str(" AND ");
            sql.push_str(&predicate);
            next = after;
        }
        sql.push(' ');
        sql.push_str(&self.order_by());
        sql.push_str(&format!(" LIMIT ${}", next));
        sql
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::cursor::encode;

    const ASC_BY_ID: Keyset = Keyset::new("order", SortDirection::Asc, &["id"], SortDirection::Asc);
    const DESC_NULLABLE: Keyset = Keyset::new(
        "trip_date",
        SortDirection::Desc,
        &["created_date", "id"],
        SortDirection::Desc,
    );

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        primary: Option<i32>,
        id: i32,
    }

    fn row(primary: Option<i32>, id: i32) -> Row {
        Row { primary, id }
    }

    fn position(r: &Row) -> KeysetPosition<i32, i32> {
        KeysetPosition::new(r.primary, r.id)
    }

    fn walk(keyset: &Keyset, rows: &[Row], limit: u32) -> Vec<Row> {
        let mut seen = Vec::new();
        let mut request = PageRequest::first(limit);
        loop {
            let page = keyset.paginate(rows.to_vec(), &request, position).unwrap();
            assert!(page.count <= limit as usize);
            seen.extend(page.data);
            match page.next_cursor {
                Some(cursor) if page.has_more => request = PageRequest::after(limit, cursor),
                _ => break,
            }
        }
        seen
    }

    #[test]
    fn test_nulls_sort_last_in_both_directions() {
        let asc = Keyset::new("p", SortDirection::Asc, &["id"], SortDirection::Asc);
        let desc = Keyset::new("p", SortDirection::Desc, &["id"], SortDirection::Asc);
        let null = KeysetPosition::new(None, 1);
        let value = KeysetPosition::new(Some(5), 2);
        assert_eq!(asc.compare(&value, &null), Ordering::Less);
        assert_eq!(desc.compare(&value, &null), Ordering::Less);
    }

    #[test]
    fn test_tie_break_orders_equal_primaries() {
        let a = KeysetPosition::new(Some(1), 10);
        let b = KeysetPosition::new(Some(1), 11);
        assert!(ASC_BY_ID.is_after(&b, &a));
        let desc = Keyset::new("p", SortDirection::Asc, &["id"], SortDirection::Desc);
        assert!(desc.is_after(&a, &b));
    }

    #[test]
    fn test_walk_visits_every_row_once_for_any_limit() {
        let rows = vec![
            row(Some(3), 1),
            row(None, 2),
            row(Some(1), 3),
            row(Some(3), 4),
            row(Some(2), 5),
            row(None, 6),
            row(Some(1), 7),
        ];
        let mut expected = rows.clone();
        expected.sort_by(|a, b| ASC_BY_ID.compare(&position(a), &position(b)));

        for limit in 1..=8 {
            assert_eq!(walk(&ASC_BY_ID, &rows, limit), expected, "limit {}", limit);
        }
    }

    #[test]
    fn test_malformed_cursor_restarts_from_first_page() {
        let rows = vec![row(Some(1), 1), row(Some(2), 2)];
        let request = PageRequest::after(1, "definitely-not-a-cursor");
        let page = ASC_BY_ID.paginate(rows, &request, position).unwrap();
        assert_eq!(page.data, vec![row(Some(1), 1)]);
        assert!(page.has_more);
    }

    #[test]
    fn test_cursor_after_last_row_yields_empty_page() {
        let rows = vec![row(Some(1), 1)];
        let cursor = encode(&KeysetPosition::new(Some(1), 1)).unwrap();
        let page = ASC_BY_ID
            .paginate(rows, &PageRequest::after(5, cursor), position)
            .unwrap();
        assert_eq!(page.count, 0);
        assert!(!page.has_more);
        assert!(page.next_cursor.is_none());
    }

    #[test]
    fn test_order_by_sql() {
        assert_eq!(
            DESC_NULLABLE.order_by(),
            "ORDER BY \"trip_date\" DESC NULLS LAST, \"created_date\" DESC, \"id\" DESC"
        );
    }

    #[test]
    fn test_after_predicate_with_primary_value() {
        let (sql, next) = DESC_NULLABLE.after_predicate(false, 2);
        assert_eq!(
            sql,
            "(\"trip_date\" < $2 OR \"trip_date\" IS NULL OR (\"trip_date\" = $2 AND (\"created_date\", \"id\") < ($3, $4)))"
        );
        assert_eq!(next, 5);
    }

    #[test]
    fn test_after_predicate_with_null_primary() {
        let (sql, next) = DESC_NULLABLE.after_predicate(true, 2);
        assert_eq!(
            sql,
            "(\"trip_date\" IS NULL AND (\"created_date\", \"id\") < ($2, $3))"
        );
        assert_eq!(next, 4);
    }

    #[test]
    fn test_page_sql_without_cursor() {
        let sql = ASC_BY_ID.page_sql("SELECT * FROM fish_species WHERE TRUE", None, 1);
        assert_eq!(
            sql,
            "SELECT * FROM fish_species WHERE TRUE ORDER BY \"order\" ASC NULLS LAST, \"id\" ASC LIMIT $1"
        );
    }
}

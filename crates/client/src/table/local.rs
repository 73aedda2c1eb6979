//! In-memory paging over a fully loaded entity set.
//!
//! Degraded mode for feeds that only ever deliver the whole collection. The
//! same [`TableQuery`] semantics apply as for a server-paginated endpoint.

use shared_types::{AppError, Listable, PageResult, SortDirection, TableQuery};

use super::{DetailSource, PageSource};

#[derive(Debug, Clone, Default)]
pub struct LocalPager<Row> {
    rows: Vec<Row>,
}

impl<Row: Listable + Clone> LocalPager<Row> {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Replace the whole set, e.g. when the upstream stream re-emits.
    pub fn replace(&mut self, rows: Vec<Row>) {
        self.rows = rows;
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Row> {
        self.rows.iter().find(|r| r.row_id() == id)
    }

    /// Rows matching the query's filters, in the query's sort order.
    pub fn matching(&self, query: &TableQuery) -> Vec<Row> {
        let needle = query.search_text.trim().to_lowercase();
        let mut rows: Vec<Row> = self
            .rows
            .iter()
            .filter(|r| needle.is_empty() || r.search_haystack().to_lowercase().contains(&needle))
            .filter(|r| query.status.matches(r.status()))
            .filter(|r| {
                let day = r.created_at().date_naive();
                query.start_date.is_none_or(|start| day >= start)
                    && query.end_date.is_none_or(|end| day <= end)
            })
            .cloned()
            .collect();

        let field = query.sort.field.as_str();
        rows.sort_by(|a, b| {
            let ordering = match (a.sort_value(field), b.sort_value(field)) {
                (Some(x), Some(y)) => x.compare(&y),
                _ => std::cmp::Ordering::Equal,
            };
            match query.sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
        rows
    }

    pub fn page(&self, query: &TableQuery) -> PageResult<Row> {
        PageResult::paginate(self.matching(query), query.page, query.page_size)
    }
}

impl<Row: Listable + Clone> PageSource<Row> for LocalPager<Row> {
    async fn fetch_page(&self, query: &TableQuery) -> Result<PageResult<Row>, AppError> {
        Ok(self.page(query))
    }
}

impl<Row: Listable + Clone> DetailSource<Row> for LocalPager<Row> {
    async fn fetch_detail(&self, id: &str) -> Result<Row, AppError> {
        self.find(id)
            .cloned()
            .ok_or_else(|| AppError::not_found("No data available"))
    }
}

use shared_types::{PageResult, TableQuery};

/// Serial number shown for the row at `local_index` on `page`.
pub fn serial_number(page: u32, page_size: u32, local_index: usize) -> u64 {
    let page = page.max(1) as u64;
    (page - 1) * page_size as u64 + local_index as u64 + 1
}

/// Snapshot of what is on screen right now. Replaced wholesale on every
/// committed fetch, never merged.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlot<Row> {
    pub rows: Vec<Row>,
    pub total_pages: u32,
    pub total_count: Option<u64>,
    /// Page this slot was fetched for.
    pub page: u32,
    pub page_size: u32,
}

impl<Row> PageSlot<Row> {
    pub fn from_result(result: PageResult<Row>, query: &TableQuery) -> Self {
        Self {
            rows: result.rows,
            total_pages: result.total_pages.max(1),
            total_count: result.total_count,
            page: query.page,
            page_size: query.page_size,
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn serial(&self, local_index: usize) -> u64 {
        serial_number(self.page, self.page_size, local_index)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// "Page 2 of 3 (25 total)" style label.
    pub fn summary(&self) -> String {
        match self.total_count {
            Some(total) => format!("Page {} of {} ({} total)", self.page, self.total_pages, total),
            None => format!("Page {} of {}", self.page, self.total_pages),
        }
    }
}

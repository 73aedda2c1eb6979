use chrono::NaiveDate;
use shared_types::{AppError, QueryRules, SortKey, StatusFilter, TableQuery};

/// The user's pending, not-yet-applied filter intent.
///
/// Setters never validate or fetch; [`FilterState::snapshot`] is the single
/// place where the intent is checked and turned into an applied query.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    search_text: String,
    status: StatusFilter,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    sort: SortKey,
    defaults: TableQuery,
}

impl FilterState {
    pub fn new(defaults: TableQuery) -> Self {
        let mut state = Self {
            search_text: String::new(),
            status: StatusFilter::All,
            start_date: None,
            end_date: None,
            sort: defaults.sort.clone(),
            defaults,
        };
        state.reset_all();
        state
    }

    /// Pending intent matching an already-applied query (URL restore).
    pub fn from_query(query: &TableQuery, defaults: TableQuery) -> Self {
        Self {
            search_text: query.search_text.clone(),
            status: query.status.clone(),
            start_date: query.start_date,
            end_date: query.end_date,
            sort: query.sort.clone(),
            defaults,
        }
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn set_status_filter(&mut self, status: &str) {
        self.status = StatusFilter::parse(status);
    }

    pub fn set_date_range(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        self.start_date = start;
        self.end_date = end;
    }

    pub fn set_start_date(&mut self, start: Option<NaiveDate>) {
        self.start_date = start;
    }

    pub fn set_end_date(&mut self, end: Option<NaiveDate>) {
        self.end_date = end;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// Restore every field to the screen's defaults.
    pub fn reset_all(&mut self) {
        self.search_text = self.defaults.search_text.clone();
        self.status = self.defaults.status.clone();
        self.start_date = self.defaults.start_date;
        self.end_date = self.defaults.end_date;
        self.sort = self.defaults.sort.clone();
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn status(&self) -> &StatusFilter {
        &self.status
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    pub fn sort(&self) -> &SortKey {
        &self.sort
    }

    pub fn defaults(&self) -> &TableQuery {
        &self.defaults
    }

    /// Validate the pending intent and produce the page-1 query to apply.
    pub fn snapshot(&self, rules: &QueryRules) -> Result<TableQuery, AppError> {
        let query = TableQuery {
            search_text: self.search_text.trim().to_string(),
            status: self.status.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            sort: self.sort.clone(),
            page: 1,
            page_size: self.defaults.page_size,
        };
        query.validate(rules)?;
        Ok(query)
    }
}

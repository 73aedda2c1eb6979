//! Table query state shared by every list screen.
//!
//! A [`TableQuery`] is the applied snapshot of the user's filters. It is turned
//! into request parameters for the list endpoint and, best-effort, mirrored
//! into the page URL.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::common::{normalize_pagination, DEFAULT_PAGE_SIZE};
use crate::error::AppError;

/// Sentinel status value meaning "no status filter".
pub const STATUS_ALL: &str = "ALL";

/// Wire format for dates in params and URLs.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Status dimension filter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(String),
}

impl StatusFilter {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(STATUS_ALL) {
            StatusFilter::All
        } else {
            StatusFilter::Only(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            StatusFilter::All => STATUS_ALL,
            StatusFilter::Only(s) => s,
        }
    }

    pub fn matches(&self, status: &str) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(s) => s.eq_ignore_ascii_case(status),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Field plus direction, serialized as `field:dir` (e.g. `createdAt:desc`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub field: String,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let (field, dir) = value.trim().split_once(':')?;
        if field.is_empty() {
            return None;
        }
        let direction = match dir.to_ascii_lowercase().as_str() {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            _ => return None,
        };
        Some(Self::new(field, direction))
    }

    /// Sort key after the user toggles the header for `field`: a new field
    /// starts descending, the current field flips direction.
    pub fn toggled(&self, field: &str) -> Self {
        if self.field == field {
            Self::new(field, self.direction.flipped())
        } else {
            Self::new(field, SortDirection::Desc)
        }
    }
}

impl Default for SortKey {
    fn default() -> Self {
        Self::new("createdAt", SortDirection::Desc)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir = match self.direction {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        write!(f, "{}:{}", self.field, dir)
    }
}

/// The allowed values a list endpoint accepts for its status and sort params.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryRules {
    pub statuses: &'static [&'static str],
    pub sort_keys: &'static [&'static str],
}

impl QueryRules {
    pub fn allows_status(&self, status: &StatusFilter) -> bool {
        match status {
            StatusFilter::All => true,
            StatusFilter::Only(s) => self.statuses.iter().any(|a| a.eq_ignore_ascii_case(s)),
        }
    }

    pub fn allows_sort(&self, sort: &SortKey) -> bool {
        let rendered = sort.to_string();
        self.sort_keys.iter().any(|k| *k == rendered)
    }

    /// Whether a header for `field` may drive the sort key.
    pub fn sortable_field(&self, field: &str) -> bool {
        self.sort_keys
            .iter()
            .filter_map(|k| k.split_once(':'))
            .any(|(f, _)| f == field)
    }
}

/// Applied filter snapshot for one table instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableQuery {
    pub search_text: String,
    pub status: StatusFilter,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub sort: SortKey,
    pub page: u32,
    pub page_size: u32,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self::initial(DEFAULT_PAGE_SIZE, SortKey::default())
    }
}

impl TableQuery {
    /// The unfiltered page-1 state a screen mounts with.
    pub fn initial(page_size: u32, sort: SortKey) -> Self {
        let (_, page_size) = normalize_pagination(None, Some(page_size));
        Self {
            search_text: String::new(),
            status: StatusFilter::All,
            start_date: None,
            end_date: None,
            sort,
            page: 1,
            page_size,
        }
    }

    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// Local checks run before any request is issued.
    pub fn validate(&self, rules: &QueryRules) -> Result<(), AppError> {
        let mut field_errors = HashMap::new();

        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                field_errors.insert(
                    "endDate".to_string(),
                    "End date must be on or after the start date".to_string(),
                );
            }
        }
        if !rules.allows_status(&self.status) {
            field_errors.insert(
                "status".to_string(),
                format!("Unknown status `{}`", self.status.as_str()),
            );
        }
        if !rules.allows_sort(&self.sort) {
            field_errors.insert(
                "sortby".to_string(),
                format!("Unsupported sort `{}`", self.sort),
            );
        }
        if self.page == 0 {
            field_errors.insert("page".to_string(), "Page numbers start at 1".to_string());
        }

        if field_errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(
                "Please fix the highlighted filters",
                field_errors,
            ))
        }
    }

    /// Request parameters for the list endpoint.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        let search = self.search_text.trim();
        if !search.is_empty() {
            params.push(("search", search.to_string()));
        }
        if let StatusFilter::Only(s) = &self.status {
            params.push(("status", s.clone()));
        }
        if let Some(start) = self.start_date {
            params.push(("startDate", start.format(DATE_FORMAT).to_string()));
        }
        if let Some(end) = self.end_date {
            params.push(("endDate", end.format(DATE_FORMAT).to_string()));
        }
        params.push(("sortby", self.sort.to_string()));
        params.push(("page", self.page.to_string()));
        params.push(("limit", self.page_size.to_string()));
        params
    }

    /// URL query string holding only the values that differ from `defaults`.
    pub fn to_query_string(&self, defaults: &TableQuery) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        let search = self.search_text.trim();
        if !search.is_empty() {
            pairs.push(("search", search.to_string()));
        }
        if self.status != defaults.status {
            pairs.push(("status", self.status.as_str().to_string()));
        }
        if let Some(start) = self.start_date {
            pairs.push(("startDate", start.format(DATE_FORMAT).to_string()));
        }
        if let Some(end) = self.end_date {
            pairs.push(("endDate", end.format(DATE_FORMAT).to_string()));
        }
        if self.sort != defaults.sort {
            pairs.push(("sortby", self.sort.to_string()));
        }
        if self.page != 1 {
            pairs.push(("page", self.page.to_string()));
        }

        pairs
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(&v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Rebuild a query from a URL query string. Anything missing, malformed,
    /// or outside `rules` keeps its default; an inverted date range is dropped.
    pub fn from_query_string(qs: &str, defaults: &TableQuery, rules: &QueryRules) -> TableQuery {
        let mut query = defaults.clone();
        let qs = qs.trim_start_matches('?');

        for pair in qs.split('&').filter(|p| !p.is_empty()) {
            let Some((key, raw)) = pair.split_once('=') else {
                continue;
            };
            let raw = raw.replace('+', " ");
            let Ok(value) = urlencoding::decode(&raw) else {
                continue;
            };
            let value = value.into_owned();
            match key {
                "search" => query.search_text = value,
                "status" => {
                    let status = StatusFilter::parse(&value);
                    if rules.allows_status(&status) {
                        query.status = status;
                    }
                }
                "startDate" => query.start_date = parse_date(&value),
                "endDate" => query.end_date = parse_date(&value),
                "sortby" => {
                    if let Some(sort) = SortKey::parse(&value).filter(|s| rules.allows_sort(s)) {
                        query.sort = sort;
                    }
                }
                "page" => {
                    if let Ok(page) = value.parse::<u32>() {
                        query.page = page.max(1);
                    }
                }
                _ => {}
            }
        }

        if let (Some(start), Some(end)) = (query.start_date, query.end_date) {
            if start > end {
                query.start_date = None;
                query.end_date = None;
            }
        }
        query
    }
}

/// Parse a `YYYY-MM-DD` date; blank or malformed input yields `None`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

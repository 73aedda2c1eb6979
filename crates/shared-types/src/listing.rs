use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// A comparable value extracted from a row for in-memory sorting.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Text(String),
    Number(f64),
    Time(DateTime<Utc>),
}

impl SortValue {
    /// Total order used by the in-memory pager. Mismatched variants compare
    /// equal so a malformed row never panics a sort.
    pub fn compare(&self, other: &SortValue) -> Ordering {
        match (self, other) {
            (SortValue::Text(a), SortValue::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (SortValue::Number(a), SortValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (SortValue::Time(a), SortValue::Time(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// Row types that can be filtered, sorted and paged in memory.
pub trait Listable {
    fn row_id(&self) -> &str;

    /// Value compared against the status filter.
    fn status(&self) -> &str;

    fn created_at(&self) -> DateTime<Utc>;

    /// Text the free-text search is matched against (case-insensitive).
    fn search_haystack(&self) -> String;

    fn sort_value(&self, field: &str) -> Option<SortValue> {
        match field {
            "createdAt" => Some(SortValue::Time(self.created_at())),
            _ => None,
        }
    }
}

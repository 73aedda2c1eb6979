//! Declarative column descriptors and the row renderer.

use chrono::{DateTime, NaiveDate, Utc};
use shared_types::{QueryRules, SortDirection, SortKey};

use super::page::PageSlot;

/// Display format for calendar dates.
pub const DAY_FORMAT: &str = "%b %d, %Y";

/// Display format for timestamps (UTC).
pub const TIMESTAMP_FORMAT: &str = "%b %d, %Y %H:%M";

/// A cell's value before it is turned into markup.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Day(NaiveDate),
    Timestamp(DateTime<Utc>),
    Money(f64),
    Percent(f64),
    Rating(f64),
    /// Rendered as a badge; the string is the raw status code.
    Status(String),
    Empty,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value)
        }
    }

    pub fn optional_text(value: Option<&str>) -> Self {
        value.map(CellValue::text).unwrap_or(CellValue::Empty)
    }

    pub fn display(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Day(d) => d.format(DAY_FORMAT).to_string(),
            CellValue::Timestamp(t) => t.format(TIMESTAMP_FORMAT).to_string(),
            CellValue::Money(v) => format_money(*v),
            CellValue::Percent(v) => format!("{}%", trim_float(*v)),
            CellValue::Rating(v) => format!("{:.1}", v),
            CellValue::Status(s) => humanize_status(s),
            CellValue::Empty => "--".to_string(),
        }
    }
}

/// `1234.5` -> `1,234.50`.
pub fn format_money(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::new();
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{:02}", cents % 100)
}

fn trim_float(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

/// `IN_PROGRESS` -> `In progress`.
pub fn humanize_status(status: &str) -> String {
    let lower = status.replace('_', " ").to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// One column of a table: how to title it, how to read a row, and which
/// server sort field its header drives (if any).
pub struct Column<Row> {
    pub id: &'static str,
    pub header: &'static str,
    pub accessor: fn(&Row) -> CellValue,
    pub sort_field: Option<&'static str>,
}

impl<Row> Clone for Column<Row> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            header: self.header,
            accessor: self.accessor,
            sort_field: self.sort_field,
        }
    }
}

impl<Row> Column<Row> {
    pub fn new(id: &'static str, header: &'static str, accessor: fn(&Row) -> CellValue) -> Self {
        Self {
            id,
            header,
            accessor,
            sort_field: None,
        }
    }

    /// Let the header drive the server sort on `field`.
    pub fn sorted_by(mut self, field: &'static str) -> Self {
        self.sort_field = Some(field);
        self
    }
}

/// Header as presented: label plus the sort affordance state.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub id: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub sorted: Option<SortDirection>,
}

/// A row mapped to display cells.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow {
    pub id: String,
    pub serial: u64,
    pub cells: Vec<CellValue>,
}

/// Header cells for `columns`. A header is only sortable when the endpoint
/// accepts its field as a sort key.
pub fn header_cells<Row>(columns: &[Column<Row>], sort: &SortKey, rules: &QueryRules) -> Vec<HeaderCell> {
    columns
        .iter()
        .map(|col| {
            let sortable = col
                .sort_field
                .map(|f| rules.sortable_field(f))
                .unwrap_or(false);
            let sorted = match col.sort_field {
                Some(f) if sortable && f == sort.field => Some(sort.direction),
                _ => None,
            };
            HeaderCell {
                id: col.id,
                label: col.header,
                sortable,
                sorted,
            }
        })
        .collect()
}

/// Map every row of the page to cells, numbering rows across pages.
pub fn render_rows<Row>(
    page: &PageSlot<Row>,
    columns: &[Column<Row>],
    row_id: fn(&Row) -> &str,
) -> Vec<RenderedRow> {
    page.rows
        .iter()
        .enumerate()
        .map(|(index, row)| RenderedRow {
            id: row_id(row).to_string(),
            serial: page.serial(index),
            cells: columns.iter().map(|c| (c.accessor)(row)).collect(),
        })
        .collect()
}

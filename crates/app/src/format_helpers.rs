//! Shared formatting and form-parsing utilities for the UI layer.

use chrono::{DateTime, NaiveDate, Utc};
use client::CellValue;
use shared_types::{parse_date, AppError, DATE_FORMAT};

/// "Jun 01, 2024 09:30" style timestamp.
pub fn timestamp(at: DateTime<Utc>) -> String {
    CellValue::Timestamp(at).display()
}

pub fn optional_timestamp(at: Option<DateTime<Utc>>) -> String {
    at.map(timestamp).unwrap_or_default()
}

pub fn day(date: NaiveDate) -> String {
    CellValue::Day(date).display()
}

pub fn money(value: f64) -> String {
    client::format_money(value)
}

pub fn optional_money(value: Option<f64>) -> String {
    value.map(money).unwrap_or_default()
}

/// "12.4 km"; blank when unknown.
pub fn distance_km(km: Option<f64>) -> String {
    km.map(|km| format!("{km:.1} km")).unwrap_or_default()
}

/// "1 h 05 min" / "25 min"; blank when unknown.
pub fn duration_minutes(minutes: Option<u32>) -> String {
    match minutes {
        None => String::new(),
        Some(m) if m >= 60 => format!("{} h {:02} min", m / 60, m % 60),
        Some(m) => format!("{m} min"),
    }
}

/// Value for an `<input type="date">`.
pub fn date_input(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Parse a numeric form field, reporting failures against `field`.
pub fn parse_amount(field: &str, raw: &str) -> Result<f64, AppError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AppError::invalid_field(field, "Enter a number"))
}

/// Like [`parse_amount`], but blank input means "not set".
pub fn parse_optional_amount(field: &str, raw: &str) -> Result<Option<f64>, AppError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_amount(field, raw).map(Some)
}

pub fn parse_count(field: &str, raw: &str) -> Result<u32, AppError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| AppError::invalid_field(field, "Enter a whole number"))
}

pub fn parse_required_date(field: &str, raw: &str) -> Result<NaiveDate, AppError> {
    parse_date(raw).ok_or_else(|| AppError::invalid_field(field, "Pick a date"))
}

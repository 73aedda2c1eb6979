//! Ride categories, promotional offers and fare rules.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

#[cfg(feature = "validation")]
use crate::error::AppError;
use crate::listing::{Listable, SortValue};

pub const CATEGORY_STATUSES: &[&str] = &["ACTIVE", "INACTIVE"];

pub const CATEGORY_SORT_KEYS: &[&str] = &["createdAt:desc", "createdAt:asc", "name:asc"];

pub const OFFER_STATUSES: &[&str] = &["ACTIVE", "EXPIRED", "SCHEDULED"];

pub const OFFER_SORT_KEYS: &[&str] = &[
    "createdAt:desc",
    "createdAt:asc",
    "validUntil:asc",
    "discountPercent:desc",
];

/// Vehicle category (e.g. Mini, Sedan, Bike).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub base_fare: f64,
    pub seats: u32,
    #[serde(default)]
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn status_label(&self) -> &'static str {
        if self.active {
            "ACTIVE"
        } else {
            "INACTIVE"
        }
    }
}

impl Listable for Category {
    fn row_id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> &str {
        self.status_label()
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn search_haystack(&self) -> String {
        self.name.clone()
    }

    fn sort_value(&self, field: &str) -> Option<SortValue> {
        match field {
            "createdAt" => Some(SortValue::Time(self.created_at)),
            "name" => Some(SortValue::Text(self.name.clone())),
            _ => None,
        }
    }
}

/// Promotional offer row. `status` is derived by the backend from the
/// validity window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(alias = "_id")]
    pub id: String,
    pub code: String,
    pub title: String,
    pub discount_percent: f64,
    #[serde(default)]
    pub max_discount: Option<f64>,
    pub valid_from: NaiveDate,
    pub valid_until: NaiveDate,
    pub status: String,
    #[serde(default)]
    pub redemptions: u32,
    pub created_at: DateTime<Utc>,
}

impl Listable for Offer {
    fn row_id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> &str {
        &self.status
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn search_haystack(&self) -> String {
        format!("{} {}", self.code, self.title)
    }

    fn sort_value(&self, field: &str) -> Option<SortValue> {
        match field {
            "createdAt" => Some(SortValue::Time(self.created_at)),
            "discountPercent" => Some(SortValue::Number(self.discount_percent)),
            "validUntil" => Some(SortValue::Text(self.valid_until.to_string())),
            _ => None,
        }
    }
}

/// Body for `POST /admin/categories`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct CreateCategoryForm {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 2, max = 40, message = "Name must be 2 to 40 characters"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 0.0, message = "Base fare must be non-negative"))
    )]
    pub base_fare: f64,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1, max = 12, message = "Seats must be between 1 and 12"))
    )]
    pub seats: u32,
}

/// Body for `POST /admin/offers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct CreateOfferForm {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 3, max = 20, message = "Code must be 3 to 20 characters"))
    )]
    pub code: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Title is required"))
    )]
    pub title: String,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1.0, max = 100.0, message = "Discount must be 1 to 100 percent"))
    )]
    pub discount_percent: f64,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 0.0, message = "Max discount must be non-negative"))
    )]
    pub max_discount: Option<f64>,
    pub valid_from: NaiveDate,
    pub valid_until: NaiveDate,
}

#[cfg(feature = "validation")]
impl CreateOfferForm {
    /// Field checks plus the validity window, which must not be inverted.
    pub fn check(&self) -> Result<(), AppError> {
        self.validate()?;
        if self.valid_from > self.valid_until {
            return Err(AppError::invalid_field(
                "validUntil",
                "Offer must not end before it starts",
            ));
        }
        Ok(())
    }
}

/// Per-category fare configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareRule {
    pub category_id: String,
    pub category_name: String,
    pub base_fare: f64,
    pub per_km: f64,
    pub per_minute: f64,
    #[serde(default = "default_surge_cap")]
    pub surge_cap: f64,
}

fn default_surge_cap() -> f64 {
    1.0
}

/// Body for `POST /admin/pricing/:categoryId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct FareRuleForm {
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 0.0, message = "Base fare must be non-negative"))
    )]
    pub base_fare: f64,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 0.0, message = "Per-km rate must be non-negative"))
    )]
    pub per_km: f64,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 0.0, message = "Per-minute rate must be non-negative"))
    )]
    pub per_minute: f64,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1.0, max = 5.0, message = "Surge cap must be between 1x and 5x"))
    )]
    pub surge_cap: f64,
}

impl From<&FareRule> for FareRuleForm {
    fn from(rule: &FareRule) -> Self {
        Self {
            base_fare: rule.base_fare,
            per_km: rule.per_km,
            per_minute: rule.per_minute,
            surge_cap: rule.surge_cap,
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::listing::{Listable, SortValue};
use crate::user::full_name;

pub const DRIVER_STATUSES: &[&str] = &["PENDING", "VERIFIED", "REJECTED"];

pub const DRIVER_SORT_KEYS: &[&str] = &[
    "createdAt:desc",
    "createdAt:asc",
    "rating:desc",
    "rating:asc",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    #[serde(alias = "_id")]
    pub id: String,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub phone: String,
    #[serde(default)]
    pub vehicle_number: Option<String>,
    pub verification_status: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub online: bool,
    pub created_at: DateTime<Utc>,
}

impl Driver {
    pub fn full_name(&self) -> String {
        full_name(&self.first_name, &self.last_name)
    }
}

impl Listable for Driver {
    fn row_id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> &str {
        &self.verification_status
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn search_haystack(&self) -> String {
        format!(
            "{} {} {}",
            self.full_name(),
            self.phone,
            self.vehicle_number.as_deref().unwrap_or_default()
        )
    }

    fn sort_value(&self, field: &str) -> Option<SortValue> {
        match field {
            "createdAt" => Some(SortValue::Time(self.created_at)),
            "rating" => Some(SortValue::Number(self.rating.unwrap_or(0.0))),
            _ => None,
        }
    }
}

/// Uploaded document as listed on the driver detail card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverDocument {
    pub kind: String,
    pub url: String,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverDetail {
    #[serde(flatten)]
    pub driver: Driver,
    #[serde(default)]
    pub vehicle_model: Option<String>,
    #[serde(default)]
    pub completed_rides: u32,
    #[serde(default)]
    pub documents: Vec<DriverDocument>,
}

/// Body for `POST /admin/drivers/:id/verify`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyDriverRequest {
    pub status: String,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::listing::{Listable, SortValue};

pub const RIDE_STATUSES: &[&str] = &["REQUESTED", "ACCEPTED", "ONGOING", "COMPLETED", "CANCELLED"];

pub const RIDE_SORT_KEYS: &[&str] = &[
    "createdAt:desc",
    "createdAt:asc",
    "fare:desc",
    "fare:asc",
];

/// Ride row as listed by `GET /admin/rides`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ride {
    #[serde(alias = "_id")]
    pub id: String,
    pub rider_name: String,
    #[serde(default)]
    pub driver_name: Option<String>,
    pub pickup: String,
    pub dropoff: String,
    pub fare: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Listable for Ride {
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
        format!(
            "{} {} {} {} {}",
            self.id,
            self.rider_name,
            self.driver_name.as_deref().unwrap_or_default(),
            self.pickup,
            self.dropoff
        )
    }

    fn sort_value(&self, field: &str) -> Option<SortValue> {
        match field {
            "createdAt" => Some(SortValue::Time(self.created_at)),
            "fare" => Some(SortValue::Number(self.fare)),
            _ => None,
        }
    }
}

/// One status transition in a ride's timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RideEvent {
    pub status: String,
    pub at: DateTime<Utc>,
}

/// Full ride record from `GET /admin/rides/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RideDetail {
    #[serde(flatten)]
    pub ride: Ride,
    #[serde(default)]
    pub rider_phone: Option<String>,
    #[serde(default)]
    pub driver_phone: Option<String>,
    #[serde(default)]
    pub vehicle_number: Option<String>,
    #[serde(default)]
    pub distance_km: Option<f64>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub timeline: Vec<RideEvent>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::listing::{Listable, SortValue};

pub const USER_STATUSES: &[&str] = &["ACTIVE", "BLOCKED"];

pub const USER_SORT_KEYS: &[&str] = &[
    "createdAt:desc",
    "createdAt:asc",
    "name:asc",
    "name:desc",
    "totalRides:desc",
];

/// Rider account row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub blocked: bool,
    #[serde(default)]
    pub total_rides: u32,
    /// Churn probability in `0.0..=1.0` as scored by the backend.
    #[serde(default)]
    pub churn_risk: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn full_name(&self) -> String {
        full_name(&self.first_name, &self.last_name)
    }

    pub fn status_label(&self) -> &'static str {
        if self.blocked {
            "BLOCKED"
        } else {
            "ACTIVE"
        }
    }
}

/// `first last`, tolerating a blank last name.
pub fn full_name(first: &str, last: &str) -> String {
    format!("{} {}", first.trim(), last.trim()).trim().to_string()
}

impl Listable for User {
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
        format!(
            "{} {} {}",
            self.full_name(),
            self.email,
            self.phone.as_deref().unwrap_or_default()
        )
    }

    fn sort_value(&self, field: &str) -> Option<SortValue> {
        match field {
            "createdAt" => Some(SortValue::Time(self.created_at)),
            "name" => Some(SortValue::Text(self.full_name())),
            "totalRides" => Some(SortValue::Number(self.total_rides as f64)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetail {
    #[serde(flatten)]
    pub user: User,
    #[serde(default)]
    pub wallet_balance: Option<f64>,
    #[serde(default)]
    pub last_ride_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub saved_places: Vec<String>,
}

/// Body for `POST /admin/users/:id/block`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockUserRequest {
    pub blocked: bool,
}

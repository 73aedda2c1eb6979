use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::listing::{Listable, SortValue};

pub const AGENT_STATUSES: &[&str] = &["ACTIVE", "INACTIVE"];

pub const AGENT_SORT_KEYS: &[&str] = &[
    "createdAt:desc",
    "createdAt:asc",
    "openTickets:desc",
    "openTickets:asc",
];

/// Support agent who can be assigned issues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub open_tickets: u32,
    pub created_at: DateTime<Utc>,
}

impl Agent {
    pub fn status_label(&self) -> &'static str {
        if self.active {
            "ACTIVE"
        } else {
            "INACTIVE"
        }
    }
}

impl Listable for Agent {
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
        format!("{} {}", self.name, self.email)
    }

    fn sort_value(&self, field: &str) -> Option<SortValue> {
        match field {
            "createdAt" => Some(SortValue::Time(self.created_at)),
            "openTickets" => Some(SortValue::Number(self.open_tickets as f64)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentDetail {
    #[serde(flatten)]
    pub agent: Agent,
    #[serde(default)]
    pub resolved_tickets: u32,
    #[serde(default)]
    pub recent_ticket_numbers: Vec<String>,
}

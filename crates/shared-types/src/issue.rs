use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::listing::{Listable, SortValue};

pub const ISSUE_STATUSES: &[&str] = &["OPEN", "IN_PROGRESS", "RESOLVED", "CLOSED"];

pub const ISSUE_PRIORITIES: &[&str] = &["LOW", "MEDIUM", "HIGH", "URGENT"];

pub const ISSUE_SORT_KEYS: &[&str] = &[
    "createdAt:desc",
    "createdAt:asc",
    "priority:desc",
    "priority:asc",
];

/// Support ticket row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    #[serde(alias = "_id")]
    pub id: String,
    pub ticket_number: String,
    pub subject: String,
    pub raised_by: String,
    #[serde(default)]
    pub category: Option<String>,
    pub status: String,
    pub priority: String,
    #[serde(default)]
    pub assigned_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Rank used when sorting by priority; unknown priorities sort lowest.
pub fn priority_rank(priority: &str) -> f64 {
    ISSUE_PRIORITIES
        .iter()
        .position(|p| p.eq_ignore_ascii_case(priority))
        .map(|i| i as f64)
        .unwrap_or(-1.0)
}

impl Listable for Issue {
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
            "{} {} {} {}",
            self.ticket_number,
            self.subject,
            self.raised_by,
            self.assigned_agent.as_deref().unwrap_or_default()
        )
    }

    fn sort_value(&self, field: &str) -> Option<SortValue> {
        match field {
            "createdAt" => Some(SortValue::Time(self.created_at)),
            "priority" => Some(SortValue::Number(priority_rank(&self.priority))),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueComment {
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Full ticket with conversation, from `GET /admin/issues/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueDetail {
    #[serde(flatten)]
    pub issue: Issue,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ride_id: Option<String>,
    #[serde(default)]
    pub comments: Vec<IssueComment>,
}

/// Body for `POST /admin/issues/:id/assign`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignIssueRequest {
    pub agent_id: String,
}

/// Body for `POST /admin/issues/:id/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateIssueStatusRequest {
    pub status: String,
}

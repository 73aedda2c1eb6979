use serde::{Deserialize, Serialize};

/// Aggregated operating metrics shown on the live dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveMetrics {
    #[serde(default)]
    pub online_drivers: u32,
    #[serde(default)]
    pub active_rides: u32,
    #[serde(default)]
    pub completed_today: u32,
    #[serde(default)]
    pub cancelled_today: u32,
    #[serde(default)]
    pub open_issues: u32,
    #[serde(default)]
    pub revenue_today: f64,
}

/// A partial metrics event from the live feed. Absent fields leave the
/// displayed value untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online_drivers: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_rides: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_today: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancelled_today: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_issues: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue_today: Option<f64>,
}

impl LiveMetrics {
    /// Last-write-wins merge of every field present in `update`.
    pub fn apply(&mut self, update: &MetricsUpdate) {
        if let Some(v) = update.online_drivers {
            self.online_drivers = v;
        }
        if let Some(v) = update.active_rides {
            self.active_rides = v;
        }
        if let Some(v) = update.completed_today {
            self.completed_today = v;
        }
        if let Some(v) = update.cancelled_today {
            self.cancelled_today = v;
        }
        if let Some(v) = update.open_issues {
            self.open_issues = v;
        }
        if let Some(v) = update.revenue_today {
            self.revenue_today = v;
        }
    }
}

/// Totals from `GET /admin/metrics` together with the live-feed cursor they
/// already include. Feed events before that cursor are older than the totals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsSnapshot {
    pub metrics: LiveMetrics,
    pub cursor: u64,
}

/// One long-poll response from `GET /admin/metrics/live`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsBatch {
    pub cursor: u64,
    #[serde(default)]
    pub events: Vec<MetricsUpdate>,
}

//! Live dashboard counters.
//!
//! The board starts from a REST snapshot and then folds in long-poll batches.
//! Each event only overwrites the fields it carries (last write wins). Once
//! detached, further batches are ignored.

use shared_types::{AppError, LiveMetrics, MetricsBatch, MetricsSnapshot, MetricsUpdate};

use crate::api::ApiClient;

#[derive(Debug, Clone, PartialEq)]
pub struct LiveBoard {
    metrics: LiveMetrics,
    cursor: u64,
    attached: bool,
}

impl LiveBoard {
    /// Board seeded from `snapshot`; the feed resumes at the snapshot's cursor.
    pub fn from_snapshot(snapshot: MetricsSnapshot) -> Self {
        Self {
            metrics: snapshot.metrics,
            cursor: snapshot.cursor,
            attached: true,
        }
    }

    pub fn metrics(&self) -> &LiveMetrics {
        &self.metrics
    }

    /// Cursor to resume the feed from.
    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn apply_update(&mut self, update: &MetricsUpdate) {
        if self.attached {
            self.metrics.apply(update);
        }
    }

    /// Fold a batch in arrival order. Returns how many events were applied.
    pub fn apply_batch(&mut self, batch: &MetricsBatch) -> usize {
        if !self.attached {
            return 0;
        }
        if batch.cursor < self.cursor {
            tracing::debug!(cursor = batch.cursor, current = self.cursor, "ignoring rewound batch");
            return 0;
        }
        for event in &batch.events {
            self.metrics.apply(event);
        }
        self.cursor = batch.cursor;
        batch.events.len()
    }

    /// Stop accepting events, e.g. when the dashboard unmounts.
    pub fn detach(&mut self) {
        self.attached = false;
    }
}

/// Poll the live feed from `cursor`, handing each batch to `sink` until it
/// returns `false`. A failed poll ends the feed; there is no retry.
pub async fn follow_feed<F>(api: &ApiClient, mut cursor: u64, mut sink: F) -> Result<(), AppError>
where
    F: FnMut(MetricsBatch) -> bool,
{
    loop {
        let batch = api.poll_metrics(cursor).await?;
        cursor = cursor.max(batch.cursor);
        if !sink(batch) {
            tracing::debug!(cursor, "live feed detached");
            return Ok(());
        }
    }
}

//! Login, metrics, and the write endpoints behind dialogs and forms.

use serde_json::Value;
use shared_types::*;
use validator::Validate;

use super::{ApiClient, Expect};

/// Driver verification outcomes an admin may record.
pub const DRIVER_DECISIONS: &[&str] = &["VERIFIED", "REJECTED"];

impl ApiClient {
    /// Exchange credentials for a session. The caller stores the session in
    /// its auth context; nothing is persisted here.
    pub async fn login(&self, form: &LoginForm) -> Result<Session, AppError> {
        form.validate()?;
        let body = self.post("/admin/login", form).await?;
        if !body.get("success").and_then(Value::as_bool).unwrap_or(false) {
            let message = body.get("message").and_then(Value::as_str).map(str::to_string);
            return Err(AppError::server_or_generic(message));
        }
        let session: Session = serde_json::from_value(body)
            .map_err(|e| AppError::network(format!("Unexpected login response: {e}")))?;
        tracing::info!(username = %session.username, role = %session.role, "signed in");
        Ok(session)
    }

    pub async fn metrics_snapshot(&self) -> Result<MetricsSnapshot, AppError> {
        let body = self.get("/admin/metrics", Expect::Endpoint).await?;
        let cursor = body.get("cursor").and_then(Value::as_u64).unwrap_or(0);
        let metrics = parse_detail_envelope(body)?;
        Ok(MetricsSnapshot { metrics, cursor })
    }

    /// Long-poll for metric events after `cursor`. Returns an empty batch
    /// with the same cursor when the server times the poll out.
    pub async fn poll_metrics(&self, cursor: u64) -> Result<MetricsBatch, AppError> {
        let path = format!("/admin/metrics/live?cursor={cursor}");
        let body = self.get(&path, Expect::Endpoint).await?;
        if !body.get("success").and_then(Value::as_bool).unwrap_or(false) {
            let message = body.get("message").and_then(Value::as_str).map(str::to_string);
            return Err(AppError::server_or_generic(message));
        }
        serde_json::from_value(body)
            .map_err(|e| AppError::network(format!("Unexpected metrics batch: {e}")))
    }

    pub async fn assign_issue(&self, issue_id: &str, agent_id: &str) -> Result<Option<String>, AppError> {
        if agent_id.trim().is_empty() {
            return Err(AppError::invalid_field("agentId", "Choose an agent"));
        }
        let path = format!("/admin/issues/{}/assign", urlencoding::encode(issue_id));
        let request = AssignIssueRequest {
            agent_id: agent_id.to_string(),
        };
        let ack = parse_ack_envelope(self.post(&path, &request).await?)?;
        tracing::info!(issue_id, agent_id, "issue assigned");
        Ok(ack)
    }

    pub async fn update_issue_status(&self, issue_id: &str, status: &str) -> Result<Option<String>, AppError> {
        if !ISSUE_STATUSES.contains(&status) {
            return Err(AppError::invalid_field("status", format!("Unknown status `{status}`")));
        }
        let path = format!("/admin/issues/{}/status", urlencoding::encode(issue_id));
        let request = UpdateIssueStatusRequest {
            status: status.to_string(),
        };
        parse_ack_envelope(self.post(&path, &request).await?)
    }

    pub async fn block_user(&self, user_id: &str, blocked: bool) -> Result<Option<String>, AppError> {
        let path = format!("/admin/users/{}/block", urlencoding::encode(user_id));
        let ack = parse_ack_envelope(self.post(&path, &BlockUserRequest { blocked }).await?)?;
        tracing::info!(user_id, blocked, "user block state changed");
        Ok(ack)
    }

    pub async fn verify_driver(&self, driver_id: &str, status: &str) -> Result<Option<String>, AppError> {
        if !DRIVER_DECISIONS.contains(&status) {
            return Err(AppError::invalid_field(
                "status",
                "Drivers can only be verified or rejected",
            ));
        }
        let path = format!("/admin/drivers/{}/verify", urlencoding::encode(driver_id));
        let request = VerifyDriverRequest {
            status: status.to_string(),
        };
        parse_ack_envelope(self.post(&path, &request).await?)
    }

    pub async fn create_category(&self, form: &CreateCategoryForm) -> Result<Option<String>, AppError> {
        form.validate()?;
        parse_ack_envelope(self.post("/admin/categories", form).await?)
    }

    pub async fn create_offer(&self, form: &CreateOfferForm) -> Result<Option<String>, AppError> {
        form.check()?;
        parse_ack_envelope(self.post("/admin/offers", form).await?)
    }

    pub async fn list_pricing(&self) -> Result<Vec<FareRule>, AppError> {
        let body = self.get("/admin/pricing", Expect::Endpoint).await?;
        parse_detail_envelope(body)
    }

    pub async fn update_fare_rule(&self, category_id: &str, form: &FareRuleForm) -> Result<Option<String>, AppError> {
        form.validate()?;
        let path = format!("/admin/pricing/{}", urlencoding::encode(category_id));
        parse_ack_envelope(self.post(&path, form).await?)
    }
}

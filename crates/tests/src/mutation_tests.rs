use crate::common::*;
use chrono::NaiveDate;
use client::Issues;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shared_types::{AppErrorKind, CreateCategoryForm, CreateOfferForm, FareRuleForm};

#[tokio::test]
async fn test_assigned_agent_shows_after_reload() {
    let backend = test_backend().await;
    let api = backend.api();
    let (mut table, source) = mount::<Issues>(&api, "").await;

    let ack = api.assign_issue("i12", "agent-7").await.unwrap();
    assert_eq!(ack.as_deref(), Some("Issue assigned"));
    assert_eq!(backend.last_request().body, Some(json!({ "agentId": "agent-7" })));

    let ticket = table.reload();
    settle_page(&mut table, &source, ticket).await;
    let row = &table.page().unwrap().rows[0];
    assert_eq!(row.id, "i12");
    assert_eq!(row.assigned_agent.as_deref(), Some("agent-7"));
    assert_eq!(row.status, "IN_PROGRESS");
}

#[tokio::test]
async fn test_assigning_unknown_issue_surfaces_server_message() {
    let backend = test_backend().await;
    let err = backend.api().assign_issue("i404", "agent-7").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ServerError);
    assert_eq!(err.message, "Issue not found");
}

#[tokio::test]
async fn test_assign_without_agent_is_rejected_locally() {
    let backend = test_backend().await;
    let err = backend.api().assign_issue("i01", "  ").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field("agentId").is_some());
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_issue_status_update_body() {
    let backend = test_backend().await;
    backend.api().update_issue_status("i01", "RESOLVED").await.unwrap();

    let request = backend.last_request();
    assert_eq!(request.path, "/admin/issues/i01/status");
    assert_eq!(request.body, Some(json!({ "status": "RESOLVED" })));
}

#[tokio::test]
async fn test_block_user_body() {
    let backend = test_backend().await;
    let ack = backend.api().block_user("u1", true).await.unwrap();

    assert_eq!(ack.as_deref(), Some("Saved"));
    let request = backend.last_request();
    assert_eq!(request.path, "/admin/users/u1/block");
    assert_eq!(request.body, Some(json!({ "blocked": true })));
}

#[tokio::test]
async fn test_driver_verification_body() {
    let backend = test_backend().await;
    backend.api().verify_driver("d9", "VERIFIED").await.unwrap();

    let request = backend.last_request();
    assert_eq!(request.path, "/admin/drivers/d9/verify");
    assert_eq!(request.body, Some(json!({ "status": "VERIFIED" })));
}

#[tokio::test]
async fn test_create_category_sends_camel_case() {
    let backend = test_backend().await;
    let form = CreateCategoryForm {
        name: "Sedan XL".to_string(),
        base_fare: 75.0,
        seats: 6,
    };
    backend.api().create_category(&form).await.unwrap();

    let body = backend.last_request().body.unwrap();
    assert_eq!(body["name"], Value::from("Sedan XL"));
    assert_eq!(body["baseFare"], Value::from(75.0));
    assert_eq!(body["seats"], Value::from(6));
}

#[tokio::test]
async fn test_invalid_category_never_sent() {
    let backend = test_backend().await;
    let form = CreateCategoryForm {
        name: "X".to_string(),
        base_fare: -1.0,
        seats: 0,
    };
    let err = backend.api().create_category(&form).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field("name").is_some());
    assert!(err.field("base_fare").is_some());
    assert!(err.field("seats").is_some());
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_offer_window_must_not_be_inverted() {
    let backend = test_backend().await;
    let mut form = CreateOfferForm {
        code: "MONSOON20".to_string(),
        title: "Monsoon saver".to_string(),
        discount_percent: 20.0,
        max_discount: Some(100.0),
        valid_from: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
        valid_until: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
    };
    let err = backend.api().create_offer(&form).await.unwrap_err();
    assert!(err.field("validUntil").is_some());
    assert!(backend.requests().is_empty());

    form.valid_until = NaiveDate::from_ymd_opt(2024, 7, 31).unwrap();
    backend.api().create_offer(&form).await.unwrap();
    let body = backend.last_request().body.unwrap();
    assert_eq!(body["validFrom"], Value::from("2024-07-01"));
    assert_eq!(body["discountPercent"], Value::from(20.0));
}

#[tokio::test]
async fn test_pricing_rules_round_trip() {
    let backend = test_backend().await;
    let api = backend.api();

    let rules = api.list_pricing().await.unwrap();
    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].surge_cap, 1.0);
    assert_eq!(rules[1].surge_cap, 2.5);

    let form = FareRuleForm {
        base_fare: rules[0].base_fare,
        per_km: 10.0,
        per_minute: rules[0].per_minute,
        surge_cap: 1.5,
    };
    api.update_fare_rule(&rules[0].category_id, &form).await.unwrap();
    let request = backend.last_request();
    assert_eq!(request.path, "/admin/pricing/c1");
    assert_eq!(request.body.unwrap()["perKm"], Value::from(10.0));
}

#[tokio::test]
async fn test_surge_cap_out_of_range_is_rejected() {
    let backend = test_backend().await;
    let form = FareRuleForm {
        base_fare: 40.0,
        per_km: 9.5,
        per_minute: 1.0,
        surge_cap: 9.0,
    };
    let err = backend.api().update_fare_rule("c1", &form).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field("surge_cap").is_some());
}

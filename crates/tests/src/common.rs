use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    extract::{Path, Query, RawQuery, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{TimeZone, Utc};
use client::{
    load_detail, load_page, ApiClient, AuthContext, DetailTicket, Issues, ListResource, LocalPager,
    PageTicket, RemoteSource, RemoteTable, Rides, Settlement,
};
use serde_json::{json, Value};
use shared_types::*;

/// Token the fixture backend accepts.
pub const TOKEN: &str = "fixture-token";

/// Ride id whose detail endpoint answers 404 instead of a `null` envelope.
pub const PURGED_RIDE: &str = "r-purged";

/// How list endpoints misbehave while a failure is armed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Failure {
    /// 500 with a JSON message.
    Message(&'static str),
    /// 502 with an HTML body.
    Opaque,
}

/// One request as the backend saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

pub struct Backend {
    pub rides: Vec<Ride>,
    pub issues: Vec<Issue>,
    pub metrics: LiveMetrics,
    /// Live feed events; the cursor is an index into this list.
    pub feed: Vec<MetricsUpdate>,
    pub failure: Option<Failure>,
    pub requests: Vec<Recorded>,
}

type Shared = Arc<Mutex<Backend>>;

pub fn ride(i: u32) -> Ride {
    Ride {
        id: format!("r{i:02}"),
        rider_name: if i % 5 == 0 { "John Doe".into() } else { format!("Rider {i}") },
        driver_name: (i % 7 != 0).then(|| format!("Driver {i}")),
        pickup: "Airport".to_string(),
        dropoff: "Downtown".to_string(),
        fare: 10.0 + i as f64,
        status: if i % 2 == 0 { "COMPLETED".into() } else { "CANCELLED".into() },
        created_at: Utc.with_ymd_and_hms(2024, 6, i, 8, 30, 0).unwrap(),
    }
}

pub fn issue(i: u32) -> Issue {
    Issue {
        id: format!("i{i:02}"),
        ticket_number: format!("TCK-{:04}", 1000 + i),
        subject: if i % 3 == 0 { "Driver was rude".into() } else { format!("Fare dispute {i}") },
        raised_by: format!("Rider {i}"),
        category: Some("Billing".to_string()),
        status: if i % 4 == 0 { "RESOLVED".into() } else { "OPEN".into() },
        priority: ISSUE_PRIORITIES[(i as usize) % ISSUE_PRIORITIES.len()].to_string(),
        assigned_agent: None,
        created_at: Utc.with_ymd_and_hms(2024, 7, i, 12, 0, 0).unwrap(),
    }
}

fn ride_detail(ride: Ride) -> RideDetail {
    let requested = ride.created_at;
    RideDetail {
        timeline: vec![
            RideEvent {
                status: "REQUESTED".to_string(),
                at: requested,
            },
            RideEvent {
                status: ride.status.clone(),
                at: requested + chrono::Duration::minutes(25),
            },
        ],
        ride,
        rider_phone: Some("+1 555 0100".to_string()),
        driver_phone: None,
        vehicle_number: Some("KA-01-1234".to_string()),
        distance_km: Some(12.4),
        duration_minutes: Some(25),
        payment_method: Some("CASH".to_string()),
    }
}

impl Backend {
    fn seeded() -> Self {
        Self {
            rides: (1..=25).map(ride).collect(),
            issues: (1..=12).map(issue).collect(),
            metrics: LiveMetrics {
                online_drivers: 40,
                active_rides: 12,
                completed_today: 310,
                cancelled_today: 9,
                open_issues: 5,
                revenue_today: 8120.5,
            },
            feed: Vec::new(),
            failure: None,
            requests: Vec::new(),
        }
    }

    /// Record the request and check its bearer token.
    fn admit(
        &mut self,
        headers: &HeaderMap,
        path: &str,
        query: Option<String>,
        body: Option<Value>,
    ) -> Result<(), Response> {
        let authorization = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.requests.push(Recorded {
            path: path.to_string(),
            query,
            authorization: authorization.clone(),
            body,
        });
        if authorization.as_deref() == Some(format!("Bearer {TOKEN}").as_str()) {
            Ok(())
        } else {
            Err(reply(
                StatusCode::UNAUTHORIZED,
                json!({ "success": false, "message": "Invalid token" }),
            ))
        }
    }

    fn armed_failure(&self) -> Option<Response> {
        match self.failure? {
            Failure::Message(message) => Some(reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "success": false, "message": message }),
            )),
            Failure::Opaque => Some(
                (StatusCode::BAD_GATEWAY, "<html>bad gateway</html>").into_response(),
            ),
        }
    }
}

fn reply(status: StatusCode, body: Value) -> Response {
    (status, Json(body)).into_response()
}

fn ok(body: Value) -> Response {
    reply(StatusCode::OK, body)
}

/// Build the list query the way a real backend would: filters via the
/// shared URL rules, page size from `limit`.
fn list_query(raw: &str, default_sort: SortKey, rules: &QueryRules) -> TableQuery {
    let defaults = TableQuery::initial(DEFAULT_PAGE_SIZE, default_sort);
    let mut query = TableQuery::from_query_string(raw, &defaults, rules);
    let limit = raw
        .split('&')
        .find_map(|pair| pair.strip_prefix("limit="))
        .and_then(|v| v.parse::<u32>().ok());
    let (_, page_size) = normalize_pagination(None, limit);
    query.page_size = page_size;
    query
}

fn body_query_string(body: &Value) -> String {
    let Some(fields) = body.as_object() else {
        return String::new();
    };
    fields
        .iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            format!("{key}={}", urlencoding::encode(&value))
        })
        .collect::<Vec<_>>()
        .join("&")
}

async fn list_rides(
    State(state): State<Shared>,
    headers: HeaderMap,
    RawQuery(raw): RawQuery,
) -> Response {
    let mut backend = state.lock().unwrap();
    if let Err(rejected) = backend.admit(&headers, Rides::LIST_PATH, raw.clone(), None) {
        return rejected;
    }
    if let Some(failed) = backend.armed_failure() {
        return failed;
    }
    let query = list_query(raw.as_deref().unwrap_or_default(), Rides::default_sort(), &Rides::RULES);
    let page = LocalPager::new(backend.rides.clone()).page(&query);
    ok(json!({
        "success": true,
        "rides": page.rows,
        "totalPages": page.total_pages,
        "totalCount": page.total_count,
    }))
}

async fn get_ride(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    let mut backend = state.lock().unwrap();
    let path = format!("{}/{id}", Rides::DETAIL_PATH);
    if let Err(rejected) = backend.admit(&headers, &path, None, None) {
        return rejected;
    }
    if id == PURGED_RIDE {
        return reply(
            StatusCode::NOT_FOUND,
            json!({ "success": false, "message": "Ride not found" }),
        );
    }
    let data = backend
        .rides
        .iter()
        .find(|r| r.id == id)
        .cloned()
        .map(ride_detail);
    ok(json!({ "success": true, "data": data }))
}

/// Issues take their query as a JSON body and report no total count.
async fn search_issues(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut backend = state.lock().unwrap();
    if let Err(rejected) = backend.admit(&headers, Issues::LIST_PATH, None, Some(body.clone())) {
        return rejected;
    }
    if let Some(failed) = backend.armed_failure() {
        return failed;
    }
    let query = list_query(&body_query_string(&body), Issues::default_sort(), &Issues::RULES);
    let page = LocalPager::new(backend.issues.clone()).page(&query);
    ok(json!({
        "success": true,
        "issues": page.rows,
        "totalPages": page.total_pages,
    }))
}

async fn get_issue(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    let mut backend = state.lock().unwrap();
    let path = format!("{}/{id}", Issues::DETAIL_PATH);
    if let Err(rejected) = backend.admit(&headers, &path, None, None) {
        return rejected;
    }
    let data = backend.issues.iter().find(|i| i.id == id).map(|issue| IssueDetail {
        issue: issue.clone(),
        description: "Charged twice for the same trip".to_string(),
        ride_id: Some("r01".to_string()),
        comments: Vec::new(),
    });
    ok(json!({ "success": true, "data": data }))
}

async fn assign_issue(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut backend = state.lock().unwrap();
    let path = format!("/admin/issues/{id}/assign");
    if let Err(rejected) = backend.admit(&headers, &path, None, Some(body.clone())) {
        return rejected;
    }
    let agent = body.get("agentId").and_then(Value::as_str).map(str::to_string);
    match backend.issues.iter_mut().find(|i| i.id == id) {
        Some(issue) => {
            issue.assigned_agent = agent;
            issue.status = "IN_PROGRESS".to_string();
            ok(json!({ "success": true, "message": "Issue assigned" }))
        }
        None => reply(
            StatusCode::NOT_FOUND,
            json!({ "success": false, "message": "Issue not found" }),
        ),
    }
}

/// Every other write endpoint: record the body and acknowledge.
async fn acknowledge(
    State(state): State<Shared>,
    headers: HeaderMap,
    uri: Uri,
    Json(body): Json<Value>,
) -> Response {
    let mut backend = state.lock().unwrap();
    if let Err(rejected) = backend.admit(&headers, uri.path(), None, Some(body)) {
        return rejected;
    }
    ok(json!({ "success": true, "message": "Saved" }))
}

async fn list_pricing(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let mut backend = state.lock().unwrap();
    if let Err(rejected) = backend.admit(&headers, "/admin/pricing", None, None) {
        return rejected;
    }
    ok(json!({
        "success": true,
        "data": [
            { "categoryId": "c1", "categoryName": "Mini", "baseFare": 40.0, "perKm": 9.5, "perMinute": 1.0 },
            { "categoryId": "c2", "categoryName": "Sedan", "baseFare": 60.0, "perKm": 12.0, "perMinute": 1.5, "surgeCap": 2.5 }
        ],
    }))
}

async fn login(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut backend = state.lock().unwrap();
    backend.requests.push(Recorded {
        path: "/admin/login".to_string(),
        query: None,
        authorization: None,
        body: Some(body.clone()),
    });
    let email = body.get("email").and_then(Value::as_str).unwrap_or_default();
    let password = body.get("password").and_then(Value::as_str).unwrap_or_default();
    if email == "ops@fleet.test" && password == "secret" {
        ok(json!({ "success": true, "token": TOKEN, "role": "admin", "username": "ops" }))
    } else {
        reply(
            StatusCode::UNAUTHORIZED,
            json!({ "success": false, "message": "Invalid email or password" }),
        )
    }
}

async fn metrics_snapshot(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let mut backend = state.lock().unwrap();
    if let Err(rejected) = backend.admit(&headers, "/admin/metrics", None, None) {
        return rejected;
    }
    ok(json!({ "success": true, "data": backend.metrics, "cursor": backend.feed.len() }))
}

/// Long-poll stand-in: everything after `cursor`, or an empty batch right
/// away when the client is caught up.
async fn metrics_live(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let mut backend = state.lock().unwrap();
    let cursor = params.get("cursor").and_then(|c| c.parse::<usize>().ok()).unwrap_or(0);
    if let Err(rejected) = backend.admit(&headers, "/admin/metrics/live", None, None) {
        return rejected;
    }
    if cursor >= backend.feed.len() {
        return ok(json!({ "success": true, "cursor": cursor, "events": [] }));
    }
    let events = backend.feed[cursor..].to_vec();
    ok(json!({ "success": true, "cursor": backend.feed.len(), "events": events }))
}

fn router(state: Shared) -> Router {
    Router::new()
        .route("/admin/login", post(login))
        .route("/admin/rides", get(list_rides))
        .route("/admin/rides/{id}", get(get_ride))
        .route("/admin/issues/search", post(search_issues))
        .route("/admin/issues/{id}", get(get_issue))
        .route("/admin/issues/{id}/assign", post(assign_issue))
        .route("/admin/issues/{id}/status", post(acknowledge))
        .route("/admin/users/{id}/block", post(acknowledge))
        .route("/admin/drivers/{id}/verify", post(acknowledge))
        .route("/admin/categories", post(acknowledge))
        .route("/admin/offers", post(acknowledge))
        .route("/admin/pricing", get(list_pricing))
        .route("/admin/pricing/{id}", post(acknowledge))
        .route("/admin/metrics", get(metrics_snapshot))
        .route("/admin/metrics/live", get(metrics_live))
        .with_state(state)
}

/// A fixture admin backend listening on an ephemeral local port.
pub struct TestBackend {
    pub base_url: String,
    state: Shared,
}

impl TestBackend {
    /// Client signed in with the accepted token.
    pub fn api(&self) -> ApiClient {
        self.api_as(AuthContext::with_token(TOKEN))
    }

    pub fn api_as(&self, auth: AuthContext) -> ApiClient {
        let config = ApiConfig {
            base_url: self.base_url.clone(),
            timeout_secs: 5,
        };
        ApiClient::new(&config, auth)
    }

    pub fn state(&self) -> MutexGuard<'_, Backend> {
        self.state.lock().unwrap()
    }

    pub fn fail_with(&self, failure: Failure) {
        self.state().failure = Some(failure);
    }

    pub fn recover(&self) {
        self.state().failure = None;
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state().requests.clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests().pop().expect("backend saw no request")
    }
}

pub async fn test_backend() -> TestBackend {
    let state: Shared = Arc::new(Mutex::new(Backend::seeded()));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fixture backend");
    let addr = listener.local_addr().expect("Fixture backend has no address");
    let app = router(state.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Fixture backend stopped");
    });
    TestBackend {
        base_url: format!("http://{addr}"),
        state,
    }
}

pub async fn settle_page<R: ListResource>(
    table: &mut RemoteTable<R>,
    source: &RemoteSource<R>,
    ticket: PageTicket,
) -> Settlement {
    let outcome = load_page(source, ticket).await;
    table.settle_page(outcome)
}

/// Settle `ticket`, chasing the last page when the request overshot it.
pub async fn settle_following_clamps<R: ListResource>(
    table: &mut RemoteTable<R>,
    source: &RemoteSource<R>,
    ticket: PageTicket,
) -> Settlement {
    let mut ticket = ticket;
    loop {
        match settle_page(table, source, ticket).await {
            Settlement::Clamped(last) => ticket = last,
            settled => return settled,
        }
    }
}

pub async fn settle_detail<R: ListResource>(
    table: &mut RemoteTable<R>,
    source: &RemoteSource<R>,
    ticket: DetailTicket,
) {
    let outcome = load_detail(source, ticket).await;
    table.settle_detail(outcome);
}

/// Mount a table the way a screen does: restore from the URL, then load.
pub async fn mount<R: ListResource>(
    api: &ApiClient,
    url_query: &str,
) -> (RemoteTable<R>, RemoteSource<R>) {
    let source = api.source::<R>();
    let mut table = RemoteTable::<R>::from_url(url_query, DEFAULT_PAGE_SIZE);
    let ticket = table.reload();
    settle_following_clamps(&mut table, &source, ticket).await;
    (table, source)
}

pub fn row_ids<R: ListResource>(table: &RemoteTable<R>) -> Vec<String> {
    table.rendered_rows().into_iter().map(|r| r.id).collect()
}

pub fn serials<R: ListResource>(table: &RemoteTable<R>) -> Vec<u64> {
    table.rendered_rows().into_iter().map(|r| r.serial).collect()
}

//! HTTP access to the admin backend.

mod mutations;

pub use mutations::DRIVER_DECISIONS;

use std::marker::PhantomData;

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde_json::{Map, Value};
use shared_types::{
    parse_detail_envelope, parse_list_envelope, ApiConfig, AppError, PageResult, TableQuery,
};

use crate::auth::AuthContext;
use crate::resources::{ListMethod, ListResource};
use crate::table::{DetailSource, PageSource};

/// How a response with a non-success status is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expect {
    /// A 404 means the entity is gone.
    Entity,
    /// A 404 is just another server error.
    Endpoint,
}

/// Thin wrapper over `reqwest::Client` that knows the backend base URL and
/// attaches the injected session to every request.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    auth: AuthContext,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, auth: AuthContext) -> Self {
        Self {
            http: build_http(config),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth,
        }
    }

    /// Same connection, different session (login / logout).
    pub fn with_auth(&self, auth: AuthContext) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            auth,
        }
    }

    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Page + detail source for resource `R`.
    pub fn source<R: ListResource>(&self) -> RemoteSource<R> {
        RemoteSource {
            api: self.clone(),
            resource: PhantomData,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.http.request(method, url);
        match self.auth.bearer() {
            Some(bearer) => builder.header(reqwest::header::AUTHORIZATION, bearer),
            None => builder,
        }
    }

    /// Fetch one page of `R` for `query`.
    pub async fn list<R: ListResource>(&self, query: &TableQuery) -> Result<PageResult<R::Row>, AppError> {
        let params = query.to_params();
        let builder = match R::LIST_METHOD {
            ListMethod::Get => self.request(Method::GET, R::LIST_PATH).query(&params),
            ListMethod::Post => self.request(Method::POST, R::LIST_PATH).json(&params_body(&params)),
        };
        tracing::debug!(resource = R::NAME, page = query.page, "list request");
        let body = self.send(builder, Expect::Endpoint).await?;
        parse_list_envelope(body, R::ROWS_FIELD)
    }

    /// Fetch the detail record of `R` with `id`.
    pub async fn detail<R: ListResource>(&self, id: &str) -> Result<R::Detail, AppError> {
        let path = format!("{}/{}", R::DETAIL_PATH, urlencoding::encode(id));
        tracing::debug!(resource = R::NAME, id, "detail request");
        let body = self.send(self.request(Method::GET, &path), Expect::Entity).await?;
        parse_detail_envelope(body)
    }

    async fn get(&self, path: &str, expect: Expect) -> Result<Value, AppError> {
        self.send(self.request(Method::GET, path), expect).await
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, AppError> {
        self.send(self.request(Method::POST, path).json(body), Expect::Endpoint)
            .await
    }

    async fn send(&self, builder: RequestBuilder, expect: Expect) -> Result<Value, AppError> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!(error = %e, "request did not complete");
            AppError::network(format!("Unable to reach the server: {e}"))
        })?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AppError::network(format!("Failed to read response: {e}")))?;
        classify(status, &text, expect)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http(config: &ApiConfig) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(config.timeout_secs))
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default HTTP client");
            reqwest::Client::new()
        })
}

#[cfg(target_arch = "wasm32")]
fn build_http(_config: &ApiConfig) -> reqwest::Client {
    reqwest::Client::new()
}

/// JSON body for list endpoints that take their query by POST.
fn params_body(params: &[(&'static str, String)]) -> Value {
    let mut body = Map::new();
    for (key, value) in params {
        let value = match *key {
            "page" | "limit" => value
                .parse::<u64>()
                .map(Value::from)
                .unwrap_or_else(|_| Value::from(value.clone())),
            _ => Value::from(value.clone()),
        };
        body.insert(key.to_string(), value);
    }
    Value::Object(body)
}

/// Turn a raw HTTP response into a JSON body or a classified error.
fn classify(status: StatusCode, text: &str, expect: Expect) -> Result<Value, AppError> {
    let body: Option<Value> = serde_json::from_str(text).ok();

    if status == StatusCode::NOT_FOUND && expect == Expect::Entity {
        return Err(AppError::not_found("No data available"));
    }
    if !status.is_success() {
        let message = body
            .as_ref()
            .and_then(|b| b.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string);
        tracing::warn!(status = status.as_u16(), "server rejected request");
        return Err(AppError::server_or_generic(message));
    }

    body.ok_or_else(|| AppError::network("Unexpected response: body is not JSON"))
}

/// [`PageSource`] / [`DetailSource`] backed by the HTTP API.
pub struct RemoteSource<R> {
    api: ApiClient,
    resource: PhantomData<fn() -> R>,
}

impl<R> Clone for RemoteSource<R> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            resource: PhantomData,
        }
    }
}

impl<R: ListResource> PageSource<R::Row> for RemoteSource<R> {
    async fn fetch_page(&self, query: &TableQuery) -> Result<PageResult<R::Row>, AppError> {
        self.api.list::<R>(query).await
    }
}

impl<R: ListResource> DetailSource<R::Detail> for RemoteSource<R> {
    async fn fetch_detail(&self, id: &str) -> Result<R::Detail, AppError> {
        self.api.detail::<R>(id).await
    }
}

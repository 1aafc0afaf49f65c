use crate::dto::rpc::{ApiError, JsonRpcRequest, JsonRpcResponse};
use crate::error::{BetfairError, Result};
use crate::session::Session;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
pub const JSON_CONTENT_TYPE: &str = "application/json";

const BETTING_PREFIX: &str = "SportsAPING/v1.0/";
const ACCOUNTS_PREFIX: &str = "AccountAPING/v1.0/";

/// Hosts and paths of every endpoint the client talks to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Endpoints {
    pub scheme: String,
    pub identity_host: String,
    pub login_path: String,
    pub keep_alive_path: String,
    pub logout_path: String,
    pub api_host: String,
    pub betting_path: String,
    pub accounts_path: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            scheme: "https".to_string(),
            identity_host: "identitysso.betfair.com".to_string(),
            login_path: "/api/login".to_string(),
            keep_alive_path: "/api/keepAlive".to_string(),
            logout_path: "/api/logout".to_string(),
            api_host: "api.betfair.com".to_string(),
            betting_path: "/exchange/betting/json-rpc/v1".to_string(),
            accounts_path: "/exchange/account/json-rpc/v1".to_string(),
        }
    }
}

/// Request body before encoding.
#[derive(Debug, Clone)]
pub enum Payload {
    /// Key/value pairs, query-string encoded on the wire.
    Form(Vec<(String, String)>),
    /// Pre-serialized body, sent unchanged.
    Raw(String),
}

impl Payload {
    pub fn empty_form() -> Self {
        Payload::Form(Vec::new())
    }

    fn encode(self) -> String {
        match self {
            Payload::Form(pairs) => pairs
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect::<Vec<_>>()
                .join("&"),
            Payload::Raw(body) => body,
        }
    }
}

/// One outgoing POST, built per call and never retained.
#[derive(Debug, Clone)]
pub struct RpcRequest {
    pub host: String,
    pub path: String,
    pub content_type: String,
    pub headers: HeaderMap,
    pub body: String,
}

impl RpcRequest {
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.host, self.path)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Parsed JSON body, handed back exactly as the endpoint produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct RpcResponse(Value);

impl RpcResponse {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// The JSON-RPC envelope: the first element of a batch reply, or the
    /// value itself when the endpoint answered with a bare object.
    pub fn envelope(&self) -> &Value {
        match &self.0 {
            Value::Array(items) => items.first().unwrap_or(&Value::Null),
            other => other,
        }
    }

    /// The JSON-RPC `error` member, if the call was rejected.
    pub fn error(&self) -> Option<ApiError> {
        let error = self.envelope().get("error")?;
        serde_json::from_value(error.clone()).ok()
    }

    /// Decodes the whole body as `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.0.clone())?)
    }

    /// Decodes the JSON-RPC `result` member as `T`, turning an `error`
    /// member into [`BetfairError::Api`].
    pub fn result<T: DeserializeOwned>(&self) -> Result<T> {
        let envelope: JsonRpcResponse<T> = serde_json::from_value(self.envelope().clone())?;
        if let Some(error) = envelope.error {
            return Err(BetfairError::Api(error));
        }
        envelope.result.ok_or_else(|| BetfairError::EmptyResponse {
            endpoint: "JSON-RPC result".to_string(),
        })
    }
}

/// Sends a built request and returns the raw response body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: RpcRequest) -> Result<String>;
}

/// `reqwest` backed transport.
pub struct HttpTransport {
    client: Client,
    scheme: String,
}

impl HttpTransport {
    pub fn new(scheme: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            scheme: scheme.into(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new("https")
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: RpcRequest) -> Result<String> {
        let url = format!("{}://{}{}", self.scheme, request.host, request.path);

        let response = self
            .client
            .post(&url)
            .headers(request.headers)
            .body(request.body)
            .send()
            .await?;

        debug!("Response status from {}: {}", url, response.status());
        Ok(response.text().await?)
    }
}

/// Builds requests for named operations, attaches the session headers and
/// parses whatever comes back.
#[derive(Clone)]
pub struct RpcGateway {
    transport: Arc<dyn Transport>,
    endpoints: Endpoints,
}

impl RpcGateway {
    pub fn new(transport: Arc<dyn Transport>, endpoints: Endpoints) -> Self {
        Self {
            transport,
            endpoints,
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn build_request(
        &self,
        session: &Session,
        host: &str,
        path: &str,
        content_type: &str,
        payload: Payload,
    ) -> Result<RpcRequest> {
        let body = payload.encode();

        let mut headers = HeaderMap::with_capacity(5);
        headers.insert(CONTENT_TYPE, content_type.parse()?);
        headers.insert("X-Application", session.application_key().parse()?);
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));
        if content_type == FORM_CONTENT_TYPE {
            headers.insert(CONTENT_LENGTH, HeaderValue::from(body.len()));
        }
        if let Some(token) = session.token() {
            headers.insert("X-Authentication", token.parse()?);
        }

        Ok(RpcRequest {
            host: host.to_string(),
            path: path.to_string(),
            content_type: content_type.to_string(),
            headers,
            body,
        })
    }

    pub async fn invoke(
        &self,
        session: &Session,
        host: &str,
        path: &str,
        content_type: &str,
        payload: Payload,
    ) -> Result<RpcResponse> {
        let request = self.build_request(session, host, path, content_type, payload)?;
        let endpoint = request.endpoint();
        debug!("POST {} body: {}", endpoint, redact_form(&request));

        let body = self.transport.send(request).await?;
        debug!("Response from {}: {}", endpoint, body);

        parse_body(&endpoint, &body).map(RpcResponse)
    }

    /// Calls `SportsAPING/v1.0/<method>` on the betting endpoint.
    pub async fn betting<P: Serialize>(
        &self,
        session: &Session,
        method: &str,
        params: &P,
    ) -> Result<RpcResponse> {
        let body = envelope(&format!("{BETTING_PREFIX}{method}"), params)?;
        self.invoke(
            session,
            &self.endpoints.api_host,
            &self.endpoints.betting_path,
            JSON_CONTENT_TYPE,
            Payload::Raw(body),
        )
        .await
    }

    /// Calls `AccountAPING/v1.0/<method>` on the accounts endpoint.
    pub async fn accounts<P: Serialize>(
        &self,
        session: &Session,
        method: &str,
        params: &P,
    ) -> Result<RpcResponse> {
        let body = envelope(&format!("{ACCOUNTS_PREFIX}{method}"), params)?;
        self.invoke(
            session,
            &self.endpoints.api_host,
            &self.endpoints.accounts_path,
            JSON_CONTENT_TYPE,
            Payload::Raw(body),
        )
        .await
    }

    pub async fn login(&self, session: &Session) -> Result<RpcResponse> {
        let form = vec![
            ("username".to_string(), session.username().to_string()),
            ("password".to_string(), session.password().to_string()),
        ];
        self.invoke(
            session,
            &self.endpoints.identity_host,
            &self.endpoints.login_path,
            FORM_CONTENT_TYPE,
            Payload::Form(form),
        )
        .await
    }

    pub async fn keep_alive(&self, session: &Session) -> Result<RpcResponse> {
        self.invoke(
            session,
            &self.endpoints.identity_host,
            &self.endpoints.keep_alive_path,
            FORM_CONTENT_TYPE,
            Payload::empty_form(),
        )
        .await
    }

    pub async fn logout(&self, session: &Session) -> Result<RpcResponse> {
        self.invoke(
            session,
            &self.endpoints.identity_host,
            &self.endpoints.logout_path,
            FORM_CONTENT_TYPE,
            Payload::empty_form(),
        )
        .await
    }
}

/// Single-element JSON-RPC batch, as the exchange expects it.
fn envelope<P: Serialize>(method: &str, params: &P) -> Result<String> {
    Ok(serde_json::to_string(&[JsonRpcRequest::new(method, params)])?)
}

fn parse_body(endpoint: &str, body: &str) -> Result<Value> {
    if body.trim().is_empty() {
        return Err(BetfairError::EmptyResponse {
            endpoint: endpoint.to_string(),
        });
    }

    let value: Value =
        serde_json::from_str(body).map_err(|source| BetfairError::InvalidResponse {
            endpoint: endpoint.to_string(),
            source,
        })?;

    if value.is_null() {
        return Err(BetfairError::EmptyResponse {
            endpoint: endpoint.to_string(),
        });
    }

    Ok(value)
}

// Form bodies carry the password.
fn redact_form(request: &RpcRequest) -> &str {
    if request.content_type == FORM_CONTENT_TYPE && !request.body.is_empty() {
        "<form>"
    } else {
        &request.body
    }
}

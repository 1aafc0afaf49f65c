use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest<T> {
    pub jsonrpc: String,
    pub method: String,
    pub params: T,
    pub id: i32,
}

impl<T> JsonRpcRequest<T> {
    pub fn new(method: impl Into<String>, params: T) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            method: method.into(),
            params,
            id: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse<T> {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    pub result: Option<T>,
    pub error: Option<ApiError>,
    #[serde(default)]
    pub id: Option<i32>,
}

/// JSON-RPC error member, e.g. `{"code":-32099,"message":"ANGX-0003","data":{...}}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ApiError {
    /// Betfair error code buried in `data.APINGException.errorCode` or
    /// `data.AccountAPINGException.errorCode`, when present.
    pub fn exception_code(&self) -> Option<&str> {
        let data = self.data.as_ref()?;
        ["APINGException", "AccountAPINGException"]
            .iter()
            .find_map(|key| data.get(key)?.get("errorCode")?.as_str())
    }
}

/// Status field shared by the identity login, keep-alive and logout responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdentityStatus {
    Success,
    LimitedAccess,
    LoginRestricted,
    Fail,
    #[serde(other)]
    Unknown,
}

impl IdentityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentityStatus::Success => "SUCCESS",
            IdentityStatus::LimitedAccess => "LIMITED_ACCESS",
            IdentityStatus::LoginRestricted => "LOGIN_RESTRICTED",
            IdentityStatus::Fail => "FAIL",
            IdentityStatus::Unknown => "UNKNOWN",
        }
    }
}

/// Body returned by `/api/login`, `/api/keepAlive` and `/api/logout`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub status: Option<IdentityStatus>,
    #[serde(default)]
    pub error: Option<String>,
}

impl IdentityResponse {
    /// Token handed out by the endpoint, if it is non-empty.
    pub fn session_token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.status, Some(IdentityStatus::Fail))
    }
}

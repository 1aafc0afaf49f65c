#![allow(dead_code)]

use async_trait::async_trait;
use betfair_rpc::{BetfairApiClient, Endpoints, Result, RpcRequest, Session, Transport};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const LOGIN_OK: &str =
    r#"{"token":"token-1","product":"app-key","status":"SUCCESS","error":""}"#;
pub const KEEP_ALIVE_OK: &str =
    r#"{"token":"token-1","product":"app-key","status":"SUCCESS","error":""}"#;
pub const KEEP_ALIVE_FAIL: &str =
    r#"{"token":"","product":"app-key","status":"FAIL","error":"NO_SESSION"}"#;
pub const LOGOUT_OK: &str =
    r#"{"token":"","product":"app-key","status":"SUCCESS","error":""}"#;
pub const EMPTY_RESULT: &str = r#"[{"jsonrpc":"2.0","result":[],"id":1}]"#;

/// Records every request and answers from a per-path queue. The last queued
/// body for a path is repeated once the queue runs dry.
#[derive(Default)]
pub struct MockTransport {
    requests: Mutex<Vec<RpcRequest>>,
    responses: Mutex<HashMap<String, Vec<String>>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        let transport = Arc::new(Self::default());
        transport.respond("/api/login", LOGIN_OK);
        transport.respond("/api/keepAlive", KEEP_ALIVE_OK);
        transport.respond("/api/logout", LOGOUT_OK);
        transport.respond("/exchange/betting/json-rpc/v1", EMPTY_RESULT);
        transport.respond("/exchange/account/json-rpc/v1", EMPTY_RESULT);
        transport
    }

    /// Replace the queue for `path` with a single body.
    pub fn respond(&self, path: &str, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), vec![body.to_string()]);
    }

    /// Answer `path` with each body in turn.
    pub fn respond_sequence(&self, path: &str, bodies: &[&str]) {
        self.responses.lock().unwrap().insert(
            path.to_string(),
            bodies.iter().map(|b| b.to_string()).collect(),
        );
    }

    pub fn requests(&self) -> Vec<RpcRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.path).collect()
    }

    pub fn last(&self) -> RpcRequest {
        self.requests().pop().expect("no request recorded")
    }

    /// Body of the last request parsed as JSON.
    pub fn last_body(&self) -> Value {
        serde_json::from_str(&self.last().body).expect("body is not JSON")
    }

    /// `params` of the single JSON-RPC envelope in the last request.
    pub fn last_params(&self) -> Value {
        self.last_body()[0]["params"].clone()
    }

    pub fn clear(&self) {
        self.requests.lock().unwrap().clear();
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: RpcRequest) -> Result<String> {
        let path = request.path.clone();
        self.requests.lock().unwrap().push(request);

        let mut responses = self.responses.lock().unwrap();
        let queue = responses.get_mut(&path).expect("unexpected path");
        let body = if queue.len() > 1 {
            queue.remove(0)
        } else {
            queue[0].clone()
        };
        Ok(body)
    }
}

pub fn session() -> Session {
    Session::new("app-key").with_credentials("alice", "s3cret")
}

pub fn client_with(session: Session) -> (BetfairApiClient, Arc<MockTransport>) {
    let transport = MockTransport::new();
    let client = BetfairApiClient::with_transport(session, transport.clone(), Endpoints::default());
    (client, transport)
}

pub fn client() -> (BetfairApiClient, Arc<MockTransport>) {
    client_with(session())
}

pub fn keep_alive_client(interval: Duration) -> (BetfairApiClient, Arc<MockTransport>) {
    client_with(session().with_keep_alive(true, interval))
}

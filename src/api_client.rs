use crate::config::Config;
use crate::dto::*;
use crate::error::{BetfairError, Result};
use crate::gateway::{Endpoints, HttpTransport, RpcGateway, RpcResponse, Transport};
use crate::keep_alive::KeepAliveTask;
use crate::session::{Session, SessionState};
use rust_decimal::Decimal;
use serde::Serialize;
use std::ops::ControlFlow;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

/// Unified API client for all Betfair operations.
///
/// Cloning is cheap; clones share one session and one keep-alive task. The
/// task stops when the last clone is dropped.
#[derive(Clone)]
pub struct BetfairApiClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    gateway: RpcGateway,
    session: RwLock<Session>,
    keep_alive: Mutex<Option<KeepAliveTask>>,
}

impl BetfairApiClient {
    /// Create a client against the production endpoints.
    pub fn new(session: Session) -> Self {
        Self::with_endpoints(session, Endpoints::default())
    }

    pub fn with_endpoints(session: Session, endpoints: Endpoints) -> Self {
        let transport = Arc::new(HttpTransport::new(endpoints.scheme.clone()));
        Self::with_transport(session, transport, endpoints)
    }

    pub fn with_transport(
        session: Session,
        transport: Arc<dyn Transport>,
        endpoints: Endpoints,
    ) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                gateway: RpcGateway::new(transport, endpoints),
                session: RwLock::new(session),
                keep_alive: Mutex::new(None),
            }),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_endpoints(config.session(), config.endpoints.clone())
    }

    // ========================================================================
    // Session
    // ========================================================================

    /// Login with the stored credentials and keep-alive setting.
    pub async fn login(&self) -> Result<IdentityResponse> {
        self.login_with(None, None, None).await
    }

    /// Login, replacing the stored username, password or keep-alive flag with
    /// any value given here. On success a fresh keep-alive task replaces the
    /// previous one when keep-alive is enabled.
    pub async fn login_with(
        &self,
        username: Option<&str>,
        password: Option<&str>,
        keep_alive: Option<bool>,
    ) -> Result<IdentityResponse> {
        {
            let mut session = self.inner.session.write().await;
            session.set_credentials(username, password);
            if let Some(enabled) = keep_alive {
                session.set_keep_alive_enabled(enabled);
            }
        }

        let mut task = self.inner.keep_alive.lock().await;
        let identity = match self.inner.authenticate().await {
            Ok(identity) => identity,
            Err(e) => {
                task.take();
                return Err(e);
            }
        };

        let (enabled, interval) = {
            let session = self.inner.session.read().await;
            (session.keep_alive_enabled(), session.keep_alive_interval())
        };
        *task = enabled.then(|| self.spawn_keep_alive(interval));
        if enabled {
            info!("Keep-alive scheduled every {:?}", interval);
        }

        Ok(identity)
    }

    /// Stop keep-alive, send the logout request and forget the token. The token
    /// is cleared even when the request fails.
    pub async fn logout(&self) -> Result<RpcResponse> {
        self.inner.session.write().await.set_keep_alive_enabled(false);
        if self.inner.keep_alive.lock().await.take().is_some() {
            debug!("Keep-alive cancelled");
        }

        let session = self.inner.snapshot().await;
        let result = self.inner.gateway.logout(&session).await;

        self.inner.session.write().await.clear_token();
        info!("Logged out");
        result
    }

    /// Renew the session once. A `FAIL` status triggers a fresh login.
    pub async fn keep_alive_renew(&self) -> Result<IdentityResponse> {
        self.inner.renew().await
    }

    fn spawn_keep_alive(&self, interval: Duration) -> KeepAliveTask {
        let inner = Arc::downgrade(&self.inner);
        KeepAliveTask::spawn(interval, move || keep_alive_tick(inner.clone()))
    }

    pub async fn session_token(&self) -> Option<String> {
        self.inner.session.read().await.token().map(str::to_string)
    }

    /// Restore a previously saved session token.
    pub async fn set_session_token(&self, token: impl Into<String>) {
        self.inner.session.write().await.set_token(token);
    }

    pub async fn state(&self) -> SessionState {
        self.inner.session.read().await.state()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state().await == SessionState::Authenticated
    }

    pub async fn is_keep_alive_active(&self) -> bool {
        self.inner
            .keep_alive
            .lock()
            .await
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    /// Copy of the current session.
    pub async fn session(&self) -> Session {
        self.inner.snapshot().await
    }

    async fn betting<P: Serialize>(&self, method: &str, params: &P) -> Result<RpcResponse> {
        let session = self.inner.snapshot().await;
        self.inner.gateway.betting(&session, method, params).await
    }

    async fn accounts<P: Serialize>(&self, method: &str, params: &P) -> Result<RpcResponse> {
        let session = self.inner.snapshot().await;
        self.inner.gateway.accounts(&session, method, params).await
    }

    async fn default_locale(&self, locale: &mut Option<String>) {
        if locale.is_none() {
            *locale = Some(self.inner.session.read().await.locale().to_string());
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub async fn list_event_types(
        &self,
        request: impl Into<ListEventTypesRequest>,
    ) -> Result<RpcResponse> {
        let mut request = request.into();
        self.default_locale(&mut request.locale).await;
        self.betting("listEventTypes", &request).await
    }

    pub async fn list_competitions(
        &self,
        request: impl Into<ListCompetitionsRequest>,
    ) -> Result<RpcResponse> {
        let mut request = request.into();
        self.default_locale(&mut request.locale).await;
        self.betting("listCompetitions", &request).await
    }

    pub async fn list_time_ranges(
        &self,
        filter: MarketFilter,
        granularity: TimeGranularity,
    ) -> Result<RpcResponse> {
        let request = ListTimeRangesRequest {
            filter,
            granularity,
        };
        self.betting("listTimeRanges", &request).await
    }

    pub async fn list_events(&self, request: impl Into<ListEventsRequest>) -> Result<RpcResponse> {
        let mut request = request.into();
        self.default_locale(&mut request.locale).await;
        self.betting("listEvents", &request).await
    }

    pub async fn list_market_types(
        &self,
        request: impl Into<ListMarketTypesRequest>,
    ) -> Result<RpcResponse> {
        let mut request = request.into();
        self.default_locale(&mut request.locale).await;
        self.betting("listMarketTypes", &request).await
    }

    pub async fn list_countries(
        &self,
        request: impl Into<ListCountriesRequest>,
    ) -> Result<RpcResponse> {
        let mut request = request.into();
        self.default_locale(&mut request.locale).await;
        self.betting("listCountries", &request).await
    }

    pub async fn list_venues(&self, request: impl Into<ListVenuesRequest>) -> Result<RpcResponse> {
        let mut request = request.into();
        self.default_locale(&mut request.locale).await;
        self.betting("listVenues", &request).await
    }

    // ========================================================================
    // Markets
    // ========================================================================

    pub async fn list_market_catalogue(
        &self,
        mut request: ListMarketCatalogueRequest,
    ) -> Result<RpcResponse> {
        self.default_locale(&mut request.locale).await;
        self.betting("listMarketCatalogue", &request).await
    }

    pub async fn list_market_book(&self, mut request: ListMarketBookRequest) -> Result<RpcResponse> {
        self.default_locale(&mut request.locale).await;
        self.betting("listMarketBook", &request).await
    }

    pub async fn list_runner_book(&self, mut request: ListRunnerBookRequest) -> Result<RpcResponse> {
        self.default_locale(&mut request.locale).await;
        self.betting("listRunnerBook", &request).await
    }

    pub async fn list_market_profit_and_loss(
        &self,
        request: ListMarketProfitAndLossRequest,
    ) -> Result<RpcResponse> {
        self.betting("listMarketProfitAndLoss", &request).await
    }

    // ========================================================================
    // Orders
    // ========================================================================

    pub async fn list_current_orders(
        &self,
        request: ListCurrentOrdersRequest,
    ) -> Result<RpcResponse> {
        self.betting("listCurrentOrders", &request).await
    }

    pub async fn list_cleared_orders(
        &self,
        mut request: ListClearedOrdersRequest,
    ) -> Result<RpcResponse> {
        self.default_locale(&mut request.locale).await;
        self.betting("listClearedOrders", &request).await
    }

    pub async fn place_orders(&self, request: PlaceOrdersRequest) -> Result<RpcResponse> {
        self.betting("placeOrders", &request).await
    }

    pub async fn cancel_orders(&self, request: CancelOrdersRequest) -> Result<RpcResponse> {
        self.betting("cancelOrders", &request).await
    }

    pub async fn replace_orders(&self, request: ReplaceOrdersRequest) -> Result<RpcResponse> {
        self.betting("replaceOrders", &request).await
    }

    pub async fn update_orders(&self, request: UpdateOrdersRequest) -> Result<RpcResponse> {
        self.betting("updateOrders", &request).await
    }

    // ========================================================================
    // Accounts
    // ========================================================================

    pub async fn get_account_funds(&self, request: GetAccountFundsRequest) -> Result<RpcResponse> {
        self.accounts("getAccountFunds", &request).await
    }

    pub async fn get_account_details(&self) -> Result<RpcResponse> {
        self.accounts("getAccountDetails", &GetAccountDetailsRequest {})
            .await
    }

    pub async fn get_account_statement(
        &self,
        mut request: GetAccountStatementRequest,
    ) -> Result<RpcResponse> {
        self.default_locale(&mut request.locale).await;
        self.accounts("getAccountStatement", &request).await
    }

    pub async fn list_currency_rates(
        &self,
        request: ListCurrencyRatesRequest,
    ) -> Result<RpcResponse> {
        self.accounts("listCurrencyRates", &request).await
    }

    pub async fn get_developer_app_keys(&self) -> Result<RpcResponse> {
        self.accounts("getDeveloperAppKeys", &GetDeveloperAppKeysRequest {})
            .await
    }

    pub async fn create_developer_app_keys(
        &self,
        app_name: impl Into<String>,
    ) -> Result<RpcResponse> {
        let request = CreateDeveloperAppKeysRequest {
            app_name: app_name.into(),
        };
        self.accounts("createDeveloperAppKeys", &request).await
    }

    // ========================================================================
    // Helper Methods for Common Operations
    // ========================================================================

    /// Place a single lapsing limit order and decode the report.
    pub async fn place_limit_order(
        &self,
        market_id: &str,
        selection_id: i64,
        side: Side,
        price: Decimal,
        size: Decimal,
    ) -> Result<PlaceOrdersResponse> {
        let instruction =
            PlaceInstruction::limit(selection_id, side, size, price, PersistenceType::Lapse);
        self.place_orders(PlaceOrdersRequest::new(market_id, vec![instruction]))
            .await?
            .result()
    }

    /// Cancel one bet in full.
    pub async fn cancel_bet(&self, market_id: &str, bet_id: &str) -> Result<CancelOrdersResponse> {
        let request = CancelOrdersRequest::new(market_id, vec![CancelInstruction::new(bet_id)]);
        self.cancel_orders(request).await?.result()
    }

    /// Best offers for the given markets.
    pub async fn get_market_prices(&self, market_ids: Vec<String>) -> Result<Vec<MarketBook>> {
        let request = ListMarketBookRequest {
            market_ids,
            price_projection: Some(PriceProjection::with_price_data(vec![PriceData::ExBestOffers])),
            ..Default::default()
        };
        self.list_market_book(request).await?.result()
    }
}

impl ClientInner {
    async fn snapshot(&self) -> Session {
        self.session.read().await.clone()
    }

    async fn authenticate(&self) -> Result<IdentityResponse> {
        let session = self.snapshot().await;
        let identity: IdentityResponse = self.gateway.login(&session).await?.decode()?;

        let mut session = self.session.write().await;
        match identity.session_token() {
            Some(token) if !identity.is_failure() => {
                session.set_token(token);
                info!("Logged in as {}", session.username());
                Ok(identity)
            }
            _ => {
                session.clear_token();
                let status = identity
                    .status
                    .as_ref()
                    .map_or("", IdentityStatus::as_str)
                    .to_string();
                let error = identity.error.clone().unwrap_or_default();
                warn!("Login failed: status={}, error={}", status, error);
                Err(BetfairError::LoginFailed { status, error })
            }
        }
    }

    async fn renew(&self) -> Result<IdentityResponse> {
        let session = self.snapshot().await;
        let identity: IdentityResponse = self.gateway.keep_alive(&session).await?.decode()?;

        if identity.is_failure() {
            warn!(
                "Keep-alive rejected ({}), logging in again",
                identity.error.as_deref().unwrap_or("no error")
            );
            return self.authenticate().await;
        }

        if let Some(token) = identity.session_token() {
            self.session.write().await.set_token(token);
        }
        debug!("Session renewed");
        Ok(identity)
    }
}

async fn keep_alive_tick(inner: Weak<ClientInner>) -> ControlFlow<()> {
    let Some(inner) = inner.upgrade() else {
        return ControlFlow::Break(());
    };

    {
        let session = inner.session.read().await;
        if !session.keep_alive_enabled() || !session.is_authenticated() {
            return ControlFlow::Break(());
        }
    }

    match inner.renew().await {
        Ok(_) => ControlFlow::Continue(()),
        Err(BetfairError::LoginFailed { .. }) => {
            warn!("Re-login failed, keep-alive stopped");
            ControlFlow::Break(())
        }
        Err(e) => {
            warn!("Keep-alive renewal failed: {}", e);
            ControlFlow::Continue(())
        }
    }
}

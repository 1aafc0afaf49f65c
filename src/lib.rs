//! # betfair-rpc
//!
//! An async Rust client for the Betfair Exchange JSON-RPC API: login, logout and
//! periodic session keep-alive, plus one method per betting and accounts
//! operation.
//!
//! ## Quick Start
//!
//! ```no_run
//! use betfair_rpc::{BetfairApiClient, Config};
//! use betfair_rpc::dto::market::MarketFilter;
//!
//! # async fn example() -> anyhow::Result<()> {
//! // Load configuration from config.toml
//! let config = Config::new()?;
//!
//! // Create API client and login
//! let client = BetfairApiClient::from_config(&config);
//! client.login().await?;
//!
//! // List available event types (e.g., Soccer, Tennis, Horse Racing)
//! let event_types = client.list_event_types(MarketFilter::default()).await?;
//! println!("{}", event_types.as_value());
//!
//! // Get events for a specific event type
//! let filter = MarketFilter {
//!     event_type_ids: Some(vec!["1".to_string()]), // Soccer
//!     ..Default::default()
//! };
//! let events = client.list_events(filter).await?;
//! println!("{}", events.as_value());
//! # Ok(())
//! # }
//! ```
//!
//! Every operation resolves with the JSON body exactly as the exchange sent
//! it. Use [`RpcResponse::result`] to decode the JSON-RPC `result` member into
//! one of the types in [`dto`].
//!
//! ## Configuration
//!
//! Create a `config.toml` file with your Betfair credentials:
//!
//! ```toml
//! [betfair]
//! username = "your_username"
//! password = "your_password"
//! api_key = "your_api_key"
//! keep_alive = true
//! ```
//!
//! `BETFAIR_USERNAME`, `BETFAIR_PASSWORD`, `BETFAIR_API_KEY` and
//! `BETFAIR_LOCALE` override the file when set.
//!
//! ## Placing an order
//!
//! ```no_run
//! use betfair_rpc::{BetfairApiClient, Session};
//! use betfair_rpc::dto::{PersistenceType, PlaceInstruction, PlaceOrdersRequest, Side};
//! use rust_decimal::Decimal;
//!
//! # async fn example() -> betfair_rpc::Result<()> {
//! let client = BetfairApiClient::new(
//!     Session::new("app-key").with_credentials("user", "pass"),
//! );
//! client.login().await?;
//!
//! let instruction = PlaceInstruction::limit(
//!     47972,
//!     Side::Back,
//!     Decimal::new(2, 0),
//!     Decimal::new(301, 2),
//!     PersistenceType::Lapse,
//! );
//! let response = client
//!     .place_orders(PlaceOrdersRequest::new("1.240634817", vec![instruction]))
//!     .await?;
//! println!("{}", response.as_value());
//! # Ok(())
//! # }
//! ```

pub mod api_client;
pub mod config;
pub mod dto;
pub mod error;
pub mod gateway;
mod keep_alive;
pub mod session;

// Re-export commonly used types at the crate root
pub use api_client::BetfairApiClient;
pub use config::Config;
pub use dto::*;
pub use error::{BetfairError, Result};
pub use gateway::{Endpoints, HttpTransport, Payload, RpcGateway, RpcRequest, RpcResponse, Transport};
pub use session::{Session, SessionState};

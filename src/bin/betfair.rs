use anyhow::Result;
use betfair_rpc::dto::{
    BetStatus, GetAccountFundsRequest, ListCurrentOrdersRequest, ListClearedOrdersRequest,
    ListMarketBookRequest, ListMarketCatalogueRequest, MarketFilter, MarketProjection, MarketSort,
    PriceData, PriceProjection,
};
use betfair_rpc::{BetfairApiClient, Config, RpcResponse};
use clap::{Parser, Subcommand};
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "betfair")]
#[command(about = "Betfair Exchange JSON-RPC CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List sports (event types)
    Sports,
    /// List events for a sport
    Events {
        /// Event type ID (1 = Soccer, 2 = Tennis, 7 = Horse Racing)
        event_type_id: String,
    },
    /// List markets for an event
    Markets {
        event_id: String,
        #[arg(short, long, default_value = "20")]
        max_results: i32,
    },
    /// Best offers for one or more markets
    Book {
        #[arg(required = true)]
        market_ids: Vec<String>,
    },
    /// Available balance and exposure
    Funds,
    /// Account holder details
    Details,
    /// Current or settled orders
    Orders {
        /// Show settled bets instead of open ones
        #[arg(long)]
        settled: bool,
    },
    /// Login with keep-alive and hold the session open
    KeepAlive {
        /// How long to hold the session, in seconds
        #[arg(default_value = "7200")]
        secs: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::new()?;
    let client = BetfairApiClient::from_config(&config);

    if let Commands::KeepAlive { secs } = cli.command {
        client.login_with(None, None, Some(true)).await?;
        info!("Holding session for {}s", secs);
        tokio::time::sleep(Duration::from_secs(secs)).await;
        client.logout().await?;
        return Ok(());
    }

    client.login().await?;
    let printed = match run(&client, cli.command).await {
        Ok(response) => print(&response),
        Err(e) => Err(e),
    };
    if let Err(e) = client.logout().await {
        warn!("Logout failed: {}", e);
    }
    printed
}

async fn run(client: &BetfairApiClient, command: Commands) -> Result<RpcResponse> {
    let response = match command {
        Commands::Sports => client.list_event_types(MarketFilter::default()).await?,
        Commands::Events { event_type_id } => {
            let filter = MarketFilter {
                event_type_ids: Some(vec![event_type_id]),
                ..Default::default()
            };
            client.list_events(filter).await?
        }
        Commands::Markets {
            event_id,
            max_results,
        } => {
            let filter = MarketFilter {
                event_ids: Some(vec![event_id]),
                ..Default::default()
            };
            let request = ListMarketCatalogueRequest {
                market_projection: Some(vec![
                    MarketProjection::MarketStartTime,
                    MarketProjection::RunnerDescription,
                ]),
                sort: Some(MarketSort::FirstToStart),
                ..ListMarketCatalogueRequest::new(filter, max_results)
            };
            client.list_market_catalogue(request).await?
        }
        Commands::Book { market_ids } => {
            let request = ListMarketBookRequest {
                market_ids,
                price_projection: Some(PriceProjection::with_price_data(vec![
                    PriceData::ExBestOffers,
                ])),
                ..Default::default()
            };
            client.list_market_book(request).await?
        }
        Commands::Funds => {
            client
                .get_account_funds(GetAccountFundsRequest::default())
                .await?
        }
        Commands::Details => client.get_account_details().await?,
        Commands::Orders { settled: false } => {
            client
                .list_current_orders(ListCurrentOrdersRequest::default())
                .await?
        }
        Commands::Orders { settled: true } => {
            client
                .list_cleared_orders(ListClearedOrdersRequest::new(BetStatus::Settled))
                .await?
        }
        Commands::KeepAlive { .. } => anyhow::bail!("keep-alive is not a query"),
    };
    Ok(response)
}

fn print(response: &RpcResponse) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(response.as_value())?);
    Ok(())
}

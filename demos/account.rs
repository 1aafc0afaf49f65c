use anyhow::Result;
use betfair_rpc::{
    BetfairApiClient, Config, GetAccountDetailsResponse, GetAccountFundsRequest,
    GetAccountFundsResponse,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("Betfair Account Funds Example Starting...");

    // Initialize the client
    let config = Config::new()?;
    let client = BetfairApiClient::from_config(&config);

    // Login to Betfair
    client.login().await?;
    info!("Successfully logged in to Betfair");

    // Get account funds
    let response = client
        .get_account_funds(GetAccountFundsRequest::default())
        .await?;
    let account_funds: GetAccountFundsResponse = response.result()?;

    // Print account information
    info!("Account Funds Information:");
    info!(
        "Available to Bet Balance: {:.2}",
        account_funds.available_to_bet_balance
    );
    info!("Exposure: {:.2}", account_funds.exposure);
    info!("Exposure Limit: {:.2}", account_funds.exposure_limit);
    info!("Points Balance: {}", account_funds.points_balance);
    if let Some(wallet) = &account_funds.wallet {
        info!("Wallet: {}", wallet);
    }

    let details: GetAccountDetailsResponse = client.get_account_details().await?.result()?;
    info!(
        "Account currency: {}, locale: {}",
        details.currency_code, details.locale_code
    );

    // Raw response as returned by the exchange
    info!(
        "\nAccount Funds (JSON format):\n{}",
        serde_json::to_string_pretty(response.as_value())?
    );

    client.logout().await?;
    Ok(())
}

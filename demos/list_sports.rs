use anyhow::Result;
use betfair_rpc::{BetfairApiClient, Config, EventTypeResult, MarketFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::new()?;

    // Create API client
    let client = BetfairApiClient::from_config(&config);

    // Login
    println!("Logging in to Betfair...");
    client.login().await?;
    println!("Login successful!\n");

    // Fetch all sports
    println!("Fetching all sports...\n");

    let response = client.list_event_types(MarketFilter::default()).await?;
    match response.result::<Vec<EventTypeResult>>() {
        Ok(sports) => {
            println!("Found {} sports:", sports.len());
            println!("{:<10} {:<30} {}", "ID", "Name", "Market Count");
            println!("{}", "-".repeat(60));

            for sport in sports {
                println!(
                    "{:<10} {:<30} {}",
                    sport.event_type.id, sport.event_type.name, sport.market_count
                );
            }
        }
        Err(e) => {
            eprintln!("Error fetching sports: {}", e);
        }
    }

    client.logout().await?;
    Ok(())
}

/*
[INPUT]:  NOVA_API_KEY / NOVA_API_SECRET environment variables
[OUTPUT]: Market data printed to stdout
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use novaexchange_adapter::*;

/// Example: Query market data
///
/// NovaExchange signs market endpoints too, so credentials are required
/// even for public data.
#[tokio::main]
async fn main() {
    println!("=== NovaExchange Market Data Example ===\n");

    let mut client = match NovaClient::new() {
        Ok(client) => client,
        Err(error) => {
            eprintln!("Failed to create client: {}", error);
            return;
        }
    };

    let api_key = std::env::var("NOVA_API_KEY").unwrap_or_default();
    let secret = std::env::var("NOVA_API_SECRET").unwrap_or_default();
    if api_key.is_empty() || secret.is_empty() {
        eprintln!("Set NOVA_API_KEY and NOVA_API_SECRET to run this example");
        return;
    }
    client.set_credentials(Credentials::new(api_key, secret));

    let market = "BTC_DOGE";

    println!("Listing all markets (limited upstream to 1 request/minute)...");
    match client.list_markets_summary(None).await {
        Ok(response) => println!("✓ {} markets listed", response.markets.len()),
        Err(error) => println!("✗ Error: {}", error),
    }

    println!("\nQuerying summary for {}...", market);
    match client.get_market_summary(market).await {
        Ok(response) => println!("✓ Summary: {:?}", response.markets.first()),
        Err(error) => println!("✗ Error: {}", error),
    }

    println!("\nQuerying open orders for {}...", market);
    match client.get_market_open_orders(market, TradeSide::Both).await {
        Ok(response) => println!(
            "✓ {} buy orders / {} sell orders",
            response.buyorders.len(),
            response.sellorders.len()
        ),
        Err(error) => println!("✗ Error: {}", error),
    }

    println!("\n✓ Market data example complete");
}

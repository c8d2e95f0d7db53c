/*
[INPUT]:  NOVA_API_KEY / NOVA_API_SECRET environment variables
[OUTPUT]: Account balances and a demonstration order flow
[POS]:    Examples - signed account and trading endpoints
[UPDATE]: When trading endpoints or order flow change
*/

use novaexchange_adapter::*;

/// Example: Signed account queries and order placement
///
/// Requires real credentials; the order placed below is priced far off
/// the market so it rests on the book before being cancelled again.
#[tokio::main]
async fn main() {
    println!("=== NovaExchange Trading Example ===\n");

    let api_key = std::env::var("NOVA_API_KEY").unwrap_or_default();
    let secret = std::env::var("NOVA_API_SECRET").unwrap_or_default();
    if api_key.is_empty() || secret.is_empty() {
        eprintln!("Set NOVA_API_KEY and NOVA_API_SECRET to run this example");
        return;
    }

    let mut client = match NovaClient::new() {
        Ok(client) => client,
        Err(error) => {
            eprintln!("Failed to create client: {}", error);
            return;
        }
    };
    client.set_credentials(Credentials::new(api_key, secret));

    println!("Querying balances...");
    match client.get_balances().await {
        Ok(response) => {
            for balance in &response.balances {
                println!("  {}: {} total", balance.currency, balance.amount_total);
            }
        }
        Err(error) => println!("✗ Error: {}", error),
    }

    println!("\nPlacing a resting buy order on BTC_DOGE...");
    let request = TradeRequest {
        trade_type: TradeSide::Buy,
        amount: "1000".parse().unwrap(),
        price: "0.00000001".parse().unwrap(),
        base_amount: false,
    };
    let order_id = match client.trade("BTC_DOGE", request).await {
        Ok(response) => {
            println!("✓ {} (orderid {:?})", response.message, response.orderid);
            response.orderid
        }
        Err(error) => {
            println!("✗ Error: {}", error);
            None
        }
    };

    if let Some(order_id) = order_id {
        println!("\nCancelling order {}...", order_id);
        match client.cancel_order(order_id).await {
            Ok(response) => println!("✓ {}", response.message),
            Err(error) => println!("✗ Error: {}", error),
        }
    }

    println!("\n✓ Trading example complete");
}

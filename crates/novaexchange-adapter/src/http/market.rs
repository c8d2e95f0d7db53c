/*
[INPUT]:  Market symbols and order side filters
[OUTPUT]: Public market data (summaries, order history, open books)
[POS]:    HTTP layer - market API endpoints
[UPDATE]: When adding new market endpoints or changing response format
*/

use crate::http::client::{NovaClient, Params};
use crate::http::error::Result;
use crate::types::{
    MarketOpenOrdersResponse, MarketOrderHistoryResponse, MarketsResponse, TradeSide,
};

impl NovaClient {
    /// List markets summary, including cached ticker data
    ///
    /// POST /remote/v2/markets/markets/ (all markets, no nonce) or
    /// POST /remote/v2/markets/markets/{basecurrency}/?nonce={nonce}
    ///
    /// Upstream limits this call to one request per minute.
    pub async fn list_markets_summary(
        &self,
        base_currency: Option<&str>,
    ) -> Result<MarketsResponse> {
        let method = match base_currency {
            Some(currency) => format!("markets/{currency}"),
            None => "markets".to_string(),
        };

        self.market_request(&method, Params::new()).await
    }

    /// Get the market summary for a single market, e.g. "BTC_XZC"
    ///
    /// POST /remote/v2/markets/info/{market}/?nonce={nonce}
    pub async fn get_market_summary(&self, market: &str) -> Result<MarketsResponse> {
        self.market_request(&format!("info/{market}"), Params::new())
            .await
    }

    /// Get the ticker / order history for a market
    ///
    /// POST /remote/v2/markets/orderhistory/{market}/?nonce={nonce}
    pub async fn get_market_order_history(
        &self,
        market: &str,
    ) -> Result<MarketOrderHistoryResponse> {
        self.market_request(&format!("orderhistory/{market}"), Params::new())
            .await
    }

    /// Get the currently open orders on a market's book, one or both sides
    ///
    /// POST /remote/v2/markets/openorders/{market}/{side}/?nonce={nonce}
    pub async fn get_market_open_orders(
        &self,
        market: &str,
        side: TradeSide,
    ) -> Result<MarketOpenOrdersResponse> {
        self.market_request(
            &format!("openorders/{market}/{}", side.as_str()),
            Params::new(),
        )
        .await
    }
}

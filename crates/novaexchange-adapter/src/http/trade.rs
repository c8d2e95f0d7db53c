/*
[INPUT]:  Order parameters, withdrawal details, history page numbers
[OUTPUT]: Order/withdrawal acknowledgements and account history
[POS]:    HTTP layer - private trading endpoints
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use rust_decimal::Decimal;

use crate::http::client::{NovaClient, Params};
use crate::http::error::Result;
use crate::types::{
    CancelOrderResponse, DepositHistoryResponse, OpenOrdersResponse, TradeHistoryResponse,
    TradeRequest, TradeResponse, WithdrawResponse, WithdrawalHistoryResponse,
};

fn page_params(page: Option<u32>) -> Params {
    let mut params = Params::new();
    params.insert("page", page.unwrap_or(1).to_string());
    params
}

impl NovaClient {
    /// Get the account's open orders, for one market or paginated across all
    ///
    /// POST /remote/v2/private/myopenorders_market/{market}/?nonce={nonce}
    /// POST /remote/v2/private/myopenorders/?nonce={nonce} (page param)
    pub async fn get_open_orders(
        &self,
        page: Option<u32>,
        market: Option<&str>,
    ) -> Result<OpenOrdersResponse> {
        match market {
            Some(market) => {
                self.private_request(&format!("myopenorders_market/{market}"), Params::new())
                    .await
            }
            None => self.private_request("myopenorders", page_params(page)).await,
        }
    }

    /// Cancel a single order by id
    ///
    /// POST /remote/v2/private/cancelorder/{order_id}/?nonce={nonce}
    ///
    /// The upstream reference client interpolated an out-of-scope variable
    /// here instead of the order id it was handed; this binding uses its
    /// own argument.
    pub async fn cancel_order(&self, order_id: u64) -> Result<CancelOrderResponse> {
        self.private_request(&format!("cancelorder/{order_id}"), Params::new())
            .await
    }

    /// Execute a withdrawal to an external address
    ///
    /// POST /remote/v2/private/withdraw/{currency}/?nonce={nonce}
    pub async fn withdraw(
        &self,
        currency: &str,
        amount: Decimal,
        address: &str,
    ) -> Result<WithdrawResponse> {
        let mut params = Params::new();
        params.insert("currency", currency.to_string());
        params.insert("amount", amount.to_string());
        params.insert("address", address.to_string());

        self.private_request(&format!("withdraw/{currency}"), params)
            .await
    }

    /// Execute a trade order on a market
    ///
    /// POST /remote/v2/private/trade/{market}/?nonce={nonce}
    pub async fn trade(&self, market: &str, request: TradeRequest) -> Result<TradeResponse> {
        self.private_request(&format!("trade/{market}"), request.into_params())
            .await
    }

    /// Get the account's trade history, paginated
    ///
    /// POST /remote/v2/private/tradehistory/?nonce={nonce}
    pub async fn get_trade_history(&self, page: Option<u32>) -> Result<TradeHistoryResponse> {
        self.private_request("tradehistory", page_params(page)).await
    }

    /// Get the account's deposit history, paginated
    ///
    /// POST /remote/v2/private/getdeposithistory/?nonce={nonce}
    pub async fn get_deposit_history(&self, page: Option<u32>) -> Result<DepositHistoryResponse> {
        self.private_request("getdeposithistory", page_params(page))
            .await
    }

    /// Get the account's withdrawal history, paginated
    ///
    /// POST /remote/v2/private/getwithdrawalhistory/?nonce={nonce}
    pub async fn get_withdrawal_history(
        &self,
        page: Option<u32>,
    ) -> Result<WithdrawalHistoryResponse> {
        self.private_request("getwithdrawalhistory", page_params(page))
            .await
    }
}

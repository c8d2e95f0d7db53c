/*
[INPUT]:  Currency codes and signed credentials
[OUTPUT]: Account data (balances, deposits, addresses, wallet status)
[POS]:    HTTP layer - private account endpoints
[UPDATE]: When adding new account endpoints or changing query parameters
*/

use crate::http::client::{NovaClient, Params};
use crate::http::error::Result;
use crate::types::{
    BalancesResponse, DepositAddressResponse, DepositsResponse, WalletStatusResponse,
    WithdrawalsResponse,
};

impl NovaClient {
    /// Get the balance info for all available wallets
    ///
    /// POST /remote/v2/private/getbalances/?nonce={nonce}
    pub async fn get_balances(&self) -> Result<BalancesResponse> {
        self.private_request("getbalances", Params::new()).await
    }

    /// Get the balance info for a single currency, e.g. "BTC"
    ///
    /// POST /remote/v2/private/getbalance/{currency}/?nonce={nonce}
    pub async fn get_balance(&self, currency: &str) -> Result<BalancesResponse> {
        self.private_request(&format!("getbalance/{currency}"), Params::new())
            .await
    }

    /// Get current incoming deposits
    ///
    /// POST /remote/v2/private/getdeposits/?nonce={nonce}
    pub async fn get_deposits(&self) -> Result<DepositsResponse> {
        self.private_request("getdeposits", Params::new()).await
    }

    /// Get current outgoing withdrawals
    ///
    /// POST /remote/v2/private/getwithdrawals/?nonce={nonce}
    pub async fn get_withdrawals(&self) -> Result<WithdrawalsResponse> {
        self.private_request("getwithdrawals", Params::new()).await
    }

    /// Create a fresh deposit address for a currency
    ///
    /// POST /remote/v2/private/getnewdepositaddress/{currency}/?nonce={nonce}
    pub async fn get_new_deposit_address(&self, currency: &str) -> Result<DepositAddressResponse> {
        self.private_request(&format!("getnewdepositaddress/{currency}"), Params::new())
            .await
    }

    /// Get the existing deposit address for a currency
    ///
    /// POST /remote/v2/private/getdepositaddress/{currency}/?nonce={nonce}
    pub async fn get_deposit_address(&self, currency: &str) -> Result<DepositAddressResponse> {
        self.private_request(&format!("getdepositaddress/{currency}"), Params::new())
            .await
    }

    /// Get coin info and wallet status, for one currency or all of them
    ///
    /// POST /remote/v2/private/walletstatus[/{currency}]/?nonce={nonce}
    pub async fn get_wallet_status(&self, currency: Option<&str>) -> Result<WalletStatusResponse> {
        let method = match currency {
            Some(currency) => format!("walletstatus/{currency}"),
            None => "walletstatus".to_string(),
        };

        self.private_request(&method, Params::new()).await
    }
}

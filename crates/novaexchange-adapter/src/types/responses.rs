/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::ApiStatus;
use super::models::{
    Balance, Deposit, MarketOrder, MarketSummary, MarketTrade, OpenOrder, TradeHistoryEntry,
    WalletInfo, Withdrawal,
};

/// Page indicator on history-style endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub total_pages: u32,
}

/// Markets listing and single-market info share this shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketsResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub message: String,
    pub markets: Vec<MarketSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketOrderHistoryResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub message: String,
    pub items: Vec<MarketTrade>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketOpenOrdersResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub buyorders: Vec<MarketOrder>,
    #[serde(default)]
    pub sellorders: Vec<MarketOrder>,
}

/// All-wallet and single-currency balance queries share this shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalancesResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub message: String,
    pub balances: Vec<Balance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositsResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub message: String,
    pub items: Vec<Deposit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalsResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub message: String,
    pub items: Vec<Withdrawal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositAddressResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub message: String,
    pub address: String,
    #[serde(default)]
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenOrdersResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub message: String,
    pub items: Vec<OpenOrder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelOrderResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub message: String,
    /// Present when the order rests on the book instead of filling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orderid: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeHistoryResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub message: String,
    pub items: Vec<TradeHistoryEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositHistoryResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub message: String,
    pub items: Vec<Deposit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalHistoryResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub message: String,
    pub items: Vec<Withdrawal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletStatusResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub message: String,
    pub items: Vec<WalletInfo>,
}

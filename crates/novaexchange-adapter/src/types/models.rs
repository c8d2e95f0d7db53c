/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{TradeSide, WalletHealth};

/// One market row from the summary listing or the single-market info call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSummary {
    /// Pair name in BASE_QUOTE form, e.g. "BTC_DOGE"
    pub marketname: String,
    #[serde(default)]
    pub marketid: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub last_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub high24h: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub low24h: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub bid: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub ask: Decimal,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[serde(default)]
    pub change24h: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str")]
    pub volume24h: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basecurrency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// Executed trade from a market's public order history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketTrade {
    pub tradetype: TradeSide,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(default)]
    pub unix_t_datestamp: i64,
}

/// Resting order on a market's public book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketOrder {
    pub tradetype: TradeSide,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
}

/// Wallet balance for a single currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub currency: String,
    /// Spendable amount
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// Amount locked in open orders
    #[serde(with = "rust_decimal::serde::str")]
    pub amount_trades: Decimal,
    /// Amount held in the lockbox
    #[serde(with = "rust_decimal::serde::str")]
    pub amount_lockbox: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount_total: Decimal,
}

/// Incoming deposit, pending or settled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deposit {
    pub currency: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_seen: Option<String>,
}

/// Outgoing withdrawal, pending or settled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Withdrawal {
    pub currency: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_sent: Option<String>,
}

/// One of the account's own open orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenOrder {
    pub orderid: u64,
    pub market: String,
    pub tradetype: TradeSide,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Settled entry from the account's trade history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeHistoryEntry {
    pub market: String,
    pub tradetype: TradeSide,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[serde(default)]
    pub fee: Option<Decimal>,
    #[serde(default)]
    pub unix_t_datestamp: i64,
}

/// Coin info and wallet health from the walletstatus endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletInfo {
    pub currency: String,
    pub status: WalletHealth,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coinname: Option<String>,
}

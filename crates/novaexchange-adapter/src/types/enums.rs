/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Order side as the exchange spells it on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeSide {
    Buy,
    Sell,
    /// Both sides at once, accepted by the open-orders book endpoint
    Both,
}

impl TradeSide {
    /// Wire form, also used as a path segment
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeSide::Buy => "BUY",
            TradeSide::Sell => "SELL",
            TradeSide::Both => "BOTH",
        }
    }
}

impl std::fmt::Display for TradeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Envelope status flag present on every well-formed response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Error,
}

/// Wallet health as reported by the walletstatus endpoint
///
/// Upstream documents the numeric codes 0 through 6; anything else is
/// folded into `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum WalletHealth {
    Ok,
    Maintenance,
    NotSynced,
    NotAvailable,
    Offline,
    Unknown,
    Delisting,
}

impl From<u8> for WalletHealth {
    fn from(code: u8) -> Self {
        match code {
            0 => WalletHealth::Ok,
            1 => WalletHealth::Maintenance,
            2 => WalletHealth::NotSynced,
            3 => WalletHealth::NotAvailable,
            4 => WalletHealth::Offline,
            6 => WalletHealth::Delisting,
            _ => WalletHealth::Unknown,
        }
    }
}

impl From<WalletHealth> for u8 {
    fn from(health: WalletHealth) -> Self {
        match health {
            WalletHealth::Ok => 0,
            WalletHealth::Maintenance => 1,
            WalletHealth::NotSynced => 2,
            WalletHealth::NotAvailable => 3,
            WalletHealth::Offline => 4,
            WalletHealth::Unknown => 5,
            WalletHealth::Delisting => 6,
        }
    }
}

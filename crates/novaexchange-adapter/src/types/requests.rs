/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs mapped to form fields
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;

use super::enums::TradeSide;
use crate::http::client::Params;

/// Order placement parameters for the trade endpoint
///
/// Maps onto the upstream form fields tradetype / tradeamount /
/// tradeprice / tradebase.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeRequest {
    pub trade_type: TradeSide,
    pub amount: Decimal,
    pub price: Decimal,
    /// When true, `amount` is denominated in the base currency instead of
    /// the market currency (upstream tradebase = 1).
    pub base_amount: bool,
}

impl TradeRequest {
    pub(crate) fn into_params(self) -> Params {
        let mut params = Params::new();
        params.insert("tradetype", self.trade_type.as_str().to_string());
        params.insert("tradeamount", self.amount.to_string());
        params.insert("tradeprice", self.price.to_string());
        params.insert(
            "tradebase",
            if self.base_amount { "1" } else { "0" }.to_string(),
        );
        params
    }
}

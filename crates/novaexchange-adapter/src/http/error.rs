/*
[INPUT]:  Error sources (HTTP transport, status, parsing, exchange codes)
[OUTPUT]: Structured error types with context and machine-readable codes
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or exchange error codes
*/

use thiserror::Error;

/// Main error type for the NovaExchange adapter
#[derive(Error, Debug)]
pub enum NovaError {
    /// HTTP transport failed (DNS, connection, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a status outside [200, 300)
    #[error("HTTP status code {code} returned from {context}")]
    Status { code: u16, context: String },

    /// Response body was not valid JSON
    #[error("could not parse response from {context}: {body}")]
    Parse { body: String, context: String },

    /// Well-formed JSON body carrying an exchange error code
    #[error("error code {code} returned from {context}, message: \"{message}\"")]
    Api {
        code: i64,
        message: String,
        context: String,
    },

    /// Valid JSON that did not match the expected response shape
    #[error("response decoding failed: {0}")]
    Decode(#[from] serde_json::Error),

    /// Signed endpoint called without api_key and secret configured
    #[error("must provide api_key and secret to make this API request")]
    MissingCredentials,

    /// Server URL could not be parsed
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl NovaError {
    /// Machine-readable code for programmatic branching, where one exists:
    /// the HTTP status or the exchange's own error code.
    pub fn code(&self) -> Option<i64> {
        match self {
            NovaError::Status { code, .. } => Some(i64::from(*code)),
            NovaError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Check if the error points at credentials or signing rather than the
    /// request itself
    pub fn is_auth_error(&self) -> bool {
        match self {
            NovaError::MissingCredentials => true,
            // 10005 key does not exist, 10007 signature mismatch,
            // 10017 API authorization error
            NovaError::Api { code, .. } => matches!(code, 10005 | 10007 | 10017),
            _ => false,
        }
    }

    /// Check if the error is plausibly transient. The adapter itself never
    /// retries; callers own retry policy.
    pub fn is_retryable(&self) -> bool {
        match self {
            NovaError::Http(_) => true,
            NovaError::Status { code, .. } => *code >= 500,
            // 10001 requests too frequent, 10003 restricted list request
            NovaError::Api { code, .. } => matches!(code, 10001 | 10003 | 503),
            _ => false,
        }
    }
}

/// Result type alias for NovaExchange operations
pub type Result<T> = std::result::Result<T, NovaError>;

/// Map a NovaExchange error code to its documented message
///
/// The table ships verbatim from the exchange's API documentation; unknown
/// codes fall back to a generic message instead of failing silently.
pub fn map_error_code(error_code: i64) -> String {
    let message = match error_code {
        10000 => "Required parameter can not be null",
        10001 => "Requests are too frequent",
        10002 => "System Error",
        10003 => "Restricted list request, please try again later",
        10004 => "IP restriction",
        10005 => "Key does not exist",
        10006 => "User does not exist",
        10007 => "Signatures do not match",
        10008 => "Illegal parameter",
        10009 => "Order does not exist",
        10010 => "Insufficient balance",
        10011 => "Order is less than minimum trade amount",
        10012 => "Unsupported symbol (not btc_usd or ltc_usd)",
        10013 => "This interface only accepts https requests",
        10014 => "Order price must be between 0 and 1,000,000",
        10015 => "Order price differs from current market price too much",
        10016 => "Insufficient coins balance",
        10017 => "API authorization error",
        10026 => "Loan (including reserved loan) and margin cannot be withdrawn",
        10027 => "Cannot withdraw within 24 hrs of authentication information modification",
        10028 => "Withdrawal amount exceeds daily limit",
        10029 => "Account has unpaid loan, please cancel/pay off the loan before withdraw",
        10031 => "Deposits can only be withdrawn after 6 confirmations",
        10032 => "Please enabled phone/google authenticator",
        10033 => "Fee higher than maximum network transaction fee",
        10034 => "Fee lower than minimum network transaction fee",
        10035 => "Insufficient BTC/LTC",
        10036 => "Withdrawal amount too low",
        10037 => "Trade password not set",
        10040 => "Withdrawal cancellation fails",
        10041 => "Withdrawal address not approved",
        10042 => "Admin password error",
        10100 => "User account frozen",
        10216 => "Non-available API",
        503 => "Too many requests (Http)",
        unknown => return format!("Unknown NovaExchange error code: {unknown}"),
    };

    message.to_string()
}

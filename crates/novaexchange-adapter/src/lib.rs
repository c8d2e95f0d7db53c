/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public NovaExchange adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    Credentials,
    NovaClient,
    NovaError,
    RequestSigner,
    Result,
    generate_nonce,
};

// Re-export all types
pub use types::*;

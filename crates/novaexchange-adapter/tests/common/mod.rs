/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for novaexchange-adapter tests

use novaexchange_adapter::{ClientConfig, Credentials, NovaClient};
use wiremock::MockServer;

#[allow(dead_code)]
pub const TEST_API_KEY: &str = "test-api-key";
#[allow(dead_code)]
pub const TEST_SECRET: &str = "test-api-secret";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server, with test credentials configured
pub fn signed_test_client(server_url: &str) -> NovaClient {
    let mut client = unsigned_test_client(server_url);
    client.set_credentials(Credentials::new(TEST_API_KEY, TEST_SECRET));
    client
}

/// Client pointed at the mock server, without credentials
#[allow(dead_code)]
pub fn unsigned_test_client(server_url: &str) -> NovaClient {
    let config = ClientConfig {
        server_url: server_url.to_string(),
        ..ClientConfig::default()
    };
    NovaClient::with_config(config).expect("client init")
}

/// Decode a form-urlencoded request body into (key, value) pairs
#[allow(dead_code)]
pub fn decode_form_body(body: &[u8]) -> Vec<(String, String)> {
    url::form_urlencoded::parse(body)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

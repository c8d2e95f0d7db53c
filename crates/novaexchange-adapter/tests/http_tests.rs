/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for the transport executor's outcome classification
[POS]:    Integration tests - HTTP client and error mapping
[UPDATE]: When executor classification or error mapping changes
*/

mod common;

use common::{setup_mock_server, signed_test_client, unsigned_test_client};
use novaexchange_adapter::{ClientConfig, Credentials, NovaClient, NovaError};
use tokio_test::assert_ok;
use wiremock::matchers::method;
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_creation() {
    let _client = assert_ok!(NovaClient::new());
}

#[test]
fn test_client_with_config() {
    let config = ClientConfig::default();
    let _client = assert_ok!(NovaClient::with_config(config));
}

#[test]
fn test_client_rejects_bad_server_url() {
    let config = ClientConfig {
        server_url: "not a url".to_string(),
        ..ClientConfig::default()
    };
    assert!(matches!(
        NovaClient::with_config(config),
        Err(NovaError::UrlParse(_))
    ));
}

#[test]
fn test_client_credentials_roundtrip() {
    let mut client = assert_ok!(NovaClient::new());
    client.set_credentials(Credentials::new("key", "secret"));

    let stored = client.credentials().expect("credentials should be set");
    assert_eq!(stored.api_key, "key");
    assert_eq!(stored.secret, "secret");
}

#[test]
fn test_credentials_debug_redacts_secret() {
    let rendered = format!("{:?}", Credentials::new("key", "hunter2"));
    assert!(rendered.contains("key"));
    assert!(!rendered.contains("hunter2"));
}

#[tokio::test]
async fn test_http_status_maps_to_status_error() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = signed_test_client(&server.uri());
    let error = client.get_balances().await.unwrap_err();

    match &error {
        NovaError::Status { code, context } => {
            assert_eq!(*code, 503);
            assert!(context.contains("getbalances"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
    assert_eq!(error.code(), Some(503));
    assert!(error.is_retryable());
}

#[tokio::test]
async fn test_embedded_error_code_maps_to_api_error() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "error_code": 10010 })),
        )
        .mount(&server)
        .await;

    let client = signed_test_client(&server.uri());
    let error = client.get_balances().await.unwrap_err();

    match error {
        NovaError::Api { code, ref message, .. } => {
            assert_eq!(code, 10010);
            assert_eq!(message, "Insufficient balance");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unknown_error_code_gets_fallback_message() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "error_code": 42424 })),
        )
        .mount(&server)
        .await;

    let client = signed_test_client(&server.uri());
    let error = client.get_balances().await.unwrap_err();

    match error {
        NovaError::Api { code, ref message, .. } => {
            assert_eq!(code, 42424);
            assert_eq!(message, "Unknown NovaExchange error code: 42424");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_maps_to_parse_error() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let client = signed_test_client(&server.uri());
    let error = client.get_balances().await.unwrap_err();

    match error {
        NovaError::Parse { ref body, .. } => assert_eq!(body, "{not json"),
        other => panic!("expected Parse error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_shape_mismatch_maps_to_decode_error() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = signed_test_client(&server.uri());
    let error = client.get_balances().await.unwrap_err();

    assert!(matches!(error, NovaError::Decode(_)));
}

#[tokio::test]
async fn test_missing_credentials_makes_no_http_call() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = unsigned_test_client(&server.uri());

    let private_error = client.get_balances().await.unwrap_err();
    assert!(matches!(private_error, NovaError::MissingCredentials));
    assert!(private_error.is_auth_error());

    // market requests are signed upstream as well
    let market_error = client.get_market_summary("BTC_XZC").await.unwrap_err();
    assert!(matches!(market_error, NovaError::MissingCredentials));

    server.verify().await;
}

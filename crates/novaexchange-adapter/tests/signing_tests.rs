/*
[INPUT]:  Mock HTTP responses and recorded requests
[OUTPUT]: Test results for URL construction, nonces, and signed fields
[POS]:    Integration tests - request signing and wire shape
[UPDATE]: When URL shapes, headers, or signed fields change
*/

mod common;

use common::{
    TEST_API_KEY, TEST_SECRET, decode_form_body, setup_mock_server, signed_test_client,
};
use novaexchange_adapter::RequestSigner;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

fn empty_markets_body() -> serde_json::Value {
    serde_json::json!({
        "status": "success",
        "message": "Data for all markets",
        "markets": []
    })
}

#[tokio::test]
async fn test_markets_listing_url_has_no_nonce() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/remote/v2/markets/markets/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_markets_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = signed_test_client(&server.uri());
    client
        .list_markets_summary(None)
        .await
        .expect("markets listing failed");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_filtered_markets_listing_url_has_nonce() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/remote/v2/markets/markets/BTC/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_markets_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = signed_test_client(&server.uri());
    client
        .list_markets_summary(Some("BTC"))
        .await
        .expect("filtered markets listing failed");

    let requests = server.received_requests().await.unwrap();
    let query = requests[0].url.query().expect("expected a query string");
    assert!(query.starts_with("nonce="));
}

#[tokio::test]
async fn test_private_url_has_nonce_and_signed_fields() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/remote/v2/private/getbalances/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success",
            "message": "",
            "balances": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = signed_test_client(&server.uri());
    client.get_balances().await.expect("getbalances failed");

    let requests = server.received_requests().await.unwrap();
    let request = &requests[0];

    let nonce: u64 = request
        .url
        .query_pairs()
        .find(|(key, _)| key == "nonce")
        .expect("nonce missing from URL")
        .1
        .parse()
        .expect("nonce is not an integer");
    assert!(nonce > 1_700_000_000);

    let form = decode_form_body(&request.body);
    let field = |name: &str| {
        form.iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    };

    assert_eq!(field("apikey"), Some(TEST_API_KEY));

    // the signature must cover the URL exactly as sent, nonce included
    let expected = RequestSigner::new(TEST_SECRET).sign_url(request.url.as_str());
    assert_eq!(field("signature"), Some(expected.as_str()));

    let content_type = request
        .headers
        .get("content-type")
        .expect("content-type missing")
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("application/x-www-form-urlencoded"));

    let user_agent = request
        .headers
        .get("user-agent")
        .expect("user-agent missing")
        .to_str()
        .unwrap();
    assert!(user_agent.starts_with("novaexchange-adapter/"));
}

#[tokio::test]
async fn test_market_requests_are_signed_too() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/remote/v2/markets/info/BTC_XZC/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_markets_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = signed_test_client(&server.uri());
    client
        .get_market_summary("BTC_XZC")
        .await
        .expect("market summary failed");

    let requests = server.received_requests().await.unwrap();
    let form = decode_form_body(&requests[0].body);

    assert!(form.iter().any(|(key, _)| key == "apikey"));
    assert!(form.iter().any(|(key, _)| key == "signature"));
}

#[tokio::test]
async fn test_form_body_keys_are_sorted() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/remote/v2/private/tradehistory/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success",
            "message": "",
            "items": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = signed_test_client(&server.uri());
    client
        .get_trade_history(Some(3))
        .await
        .expect("trade history failed");

    let requests = server.received_requests().await.unwrap();
    let keys: Vec<String> = decode_form_body(&requests[0].body)
        .into_iter()
        .map(|(key, _)| key)
        .collect();

    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
    assert!(keys.contains(&"page".to_string()));
}

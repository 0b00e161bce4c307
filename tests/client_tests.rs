//! End-to-end search flow against a mock MISP server.

use chrono::NaiveDate;
use mispclient::{Client, ClientConfig, Error, SearchRequest};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn client_for(server: &MockServer) -> Client {
    Client::new(ClientConfig::new(server.uri()).with_api_key("testkey")).expect("Client")
}

#[tokio::test]
async fn search_posts_exact_wire_body_and_preserves_result_order() {
    let server = MockServer::start().await;

    let expected_body = serde_json::json!({
        "request": {
            "from": "2021-01-01",
            "to": "2021-01-31",
            "type": "ip-dst"
        }
    });
    let canned = serde_json::json!({
        "response": [
            { "Event": { "id": "11", "uuid": "aaa", "info": "first" } },
            { "Event": { "id": "7", "uuid": "bbb", "info": "second" } }
        ]
    });

    Mock::given(method("POST"))
        .and(path("/events/restSearch/download"))
        .and(body_json(expected_body))
        .and(header("Authorization", "testkey"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(canned))
        .expect(1)
        .mount(&server)
        .await;

    let request = SearchRequest::new()
        .with_from(date(2021, 1, 1))
        .with_to(date(2021, 1, 31))
        .with_type("ip-dst");

    let results = client_for(&server).search(&request).await.expect("search");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].event.id, "11");
    assert_eq!(results[0].event.info, "first");
    assert_eq!(results[1].event.id, "7");
}

#[tokio::test]
async fn search_omits_empty_value_and_type_from_wire_body() {
    let server = MockServer::start().await;

    let expected_body = serde_json::json!({
        "request": { "from": "2021-02-01", "to": "2021-02-02" }
    });

    Mock::given(method("POST"))
        .and(path("/events/restSearch/download"))
        .and(body_json(expected_body))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "response": [] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request = SearchRequest::new()
        .with_from(date(2021, 2, 1))
        .with_to(date(2021, 2, 2))
        .with_value("")
        .with_type("");

    let results = client_for(&server).search(&request).await.expect("search");
    assert!(results.is_empty());
}

#[tokio::test]
async fn non_success_status_surfaces_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/events/restSearch/download"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Authentication failed"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .search(&SearchRequest::new())
        .await
        .unwrap_err();

    match err {
        Error::Status { status, body, .. } => {
            assert_eq!(status.as_u16(), 403);
            assert!(body.contains("Authentication failed"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn long_error_body_is_truncated_on_a_char_boundary() {
    let server = MockServer::start().await;

    // 499 ASCII bytes followed by a three-byte char straddling the 500-byte
    // truncation point.
    let long_body = format!("{}€ and more", "x".repeat(499));

    Mock::given(method("POST"))
        .and(path("/events/restSearch/download"))
        .respond_with(ResponseTemplate::new(500).set_body_string(long_body))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .search(&SearchRequest::new())
        .await
        .unwrap_err();

    match err {
        Error::Status { status, body, .. } => {
            assert_eq!(status.as_u16(), 500);
            assert!(body.starts_with("xxx"));
            assert!(body.ends_with('…'));
            assert!(!body.contains("and more"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn envelope_without_response_key_is_envelope_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/events/restSearch/download"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "foo": 1 })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .search(&SearchRequest::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Envelope(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    // Nothing listens on the discard port.
    let client = Client::new(ClientConfig::new("http://127.0.0.1:9")).expect("Client");

    let err = client.search(&SearchRequest::new()).await.unwrap_err();
    assert!(matches!(err, Error::Transport { .. }), "got {err:?}");
}

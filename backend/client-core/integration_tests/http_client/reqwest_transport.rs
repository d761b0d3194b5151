use client_core::config::HttpSettings;
use client_core::error::transport::TransportSetupError;
use client_core::transport::ReqwestTransport;
use client_core::{ClientError, ClientResult, HttpClient};

use std::sync::mpsc;
use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// ReqwestTransport against a real HTTP server
// These exercise the production transport end to end through HttpClient
// ============================================================================

#[derive(Debug, PartialEq, Eq, Deserialize)]
struct MockEntity {
    title: String,
    subtitle: String,
}

fn client() -> HttpClient<ReqwestTransport> {
    let transport = ReqwestTransport::new(&HttpSettings::default())
        .expect("Transport should build inside a Tokio runtime");
    HttpClient::new(transport)
}

async fn server_responding(status: u16, body: Option<serde_json::Value>) -> MockServer {
    let server = MockServer::start().await;
    let template = match body {
        Some(body) => ResponseTemplate::new(status).set_body_json(body),
        None => ResponseTemplate::new(status),
    };
    Mock::given(method("GET"))
        .and(path("/entity"))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

/// **VALUE**: Verifies a real 200 JSON response decodes into the target type.
///
/// **WHY THIS MATTERS**: Unit tests use a stub; this proves the reqwest mapping (status,
/// body bytes) feeds the classifier correctly.
///
/// **BUG THIS CATCHES**: Would catch body bytes being lost or status mis-converted.
#[tokio::test]
async fn given_server_returns_200_json_when_fetch_then_returns_decoded_value() {
    // GIVEN: A server returning the entity
    let server = server_responding(200, Some(json!({"title": "A", "subtitle": "B"}))).await;

    // WHEN: Fetching through the production transport
    let result: ClientResult<MockEntity> = client().fetch(&format!("{}/entity", server.uri())).await;

    // THEN: Decoded value
    assert_eq!(
        result,
        Ok(MockEntity {
            title: "A".to_string(),
            subtitle: "B".to_string(),
        })
    );
}

/// **VALUE**: Verifies server status codes reach the classification table.
#[tokio::test]
async fn given_server_error_statuses_when_fetch_then_maps_to_taxonomy() {
    let cases = [
        (403, ClientError::AuthenticationRequired),
        (404, ClientError::CouldNotFindHost),
        (500, ClientError::BadRequest),
        (401, ClientError::unexpected()),
        (503, ClientError::unexpected()),
    ];

    for (status, expected) in cases {
        let server = server_responding(status, Some(json!({"status_message": "nope"}))).await;

        let result: ClientResult<MockEntity> =
            client().fetch(&format!("{}/entity", server.uri())).await;

        assert_eq!(result, Err(expected), "status {status}");
    }
}

/// **VALUE**: Verifies an empty 200 body is a parse failure, not BrokenData.
///
/// **WHY THIS MATTERS**: HTTP always yields a (possibly empty) body once a response
/// arrives. BrokenData is reserved for transports that deliver no body at all.
#[tokio::test]
async fn given_server_returns_empty_200_when_fetch_then_returns_could_not_parse_object() {
    let server = server_responding(200, None).await;

    let result: ClientResult<MockEntity> = client().fetch(&format!("{}/entity", server.uri())).await;

    assert_eq!(result, Err(ClientError::CouldNotParseObject));
}

/// **VALUE**: Verifies connection failures become Unknown with the transport's description.
///
/// **BUG THIS CATCHES**: Would catch a panic or hang on refused connections.
#[tokio::test]
async fn given_unreachable_server_when_fetch_then_returns_unknown_with_description() {
    // GIVEN: A port with nothing listening
    let unreachable = "http://127.0.0.1:1/entity";

    // WHEN: Fetching
    let result: ClientResult<MockEntity> = client().fetch(unreachable).await;

    // THEN: Unknown with a non-empty description
    match result {
        Err(ClientError::Unknown(description)) => assert!(!description.is_empty()),
        other => panic!("Expected Unknown, got {other:?}"),
    }
}

/// **VALUE**: Verifies the configured user agent is sent.
#[tokio::test]
async fn given_custom_user_agent_when_fetch_then_server_sees_it() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/entity"))
        .and(header("user-agent", "moviedb-tests/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"title": "A", "subtitle": "B"})))
        .expect(1)
        .mount(&server)
        .await;

    let settings = HttpSettings {
        user_agent: "moviedb-tests/1.0".to_string(),
        ..HttpSettings::default()
    };
    let client = HttpClient::new(ReqwestTransport::new(&settings).unwrap());

    let result: ClientResult<MockEntity> = client.fetch(&format!("{}/entity", server.uri())).await;

    assert!(result.is_ok());
}

/// **VALUE**: Verifies building the transport outside a runtime is a located error.
///
/// **WHY THIS MATTERS**: The transport spawns on Tokio. Constructing it from plain sync
/// code must fail clearly at setup, not later when a request is resumed.
#[test]
fn given_no_runtime_when_transport_built_then_returns_no_runtime_error() {
    let result = ReqwestTransport::new(&HttpSettings::default());

    match result {
        Err(err @ TransportSetupError::NoRuntime { .. }) => {
            assert!(err.to_string().contains("No Runtime Error"));
        }
        Err(other) => panic!("Expected NoRuntime, got {other}"),
        Ok(_) => panic!("Expected NoRuntime, got a transport"),
    }
}

/// **VALUE**: Verifies an in-flight request completes once when its runtime shuts down.
///
/// **WHY THIS MATTERS**: Shutting the runtime down drops the spawned request task and
/// the completion inside it. Callback users must still hear back exactly once.
///
/// **BUG THIS CATCHES**: Would catch the completion being dropped silently with the
/// cancelled task.
#[tokio::test(flavor = "multi_thread")]
async fn given_runtime_shut_down_mid_request_when_request_data_then_completes_with_unknown() {
    // GIVEN: A slow server and a transport bound to a separate runtime
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/entity"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"title": "A", "subtitle": "B"}))
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&server)
        .await;

    let transport_runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .expect("Runtime should build");
    let transport = {
        let _entered = transport_runtime.enter();
        ReqwestTransport::new(&HttpSettings::default()).expect("Transport should build")
    };
    let client = HttpClient::new(transport);
    let (sender, receiver) = mpsc::channel();

    // WHEN: The runtime goes away while the request is waiting on the server
    client.request_data(
        &format!("{}/entity", server.uri()),
        move |result: ClientResult<MockEntity>| {
            let _ = sender.send(result);
        },
    );
    transport_runtime.shutdown_background();

    // THEN: One Unknown result, and no second completion
    let result = receiver
        .recv_timeout(Duration::from_secs(5))
        .expect("Completion must fire after shutdown");
    assert_eq!(
        result,
        Err(ClientError::Unknown(
            "Transport dropped the request.".to_string()
        ))
    );
    assert!(receiver.recv_timeout(Duration::from_millis(100)).is_err());
}

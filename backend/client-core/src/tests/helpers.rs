//! Shared fixtures for client-core unit tests.

use crate::error::ClientResult;
use crate::http_client::HttpClient;
use crate::tests::stub::StubTransport;
use crate::transport::TransportOutcome;

use std::sync::{Arc, Mutex};

use serde::Deserialize;

/// Minimal decode target with two required fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MockEntity {
    pub title: String,
    pub subtitle: String,
}

pub const VALID_ENDPOINT: &str = "https://www.example.com/entity";
pub const MOCK_ENTITY_JSON: &[u8] = br#"{"title":"A","subtitle":"B"}"#;
pub const NON_JSON_BODY: &[u8] = b"someData";

/// Run one `request_data` call against a synchronous stub.
///
/// Returns every result the completion received (so callers can assert it
/// fired exactly once) and the stub for call inspection.
pub fn run_request(
    outcome: TransportOutcome,
    endpoint: &str,
) -> (Vec<ClientResult<MockEntity>>, StubTransport) {
    let stub = StubTransport::new(outcome);
    let client = HttpClient::new(stub.clone());

    let results = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&results);
    client.request_data(endpoint, move |result: ClientResult<MockEntity>| {
        sink.lock().unwrap().push(result);
    });

    let collected = results.lock().unwrap().clone();
    (collected, stub)
}

/// Like [`run_request`] but asserts exactly one completion and returns it.
pub fn single_result(outcome: TransportOutcome) -> ClientResult<MockEntity> {
    let (mut results, _) = run_request(outcome, VALID_ENDPOINT);
    assert_eq!(results.len(), 1, "Completion must fire exactly once");
    results.remove(0)
}

use crate::config::HttpSettings;
use crate::error::transport::TransportSetupError;
use crate::transport::{
    ResponseMetadata, Transport, TransportCompletion, TransportOutcome, TransportTask,
};

use common::HttpStatusCode;

use log::trace;
use reqwest::Client;
use tokio::runtime::Handle;
use url::Url;

/// Production transport: one GET per request on a Tokio runtime.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
    runtime: Handle,
}

impl ReqwestTransport {
    /// Build a transport bound to the current Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`TransportSetupError::NoRuntime`] outside a Tokio runtime and
    /// [`TransportSetupError::Build`] if the reqwest client cannot be built.
    #[track_caller]
    pub fn new(settings: &HttpSettings) -> Result<Self, TransportSetupError> {
        let runtime = Handle::try_current()?;
        let client = Client::builder()
            .timeout(settings.timeout())
            .user_agent(settings.user_agent.as_str())
            .build()?;

        Ok(Self { client, runtime })
    }
}

impl Transport for ReqwestTransport {
    fn perform_request(&self, url: Url, completion: TransportCompletion) -> Box<dyn TransportTask> {
        Box::new(ReqwestTask {
            client: self.client.clone(),
            runtime: self.runtime.clone(),
            url,
            completion,
        })
    }
}

struct ReqwestTask {
    client: Client,
    runtime: Handle,
    url: Url,
    completion: TransportCompletion,
}

impl TransportTask for ReqwestTask {
    fn resume(self: Box<Self>) {
        let ReqwestTask {
            client,
            runtime,
            url,
            completion,
        } = *self;

        runtime.spawn(async move {
            let outcome = execute(&client, url).await;
            completion(outcome);
        });
    }
}

async fn execute(client: &Client, url: Url) -> TransportOutcome {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => return TransportOutcome::failed(e.to_string()),
    };

    let status = HttpStatusCode::from(response.status().as_u16());
    trace!("Transport received status {status}");

    match response.bytes().await {
        Ok(bytes) => TransportOutcome::http(status, Some(bytes.to_vec())),
        Err(e) => TransportOutcome::default()
            .with_response(Some(ResponseMetadata::Http { status }))
            .with_error(e.to_string()),
    }
}

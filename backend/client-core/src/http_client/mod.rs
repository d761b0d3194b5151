//! Typed HTTP client.
//!
//! [`HttpClient::request_data`] runs one request/response cycle and calls its
//! completion exactly once with either the decoded value or a classified
//! [`ClientError`]. Nothing is retried, cached or thrown past this boundary.

pub mod classify;

pub use classify::{classify_outcome, classify_status, decode_outcome};

use crate::delivery::{DeliveryContext, InlineDelivery};
use crate::endpoint::{Endpoint, redacted};
use crate::error::{ClientError, ClientResult};
use crate::transport::{ReqwestTransport, Transport};

use std::sync::Arc;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use tokio::sync::oneshot;

const TRANSPORT_DROPPED_MESSAGE: &str = "Transport dropped the request.";

pub struct HttpClient<T: Transport = ReqwestTransport> {
    transport: T,
    delivery: Arc<dyn DeliveryContext>,
}

impl<T: Transport> HttpClient<T> {
    /// Client that delivers completions inline on the transport's thread.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            delivery: Arc::new(InlineDelivery),
        }
    }

    /// Route every `request_data` completion through `delivery`.
    pub fn with_delivery(mut self, delivery: Arc<dyn DeliveryContext>) -> Self {
        self.delivery = delivery;
        self
    }

    /// Request `endpoint` and decode the body into `R`.
    ///
    /// `completion` runs exactly once, through the client's delivery context,
    /// even when the transport drops the request without answering.
    /// An endpoint that fails to resolve completes with
    /// [`ClientError::UrlNotFound`] without touching the transport.
    pub fn request_data<R, E, F>(&self, endpoint: &E, completion: F)
    where
        R: DeserializeOwned + Send + 'static,
        E: Endpoint + ?Sized,
        F: FnOnce(ClientResult<R>) + Send + 'static,
    {
        self.submit(endpoint, Arc::clone(&self.delivery), completion);
    }

    /// Async form of [`request_data`](Self::request_data).
    ///
    /// The result is returned on the awaiting task; the delivery context is
    /// not involved. A transport that drops the request resolves to
    /// `Unknown("Transport dropped the request.")`.
    pub async fn fetch<R, E>(&self, endpoint: &E) -> ClientResult<R>
    where
        R: DeserializeOwned + Send + 'static,
        E: Endpoint + ?Sized,
    {
        let (sender, receiver) = oneshot::channel();

        self.submit(endpoint, Arc::new(InlineDelivery), move |result| {
            // Receiver gone means the caller stopped waiting.
            let _ = sender.send(result);
        });

        receiver.await.unwrap_or_else(|_| {
            warn!("{TRANSPORT_DROPPED_MESSAGE}");
            Err(ClientError::Unknown(TRANSPORT_DROPPED_MESSAGE.to_string()))
        })
    }

    fn submit<R, E, F>(&self, endpoint: &E, delivery: Arc<dyn DeliveryContext>, completion: F)
    where
        R: DeserializeOwned + Send + 'static,
        E: Endpoint + ?Sized,
        F: FnOnce(ClientResult<R>) + Send + 'static,
    {
        let pending = PendingCompletion::new(delivery, completion);

        let url = match endpoint.resolve() {
            Ok(url) => url,
            Err(error) => {
                warn!("Request not sent: {error}");
                pending.complete(Err(error));
                return;
            }
        };

        let shown = redacted(&url);
        debug!("Requesting {shown}");

        let task = self.transport.perform_request(
            url,
            Box::new(move |outcome| {
                let result = decode_outcome::<R>(outcome);
                match &result {
                    Ok(_) => debug!("Request to {shown} succeeded"),
                    Err(e) => warn!("Request to {shown} failed: {e}"),
                }
                pending.complete(result);
            }),
        );

        task.resume();
    }
}

/// Caller completion that has not fired yet.
///
/// Dropping it unfired (a transport discarding its completion, or a runtime
/// shutting down under an in-flight request) delivers
/// `Unknown("Transport dropped the request.")` instead.
struct PendingCompletion<R: Send + 'static> {
    delivery: Arc<dyn DeliveryContext>,
    completion: Option<Box<dyn FnOnce(ClientResult<R>) + Send + 'static>>,
}

impl<R: Send + 'static> PendingCompletion<R> {
    fn new<F>(delivery: Arc<dyn DeliveryContext>, completion: F) -> Self
    where
        F: FnOnce(ClientResult<R>) + Send + 'static,
    {
        Self {
            delivery,
            completion: Some(Box::new(completion)),
        }
    }

    fn complete(mut self, result: ClientResult<R>) {
        self.deliver(result);
    }

    fn deliver(&mut self, result: ClientResult<R>) {
        if let Some(completion) = self.completion.take() {
            self.delivery.deliver(Box::new(move || completion(result)));
        }
    }
}

impl<R: Send + 'static> Drop for PendingCompletion<R> {
    fn drop(&mut self) {
        if self.completion.is_some() {
            warn!("{TRANSPORT_DROPPED_MESSAGE}");
            self.deliver(Err(ClientError::Unknown(TRANSPORT_DROPPED_MESSAGE.to_string())));
        }
    }
}

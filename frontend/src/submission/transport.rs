use async_trait::async_trait;
use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

use forms::{interpret_response, Endpoint, SubmissionRequest, SubmitError, Transport};

/// JSON `POST` through `fetch`, raced against the endpoint timeout.
pub struct BrowserTransport {
    endpoint: Endpoint,
}

impl BrowserTransport {
    pub fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }
}

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: &SubmissionRequest) -> Result<(), SubmitError> {
        log::info!("Posting {} to {}", request.form_id(), self.endpoint.url());
        let request = Request::post(self.endpoint.url())
            .header("Accept", "application/json")
            .json(request)
            .map_err(|e| SubmitError::Unreachable(e.to_string()))?;

        let exchange = async move {
            let response = request
                .send()
                .await
                .map_err(|e| SubmitError::Unreachable(e.to_string()))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| SubmitError::Unreachable(e.to_string()))?;
            interpret_response(status, &body)
        };

        let timeout = self.endpoint.timeout();
        let timer = TimeoutFuture::new(timeout.as_millis().min(u32::MAX as u128) as u32);
        match select(Box::pin(exchange), Box::pin(timer)).await {
            Either::Left((outcome, _)) => outcome,
            Either::Right(_) => Err(SubmitError::TimedOut(timeout)),
        }
    }
}

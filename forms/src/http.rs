//! reqwest transport for native callers.

use async_trait::async_trait;

use crate::config::Endpoint;
use crate::error::SubmitError;
use crate::payload::SubmissionRequest;
use crate::transport::{interpret_response, Transport};

pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Endpoint,
}

impl HttpTransport {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: &SubmissionRequest) -> Result<(), SubmitError> {
        tracing::debug!("POST {}", self.endpoint.url());
        let response = self
            .client
            .post(self.endpoint.url())
            .header("Accept", "application/json")
            .json(request)
            .timeout(self.endpoint.timeout())
            .send()
            .await
            .map_err(|e| self.network_error(e))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.network_error(e))?;
        interpret_response(status, &body)
    }
}

impl HttpTransport {
    fn network_error(&self, e: reqwest::Error) -> SubmitError {
        if e.is_timeout() {
            SubmitError::TimedOut(self.endpoint.timeout())
        } else {
            SubmitError::Unreachable(e.to_string())
        }
    }
}

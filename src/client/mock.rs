//! Mock transport for testing
//!
//! Lets unit tests drive the resource APIs without a server: queue the
//! responses the "server" should give, then inspect the captured requests.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::transport::{ApiRequest, Transport};
use crate::error::ApiError;

/// Mock transport for testing.
///
/// Responses are consumed in FIFO order. Clones share state, so keep a clone
/// around after handing one to the client.
///
/// # Example
/// ```ignore
/// let transport = MockTransport::new().with_body(r#"{"id":"54","responseMessage":"ok"}"#);
/// let client = ZapiClient::new(transport.clone());
///
/// client.create_cycle(&Cycle::default()).await?;
/// assert_eq!(transport.call_count().await, 1);
/// ```
#[derive(Clone, Default)]
pub struct MockTransport {
    /// Queued responses, consumed one per request
    responses: Arc<Mutex<VecDeque<Result<String, ApiError>>>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response body.
    pub fn with_body(self, body: impl Into<String>) -> Self {
        self.push(Ok(body.into()));
        self
    }

    /// Queue an error response.
    pub fn with_error(self, error: ApiError) -> Self {
        self.push(Err(error));
        self
    }

    fn push(&self, response: Result<String, ApiError>) {
        self.responses
            .try_lock()
            .expect("mock transport is not shared yet while being configured")
            .push_back(response);
    }

    /// All requests received so far
    pub async fn captured_requests(&self) -> Vec<ApiRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// The most recent request, if any
    pub async fn last_request(&self) -> Option<ApiRequest> {
        self.captured_requests.lock().await.last().cloned()
    }

    /// Number of requests that reached the transport
    pub async fn call_count(&self) -> usize {
        self.captured_requests.lock().await.len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: ApiRequest) -> Result<String, ApiError> {
        self.captured_requests.lock().await.push(request);

        self.responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no mock response queued".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_responses_are_consumed_in_order() {
        let transport = MockTransport::new()
            .with_body("first")
            .with_error(ApiError::Forbidden);

        let request = ApiRequest::get("/x").unwrap();
        assert_eq!(transport.execute(request.clone()).await.unwrap(), "first");
        assert_eq!(
            transport.execute(request.clone()).await.unwrap_err(),
            ApiError::Forbidden
        );
        assert!(matches!(
            transport.execute(request).await.unwrap_err(),
            ApiError::Network(_)
        ));
        assert_eq!(transport.call_count().await, 3);
    }

    #[tokio::test]
    async fn test_clones_share_captured_requests() {
        let transport = MockTransport::new().with_body("{}");
        let clone = transport.clone();

        clone.execute(ApiRequest::get("/y").unwrap()).await.unwrap();

        let last = transport.last_request().await.unwrap();
        assert_eq!(last.path, "/y");
    }
}

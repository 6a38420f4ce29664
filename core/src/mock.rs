//! In-memory `ApiService` for view-model tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::oneshot;

use crate::client::ApiService;
use crate::error::ApiError;
use crate::request::Request;

enum MockResult {
    Ready(Result<Value, ApiError>),
    Pending(oneshot::Receiver<Result<Value, ApiError>>),
}

/// Serves queued results in call order and records requested paths.
///
/// Results are stored as JSON and decoded into whatever the request
/// expects, so a mismatched fixture fails the same way a bad body would.
#[derive(Default)]
pub(crate) struct MockApiService {
    results: Mutex<VecDeque<MockResult>>,
    received: Mutex<Vec<String>>,
}

impl MockApiService {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_result(&self, value: impl serde::Serialize) {
        let value = serde_json::to_value(value).unwrap();
        self.push(MockResult::Ready(Ok(value)));
    }

    pub(crate) fn add_error(&self, error: ApiError) {
        self.push(MockResult::Ready(Err(error)));
    }

    /// Queue a result that resolves only when the returned sender fires.
    pub(crate) fn add_pending(&self) -> oneshot::Sender<Result<Value, ApiError>> {
        let (tx, rx) = oneshot::channel();
        self.push(MockResult::Pending(rx));
        tx
    }

    pub(crate) fn received_requests(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }

    fn push(&self, result: MockResult) {
        self.results.lock().unwrap().push_back(result);
    }
}

impl ApiService for MockApiService {
    async fn perform_request<T>(&self, request: &Request<T>) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Send,
    {
        self.received.lock().unwrap().push(request.path.clone());
        let next = self.results.lock().unwrap().pop_front();

        let value = match next {
            Some(MockResult::Ready(result)) => result?,
            Some(MockResult::Pending(rx)) => rx
                .await
                .map_err(|_| ApiError::NetworkError("mock sender dropped".to_string()))??,
            None => {
                return Err(ApiError::NetworkError(format!(
                    "no more mock results for {}",
                    request.path
                )))
            }
        };

        serde_json::from_value(value).map_err(|e| ApiError::DecodingError(e.to_string()))
    }
}

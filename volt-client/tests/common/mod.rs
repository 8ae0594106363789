//! Recording mock for the HttpClient boundary
//!
//! Queues canned JSON responses in FIFO order and records every issued
//! request, so tests can assert both what was sent and that client-side
//! guards issued no network call at all.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use volt_client::{ClientError, ClientResult, HttpClient};

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: &'static str,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

#[derive(Debug, Default)]
struct Inner {
    responses: VecDeque<Result<serde_json::Value, (u16, String)>>,
    calls: Vec<RecordedCall>,
}

#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    inner: Arc<Mutex<Inner>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful JSON response
    pub fn enqueue(&self, value: serde_json::Value) {
        self.inner.lock().unwrap().responses.push_back(Ok(value));
    }

    /// Queue a non-2xx rejection
    pub fn enqueue_error(&self, status: u16, message: &str) {
        self.inner
            .lock()
            .unwrap()
            .responses
            .push_back(Err((status, message.to_string())));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.inner.lock().unwrap().calls.len()
    }

    fn dispatch<T: DeserializeOwned>(
        &self,
        method: &'static str,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> ClientResult<T> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(RecordedCall {
            method,
            path: path.to_string(),
            body,
        });
        match inner.responses.pop_front() {
            Some(Ok(value)) => serde_json::from_value(value)
                .map_err(|e| ClientError::InvalidResponse(e.to_string())),
            Some(Err((status, message))) => Err(ClientError::Api { status, message }),
            None => Err(ClientError::InvalidResponse(format!(
                "no mock response queued for {method} {path}"
            ))),
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.dispatch("GET", path, None)
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let body = serde_json::to_value(body)?;
        self.dispatch("POST", path, Some(body))
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.dispatch("POST", path, None)
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let body = serde_json::to_value(body)?;
        self.dispatch("PUT", path, Some(body))
    }

    async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.dispatch("PUT", path, None)
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.dispatch("DELETE", path, None)
    }
}

/// Minimal booking JSON as the backend answers it
pub fn booking_json(id: i64, status: &str, start: &str) -> serde_json::Value {
    serde_json::json!({
        "bookingId": id,
        "bookingStatus": status,
        "startTime": start,
        "endTime": null,
        "totalPrice": 250000.0,
        "vehicleId": 3,
        "stationId": 1,
        "userId": 42
    })
}

//! Test doubles for code built on this crate.
//!
//! `StubTransport` stands in for the network: it replays queued responses in
//! order and keeps a copy of every request it was asked to send.
//! `MemorySink` collects the logging decorator's output in memory.
//!
//! Both implement their traits through shared references, so a test can hand
//! `&stub` to a service and keep inspecting `stub` afterwards.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use crate::error::{Result, ServiceError};
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::logging::LogSink;

#[derive(Debug, Default)]
pub struct StubTransport {
    responses: Mutex<VecDeque<HttpResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `response` to be returned by a later `send`.
    pub fn enqueue(&self, response: HttpResponse) {
        lock(&self.responses).push_back(response);
    }

    /// Every request sent so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        lock(&self.requests).clone()
    }

    /// Bodies of the requests sent so far, skipping requests without one.
    pub fn request_contents(&self) -> Vec<String> {
        lock(&self.requests)
            .iter()
            .filter_map(|req| req.body.clone())
            .collect()
    }
}

impl Transport for StubTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let response = lock(&self.responses).pop_front().ok_or_else(|| {
            ServiceError::Transport("no responses are queued for this request".to_string())
        })?;
        lock(&self.requests).push(request);
        Ok(response)
    }
}

#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        lock(&self.messages).clone()
    }
}

impl LogSink for MemorySink {
    fn log(&self, message: &str) {
        lock(&self.messages).push(message.to_string());
    }
}

// A poisoned lock only means another test thread panicked mid-push; the
// recorded data is still usable.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

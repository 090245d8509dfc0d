//! A transport decorator that logs every exchange passing through it.
//!
//! # Design
//! `LoggingTransport` wraps another `Transport` and exposes the same
//! contract. Where the log lines go is decided by the `LogSink` handed in at
//! construction; the default sink forwards to `tracing` at debug level.
//! Bodies are owned strings, so logging only borrows them and the response
//! reaches the caller intact.

use crate::error::Result;
use crate::http::{HttpRequest, HttpResponse, Transport};

/// Destination for the decorator's log lines. Logging cannot fail.
pub trait LogSink {
    fn log(&self, message: &str);
}

impl<S: LogSink + ?Sized> LogSink for &S {
    fn log(&self, message: &str) {
        (**self).log(message)
    }
}

/// Emits each line as a `tracing` debug event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, message: &str) {
        tracing::debug!(target: "services_core::http", "{message}");
    }
}

/// Logs the request (and its body, if any) before forwarding, then the
/// response (and its body, if any) after the inner transport returns.
#[derive(Debug, Clone)]
pub struct LoggingTransport<T, S = TracingSink> {
    inner: T,
    sink: S,
}

impl<T: Transport> LoggingTransport<T> {
    pub fn new(inner: T) -> Self {
        Self::with_sink(inner, TracingSink)
    }
}

impl<T: Transport, S: LogSink> LoggingTransport<T, S> {
    pub fn with_sink(inner: T, sink: S) -> Self {
        Self { inner, sink }
    }
}

impl<T: Transport, S: LogSink> Transport for LoggingTransport<T, S> {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.sink.log(&format!("Request: {request}"));
        if let Some(body) = &request.body {
            self.sink.log(&format!("Request content: {body}"));
        }

        let response = self.inner.send(request)?;

        self.sink.log(&format!("Response: {response}"));
        if let Some(body) = &response.body {
            self.sink.log(&format!("Response content: {body}"));
        }
        Ok(response)
    }
}

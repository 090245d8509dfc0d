//! HTTP exchange types and the `Transport` contract.
//!
//! # Design
//! Requests and responses are plain data. Services build `HttpRequest`
//! values and hand them to a `Transport`, which performs the round-trip and
//! returns an `HttpResponse`. Anything that can send a request is a
//! transport: the real network client, the logging decorator wrapped around
//! it, or a stub that replays canned responses in tests.
//!
//! All fields use owned types so a response can be moved through a chain of
//! transports without borrowing from the wire.

use std::fmt;
use std::sync::Arc;

use crate::error::Result;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// A request with no headers and no body.
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Attach a JSON body and the matching content type.
    pub fn with_json_body(mut self, body: String) -> Self {
        self.headers
            .push(("content-type".to_string(), "application/json".to_string()));
        self.body = Some(body);
        self
    }
}

/// One-line summary used by the logging decorator: method, target and headers.
impl fmt::Display for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.url)?;
        write_headers(f, &self.headers)
    }
}

/// An HTTP response described as plain data.
///
/// `body` is `None` when the server sent no content (e.g. 204).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpResponse {
    /// A response with the given status and no headers or body.
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Case-insensitive header lookup. Returns the first match.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Take the body out of the response.
    ///
    /// Consumes the response, so the body can only be extracted once. A
    /// response without content yields `None` rather than an error.
    pub fn into_body(self) -> Option<String> {
        self.body
    }
}

/// Status line plus headers, e.g. `204 No Content headers=[]`.
impl fmt::Display for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status, reason_phrase(self.status))?;
        write_headers(f, &self.headers)
    }
}

/// Canonical reason phrase for a status code, or `Unknown`.
pub fn reason_phrase(status: u16) -> &'static str {
    ::http::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or("Unknown")
}

/// Symbolic name for a status code, e.g. `NotFound` or `InternalServerError`.
///
/// Built from the canonical reason phrase with its words run together.
/// Codes without a registered phrase render as the bare number.
pub fn status_name(status: u16) -> String {
    let Some(reason) = ::http::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
    else {
        return status.to_string();
    };
    reason
        .split([' ', '-'])
        .flat_map(|word| {
            let mut chars = word.chars().filter(char::is_ascii_alphanumeric);
            chars
                .next()
                .map(|first| first.to_ascii_uppercase())
                .into_iter()
                .chain(chars)
        })
        .collect()
}

fn write_headers(f: &mut fmt::Formatter<'_>, headers: &[(String, String)]) -> fmt::Result {
    f.write_str(" headers=[")?;
    for (i, (name, value)) in headers.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{name}: {value}")?;
    }
    f.write_str("]")
}

/// Sends one request and returns the server's response.
///
/// Implementations report non-2xx statuses as ordinary responses; only a
/// failure to complete the exchange is an `Err`.
pub trait Transport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        (**self).send(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_body_sets_content_type() {
        let req = HttpRequest::new(HttpMethod::Post, "http://localhost/foo")
            .with_json_body("{}".to_string());
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        assert_eq!(req.body.as_deref(), Some("{}"));
    }

    #[test]
    fn request_display_summarizes_method_target_and_headers() {
        let req = HttpRequest::new(HttpMethod::Post, "http://localhost/foo")
            .with_json_body("{}".to_string());
        assert_eq!(
            req.to_string(),
            "POST http://localhost/foo headers=[content-type: application/json]"
        );
    }

    #[test]
    fn response_display_includes_reason_phrase() {
        assert_eq!(HttpResponse::new(204).to_string(), "204 No Content headers=[]");
        assert_eq!(HttpResponse::new(599).to_string(), "599 Unknown headers=[]");
    }

    #[test]
    fn status_name_joins_reason_words() {
        assert_eq!(status_name(404), "NotFound");
        assert_eq!(status_name(500), "InternalServerError");
        assert_eq!(status_name(207), "MultiStatus");
        assert_eq!(status_name(418), "ImATeapot");
    }

    #[test]
    fn status_name_falls_back_to_number() {
        assert_eq!(status_name(599), "599");
        assert_eq!(status_name(1000), "1000");
    }

    #[test]
    fn success_range_is_2xx() {
        assert!(HttpResponse::new(200).is_success());
        assert!(HttpResponse::new(204).is_success());
        assert!(!HttpResponse::new(199).is_success());
        assert!(!HttpResponse::new(301).is_success());
        assert!(!HttpResponse::new(500).is_success());
    }

    #[test]
    fn into_body_without_content_is_none() {
        assert_eq!(HttpResponse::new(204).into_body(), None);
    }

    #[test]
    fn into_body_returns_content() {
        let response = HttpResponse::new(200).with_body("hello");
        assert_eq!(response.into_body().as_deref(), Some("hello"));
    }

    #[test]
    fn header_lookup_ignores_case() {
        let response = HttpResponse::new(201).with_header("Location", "/foo/1");
        assert_eq!(response.header("location"), Some("/foo/1"));
        assert_eq!(response.header("etag"), None);
    }
}

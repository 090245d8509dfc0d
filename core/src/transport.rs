//! Network transport backed by `ureq`.
//!
//! # Design
//! The agent is configured so 4xx/5xx responses come back as data rather
//! than `Err`; deciding what a status means is the validator's job. An empty
//! response body is reported as absent. GET and DELETE go out without a body,
//! so a request of either kind that carries one is refused before dialing.

use ureq::{Agent, RequestBuilder};

use crate::error::{Result, ServiceError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};

#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let result = match (method, body) {
            (HttpMethod::Get, None) => with_headers(self.agent.get(&url), &headers).call(),
            (HttpMethod::Delete, None) => with_headers(self.agent.delete(&url), &headers).call(),
            (HttpMethod::Get | HttpMethod::Delete, Some(_)) => {
                return Err(ServiceError::Transport(format!(
                    "{method} request to {url} cannot carry a body"
                )));
            }
            (HttpMethod::Post, Some(body)) => {
                with_headers(self.agent.post(&url), &headers).send(body.as_bytes())
            }
            (HttpMethod::Post, None) => with_headers(self.agent.post(&url), &headers).send_empty(),
        };
        let mut response = result.map_err(|e| ServiceError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body: (!body.is_empty()).then_some(body),
        })
    }
}

fn with_headers<B>(mut builder: RequestBuilder<B>, headers: &[(String, String)]) -> RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

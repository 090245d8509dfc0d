//! Client for the Foo CRUD service.
//!
//! # Design
//! Each operation is split into a `build_*` method that produces an
//! `HttpRequest` without touching the network, and the operation itself,
//! which sends the request through the transport and validates the response
//! via `ServiceClient`. The `build_*` half keeps request shapes testable on
//! their own.

use crate::error::{Result, ServiceError};
use crate::http::{HttpMethod, HttpRequest, Transport};
use crate::response::ServiceClient;
use crate::types::Foo;

/// Base address used when none is configured. Real deployments override it.
pub const DEFAULT_FOO_BASE_URL: &str = "http://localhost.fiddler";

/// Create/read/delete operations against the Foo collection.
pub trait FooApi {
    /// Retrieve the `Foo` with the given ID.
    fn get_by_id(&self, id: i32) -> Result<Foo>;

    /// Retrieve every `Foo` the service holds, in the order it returns them.
    fn get_all(&self) -> Result<Vec<Foo>>;

    /// Create or update `foo`. The response body is discarded.
    fn save(&self, foo: &Foo) -> Result<()>;

    /// Delete the `Foo` with the given ID.
    fn delete(&self, id: i32) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct FooService<T> {
    transport: T,
    base_url: String,
}

impl<T: Transport> FooService<T> {
    pub fn new(transport: T) -> Self {
        Self::with_base_url(transport, DEFAULT_FOO_BASE_URL)
    }

    pub fn with_base_url(transport: T, base_url: &str) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/foo", self.base_url)
    }

    /// Targets the collection path; `id` is not part of the request.
    pub fn build_get_by_id(&self, _id: i32) -> HttpRequest {
        HttpRequest::new(HttpMethod::Get, self.collection_url())
    }

    pub fn build_get_all(&self) -> HttpRequest {
        HttpRequest::new(HttpMethod::Get, self.collection_url())
    }

    pub fn build_save(&self, foo: &Foo) -> Result<HttpRequest> {
        let body = serde_json::to_string(foo).map_err(ServiceError::Encode)?;
        Ok(HttpRequest::new(HttpMethod::Post, self.collection_url()).with_json_body(body))
    }

    pub fn build_delete(&self, id: i32) -> HttpRequest {
        HttpRequest::new(HttpMethod::Delete, format!("{}/{id}", self.collection_url()))
    }
}

impl<T: Transport> ServiceClient for FooService<T> {
    type Transport = T;

    fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: Transport> FooApi for FooService<T> {
    fn get_by_id(&self, id: i32) -> Result<Foo> {
        let content = self.get_response_content(self.build_get_by_id(id))?;
        Ok(serde_json::from_str(content.as_deref().unwrap_or_default())?)
    }

    fn get_all(&self) -> Result<Vec<Foo>> {
        let content = self.get_response_content(self.build_get_all())?;
        Ok(serde_json::from_str(content.as_deref().unwrap_or_default())?)
    }

    fn save(&self, foo: &Foo) -> Result<()> {
        let response = self.get_response(self.build_save(foo)?)?;
        tracing::debug!(
            id = foo.id,
            location = response.header("location"),
            "saved foo"
        );
        Ok(())
    }

    fn delete(&self, id: i32) -> Result<()> {
        self.get_response(self.build_delete(id))?;
        Ok(())
    }
}

//! Thin clients for the Foo CRUD service and the public weather API.
//!
//! # Overview
//! Services build `HttpRequest` values, send them through a `Transport`,
//! validate the status and decode the JSON body. Transports compose:
//! `LoggingTransport` wraps any other transport and logs each exchange.
//!
//! # Design
//! - `Transport` is the only I/O seam. `UreqTransport` talks to the network;
//!   `testing::StubTransport` replays canned responses.
//! - `ServiceClient` carries the shared send-validate-extract logic, so each
//!   service only builds requests and decodes bodies.
//! - Every failure surfaces as a `ServiceError`; nothing is retried.

pub mod client;
pub mod error;
pub mod http;
pub mod logging;
pub mod response;
pub mod testing;
pub mod transport;
pub mod types;
pub mod weather;

pub use client::{FooApi, FooService, DEFAULT_FOO_BASE_URL};
pub use error::{Result, ServiceError};
pub use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use logging::{LogSink, LoggingTransport, TracingSink};
pub use response::{ensure_success, ServiceClient};
pub use transport::UreqTransport;
pub use types::{Foo, Weather, WeatherData};
pub use weather::{WeatherApi, WeatherService, DEFAULT_WEATHER_BASE_URL};

//! Synchronous JSON-over-HTTP request executor.
//!
//! # Overview
//! One call sends one request: the body is encoded as JSON, the request is
//! sent with a blocking client, and the response body is decoded into a type
//! the caller chooses. Nothing is cached, retried or shared between calls.
//!
//! # Design
//! - The pipeline is `build_request` (encode, validate, set headers), then
//!   `Transport::send` (the only I/O), then `decode_response` (status
//!   policy, result format). Each stage reports its own `ApiError` variant.
//! - The result format is a type parameter (`Json<T>`, `Text`, `Raw`,
//!   `Discard`), so raw-text handling is opted into explicitly.
//! - `content-type: application/json` is applied after caller headers on
//!   body-bearing requests and always wins.
//! - The status code is ignored unless the config asks for
//!   `StatusPolicy::RequireSuccess`.

pub mod client;
pub mod config;
pub mod error;
pub mod executor;
pub mod format;
pub mod http;
pub mod transport;

pub use client::{build_request, decode_response, Headers};
pub use config::{ExecutorConfig, StatusPolicy};
pub use error::{ApiError, Stage};
pub use executor::{execute, execute_json, execute_text, RequestExecutor};
pub use format::{Discard, Json, Raw, ResponseFormat, Text};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, UreqTransport};

//! The network step: turn an `HttpRequest` into an `HttpResponse`.
//!
//! # Design
//! `Transport` is the only seam that performs I/O. `UreqTransport` is the
//! default and the only one the crate ships; tests substitute an in-memory
//! transport to check what would have been sent.
//!
//! The ureq agent is configured with `http_status_as_error(false)` so 4xx/5xx
//! responses come back as data and the executor's `StatusPolicy` decides
//! what they mean.

use ureq::http::{HeaderName, HeaderValue};

use crate::config::ExecutorConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes a fully built request and reads the whole response body.
///
/// Implementations must return `ApiError::Send` when no response arrives and
/// `ApiError::Read` when the body cannot be read to the end. The response
/// body must be released before `send` returns, on every path.
pub trait Transport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).send(request)
    }
}

/// Blocking transport backed by a `ureq::Agent`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
    max_response_bytes: Option<u64>,
}

impl UreqTransport {
    pub fn new(config: &ExecutorConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(config.timeout)
            .build()
            .new_agent();
        Self {
            agent,
            max_response_bytes: config.max_response_bytes,
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(&ExecutorConfig::default())
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = request.url.as_str();
        let headers = request.headers.as_slice();

        let result = match request.method {
            HttpMethod::Get => with_headers(self.agent.get(url), headers).call(),
            HttpMethod::Delete => with_headers(self.agent.delete(url), headers).call(),
            HttpMethod::Head => with_headers(self.agent.head(url), headers).call(),
            HttpMethod::Options => with_headers(self.agent.options(url), headers).call(),
            HttpMethod::Post => send_body(with_headers(self.agent.post(url), headers), request),
            HttpMethod::Put => send_body(with_headers(self.agent.put(url), headers), request),
            HttpMethod::Patch => send_body(with_headers(self.agent.patch(url), headers), request),
        };
        let mut response = result.map_err(|e| ApiError::Send(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response
            .body_mut()
            .with_config()
            .limit(self.max_response_bytes.unwrap_or(u64::MAX))
            .read_to_vec()
            .map_err(|e| ApiError::Read(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

fn send_body(
    builder: ureq::RequestBuilder<ureq::typestate::WithBody>,
    request: &HttpRequest,
) -> Result<ureq::http::Response<ureq::Body>, ureq::Error> {
    match &request.body {
        Some(body) => builder.send(body.as_bytes()),
        None => builder.send_empty(),
    }
}

/// Check that a header can be put on the wire.
pub(crate) fn validate_header(name: &str, value: &str) -> Result<(), ApiError> {
    HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| ApiError::Build(format!("invalid header name {name:?}: {e}")))?;
    HeaderValue::from_str(value)
        .map_err(|e| ApiError::Build(format!("invalid value for header {name:?}: {e}")))?;
    Ok(())
}

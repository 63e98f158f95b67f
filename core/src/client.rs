//! Request building and response decoding, without any I/O.
//!
//! # Design
//! The executor pipeline is split the same way a request crosses the
//! network: `build_request` covers body encoding, URL and header validation
//! and header application; `decode_response` covers the status policy and
//! the result format. The transport in between is the only part that talks
//! to a socket, so both halves are deterministic and tested on their own.

use std::collections::HashMap;

use serde::Serialize;
use ureq::http::Uri;
use url::Url;

use crate::config::StatusPolicy;
use crate::error::ApiError;
use crate::format::ResponseFormat;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::validate_header;

/// Caller-supplied request headers. Names are matched case-insensitively.
pub type Headers = HashMap<String, String>;

pub const CONTENT_TYPE: &str = "content-type";
pub const APPLICATION_JSON: &str = "application/json";

/// Build the request for `method` and `url`.
///
/// For POST, PUT and PATCH the body is serialized to JSON and
/// `content-type: application/json` is set after the caller headers, so a
/// caller-supplied `Content-Type` is replaced. For every other method `body`
/// is ignored and no `Content-Type` is added.
///
/// If `headers` holds two names that differ only in case, which one survives
/// is unspecified.
pub fn build_request<B>(
    method: HttpMethod,
    url: &str,
    headers: &Headers,
    body: &B,
) -> Result<HttpRequest, ApiError>
where
    B: Serialize + ?Sized,
{
    let body = if method.carries_body() {
        Some(serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?)
    } else {
        None
    };

    let mut request = HttpRequest {
        method,
        url: parse_url(url)?,
        headers: Vec::with_capacity(headers.len() + 1),
        body,
    };

    for (name, value) in headers {
        validate_header(name, value)?;
        request.set_header(name, value);
    }
    if request.body.is_some() {
        request.set_header(CONTENT_TYPE, APPLICATION_JSON);
    }

    Ok(request)
}

/// Turn a received response into the caller's result.
///
/// Under `StatusPolicy::Ignore` the status code is not looked at.
pub fn decode_response<F>(response: HttpResponse, policy: StatusPolicy) -> Result<F::Output, ApiError>
where
    F: ResponseFormat,
{
    if policy == StatusPolicy::RequireSuccess && !response.is_success() {
        return Err(ApiError::HttpStatus {
            status: response.status,
            body: String::from_utf8_lossy(&response.body).into_owned(),
        });
    }
    F::decode(response.body)
}

/// Validate `raw` and return it unchanged.
///
/// The URL goes out exactly as the caller wrote it: no dot-segment removal,
/// no host lower-casing, no added trailing slash. It must parse both as a
/// URL and as an HTTP request target.
fn parse_url(raw: &str) -> Result<String, ApiError> {
    let url = Url::parse(raw).map_err(|e| ApiError::Build(format!("invalid URL: {e}")))?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ApiError::Build(format!(
                "unsupported URL scheme {other:?} in {}",
                redact(&url)
            )))
        }
    }
    if !url.has_host() {
        return Err(ApiError::Build(format!("URL {} has no host", redact(&url))));
    }
    Uri::try_from(raw).map_err(|e| ApiError::Build(format!("invalid request target {}: {e}", redact(&url))))?;
    Ok(raw.to_string())
}

/// `raw` with any username and password removed, for logs and error messages.
pub fn redact_url(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(url) => redact(&url),
        Err(_) => "<invalid url>".to_string(),
    }
}

fn redact(url: &Url) -> String {
    let mut url = url.clone();
    // Fails only for URLs that cannot carry credentials anyway.
    let _ = url.set_username("");
    let _ = url.set_password(None);
    url.into()
}

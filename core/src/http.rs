//! HTTP transport types shared by the request builder and the transports.
//!
//! # Design
//! Requests and responses are described as plain data. `build_request`
//! produces an `HttpRequest` without touching the network, a `Transport`
//! turns it into an `HttpResponse`, and `decode_response` turns that into the
//! caller's result. Each step can be tested on its own.
//!
//! All fields use owned types (`String`, `Vec`) so values can be handed to a
//! transport or stored in a test fixture without lifetime concerns.

use strum::{Display, EnumString};

/// HTTP method for a request.
///
/// Parses from and displays as the upper-case method name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl HttpMethod {
    /// Returns `true` if requests with this method carry a JSON body.
    ///
    /// GET, DELETE, HEAD and OPTIONS never do; the body value passed to the
    /// executor is ignored for them.
    pub fn carries_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

/// An HTTP request described as plain data.
///
/// Built by [`build_request`](crate::build_request); the URL and every
/// header have already been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Look up a header value by name, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Set a header, replacing any existing header with the same name.
    pub(crate) fn set_header(&mut self, name: &str, value: &str) {
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.to_string()));
    }
}

/// An HTTP response described as plain data.
///
/// Produced by a [`Transport`](crate::Transport) after the body has been
/// read to the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Look up a header value by name, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}
